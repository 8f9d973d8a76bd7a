//! Execute handlers for the custody bridge contract.
//!
//! - `admin` - Manager rotation and event suppression
//! - `release` - Manager-authorized payouts from custody
//! - `deposit` - Push (token fallback) and pull (receive tokens) deposits
//! - `mapping` - Self-service payout address mapping

mod admin;
mod deposit;
mod mapping;
mod release;

pub use admin::*;
pub use deposit::*;
pub use mapping::*;
pub use release::*;
