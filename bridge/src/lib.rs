//! Custody Bridge Contract - Custodial Relay Bridge for CW20 Tokens
//!
//! This contract holds custody of a single CW20 token on behalf of a bridge
//! whose counter-ledger is operated externally.
//!
//! # Deposit Flow
//! 1. User either sends tokens through the CW20 `Send` hook (push) or approves
//!    the bridge and calls `ReceiveTokens` (pull)
//! 2. The bridge records the deposit against the user's mapped payout address
//!    and emits a `transfer_to` event, unless events are being suppressed
//! 3. The relayer observes the event and pays out on the counter-ledger
//!
//! # Release Flow
//! 1. A transfer is observed on the counter-ledger by the relayer
//! 2. The manager calls `AcceptTransfer` to release custody funds
//!
//! # Roles
//! - Owner (instantiator): configures event suppression
//! - Manager: releases custody funds and rotates itself
//! - Custody token: the only caller allowed to push deposit notifications

pub mod contract;
mod custody;
pub mod error;
mod execute;
pub mod msg;
mod query;
pub mod state;

pub use crate::error::{ContractError, Role};
pub use crate::state::{Config, DepositRecord};
