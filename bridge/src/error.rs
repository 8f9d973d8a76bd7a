//! Error types for the custody bridge contract

use std::fmt;

use cosmwasm_std::{StdError, Uint128};
use thiserror::Error;

/// The role a caller failed to hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Owner,
    Manager,
    CustodyToken,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Owner => write!(f, "owner"),
            Role::Manager => write!(f, "manager"),
            Role::CustodyToken => write!(f, "custody token"),
        }
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    // ========================================================================
    // Authorization Errors
    // ========================================================================

    #[error("Unauthorized: only the {role} can perform this action")]
    Unauthorized { role: Role },

    // ========================================================================
    // Amount & Funds Errors
    // ========================================================================

    #[error("Insufficient funds: available {available}, required {required}")]
    InsufficientFunds {
        available: Uint128,
        required: Uint128,
    },

    #[error("Invalid amount: {reason}")]
    InvalidAmount { reason: String },
}
