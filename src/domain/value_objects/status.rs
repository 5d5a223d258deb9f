//! Status enumerations for books and patron accounts

use std::fmt;

use serde::{Deserialize, Serialize};

/// Availability of a catalog entry, derived from its copy counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookStatus {
    /// At least one copy is on the shelf
    #[default]
    Available,
    /// Every copy is checked out
    Borrowed,
}

impl BookStatus {
    pub fn from_available(available_copies: u32) -> Self {
        if available_copies > 0 {
            BookStatus::Available
        } else {
            BookStatus::Borrowed
        }
    }
}

impl fmt::Display for BookStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookStatus::Available => write!(f, "AVAILABLE"),
            BookStatus::Borrowed => write!(f, "BORROWED"),
        }
    }
}

/// Standing of a patron's membership
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountStatus {
    #[default]
    Active,
    Suspended,
}

impl AccountStatus {
    pub fn is_active(&self) -> bool {
        matches!(self, AccountStatus::Active)
    }
}

impl fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccountStatus::Active => write!(f, "ACTIVE"),
            AccountStatus::Suspended => write!(f, "SUSPENDED"),
        }
    }
}
