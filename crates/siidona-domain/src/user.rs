//! User domain types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Account role.
///
/// Storage format: text (`"user"` / `"admin"`).
/// There is no promote/demote operation; a role is fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    User,
    Administrator,
}

impl UserRole {
    /// Storage value for the `users.role` column.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Administrator => "admin",
        }
    }

    /// Parse a stored role. Returns `None` for unknown values.
    pub fn from_db(value: &str) -> Option<Self> {
        match value {
            "user" => Some(Self::User),
            "admin" => Some(Self::Administrator),
            _ => None,
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Minimum password length accepted at registration.
pub const MIN_PASSWORD_LEN: usize = 6;
