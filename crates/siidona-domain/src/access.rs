//! Capability levels and the pure role check behind the authorization gate.

use crate::user::UserRole;

/// Minimum authorization level an operation requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// Any resolved session.
    Authenticated,
    /// A resolved session whose role is [`UserRole::Administrator`].
    Administrator,
}

/// Why a capability check failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Denial {
    #[error("no session")]
    Unauthorized,
    #[error("insufficient role")]
    Forbidden,
}

impl Capability {
    /// Check a resolved role (or its absence) against this capability.
    ///
    /// `None` means no session resolved and always yields [`Denial::Unauthorized`].
    pub fn admit(self, role: Option<UserRole>) -> Result<(), Denial> {
        let role = role.ok_or(Denial::Unauthorized)?;
        match (self, role) {
            (Self::Authenticated, UserRole::User | UserRole::Administrator) => Ok(()),
            (Self::Administrator, UserRole::Administrator) => Ok(()),
            (Self::Administrator, UserRole::User) => Err(Denial::Forbidden),
        }
    }
}
