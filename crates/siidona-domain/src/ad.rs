//! Ad moderation states.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Moderation status of an ad.
///
/// Every ad starts as `Pending`. Only `Approved` ads are publicly visible.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl AdStatus {
    /// Storage value for the `ads.status` column.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }

    /// Parse a stored or query-string status. Returns `None` for unknown values.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(Self::Pending),
            "approved" => Some(Self::Approved),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }

    pub fn is_public(self) -> bool {
        matches!(self, Self::Approved)
    }
}

impl fmt::Display for AdStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An administrator's verdict on an ad.
///
/// Both verdicts apply from any current status; there is no guard on the
/// source state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModerationAction {
    Approve,
    Reject,
}

impl ModerationAction {
    /// Status the ad ends up in after this action.
    pub fn target(self) -> AdStatus {
        match self {
            Self::Approve => AdStatus::Approved,
            Self::Reject => AdStatus::Rejected,
        }
    }
}
