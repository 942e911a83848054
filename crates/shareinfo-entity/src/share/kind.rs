//! Share type enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use shareinfo_core::AppError;

/// Kind of share, as reported by the integer `share_type` code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShareType {
    /// Shared directly with another user.
    User,
    /// Shared with a group.
    Group,
    /// Accessible through a public link token.
    PublicLink,
    /// Shared with a guest account.
    Guest,
    /// Shared with a user on a federated server.
    Remote,
}

impl ShareType {
    /// Map an API share-type code to a variant.
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Self::User),
            1 => Some(Self::Group),
            3 => Some(Self::PublicLink),
            4 => Some(Self::Guest),
            6 => Some(Self::Remote),
            _ => None,
        }
    }

    /// Return the API share-type code.
    pub fn code(&self) -> i64 {
        match self {
            Self::User => 0,
            Self::Group => 1,
            Self::PublicLink => 3,
            Self::Guest => 4,
            Self::Remote => 6,
        }
    }

    /// Return the share type as a snake_case string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Group => "group",
            Self::PublicLink => "public_link",
            Self::Guest => "guest",
            Self::Remote => "remote",
        }
    }
}

impl fmt::Display for ShareType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ShareType {
    type Err = AppError;

    /// Accepts either the snake_case name or the numeric code.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(code) = trimmed.parse::<i64>() {
            return Self::from_code(code)
                .ok_or_else(|| AppError::validation(format!("Unknown share type code: {code}")));
        }

        match trimmed.to_lowercase().as_str() {
            "user" => Ok(Self::User),
            "group" => Ok(Self::Group),
            "public_link" | "link" => Ok(Self::PublicLink),
            "guest" => Ok(Self::Guest),
            "remote" => Ok(Self::Remote),
            _ => Err(AppError::validation(format!(
                "Invalid share type: '{s}'. Expected one of: user, group, public_link, guest, remote"
            ))),
        }
    }
}
