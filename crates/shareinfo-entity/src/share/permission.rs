//! Share permission bitmask.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::BitOr;
use std::str::FromStr;

use shareinfo_core::AppError;

/// Permissions granted by a share, as the API's integer bitmask.
///
/// Bits outside the known flags are kept so the value round-trips.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SharePermissions(u32);

impl SharePermissions {
    /// Read the shared item.
    pub const READ: Self = Self(1);
    /// Modify the shared item.
    pub const UPDATE: Self = Self(2);
    /// Create items inside a shared folder.
    pub const CREATE: Self = Self(4);
    /// Delete the shared item or items inside it.
    pub const DELETE: Self = Self(8);
    /// Re-share with others.
    pub const SHARE: Self = Self(16);
    /// Every known flag.
    pub const ALL: Self = Self(31);

    const NAMED: [(Self, &'static str); 5] = [
        (Self::READ, "read"),
        (Self::UPDATE, "update"),
        (Self::CREATE, "create"),
        (Self::DELETE, "delete"),
        (Self::SHARE, "share"),
    ];

    /// No permissions.
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Wrap a raw bitmask.
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    /// Return the raw bitmask.
    pub const fn bits(&self) -> u32 {
        self.0
    }

    /// Check if no bits are set.
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Check if every bit of `other` is set.
    pub const fn contains(&self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn can_read(&self) -> bool {
        self.contains(Self::READ)
    }

    pub fn can_update(&self) -> bool {
        self.contains(Self::UPDATE)
    }

    pub fn can_create(&self) -> bool {
        self.contains(Self::CREATE)
    }

    pub fn can_delete(&self) -> bool {
        self.contains(Self::DELETE)
    }

    pub fn can_share(&self) -> bool {
        self.contains(Self::SHARE)
    }

    /// Names of the known flags that are set, lowest bit first.
    pub fn names(&self) -> Vec<&'static str> {
        Self::NAMED
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, name)| *name)
            .collect()
    }
}

impl BitOr for SharePermissions {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl fmt::Display for SharePermissions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names = self.names();
        if names.is_empty() {
            write!(f, "none")
        } else {
            write!(f, "{}", names.join("|"))
        }
    }
}

impl FromStr for SharePermissions {
    type Err = AppError;

    /// Accepts a plain integer, `none`, or pipe-separated flag names
    /// such as `read|share`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(bits) = trimmed.parse::<u32>() {
            return Ok(Self(bits));
        }
        if trimmed.eq_ignore_ascii_case("none") {
            return Ok(Self::empty());
        }

        trimmed.split('|').try_fold(Self::empty(), |acc, part| {
            let part = part.trim().to_lowercase();
            Self::NAMED
                .iter()
                .find(|(_, name)| *name == part)
                .map(|(flag, _)| acc | *flag)
                .ok_or_else(|| {
                    AppError::validation(format!(
                        "Invalid share permission: '{part}'. Expected one of: read, update, create, delete, share"
                    ))
                })
        })
    }
}
