//! Share domain value objects.

pub mod coerce;
pub mod info;
pub mod kind;
pub mod payload;
pub mod permission;
pub mod summary;

pub use info::ShareInfo;
pub use kind::ShareType;
pub use payload::{parse_shares, parse_shares_str};
pub use permission::SharePermissions;
pub use summary::ShareSummary;
