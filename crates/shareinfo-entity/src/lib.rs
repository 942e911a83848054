//! # shareinfo-entity
//!
//! Value objects for share records returned by an OCS-style file-sharing
//! API. A raw record is a loosely-typed JSON object; [`ShareInfo`] wraps it,
//! drops bookkeeping keys the API leaks, and exposes typed accessors that
//! never fail.

pub mod share;

pub use share::{
    ShareInfo, SharePermissions, ShareSummary, ShareType, parse_shares, parse_shares_str,
};
