//! Flat snapshot of a share record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::info::ShareInfo;
use super::kind::ShareType;

/// Every typed accessor of a [`ShareInfo`], evaluated once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareSummary {
    pub id: Option<i64>,
    pub share_type: Option<i64>,
    pub share_kind: Option<ShareType>,
    pub share_with: Option<String>,
    pub share_with_display_name: Option<String>,
    pub path: Option<String>,
    pub permissions: Option<i64>,
    /// Permission flags rendered as `read|update|...`.
    pub permission_names: Option<String>,
    pub share_time: Option<DateTime<Utc>>,
    pub expiration: Option<i64>,
    pub expires_at: Option<DateTime<Utc>>,
    pub token: Option<String>,
    pub link: Option<String>,
    pub uid_owner: Option<String>,
    pub displayname_owner: Option<String>,
    pub name: Option<String>,
}

impl From<&ShareInfo> for ShareSummary {
    fn from(info: &ShareInfo) -> Self {
        Self {
            id: info.id(),
            share_type: info.share_type(),
            share_kind: info.share_kind(),
            share_with: info.share_with().map(str::to_owned),
            share_with_display_name: info.share_with_display_name().map(str::to_owned),
            path: info.path().map(str::to_owned),
            permissions: info.permissions(),
            permission_names: info.share_permissions().map(|p| p.to_string()),
            share_time: info.share_time_utc(),
            expiration: info.expiration(),
            expires_at: info.expires_at(),
            token: info.token().map(str::to_owned),
            link: info.link().map(str::to_owned),
            uid_owner: info.uid_owner().map(str::to_owned),
            displayname_owner: info.displayname_owner().map(str::to_owned),
            name: info.name().map(str::to_owned),
        }
    }
}
