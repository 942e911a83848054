//! Share record value object.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use shareinfo_core::{AppError, AppResult};

use super::coerce::coerce_int;
use super::kind::ShareType;
use super::permission::SharePermissions;
use super::summary::ShareSummary;

const ID: &str = "id";
const SHARE_TYPE: &str = "share_type";
const SHARE_WITH: &str = "share_with";
const SHARE_WITH_DISPLAY_NAME: &str = "share_with_displayname";
const PATH: &str = "path";
const PERMISSIONS: &str = "permissions";
const SHARE_TIME: &str = "stime";
const EXPIRATION: &str = "expiration";
const TOKEN: &str = "token";
const LINK: &str = "url";
const UID_OWNER: &str = "uid_file_owner";
const DISPLAYNAME_OWNER: &str = "displayname_file_owner";
const NAME: &str = "name";

/// Keys read by a typed accessor.
const KNOWN_KEYS: [&str; 13] = [
    ID,
    SHARE_TYPE,
    SHARE_WITH,
    SHARE_WITH_DISPLAY_NAME,
    PATH,
    PERMISSIONS,
    SHARE_TIME,
    EXPIRATION,
    TOKEN,
    LINK,
    UID_OWNER,
    DISPLAYNAME_OWNER,
    NAME,
];

/// A single share record as returned by the sharing API.
///
/// Construction drops [`ShareInfo::EXCLUDED_KEYS`] and keeps every other
/// key verbatim, including ones no accessor knows about. The record is
/// never mutated afterwards, so every accessor is a pure function of the
/// stored data. Accessors do not fail: an absent or unparsable field is
/// `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct ShareInfo {
    fields: Map<String, Value>,
}

impl ShareInfo {
    /// Keys the API includes that carry no information for consumers.
    pub const EXCLUDED_KEYS: [&'static str; 6] = [
        "item_type",
        "item_source",
        "file_source",
        "parent",
        "storage",
        "mail_send",
    ];

    /// Check if `key` is dropped on construction.
    pub fn is_excluded_key(key: &str) -> bool {
        Self::EXCLUDED_KEYS.contains(&key)
    }

    /// Wrap a raw record, dropping excluded keys.
    pub fn new(raw: Map<String, Value>) -> Self {
        let total = raw.len();
        let fields: Map<String, Value> = raw
            .into_iter()
            .filter(|(key, _)| {
                let excluded = Self::is_excluded_key(key);
                if excluded {
                    tracing::trace!(key = key.as_str(), "Dropping excluded share key");
                }
                !excluded
            })
            .collect();

        tracing::debug!(
            kept = fields.len(),
            dropped = total - fields.len(),
            "Constructed share record"
        );

        Self { fields }
    }

    /// Wrap an arbitrary JSON value, which must be an object.
    pub fn from_value(value: Value) -> AppResult<Self> {
        match value {
            Value::Object(map) => Ok(Self::new(map)),
            other => Err(AppError::validation(format!(
                "Share record must be a JSON object, got {}",
                json_type_name(&other)
            ))),
        }
    }

    /// Share ID.
    pub fn id(&self) -> Option<i64> {
        self.get_int(ID)
    }

    /// Raw share-type code. See [`ShareInfo::share_kind`] for the typed form.
    pub fn share_type(&self) -> Option<i64> {
        self.get_int(SHARE_TYPE)
    }

    /// Share type, if the code is one this crate knows.
    pub fn share_kind(&self) -> Option<ShareType> {
        self.share_type().and_then(ShareType::from_code)
    }

    /// User or group the item is shared with.
    pub fn share_with(&self) -> Option<&str> {
        self.get_str(SHARE_WITH)
    }

    /// Display name of the recipient.
    pub fn share_with_display_name(&self) -> Option<&str> {
        self.get_str(SHARE_WITH_DISPLAY_NAME)
    }

    /// Path of the shared item, relative to the owner's root.
    pub fn path(&self) -> Option<&str> {
        self.get_str(PATH)
    }

    /// Raw permission bitmask.
    pub fn permissions(&self) -> Option<i64> {
        self.get_int(PERMISSIONS)
    }

    /// Permission bitmask as flags. `None` when absent or negative.
    pub fn share_permissions(&self) -> Option<SharePermissions> {
        self.permissions()
            .and_then(|bits| u32::try_from(bits).ok())
            .map(SharePermissions::from_bits)
    }

    /// Creation time of the share, in seconds since the Unix epoch.
    pub fn share_time(&self) -> Option<i64> {
        self.get_int(SHARE_TIME)
    }

    /// Creation time of the share.
    pub fn share_time_utc(&self) -> Option<DateTime<Utc>> {
        self.share_time()
            .and_then(|secs| DateTime::from_timestamp(secs, 0))
    }

    /// Expiration as an integer. Zero means "no expiration" and is
    /// reported as `None`.
    pub fn expiration(&self) -> Option<i64> {
        self.get_int(EXPIRATION).filter(|value| *value != 0)
    }

    /// Expiration as a timestamp.
    ///
    /// The API reports expiration as `YYYY-MM-DD HH:MM:SS` (or a bare date);
    /// those are read as UTC. Anything else falls back to
    /// [`ShareInfo::expiration`] interpreted as Unix seconds.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        if let Some(Value::String(raw)) = self.fields.get(EXPIRATION) {
            if let Some(parsed) = parse_api_datetime(raw) {
                return Some(parsed);
            }
        }
        self.expiration()
            .and_then(|secs| DateTime::from_timestamp(secs, 0))
    }

    /// Check if the share has an expiry at or before `now`.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at().is_some_and(|expiry| expiry <= now)
    }

    /// Public link token.
    pub fn token(&self) -> Option<&str> {
        self.get_str(TOKEN)
    }

    /// Public link URL (stored under `url`).
    pub fn link(&self) -> Option<&str> {
        self.get_str(LINK)
    }

    /// User ID of the file owner.
    pub fn uid_owner(&self) -> Option<&str> {
        self.get_str(UID_OWNER)
    }

    /// Display name of the file owner.
    pub fn displayname_owner(&self) -> Option<&str> {
        self.get_str(DISPLAYNAME_OWNER)
    }

    /// Name of the share.
    pub fn name(&self) -> Option<&str> {
        self.get_str(NAME)
    }

    /// Flat snapshot of every typed accessor.
    pub fn summary(&self) -> ShareSummary {
        ShareSummary::from(self)
    }

    /// Raw stored value for `key`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// All stored fields.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Stored fields that no typed accessor reads.
    pub fn unknown_fields(&self) -> impl Iterator<Item = (&str, &Value)> + '_ {
        self.fields
            .iter()
            .filter(|(key, _)| !KNOWN_KEYS.contains(&key.as_str()))
            .map(|(key, value)| (key.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Unwrap into the stored fields.
    pub fn into_inner(self) -> Map<String, Value> {
        self.fields
    }

    fn get_int(&self, key: &str) -> Option<i64> {
        self.fields.get(key).and_then(coerce_int)
    }

    fn get_str(&self, key: &str) -> Option<&str> {
        match self.fields.get(key)? {
            Value::String(s) => Some(s.as_str()),
            Value::Null => None,
            other => {
                tracing::debug!(key, value = %other, "Share field is not a string");
                None
            }
        }
    }
}

impl From<Map<String, Value>> for ShareInfo {
    fn from(raw: Map<String, Value>) -> Self {
        Self::new(raw)
    }
}

impl From<ShareInfo> for Map<String, Value> {
    fn from(info: ShareInfo) -> Self {
        info.fields
    }
}

impl TryFrom<Value> for ShareInfo {
    type Error = AppError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_value(value)
    }
}

fn parse_api_datetime(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Some(dt.and_utc());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
