//! Decoding of share API response payloads.
//!
//! Responses come either wrapped in the OCS envelope
//! (`{"ocs": {"meta": {...}, "data": ...}}`) or bare. `data` is a single
//! share object, an array of them, or `null`/`[]` when there are none.

use serde_json::{Map, Value};

use shareinfo_core::{AppError, AppResult};

use super::info::ShareInfo;

/// Parse a JSON document into share records.
pub fn parse_shares_str(input: &str) -> AppResult<Vec<ShareInfo>> {
    let value: Value = serde_json::from_str(input)?;
    parse_shares(value)
}

/// Extract share records from a decoded payload.
pub fn parse_shares(value: Value) -> AppResult<Vec<ShareInfo>> {
    let data = unwrap_envelope(value)?;

    let shares = match data {
        Value::Null => Vec::new(),
        Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                ShareInfo::from_value(item)
                    .map_err(|e| AppError::validation(format!("Share #{index}: {}", e.message)))
            })
            .collect::<AppResult<Vec<_>>>()?,
        object @ Value::Object(_) => vec![ShareInfo::from_value(object)?],
        other => {
            return Err(AppError::validation(format!(
                "Expected a share object or an array of shares, got {other}"
            )));
        }
    };

    tracing::debug!(count = shares.len(), "Decoded share payload");
    Ok(shares)
}

fn unwrap_envelope(value: Value) -> AppResult<Value> {
    let mut root = match value {
        Value::Object(map) if is_envelope(&map) => map,
        other => return Ok(other),
    };

    let Some(Value::Object(mut ocs)) = root.remove("ocs") else {
        return Ok(Value::Null);
    };

    check_meta(&ocs)?;
    Ok(ocs.remove("data").unwrap_or(Value::Null))
}

/// An envelope has an `ocs` object carrying `meta` or `data`. A share
/// record that merely has an unknown `ocs` key is not one.
fn is_envelope(root: &Map<String, Value>) -> bool {
    root.get("ocs")
        .and_then(Value::as_object)
        .is_some_and(|ocs| ocs.contains_key("meta") || ocs.contains_key("data"))
}

fn check_meta(ocs: &Map<String, Value>) -> AppResult<()> {
    let Some(meta) = ocs.get("meta").and_then(Value::as_object) else {
        return Ok(());
    };

    match meta.get("status").and_then(Value::as_str) {
        Some(status) if !status.eq_ignore_ascii_case("ok") => {
            let message = meta
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or("no message");
            let code = meta.get("statuscode").cloned().unwrap_or(Value::Null);
            tracing::warn!(status, %code, reason = message, "Share API reported failure");
            Err(AppError::validation(format!(
                "Share API returned status '{status}' ({code}): {message}"
            )))
        }
        _ => Ok(()),
    }
}
