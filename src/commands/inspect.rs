//! Share inspection command.

use std::path::PathBuf;

use chrono::Utc;
use clap::Args;
use serde::Serialize;
use serde_json::{Map, Value};
use tabled::Tabled;

use crate::input;
use crate::output::{self, OutputFormat};
use shareinfo_core::config::AppConfig;
use shareinfo_core::error::AppError;
use shareinfo_entity::{ShareInfo, ShareSummary, parse_shares_str};

/// Arguments for the inspect command
#[derive(Debug, Args)]
pub struct InspectArgs {
    /// JSON file holding a share, a list of shares, or an OCS response; `-` or omitted reads stdin
    pub path: Option<PathBuf>,

    /// Also list keys that have no typed accessor
    #[arg(long)]
    pub include_unknown: bool,
}

/// Share display row for table output
#[derive(Debug, Serialize, Tabled)]
struct ShareRow {
    /// Share ID
    #[tabled(rename = "ID")]
    id: String,
    /// Share type
    #[tabled(rename = "Type")]
    kind: String,
    /// Recipient
    #[tabled(rename = "Shared with")]
    share_with: String,
    /// Path of the shared item
    #[tabled(rename = "Path")]
    path: String,
    /// Permission flags
    #[tabled(rename = "Permissions")]
    permissions: String,
    /// Expiry
    #[tabled(rename = "Expires")]
    expires: String,
    /// Public link
    #[tabled(rename = "Link")]
    link: String,
}

impl From<&ShareInfo> for ShareRow {
    fn from(share: &ShareInfo) -> Self {
        let kind = match (share.share_kind(), share.share_type()) {
            (Some(kind), _) => kind.to_string(),
            (None, Some(code)) => format!("unknown ({code})"),
            (None, None) => "-".to_string(),
        };
        let permissions = match (share.share_permissions(), share.permissions()) {
            (Some(perms), _) => format!("{perms} ({})", perms.bits()),
            (None, Some(raw)) => raw.to_string(),
            (None, None) => "-".to_string(),
        };

        Self {
            id: share_label(share),
            kind,
            share_with: or_dash(
                share
                    .share_with_display_name()
                    .or(share.share_with())
                    .map(str::to_owned),
            ),
            path: or_dash(share.path().map(str::to_owned)),
            permissions,
            expires: or_dash(share.expires_at().map(|at| at.to_rfc3339())),
            link: or_dash(share.link().map(str::to_owned)),
        }
    }
}

/// JSON output entry: the summary plus, on request, the unknown keys.
#[derive(Debug, Serialize)]
struct InspectedShare {
    #[serde(flatten)]
    summary: ShareSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    unknown: Option<Map<String, Value>>,
}

/// Execute the inspect command
pub async fn execute(
    args: &InspectArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let payload = input::read_payload(args.path.as_deref()).await?;
    let shares = parse_shares_str(&payload)?;
    let include_unknown = args.include_unknown || config.output.include_unknown;

    tracing::info!(count = shares.len(), include_unknown, "Inspecting shares");

    match format {
        OutputFormat::Table => print_share_table(&shares, include_unknown),
        OutputFormat::Json => {
            let entries: Vec<InspectedShare> = shares
                .iter()
                .map(|share| InspectedShare {
                    summary: share.summary(),
                    unknown: include_unknown.then(|| unknown_map(share)),
                })
                .collect();
            output::print_json(&entries);
        }
    }

    Ok(())
}

fn print_share_table(shares: &[ShareInfo], include_unknown: bool) {
    let rows: Vec<ShareRow> = shares.iter().map(ShareRow::from).collect();
    output::print_table(&rows);

    let now = Utc::now();
    for share in shares.iter().filter(|share| share.is_expired_at(now)) {
        output::print_warning(&format!("Share {} has expired", share_label(share)));
    }

    if include_unknown {
        for share in shares {
            let unknown = unknown_map(share);
            if unknown.is_empty() {
                continue;
            }
            println!();
            println!("Unknown keys of share {}:", share_label(share));
            for (key, value) in &unknown {
                output::print_kv(key, &render_value(value));
            }
        }
    }
}

fn unknown_map(share: &ShareInfo) -> Map<String, Value> {
    share
        .unknown_fields()
        .map(|(key, value)| (key.to_string(), value.clone()))
        .collect()
}

fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn share_label(share: &ShareInfo) -> String {
    or_dash(share.id().map(|id| id.to_string()))
}

fn or_dash(value: Option<String>) -> String {
    value.unwrap_or_else(|| "-".to_string())
}
