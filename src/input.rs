//! Reading share payloads from a file or stdin.

use std::path::Path;

use tokio::io::AsyncReadExt;

use shareinfo_core::error::{AppError, ErrorKind};

/// Read the whole payload. `None` or `-` reads stdin.
pub async fn read_payload(path: Option<&Path>) -> Result<String, AppError> {
    let (payload, origin) = match path {
        Some(path) if path != Path::new("-") => {
            tracing::debug!(path = %path.display(), "Reading share payload from file");
            let payload = tokio::fs::read_to_string(path).await.map_err(|e| {
                AppError::with_source(
                    ErrorKind::Io,
                    format!("Failed to read '{}': {e}", path.display()),
                    e,
                )
            })?;
            (payload, format!("'{}'", path.display()))
        }
        _ => {
            tracing::debug!("Reading share payload from stdin");
            let mut buf = String::new();
            tokio::io::stdin().read_to_string(&mut buf).await?;
            (buf, "stdin".to_string())
        }
    };

    ensure_not_blank(payload, &origin)
}

fn ensure_not_blank(payload: String, origin: &str) -> Result<String, AppError> {
    if payload.trim().is_empty() {
        return Err(AppError::io(format!("No share payload in {origin}")));
    }
    Ok(payload)
}
