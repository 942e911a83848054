//! Convenience result type alias for shareinfo.

use crate::error::AppError;

/// A specialized `Result` type for shareinfo operations.
pub type AppResult<T> = Result<T, AppError>;
