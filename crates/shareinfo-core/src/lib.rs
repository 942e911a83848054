//! # shareinfo-core
//!
//! Core crate for shareinfo. Contains the configuration schema and the
//! unified error system shared by the entity crate and the CLI.
//!
//! This crate has **no** internal dependencies on other shareinfo crates.

pub mod config;
pub mod error;
pub mod result;

pub use error::AppError;
pub use result::AppResult;
