//! Error types for the hamnet library.
//!
//! All errors are represented by the [`HamnetError`] enum. Fatal load and
//! validation errors abort a run before any case is classified; the
//! [`HamnetError::CaseAborted`] variant carries the one row-level condition
//! that terminates a run, a non-binary value under the abort-on-error policy.
//!
//! # Examples
//!
//! ```
//! use hamnet::error::{HamnetError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(HamnetError::schema("prototype table has no feature columns"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for hamnet operations.
#[derive(Error, Debug)]
pub enum HamnetError {
    /// I/O errors (file operations).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Delimited-table structure errors (empty file, missing header, bad record).
    #[error("Table error: {0}")]
    Table(String),

    /// Prototype table contract violations.
    #[error("Prototype error: {0}")]
    Schema(String),

    /// Metadata table errors.
    #[error("Metadata error: {0}")]
    Metadata(String),

    /// Case table structure errors (missing id or feature columns).
    #[error("Case error: {0}")]
    Case(String),

    /// A case row failed bit mapping under the abort-on-error policy.
    #[error("Caso '{id}' (línea {line}): valores inválidos -> {detail}")]
    CaseAborted {
        /// Case identifier as resolved from the id column.
        id: String,
        /// 1-based line number in the case table.
        line: u64,
        /// Offending columns and raw values, `col='val'` pairs.
        detail: String,
    },

    /// JSON serialization errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic anyhow error.
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with HamnetError.
pub type Result<T> = std::result::Result<T, HamnetError>;

impl HamnetError {
    /// Create a new table error.
    pub fn table<S: Into<String>>(msg: S) -> Self {
        HamnetError::Table(msg.into())
    }

    /// Create a new prototype contract error.
    pub fn schema<S: Into<String>>(msg: S) -> Self {
        HamnetError::Schema(msg.into())
    }

    /// Create a new metadata error.
    pub fn metadata<S: Into<String>>(msg: S) -> Self {
        HamnetError::Metadata(msg.into())
    }

    /// Create a new case table error.
    pub fn case<S: Into<String>>(msg: S) -> Self {
        HamnetError::Case(msg.into())
    }
}
