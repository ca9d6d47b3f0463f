//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `AtcError` as one
//! variant via `From`, so a configuration failure surfaces unchanged at
//! whichever layer detected it.

use thiserror::Error;

/// The top-level error type for `atc-core`.
#[derive(Debug, Error, PartialEq)]
pub enum AtcError {
    /// A parameter value was rejected at construction time.  Fatal: the
    /// engine refuses to start.
    #[error("configuration error: {0}")]
    Config(String),
}

impl AtcError {
    pub(crate) fn config(field: &str, rule: &str) -> Self {
        AtcError::Config(format!("`{field}` {rule}"))
    }
}

/// Shorthand result type for `atc-core`.
pub type AtcResult<T> = Result<T, AtcError>;
