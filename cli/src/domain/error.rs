//! Typed domain error enums.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All error types implement `thiserror::Error` and convert to `anyhow::Error`
//! via the `?` operator.

use thiserror::Error;

/// Errors raised while applying configuration overrides.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid URL: {0}\n\nExpected an http:// or https:// URL.")]
    InvalidUrl(String),

    #[error("Cannot derive a file name from URL: {0}")]
    NoArchiveName(String),

    #[error("Cannot derive a checkout directory from repository: {0}")]
    NoCheckoutDir(String),

    #[error("Invalid support share: {0}\n\nExpected <host>:/<export-path>.")]
    InvalidShare(String),

    #[error("Mount point must be an absolute path: {0}")]
    RelativeMountPoint(String),

    #[error("Invalid bastion: {0}\n\nExpected [user@]host.")]
    InvalidBastion(String),
}
