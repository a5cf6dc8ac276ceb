//! Infrastructure layer — concrete implementations of application port traits.
//!
//! This module contains all I/O-performing code: process execution, HTTP
//! downloads, and secret lookup.
//!
//! Imports from `crate::domain` and `crate::application::ports` are allowed.
//! Imports from `crate::commands` are forbidden.

pub mod command_runner;
pub mod http;
pub mod package_query;
pub mod secrets;

pub use command_runner::TokioCommandRunner;
pub use http::UreqDownloader;
pub use package_query::HostPackageQuery;
pub use secrets::EnvSecretSource;
