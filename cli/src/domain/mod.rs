//! Domain layer — pure provisioning types, defaults, and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All functions are synchronous and take data in, returning data out.

pub mod command;
pub mod config;
pub mod error;
pub mod package;
pub mod plan;

pub use command::CommandLine;
pub use config::{
    ConfigOverrides, CredentialSet, CredentialTransfer, NotifyTool, ProvisionConfig, SupportShare,
    ToolArchive,
};
pub use error::ConfigError;
pub use package::{BatchSummary, Package, PackageKind};
pub use plan::{ProfileFlags, Step, USAGE_REMINDER, build_plan};
