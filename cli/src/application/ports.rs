//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain` — never from `crate::infra`,
//! `crate::commands`, or `crate::output`.

use std::path::Path;
use std::process::{ExitStatus, Output};

use anyhow::Result;

use crate::domain::Package;

// ── Command Runner Port ───────────────────────────────────────────────────────

/// Abstracts process execution so infrastructure can be swapped or mocked.
///
/// None of the methods apply a timeout: a step blocks until the child exits.
#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    /// Run a program and capture its output.
    async fn run(&self, program: &str, args: &[&str]) -> Result<Output>;
    /// Run a program with inherited stdio and return only its exit status.
    ///
    /// Used for steps that may prompt (sudo, git credentials).
    async fn run_status(&self, program: &str, args: &[&str]) -> Result<ExitStatus>;
    /// Like [`CommandRunner::run_status`] with extra environment variables.
    async fn run_status_with_env(
        &self,
        program: &str,
        args: &[&str],
        env: &[(&str, &str)],
    ) -> Result<ExitStatus>;
}

// ── Capability Query Port ─────────────────────────────────────────────────────

/// Answers "is this package already on the host?".
#[allow(async_fn_in_trait)]
pub trait PackageQuery {
    /// Returns `Ok(false)` when the package is absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the query itself could not be performed.
    async fn is_present(&self, package: &Package) -> Result<bool>;
}

// ── Download Port ─────────────────────────────────────────────────────────────

/// HTTP GET of a single file to a local path.
#[allow(async_fn_in_trait)]
pub trait Downloader {
    /// Download `url` into `dest`, returning the number of bytes written.
    ///
    /// # Errors
    ///
    /// Returns an error on any transport, HTTP status, or filesystem failure.
    async fn download(&self, url: &str, dest: &Path) -> Result<u64>;
}

// ── Secret Port ───────────────────────────────────────────────────────────────

/// Supplies the bastion password without it ever living in source code.
pub trait SecretSource {
    /// `Ok(None)` means no password is configured and scp should use key
    /// authentication or prompt.
    ///
    /// # Errors
    ///
    /// Returns an error if a configured secret cannot be read.
    fn bastion_password(&self) -> Result<Option<String>>;
}

// ── Progress Reporting Port ───────────────────────────────────────────────────

/// Abstracts progress reporting so services can emit events without
/// depending on the Presentation layer. Sync trait — no async needed.
pub trait ProgressReporter {
    /// Emit an in-progress step message.
    fn step(&self, message: &str);
    /// Emit a success message.
    fn success(&self, message: &str);
    /// Emit a failure message.
    fn failure(&self, message: &str);
    /// Emit a warning message.
    fn warn(&self, message: &str);
}
