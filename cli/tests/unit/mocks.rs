//! Shared mock infrastructure for unit tests.
//!
//! Every mock records what it was asked to do so tests can assert on the
//! exact side effects a service attempted.

#![allow(clippy::expect_used)]

use std::collections::HashSet;
use std::os::unix::process::ExitStatusExt;
use std::path::Path;
use std::process::{ExitStatus, Output};
use std::sync::Mutex;

use anyhow::{Result, bail};
use labprep::application::ports::{
    CommandRunner, Downloader, PackageQuery, ProgressReporter, SecretSource,
};
use labprep::domain::Package;

// ── Output helpers ────────────────────────────────────────────────────────────

pub fn exit_status(code: i32) -> ExitStatus {
    ExitStatus::from_raw(code << 8)
}

// ── CommandRunner ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    pub program: String,
    pub args: Vec<String>,
    pub env: Vec<(String, String)>,
}

impl Call {
    pub fn rendered(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Records every call. A call whose rendered command line contains one of
/// `failing` exits 1; one containing a `spawn_errors` entry returns `Err`.
#[derive(Default)]
pub struct MockRunner {
    calls: Mutex<Vec<Call>>,
    failing: Vec<String>,
    spawn_errors: Vec<String>,
}

impl MockRunner {
    pub fn ok() -> Self {
        Self::default()
    }

    pub fn failing(patterns: &[&str]) -> Self {
        Self {
            failing: patterns.iter().map(|s| (*s).to_string()).collect(),
            ..Self::default()
        }
    }

    pub fn spawn_errors(patterns: &[&str]) -> Self {
        Self {
            spawn_errors: patterns.iter().map(|s| (*s).to_string()).collect(),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().expect("mutex poisoned").clone()
    }

    pub fn rendered(&self) -> Vec<String> {
        self.calls().iter().map(Call::rendered).collect()
    }

    fn record(&self, program: &str, args: &[&str], env: &[(&str, &str)]) -> Result<ExitStatus> {
        let call = Call {
            program: program.to_owned(),
            args: args.iter().map(|s| (*s).to_string()).collect(),
            env: env
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect(),
        };
        let line = call.rendered();
        self.calls.lock().expect("mutex poisoned").push(call);
        if self.spawn_errors.iter().any(|p| line.contains(p.as_str())) {
            bail!("failed to spawn {program}");
        }
        let code = i32::from(self.failing.iter().any(|p| line.contains(p.as_str())));
        Ok(exit_status(code))
    }
}

impl CommandRunner for MockRunner {
    async fn run(&self, program: &str, args: &[&str]) -> Result<Output> {
        let status = self.record(program, args, &[])?;
        Ok(Output {
            status,
            stdout: Vec::new(),
            stderr: Vec::new(),
        })
    }

    async fn run_status(&self, program: &str, args: &[&str]) -> Result<ExitStatus> {
        self.record(program, args, &[])
    }

    async fn run_status_with_env(
        &self,
        program: &str,
        args: &[&str],
        env: &[(&str, &str)],
    ) -> Result<ExitStatus> {
        self.record(program, args, env)
    }
}

// ── PackageQuery ──────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct MockQuery {
    present: HashSet<String>,
    errors: HashSet<String>,
    queried: Mutex<Vec<Package>>,
}

impl MockQuery {
    pub fn with_present(names: &[&str]) -> Self {
        Self {
            present: names.iter().map(|s| (*s).to_string()).collect(),
            ..Self::default()
        }
    }

    pub fn with_errors(names: &[&str]) -> Self {
        Self {
            errors: names.iter().map(|s| (*s).to_string()).collect(),
            ..Self::default()
        }
    }

    pub fn queried(&self) -> Vec<Package> {
        self.queried.lock().expect("mutex poisoned").clone()
    }
}

impl PackageQuery for MockQuery {
    async fn is_present(&self, package: &Package) -> Result<bool> {
        self.queried
            .lock()
            .expect("mutex poisoned")
            .push(package.clone());
        if self.errors.contains(&package.name) {
            bail!("query failed for {}", package.name);
        }
        Ok(self.present.contains(&package.name))
    }
}

// ── Downloader ────────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct MockDownloader {
    fail_with: Option<String>,
    calls: Mutex<Vec<(String, String)>>,
}

impl MockDownloader {
    pub fn ok() -> Self {
        Self::default()
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            fail_with: Some(msg.to_string()),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().expect("mutex poisoned").clone()
    }
}

impl Downloader for MockDownloader {
    async fn download(&self, url: &str, dest: &Path) -> Result<u64> {
        self.calls
            .lock()
            .expect("mutex poisoned")
            .push((url.to_string(), dest.display().to_string()));
        match &self.fail_with {
            Some(msg) => bail!("{msg}"),
            None => Ok(1024),
        }
    }
}

// ── SecretSource ──────────────────────────────────────────────────────────────

pub enum MockSecrets {
    None,
    Password(&'static str),
    Unreadable,
}

impl SecretSource for MockSecrets {
    fn bastion_password(&self) -> Result<Option<String>> {
        match self {
            Self::None => Ok(None),
            Self::Password(p) => Ok(Some((*p).to_string())),
            Self::Unreadable => bail!("cannot read /run/secrets/bastion"),
        }
    }
}

// ── ProgressReporter ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Step,
    Success,
    Failure,
    Warn,
}

#[derive(Default)]
pub struct RecordingReporter {
    events: Mutex<Vec<(Kind, String)>>,
}

impl RecordingReporter {
    pub fn events(&self) -> Vec<(Kind, String)> {
        self.events.lock().expect("mutex poisoned").clone()
    }

    pub fn messages(&self, kind: Kind) -> Vec<String> {
        self.events()
            .into_iter()
            .filter(|(k, _)| *k == kind)
            .map(|(_, m)| m)
            .collect()
    }

    fn push(&self, kind: Kind, message: &str) {
        self.events
            .lock()
            .expect("mutex poisoned")
            .push((kind, message.to_string()));
    }
}

impl ProgressReporter for RecordingReporter {
    fn step(&self, message: &str) {
        self.push(Kind::Step, message);
    }
    fn success(&self, message: &str) {
        self.push(Kind::Success, message);
    }
    fn failure(&self, message: &str) {
        self.push(Kind::Failure, message);
    }
    fn warn(&self, message: &str) {
        self.push(Kind::Warn, message);
    }
}

pub fn names(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}
