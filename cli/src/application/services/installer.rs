//! Application service — host package and tool installation.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.
//! Every operation is its own failure boundary: errors become failure lines
//! on the reporter and a `false`/summary return, never an `Err`.

use std::path::Path;

use anyhow::{Result, bail};

use crate::application::ports::{CommandRunner, Downloader, PackageQuery, ProgressReporter};
use crate::domain::{BatchSummary, CommandLine, Package, ProvisionConfig};

/// Installs packages, the vendor tool, the support share, and the
/// notification tool described by a [`ProvisionConfig`].
pub struct PackageInstaller<'a, R, Q, D, P> {
    config: &'a ProvisionConfig,
    runner: &'a R,
    query: &'a Q,
    downloader: &'a D,
    reporter: &'a P,
}

impl<'a, R, Q, D, P> PackageInstaller<'a, R, Q, D, P>
where
    R: CommandRunner,
    Q: PackageQuery,
    D: Downloader,
    P: ProgressReporter,
{
    #[must_use]
    pub fn new(
        config: &'a ProvisionConfig,
        runner: &'a R,
        query: &'a Q,
        downloader: &'a D,
        reporter: &'a P,
    ) -> Self {
        Self {
            config,
            runner,
            query,
            downloader,
            reporter,
        }
    }

    #[must_use]
    pub fn config(&self) -> &ProvisionConfig {
        self.config
    }

    /// Ensure every name in `names` is present, installing what is missing.
    ///
    /// Names also listed in `python_names` are probed and installed as Python
    /// modules. A failed query counts as "absent"; a failed install is
    /// reported and the batch moves on.
    pub async fn ensure_packages(&self, names: &[String], python_names: &[String]) -> BatchSummary {
        let mut summary = BatchSummary::default();
        for package in Package::classify(names, python_names) {
            let present = self.query.is_present(&package).await.unwrap_or(false);
            if present {
                self.reporter
                    .success(&format!("{} is already installed.", package.name));
                summary.present.push(package.name);
                continue;
            }

            self.reporter
                .failure(&format!("{} is not installed.", package.name));
            self.reporter.step(&format!("Installing {}...", package.name));
            match run_checked(self.runner, &package.install_command()).await {
                Ok(()) => {
                    self.reporter.success(&format!(
                        "Success! {} installed successfully!",
                        package.name
                    ));
                    summary.installed.push(package.name);
                }
                Err(e) => {
                    self.reporter
                        .failure(&format!("Failed to install {}: {e:#}", package.name));
                    summary.failed.push(package.name);
                }
            }
        }
        summary
    }

    /// Fetch `url` into `dest`. Returns `false` on any failure.
    pub async fn download_tool_archive(&self, url: &str, dest: &Path) -> bool {
        let file = dest.display();
        match self.downloader.download(url, dest).await {
            Ok(_) => {
                self.reporter.success(&format!("Success! {file} downloaded."));
                true
            }
            Err(e) => {
                self.reporter
                    .failure(&format!("Failed to download {file} from {url}: {e:#}"));
                false
            }
        }
    }

    /// Convert and install the downloaded RPM with `alien`.
    pub async fn install_tool_from_archive(&self) -> bool {
        let tool = &self.config.tool;
        match run_checked(self.runner, &tool.install_command()).await {
            Ok(()) => {
                self.reporter.success(&format!(
                    "Success! {} installed successfully!",
                    tool.archive_file
                ));
                true
            }
            Err(e) => {
                self.reporter
                    .failure(&format!("Failed to install {}: {e:#}", tool.archive_file));
                false
            }
        }
    }

    /// Create the mount point and mount the support share.
    ///
    /// Every command runs even if an earlier one failed; the step succeeds
    /// only if all of them do, and exactly one status line is reported.
    pub async fn mount_support_share(&self) -> bool {
        let share = &self.config.support_share;
        let mut failed = Vec::new();
        for cmd in share.mount_commands() {
            if let Err(e) = run_checked(self.runner, &cmd).await {
                failed.push(format!("{e:#}"));
            }
        }

        if failed.is_empty() {
            self.reporter.success(&format!(
                "Success! {} mounted at {}.",
                share.source, share.mount_point
            ));
            true
        } else {
            self.reporter.failure(&format!(
                "Failed to mount {} at {}: {}",
                share.source,
                share.mount_point,
                failed.join("; ")
            ));
            false
        }
    }

    /// Clone the notification tool and run its privileged install target.
    pub async fn install_notification_tool(&self) -> bool {
        let notify = &self.config.notify;
        self.reporter.warn(&format!(
            "Note: git may ask for your username/password for {}.",
            notify.repo
        ));

        let result = async {
            run_checked(self.runner, &notify.clone_command()).await?;
            run_checked(self.runner, &notify.build_command()).await
        }
        .await;

        match result {
            Ok(()) => {
                self.reporter.success(&format!(
                    "Success! {} installed successfully!",
                    notify.checkout_dir
                ));
                true
            }
            Err(e) => {
                self.reporter.failure(&format!(
                    "Failed to install {}: {e:#}",
                    notify.checkout_dir
                ));
                false
            }
        }
    }
}

/// Run `cmd` with inherited stdio and fail on a non-zero exit.
async fn run_checked(runner: &impl CommandRunner, cmd: &CommandLine) -> Result<()> {
    let status = runner.run_status(&cmd.program, &cmd.arg_refs()).await?;
    if !status.success() {
        bail!("`{cmd}` exited with {status}");
    }
    Ok(())
}
