//! Application service — copy SSH material from the bastion host.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.

use std::path::PathBuf;

use anyhow::{Result, bail};

use crate::application::ports::{CommandRunner, ProgressReporter, SecretSource};
use crate::domain::{CredentialSet, CredentialTransfer};

/// Per-file result of [`CredentialCopier::copy_keys`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyResult {
    pub file_name: String,
    pub ok: bool,
}

/// Fetches each [`CredentialTransfer`] into the local SSH directory via scp.
pub struct CredentialCopier<'a, R, S, P> {
    credentials: &'a CredentialSet,
    /// `None` when the home directory could not be resolved.
    ssh_dir: Option<PathBuf>,
    runner: &'a R,
    secrets: &'a S,
    reporter: &'a P,
}

impl<'a, R, S, P> CredentialCopier<'a, R, S, P>
where
    R: CommandRunner,
    S: SecretSource,
    P: ProgressReporter,
{
    #[must_use]
    pub fn new(
        credentials: &'a CredentialSet,
        ssh_dir: Option<PathBuf>,
        runner: &'a R,
        secrets: &'a S,
        reporter: &'a P,
    ) -> Self {
        Self {
            credentials,
            ssh_dir,
            runner,
            secrets,
            reporter,
        }
    }

    /// Copy every transfer, reporting each one. A failed copy never stops
    /// the ones after it.
    ///
    /// With a bastion password the copy runs under `sshpass -e` and the
    /// password travels in `SSHPASS`, never in argv.
    pub async fn copy_keys(&self) -> Vec<CopyResult> {
        let password = match self.secrets.bastion_password() {
            Ok(password) => password,
            Err(e) => {
                self.reporter.warn(&format!(
                    "Cannot read bastion password ({e:#}); scp will prompt or use keys."
                ));
                None
            }
        };

        let mut results = Vec::with_capacity(self.credentials.transfers.len());
        for transfer in &self.credentials.transfers {
            let ok = match self.copy_one(transfer, password.as_deref()).await {
                Ok(()) => {
                    self.reporter
                        .success(&format!("Succeeded to copy {}.", transfer.file_name));
                    true
                }
                Err(e) => {
                    self.reporter
                        .failure(&format!("Failed to copy {}: {e:#}", transfer.file_name));
                    false
                }
            };
            results.push(CopyResult {
                file_name: transfer.file_name.clone(),
                ok,
            });
        }
        results
    }

    async fn copy_one(&self, transfer: &CredentialTransfer, password: Option<&str>) -> Result<()> {
        let Some(ssh_dir) = &self.ssh_dir else {
            bail!("cannot determine home directory");
        };
        let remote = transfer.remote_spec(&self.credentials.bastion);
        let dest = format!("{}/", ssh_dir.display());
        let scp_args = [
            "-o",
            "StrictHostKeyChecking=no",
            "-r",
            remote.as_str(),
            dest.as_str(),
        ];

        let status = match password {
            Some(password) => {
                let mut args = vec!["-e", "scp"];
                args.extend(scp_args);
                self.runner
                    .run_status_with_env("sshpass", &args, &[("SSHPASS", password)])
                    .await?
            }
            None => self.runner.run_status("scp", &scp_args).await?,
        };
        if !status.success() {
            bail!("scp exited with {status}");
        }
        Ok(())
    }
}
