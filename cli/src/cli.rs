//! CLI argument parsing with clap derive

use std::path::PathBuf;

use anyhow::Result;
use clap::builder::FalseyValueParser;
use clap::{Args, Parser};

use crate::commands::provision::{self, ProvisionArgs};
use crate::domain::{ConfigOverrides, ProfileFlags};
use crate::output::OutputContext;

/// Provision hardware-lab VMs and laptops
#[derive(Parser)]
#[command(name = "labprep", version)]
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Perform operations for VM.
    #[arg(short, long)]
    pub vm: bool,

    /// Perform operations for laptop.
    #[arg(short, long)]
    pub laptop: bool,

    /// Perform package installation only.
    #[arg(short, long)]
    pub packages: bool,

    /// Perform suplogs installation only.
    #[arg(short, long)]
    pub suplogs: bool,

    /// Perform test (currently does nothing).
    #[arg(short, long)]
    pub test: bool,

    /// Perform hw-notify installation only.
    #[arg(short, long)]
    pub notify: bool,

    /// Print the planned steps without running them
    #[arg(long)]
    pub dry_run: bool,

    /// Suppress non-failure output
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, env = "NO_COLOR", value_parser = FalseyValueParser::new())]
    pub no_color: bool,

    #[command(flatten)]
    pub overrides: OverrideArgs,
}

/// Replacements for the built-in host defaults.
#[derive(Args, Default)]
#[command(next_help_heading = "Overrides")]
pub struct OverrideArgs {
    /// URL of the vendor RPM tool archive
    #[arg(long, env = "LABPREP_TOOL_URL", value_name = "URL")]
    pub tool_url: Option<String>,

    /// NFS support-log share as host:/path
    #[arg(long, env = "LABPREP_SUPPORT_SHARE", value_name = "HOST:/PATH")]
    pub support_share: Option<String>,

    /// Local mount point for the support-log share
    #[arg(long, env = "LABPREP_MOUNT_POINT", value_name = "DIR")]
    pub mount_point: Option<String>,

    /// Bastion host SSH material is copied from
    #[arg(long, env = "LABPREP_BASTION", value_name = "[USER@]HOST")]
    pub bastion: Option<String>,

    /// Git repository of the notification tool
    #[arg(long, env = "LABPREP_NOTIFY_REPO", value_name = "URL")]
    pub notify_repo: Option<String>,

    /// File whose first line is the bastion password
    /// (LABPREP_BASTION_PASSWORD takes precedence)
    #[arg(long, env = "LABPREP_BASTION_PASSWORD_FILE", value_name = "PATH")]
    pub password_file: Option<PathBuf>,
}

impl Cli {
    /// Execute the requested provisioning profiles.
    ///
    /// # Errors
    ///
    /// Returns an error only if an override fails validation. Failed
    /// provisioning steps are reported, not returned.
    pub async fn run(self) -> Result<()> {
        let ctx = OutputContext::new(self.no_color, self.quiet);
        let args = self.into_provision_args();
        provision::run(&ctx, &args).await
    }

    fn into_provision_args(self) -> ProvisionArgs {
        let OverrideArgs {
            tool_url,
            support_share,
            mount_point,
            bastion,
            notify_repo,
            password_file,
        } = self.overrides;
        ProvisionArgs {
            flags: ProfileFlags {
                vm: self.vm,
                laptop: self.laptop,
                packages: self.packages,
                suplogs: self.suplogs,
                test: self.test,
                notify: self.notify,
            },
            dry_run: self.dry_run,
            overrides: ConfigOverrides {
                tool_url,
                support_share,
                mount_point,
                bastion,
                notify_repo,
            },
            password_file,
        }
    }
}
