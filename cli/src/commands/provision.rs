//! Provisioning command — wires infra into the dispatcher.

use std::path::PathBuf;

use anyhow::Result;

use crate::application::services::{CredentialCopier, PackageInstaller, plan_for, run_plan};
use crate::domain::{ConfigOverrides, ProfileFlags, ProvisionConfig, Step};
use crate::infra::{EnvSecretSource, HostPackageQuery, TokioCommandRunner, UreqDownloader};
use crate::output::{OutputContext, TerminalReporter};

/// Arguments for a provisioning run, already lifted out of clap.
#[derive(Debug, Default)]
pub struct ProvisionArgs {
    pub flags: ProfileFlags,
    pub dry_run: bool,
    pub overrides: ConfigOverrides,
    pub password_file: Option<PathBuf>,
}

/// Run the provisioning profiles selected by `args.flags`.
///
/// # Errors
///
/// Returns an error if an override fails validation; nothing has run yet
/// at that point. Overrides are not validated when no profile flag is set.
pub async fn run(ctx: &OutputContext, args: &ProvisionArgs) -> Result<()> {
    let reporter = TerminalReporter::new(ctx);
    let Some(plan) = plan_for(&args.flags, &reporter) else {
        return Ok(());
    };
    let config = ProvisionConfig::with_overrides(&args.overrides)?;

    if args.dry_run {
        render_plan(ctx, &plan, &config);
        return Ok(());
    }

    let runner = TokioCommandRunner;
    let query = HostPackageQuery::new(&runner);
    let downloader = UreqDownloader::new(ctx.show_progress());
    let secrets = EnvSecretSource::new(args.password_file.clone());
    let ssh_dir = dirs::home_dir().map(|home| home.join(".ssh"));

    let installer = PackageInstaller::new(&config, &runner, &query, &downloader, &reporter);
    let copier = CredentialCopier::new(&config.credentials, ssh_dir, &runner, &secrets, &reporter);

    run_plan(&plan, &installer, &copier, &reporter).await;
    Ok(())
}

fn render_plan(ctx: &OutputContext, plan: &[Step], config: &ProvisionConfig) {
    if plan.is_empty() {
        return;
    }
    ctx.header("Planned steps (dry run):");
    for (i, &step) in plan.iter().enumerate() {
        ctx.info(&format!("{}. {}", i + 1, step.label()));
        for line in step_details(step, config) {
            ctx.info(&format!("     {line}"));
        }
    }
}

/// What `step` would do on this host, one line per action.
fn step_details(step: Step, config: &ProvisionConfig) -> Vec<String> {
    match step {
        Step::EnsurePackages => vec![config.packages.join(", ")],
        Step::DownloadToolArchive => {
            vec![format!("{} -> {}", config.tool.url, config.tool.archive_file)]
        }
        Step::InstallToolFromArchive => vec![config.tool.install_command().to_string()],
        Step::MountSupportShare => config
            .support_share
            .mount_commands()
            .iter()
            .map(ToString::to_string)
            .collect(),
        Step::CopyKeys => config
            .credentials
            .transfers
            .iter()
            .map(|t| format!("scp {} ~/.ssh/", t.remote_spec(&config.credentials.bastion)))
            .collect(),
        Step::InstallNotificationTool => vec![
            config.notify.clone_command().to_string(),
            config.notify.build_command().to_string(),
        ],
    }
}
