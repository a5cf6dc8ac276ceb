//! Application service — turn profile flags into a step plan and run it.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.

use std::path::Path;

use crate::application::ports::{
    CommandRunner, Downloader, PackageQuery, ProgressReporter, SecretSource,
};
use crate::application::services::credentials::CredentialCopier;
use crate::application::services::installer::PackageInstaller;
use crate::domain::{ProfileFlags, Step, USAGE_REMINDER, build_plan};

/// Outcome of each executed step, in execution order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    pub outcomes: Vec<(Step, bool)>,
}

impl RunReport {
    #[must_use]
    pub fn failed(&self) -> usize {
        self.outcomes.iter().filter(|(_, ok)| !ok).count()
    }
}

/// Resolve the plan for `flags`.
///
/// With no flag set, reports the usage reminder once and returns `None`.
pub fn plan_for(flags: &ProfileFlags, reporter: &impl ProgressReporter) -> Option<Vec<Step>> {
    if !flags.any() {
        reporter.failure(USAGE_REMINDER);
        return None;
    }
    Some(build_plan(flags))
}

/// Run `plan` step by step. A failed step never stops the next one.
pub async fn run_plan<R, Q, D, S, P>(
    plan: &[Step],
    installer: &PackageInstaller<'_, R, Q, D, P>,
    copier: &CredentialCopier<'_, R, S, P>,
    reporter: &P,
) -> RunReport
where
    R: CommandRunner,
    Q: PackageQuery,
    D: Downloader,
    S: SecretSource,
    P: ProgressReporter,
{
    let mut report = RunReport::default();
    for &step in plan {
        reporter.step(&format!("{}...", capitalize(step.label())));
        let config = installer.config();
        let ok = match step {
            Step::EnsurePackages => installer
                .ensure_packages(&config.packages, &config.python_packages)
                .await
                .is_success(),
            Step::DownloadToolArchive => {
                installer
                    .download_tool_archive(&config.tool.url, Path::new(&config.tool.archive_file))
                    .await
            }
            Step::InstallToolFromArchive => installer.install_tool_from_archive().await,
            Step::MountSupportShare => installer.mount_support_share().await,
            Step::CopyKeys => copier.copy_keys().await.iter().all(|r| r.ok),
            Step::InstallNotificationTool => installer.install_notification_tool().await,
        };
        report.outcomes.push((step, ok));
    }

    if !plan.is_empty() {
        match report.failed() {
            0 => reporter.success("Provisioning complete."),
            n => reporter.warn(&format!("{n} of {} steps reported failures.", plan.len())),
        }
    }
    report
}

/// Resolve and run the plan for `flags`.
pub async fn dispatch<R, Q, D, S, P>(
    flags: &ProfileFlags,
    installer: &PackageInstaller<'_, R, Q, D, P>,
    copier: &CredentialCopier<'_, R, S, P>,
    reporter: &P,
) -> RunReport
where
    R: CommandRunner,
    Q: PackageQuery,
    D: Downloader,
    S: SecretSource,
    P: ProgressReporter,
{
    let Some(plan) = plan_for(flags, reporter) else {
        return RunReport::default();
    };
    run_plan(&plan, installer, copier, reporter).await
}

fn capitalize(label: &str) -> String {
    let mut chars = label.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}
