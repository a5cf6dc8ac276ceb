//! Flag-to-step composition.

/// Printed once when no profile flag is given.
pub const USAGE_REMINDER: &str = "Kindly provide a command line option for the script to execute.";

/// One provisioning operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    EnsurePackages,
    DownloadToolArchive,
    InstallToolFromArchive,
    MountSupportShare,
    CopyKeys,
    InstallNotificationTool,
}

impl Step {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::EnsurePackages => "ensure packages",
            Self::DownloadToolArchive => "download tool archive",
            Self::InstallToolFromArchive => "install tool from archive",
            Self::MountSupportShare => "mount support share",
            Self::CopyKeys => "copy SSH keys",
            Self::InstallNotificationTool => "install notification tool",
        }
    }
}

const VM_STEPS: &[Step] = &[
    Step::EnsurePackages,
    Step::DownloadToolArchive,
    Step::InstallToolFromArchive,
    Step::MountSupportShare,
    Step::CopyKeys,
    Step::InstallNotificationTool,
];
const LAPTOP_STEPS: &[Step] = &[Step::CopyKeys, Step::InstallNotificationTool];
const PACKAGES_STEPS: &[Step] = &[
    Step::EnsurePackages,
    Step::DownloadToolArchive,
    Step::InstallToolFromArchive,
];
const SUPLOGS_STEPS: &[Step] = &[Step::EnsurePackages, Step::MountSupportShare];
const NOTIFY_STEPS: &[Step] = &[Step::InstallNotificationTool];

/// Profile flags selected on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct ProfileFlags {
    pub vm: bool,
    pub laptop: bool,
    pub packages: bool,
    pub suplogs: bool,
    /// Accepted but has no steps.
    pub test: bool,
    pub notify: bool,
}

impl ProfileFlags {
    /// `true` when at least one flag, including `test`, is set.
    #[must_use]
    pub fn any(&self) -> bool {
        self.vm || self.laptop || self.packages || self.suplogs || self.test || self.notify
    }
}

/// Concatenate the step sequence of every set flag.
///
/// Order is vm, laptop, packages, suplogs, notify. Steps shared by two flags
/// run once per flag.
#[must_use]
pub fn build_plan(flags: &ProfileFlags) -> Vec<Step> {
    [
        (flags.vm, VM_STEPS),
        (flags.laptop, LAPTOP_STEPS),
        (flags.packages, PACKAGES_STEPS),
        (flags.suplogs, SUPLOGS_STEPS),
        (flags.notify, NOTIFY_STEPS),
    ]
    .into_iter()
    .filter(|(set, _)| *set)
    .flat_map(|(_, steps)| steps.iter().copied())
    .collect()
}
