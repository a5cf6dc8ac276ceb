//! Provisioning defaults and the validated overrides applied on top of them.
//!
//! Pure functions only — no I/O, no async, no filesystem access.

use anyhow::Result;

use crate::domain::command::CommandLine;
use crate::domain::error::ConfigError;

// ── Defaults ─────────────────────────────────────────────────────────────────

pub const DEFAULT_PACKAGES: &[&str] = &[
    "python3-pip",
    "tmux",
    "ipmitool",
    "smartmontools",
    "rpm",
    "screen",
    "alien",
    "python3-venv",
    "sshpass",
    "nfs-common",
    "pexpect",
    "isoweek",
    "httplib2",
    "vim",
    "libpci",
];

/// Entries of [`DEFAULT_PACKAGES`] that are Python modules, not apt packages.
pub const DEFAULT_PYTHON_PACKAGES: &[&str] = &["pexpect", "isoweek", "httplib2", "libpci"];

pub const DEFAULT_TOOL_URL: &str =
    "http://dist/hardware/Hardware_tools/ilorest-4.6.0.0-11.x86_64.rpm";
pub const DEFAULT_SUPPORT_SHARE: &str = "ibox3001-nas.lab.gdc.il.infinidat.com:/suplogs";
pub const DEFAULT_MOUNT_POINT: &str = "/root/suplogs";
pub const DEFAULT_NOTIFY_REPO: &str = "https://git.infinidat.com/germanv/hw_notify.git";
pub const DEFAULT_BASTION: &str = "root@hardware-vm";

/// Remote SSH material fetched from the bastion, in copy order.
pub const DEFAULT_CREDENTIAL_FILES: &[&str] = &["mfg_root_id", "id_rsa", "config"];
const BASTION_SSH_DIR: &str = "/root/.ssh";

// ── Config schema ────────────────────────────────────────────────────────────

/// Everything a run needs to know about the host it provisions.
///
/// Built once per process and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisionConfig {
    /// OS packages to ensure, in order. May include Python module names.
    pub packages: Vec<String>,
    /// Subset of `packages` checked and installed as Python modules.
    pub python_packages: Vec<String>,
    pub tool: ToolArchive,
    pub support_share: SupportShare,
    pub notify: NotifyTool,
    pub credentials: CredentialSet,
}

/// Vendor RPM tool distributed as an archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolArchive {
    pub url: String,
    /// Local file name the archive is downloaded to.
    pub archive_file: String,
}

/// NFS share that collects support logs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupportShare {
    /// `host:/export` source.
    pub source: String,
    pub mount_point: String,
}

/// Internal notification tool built from a git checkout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotifyTool {
    pub repo: String,
    pub checkout_dir: String,
}

/// SSH material copied from the bastion host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialSet {
    /// `[user@]host` to copy from.
    pub bastion: String,
    pub transfers: Vec<CredentialTransfer>,
}

/// One file fetched from the bastion into the local SSH directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialTransfer {
    pub remote_path: String,
    pub file_name: String,
}

/// Values supplied on the command line or via environment variables.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub tool_url: Option<String>,
    pub support_share: Option<String>,
    pub mount_point: Option<String>,
    pub bastion: Option<String>,
    pub notify_repo: Option<String>,
}

impl Default for ProvisionConfig {
    fn default() -> Self {
        Self {
            packages: to_owned_vec(DEFAULT_PACKAGES),
            python_packages: to_owned_vec(DEFAULT_PYTHON_PACKAGES),
            tool: ToolArchive {
                url: DEFAULT_TOOL_URL.to_string(),
                archive_file: "ilorest-4.6.0.0-11.x86_64.rpm".to_string(),
            },
            support_share: SupportShare {
                source: DEFAULT_SUPPORT_SHARE.to_string(),
                mount_point: DEFAULT_MOUNT_POINT.to_string(),
            },
            notify: NotifyTool {
                repo: DEFAULT_NOTIFY_REPO.to_string(),
                checkout_dir: "hw_notify".to_string(),
            },
            credentials: CredentialSet {
                bastion: DEFAULT_BASTION.to_string(),
                transfers: DEFAULT_CREDENTIAL_FILES
                    .iter()
                    .map(|name| CredentialTransfer {
                        remote_path: format!("{BASTION_SSH_DIR}/{name}"),
                        file_name: (*name).to_string(),
                    })
                    .collect(),
            },
        }
    }
}

impl ProvisionConfig {
    /// Build the run configuration from defaults plus validated overrides.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] for the first override that fails validation.
    pub fn with_overrides(overrides: &ConfigOverrides) -> Result<Self> {
        let mut config = Self::default();
        if let Some(url) = &overrides.tool_url {
            config.tool = ToolArchive::from_url(url)?;
        }
        if let Some(source) = &overrides.support_share {
            validate_share(source)?;
            config.support_share.source.clone_from(source);
        }
        if let Some(mount_point) = &overrides.mount_point {
            if !mount_point.starts_with('/') {
                return Err(ConfigError::RelativeMountPoint(mount_point.clone()).into());
            }
            config.support_share.mount_point.clone_from(mount_point);
        }
        if let Some(bastion) = &overrides.bastion {
            validate_bastion(bastion)?;
            config.credentials.bastion.clone_from(bastion);
        }
        if let Some(repo) = &overrides.notify_repo {
            config.notify = NotifyTool::from_repo(repo)?;
        }
        Ok(config)
    }
}

impl ToolArchive {
    /// Derive the archive file name from the last path segment of `url`.
    ///
    /// # Errors
    ///
    /// Returns an error if `url` is not http(s) or has no file name.
    pub fn from_url(url: &str) -> Result<Self> {
        let Some(rest) = url
            .strip_prefix("http://")
            .or_else(|| url.strip_prefix("https://"))
        else {
            return Err(ConfigError::InvalidUrl(url.to_string()).into());
        };
        let path = rest.split(['?', '#']).next().unwrap_or_default();
        let name = match path.split_once('/') {
            Some((_, p)) => p.rsplit('/').next().unwrap_or_default(),
            None => "",
        };
        if name.is_empty() {
            return Err(ConfigError::NoArchiveName(url.to_string()).into());
        }
        Ok(Self {
            url: url.to_string(),
            archive_file: name.to_string(),
        })
    }

    /// `sudo alien -i <archive>` — converts the RPM and installs it.
    #[must_use]
    pub fn install_command(&self) -> CommandLine {
        CommandLine::new("sudo", ["alien", "-i", self.archive_file.as_str()])
    }
}

impl SupportShare {
    /// Create the mount point, then mount the share onto it.
    #[must_use]
    pub fn mount_commands(&self) -> Vec<CommandLine> {
        vec![
            CommandLine::new("sudo", ["mkdir", "-p", self.mount_point.as_str()]),
            CommandLine::new(
                "sudo",
                [
                    "mount",
                    "-t",
                    "nfs",
                    self.source.as_str(),
                    self.mount_point.as_str(),
                ],
            ),
        ]
    }
}

impl NotifyTool {
    /// Derive the checkout directory from the repository name.
    ///
    /// # Errors
    ///
    /// Returns an error if no repository name can be found in `repo`.
    pub fn from_repo(repo: &str) -> Result<Self> {
        let name = repo
            .trim_end_matches('/')
            .rsplit(['/', ':'])
            .next()
            .unwrap_or_default();
        let name = name.strip_suffix(".git").unwrap_or(name);
        if name.is_empty() || name == "." || name == ".." {
            return Err(ConfigError::NoCheckoutDir(repo.to_string()).into());
        }
        Ok(Self {
            repo: repo.to_string(),
            checkout_dir: name.to_string(),
        })
    }

    #[must_use]
    pub fn clone_command(&self) -> CommandLine {
        CommandLine::new(
            "git",
            ["clone", self.repo.as_str(), self.checkout_dir.as_str()],
        )
    }

    #[must_use]
    pub fn build_command(&self) -> CommandLine {
        CommandLine::new(
            "sudo",
            ["make", "-C", self.checkout_dir.as_str(), "install"],
        )
    }
}

impl CredentialTransfer {
    /// scp source operand, e.g. `root@hardware-vm:/root/.ssh/id_rsa`.
    #[must_use]
    pub fn remote_spec(&self, bastion: &str) -> String {
        format!("{bastion}:{}", self.remote_path)
    }
}

// ── Validators ───────────────────────────────────────────────────────────────

fn validate_share(source: &str) -> Result<()> {
    match source.split_once(':') {
        Some((host, path)) if !host.is_empty() && path.starts_with('/') => Ok(()),
        _ => Err(ConfigError::InvalidShare(source.to_string()).into()),
    }
}

fn validate_bastion(bastion: &str) -> Result<()> {
    let host = bastion.rsplit_once('@').map_or(bastion, |(_, h)| h);
    let user_ok = bastion
        .rsplit_once('@')
        .is_none_or(|(user, _)| !user.is_empty());
    let host_ok = !host.is_empty()
        && !host.contains([':', '/', ' '])
        && !host.starts_with('-');
    if user_ok && host_ok {
        Ok(())
    } else {
        Err(ConfigError::InvalidBastion(bastion.to_string()).into())
    }
}

fn to_owned_vec(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}
