//! Package identity and the commands used to query and install it.

use crate::domain::command::CommandLine;

/// How a package's presence is checked and how it is installed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageKind {
    /// Debian package: `dpkg -s` / `apt-get install`.
    Os,
    /// Python module: `import` probe / `pip3 install`.
    Python,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Package {
    pub name: String,
    pub kind: PackageKind,
}

impl Package {
    #[must_use]
    pub fn os(name: &str) -> Self {
        Self {
            name: name.to_string(),
            kind: PackageKind::Os,
        }
    }

    #[must_use]
    pub fn python(name: &str) -> Self {
        Self {
            name: name.to_string(),
            kind: PackageKind::Python,
        }
    }

    /// Tag each name in `names` with its kind, preserving order.
    ///
    /// Names listed in `python_names` are Python modules; all others are OS
    /// packages. Python names absent from `names` are ignored.
    #[must_use]
    pub fn classify(names: &[String], python_names: &[String]) -> Vec<Self> {
        names
            .iter()
            .map(|name| {
                if python_names.contains(name) {
                    Self::python(name)
                } else {
                    Self::os(name)
                }
            })
            .collect()
    }

    /// Command whose zero exit status means the package is present.
    #[must_use]
    pub fn query_command(&self) -> CommandLine {
        match self.kind {
            PackageKind::Os => CommandLine::new("dpkg", ["-s", self.name.as_str()]),
            PackageKind::Python => {
                let probe = format!("import {}", self.name);
                CommandLine::new("python3", ["-c", probe.as_str()])
            }
        }
    }

    #[must_use]
    pub fn install_command(&self) -> CommandLine {
        match self.kind {
            PackageKind::Os => {
                CommandLine::new("sudo", ["apt-get", "install", "-y", self.name.as_str()])
            }
            PackageKind::Python => CommandLine::new("pip3", ["install", self.name.as_str()]),
        }
    }
}

/// Outcome of one `ensure_packages` batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Already present; nothing was installed.
    pub present: Vec<String>,
    /// Absent and installed successfully.
    pub installed: Vec<String>,
    /// Absent and the install failed.
    pub failed: Vec<String>,
}

impl BatchSummary {
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}
