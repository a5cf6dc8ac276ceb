//! Infrastructure implementation of the `PackageQuery` port.
//!
//! Presence is decided by the exit status of the package's query command
//! (`dpkg -s` for OS packages, a `python3 -c "import ..."` probe for Python
//! modules). Output is captured so the probes stay quiet.

use anyhow::Result;

use crate::application::ports::{CommandRunner, PackageQuery};
use crate::domain::Package;

pub struct HostPackageQuery<'a, R> {
    runner: &'a R,
}

impl<'a, R: CommandRunner> HostPackageQuery<'a, R> {
    #[must_use]
    pub fn new(runner: &'a R) -> Self {
        Self { runner }
    }
}

impl<R: CommandRunner> PackageQuery for HostPackageQuery<'_, R> {
    async fn is_present(&self, package: &Package) -> Result<bool> {
        let cmd = package.query_command();
        let output = self.runner.run(&cmd.program, &cmd.arg_refs()).await?;
        Ok(output.status.success())
    }
}
