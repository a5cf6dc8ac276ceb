//! Infrastructure implementation of the `SecretSource` port.
//!
//! The bastion password is read from `LABPREP_BASTION_PASSWORD`, falling back
//! to the first line of a password file.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::application::ports::SecretSource;

pub const PASSWORD_ENV: &str = "LABPREP_BASTION_PASSWORD";

#[derive(Debug, Default)]
pub struct EnvSecretSource {
    password_file: Option<PathBuf>,
}

impl EnvSecretSource {
    #[must_use]
    pub fn new(password_file: Option<PathBuf>) -> Self {
        Self { password_file }
    }
}

impl SecretSource for EnvSecretSource {
    fn bastion_password(&self) -> Result<Option<String>> {
        if let Ok(val) = std::env::var(PASSWORD_ENV)
            && !val.is_empty()
        {
            return Ok(Some(val));
        }
        let Some(path) = &self.password_file else {
            return Ok(None);
        };
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read {}", path.display()))?;
        let password = content.lines().next().unwrap_or_default();
        if password.is_empty() {
            anyhow::bail!("{} is empty", path.display());
        }
        Ok(Some(password.to_string()))
    }
}
