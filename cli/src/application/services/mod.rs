//! Application services — use-case orchestration.
//!
//! Each service module implements a single use-case by composing domain logic
//! with port trait calls. Services import only from `crate::domain` and
//! `crate::application::ports` — never from `crate::infra`, `crate::commands`,
//! or `crate::output`.

pub mod credentials;
pub mod dispatch;
pub mod installer;

pub use credentials::{CopyResult, CredentialCopier};
pub use dispatch::{RunReport, dispatch, plan_for, run_plan};
pub use installer::PackageInstaller;
