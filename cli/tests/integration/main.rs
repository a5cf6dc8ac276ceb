//! Integration tests for labprep
//!
//! These tests spawn the actual binary. They only exercise paths that never
//! touch the host: the usage reminder, `--test`, `--dry-run`, help, and
//! override validation.

mod cli_tests;
