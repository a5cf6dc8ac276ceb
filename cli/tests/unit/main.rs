//! Unit tests for labprep
//!
//! These tests use mocked dependencies and run fast without external I/O.

#![allow(clippy::expect_used)]

mod mocks;
