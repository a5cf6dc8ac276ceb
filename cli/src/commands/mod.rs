//! Command implementations

pub mod provision;
