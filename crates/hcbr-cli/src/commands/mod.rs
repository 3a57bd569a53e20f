//! CLI command implementations.

pub mod init;
pub mod run;
pub mod stats;
