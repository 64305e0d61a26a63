//! CLI subcommand implementations.

pub mod extract;
pub mod init;
pub mod output;
pub mod scan;
