//! Command handlers, one module per subcommand.

pub mod area;
pub mod completions;
pub mod config;
pub mod demo;
pub mod init;
pub mod list;
pub mod total;
