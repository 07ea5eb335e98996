//! Command handlers, one module per subcommand.

pub mod breeds;
pub mod completions;
pub mod config;
pub mod init;
pub mod pet;
