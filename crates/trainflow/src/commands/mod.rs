//! Command handlers, one module per subcommand.

pub mod check;
pub mod completion;
pub mod config_cmd;
pub mod fmt;
pub mod init;
pub mod new;
pub mod show;
pub mod version;
