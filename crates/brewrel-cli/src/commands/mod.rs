//! One module per subcommand. Each exposes `execute`.

pub mod completions;
pub mod config;
pub mod fields;
pub mod init;
pub mod render;
