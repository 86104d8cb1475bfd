//! CLI command handlers
//!
//! One module per subcommand.

pub mod copy;
pub mod duplicate;
pub mod list;
