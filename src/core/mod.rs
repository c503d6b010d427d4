// Public modules
pub mod config;
pub mod definitions;
pub mod error;
pub mod invocation;
pub mod options;
pub mod output;

// Re-export common types for convenience
pub use error::{Error, ErrorCode, Result};
pub use options::{build_cli_options_args, CliArgument, DenoOptions, OptionType, OptionValue};
