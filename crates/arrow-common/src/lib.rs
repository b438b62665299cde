//! Shared error and identifier types for the Broken Arrow workspace.

pub mod errors;
pub mod types;

pub use errors::{ConfigError, ShellError};
pub use types::WindowKey;

pub type Result<T> = std::result::Result<T, ShellError>;
