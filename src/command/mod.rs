mod commands;

pub use commands::Command;

use thiserror::Error;

/// Result type for command operations
pub type CommandResult = Result<(), CommandError>;

/// Errors that can occur during command execution
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    /// The command refers to a shape index the document does not have
    #[error("no shape at index {0}")]
    ShapeNotFound(usize),
}
