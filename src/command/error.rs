use thiserror::Error;

use crate::storage::StorageError;

/// Validation and execution failures for console commands. The display
/// strings are the exact messages printed to the user.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("** class name missing **")]
    ClassNameMissing,

    #[error("** class doesn't exist **")]
    ClassNotFound,

    #[error("** instance id missing **")]
    InstanceIdMissing,

    #[error("** no instance found **")]
    InstanceNotFound,

    #[error("** attribute name missing **")]
    AttributeNameMissing,

    #[error("** value missing **")]
    ValueMissing,

    #[error("*** Unknown syntax: {0}")]
    UnknownSyntax(String),

    #[error("{0}")]
    Storage(#[from] StorageError),
}
