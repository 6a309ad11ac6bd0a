use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("{0}")]
    Invalid(String),

    #[error("{0}")]
    GenerationError(String),

    #[error("{0}")]
    StorageError(String),

    #[error("Recipe with ID {0} not found")]
    RecipeNotFound(i64),

    #[error("{0}")]
    TransientFileError(String),

    #[error("{0}")]
    ConfigurationError(String),
}
