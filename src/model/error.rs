// ABOUTME: Error types for loading Application and ApplicationSet manifests
// ABOUTME: Defines specific error types for model module operations

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Failed to read manifest file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Unexpected kind '{found}', expected '{expected}'")]
    UnexpectedKind { expected: String, found: String },
}

pub type Result<T> = std::result::Result<T, ModelError>;
