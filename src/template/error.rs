// ABOUTME: Error types for template rendering operations
// ABOUTME: Separates input, encoding, substitution and templating-language failures

use std::fmt;
use thiserror::Error;

/// Text encoding used for the serialize/substitute/deserialize round trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    Json,
    Yaml,
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Encoding::Json => write!(f, "JSON"),
            Encoding::Yaml => write!(f, "YAML"),
        }
    }
}

#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("application template is empty")]
    EmptyTemplate,

    #[error("failed to serialize template as {encoding}: {message}")]
    Serialize { encoding: Encoding, message: String },

    #[error("failed to deserialize rendered template from {encoding}: {message}")]
    Deserialize { encoding: Encoding, message: String },

    #[error("failed to resolve {token}")]
    UnresolvedVariable { token: String },

    #[error("template compile error: {0}")]
    Compile(String),

    #[error("template execution error: {0}")]
    Execution(String),
}

impl TemplateError {
    pub(crate) fn serialize(encoding: Encoding, err: impl fmt::Display) -> Self {
        TemplateError::Serialize {
            encoding,
            message: err.to_string(),
        }
    }

    pub(crate) fn deserialize(encoding: Encoding, err: impl fmt::Display) -> Self {
        TemplateError::Deserialize {
            encoding,
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, TemplateError>;
