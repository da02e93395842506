// Pipe errors

use crate::UuidVersion;
use thiserror::Error;

/// Why a non-absent argument was rejected.
///
/// The display text is the message handed to the exception factory.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseFailure {
    #[error("Validation failed (boolean string is expected)")]
    InvalidBoolean,

    #[error("Validation failed (enum string is expected)")]
    InvalidEnum,

    #[error("Validation failed (numeric string is expected)")]
    InvalidFloat,

    #[error("Validation failed (numeric string is expected)")]
    InvalidInteger,

    #[error("Validation failed (uuid{} is expected)", version_suffix(.version))]
    InvalidUuid { version: Option<UuidVersion> },
}

fn version_suffix(version: &Option<UuidVersion>) -> String {
    match version {
        Some(version) => format!(" v{}", version),
        None => String::new(),
    }
}

impl ParseFailure {
    /// Short, stable name used in log events
    pub fn kind(&self) -> &'static str {
        match self {
            ParseFailure::InvalidBoolean => "invalid_boolean",
            ParseFailure::InvalidEnum => "invalid_enum",
            ParseFailure::InvalidFloat => "invalid_float",
            ParseFailure::InvalidInteger => "invalid_integer",
            ParseFailure::InvalidUuid { .. } => "invalid_uuid",
        }
    }

    /// Message passed to the exception factory
    pub fn message(&self) -> String {
        self.to_string()
    }
}

/// Errors raised while building a pipe.
///
/// These are programmer errors: they should abort application setup, not be
/// handled per request.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PipeConfigError {
    #[error("\"{0}\" requires an enum definition (to validate input values)")]
    MissingEnumDefinition(&'static str),

    #[error("Invalid enum definition: {0}")]
    InvalidEnumDefinition(String),

    #[error("Invalid pipe options: {0}")]
    InvalidOptions(String),
}

pub type Result<T> = std::result::Result<T, PipeConfigError>;
