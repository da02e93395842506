// Pipe options

use crate::{ParseFailure, PipeConfigError, Result};
use optpipes_core::{
    ArgumentMetadata, Error, ErrorHttpStatus, ExceptionFactory, default_exception_factory,
};
use serde::{Deserialize, de::DeserializeOwned};
use std::fmt;
use tracing::debug;

/// Options shared by every pipe.
///
/// The data part (`errorHttpStatusCode`) can be deserialized from JSON or
/// TOML; the exception factory can only be set in code.
#[derive(Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PipeOptions {
    /// Status used by the default exception factory (400 when unset)
    #[serde(alias = "error_http_status_code")]
    pub error_http_status_code: Option<ErrorHttpStatus>,

    /// Replaces the default exception factory
    #[serde(skip)]
    pub exception_factory: Option<ExceptionFactory>,
}

impl PipeOptions {
    /// Options with every field unset
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the status used by the default exception factory
    pub fn error_http_status_code(mut self, status: ErrorHttpStatus) -> Self {
        self.error_http_status_code = Some(status);
        self
    }

    /// Set a custom exception factory
    pub fn exception_factory<F>(mut self, factory: F) -> Self
    where
        F: Fn(String) -> Error + Send + Sync + 'static,
    {
        self.exception_factory = Some(std::sync::Arc::new(factory));
        self
    }

    /// Load options from a JSON value
    pub fn from_json(value: serde_json::Value) -> Result<Self> {
        from_json(value)
    }

    /// Load options from a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        from_toml_str(content)
    }

    /// Resolve the options into the policy a pipe keeps for its lifetime
    pub(crate) fn into_policy(self, pipe: &'static str) -> ExceptionPolicy {
        let status = self.error_http_status_code.unwrap_or_default();
        let custom = self.exception_factory.is_some();
        let factory = self
            .exception_factory
            .unwrap_or_else(|| default_exception_factory(status));

        debug!(pipe, status = %status, custom_factory = custom, "Pipe configured");

        ExceptionPolicy {
            pipe,
            status,
            factory,
        }
    }
}

impl fmt::Debug for PipeOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PipeOptions")
            .field("error_http_status_code", &self.error_http_status_code)
            .field("exception_factory", &self.exception_factory.is_some())
            .finish()
    }
}

/// UUID versions the UUID pipe can be restricted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum UuidVersion {
    #[serde(rename = "3")]
    V3,
    #[serde(rename = "4")]
    V4,
    #[serde(rename = "5")]
    V5,
}

impl UuidVersion {
    /// The version nibble
    pub fn number(&self) -> u8 {
        match self {
            UuidVersion::V3 => 3,
            UuidVersion::V4 => 4,
            UuidVersion::V5 => 5,
        }
    }
}

impl fmt::Display for UuidVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// Options for [`ParseUuidOptionalPipe`](crate::ParseUuidOptionalPipe).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ParseUuidOptionalPipeOptions {
    /// Accept only this UUID version
    pub version: Option<UuidVersion>,

    #[serde(flatten)]
    pub pipe: PipeOptions,
}

impl ParseUuidOptionalPipeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict accepted UUIDs to one version
    pub fn version(mut self, version: UuidVersion) -> Self {
        self.version = Some(version);
        self
    }

    /// Set the status used by the default exception factory
    pub fn error_http_status_code(mut self, status: ErrorHttpStatus) -> Self {
        self.pipe = self.pipe.error_http_status_code(status);
        self
    }

    /// Set a custom exception factory
    pub fn exception_factory<F>(mut self, factory: F) -> Self
    where
        F: Fn(String) -> Error + Send + Sync + 'static,
    {
        self.pipe = self.pipe.exception_factory(factory);
        self
    }

    /// Load options from a JSON value
    pub fn from_json(value: serde_json::Value) -> Result<Self> {
        from_json(value)
    }

    /// Load options from a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        from_toml_str(content)
    }
}

impl From<PipeOptions> for ParseUuidOptionalPipeOptions {
    fn from(pipe: PipeOptions) -> Self {
        Self {
            version: None,
            pipe,
        }
    }
}

fn from_json<T: DeserializeOwned>(value: serde_json::Value) -> Result<T> {
    serde_json::from_value(value).map_err(|e| PipeConfigError::InvalidOptions(e.to_string()))
}

fn from_toml_str<T: DeserializeOwned>(content: &str) -> Result<T> {
    toml::from_str(content).map_err(|e| PipeConfigError::InvalidOptions(e.to_string()))
}

/// Resolved failure path of a pipe: status plus the factory to call.
#[derive(Clone)]
pub(crate) struct ExceptionPolicy {
    pipe: &'static str,
    status: ErrorHttpStatus,
    factory: ExceptionFactory,
}

impl ExceptionPolicy {
    /// Status used by the default factory
    pub(crate) fn status(&self) -> ErrorHttpStatus {
        self.status
    }

    /// Build the error for a rejected argument
    pub(crate) fn reject(&self, failure: ParseFailure, metadata: &ArgumentMetadata) -> Error {
        debug!(
            pipe = self.pipe,
            kind = failure.kind(),
            argument = %metadata.label(),
            status = self.status.code(),
            "Argument rejected"
        );
        (self.factory)(failure.message())
    }
}

impl fmt::Debug for ExceptionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExceptionPolicy")
            .field("pipe", &self.pipe)
            .field("status", &self.status)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_policy_is_bad_request() {
        let policy = PipeOptions::new().into_policy("TestPipe");
        assert_eq!(policy.status(), ErrorHttpStatus::BadRequest);

        let err = policy.reject(ParseFailure::InvalidBoolean, &ArgumentMetadata::query("flag"));
        assert_eq!(
            err,
            Error::BadRequest("Validation failed (boolean string is expected)".to_string())
        );
    }

    #[test]
    fn test_status_override() {
        let policy = PipeOptions::new()
            .error_http_status_code(ErrorHttpStatus::NotAcceptable)
            .into_policy("TestPipe");

        let err = policy.reject(ParseFailure::InvalidFloat, &ArgumentMetadata::default());
        assert_eq!(err.status_code(), 406);
    }

    #[test]
    fn test_custom_factory_wins_over_status() {
        let policy = PipeOptions::new()
            .error_http_status_code(ErrorHttpStatus::NotAcceptable)
            .exception_factory(|message| Error::Conflict(format!("custom: {}", message)))
            .into_policy("TestPipe");

        let err = policy.reject(ParseFailure::InvalidEnum, &ArgumentMetadata::default());
        assert_eq!(
            err,
            Error::Conflict("custom: Validation failed (enum string is expected)".to_string())
        );
    }

    #[test]
    fn test_options_from_json() {
        let options = PipeOptions::from_json(json!({ "errorHttpStatusCode": 422 })).unwrap();
        assert_eq!(
            options.error_http_status_code,
            Some(ErrorHttpStatus::UnprocessableEntity)
        );
        assert!(options.exception_factory.is_none());

        let options = PipeOptions::from_json(json!({ "error_http_status_code": 404 })).unwrap();
        assert_eq!(options.error_http_status_code, Some(ErrorHttpStatus::NotFound));

        let options = PipeOptions::from_json(json!({})).unwrap();
        assert_eq!(options.error_http_status_code, None);
    }

    #[test]
    fn test_options_reject_success_status() {
        let err = PipeOptions::from_json(json!({ "errorHttpStatusCode": 200 })).unwrap_err();
        assert!(matches!(err, PipeConfigError::InvalidOptions(_)));
    }

    #[test]
    fn test_uuid_options_from_json() {
        let options = ParseUuidOptionalPipeOptions::from_json(json!({
            "version": "5",
            "errorHttpStatusCode": 404,
        }))
        .unwrap();

        assert_eq!(options.version, Some(UuidVersion::V5));
        assert_eq!(
            options.pipe.error_http_status_code,
            Some(ErrorHttpStatus::NotFound)
        );

        assert!(ParseUuidOptionalPipeOptions::from_json(json!({ "version": "6" })).is_err());
    }

    #[test]
    fn test_options_debug_hides_factory() {
        let options = PipeOptions::new().exception_factory(Error::Gone);
        let debug = format!("{:?}", options);
        assert!(debug.contains("exception_factory: true"));
    }
}
