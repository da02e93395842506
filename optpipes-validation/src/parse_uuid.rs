// Optional UUID pipe

use crate::options::ExceptionPolicy;
use crate::uuid_format::is_uuid;
use crate::{ParseFailure, ParseUuidOptionalPipeOptions, UuidVersion, present};
use async_trait::async_trait;
use optpipes_core::{ArgumentMetadata, Error, ErrorHttpStatus, PipeTransform, Value};

/// Accepts UUID strings, optionally of one version, letting absent values
/// through. Accepted strings are returned unchanged (case preserved).
#[derive(Debug, Clone)]
pub struct ParseUuidOptionalPipe {
    version: Option<UuidVersion>,
    policy: ExceptionPolicy,
}

impl ParseUuidOptionalPipe {
    pub fn new(options: impl Into<ParseUuidOptionalPipeOptions>) -> Self {
        let options = options.into();
        Self {
            version: options.version,
            policy: options.pipe.into_policy("ParseUuidOptionalPipe"),
        }
    }

    /// Shorthand for a pipe restricted to `version` with default error handling
    pub fn with_version(version: UuidVersion) -> Self {
        Self::new(ParseUuidOptionalPipeOptions::new().version(version))
    }

    /// The version this pipe is restricted to, if any
    pub fn version(&self) -> Option<UuidVersion> {
        self.version
    }

    /// Status used when no custom exception factory is configured
    pub fn error_status(&self) -> ErrorHttpStatus {
        self.policy.status()
    }

    /// Validate a non-absent value, returning the accepted UUID text
    pub fn check<'a>(&self, value: &'a Value) -> Result<&'a str, ParseFailure> {
        match value {
            Value::String(s) if is_uuid(s, self.version) => Ok(s),
            _ => Err(ParseFailure::InvalidUuid {
                version: self.version,
            }),
        }
    }
}

impl Default for ParseUuidOptionalPipe {
    fn default() -> Self {
        Self::new(ParseUuidOptionalPipeOptions::default())
    }
}

#[async_trait]
impl PipeTransform for ParseUuidOptionalPipe {
    type Output = String;

    async fn transform(
        &self,
        value: Option<Value>,
        metadata: &ArgumentMetadata,
    ) -> Result<Option<String>, Error> {
        let Some(value) = present(value, metadata) else {
            return Ok(None);
        };

        self.check(&value)
            .map(|uuid| Some(uuid.to_owned()))
            .map_err(|failure| self.policy.reject(failure, metadata))
    }
}
