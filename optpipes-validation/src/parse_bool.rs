// Optional boolean pipe

use crate::options::ExceptionPolicy;
use crate::{ParseFailure, PipeOptions, present};
use async_trait::async_trait;
use optpipes_core::{ArgumentMetadata, Error, ErrorHttpStatus, PipeTransform, Value};

/// Parses `true`/`false` and `"true"`/`"false"`, letting absent values through.
///
/// Matching is exact: no trimming, no case folding, no `"1"`/`"0"`.
///
/// ```
/// use optpipes_validation::ParseBoolOptionalPipe;
/// use serde_json::json;
///
/// assert_eq!(ParseBoolOptionalPipe::check(&json!("true")), Ok(true));
/// assert!(ParseBoolOptionalPipe::check(&json!("TRUE")).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct ParseBoolOptionalPipe {
    policy: ExceptionPolicy,
}

impl ParseBoolOptionalPipe {
    pub fn new(options: PipeOptions) -> Self {
        Self {
            policy: options.into_policy("ParseBoolOptionalPipe"),
        }
    }

    /// Status used when no custom exception factory is configured
    pub fn error_status(&self) -> ErrorHttpStatus {
        self.policy.status()
    }

    /// Validate a non-absent value
    pub fn check(value: &Value) -> Result<bool, ParseFailure> {
        match value {
            Value::Bool(b) => Ok(*b),
            Value::String(s) if s == "true" => Ok(true),
            Value::String(s) if s == "false" => Ok(false),
            _ => Err(ParseFailure::InvalidBoolean),
        }
    }
}

impl Default for ParseBoolOptionalPipe {
    fn default() -> Self {
        Self::new(PipeOptions::default())
    }
}

#[async_trait]
impl PipeTransform for ParseBoolOptionalPipe {
    type Output = bool;

    async fn transform(
        &self,
        value: Option<Value>,
        metadata: &ArgumentMetadata,
    ) -> Result<Option<bool>, Error> {
        let Some(value) = present(value, metadata) else {
            return Ok(None);
        };

        Self::check(&value)
            .map(Some)
            .map_err(|failure| self.policy.reject(failure, metadata))
    }
}
