// Optional float pipe

use crate::numeric::parse_leading_float;
use crate::options::ExceptionPolicy;
use crate::{ParseFailure, PipeOptions, present};
use async_trait::async_trait;
use optpipes_core::{ArgumentMetadata, Error, ErrorHttpStatus, PipeTransform, Value};

/// Parses numbers and numeric strings into `f64`, letting absent values through.
///
/// Strings are read up to the end of their leading numeral, so `"3.14abc"`
/// yields `3.14`. Values that are not finite (`"Infinity"`, `"1e999"`) are
/// rejected.
#[derive(Debug, Clone)]
pub struct ParseFloatOptionalPipe {
    policy: ExceptionPolicy,
}

impl ParseFloatOptionalPipe {
    pub fn new(options: PipeOptions) -> Self {
        Self {
            policy: options.into_policy("ParseFloatOptionalPipe"),
        }
    }

    /// Status used when no custom exception factory is configured
    pub fn error_status(&self) -> ErrorHttpStatus {
        self.policy.status()
    }

    /// Validate a non-absent value
    pub fn check(value: &Value) -> Result<f64, ParseFailure> {
        let parsed = match value {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => parse_leading_float(s),
            _ => None,
        };

        parsed
            .filter(|f| f.is_finite())
            .ok_or(ParseFailure::InvalidFloat)
    }
}

impl Default for ParseFloatOptionalPipe {
    fn default() -> Self {
        Self::new(PipeOptions::default())
    }
}

#[async_trait]
impl PipeTransform for ParseFloatOptionalPipe {
    type Output = f64;

    async fn transform(
        &self,
        value: Option<Value>,
        metadata: &ArgumentMetadata,
    ) -> Result<Option<f64>, Error> {
        let Some(value) = present(value, metadata) else {
            return Ok(None);
        };

        Self::check(&value)
            .map(Some)
            .map_err(|failure| self.policy.reject(failure, metadata))
    }
}
