// Optional integer pipe

use crate::numeric::{integral_f64, parse_integer};
use crate::options::ExceptionPolicy;
use crate::{ParseFailure, PipeOptions, present};
use async_trait::async_trait;
use optpipes_core::{ArgumentMetadata, Error, ErrorHttpStatus, PipeTransform, Value};

/// Parses whole numbers and strict integer strings into `i64`, letting absent
/// values through.
///
/// Strings must be entirely `-?[0-9]+`: no surrounding whitespace, no `+`,
/// no decimal point, no exponent. Unlike [`ParseFloatOptionalPipe`], trailing
/// text is an error.
///
/// [`ParseFloatOptionalPipe`]: crate::ParseFloatOptionalPipe
#[derive(Debug, Clone)]
pub struct ParseIntOptionalPipe {
    policy: ExceptionPolicy,
}

impl ParseIntOptionalPipe {
    pub fn new(options: PipeOptions) -> Self {
        Self {
            policy: options.into_policy("ParseIntOptionalPipe"),
        }
    }

    /// Status used when no custom exception factory is configured
    pub fn error_status(&self) -> ErrorHttpStatus {
        self.policy.status()
    }

    /// Validate a non-absent value
    pub fn check(value: &Value) -> Result<i64, ParseFailure> {
        let parsed = match value {
            Value::String(s) => parse_integer(s),
            Value::Number(n) => n.as_i64().or_else(|| n.as_f64().and_then(integral_f64)),
            _ => None,
        };

        parsed.ok_or(ParseFailure::InvalidInteger)
    }
}

impl Default for ParseIntOptionalPipe {
    fn default() -> Self {
        Self::new(PipeOptions::default())
    }
}

#[async_trait]
impl PipeTransform for ParseIntOptionalPipe {
    type Output = i64;

    async fn transform(
        &self,
        value: Option<Value>,
        metadata: &ArgumentMetadata,
    ) -> Result<Option<i64>, Error> {
        let Some(value) = present(value, metadata) else {
            return Ok(None);
        };

        Self::check(&value)
            .map(Some)
            .map_err(|failure| self.policy.reject(failure, metadata))
    }
}
