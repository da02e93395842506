// Pipe contract between the host and argument transformers

use crate::Error;
use async_trait::async_trait;
use serde_json::Value;
use std::fmt;

/// Where a route argument comes from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ParamType {
    Body,
    Query,
    Param,
    #[default]
    Custom,
}

impl ParamType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParamType::Body => "body",
            ParamType::Query => "query",
            ParamType::Param => "param",
            ParamType::Custom => "custom",
        }
    }
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Describes the route argument currently being processed.
///
/// Pipes never make decisions based on metadata; it is carried for
/// diagnostics only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentMetadata {
    /// Argument source
    pub kind: ParamType,
    /// Argument name, e.g. `id` for `/users/:id`
    pub data: Option<String>,
    /// Name of the type the handler expects
    pub metatype: Option<String>,
}

impl ArgumentMetadata {
    /// Create metadata for an argument of the given kind
    pub fn new(kind: ParamType) -> Self {
        Self {
            kind,
            data: None,
            metatype: None,
        }
    }

    /// Metadata for a query string argument
    pub fn query(name: impl Into<String>) -> Self {
        Self::new(ParamType::Query).with_data(name)
    }

    /// Metadata for a path parameter
    pub fn param(name: impl Into<String>) -> Self {
        Self::new(ParamType::Param).with_data(name)
    }

    /// Metadata for a request body (or a field of it)
    pub fn body() -> Self {
        Self::new(ParamType::Body)
    }

    /// Set the argument name
    pub fn with_data(mut self, data: impl Into<String>) -> Self {
        self.data = Some(data.into());
        self
    }

    /// Set the expected type name
    pub fn with_metatype(mut self, metatype: impl Into<String>) -> Self {
        self.metatype = Some(metatype.into());
        self
    }

    /// Short label used in log events, e.g. `query:page`
    pub fn label(&self) -> String {
        match &self.data {
            Some(name) => format!("{}:{}", self.kind, name),
            None => self.kind.to_string(),
        }
    }
}

/// A transformer the host runs on a route argument before the handler.
///
/// `value` is the raw argument: `None` when the argument was not supplied at
/// all, `Some(Value::Null)` when it was explicitly null. A returned
/// `Ok(None)` means "absent" and is handed to the handler as such.
#[async_trait]
pub trait PipeTransform: Send + Sync {
    /// Type handed to the route handler
    type Output: Send;

    /// Validate and coerce one argument
    async fn transform(
        &self,
        value: Option<Value>,
        metadata: &ArgumentMetadata,
    ) -> Result<Option<Self::Output>, Error>;
}

/// Check for the nullish case: missing or explicit null.
///
/// An empty string is *not* absent.
pub fn is_absent(value: Option<&Value>) -> bool {
    matches!(value, None | Some(Value::Null))
}
