// Optional enum pipe

use crate::options::ExceptionPolicy;
use crate::{ParseFailure, PipeConfigError, PipeOptions, Result, present};
use async_trait::async_trait;
use optpipes_core::{ArgumentMetadata, Error, ErrorHttpStatus, PipeTransform, Value};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Members of an enumeration: name to value.
///
/// Only the values take part in validation; names are kept for diagnostics.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "serde_json::Map<String, Value>")]
pub struct EnumDefinition {
    members: Vec<(String, Value)>,
}

impl EnumDefinition {
    /// Empty definition; add members with [`member`](Self::member)
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a member
    pub fn member(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.members.push((name.into(), value.into()));
        self
    }

    /// Build a definition from a JSON object such as `{"A": "a", "B": "b"}`
    pub fn from_json(value: Value) -> Result<Self> {
        match value {
            Value::Object(map) => Ok(Self::from(map)),
            other => Err(PipeConfigError::InvalidEnumDefinition(format!(
                "expected an object of members, got {}",
                other
            ))),
        }
    }

    /// Build a definition from the variants of a Rust enum.
    ///
    /// Member names come from `Debug`, values from the variant's serde
    /// representation, so `#[serde(rename = "...")]` is honoured.
    ///
    /// ```
    /// use optpipes_validation::EnumDefinition;
    /// use serde::Serialize;
    /// use serde_json::json;
    ///
    /// #[derive(Debug, Serialize)]
    /// #[serde(rename_all = "lowercase")]
    /// enum Sort {
    ///     Asc,
    ///     Desc,
    /// }
    ///
    /// let definition = EnumDefinition::from_variants(&[Sort::Asc, Sort::Desc]).unwrap();
    /// assert!(definition.contains(&json!("asc")));
    /// assert!(!definition.contains(&json!("Asc")));
    /// ```
    pub fn from_variants<T: Serialize + Debug>(variants: &[T]) -> Result<Self> {
        variants
            .iter()
            .map(|variant| {
                serde_json::to_value(variant)
                    .map(|value| (format!("{:?}", variant), value))
                    .map_err(|e| PipeConfigError::InvalidEnumDefinition(e.to_string()))
            })
            .collect::<Result<Vec<_>>>()
            .map(|members| Self { members })
    }

    /// Member values, in declaration order
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.members.iter().map(|(_, value)| value)
    }

    /// Member names, in declaration order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.members.iter().map(|(name, _)| name.as_str())
    }

    /// Check whether `value` is one of the member values.
    ///
    /// Numbers compare by numeric value, so `1` and `1.0` are the same member.
    pub fn contains(&self, value: &Value) -> bool {
        self.values().any(|member| same_value(member, value))
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

fn same_value(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => match (x.as_f64(), y.as_f64()) {
            (Some(x), Some(y)) => x == y,
            _ => x == y,
        },
        _ => a == b,
    }
}

impl From<serde_json::Map<String, Value>> for EnumDefinition {
    fn from(map: serde_json::Map<String, Value>) -> Self {
        Self {
            members: map.into_iter().collect(),
        }
    }
}

impl<K, V> FromIterator<(K, V)> for EnumDefinition
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            members: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }
}

/// Accepts only the values of an [`EnumDefinition`], letting absent values
/// through. Accepted values are returned unchanged.
#[derive(Debug, Clone)]
pub struct ParseEnumOptionalPipe {
    definition: EnumDefinition,
    policy: ExceptionPolicy,
}

impl ParseEnumOptionalPipe {
    /// Create the pipe.
    ///
    /// Fails with [`PipeConfigError::MissingEnumDefinition`] when the
    /// definition is missing or has no members.
    pub fn new(
        definition: impl Into<Option<EnumDefinition>>,
        options: PipeOptions,
    ) -> Result<Self> {
        let definition = definition
            .into()
            .filter(|definition| !definition.is_empty())
            .ok_or(PipeConfigError::MissingEnumDefinition("ParseEnumOptionalPipe"))?;

        Ok(Self {
            definition,
            policy: options.into_policy("ParseEnumOptionalPipe"),
        })
    }

    /// The enumeration this pipe validates against
    pub fn definition(&self) -> &EnumDefinition {
        &self.definition
    }

    /// Status used when no custom exception factory is configured
    pub fn error_status(&self) -> ErrorHttpStatus {
        self.policy.status()
    }

    /// Validate a non-absent value
    pub fn check(&self, value: &Value) -> std::result::Result<(), ParseFailure> {
        if self.definition.contains(value) {
            Ok(())
        } else {
            Err(ParseFailure::InvalidEnum)
        }
    }
}

#[async_trait]
impl PipeTransform for ParseEnumOptionalPipe {
    type Output = Value;

    async fn transform(
        &self,
        value: Option<Value>,
        metadata: &ArgumentMetadata,
    ) -> std::result::Result<Option<Value>, Error> {
        let Some(value) = present(value, metadata) else {
            return Ok(None);
        };

        match self.check(&value) {
            Ok(()) => Ok(Some(value)),
            Err(failure) => Err(self.policy.reject(failure, metadata)),
        }
    }
}
