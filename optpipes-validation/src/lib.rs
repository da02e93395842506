//! Null-tolerant parse pipes
//!
//! Five argument pipes that behave like the usual `ParseBool`/`ParseEnum`/
//! `ParseFloat`/`ParseInt`/`ParseUUID` pipes except that an absent argument
//! (missing or `null`) is passed through as `None` instead of being rejected.
//!
//! # Examples
//!
//! ## Query parameters
//!
//! ```
//! use optpipes_core::{ArgumentMetadata, PipeTransform};
//! use optpipes_validation::{ParseIntOptionalPipe, PipeOptions};
//! use serde_json::json;
//!
//! # tokio_test::block_on(async {
//! let pipe = ParseIntOptionalPipe::new(PipeOptions::default());
//! let page = ArgumentMetadata::query("page");
//!
//! assert_eq!(pipe.transform(Some(json!("3")), &page).await, Ok(Some(3)));
//! assert_eq!(pipe.transform(None, &page).await, Ok(None));
//!
//! let err = pipe.transform(Some(json!("3rd")), &page).await.unwrap_err();
//! assert_eq!(err.status_code(), 400);
//! assert_eq!(err.message(), "Validation failed (numeric string is expected)");
//! # });
//! ```
//!
//! ## Custom errors
//!
//! ```
//! use optpipes_core::{ArgumentMetadata, Error, ErrorHttpStatus, PipeTransform};
//! use optpipes_validation::{ParseUuidOptionalPipe, ParseUuidOptionalPipeOptions, UuidVersion};
//! use serde_json::json;
//!
//! # tokio_test::block_on(async {
//! let pipe = ParseUuidOptionalPipe::new(
//!     ParseUuidOptionalPipeOptions::new()
//!         .version(UuidVersion::V4)
//!         .error_http_status_code(ErrorHttpStatus::NotFound),
//! );
//!
//! let err = pipe
//!     .transform(Some(json!("42")), &ArgumentMetadata::param("id"))
//!     .await
//!     .unwrap_err();
//! assert_eq!(err, Error::NotFound("Validation failed (uuid v4 is expected)".to_string()));
//! # });
//! ```

mod errors;
mod numeric;
mod options;
mod parse_bool;
mod parse_enum;
mod parse_float;
mod parse_int;
mod parse_uuid;
mod uuid_format;

pub use errors::*;
pub use numeric::{parse_integer, parse_leading_float};
pub use options::{ParseUuidOptionalPipeOptions, PipeOptions, UuidVersion};
pub use parse_bool::*;
pub use parse_enum::*;
pub use parse_float::*;
pub use parse_int::*;
pub use parse_uuid::*;
pub use uuid_format::is_uuid;

use optpipes_core::{ArgumentMetadata, Value, is_absent};
use tracing::trace;

/// Keep the value unless it is absent; absent values end the pipe early.
pub(crate) fn present(value: Option<Value>, metadata: &ArgumentMetadata) -> Option<Value> {
    if is_absent(value.as_ref()) {
        trace!(argument = %metadata.label(), "Absent argument passed through");
        return None;
    }
    value
}
