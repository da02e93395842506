// Exception factories

use crate::{Error, ErrorHttpStatus};
use std::sync::Arc;

/// Turns a validation message into the error a pipe raises.
pub type ExceptionFactory = Arc<dyn Fn(String) -> Error + Send + Sync>;

/// Factory used when a pipe is configured without one.
///
/// Every message is wrapped in the error dedicated to `status`.
pub fn default_exception_factory(status: ErrorHttpStatus) -> ExceptionFactory {
    Arc::new(move |message| Error::from_status(status, message))
}

/// Wrap a closure as an [`ExceptionFactory`].
///
/// ```
/// use optpipes_core::{exception_factory, Error};
///
/// let factory = exception_factory(|message| Error::Conflict(format!("query: {}", message)));
/// let err = factory("bad".to_string());
/// assert_eq!(err.status_code(), 409);
/// ```
pub fn exception_factory<F>(f: F) -> ExceptionFactory
where
    F: Fn(String) -> Error + Send + Sync + 'static,
{
    Arc::new(f)
}
