// Error types surfaced by pipes

use crate::ErrorHttpStatus;
use thiserror::Error;

/// Host error raised when a pipe rejects a request argument.
///
/// There is exactly one variant per [`ErrorHttpStatus`]; the variant *is* the
/// status, the payload is the human-readable message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    // 4xx Client Errors
    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Payment Required: {0}")]
    PaymentRequired(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Method Not Allowed: {0}")]
    MethodNotAllowed(String),

    #[error("Not Acceptable: {0}")]
    NotAcceptable(String),

    #[error("Proxy Authentication Required: {0}")]
    ProxyAuthenticationRequired(String),

    #[error("Request Timeout: {0}")]
    RequestTimeout(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Gone: {0}")]
    Gone(String),

    #[error("Length Required: {0}")]
    LengthRequired(String),

    #[error("Precondition Failed: {0}")]
    PreconditionFailed(String),

    #[error("Payload Too Large: {0}")]
    PayloadTooLarge(String),

    #[error("URI Too Long: {0}")]
    UriTooLong(String),

    #[error("Unsupported Media Type: {0}")]
    UnsupportedMediaType(String),

    #[error("Range Not Satisfiable: {0}")]
    RangeNotSatisfiable(String),

    #[error("Expectation Failed: {0}")]
    ExpectationFailed(String),

    #[error("I'm a teapot: {0}")]
    ImATeapot(String),

    #[error("Misdirected Request: {0}")]
    MisdirectedRequest(String),

    #[error("Unprocessable Entity: {0}")]
    UnprocessableEntity(String),

    #[error("Locked: {0}")]
    Locked(String),

    #[error("Failed Dependency: {0}")]
    FailedDependency(String),

    #[error("Too Early: {0}")]
    TooEarly(String),

    #[error("Upgrade Required: {0}")]
    UpgradeRequired(String),

    #[error("Precondition Required: {0}")]
    PreconditionRequired(String),

    #[error("Too Many Requests: {0}")]
    TooManyRequests(String),

    #[error("Request Header Fields Too Large: {0}")]
    RequestHeaderFieldsTooLarge(String),

    #[error("Unavailable For Legal Reasons: {0}")]
    UnavailableForLegalReasons(String),

    // 5xx Server Errors
    #[error("Internal Server Error: {0}")]
    InternalServerError(String),

    #[error("Not Implemented: {0}")]
    NotImplemented(String),

    #[error("Bad Gateway: {0}")]
    BadGateway(String),

    #[error("Service Unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Gateway Timeout: {0}")]
    GatewayTimeout(String),

    #[error("HTTP Version Not Supported: {0}")]
    HttpVersionNotSupported(String),

    #[error("Variant Also Negotiates: {0}")]
    VariantAlsoNegotiates(String),

    #[error("Insufficient Storage: {0}")]
    InsufficientStorage(String),

    #[error("Loop Detected: {0}")]
    LoopDetected(String),

    #[error("Not Extended: {0}")]
    NotExtended(String),

    #[error("Network Authentication Required: {0}")]
    NetworkAuthenticationRequired(String),
}

impl Error {
    /// Build the error dedicated to `status`.
    ///
    /// This is the status code to error constructor table used by the
    /// default exception factory.
    pub fn from_status(status: ErrorHttpStatus, message: impl Into<String>) -> Self {
        let message = message.into();
        match status {
            ErrorHttpStatus::BadRequest => Error::BadRequest(message),
            ErrorHttpStatus::Unauthorized => Error::Unauthorized(message),
            ErrorHttpStatus::PaymentRequired => Error::PaymentRequired(message),
            ErrorHttpStatus::Forbidden => Error::Forbidden(message),
            ErrorHttpStatus::NotFound => Error::NotFound(message),
            ErrorHttpStatus::MethodNotAllowed => Error::MethodNotAllowed(message),
            ErrorHttpStatus::NotAcceptable => Error::NotAcceptable(message),
            ErrorHttpStatus::ProxyAuthenticationRequired => {
                Error::ProxyAuthenticationRequired(message)
            }
            ErrorHttpStatus::RequestTimeout => Error::RequestTimeout(message),
            ErrorHttpStatus::Conflict => Error::Conflict(message),
            ErrorHttpStatus::Gone => Error::Gone(message),
            ErrorHttpStatus::LengthRequired => Error::LengthRequired(message),
            ErrorHttpStatus::PreconditionFailed => Error::PreconditionFailed(message),
            ErrorHttpStatus::PayloadTooLarge => Error::PayloadTooLarge(message),
            ErrorHttpStatus::UriTooLong => Error::UriTooLong(message),
            ErrorHttpStatus::UnsupportedMediaType => Error::UnsupportedMediaType(message),
            ErrorHttpStatus::RangeNotSatisfiable => Error::RangeNotSatisfiable(message),
            ErrorHttpStatus::ExpectationFailed => Error::ExpectationFailed(message),
            ErrorHttpStatus::ImATeapot => Error::ImATeapot(message),
            ErrorHttpStatus::MisdirectedRequest => Error::MisdirectedRequest(message),
            ErrorHttpStatus::UnprocessableEntity => Error::UnprocessableEntity(message),
            ErrorHttpStatus::Locked => Error::Locked(message),
            ErrorHttpStatus::FailedDependency => Error::FailedDependency(message),
            ErrorHttpStatus::TooEarly => Error::TooEarly(message),
            ErrorHttpStatus::UpgradeRequired => Error::UpgradeRequired(message),
            ErrorHttpStatus::PreconditionRequired => Error::PreconditionRequired(message),
            ErrorHttpStatus::TooManyRequests => Error::TooManyRequests(message),
            ErrorHttpStatus::RequestHeaderFieldsTooLarge => {
                Error::RequestHeaderFieldsTooLarge(message)
            }
            ErrorHttpStatus::UnavailableForLegalReasons => {
                Error::UnavailableForLegalReasons(message)
            }
            ErrorHttpStatus::InternalServerError => Error::InternalServerError(message),
            ErrorHttpStatus::NotImplemented => Error::NotImplemented(message),
            ErrorHttpStatus::BadGateway => Error::BadGateway(message),
            ErrorHttpStatus::ServiceUnavailable => Error::ServiceUnavailable(message),
            ErrorHttpStatus::GatewayTimeout => Error::GatewayTimeout(message),
            ErrorHttpStatus::HttpVersionNotSupported => Error::HttpVersionNotSupported(message),
            ErrorHttpStatus::VariantAlsoNegotiates => Error::VariantAlsoNegotiates(message),
            ErrorHttpStatus::InsufficientStorage => Error::InsufficientStorage(message),
            ErrorHttpStatus::LoopDetected => Error::LoopDetected(message),
            ErrorHttpStatus::NotExtended => Error::NotExtended(message),
            ErrorHttpStatus::NetworkAuthenticationRequired => {
                Error::NetworkAuthenticationRequired(message)
            }
        }
    }

    /// Get the status this error maps to
    pub fn status(&self) -> ErrorHttpStatus {
        match self {
            Error::BadRequest(_) => ErrorHttpStatus::BadRequest,
            Error::Unauthorized(_) => ErrorHttpStatus::Unauthorized,
            Error::PaymentRequired(_) => ErrorHttpStatus::PaymentRequired,
            Error::Forbidden(_) => ErrorHttpStatus::Forbidden,
            Error::NotFound(_) => ErrorHttpStatus::NotFound,
            Error::MethodNotAllowed(_) => ErrorHttpStatus::MethodNotAllowed,
            Error::NotAcceptable(_) => ErrorHttpStatus::NotAcceptable,
            Error::ProxyAuthenticationRequired(_) => ErrorHttpStatus::ProxyAuthenticationRequired,
            Error::RequestTimeout(_) => ErrorHttpStatus::RequestTimeout,
            Error::Conflict(_) => ErrorHttpStatus::Conflict,
            Error::Gone(_) => ErrorHttpStatus::Gone,
            Error::LengthRequired(_) => ErrorHttpStatus::LengthRequired,
            Error::PreconditionFailed(_) => ErrorHttpStatus::PreconditionFailed,
            Error::PayloadTooLarge(_) => ErrorHttpStatus::PayloadTooLarge,
            Error::UriTooLong(_) => ErrorHttpStatus::UriTooLong,
            Error::UnsupportedMediaType(_) => ErrorHttpStatus::UnsupportedMediaType,
            Error::RangeNotSatisfiable(_) => ErrorHttpStatus::RangeNotSatisfiable,
            Error::ExpectationFailed(_) => ErrorHttpStatus::ExpectationFailed,
            Error::ImATeapot(_) => ErrorHttpStatus::ImATeapot,
            Error::MisdirectedRequest(_) => ErrorHttpStatus::MisdirectedRequest,
            Error::UnprocessableEntity(_) => ErrorHttpStatus::UnprocessableEntity,
            Error::Locked(_) => ErrorHttpStatus::Locked,
            Error::FailedDependency(_) => ErrorHttpStatus::FailedDependency,
            Error::TooEarly(_) => ErrorHttpStatus::TooEarly,
            Error::UpgradeRequired(_) => ErrorHttpStatus::UpgradeRequired,
            Error::PreconditionRequired(_) => ErrorHttpStatus::PreconditionRequired,
            Error::TooManyRequests(_) => ErrorHttpStatus::TooManyRequests,
            Error::RequestHeaderFieldsTooLarge(_) => ErrorHttpStatus::RequestHeaderFieldsTooLarge,
            Error::UnavailableForLegalReasons(_) => ErrorHttpStatus::UnavailableForLegalReasons,
            Error::InternalServerError(_) => ErrorHttpStatus::InternalServerError,
            Error::NotImplemented(_) => ErrorHttpStatus::NotImplemented,
            Error::BadGateway(_) => ErrorHttpStatus::BadGateway,
            Error::ServiceUnavailable(_) => ErrorHttpStatus::ServiceUnavailable,
            Error::GatewayTimeout(_) => ErrorHttpStatus::GatewayTimeout,
            Error::HttpVersionNotSupported(_) => ErrorHttpStatus::HttpVersionNotSupported,
            Error::VariantAlsoNegotiates(_) => ErrorHttpStatus::VariantAlsoNegotiates,
            Error::InsufficientStorage(_) => ErrorHttpStatus::InsufficientStorage,
            Error::LoopDetected(_) => ErrorHttpStatus::LoopDetected,
            Error::NotExtended(_) => ErrorHttpStatus::NotExtended,
            Error::NetworkAuthenticationRequired(_) => {
                ErrorHttpStatus::NetworkAuthenticationRequired
            }
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        self.status().code()
    }

    /// Get the message without the status prefix
    pub fn message(&self) -> &str {
        match self {
            Error::BadRequest(message)
            | Error::Unauthorized(message)
            | Error::PaymentRequired(message)
            | Error::Forbidden(message)
            | Error::NotFound(message)
            | Error::MethodNotAllowed(message)
            | Error::NotAcceptable(message)
            | Error::ProxyAuthenticationRequired(message)
            | Error::RequestTimeout(message)
            | Error::Conflict(message)
            | Error::Gone(message)
            | Error::LengthRequired(message)
            | Error::PreconditionFailed(message)
            | Error::PayloadTooLarge(message)
            | Error::UriTooLong(message)
            | Error::UnsupportedMediaType(message)
            | Error::RangeNotSatisfiable(message)
            | Error::ExpectationFailed(message)
            | Error::ImATeapot(message)
            | Error::MisdirectedRequest(message)
            | Error::UnprocessableEntity(message)
            | Error::Locked(message)
            | Error::FailedDependency(message)
            | Error::TooEarly(message)
            | Error::UpgradeRequired(message)
            | Error::PreconditionRequired(message)
            | Error::TooManyRequests(message)
            | Error::RequestHeaderFieldsTooLarge(message)
            | Error::UnavailableForLegalReasons(message)
            | Error::InternalServerError(message)
            | Error::NotImplemented(message)
            | Error::BadGateway(message)
            | Error::ServiceUnavailable(message)
            | Error::GatewayTimeout(message)
            | Error::HttpVersionNotSupported(message)
            | Error::VariantAlsoNegotiates(message)
            | Error::InsufficientStorage(message)
            | Error::LoopDetected(message)
            | Error::NotExtended(message)
            | Error::NetworkAuthenticationRequired(message) => message,
        }
    }

    /// Check if this is a client error (4xx)
    pub fn is_client_error(&self) -> bool {
        self.status().is_client_error()
    }

    /// Check if this is a server error (5xx)
    pub fn is_server_error(&self) -> bool {
        self.status().is_server_error()
    }

    /// Response body in the host's standard error shape.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "statusCode": self.status_code(),
            "message": self.message(),
            "error": self.status().reason(),
        })
    }
}
