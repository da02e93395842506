// Error HTTP status codes

use serde::{Deserialize, Serialize};
use std::fmt;

/// HTTP status codes a pipe is allowed to fail with.
///
/// Only client (4xx) and server (5xx) error statuses are representable, so a
/// pipe can never be configured to "fail" with `200 OK` or a redirect.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub enum ErrorHttpStatus {
    // 4xx Client Errors
    #[default]
    BadRequest = 400,
    Unauthorized = 401,
    PaymentRequired = 402,
    Forbidden = 403,
    NotFound = 404,
    MethodNotAllowed = 405,
    NotAcceptable = 406,
    ProxyAuthenticationRequired = 407,
    RequestTimeout = 408,
    Conflict = 409,
    Gone = 410,
    LengthRequired = 411,
    PreconditionFailed = 412,
    PayloadTooLarge = 413,
    UriTooLong = 414,
    UnsupportedMediaType = 415,
    RangeNotSatisfiable = 416,
    ExpectationFailed = 417,
    ImATeapot = 418,
    MisdirectedRequest = 421,
    UnprocessableEntity = 422,
    Locked = 423,
    FailedDependency = 424,
    TooEarly = 425,
    UpgradeRequired = 426,
    PreconditionRequired = 428,
    TooManyRequests = 429,
    RequestHeaderFieldsTooLarge = 431,
    UnavailableForLegalReasons = 451,

    // 5xx Server Errors
    InternalServerError = 500,
    NotImplemented = 501,
    BadGateway = 502,
    ServiceUnavailable = 503,
    GatewayTimeout = 504,
    HttpVersionNotSupported = 505,
    VariantAlsoNegotiates = 506,
    InsufficientStorage = 507,
    LoopDetected = 508,
    NotExtended = 510,
    NetworkAuthenticationRequired = 511,
}

impl ErrorHttpStatus {
    /// Every error status, in ascending code order.
    pub const ALL: [ErrorHttpStatus; 40] = [
        ErrorHttpStatus::BadRequest,
        ErrorHttpStatus::Unauthorized,
        ErrorHttpStatus::PaymentRequired,
        ErrorHttpStatus::Forbidden,
        ErrorHttpStatus::NotFound,
        ErrorHttpStatus::MethodNotAllowed,
        ErrorHttpStatus::NotAcceptable,
        ErrorHttpStatus::ProxyAuthenticationRequired,
        ErrorHttpStatus::RequestTimeout,
        ErrorHttpStatus::Conflict,
        ErrorHttpStatus::Gone,
        ErrorHttpStatus::LengthRequired,
        ErrorHttpStatus::PreconditionFailed,
        ErrorHttpStatus::PayloadTooLarge,
        ErrorHttpStatus::UriTooLong,
        ErrorHttpStatus::UnsupportedMediaType,
        ErrorHttpStatus::RangeNotSatisfiable,
        ErrorHttpStatus::ExpectationFailed,
        ErrorHttpStatus::ImATeapot,
        ErrorHttpStatus::MisdirectedRequest,
        ErrorHttpStatus::UnprocessableEntity,
        ErrorHttpStatus::Locked,
        ErrorHttpStatus::FailedDependency,
        ErrorHttpStatus::TooEarly,
        ErrorHttpStatus::UpgradeRequired,
        ErrorHttpStatus::PreconditionRequired,
        ErrorHttpStatus::TooManyRequests,
        ErrorHttpStatus::RequestHeaderFieldsTooLarge,
        ErrorHttpStatus::UnavailableForLegalReasons,
        ErrorHttpStatus::InternalServerError,
        ErrorHttpStatus::NotImplemented,
        ErrorHttpStatus::BadGateway,
        ErrorHttpStatus::ServiceUnavailable,
        ErrorHttpStatus::GatewayTimeout,
        ErrorHttpStatus::HttpVersionNotSupported,
        ErrorHttpStatus::VariantAlsoNegotiates,
        ErrorHttpStatus::InsufficientStorage,
        ErrorHttpStatus::LoopDetected,
        ErrorHttpStatus::NotExtended,
        ErrorHttpStatus::NetworkAuthenticationRequired,
    ];

    /// Get the numeric status code
    pub fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the reason phrase for the status code
    pub fn reason(&self) -> &'static str {
        match self {
            ErrorHttpStatus::BadRequest => "Bad Request",
            ErrorHttpStatus::Unauthorized => "Unauthorized",
            ErrorHttpStatus::PaymentRequired => "Payment Required",
            ErrorHttpStatus::Forbidden => "Forbidden",
            ErrorHttpStatus::NotFound => "Not Found",
            ErrorHttpStatus::MethodNotAllowed => "Method Not Allowed",
            ErrorHttpStatus::NotAcceptable => "Not Acceptable",
            ErrorHttpStatus::ProxyAuthenticationRequired => "Proxy Authentication Required",
            ErrorHttpStatus::RequestTimeout => "Request Timeout",
            ErrorHttpStatus::Conflict => "Conflict",
            ErrorHttpStatus::Gone => "Gone",
            ErrorHttpStatus::LengthRequired => "Length Required",
            ErrorHttpStatus::PreconditionFailed => "Precondition Failed",
            ErrorHttpStatus::PayloadTooLarge => "Payload Too Large",
            ErrorHttpStatus::UriTooLong => "URI Too Long",
            ErrorHttpStatus::UnsupportedMediaType => "Unsupported Media Type",
            ErrorHttpStatus::RangeNotSatisfiable => "Range Not Satisfiable",
            ErrorHttpStatus::ExpectationFailed => "Expectation Failed",
            ErrorHttpStatus::ImATeapot => "I'm a teapot",
            ErrorHttpStatus::MisdirectedRequest => "Misdirected Request",
            ErrorHttpStatus::UnprocessableEntity => "Unprocessable Entity",
            ErrorHttpStatus::Locked => "Locked",
            ErrorHttpStatus::FailedDependency => "Failed Dependency",
            ErrorHttpStatus::TooEarly => "Too Early",
            ErrorHttpStatus::UpgradeRequired => "Upgrade Required",
            ErrorHttpStatus::PreconditionRequired => "Precondition Required",
            ErrorHttpStatus::TooManyRequests => "Too Many Requests",
            ErrorHttpStatus::RequestHeaderFieldsTooLarge => "Request Header Fields Too Large",
            ErrorHttpStatus::UnavailableForLegalReasons => "Unavailable For Legal Reasons",
            ErrorHttpStatus::InternalServerError => "Internal Server Error",
            ErrorHttpStatus::NotImplemented => "Not Implemented",
            ErrorHttpStatus::BadGateway => "Bad Gateway",
            ErrorHttpStatus::ServiceUnavailable => "Service Unavailable",
            ErrorHttpStatus::GatewayTimeout => "Gateway Timeout",
            ErrorHttpStatus::HttpVersionNotSupported => "HTTP Version Not Supported",
            ErrorHttpStatus::VariantAlsoNegotiates => "Variant Also Negotiates",
            ErrorHttpStatus::InsufficientStorage => "Insufficient Storage",
            ErrorHttpStatus::LoopDetected => "Loop Detected",
            ErrorHttpStatus::NotExtended => "Not Extended",
            ErrorHttpStatus::NetworkAuthenticationRequired => "Network Authentication Required",
        }
    }

    /// Check if status is client error (4xx)
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.code())
    }

    /// Check if status is server error (5xx)
    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.code())
    }

    /// Create status from u16 code
    ///
    /// Returns `None` for unknown codes and for non-error codes (1xx-3xx).
    pub fn from_code(code: u16) -> Option<Self> {
        Self::ALL.iter().copied().find(|status| status.code() == code)
    }
}

impl fmt::Display for ErrorHttpStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.code(), self.reason())
    }
}

impl From<ErrorHttpStatus> for u16 {
    fn from(status: ErrorHttpStatus) -> Self {
        status.code()
    }
}

/// Returned when a numeric code is not a known 4xx/5xx status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{0} is not an HTTP error status code")]
pub struct NotAnErrorStatus(pub u16);

impl TryFrom<u16> for ErrorHttpStatus {
    type Error = NotAnErrorStatus;

    fn try_from(code: u16) -> Result<Self, Self::Error> {
        Self::from_code(code).ok_or(NotAnErrorStatus(code))
    }
}
