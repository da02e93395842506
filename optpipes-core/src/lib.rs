// Core contracts for optpipes
// Error statuses, the host error type, exception factories and the pipe trait

pub mod error;
pub mod exception;
pub mod pipe;
pub mod status;

// Re-export commonly used types
pub use error::*;
pub use exception::*;
pub use pipe::*;
pub use status::*;

// Pipes receive raw arguments as JSON values
pub use serde_json::Value;
