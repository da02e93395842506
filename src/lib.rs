// optpipes - Null-tolerant argument parse pipes
//
// This library provides pipes that parse booleans, enum members, floats,
// integers and UUIDs from raw request arguments while letting absent
// arguments through untouched.

// Re-export core functionality
pub use optpipes_core::*;

// Re-export optional crates
#[cfg(feature = "validation")]
pub use optpipes_validation;

// Prelude for common imports
pub mod prelude {
    pub use crate::{
        ArgumentMetadata, Error, ErrorHttpStatus, ExceptionFactory, ParamType, PipeTransform,
        Value, exception_factory,
    };

    #[cfg(feature = "validation")]
    pub use crate::optpipes_validation::{
        EnumDefinition, ParseBoolOptionalPipe, ParseEnumOptionalPipe, ParseFloatOptionalPipe,
        ParseIntOptionalPipe, ParseUuidOptionalPipe, ParseUuidOptionalPipeOptions, PipeConfigError,
        PipeOptions, UuidVersion,
    };
}
