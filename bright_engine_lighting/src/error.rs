//! Error types for the Bright Engine lighting core
//!
//! This module defines the error types used throughout the crate, plus the
//! engine_err!/engine_bail! macros that log an error through the logging
//! system at the point it is constructed.
//!
//! The shading routine itself is total and never returns an error; errors
//! come from the setup surfaces (light rig validation) and from batch
//! evaluation misuse (mismatched slice lengths).

use std::fmt;

/// Result type for lighting core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Lighting core errors
#[derive(Debug, Clone)]
pub enum Error {
    /// Light descriptor rejected by validation (duplicate rig name,
    /// non-finite field, negative specular exponent, zero direction)
    InvalidLight(String),

    /// Malformed call input (batch evaluation slice length mismatch)
    InvalidInput(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidLight(msg) => write!(f, "Invalid light: {}", msg),
            Error::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

// ===== ERROR MACROS =====

/// Construct an [`Error::InvalidLight`], logging it at ERROR severity
/// with file:line information.
///
/// Evaluates to the error value; pair with `ok_or_else` or wrap in `Err`.
///
/// # Example
///
/// ```no_run
/// # use bright_engine_lighting::engine_err;
/// let err = engine_err!("bright::LightRig", "Duplicate light name '{}'", "sun");
/// ```
#[macro_export]
macro_rules! engine_err {
    ($source:expr, $($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::log::log_detailed(
            $crate::log::LogSeverity::Error,
            $source,
            message.clone(),
            file!(),
            line!()
        );
        $crate::bright::Error::InvalidLight(message)
    }};
}

/// Log and return an [`Error::InvalidLight`] from the current function.
///
/// Shorthand for `return Err(engine_err!(...))`.
///
/// # Example
///
/// ```no_run
/// # use bright_engine_lighting::{engine_bail, bright::Result};
/// fn validate(name: &str) -> Result<()> {
///     if name.is_empty() {
///         engine_bail!("bright::LightRig", "Light name must not be empty");
///     }
///     Ok(())
/// }
/// ```
#[macro_export]
macro_rules! engine_bail {
    ($source:expr, $($arg:tt)*) => {
        return Err($crate::engine_err!($source, $($arg)*))
    };
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
