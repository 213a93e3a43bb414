#![forbid(unsafe_code)]

//! Error model of the facade.
//!
//! Interaction never fails: stray events, empty pane lists and out-of-range
//! clicks are no-ops. What can fail is loading configuration or reading a
//! session script from disk, and both end up in [`Error`].

use std::fmt;

use carousel_widgets::config::CarouselConfigError;

/// Top-level error type for carousel hosts.
#[derive(Debug)]
pub enum Error {
    /// Configuration could not be loaded or is invalid.
    Config(CarouselConfigError),
    /// Raw I/O error (convenience variant for `?` on io::Result).
    Io(std::io::Error),
    /// Host-provided input could not be interpreted.
    Input(String),
}

/// Standard result type for carousel APIs.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Short machine-readable category, suitable as a tracing field.
    #[must_use]
    pub fn error_type(&self) -> &'static str {
        match self {
            Self::Config(CarouselConfigError::Validation(_)) => "config.validation",
            Self::Config(_) => "config.load",
            Self::Io(_) => "io",
            Self::Input(_) => "input",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(err) => write!(f, "configuration: {err}"),
            Self::Io(err) => write!(f, "{err}"),
            Self::Input(msg) => write!(f, "invalid input: {msg}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::Io(err) => Some(err),
            Self::Input(_) => None,
        }
    }
}

impl From<CarouselConfigError> for Error {
    fn from(err: CarouselConfigError) -> Self {
        Self::Config(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}
