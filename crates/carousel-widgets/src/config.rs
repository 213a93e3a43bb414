#![forbid(unsafe_code)]

//! Carousel configuration.
//!
//! [`CarouselConfig`] groups every tunable of the widget. With the `config`
//! feature it can be loaded from TOML or JSON; missing keys keep their
//! defaults.
//!
//! ```toml
//! class_name = "gallery"
//! active_class = "is-current"
//! initial_select = 0
//! swipe_ratio = 0.25
//! resize_debounce_ms = 200
//! key_throttle_ms = 150
//! ```
//!
//! ```rust,ignore
//! let config = CarouselConfig::from_toml_file("carousel.toml")?;
//! ```
//!
//! # Defaults
//!
//! | field | default |
//! |---|---|
//! | `class_name` | `""` |
//! | `active_class` | `"is-active"` |
//! | `initial_select` | `2` |
//! | `swipe_ratio` | `0.2` |
//! | `resize_debounce_ms` | `300` |
//! | `key_throttle_ms` | `150` |

#[cfg(feature = "config")]
use std::path::Path;
use std::time::Duration;

#[cfg(feature = "config")]
use serde::{Deserialize, Serialize};

use carousel_core::gesture::{DEFAULT_SWIPE_RATIO, SwipePolicy};
use carousel_core::rate_limit::{DEFAULT_KEY_THROTTLE, DEFAULT_RESIZE_DEBOUNCE};

use crate::selector::DEFAULT_ACTIVE_CLASS;

/// Selected index a freshly built carousel starts on.
pub const DEFAULT_INITIAL_SELECT: usize = 2;

/// Tunables of a [`Carousel`](crate::carousel::Carousel).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "config", serde(default))]
pub struct CarouselConfig {
    /// Class on the root wrapper.
    pub class_name: String,
    /// Class applied to the selected pane and indicator.
    pub active_class: String,
    /// Selection on construction; wrapped into range like any other target.
    pub initial_select: usize,
    /// Fraction of the pane width a drag must exceed to commit.
    pub swipe_ratio: f64,
    /// Quiet period before a resize triggers re-measurement, in milliseconds.
    pub resize_debounce_ms: u64,
    /// Minimum spacing between keyboard navigation steps, in milliseconds.
    pub key_throttle_ms: u64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            class_name: String::new(),
            active_class: DEFAULT_ACTIVE_CLASS.to_owned(),
            initial_select: DEFAULT_INITIAL_SELECT,
            swipe_ratio: DEFAULT_SWIPE_RATIO,
            resize_debounce_ms: DEFAULT_RESIZE_DEBOUNCE.as_millis() as u64,
            key_throttle_ms: DEFAULT_KEY_THROTTLE.as_millis() as u64,
        }
    }
}

impl CarouselConfig {
    /// Set the root wrapper class.
    #[must_use]
    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }

    /// Set the active class.
    #[must_use]
    pub fn with_active_class(mut self, active_class: impl Into<String>) -> Self {
        self.active_class = active_class.into();
        self
    }

    /// Set the initial selection.
    #[must_use]
    pub fn with_initial_select(mut self, initial_select: usize) -> Self {
        self.initial_select = initial_select;
        self
    }

    /// Set the swipe commit ratio.
    #[must_use]
    pub fn with_swipe_ratio(mut self, swipe_ratio: f64) -> Self {
        self.swipe_ratio = swipe_ratio;
        self
    }

    /// Swipe policy derived from this config.
    #[must_use]
    pub fn swipe_policy(&self) -> SwipePolicy {
        SwipePolicy::new(self.swipe_ratio)
    }

    /// Resize quiet period.
    #[must_use]
    pub fn resize_debounce(&self) -> Duration {
        Duration::from_millis(self.resize_debounce_ms)
    }

    /// Keyboard throttle interval.
    #[must_use]
    pub fn key_throttle(&self) -> Duration {
        Duration::from_millis(self.key_throttle_ms)
    }

    /// Load from a TOML string.
    #[cfg(feature = "config")]
    pub fn from_toml_str(s: &str) -> Result<Self, CarouselConfigError> {
        toml::from_str(s).map_err(CarouselConfigError::Toml)
    }

    /// Load from a TOML file on disk.
    #[cfg(feature = "config")]
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, CarouselConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(CarouselConfigError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Load from a JSON string.
    #[cfg(feature = "config")]
    pub fn from_json_str(s: &str) -> Result<Self, CarouselConfigError> {
        serde_json::from_str(s).map_err(CarouselConfigError::Json)
    }

    /// Load from a JSON file on disk.
    #[cfg(feature = "config")]
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, CarouselConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(CarouselConfigError::Io)?;
        Self::from_json_str(&content)
    }

    /// Validate all parameters are within acceptable ranges.
    ///
    /// Returns a list of validation errors. An empty list means the config
    /// is valid.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if !self.swipe_ratio.is_finite() || self.swipe_ratio < 0.0 || self.swipe_ratio > 1.0 {
            errors.push(format!(
                "swipe_ratio must be in [0, 1], got {}",
                self.swipe_ratio
            ));
        }

        if self.active_class.trim().is_empty() {
            errors.push("active_class must not be empty".into());
        }

        if self.active_class.split_whitespace().count() > 1 {
            errors.push(format!(
                "active_class must be a single class, got {:?}",
                self.active_class
            ));
        }

        if self.key_throttle_ms == 0 {
            errors.push("key_throttle_ms must be > 0".into());
        }

        errors
    }

    /// Validate, turning any problem into an error.
    pub fn validated(self) -> Result<Self, CarouselConfigError> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(self)
        } else {
            Err(CarouselConfigError::Validation(errors))
        }
    }
}

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

/// Errors that can occur when loading a carousel configuration.
#[derive(Debug)]
pub enum CarouselConfigError {
    /// I/O error reading a file.
    Io(std::io::Error),
    /// TOML parse error.
    #[cfg(feature = "config")]
    Toml(toml::de::Error),
    /// JSON parse error.
    #[cfg(feature = "config")]
    Json(serde_json::Error),
    /// Validation errors.
    Validation(Vec<String>),
}

impl std::fmt::Display for CarouselConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            #[cfg(feature = "config")]
            Self::Toml(e) => write!(f, "TOML parse error: {e}"),
            #[cfg(feature = "config")]
            Self::Json(e) => write!(f, "JSON parse error: {e}"),
            Self::Validation(errors) => {
                write!(f, "validation errors: {}", errors.join("; "))
            }
        }
    }
}

impl std::error::Error for CarouselConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            #[cfg(feature = "config")]
            Self::Toml(e) => Some(e),
            #[cfg(feature = "config")]
            Self::Json(e) => Some(e),
            Self::Validation(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_widget_behavior() {
        let config = CarouselConfig::default();
        assert_eq!(config.class_name, "");
        assert_eq!(config.active_class, "is-active");
        assert_eq!(config.initial_select, 2);
        assert_eq!(config.swipe_policy(), SwipePolicy::default());
        assert_eq!(config.resize_debounce(), Duration::from_millis(300));
        assert_eq!(config.key_throttle(), Duration::from_millis(150));
    }

    #[test]
    fn default_validates_clean() {
        let errors = CarouselConfig::default().validate();
        assert!(errors.is_empty(), "default should validate: {errors:?}");
    }

    #[test]
    fn validate_catches_bad_ratio() {
        let config = CarouselConfig::default().with_swipe_ratio(1.5);
        let errors = config.validate();
        assert!(errors.iter().any(|e| e.contains("swipe_ratio")));

        let nan = CarouselConfig::default().with_swipe_ratio(f64::NAN);
        assert!(!nan.validate().is_empty());
    }

    #[test]
    fn validate_catches_bad_active_class() {
        let empty = CarouselConfig::default().with_active_class("  ");
        assert!(empty.validate().iter().any(|e| e.contains("must not be empty")));

        let multi = CarouselConfig::default().with_active_class("a b");
        assert!(multi.validate().iter().any(|e| e.contains("single class")));
    }

    #[test]
    fn validated_wraps_errors() {
        let mut config = CarouselConfig::default();
        config.key_throttle_ms = 0;
        let err = config.validated().unwrap_err();
        assert!(err.to_string().contains("key_throttle_ms"));
        assert!(std::error::Error::source(&err).is_none());
    }

    #[test]
    fn builders() {
        let config = CarouselConfig::default()
            .with_class_name("gallery")
            .with_initial_select(0);
        assert_eq!(config.class_name, "gallery");
        assert_eq!(config.initial_select, 0);
    }

    #[cfg(feature = "config")]
    #[test]
    fn toml_partial_keeps_defaults() {
        let config = CarouselConfig::from_toml_str(
            r#"
            class_name = "gallery"
            swipe_ratio = 0.3
            "#,
        )
        .unwrap();
        assert_eq!(config.class_name, "gallery");
        assert_eq!(config.swipe_ratio, 0.3);
        assert_eq!(config.active_class, "is-active");
        assert_eq!(config.initial_select, 2);
    }

    #[cfg(feature = "config")]
    #[test]
    fn json_roundtrip() {
        let config = CarouselConfig::default().with_initial_select(4);
        let json = serde_json::to_string(&config).unwrap();
        let back = CarouselConfig::from_json_str(&json).unwrap();
        assert_eq!(back, config);
    }

    #[cfg(feature = "config")]
    #[test]
    fn bad_toml_reports_parse_error() {
        let err = CarouselConfig::from_toml_str("swipe_ratio = \"wide\"").unwrap_err();
        assert!(matches!(err, CarouselConfigError::Toml(_)));
        assert!(err.to_string().starts_with("TOML parse error"));
    }

    #[cfg(feature = "config")]
    #[test]
    fn missing_file_is_io_error() {
        let err = CarouselConfig::from_toml_file("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, CarouselConfigError::Io(_)));
    }
}
