// Copyright 2026 the Toastline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Configuration resolution and schema validation.
//!
//! A toast's configuration is an immutable snapshot assembled once at
//! construction from three layers, lowest to highest precedence:
//!
//! 1. the fixed defaults ([`ToastConfig::default`]),
//! 2. attribute-style data attached to the host node,
//! 3. explicit caller overrides.
//!
//! The attribute-style layers arrive as `(key, `[`Value`]`)` pairs so hosts
//! can forward whatever loosely-typed data their node model carries. Known
//! keys are type-checked against the fixed schema and resolution fails fast
//! on the first mismatch; unknown keys are ignored, since node data is
//! commonly shared with other consumers.

use alloc::string::{String, ToString};
use core::fmt;

use toastline_stack::Anchor;

/// Configuration key for [`ToastConfig::animation`].
pub const KEY_ANIMATION: &str = "animation";
/// Configuration key for [`ToastConfig::autohide`].
pub const KEY_AUTOHIDE: &str = "autohide";
/// Configuration key for [`ToastConfig::delay_ms`].
pub const KEY_DELAY: &str = "delay";
/// Configuration key for [`ToastConfig::anchor`].
pub const KEY_POSITION: &str = "position";
/// Configuration key for [`ToastConfig::margin_px`].
pub const KEY_POSITION_MARGIN: &str = "position-margin";

/// A loosely-typed configuration value from an attribute-style source.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A boolean flag.
    Bool(bool),
    /// A numeric value.
    Number(f64),
    /// A string value.
    Str(String),
}

impl Value {
    /// The schema name of this value's type, as reported in errors.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "boolean",
            Self::Number(_) => "number",
            Self::Str(_) => "string",
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<Anchor> for Value {
    fn from(v: Anchor) -> Self {
        Self::Str(v.as_str().to_string())
    }
}

/// Error raised when a configuration source fails the fixed schema.
///
/// Resolution fails on the first offending key and constructs no partial
/// state.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A known key carried a value of the wrong type.
    TypeMismatch {
        /// The offending configuration key.
        key: &'static str,
        /// The type the schema requires for this key.
        expected: &'static str,
        /// The type the source actually supplied.
        found: &'static str,
    },
    /// The `position` key named an anchor that does not exist.
    UnknownAnchor {
        /// The rejected anchor name.
        value: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TypeMismatch {
                key,
                expected,
                found,
            } => write!(
                f,
                "option {key:?} provided type {found:?} but expected type {expected:?}",
            ),
            Self::UnknownAnchor { value } => {
                write!(f, "option \"position\" has unknown anchor {value:?}")
            }
        }
    }
}

impl core::error::Error for ConfigError {}

/// The validated, immutable configuration of one toast.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToastConfig {
    /// Whether show/hide animate and wait for transition completion.
    pub animation: bool,
    /// Whether a fully shown toast hides itself after [`Self::delay_ms`].
    pub autohide: bool,
    /// Autohide delay in milliseconds, measured from show finalization.
    pub delay_ms: u64,
    /// The corner this toast stacks against.
    pub anchor: Anchor,
    /// The corner margin in logical pixels, applied on both anchor edges.
    pub margin_px: f64,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            animation: true,
            autohide: true,
            delay_ms: 500,
            anchor: Anchor::TopRight,
            margin_px: 10.0,
        }
    }
}

impl ToastConfig {
    /// Resolves a configuration from attribute-style sources.
    ///
    /// `node_data` is the data attached to the host node and `overrides` are
    /// the explicit caller overrides; later sources win. Fails fast on the
    /// first schema violation.
    ///
    /// ```rust
    /// use toastline_lifecycle::{KEY_AUTOHIDE, KEY_DELAY, ToastConfig, Value};
    ///
    /// let config = ToastConfig::resolve(
    ///     &[(KEY_DELAY, Value::Number(2000.0))],
    ///     &[(KEY_AUTOHIDE, Value::Bool(false))],
    /// )
    /// .unwrap();
    /// assert_eq!(config.delay_ms, 2000);
    /// assert!(!config.autohide);
    /// assert!(config.animation);
    /// ```
    pub fn resolve(
        node_data: &[(&str, Value)],
        overrides: &[(&str, Value)],
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        for (key, value) in node_data.iter().chain(overrides) {
            config.apply(key, value)?;
        }
        Ok(config)
    }

    fn apply(&mut self, key: &str, value: &Value) -> Result<(), ConfigError> {
        match key {
            KEY_ANIMATION => self.animation = expect_bool(KEY_ANIMATION, value)?,
            KEY_AUTOHIDE => self.autohide = expect_bool(KEY_AUTOHIDE, value)?,
            KEY_DELAY => {
                let ms = expect_number(KEY_DELAY, value)?;
                // Negative and non-finite delays clamp to zero (fire on the
                // next poll), matching a deferred callback armed with a
                // nonsense duration.
                #[allow(
                    clippy::cast_possible_truncation,
                    reason = "clamped to a non-negative finite value first"
                )]
                let ms = if ms.is_finite() { ms.max(0.0) as u64 } else { 0 };
                self.delay_ms = ms;
            }
            KEY_POSITION => {
                let name = expect_str(KEY_POSITION, value)?;
                self.anchor = name.parse().map_err(|_| ConfigError::UnknownAnchor {
                    value: name.to_string(),
                })?;
            }
            KEY_POSITION_MARGIN => {
                self.margin_px = expect_number(KEY_POSITION_MARGIN, value)?;
            }
            // Unknown keys belong to other consumers of the node's data.
            _ => {}
        }
        Ok(())
    }
}

fn expect_bool(key: &'static str, value: &Value) -> Result<bool, ConfigError> {
    match value {
        Value::Bool(v) => Ok(*v),
        other => Err(ConfigError::TypeMismatch {
            key,
            expected: "boolean",
            found: other.type_name(),
        }),
    }
}

fn expect_number(key: &'static str, value: &Value) -> Result<f64, ConfigError> {
    match value {
        Value::Number(v) => Ok(*v),
        other => Err(ConfigError::TypeMismatch {
            key,
            expected: "number",
            found: other.type_name(),
        }),
    }
}

fn expect_str<'v>(key: &'static str, value: &'v Value) -> Result<&'v str, ConfigError> {
    match value {
        Value::Str(v) => Ok(v),
        other => Err(ConfigError::TypeMismatch {
            key,
            expected: "string",
            found: other.type_name(),
        }),
    }
}
