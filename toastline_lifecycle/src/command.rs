// Copyright 2026 the Toastline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The closed operation set behind string dispatch.
//!
//! Hosts that drive toasts from loosely-typed input (declarative markup,
//! scripting bridges) go through [`Toast::invoke`](crate::Toast::invoke),
//! which parses the operation name into this closed set. An unrecognized
//! name fails with [`InvokeError::UnknownOperation`] before anything is
//! mutated; typed callers use the direct methods and never see this module.

use alloc::string::{String, ToString};
use core::fmt;
use core::str::FromStr;

/// A toast operation addressable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// [`Toast::show`](crate::Toast::show).
    Show,
    /// [`Toast::hide`](crate::Toast::hide).
    Hide,
    /// [`Toast::dispose`](crate::Toast::dispose).
    Dispose,
}

impl Command {
    /// The wire name of this command.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Show => "show",
            Self::Hide => "hide",
            Self::Dispose => "dispose",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error raised by string dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvokeError {
    /// The requested operation name is not part of the command set.
    UnknownOperation {
        /// The rejected name.
        name: String,
    },
}

impl fmt::Display for InvokeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownOperation { name } => write!(f, "no operation named {name:?}"),
        }
    }
}

impl core::error::Error for InvokeError {}

impl FromStr for Command {
    type Err = InvokeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "show" => Ok(Self::Show),
            "hide" => Ok(Self::Hide),
            "dispose" => Ok(Self::Dispose),
            _ => Err(InvokeError::UnknownOperation {
                name: s.to_string(),
            }),
        }
    }
}
