// Copyright 2026 the Toastline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Anchor corners and their edges.

use core::fmt;
use core::str::FromStr;

/// One of the four container corners a toast is positioned against.
///
/// Toasts sharing an anchor within one container form an *anchor group* and
/// stack away from that corner in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Anchor {
    /// Anchored to the top-left corner.
    TopLeft,
    /// Anchored to the top-right corner.
    #[default]
    TopRight,
    /// Anchored to the bottom-left corner.
    BottomLeft,
    /// Anchored to the bottom-right corner.
    BottomRight,
}

/// The vertical edge a toast's main (stacking) offset is measured from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VerticalEdge {
    /// Offset from the top of the container.
    Top,
    /// Offset from the bottom of the container.
    Bottom,
}

/// The horizontal edge a toast's side offset is measured from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HorizontalEdge {
    /// Offset from the left of the container.
    Left,
    /// Offset from the right of the container.
    Right,
}

impl Anchor {
    /// The vertical edge offsets are measured from for this anchor.
    #[must_use]
    pub const fn vertical_edge(self) -> VerticalEdge {
        match self {
            Self::TopLeft | Self::TopRight => VerticalEdge::Top,
            Self::BottomLeft | Self::BottomRight => VerticalEdge::Bottom,
        }
    }

    /// The horizontal edge the side offset is measured from for this anchor.
    #[must_use]
    pub const fn horizontal_edge(self) -> HorizontalEdge {
        match self {
            Self::TopLeft | Self::BottomLeft => HorizontalEdge::Left,
            Self::TopRight | Self::BottomRight => HorizontalEdge::Right,
        }
    }

    /// Returns `true` for the two top corners.
    #[must_use]
    pub const fn is_top(self) -> bool {
        matches!(self.vertical_edge(), VerticalEdge::Top)
    }

    /// The wire name of this anchor (`"top-right"` and friends).
    ///
    /// These are the values accepted by the `position` configuration key and
    /// the names hosts typically use for anchor marker classes.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TopLeft => "top-left",
            Self::TopRight => "top-right",
            Self::BottomLeft => "bottom-left",
            Self::BottomRight => "bottom-right",
        }
    }

    /// All four anchors, in reading order.
    pub const ALL: [Self; 4] = [
        Self::TopLeft,
        Self::TopRight,
        Self::BottomLeft,
        Self::BottomRight,
    ];
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an anchor from an unrecognized wire name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseAnchorError;

impl fmt::Display for ParseAnchorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(
            "unrecognized anchor; expected one of \
             \"top-left\", \"top-right\", \"bottom-left\", \"bottom-right\"",
        )
    }
}

impl core::error::Error for ParseAnchorError {}

impl FromStr for Anchor {
    type Err = ParseAnchorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top-left" => Ok(Self::TopLeft),
            "top-right" => Ok(Self::TopRight),
            "bottom-left" => Ok(Self::BottomLeft),
            "bottom-right" => Ok(Self::BottomRight),
            _ => Err(ParseAnchorError),
        }
    }
}
