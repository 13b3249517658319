// Copyright 2026 the Toastline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Live rendered geometry of a single toast.

use kurbo::Rect;

use crate::Anchor;

/// A snapshot of one toast's rendered geometry, as freshly reported by the
/// display surface.
///
/// Hosts are expected to re-query this on every stacking pass rather than
/// caching it; the offset math must reflect current display-surface truth.
///
/// A toast that has not been laid out yet reports `bounds: None`. Such a
/// toast contributes a zero extent and the computation proceeds; a later
/// layout pass corrects the drift.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ToastMetrics {
    /// Rendered bounds, or `None` while the toast has no layout.
    pub bounds: Option<Rect>,
    /// Rendered margin above the toast.
    pub margin_top: f64,
    /// Rendered margin below the toast.
    pub margin_bottom: f64,
}

impl ToastMetrics {
    /// Creates metrics from rendered bounds and vertical margins.
    #[must_use]
    pub const fn new(bounds: Rect, margin_top: f64, margin_bottom: f64) -> Self {
        Self {
            bounds: Some(bounds),
            margin_top,
            margin_bottom,
        }
    }

    /// Metrics for a toast whose geometry cannot be determined yet.
    #[must_use]
    pub const fn unavailable() -> Self {
        Self {
            bounds: None,
            margin_top: 0.0,
            margin_bottom: 0.0,
        }
    }

    /// The extent along the stacking axis (the rendered height).
    ///
    /// Unavailable, negative, or non-finite geometry degrades to `0.0`.
    #[must_use]
    pub fn extent(&self) -> f64 {
        match self.bounds {
            Some(rect) => {
                let height = rect.height();
                if height.is_finite() { height.max(0.0) } else { 0.0 }
            }
            None => 0.0,
        }
    }

    /// The margin on the side facing away from `anchor`.
    ///
    /// This is the spacing consumed before the next stacked toast: the bottom
    /// margin for top anchors and the top margin for bottom anchors.
    #[must_use]
    pub fn trailing_margin(&self, anchor: Anchor) -> f64 {
        let margin = if anchor.is_top() {
            self.margin_bottom
        } else {
            self.margin_top
        };
        if margin.is_finite() { margin.max(0.0) } else { 0.0 }
    }
}
