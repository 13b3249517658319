// Copyright 2026 the Toastline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The absolute position a host applies to one stacked toast.

use crate::{Anchor, GroupEntry, appended_offset};

/// The position a toast occupies while it is stacked against a corner.
///
/// While a placement is applied, the host positions the toast absolutely
/// within its container:
///
/// - `main_offset` goes on the anchor's vertical edge
///   ([`Anchor::vertical_edge`]); it grows as toasts accumulate at the
///   corner.
/// - `side_offset` goes on the anchor's horizontal edge
///   ([`Anchor::horizontal_edge`]); it stays at the toast's configured
///   corner margin.
///
/// Hosts also tag the toast with an anchor marker (conventionally the
/// anchor's wire name) so sibling queries can find the group. Clearing a
/// placement restores flow positioning, clears both offsets, and removes the
/// marker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// The corner the toast is anchored to.
    pub anchor: Anchor,
    /// Offset from the anchor's vertical edge, in stacking order.
    pub main_offset: f64,
    /// Offset from the anchor's horizontal edge.
    pub side_offset: f64,
}

impl Placement {
    /// Computes the placement for a toast joining an anchor group.
    ///
    /// `margin` is the toast's configured corner margin and `predecessors`
    /// are the already-placed same-anchor siblings in document order,
    /// excluding the toast being placed.
    ///
    /// ```rust
    /// use toastline_stack::{Anchor, Placement};
    ///
    /// // First toast at a corner: margin on both edges.
    /// let p = Placement::initial(Anchor::BottomLeft, 10.0, &[]);
    /// assert_eq!((p.main_offset, p.side_offset), (10.0, 10.0));
    /// ```
    #[must_use]
    pub fn initial(anchor: Anchor, margin: f64, predecessors: &[GroupEntry]) -> Self {
        Self {
            anchor,
            main_offset: appended_offset(margin, predecessors),
            side_offset: margin.max(0.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_placement_stacks_after_predecessors() {
        let predecessors = [
            GroupEntry {
                margin: 10.0,
                extent: 50.0,
                trailing_margin: 0.0,
            },
            GroupEntry {
                margin: 10.0,
                extent: 30.0,
                trailing_margin: 5.0,
            },
        ];
        let p = Placement::initial(Anchor::TopRight, 10.0, &predecessors);
        assert_eq!(p.anchor, Anchor::TopRight);
        assert_eq!(p.main_offset, 95.0);
        assert_eq!(p.side_offset, 10.0);
    }

    #[test]
    fn side_offset_never_goes_negative() {
        let p = Placement::initial(Anchor::TopLeft, -4.0, &[]);
        assert_eq!(p.side_offset, 0.0);
        assert_eq!(p.main_offset, 0.0);
    }
}
