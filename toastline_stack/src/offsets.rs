// Copyright 2026 the Toastline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Offset accumulation over an ordered anchor group.

use smallvec::SmallVec;

/// One member of an anchor group, as the offset math sees it.
///
/// Entries are supplied in document order; that order alone determines
/// stacking order (earlier entries sit closer to the anchor corner).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GroupEntry {
    /// This toast's configured corner margin.
    pub margin: f64,
    /// Rendered extent along the stacking axis.
    pub extent: f64,
    /// Rendered margin on the side facing away from the anchor.
    pub trailing_margin: f64,
}

impl GroupEntry {
    /// The stacking-axis space this entry consumes before its successor.
    fn consumed(&self) -> f64 {
        sanitized(self.extent) + sanitized(self.trailing_margin)
    }
}

/// Negative and non-finite inputs degrade to `0.0` rather than corrupting
/// every offset after them.
fn sanitized(value: f64) -> f64 {
    if value.is_finite() { value.max(0.0) } else { 0.0 }
}

/// The offset of the entry at `index` from the anchor edge.
///
/// The policy is a predecessor prefix sum: the entry's own corner margin plus
/// the extent and trailing margin of every entry before it. An index of 0
/// therefore needs no neighbor data at all, and for equal margins the offsets
/// are monotonic with no overlap along the stacking axis.
///
/// # Panics
///
/// Panics if `index >= entries.len()`.
#[must_use]
pub fn entry_offset(entries: &[GroupEntry], index: usize) -> f64 {
    let own_margin = sanitized(entries[index].margin);
    entries[..index]
        .iter()
        .fold(own_margin, |offset, entry| offset + entry.consumed())
}

/// The offsets of every entry in the group, in order.
///
/// Equivalent to calling [`entry_offset`] for each index, computed in one
/// forward pass.
#[must_use]
pub fn stack_offsets(entries: &[GroupEntry]) -> SmallVec<[f64; 4]> {
    let mut offsets = SmallVec::with_capacity(entries.len());
    let mut consumed_before = 0.0;
    for entry in entries {
        offsets.push(sanitized(entry.margin) + consumed_before);
        consumed_before += entry.consumed();
    }
    offsets
}

/// The offset for a toast appended after `predecessors`.
///
/// This is the initial-placement computation: `margin` is the new toast's own
/// corner margin and `predecessors` are the already-placed same-anchor
/// siblings, in document order, *excluding* the toast being placed.
#[must_use]
pub fn appended_offset(margin: f64, predecessors: &[GroupEntry]) -> f64 {
    predecessors
        .iter()
        .fold(sanitized(margin), |offset, entry| offset + entry.consumed())
}
