// Copyright 2026 the Toastline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The display-surface abstraction the controller drives.
//!
//! The controller never owns widgets or layout; everything it needs from the
//! host display system goes through [`Surface`]. The contract mirrors how
//! the stacking math sees the world:
//!
//! - Visual state is a small set of marker classes ([`ClassFlags`]) plus an
//!   optional applied [`Placement`] per node. External styling interprets
//!   the markers; their exact presentation is out of scope here.
//! - Geometry reads are *live*: [`Surface::metrics`] must reflect current
//!   rendered truth on every call. The controller re-queries on every
//!   show/hide pass instead of caching, so hosts must not serve stale
//!   snapshots.

use smallvec::SmallVec;
use toastline_stack::{Anchor, Placement, ToastMetrics};

bitflags::bitflags! {
    /// Visual marker classes toggled on a toast's host node.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct ClassFlags: u8 {
        /// Transitions between visual states animate.
        const FADE    = 0b0000_0001;
        /// The toast is fully visible. This is the authoritative visibility
        /// marker; the hide path is a no-op without it.
        const SHOW    = 0b0000_0010;
        /// The toast is animating in.
        const SHOWING = 0b0000_0100;
        /// The toast is fully hidden.
        const HIDE    = 0b0000_1000;
    }
}

/// Host display surface for toast nodes.
///
/// `NodeId` is whatever small copyable handle the host uses for elements of
/// its display tree.
pub trait Surface {
    /// Identifier for a node on this surface.
    type NodeId: Copy + PartialEq;

    /// The marker classes currently set on `node`.
    fn classes(&self, node: Self::NodeId) -> ClassFlags;

    /// Sets the given marker classes on `node`.
    fn insert_class(&mut self, node: Self::NodeId, class: ClassFlags);

    /// Clears the given marker classes on `node`.
    fn remove_class(&mut self, node: Self::NodeId, class: ClassFlags);

    /// The toasts currently placed against `anchor` within the container
    /// that holds `node`, in document order.
    ///
    /// Membership is "has an applied placement with this anchor", so a toast
    /// mid-show and a toast mid-hide both count until their placement is
    /// cleared. `node` itself appears in the result if (and only if) it is
    /// currently placed.
    fn anchor_group(&self, node: Self::NodeId, anchor: Anchor) -> SmallVec<[Self::NodeId; 4]>;

    /// Fresh rendered geometry for `node`.
    ///
    /// Returns [`ToastMetrics::unavailable`] when the node has no layout
    /// yet; the stacking math treats that as a zero extent.
    fn metrics(&self, node: Self::NodeId) -> ToastMetrics;

    /// The placement currently applied to `node`, if any.
    fn placement(&self, node: Self::NodeId) -> Option<Placement>;

    /// Positions `node` absolutely according to `placement` and tags it with
    /// the anchor marker.
    fn apply_placement(&mut self, node: Self::NodeId, placement: Placement);

    /// Rewrites the main (stacking-axis) offset of an already-placed node.
    ///
    /// Used by the recompute pass after a sibling leaves the group. Hosts
    /// may ignore the call for nodes without an applied placement.
    fn set_main_offset(&mut self, node: Self::NodeId, offset: f64);

    /// Restores `node` to flow positioning: clears both offsets and removes
    /// the anchor marker.
    fn clear_placement(&mut self, node: Self::NodeId);

    /// The configured transition duration for `node`, in milliseconds.
    ///
    /// `None` means the host reports no duration; the controller then falls
    /// back to the emulation buffer alone so progress is still guaranteed.
    fn transition_duration_ms(&self, node: Self::NodeId) -> Option<u64>;
}

#[cfg(test)]
mod tests {
    use super::ClassFlags;

    #[test]
    fn marker_classes_are_independent_bits() {
        let mut classes = ClassFlags::FADE | ClassFlags::SHOWING;
        classes.remove(ClassFlags::SHOWING);
        classes.insert(ClassFlags::SHOW);
        assert_eq!(classes, ClassFlags::FADE | ClassFlags::SHOW);
        assert!(!classes.contains(ClassFlags::HIDE));
    }
}
