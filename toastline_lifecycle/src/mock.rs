// Copyright 2026 the Toastline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! An in-memory [`Surface`] for tests.
//!
//! One flat container of nodes; node handles are indices, which doubles as
//! document order. The whole surface is `Clone + PartialEq` so tests can
//! snapshot it and assert that a vetoed or ignored operation changed
//! nothing.

use alloc::vec::Vec;

use kurbo::Rect;
use smallvec::SmallVec;
use toastline_stack::{Anchor, Placement, ToastMetrics};

use crate::surface::{ClassFlags, Surface};

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct MockNode {
    pub(crate) classes: ClassFlags,
    pub(crate) placement: Option<Placement>,
    pub(crate) height: Option<f64>,
    pub(crate) margin_top: f64,
    pub(crate) margin_bottom: f64,
    pub(crate) transition_ms: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub(crate) struct MockSurface {
    pub(crate) nodes: Vec<MockNode>,
}

impl MockSurface {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Appends a node with laid-out geometry of the given height and zero
    /// margins. Returns its handle.
    pub(crate) fn add_node(&mut self, height: f64) -> usize {
        self.push(Some(height))
    }

    /// Appends a node the layout pass has not measured yet.
    pub(crate) fn add_unmeasured_node(&mut self) -> usize {
        self.push(None)
    }

    fn push(&mut self, height: Option<f64>) -> usize {
        self.nodes.push(MockNode {
            classes: ClassFlags::empty(),
            placement: None,
            height,
            margin_top: 0.0,
            margin_bottom: 0.0,
            transition_ms: None,
        });
        self.nodes.len() - 1
    }
}

impl Surface for MockSurface {
    type NodeId = usize;

    fn classes(&self, node: usize) -> ClassFlags {
        self.nodes[node].classes
    }

    fn insert_class(&mut self, node: usize, class: ClassFlags) {
        self.nodes[node].classes.insert(class);
    }

    fn remove_class(&mut self, node: usize, class: ClassFlags) {
        self.nodes[node].classes.remove(class);
    }

    fn anchor_group(&self, _node: usize, anchor: Anchor) -> SmallVec<[usize; 4]> {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, n)| n.placement.is_some_and(|p| p.anchor == anchor))
            .map(|(i, _)| i)
            .collect()
    }

    fn metrics(&self, node: usize) -> ToastMetrics {
        let n = &self.nodes[node];
        match n.height {
            Some(height) => ToastMetrics::new(
                Rect::new(0.0, 0.0, 200.0, height),
                n.margin_top,
                n.margin_bottom,
            ),
            None => ToastMetrics::unavailable(),
        }
    }

    fn placement(&self, node: usize) -> Option<Placement> {
        self.nodes[node].placement
    }

    fn apply_placement(&mut self, node: usize, placement: Placement) {
        self.nodes[node].placement = Some(placement);
    }

    fn set_main_offset(&mut self, node: usize, offset: f64) {
        if let Some(placement) = &mut self.nodes[node].placement {
            placement.main_offset = offset;
        }
    }

    fn clear_placement(&mut self, node: usize) {
        self.nodes[node].placement = None;
    }

    fn transition_duration_ms(&self, node: usize) -> Option<u64> {
        self.nodes[node].transition_ms
    }
}
