// Copyright 2026 the Toastline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A simulated corner stack: three toasts at the top-right, autohide, and a
//! mid-stack dismissal collapsing the gap.
//!
//! The display surface here is a plain `Vec` of nodes with fake geometry; a
//! real host would adapt its widget or DOM layer the same way.
//!
//! Run:
//! - `cargo run -p toastline_demos --example corner_stack`

use kurbo::Rect;
use smallvec::SmallVec;
use toastline_lifecycle::{
    Anchor, ClassFlags, Placement, Signal, SignalCtx, Surface, ToastConfig, ToastHooks,
    ToastMetrics, ToastRegistry,
};

/// Hooks that print every lifecycle signal as it fires.
struct PrintHooks;

impl ToastHooks<usize> for PrintHooks {
    fn on_signal(&mut self, node: usize, signal: Signal, _ctx: &mut SignalCtx) {
        println!("  signal: node {node} {signal:?}");
    }
}

/// One simulated node: marker classes, applied placement, fake layout.
#[derive(Debug, Default)]
struct SimNode {
    label: &'static str,
    classes: ClassFlags,
    placement: Option<Placement>,
    height: f64,
}

/// A flat container of nodes; handles are indices in document order.
#[derive(Debug, Default)]
struct SimSurface {
    nodes: Vec<SimNode>,
}

impl SimSurface {
    fn add_node(&mut self, label: &'static str, height: f64) -> usize {
        self.nodes.push(SimNode {
            label,
            height,
            ..SimNode::default()
        });
        self.nodes.len() - 1
    }

    fn print(&self, heading: &str) {
        println!("{heading}");
        for node in &self.nodes {
            match node.placement {
                Some(p) => println!(
                    "  {:<10} {} main={:>5.1} side={:.1}",
                    node.label,
                    p.anchor.as_str(),
                    p.main_offset,
                    p.side_offset
                ),
                None => println!("  {:<10} (unplaced)", node.label),
            }
        }
    }
}

impl Surface for SimSurface {
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
        let height = self.nodes[node].height;
        ToastMetrics::new(Rect::new(0.0, 0.0, 320.0, height), 0.0, 8.0)
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

    fn transition_duration_ms(&self, _node: usize) -> Option<u64> {
        None
    }
}

fn main() {
    let mut surface = SimSurface::default();
    let saved = surface.add_node("saved", 64.0);
    let sync = surface.add_node("sync", 48.0);
    let update = surface.add_node("update", 90.0);

    let mut registry = ToastRegistry::new();
    let config = ToastConfig {
        animation: false,
        ..ToastConfig::default()
    };

    let mut hooks = PrintHooks;
    let mut now = 0;

    for node in [saved, sync, update] {
        registry.bind(node, config).show(&mut surface, &mut hooks, now);
    }
    surface.print("after showing three toasts at the top-right:");

    // Dismiss the middle toast; the third collapses up into the gap.
    now = 100;
    registry
        .get_mut(sync)
        .expect("sync is bound")
        .dismiss(&mut surface, &mut hooks, now);
    surface.print("after dismissing the middle toast:");

    // Drive the remaining autohide deadlines as a host event loop would.
    while let Some(deadline) = registry.next_deadline() {
        now = deadline;
        println!("polling at t={now}:");
        registry.poll(&mut surface, &mut hooks, now);
    }
    surface.print("after autohide drained the stack:");
}
