// Copyright 2026 the Toastline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Toastline Lifecycle: a renderer-agnostic show/hide state machine for
//! transient notifications.
//!
//! This crate drives "toast" notifications through their lifecycle
//! (`Hidden → Showing → Shown → Hiding`) without owning a clock, a widget
//! tree, or an event system. Hosts adapt their display stack behind the
//! [`Surface`] trait, observe (and may veto) lifecycle [`Signal`]s through
//! [`ToastHooks`], pass the current time into every entry point, and drive
//! time-based behavior by polling armed deadlines. Placement within a
//! corner-anchored group is delegated to [`toastline_stack`].
//!
//! The core concepts are:
//!
//! - [`ToastConfig`]: the per-toast options (`animation`, `autohide`,
//!   `delay`, `position`, `position-margin`), resolved from loosely-typed
//!   host sources against a fixed schema.
//! - [`Toast`]: the lifecycle controller for one host node. Show and hide
//!   emit cancelable leading signals, place or unplace the node, and either
//!   finalize synchronously or suspend on a host transition.
//! - [`ToastRegistry`]: the node-to-controller bindings for one surface,
//!   with string-name dispatch over the closed [`Command`] set and a single
//!   earliest-deadline wakeup for hosts.
//!
//! ## Minimal example
//!
//! A surface holding a single toast node, shown and then auto-hidden:
//!
//! ```rust
//! use smallvec::SmallVec;
//! use toastline_lifecycle::{
//!     Anchor, ClassFlags, Placement, Surface, Toast, ToastConfig, ToastMetrics,
//! };
//!
//! struct OneNode {
//!     classes: ClassFlags,
//!     placement: Option<Placement>,
//! }
//!
//! impl Surface for OneNode {
//!     type NodeId = ();
//!
//!     fn classes(&self, (): ()) -> ClassFlags {
//!         self.classes
//!     }
//!     fn insert_class(&mut self, (): (), class: ClassFlags) {
//!         self.classes.insert(class);
//!     }
//!     fn remove_class(&mut self, (): (), class: ClassFlags) {
//!         self.classes.remove(class);
//!     }
//!     fn anchor_group(&self, (): (), anchor: Anchor) -> SmallVec<[(); 4]> {
//!         self.placement
//!             .iter()
//!             .filter(|p| p.anchor == anchor)
//!             .map(|_| ())
//!             .collect()
//!     }
//!     fn metrics(&self, (): ()) -> ToastMetrics {
//!         ToastMetrics::unavailable()
//!     }
//!     fn placement(&self, (): ()) -> Option<Placement> {
//!         self.placement
//!     }
//!     fn apply_placement(&mut self, (): (), placement: Placement) {
//!         self.placement = Some(placement);
//!     }
//!     fn set_main_offset(&mut self, (): (), offset: f64) {
//!         if let Some(placement) = &mut self.placement {
//!             placement.main_offset = offset;
//!         }
//!     }
//!     fn clear_placement(&mut self, (): ()) {
//!         self.placement = None;
//!     }
//!     fn transition_duration_ms(&self, (): ()) -> Option<u64> {
//!         None
//!     }
//! }
//!
//! let mut surface = OneNode {
//!     classes: ClassFlags::empty(),
//!     placement: None,
//! };
//! let config = ToastConfig {
//!     animation: false,
//!     ..ToastConfig::default()
//! };
//! let mut toast = Toast::new((), config);
//!
//! toast.show(&mut surface, &mut (), 0);
//! assert!(surface.classes.contains(ClassFlags::SHOW));
//! assert_eq!(toast.next_deadline(), Some(500));
//!
//! toast.poll(&mut surface, &mut (), 500);
//! assert!(!surface.classes.contains(ClassFlags::SHOW));
//! assert!(surface.placement.is_none());
//! ```
//!
//! All timestamps are milliseconds from any monotonic origin the host
//! chooses; the crate only ever compares and adds them.
//!
//! This crate is `no_std` (it requires `alloc`).

#![no_std]

extern crate alloc;

mod command;
mod config;
mod registry;
mod signal;
mod surface;
mod toast;

#[cfg(test)]
mod mock;

pub use command::{Command, InvokeError};
pub use config::{
    ConfigError, KEY_ANIMATION, KEY_AUTOHIDE, KEY_DELAY, KEY_POSITION, KEY_POSITION_MARGIN,
    ToastConfig, Value,
};
pub use registry::ToastRegistry;
pub use signal::{Signal, SignalCtx, ToastHooks};
pub use surface::{ClassFlags, Surface};
pub use toast::{LifecycleState, Progress, TRANSITION_END_BUFFER_MS, Toast};

pub use toastline_stack::{Anchor, Placement, ToastMetrics};
