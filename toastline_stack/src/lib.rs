// Copyright 2026 the Toastline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Toastline Stack: corner-anchored stacking primitives for transient notifications.
//!
//! This crate provides a small, renderer-agnostic core for stacking "toast"
//! notifications against one of four container corners. It is intended to be
//! shared across different UI stacks; it knows nothing about widgets, display
//! trees, or timers.
//!
//! The core concepts are:
//!
//! - [`Anchor`]: one of the four corners a toast is positioned against, with
//!   its vertical and horizontal edges.
//! - [`ToastMetrics`]: a live snapshot of one toast's rendered geometry
//!   (bounds plus vertical margins). Geometry that is not available yet
//!   degrades to a zero extent instead of failing.
//! - [`GroupEntry`]: one member of an anchor group as the offset math sees
//!   it (its corner margin, extent along the stacking axis, and the margin
//!   on its side facing away from the anchor).
//! - [`entry_offset`] / [`stack_offsets`] / [`appended_offset`]: the offset
//!   accumulation over an ordered anchor group.
//! - [`Placement`]: the absolute main/side offsets a host applies to one
//!   toast while it is stacked.
//!
//! Host frameworks are responsible for:
//!
//! - Querying which toasts currently share an anchor within a container, in
//!   document order.
//! - Reading *fresh* rendered geometry for each of them on every pass; the
//!   math here is a pure function of what the display surface reports right
//!   now, so stale cached sizes never leak into offsets.
//! - Writing the resulting offsets back to the display surface.
//!
//! ## Minimal example
//!
//! Two toasts stacked at the top-right corner:
//!
//! ```rust
//! use toastline_stack::{Anchor, GroupEntry, Placement, stack_offsets};
//!
//! let group = [
//!     GroupEntry { margin: 10.0, extent: 50.0, trailing_margin: 0.0 },
//!     GroupEntry { margin: 10.0, extent: 40.0, trailing_margin: 4.0 },
//! ];
//!
//! let offsets = stack_offsets(&group);
//! assert_eq!(offsets.as_slice(), &[10.0, 60.0]);
//!
//! // A third toast appended after the group starts below both of them.
//! let placement = Placement::initial(Anchor::TopRight, 10.0, &group);
//! assert_eq!(placement.main_offset, 104.0);
//! assert_eq!(placement.side_offset, 10.0);
//! ```
//!
//! All extents, margins, and offsets live in a caller-chosen 1D coordinate
//! space (typically logical pixels) and are expected to be finite and
//! non-negative; negative and non-finite values degrade to `0.0`.
//!
//! This crate is `no_std`.

#![no_std]

mod anchor;
mod metrics;
mod offsets;
mod placement;

pub use anchor::{Anchor, HorizontalEdge, ParseAnchorError, VerticalEdge};
pub use metrics::ToastMetrics;
pub use offsets::{GroupEntry, appended_offset, entry_offset, stack_offsets};
pub use placement::Placement;
