// Copyright 2026 the Toastline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The per-node lifecycle controller.
//!
//! A [`Toast`] drives one host node through
//! `Hidden → Showing → Shown → Hiding → Hidden`, emitting lifecycle signals,
//! honoring the default-prevention veto on the leading signals, and calling
//! into the stacking math for placement. It owns no clock and no widgets:
//! hosts pass the current time (in milliseconds, any monotonic origin) into
//! every entry point and drive suspensions by reporting transition
//! completion or polling armed deadlines.
//!
//! ## Suspension model
//!
//! At most one deadline is armed per toast, held in a single internal slot:
//!
//! - a **show/hide transition timeout** while animating (the host's reported
//!   transition duration plus a small emulation buffer, so the state machine
//!   makes progress even if the completion notification is dropped), or
//! - the **autohide** deadline while fully shown.
//!
//! Arming replaces the slot and hide/dispose clear it, so a stale autohide
//! can never fire against a hidden or disposed toast. The completion race is
//! explicit: whichever of [`Toast::transition_ended`] or an expired
//! [`Toast::poll`] arrives first finalizes the transition; the loser is a
//! no-op.
//!
//! ## Re-entrancy
//!
//! Show and hide on the *same* toast are caller-serialized: starting a new
//! operation while the previous one's completion is still pending simply
//! replaces the pending slot. Callers wanting idempotence gate on the
//! visible marker, which is what [`Toast::hide`] itself does.

use smallvec::SmallVec;
use toastline_stack::{GroupEntry, Placement, stack_offsets};

use crate::command::{Command, InvokeError};
use crate::config::ToastConfig;
use crate::signal::{Signal, SignalCtx, ToastHooks};
use crate::surface::{ClassFlags, Surface};

/// Extra wait added to the host-reported transition duration before the
/// timeout fallback finalizes a transition.
pub const TRANSITION_END_BUFFER_MS: u64 = 5;

/// The visual lifecycle state of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LifecycleState {
    /// Not visible. The initial state; re-entered after every completed hide.
    Hidden,
    /// Animating in.
    Showing,
    /// Fully visible.
    Shown,
    /// Animating out.
    Hiding,
}

/// How far a lifecycle entry point got.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    /// The operation finalized synchronously.
    Completed,
    /// The operation suspended on a transition; the host must call
    /// [`Toast::transition_ended`] when the surface reports completion, or
    /// [`Toast::poll`] at or after the deadline.
    Pending {
        /// When the timeout fallback becomes due.
        deadline_ms: u64,
    },
    /// A hook vetoed the leading signal; no state was changed.
    Vetoed,
    /// The precondition was not met (or nothing was due); no signals were
    /// emitted and nothing was changed.
    Ignored,
}

/// The armed deadline, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pending {
    ShowTransition { deadline_ms: u64 },
    HideTransition { deadline_ms: u64 },
    Autohide { at_ms: u64 },
}

impl Pending {
    const fn deadline(self) -> u64 {
        match self {
            Self::ShowTransition { deadline_ms } | Self::HideTransition { deadline_ms } => {
                deadline_ms
            }
            Self::Autohide { at_ms } => at_ms,
        }
    }
}

/// Lifecycle controller for one toast bound to one host node.
///
/// Constructed from a host node handle and a resolved [`ToastConfig`]; the
/// configuration is an immutable snapshot from then on. The default dismiss
/// trigger is armed at construction and disarmed by [`Toast::dispose`].
///
/// ```rust
/// use toastline_lifecycle::{Toast, ToastConfig};
///
/// let config = ToastConfig {
///     animation: false,
///     ..ToastConfig::default()
/// };
/// let toast: Toast<u32> = Toast::new(7, config);
/// assert_eq!(toast.node(), 7);
/// assert!(toast.next_deadline().is_none());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Toast<K> {
    node: K,
    config: ToastConfig,
    state: LifecycleState,
    pending: Option<Pending>,
    dismiss_armed: bool,
}

impl<K: Copy + PartialEq> Toast<K> {
    /// Creates a controller bound to `node` with a resolved configuration.
    #[must_use]
    pub const fn new(node: K, config: ToastConfig) -> Self {
        Self {
            node,
            config,
            state: LifecycleState::Hidden,
            pending: None,
            dismiss_armed: true,
        }
    }

    /// The host node this toast is bound to.
    #[must_use]
    pub const fn node(&self) -> K {
        self.node
    }

    /// The configuration snapshot taken at construction.
    #[must_use]
    pub const fn config(&self) -> &ToastConfig {
        &self.config
    }

    /// The current lifecycle state.
    #[must_use]
    pub const fn state(&self) -> LifecycleState {
        self.state
    }

    /// When the armed deadline (transition timeout or autohide) becomes due.
    ///
    /// Hosts schedule their next [`Toast::poll`] from this.
    #[must_use]
    pub const fn next_deadline(&self) -> Option<u64> {
        match self.pending {
            Some(pending) => Some(pending.deadline()),
            None => None,
        }
    }

    /// Runs the show path.
    ///
    /// Emits the cancelable [`Signal::Show`] first; a veto aborts with no
    /// side effects. Otherwise the toast is placed after the already-placed
    /// same-anchor siblings (fresh geometry, document order), marked as
    /// showing, and either suspended on its transition (`animation: true`)
    /// or finalized immediately.
    ///
    /// Callable from any state; calling on an already-shown toast re-runs
    /// the path, re-emitting signals and recomputing the placement.
    pub fn show<S, H>(&mut self, surface: &mut S, hooks: &mut H, now_ms: u64) -> Progress
    where
        S: Surface<NodeId = K>,
        H: ToastHooks<K>,
    {
        if self.emit(hooks, Signal::Show) {
            return Progress::Vetoed;
        }

        if self.config.animation {
            surface.insert_class(self.node, ClassFlags::FADE);
        }

        let (_, predecessors) = self.placed_siblings(surface);
        let placement = Placement::initial(self.config.anchor, self.config.margin_px, &predecessors);
        surface.apply_placement(self.node, placement);

        surface.remove_class(self.node, ClassFlags::HIDE);
        surface.insert_class(self.node, ClassFlags::SHOWING);
        self.state = LifecycleState::Showing;

        if self.config.animation {
            let deadline_ms = self.transition_deadline(surface, now_ms);
            self.pending = Some(Pending::ShowTransition { deadline_ms });
            Progress::Pending { deadline_ms }
        } else {
            self.finalize_show(surface, hooks, now_ms)
        }
    }

    /// Runs the hide path.
    ///
    /// A no-op returning [`Progress::Ignored`] unless the surface carries
    /// the visible marker on this node (a live class query, so hide is
    /// idempotent). Emits the cancelable [`Signal::Hide`]; a veto aborts
    /// with no state change, leaving a still-armed autohide in place.
    /// Otherwise any armed autohide is canceled, the visible marker is
    /// cleared, and the toast either suspends on its transition or finalizes
    /// immediately.
    pub fn hide<S, H>(&mut self, surface: &mut S, hooks: &mut H, now_ms: u64) -> Progress
    where
        S: Surface<NodeId = K>,
        H: ToastHooks<K>,
    {
        if !surface.classes(self.node).contains(ClassFlags::SHOW) {
            return Progress::Ignored;
        }
        if self.emit(hooks, Signal::Hide) {
            return Progress::Vetoed;
        }

        self.pending = None;
        surface.remove_class(self.node, ClassFlags::SHOW);
        self.state = LifecycleState::Hiding;

        if self.config.animation {
            let deadline_ms = self.transition_deadline(surface, now_ms);
            self.pending = Some(Pending::HideTransition { deadline_ms });
            Progress::Pending { deadline_ms }
        } else {
            self.finalize_hide(surface, hooks)
        }
    }

    /// Reports that the display surface finished this node's transition.
    ///
    /// Finalizes a pending show or hide; [`Progress::Ignored`] when no
    /// transition is pending (including after the timeout fallback already
    /// won the race).
    pub fn transition_ended<S, H>(&mut self, surface: &mut S, hooks: &mut H, now_ms: u64) -> Progress
    where
        S: Surface<NodeId = K>,
        H: ToastHooks<K>,
    {
        match self.pending {
            Some(Pending::ShowTransition { .. }) => {
                self.pending = None;
                self.finalize_show(surface, hooks, now_ms)
            }
            Some(Pending::HideTransition { .. }) => {
                self.pending = None;
                self.finalize_hide(surface, hooks)
            }
            Some(Pending::Autohide { .. }) | None => Progress::Ignored,
        }
    }

    /// Drives the armed deadline, if it is due at `now_ms`.
    ///
    /// An expired transition timeout finalizes the pending show or hide; an
    /// expired autohide enters the hide path (whose leading signal can still
    /// be vetoed, in which case the toast stays shown and the consumed
    /// deadline is not re-armed). Returns [`Progress::Ignored`] when nothing
    /// is due.
    pub fn poll<S, H>(&mut self, surface: &mut S, hooks: &mut H, now_ms: u64) -> Progress
    where
        S: Surface<NodeId = K>,
        H: ToastHooks<K>,
    {
        match self.pending {
            Some(pending) if now_ms >= pending.deadline() => {
                self.pending = None;
                match pending {
                    Pending::ShowTransition { .. } => self.finalize_show(surface, hooks, now_ms),
                    Pending::HideTransition { .. } => self.finalize_hide(surface, hooks),
                    Pending::Autohide { .. } => self.hide(surface, hooks, now_ms),
                }
            }
            _ => Progress::Ignored,
        }
    }

    /// The default dismiss trigger.
    ///
    /// Hosts route activation of a dismiss-marked descendant of the host
    /// node here. Runs the hide path while armed; disposed toasts ignore it.
    pub fn dismiss<S, H>(&mut self, surface: &mut S, hooks: &mut H, now_ms: u64) -> Progress
    where
        S: Surface<NodeId = K>,
        H: ToastHooks<K>,
    {
        if !self.dismiss_armed {
            return Progress::Ignored;
        }
        self.hide(surface, hooks, now_ms)
    }

    /// Tears the controller down without running the hide path.
    ///
    /// Cancels any armed deadline, clears the visible marker without
    /// emitting signals, and disarms the dismiss trigger. Does *not*
    /// recompute sibling offsets; only a completed hide does. Releasing the
    /// node binding is the registry's job
    /// ([`ToastRegistry::dispose`](crate::ToastRegistry::dispose)).
    pub fn dispose<S>(&mut self, surface: &mut S)
    where
        S: Surface<NodeId = K>,
    {
        self.pending = None;
        if surface.classes(self.node).contains(ClassFlags::SHOW) {
            surface.remove_class(self.node, ClassFlags::SHOW);
        }
        self.state = LifecycleState::Hidden;
        self.dismiss_armed = false;
    }

    /// Dispatches an operation by its wire name.
    ///
    /// The thin string-dispatch adapter over the closed [`Command`] set. An
    /// unrecognized name fails with [`InvokeError::UnknownOperation`] and
    /// performs no mutation.
    pub fn invoke<S, H>(
        &mut self,
        name: &str,
        surface: &mut S,
        hooks: &mut H,
        now_ms: u64,
    ) -> Result<Progress, InvokeError>
    where
        S: Surface<NodeId = K>,
        H: ToastHooks<K>,
    {
        let command = name.parse::<Command>()?;
        Ok(match command {
            Command::Show => self.show(surface, hooks, now_ms),
            Command::Hide => self.hide(surface, hooks, now_ms),
            Command::Dispose => {
                self.dispose(surface);
                Progress::Completed
            }
        })
    }

    fn finalize_show<S, H>(&mut self, surface: &mut S, hooks: &mut H, now_ms: u64) -> Progress
    where
        S: Surface<NodeId = K>,
        H: ToastHooks<K>,
    {
        surface.remove_class(self.node, ClassFlags::SHOWING);
        surface.insert_class(self.node, ClassFlags::SHOW);
        self.state = LifecycleState::Shown;
        self.emit(hooks, Signal::Shown);

        self.pending = if self.config.autohide {
            Some(Pending::Autohide {
                at_ms: now_ms + self.config.delay_ms,
            })
        } else {
            None
        };
        Progress::Completed
    }

    fn finalize_hide<S, H>(&mut self, surface: &mut S, hooks: &mut H) -> Progress
    where
        S: Surface<NodeId = K>,
        H: ToastHooks<K>,
    {
        surface.insert_class(self.node, ClassFlags::HIDE);
        self.state = LifecycleState::Hidden;
        self.pending = None;
        self.emit(hooks, Signal::Hidden);

        surface.clear_placement(self.node);
        self.restack_survivors(surface);
        Progress::Completed
    }

    /// The recompute pass: collapse the remaining anchor group toward the
    /// corner, writing fresh offsets in document order.
    fn restack_survivors<S>(&self, surface: &mut S)
    where
        S: Surface<NodeId = K>,
    {
        let (nodes, entries) = self.placed_siblings(surface);
        if nodes.is_empty() {
            return;
        }
        let offsets = stack_offsets(&entries);
        for (node, offset) in nodes.iter().zip(offsets) {
            surface.set_main_offset(*node, offset);
        }
    }

    /// The same-anchor siblings currently placed in this node's container,
    /// in document order, with fresh geometry. Excludes this node itself, so
    /// a re-shown toast never counts its own extent.
    ///
    /// Each entry's corner margin is read back from the sibling's applied
    /// placement (the side offset is the margin by construction), so the
    /// recompute pass honors per-toast margins without reaching into other
    /// controllers.
    fn placed_siblings<S>(&self, surface: &S) -> (SmallVec<[K; 4]>, SmallVec<[GroupEntry; 4]>)
    where
        S: Surface<NodeId = K>,
    {
        let anchor = self.config.anchor;
        let mut nodes = SmallVec::new();
        let mut entries = SmallVec::new();
        for node in surface.anchor_group(self.node, anchor) {
            if node == self.node {
                continue;
            }
            let metrics = surface.metrics(node);
            let margin = surface.placement(node).map_or(0.0, |p| p.side_offset);
            nodes.push(node);
            entries.push(GroupEntry {
                margin,
                extent: metrics.extent(),
                trailing_margin: metrics.trailing_margin(anchor),
            });
        }
        (nodes, entries)
    }

    fn transition_deadline<S>(&self, surface: &S, now_ms: u64) -> u64
    where
        S: Surface<NodeId = K>,
    {
        let duration = surface.transition_duration_ms(self.node).unwrap_or(0);
        now_ms + duration + TRANSITION_END_BUFFER_MS
    }

    /// Emits a signal; returns `true` if a hook vetoed it.
    fn emit<H>(&self, hooks: &mut H, signal: Signal) -> bool
    where
        H: ToastHooks<K>,
    {
        let mut ctx = SignalCtx::new(signal.cancelable());
        hooks.on_signal(self.node, signal, &mut ctx);
        ctx.default_prevented()
    }
}
