// Copyright 2026 the Toastline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lifecycle signals and the default-prevention veto.
//!
//! The controller notifies its host of lifecycle transitions through a
//! [`ToastHooks`] observer. The two *leading* signals ([`Signal::Show`] and
//! [`Signal::Hide`]) are cancelable: a hook may call
//! [`SignalCtx::prevent_default`] to veto the operation, which then returns
//! without touching any state. The two *trailing* signals ([`Signal::Shown`]
//! and [`Signal::Hidden`]) report completed transitions and cannot be
//! vetoed.
//!
//! ```rust
//! use toastline_lifecycle::{Signal, SignalCtx, ToastHooks};
//!
//! struct VetoHide;
//!
//! impl ToastHooks<u32> for VetoHide {
//!     fn on_signal(&mut self, _node: u32, signal: Signal, ctx: &mut SignalCtx) {
//!         if signal == Signal::Hide {
//!             ctx.prevent_default();
//!         }
//!     }
//! }
//! ```

/// A lifecycle transition reported to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Signal {
    /// The show path is about to run. Cancelable.
    Show,
    /// The toast finished showing and is fully visible.
    Shown,
    /// The hide path is about to run. Cancelable.
    Hide,
    /// The toast finished hiding and left the stack.
    Hidden,
}

impl Signal {
    /// Whether this signal can be vetoed via [`SignalCtx::prevent_default`].
    #[must_use]
    pub const fn cancelable(self) -> bool {
        matches!(self, Self::Show | Self::Hide)
    }
}

/// Per-emission context handed to [`ToastHooks::on_signal`].
#[derive(Debug)]
pub struct SignalCtx {
    cancelable: bool,
    default_prevented: bool,
}

impl SignalCtx {
    pub(crate) const fn new(cancelable: bool) -> Self {
        Self {
            cancelable,
            default_prevented: false,
        }
    }

    /// Whether the signal being delivered is cancelable.
    #[must_use]
    pub const fn cancelable(&self) -> bool {
        self.cancelable
    }

    /// Vetoes the operation this signal announces.
    ///
    /// Has no effect on non-cancelable signals.
    pub const fn prevent_default(&mut self) {
        if self.cancelable {
            self.default_prevented = true;
        }
    }

    /// Whether a hook vetoed the operation.
    #[must_use]
    pub const fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// Observer for lifecycle signals emitted on a toast's host node.
///
/// The unit type implements this as a no-op for hosts that do not consume
/// signals.
pub trait ToastHooks<K> {
    /// Called once per emitted signal, before (for cancelable signals) or at
    /// the moment of (for trailing signals) the corresponding transition.
    fn on_signal(&mut self, node: K, signal: Signal, ctx: &mut SignalCtx);
}

impl<K> ToastHooks<K> for () {
    fn on_signal(&mut self, _node: K, _signal: Signal, _ctx: &mut SignalCtx) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_signals_are_cancelable() {
        assert!(Signal::Show.cancelable());
        assert!(Signal::Hide.cancelable());
        assert!(!Signal::Shown.cancelable());
        assert!(!Signal::Hidden.cancelable());
    }

    #[test]
    fn prevent_default_is_ignored_on_trailing_signals() {
        let mut ctx = SignalCtx::new(Signal::Shown.cancelable());
        ctx.prevent_default();
        assert!(!ctx.default_prevented());

        let mut ctx = SignalCtx::new(Signal::Hide.cancelable());
        ctx.prevent_default();
        assert!(ctx.default_prevented());
    }
}
