// Copyright 2026 the Toastline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Node-to-controller binding.
//!
//! A [`ToastRegistry`] owns the [`Toast`] controllers for one host surface,
//! keyed by node handle. Binding is idempotent per node; disposal is the
//! only way to release a binding, and rebinding after disposal starts a
//! fresh lifecycle.

use core::hash::Hash;

use hashbrown::HashMap;

use crate::command::{Command, InvokeError};
use crate::config::ToastConfig;
use crate::signal::ToastHooks;
use crate::surface::Surface;
use crate::toast::{Progress, Toast};

/// The toast controllers bound to one host surface.
///
/// ```rust
/// use toastline_lifecycle::{ToastConfig, ToastRegistry};
///
/// let mut registry: ToastRegistry<u32> = ToastRegistry::new();
/// let toast = registry.bind(7, ToastConfig::default());
/// assert_eq!(toast.node(), 7);
/// assert_eq!(registry.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ToastRegistry<K> {
    toasts: HashMap<K, Toast<K>>,
}

impl<K: Copy + PartialEq + Eq + Hash> ToastRegistry<K> {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            toasts: HashMap::new(),
        }
    }

    /// Binds `node` to a controller, creating one with `config` if the node
    /// is unbound.
    ///
    /// An already-bound node keeps its existing controller and its original
    /// configuration; `config` is ignored in that case.
    pub fn bind(&mut self, node: K, config: ToastConfig) -> &mut Toast<K> {
        self.toasts
            .entry(node)
            .or_insert_with(|| Toast::new(node, config))
    }

    /// The controller bound to `node`, if any.
    #[must_use]
    pub fn get(&self, node: K) -> Option<&Toast<K>> {
        self.toasts.get(&node)
    }

    /// The controller bound to `node`, if any.
    #[must_use]
    pub fn get_mut(&mut self, node: K) -> Option<&mut Toast<K>> {
        self.toasts.get_mut(&node)
    }

    /// The number of bound nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    /// Whether no nodes are bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    /// Iterates the bound controllers in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &Toast<K>> {
        self.toasts.values()
    }

    /// The earliest armed deadline across all bound toasts.
    ///
    /// Hosts schedule a single wakeup from this and then call
    /// [`ToastRegistry::poll`].
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.toasts.values().filter_map(Toast::next_deadline).min()
    }

    /// Drives every toast whose deadline is due at `now_ms`.
    ///
    /// Returns the number of toasts that made progress (anything other than
    /// [`Progress::Ignored`]).
    pub fn poll<S, H>(&mut self, surface: &mut S, hooks: &mut H, now_ms: u64) -> usize
    where
        S: Surface<NodeId = K>,
        H: ToastHooks<K>,
    {
        self.toasts
            .values_mut()
            .map(|toast| toast.poll(surface, hooks, now_ms))
            .filter(|progress| *progress != Progress::Ignored)
            .count()
    }

    /// Tears down and unbinds `node`.
    ///
    /// Returns `false` if the node was not bound. Rebinding afterwards
    /// creates a fresh controller.
    pub fn dispose<S>(&mut self, node: K, surface: &mut S) -> bool
    where
        S: Surface<NodeId = K>,
    {
        match self.toasts.remove(&node) {
            Some(mut toast) => {
                toast.dispose(surface);
                true
            }
            None => false,
        }
    }

    /// Dispatches an operation by its wire name against `node`, binding it
    /// with `config` first if it is unbound.
    ///
    /// An unrecognized name fails with [`InvokeError::UnknownOperation`]
    /// before any binding or mutation happens. A successful `"dispose"` also
    /// releases the binding.
    pub fn invoke<S, H>(
        &mut self,
        node: K,
        name: &str,
        config: ToastConfig,
        surface: &mut S,
        hooks: &mut H,
        now_ms: u64,
    ) -> Result<Progress, InvokeError>
    where
        S: Surface<NodeId = K>,
        H: ToastHooks<K>,
    {
        let command = name.parse::<Command>()?;
        match command {
            Command::Show => Ok(self.bind(node, config).show(surface, hooks, now_ms)),
            Command::Hide => Ok(self.bind(node, config).hide(surface, hooks, now_ms)),
            Command::Dispose => {
                self.dispose(node, surface);
                Ok(Progress::Completed)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use toastline_stack::Anchor;

    use super::*;
    use crate::mock::MockSurface;
    use crate::surface::ClassFlags;
    use crate::toast::LifecycleState;

    fn instant_config() -> ToastConfig {
        ToastConfig {
            animation: false,
            ..ToastConfig::default()
        }
    }

    #[test]
    fn bind_is_idempotent_and_keeps_the_first_config() {
        let mut registry: ToastRegistry<usize> = ToastRegistry::new();
        let first = ToastConfig {
            delay_ms: 2000,
            ..ToastConfig::default()
        };

        registry.bind(0, first);
        let rebound = registry.bind(0, ToastConfig::default());

        assert_eq!(rebound.config().delay_ms, 2000);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn dispose_releases_the_binding() {
        let mut surface = MockSurface::new();
        let node = surface.add_node(50.0);
        let mut registry = ToastRegistry::new();
        registry
            .bind(node, instant_config())
            .show(&mut surface, &mut (), 0);

        assert!(registry.dispose(node, &mut surface));
        assert!(registry.get(node).is_none());
        assert!(!surface.nodes[node].classes.contains(ClassFlags::SHOW));
        assert!(!registry.dispose(node, &mut surface));

        // Rebinding starts over from hidden.
        let fresh = registry.bind(node, instant_config());
        assert_eq!(fresh.state(), LifecycleState::Hidden);
    }

    #[test]
    fn poll_drives_every_due_toast() {
        let mut surface = MockSurface::new();
        let first = surface.add_node(50.0);
        let second = surface.add_node(40.0);
        let mut registry = ToastRegistry::new();
        let config = ToastConfig {
            animation: false,
            ..ToastConfig::default()
        };
        registry.bind(first, config).show(&mut surface, &mut (), 0);
        registry
            .bind(
                second,
                ToastConfig {
                    delay_ms: 800,
                    ..config
                },
            )
            .show(&mut surface, &mut (), 0);

        assert_eq!(registry.next_deadline(), Some(500));
        assert_eq!(registry.poll(&mut surface, &mut (), 400), 0);
        assert_eq!(registry.poll(&mut surface, &mut (), 500), 1);
        assert_eq!(registry.next_deadline(), Some(800));
        assert_eq!(registry.poll(&mut surface, &mut (), 800), 1);
        assert_eq!(registry.next_deadline(), None);
    }

    #[test]
    fn poll_counts_every_toast_due_at_the_same_time() {
        let mut surface = MockSurface::new();
        let first = surface.add_node(50.0);
        let second = surface.add_node(40.0);
        let mut registry = ToastRegistry::new();
        let config = ToastConfig {
            animation: false,
            ..ToastConfig::default()
        };
        registry.bind(first, config).show(&mut surface, &mut (), 0);
        registry.bind(second, config).show(&mut surface, &mut (), 0);

        assert_eq!(registry.poll(&mut surface, &mut (), 500), 2);
        assert!(surface.nodes[first].placement.is_none());
        assert!(surface.nodes[second].placement.is_none());
        assert_eq!(registry.poll(&mut surface, &mut (), 501), 0);
    }

    #[test]
    fn invoke_binds_on_demand_and_unbinds_on_dispose() {
        let mut surface = MockSurface::new();
        let node = surface.add_node(50.0);
        let mut registry = ToastRegistry::new();

        let progress = registry
            .invoke(node, "show", instant_config(), &mut surface, &mut (), 0)
            .unwrap();
        assert_eq!(progress, Progress::Completed);
        assert_eq!(
            registry.get(node).map(Toast::config).map(|c| c.anchor),
            Some(Anchor::TopRight)
        );

        registry
            .invoke(node, "dispose", instant_config(), &mut surface, &mut (), 10)
            .unwrap();
        assert!(registry.is_empty());
    }

    #[test]
    fn invoke_with_an_unknown_name_binds_nothing() {
        let mut surface = MockSurface::new();
        let node = surface.add_node(50.0);
        let mut registry: ToastRegistry<usize> = ToastRegistry::new();

        let err = registry
            .invoke(node, "toggle", instant_config(), &mut surface, &mut (), 0)
            .unwrap_err();

        assert!(matches!(err, InvokeError::UnknownOperation { .. }));
        assert!(registry.is_empty());
    }
}
