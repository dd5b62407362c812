//! Page-scoped registry for page-wide activation listeners.
//!
//! Each widget in Full phase holds a [`Subscription`] carrying a weak handle
//! to its listener. The host reports every page activation once through
//! [`Dispatcher::dispatch`], which reaches each live subscriber in
//! registration order. Dropping or cancelling a subscription removes it, so
//! a disposed widget leaves nothing behind on the page.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::{Rc, Weak};

use tracing::debug;

use super::message::ActivationTarget;

/// Identifies one widget instance on a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WidgetId(u64);

/// One activation somewhere on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageActivation {
    /// The widget whose element was hit, if any.
    pub widget: Option<WidgetId>,
    pub target: ActivationTarget,
}

impl PageActivation {
    /// An activation on an element of `widget`.
    #[must_use]
    pub fn on(widget: WidgetId, target: ActivationTarget) -> Self {
        Self { widget: Some(widget), target }
    }

    /// An activation that hit no widget at all.
    #[must_use]
    pub fn elsewhere() -> Self {
        Self { widget: None, target: ActivationTarget::Elsewhere }
    }

    /// The target as seen by `owner`: elements of other widgets are
    /// [`ActivationTarget::Elsewhere`].
    #[must_use]
    pub fn target_for(&self, owner: WidgetId) -> ActivationTarget {
        if self.widget == Some(owner) { self.target } else { ActivationTarget::Elsewhere }
    }
}

/// Receives page-wide activations.
pub trait PageListener {
    fn on_page_activation(&mut self, activation: &PageActivation);
}

struct Listener {
    owner: WidgetId,
    handler: Weak<RefCell<dyn PageListener>>,
}

impl fmt::Debug for Listener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listener")
            .field("owner", &self.owner)
            .field("alive", &(self.handler.strong_count() > 0))
            .finish()
    }
}

#[derive(Debug, Default)]
struct Registry {
    next_widget: u64,
    next_listener: u64,
    listeners: BTreeMap<u64, Listener>,
}

/// Cloneable handle to one page's listener registry. Single-threaded.
#[derive(Debug, Clone, Default)]
pub struct Dispatcher {
    registry: Rc<RefCell<Registry>>,
}

impl Dispatcher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn allocate_widget_id(&self) -> WidgetId {
        let mut registry = self.registry.borrow_mut();
        registry.next_widget += 1;
        WidgetId(registry.next_widget)
    }

    /// Register `handler` as `owner`'s page listener until the returned
    /// subscription is dropped.
    #[must_use]
    pub fn subscribe(
        &self,
        owner: WidgetId,
        handler: Weak<RefCell<dyn PageListener>>,
    ) -> Subscription {
        let mut registry = self.registry.borrow_mut();
        registry.next_listener += 1;
        let id = registry.next_listener;
        registry.listeners.insert(id, Listener { owner, handler });
        debug!(?owner, listener = id, "page listener registered");
        Subscription { id, owner, registry: Rc::downgrade(&self.registry) }
    }

    /// Deliver `activation` to every live listener. Returns how many were
    /// reached.
    ///
    /// A listener that is already mutably borrowed (it is the one currently
    /// handling an event) is skipped.
    pub fn dispatch(&self, activation: &PageActivation) -> usize {
        let handlers: Vec<_> = self
            .registry
            .borrow()
            .listeners
            .values()
            .filter_map(|listener| listener.handler.upgrade())
            .collect();

        let mut reached = 0;
        for handler in handlers {
            let Ok(mut listener) = handler.try_borrow_mut() else {
                debug!(?activation, "listener busy, skipped");
                continue;
            };
            listener.on_page_activation(activation);
            reached += 1;
        }
        reached
    }

    /// Widgets currently listening, in registration order.
    #[must_use]
    pub fn listeners(&self) -> Vec<WidgetId> {
        self.registry.borrow().listeners.values().map(|listener| listener.owner).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.registry.borrow().listeners.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A registered page-wide listener. Unregisters on drop.
#[derive(Debug)]
pub struct Subscription {
    id: u64,
    owner: WidgetId,
    registry: Weak<RefCell<Registry>>,
}

impl Subscription {
    #[must_use]
    pub fn owner(&self) -> WidgetId {
        self.owner
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.registry
            .upgrade()
            .is_some_and(|registry| registry.borrow().listeners.contains_key(&self.id))
    }

    pub fn cancel(self) {
        drop(self);
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let Some(registry) = self.registry.upgrade() else {
            return;
        };
        let removed = registry.borrow_mut().listeners.remove(&self.id);
        if removed.is_some() {
            debug!(owner = ?self.owner, listener = self.id, "page listener removed");
        }
    }
}
