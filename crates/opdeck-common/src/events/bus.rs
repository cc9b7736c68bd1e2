//! Synchronous publish/subscribe for workspace events.
//!
//! Handlers run inside the publishing turn. A publish issued from within a
//! handler is queued and delivered after the current event finishes, so
//! delivery order is FIFO and handlers never re-enter. Each subscription is
//! a scoped acquisition: dropping the returned [`Subscription`] detaches the
//! handler.
//!
//! Asynchronous observers can [`EventBus::watch`] a broadcast channel that
//! mirrors every delivered event.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::{Rc, Weak};

use tokio::sync::broadcast;

use super::Event;

type Handler = Rc<RefCell<dyn FnMut(&Event)>>;

struct Inner {
    handlers: RefCell<Vec<(u64, Handler)>>,
    next_id: Cell<u64>,
    pending: RefCell<VecDeque<Event>>,
    dispatching: Cell<bool>,
    watch: broadcast::Sender<Event>,
}

impl Inner {
    fn is_subscribed(&self, id: u64) -> bool {
        self.handlers.borrow().iter().any(|(hid, _)| *hid == id)
    }

    fn remove(&self, id: u64) {
        self.handlers.borrow_mut().retain(|(hid, _)| *hid != id);
    }
}

/// Cheaply clonable handle to a single-threaded event bus.
#[derive(Clone)]
pub struct EventBus {
    inner: Rc<Inner>,
}

impl EventBus {
    /// Create a bus whose async watch channel buffers `watch_capacity` events.
    pub fn new(watch_capacity: usize) -> Self {
        let (watch, _) = broadcast::channel(watch_capacity.max(1));
        Self {
            inner: Rc::new(Inner {
                handlers: RefCell::new(Vec::new()),
                next_id: Cell::new(1),
                pending: RefCell::new(VecDeque::new()),
                dispatching: Cell::new(false),
                watch,
            }),
        }
    }

    /// Register a handler. It stays attached until the returned
    /// [`Subscription`] is dropped or disposed.
    #[must_use = "dropping the subscription detaches the handler immediately"]
    pub fn subscribe<F>(&self, handler: F) -> Subscription
    where
        F: FnMut(&Event) + 'static,
    {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);
        let handler: Handler = Rc::new(RefCell::new(handler));
        self.inner.handlers.borrow_mut().push((id, handler));
        tracing::trace!(subscription = id, "event handler attached");
        Subscription {
            bus: Rc::downgrade(&self.inner),
            id,
        }
    }

    /// Receiver mirroring every delivered event, for async follow-up work.
    pub fn watch(&self) -> broadcast::Receiver<Event> {
        self.inner.watch.subscribe()
    }

    /// Number of attached handlers.
    pub fn handler_count(&self) -> usize {
        self.inner.handlers.borrow().len()
    }

    /// Publish an event.
    ///
    /// Returns the number of handlers that received it, or 0 when the event
    /// was queued behind a dispatch already in progress.
    pub fn publish(&self, event: Event) -> usize {
        self.inner.pending.borrow_mut().push_back(event);
        if self.inner.dispatching.get() {
            return 0;
        }

        self.inner.dispatching.set(true);
        let _reset = DispatchGuard(&self.inner.dispatching);

        let mut first_delivery = None;
        loop {
            let next = self.inner.pending.borrow_mut().pop_front();
            let Some(event) = next else { break };
            let delivered = self.deliver(&event);
            first_delivery.get_or_insert(delivered);
        }
        first_delivery.unwrap_or(0)
    }

    fn deliver(&self, event: &Event) -> usize {
        tracing::debug!(event = event.name(), "dispatching event");
        let snapshot: Vec<(u64, Handler)> = self
            .inner
            .handlers
            .borrow()
            .iter()
            .map(|(id, h)| (*id, Rc::clone(h)))
            .collect();

        let mut delivered = 0;
        for (id, handler) in snapshot {
            // A handler earlier in this pass may have disposed this one.
            if !self.inner.is_subscribed(id) {
                continue;
            }
            (&mut *handler.borrow_mut())(event);
            delivered += 1;
        }
        let _ = self.inner.watch.send(event.clone());
        delivered
    }
}

struct DispatchGuard<'a>(&'a Cell<bool>);

impl Drop for DispatchGuard<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

/// Disposer for a bus handler. Detaches on drop.
pub struct Subscription {
    bus: Weak<Inner>,
    id: u64,
}

impl Subscription {
    /// Detach the handler now. Equivalent to dropping the subscription.
    pub fn dispose(self) {}

    pub fn is_active(&self) -> bool {
        self.bus
            .upgrade()
            .map(|inner| inner.is_subscribed(self.id))
            .unwrap_or(false)
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.bus.upgrade() {
            inner.remove(self.id);
            tracing::trace!(subscription = self.id, "event handler detached");
        }
    }
}
