//! Viewport tracking.
//!
//! The host owns a [`ResizeSignal`] and emits on every size change. A
//! [`ViewportTracker`] subscribes for as long as it lives; dropping it
//! unregisters the listener.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

use kaleido_core::ViewportSize;
use tracing::debug;

type Listener = Rc<dyn Fn(ViewportSize)>;

/// Single-threaded "size changed" notifier for the display surface.
pub struct ResizeSignal {
    /// Last size reported by the host.
    current: Cell<ViewportSize>,
    listeners: RefCell<Vec<(u64, Listener)>>,
    next_id: Cell<u64>,
}

impl fmt::Debug for ResizeSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResizeSignal")
            .field("current", &self.current.get())
            .field("listeners", &self.listener_count())
            .finish()
    }
}

impl ResizeSignal {
    /// Create a signal for a surface currently measuring `initial`.
    pub fn new(initial: ViewportSize) -> Rc<Self> {
        Rc::new(Self {
            current: Cell::new(initial),
            listeners: RefCell::new(Vec::new()),
            next_id: Cell::new(0),
        })
    }

    /// Current surface size.
    pub fn current(&self) -> ViewportSize {
        self.current.get()
    }

    /// Register `listener`; it stays registered until the returned
    /// [`Subscription`] is dropped.
    pub fn subscribe(self: &Rc<Self>, listener: impl Fn(ViewportSize) + 'static) -> Subscription {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        let listener: Listener = Rc::new(listener);
        self.listeners.borrow_mut().push((id, listener));
        Subscription {
            signal: Rc::downgrade(self),
            id,
        }
    }

    /// Record a new surface size and notify every listener.
    pub fn emit(&self, size: ViewportSize) {
        self.current.set(size);
        // Listeners may subscribe or unsubscribe while being notified
        let listeners: Vec<Listener> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        for listener in listeners {
            listener(size);
        }
    }

    /// Number of live subscriptions.
    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    fn unsubscribe(&self, id: u64) {
        self.listeners.borrow_mut().retain(|(other, _)| *other != id);
    }
}

/// Guard returned by [`ResizeSignal::subscribe`].
#[derive(Debug)]
#[must_use = "dropping a subscription unregisters its listener"]
pub struct Subscription {
    signal: Weak<ResizeSignal>,
    id: u64,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(signal) = self.signal.upgrade() {
            signal.unsubscribe(self.id);
        }
    }
}

/// Keeps the component's view of the surface size up to date.
#[derive(Debug)]
pub struct ViewportTracker {
    size: Rc<Cell<ViewportSize>>,
    _subscription: Subscription,
}

impl ViewportTracker {
    /// Subscribe to `signal` and take an initial measurement.
    pub fn activate(signal: &Rc<ResizeSignal>) -> Self {
        let size = Rc::new(Cell::new(ViewportSize::default()));
        let subscription = {
            let size = Rc::clone(&size);
            signal.subscribe(move |new_size| {
                debug!(width = new_size.width, height = new_size.height, "viewport resized");
                size.set(new_size);
            })
        };
        size.set(signal.current());

        Self {
            size,
            _subscription: subscription,
        }
    }

    /// Latest measured size; zero until the host reports one.
    pub fn size(&self) -> ViewportSize {
        self.size.get()
    }
}
