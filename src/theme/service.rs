// Theme service - owns the active theme and fans out change notifications
//
// Components subscribe at construction and receive every subsequent theme
// over an mpsc channel, in delivery order, never coalesced. The subscription
// half is a cancellation handle that unregisters the subscriber; the events
// half is the ordered receiver the component drains on its own turn.

use super::Theme;
use crate::dispose::Disposable;
use std::sync::mpsc;
use std::sync::{Arc, Mutex, Weak};

/// Owns the current theme and the subscriber registry.
///
/// Clones share the same underlying service, so a shell can hand a handle
/// to every component it constructs.
#[derive(Clone)]
pub struct ThemeService {
    inner: Arc<Mutex<ServiceInner>>,
}

struct ServiceInner {
    current: Theme,
    next_subscription: u64,
    /// Registration order; delivery walks this front to back.
    subscribers: Vec<Subscriber>,
}

struct Subscriber {
    id: u64,
    sender: mpsc::Sender<Theme>,
}

impl ThemeService {
    pub fn new(initial: Theme) -> Self {
        Self {
            inner: Arc::new(Mutex::new(ServiceInner {
                current: initial,
                next_subscription: 0,
                subscribers: Vec::new(),
            })),
        }
    }

    /// Snapshot of the active theme.
    pub fn current(&self) -> Theme {
        self.inner.lock().unwrap().current.clone()
    }

    /// Register for change notifications.
    ///
    /// Returns the cancellation handle (a [`Disposable`]) and the receiving
    /// end of the notification queue. Disposing the handle stops delivery;
    /// dropping the receiver merely leaves notifications unread until the
    /// handle is disposed and the dead channel is pruned.
    pub fn subscribe(&self) -> (ThemeSubscription, ThemeEvents) {
        let (sender, receiver) = mpsc::channel();
        let mut inner = self.inner.lock().unwrap();
        let id = inner.next_subscription;
        inner.next_subscription += 1;
        inner.subscribers.push(Subscriber { id, sender });
        (
            ThemeSubscription {
                id,
                inner: Arc::downgrade(&self.inner),
            },
            ThemeEvents { receiver },
        )
    }

    /// Replace the active theme and deliver it to every live subscriber,
    /// in registration order. Subscribers whose receiver is gone are pruned.
    pub fn set_theme(&self, theme: Theme) {
        let mut inner = self.inner.lock().unwrap();
        tracing::info!("theme changed to '{}'", theme.name);
        inner.current = theme.clone();
        inner
            .subscribers
            .retain(|subscriber| subscriber.sender.send(theme.clone()).is_ok());
    }

    /// Number of live subscriptions (diagnostics and tests).
    pub fn subscriber_count(&self) -> usize {
        self.inner.lock().unwrap().subscribers.len()
    }
}

impl Default for ThemeService {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}

/// Cancellation handle for one theme subscription.
///
/// Disposal unregisters the subscriber so nothing further is queued.
/// Holds only a weak handle to the service: if the service is gone there is
/// nothing left to unregister.
pub struct ThemeSubscription {
    id: u64,
    inner: Weak<Mutex<ServiceInner>>,
}

impl Disposable for ThemeSubscription {
    fn dispose(&mut self) {
        if let Some(inner) = self.inner.upgrade() {
            let mut inner = inner.lock().unwrap();
            inner.subscribers.retain(|subscriber| subscriber.id != self.id);
        }
    }
}

/// Receiving end of a theme subscription: queued themes in delivery order.
pub struct ThemeEvents {
    receiver: mpsc::Receiver<Theme>,
}

impl ThemeEvents {
    /// Next queued theme change, if any. Never blocks.
    pub fn try_next(&self) -> Option<Theme> {
        self.receiver.try_recv().ok()
    }
}
