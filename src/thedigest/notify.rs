//! # Notifications
//!
//! Forms never print. They push transient messages ("toasts") into a
//! [`NotificationHub`], and whatever UI is mounted subscribes to the hub and
//! decides how to show them.
//!
//! - Publishing is fire-and-forget: nothing is returned to the caller that it must consume.
//! - The hub keeps the most recent `limit` notifications; older ones are evicted.
//! - Each notification carries a display duration, defaulting to the hub's.
//! - Subscriptions are guards. When the last one is dropped the queue is cleared,
//!   since no UI is left to show it.
//!
//! Controllers only see the [`Notify`] trait, so tests can hand them anything that
//! records calls.

use crate::model::Severity;
use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_LIMIT: usize = 5;
pub const DEFAULT_DURATION: Duration = Duration::from_millis(5000);

/// The notification collaborator seen by form controllers.
pub trait Notify: Send + Sync {
    fn notify(&self, title: &str, description: &str, severity: Severity);
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub severity: Severity,
    pub duration: Duration,
}

impl Notification {
    pub fn is_destructive(&self) -> bool {
        self.severity == Severity::Destructive
    }
}

type Listener = Arc<dyn Fn(&Notification) + Send + Sync>;

struct HubState {
    limit: usize,
    duration: Duration,
    next_id: u64,
    next_subscriber: u64,
    queue: VecDeque<Notification>,
    subscribers: Vec<(u64, Listener)>,
}

/// Process-wide publish/subscribe channel for notifications.
///
/// Cloning is cheap; clones share the same queue and subscribers.
#[derive(Clone)]
pub struct NotificationHub {
    state: Arc<Mutex<HubState>>,
}

static GLOBAL_HUB: Lazy<NotificationHub> = Lazy::new(NotificationHub::default);

impl Default for NotificationHub {
    fn default() -> Self {
        Self::new(DEFAULT_LIMIT, DEFAULT_DURATION)
    }
}

impl NotificationHub {
    pub fn new(limit: usize, duration: Duration) -> Self {
        Self {
            state: Arc::new(Mutex::new(HubState {
                limit: limit.max(1),
                duration,
                next_id: 1,
                next_subscriber: 1,
                queue: VecDeque::new(),
                subscribers: Vec::new(),
            })),
        }
    }

    /// The hub shared by the whole process.
    pub fn global() -> &'static NotificationHub {
        &GLOBAL_HUB
    }

    /// Changes the queue bound and default duration. Excess queued entries are evicted.
    pub fn configure(&self, limit: usize, duration: Duration) {
        let mut state = self.lock();
        state.limit = limit.max(1);
        state.duration = duration;
        while state.queue.len() > state.limit {
            state.queue.pop_front();
        }
    }

    /// Registers a listener that sees every notification published from now on.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&Notification) + Send + Sync + 'static,
    {
        let mut state = self.lock();
        let id = state.next_subscriber;
        state.next_subscriber += 1;
        state.subscribers.push((id, Arc::new(listener)));
        Subscription {
            state: Arc::downgrade(&self.state),
            id,
        }
    }

    pub fn publish(
        &self,
        title: impl Into<String>,
        description: impl Into<String>,
        severity: Severity,
    ) -> Notification {
        let (notification, listeners) = {
            let mut state = self.lock();
            let notification = Notification {
                id: state.next_id,
                title: title.into(),
                description: description.into(),
                severity,
                duration: state.duration,
            };
            state.next_id += 1;
            state.queue.push_back(notification.clone());
            while state.queue.len() > state.limit {
                state.queue.pop_front();
            }
            let listeners: Vec<Listener> = state
                .subscribers
                .iter()
                .map(|(_, listener)| Arc::clone(listener))
                .collect();
            (notification, listeners)
        };

        debug!(
            id = notification.id,
            title = %notification.title,
            severity = ?notification.severity,
            "notification published"
        );

        // Listeners run outside the lock so they may publish or dismiss themselves.
        for listener in listeners {
            listener(&notification);
        }
        notification
    }

    /// Notifications currently queued, oldest first.
    pub fn notifications(&self) -> Vec<Notification> {
        self.lock().queue.iter().cloned().collect()
    }

    pub fn dismiss(&self, id: u64) -> bool {
        let mut state = self.lock();
        let before = state.queue.len();
        state.queue.retain(|n| n.id != id);
        state.queue.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.lock().subscribers.len()
    }

    fn lock(&self) -> MutexGuard<'_, HubState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Notify for NotificationHub {
    fn notify(&self, title: &str, description: &str, severity: Severity) {
        self.publish(title, description, severity);
    }
}

/// Keeps a listener registered. Dropping it unsubscribes.
pub struct Subscription {
    state: Weak<Mutex<HubState>>,
    id: u64,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(state) = self.state.upgrade() {
            let mut state = state.lock().unwrap_or_else(PoisonError::into_inner);
            state.subscribers.retain(|(id, _)| *id != self.id);
            if state.subscribers.is_empty() {
                state.queue.clear();
            }
        }
    }
}
