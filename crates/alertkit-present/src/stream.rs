//! Theme sources and subscriptions.
//!
//! A [`Subscription`] is a scoped handle: it is released exactly once, either
//! by an explicit [`Subscription::unsubscribe`] or when the handle is dropped.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use log::debug;

use alertkit_core::AlertTheme;

/// Callback receiving theme updates.
pub type ThemeCallback = Box<dyn FnMut(&AlertTheme)>;

/// Handle to an active subscription.
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Wrap a release action that must run exactly once.
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// A subscription with nothing to release.
    pub fn empty() -> Self {
        Self { release: None }
    }

    /// Release the subscription. Returns `true` if this call released it.
    pub fn unsubscribe(&mut self) -> bool {
        match self.release.take() {
            Some(release) => {
                release();
                true
            }
            None => false,
        }
    }

    pub fn is_active(&self) -> bool {
        self.release.is_some()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.is_active())
            .finish()
    }
}

/// Supplies the current theme and pushes later ones.
pub trait ThemeSource {
    fn current(&self) -> AlertTheme;

    /// Register for updates published after this call.
    fn subscribe(&self, on_update: ThemeCallback) -> Subscription;
}

type SubscriberId = u64;

struct StreamState {
    current: AlertTheme,
    next_id: SubscriberId,
    subscribers: Vec<(SubscriberId, ThemeCallback)>,
    delivering: bool,
    republished: bool,
    removed_while_delivering: Vec<SubscriberId>,
}

impl StreamState {
    fn remove(&mut self, id: SubscriberId) {
        if let Some(index) = self.subscribers.iter().position(|(sid, _)| *sid == id) {
            self.subscribers.remove(index);
        } else if self.delivering {
            self.removed_while_delivering.push(id);
        }
    }
}

/// In-process theme broadcaster.
#[derive(Clone)]
pub struct ThemeStream {
    state: Rc<RefCell<StreamState>>,
}

impl ThemeStream {
    pub fn new(initial: AlertTheme) -> Self {
        Self {
            state: Rc::new(RefCell::new(StreamState {
                current: initial,
                next_id: 0,
                subscribers: Vec::new(),
                delivering: false,
                republished: false,
                removed_while_delivering: Vec::new(),
            })),
        }
    }

    /// Replace the current theme and notify subscribers in subscription order.
    ///
    /// Callbacks may unsubscribe or subscribe. A publish from inside a callback
    /// is delivered to every subscriber once the running round finishes, so all
    /// subscribers end on the latest theme.
    pub fn publish(&self, theme: AlertTheme) {
        {
            let mut state = self.state.borrow_mut();
            state.current = theme;
            if state.delivering {
                state.republished = true;
                return;
            }
            state.delivering = true;
        }

        loop {
            let (theme, mut subscribers) = {
                let mut state = self.state.borrow_mut();
                state.republished = false;
                (state.current.clone(), std::mem::take(&mut state.subscribers))
            };

            for (id, callback) in subscribers.iter_mut() {
                let removed = self.state.borrow().removed_while_delivering.contains(id);
                if !removed {
                    callback(&theme);
                }
            }

            let mut state = self.state.borrow_mut();
            let removed = std::mem::take(&mut state.removed_while_delivering);
            subscribers.retain(|(id, _)| !removed.contains(id));
            subscribers.append(&mut state.subscribers);
            state.subscribers = subscribers;
            if !state.republished {
                state.delivering = false;
                break;
            }
            debug!("theme stream: redelivering theme published during delivery");
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.state.borrow().subscribers.len()
    }
}

impl ThemeSource for ThemeStream {
    fn current(&self) -> AlertTheme {
        self.state.borrow().current.clone()
    }

    fn subscribe(&self, on_update: ThemeCallback) -> Subscription {
        let id = {
            let mut state = self.state.borrow_mut();
            let id = state.next_id;
            state.next_id += 1;
            state.subscribers.push((id, on_update));
            id
        };
        debug!("theme stream: subscriber {} added", id);

        let state: Weak<RefCell<StreamState>> = Rc::downgrade(&self.state);
        Subscription::new(move || {
            if let Some(state) = state.upgrade() {
                state.borrow_mut().remove(id);
            }
            debug!("theme stream: subscriber {} released", id);
        })
    }
}
