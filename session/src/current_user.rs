//! Single-slot observable holding the signed-in admin.
//!
//! DESIGN
//! ======
//! Behaves like a behaviour subject: subscribers get the current value on
//! subscribe and every later publication. Only this crate publishes; the auth
//! service is the single writer. Listeners run outside the slot lock so they
//! may read the stream back.

#[cfg(test)]
#[path = "current_user_test.rs"]
mod current_user_test;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::user::AdminUser;

type Listener = Arc<dyn Fn(Option<&AdminUser>) + Send + Sync>;

/// Handle returned by [`CurrentUser::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

#[derive(Default)]
struct Slot {
    value: Option<AdminUser>,
    next_id: u64,
    listeners: Vec<(SubscriptionId, Listener)>,
}

/// Shared current-user stream. Clones observe the same slot.
#[derive(Clone, Default)]
pub struct CurrentUser {
    slot: Arc<Mutex<Slot>>,
}

impl std::fmt::Debug for CurrentUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let slot = self.lock();
        f.debug_struct("CurrentUser")
            .field("value", &slot.value)
            .field("listeners", &slot.listeners.len())
            .finish()
    }
}

impl CurrentUser {
    #[must_use]
    pub fn new(initial: Option<AdminUser>) -> Self {
        Self { slot: Arc::new(Mutex::new(Slot { value: initial, ..Slot::default() })) }
    }

    /// Last published value.
    #[must_use]
    pub fn get(&self) -> Option<AdminUser> {
        self.lock().value.clone()
    }

    /// Register `listener`; it is invoked immediately with the current value.
    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(Option<&AdminUser>) + Send + Sync + 'static,
    {
        let listener: Listener = Arc::new(listener);
        let (id, current) = {
            let mut slot = self.lock();
            let id = SubscriptionId(slot.next_id);
            slot.next_id += 1;
            slot.listeners.push((id, Arc::clone(&listener)));
            (id, slot.value.clone())
        };
        listener(current.as_ref());
        id
    }

    /// Drop a listener. Returns `false` if it was already gone.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut slot = self.lock();
        let before = slot.listeners.len();
        slot.listeners.retain(|(existing, _)| *existing != id);
        slot.listeners.len() != before
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.lock().listeners.len()
    }

    pub(crate) fn publish(&self, value: Option<AdminUser>) {
        let listeners: Vec<Listener> = {
            let mut slot = self.lock();
            slot.value.clone_from(&value);
            slot.listeners.iter().map(|(_, listener)| Arc::clone(listener)).collect()
        };
        for listener in listeners {
            listener(value.as_ref());
        }
    }

    fn lock(&self) -> MutexGuard<'_, Slot> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
