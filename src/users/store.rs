//! In-memory user store.
//!
//! A single mutex guards both the map and the id counter, so every
//! read-modify-write (issue id + insert, check + merge, check + remove) is
//! atomic with respect to concurrent requests. Ids start at 1 and are never
//! reused, even after deletion.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::Utc;
use tracing::debug;

use super::model::{User, UserInput};

/// Cloneable handle to the shared store. Clones see the same users.
#[derive(Clone, Debug, Default)]
pub struct UserStore {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Debug, Default)]
struct Inner {
    users: BTreeMap<u64, User>,
    last_id: u64,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    // No operation can leave `Inner` half-updated, so a lock poisoned by a
    // panicking holder is still consistent.
    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Issues the next id, stamps `created_at` and inserts the user.
    pub fn create(&self, input: UserInput) -> User {
        let mut inner = self.lock();
        inner.last_id += 1;
        let user = User::new(inner.last_id, input, Utc::now());
        inner.users.insert(user.id, user.clone());
        debug!(id = user.id, "user inserted");
        user
    }

    pub fn get(&self, id: u64) -> Option<User> {
        self.lock().users.get(&id).cloned()
    }

    /// All users in ascending id order.
    pub fn list(&self) -> Vec<User> {
        self.lock().users.values().cloned().collect()
    }

    /// Merges `input` into an existing user and returns the result, or
    /// `None` without touching the store when `id` is unknown.
    pub fn update(&self, id: u64, input: &UserInput) -> Option<User> {
        let mut inner = self.lock();
        let user = inner.users.get_mut(&id)?;
        user.merge(input);
        debug!(id, "user updated");
        Some(user.clone())
    }

    /// Removes and returns a user, or `None` when `id` is unknown.
    pub fn remove(&self, id: u64) -> Option<User> {
        let removed = self.lock().users.remove(&id);
        if removed.is_some() {
            debug!(id, "user removed");
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.lock().users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use pretty_assertions::assert_eq;

    use super::*;

    fn input(first: &str, last: &str, email: &str) -> UserInput {
        UserInput {
            first_name: first.to_owned(),
            last_name: last.to_owned(),
            email: email.to_owned(),
        }
    }

    #[test]
    fn ids_start_at_one_and_increase() {
        let store = UserStore::new();
        let a = store.create(input("a", "", ""));
        let b = store.create(input("b", "", ""));
        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
    }

    #[test]
    fn ids_are_not_reused_after_removal() {
        let store = UserStore::new();
        let first = store.create(UserInput::default());
        store.remove(first.id);
        let second = store.create(UserInput::default());
        assert_eq!(second.id, 2);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn get_returns_what_create_returned() {
        let store = UserStore::new();
        let created = store.create(input("potato", "white", "bravopotato@gmail.com"));
        assert_eq!(store.get(created.id), Some(created));
        assert_eq!(store.get(99), None);
    }

    #[test]
    fn list_is_ordered_by_id() {
        let store = UserStore::new();
        assert!(store.list().is_empty());
        for name in ["c", "a", "b"] {
            store.create(input(name, "", ""));
        }
        let ids: Vec<u64> = store.list().iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn update_merges_and_missing_id_leaves_store_untouched() {
        let store = UserStore::new();
        let created = store.create(input("potato", "white", "bravopotato@gmail.com"));

        let updated = store.update(created.id, &input("carrot", "", "")).unwrap();
        assert_eq!(updated.first_name, "carrot");
        assert_eq!(updated.last_name, "white");
        assert_eq!(store.get(created.id), Some(updated));

        let snapshot = store.list();
        assert_eq!(store.update(42, &input("x", "y", "z")), None);
        assert_eq!(store.list(), snapshot);
    }

    #[test]
    fn remove_of_missing_id_is_a_no_op() {
        let store = UserStore::new();
        store.create(UserInput::default());
        assert_eq!(store.remove(7), None);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn concurrent_creates_issue_unique_ids() {
        let store = UserStore::new();
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = store.clone();
                thread::spawn(move || {
                    (0..50).map(|_| store.create(UserInput::default()).id).collect::<Vec<_>>()
                })
            })
            .collect();

        let mut ids: Vec<u64> = handles.into_iter().flat_map(|h| h.join().unwrap()).collect();
        ids.sort_unstable();
        assert_eq!(ids, (1..=400).collect::<Vec<_>>());
        assert_eq!(store.len(), 400);
    }
}
