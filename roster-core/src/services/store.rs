//! User store - the authoritative roster and its listeners
//!
//! `UserStore` is a cheap handle: clones share one roster. Every mutation
//! replaces the whole snapshot, so a snapshot handed to a listener never
//! changes under it. Unknown ids and out-of-range moves are silent no-ops;
//! listeners are notified after every mutation call either way.
//!
//! Listeners run after the store has released its internal borrow, so they
//! may read the store or dispatch further mutations.

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use tracing::{debug, warn};

use crate::domain::{Snapshot, User, UserId};
use crate::ports::UserSource;

/// Callback receiving the full roster after each change
pub type UsersListener = Rc<dyn Fn(&Snapshot)>;

struct StoreState {
    users: Snapshot,
    listeners: Vec<UsersListener>,
    /// Bumped on every notification round; a round stops early once a
    /// nested mutation has started a newer one
    generation: u64,
}

/// Single source of truth for the roster
#[derive(Clone)]
pub struct UserStore {
    state: Rc<RefCell<StoreState>>,
}

impl UserStore {
    /// Create a store holding `users`
    ///
    /// Later entries repeating an id are dropped so ids stay unique.
    pub fn new(users: Vec<User>) -> Self {
        let mut seen = HashSet::with_capacity(users.len());
        let total = users.len();
        let users: Vec<User> = users.into_iter().filter(|u| seen.insert(u.id)).collect();
        if users.len() != total {
            warn!(dropped = total - users.len(), "dropped users with duplicate ids");
        }

        Self {
            state: Rc::new(RefCell::new(StoreState {
                users: users.into(),
                listeners: Vec::new(),
                generation: 0,
            })),
        }
    }

    /// Create a store seeded from a mock data source
    pub fn seeded(source: &dyn UserSource, count: usize) -> Self {
        let store = Self::new(source.generate(count));
        debug!(count = store.len(), "seeded user store");
        store
    }

    /// Current snapshot
    pub fn users(&self) -> Snapshot {
        Rc::clone(&self.state.borrow().users)
    }

    pub fn get(&self, user_id: UserId) -> Option<User> {
        self.state.borrow().users.iter().find(|u| u.id == user_id).cloned()
    }

    pub fn position(&self, user_id: UserId) -> Option<usize> {
        self.state.borrow().users.iter().position(|u| u.id == user_id)
    }

    pub fn len(&self) -> usize {
        self.state.borrow().users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.borrow().users.is_empty()
    }

    /// Remove the user with `user_id`
    pub fn delete(&self, user_id: UserId) {
        self.mutate(|users| match users.iter().position(|u| u.id == user_id) {
            Some(index) => {
                let mut next = users.to_vec();
                next.remove(index);
                debug!(user_id, index, "deleted user");
                Some(next)
            }
            None => {
                debug!(user_id, "delete ignored: unknown user");
                None
            }
        });
    }

    /// Swap the user with the entry `delta` positions away
    ///
    /// A target outside the list leaves the roster unchanged.
    pub fn move_user(&self, user_id: UserId, delta: isize) {
        self.mutate(|users| {
            let Some(old_index) = users.iter().position(|u| u.id == user_id) else {
                debug!(user_id, "move ignored: unknown user");
                return None;
            };

            match old_index
                .checked_add_signed(delta)
                .filter(|&index| index < users.len())
            {
                Some(new_index) => {
                    let mut next = users.to_vec();
                    next.swap(old_index, new_index);
                    debug!(user_id, old_index, new_index, "moved user");
                    Some(next)
                }
                None => {
                    debug!(user_id, old_index, delta, "move ignored: out of bounds");
                    None
                }
            }
        });
    }

    /// Clear the company of the user with `user_id`
    pub fn set_unemployed(&self, user_id: UserId) {
        self.mutate(|users| match users.iter().position(|u| u.id == user_id) {
            Some(index) => {
                let mut next = users.to_vec();
                next[index] = next[index].unemployed();
                debug!(user_id, index, "cleared employment");
                Some(next)
            }
            None => {
                debug!(user_id, "set_unemployed ignored: unknown user");
                None
            }
        });
    }

    /// Register a listener and hand it the current snapshot right away
    ///
    /// Listeners are a set: adding the same `Rc` again does nothing beyond
    /// the immediate call.
    pub fn add_listener(&self, listener: UsersListener) {
        let users = {
            let mut state = self.state.borrow_mut();
            if !state.listeners.iter().any(|l| same_listener(l, &listener)) {
                state.listeners.push(Rc::clone(&listener));
            }
            Rc::clone(&state.users)
        };
        listener(&users);
    }

    pub fn remove_listener(&self, listener: &UsersListener) {
        self.state
            .borrow_mut()
            .listeners
            .retain(|l| !same_listener(l, listener));
    }

    pub fn listener_count(&self) -> usize {
        self.state.borrow().listeners.len()
    }

    /// Apply `change` to the current snapshot, then notify
    ///
    /// `change` returns `None` to leave the roster as it is.
    fn mutate(&self, change: impl FnOnce(&[User]) -> Option<Vec<User>>) {
        {
            let mut state = self.state.borrow_mut();
            if let Some(next) = change(&state.users) {
                state.users = next.into();
            }
        }
        self.notify_changes();
    }

    fn notify_changes(&self) {
        let (users, listeners, generation) = {
            let mut state = self.state.borrow_mut();
            state.generation += 1;
            (
                Rc::clone(&state.users),
                state.listeners.clone(),
                state.generation,
            )
        };

        for listener in &listeners {
            // A nested mutation already told everyone about a newer roster
            if self.state.borrow().generation != generation {
                break;
            }
            listener(&users);
        }
    }
}

fn same_listener(a: &UsersListener, b: &UsersListener) -> bool {
    std::ptr::addr_eq(Rc::as_ptr(a), Rc::as_ptr(b))
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use super::*;

    fn user(id: UserId, company: &str) -> User {
        User::new(id, format!("User {id}"), company, format!("https://img/{id}.jpg"))
    }

    fn store() -> UserStore {
        UserStore::new(vec![user(1, "Acme"), user(2, "Foo"), user(3, "Bar")])
    }

    fn ids(store: &UserStore) -> Vec<UserId> {
        store.users().iter().map(|u| u.id).collect()
    }

    fn recording_listener() -> (UsersListener, Rc<RefCell<Vec<Vec<UserId>>>>) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&calls);
        let listener: UsersListener = Rc::new(move |users: &Snapshot| {
            sink.borrow_mut().push(users.iter().map(|u| u.id).collect());
        });
        (listener, calls)
    }

    #[test]
    fn test_scenario_move_delete_fire() {
        let store = store();

        store.move_user(2, -1);
        assert_eq!(ids(&store), vec![2, 1, 3]);

        store.delete(1);
        assert_eq!(ids(&store), vec![2, 3]);

        store.set_unemployed(3);
        let users = store.users();
        assert_eq!(users.len(), 2);
        assert_eq!(users[0], user(2, "Foo"));
        assert_eq!(users[1].id, 3);
        assert_eq!(users[1].company, "");
    }

    #[test]
    fn test_unknown_ids_keep_snapshot_and_notify() {
        let store = store();
        let (listener, calls) = recording_listener();
        store.add_listener(listener);

        let before = store.users();
        store.delete(42);
        store.move_user(42, 1);
        store.set_unemployed(42);

        assert!(Rc::ptr_eq(&before, &store.users()));
        assert_eq!(calls.borrow().len(), 4);
        assert!(calls.borrow().iter().all(|ids| *ids == vec![1, 2, 3]));
    }

    #[test]
    fn test_move_bounds() {
        let store = store();
        let (listener, calls) = recording_listener();
        store.add_listener(listener);

        store.move_user(1, -1);
        assert_eq!(ids(&store), vec![1, 2, 3]);

        store.move_user(3, 1);
        assert_eq!(ids(&store), vec![1, 2, 3]);

        store.move_user(1, 1);
        assert_eq!(ids(&store), vec![2, 1, 3]);

        store.move_user(9, 1);
        assert_eq!(ids(&store), vec![2, 1, 3]);

        // initial call plus one per move, no-ops included
        assert_eq!(calls.borrow().len(), 5);
    }

    #[test]
    fn test_move_by_more_than_one_swaps() {
        let store = UserStore::new((1..=5).map(|id| user(id, "Acme")).collect());

        store.move_user(1, 3);
        assert_eq!(ids(&store), vec![4, 2, 3, 1, 5]);

        store.move_user(5, -5);
        assert_eq!(ids(&store), vec![4, 2, 3, 1, 5]);
    }

    #[test]
    fn test_set_unemployed_preserves_fields_and_position() {
        let store = store();
        store.set_unemployed(2);

        let fired = store.get(2).unwrap();
        assert_eq!(fired.name, "User 2");
        assert_eq!(fired.photo, "https://img/2.jpg");
        assert_eq!(fired.company, "");
        assert_eq!(store.position(2), Some(1));
    }

    #[test]
    fn test_old_snapshots_stay_intact() {
        let store = store();
        let before = store.users();

        store.delete(2);
        store.set_unemployed(1);

        assert_eq!(before.len(), 3);
        assert_eq!(before[0].company, "Acme");
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_listener_called_immediately_and_on_changes() {
        let store = store();
        let (listener, calls) = recording_listener();

        store.add_listener(Rc::clone(&listener));
        store.move_user(3, -1);

        assert_eq!(*calls.borrow(), vec![vec![1, 2, 3], vec![1, 3, 2]]);

        store.remove_listener(&listener);
        store.delete(1);
        assert_eq!(calls.borrow().len(), 2);
        assert_eq!(store.listener_count(), 0);
    }

    #[test]
    fn test_listeners_are_a_set() {
        let store = store();
        let (listener, calls) = recording_listener();

        store.add_listener(Rc::clone(&listener));
        store.add_listener(Rc::clone(&listener));
        assert_eq!(store.listener_count(), 1);

        calls.borrow_mut().clear();
        store.delete(1);
        assert_eq!(calls.borrow().len(), 1);
    }

    #[test]
    fn test_listener_can_read_store() {
        let store = store();
        let companies = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&companies);
        let reader = store.clone();
        store.add_listener(Rc::new(move |users: &Snapshot| {
            assert_eq!(reader.len(), users.len());
            sink.borrow_mut().push(reader.get(3).map(|u| u.company));
        }));

        store.delete(1);
        store.set_unemployed(3);

        assert_eq!(
            *companies.borrow(),
            vec![
                Some("Bar".to_string()),
                Some("Bar".to_string()),
                Some(String::new())
            ]
        );
    }

    #[test]
    fn test_listener_can_mutate_store() {
        let store = store();
        let (recorder, calls) = recording_listener();

        // Fires user 2 once the roster first shrinks
        let fired = Rc::new(Cell::new(false));
        let writer = store.clone();
        let flag = Rc::clone(&fired);
        store.add_listener(Rc::new(move |users: &Snapshot| {
            if users.len() < 3 && !flag.replace(true) {
                writer.set_unemployed(2);
            }
        }));
        store.add_listener(recorder);
        calls.borrow_mut().clear();

        store.delete(3);

        assert!(fired.get());
        assert_eq!(store.get(2).unwrap().company, "");
        // The recorder only hears about the roster after the nested change
        assert_eq!(*calls.borrow(), vec![vec![1, 2]]);
    }

    #[test]
    fn test_duplicate_ids_dropped() {
        let store = UserStore::new(vec![user(1, "A"), user(1, "B"), user(2, "C")]);
        assert_eq!(ids(&store), vec![1, 2]);
        assert_eq!(store.get(1).unwrap().company, "A");
    }
}
