//! User actions - what the list screen can ask of the store

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::domain::result::{Error, Result};
use crate::domain::{User, UserId};
use crate::services::UserStore;

/// Actions raised by the list screen for a user row
pub trait UserActionListener {
    fn on_user_move(&self, user: &User, delta: isize);
    fn on_user_delete(&self, user: &User);
    /// Presentation only; the roster is not touched
    fn on_user_details(&self, user: &User);
    fn on_user_fire(&self, user: &User);
}

/// A single action, detached from any particular user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "action", content = "delta", rename_all = "lowercase")]
pub enum UserAction {
    Move(isize),
    Delete,
    Details,
    Fire,
}

impl UserAction {
    pub fn dispatch(self, user: &User, listener: &dyn UserActionListener) {
        match self {
            UserAction::Move(delta) => listener.on_user_move(user, delta),
            UserAction::Delete => listener.on_user_delete(user),
            UserAction::Details => listener.on_user_details(user),
            UserAction::Fire => listener.on_user_fire(user),
        }
    }
}

/// An action aimed at a user id, e.g. parsed from `move:2:-1`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Command {
    pub user_id: UserId,
    #[serde(flatten)]
    pub action: UserAction,
}

impl FromStr for Command {
    type Err = Error;

    /// Accepts `move:<id>:<delta>`, `up:<id>`, `down:<id>`, `delete:<id>`
    /// (or `remove:<id>`), `fire:<id>` and `details:<id>`
    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.trim().split(':').map(str::trim).collect();

        let parse_id = |raw: &str| {
            raw.parse::<UserId>()
                .map_err(|_| Error::validation(format!("Invalid user id '{}' in '{}'", raw, s)))
        };

        let (user_id, action) = match parts.as_slice() {
            ["move", id, delta] => {
                let delta = delta.parse::<isize>().map_err(|_| {
                    Error::validation(format!("Invalid move offset '{}' in '{}'", delta, s))
                })?;
                (parse_id(*id)?, UserAction::Move(delta))
            }
            ["up", id] => (parse_id(*id)?, UserAction::Move(-1)),
            ["down", id] => (parse_id(*id)?, UserAction::Move(1)),
            ["delete" | "remove", id] => (parse_id(*id)?, UserAction::Delete),
            ["fire", id] => (parse_id(*id)?, UserAction::Fire),
            ["details", id] => (parse_id(*id)?, UserAction::Details),
            _ => return Err(Error::validation(format!("Unknown action '{}'", s))),
        };

        Ok(Self { user_id, action })
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.action {
            UserAction::Move(delta) => write!(f, "move:{}:{}", self.user_id, delta),
            UserAction::Delete => write!(f, "delete:{}", self.user_id),
            UserAction::Details => write!(f, "details:{}", self.user_id),
            UserAction::Fire => write!(f, "fire:{}", self.user_id),
        }
    }
}

/// Pass-through from row actions to the store
///
/// Details never reach the store; they go to the `details` sink, which is
/// where a front-end shows its "User: name" message.
pub struct StoreActions {
    store: UserStore,
    details: Box<dyn Fn(&User)>,
}

impl StoreActions {
    pub fn new(store: UserStore, details: impl Fn(&User) + 'static) -> Self {
        Self {
            store,
            details: Box::new(details),
        }
    }

    /// Run `action` against the store by id
    ///
    /// Unknown ids follow the store's no-op policy.
    pub fn perform(&self, user_id: UserId, action: UserAction) {
        match action {
            UserAction::Move(delta) => self.store.move_user(user_id, delta),
            UserAction::Delete => self.store.delete(user_id),
            UserAction::Fire => self.store.set_unemployed(user_id),
            UserAction::Details => {
                if let Some(user) = self.store.get(user_id) {
                    (self.details)(&user);
                }
            }
        }
    }

    pub fn run(&self, command: Command) {
        self.perform(command.user_id, command.action);
    }
}

impl UserActionListener for StoreActions {
    fn on_user_move(&self, user: &User, delta: isize) {
        self.perform(user.id, UserAction::Move(delta));
    }

    fn on_user_delete(&self, user: &User) {
        self.perform(user.id, UserAction::Delete);
    }

    fn on_user_details(&self, user: &User) {
        (self.details)(user);
    }

    fn on_user_fire(&self, user: &User) {
        self.perform(user.id, UserAction::Fire);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::domain::Snapshot;

    fn shared_store() -> UserStore {
        UserStore::new(vec![
            User::new(1, "Ann", "Acme", ""),
            User::new(2, "Ben", "Foo", ""),
            User::new(3, "Cat", "Bar", ""),
        ])
    }

    fn ids(store: &UserStore) -> Vec<UserId> {
        store.users().iter().map(|u| u.id).collect()
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(
            "move:2:-1".parse::<Command>().unwrap(),
            Command {
                user_id: 2,
                action: UserAction::Move(-1),
            }
        );
        assert_eq!("up:5".parse::<Command>().unwrap().action, UserAction::Move(-1));
        assert_eq!("down:5".parse::<Command>().unwrap().action, UserAction::Move(1));
        assert_eq!("remove:1".parse::<Command>().unwrap().action, UserAction::Delete);
        assert_eq!(" fire : 3 ".parse::<Command>().unwrap().user_id, 3);
        assert_eq!("details:4".parse::<Command>().unwrap().action, UserAction::Details);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("move:2".parse::<Command>().is_err());
        assert!("move:x:1".parse::<Command>().is_err());
        assert!("move:2:up".parse::<Command>().is_err());
        assert!("promote:2".parse::<Command>().is_err());
        assert!("".parse::<Command>().is_err());
    }

    #[test]
    fn test_display_round_trips() {
        for raw in ["move:2:-1", "delete:1", "fire:3", "details:9"] {
            assert_eq!(raw.parse::<Command>().unwrap().to_string(), raw);
        }
    }

    #[test]
    fn test_listener_passes_through_to_store() {
        let store = shared_store();
        let actions = StoreActions::new(store.clone(), |_| {});
        let ben = store.get(2).unwrap();

        UserAction::Move(-1).dispatch(&ben, &actions);
        assert_eq!(ids(&store), vec![2, 1, 3]);

        UserAction::Fire.dispatch(&ben, &actions);
        assert_eq!(store.get(2).unwrap().company, "");

        UserAction::Delete.dispatch(&ben, &actions);
        assert_eq!(ids(&store), vec![1, 3]);
    }

    #[test]
    fn test_details_do_not_touch_store() {
        let store = shared_store();
        let shown = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&shown);
        let actions = StoreActions::new(store.clone(), move |user: &User| {
            sink.borrow_mut().push(user.name.clone());
        });
        let before = store.users();

        actions.run("details:3".parse().unwrap());
        actions.run("details:99".parse().unwrap());

        assert_eq!(*shown.borrow(), vec!["Cat".to_string()]);
        assert!(Rc::ptr_eq(&before, &store.users()));
    }

    #[test]
    fn test_listeners_see_store_during_actions() {
        let store = shared_store();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let reader = store.clone();
        store.add_listener(Rc::new(move |_: &Snapshot| {
            sink.borrow_mut().push(reader.len());
        }));

        let actions = StoreActions::new(store.clone(), |_| {});
        actions.run("delete:1".parse().unwrap());
        actions.run("move:3:-1".parse().unwrap());

        assert_eq!(*seen.borrow(), vec![3, 2, 2]);
        assert_eq!(ids(&store), vec![3, 2]);
    }
}
