//! Users adapter - presentation model of the list screen
//!
//! Holds the snapshot currently on screen. Each new snapshot is reconciled
//! against it and only the resulting edits are pushed to the view, so the
//! view never has to redraw the whole list.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use serde::Serialize;

use crate::domain::{EditScript, Snapshot, User, UserId};
use crate::ports::{Avatar, AvatarResolver};
use crate::services::actions::UserAction;
use crate::services::reconciler::{self, ListUpdateCallback};
use crate::services::store::UsersListener;

/// Label shown instead of an empty company
pub const DEFAULT_UNEMPLOYED_LABEL: &str = "Unemployed";

/// A bound list row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserRow {
    pub id: UserId,
    pub name: String,
    pub company_label: String,
    pub avatar: Avatar,
}

/// Entries of the per-row popup menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuAction {
    MoveUp,
    MoveDown,
    Remove,
    Fire,
}

impl MenuAction {
    pub fn title(self) -> &'static str {
        match self {
            MenuAction::MoveUp => "Move up",
            MenuAction::MoveDown => "Move down",
            MenuAction::Remove => "Remove",
            MenuAction::Fire => "Fire",
        }
    }

    fn to_user_action(self) -> UserAction {
        match self {
            MenuAction::MoveUp => UserAction::Move(-1),
            MenuAction::MoveDown => UserAction::Move(1),
            MenuAction::Remove => UserAction::Delete,
            MenuAction::Fire => UserAction::Fire,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MenuItem {
    pub action: MenuAction,
    pub enabled: bool,
}

/// Presentation model feeding a list view through a [`ListUpdateCallback`]
pub struct UsersAdapter<C: ListUpdateCallback> {
    users: Snapshot,
    view: C,
    avatars: Box<dyn AvatarResolver>,
    unemployed_label: String,
}

impl<C: ListUpdateCallback> UsersAdapter<C> {
    pub fn new(view: C, avatars: Box<dyn AvatarResolver>) -> Self {
        Self {
            users: Rc::from(Vec::new()),
            view,
            avatars,
            unemployed_label: DEFAULT_UNEMPLOYED_LABEL.to_string(),
        }
    }

    pub fn with_unemployed_label(mut self, label: impl Into<String>) -> Self {
        self.unemployed_label = label.into();
        self
    }

    /// Snapshot currently on screen
    pub fn users(&self) -> Snapshot {
        Rc::clone(&self.users)
    }

    pub fn item_count(&self) -> usize {
        self.users.len()
    }

    pub fn view(&self) -> &C {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut C {
        &mut self.view
    }

    /// Replace the list, pushing the minimal set of edits to the view
    pub fn set_users(&mut self, users: Snapshot) -> EditScript {
        let script = reconciler::diff(&self.users, &users);
        self.users = users;
        reconciler::dispatch_updates_to(&script, &mut self.view);
        script
    }

    /// Store listener that forwards every snapshot to `adapter`
    ///
    /// Holds the adapter weakly; once it is dropped the listener does nothing.
    pub fn listener(adapter: &Rc<RefCell<Self>>) -> UsersListener
    where
        C: 'static,
    {
        let adapter: Weak<RefCell<Self>> = Rc::downgrade(adapter);
        Rc::new(move |users: &Snapshot| {
            if let Some(adapter) = adapter.upgrade() {
                adapter.borrow_mut().set_users(Rc::clone(users));
            }
        })
    }

    pub fn row(&self, position: usize) -> Option<UserRow> {
        self.users.get(position).map(|user| self.bind(user))
    }

    pub fn rows(&self) -> Vec<UserRow> {
        self.users.iter().map(|user| self.bind(user)).collect()
    }

    fn bind(&self, user: &User) -> UserRow {
        let company_label = if user.is_employed() {
            user.company.clone()
        } else {
            self.unemployed_label.clone()
        };

        UserRow {
            id: user.id,
            name: user.name.clone(),
            company_label,
            avatar: self.avatars.resolve(&user.photo),
        }
    }

    fn position(&self, user_id: UserId) -> Option<usize> {
        self.users.iter().position(|u| u.id == user_id)
    }

    /// Popup menu for the row of `user_id`; empty if the user is not shown
    pub fn menu_for(&self, user_id: UserId) -> Vec<MenuItem> {
        let Some(position) = self.position(user_id) else {
            return Vec::new();
        };
        let user = &self.users[position];

        let mut items = vec![
            MenuItem {
                action: MenuAction::MoveUp,
                enabled: position > 0,
            },
            MenuItem {
                action: MenuAction::MoveDown,
                enabled: position + 1 < self.users.len(),
            },
            MenuItem {
                action: MenuAction::Remove,
                enabled: true,
            },
        ];
        if user.is_employed() {
            items.push(MenuItem {
                action: MenuAction::Fire,
                enabled: true,
            });
        }
        items
    }

    /// Resolve a menu selection into the action to dispatch
    ///
    /// Returns `None` for items that are absent or disabled. The caller
    /// dispatches after releasing the adapter, since the store will call back
    /// into it.
    pub fn on_menu_item(&self, user_id: UserId, action: MenuAction) -> Option<(User, UserAction)> {
        let item = self
            .menu_for(user_id)
            .into_iter()
            .find(|item| item.action == action)?;
        if !item.enabled {
            return None;
        }
        let user = self.users.iter().find(|u| u.id == user_id)?.clone();
        Some((user, action.to_user_action()))
    }

    /// A click on the row body shows the user's details
    pub fn on_click(&self, user_id: UserId) -> Option<(User, UserAction)> {
        let user = self.users.iter().find(|u| u.id == user_id)?.clone();
        Some((user, UserAction::Details))
    }
}
