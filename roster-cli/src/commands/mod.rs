//! CLI command implementations

pub mod apply;
pub mod diff;
pub mod list;
pub mod menu;
pub mod settings;
pub mod shell;

use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

use anyhow::{Context, Result};
use roster_core::services::{StoreActions, UsersAdapter, UsersListener};
use roster_core::{EditOp, RosterContext, User};
use tracing::debug;

use crate::output::EditLog;

/// Get the roster directory from environment or default
pub fn get_roster_dir() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("ROSTER_DIR") {
        return Ok(PathBuf::from(dir));
    }
    dirs::home_dir()
        .map(|home| home.join(".roster"))
        .context("Could not find home directory")
}

/// Load settings and seed a fresh roster
pub fn get_context() -> Result<RosterContext> {
    let roster_dir = get_roster_dir()?;
    RosterContext::new(&roster_dir)
        .with_context(|| format!("Failed to load roster settings from {:?}", roster_dir))
}

/// The list screen: store, adapter and action pass-through wired together
///
/// The adapter listens to the store, so every action ends with the adapter
/// holding the new snapshot and its view holding the edits that got it there.
pub struct Screen {
    pub ctx: RosterContext,
    pub adapter: Rc<RefCell<UsersAdapter<EditLog>>>,
    pub actions: StoreActions,
    messages: Rc<RefCell<Vec<String>>>,
    listener: UsersListener,
}

impl Screen {
    pub fn open(ctx: RosterContext) -> Self {
        let adapter = Rc::new(RefCell::new(ctx.adapter(EditLog::default())));
        let listener = UsersAdapter::listener(&adapter);
        ctx.store.add_listener(Rc::clone(&listener));

        let messages = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&messages);
        let actions = ctx.actions(move |user: &User| {
            sink.borrow_mut().push(format!("User: {}", user.name));
        });

        // The initial fill is not interesting to callers
        let initial = adapter.borrow_mut().view_mut().drain();
        debug!(rows = initial.len(), "opened list screen");

        Self {
            ctx,
            adapter,
            actions,
            messages,
            listener,
        }
    }

    /// Edits the view received since the last call
    pub fn take_edits(&self) -> Vec<EditOp> {
        self.adapter.borrow_mut().view_mut().drain()
    }

    /// Detail messages shown since the last call
    pub fn take_messages(&self) -> Vec<String> {
        std::mem::take(&mut *self.messages.borrow_mut())
    }
}

impl Drop for Screen {
    fn drop(&mut self) {
        self.ctx.store.remove_listener(&self.listener);
        debug!(listeners = self.ctx.store.listener_count(), "closed list screen");
    }
}

#[cfg(test)]
mod tests {
    use roster_core::config::Config;
    use roster_core::Snapshot;

    use super::*;

    fn screen(count: usize) -> Screen {
        Screen::open(RosterContext::with_config(Config {
            user_count: count,
            seed: Some(7),
            ..Config::default()
        }))
    }

    #[test]
    fn test_screen_reports_edits_per_action() {
        let screen = screen(3);
        assert!(screen.take_edits().is_empty());

        // Another listener on the same store reads it back mid-action
        let sizes = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&sizes);
        let store = screen.ctx.store.clone();
        screen.ctx.store.add_listener(Rc::new(move |_: &Snapshot| {
            sink.borrow_mut().push(store.len());
        }));

        screen.actions.run("move:1:1".parse().unwrap());
        assert_eq!(screen.take_edits(), vec![EditOp::Move { from: 0, to: 1 }]);

        screen.actions.run("details:2".parse().unwrap());
        assert!(screen.take_edits().is_empty());
        assert_eq!(screen.take_messages().len(), 1);

        assert_eq!(*sizes.borrow(), vec![3, 3]);
    }

    #[test]
    fn test_screen_unregisters_on_drop() {
        let screen = screen(2);
        let store = screen.ctx.store.clone();
        assert_eq!(store.listener_count(), 1);

        drop(screen);
        assert_eq!(store.listener_count(), 0);
    }
}
