//! Roster Core - the user list behind the roster screen
//!
//! This crate follows hexagonal architecture:
//!
//! - **domain**: Users, snapshots and edit scripts
//! - **ports**: Trait definitions for external collaborators (UserSource, AvatarResolver)
//! - **services**: The user store, the list reconciler and the screen's presentation model
//! - **adapters**: Concrete implementations (seeded demo data, URL avatars)

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod services;

use std::path::Path;

use adapters::{DemoUserSource, UrlAvatarResolver};
use config::Config;
use services::{ListUpdateCallback, StoreActions, UserStore, UsersAdapter};

// Re-export commonly used types at crate root
pub use domain::result::{Error, OperationResult, Result};
pub use domain::{EditOp, EditScript, EditStats, Identified, Snapshot, User, UserId};

/// Main context for roster operations
///
/// Owns the configuration and a handle to the shared store; clones of
/// `store` see the same roster. Everything runs on the caller's thread.
pub struct RosterContext {
    pub config: Config,
    pub store: UserStore,
}

impl RosterContext {
    /// Load config from `roster_dir` and seed a fresh store
    pub fn new(roster_dir: &Path) -> Result<Self> {
        let config = Config::load(roster_dir)?;
        Ok(Self::with_config(config))
    }

    pub fn with_config(config: Config) -> Self {
        let source = DemoUserSource::new(config.seed);
        let store = UserStore::seeded(&source, config.user_count);
        Self { config, store }
    }

    /// Build a list adapter for `view`, using the configured labels
    pub fn adapter<C: ListUpdateCallback>(&self, view: C) -> UsersAdapter<C> {
        UsersAdapter::new(view, Box::new(UrlAvatarResolver))
            .with_unemployed_label(self.config.unemployed_label.clone())
    }

    /// Action pass-through to the store; details go to `on_details`
    pub fn actions(&self, on_details: impl Fn(&User) + 'static) -> StoreActions {
        StoreActions::new(self.store.clone(), on_details)
    }
}
