//! Service layer - roster logic orchestration
//!
//! Services coordinate the domain and the ports: the store owns the roster,
//! the reconciler diffs snapshots, and the adapter turns both into what a
//! list screen needs.

pub mod actions;
pub mod adapter;
pub mod reconciler;
mod store;

pub use actions::{Command, StoreActions, UserAction, UserActionListener};
pub use adapter::{MenuAction, MenuItem, UserRow, UsersAdapter, DEFAULT_UNEMPLOYED_LABEL};
pub use reconciler::{diff, dispatch_updates_to, ListUpdateCallback};
pub use store::{UserStore, UsersListener};
