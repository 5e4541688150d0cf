//! Port definitions (hexagonal architecture)
//!
//! Ports define the interfaces for external collaborators. The store and the
//! presentation model depend only on these traits, not on concrete
//! implementations.

mod avatar;
mod user_source;

pub use avatar::{Avatar, AvatarResolver};
pub use user_source::UserSource;
