//! Core domain entities
//!
//! Pure data structures with no I/O: the user record, immutable snapshots of
//! the roster, and the edit scripts that describe how one snapshot turns into
//! the next.

pub mod edit;
pub mod result;
mod user;

use std::rc::Rc;

pub use edit::{EditOp, EditScript, EditStats, Identified};
pub use user::{User, UserId};

/// Immutable ordered view of the roster at one instant
pub type Snapshot = Rc<[User]>;
