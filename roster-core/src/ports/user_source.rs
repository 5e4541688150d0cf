//! User source port - where the initial roster comes from

use crate::domain::User;

/// Producer of the initial roster
///
/// Implementations must hand out unique ids.
pub trait UserSource {
    /// Generate `count` users in display order
    fn generate(&self, count: usize) -> Vec<User>;
}
