//! Adapter implementations
//!
//! Adapters implement the port traits with concrete technologies:
//! - Seeded mock data for the UserSource port
//! - URL parsing for the AvatarResolver port

pub mod avatar;
pub mod demo;

pub use avatar::UrlAvatarResolver;
pub use demo::DemoUserSource;
