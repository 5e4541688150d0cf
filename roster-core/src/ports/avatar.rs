//! Avatar port - turning a photo field into something displayable

use serde::Serialize;
use url::Url;

/// What a row should show as the user's picture
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "url", rename_all = "lowercase")]
pub enum Avatar {
    /// Fetch and show the image at this address
    Remote(Url),
    /// Show the default user icon
    Placeholder,
}

impl Avatar {
    pub fn is_placeholder(&self) -> bool {
        matches!(self, Avatar::Placeholder)
    }
}

/// Image retrieval collaborator
///
/// Fetching, caching and decoding happen behind this trait; callers only
/// learn whether to show a remote picture or the placeholder.
pub trait AvatarResolver {
    fn resolve(&self, photo: &str) -> Avatar;
}
