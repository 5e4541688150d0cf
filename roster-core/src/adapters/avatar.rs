//! URL-based avatar resolver

use tracing::debug;
use url::Url;

use crate::ports::{Avatar, AvatarResolver};

/// Resolves photo fields by parsing them as http(s) URLs
///
/// Anything else (empty, blank, malformed, other schemes) falls back to the
/// placeholder, the same way a failed download would.
#[derive(Debug, Clone, Copy, Default)]
pub struct UrlAvatarResolver;

impl AvatarResolver for UrlAvatarResolver {
    fn resolve(&self, photo: &str) -> Avatar {
        let photo = photo.trim();
        if photo.is_empty() {
            return Avatar::Placeholder;
        }

        match Url::parse(photo) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => Avatar::Remote(url),
            Ok(url) => {
                debug!(scheme = url.scheme(), "unsupported photo scheme, using placeholder");
                Avatar::Placeholder
            }
            Err(e) => {
                debug!(error = %e, "invalid photo url, using placeholder");
                Avatar::Placeholder
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_placeholder() {
        assert_eq!(UrlAvatarResolver.resolve(""), Avatar::Placeholder);
        assert_eq!(UrlAvatarResolver.resolve("   "), Avatar::Placeholder);
    }

    #[test]
    fn test_https_is_remote() {
        let avatar = UrlAvatarResolver.resolve("https://images.example.com/a.jpg?w=800");
        match avatar {
            Avatar::Remote(url) => assert_eq!(url.host_str(), Some("images.example.com")),
            Avatar::Placeholder => panic!("expected remote avatar"),
        }
    }

    #[test]
    fn test_malformed_and_foreign_schemes_fall_back() {
        assert!(UrlAvatarResolver.resolve("not a url").is_placeholder());
        assert!(UrlAvatarResolver.resolve("file:///etc/passwd").is_placeholder());
    }
}
