//! User domain model

use serde::{Deserialize, Serialize};

use super::edit::Identified;

/// Stable identity of a user across snapshots
pub type UserId = u64;

/// A user shown in the roster
///
/// Two users are equal when every field matches. Matching across snapshots
/// goes through [`Identified::id`] instead, so a user whose company changed is
/// still "the same user".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    /// Empty (or blank) means unemployed
    #[serde(default)]
    pub company: String,
    /// Photo URL, empty when the user has no photo
    #[serde(default)]
    pub photo: String,
}

impl User {
    pub fn new(
        id: UserId,
        name: impl Into<String>,
        company: impl Into<String>,
        photo: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            company: company.into(),
            photo: photo.into(),
        }
    }

    pub fn is_employed(&self) -> bool {
        !self.company.trim().is_empty()
    }

    /// Copy of this user with the company cleared
    pub fn unemployed(&self) -> Self {
        Self {
            company: String::new(),
            ..self.clone()
        }
    }
}

impl Identified for User {
    type Id = UserId;

    fn id(&self) -> UserId {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_creation() {
        let user = User::new(7, "Ada Lovelace", "Analytical Engines", "");
        assert_eq!(user.id, 7);
        assert_eq!(user.name, "Ada Lovelace");
        assert!(user.is_employed());
        assert!(user.photo.is_empty());
    }

    #[test]
    fn test_unemployed_keeps_other_fields() {
        let user = User::new(3, "Grace", "Navy", "https://example.com/g.jpg");
        let fired = user.unemployed();

        assert_eq!(fired.id, 3);
        assert_eq!(fired.name, "Grace");
        assert_eq!(fired.photo, "https://example.com/g.jpg");
        assert_eq!(fired.company, "");
        assert!(!fired.is_employed());
        assert_ne!(user, fired);
        assert_eq!(user.id(), fired.id());
    }

    #[test]
    fn test_blank_company_is_unemployed() {
        let user = User::new(1, "Bob", "   ", "");
        assert!(!user.is_employed());
    }

    #[test]
    fn test_json_missing_optional_fields() {
        let user: User = serde_json::from_str(r#"{"id": 4, "name": "Linus"}"#).unwrap();
        assert_eq!(user, User::new(4, "Linus", "", ""));
    }
}
