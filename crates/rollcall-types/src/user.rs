use serde::{Deserialize, Serialize};

// NOTE: Record shape
//
// The layout mirrors the randomuser.me payload so a page body deserializes
// straight into `User`. Only these four groups are read; every other field
// of the remote object (dob, email, phone, ...) is dropped by serde.

/// A single user record returned by the data source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub login: Login,
    pub name: Name,
    pub location: Location,
    pub picture: Picture,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Login {
    pub uuid: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Name {
    pub first: String,
    pub last: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub country: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Picture {
    pub thumbnail: String,
}

impl User {
    pub fn new(
        id: impl Into<String>,
        first: impl Into<String>,
        last: impl Into<String>,
        country: impl Into<String>,
        thumbnail: impl Into<String>,
    ) -> Self {
        Self {
            login: Login { uuid: id.into() },
            name: Name {
                first: first.into(),
                last: last.into(),
            },
            location: Location {
                country: country.into(),
            },
            picture: Picture {
                thumbnail: thumbnail.into(),
            },
        }
    }

    pub fn id(&self) -> &str {
        &self.login.uuid
    }

    pub fn first_name(&self) -> &str {
        &self.name.first
    }

    pub fn last_name(&self) -> &str {
        &self.name.last
    }

    pub fn country(&self) -> &str {
        &self.location.country
    }

    pub fn thumbnail(&self) -> &str {
        &self.picture.thumbnail
    }

    /// "First Last", used as alt text for the thumbnail.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.name.first, self.name.last)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_ignores_unread_fields() {
        let raw = r#"{
            "gender": "female",
            "name": { "title": "Ms", "first": "Ana", "last": "Ortiz" },
            "location": { "city": "Vigo", "country": "Spain" },
            "email": "ana.ortiz@example.com",
            "login": { "uuid": "5f1c", "username": "ana" },
            "picture": { "large": "l.jpg", "thumbnail": "t.jpg" }
        }"#;

        let user: User = serde_json::from_str(raw).unwrap();
        assert_eq!(user.id(), "5f1c");
        assert_eq!(user.first_name(), "Ana");
        assert_eq!(user.last_name(), "Ortiz");
        assert_eq!(user.country(), "Spain");
        assert_eq!(user.thumbnail(), "t.jpg");
    }

    #[test]
    fn test_missing_required_field_is_rejected() {
        let raw = r#"{
            "name": { "first": "Ana", "last": "Ortiz" },
            "location": { "country": "Spain" },
            "picture": { "thumbnail": "t.jpg" }
        }"#;

        assert!(serde_json::from_str::<User>(raw).is_err());
    }

    #[test]
    fn test_display_name() {
        let user = User::new("1", "Ana", "Ortiz", "Spain", "t.jpg");
        assert_eq!(user.display_name(), "Ana Ortiz");
    }
}
