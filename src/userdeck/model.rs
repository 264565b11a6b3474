use serde::{Deserialize, Serialize};

/// A single user record.
///
/// Serialized with the keys `id`, `name`, `email` and `avatarUrl`. Blobs
/// written by older clients used `nome` and `avatar`; those are still
/// accepted on read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    #[serde(alias = "nome")]
    pub name: String,
    pub email: String,
    #[serde(alias = "avatar")]
    pub avatar_url: String,
}

impl User {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        avatar_url: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            avatar_url: avatar_url.into(),
        }
    }

    /// Emails are unique regardless of case.
    pub fn same_email(&self, email: &str) -> bool {
        self.email.to_lowercase() == email.to_lowercase()
    }
}

/// Raw form input as typed by the user, before trimming and validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserInput {
    pub name: String,
    pub email: String,
    pub avatar_url: String,
}

impl UserInput {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        avatar_url: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            avatar_url: avatar_url.into(),
        }
    }

    /// Copy of the input with surrounding whitespace removed from every field.
    pub fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            avatar_url: self.avatar_url.trim().to_string(),
        }
    }

    pub fn into_user(self, id: String) -> User {
        User {
            id,
            name: self.name,
            email: self.email,
            avatar_url: self.avatar_url,
        }
    }
}

impl From<&User> for UserInput {
    fn from(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            avatar_url: user.avatar_url.clone(),
        }
    }
}
