use serde::{Deserialize, Serialize};

/// The deduplicated record a changelog entry's author resolves to.
///
/// `key` is the stable identifier the user cache is indexed by.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalUser {
    pub key: String,
    pub login: String,
    pub name: String,
    pub email: String,
}

impl CanonicalUser {
    pub fn new(
        key: impl Into<String>,
        login: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            login: login.into(),
            name: name.into(),
            email: email.into(),
        }
    }

    /// Fold newer information into this record.
    ///
    /// Non-empty fields of `incoming` replace ours; empty ones never erase
    /// what is already known. The key is left untouched.
    pub fn merge(&mut self, incoming: &CanonicalUser) {
        if !incoming.login.is_empty() {
            self.login = incoming.login.clone();
        }
        if !incoming.name.is_empty() {
            self.name = incoming.name.clone();
        }
        if !incoming.email.is_empty() {
            self.email = incoming.email.clone();
        }
    }
}
