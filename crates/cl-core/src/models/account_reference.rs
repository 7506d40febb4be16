use serde::{Deserialize, Serialize};

/// An account on some external provider linked to a user profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountReference {
    pub provider: String,
    pub id: String,
}

impl AccountReference {
    pub fn new(provider: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            id: id.into(),
        }
    }
}
