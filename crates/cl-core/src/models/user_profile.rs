use crate::AccountReference;

use serde::{Deserialize, Serialize};

/// Richer user record kept by the surrounding pipeline, with the accounts
/// the person holds on each git provider.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub url: String,
    pub avatar_url: String,
    #[serde(default)]
    pub accounts: Vec<AccountReference>,
}

impl UserProfile {
    /// Id of the first account registered under `provider`, if any.
    pub fn account_id(&self, provider: &str) -> Option<&str> {
        self.accounts
            .iter()
            .find(|a| a.provider == provider)
            .map(|a| a.id.as_str())
    }
}
