use serde::{Deserialize, Serialize};

/// A user as reported by the git hosting platform.
///
/// Every field may be empty: commit signatures carry no login and many
/// platforms hide the email unless the user made it public.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScmUser {
    #[serde(default)]
    pub login: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub avatar: String,
}

impl ScmUser {
    pub fn with_login(login: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            login: login.into(),
            name: name.into(),
            ..Self::default()
        }
    }
}
