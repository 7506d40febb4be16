use cl_core::ScmUser;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(crate) struct GithubUser {
    pub login: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub html_url: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

impl From<GithubUser> for ScmUser {
    fn from(user: GithubUser) -> Self {
        ScmUser {
            login: user.login,
            name: user.name.unwrap_or_default(),
            email: user.email.unwrap_or_default(),
            link: user.html_url.unwrap_or_default(),
            avatar: user.avatar_url.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct GitlabUser {
    pub username: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub public_email: Option<String>,
    /// Only visible to administrators.
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub web_url: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

impl From<GitlabUser> for ScmUser {
    fn from(user: GitlabUser) -> Self {
        let email = user
            .public_email
            .filter(|e| !e.is_empty())
            .or(user.email)
            .unwrap_or_default();

        ScmUser {
            login: user.username,
            name: user.name.unwrap_or_default(),
            email,
            link: user.web_url.unwrap_or_default(),
            avatar: user.avatar_url.unwrap_or_default(),
        }
    }
}

/// Shared by Gitea and Gogs.
#[derive(Debug, Deserialize)]
pub(crate) struct GiteaUser {
    #[serde(default)]
    pub login: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

impl GiteaUser {
    pub fn into_scm_user(self, base_url: &str) -> ScmUser {
        let login = self
            .login
            .filter(|l| !l.is_empty())
            .or(self.username)
            .unwrap_or_default();
        let link = if login.is_empty() {
            String::new()
        } else {
            format!("{}/{}", base_url, login)
        };

        ScmUser {
            link,
            login,
            name: self.full_name.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            avatar: self.avatar_url.unwrap_or_default(),
        }
    }
}
