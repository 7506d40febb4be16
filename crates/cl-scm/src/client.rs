use crate::payloads::{GiteaUser, GithubUser, GitlabUser};
use crate::{ScmError, ScmResponse, ScmResult, UserDirectory};

use cl_core::{Driver, ScmUser};

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::header::{ACCEPT, AUTHORIZATION, USER_AGENT};
use reqwest::{Client as ReqwestClient, Method, StatusCode, Url};
use serde::de::DeserializeOwned;

const CLIENT_USER_AGENT: &str = "changelog-users";
const GITLAB_TOKEN_HEADER: &str = "PRIVATE-TOKEN";

/// HTTP client for a git hosting platform's user API
pub struct ScmClient {
    pub base_url: String,
    pub driver: Driver,
    root: Url,
    token: Option<String>,
    client: ReqwestClient,
}

impl ScmClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `driver` - Platform flavour, selects URL layout and payload shape
    /// * `base_url` - API root (e.g., "https://api.github.com") or, for
    ///   GitLab/Gitea/Gogs, the server root
    /// * `token` - Optional access token
    /// * `timeout` - Deadline applied to every request
    pub fn new(
        driver: Driver,
        base_url: &str,
        token: Option<&str>,
        timeout: Duration,
    ) -> ScmResult<Self> {
        let base_url = base_url.trim_end_matches('/');
        let root = Url::parse(base_url).map_err(|e| ScmError::invalid_url(base_url, e))?;
        if root.cannot_be_a_base() {
            return Err(ScmError::invalid_url(base_url, "not a base URL"));
        }

        let client = ReqwestClient::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url: base_url.to_string(),
            driver,
            root,
            token: token.filter(|t| !t.is_empty()).map(String::from),
            client,
        })
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    /// Append percent-encoded path segments to the base URL
    fn endpoint(&self, segments: &[&str]) -> ScmResult<Url> {
        let mut url = self.root.clone();
        url.path_segments_mut()
            .map_err(|_| ScmError::invalid_url(&self.base_url, "not a base URL"))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Build a request with auth and identification headers
    fn request(&self, method: Method, url: Url) -> reqwest::RequestBuilder {
        let mut req = self
            .client
            .request(method, url)
            .header(USER_AGENT, CLIENT_USER_AGENT)
            .header(ACCEPT, "application/json");

        if let Some(ref token) = self.token {
            req = match self.driver {
                Driver::Gitlab => req.header(GITLAB_TOKEN_HEADER, token),
                Driver::Github | Driver::Gitea | Driver::Gogs => {
                    req.header(AUTHORIZATION, format!("token {}", token))
                }
            };
        }

        req
    }

    /// Execute request, mapping 404 to [`ScmError::NotFound`] and other
    /// failures to [`ScmError::Api`]
    async fn execute<T: DeserializeOwned>(
        &self,
        login: &str,
        req: reqwest::RequestBuilder,
    ) -> ScmResult<(T, ScmResponse)> {
        let response = req.send().await?;
        let status = response.status();
        let meta = ScmResponse::from_parts(status, response.headers());
        let body = response.text().await?;

        if status == StatusCode::NOT_FOUND {
            return Err(ScmError::not_found(login));
        }

        if !status.is_success() {
            return Err(ScmError::api_error(status.as_u16(), api_message(&body)));
        }

        let value = serde_json::from_str(&body)?;
        Ok((value, meta))
    }

    async fn find_github(&self, login: &str) -> ScmResult<(Option<ScmUser>, ScmResponse)> {
        let req = self.request(Method::GET, self.endpoint(&["users", login])?);
        let (user, meta) = self.execute::<GithubUser>(login, req).await?;
        Ok((Some(user.into()), meta))
    }

    async fn find_gitlab(&self, login: &str) -> ScmResult<(Option<ScmUser>, ScmResponse)> {
        let req = self
            .request(Method::GET, self.endpoint(&["api", "v4", "users"])?)
            .query(&[("username", login)]);
        let (users, meta) = self.execute::<Vec<GitlabUser>>(login, req).await?;
        Ok((users.into_iter().next().map(ScmUser::from), meta))
    }

    async fn find_gitea(&self, login: &str) -> ScmResult<(Option<ScmUser>, ScmResponse)> {
        let req = self.request(Method::GET, self.endpoint(&["api", "v1", "users", login])?);
        let (user, meta) = self.execute::<GiteaUser>(login, req).await?;
        Ok((Some(user.into_scm_user(&self.base_url)), meta))
    }
}

#[async_trait]
impl UserDirectory for ScmClient {
    fn driver(&self) -> Driver {
        self.driver
    }

    async fn find_login(&self, login: &str) -> ScmResult<(Option<ScmUser>, ScmResponse)> {
        debug!("Looking up {} user {}", self.driver, login);

        match self.driver {
            Driver::Github => self.find_github(login).await,
            Driver::Gitlab => self.find_gitlab(login).await,
            Driver::Gitea | Driver::Gogs => self.find_gitea(login).await,
        }
    }
}

/// Pull the human readable message out of an error body, falling back to
/// the raw text.
fn api_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            v.get("message")
                .and_then(|m| m.as_str())
                .map(String::from)
        })
        .unwrap_or_else(|| body.trim().to_string())
}
