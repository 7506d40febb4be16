use reqwest::StatusCode;
use reqwest::header::HeaderMap;

const GITHUB_RATE_LIMIT_REMAINING: &str = "x-ratelimit-remaining";
const GITLAB_RATE_LIMIT_REMAINING: &str = "ratelimit-remaining";

/// Metadata of the raw platform response that produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScmResponse {
    pub status: u16,
    pub rate_limit_remaining: Option<u32>,
}

impl ScmResponse {
    pub fn new(status: u16) -> Self {
        Self {
            status,
            rate_limit_remaining: None,
        }
    }

    pub(crate) fn from_parts(status: StatusCode, headers: &HeaderMap) -> Self {
        let rate_limit_remaining = [GITHUB_RATE_LIMIT_REMAINING, GITLAB_RATE_LIMIT_REMAINING]
            .iter()
            .find_map(|name| headers.get(*name))
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse().ok());

        Self {
            status: status.as_u16(),
            rate_limit_remaining,
        }
    }
}
