use crate::CoreError;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Git hosting platform flavour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Driver {
    #[default]
    Github,
    Gitlab,
    Gitea,
    Gogs,
}

impl Driver {
    pub fn as_str(&self) -> &'static str {
        match self {
            Driver::Github => "github",
            Driver::Gitlab => "gitlab",
            Driver::Gitea => "gitea",
            Driver::Gogs => "gogs",
        }
    }
}

impl fmt::Display for Driver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Driver {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "github" => Ok(Driver::Github),
            "gitlab" => Ok(Driver::Gitlab),
            "gitea" => Ok(Driver::Gitea),
            "gogs" => Ok(Driver::Gogs),
            _ => Err(CoreError::invalid_driver(s)),
        }
    }
}
