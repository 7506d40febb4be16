use crate::{CliError, CliResult, Commands};

use cl_config::Config;
use cl_core::{CanonicalUser, GitSignature, ScmUser};
use cl_db::{SqliteUserCache, UserCache};
use cl_scm::ScmClient;
use cl_users::{GitUserResolver, ResolveResult};

use std::sync::Arc;

use log::{info, warn};
use serde_json::Value;

/// Wire a resolver to the configured hosting platform and the on-disk
/// user cache.
///
/// The cache is returned too so `show` can read records directly.
pub async fn build_resolver(config: &Config) -> CliResult<(GitUserResolver, Arc<SqliteUserCache>)> {
    let client = ScmClient::new(
        config.scm.driver,
        &config.scm.server_url,
        config.scm.token(),
        config.scm.timeout(),
    )?;

    let cache_path = config.cache_path();
    info!("Opening user cache: {}", cache_path.display());
    let cache = Arc::new(SqliteUserCache::open(&cache_path).await?);

    let resolver = GitUserResolver::new(Arc::new(client), cache.clone());
    Ok((resolver, cache))
}

/// Run one command and return its JSON output. Unresolved users are `null`.
pub async fn execute(
    command: Commands,
    resolver: &GitUserResolver,
    cache: &dyn UserCache,
) -> CliResult<Value> {
    match command {
        Commands::Login { login, name } => {
            // resolution is keyed on the name, so fall back to the login
            let name = name.unwrap_or_else(|| login.clone());
            user_output(resolver.resolve(&ScmUser::with_login(login, name)).await)
        }
        Commands::Signature { name, email } => {
            let signature = GitSignature::new(name.unwrap_or_default(), email.unwrap_or_default());
            user_output(resolver.resolve_signature(&signature).await)
        }
        Commands::Show { key } => Ok(serde_json::to_value(cache.get_user(&key).await)?),
        Commands::ProviderKey => Ok(Value::String(resolver.git_provider_key())),
    }
}

fn user_output(result: ResolveResult<Option<CanonicalUser>>) -> CliResult<Value> {
    match result {
        Ok(user) => Ok(serde_json::to_value(user)?),
        Err(e) if e.partial_user().is_some() => {
            warn!("{e}; printing the uncached record");
            Ok(serde_json::to_value(e.into_partial_user())?)
        }
        Err(e) => Err(CliError::from(e)),
    }
}
