pub mod error;
pub mod models;
pub mod naming;
pub mod provider_key;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use models::account_reference::AccountReference;
pub use models::canonical_user::CanonicalUser;
pub use models::driver::Driver;
pub use models::git_signature::GitSignature;
pub use models::scm_user::ScmUser;
pub use models::user_profile::UserProfile;
pub use naming::to_valid_name;
pub use provider_key::git_provider_key;
