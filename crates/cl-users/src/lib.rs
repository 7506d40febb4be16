//! Resolution of commit signatures and platform users into canonical,
//! cached contributor records.

pub mod conversions;
pub mod error;
pub mod git_user_resolver;
pub mod user_key;

#[cfg(test)]
mod tests;

pub use conversions::{git_user_to_user, user_to_git_user};
pub use error::{ResolveError, Result as ResolveResult};
pub use git_user_resolver::GitUserResolver;
pub use user_key::user_key;
