pub mod account_reference;
pub mod canonical_user;
pub mod driver;
pub mod git_signature;
pub mod scm_user;
pub mod user_profile;
