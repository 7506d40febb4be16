mod canonical_user;
mod driver;
mod user_profile;
