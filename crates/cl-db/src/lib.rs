pub mod error;
pub mod memory_user_cache;
pub mod sqlite_user_cache;
pub mod user_cache;

#[cfg(test)]
mod tests;

pub use error::{DbError, Result};
pub use memory_user_cache::MemoryUserCache;
pub use sqlite_user_cache::SqliteUserCache;
pub use user_cache::UserCache;
