//! Git hosting platform access.
//!
//! Exposes the [`UserDirectory`] capability the resolver consumes and an
//! HTTP implementation of it, [`ScmClient`].

pub(crate) mod client;
pub(crate) mod error;
pub(crate) mod payloads;
pub(crate) mod scm_response;
pub(crate) mod user_directory;


pub use client::ScmClient;
pub use error::{Result as ScmResult, ScmError, is_scm_not_found};
pub use scm_response::ScmResponse;
pub use user_directory::UserDirectory;
