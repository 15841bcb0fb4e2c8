//! GitLab REST API (v4) backend for locale files.
//!
//! - `client`: [`GitLabClient`], the [`FileStore`](crate::core::FileStore) over HTTP
//! - `types`: request and response bodies

mod client;
mod types;

pub use client::GitLabClient;
pub use types::{CommitAction, CommitRequest, CommitResponse, ErrorResponse, FileResponse};
