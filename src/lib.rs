//! Arby - edit Flutter ARB translation files stored in a GitLab repository
//!
//! Arby fetches every locale file of an application, merges them into one
//! table keyed by translation key, lets you edit cells, and commits all
//! regenerated files back in a single commit.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (argument parsing, commands, reports)
//! - `config`: `.arbyrc.json` loading and parsing
//! - `core`: Key classification, merging, ordering and ARB serialization
//! - `error`: Library error type
//! - `gitlab`: GitLab repository files and commits API client
//! - `worktable`: The fetched table stored between commands

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod gitlab;
pub mod worktable;
