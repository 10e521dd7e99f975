//! Gitea API client library
//!
//! This library provides the small slice of the Gitea REST API that edison
//! consumes: the authenticated user, the server version, repository and
//! organization listings, per-repository language sizes and repository
//! creation.
//!
//! ## Modules
//!
//! - [`api`]: The `GiteaApi` trait the rest of edison programs against
//! - [`client`]: Core reqwest-backed client with authentication and pagination
//! - [`users`]: Authenticated user and server version lookups
//! - [`repositories`]: Repository listing, languages and creation
//! - [`organizations`]: Organization listing
//! - [`types`]: Response and request payloads
//! - [`util`]: Base URL normalization

mod api;
mod client;
mod organizations;
mod repositories;
mod types;
mod users;
mod util;

// Re-export public API
pub use api::GiteaApi;
pub use client::{API_PATH, DEFAULT_USER_AGENT, GiteaClient, PAGE_SIZE};
pub use types::{CreateRepoOption, LanguageBytes, Organization, Repository, ServerVersion, User};
pub use util::normalize_base_url;
