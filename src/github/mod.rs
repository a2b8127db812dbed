// src/github/mod.rs
// =============================================================================
// This module handles all traffic to the GitHub REST API.
//
// Submodules:
// - client: shared reqwest client with GitHub auth and media-type headers
// - pagination: Link-header parsing and the lazy page producer
// - fetch: the repository record and the fetch-everything drain loop
//
// This file (mod.rs) is the module root - it re-exports the public API that
// the rest of the application uses.
// =============================================================================

mod client;
mod fetch;
mod pagination;

// Re-export what the rest of the application consumes; pagination stays
// internal behind fetch_all
pub use client::{GitHubClient, GITHUB_API};
pub use fetch::{fetch_all, Repo};
