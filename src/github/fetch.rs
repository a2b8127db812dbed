// src/github/fetch.rs
// =============================================================================
// This module fetches the full repository list for a user.
//
// Strategy:
// - Drive the RepoPages producer (see pagination.rs) page by page
// - Accumulate every returned repository in API order
// - On an HTTP error status, stop and keep the partial list: a half-fetched
//   run still produces a useful CSV
// - On a transport failure, give up and let the entry point report it
// =============================================================================

use futures::{pin_mut, stream::StreamExt};
use serde::Deserialize;

use super::client::GitHubClient;
use super::pagination::{FetchError, RepoPages};

// A repository as returned by the GitHub list endpoints
//
// GitHub sends back far more fields than this; serde ignores the ones we
// never look at.
#[derive(Debug, Clone, Deserialize)]
pub struct Repo {
    /// Repository name, e.g. "repo-lingo"
    pub name: String,
    /// Free-text description; GitHub's null becomes None
    pub description: Option<String>,
    /// Per-repository endpoint listing the languages used
    pub languages_url: String,
}

// Fetches every repository reachable from the starting endpoint URL
//
// Parameters:
//   client: shared GitHub client with auth headers
//   start_url: listing endpoint, e.g. "https://api.github.com/users/x/repos"
//
// Returns: all repositories in the order the API produced them. An HTTP
// error status ends the walk early with whatever was accumulated (the
// diagnostic is printed here); only transport failures surface as Err.
pub async fn fetch_all(client: &GitHubClient, start_url: &str) -> Result<Vec<Repo>, FetchError> {
    let mut repositories = Vec::new();

    let pages = RepoPages::new(client, start_url).into_stream();
    pin_mut!(pages);

    let mut page_number = 1u32;
    while let Some(batch) = pages.next().await {
        match batch {
            Ok(batch) => {
                println!("   Page {}: {} repositories", page_number, batch.len());
                repositories.extend(batch);
                page_number += 1;
            }
            Err(FetchError::Status { status, message }) => {
                let detail = message.map(|m| format!(" ({})", m)).unwrap_or_default();
                eprintln!(
                    "⚠️  GitHub returned HTTP {}{} - keeping the {} repositories fetched so far",
                    status.as_u16(),
                    detail,
                    repositories.len()
                );
                break;
            }
            Err(error) => return Err(error),
        }
    }

    Ok(repositories)
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What does pin_mut! do?
//    - A Stream must be pinned (fixed in memory) before it can be polled
//    - pin_mut! pins it right there on the stack, no heap allocation
//    - After that, .next().await works like on any iterator
//
// 2. Why keep partial results on an HTTP error?
//    - A rate-limited page 7 should not throw away pages 1 through 6
//    - The diagnostic is printed here, where the status is known
//    - Transport errors are different: those abort the whole run
//
// 3. Why is description an Option<String>?
//    - GitHub sends null for repositories without a description
//    - serde maps JSON null to None automatically
//    - The CSV exporter later renders None as an empty field
//
// 4. What does #[derive(Deserialize)] buy us?
//    - serde generates the JSON-to-struct conversion code
//    - Response fields we never declared are simply ignored
//    - No hand-written JSON parsing anywhere in this crate
// -----------------------------------------------------------------------------
