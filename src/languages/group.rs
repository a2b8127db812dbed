// src/languages/group.rs
// =============================================================================
// This module buckets repositories under their primary language.
//
// The grouping is an insertion-ordered map: a language appears in the order
// its first repository was resolved, and each bucket keeps its repositories
// in resolution order. The CSV exporter walks the map as-is, so this order
// is exactly the row order of the output file.
//
// One languages query per repository, strictly sequential - no batching,
// no caching, no concurrency.
// =============================================================================

use indexmap::IndexMap;

use super::resolve::{resolve_language, LanguageResolution};
use crate::github::{GitHubClient, Repo};

/// Language name -> repositories filed under it, both insertion-ordered.
pub type LanguageGroups = IndexMap<String, Vec<RepoEntry>>;

// The slice of a repository record that survives into the CSV
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoEntry {
    pub name: String,
    pub description: Option<String>,
}

impl From<&Repo> for RepoEntry {
    fn from(repo: &Repo) -> Self {
        Self {
            name: repo.name.clone(),
            description: repo.description.clone(),
        }
    }
}

// Resolves every repository's language and builds the grouping
//
// Parameters:
//   client: shared GitHub client
//   repositories: the fetched records, in API order
//
// Failed resolutions are not reported here; they land in the "N/A" bucket
// and stay visible in the output like any other group.
pub async fn group_by_language(client: &GitHubClient, repositories: &[Repo]) -> LanguageGroups {
    let mut groups = LanguageGroups::new();

    for repo in repositories {
        let resolution = resolve_language(client, repo).await;
        println!("   {:<40} {}", repo.name, resolution.bucket_name());
        record_resolution(&mut groups, &resolution, repo);
    }

    groups
}

// Files one repository under its resolved bucket, creating it on first use
pub fn record_resolution(groups: &mut LanguageGroups, resolution: &LanguageResolution, repo: &Repo) {
    groups
        .entry(resolution.bucket_name().to_string())
        .or_default()
        .push(RepoEntry::from(repo));
}
