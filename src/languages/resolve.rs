// src/languages/resolve.rs
// =============================================================================
// This module resolves a repository's primary language.
//
// GitHub's per-repository languages endpoint returns a JSON object mapping
// language names to bytes of code, ordered largest-first:
//
//   {"Rust": 102400, "Shell": 1337}
//
// The first key is the primary language. The byte counts are parsed and
// deliberately ignored: the ranking already lives in the key order, and
// picking by maximum value would change behavior for ties.
//
// A failed lookup never fails the run - it degrades to a tagged Failed
// result that ends up in the "N/A" bucket like an empty one does.
// =============================================================================

use indexmap::IndexMap;

use crate::github::{GitHubClient, Repo};

/// Sentinel bucket for repositories without a usable primary language.
pub const NO_LANGUAGE: &str = "N/A";

// Outcome of one languages-endpoint query
//
// Empty and Failed both render as "N/A" in the CSV, but stay distinguishable
// here so callers and tests can tell "confirmed no language" from "the
// lookup broke".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LanguageResolution {
    /// The endpoint answered with at least one language; this is the first
    Resolved(String),
    /// The endpoint answered with an empty object
    Empty,
    /// The endpoint answered with an error status, or not at all
    Failed(String),
}

impl LanguageResolution {
    // The grouping key this resolution files under
    pub fn bucket_name(&self) -> &str {
        match self {
            LanguageResolution::Resolved(language) => language,
            LanguageResolution::Empty | LanguageResolution::Failed(_) => NO_LANGUAGE,
        }
    }
}

// Queries the languages endpoint of a single repository
//
// Parameters:
//   client: shared GitHub client
//   repo: the repository whose languages_url gets queried
//
// Never returns an error: every failure mode collapses into
// LanguageResolution::Failed with a short reason.
pub async fn resolve_language(client: &GitHubClient, repo: &Repo) -> LanguageResolution {
    let response = match client.get(&repo.languages_url).send().await {
        Ok(response) => response,
        Err(error) => return LanguageResolution::Failed(format!("request failed: {}", error)),
    };

    if !response.status().is_success() {
        return LanguageResolution::Failed(format!("HTTP {}", response.status().as_u16()));
    }

    // IndexMap keeps the document's key order, so "first key" means the
    // first key GitHub sent, not the alphabetically or hash-wise first
    let languages: IndexMap<String, u64> = match response.json().await {
        Ok(languages) => languages,
        Err(error) => return LanguageResolution::Failed(format!("invalid body: {}", error)),
    };

    // Grouping keys must be non-empty; an empty name degrades to Empty
    match languages.keys().next().filter(|name| !name.is_empty()) {
        Some(language) => LanguageResolution::Resolved(language.clone()),
        None => LanguageResolution::Empty,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn repo_with_languages_url(languages_url: &str) -> Repo {
        Repo {
            name: "fixture".to_string(),
            description: None,
            languages_url: languages_url.to_string(),
        }
    }

    #[tokio::test]
    async fn test_first_key_wins_even_when_not_alphabetical() {
        let server = MockServer::start().await;

        // Raw body so the key order on the wire is exactly what we wrote:
        // alphabetical order would pick CSS, byte-count order TypeScript too,
        // a hash map could pick anything
        Mock::given(method("GET"))
            .and(path("/repos/octocat/web/languages"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(
                r#"{"TypeScript":90500,"CSS":128000,"HTML":4500}"#,
                "application/json",
            ))
            .mount(&server)
            .await;

        let client = GitHubClient::new(None).unwrap();
        let repo =
            repo_with_languages_url(&format!("{}/repos/octocat/web/languages", server.uri()));

        let resolution = resolve_language(&client, &repo).await;
        assert_eq!(
            resolution,
            LanguageResolution::Resolved("TypeScript".to_string())
        );
    }

    #[tokio::test]
    async fn test_empty_object_resolves_to_empty() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/repos/octocat/blank/languages"))
            .respond_with(ResponseTemplate::new(200).set_body_raw("{}", "application/json"))
            .mount(&server)
            .await;

        let client = GitHubClient::new(None).unwrap();
        let repo =
            repo_with_languages_url(&format!("{}/repos/octocat/blank/languages", server.uri()));

        assert_eq!(
            resolve_language(&client, &repo).await,
            LanguageResolution::Empty
        );
    }

    #[tokio::test]
    async fn test_error_status_resolves_to_failed() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/repos/octocat/gone/languages"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client = GitHubClient::new(None).unwrap();
        let repo =
            repo_with_languages_url(&format!("{}/repos/octocat/gone/languages", server.uri()));

        let resolution = resolve_language(&client, &repo).await;
        assert_eq!(
            resolution,
            LanguageResolution::Failed("HTTP 404".to_string())
        );
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_resolves_to_failed() {
        // Port 1 is essentially never listening; the connection is refused
        let client = GitHubClient::new(None).unwrap();
        let repo = repo_with_languages_url("http://127.0.0.1:1/languages");

        match resolve_language(&client, &repo).await {
            LanguageResolution::Failed(reason) => {
                assert!(reason.starts_with("request failed"));
            }
            other => panic!("expected Failed, got {:?}", other),
        }
    }

    #[test]
    fn test_bucket_names() {
        let resolved = LanguageResolution::Resolved("Rust".to_string());
        assert_eq!(resolved.bucket_name(), "Rust");
        assert_eq!(LanguageResolution::Empty.bucket_name(), NO_LANGUAGE);
        assert_eq!(
            LanguageResolution::Failed("HTTP 500".to_string()).bucket_name(),
            NO_LANGUAGE
        );
    }
}
