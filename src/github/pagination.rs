// src/github/pagination.rs
// =============================================================================
// This module walks GitHub's paginated list endpoints.
//
// How GitHub pagination works:
// - Each listing response carries a `Link` header (RFC 5988 style) with
//   comma-separated entries like `<url>; rel="next", <url>; rel="prev"`
// - The entry tagged rel="next" points at the next page, fully parameterized
// - The last page simply has no rel="next" entry
//
// Strategy:
// - The first request goes to the caller's base URL with page/per_page
//   query parameters; every later request follows the rel="next" URL verbatim
// - RepoPages produces one page per call, on demand, so the consumer decides
//   how far to drain; into_stream() exposes the same thing as a Stream
//
// Rust concepts:
// - Lifetimes: RepoPages borrows the client for as long as it lives
// - Option<T>: the pagination cursor, spent with take()
// - Streams: the async equivalent of an iterator
// - thiserror: derive macro that writes the error boilerplate
// =============================================================================

use futures::stream::{self, Stream};
use reqwest::{header, StatusCode};
use thiserror::Error;
use url::Url;

use super::client::GitHubClient;
use super::fetch::Repo;

// GitHub caps per_page at 100; fewer pages means fewer round trips
const PER_PAGE: u32 = 100;

// How a page fetch can fail
//
// Status and Transport are handled differently by the drain loop: an HTTP
// error status ends pagination with partial results, while a transport
// failure (DNS, timeout, reset) aborts the run.
#[derive(Debug, Error)]
pub enum FetchError {
    /// GitHub answered, but not with a 2xx
    #[error("GitHub returned HTTP {status}")]
    Status {
        status: StatusCode,
        /// Human-readable detail from GitHub's error body, when present
        message: Option<String>,
    },
    /// The request never produced a usable response
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

// Where the next request goes
enum PageRequest {
    // The caller's base URL; page/per_page parameters still need attaching
    Start(String),
    // A rel="next" URL from a Link header; already fully parameterized
    Follow(Url),
}

// Lazy producer of repository pages
//
// Holds the continuation state between calls; next_page() performs exactly
// one HTTP request and advances (or clears) the cursor.
pub struct RepoPages<'a> {
    client: &'a GitHubClient,
    next: Option<PageRequest>,
}

impl<'a> RepoPages<'a> {
    pub fn new(client: &'a GitHubClient, start_url: &str) -> Self {
        Self {
            client,
            next: Some(PageRequest::Start(start_url.to_string())),
        }
    }

    // Fetches the next page of repositories
    //
    // Returns:
    //   Ok(Some(repos)) = a page was fetched, possibly empty
    //   Ok(None)        = pagination is exhausted
    //   Err(..)         = the page could not be fetched; the cursor is spent,
    //                     so a later call returns Ok(None)
    pub async fn next_page(&mut self) -> Result<Option<Vec<Repo>>, FetchError> {
        let Some(request) = self.next.take() else {
            return Ok(None);
        };

        let builder = match &request {
            PageRequest::Start(url) => self
                .client
                .get(url)
                .query(&[("page", 1), ("per_page", PER_PAGE)]),
            PageRequest::Follow(url) => self.client.get(url.as_str()),
        };

        let response = builder.send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = api_error_message(response).await;
            return Err(FetchError::Status { status, message });
        }

        // Read the continuation URL before the body consumes the response
        let next = response
            .headers()
            .get(header::LINK)
            .and_then(|value| value.to_str().ok())
            .and_then(parse_next_link)
            .map(PageRequest::Follow);

        let repos = response.json::<Vec<Repo>>().await?;

        // Re-arm the cursor only once the page fully decoded; every Err
        // path above leaves it spent
        self.next = next;
        Ok(Some(repos))
    }

    // Exposes the page sequence as a Stream
    //
    // The stream ends after the last page, or after the first error.
    pub fn into_stream(self) -> impl Stream<Item = Result<Vec<Repo>, FetchError>> + 'a {
        stream::try_unfold(self, |mut pages| async move {
            let batch = pages.next_page().await?;
            Ok(batch.map(|repos| (repos, pages)))
        })
    }
}

// Extracts the rel="next" URL from a Link header value
//
// Example input:
//   <https://api.github.com/user/repos?page=2>; rel="next", <...>; rel="last"
//
// Returns None when no entry is tagged rel="next" or the tagged entry does
// not contain a parseable URL between '<' and '>'.
pub fn parse_next_link(link_header: &str) -> Option<Url> {
    let entry = link_header
        .split(',')
        .map(str::trim)
        .find(|entry| entry.contains(r#"rel="next""#))?;

    let start = entry.find('<')?;
    let end = entry.find('>')?;
    if start >= end {
        return None;
    }

    Url::parse(&entry[start + 1..end]).ok()
}

// Pulls the human-readable message out of a GitHub error body
//
// Error responses look like {"message": "API rate limit exceeded", ...};
// anything that doesn't is quietly ignored.
async fn api_error_message(response: reqwest::Response) -> Option<String> {
    let body: serde_json::Value = response.json().await.ok()?;
    Some(body.get("message")?.as_str()?.to_string())
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What is the Link header?
//    - GitHub's way of saying "there is more where that came from"
//    - One header value holds several <url>; rel="..." entries
//    - rel="next" points at the next page; the last page has no rel="next"
//
// 2. Why a lazy producer instead of a plain loop?
//    - next_page() does one request per call, nothing more
//    - The caller decides how far to drain (every page, or stop early)
//    - into_stream() wraps the same producer in the standard Stream shape
//
// 3. What is try_unfold?
//    - Builds a Stream from a seed value and an async step function
//    - Our seed is the RepoPages producer itself
//    - Returning Ok(None) from the step ends the stream cleanly
//
// 4. Why does FetchError have two variants?
//    - Status = GitHub answered, but with an error code
//    - Transport = the network itself failed (DNS, timeout, reset)
//    - The drain loop treats them differently, so they must stay distinct
//
// 5. Why take() the cursor at the top?
//    - Option::take moves the value out and leaves None behind
//    - A spent cursor makes every later call return Ok(None)
//    - The cursor is only re-armed after a page fully decodes
// -----------------------------------------------------------------------------
