// src/github/client.rs
// =============================================================================
// This module wraps reqwest with the conventions the GitHub REST API expects.
//
// Every request to api.github.com carries:
// - A User-Agent header (GitHub rejects agent-less requests outright)
// - An Accept header asking for the stable JSON media type
// - An Authorization header when an access token is available
//
// The client is built once and shared for the whole run; reqwest pools
// connections internally, so repeated calls to the same host are cheap.
// =============================================================================

use anyhow::Result;
use reqwest::header;
use std::time::Duration;

/// Base URL of the GitHub REST API.
pub const GITHUB_API: &str = "https://api.github.com";

// Identifies this tool in the User-Agent header, e.g. "repo-lingo/0.1.0"
const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

// A reqwest client plus the access token to authenticate with
//
// The token is optional: public data is reachable without one, just under
// GitHub's much lower anonymous rate limit.
pub struct GitHubClient {
    http: reqwest::Client,
    token: Option<String>,
}

impl GitHubClient {
    // Creates the shared client
    //
    // Parameters:
    //   token: personal access token, or None for unauthenticated requests
    pub fn new(token: Option<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(APP_USER_AGENT)
            // Listing pages carry up to 100 full repository objects
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self { http, token })
    }

    // Starts a GET request with the GitHub headers already attached
    //
    // Callers add query parameters and send it themselves.
    pub fn get(&self, url: &str) -> reqwest::RequestBuilder {
        let mut request = self
            .http
            .get(url)
            .header(header::ACCEPT, "application/vnd.github+json");

        if let Some(token) = &self.token {
            // GitHub's classic token scheme, not "Bearer"
            request = request.header(header::AUTHORIZATION, format!("token {}", token));
        }

        request
    }
}
