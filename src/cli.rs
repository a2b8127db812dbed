// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// Credentials come in as arguments (never baked into the source): the
// username is positional, the token is a flag with a GITHUB_TOKEN
// environment fallback.
//
// The choice between starred and owned repositories is NOT a flag - the
// tool asks interactively, accepts exactly "1" or "2", and anything else
// ends the run before a single request is made.
// =============================================================================

use anyhow::Result;
use clap::Parser;
use std::io::{self, Write};

use crate::github::GITHUB_API;

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug)]
#[command(
    name = "repo-lingo",
    version = "0.1.0",
    about = "A CLI tool to group a GitHub user's repositories by primary language",
    long_about = "repo-lingo fetches a GitHub user's own or starred repositories, looks up each \
                  one's primary language, and exports the grouping to a CSV file in the current \
                  directory."
)]
pub struct Cli {
    /// GitHub username whose repositories will be fetched
    ///
    /// This is a positional argument (required, no flag needed)
    pub user: String,

    /// GitHub personal access token
    ///
    /// Optional flag: --token <TOKEN>
    /// Falls back to the GITHUB_TOKEN environment variable when omitted;
    /// with neither, requests run unauthenticated at GitHub's low
    /// anonymous rate limit
    #[arg(long)]
    pub token: Option<String>,
}

// Which repository listing the run works on
//
// Selected interactively; each mode fixes both the API endpoint and the
// output filename.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Repositories the user has starred
    Starred,
    /// Repositories the user owns
    Owned,
}

impl Mode {
    // Maps the prompt answer to a mode
    //
    // Only the line terminator that read_line leaves behind is stripped;
    // a padded answer like " 1 " is not a valid choice.
    pub fn from_choice(choice: &str) -> Option<Mode> {
        match choice.trim_end_matches(['\r', '\n']) {
            "1" => Some(Mode::Starred),
            "2" => Some(Mode::Owned),
            _ => None,
        }
    }

    // The listing endpoint this mode pages through
    pub fn listing_url(&self, user: &str) -> String {
        match self {
            Mode::Starred => format!("{}/users/{}/starred", GITHUB_API, user),
            Mode::Owned => format!("{}/users/{}/repos", GITHUB_API, user),
        }
    }

    // Where the CSV ends up, relative to the current working directory
    pub fn output_filename(&self) -> &'static str {
        match self {
            Mode::Starred => "starred_repositories.csv",
            Mode::Owned => "repositories.csv",
        }
    }

    // Human wording for progress messages
    pub fn describe(&self) -> &'static str {
        match self {
            Mode::Starred => "starred repositories",
            Mode::Owned => "owned repositories",
        }
    }
}

// Asks the user which listing to export
//
// Returns:
//   Ok(Some(mode)) = a valid choice was entered
//   Ok(None)       = the input was not "1" or "2" (including EOF)
//   Err            = reading stdin itself failed
pub fn prompt_mode() -> Result<Option<Mode>> {
    print!("Enter '1' for starred repositories or '2' for regular repositories: ");
    io::stdout().flush()?;

    let mut choice = String::new();
    io::stdin().read_line(&mut choice)?;

    Ok(Mode::from_choice(&choice))
}
