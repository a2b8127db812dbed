// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Ask interactively whether to export starred or owned repositories
// 3. Fetch the full repository list, following pagination
// 4. Resolve each repository's primary language and group by it
// 5. Write the grouping to a CSV file and exit with a proper code
//    (0 = success, 1 = invalid mode, 2 = error)
//
// The pipeline is strictly sequential, so the current-thread tokio runtime
// is all the concurrency this tool ever needs.
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli;        // src/cli.rs - command-line parsing and the mode prompt
mod export;     // src/export/ - CSV rendering and writing
mod github;     // src/github/ - GitHub API client, pagination, fetching
mod languages;  // src/languages/ - language resolution and grouping

// Import items we need from our modules
use cli::Cli;
use clap::Parser; // Parser trait enables the parse() method
use github::GitHubClient;
use std::path::Path;

// anyhow::Result lets run() bubble any error type up with the ? operator
use anyhow::Result;

// The #[tokio::main] attribute transforms our async main into a real main
// function; current_thread keeps everything on one thread
#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Run our application logic and capture the exit code
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // If an unexpected error occurred, print it and exit with code 2
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// This is the main application logic
// Returns:
//   Ok(0) = CSV written
//   Ok(1) = invalid mode selection
//   Err = unexpected error (network down, file not writable, ...)
async fn run() -> Result<i32> {
    // Parse command-line arguments into our Cli struct
    // This will automatically handle --help, --version, etc.
    let cli = Cli::parse();

    // The mode decides endpoint and filename; nothing touches the network
    // before a valid choice is in
    let Some(mode) = cli::prompt_mode()? else {
        eprintln!("Invalid mode. Exiting.");
        return Ok(1);
    };

    // The --token flag wins over the environment
    let token = cli.token.or_else(|| std::env::var("GITHUB_TOKEN").ok());
    if token.is_none() {
        println!("⚠️  No access token provided - unauthenticated requests are heavily rate-limited");
    }
    let client = GitHubClient::new(token)?;

    println!("🔍 Fetching {} for user: {}", mode.describe(), cli.user);
    let repositories = github::fetch_all(&client, &mode.listing_url(&cli.user)).await?;
    println!("📄 Fetched {} repositories", repositories.len());

    // One languages call per repository, so this is the slow part
    println!("\n🌐 Resolving primary languages ({} queries)...\n", repositories.len());
    let groups = languages::group_by_language(&client, &repositories).await;

    println!("\n📊 {} language(s) across {} repositories\n", groups.len(), repositories.len());

    // Written to the current working directory, overwriting a previous run
    export::write_csv(&groups, Path::new(mode.output_filename()))?;

    Ok(0)
}
