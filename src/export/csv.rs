// src/export/csv.rs
// =============================================================================
// This module renders the language grouping as CSV and writes it to disk.
//
// Layout:
//   Language,Repository Name,Description
//   Go,api,REST service
//   N/A,scratch,
//
// Escaping follows RFC 4180: a field containing a comma, quote, or line
// break is wrapped in quotes with inner quotes doubled; everything else is
// written bare. Rows end with CRLF. A missing description is an empty field.
//
// The whole file is rendered in memory and written in one shot - the tool
// is a one-shot batch job, not a streaming producer.
// =============================================================================

use anyhow::{Context, Result};
use std::borrow::Cow;
use std::fs;
use std::path::Path;

use crate::languages::{LanguageGroups, RepoEntry};

/// First line of every output file.
pub const CSV_HEADER: &str = "Language,Repository Name,Description";

// Renders the grouping as CSV text
//
// Row order is (language insertion order) x (bucket insertion order), i.e.
// exactly the order the grouper built. An empty grouping still renders the
// header line.
pub fn render_csv(groups: &LanguageGroups) -> String {
    let mut output = String::from(CSV_HEADER);
    output.push_str("\r\n");

    for (language, entries) in groups {
        for entry in entries {
            output.push_str(&render_row(language, entry));
        }
    }

    output
}

// Renders one data row, CRLF-terminated
fn render_row(language: &str, entry: &RepoEntry) -> String {
    let description = entry.description.as_deref().unwrap_or("");
    format!(
        "{},{},{}\r\n",
        escape_csv_field(language),
        escape_csv_field(&entry.name),
        escape_csv_field(description)
    )
}

// Writes the rendered CSV to the given path, overwriting any previous file
//
// Prints the confirmation message the user waits for.
pub fn write_csv(groups: &LanguageGroups, path: &Path) -> Result<()> {
    fs::write(path, render_csv(groups))
        .with_context(|| format!("could not write '{}'", path.display()))?;

    println!("✅ Repositories written to '{}'", path.display());
    Ok(())
}

// Quotes a field only when it needs it, doubling any inner quotes
fn escape_csv_field(field: &str) -> Cow<'_, str> {
    let needs_quoting = field
        .chars()
        .any(|c| matches!(c, ',' | '"' | '\n' | '\r'));

    if needs_quoting {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, description: Option<&str>) -> RepoEntry {
        RepoEntry {
            name: name.to_string(),
            description: description.map(String::from),
        }
    }

    #[test]
    fn test_escape_leaves_plain_fields_alone() {
        assert_eq!(escape_csv_field("Rust"), "Rust");
        assert_eq!(escape_csv_field("repo-lingo"), "repo-lingo");
        assert_eq!(escape_csv_field(""), "");
    }

    #[test]
    fn test_escape_quotes_commas_quotes_and_newlines() {
        assert_eq!(escape_csv_field("fast, small"), "\"fast, small\"");
        assert_eq!(escape_csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(escape_csv_field("line1\nline2"), "\"line1\nline2\"");
    }

    #[test]
    fn test_render_header_only_for_empty_grouping() {
        let groups = LanguageGroups::new();
        assert_eq!(render_csv(&groups), "Language,Repository Name,Description\r\n");
    }

    #[test]
    fn test_render_two_repos_is_three_lines() {
        let mut groups = LanguageGroups::new();
        groups.insert("Go".to_string(), vec![entry("api", Some("REST service"))]);
        groups.insert("N/A".to_string(), vec![entry("scratch", None)]);

        let csv = render_csv(&groups);
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some("Language,Repository Name,Description"));
        assert_eq!(lines.next(), Some("Go,api,REST service"));
        assert_eq!(lines.next(), Some("N/A,scratch,"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_row_count_matches_repository_count() {
        let mut groups = LanguageGroups::new();
        groups.insert(
            "Rust".to_string(),
            vec![entry("one", None), entry("two", None), entry("three", None)],
        );
        groups.insert("Python".to_string(), vec![entry("four", None)]);

        let csv = render_csv(&groups);
        // Header plus one row per repository
        assert_eq!(csv.lines().count(), 1 + 4);
    }

    #[test]
    fn test_render_escapes_tricky_description() {
        let mut groups = LanguageGroups::new();
        groups.insert(
            "C".to_string(),
            vec![entry("kernel", Some("fast, \"unsafe\", fun"))],
        );

        let csv = render_csv(&groups);
        let row = csv.lines().nth(1).unwrap();
        assert_eq!(row, "C,kernel,\"fast, \"\"unsafe\"\", fun\"");
    }

    #[test]
    fn test_rows_follow_bucket_insertion_order() {
        let mut groups = LanguageGroups::new();
        groups.insert(
            "Zig".to_string(),
            vec![entry("newest", None), entry("older", None)],
        );
        groups.insert("Ada".to_string(), vec![entry("legacy", None)]);

        let csv = render_csv(&groups);
        let lines: Vec<&str> = csv.lines().collect();
        // Insertion order, not alphabetical: Zig's bucket comes first
        assert_eq!(lines[1], "Zig,newest,");
        assert_eq!(lines[2], "Zig,older,");
        assert_eq!(lines[3], "Ada,legacy,");
    }

    #[test]
    fn test_write_csv_creates_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("repositories.csv");

        let mut groups = LanguageGroups::new();
        groups.insert("Go".to_string(), vec![entry("api", Some("REST service"))]);

        write_csv(&groups, &path).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(
            contents,
            "Language,Repository Name,Description\r\nGo,api,REST service\r\n"
        );
    }
}
