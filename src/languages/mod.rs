// src/languages/mod.rs
// =============================================================================
// This module turns fetched repositories into a by-language grouping.
//
// Submodules:
// - resolve: queries one repository's languages endpoint, first key wins
// - group: runs the resolver over every repository and buckets the results
// =============================================================================

mod group;
mod resolve;

// Re-export what the rest of the application consumes; the resolver is
// only ever driven through group_by_language
pub use group::{group_by_language, LanguageGroups, RepoEntry};
