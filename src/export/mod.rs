// src/export/mod.rs
// =============================================================================
// This module writes the grouped repositories out as a CSV file.
// =============================================================================

mod csv;

// Re-export the writing entry point; rendering stays internal
pub use csv::write_csv;
