//! # gabay - Bikol / Filipino / English translation assistant
//!
//! `gabay` helps health workers and patients in the Bikol region move
//! between Bikol, Filipino and English. It works fully offline from
//! dictionary tables built out of a curated corpus.
//!
//! ## Features
//!
//! - **Language detection**: marker-word scoring tells Bikol, Filipino and English apart
//! - **Word substitution**: dictionary translation that keeps punctuation and spacing
//! - **Health glosses**: annotate English health terms with their Bikol equivalents
//! - **Hot reload**: swap in a rebuilt mappings file without restarting a session
//!
//! ## Quick Start
//!
//! ```bash
//! # Build the mapping tables from the bundled corpus
//! gabay corpus build
//!
//! # Translate from stdin (source language is detected)
//! echo "Saen an ospital?" | gabay --to en
//!
//! # Detect the language of a file
//! gabay detect ./message.txt
//!
//! # Add Bikol glosses to an English reply
//! echo "Take medicine for fever." | gabay enhance
//! ```
//!
//! ## Configuration
//!
//! Settings are stored in `~/.config/gabay/config.toml`:
//!
//! ```toml
//! [gabay]
//! mappings = "/srv/gabay/translation_mappings.json"
//! to = "fil"
//! ```

/// Interactive chat mode for translation sessions.
pub mod chat;

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file management and setting resolution.
pub mod config;

/// Curated corpus and the mapping-table builder.
pub mod corpus;

/// Error types the CLI maps to exit codes.
pub mod error;

/// File system utilities.
pub mod fs;

/// Health-term glossary and response enhancement.
pub mod glossary;

/// Input reading from files and stdin.
pub mod input;

/// Global output configuration (quiet mode, colors, stderr/stdout routing).
pub mod output;

/// XDG-style path utilities for configuration and data.
pub mod paths;

/// Language detection and word-by-word translation.
pub mod translation;

/// Terminal UI helpers (colors, prompt handling).
pub mod ui;
