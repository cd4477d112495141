//! Shared test utilities for the shellkit workspace.
//!
//! This crate provides standardised test fixtures to eliminate duplication
//! across crate test suites. It is a dev-dependency only — never published.
//!
//! # Modules
//!
//! - [`git`] — git repository fixtures
//! - [`files`] — [`TestDir`] for files with known content

pub mod files;
pub mod git;

pub use files::TestDir;
