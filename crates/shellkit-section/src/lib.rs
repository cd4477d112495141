//! Idempotent section editing for shellkit.
//!
//! A section is a span of lines in a text file bounded by a literal start
//! marker line and a literal end marker line:
//!
//! ```text
//! # >>> shellkit >>>
//! export EDITOR=vim
//! # <<< shellkit <<<
//! ```
//!
//! [`update_section`] inserts, replaces, or removes the first such span in a
//! file. Edits are written to a scratch file next to the target and renamed
//! over it, so the target is either fully updated or left untouched.
//!
//! Only the first occurrence of a marker pair is ever addressed; later
//! sections with identical markers pass through unchanged.

pub mod editor;
pub mod error;
pub mod manifest;
pub mod markers;
pub mod mode;
pub mod preview;
pub mod request;
pub mod scanner;

pub use editor::{EditOutcome, update_section, update_section_args};
pub use error::{Error, Result};
pub use manifest::{SectionEntry, SectionManifest, apply_manifest};
pub use markers::Markers;
pub use mode::SectionMode;
pub use preview::{SectionPreview, preview_section};
pub use request::SectionRequest;
pub use scanner::ScanState;
