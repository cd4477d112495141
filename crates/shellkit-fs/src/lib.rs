//! Filesystem layer for shellkit
//!
//! Provides scratch files that are promoted atomically over their target,
//! text reads, directory and home-path helpers, and format-agnostic
//! configuration loading.

pub mod config;
pub mod error;
pub mod io;
pub mod path;

pub use config::ConfigStore;
pub use error::{Error, Result};
pub use io::ScratchFile;
pub use path::{ensure_dir, expand_home, resolve_against};
