//! Git lookups for shellkit
//!
//! Read-only queries against the repository containing a path.

pub mod branch;
pub mod error;

pub use branch::current_branch;
pub use error::{Error, Result};
