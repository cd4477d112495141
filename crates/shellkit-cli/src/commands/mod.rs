//! Command implementations for shellkit-cli

pub mod branch;
pub mod dirs;
pub mod section;

pub use branch::run_current_branch;
pub use dirs::run_ensure_dir;
pub use section::{run_apply, run_update_section};
