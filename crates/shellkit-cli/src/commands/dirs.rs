//! ensure-dir command

use std::path::PathBuf;

use shellkit_fs::ensure_dir;

use crate::error::Result;

/// Create every directory in `dirs`, printing each canonical path.
pub fn run_ensure_dir(dirs: &[PathBuf]) -> Result<()> {
    for dir in dirs {
        let created = ensure_dir(dir)?;
        println!("{}", created.display());
    }
    Ok(())
}
