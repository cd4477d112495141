//! current-branch command

use std::path::Path;

use shellkit_git::current_branch;

use crate::error::Result;

/// Print the current branch of the repository containing `path`.
///
/// Prints nothing when HEAD is detached.
pub fn run_current_branch(path: &Path) -> Result<()> {
    if let Some(branch) = current_branch(path)? {
        println!("{branch}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shellkit_test_utils::git::real_git_repo_with_commit;
    use tempfile::TempDir;

    #[test]
    fn test_current_branch_in_repo() {
        let temp_dir = TempDir::new().unwrap();
        real_git_repo_with_commit(temp_dir.path());

        assert!(run_current_branch(temp_dir.path()).is_ok());
    }
}
