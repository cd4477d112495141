//! Current branch lookup

use std::path::Path;

use git2::{ErrorCode, Repository};

use crate::{Error, Result};

/// Get the name of the branch checked out in the repository containing `path`.
///
/// The repository is discovered by walking up from `path`. Returns `None`
/// when HEAD is detached. A branch with no commits yet is still reported
/// by name.
pub fn current_branch(path: &Path) -> Result<Option<String>> {
    let repo = Repository::discover(path).map_err(|e| match e.code() {
        ErrorCode::NotFound => Error::NotARepository {
            path: path.to_path_buf(),
        },
        _ => Error::Git(e),
    })?;

    let head = match repo.head() {
        Ok(head) => head,
        Err(e) if e.code() == ErrorCode::UnbornBranch => {
            return unborn_branch(&repo);
        }
        Err(e) => return Err(e.into()),
    };

    if head.is_branch() {
        let name = head.shorthand().unwrap_or("HEAD").to_string();
        tracing::debug!(branch = %name, "Resolved current branch");
        Ok(Some(name))
    } else {
        tracing::debug!("HEAD is detached");
        Ok(None)
    }
}

/// Read the branch name HEAD points at before its first commit.
fn unborn_branch(repo: &Repository) -> Result<Option<String>> {
    let head = repo.find_reference("HEAD")?;
    Ok(head
        .symbolic_target()
        .map(|target| target.strip_prefix("refs/heads/").unwrap_or(target).to_string()))
}
