//! Git repository fixtures.

use std::fs;
use std::path::Path;

/// Initialises a real git repository using `git2` (no initial commit).
///
/// HEAD is an unborn branch.
///
/// # Panics
/// Panics if `git2::Repository::init` fails.
pub fn real_git_repo(path: &Path) -> git2::Repository {
    git2::Repository::init(path).unwrap_or_else(|e| {
        panic!(
            "real_git_repo: failed to init repository at {}: {e}",
            path.display()
        )
    })
}

/// Initialises a real git repository with one commit on `main`.
///
/// Uses `git2` only, so no `git` executable or global identity is needed.
///
/// # Panics
/// Panics if any git operation fails.
pub fn real_git_repo_with_commit(path: &Path) -> git2::Repository {
    let repo = real_git_repo(path);

    fs::write(path.join("README.md"), "# Test")
        .unwrap_or_else(|e| panic!("real_git_repo_with_commit: failed to write README.md: {e}"));

    {
        let mut index = repo.index().unwrap();
        index.add_path(Path::new("README.md")).unwrap();
        index.write().unwrap();
        let tree_id = index.write_tree().unwrap();
        let tree = repo.find_tree(tree_id).unwrap();
        let sig = git2::Signature::now("Test User", "test@test.com").unwrap();
        repo.commit(Some("refs/heads/main"), &sig, &sig, "Initial commit", &tree, &[])
            .unwrap();
    }

    repo.set_head("refs/heads/main")
        .unwrap_or_else(|e| panic!("real_git_repo_with_commit: failed to set HEAD: {e}"));
    repo
}

/// Detach HEAD at the current commit.
pub fn detach_head(repo: &git2::Repository) {
    let commit = repo.head().unwrap().peel_to_commit().unwrap();
    repo.set_head_detached(commit.id()).unwrap();
}
