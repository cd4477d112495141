use pretty_assertions::assert_eq;
use shellkit_git::current_branch;
use shellkit_test_utils::git::{detach_head, real_git_repo, real_git_repo_with_commit};
use tempfile::TempDir;

#[test]
fn branch_of_repository_with_commit() {
    let temp = TempDir::new().unwrap();
    real_git_repo_with_commit(temp.path());

    assert_eq!(current_branch(temp.path()).unwrap(), Some("main".to_string()));
}

#[test]
fn branch_is_discovered_from_subdirectory() {
    let temp = TempDir::new().unwrap();
    real_git_repo_with_commit(temp.path());
    let nested = temp.path().join("src/deep");
    std::fs::create_dir_all(&nested).unwrap();

    assert_eq!(current_branch(&nested).unwrap(), Some("main".to_string()));
}

#[test]
fn unborn_branch_is_reported_by_name() {
    let temp = TempDir::new().unwrap();
    let repo = real_git_repo(temp.path());
    repo.set_head("refs/heads/trunk").unwrap();

    assert_eq!(current_branch(temp.path()).unwrap(), Some("trunk".to_string()));
}

#[test]
fn detached_head_has_no_branch() {
    let temp = TempDir::new().unwrap();
    let repo = real_git_repo_with_commit(temp.path());
    detach_head(&repo);

    assert_eq!(current_branch(temp.path()).unwrap(), None);
}
