//! Integration tests for repository inspection

use bump_release::{
    error::BumpError,
    git::{GitTracker, VersionControl},
};
use std::fs;
use tempfile::TempDir;

/// Helper to create a temporary git repository
fn create_test_repo() -> TempDir {
    let temp_dir = TempDir::new().unwrap();

    // Initialize git repo
    let repo = git2::Repository::init(temp_dir.path()).unwrap();

    // Configure user for commits
    let mut config = repo.config().unwrap();
    config.set_str("user.name", "Test User").unwrap();
    config.set_str("user.email", "test@example.com").unwrap();

    // Create initial file and commit
    let file_path = temp_dir.path().join("pyproject.toml");
    fs::write(&file_path, "[tool.poetry]\nversion = \"2024.3.15\"\n").unwrap();

    let mut index = repo.index().unwrap();
    index.add_path(std::path::Path::new("pyproject.toml")).unwrap();
    index.write().unwrap();

    let tree_id = index.write_tree().unwrap();
    let tree = repo.find_tree(tree_id).unwrap();
    let sig = repo.signature().unwrap();

    repo.commit(Some("HEAD"), &sig, &sig, "Initial commit", &tree, &[])
        .unwrap();

    temp_dir
}

fn checkout_new_branch(temp_dir: &TempDir, name: &str) {
    let repo = git2::Repository::open(temp_dir.path()).unwrap();
    let head = repo.head().unwrap().peel_to_commit().unwrap();
    repo.branch(name, &head, false).unwrap();
    repo.set_head(&format!("refs/heads/{name}")).unwrap();
}

#[test]
fn test_git_tracker_open() {
    let temp_dir = create_test_repo();

    let tracker = GitTracker::open(temp_dir.path());
    assert!(tracker.is_ok());
}

#[test]
fn test_git_tracker_open_non_repo_fails() {
    let temp_dir = TempDir::new().unwrap();

    let tracker = GitTracker::open(temp_dir.path());
    assert!(matches!(tracker, Err(BumpError::Git(_))));
}

#[test]
fn test_git_tracker_open_from_subdirectory() {
    let temp_dir = create_test_repo();
    let nested = temp_dir.path().join("src").join("pkg");
    fs::create_dir_all(&nested).unwrap();

    let tracker = GitTracker::open(&nested).unwrap();
    let root = tracker.root().unwrap();
    assert_eq!(
        root.canonicalize().unwrap(),
        temp_dir.path().canonicalize().unwrap()
    );
}

#[test]
fn test_git_tracker_current_branch() {
    let temp_dir = create_test_repo();
    let tracker = GitTracker::open(temp_dir.path()).unwrap();

    let branch = tracker.current_branch().unwrap();
    // Default branch is usually "master" or "main"
    assert!(branch == "master" || branch == "main");
}

#[test]
fn test_git_tracker_current_branch_after_checkout() {
    let temp_dir = create_test_repo();
    checkout_new_branch(&temp_dir, "develop");
    let tracker = GitTracker::open(temp_dir.path()).unwrap();

    assert_eq!(tracker.current_branch().unwrap(), "develop");
}

#[test]
fn test_git_tracker_current_branch_without_commits() {
    let temp_dir = TempDir::new().unwrap();
    let repo = git2::Repository::init(temp_dir.path()).unwrap();
    let tracker = GitTracker::open(temp_dir.path()).unwrap();

    let branch = tracker.current_branch().unwrap();
    assert!(branch == "master" || branch == "main");

    repo.set_head("refs/heads/develop").unwrap();
    assert_eq!(tracker.current_branch().unwrap(), "develop");
}

#[test]
fn test_git_tracker_detached_head_fails() {
    let temp_dir = create_test_repo();
    {
        let repo = git2::Repository::open(temp_dir.path()).unwrap();
        let head = repo.head().unwrap().target().unwrap();
        repo.set_head_detached(head).unwrap();
    }
    let tracker = GitTracker::open(temp_dir.path()).unwrap();

    assert!(matches!(tracker.current_branch(), Err(BumpError::DetachedHead)));
}

#[test]
fn test_repository_slug_from_push_url() {
    let temp_dir = create_test_repo();
    {
        let repo = git2::Repository::open(temp_dir.path()).unwrap();
        repo.remote("origin", "https://github.com/SickChill/sickchill.git").unwrap();
        repo.remote_set_pushurl("origin", Some("git@github.com:SickChill/SickChill.git"))
            .unwrap();
    }
    let tracker = GitTracker::open(temp_dir.path()).unwrap();

    assert_eq!(tracker.repository_slug("origin").unwrap(), "SickChill/SickChill");
}

#[test]
fn test_repository_slug_falls_back_to_fetch_url() {
    let temp_dir = create_test_repo();
    {
        let repo = git2::Repository::open(temp_dir.path()).unwrap();
        repo.remote("origin", "https://github.com/owner/repo.git").unwrap();
    }
    let tracker = GitTracker::open(temp_dir.path()).unwrap();

    assert_eq!(tracker.repository_slug("origin").unwrap(), "owner/repo");
}

#[test]
fn test_repository_slug_missing_remote_fails() {
    let temp_dir = create_test_repo();
    let tracker = GitTracker::open(temp_dir.path()).unwrap();

    assert!(matches!(tracker.repository_slug("origin"), Err(BumpError::Git(_))));
}

#[test]
fn test_repository_slug_unrecognized_url_fails() {
    let temp_dir = create_test_repo();
    {
        let repo = git2::Repository::open(temp_dir.path()).unwrap();
        repo.remote("origin", "https://gitlab.com/group/sub/repo.git").unwrap();
    }
    let tracker = GitTracker::open(temp_dir.path()).unwrap();

    assert!(matches!(
        tracker.repository_slug("origin"),
        Err(BumpError::InvalidRemoteUrl { .. })
    ));
}
