use super::git_exec;
use super::{GitError, Repo};

/// Commits whatever is staged with the given message. The message is
/// passed through untouched; git itself rejects an empty one.
pub fn create(repo: &Repo, message: &str) -> Result<String, GitError> {
    git_exec::exec(repo, &["commit", "-m", message])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::testutil::{scratch_repo, stage_file};

    #[test]
    fn test_commit_staged_changes() {
        let (_dir, repo) = scratch_repo();
        stage_file(&repo, "notes.txt", "hello\n");

        create(&repo, "add notes").unwrap();

        let git_repo = git2::Repository::open(repo.workdir()).unwrap();
        let head = git_repo.head().unwrap().peel_to_commit().unwrap();
        assert_eq!(head.summary(), Some("add notes"));
    }

    #[test]
    fn test_commit_with_nothing_staged_fails() {
        let (_dir, repo) = scratch_repo();
        let result = create(&repo, "empty");
        assert!(matches!(result, Err(GitError::CommandFailed(_))));
    }
}
