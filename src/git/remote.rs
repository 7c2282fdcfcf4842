use super::git_exec;
use super::{GitError, Repo};

/// `git push <remote>`: the current branch goes to the named remote,
/// following the backend's own push.default resolution.
pub fn push(repo: &Repo, remote: &str) -> Result<String, GitError> {
    git_exec::exec(repo, &["push", remote])
}

/// `git pull <remote>` into the current branch.
pub fn pull(repo: &Repo, remote: &str) -> Result<String, GitError> {
    git_exec::exec(repo, &["pull", remote])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::testutil::scratch_repo;

    #[test]
    fn test_push_to_unknown_remote_fails() {
        let (_dir, repo) = scratch_repo();
        let result = push(&repo, "nowhere");
        assert!(matches!(result, Err(GitError::CommandFailed(_))));
    }

    #[test]
    fn test_pull_from_unknown_remote_fails() {
        let (_dir, repo) = scratch_repo();
        let result = pull(&repo, "nowhere");
        assert!(matches!(result, Err(GitError::CommandFailed(_))));
    }

    #[test]
    fn test_push_to_local_remote() {
        let (_dir, repo) = scratch_repo();
        let remote_dir = tempfile::TempDir::new().unwrap();
        git2::Repository::init_bare(remote_dir.path()).unwrap();

        let git_repo = git2::Repository::open(repo.workdir()).unwrap();
        git_repo
            .remote("origin", remote_dir.path().to_str().unwrap())
            .unwrap();
        // no upstream exists yet, so pin down what "push" means here
        let mut config = git_repo.config().unwrap();
        config.set_str("push.default", "current").unwrap();

        assert!(push(&repo, "origin").is_ok());
    }
}
