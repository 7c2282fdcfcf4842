use std::process::{Command, Stdio};

use super::{GitError, Repo};

/// Runs one `git` invocation in the repository root and waits for it to
/// finish. A nonzero exit turns the backend's own wording into a
/// `CommandFailed` so callers can surface it verbatim.
pub fn exec(repo: &Repo, args: &[&str]) -> Result<String, GitError> {
    let output = Command::new("git")
        .args(args)
        .current_dir(repo.workdir())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => GitError::NotFound(e),
            _ => GitError::IoError(e),
        })?;

    if !output.status.success() {
        // "nothing to commit" and friends land on stdout, not stderr
        let mut detail = String::from_utf8_lossy(&output.stderr).trim().to_string();
        if detail.is_empty() {
            detail = String::from_utf8_lossy(&output.stdout).trim().to_string();
        }
        return Err(map_git_error(detail));
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

fn map_git_error(stderr: String) -> GitError {
    if stderr.contains("fatal: not a git repository") {
        GitError::NotInRepo
    } else {
        GitError::CommandFailed(stderr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::testutil::scratch_repo;

    #[test]
    fn test_exec_flag() {
        let (_dir, repo) = scratch_repo();
        let result = exec(&repo, &["--version"]);
        assert!(result.is_ok());
    }

    #[test]
    fn test_exec_runs_in_repo_root() {
        let (_dir, repo) = scratch_repo();
        let result = exec(&repo, &["rev-parse", "--is-inside-work-tree"]);
        assert_eq!(result.unwrap(), "true");
    }

    #[test]
    fn test_exec_unknown_subcommand() {
        let (_dir, repo) = scratch_repo();
        let result = exec(&repo, &["notfound"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_map_git_error_not_in_repo() {
        let stderr =
            "fatal: not a git repository (or any of the parent directories): .git".to_string();
        assert!(matches!(map_git_error(stderr), GitError::NotInRepo));
    }

    #[test]
    fn test_map_git_error_command_failed() {
        let stderr = "some other error".to_string();
        let error = map_git_error(stderr.clone());
        assert!(matches!(error, GitError::CommandFailed(msg) if msg == stderr));
    }
}
