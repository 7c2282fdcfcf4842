pub mod branch;
pub mod commit;
pub mod git_exec;
pub mod remote;
pub mod status;
pub mod time;

use std::path::{Path, PathBuf};

use git2::Repository;
use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum GitError {
    #[error("Git executable not found.")]
    #[diagnostic(
        code(gim::git::not_found),
        help("Ensure that 'git' is installed and available in your PATH.")
    )]
    NotFound(#[source] std::io::Error),

    #[error("Failed to execute git command.")]
    #[diagnostic(code(gim::git::execution_failed))]
    IoError(#[from] std::io::Error),

    #[error("The current directory is not a git repository.")]
    #[diagnostic(
        code(gim::git::not_in_repo),
        help("Run gim from inside a git working tree.")
    )]
    NotInRepo,

    #[error("Git command failed: {0}")]
    #[diagnostic(code(gim::git::command_failed))]
    CommandFailed(String),

    #[error("{0}")]
    #[diagnostic(code(gim::git::git2_error))]
    Git2Error(#[from] git2::Error),
}

/// Handle to a discovered working tree. Every operation runs against its
/// root rather than the process working directory, so the backend can be
/// exercised against scratch repositories in tests.
#[derive(Debug, Clone)]
pub struct Repo {
    workdir: PathBuf,
}

impl Repo {
    /// The startup gate. Whatever the underlying reason (no repository,
    /// bare repository, permission error), discovery failure collapses
    /// into `NotInRepo`.
    pub fn discover() -> Result<Self, GitError> {
        Self::discover_from(".")
    }

    pub fn discover_from(path: impl AsRef<Path>) -> Result<Self, GitError> {
        let repo = Repository::discover(path).map_err(|_| GitError::NotInRepo)?;
        let workdir = repo.workdir().ok_or(GitError::NotInRepo)?.to_path_buf();
        Ok(Self { workdir })
    }

    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    pub(crate) fn open(&self) -> Result<Repository, GitError> {
        Ok(Repository::open(&self.workdir)?)
    }
}

#[cfg(test)]
pub(crate) mod testutil {
    use super::Repo;
    use std::path::Path;
    use tempfile::TempDir;

    /// Initialized repository with an identity and one empty commit.
    pub fn scratch_repo() -> (TempDir, Repo) {
        let dir = TempDir::new().unwrap();
        let git_repo = git2::Repository::init(dir.path()).unwrap();

        let mut config = git_repo.config().unwrap();
        config.set_str("user.name", "tester").unwrap();
        config.set_str("user.email", "tester@example.com").unwrap();
        config.set_bool("commit.gpgsign", false).unwrap();

        let sig = git2::Signature::now("tester", "tester@example.com").unwrap();
        let tree_id = git_repo.index().unwrap().write_tree().unwrap();
        let tree = git_repo.find_tree(tree_id).unwrap();
        git_repo
            .commit(Some("HEAD"), &sig, &sig, "initial", &tree, &[])
            .unwrap();

        let repo = Repo::discover_from(dir.path()).unwrap();
        (dir, repo)
    }

    pub fn write_file(repo: &Repo, name: &str, contents: &str) {
        std::fs::write(repo.workdir().join(name), contents).unwrap();
    }

    pub fn stage_file(repo: &Repo, name: &str, contents: &str) {
        write_file(repo, name, contents);
        let git_repo = git2::Repository::open(repo.workdir()).unwrap();
        let mut index = git_repo.index().unwrap();
        index.add_path(Path::new(name)).unwrap();
        index.write().unwrap();
    }
}
