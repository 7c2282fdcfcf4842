use git2::{Status, StatusOptions};

use super::{GitError, Repo, time};

pub const STAGED_FLAGS: Status = Status::INDEX_NEW
    .union(Status::INDEX_MODIFIED)
    .union(Status::INDEX_DELETED)
    .union(Status::INDEX_RENAMED)
    .union(Status::INDEX_TYPECHANGE);

pub const UNSTAGED_FLAGS: Status = Status::WT_NEW
    .union(Status::WT_MODIFIED)
    .union(Status::WT_DELETED)
    .union(Status::WT_RENAMED)
    .union(Status::WT_TYPECHANGE);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStatus {
    New,
    Modified,
    Deleted,
    Renamed,
    Typechange,
}

const INDEX_CLASSES: &[(Status, FileStatus)] = &[
    (Status::INDEX_NEW, FileStatus::New),
    (Status::INDEX_MODIFIED, FileStatus::Modified),
    (Status::INDEX_DELETED, FileStatus::Deleted),
    (Status::INDEX_RENAMED, FileStatus::Renamed),
];

const WT_CLASSES: &[(Status, FileStatus)] = &[
    (Status::WT_NEW, FileStatus::New),
    (Status::WT_MODIFIED, FileStatus::Modified),
    (Status::WT_DELETED, FileStatus::Deleted),
    (Status::WT_RENAMED, FileStatus::Renamed),
];

impl FileStatus {
    pub fn from_staged(status: Status) -> Self {
        Self::classify(status, INDEX_CLASSES)
    }

    pub fn from_unstaged(status: Status) -> Self {
        Self::classify(status, WT_CLASSES)
    }

    fn classify(status: Status, classes: &[(Status, FileStatus)]) -> Self {
        classes
            .iter()
            .find(|(flag, _)| status.contains(*flag))
            .map(|(_, class)| *class)
            .unwrap_or(FileStatus::Typechange)
    }
}

#[derive(Debug, Clone)]
pub struct StatusFile {
    pub path: String,
    pub status: FileStatus,
}

#[derive(Debug, Clone)]
pub struct LastCommit {
    pub summary: String,
    pub age: String,
}

#[derive(Debug, Clone)]
pub struct RepoStatus {
    /// Branch shorthand, or a short commit id when HEAD is detached.
    pub branch_name: String,
    pub detached: bool,
    pub staged: Vec<StatusFile>,
    pub unstaged: Vec<StatusFile>,
    pub last_commit: Option<LastCommit>,
}

pub fn collect(repo: &Repo) -> Result<RepoStatus, GitError> {
    let (branch_name, detached) = head_label(repo)?;
    let (staged, unstaged) = status_files(repo)?;
    let last_commit = last_commit(repo)?;

    Ok(RepoStatus {
        branch_name,
        detached,
        staged,
        unstaged,
        last_commit,
    })
}

fn head_label(repo: &Repo) -> Result<(String, bool), GitError> {
    let git_repo = repo.open()?;

    match git_repo.head() {
        Ok(head) if head.is_branch() => {
            Ok((head.shorthand().unwrap_or("HEAD").to_string(), false))
        }
        Ok(head) => {
            let commit = head.peel_to_commit()?;
            let short = commit.as_object().short_id()?;
            Ok((short.as_str().unwrap_or("HEAD").to_string(), true))
        }
        Err(e) if e.code() == git2::ErrorCode::UnbornBranch => {
            let name = super::branch::current(repo)?.unwrap_or_else(|| "HEAD".to_string());
            Ok((name, false))
        }
        Err(e) => Err(e.into()),
    }
}

fn status_files(repo: &Repo) -> Result<(Vec<StatusFile>, Vec<StatusFile>), GitError> {
    let git_repo = repo.open()?;
    let mut opts = StatusOptions::new();
    opts.include_untracked(true);
    opts.recurse_untracked_dirs(true);

    let statuses = git_repo.statuses(Some(&mut opts))?;
    let mut staged = Vec::new();
    let mut unstaged = Vec::new();

    for entry in statuses.iter() {
        let Some(path) = entry.path() else { continue };
        let status = entry.status();

        if status.intersects(STAGED_FLAGS) {
            staged.push(StatusFile {
                path: path.to_string(),
                status: FileStatus::from_staged(status),
            });
        }

        if status.intersects(UNSTAGED_FLAGS) {
            unstaged.push(StatusFile {
                path: path.to_string(),
                status: FileStatus::from_unstaged(status),
            });
        }
    }

    staged.sort_by(|a, b| a.path.cmp(&b.path));
    unstaged.sort_by(|a, b| a.path.cmp(&b.path));

    Ok((staged, unstaged))
}

fn last_commit(repo: &Repo) -> Result<Option<LastCommit>, GitError> {
    let git_repo = repo.open()?;

    let Ok(head) = git_repo.head() else {
        return Ok(None);
    };
    let Ok(commit) = head.peel_to_commit() else {
        return Ok(None);
    };

    let summary = commit.summary().unwrap_or("").to_string();
    let age = time::format_relative(time::now_secs() - commit.time().seconds());

    Ok(Some(LastCommit { summary, age }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::testutil::{scratch_repo, stage_file, write_file};

    #[test]
    fn test_clean_tree() {
        let (_dir, repo) = scratch_repo();
        let status = collect(&repo).unwrap();

        assert!(!status.detached);
        assert!(status.staged.is_empty());
        assert!(status.unstaged.is_empty());
        assert_eq!(status.last_commit.unwrap().summary, "initial");
    }

    #[test]
    fn test_staged_file_is_reported() {
        let (_dir, repo) = scratch_repo();
        stage_file(&repo, "new.txt", "contents\n");

        let status = collect(&repo).unwrap();
        assert_eq!(status.staged.len(), 1);
        assert_eq!(status.staged[0].path, "new.txt");
        assert_eq!(status.staged[0].status, FileStatus::New);
        assert!(status.unstaged.is_empty());
    }

    #[test]
    fn test_untracked_file_is_unstaged() {
        let (_dir, repo) = scratch_repo();
        write_file(&repo, "scratch.txt", "untracked\n");

        let status = collect(&repo).unwrap();
        assert!(status.staged.is_empty());
        assert_eq!(status.unstaged.len(), 1);
        assert_eq!(status.unstaged[0].status, FileStatus::New);
    }

    #[test]
    fn test_modified_tracked_file() {
        let (_dir, repo) = scratch_repo();
        stage_file(&repo, "tracked.txt", "v1\n");
        crate::git::commit::create(&repo, "track file").unwrap();
        write_file(&repo, "tracked.txt", "v2\n");

        let status = collect(&repo).unwrap();
        assert_eq!(status.unstaged.len(), 1);
        assert_eq!(status.unstaged[0].status, FileStatus::Modified);
    }

    #[test]
    fn test_classify_prefers_first_matching_flag() {
        assert_eq!(
            FileStatus::from_staged(Status::INDEX_MODIFIED),
            FileStatus::Modified
        );
        assert_eq!(
            FileStatus::from_unstaged(Status::WT_TYPECHANGE),
            FileStatus::Typechange
        );
    }
}
