use super::git_exec;
use super::{GitError, Repo};

/// Local branch names in the order the backend reports them.
pub fn list(repo: &Repo) -> Result<Vec<String>, GitError> {
    let git_repo = repo.open()?;

    let names = git_repo
        .branches(Some(git2::BranchType::Local))?
        .filter_map(|res| res.ok())
        .filter_map(|(branch, _)| branch.get().shorthand().map(str::to_string))
        .collect();

    Ok(names)
}

/// Name of the checked-out branch, `None` when HEAD is detached. An
/// unborn HEAD (fresh `git init`) still reports the branch it points at.
pub fn current(repo: &Repo) -> Result<Option<String>, GitError> {
    let git_repo = repo.open()?;

    match git_repo.head() {
        Ok(head) if head.is_branch() => Ok(head.shorthand().map(str::to_string)),
        Ok(_) => Ok(None),
        Err(e) if e.code() == git2::ErrorCode::UnbornBranch => {
            let head = git_repo.find_reference("HEAD")?;
            Ok(head
                .symbolic_target()
                .and_then(|t| t.strip_prefix("refs/heads/"))
                .map(str::to_string))
        }
        Err(e) => Err(e.into()),
    }
}

/// Creates the branch and switches the working tree to it.
pub fn create(repo: &Repo, name: &str) -> Result<(), GitError> {
    git_exec::exec(repo, &["checkout", "-b", name])?;
    Ok(())
}

pub fn delete(repo: &Repo, name: &str) -> Result<(), GitError> {
    git_exec::exec(repo, &["branch", "-d", name])?;
    Ok(())
}

pub fn checkout(repo: &Repo, name: &str) -> Result<(), GitError> {
    git_exec::exec(repo, &["checkout", name])?;
    Ok(())
}

/// Candidates offered by the delete/switch prompts: every branch except
/// the one currently checked out, keeping the backend's order.
pub fn selectable(branches: &[String], current: Option<&str>) -> Vec<String> {
    branches
        .iter()
        .filter(|name| Some(name.as_str()) != current)
        .cloned()
        .collect()
}
