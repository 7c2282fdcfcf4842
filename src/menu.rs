use crossterm::style::Stylize;
use miette::Result;

use crate::config::Config;
use crate::git::{self, GitError, Repo};
use crate::ui;
use crate::ui::terminal::FullScreen;

/// Which menu level is active. The session is an explicit loop over this
/// state, not recursion, so it can run indefinitely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuState {
    Top,
    Branch,
}

const TOP_ACTIONS: &[&str] = &["Status", "Branch", "Commit", "Push", "Pull"];
const BRANCH_ACTIONS: &[&str] = &[
    "List Branches",
    "Create Branch",
    "Delete Branch",
    "Switch Branch",
];

/// Persistent interactive session. There is no exit menu entry; the loop
/// ends only when the top-level prompt itself is interrupted.
pub fn run(repo: &Repo, config: &Config) -> Result<()> {
    let mut state = MenuState::Top;

    loop {
        match state {
            MenuState::Top => {
                let Some(choice) = ui::select::run("Choose a git command:", TOP_ACTIONS)? else {
                    return Ok(());
                };

                match TOP_ACTIONS[choice] {
                    "Status" => show_status(repo),
                    "Branch" => state = MenuState::Branch,
                    "Commit" => commit_changes(repo)?,
                    "Push" => push_changes(repo, config)?,
                    "Pull" => pull_changes(repo, config)?,
                    _ => println!("Command not implemented yet."),
                }
            }
            MenuState::Branch => {
                if let Some(choice) = ui::select::run("Choose a branch command:", BRANCH_ACTIONS)? {
                    match BRANCH_ACTIONS[choice] {
                        "List Branches" => list_branches(repo),
                        "Create Branch" => create_branch(repo)?,
                        "Delete Branch" => delete_branch(repo)?,
                        "Switch Branch" => switch_branch(repo)?,
                        _ => println!("Command not implemented yet."),
                    }
                }
                state = MenuState::Top;
            }
        }
    }
}

fn show_status(repo: &Repo) {
    match git::status::collect(repo) {
        Ok(status) => ui::status::render(&status),
        Err(e) => failure("Error fetching status", &e),
    }
}

fn list_branches(repo: &Repo) {
    let (branches, current) = match branch_inventory(repo) {
        Some(pair) => pair,
        None => return,
    };

    println!("{}", "Branches:".blue().bold());
    for name in &branches {
        if current.as_deref() == Some(name.as_str()) {
            println!("{}", format!("* {}", name).green());
        } else {
            println!("  {}", name);
        }
    }
    println!();
}

fn create_branch(repo: &Repo) -> Result<()> {
    let Some(name) = ui::input::run("Enter the new branch name:", None)? else {
        println!("Create cancelled.");
        return Ok(());
    };

    match git::branch::create(repo, &name) {
        Ok(()) => success(&format!("Branch {} created and switched to.", name)),
        Err(e) => failure("Error creating branch", &e),
    }
    Ok(())
}

fn delete_branch(repo: &Repo) -> Result<()> {
    let Some(name) = pick_other_branch(repo, " Delete Branch ")? else {
        return Ok(());
    };

    match git::branch::delete(repo, &name) {
        Ok(()) => success(&format!("Branch {} deleted.", name)),
        Err(e) => failure("Error deleting branch", &e),
    }
    Ok(())
}

fn switch_branch(repo: &Repo) -> Result<()> {
    let Some(name) = pick_other_branch(repo, " Switch Branch ")? else {
        return Ok(());
    };

    match git::branch::checkout(repo, &name) {
        Ok(()) => success(&format!("Switched to branch {}.", name)),
        Err(e) => failure("Error switching branch", &e),
    }
    Ok(())
}

fn commit_changes(repo: &Repo) -> Result<()> {
    let Some(message) = ui::input::run("Enter the commit message:", None)? else {
        println!("Commit cancelled.");
        return Ok(());
    };

    match git::commit::create(repo, &message) {
        Ok(_) => success(&format!("Changes committed with message: {}", message)),
        Err(e) => failure("Error committing changes", &e),
    }
    Ok(())
}

fn push_changes(repo: &Repo, config: &Config) -> Result<()> {
    let Some(remote) = prompt_remote(config)? else {
        println!("Push cancelled.");
        return Ok(());
    };

    match git::remote::push(repo, &remote) {
        Ok(_) => success(&format!("Changes pushed to {}.", remote)),
        Err(e) => failure("Error pushing changes", &e),
    }
    Ok(())
}

fn pull_changes(repo: &Repo, config: &Config) -> Result<()> {
    let Some(remote) = prompt_remote(config)? else {
        println!("Pull cancelled.");
        return Ok(());
    };

    match git::remote::pull(repo, &remote) {
        Ok(_) => success(&format!("Changes pulled from {}.", remote)),
        Err(e) => failure("Error pulling changes", &e),
    }
    Ok(())
}

fn prompt_remote(config: &Config) -> Result<Option<String>> {
    let default = config.default_remote.as_str();
    let label = format!("Enter the remote name (default is {}):", default);

    Ok(ui::input::run(&label, Some(default))?
        .map(|input| ui::input::or_default(&input, default)))
}

/// Opens the full-screen picker over every branch except the current
/// one. `None` covers cancellation, an empty candidate list, and listing
/// failures (which are reported in place).
fn pick_other_branch(repo: &Repo, title: &str) -> Result<Option<String>> {
    let (branches, current) = match branch_inventory(repo) {
        Some(pair) => pair,
        None => return Ok(None),
    };

    let candidates = git::branch::selectable(&branches, current.as_deref());
    if candidates.is_empty() {
        println!("No other branches.");
        return Ok(None);
    }

    let mut screen = FullScreen::enter().map_err(|e| miette::miette!("Terminal error: {}", e))?;
    let picked = ui::branch_picker::run(screen.terminal(), title, &candidates);
    drop(screen);

    match picked? {
        Some(name) => Ok(Some(name)),
        None => {
            println!("Cancelled.");
            Ok(None)
        }
    }
}

fn branch_inventory(repo: &Repo) -> Option<(Vec<String>, Option<String>)> {
    let branches = match git::branch::list(repo) {
        Ok(b) => b,
        Err(e) => {
            failure("Error listing branches", &e);
            return None;
        }
    };
    let current = match git::branch::current(repo) {
        Ok(c) => c,
        Err(e) => {
            failure("Error listing branches", &e);
            return None;
        }
    };
    Some((branches, current))
}

fn success(message: &str) {
    println!("{}", message.green());
}

/// Operation errors never end the session: print the backend's reason
/// and fall back to the menu.
fn failure(context: &str, error: &GitError) {
    eprintln!("{}", format!("{}: {}", context, error).red());
}
