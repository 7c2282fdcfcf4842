use crate::git::status::{FileStatus, RepoStatus, StatusFile};
use crossterm::style::Stylize;

pub fn render(status: &RepoStatus) {
    if status.detached {
        println!(
            "{} {} {}",
            "◎".yellow(),
            status.branch_name.as_str().yellow().bold(),
            "(detached)".dark_grey()
        );
    } else {
        println!("{} {}", "⎇".cyan(), status.branch_name.as_str().cyan().bold());
    }
    println!();

    if let Some(ref last) = status.last_commit {
        println!(
            "{} {} {}",
            "●".magenta(),
            last.summary,
            format!("({})", last.age).dark_grey()
        );
        println!();
    }

    if !status.staged.is_empty() {
        render_section("Staged", &status.staged, true);
    }

    if !status.unstaged.is_empty() {
        render_section("Changes", &status.unstaged, false);
    }

    if status.staged.is_empty() && status.unstaged.is_empty() {
        println!("{} {}", "✓".green(), "Working tree clean".dark_grey());
        println!();
    }
}

fn render_section(title: &str, files: &[StatusFile], staged: bool) {
    let header = if staged { title.green() } else { title.yellow() };
    println!(
        "{} {}",
        header.bold(),
        format!("({})", files.len()).dark_grey()
    );

    for file in files {
        println!("  {} {}", badge(file.status), file.path);
    }
    println!();
}

fn badge(status: FileStatus) -> crossterm::style::StyledContent<&'static str> {
    match status {
        FileStatus::New => "+".green(),
        FileStatus::Modified => "~".yellow(),
        FileStatus::Deleted => "-".red(),
        FileStatus::Renamed => ">".cyan(),
        FileStatus::Typechange => "±".magenta(),
    }
}
