use super::{Term, render_help_bar};
use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;
use miette::IntoDiagnostic;
use ratatui::prelude::*;
use ratatui::widgets::*;
use std::time::Duration;

fn filter_branches(branches: &[String], query: &str) -> Vec<String> {
    if query.is_empty() {
        return branches.to_vec();
    }

    let matcher = SkimMatcherV2::default();
    let mut matches: Vec<_> = branches
        .iter()
        .filter_map(|b| matcher.fuzzy_match(b, query).map(|score| (score, b)))
        .collect();

    matches.sort_by_key(|(score, _)| std::cmp::Reverse(*score));
    matches.into_iter().map(|(_, b)| b.clone()).collect()
}

fn render_search_bar(query: &str) -> Paragraph<'_> {
    Paragraph::new(query).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Fuzzy Search "),
    )
}

fn render_branch_list<'a>(title: &'a str, branches: &'a [String], selected: usize) -> List<'a> {
    let items: Vec<ListItem> = branches
        .iter()
        .enumerate()
        .map(|(i, branch)| {
            let style = if i == selected {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(branch.as_str()).style(style)
        })
        .collect();

    List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol(">> ")
}

/// Full-screen fuzzy branch selector. The title names the action
/// (" Delete Branch ", " Switch Branch ") so the user can tell which
/// operation the selection feeds.
pub fn run(terminal: &mut Term, title: &str, branches: &[String]) -> miette::Result<Option<String>> {
    let mut query = String::new();
    let mut selected_index = 0;

    loop {
        let filtered = filter_branches(branches, &query);

        if selected_index >= filtered.len() && !filtered.is_empty() {
            selected_index = filtered.len() - 1;
        }

        terminal
            .draw(|f| {
                let chunks = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([
                        Constraint::Length(3),
                        Constraint::Min(0),
                        Constraint::Length(3),
                    ])
                    .split(f.area());

                f.render_widget(render_search_bar(&query), chunks[0]);
                f.render_widget(render_branch_list(title, &filtered, selected_index), chunks[1]);
                f.render_widget(
                    render_help_bar(&[
                        ("^/k", "Up"),
                        ("v/j", "Down"),
                        ("Enter", "Select"),
                        ("Esc", "Cancel"),
                    ]),
                    chunks[2],
                );
            })
            .into_diagnostic()?;

        if event::poll(Duration::from_millis(50)).into_diagnostic()? {
            if let Event::Key(key) = event::read().into_diagnostic()? {
                match (key.code, key.modifiers) {
                    (KeyCode::Esc, _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
                        return Ok(None);
                    }
                    (KeyCode::Enter, _) => return Ok(filtered.get(selected_index).cloned()),
                    (KeyCode::Up, _) | (KeyCode::Char('k'), KeyModifiers::NONE) => {
                        selected_index = selected_index.saturating_sub(1);
                    }
                    (KeyCode::Down, _) | (KeyCode::Char('j'), KeyModifiers::NONE) => {
                        if selected_index + 1 < filtered.len() {
                            selected_index += 1;
                        }
                    }
                    (KeyCode::Backspace, _) => {
                        query.pop();
                        selected_index = 0;
                    }
                    (KeyCode::Char(c), _) => {
                        query.push(c);
                        selected_index = 0;
                    }
                    _ => {}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn branches(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_empty_query_keeps_backend_order() {
        let all = branches(&["zeta", "alpha", "mid"]);
        assert_eq!(filter_branches(&all, ""), all);
    }

    #[test]
    fn test_query_narrows_candidates() {
        let all = branches(&["main", "feature/login", "feature/logout", "hotfix"]);
        let filtered = filter_branches(&all, "feat");
        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|b| b.starts_with("feature/")));
    }

    #[test]
    fn test_query_without_match_is_empty() {
        let all = branches(&["main", "dev"]);
        assert!(filter_branches(&all, "zzz").is_empty());
    }
}
