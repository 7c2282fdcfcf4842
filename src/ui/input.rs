use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use miette::IntoDiagnostic;
use ratatui::prelude::*;
use ratatui::widgets::*;
use ratatui::{TerminalOptions, Viewport};
use std::io;

/// Inline one-line text prompt. Enter submits whatever was typed (possibly
/// nothing), Esc/Ctrl-C cancels. A default, when given, is shown as a dim
/// hint while the buffer is empty; substituting it is the caller's job via
/// [`or_default`].
pub fn run(label: &str, default: Option<&str>) -> miette::Result<Option<String>> {
    let mut stdout = io::stdout();
    let backend = CrosstermBackend::new(&mut stdout);
    let mut terminal = Terminal::with_options(
        backend,
        TerminalOptions {
            viewport: Viewport::Inline(1),
        },
    )
    .into_diagnostic()?;

    enable_raw_mode().into_diagnostic()?;

    let mut buffer = String::new();

    loop {
        terminal
            .draw(|f| {
                let mut spans = vec![
                    Span::styled(label.to_string(), Style::default().fg(Color::Yellow)),
                    Span::raw(" "),
                    Span::raw(buffer.clone()),
                ];

                if buffer.is_empty()
                    && let Some(hint) = default
                {
                    spans.push(Span::styled(
                        format!("(default: {})", hint),
                        Style::default().fg(Color::DarkGray),
                    ));
                }

                f.render_widget(Paragraph::new(Line::from(spans)), f.area());
            })
            .into_diagnostic()?;

        if let Event::Key(key) = event::read().into_diagnostic()? {
            match (key.code, key.modifiers) {
                (KeyCode::Esc, _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
                    disable_raw_mode().ok();
                    println!();
                    return Ok(None);
                }
                (KeyCode::Enter, _) => {
                    disable_raw_mode().ok();
                    println!();
                    return Ok(Some(buffer));
                }
                (KeyCode::Backspace, _) => {
                    buffer.pop();
                }
                (KeyCode::Char(c), _) => {
                    buffer.push(c);
                }
                _ => {}
            }
        }
    }
}

/// Empty or whitespace-only input falls back to the default; anything
/// else is kept, trimmed.
pub fn or_default(input: &str, default: &str) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        default.to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_or_default_empty() {
        assert_eq!(or_default("", "origin"), "origin");
    }

    #[test]
    fn test_or_default_whitespace() {
        assert_eq!(or_default("   ", "origin"), "origin");
    }

    #[test]
    fn test_or_default_keeps_value() {
        assert_eq!(or_default("upstream", "origin"), "upstream");
    }

    #[test]
    fn test_or_default_trims_value() {
        assert_eq!(or_default("  upstream ", "origin"), "upstream");
    }
}
