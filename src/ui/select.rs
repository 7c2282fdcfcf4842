use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use miette::IntoDiagnostic;
use ratatui::prelude::*;
use ratatui::widgets::*;
use ratatui::{TerminalOptions, Viewport};
use std::io;

/// Inline single-choice menu: the label plus one row per item, rendered
/// below the current cursor position without entering the alternate
/// screen. Returns `None` when the prompt is cancelled.
pub fn run(label: &str, items: &[&str]) -> miette::Result<Option<usize>> {
    let height = items.len() as u16 + 1;
    let mut stdout = io::stdout();
    let backend = CrosstermBackend::new(&mut stdout);
    let mut terminal = Terminal::with_options(
        backend,
        TerminalOptions {
            viewport: Viewport::Inline(height),
        },
    )
    .into_diagnostic()?;

    enable_raw_mode().into_diagnostic()?;

    let mut selected = 0usize;

    loop {
        terminal
            .draw(|f| {
                let mut lines = Vec::with_capacity(items.len() + 1);
                lines.push(Line::styled(
                    label.to_string(),
                    Style::default().fg(Color::Yellow),
                ));

                for (i, item) in items.iter().enumerate() {
                    if i == selected {
                        lines.push(Line::from(vec![
                            Span::styled("> ", Style::default().fg(Color::Cyan)),
                            Span::styled(
                                (*item).to_string(),
                                Style::default().fg(Color::Cyan).bold(),
                            ),
                        ]));
                    } else {
                        lines.push(Line::raw(format!("  {}", item)));
                    }
                }

                f.render_widget(Paragraph::new(lines), f.area());
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
                    return Ok(Some(selected));
                }
                (KeyCode::Up, _) | (KeyCode::Char('k'), KeyModifiers::NONE) => {
                    selected = selected.saturating_sub(1);
                }
                (KeyCode::Down, _) | (KeyCode::Char('j'), KeyModifiers::NONE) => {
                    if selected + 1 < items.len() {
                        selected += 1;
                    }
                }
                _ => {}
            }
        }
    }
}
