//! Page information dialog component
//!
//! Displays the open page's description and complexity table.

use crate::action::Action;
use crate::component::Component;
use crate::model::{AlgorithmPage, LanguageTag};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Page information dialog component
pub struct PageInfoDialog {
    /// Cached content lines
    content: Vec<Line<'static>>,
}

impl Default for PageInfoDialog {
    fn default() -> Self {
        Self::new()
    }
}

impl PageInfoDialog {
    pub fn new() -> Self {
        Self {
            content: Vec::new(),
        }
    }

    /// Update content for the open page
    pub fn set_page(&mut self, page: Option<&AlgorithmPage>) {
        self.content = match page {
            Some(page) => render_page_info(page),
            None => vec![
                Line::from(""),
                Line::from(Span::styled(
                    "No page is open",
                    Style::default().fg(Color::DarkGray),
                )),
            ],
        };
    }
}

impl Component for PageInfoDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Char('i') | KeyCode::Char('q') | KeyCode::Esc => Some(Action::CloseModal),
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let margin = 2;
        let overlay_area = Rect::new(
            area.x + margin,
            area.y + margin,
            area.width.saturating_sub(margin * 2),
            area.height.saturating_sub(margin * 2),
        );
        frame.render_widget(Clear, overlay_area);

        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(3)])
            .split(overlay_area);

        let paragraph = Paragraph::new(self.content.clone())
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan))
                    .title(" Algorithm Info ")
                    .title_style(
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    ),
            );

        frame.render_widget(paragraph, main_chunks[0]);

        let help = Paragraph::new(Line::from(vec![
            Span::styled(
                " i/Esc ",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("Close"),
        ]))
        .block(Block::default().borders(Borders::ALL));

        frame.render_widget(help, main_chunks[1]);

        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Helper functions
// ─────────────────────────────────────────────────────────────────────────────

fn section(title: &str) -> Line<'static> {
    Line::from(Span::styled(
        title.to_string(),
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
    ))
}

fn field(label: &str, value: &str) -> Line<'static> {
    Line::from(vec![
        Span::raw(format!("  {:<12}", label)),
        Span::styled(value.to_string(), Style::default().fg(Color::White)),
    ])
}

fn render_page_info(page: &AlgorithmPage) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            page.title.clone(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            page.category.clone(),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
    ];

    if let Some(ref description) = page.description {
        lines.push(section("Description"));
        for paragraph in description.lines() {
            lines.push(Line::from(format!("  {}", paragraph)));
        }
        lines.push(Line::from(""));
    }

    if let Some(ref complexity) = page.complexity {
        lines.push(section("Complexity"));
        lines.push(field("Time", &complexity.time));
        if let Some(ref best) = complexity.best_case {
            lines.push(field("Best case", best));
        }
        lines.push(field("Space", &complexity.space));
        if let Some(ref stable) = complexity.stable {
            lines.push(field("Stable", stable));
        }
        lines.push(Line::from(""));
    }

    lines.push(section("Implementations"));
    for language in page.content.languages() {
        let mut spans = vec![
            Span::styled(
                format!("  {:<12}", language.label()),
                Style::default().fg(language.accent()),
            ),
            Span::styled(page.file_name(language), Style::default().fg(Color::White)),
        ];
        if language == page.default_language {
            spans.push(Span::styled(" (default)", Style::default().fg(Color::DarkGray)));
        }
        lines.push(Line::from(spans));
    }

    let missing: Vec<&str> = LanguageTag::all()
        .into_iter()
        .filter(|l| !page.content.contains(*l))
        .map(|l| l.label())
        .collect();
    if !missing.is_empty() {
        lines.push(Line::from(Span::styled(
            format!("  Not available in {}", missing.join(", ")),
            Style::default().fg(Color::DarkGray),
        )));
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Catalog;

    fn text(lines: &[Line]) -> String {
        lines
            .iter()
            .map(|line| {
                line.spans
                    .iter()
                    .map(|s| s.content.as_ref())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_builtin_page_info_shows_complexity_and_files() {
        let catalog = Catalog::builtin(LanguageTag::Cpp).unwrap();
        let page = catalog.get("bubble-sort").unwrap();
        let rendered = text(&render_page_info(page));

        assert!(rendered.contains("Bubble Sort"));
        assert!(rendered.contains("Complexity"));
        assert!(rendered.contains("O(n²)"));
        assert!(rendered.contains("BubbleSort.java"));
        assert!(rendered.contains("bubble_sort.cpp (default)"));
        assert!(!rendered.contains("Not available"));
    }

    #[test]
    fn test_missing_page_placeholder() {
        let mut dialog = PageInfoDialog::new();
        dialog.set_page(None);
        assert!(text(&dialog.content).contains("No page is open"));
    }
}
