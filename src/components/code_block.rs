//! Read-only, line-numbered code view
//!
//! `CodeBlock` is a plain widget: it owns no state and draws whatever text,
//! language and display mode it is given. Scroll position lives with the
//! caller.

use crate::components::code_highlight::highlight_code;
use crate::model::ui::DisplayMode;
use ratatui::{
    buffer::Buffer,
    layout::{Margin, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{
        Block, BorderType, Borders, Padding, Paragraph, Scrollbar, ScrollbarOrientation,
        ScrollbarState, StatefulWidget, Widget,
    },
};

const GUTTER_COLOR: Color = Color::Rgb(133, 133, 133);
const BORDER_COLOR: Color = Color::Rgb(68, 68, 68);

pub struct CodeBlock<'a> {
    text: &'a str,
    language: &'a str,
    mode: DisplayMode,
    scroll: usize,
    title: Option<String>,
}

impl<'a> CodeBlock<'a> {
    pub fn new(text: &'a str, language: &'a str) -> Self {
        Self {
            text,
            language,
            mode: DisplayMode::Container,
            scroll: 0,
            title: None,
        }
    }

    pub fn display_mode(mut self, mode: DisplayMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn scroll(mut self, scroll: usize) -> Self {
        self.scroll = scroll;
        self
    }

    /// Title drawn on the container border (ignored in bare mode)
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Number of display lines `text` occupies
    pub fn line_count(text: &str) -> usize {
        text.lines().count().max(1)
    }

    /// Rows available for code once the container is drawn around `area`
    pub fn viewport_height(area: Rect, mode: DisplayMode) -> usize {
        match mode {
            DisplayMode::Container => area.height.saturating_sub(2) as usize,
            DisplayMode::Bare => area.height as usize,
        }
    }

    fn numbered_lines(&self) -> Vec<Line<'static>> {
        let highlighted = highlight_code(self.text, self.language);
        let width = highlighted.len().to_string().len();
        let gutter_style = Style::default().fg(GUTTER_COLOR);

        highlighted
            .into_iter()
            .enumerate()
            .map(|(i, line)| {
                let mut spans = Vec::with_capacity(line.spans.len() + 1);
                spans.push(Span::styled(
                    format!("{:>width$} │ ", i + 1, width = width),
                    gutter_style,
                ));
                spans.extend(line.spans);
                Line::from(spans)
            })
            .collect()
    }
}

impl Widget for CodeBlock<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = self.numbered_lines();
        let total = lines.len();
        let visible = Self::viewport_height(area, self.mode);
        let max_scroll = total.saturating_sub(visible);
        let scroll = self.scroll.min(max_scroll);

        let mut paragraph = Paragraph::new(lines).scroll((scroll as u16, 0));
        if self.mode == DisplayMode::Container {
            let mut block = Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(BORDER_COLOR))
                .padding(Padding::horizontal(1));
            if let Some(title) = self.title {
                block = block.title(format!(" {} ", title));
            }
            paragraph = paragraph.block(block);
        }
        paragraph.render(area, buf);

        if total > visible {
            let track = match self.mode {
                DisplayMode::Container => area.inner(Margin {
                    vertical: 1,
                    horizontal: 0,
                }),
                DisplayMode::Bare => area,
            };
            let mut state = ScrollbarState::new(max_scroll).position(scroll);
            Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(Some("↑"))
                .end_symbol(Some("↓"))
                .render(track, buf, &mut state);
        }
    }
}
