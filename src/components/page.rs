//! Page component - the one generic algorithm page
//!
//! Every page in the catalog is drawn by this component from its
//! `CodeViewer`: title, back link, language tabs, file bar with the copy
//! button, and the code itself. The component owns only presentation
//! state (scroll, display mode, click targets); page state lives in the
//! viewer.

use crate::action::Action;
use crate::component::Component;
use crate::components::CodeBlock;
use crate::components::layout::calculate_page_layout;
use crate::model::copy_feedback::CopyState;
use crate::model::ui::DisplayMode;
use crate::model::{CodeViewer, LanguageTag};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Alignment, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Rows moved by PageUp/PageDown when the viewport is unknown
const PAGE_STEP: usize = 20;

pub struct PageComponent {
    /// First visible code line
    pub scroll: usize,
    display_mode: DisplayMode,
    /// Lines in the snippet drawn last frame
    line_count: usize,
    /// Code rows visible last frame
    viewport: usize,
    tab_hits: Vec<(Rect, LanguageTag)>,
    copy_hit: Option<Rect>,
    back_hit: Option<Rect>,
}

impl Default for PageComponent {
    fn default() -> Self {
        Self::new(DisplayMode::default())
    }
}

impl PageComponent {
    pub fn new(display_mode: DisplayMode) -> Self {
        Self {
            scroll: 0,
            display_mode,
            line_count: 0,
            viewport: 0,
            tab_hits: Vec::new(),
            copy_hit: None,
            back_hit: None,
        }
    }

    pub fn display_mode(&self) -> DisplayMode {
        self.display_mode
    }

    pub fn toggle_display_mode(&mut self) -> DisplayMode {
        self.display_mode = self.display_mode.toggled();
        self.display_mode
    }

    /// Back to the top of the snippet; called whenever the snippet changes
    pub fn reset_scroll(&mut self) {
        self.scroll = 0;
    }

    fn max_scroll(&self) -> usize {
        self.line_count.saturating_sub(self.viewport)
    }

    fn page_step(&self) -> usize {
        if self.viewport > 1 {
            self.viewport - 1
        } else {
            PAGE_STEP
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Rendering
    // ─────────────────────────────────────────────────────────────────────────

    /// Draw the page for `viewer`, or a placeholder when nothing is open
    pub fn draw_with_viewer(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        viewer: Option<&CodeViewer>,
    ) -> Result<()> {
        self.tab_hits.clear();
        self.copy_hit = None;
        self.back_hit = None;

        let viewer = match viewer {
            Some(viewer) => viewer,
            None => {
                self.line_count = 0;
                let placeholder = Paragraph::new(Line::from(Span::styled(
                    "No page matches the current search",
                    Style::default().fg(Color::DarkGray),
                )))
                .alignment(Alignment::Center)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(Color::DarkGray)),
                );
                frame.render_widget(placeholder, area);
                return Ok(());
            }
        };

        let inner = Rect {
            x: area.x + 1,
            width: area.width.saturating_sub(2),
            ..area
        };
        let layout = calculate_page_layout(inner);

        self.render_header(frame, layout.header, viewer);
        self.render_tabs(frame, layout.tabs, viewer);
        self.render_file_bar(frame, layout.file_bar, viewer);

        let text = viewer.current_text();
        let selected = viewer.selected();
        self.line_count = CodeBlock::line_count(text);
        self.viewport = CodeBlock::viewport_height(layout.code, self.display_mode);
        self.scroll = self.scroll.min(self.max_scroll());

        let code = CodeBlock::new(text, selected.key())
            .display_mode(self.display_mode)
            .scroll(self.scroll)
            .title(selected.label());
        frame.render_widget(code, layout.code);

        Ok(())
    }

    fn render_header(&mut self, frame: &mut Frame, area: Rect, viewer: &CodeViewer) {
        let page = viewer.page();
        let back_link = page.back_link();

        let lines = vec![
            Line::from(Span::styled(
                page.title.clone(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                back_link.clone(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::UNDERLINED),
            )),
        ];
        frame.render_widget(Paragraph::new(lines), area);

        if area.height > 1 {
            let width = (back_link.width() as u16).min(area.width);
            self.back_hit = Some(Rect::new(area.x, area.y + 1, width, 1));
        }
    }

    fn render_tabs(&mut self, frame: &mut Frame, area: Rect, viewer: &CodeViewer) {
        let selected = viewer.selected();
        let mut spans = Vec::new();
        let mut x = area.x;

        for (i, tag) in viewer.tabs().into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
                x = x.saturating_add(1);
            }
            let label = format!(" {} ", tag.label());
            let width = label.width() as u16;
            let style = if tag == selected {
                Style::default()
                    .fg(Color::Black)
                    .bg(tag.accent())
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            spans.push(Span::styled(label, style));

            let right = area.x.saturating_add(area.width);
            if x < right {
                self.tab_hits
                    .push((Rect::new(x, area.y, width.min(right - x), 1), tag));
            }
            x = x.saturating_add(width);
        }

        let tabs = Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(selected.accent())),
        );
        frame.render_widget(tabs, area);
    }

    fn render_file_bar(&mut self, frame: &mut Frame, area: Rect, viewer: &CodeViewer) {
        let feedback = viewer.feedback();
        let button = format!("[ {} ]", feedback.button_label());
        let button_style = match feedback.state() {
            CopyState::Idle => Style::default().fg(Color::White).bg(Color::DarkGray),
            CopyState::Copied { .. } => Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD),
            CopyState::Sent { .. } => Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            CopyState::Failed { .. } => Style::default()
                .fg(Color::White)
                .bg(Color::Red)
                .add_modifier(Modifier::BOLD),
        };

        let file_name = Paragraph::new(Line::from(vec![
            Span::styled("▸ ", Style::default().fg(viewer.selected().accent())),
            Span::styled(
                viewer.current_file_name(),
                Style::default().fg(Color::Gray),
            ),
        ]));
        frame.render_widget(file_name, area);

        let width = (button.width() as u16).min(area.width);
        let button_area = Rect::new(area.x + area.width - width, area.y, width, area.height.min(1));
        frame.render_widget(
            Paragraph::new(Span::styled(button, button_style)),
            button_area,
        );
        self.copy_hit = Some(button_area);
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Component Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl Component for PageComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            // Scrolling (Ctrl bindings checked before plain letters)
            KeyCode::Char('e') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Action::ScrollDown)
            }
            KeyCode::Char('y') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Action::ScrollUp)
            }
            KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Action::PageDown)
            }
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Action::PageUp)
            }
            KeyCode::PageDown => Some(Action::PageDown),
            KeyCode::PageUp => Some(Action::PageUp),
            KeyCode::Char('J') => Some(Action::ScrollDown),
            KeyCode::Char('K') => Some(Action::ScrollUp),

            // Language tabs
            KeyCode::Tab | KeyCode::Char('l') | KeyCode::Right => Some(Action::NextLanguage),
            KeyCode::BackTab | KeyCode::Char('h') | KeyCode::Left => Some(Action::PrevLanguage),
            KeyCode::Char(c @ '1'..='9') => {
                Some(Action::SelectLanguageIndex(c as usize - '1' as usize))
            }

            // Copy
            KeyCode::Char('y') | KeyCode::Char('c') => Some(Action::CopyCurrent),

            KeyCode::Backspace => Some(Action::BackToCategory),
            KeyCode::Char('b') => Some(Action::ToggleContainer),
            KeyCode::Char('i') => Some(Action::OpenPageInfo),
            _ => None,
        };
        Ok(action)
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        let position = Position::new(mouse.column, mouse.row);
        let action = match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some((_, tag)) = self.tab_hits.iter().find(|(r, _)| r.contains(position)) {
                    Some(Action::SelectLanguage(*tag))
                } else if self.copy_hit.is_some_and(|r| r.contains(position)) {
                    Some(Action::CopyCurrent)
                } else if self.back_hit.is_some_and(|r| r.contains(position)) {
                    Some(Action::BackToCategory)
                } else {
                    None
                }
            }
            MouseEventKind::ScrollDown => Some(Action::ScrollDown),
            MouseEventKind::ScrollUp => Some(Action::ScrollUp),
            _ => None,
        };
        Ok(action)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        let max_scroll = self.max_scroll();

        match action {
            Action::ScrollDown => {
                if self.scroll < max_scroll {
                    self.scroll += 1;
                }
            }
            Action::ScrollUp => {
                self.scroll = self.scroll.saturating_sub(1);
            }
            Action::PageDown => {
                self.scroll = (self.scroll + self.page_step()).min(max_scroll);
            }
            Action::PageUp => {
                self.scroll = self.scroll.saturating_sub(self.page_step());
            }
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, _frame: &mut Frame, _area: Rect) -> Result<()> {
        // This needs the mounted viewer, so we use draw_with_viewer
        Ok(())
    }
}
