//! Splash screen component
//!
//! Displays the algocode logo briefly before transitioning to the main app.

use crate::action::Action;
use crate::component::Component;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph},
    Frame,
};
use std::time::{Duration, Instant};

const ACCENT: Color = Color::Rgb(86, 156, 214);
const SLASH: Color = Color::Rgb(220, 220, 170);

/// Splash screen component
pub struct SplashComponent {
    /// When the splash screen was shown
    start_time: Option<Instant>,
    /// Duration to show splash before auto-advancing
    duration: Duration,
}

impl Default for SplashComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl SplashComponent {
    pub fn new() -> Self {
        Self {
            start_time: None,
            duration: Duration::from_millis(1200),
        }
    }

    /// Check if splash duration has elapsed
    pub fn is_complete(&self) -> bool {
        self.is_complete_at(Instant::now())
    }

    fn is_complete_at(&self, now: Instant) -> bool {
        self.start_time
            .map(|t| now.saturating_duration_since(t) >= self.duration)
            .unwrap_or(false)
    }

    /// A "</>" glyph; `#` is drawn in the accent colour, `%` in the slash colour
    fn get_logo() -> Vec<&'static str> {
        vec![
            "      ##            %%            ##      ",
            "    ##             %%               ##    ",
            "  ##              %%                  ##  ",
            "    ##           %%                 ##    ",
            "      ##        %%                ##      ",
        ]
    }
}

impl Component for SplashComponent {
    fn init(&mut self) -> Result<()> {
        self.start_time = Some(Instant::now());
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        // Any key press skips the splash screen
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Ok(Some(Action::ForceQuit))
            }
            KeyCode::Char('q') => Ok(Some(Action::ForceQuit)),
            _ => Ok(Some(Action::SplashComplete)),
        }
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        if action == Action::Tick && self.is_complete() {
            return Ok(Some(Action::SplashComplete));
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let bg_black = Color::Rgb(0, 0, 0);

        frame.render_widget(Clear, area);
        frame.render_widget(
            Block::default().style(Style::default().bg(bg_black)),
            area,
        );

        let logo_lines = Self::get_logo();
        let logo_height = logo_lines.len() as u16;
        let logo_width = logo_lines
            .iter()
            .map(|l| l.chars().count())
            .max()
            .unwrap_or(0) as u16;

        // Center the logo
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length((area.height.saturating_sub(logo_height + 6)) / 2),
                Constraint::Length(logo_height),
                Constraint::Length(2),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(area);

        let logo: Vec<Line> = logo_lines
            .iter()
            .map(|line| {
                let spans: Vec<Span> = line
                    .chars()
                    .map(|c| {
                        let style = match c {
                            '#' => Style::default().fg(ACCENT).bg(bg_black),
                            '%' => Style::default().fg(SLASH).bg(bg_black),
                            _ => Style::default().fg(bg_black).bg(bg_black),
                        };
                        Span::styled(c.to_string(), style)
                    })
                    .collect();
                Line::from(spans)
            })
            .collect();

        let centered_x = area.x + (area.width.saturating_sub(logo_width)) / 2;
        let logo_rect = Rect::new(
            centered_x,
            chunks[1].y,
            logo_width.min(area.width),
            logo_height.min(chunks[1].height),
        );
        frame.render_widget(Paragraph::new(logo), logo_rect);

        let title = "algocode";
        let title_line = Line::from(vec![
            Span::styled(
                "algo",
                Style::default()
                    .fg(ACCENT)
                    .bg(bg_black)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                "code",
                Style::default()
                    .fg(Color::White)
                    .bg(bg_black)
                    .add_modifier(Modifier::BOLD),
            ),
        ]);
        let title_width = (title.len() as u16).min(area.width);
        let title_x = area.x + (area.width.saturating_sub(title_width)) / 2;
        frame.render_widget(
            Paragraph::new(title_line),
            Rect::new(title_x, chunks[3].y, title_width, chunks[3].height),
        );

        let subtitle = "Algorithms in C++, C, Python and Java";
        let subtitle_width = (subtitle.len() as u16).min(area.width);
        let subtitle_x = area.x + (area.width.saturating_sub(subtitle_width)) / 2;
        frame.render_widget(
            Paragraph::new(Span::styled(
                subtitle,
                Style::default().fg(Color::DarkGray).bg(bg_black),
            )),
            Rect::new(subtitle_x, chunks[4].y, subtitle_width, chunks[4].height),
        );

        Ok(())
    }
}
