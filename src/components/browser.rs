//! Browser component - Main application screen
//!
//! Displays the catalog grouped by category next to the open page.
//! Owns list navigation and search state.

use crate::action::Action;
use crate::component::Component;
use crate::components::calculate_main_layout;
use crate::components::page::PageComponent;
use crate::model::ui::CopyNotice;
use crate::model::{AlgorithmPage, Catalog, CodeViewer};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

// ═══════════════════════════════════════════════════════════════════════════════
// Display List Item
// ═══════════════════════════════════════════════════════════════════════════════

/// Display list item for grouped page display
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayListItem {
    /// Category header (not selectable)
    Header(String),
    /// Page reference by index in the catalog
    Page(usize),
}

// ═══════════════════════════════════════════════════════════════════════════════
// Browser Component
// ═══════════════════════════════════════════════════════════════════════════════

pub struct BrowserComponent {
    /// List selection state (index into the display list)
    pub list_state: ListState,

    /// Search query string
    pub search_query: String,

    /// Whether search mode is active
    pub search_mode: bool,
}

impl Default for BrowserComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl BrowserComponent {
    pub fn new() -> Self {
        Self {
            list_state: ListState::default(),
            search_query: String::new(),
            search_mode: false,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Filtering & Display
    // ─────────────────────────────────────────────────────────────────────────

    /// Catalog indices of pages matching the search query
    pub fn filtered_pages(&self, catalog: &Catalog) -> Vec<usize> {
        let query = self.search_query.to_lowercase();
        catalog
            .pages()
            .iter()
            .enumerate()
            .filter(|(_, page)| query.is_empty() || page.title.to_lowercase().contains(&query))
            .map(|(i, _)| i)
            .collect()
    }

    /// Build display items list
    /// Returns the items and a list of selectable indices
    pub fn build_display_list(&self, catalog: &Catalog) -> (Vec<DisplayListItem>, Vec<usize>) {
        let filtered = self.filtered_pages(catalog);
        let mut items = Vec::new();
        let mut selectable_indices = Vec::new();

        for category in catalog.categories() {
            let members: Vec<usize> = filtered
                .iter()
                .copied()
                .filter(|&i| catalog.pages()[i].category == category)
                .collect();
            if members.is_empty() {
                continue;
            }

            items.push(DisplayListItem::Header(category.to_string()));
            for page_index in members {
                selectable_indices.push(items.len());
                items.push(DisplayListItem::Page(page_index));
            }
        }

        (items, selectable_indices)
    }

    /// Get the currently selected page
    pub fn selected_page<'a>(&self, catalog: &'a Catalog) -> Option<&'a AlgorithmPage> {
        let (display_items, _) = self.build_display_list(catalog);
        let display_idx = self.list_state.selected()?;

        match display_items.get(display_idx)? {
            DisplayListItem::Page(page_idx) => catalog.pages().get(*page_idx),
            DisplayListItem::Header(_) => None,
        }
    }

    /// Select the page with `slug` if it is visible
    pub fn select_slug(&mut self, catalog: &Catalog, slug: &str) -> bool {
        let (display_items, _) = self.build_display_list(catalog);
        let found = display_items.iter().position(|item| match item {
            DisplayListItem::Page(i) => catalog.pages()[*i].slug == slug,
            DisplayListItem::Header(_) => false,
        });
        match found {
            Some(idx) => {
                self.list_state.select(Some(idx));
                true
            }
            None => false,
        }
    }

    /// Select the first visible page of `category`
    pub fn select_category(&mut self, catalog: &Catalog, category: &str) -> bool {
        let (display_items, _) = self.build_display_list(catalog);
        let found = display_items.iter().position(|item| match item {
            DisplayListItem::Page(i) => catalog.pages()[*i].category == category,
            DisplayListItem::Header(_) => false,
        });
        match found {
            Some(idx) => {
                self.list_state.select(Some(idx));
                true
            }
            None => false,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────────

    /// Select next item in the list (skipping headers)
    pub fn next(&mut self, catalog: &Catalog) {
        let (_, selectable_indices) = self.build_display_list(catalog);
        let Some(&first) = selectable_indices.first() else {
            return;
        };

        let current = self.list_state.selected().unwrap_or(0);

        let next_idx = selectable_indices
            .iter()
            .find(|&&idx| idx > current)
            .copied()
            .unwrap_or(first); // Wrap to first

        self.list_state.select(Some(next_idx));
    }

    /// Select previous item in the list (skipping headers)
    pub fn previous(&mut self, catalog: &Catalog) {
        let (_, selectable_indices) = self.build_display_list(catalog);
        let Some(&last) = selectable_indices.last() else {
            return;
        };

        let current = self.list_state.selected().unwrap_or(0);

        let prev_idx = selectable_indices
            .iter()
            .rev()
            .find(|&&idx| idx < current)
            .copied()
            .unwrap_or(last); // Wrap to last

        self.list_state.select(Some(prev_idx));
    }

    /// Select the first selectable item
    pub fn select_first(&mut self, catalog: &Catalog) {
        let (_, selectable_indices) = self.build_display_list(catalog);
        self.list_state.select(selectable_indices.first().copied());
    }

    /// Select the last selectable item
    pub fn select_last(&mut self, catalog: &Catalog) {
        let (_, selectable_indices) = self.build_display_list(catalog);
        if let Some(&last_idx) = selectable_indices.last() {
            self.list_state.select(Some(last_idx));
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Search
    // ─────────────────────────────────────────────────────────────────────────

    pub fn enter_search_mode(&mut self) {
        self.search_mode = true;
    }

    /// Leave search mode, keeping the filter
    pub fn exit_search_mode(&mut self) {
        self.search_mode = false;
    }

    /// Leave search mode and drop the filter
    pub fn cancel_search(&mut self, catalog: &Catalog) {
        self.search_mode = false;
        self.set_query(catalog, String::new());
    }

    /// Add character to search query
    pub fn search_input(&mut self, c: char, catalog: &Catalog) {
        let mut query = self.search_query.clone();
        query.push(c);
        self.set_query(catalog, query);
    }

    /// Remove last character from search query
    pub fn search_backspace(&mut self, catalog: &Catalog) {
        let mut query = self.search_query.clone();
        query.pop();
        self.set_query(catalog, query);
    }

    /// Change the filter, keeping the selected page when it stays visible
    fn set_query(&mut self, catalog: &Catalog, query: String) {
        let selected = self.selected_page(catalog).map(|p| p.slug.clone());
        self.search_query = query;
        let kept = selected
            .map(|slug| self.select_slug(catalog, &slug))
            .unwrap_or(false);
        if !kept {
            self.select_first(catalog);
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Component Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl Component for BrowserComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            // Navigation
            KeyCode::Char('j') | KeyCode::Down => Some(Action::NextPage),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::PrevPage),
            KeyCode::Char('g') | KeyCode::Home => Some(Action::FirstPage),
            KeyCode::Char('G') | KeyCode::End => Some(Action::LastPage),

            // Modals
            KeyCode::Char('q') => Some(Action::OpenQuitDialog),
            KeyCode::Char('?') => Some(Action::OpenHelp),

            // Search
            KeyCode::Char('/') => Some(Action::EnterSearchMode),
            KeyCode::Esc if !self.search_query.is_empty() => Some(Action::CancelSearch),

            _ => None,
        };
        Ok(action)
    }

    fn update(&mut self, _action: Action) -> Result<Option<Action>> {
        // Updates are handled by App which owns the catalog
        Ok(None)
    }

    fn draw(&mut self, _frame: &mut Frame, _area: Rect) -> Result<()> {
        // Drawing is done through draw_browser_screen which takes full context
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Rendering Functions
// ═══════════════════════════════════════════════════════════════════════════════

/// Context needed for rendering the browser screen
pub struct BrowserRenderContext<'a> {
    pub catalog: &'a Catalog,
    pub viewer: Option<&'a CodeViewer>,
    pub error: Option<&'a str>,
    pub status_message: Option<&'a str>,
    pub copy_notice: Option<&'a CopyNotice>,
}

/// Draw the browser screen
pub fn draw_browser_screen(
    frame: &mut Frame,
    area: Rect,
    browser: &mut BrowserComponent,
    page: &mut PageComponent,
    ctx: &BrowserRenderContext,
) -> Result<()> {
    let layout = calculate_main_layout(area, true);

    render_page_list(frame, layout.list, browser, ctx.catalog);
    page.draw_with_viewer(frame, layout.page, ctx.viewer)?;

    if let Some(status_area) = layout.status {
        render_status_bar(frame, status_area, ctx);
    }
    render_help_bar(frame, layout.help, browser);

    Ok(())
}

fn render_page_list(frame: &mut Frame, area: Rect, browser: &mut BrowserComponent, catalog: &Catalog) {
    let (display_items, selectable) = browser.build_display_list(catalog);

    let items: Vec<ListItem> = display_items
        .iter()
        .map(|item| match item {
            DisplayListItem::Header(category) => ListItem::new(Line::from(vec![
                Span::styled(
                    format!("── {} ", category),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled("──────────", Style::default().fg(Color::DarkGray)),
            ])),
            DisplayListItem::Page(idx) => {
                let title = catalog
                    .pages()
                    .get(*idx)
                    .map(|p| p.title.as_str())
                    .unwrap_or_default();
                ListItem::new(Line::from(Span::styled(
                    format!("  {}", title),
                    Style::default().fg(Color::White),
                )))
            }
        })
        .collect();

    let mut title = format!(" Algorithms ({}) ", selectable.len());
    if !browser.search_query.is_empty() {
        title = format!("{}[/{}] ", title, browser.search_query);
    }

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .highlight_style(
            Style::default()
                .bg(Color::Blue)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    frame.render_stateful_widget(list, area, &mut browser.list_state);
}

fn render_status_bar(frame: &mut Frame, area: Rect, ctx: &BrowserRenderContext) {
    let mut spans = vec![];

    if let Some(viewer) = ctx.viewer {
        let page = viewer.page();
        spans.push(Span::styled(
            format!(" {} ", page.category),
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(
            format!(" {} ", viewer.selected().label()),
            Style::default()
                .fg(Color::Black)
                .bg(viewer.selected().accent())
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(
            page.title.clone(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ));
    }

    // Error message replaces the page info
    if let Some(error) = ctx.error {
        spans.clear();
        spans.push(Span::styled(
            format!(" Error: {} ", error),
            Style::default().fg(Color::Red),
        ));
    }

    if let Some(status) = ctx.status_message {
        spans.push(Span::styled(
            format!(" {} ", status),
            Style::default().fg(Color::Yellow),
        ));
    }

    if let Some(notice) = ctx.copy_notice {
        let color = match notice {
            CopyNotice::Copied(_) => Color::Green,
            CopyNotice::Sent(_) => Color::Yellow,
            CopyNotice::Failed(_) => Color::Red,
        };
        spans.push(Span::styled(
            format!(" {} ", notice.text()),
            Style::default().fg(color),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn key_hint(key: &str, color: Color) -> Span<'static> {
    Span::styled(
        format!(" {} ", key),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )
}

fn render_help_bar(frame: &mut Frame, area: Rect, browser: &BrowserComponent) {
    let help_spans = if browser.search_mode {
        vec![
            key_hint("Esc", Color::Yellow),
            Span::raw("Clear  "),
            key_hint("Enter", Color::Green),
            Span::raw("Keep  "),
            Span::styled(
                format!("Search: {}", browser.search_query),
                Style::default().fg(Color::Cyan),
            ),
        ]
    } else {
        vec![
            key_hint("q", Color::Yellow),
            Span::raw("Quit "),
            key_hint("j/k", Color::Cyan),
            Span::raw("Page "),
            key_hint("h/l", Color::Cyan),
            Span::raw("Language "),
            key_hint("y", Color::Green),
            Span::raw("Copy "),
            key_hint("b", Color::Cyan),
            Span::raw("Container "),
            key_hint("i", Color::Cyan),
            Span::raw("Info "),
            key_hint("/", Color::Cyan),
            Span::raw("Search "),
            key_hint("?", Color::White),
            Span::raw("Help"),
        ]
    };

    frame.render_widget(Paragraph::new(Line::from(help_spans)), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{LanguageTag, PageSpec};
    use std::collections::BTreeMap;

    fn page(slug: &str, title: &str, category: &str) -> AlgorithmPage {
        let snippets: BTreeMap<LanguageTag, String> =
            [(LanguageTag::Python, format!("# {}\n", slug))].into_iter().collect();
        AlgorithmPage::from_spec(
            PageSpec {
                slug: slug.to_string(),
                title: title.to_string(),
                category: category.to_string(),
                file_stem: None,
                default_language: None,
                description: None,
                complexity: None,
                snippets,
            },
            LanguageTag::Python,
        )
        .unwrap()
    }

    fn catalog() -> Catalog {
        Catalog::from_pages(vec![
            page("bubble-sort", "Bubble Sort", "Sorting Algorithms"),
            page("linear-search", "Linear Search", "Searching Algorithms"),
            page("selection-sort", "Selection Sort", "Sorting Algorithms"),
        ])
    }

    fn selected_slug(browser: &BrowserComponent, catalog: &Catalog) -> Option<String> {
        browser.selected_page(catalog).map(|p| p.slug.clone())
    }

    #[test]
    fn test_display_list_groups_by_category_in_catalog_order() {
        let catalog = catalog();
        let browser = BrowserComponent::new();
        let (items, selectable) = browser.build_display_list(&catalog);

        assert_eq!(
            items,
            vec![
                DisplayListItem::Header("Sorting Algorithms".to_string()),
                DisplayListItem::Page(0),
                DisplayListItem::Page(2),
                DisplayListItem::Header("Searching Algorithms".to_string()),
                DisplayListItem::Page(1),
            ]
        );
        assert_eq!(selectable, vec![1, 2, 4]);
    }

    #[test]
    fn test_navigation_skips_headers_and_wraps() {
        let catalog = catalog();
        let mut browser = BrowserComponent::new();
        browser.select_first(&catalog);
        assert_eq!(selected_slug(&browser, &catalog).as_deref(), Some("bubble-sort"));

        browser.next(&catalog);
        assert_eq!(selected_slug(&browser, &catalog).as_deref(), Some("selection-sort"));
        browser.next(&catalog);
        assert_eq!(selected_slug(&browser, &catalog).as_deref(), Some("linear-search"));
        browser.next(&catalog);
        assert_eq!(selected_slug(&browser, &catalog).as_deref(), Some("bubble-sort"));

        browser.previous(&catalog);
        assert_eq!(selected_slug(&browser, &catalog).as_deref(), Some("linear-search"));

        browser.select_first(&catalog);
        browser.select_last(&catalog);
        assert_eq!(selected_slug(&browser, &catalog).as_deref(), Some("linear-search"));
    }

    #[test]
    fn test_search_filters_case_insensitively_and_keeps_selection() {
        let catalog = catalog();
        let mut browser = BrowserComponent::new();
        browser.select_first(&catalog);
        browser.next(&catalog); // selection-sort

        for c in "SORT".chars() {
            browser.search_input(c, &catalog);
        }
        assert_eq!(browser.filtered_pages(&catalog), vec![0, 2]);
        assert_eq!(selected_slug(&browser, &catalog).as_deref(), Some("selection-sort"));

        browser.search_input('x', &catalog);
        assert!(browser.filtered_pages(&catalog).is_empty());
        assert_eq!(browser.selected_page(&catalog), None);

        browser.search_backspace(&catalog);
        assert_eq!(selected_slug(&browser, &catalog).as_deref(), Some("bubble-sort"));
    }

    #[test]
    fn test_cancel_search_clears_filter() {
        let catalog = catalog();
        let mut browser = BrowserComponent::new();
        browser.select_first(&catalog);
        browser.enter_search_mode();
        browser.search_input('l', &catalog);
        browser.search_input('i', &catalog);
        assert_eq!(selected_slug(&browser, &catalog).as_deref(), Some("linear-search"));

        browser.cancel_search(&catalog);
        assert!(!browser.search_mode);
        assert!(browser.search_query.is_empty());
        assert_eq!(browser.filtered_pages(&catalog).len(), 3);
        assert_eq!(selected_slug(&browser, &catalog).as_deref(), Some("linear-search"));
    }

    #[test]
    fn test_select_category_picks_first_page() {
        let catalog = catalog();
        let mut browser = BrowserComponent::new();
        browser.select_last(&catalog);
        assert!(browser.select_category(&catalog, "Sorting Algorithms"));
        assert_eq!(selected_slug(&browser, &catalog).as_deref(), Some("bubble-sort"));
        assert!(!browser.select_category(&catalog, "Graph Algorithms"));
    }
}
