//! Layout calculations for the UI

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Main screen layout areas
pub struct MainLayout {
    pub list: Rect,
    pub page: Rect,
    pub status: Option<Rect>,
    pub help: Rect,
}

/// Areas inside the page panel
pub struct PageLayout {
    pub header: Rect,
    pub tabs: Rect,
    pub file_bar: Rect,
    pub code: Rect,
}

/// Calculate centered popup area
pub fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let popup_x = area.x + (area.width.saturating_sub(width)) / 2;
    let popup_y = area.y + (area.height.saturating_sub(height)) / 2;

    Rect::new(
        popup_x,
        popup_y,
        width.min(area.width),
        height.min(area.height),
    )
}

/// Calculate main screen layout
pub fn calculate_main_layout(area: Rect, has_status: bool) -> MainLayout {
    // Main vertical layout: content + (optional status) + help bar
    let main_chunks = if has_status {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(area)
    } else {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(area)
    };

    // Horizontal split: page list (25%) and page panel (75%)
    let horizontal_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(25), Constraint::Percentage(75)])
        .split(main_chunks[0]);

    let (status_area, help_area) = if has_status {
        (Some(main_chunks[1]), main_chunks[2])
    } else {
        (None, main_chunks[1])
    };

    MainLayout {
        list: horizontal_chunks[0],
        page: horizontal_chunks[1],
        status: status_area,
        help: help_area,
    }
}

/// Split the page panel: title + back link, tab strip, file bar, code
pub fn calculate_page_layout(area: Rect) -> PageLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);

    PageLayout {
        header: chunks[0],
        tabs: chunks[1],
        file_bar: chunks[2],
        code: chunks[3],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_popup_is_clamped() {
        let area = Rect::new(0, 0, 20, 10);
        let popup = centered_popup(area, 40, 5);
        assert_eq!(popup.width, 20);
        assert_eq!(popup.height, 5);
        assert_eq!(popup.y, 2);
    }

    #[test]
    fn test_main_layout_reserves_status_line() {
        let area = Rect::new(0, 0, 100, 30);
        let layout = calculate_main_layout(area, true);
        assert_eq!(layout.status.map(|r| r.height), Some(1));
        assert_eq!(layout.help.y, 29);
        assert_eq!(layout.list.width + layout.page.width, 100);

        let layout = calculate_main_layout(area, false);
        assert!(layout.status.is_none());
        assert_eq!(layout.list.height, 29);
    }

    #[test]
    fn test_page_layout_gives_rest_to_code() {
        let layout = calculate_page_layout(Rect::new(0, 0, 80, 24));
        assert_eq!(layout.code.y, 5);
        assert_eq!(layout.code.height, 19);
    }
}
