//! Layout calculations for the UI

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Areas of the login form
pub struct LoginLayout {
    pub title: Rect,
    pub status: Rect,
    pub email: Rect,
    pub password: Rect,
    pub button: Rect,
    pub help: Rect,
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

/// Move `rect` sideways by `offset` cells, staying inside `bounds`
pub fn shift_horizontally(rect: Rect, offset: i16, bounds: Rect) -> Rect {
    let max_x = bounds.right().saturating_sub(rect.width).max(bounds.x);
    let x = rect.x.saturating_add_signed(offset).clamp(bounds.x, max_x);
    Rect { x, ..rect }
}

/// Split the form box into its rows
pub fn calculate_login_layout(form: Rect) -> LoginLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(2), // Title
            Constraint::Length(2), // Status
            Constraint::Length(3), // Email
            Constraint::Length(3), // Password
            Constraint::Length(3), // Button
            Constraint::Min(1),    // Help
        ])
        .split(form);

    // Button is narrower than the inputs, centered
    let button = centered_popup(chunks[4], 16, 3);

    LoginLayout {
        title: chunks[0],
        status: chunks[1],
        email: chunks[2],
        password: chunks[3],
        button,
        help: chunks[5],
    }
}

/// Longest suffix of `text` that fits in `max_width` terminal columns
pub fn visible_tail(text: &str, max_width: usize) -> &str {
    if text.width() <= max_width {
        return text;
    }

    let mut width = 0;
    let mut start = text.len();
    for (idx, c) in text.char_indices().rev() {
        let w = c.width().unwrap_or(0);
        if width + w > max_width {
            break;
        }
        width += w;
        start = idx;
    }
    &text[start..]
}
