//! Layout helpers and common rendering utilities

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

/// Fixed sized rect centered in `r`, leaving the two footer lines free
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let available_height = r.height.saturating_sub(2);
    let remainder = (available_height.saturating_sub(height)) % 2;
    let adjusted_height = height + remainder;
    let y = r.y + (available_height.saturating_sub(adjusted_height)) / 2;
    Rect::new(x, y, width.min(r.width), adjusted_height.min(r.height))
}

pub fn create_popup_block(title: &str, color: Color) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color))
        .style(Style::default().bg(Color::Black))
}

pub fn render_empty_message(area: Rect, buf: &mut Buffer, msg: &str) {
    Paragraph::new(msg)
        .style(Style::default().fg(Color::DarkGray))
        .render(area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_fixed() {
        let r = centered_rect_fixed(40, 6, Rect::new(0, 0, 100, 32));
        assert_eq!(r.width, 40);
        assert_eq!(r.x, 30);
        assert_eq!(r.y + r.height / 2, 15);
    }

    #[test]
    fn test_centered_rect_clamped() {
        let r = centered_rect_fixed(40, 6, Rect::new(0, 0, 20, 4));
        assert_eq!(r.width, 20);
        assert!(r.height <= 4);
    }
}
