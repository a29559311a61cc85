//! Submitted guesses panel

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use crate::grid::CellColor;
use crate::host::Submission;

use super::grid_view::palette;
use super::layout::{create_popup_block, render_empty_message};

pub struct GuessList<'a> {
    submissions: &'a [Submission],
}

impl<'a> GuessList<'a> {
    pub fn new(submissions: &'a [Submission]) -> Self {
        Self { submissions }
    }
}

/// Annotation a feedback character stands for
fn feedback_color(c: char) -> CellColor {
    match c {
        '-' => CellColor::Yellow,
        '+' => CellColor::Gray,
        '.' => CellColor::White,
        _ => CellColor::Green,
    }
}

fn submission_line(sub: &Submission) -> Line<'_> {
    let mut spans = vec![Span::styled(
        format!("{:>2}  ", sub.row + 1),
        Style::default().fg(Color::DarkGray),
    )];

    for (letter, fb) in sub.guess.chars().zip(sub.feedback.chars()) {
        let (bg, fg) = palette(feedback_color(fb));
        spans.push(Span::styled(
            format!(" {} ", letter.to_ascii_uppercase()),
            Style::default().bg(bg).fg(fg).add_modifier(Modifier::BOLD),
        ));
    }

    spans.push(Span::styled(format!("  {}", sub.feedback), Style::default().fg(Color::Gray)));
    Line::from(spans)
}

impl Widget for GuessList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = create_popup_block(" Guesses ", Color::Cyan);
        let inner = block.inner(area);
        block.render(area, buf);

        if self.submissions.is_empty() {
            render_empty_message(inner, buf, "No guesses submitted yet");
            return;
        }

        for (i, sub) in self.submissions.iter().enumerate().take(inner.height as usize) {
            buf.set_line(inner.x, inner.y + i as u16, &submission_line(sub), inner.width);
        }
    }
}
