//! Status Line Component
//!
//! Displays mode indicator, messages, and board progress.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use crate::input::InputMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    Info,
    Success,
    Warning,
    Error,
}

impl MessageType {
    pub fn color(&self) -> Color {
        match self {
            Self::Info => Color::Blue,
            Self::Success => Color::Green,
            Self::Warning => Color::Yellow,
            Self::Error => Color::Red,
        }
    }
}

pub struct StatusLine<'a> {
    mode: InputMode,
    message: Option<(&'a str, MessageType)>,
    progress: Option<(usize, usize)>,
    journal: Option<&'a str>,
}

impl<'a> StatusLine<'a> {
    pub fn new(mode: InputMode) -> Self {
        Self {
            mode,
            message: None,
            progress: None,
            journal: None,
        }
    }

    pub fn message(mut self, msg: &'a str, msg_type: MessageType) -> Self {
        self.message = Some((msg, msg_type));
        self
    }

    /// Guesses submitted out of the board's capacity
    pub fn progress(mut self, submitted: usize, total: usize) -> Self {
        self.progress = Some((submitted, total));
        self
    }

    pub fn journal(mut self, name: &'a str) -> Self {
        self.journal = Some(name);
        self
    }
}

fn mode_style(mode: InputMode) -> Style {
    let base = Style::default().fg(Color::Black);
    match mode {
        InputMode::Edit => base.bg(Color::Magenta),
        InputMode::Confirm => base.bg(Color::Red),
        InputMode::Done => base.bg(Color::Green),
    }
}

fn render_mode_indicator(buf: &mut Buffer, area: Rect, mode: InputMode) -> u16 {
    let style = mode_style(mode).add_modifier(Modifier::BOLD);
    let mode_text = format!(" {} ", mode.indicator());
    buf.set_string(area.x, area.y, &mode_text, style);
    mode_text.len() as u16
}

fn render_right_section(buf: &mut Buffer, area: Rect, progress: Option<(usize, usize)>, journal: Option<&str>) {
    let mut spans: Vec<Span> = Vec::new();
    let sep = Span::styled(" | ", Style::default().fg(Color::White).bg(Color::DarkGray));

    if let Some(name) = journal {
        spans.push(Span::styled("Log: ", Style::default().fg(Color::Green).bg(Color::DarkGray)));
        spans.push(Span::styled(name, Style::default().fg(Color::Gray).bg(Color::DarkGray)));
    }

    if let Some((submitted, total)) = progress {
        if !spans.is_empty() { spans.push(sep); }
        spans.push(Span::styled(
            submitted.to_string(),
            Style::default().fg(Color::Cyan).bg(Color::DarkGray).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled("/", Style::default().fg(Color::White).bg(Color::DarkGray)));
        spans.push(Span::styled(total.to_string(), Style::default().fg(Color::Cyan).bg(Color::DarkGray)));
    }

    let line = Line::from(spans);
    let width = line.width() as u16;
    let x = area.x + area.width.saturating_sub(width + 1);
    buf.set_line(x, area.y, &line, width);
}

impl Widget for StatusLine<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        buf.set_style(area, Style::default().bg(Color::DarkGray));

        let x = area.x + render_mode_indicator(buf, area, self.mode) + 1;
        if let Some((msg, msg_type)) = self.message {
            buf.set_string(x, area.y, msg, Style::default().bg(Color::DarkGray).fg(msg_type.color()));
        }

        render_right_section(buf, area, self.progress, self.journal);
    }
}

pub struct HelpBar<'a> {
    hints: Vec<(&'a str, &'a str)>,
}

impl<'a> HelpBar<'a> {
    pub fn new(hints: Vec<(&'a str, &'a str)>) -> Self {
        Self { hints }
    }

    pub fn for_mode(mode: InputMode) -> Self {
        Self::new(hints_for_mode(mode))
    }
}

fn hints_for_mode(mode: InputMode) -> Vec<(&'static str, &'static str)> {
    match mode {
        InputMode::Edit => vec![
            ("a-z", "letter"),
            ("space/click ●", "color"),
            ("←/→", "move"),
            ("enter", "submit"),
            ("ctrl+r", "restart"),
            ("esc", "quit"),
        ],
        InputMode::Confirm => vec![
            ("y", "yes"),
            ("n", "no"),
        ],
        InputMode::Done => vec![
            ("ctrl+r", "restart"),
            ("esc", "quit"),
        ],
    }
}

fn build_hint_spans<'a>(hints: &[(&'a str, &'a str)]) -> Vec<Span<'a>> {
    let mut spans: Vec<Span> = Vec::new();

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD)));
        spans.push(Span::styled(format!(" {}", desc), Style::default().fg(Color::Gray)));
    }

    spans
}

impl Widget for HelpBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let spans = build_hint_spans(&self.hints);
        let line = Line::from(spans);
        buf.set_line(area.x, area.y, &line, area.width);
    }
}
