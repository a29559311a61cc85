//! Screen composition
//!
//! Lays out the board, the guesses panel and the two footer lines.

use ratatui::{layout::Rect, Frame};

use crate::host::Submission;
use crate::input::InputMode;

use super::components::{
    ConfirmDialog, GridView, GuessList, HelpBar, MessageType, StatusLine, FRAME_WIDTH,
};

const SIDE_MIN_WIDTH: u16 = 24;

/// Everything one frame needs, borrowed from the app
pub struct UiState<'a> {
    pub mode: InputMode,
    pub board: GridView<'a>,
    pub submissions: &'a [Submission],
    pub total_rows: usize,
    pub message: Option<(&'a str, MessageType)>,
    pub confirm_message: Option<&'a str>,
    pub journal: Option<&'a str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub board: Rect,
    pub side: Option<Rect>,
    pub status: Rect,
    pub help: Rect,
}

pub struct Renderer;

impl Renderer {
    /// Split the terminal. The board gets the height the component asked for.
    pub fn layout(area: Rect, frame_height: u16) -> ScreenLayout {
        let content_height = area.height.saturating_sub(2);
        let board = Rect::new(
            area.x,
            area.y,
            FRAME_WIDTH.min(area.width),
            frame_height.min(content_height),
        );

        let side_width = area.width.saturating_sub(board.width + 1);
        let side = (side_width >= SIDE_MIN_WIDTH)
            .then(|| Rect::new(board.right() + 1, area.y, side_width, board.height));

        let footer_y = area.y + content_height;
        ScreenLayout {
            board,
            side,
            status: Rect::new(area.x, footer_y, area.width, 1.min(area.height)),
            help: Rect::new(area.x, footer_y + 1, area.width, 1.min(area.height.saturating_sub(1))),
        }
    }

    pub fn render(frame: &mut Frame, layout: ScreenLayout, state: UiState) {
        frame.render_widget(state.board, layout.board);

        if let Some(side) = layout.side {
            frame.render_widget(GuessList::new(state.submissions), side);
        }

        let mut status = StatusLine::new(state.mode).progress(state.submissions.len(), state.total_rows);
        if let Some((msg, msg_type)) = state.message {
            status = status.message(msg, msg_type);
        }
        if let Some(name) = state.journal {
            status = status.journal(name);
        }
        frame.render_widget(status, layout.status);
        frame.render_widget(HelpBar::for_mode(state.mode), layout.help);

        if let Some(msg) = state.confirm_message {
            frame.render_widget(ConfirmDialog::new(" Confirm ", msg), frame.area());
        }
    }
}
