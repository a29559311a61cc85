use crossterm::event::{Event, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};

use crate::grid::{Position, COLS};
use crate::input::{
    keymap::{confirm_action, done_mode_action, edit_mode_action},
    Action, InputMode,
};
use crate::ui::components::{HitTarget, MessageType};

use super::{App, PendingAction};

impl App {
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => self.handle_key_event(key),
            Event::Mouse(mouse) => self.handle_mouse_event(mouse),
            Event::Paste(text) => self.handle_paste(&text),
            _ => {}
        }
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        let action = match self.mode {
            InputMode::Edit => edit_mode_action(key),
            InputMode::Confirm => confirm_action(key),
            InputMode::Done => done_mode_action(key),
        };
        self.execute_action(action);
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        if self.mode != InputMode::Edit {
            return;
        }
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }

        let Some((pos, target)) = self.grid.on_click(mouse.column, mouse.row) else {
            return;
        };
        if self.grid.store().is_active(pos.row()) {
            self.focus_col = pos.col();
        }
        if target == HitTarget::Indicator {
            self.sync();
        }
    }

    /// Pasted text is delivered to the focused cell as one raw input.
    fn handle_paste(&mut self, text: &str) {
        if !self.mode.accepts_text() {
            return;
        }
        self.type_into_focus(text);
    }

    pub fn execute_action(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::Type(raw) => self.type_into_focus(&raw),
            Action::Erase => self.erase_focus(),
            Action::FocusLeft => self.focus_col = self.focus_col.saturating_sub(1),
            Action::FocusRight => self.focus_col = (self.focus_col + 1).min(COLS - 1),
            Action::FocusFirst => self.focus_col = 0,
            Action::FocusLast => self.focus_col = COLS - 1,
            Action::CycleColor => self.cycle_focus_color(),
            Action::Submit => self.submit_row(),
            Action::Restart => self.ask_confirm(PendingAction::Restart),
            Action::Confirm => self.confirm_pending(),
            Action::Cancel => self.close_confirm(),
            Action::Quit => self.should_quit = true,
        }
    }

    fn type_into_focus(&mut self, raw: &str) {
        let Some(pos) = self.focus() else { return };
        if !self.grid.on_text_input(pos, raw) {
            return;
        }
        let filled = !self.grid.store().get_cell(pos).letter.is_empty();
        self.sync();
        if filled {
            self.focus_col = (pos.col() + 1).min(COLS - 1);
        }
    }

    fn erase_focus(&mut self) {
        let Some(pos) = self.focus() else { return };
        // Backspace on an empty cell clears the one before it
        let previous = pos
            .col()
            .checked_sub(1)
            .and_then(|col| Position::new(pos.row(), col).ok());
        let target = match previous {
            Some(prev) if self.grid.store().get_cell(pos).letter.is_empty() => prev,
            _ => pos,
        };
        self.focus_col = target.col();
        if self.grid.on_text_input(target, "") {
            self.sync();
        }
    }

    fn cycle_focus_color(&mut self) {
        let Some(pos) = self.focus() else { return };
        if self.grid.on_indicator_click(pos) {
            self.sync();
        }
    }

    fn submit_row(&mut self) {
        match self.session.submit() {
            Ok(sub) => {
                self.focus_col = 0;
                self.push_snapshot();
                let msg = format!("Submitted {} ({})", sub.guess.to_uppercase(), sub.feedback);
                self.set_message(&msg, MessageType::Success);
            }
            Err(e) => self.set_message(&e.to_string(), MessageType::Warning),
        }
    }

    fn ask_confirm(&mut self, action: PendingAction) {
        self.pending_action = Some(action);
        self.mode = InputMode::Confirm;
    }

    fn close_confirm(&mut self) {
        self.pending_action = None;
        self.mode = InputMode::for_active_row(self.session.active_row());
    }

    fn confirm_pending(&mut self) {
        let Some(action) = self.pending_action.take() else { return };
        match action {
            PendingAction::Restart => {
                self.session.restart();
                self.focus_col = 0;
                self.push_snapshot();
                self.set_message("Board cleared", MessageType::Info);
            }
        }
        self.close_confirm();
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyModifiers};
    use ratatui::layout::Rect;

    use super::*;
    use crate::app::AppConfig;
    use crate::grid::CellColor;
    use crate::host::journal::read_entries;
    use crate::ui::components::grid_view::BoardGeometry;
    use crate::ui::components::{FRAME_HEIGHT, FRAME_WIDTH};

    fn app() -> App {
        App::new(AppConfig::default()).unwrap()
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn color_row(app: &mut App, clicks: usize) {
        press(app, KeyCode::Home);
        for _ in 0..COLS {
            for _ in 0..clicks {
                press(app, KeyCode::Char(' '));
            }
            press(app, KeyCode::Right);
        }
    }

    fn row_colors(app: &App, row: usize) -> Vec<String> {
        app.session.snapshot().colors.unwrap()[row].clone()
    }

    #[test]
    fn test_typing_reaches_host_session() {
        let mut app = app();
        type_str(&mut app, "cr");

        let grid = app.session.snapshot().grid.unwrap();
        assert_eq!(grid[0][0], "C");
        assert_eq!(grid[0][1], "R");
        assert_eq!(row_colors(&app, 0)[0], "gray");
        assert_eq!(app.focus_col, 2);
        assert_eq!(app.grid.store().letters(), app.session.snapshot().grid.unwrap());
    }

    #[test]
    fn test_invalid_key_clears_without_advancing() {
        let mut app = app();
        type_str(&mut app, "a");
        press(&mut app, KeyCode::Left);
        type_str(&mut app, "3");

        assert_eq!(app.session.snapshot().grid.unwrap()[0][0], "");
        assert_eq!(row_colors(&app, 0)[0], "white");
        assert_eq!(app.focus_col, 0);
    }

    #[test]
    fn test_backspace_steps_back() {
        let mut app = app();
        type_str(&mut app, "ab");
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.session.snapshot().grid.unwrap()[0][1], "");
        assert_eq!(app.focus_col, 1);
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.session.snapshot().grid.unwrap()[0][0], "");
    }

    #[test]
    fn test_submit_flow() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        assert!(app.message.as_ref().unwrap().0.contains("Incomplete guess"));

        type_str(&mut app, "crane");
        color_row(&mut app, 1);
        assert_eq!(row_colors(&app, 0), vec!["yellow"; COLS]);
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.session.active_row(), Some(1));
        assert_eq!(app.grid.store().active_row(), Some(1));
        assert_eq!(app.focus(), Some(Position::new(1, 0).unwrap()));
        assert_eq!(app.session.submissions()[0].feedback, "-----");

        // the submitted row is now read-only
        type_str(&mut app, "x");
        assert_eq!(app.session.snapshot().grid.unwrap()[0][0], "C");
    }

    #[test]
    fn test_paste_is_sanitised() {
        let mut app = app();
        app.handle_event(Event::Paste("9?zebra".into()));
        assert_eq!(app.session.snapshot().grid.unwrap()[0][0], "Z");
    }

    #[test]
    fn test_mouse_click_cycles_indicator() {
        let mut app = app();
        let mount = Rect::new(0, 0, FRAME_WIDTH, FRAME_HEIGHT);
        app.grid.set_mount(mount);

        let (x, y) = BoardGeometry::new(mount).indicator_at(Position::new(0, 3).unwrap());
        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: x,
            row: y,
            modifiers: KeyModifiers::NONE,
        };
        app.handle_event(Event::Mouse(click));
        app.handle_event(Event::Mouse(click));

        assert_eq!(app.focus_col, 3);
        assert_eq!(app.grid.store().get_cell(Position::new(0, 3).unwrap()).color, CellColor::Yellow);
        assert_eq!(row_colors(&app, 0)[3], "yellow");

        // inactive row: nothing happens
        let (x, y) = BoardGeometry::new(mount).indicator_at(Position::new(4, 0).unwrap());
        app.handle_event(Event::Mouse(MouseEvent { column: x, row: y, ..click }));
        assert_eq!(row_colors(&app, 4)[0], "white");
        assert_eq!(app.focus_col, 3);
    }

    #[test]
    fn test_restart_needs_confirmation() {
        let mut app = app();
        type_str(&mut app, "q");

        app.handle_key_event(KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL));
        assert_eq!(app.mode, InputMode::Confirm);
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.mode, InputMode::Edit);
        assert_eq!(app.session.snapshot().grid.unwrap()[0][0], "Q");

        app.handle_key_event(KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL));
        press(&mut app, KeyCode::Char('y'));
        assert_eq!(app.mode, InputMode::Edit);
        assert_eq!(app.session.snapshot().grid.unwrap()[0][0], "");
    }

    #[test]
    fn test_done_after_last_row() {
        let mut app = app();
        for _ in 0..6 {
            type_str(&mut app, "mound");
            color_row(&mut app, 1);
            press(&mut app, KeyCode::Enter);
        }
        assert_eq!(app.mode, InputMode::Done);
        assert_eq!(app.focus(), None);
        type_str(&mut app, "a");
        assert!(app.session.snapshot().grid.unwrap().iter().all(|r| r.concat() == "MOUND"));
    }

    #[test]
    fn test_events_journaled() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.jsonl");
        let config = AppConfig { events_path: Some(path.clone()), ..AppConfig::default() };
        let mut app = App::new(config).unwrap();

        type_str(&mut app, "a");
        press(&mut app, KeyCode::Left);
        press(&mut app, KeyCode::Char(' '));

        let entries = read_entries(&path).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].event.color, CellColor::Gray);
        assert_eq!(entries[1].event.color, CellColor::Yellow);
        assert_eq!(entries[1].event.letter, "A");
    }

    #[test]
    fn test_fill_word_and_snapshot_file() {
        let dir = tempfile::tempdir().unwrap();
        let snap = dir.path().join("board.json");
        std::fs::write(&snap, r#"{"grid":[["S","L","A","T","E"]],"colors":[["gray","gray","green","gray","yellow"]],"activeRow":1}"#).unwrap();

        let config = AppConfig {
            snapshot_path: Some(snap),
            fill_word: Some("crane".into()),
            ..AppConfig::default()
        };
        let app = App::new(config).unwrap();

        assert_eq!(app.session.submissions()[0].feedback, "++a+-");
        assert_eq!(app.grid.store().letters()[1].concat(), "CRANE");
        assert!(app.snapshot_json().unwrap().contains("\"activeRow\": 1"));
    }

    #[test]
    fn test_tiny_terminals_draw_without_panic() {
        use ratatui::{backend::TestBackend, Terminal};

        let mut app = app();
        app.handle_key_event(KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL));
        assert_eq!(app.pending_action, Some(PendingAction::Restart));

        let sizes = (0..=4).map(|h| (80, h)).chain((0..=4).map(|w| (w, 24)));
        for (width, height) in sizes {
            let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
            terminal.draw(|frame| app.render(frame)).unwrap();
        }
    }
}
