//! Application State
//!
//! Hosts the grid component: pushes render payloads to it, drains the
//! messages it sends back and keeps the authoritative session in step.

mod config;
mod input;

use std::fs;
use std::path::Path;
use std::sync::mpsc::{self, Receiver};
use std::time::Instant;

use anyhow::Context;
use ratatui::{layout::Rect, Frame};
use tracing::{info, warn};

use crate::component::{ChangeEvent, ChannelBridge, HostMessage, RenderSnapshot, WordleGrid};
use crate::grid::{Position, COLS, ROWS};
use crate::host::{EventJournal, HostSession};
use crate::input::InputMode;
use crate::ui::components::{MessageType, FRAME_HEIGHT};
use crate::ui::renderer::{Renderer, UiState};

pub use config::{AppConfig, PendingAction};

pub struct App {
    pub config: AppConfig,
    pub session: HostSession,
    pub grid: WordleGrid<ChannelBridge>,
    inbox: Receiver<HostMessage>,
    journal: Option<EventJournal>,
    pub mode: InputMode,
    pub focus_col: usize,
    pub frame_height: u16,
    pub message: Option<(String, MessageType, Instant)>,
    pub pending_action: Option<PendingAction>,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: AppConfig) -> anyhow::Result<Self> {
        let session = match &config.snapshot_path {
            Some(path) => HostSession::from_snapshot(&load_snapshot(path)?),
            None => HostSession::new(),
        };

        let journal = config
            .events_path
            .as_ref()
            .map(EventJournal::open)
            .transpose()
            .context("failed to open event journal")?;

        let (tx, inbox) = mpsc::channel();
        let mut app = Self {
            config,
            session,
            grid: WordleGrid::new(Rect::default(), ChannelBridge::new(tx)),
            inbox,
            journal,
            mode: InputMode::Edit,
            focus_col: 0,
            frame_height: FRAME_HEIGHT,
            message: None,
            pending_action: None,
            should_quit: false,
        };

        if let Some(word) = app.config.fill_word.clone() {
            app.session.fill_row(&word)?;
        }
        app.push_snapshot();
        Ok(app)
    }

    /// Send the session's current payload to the component, which rebuilds
    /// from scratch.
    pub fn push_snapshot(&mut self) {
        let snapshot = self.session.snapshot();
        self.grid.render(&snapshot);
        self.mode = InputMode::for_active_row(self.session.active_row());
        self.focus_col = self.focus_col.min(COLS - 1);
        self.drain_host_messages();
    }

    /// Handle everything the component sent since the last drain. Returns
    /// true when at least one cell value changed.
    fn drain_host_messages(&mut self) -> bool {
        let mut changed = false;
        while let Ok(message) = self.inbox.try_recv() {
            match message {
                HostMessage::Ready => info!("component reported ready"),
                HostMessage::FrameHeight(height) => self.frame_height = height,
                HostMessage::Value(event) => {
                    self.session.apply(&event);
                    self.journal_event(&event);
                    changed = true;
                }
            }
        }
        changed
    }

    fn journal_event(&mut self, event: &ChangeEvent) {
        let Some(journal) = self.journal.as_mut() else { return };
        if let Err(e) = journal.record(event) {
            warn!(error = %e, "could not journal change event");
            self.set_message(&e.to_string(), MessageType::Error);
        }
    }

    /// Apply the component's reports and re-render it from host state.
    fn sync(&mut self) {
        if self.drain_host_messages() {
            self.push_snapshot();
        }
    }

    pub fn focus(&self) -> Option<Position> {
        let row = self.grid.store().active_row()?;
        Position::new(row, self.focus_col).ok()
    }

    pub fn render(&mut self, frame: &mut Frame) {
        self.check_message_expiry();

        let layout = Renderer::layout(frame.area(), self.frame_height);
        self.grid.set_mount(layout.board);

        let journal = self
            .journal
            .as_ref()
            .and_then(|j| j.path().file_name())
            .and_then(|n| n.to_str());

        let state = UiState {
            mode: self.mode,
            board: self.grid.view(self.focus()),
            submissions: self.session.submissions(),
            total_rows: ROWS,
            message: self.message.as_ref().map(|(m, t, _)| (m.as_str(), *t)),
            confirm_message: self.pending_action.map(|a| a.confirm_message()),
            journal,
        };

        Renderer::render(frame, layout, state);
    }

    fn check_message_expiry(&mut self) {
        let expired = self
            .message
            .as_ref()
            .is_some_and(|(_, _, time)| time.elapsed() > self.config.message_timeout);

        if expired {
            self.message = None;
        }
    }

    pub fn set_message(&mut self, msg: &str, msg_type: MessageType) {
        self.message = Some((msg.to_string(), msg_type, Instant::now()));
    }

    /// Final board as the JSON payload a host would resend
    pub fn snapshot_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(&self.session.snapshot())?)
    }
}

fn load_snapshot(path: &Path) -> anyhow::Result<RenderSnapshot> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read snapshot {}", path.display()))?;
    let snapshot = serde_json::from_str(&raw)
        .with_context(|| format!("invalid snapshot JSON in {}", path.display()))?;
    info!(path = %path.display(), "loaded board snapshot");
    Ok(snapshot)
}
