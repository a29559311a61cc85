use std::path::PathBuf;
use std::time::Duration;

pub struct AppConfig {
    /// Board to start from instead of an empty one
    pub snapshot_path: Option<PathBuf>,
    /// Append every change event to this JSON-lines file
    pub events_path: Option<PathBuf>,
    pub log_path: PathBuf,
    /// Word put into the active row at startup
    pub fill_word: Option<String>,
    pub print_snapshot: bool,
    pub message_timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        let log_path = data_dir().join("wordle-grid.log");

        Self {
            snapshot_path: None,
            events_path: None,
            log_path,
            fill_word: None,
            print_snapshot: false,
            message_timeout: Duration::from_secs(5),
        }
    }
}

pub fn data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("wordle-grid")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingAction {
    Restart,
}

impl PendingAction {
    pub fn confirm_message(&self) -> &'static str {
        match self {
            Self::Restart => "Clear the board and start over?",
        }
    }
}
