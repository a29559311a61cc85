//! Input Modes
//!
//! Which set of keys is live depends on whether a row is open for editing.

/// Input mode enum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// A row is open for letters and colors
    Edit,
    /// Waiting on a yes/no answer
    Confirm,
    /// No editable row left
    Done,
}

impl InputMode {
    pub fn indicator(&self) -> &'static str {
        match self {
            Self::Edit => "EDIT",
            Self::Confirm => "CONFIRM",
            Self::Done => "DONE",
        }
    }

    /// Mode to return to once a dialog closes
    pub fn for_active_row(active_row: Option<usize>) -> Self {
        if active_row.is_some() { Self::Edit } else { Self::Done }
    }

    pub fn accepts_text(&self) -> bool {
        matches!(self, Self::Edit)
    }
}
