//! Guess bookkeeping for the host side of the board

use tracing::{debug, info, warn};

use crate::component::{ChangeEvent, RenderSnapshot};
use crate::grid::{sanitize, CellColor, GridStore, Position, COLS, ROWS};

use super::{SessionError, SessionResult};

/// A submitted row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub row: usize,
    pub guess: String,
    pub feedback: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostSession {
    letters: Vec<Vec<String>>,
    colors: Vec<Vec<CellColor>>,
    submissions: Vec<Submission>,
}

impl Default for HostSession {
    fn default() -> Self {
        Self::new()
    }
}

impl HostSession {
    pub fn new() -> Self {
        Self {
            letters: vec![vec![String::new(); COLS]; ROWS],
            colors: vec![vec![CellColor::White; COLS]; ROWS],
            submissions: Vec::new(),
        }
    }

    /// Resume from a saved payload. Rows above the active row count as
    /// already submitted (without an active row, the whole board), up to the
    /// first one that `submit` would have rejected. That row becomes the
    /// active one again.
    pub fn from_snapshot(snapshot: &RenderSnapshot) -> Self {
        let store = GridStore::initialize(
            snapshot.grid.as_deref(),
            snapshot.colors.as_deref(),
            snapshot.active_row,
        );
        let mut session = Self::new();
        session.letters = store.letters();
        for pos in Position::all() {
            session.colors[pos.row()][pos.col()] = store.get_cell(pos).color;
        }

        let claimed = store.active_row().unwrap_or(ROWS);
        for row in 0..claimed {
            if let Err(e) = session.check_complete(row) {
                warn!(row, error = %e, "saved row is incomplete, reopening it");
                break;
            }
            let submission = session.submission(row);
            session.submissions.push(submission);
        }
        session
    }

    pub fn active_row(&self) -> Option<usize> {
        let next = self.submissions.len();
        (next < ROWS).then_some(next)
    }

    pub fn submissions(&self) -> &[Submission] {
        &self.submissions
    }

    /// Record a change reported by the grid component.
    pub fn apply(&mut self, event: &ChangeEvent) {
        if event.row >= ROWS || event.col >= COLS {
            warn!(row = event.row, col = event.col, "change event outside the board dropped");
            return;
        }
        self.letters[event.row][event.col] = event.letter.clone();
        self.colors[event.row][event.col] = event.color;
    }

    /// The payload the component is rendered from
    pub fn snapshot(&self) -> RenderSnapshot {
        RenderSnapshot {
            grid: Some(self.letters.clone()),
            colors: Some(
                self.colors
                    .iter()
                    .map(|row| row.iter().map(|c| c.as_str().to_string()).collect())
                    .collect(),
            ),
            active_row: self.active_row().map(|r| r as i64),
        }
    }

    /// Lock in the active row and open the next one.
    pub fn submit(&mut self) -> SessionResult<Submission> {
        let row = self.active_row().ok_or(SessionError::BoardFull)?;
        self.check_complete(row)?;

        let submission = self.submission(row);
        info!(row, guess = %submission.guess, feedback = %submission.feedback, "guess submitted");
        self.submissions.push(submission.clone());
        Ok(submission)
    }

    /// Put a whole word into the active row, marked all gray.
    pub fn fill_row(&mut self, word: &str) -> SessionResult<()> {
        let row = self.active_row().ok_or(SessionError::BoardFull)?;
        let letters: Vec<String> = word.chars().map(|c| sanitize(&c.to_string()).to_string()).collect();
        if letters.len() != COLS || letters.iter().any(String::is_empty) {
            return Err(SessionError::InvalidWord(word.to_string()));
        }

        debug!(row, word, "row filled");
        self.letters[row] = letters;
        self.colors[row] = vec![CellColor::Gray; COLS];
        Ok(())
    }

    pub fn restart(&mut self) {
        info!("board restarted");
        *self = Self::new();
    }

    fn check_complete(&self, row: usize) -> SessionResult<()> {
        if self.letters[row].iter().any(String::is_empty) {
            return Err(SessionError::IncompleteGuess);
        }
        if self.colors[row].iter().any(|c| !c.is_annotated()) {
            return Err(SessionError::IncompleteFeedback);
        }
        Ok(())
    }

    fn submission(&self, row: usize) -> Submission {
        let guess = self.letters[row].concat().to_lowercase();
        Submission {
            row,
            feedback: encode_feedback(&guess, &self.colors[row]),
            guess,
        }
    }
}

/// Feedback string for a guess, one character per position: the letter for
/// green, `-` for yellow, `+` for gray and `.` for an unannotated cell.
pub fn encode_feedback(guess: &str, colors: &[CellColor]) -> String {
    guess
        .chars()
        .zip(colors)
        .map(|(letter, color)| match color {
            CellColor::Green => letter,
            CellColor::Yellow => '-',
            CellColor::Gray => '+',
            CellColor::White => '.',
        })
        .collect()
}
