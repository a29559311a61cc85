//! Interaction Controller
//!
//! Pure state transitions for letter edits and color clicks. Nothing here
//! paints or talks to the host; callers get back the event to emit.

use tracing::debug;

use crate::grid::{sanitize, CellColor, GridStore, Letter, Position};

use super::protocol::ChangeEvent;

/// Color a cell takes after its letter changes.
///
/// Typing into an unannotated cell marks it gray; clearing the letter drops
/// any annotation. Otherwise the annotation is kept.
pub fn color_after_edit(prior: CellColor, letter: Letter) -> CellColor {
    if letter.is_empty() {
        CellColor::White
    } else if prior == CellColor::White {
        CellColor::Gray
    } else {
        prior
    }
}

/// Apply raw text input to a cell. Returns `None` when the cell is not in
/// the active row, in which case the store is untouched.
pub fn edit_letter(store: &mut GridStore, pos: Position, raw: &str) -> Option<ChangeEvent> {
    if !store.is_active(pos.row()) {
        debug!(row = pos.row(), col = pos.col(), "letter edit outside active row ignored");
        return None;
    }

    let letter = sanitize(raw);
    let color = color_after_edit(store.get_cell(pos).color, letter);
    store.set_letter(pos, letter);
    store.set_color(pos, color);

    Some(ChangeEvent::new(pos, store.get_cell(pos)))
}

/// Advance a cell's color annotation by one click.
pub fn cycle_color(store: &mut GridStore, pos: Position) -> Option<ChangeEvent> {
    if !store.is_active(pos.row()) {
        debug!(row = pos.row(), col = pos.col(), "color click outside active row ignored");
        return None;
    }

    let next = store.get_cell(pos).color.next();
    store.set_color(pos, next);

    Some(ChangeEvent::new(pos, store.get_cell(pos)))
}
