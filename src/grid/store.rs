//! Grid store
//!
//! Authoritative letters and colors for one component instance.

use tracing::warn;

use super::{sanitize, CellColor, Letter, Position, COLS, ROWS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    pub letter: Letter,
    pub color: CellColor,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GridStore {
    cells: [[Cell; COLS]; ROWS],
    active_row: Option<usize>,
}

impl GridStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a fresh grid from host data, replacing everything held before.
    ///
    /// Missing rows or cells take the defaults (empty, white). Letters go
    /// through [`sanitize`]; unknown color names fall back to white. An
    /// active row outside the board means no row is editable.
    pub fn initialize(
        grid: Option<&[Vec<String>]>,
        colors: Option<&[Vec<String>]>,
        active_row: Option<i64>,
    ) -> Self {
        let mut store = Self::new();

        if let Some(rows) = grid {
            for (r, row) in rows.iter().take(ROWS).enumerate() {
                for (c, raw) in row.iter().take(COLS).enumerate() {
                    store.cells[r][c].letter = sanitize(raw);
                }
            }
        }

        if let Some(rows) = colors {
            for (r, row) in rows.iter().take(ROWS).enumerate() {
                for (c, name) in row.iter().take(COLS).enumerate() {
                    store.cells[r][c].color = parse_host_color(name, r, c);
                }
            }
        }

        store.active_row = active_row
            .and_then(|r| usize::try_from(r).ok())
            .filter(|r| *r < ROWS);
        if active_row.is_some() && store.active_row.is_none() {
            warn!(?active_row, "active row outside the board, no row is editable");
        }

        store
    }

    pub fn get_cell(&self, pos: Position) -> Cell {
        self.cells[pos.row()][pos.col()]
    }

    pub fn set_letter(&mut self, pos: Position, letter: Letter) {
        self.cells[pos.row()][pos.col()].letter = letter;
    }

    pub fn set_color(&mut self, pos: Position, color: CellColor) {
        self.cells[pos.row()][pos.col()].color = color;
    }

    pub fn active_row(&self) -> Option<usize> {
        self.active_row
    }

    pub fn is_active(&self, row: usize) -> bool {
        self.active_row == Some(row)
    }

    /// Letters of every row as host strings ("" for empty cells)
    pub fn letters(&self) -> Vec<Vec<String>> {
        self.cells
            .iter()
            .map(|row| row.iter().map(|c| c.letter.to_string()).collect())
            .collect()
    }
}

fn parse_host_color(name: &str, row: usize, col: usize) -> CellColor {
    if name.is_empty() {
        return CellColor::White;
    }
    CellColor::parse(name).unwrap_or_else(|| {
        warn!(row, col, color = name, "unknown cell color, using white");
        CellColor::White
    })
}
