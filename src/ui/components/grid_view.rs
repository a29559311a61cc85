//! Grid View
//!
//! Paints a [`GridStore`] as a board of bordered cells. Each cell shows its
//! letter in the middle and a color indicator dot at the right edge.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, Widget},
};

use crate::grid::{Cell, CellColor, GridStore, Position, COLS, ROWS};

use super::layout::create_popup_block;

pub const CELL_WIDTH: u16 = 8;
pub const CELL_HEIGHT: u16 = 3;
const CELL_GAP: u16 = 1;
const INDICATOR: &str = "●";

/// Terminal rows the board needs, borders included
pub const FRAME_HEIGHT: u16 = ROWS as u16 * CELL_HEIGHT + 2;
/// Terminal columns the board needs, borders included
pub const FRAME_WIDTH: u16 = COLS as u16 * CELL_WIDTH + (COLS as u16 - 1) * CELL_GAP + 2;

/// Which part of a cell a click landed on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    Input,
    Indicator,
}

/// Screen placement of every cell for a board mounted at `area`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardGeometry {
    inner: Rect,
}

impl BoardGeometry {
    pub fn new(area: Rect) -> Self {
        let inner = Rect::new(
            area.x.saturating_add(1),
            area.y.saturating_add(1),
            area.width.saturating_sub(2),
            area.height.saturating_sub(2),
        );
        Self { inner }
    }

    pub fn cell_area(&self, pos: Position) -> Rect {
        let x = self.inner.x + pos.col() as u16 * (CELL_WIDTH + CELL_GAP);
        let y = self.inner.y + pos.row() as u16 * CELL_HEIGHT;
        Rect::new(x, y, CELL_WIDTH, CELL_HEIGHT).intersection(self.inner)
    }

    /// The cell's area, or `None` when the mount clips it. Clipped cells are neither drawn nor clickable.
    pub fn visible_cell(&self, pos: Position) -> Option<Rect> {
        let area = self.cell_area(pos);
        (area.width == CELL_WIDTH && area.height == CELL_HEIGHT).then_some(area)
    }

    pub fn indicator_at(&self, pos: Position) -> (u16, u16) {
        let cell = self.cell_area(pos);
        (cell.x + CELL_WIDTH - 2, cell.y + 1)
    }

    pub fn letter_at(&self, pos: Position) -> (u16, u16) {
        let cell = self.cell_area(pos);
        (cell.x + 3, cell.y + 1)
    }

    pub fn hit(&self, x: u16, y: u16) -> Option<(Position, HitTarget)> {
        let pos = Position::all().find(|p| self.visible_cell(*p).is_some_and(|area| contains(area, x, y)))?;
        let target = if (x, y) == self.indicator_at(pos) {
            HitTarget::Indicator
        } else {
            HitTarget::Input
        };
        Some((pos, target))
    }
}

fn contains(area: Rect, x: u16, y: u16) -> bool {
    area.width > 0 && x >= area.x && x < area.x + area.width && y >= area.y && y < area.y + area.height
}

/// Background and text color for an annotation
pub fn palette(color: CellColor) -> (Color, Color) {
    match color {
        CellColor::White => (Color::Rgb(0xff, 0xff, 0xff), Color::Black),
        CellColor::Gray => (Color::Rgb(0x78, 0x7c, 0x7e), Color::White),
        CellColor::Yellow => (Color::Rgb(0xc9, 0xb4, 0x58), Color::White),
        CellColor::Green => (Color::Rgb(0x6a, 0xaa, 0x64), Color::White),
    }
}

pub struct GridView<'a> {
    store: &'a GridStore,
    focus: Option<Position>,
}

impl<'a> GridView<'a> {
    pub fn new(store: &'a GridStore) -> Self {
        Self { store, focus: None }
    }

    pub fn focus(mut self, focus: Option<Position>) -> Self {
        self.focus = focus;
        self
    }
}

impl Widget for GridView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = match self.store.active_row() {
            Some(row) => format!(" Guess {} ", row + 1),
            None => " Board ".to_string(),
        };
        create_popup_block(&title, Color::Magenta).render(area, buf);

        let geometry = BoardGeometry::new(area);
        for pos in Position::all() {
            let Some(cell_area) = geometry.visible_cell(pos) else {
                continue;
            };
            let state = CellState {
                cell: self.store.get_cell(pos),
                enabled: self.store.is_active(pos.row()),
                focused: self.focus == Some(pos),
            };
            render_cell(buf, &geometry, pos, cell_area, state);
        }
    }
}

struct CellState {
    cell: Cell,
    enabled: bool,
    focused: bool,
}

fn render_cell(buf: &mut Buffer, geometry: &BoardGeometry, pos: Position, area: Rect, state: CellState) {
    let (bg, fg) = palette(state.cell.color);
    let mut base = Style::default().bg(bg).fg(fg);
    if !state.enabled {
        base = base.add_modifier(Modifier::DIM);
    }

    Block::default()
        .borders(Borders::ALL)
        .border_type(border_type(&state))
        .border_style(border_style(&state, base))
        .style(base)
        .render(area, buf);

    let (lx, ly) = geometry.letter_at(pos);
    buf.set_string(lx, ly, state.cell.letter.to_string(), base.add_modifier(Modifier::BOLD));

    let (ix, iy) = geometry.indicator_at(pos);
    buf.set_string(ix, iy, INDICATOR, indicator_style(&state, base));
}

fn border_type(state: &CellState) -> BorderType {
    if state.focused { BorderType::Thick } else { BorderType::Rounded }
}

fn border_style(state: &CellState, base: Style) -> Style {
    match (state.enabled, state.focused) {
        (true, true) => base.fg(Color::Yellow).add_modifier(Modifier::BOLD),
        (true, false) => base.fg(Color::Cyan),
        _ => base.fg(Color::DarkGray),
    }
}

fn indicator_style(state: &CellState, base: Style) -> Style {
    if state.enabled {
        base.fg(Color::Magenta)
    } else {
        base.fg(Color::DarkGray)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::controller;

    fn board_area() -> Rect {
        Rect::new(2, 1, FRAME_WIDTH, FRAME_HEIGHT)
    }

    fn pos(row: usize, col: usize) -> Position {
        Position::new(row, col).unwrap()
    }

    #[test]
    fn test_frame_size() {
        assert_eq!(FRAME_HEIGHT, 20);
        assert_eq!(FRAME_WIDTH, 46);
    }

    #[test]
    fn test_cells_do_not_overlap() {
        let g = BoardGeometry::new(board_area());
        let a = g.cell_area(pos(0, 0));
        let b = g.cell_area(pos(0, 1));
        let c = g.cell_area(pos(1, 0));
        assert!(a.intersection(b).is_empty());
        assert!(a.intersection(c).is_empty());
        assert_eq!(g.cell_area(pos(5, 4)).bottom(), board_area().bottom() - 1);
        assert_eq!(g.cell_area(pos(5, 4)).right(), board_area().right() - 1);
    }

    #[test]
    fn test_hit_indicator_and_input() {
        let g = BoardGeometry::new(board_area());
        let (ix, iy) = g.indicator_at(pos(2, 3));
        assert_eq!(g.hit(ix, iy), Some((pos(2, 3), HitTarget::Indicator)));

        let (lx, ly) = g.letter_at(pos(4, 1));
        assert_eq!(g.hit(lx, ly), Some((pos(4, 1), HitTarget::Input)));
    }

    #[test]
    fn test_hit_outside_cells() {
        let g = BoardGeometry::new(board_area());
        assert_eq!(g.hit(0, 0), None);
        assert_eq!(g.hit(2, 1), None);
        // gap column between the first two cells
        let gap_x = g.cell_area(pos(0, 0)).right();
        assert_eq!(g.hit(gap_x, 3), None);
    }

    #[test]
    fn test_paints_letter_and_color() {
        let mut store = GridStore::initialize(None, None, Some(0));
        controller::edit_letter(&mut store, pos(0, 1), "q");

        let area = Rect::new(0, 0, FRAME_WIDTH, FRAME_HEIGHT);
        let mut buf = Buffer::empty(area);
        GridView::new(&store).render(area, &mut buf);

        let g = BoardGeometry::new(area);
        let (lx, ly) = g.letter_at(pos(0, 1));
        let cell = &buf[(lx, ly)];
        assert_eq!(cell.symbol(), "Q");
        assert_eq!(cell.bg, palette(CellColor::Gray).0);
        assert_eq!(cell.fg, Color::White);

        let (ex, ey) = g.letter_at(pos(0, 0));
        assert_eq!(buf[(ex, ey)].bg, palette(CellColor::White).0);
        assert_eq!(buf[(ex, ey)].fg, Color::Black);
    }

    #[test]
    fn test_inactive_rows_dimmed() {
        let store = GridStore::initialize(None, None, Some(1));
        let area = Rect::new(0, 0, FRAME_WIDTH, FRAME_HEIGHT);
        let mut buf = Buffer::empty(area);
        GridView::new(&store).render(area, &mut buf);

        let g = BoardGeometry::new(area);
        let (x0, y0) = g.indicator_at(pos(0, 0));
        let (x1, y1) = g.indicator_at(pos(1, 0));
        assert!(buf[(x0, y0)].modifier.contains(Modifier::DIM));
        assert!(!buf[(x1, y1)].modifier.contains(Modifier::DIM));
        assert_eq!(buf[(x1, y1)].symbol(), INDICATOR);
    }

    #[test]
    fn test_clipped_cells_are_not_clickable() {
        // room for three full rows plus one line of the fourth
        let area = Rect::new(0, 0, FRAME_WIDTH, 12);
        let g = BoardGeometry::new(area);
        let clipped = g.cell_area(pos(3, 0));
        assert_eq!(clipped.height, 1);
        assert_eq!(g.visible_cell(pos(3, 0)), None);
        assert_eq!(g.hit(clipped.x + 3, clipped.y), None);

        let (lx, ly) = g.letter_at(pos(2, 0));
        assert_eq!(g.hit(lx, ly), Some((pos(2, 0), HitTarget::Input)));

        let store = GridStore::new();
        let mut buf = Buffer::empty(area);
        GridView::new(&store).render(area, &mut buf);
        assert_ne!(buf[(clipped.x + 3, clipped.y)].bg, palette(CellColor::White).0);
    }

    #[test]
    fn test_small_area_does_not_panic() {
        let store = GridStore::new();
        let area = Rect::new(0, 0, 10, 4);
        let mut buf = Buffer::empty(area);
        GridView::new(&store).focus(Some(pos(0, 0))).render(area, &mut buf);
    }
}
