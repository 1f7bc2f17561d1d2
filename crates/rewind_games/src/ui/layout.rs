//! Screen geometry shared by rendering and mouse hit-testing.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use rewind_tictactoe::Position;

use crate::controller::Action;

/// Width of one board cell in columns.
pub const CELL_WIDTH: u16 = 11;
/// Height of one board cell in rows.
pub const CELL_HEIGHT: u16 = 3;

const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

/// Every region of the screen, computed from the terminal area alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScreenLayout {
    /// Title bar.
    pub title: Rect,
    /// Status line above the board.
    pub status: Rect,
    /// The 9 board cells in row-major order.
    pub cells: [Rect; 9],
    /// Separator rows between board rows.
    pub row_separators: [Rect; 2],
    /// Separator columns between board cells, per row.
    pub col_separators: [[Rect; 2]; 3],
    /// Replay button.
    pub replay: Rect,
    /// Bordered history pane.
    pub history: Rect,
    /// Key help footer.
    pub help: Rect,
}

impl ScreenLayout {
    /// Splits `area` into the game screen.
    pub fn compute(area: Rect) -> Self {
        let [title, body, help] = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(3),
            ])
            .areas(area);

        let [board_pane, info_pane] = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .areas(body);

        let [status, board_area] = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .areas(board_pane);

        let [replay, history] = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .areas(info_pane);

        let grid = center_rect(board_area, BOARD_WIDTH, BOARD_HEIGHT);
        let rows: [Rect; 5] = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(CELL_HEIGHT),
                Constraint::Length(1),
                Constraint::Length(CELL_HEIGHT),
                Constraint::Length(1),
                Constraint::Length(CELL_HEIGHT),
            ])
            .areas(grid);

        let mut cells = [Rect::default(); 9];
        let mut col_separators = [[Rect::default(); 2]; 3];
        for (row, row_area) in [rows[0], rows[2], rows[4]].into_iter().enumerate() {
            let cols: [Rect; 5] = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([
                    Constraint::Length(CELL_WIDTH),
                    Constraint::Length(1),
                    Constraint::Length(CELL_WIDTH),
                    Constraint::Length(1),
                    Constraint::Length(CELL_WIDTH),
                ])
                .areas(row_area);
            cells[row * 3] = cols[0];
            cells[row * 3 + 1] = cols[2];
            cells[row * 3 + 2] = cols[4];
            col_separators[row] = [cols[1], cols[3]];
        }

        Self {
            title,
            status,
            cells,
            row_separators: [rows[1], rows[3]],
            col_separators,
            replay,
            history,
            help,
        }
    }

    /// Rows of the history pane available for entries.
    pub fn history_inner(&self) -> Rect {
        inset(self.history)
    }

    /// Maps a left click to an action.
    ///
    /// `history_len` and `highlighted` determine which entries are
    /// scrolled into view, exactly as the history view draws them.
    pub fn hit(
        &self,
        column: u16,
        row: u16,
        history_len: usize,
        highlighted: usize,
    ) -> Option<Action> {
        if let Some(index) = self.cells.iter().position(|cell| contains(*cell, column, row)) {
            return Position::from_index(index).map(Action::PlayCell);
        }

        if contains(self.replay, column, row) {
            return Some(Action::Replay);
        }

        let inner = self.history_inner();
        if contains(inner, column, row) {
            let offset = history_offset(history_len, highlighted, inner.height);
            let step = offset + usize::from(row - inner.y);
            if step < history_len {
                return Some(Action::JumpTo(step));
            }
        }

        None
    }
}

/// First history entry shown so that `highlighted` stays visible.
pub fn history_offset(len: usize, highlighted: usize, height: u16) -> usize {
    let height = usize::from(height);
    if height == 0 || len <= height {
        0
    } else {
        highlighted.saturating_sub(height - 1).min(len - height)
    }
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

fn inset(rect: Rect) -> Rect {
    Rect {
        x: rect.x.saturating_add(1),
        y: rect.y.saturating_add(1),
        width: rect.width.saturating_sub(2),
        height: rect.height.saturating_sub(2),
    }
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let horizontal: [Rect; 3] = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .areas(area);
    let vertical: [Rect; 3] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .areas(horizontal[1]);
    vertical[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen() -> ScreenLayout {
        ScreenLayout::compute(Rect::new(0, 0, 100, 30))
    }

    #[test]
    fn test_cells_are_sized_and_disjoint() {
        let layout = screen();
        for (i, a) in layout.cells.iter().enumerate() {
            assert_eq!((a.width, a.height), (CELL_WIDTH, CELL_HEIGHT));
            for b in &layout.cells[i + 1..] {
                assert!(!a.intersects(*b));
            }
        }
    }

    #[test]
    fn test_click_on_each_cell() {
        let layout = screen();
        for pos in Position::ALL {
            let cell = layout.cells[pos.to_index()];
            assert_eq!(
                layout.hit(cell.x + 1, cell.y + 1, 1, 0),
                Some(Action::PlayCell(pos))
            );
        }
    }

    #[test]
    fn test_click_on_replay_and_history() {
        let layout = screen();
        assert_eq!(
            layout.hit(layout.replay.x + 2, layout.replay.y + 1, 1, 0),
            Some(Action::Replay)
        );

        let inner = layout.history_inner();
        assert_eq!(layout.hit(inner.x, inner.y + 2, 4, 3), Some(Action::JumpTo(2)));
        // Below the last entry.
        assert_eq!(layout.hit(inner.x, inner.y + 5, 4, 3), None);
    }

    #[test]
    fn test_click_on_separator_is_ignored() {
        let layout = screen();
        let sep = layout.row_separators[0];
        assert_eq!(layout.hit(sep.x + 3, sep.y, 1, 0), None);
    }

    #[test]
    fn test_history_offset_keeps_highlight_visible() {
        assert_eq!(history_offset(5, 4, 10), 0);
        assert_eq!(history_offset(10, 0, 4), 0);
        assert_eq!(history_offset(10, 3, 4), 0);
        assert_eq!(history_offset(10, 4, 4), 1);
        assert_eq!(history_offset(10, 9, 4), 6);
        assert_eq!(history_offset(10, 9, 0), 0);
    }
}
