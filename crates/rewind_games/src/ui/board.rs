//! Tic-tac-toe board rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::Paragraph,
};
use rewind_tictactoe::{Board, Player, Position, Square, WinningLine};

use super::layout::ScreenLayout;
use crate::config::Theme;

/// What the board view needs to draw one snapshot.
#[derive(Debug, Clone, Copy)]
pub struct BoardProps<'a> {
    /// Snapshot to draw.
    pub board: &'a Board,
    /// Cells to highlight as the winning line.
    pub winning_line: Option<WinningLine>,
    /// Keyboard selection, if the board pane has focus.
    pub selection: Option<Position>,
    /// Colors.
    pub theme: &'a Theme,
}

/// Renders the 3x3 grid into the cell rectangles of `layout`.
pub fn render_board(f: &mut Frame, layout: &ScreenLayout, props: BoardProps<'_>) {
    for pos in Position::ALL {
        render_cell(f, layout.cells[pos.to_index()], pos, &props);
    }
    for sep in layout.row_separators {
        render_separator(f, sep);
    }
    for sep in layout.col_separators.iter().flatten() {
        render_vertical_sep(f, *sep);
    }
}

/// Style for one cell: mark color, then winning line, then selection.
pub fn cell_style(square: Square, winning: bool, selected: bool, theme: &Theme) -> Style {
    let base = match square {
        Square::Empty => Style::default().fg(Color::DarkGray),
        Square::Occupied(Player::X) => Style::default().fg(theme.x).add_modifier(Modifier::BOLD),
        Square::Occupied(Player::O) => Style::default().fg(theme.o).add_modifier(Modifier::BOLD),
    };
    let base = if winning {
        base.bg(theme.winner).fg(Color::Black)
    } else {
        base
    };
    if selected {
        base.bg(theme.selection).fg(Color::Black)
    } else {
        base
    }
}

fn render_cell(f: &mut Frame, area: Rect, pos: Position, props: &BoardProps<'_>) {
    let square = props.board.get(pos);
    let winning = props.winning_line.is_some_and(|line| line.contains(pos));
    let selected = props.selection == Some(pos);

    let text = match square {
        Square::Empty => (pos.to_index() + 1).to_string(),
        Square::Occupied(player) => player.to_string(),
    };

    // Middle row of a 3-row cell.
    let lines = vec![Line::from(""), Line::from(text), Line::from("")];
    let paragraph = Paragraph::new(lines)
        .style(cell_style(square, winning, selected, props.theme))
        .alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn render_separator(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(sep, area);
}

fn render_vertical_sep(f: &mut Frame, area: Rect) {
    let lines = vec![Line::from("│"); area.height as usize];
    let sep = Paragraph::new(lines).style(Style::default().fg(Color::DarkGray));
    f.render_widget(sep, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_winning_cell_uses_winner_background() {
        let theme = Theme::default();
        let style = cell_style(Square::Occupied(Player::X), true, false, &theme);
        assert_eq!(style.bg, Some(theme.winner));
    }

    #[test]
    fn test_plain_cell_has_no_background() {
        let theme = Theme::default();
        let style = cell_style(Square::Occupied(Player::O), false, false, &theme);
        assert_eq!(style.bg, None);
        assert_eq!(style.fg, Some(theme.o));
    }

    #[test]
    fn test_selection_overrides_winner_background() {
        let theme = Theme::default();
        let style = cell_style(Square::Empty, true, true, &theme);
        assert_eq!(style.bg, Some(theme.selection));
    }
}
