//! Stateless UI rendering using ratatui.
//!
//! [`draw`] reads the controller and paints the whole screen; it never
//! mutates anything and is re-run after every applied action.

mod board;
mod history;
mod layout;

use ratatui::{
    Frame,
    layout::Alignment,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use rewind_tictactoe::GameStatus;

use crate::config::Theme;
use crate::controller::{Focus, GameController};

pub use board::{BoardProps, cell_style, render_board};
pub use history::{entry_text, render_history};
pub use layout::{CELL_HEIGHT, CELL_WIDTH, ScreenLayout, history_offset};

const HELP: &str =
    "1-9/click: play | arrows+Enter: select | Tab: history | [ ]: step | r: replay | q: quit";

/// Draws the full game screen and returns the layout used.
pub fn draw(f: &mut Frame, controller: &GameController, theme: &Theme) -> ScreenLayout {
    let layout = ScreenLayout::compute(f.area());
    let game = controller.game();
    let status = game.status();

    let title = Paragraph::new("Rewind - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, layout.title);

    f.render_widget(status_paragraph(controller, status), layout.status);

    let winning_line = match status {
        GameStatus::Won { line, .. } => Some(line),
        _ => None,
    };
    let board_focused = *controller.focus() == Focus::Board;
    render_board(
        f,
        &layout,
        BoardProps {
            board: game.current(),
            winning_line,
            selection: (board_focused && winning_line.is_none()).then_some(*controller.selection()),
            theme,
        },
    );

    let replay = Paragraph::new("[ Replay ]")
        .style(Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(replay, layout.replay);

    render_history(f, &layout, game, *controller.highlighted(), !board_focused);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help);

    layout
}

/// Status text, noting when an earlier step is on display.
pub fn status_text(controller: &GameController, status: GameStatus) -> String {
    let game = controller.game();
    if game.is_at_tip() {
        status.to_string()
    } else {
        format!(
            "{} (viewing step {} of {})",
            status,
            game.cursor(),
            game.len() - 1
        )
    }
}

fn status_paragraph(controller: &GameController, status: GameStatus) -> Paragraph<'static> {
    let color = match status {
        GameStatus::InProgress { .. } => Color::Yellow,
        GameStatus::Won { .. } => Color::Green,
        GameStatus::Draw => Color::Gray,
    };
    Paragraph::new(status_text(controller, status))
        .style(Style::default().fg(color))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"))
}
