//! History list rendering.

use ratatui::{
    Frame,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use rewind_tictactoe::{GameState, step_label};

use super::layout::{ScreenLayout, history_offset};

/// Text of one history row: the step label plus the move that made it.
pub fn entry_text(game: &GameState, step: usize) -> String {
    match game.move_at(step) {
        Some(action) => format!("{:<9} {}", step_label(step), action),
        None => step_label(step),
    }
}

/// Renders the bordered history pane.
///
/// The displayed step is marked with `▶`. When `focused`, the
/// highlighted row is drawn reversed.
pub fn render_history(
    f: &mut Frame,
    layout: &ScreenLayout,
    game: &GameState,
    highlighted: usize,
    focused: bool,
) {
    let inner = layout.history_inner();
    let offset = history_offset(game.len(), highlighted, inner.height);

    let lines: Vec<Line> = (offset..game.len())
        .take(usize::from(inner.height))
        .map(|step| {
            let current = step == game.cursor();
            let marker = if current { "▶ " } else { "  " };
            let mut style = if current {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            if focused && step == highlighted {
                style = style.add_modifier(Modifier::REVERSED);
            }
            Line::from(vec![
                Span::styled(marker, style),
                Span::styled(entry_text(game, step), style),
            ])
        })
        .collect();

    let border = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title("History"),
    );
    f.render_widget(paragraph, layout.history);
}
