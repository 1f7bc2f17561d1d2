//! Rendering tests against ratatui's in-memory backend.

use ratatui::{Terminal, backend::TestBackend, buffer::Buffer, layout::Rect};
use rewind_games::ui::{ScreenLayout, draw, status_text};
use rewind_games::{Action, Focus, GameController, Theme};
use rewind_tictactoe::Position;

const WIDTH: u16 = 100;
const HEIGHT: u16 = 30;

fn render(controller: &GameController) -> (Buffer, ScreenLayout) {
    let mut terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).unwrap();
    let mut layout = ScreenLayout::default();
    terminal
        .draw(|f| layout = draw(f, controller, &Theme::default()))
        .unwrap();
    (terminal.backend().buffer().clone(), layout)
}

fn text_in(buffer: &Buffer, area: Rect) -> String {
    let mut out = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

fn play(controller: &mut GameController, cells: &[usize]) {
    for &cell in cells {
        let pos = Position::from_index(cell).unwrap();
        controller.apply(Action::PlayCell(pos));
    }
}

#[test]
fn test_draw_returns_same_layout_as_compute() {
    let (_, layout) = render(&GameController::new());
    assert_eq!(layout, ScreenLayout::compute(Rect::new(0, 0, WIDTH, HEIGHT)));
}

#[test]
fn test_fresh_game_screen() {
    let controller = GameController::new();
    let (buffer, layout) = render(&controller);

    assert!(text_in(&buffer, layout.status).contains("Next player: X"));
    assert!(text_in(&buffer, layout.replay).contains("Replay"));
    let history = text_in(&buffer, layout.history);
    assert!(history.contains("Game start"));
    assert!(!history.contains("Move #1"));

    for pos in Position::ALL {
        let label = (pos.to_index() + 1).to_string();
        assert!(text_in(&buffer, layout.cells[pos.to_index()]).contains(&label));
    }
}

#[test]
fn test_marks_and_history_entries() {
    let mut controller = GameController::new();
    play(&mut controller, &[4, 0]);
    let (buffer, layout) = render(&controller);

    assert!(text_in(&buffer, layout.cells[4]).contains('X'));
    assert!(text_in(&buffer, layout.cells[0]).contains('O'));

    let history = text_in(&buffer, layout.history);
    assert!(history.contains("Move #1"));
    assert!(history.contains("X → Center"));
    assert!(history.contains("Move #2"));
    assert!(history.contains("O → Top-left"));
}

#[test]
fn test_only_winning_cells_highlighted() {
    let mut controller = GameController::new();
    play(&mut controller, &[0, 4, 1, 5, 2]);
    let theme = Theme::default();
    let (buffer, layout) = render(&controller);

    assert!(text_in(&buffer, layout.status).contains("Winner: X"));
    for (index, cell) in layout.cells.iter().enumerate() {
        let centre = &buffer[(cell.x + cell.width / 2, cell.y + 1)];
        if index <= 2 {
            assert_eq!(centre.bg, theme.winner, "cell {} should be highlighted", index);
        } else {
            assert_ne!(centre.bg, theme.winner, "cell {} should be plain", index);
            assert_ne!(centre.bg, theme.selection, "cell {} should be plain", index);
        }
    }
}

#[test]
fn test_viewing_past_step_is_noted() {
    let mut controller = GameController::new();
    play(&mut controller, &[0, 4, 1]);
    controller.apply(Action::JumpTo(1));

    let status = controller.game().status();
    assert_eq!(status_text(&controller, status), "Next player: O (viewing step 1 of 3)");

    let (buffer, layout) = render(&controller);
    assert!(text_in(&buffer, layout.history).contains("▶ Move #1"));
    // Cell 4 was filled after step 1 and must not show.
    assert!(!text_in(&buffer, layout.cells[4]).contains('O'));
}

#[test]
fn test_draw_status() {
    let mut controller = GameController::new();
    play(&mut controller, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);
    let (buffer, layout) = render(&controller);
    assert!(text_in(&buffer, layout.status).contains("No more moves left"));
}

#[test]
fn test_history_focus_changes_border_only() {
    let mut controller = GameController::new();
    controller.apply(Action::ToggleFocus);
    assert_eq!(*controller.focus(), Focus::History);
    let (buffer, layout) = render(&controller);
    assert!(text_in(&buffer, layout.history).contains("History"));
}
