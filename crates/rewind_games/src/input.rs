//! Translation of terminal events into controller actions.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use rewind_tictactoe::Position;
use tracing::trace;

use crate::controller::{Action, Direction, Focus, GameController};
use crate::ui::ScreenLayout;

/// Maps any terminal event to an action, if it means one.
pub fn translate(
    event: &Event,
    controller: &GameController,
    layout: &ScreenLayout,
) -> Option<Action> {
    let action = match event {
        Event::Key(key) => key_action(*key, *controller.focus()),
        Event::Mouse(mouse) => mouse_action(*mouse, controller, layout),
        _ => None,
    };
    trace!(?event, ?action, "Translated event");
    action
}

/// Maps a key press to an action.
///
/// Arrow keys and `Enter` depend on which pane has focus.
pub fn key_action(key: KeyEvent, focus: Focus) -> Option<Action> {
    // Skip key release events (crossterm fires both press and release).
    if key.kind == KeyEventKind::Release {
        return None;
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Quit),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('r') => Some(Action::Replay),
        KeyCode::Char('[') => Some(Action::StepBack),
        KeyCode::Char(']') => Some(Action::StepForward),
        KeyCode::Tab | KeyCode::BackTab => Some(Action::ToggleFocus),
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .and_then(|digit| Position::from_index(digit as usize - 1))
            .map(Action::PlayCell),
        KeyCode::Enter | KeyCode::Char(' ') => Some(match focus {
            Focus::Board => Action::PlaySelected,
            Focus::History => Action::JumpToHighlighted,
        }),
        KeyCode::Up => Some(match focus {
            Focus::Board => Action::MoveSelection(Direction::Up),
            Focus::History => Action::HighlightPrev,
        }),
        KeyCode::Down => Some(match focus {
            Focus::Board => Action::MoveSelection(Direction::Down),
            Focus::History => Action::HighlightNext,
        }),
        KeyCode::Left if focus == Focus::Board => Some(Action::MoveSelection(Direction::Left)),
        KeyCode::Right if focus == Focus::Board => Some(Action::MoveSelection(Direction::Right)),
        _ => None,
    }
}

/// Maps a mouse event to an action.
///
/// Left clicks hit-test against `layout`; the wheel scrolls the history
/// highlight.
pub fn mouse_action(
    mouse: MouseEvent,
    controller: &GameController,
    layout: &ScreenLayout,
) -> Option<Action> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => layout.hit(
            mouse.column,
            mouse.row,
            controller.game().len(),
            *controller.highlighted(),
        ),
        MouseEventKind::ScrollUp => Some(Action::HighlightPrev),
        MouseEventKind::ScrollDown => Some(Action::HighlightNext),
        _ => None,
    }
}
