use crate::modal::Modal;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub enum ModalAction {
    None,
    Dismiss,
    Confirm,
}

/// Apply a key press to the open add-task form
pub fn handle_modal_key(modal: &mut Modal, key: KeyEvent) -> ModalAction {
    match key.code {
        KeyCode::Esc => return ModalAction::Dismiss,
        KeyCode::Enter => return ModalAction::Confirm,
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => modal.focus_next(),
        _ => {}
    }

    let input = modal.focused_input_mut();
    match key.code {
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => input.insert_char(c),
        KeyCode::Backspace => input.backspace(),
        KeyCode::Delete => input.delete(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.move_home(),
        KeyCode::End => input.move_end(),
        _ => {}
    }
    ModalAction::None
}
