use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use taskboard_domain::{IdGenerator, Lane, LaneCounts};
use taskboard_persistence::{BoardRepository, MemoryKeyValueStore};
use taskboard_tui::{App, BoardController};

fn app() -> App<MemoryKeyValueStore> {
    App::new(BoardController::startup(
        BoardRepository::new(MemoryKeyValueStore::new(), "kanbanTasks"),
        IdGenerator::default(),
    ))
}

fn press(app: &mut App<MemoryKeyValueStore>, code: KeyCode) {
    app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
}

fn type_text(app: &mut App<MemoryKeyValueStore>, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

fn add_task(app: &mut App<MemoryKeyValueStore>, title: &str) {
    press(app, KeyCode::Char('n'));
    type_text(app, title);
    press(app, KeyCode::Enter);
}

#[test]
fn test_add_through_form() {
    let mut app = app();
    press(&mut app, KeyCode::Char('n'));
    assert!(app.controller.modal().is_open());

    type_text(&mut app, "Write spec");
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "quickly");
    press(&mut app, KeyCode::Enter);

    assert!(!app.controller.modal().is_open());
    let todo = app.controller.store().get_lane(Lane::Todo);
    assert_eq!(todo[0].title, "Write spec");
    assert_eq!(todo[0].description, "quickly");
    assert_eq!(app.selection.get(), Some(0));
}

#[test]
fn test_q_in_form_is_text_not_quit() {
    let mut app = app();
    press(&mut app, KeyCode::Char('n'));
    type_text(&mut app, "quit");
    assert!(!app.should_quit);
    assert_eq!(app.controller.modal().title.as_str(), "quit");

    press(&mut app, KeyCode::Esc);
    assert!(!app.controller.modal().is_open());
    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit);
}

#[test]
fn test_enter_with_blank_title_keeps_form() {
    let mut app = app();
    press(&mut app, KeyCode::Char('n'));
    type_text(&mut app, "   ");
    press(&mut app, KeyCode::Enter);

    assert!(app.controller.modal().is_open());
    assert!(app.controller.store().board().is_empty());
}

#[test]
fn test_pick_up_move_and_drop() {
    let mut app = app();
    add_task(&mut app, "Card");

    press(&mut app, KeyCode::Char(' '));
    assert!(app.is_dragging());
    assert!(app.controller.document().container(Lane::Todo).is_hovered());

    press(&mut app, KeyCode::Right);
    assert!(!app.controller.document().container(Lane::Todo).is_hovered());
    assert!(app.controller.document().container(Lane::Progress).is_hovered());

    press(&mut app, KeyCode::Right);
    press(&mut app, KeyCode::Enter);

    assert!(!app.is_dragging());
    assert_eq!(app.controller.counts(), LaneCounts::new(0, 0, 1));
    assert_eq!(app.focused_lane, Lane::Done);
    assert_eq!(app.selection.get(), Some(0));
    assert!(!app.controller.document().container(Lane::Done).is_hovered());
}

#[test]
fn test_escape_cancels_drag() {
    let mut app = app();
    add_task(&mut app, "Card");

    press(&mut app, KeyCode::Char(' '));
    press(&mut app, KeyCode::Right);
    press(&mut app, KeyCode::Esc);

    assert!(!app.is_dragging());
    assert!(!app.controller.document().container(Lane::Progress).is_hovered());
    assert_eq!(app.controller.counts(), LaneCounts::new(1, 0, 0));
}

#[test]
fn test_delete_selected_card() {
    let mut app = app();
    add_task(&mut app, "First");
    add_task(&mut app, "Second");

    press(&mut app, KeyCode::Char('k'));
    assert_eq!(app.selection.get(), Some(0));
    press(&mut app, KeyCode::Char('d'));

    let todo = app.controller.store().get_lane(Lane::Todo);
    assert_eq!(todo.len(), 1);
    assert_eq!(todo[0].title, "Second");
    assert_eq!(app.selection.get(), Some(0));
}

#[test]
fn test_pick_up_on_empty_lane_does_nothing() {
    let mut app = app();
    press(&mut app, KeyCode::Char(' '));
    assert!(!app.is_dragging());
}
