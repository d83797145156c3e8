use crate::controller::{BoardController, UiEvent};
use crate::dialog::{handle_modal_key, ModalAction};
use crate::document::ElementId;
use crate::events::{should_quit, Event, EventHandler};
use crate::selection::SelectionState;
use crate::ui;
use crossterm::{
    event::{KeyCode, KeyEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use taskboard_core::BoardResult;
use taskboard_domain::Lane;
use taskboard_persistence::KeyValueStore;

/// Keyboard front end over a [`BoardController`].
///
/// A drag gesture is emulated with a pick-up key: the card under the
/// cursor becomes the drag source, lane changes send leave/enter/over
/// to the lanes involved, and the drop key delivers the drop on the
/// focused lane.
pub struct App<S> {
    pub should_quit: bool,
    pub controller: BoardController<S>,
    pub focused_lane: Lane,
    pub selection: SelectionState,
}

impl<S: KeyValueStore> App<S> {
    pub fn new(controller: BoardController<S>) -> Self {
        let mut app = Self {
            should_quit: false,
            controller,
            focused_lane: Lane::Todo,
            selection: SelectionState::new(),
        };
        app.clamp_selection();
        app
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn is_dragging(&self) -> bool {
        self.controller.drag().is_dragging()
    }

    pub fn selected_element(&self) -> Option<ElementId> {
        let index = self.selection.get()?;
        self.controller
            .document()
            .element_at(self.focused_lane, index)
    }

    fn lane_len(&self) -> usize {
        self.controller.document().card_count(self.focused_lane)
    }

    fn clamp_selection(&mut self) {
        let len = self.lane_len();
        self.selection.clamp(len);
    }

    fn select_element(&mut self, element: ElementId) {
        if let Some((lane, index)) = self.controller.document().index_of(element) {
            self.focused_lane = lane;
            self.selection.set(Some(index));
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if self.controller.modal().is_open() {
            self.handle_form_key(key);
            return;
        }

        if should_quit(&key) {
            self.quit();
            return;
        }

        match key.code {
            KeyCode::Char('n') | KeyCode::Char('a') => {
                self.controller.dispatch(UiEvent::ToggleModal);
            }
            KeyCode::Char('h') | KeyCode::Left => self.shift_lane(self.focused_lane.prev()),
            KeyCode::Char('l') | KeyCode::Right => self.shift_lane(self.focused_lane.next()),
            KeyCode::Char('1') => self.shift_lane(Lane::Todo),
            KeyCode::Char('2') => self.shift_lane(Lane::Progress),
            KeyCode::Char('3') => self.shift_lane(Lane::Done),
            KeyCode::Char('j') | KeyCode::Down if !self.is_dragging() => {
                let len = self.lane_len();
                self.selection.next(len);
            }
            KeyCode::Char('k') | KeyCode::Up if !self.is_dragging() => {
                let len = self.lane_len();
                self.selection.prev(len);
            }
            KeyCode::Char(' ') => {
                if self.is_dragging() {
                    self.drop_here();
                } else {
                    self.pick_up();
                }
            }
            KeyCode::Enter if self.is_dragging() => self.drop_here(),
            KeyCode::Esc if self.is_dragging() => self.cancel_drag(),
            KeyCode::Char('d') | KeyCode::Delete if !self.is_dragging() => self.delete_selected(),
            _ => {}
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        match handle_modal_key(self.controller.modal_mut(), key) {
            ModalAction::None => {}
            ModalAction::Dismiss => {
                self.controller.dispatch(UiEvent::ModalBackgroundClick);
            }
            ModalAction::Confirm => {
                self.controller.dispatch(UiEvent::ConfirmAdd);
                if !self.controller.modal().is_open() {
                    self.focused_lane = Lane::Todo;
                    let len = self.lane_len();
                    self.selection.set(len.checked_sub(1));
                }
            }
        }
    }

    fn shift_lane(&mut self, lane: Lane) {
        if lane == self.focused_lane {
            return;
        }
        if self.is_dragging() {
            self.controller
                .dispatch(UiEvent::LaneDragLeave(self.focused_lane));
            self.focused_lane = lane;
            self.controller.dispatch(UiEvent::LaneDragEnter(lane));
            self.controller.dispatch(UiEvent::LaneDragOver(lane));
        } else {
            self.focused_lane = lane;
            self.clamp_selection();
        }
    }

    fn pick_up(&mut self) {
        let Some(element) = self.selected_element() else {
            return;
        };
        self.controller.dispatch(UiEvent::CardDragStart(element));
        if self.is_dragging() {
            self.controller
                .dispatch(UiEvent::LaneDragEnter(self.focused_lane));
            self.controller
                .dispatch(UiEvent::LaneDragOver(self.focused_lane));
        }
    }

    fn drop_here(&mut self) {
        let dragged = self.controller.drag().active();
        self.controller.dispatch(UiEvent::LaneDrop(self.focused_lane));
        self.controller.dispatch(UiEvent::CardDragEnd);
        if let Some(element) = dragged {
            self.select_element(element);
        }
        self.clamp_selection();
    }

    fn cancel_drag(&mut self) {
        self.controller
            .dispatch(UiEvent::LaneDragLeave(self.focused_lane));
        self.controller.dispatch(UiEvent::CardDragEnd);
        self.clamp_selection();
    }

    fn delete_selected(&mut self) {
        if let Some(element) = self.selected_element() {
            self.controller.dispatch(UiEvent::CardDeleteClick(element));
            self.clamp_selection();
        }
    }

    pub async fn run(&mut self) -> BoardResult<()> {
        let mut terminal = setup_terminal()?;
        let mut events = EventHandler::new();

        while !self.should_quit {
            terminal.draw(|frame| ui::render(self, frame))?;

            match events.next().await {
                Some(Event::Key(key)) => self.handle_key(key),
                Some(Event::Resize) | Some(Event::Tick) => {}
                None => break,
            }
        }

        events.stop();
        restore_terminal(&mut terminal)?;
        Ok(())
    }
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>, io::Error> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

fn restore_terminal(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<(), io::Error> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
