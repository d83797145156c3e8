use crate::card::render_card;
use crate::document::{Binding, Document, ElementId};
use crate::drag::{DragDropController, DragResponse, DropOutcome};
use crate::modal::Modal;
use taskboard_domain::{IdGenerator, Lane, LaneCounts, Task, TaskStore};
use taskboard_persistence::{BoardRepository, KeyValueStore};

/// Interaction events the board reacts to. Front ends translate their
/// native input into these; tests dispatch them directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    ToggleModal,
    OpenModal,
    CloseModal,
    ModalBackgroundClick,
    ConfirmAdd,
    CardDragStart(ElementId),
    CardDragEnd,
    CardDeleteClick(ElementId),
    LaneDragEnter(Lane),
    LaneDragLeave(Lane),
    LaneDragOver(Lane),
    LaneDrop(Lane),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResponse {
    Handled,
    /// Handled, and the platform default action was suppressed
    DefaultPrevented,
    Ignored,
}

impl From<DragResponse> for EventResponse {
    fn from(response: DragResponse) -> Self {
        match response {
            DragResponse::PreventDefault => EventResponse::DefaultPrevented,
            DragResponse::Default => EventResponse::Handled,
        }
    }
}

/// Top-level orchestration of store, document, drag state, modal and persistence.
///
/// Every structural change runs to completion inside its handler: store
/// mutation, document update, count refresh, then a write-through save.
pub struct BoardController<S> {
    store: TaskStore,
    document: Document,
    drag: DragDropController,
    modal: Modal,
    repository: BoardRepository<S>,
}

impl<S: KeyValueStore> BoardController<S> {
    /// Load the saved board and render every lane in stored order
    pub fn startup(repository: BoardRepository<S>, ids: IdGenerator) -> Self {
        let store = TaskStore::from_board(repository.load(), ids);
        let mut document = Document::new();
        for lane in Lane::ALL {
            for task in store.get_lane(lane) {
                document.append(lane, render_card(task));
            }
        }

        let mut controller = Self {
            store,
            document,
            drag: DragDropController::new(),
            modal: Modal::new(),
            repository,
        };
        controller.refresh_counts();
        tracing::info!(
            "Board ready: {} todo, {} in progress, {} done",
            controller.counts().todo,
            controller.counts().progress,
            controller.counts().done
        );
        controller
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Direct access to rendered cards, e.g. to change displayed text in place
    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    pub fn drag(&self) -> &DragDropController {
        &self.drag
    }

    pub fn modal(&self) -> &Modal {
        &self.modal
    }

    pub fn modal_mut(&mut self) -> &mut Modal {
        &mut self.modal
    }

    pub fn repository(&self) -> &BoardRepository<S> {
        &self.repository
    }

    /// Counts as shown on the lane badges
    pub fn counts(&self) -> LaneCounts {
        let mut counts = LaneCounts::default();
        for lane in Lane::ALL {
            counts.set(lane, self.document.container(lane).badge());
        }
        counts
    }

    pub fn dispatch(&mut self, event: UiEvent) -> EventResponse {
        tracing::debug!("Dispatching {:?}", event);
        match event {
            UiEvent::ToggleModal => {
                self.modal.toggle();
                EventResponse::Handled
            }
            UiEvent::OpenModal => {
                self.modal.open();
                EventResponse::Handled
            }
            UiEvent::CloseModal | UiEvent::ModalBackgroundClick => {
                self.modal.close();
                EventResponse::Handled
            }
            UiEvent::ConfirmAdd => match self.confirm_add() {
                Some(_) => EventResponse::Handled,
                None => EventResponse::Ignored,
            },
            UiEvent::CardDragStart(element) => {
                if self.drag.drag_start(&self.document, element) {
                    EventResponse::Handled
                } else {
                    EventResponse::Ignored
                }
            }
            UiEvent::CardDragEnd => {
                self.drag.drag_end();
                EventResponse::Handled
            }
            UiEvent::CardDeleteClick(element) => {
                if self.delete_card(element) {
                    EventResponse::Handled
                } else {
                    EventResponse::Ignored
                }
            }
            UiEvent::LaneDragEnter(lane) => {
                self.drag.on_drag_enter(&mut self.document, lane).into()
            }
            UiEvent::LaneDragLeave(lane) => {
                self.drag.on_drag_leave(&mut self.document, lane).into()
            }
            UiEvent::LaneDragOver(lane) => self.drag.on_drag_over(lane).into(),
            UiEvent::LaneDrop(lane) => match self.drop_on(lane) {
                DropOutcome::Moved { .. } => EventResponse::DefaultPrevented,
                DropOutcome::NoSource | DropOutcome::Stale(_) => EventResponse::Ignored,
            },
        }
    }

    /// Submit the add-task form. A blank title leaves the form open and untouched.
    pub fn confirm_add(&mut self) -> Option<Task> {
        let title = self.modal.title.trimmed().to_string();
        let description = self.modal.description.trimmed().to_string();

        let task = match self.store.add_task(&title, &description) {
            Ok(task) => task,
            Err(e) => {
                tracing::debug!("Add rejected: {}", e);
                return None;
            }
        };

        self.document.append(Lane::Todo, render_card(&task));
        self.refresh_counts();
        self.persist();

        self.modal.clear_inputs();
        self.modal.close();
        tracing::info!("Created task {} ({})", task.title, task.id);
        Some(task)
    }

    /// Delete-click on a card: drop the task, unmount the card, refresh and save
    pub fn delete_card(&mut self, element: ElementId) -> bool {
        let Some(card) = self.document.element(element) else {
            return false;
        };
        if !card.handles(Binding::DeleteClick) {
            return false;
        }
        let task_id = card.task_id.clone();

        self.store.delete_task(&task_id);
        self.document.remove(element);
        self.drag.forget(element);
        self.refresh_counts();
        self.persist();
        tracing::info!("Deleted task {}", task_id);
        true
    }

    fn drop_on(&mut self, lane: Lane) -> DropOutcome {
        let outcome = self.drag.on_drop(&mut self.document, &mut self.store, lane);
        if matches!(outcome, DropOutcome::Moved { .. }) {
            self.refresh_counts();
            self.persist();
        }
        outcome
    }

    /// Recompute every lane badge from the cards mounted in it
    pub fn refresh_counts(&mut self) {
        for lane in Lane::ALL {
            let count = self.document.card_count(lane);
            self.document.set_badge(lane, count);
        }
    }

    /// Write the board through to storage. Failures are logged; the
    /// in-memory board stays authoritative.
    pub fn persist(&mut self) {
        if let Err(e) = self.repository.save(self.store.board()) {
            tracing::error!("Failed to save board: {}", e);
        }
    }
}
