use crate::document::{Binding, Document, ElementId};
use taskboard_domain::{Lane, TaskId, TaskStore};

/// Whether a lane handler suppressed the platform default for the event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragResponse {
    PreventDefault,
    Default,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropOutcome {
    /// No drag gesture was active
    NoSource,
    /// The dragged element or its task no longer exists
    Stale(ElementId),
    Moved {
        element: ElementId,
        task_id: TaskId,
        from: Lane,
        to: Lane,
    },
}

/// Holds the single active drag source and turns drops into store moves.
#[derive(Debug, Clone, Default)]
pub struct DragDropController {
    active: Option<ElementId>,
}

impl DragDropController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Option<ElementId> {
        self.active
    }

    pub fn is_dragging(&self) -> bool {
        self.active.is_some()
    }

    /// Record `element` as the drag source. Elements without a drag-start binding are ignored.
    pub fn drag_start(&mut self, document: &Document, element: ElementId) -> bool {
        match document.element(element) {
            Some(card) if card.draggable && card.handles(Binding::DragStart) => {
                self.active = Some(element);
                tracing::debug!("Drag started on {}", element);
                true
            }
            _ => false,
        }
    }

    pub fn drag_end(&mut self) {
        if let Some(element) = self.active.take() {
            tracing::debug!("Drag ended on {}", element);
        }
    }

    /// Forget the source if it is `element`, e.g. after the element was deleted
    pub fn forget(&mut self, element: ElementId) {
        if self.active == Some(element) {
            self.active = None;
        }
    }

    pub fn on_drag_enter(&self, document: &mut Document, lane: Lane) -> DragResponse {
        document.set_hovered(lane, true);
        DragResponse::PreventDefault
    }

    pub fn on_drag_leave(&self, document: &mut Document, lane: Lane) -> DragResponse {
        document.set_hovered(lane, false);
        DragResponse::Default
    }

    /// Every drag-over must prevent the default, otherwise no drop is delivered
    pub fn on_drag_over(&self, _lane: Lane) -> DragResponse {
        DragResponse::PreventDefault
    }

    /// Move the dragged card into `lane`.
    ///
    /// The stored record is rebuilt from the card's displayed heading and
    /// body, then the element is re-parented to the end of the lane. The
    /// drag source is cleared whatever the outcome.
    pub fn on_drop(
        &mut self,
        document: &mut Document,
        store: &mut TaskStore,
        lane: Lane,
    ) -> DropOutcome {
        document.set_hovered(lane, false);

        let Some(element) = self.active.take() else {
            tracing::debug!("Drop on {} without an active drag source ignored", lane);
            return DropOutcome::NoSource;
        };
        let (Some(from), Some(card)) = (document.lane_of(element), document.element(element))
        else {
            tracing::warn!("Dropped element {} is no longer mounted", element);
            return DropOutcome::Stale(element);
        };

        let task_id = card.task_id.clone();
        if !store.relocate_task(&task_id, lane, &card.heading, &card.body) {
            tracing::warn!("Dropped card {} refers to unknown task {}", element, task_id);
            return DropOutcome::Stale(element);
        }
        document.reparent(element, lane);

        tracing::debug!("Dropped task {} from {} onto {}", task_id, from, lane);
        DropOutcome::Moved {
            element,
            task_id,
            from,
            to: lane,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::render_card;
    use taskboard_domain::IdGenerator;

    fn setup() -> (Document, TaskStore, ElementId) {
        let mut store = TaskStore::new(IdGenerator::default());
        let task = store.add_task("Drag me", "body").unwrap();
        let mut doc = Document::new();
        let el = doc.append(Lane::Todo, render_card(&task));
        (doc, store, el)
    }

    #[test]
    fn test_drop_without_source_only_clears_hover() {
        let (mut doc, mut store, _) = setup();
        let mut drag = DragDropController::new();
        drag.on_drag_enter(&mut doc, Lane::Done);

        assert_eq!(drag.on_drop(&mut doc, &mut store, Lane::Done), DropOutcome::NoSource);
        assert!(!doc.container(Lane::Done).is_hovered());
        assert_eq!(store.counts().todo, 1);
    }

    #[test]
    fn test_drop_moves_store_and_element() {
        let (mut doc, mut store, el) = setup();
        let mut drag = DragDropController::new();
        assert!(drag.drag_start(&doc, el));

        let outcome = drag.on_drop(&mut doc, &mut store, Lane::Progress);
        assert!(matches!(
            outcome,
            DropOutcome::Moved { from: Lane::Todo, to: Lane::Progress, .. }
        ));
        assert_eq!(doc.lane_of(el), Some(Lane::Progress));
        assert_eq!(store.get_lane(Lane::Progress).len(), 1);
        assert!(!drag.is_dragging());
    }

    #[test]
    fn test_drop_rebuilds_record_from_displayed_text() {
        let (mut doc, mut store, el) = setup();
        doc.element_mut(el).unwrap().body = "edited on screen".to_string();
        let mut drag = DragDropController::new();
        drag.drag_start(&doc, el);

        drag.on_drop(&mut doc, &mut store, Lane::Done);
        assert_eq!(store.get_lane(Lane::Done)[0].description, "edited on screen");
    }

    #[test]
    fn test_drag_over_always_prevents_default() {
        let drag = DragDropController::new();
        for lane in Lane::ALL {
            assert_eq!(drag.on_drag_over(lane), DragResponse::PreventDefault);
        }
    }

    #[test]
    fn test_drop_of_unmounted_element_is_stale() {
        let (mut doc, mut store, el) = setup();
        let mut drag = DragDropController::new();
        drag.drag_start(&doc, el);
        doc.remove(el);

        assert_eq!(drag.on_drop(&mut doc, &mut store, Lane::Done), DropOutcome::Stale(el));
        assert!(!drag.is_dragging());
    }
}
