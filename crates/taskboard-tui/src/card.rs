use crate::document::{Binding, CardElement};
use taskboard_domain::Task;

/// Project a task into a draggable card with drag-start and delete handlers bound.
/// Pure: equal tasks render equal elements.
pub fn render_card(task: &Task) -> CardElement {
    CardElement {
        task_id: task.id.clone(),
        heading: task.title.clone(),
        body: task.description.clone(),
        draggable: true,
        bindings: vec![Binding::DragStart, Binding::DeleteClick],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use taskboard_domain::TaskId;

    #[test]
    fn test_render_is_a_projection() {
        let task = Task::new(TaskId::from("42"), "Title", "Body");
        let card = render_card(&task);

        assert_eq!(card.task_id, task.id);
        assert_eq!(card.heading, "Title");
        assert_eq!(card.body, "Body");
        assert!(card.draggable);
        assert!(card.handles(Binding::DragStart));
        assert!(card.handles(Binding::DeleteClick));
        assert_eq!(render_card(&task), card);
    }
}
