use crate::board::{Board, LaneCounts};
use crate::id::IdGenerator;
use crate::lane::Lane;
use crate::task::{Task, TaskId};
use taskboard_core::{BoardError, BoardResult};

/// Authoritative owner of the board.
///
/// Every mutation goes through here and keeps the board free of
/// duplicated ids. Mutations on unknown ids are no-ops, never errors.
#[derive(Debug, Clone, Default)]
pub struct TaskStore {
    board: Board,
    ids: IdGenerator,
}

impl TaskStore {
    pub fn new(ids: IdGenerator) -> Self {
        Self::from_board(Board::new(), ids)
    }

    pub fn from_board(mut board: Board, ids: IdGenerator) -> Self {
        let dropped = board.dedupe();
        if dropped > 0 {
            tracing::warn!("Dropped {} duplicated task(s) from the board", dropped);
        }
        Self { board, ids }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn get_lane(&self, lane: Lane) -> &[Task] {
        self.board.lane(lane)
    }

    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.board.get(id)
    }

    pub fn counts(&self) -> LaneCounts {
        self.board.counts()
    }

    /// Create a task at the end of `todo`. A blank title is rejected and nothing changes.
    pub fn add_task(&mut self, title: &str, description: &str) -> BoardResult<Task> {
        if title.trim().is_empty() {
            return Err(BoardError::Validation("Task title is required".to_string()));
        }
        let board = &self.board;
        let id = self.ids.next_id(|candidate| board.contains(candidate));
        let task = Task::new(id, title, description);
        self.board.todo.push(task.clone());
        tracing::debug!("Added task {} to {}", task.id, Lane::Todo);
        Ok(task)
    }

    /// Remove the task wherever it is. Returns whether anything was removed.
    pub fn delete_task(&mut self, id: &TaskId) -> bool {
        match self.board.remove_everywhere(id) {
            Some(_) => {
                tracing::debug!("Deleted task {}", id);
                true
            }
            None => {
                tracing::debug!("Delete of unknown task {} ignored", id);
                false
            }
        }
    }

    /// Take the task out of its lane and append it to `destination`.
    /// Returns whether the task existed.
    pub fn move_task(&mut self, id: &TaskId, destination: Lane) -> bool {
        match self.board.remove_everywhere(id) {
            Some(task) => {
                self.board.lane_mut(destination).push(task);
                tracing::debug!("Moved task {} to {}", id, destination);
                true
            }
            None => {
                tracing::debug!("Move of unknown task {} ignored", id);
                false
            }
        }
    }

    /// Move variant used by drops: the appended record carries the given
    /// title and description instead of the stored ones.
    pub fn relocate_task(
        &mut self,
        id: &TaskId,
        destination: Lane,
        title: &str,
        description: &str,
    ) -> bool {
        if self.board.remove_everywhere(id).is_none() {
            tracing::debug!("Relocation of unknown task {} ignored", id);
            return false;
        }
        self.board
            .lane_mut(destination)
            .push(Task::new(id.clone(), title, description));
        tracing::debug!("Relocated task {} to {}", id, destination);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use taskboard_core::IdStrategy;

    fn frozen() -> i64 {
        1_000
    }

    fn store() -> TaskStore {
        TaskStore::new(IdGenerator::with_clock(IdStrategy::Timestamp, frozen))
    }

    #[test]
    fn test_add_appends_to_todo() {
        let mut store = store();
        let first = store.add_task("First", "").unwrap();
        let second = store.add_task("Second", "details").unwrap();

        let todo = store.get_lane(Lane::Todo);
        assert_eq!(todo.len(), 2);
        assert_eq!(todo[0], first);
        assert_eq!(todo[1], second);
        assert_eq!(second.description, "details");
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn test_blank_title_is_rejected_without_change() {
        let mut store = store();
        let err = store.add_task("   ", "desc").unwrap_err();
        assert!(err.is_validation());
        assert!(store.board().is_empty());
    }

    #[test]
    fn test_add_skips_ids_loaded_from_storage() {
        let board = Board {
            todo: vec![Task::new(TaskId::from("1000"), "Old", "")],
            ..Default::default()
        };
        let mut store = TaskStore::from_board(
            board,
            IdGenerator::with_clock(IdStrategy::Timestamp, frozen),
        );
        let task = store.add_task("New", "").unwrap();
        assert_eq!(task.id.as_str(), "1001");
        assert!(store.board().has_unique_ids());
    }

    #[test]
    fn test_move_to_same_lane_reappends() {
        let mut store = store();
        let a = store.add_task("A", "").unwrap();
        let b = store.add_task("B", "").unwrap();

        assert!(store.move_task(&a.id, Lane::Todo));
        let todo = store.get_lane(Lane::Todo);
        assert_eq!(todo[0].id, b.id);
        assert_eq!(todo[1].id, a.id);
    }

    #[test]
    fn test_unknown_ids_are_noops() {
        let mut store = store();
        store.add_task("A", "").unwrap();
        let before = store.board().clone();

        let ghost = TaskId::from("ghost");
        assert!(!store.delete_task(&ghost));
        assert!(!store.move_task(&ghost, Lane::Done));
        assert!(!store.relocate_task(&ghost, Lane::Done, "x", "y"));
        assert_eq!(store.board(), &before);
    }

    #[test]
    fn test_relocate_uses_given_text() {
        let mut store = store();
        let task = store.add_task("Stored", "stored desc").unwrap();

        assert!(store.relocate_task(&task.id, Lane::Done, "Shown", "shown desc"));
        let moved = store.get(&task.id).unwrap();
        assert_eq!(moved.title, "Shown");
        assert_eq!(moved.description, "shown desc");
        assert_eq!(store.counts(), LaneCounts::new(0, 0, 1));
    }

    #[test]
    fn test_delete_is_idempotent() {
        let mut store = store();
        let task = store.add_task("A", "").unwrap();
        assert!(store.delete_task(&task.id));
        assert!(!store.delete_task(&task.id));
        assert!(store.board().is_empty());
    }

    #[test]
    fn test_from_board_repairs_duplicates() {
        let dup = Task::new(TaskId::from("7"), "Dup", "");
        let board = Board {
            todo: vec![dup.clone()],
            progress: vec![dup],
            done: vec![],
        };
        let store = TaskStore::from_board(board, IdGenerator::default());
        assert_eq!(store.counts(), LaneCounts::new(1, 0, 0));
    }
}
