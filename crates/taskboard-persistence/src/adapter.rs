use crate::serialization::JsonSerializer;
use crate::traits::{KeyValueStore, Serializer};
use taskboard_core::BoardResult;
use taskboard_domain::Board;

/// Reads and writes the whole board as one record under a fixed key.
///
/// Loading never fails: a missing, unreadable or malformed record is
/// reported through tracing and replaced by the empty board.
#[derive(Debug, Clone)]
pub struct BoardRepository<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> BoardRepository<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Serialize the full board and replace the stored record
    pub fn save(&mut self, board: &Board) -> BoardResult<()> {
        let text = JsonSerializer.serialize(board)?;
        self.store.set(&self.key, &text)?;
        tracing::debug!(
            "Persisted board under '{}' ({} tasks)",
            self.key,
            board.len()
        );
        Ok(())
    }

    pub fn load(&self) -> Board {
        let text = match self.store.get(&self.key) {
            Ok(Some(text)) => text,
            Ok(None) => {
                tracing::info!("No saved board under '{}', starting empty", self.key);
                return Board::new();
            }
            Err(e) => {
                tracing::warn!("Could not read board under '{}': {}", self.key, e);
                return Board::new();
            }
        };

        let mut board: Board = match JsonSerializer.deserialize(&text) {
            Ok(board) => board,
            Err(e) => {
                tracing::warn!("Discarding malformed board under '{}': {}", self.key, e);
                return Board::new();
            }
        };

        let dropped = board.dedupe();
        if dropped > 0 {
            tracing::warn!(
                "Dropped {} duplicated task(s) while loading '{}'",
                dropped,
                self.key
            );
        }
        tracing::info!("Loaded board under '{}' ({} tasks)", self.key, board.len());
        board
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::MockKeyValueStore;
    use mockall::predicate::eq;
    use taskboard_core::BoardError;
    use taskboard_domain::{Task, TaskId};

    #[test]
    fn test_save_writes_under_key() {
        let mut mock = MockKeyValueStore::new();
        mock.expect_set()
            .with(
                eq("kanbanTasks"),
                eq(r#"{"todo":[],"progress":[],"done":[]}"#),
            )
            .times(1)
            .returning(|_, _| Ok(()));

        let mut repo = BoardRepository::new(mock, "kanbanTasks");
        repo.save(&Board::new()).unwrap();
    }

    #[test]
    fn test_save_propagates_store_failure() {
        let mut mock = MockKeyValueStore::new();
        mock.expect_set()
            .returning(|_, _| Err(BoardError::Internal("disk full".to_string())));

        let mut repo = BoardRepository::new(mock, "kanbanTasks");
        assert!(repo.save(&Board::new()).is_err());
    }

    #[test]
    fn test_read_failure_loads_empty_board() {
        let mut mock = MockKeyValueStore::new();
        mock.expect_get()
            .returning(|_| Err(BoardError::Internal("unreadable".to_string())));

        let repo = BoardRepository::new(mock, "kanbanTasks");
        assert_eq!(repo.load(), Board::new());
    }

    #[test]
    fn test_absent_record_loads_empty_board() {
        let mut mock = MockKeyValueStore::new();
        mock.expect_get().with(eq("kanbanTasks")).returning(|_| Ok(None));

        let repo = BoardRepository::new(mock, "kanbanTasks");
        assert_eq!(repo.load(), Board::new());
    }

    #[test]
    fn test_malformed_record_loads_empty_board() {
        for garbage in ["", "null", "[1,2,3]", "{\"todo\": 5}", "{\"todo\":[{\"id\":1}]}"] {
            let mut mock = MockKeyValueStore::new();
            let text = garbage.to_string();
            mock.expect_get().returning(move |_| Ok(Some(text.clone())));

            let repo = BoardRepository::new(mock, "kanbanTasks");
            assert_eq!(repo.load(), Board::new(), "input: {garbage}");
        }
    }

    #[test]
    fn test_load_repairs_duplicated_ids() {
        let mut mock = MockKeyValueStore::new();
        mock.expect_get().returning(|_| {
            Ok(Some(
                r#"{"todo":[{"id":"1","title":"A","desc":""}],
                    "progress":[{"id":"1","title":"A","desc":""}],
                    "done":[]}"#
                    .to_string(),
            ))
        });

        let repo = BoardRepository::new(mock, "kanbanTasks");
        let board = repo.load();
        assert_eq!(
            board.todo,
            vec![Task::new(TaskId::from("1"), "A", "")]
        );
        assert!(board.progress.is_empty());
    }
}
