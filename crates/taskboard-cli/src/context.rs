use serde::Serialize;
use std::path::Path;
use taskboard_core::BoardResult;
use taskboard_domain::{IdGenerator, Lane, Task, TaskId, TaskStore};
use taskboard_persistence::{BoardRepository, FileKeyValueStore};

/// Board snapshot with counts, as printed by `list`
#[derive(Debug, Serialize)]
pub struct BoardView<'a> {
    pub todo: &'a [Task],
    pub progress: &'a [Task],
    pub done: &'a [Task],
    pub counts: taskboard_domain::LaneCounts,
}

pub struct CliContext {
    pub store: TaskStore,
    repository: BoardRepository<FileKeyValueStore>,
}

impl CliContext {
    pub fn load(dir: &Path, key: &str, ids: IdGenerator) -> Self {
        let repository = BoardRepository::new(FileKeyValueStore::new(dir), key);
        let store = TaskStore::from_board(repository.load(), ids);
        Self { store, repository }
    }

    pub fn save(&mut self) -> BoardResult<()> {
        self.repository.save(self.store.board())
    }

    pub fn add(&mut self, title: &str, desc: &str) -> BoardResult<Task> {
        let task = self.store.add_task(title.trim(), desc.trim())?;
        self.save()?;
        Ok(task)
    }

    pub fn move_to(&mut self, id: &TaskId, lane: Lane) -> BoardResult<bool> {
        let moved = self.store.move_task(id, lane);
        if moved {
            self.save()?;
        }
        Ok(moved)
    }

    pub fn delete(&mut self, id: &TaskId) -> BoardResult<bool> {
        let deleted = self.store.delete_task(id);
        if deleted {
            self.save()?;
        }
        Ok(deleted)
    }

    pub fn view(&self) -> BoardView<'_> {
        let board = self.store.board();
        BoardView {
            todo: &board.todo,
            progress: &board.progress,
            done: &board.done,
            counts: board.counts(),
        }
    }
}
