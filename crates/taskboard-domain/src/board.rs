use crate::lane::Lane;
use crate::task::{Task, TaskId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Lane → ordered tasks. Field names are the persisted wire format.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    #[serde(default)]
    pub todo: Vec<Task>,
    #[serde(default)]
    pub progress: Vec<Task>,
    #[serde(default)]
    pub done: Vec<Task>,
}

/// Number of tasks per lane
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaneCounts {
    pub todo: usize,
    pub progress: usize,
    pub done: usize,
}

impl LaneCounts {
    pub fn new(todo: usize, progress: usize, done: usize) -> Self {
        Self {
            todo,
            progress,
            done,
        }
    }

    pub fn get(&self, lane: Lane) -> usize {
        match lane {
            Lane::Todo => self.todo,
            Lane::Progress => self.progress,
            Lane::Done => self.done,
        }
    }

    pub fn set(&mut self, lane: Lane, count: usize) {
        match lane {
            Lane::Todo => self.todo = count,
            Lane::Progress => self.progress = count,
            Lane::Done => self.done = count,
        }
    }

    pub fn total(&self) -> usize {
        self.todo + self.progress + self.done
    }
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lane(&self, lane: Lane) -> &[Task] {
        match lane {
            Lane::Todo => &self.todo,
            Lane::Progress => &self.progress,
            Lane::Done => &self.done,
        }
    }

    pub(crate) fn lane_mut(&mut self, lane: Lane) -> &mut Vec<Task> {
        match lane {
            Lane::Todo => &mut self.todo,
            Lane::Progress => &mut self.progress,
            Lane::Done => &mut self.done,
        }
    }

    /// Every task with the lane holding it, lanes in board order
    pub fn iter(&self) -> impl Iterator<Item = (Lane, &Task)> {
        Lane::ALL
            .into_iter()
            .flat_map(move |lane| self.lane(lane).iter().map(move |task| (lane, task)))
    }

    pub fn locate(&self, id: &TaskId) -> Option<(Lane, usize)> {
        Lane::ALL.into_iter().find_map(|lane| {
            self.lane(lane)
                .iter()
                .position(|task| &task.id == id)
                .map(|index| (lane, index))
        })
    }

    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.locate(id).map(|(lane, index)| &self.lane(lane)[index])
    }

    pub fn contains(&self, id: &TaskId) -> bool {
        self.locate(id).is_some()
    }

    pub fn counts(&self) -> LaneCounts {
        LaneCounts::new(self.todo.len(), self.progress.len(), self.done.len())
    }

    pub fn len(&self) -> usize {
        self.counts().total()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True when no id appears twice anywhere on the board
    pub fn has_unique_ids(&self) -> bool {
        let mut seen = HashSet::new();
        self.iter().all(|(_, task)| seen.insert(&task.id))
    }

    /// Remove every occurrence of `id` from every lane, returning the first one found
    pub(crate) fn remove_everywhere(&mut self, id: &TaskId) -> Option<Task> {
        let mut removed = None;
        for lane in Lane::ALL {
            let tasks = self.lane_mut(lane);
            if let Some(index) = tasks.iter().position(|task| &task.id == id) {
                let task = tasks.remove(index);
                tasks.retain(|task| &task.id != id);
                removed.get_or_insert(task);
            }
        }
        removed
    }

    /// Drop later duplicates of an id, keeping the first occurrence in board order.
    /// Returns how many tasks were dropped.
    pub fn dedupe(&mut self) -> usize {
        let mut seen = HashSet::new();
        let mut dropped = 0;
        for lane in Lane::ALL {
            let tasks = self.lane_mut(lane);
            let before = tasks.len();
            tasks.retain(|task| seen.insert(task.id.clone()));
            dropped += before - tasks.len();
        }
        dropped
    }
}
