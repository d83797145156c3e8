use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One of the three fixed board lanes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lane {
    Todo,
    Progress,
    Done,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown lane '{0}' (expected todo, progress or done)")]
pub struct ParseLaneError(pub String);

impl Lane {
    pub const ALL: [Lane; 3] = [Lane::Todo, Lane::Progress, Lane::Done];

    /// Key used in the persisted record and on the command line
    pub fn key(self) -> &'static str {
        match self {
            Lane::Todo => "todo",
            Lane::Progress => "progress",
            Lane::Done => "done",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Lane::Todo => "To Do",
            Lane::Progress => "In Progress",
            Lane::Done => "Done",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Lane::Todo => 0,
            Lane::Progress => 1,
            Lane::Done => 2,
        }
    }

    /// Lane to the right, saturating at `Done`
    pub fn next(self) -> Lane {
        match self {
            Lane::Todo => Lane::Progress,
            Lane::Progress | Lane::Done => Lane::Done,
        }
    }

    /// Lane to the left, saturating at `Todo`
    pub fn prev(self) -> Lane {
        match self {
            Lane::Todo | Lane::Progress => Lane::Todo,
            Lane::Done => Lane::Progress,
        }
    }
}

impl fmt::Display for Lane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Lane {
    type Err = ParseLaneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "todo" => Ok(Lane::Todo),
            "progress" | "in-progress" | "in_progress" => Ok(Lane::Progress),
            "done" => Ok(Lane::Done),
            _ => Err(ParseLaneError(s.to_string())),
        }
    }
}
