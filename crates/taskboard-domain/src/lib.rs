pub mod board;
pub mod id;
pub mod lane;
pub mod store;
pub mod task;

pub use board::{Board, LaneCounts};
pub use id::IdGenerator;
pub use lane::{Lane, ParseLaneError};
pub use store::TaskStore;
pub use task::{Task, TaskId};
