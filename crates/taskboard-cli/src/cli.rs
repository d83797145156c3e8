use clap::{Parser, Subcommand};
use std::path::PathBuf;
use taskboard_domain::Lane;

#[derive(Parser)]
#[command(name = "taskboard")]
#[command(about = "A three-lane task board in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Directory holding the board record (or set TASKBOARD_STORE env var)
    #[arg(long, value_name = "DIR", env = "TASKBOARD_STORE", global = true)]
    pub store: Option<PathBuf>,

    /// Key the board is stored under (or set TASKBOARD_KEY env var)
    #[arg(long, value_name = "KEY", env = "TASKBOARD_KEY", global = true)]
    pub key: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a task to the todo lane
    Add {
        #[arg(long)]
        title: String,
        #[arg(long, default_value = "")]
        desc: String,
    },
    /// Print the board, or one lane of it
    List {
        #[arg(long)]
        lane: Option<Lane>,
    },
    /// Move a task to the end of a lane
    Move {
        #[arg(long)]
        id: String,
        #[arg(long)]
        lane: Lane,
    },
    /// Delete a task
    Delete {
        #[arg(long)]
        id: String,
    },
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
