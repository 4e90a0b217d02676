pub mod render;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::domain::task::Filter;
use crate::repository::Repository;
use crate::services::notification::StderrNotifier;
use crate::services::task_service::TaskService;

#[derive(Parser)]
#[command(name = "ticklist", about = "A small persistent task list", version)]
pub struct Args {
    #[command(subcommand)]
    command: Command,

    /// Store file holding the persisted state
    #[arg(long, env = "TICKLIST_STORE", default_value = "ticklist.json", global = true)]
    store: PathBuf,
}

#[derive(Subcommand)]
enum Command {
    /// Add a task to the end of the list
    Add {
        /// Task text (at most 100 characters)
        text: String,
    },
    /// Show the list, optionally filtered
    List {
        /// Which tasks to show
        #[arg(long, default_value = "all")]
        filter: Filter,
    },
    /// Flip a task between active and completed
    Toggle {
        /// Task id as shown by `list`
        id: i64,
    },
    /// Remove a task
    Delete {
        /// Task id as shown by `list`
        id: i64,
    },
    /// Remove every completed task
    ClearCompleted {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// Show total and completed counts
    Stats,
}

impl Args {
    pub fn run(self) -> Result<()> {
        let repository = Repository::open(&self.store);
        let mut service = TaskService::new(repository, StderrNotifier);
        let mut out = io::stdout().lock();

        match self.command {
            Command::Add { text } => {
                if service.add_task(&text).is_some() {
                    render::list(&mut out, &service)?;
                }
            }
            Command::List { filter } => {
                service.set_filter(filter);
                render::list(&mut out, &service)?;
            }
            Command::Toggle { id } => {
                if service.toggle_task(id) {
                    render::list(&mut out, &service)?;
                }
            }
            Command::Delete { id } => {
                if service.delete_task(id) {
                    render::list(&mut out, &service)?;
                }
            }
            Command::ClearCompleted { yes } => {
                let removed = service.clear_completed(|count| yes || confirm_clear(count));
                if removed > 0 {
                    writeln!(out, "Removed {} completed task(s)", removed)?;
                    render::list(&mut out, &service)?;
                }
            }
            Command::Stats => {
                render::stats(&mut out, service.stats())?;
            }
        }
        Ok(())
    }
}

fn confirm_clear(count: usize) -> bool {
    eprint!("Delete {} completed task(s)? [y/N] ", count);
    let _ = io::stderr().flush();
    let mut answer = String::new();
    if io::stdin().lock().read_line(&mut answer).is_err() {
        return false;
    }
    matches!(answer.trim(), "y" | "Y" | "yes")
}
