//! Minimal list variant: no ids, no validation beyond the empty check,
//! rows addressed by position, state persisted as the rendered fragment.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use ticklist::repository::Repository;
use ticklist::services::markup_service::MarkupService;
use ticklist::services::notification::{Notifier, StderrNotifier};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ticklist-lite", about = "A bare-bones persistent list", version)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Store file holding the persisted state
    #[arg(long, env = "TICKLIST_STORE", default_value = "ticklist.json", global = true)]
    store: PathBuf,
}

#[derive(Subcommand)]
enum Command {
    /// Append a row to the list
    Add { text: String },
    /// Check or uncheck row N (1-based)
    Toggle { n: usize },
    /// Remove row N (1-based)
    Delete { n: usize },
    /// Print the list
    Show,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let repository = Repository::open(&args.store);
    let mut service = MarkupService::new(repository, StderrNotifier);

    match args.command {
        Command::Add { text } => service.add(&text),
        Command::Toggle { n } => {
            service.toggle(n);
        }
        Command::Delete { n } => {
            service.delete(n);
        }
        Command::Show => {}
    }

    show(&mut io::stdout().lock(), &service)
}

fn show<W: Write, N: Notifier>(out: &mut W, service: &MarkupService<N>) -> Result<()> {
    for (i, row) in service.rows().iter().enumerate() {
        writeln!(
            out,
            "{:>3}. {} {}",
            i + 1,
            if row.checked { "[x]" } else { "[ ]" },
            row.text,
        )?;
    }
    Ok(())
}
