//! Command-line front-end for the notes board.
//!
//! Each invocation loads the board from the storage file, forwards one
//! gesture sequence to the page, and exits.

use anyhow::{anyhow, bail, Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use notewall_core::db::{open_db, open_db_in_memory};
use notewall_core::{
    init_logging, Gesture, NoteColor, NoteId, NoteStore, NotesPage, NotewallConfig, Route,
    SlotRepository, SqliteSlotRepository,
};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "notewall", version, about = "Local sticky-notes board")]
struct Cli {
    /// JSON config file; flags override its values.
    #[arg(long)]
    config: Option<PathBuf>,
    /// SQLite storage file. Without it notes live only for this run.
    #[arg(long)]
    db: Option<PathBuf>,
    /// Absolute directory for rolling log files.
    #[arg(long)]
    log_dir: Option<PathBuf>,
    #[arg(long)]
    log_level: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Prints core linkage info.
    Ping,
    /// Lists notes in board order.
    List,
    /// Creates a note.
    Add {
        text: String,
        #[arg(long, default_value = "")]
        title: String,
    },
    /// Replaces a note's title and/or text.
    Edit {
        id: NoteId,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        text: Option<String>,
    },
    /// Deletes a note.
    Delete { id: NoteId },
    /// Drags note `dragged` onto note `target`.
    Move { dragged: NoteId, target: NoteId },
    /// Sets a note color (blue|green|purple|orange).
    Color { id: NoteId, color: String },
    /// Resolves a front-end path to a page.
    Route { path: String },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = resolve_config(&cli)?;

    if let Some(log_dir) = config.log_dir.as_ref() {
        init_logging(&config.log_level, log_dir).context("failed to initialize logging")?;
    }

    let conn = match config.db_path.as_ref() {
        Some(path) => open_db(path)
            .with_context(|| format!("failed to open storage `{}`", path.display()))?,
        None => open_db_in_memory().context("failed to open in-memory storage")?,
    };
    let slots = SqliteSlotRepository::try_new(&conn)?;
    let store = NoteStore::with_key(slots, config.storage_key.clone());
    let mut page = NotesPage::load(store, config.page_options());

    run(&mut page, cli.command)
}

fn resolve_config(cli: &Cli) -> Result<NotewallConfig> {
    let mut config = match cli.config.as_ref() {
        Some(path) => NotewallConfig::from_json_file(path)?,
        None => NotewallConfig::default(),
    };
    if let Some(db) = cli.db.clone() {
        config.db_path = Some(db);
    }
    if let Some(log_dir) = cli.log_dir.clone() {
        config.log_dir = Some(log_dir);
    }
    if let Some(level) = cli.log_level.clone() {
        config.log_level = level;
    }
    config.validate()?;
    Ok(config)
}

fn run<S: SlotRepository>(page: &mut NotesPage<S>, command: Command) -> Result<()> {
    match command {
        Command::Ping => {
            println!("notewall_core ping={}", notewall_core::ping());
            println!("notewall_core version={}", notewall_core::core_version());
        }
        Command::List => print_notes(page),
        Command::Add { text, title } => {
            page.handle(Gesture::OpenNewNote)?;
            page.handle(Gesture::EditTitle(title))?;
            page.handle(Gesture::EditText(text))?;
            let id = page.save_editor()?;
            info!("event=cli_add module=cli status=ok note_id={id}");
            println!("{id}");
        }
        Command::Edit { id, title, text } => {
            page.handle(Gesture::OpenEditor(id))?;
            if let Some(title) = title {
                page.handle(Gesture::EditTitle(title))?;
            }
            if let Some(text) = text {
                page.handle(Gesture::EditText(text))?;
            }
            page.save_editor()?;
        }
        Command::Delete { id } => {
            if !page.handle(Gesture::Delete(id))? {
                bail!("note {id} not found");
            }
        }
        Command::Move { dragged, target } => {
            page.handle(Gesture::DragStart(dragged))?;
            if !page.handle(Gesture::Drop(target))? {
                println!("order unchanged");
            }
        }
        Command::Color { id, color } => {
            let color = NoteColor::parse(&color)
                .ok_or_else(|| anyhow!("unknown color `{color}`; expected blue|green|purple|orange"))?;
            if !page.set_color(id, color)? {
                bail!("note {id} not found");
            }
        }
        Command::Route { path } => match Route::parse(&path) {
            Some(route) => println!("{path} -> {}", route.path()),
            None => bail!("no page for path `{path}`"),
        },
    }
    Ok(())
}

fn print_notes<S: SlotRepository>(page: &NotesPage<S>) {
    if page.notes().is_empty() {
        println!("(no notes)");
        return;
    }
    for note in page.notes() {
        println!("{}\t{}\t{}", note.id, note.color, note.display_title());
        for line in note.text.lines() {
            println!("\t{line}");
        }
    }
}
