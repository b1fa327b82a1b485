// codefinder: CLI frontend for the procedure-code catalog
// Argument parsing, command dispatch, terminal rendering

mod cli;
mod config;
mod output;

use cli::{Cli, Command};
use clap::Parser;
use codefinder_core::{CatalogStore, JsonFileStorage, RecordFields, resolve_home};
use config::{ColorMode, load_cli_config};
use output::OutputHandler;
use std::io::{self, ErrorKind, IsTerminal, Write};

/// Prompt user for confirmation (y/N). Returns true if user confirms.
/// If stdin is not a terminal (piped input), returns false.
fn confirm_action(prompt: &str) -> bool {
    let stdin = io::stdin();
    if !stdin.is_terminal() {
        return false;
    }

    eprint!("{} [y/N] ", prompt);
    io::stderr().flush().ok();

    let mut input = String::new();
    if stdin.read_line(&mut input).is_err() {
        return false;
    }

    matches!(input.trim().to_lowercase().as_str(), "y" | "yes")
}

fn main() -> io::Result<()> {
    let args = Cli::parse();

    let color_flag = match args.color.as_deref() {
        Some(mode) => Some(ColorMode::from_flag(mode).ok_or_else(|| {
            io::Error::new(
                ErrorKind::InvalidInput,
                format!("invalid --color mode '{}' (auto, always, never)", mode),
            )
        })?),
        None => None,
    };

    let home = resolve_home(args.home.clone())?;
    let color = color_flag
        .unwrap_or_else(|| load_cli_config(&home).color)
        .use_color();
    let output = OutputHandler::new(color, args.json);
    let yes = args.yes;

    let command = args.into_command()?;
    let mut store = CatalogStore::open(JsonFileStorage::new(&home));

    match command {
        Command::Search { query } => {
            let results = store.search(&query);
            output.print_search_results(&results, &query)?;
        }
        Command::List => {
            output.print_catalog(store.records())?;
        }
        Command::Add { fields } => {
            let record = store.create(fields);
            output.print_record("Added", &record);
        }
        Command::Edit {
            id,
            code,
            name_ch,
            name_en,
        } => match store.get(&id).cloned() {
            Some(existing) => {
                let fields = RecordFields {
                    code: code.unwrap_or(existing.code),
                    name_ch: name_ch.unwrap_or(existing.name_ch),
                    name_en: name_en.unwrap_or(existing.name_en),
                };
                store.update(&id, fields);
                if let Some(updated) = store.get(&id) {
                    output.print_record("Updated", updated);
                }
            }
            None => output.note(&format!("No record with id '{}'; nothing changed.", id)),
        },
        Command::Delete { id } => match store.get(&id).cloned() {
            Some(record) => {
                let summary = format!("{} {} / {}", record.code, record.name_ch, record.name_en);
                if yes || confirm_action(&format!("Delete {}?", summary)) {
                    store.delete(&id);
                    output.note(&format!("Deleted {} (id {}).", summary, id));
                } else {
                    output.note("Delete cancelled.");
                }
            }
            None => output.note(&format!("No record with id '{}'; nothing changed.", id)),
        },
    }

    Ok(())
}
