//! CLI argument parsing with clap.
//!
//! Parses the flag surface and converts it to a validated [`Command`].
//! Field validation (the required-field contract of the editing surface)
//! happens here, before anything reaches the catalog store.

use clap::Parser;
use codefinder_core::RecordFields;
use std::io::{self, ErrorKind};
use std::path::PathBuf;

const CLI_AFTER_HELP: &str = "\
Examples:
  codefinder appendectomy            search the catalog (AND search)
  codefinder 73202 laser             every keyword must match somewhere
  codefinder -L                      list the full catalog with ids
  codefinder --add --code 73202E --zh 闌尾切除術 --en Appendectomy
  codefinder --edit <ID> --en 'Appendectomy (revised)'
  codefinder --delete <ID>           asks for confirmation; --yes skips it

Data lives under ~/.codefinder (override with --home).";

/// codefinder - keyword search over a local catalog of procedure codes
#[derive(Parser, Debug)]
#[command(
    name = "codefinder",
    version,
    about = "Keyword search over a local catalog of medical procedure codes",
    after_help = CLI_AFTER_HELP
)]
pub struct Cli {
    /// Search keywords (space-separated; every keyword must match)
    #[arg(value_name = "KEYWORD")]
    pub query: Vec<String>,

    // === Admin operations ===
    /// List the full catalog, including record ids
    #[arg(short = 'L', long = "list")]
    pub list: bool,

    /// Add a record (requires --code, --zh and --en)
    #[arg(long = "add")]
    pub add: bool,

    /// Edit the record with this id (give new values via --code/--zh/--en)
    #[arg(long = "edit", value_name = "ID")]
    pub edit: Option<String>,

    /// Delete the record with this id
    #[arg(long = "delete", value_name = "ID")]
    pub delete: Option<String>,

    // === Record fields (for --add / --edit) ===
    /// Procedure code
    #[arg(long = "code", value_name = "CODE")]
    pub code: Option<String>,

    /// Chinese name
    #[arg(long = "zh", value_name = "NAME")]
    pub name_ch: Option<String>,

    /// English name
    #[arg(long = "en", value_name = "NAME")]
    pub name_en: Option<String>,

    // === Behavior flags ===
    /// Skip the delete confirmation prompt
    #[arg(short = 'y', long = "yes")]
    pub yes: bool,

    /// Emit JSON instead of formatted text (search and list)
    #[arg(long = "json")]
    pub json: bool,

    /// Highlight matches: auto, always or never
    #[arg(long = "color", value_name = "MODE")]
    pub color: Option<String>,

    /// Use DIR as the data directory instead of ~/.codefinder
    #[arg(long = "home", value_name = "DIR")]
    pub home: Option<PathBuf>,
}

/// A validated operation, ready to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Keyword search (the default operation).
    Search { query: String },
    /// Admin table of the whole catalog.
    List,
    /// Create a record from complete fields.
    Add { fields: RecordFields },
    /// Update the given fields of one record; `None` keeps the old value.
    Edit {
        id: String,
        code: Option<String>,
        name_ch: Option<String>,
        name_en: Option<String>,
    },
    /// Delete one record by id.
    Delete { id: String },
}

fn usage_error(msg: &str) -> io::Error {
    io::Error::new(ErrorKind::InvalidInput, msg.to_string())
}

impl Cli {
    /// Convert parsed flags into a single validated [`Command`].
    pub fn into_command(self) -> io::Result<Command> {
        let ops = [
            self.list,
            self.add,
            self.edit.is_some(),
            self.delete.is_some(),
        ];
        if ops.iter().filter(|&&on| on).count() > 1 {
            return Err(usage_error(
                "choose one of --list, --add, --edit or --delete",
            ));
        }
        let has_op = ops.iter().any(|&on| on);
        if has_op && !self.query.is_empty() {
            return Err(usage_error("keywords cannot be combined with admin flags"));
        }
        let has_fields = self.code.is_some() || self.name_ch.is_some() || self.name_en.is_some();
        if has_fields && !self.add && self.edit.is_none() {
            return Err(usage_error("--code/--zh/--en only apply to --add and --edit"));
        }

        if self.list {
            return Ok(Command::List);
        }

        if self.add {
            let fields = RecordFields {
                code: self.code.unwrap_or_default(),
                name_ch: self.name_ch.unwrap_or_default(),
                name_en: self.name_en.unwrap_or_default(),
            };
            if !fields.is_complete() {
                return Err(usage_error(
                    "--add requires non-empty --code, --zh and --en",
                ));
            }
            return Ok(Command::Add { fields });
        }

        if let Some(id) = self.edit {
            if !has_fields {
                return Err(usage_error(
                    "--edit requires at least one of --code, --zh or --en",
                ));
            }
            for value in [&self.code, &self.name_ch, &self.name_en]
                .into_iter()
                .flatten()
            {
                if value.trim().is_empty() {
                    return Err(usage_error("field values cannot be empty"));
                }
            }
            return Ok(Command::Edit {
                id,
                code: self.code,
                name_ch: self.name_ch,
                name_en: self.name_en,
            });
        }

        if let Some(id) = self.delete {
            return Ok(Command::Delete { id });
        }

        Ok(Command::Search {
            query: self.query.join(" "),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("codefinder").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_bare_keywords_become_search() {
        let cmd = parse(&["append", "73202"]).into_command().unwrap();
        assert!(matches!(cmd, Command::Search { query } if query == "append 73202"));
    }

    #[test]
    fn test_no_args_is_empty_search() {
        let cmd = parse(&[]).into_command().unwrap();
        assert!(matches!(cmd, Command::Search { query } if query.is_empty()));
    }

    #[test]
    fn test_list() {
        assert_eq!(parse(&["-L"]).into_command().unwrap(), Command::List);
        assert_eq!(parse(&["--list"]).into_command().unwrap(), Command::List);
    }

    #[test]
    fn test_add_requires_all_fields() {
        let cli = parse(&["--add", "--code", "73202E", "--zh", "闌尾切除術"]);
        assert!(cli.into_command().is_err());

        let cli = parse(&[
            "--add", "--code", "73202E", "--zh", "闌尾切除術", "--en", "Appendectomy",
        ]);
        match cli.into_command().unwrap() {
            Command::Add { fields } => assert_eq!(fields.code, "73202E"),
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_add_rejects_blank_field() {
        let cli = parse(&["--add", "--code", "73202E", "--zh", " ", "--en", "X"]);
        assert!(cli.into_command().is_err());
    }

    #[test]
    fn test_edit_partial_fields() {
        let cli = parse(&["--edit", "some-id", "--en", "New name"]);
        match cli.into_command().unwrap() {
            Command::Edit {
                id,
                code,
                name_ch,
                name_en,
            } => {
                assert_eq!(id, "some-id");
                assert!(code.is_none());
                assert!(name_ch.is_none());
                assert_eq!(name_en.as_deref(), Some("New name"));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_edit_without_fields_rejected() {
        assert!(parse(&["--edit", "some-id"]).into_command().is_err());
    }

    #[test]
    fn test_edit_rejects_empty_value() {
        let cli = parse(&["--edit", "some-id", "--en", ""]);
        assert!(cli.into_command().is_err());
    }

    #[test]
    fn test_delete() {
        let cmd = parse(&["--delete", "some-id"]).into_command().unwrap();
        assert!(matches!(cmd, Command::Delete { id } if id == "some-id"));
    }

    #[test]
    fn test_conflicting_ops_rejected() {
        assert!(parse(&["-L", "--delete", "x"]).into_command().is_err());
        assert!(parse(&["append", "--add"]).into_command().is_err());
    }

    #[test]
    fn test_fields_without_op_rejected() {
        assert!(parse(&["--code", "73202E"]).into_command().is_err());
    }
}
