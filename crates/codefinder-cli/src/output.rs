//! Output handling for the CLI.
//!
//! Search results and the admin table go to stdout; diagnostics go to
//! stderr. Matched substrings render in reverse video when highlighting is
//! on, otherwise plain text — output stays pipe-friendly either way.

use codefinder_core::{CodeRecord, highlight};
use std::io;

const HIGHLIGHT_ON: &str = "\x1b[7m";
const HIGHLIGHT_OFF: &str = "\x1b[27m";

/// CLI output handler.
pub struct OutputHandler {
    color: bool,
    json: bool,
}

impl OutputHandler {
    pub fn new(color: bool, json: bool) -> Self {
        Self { color, json }
    }

    /// Render one field with the query's matches marked.
    fn highlighted(&self, text: &str, query: &str) -> String {
        if !self.color {
            return text.to_string();
        }
        highlight(text, query)
            .iter()
            .map(|segment| {
                if segment.matched {
                    format!("{}{}{}", HIGHLIGHT_ON, segment.text, HIGHLIGHT_OFF)
                } else {
                    segment.text.clone()
                }
            })
            .collect()
    }

    /// Print search results: count line plus one block per record.
    pub fn print_search_results(&self, results: &[&CodeRecord], query: &str) -> io::Result<()> {
        if self.json {
            return print_json(results);
        }

        if query.trim().is_empty() {
            println!("Enter keywords to search (AND search; try: codefinder appendectomy).");
            return Ok(());
        }
        if results.is_empty() {
            println!("No results found for \"{}\".", query);
            return Ok(());
        }

        println!("Found {} result(s) for \"{}\".", results.len(), query);
        for record in results {
            println!();
            println!("{}", self.highlighted(&record.code, query));
            println!("  {}", self.highlighted(&record.name_ch, query));
            println!("  {}", self.highlighted(&record.name_en, query));
        }
        Ok(())
    }

    /// Print the admin table: every record with its id, in catalog order.
    pub fn print_catalog(&self, records: &[CodeRecord]) -> io::Result<()> {
        if self.json {
            let refs: Vec<&CodeRecord> = records.iter().collect();
            return print_json(&refs);
        }

        let code_width = records
            .iter()
            .map(|r| r.code.chars().count())
            .max()
            .unwrap_or(0)
            .max("CODE".len());

        println!("{:<width$}  {:<36}  NAME", "CODE", "ID", width = code_width);
        for record in records {
            println!(
                "{:<width$}  {:<36}  {} / {}",
                record.code,
                record.id,
                record.name_ch,
                record.name_en,
                width = code_width
            );
        }
        println!();
        println!("{} record(s).", records.len());
        Ok(())
    }

    /// Print a one-line summary of a record after a mutation.
    pub fn print_record(&self, prefix: &str, record: &CodeRecord) {
        println!(
            "{}: {} {} / {} (id {})",
            prefix, record.code, record.name_ch, record.name_en, record.id
        );
    }

    /// Informational note (absent ids, skipped deletes).
    pub fn note(&self, message: &str) {
        println!("{}", message);
    }
}

fn print_json(records: &[&CodeRecord]) -> io::Result<()> {
    let json = serde_json::to_string_pretty(records)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    println!("{}", json);
    Ok(())
}
