//! Table and JSON output for CLI commands.

use serde::Serialize;
use tabled::{Table, Tabled};

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// JSON output
    Json,
}

/// Writes command results to stdout in the selected format.
#[derive(Debug, Clone, Copy)]
pub struct Output {
    format: OutputFormat,
}

impl Output {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Print rows as a table or a JSON array.
    pub fn list<T: Serialize + Tabled>(&self, rows: &[T]) {
        println!("{}", self.render_list(rows));
    }

    /// Print a single row.
    pub fn item<T: Serialize + Tabled>(&self, row: &T) {
        println!("{}", self.render_item(row));
    }

    /// Print labelled long-form fields below an item. JSON output omits them.
    pub fn details(&self, fields: &[(&str, &str)]) {
        if self.format == OutputFormat::Table {
            for (key, value) in fields {
                println!("  {:<16} {}", format!("{key}:"), value);
            }
        }
    }

    pub fn success(&self, msg: &str) {
        println!("✓ {msg}");
    }

    pub fn warning(&self, msg: &str) {
        println!("⚠ {msg}");
    }

    fn render_list<T: Serialize + Tabled>(&self, rows: &[T]) -> String {
        match self.format {
            OutputFormat::Table if rows.is_empty() => "No results found.".to_string(),
            OutputFormat::Table => Table::new(rows).to_string(),
            OutputFormat::Json => to_json(rows, "[]"),
        }
    }

    fn render_item<T: Serialize + Tabled>(&self, row: &T) -> String {
        match self.format {
            OutputFormat::Table => Table::new(std::iter::once(row)).to_string(),
            OutputFormat::Json => to_json(row, "{}"),
        }
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T, fallback: &str) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| fallback.to_string())
}

/// Print an error message to stderr.
pub fn error(msg: &str) {
    eprintln!("✗ {msg}");
}
