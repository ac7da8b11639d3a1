use std::fmt::Write;

use serde::Serialize;
use symbol_kind::{Kind, KindIdentifier};

use crate::cli::OutputFormat;

const UNKNOWN: &str = "unknown";
const YELLOW: &str = "\x1b[33m";
const RESET: &str = "\x1b[0m";

/// One resolved identifier from the `parse` command.
#[derive(Debug, Clone, Serialize)]
pub struct Resolution {
    /// The identifier exactly as given on the command line.
    pub input: String,
    /// Canonical identifier, or `None` when the input is unknown.
    pub identifier: Option<String>,
}

impl Resolution {
    pub fn new(input: &str) -> Self {
        let kind = KindIdentifier::parse(input);
        Self {
            input: input.to_owned(),
            identifier: (!kind.is_unknown()).then(|| kind.identifier().to_owned()),
        }
    }

    pub fn is_known(&self) -> bool {
        self.identifier.is_some()
    }
}

/// Render the canonical kind table.
pub fn render_kinds(format: OutputFormat, use_color: bool) -> String {
    let mut out = String::new();
    match format {
        OutputFormat::Compact => {
            for kind in KindIdentifier::known() {
                let _ = writeln!(out, "{kind}");
            }
        }
        OutputFormat::Table => {
            let rows: Vec<Row> = KindIdentifier::known()
                .map(|kind| (kind.identifier().to_owned(), format!("{kind:?}"), false))
                .collect();
            render_table(&mut out, ["IDENTIFIER", "VARIANT"], &rows, use_color);
        }
        OutputFormat::Json => {
            let kinds: Vec<KindIdentifier> = KindIdentifier::known().collect();
            out.push_str(&to_json(&kinds));
        }
    }
    out
}

/// Render the results of the `parse` command.
pub fn render_resolutions(results: &[Resolution], format: OutputFormat, use_color: bool) -> String {
    let mut out = String::new();
    match format {
        OutputFormat::Compact => {
            for r in results {
                let _ = writeln!(
                    out,
                    "{} -> {}",
                    r.input,
                    r.identifier.as_deref().unwrap_or(UNKNOWN)
                );
            }
            let unknown = results.iter().filter(|r| !r.is_known()).count();
            let _ = writeln!(out, "{} resolved, {} unknown", results.len(), unknown);
        }
        OutputFormat::Table => {
            let rows: Vec<Row> = results
                .iter()
                .map(|r| {
                    (
                        r.input.clone(),
                        r.identifier.clone().unwrap_or_else(|| UNKNOWN.to_owned()),
                        !r.is_known(),
                    )
                })
                .collect();
            render_table(&mut out, ["INPUT", "KIND"], &rows, use_color);
        }
        OutputFormat::Json => out.push_str(&to_json(results)),
    }
    out
}

/// Render decoded kind records from the `decode` command.
///
/// JSON output uses the canonical encoding of [`Kind`].
pub fn render_records(records: &[Kind], format: OutputFormat, use_color: bool) -> String {
    let mut out = String::new();
    match format {
        OutputFormat::Compact => {
            for kind in records {
                let label = if kind.identifier.is_unknown() {
                    format!("{UNKNOWN}({})", kind.identifier)
                } else {
                    kind.identifier.to_string()
                };
                if kind.display_name.is_empty() {
                    let _ = writeln!(out, "{label}");
                } else {
                    let _ = writeln!(out, "{label} \"{}\"", kind.display_name);
                }
            }
            let _ = writeln!(out, "{} records decoded", records.len());
        }
        OutputFormat::Table => {
            let rows: Vec<Row> = records
                .iter()
                .map(|kind| {
                    (
                        kind.identifier.to_string(),
                        kind.display_name.clone(),
                        kind.identifier.is_unknown(),
                    )
                })
                .collect();
            render_table(&mut out, ["IDENTIFIER", "DISPLAY NAME"], &rows, use_color);
        }
        OutputFormat::Json => out.push_str(&to_json(records)),
    }
    out
}

/// Left cell, right cell, and whether the row is flagged as unknown.
type Row = (String, String, bool);

/// Write a two-column table, auto-sized to the data. Flagged rows are colored when
/// `use_color` is set.
fn render_table(out: &mut String, headers: [&str; 2], rows: &[Row], use_color: bool) {
    let left_w = rows
        .iter()
        .map(|(left, _, _)| left.len())
        .chain(std::iter::once(headers[0].len()))
        .max()
        .unwrap_or(0);

    let _ = writeln!(out, "{:<left_w$}  {}", headers[0], headers[1]);
    for (left, right, flagged) in rows {
        let line = format!("{left:<left_w$}  {right}");
        if *flagged && use_color {
            let _ = writeln!(out, "{YELLOW}{}{RESET}", line.trim_end());
        } else {
            let _ = writeln!(out, "{}", line.trim_end());
        }
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> String {
    match serde_json::to_string_pretty(value) {
        Ok(s) => s + "\n",
        Err(e) => {
            eprintln!("error serialising output: {e}");
            String::new()
        }
    }
}
