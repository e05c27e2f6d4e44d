//! Quote-escaped CSV writing and parsing.
//!
//! Fields containing a comma, quote, CR, or LF are wrapped in quotes with
//! internal quotes doubled. The parser reverses the rules exactly, so a
//! generated document round-trips to the original values.

use std::borrow::Cow;

use chrono::{DateTime, SecondsFormat, Utc};

/// Escape one field per the quoting rules.
pub fn escape_field(field: &str) -> Cow<'_, str> {
    if field.contains([',', '"', '\r', '\n']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

/// Incremental CSV document builder.
pub struct CsvBuilder {
    out: String,
}

impl CsvBuilder {
    pub fn new() -> Self {
        Self { out: String::new() }
    }

    /// Timestamp banner row, e.g. `Generated,2026-08-30T12:00:00Z`.
    pub fn banner(mut self, generated_at: DateTime<Utc>) -> Self {
        self.push_row(&[
            "Generated",
            &generated_at.to_rfc3339_opts(SecondsFormat::Secs, true),
        ]);
        self
    }

    /// Section header: a single-field row naming what follows.
    pub fn section(mut self, title: &str) -> Self {
        self.push_row(&[title]);
        self
    }

    pub fn row<S: AsRef<str>>(mut self, fields: &[S]) -> Self {
        let fields: Vec<&str> = fields.iter().map(|f| f.as_ref()).collect();
        self.push_row(&fields);
        self
    }

    fn push_row(&mut self, fields: &[&str]) {
        let mut first = true;
        for field in fields {
            if !first {
                self.out.push(',');
            }
            first = false;
            self.out.push_str(&escape_field(field));
        }
        self.out.push('\n');
    }

    pub fn finish(self) -> String {
        self.out
    }
}

impl Default for CsvBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a CSV document back into rows of unescaped field values.
///
/// Accepts LF and CRLF line endings; quoted fields may span lines.
pub fn parse_csv(input: &str) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut row: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = input.chars().peekable();
    let mut any_content = false;

    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' => {
                    if chars.peek() == Some(&'"') {
                        chars.next();
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                }
                _ => field.push(c),
            }
            continue;
        }

        match c {
            '"' => {
                in_quotes = true;
                any_content = true;
            }
            ',' => {
                row.push(std::mem::take(&mut field));
                any_content = true;
            }
            '\r' => {
                // Swallow; the LF that follows terminates the row.
            }
            '\n' => {
                if any_content || !field.is_empty() || !row.is_empty() {
                    row.push(std::mem::take(&mut field));
                    rows.push(std::mem::take(&mut row));
                }
                any_content = false;
            }
            _ => {
                field.push(c);
                any_content = true;
            }
        }
    }

    if any_content || !field.is_empty() || !row.is_empty() {
        row.push(field);
        rows.push(row);
    }

    rows
}
