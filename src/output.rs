// Rendering of token streams for the command-line front end.

use crate::token::Token;
use clap::ValueEnum;
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// `offset<TAB>spacing<TAB>value`, control characters escaped
    #[default]
    Tsv,
    /// One token value per line
    Text,
    /// JSON array of `{spacing, value, offset}` objects
    Json,
}

/// Escape backslashes and control characters so a field fits on one TSV line.
fn escape_field(field: &str) -> String {
    let mut escaped = String::with_capacity(field.len());
    for c in field.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '\t' => escaped.push_str("\\t"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            c if c.is_control() => escaped.push_str(&format!("\\u{{{:04x}}}", c as u32)),
            c => escaped.push(c),
        }
    }
    escaped
}

pub fn write_tokens<W: Write>(
    out: &mut W,
    tokens: impl Iterator<Item = Token>,
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Tsv => {
            for token in tokens {
                writeln!(
                    out,
                    "{}\t{}\t{}",
                    token.offset(),
                    escape_field(token.spacing()),
                    escape_field(token.value())
                )?;
            }
        }
        OutputFormat::Text => {
            for token in tokens.filter(|t| !t.value().is_empty()) {
                writeln!(out, "{}", token.value())?;
            }
        }
        OutputFormat::Json => {
            let tokens: Vec<Token> = tokens.collect();
            serde_json::to_writer(&mut *out, &tokens)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
