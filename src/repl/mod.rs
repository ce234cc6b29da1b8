//! Line-oriented REPL over any reader/writer pair.
//!
//! Each line is either a command (`:` or `@` prefix, see
//! [`HELP_TEXT`]) or text to tokenize with the session's current
//! options.

pub mod command;
pub mod parser;

pub use command::{ReplCommand, HELP_TEXT};
pub use parser::parse_repl_input;

use crate::config::TokenizerConfig;
use crate::input::{self, LoadError, LoadedDocument};
use crate::output::{write_tokens, OutputFormat};
use crate::tokenizer::{join_hyphenated_words_across_linebreaks, Tokenizer};
use std::io::{self, BufRead, Write};
use tracing::debug;

/// Whether the REPL keeps reading after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Tokenizer options plus output settings, mutable through REPL toggles.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub config: TokenizerConfig,
    pub format: OutputFormat,
    pub join_hyphens: bool,
    pub base_offset: usize,
}

impl Session {
    pub fn new(config: TokenizerConfig, format: OutputFormat) -> Self {
        Self {
            config,
            format,
            join_hyphens: false,
            base_offset: 0,
        }
    }

    /// Tokenize `text` with the session options and write the tokens.
    pub fn emit<W: Write>(&self, text: &str, out: &mut W) -> io::Result<()> {
        let tokenizer = Tokenizer::new(self.config);
        if self.join_hyphens {
            let joined = join_hyphenated_words_across_linebreaks(text);
            write_tokens(out, tokenizer.tokenize_at(&joined, self.base_offset), self.format)
        } else {
            write_tokens(out, tokenizer.tokenize_at(text, self.base_offset), self.format)
        }
    }

    fn emit_document<W: Write>(
        &self,
        loaded: Result<LoadedDocument, LoadError>,
        out: &mut W,
    ) -> io::Result<()> {
        match loaded {
            Ok(doc) => {
                debug!(source = %doc.source, chars = doc.text.chars().count(), "document loaded");
                self.emit(&doc.text, out)
            }
            Err(err) => writeln!(out, "error: {err}"),
        }
    }

    pub fn execute<W: Write>(&mut self, command: ReplCommand, out: &mut W) -> io::Result<Flow> {
        debug!(?command, "repl command");
        match command {
            ReplCommand::Quit => return Ok(Flow::Quit),
            ReplCommand::Help => writeln!(out, "{HELP_TEXT}")?,
            ReplCommand::LoadFile(path) => {
                self.emit_document(input::load_document(&path), out)?
            }
            ReplCommand::LoadClipboard => self.emit_document(input::clipboard::load(), out)?,
            ReplCommand::ToggleHyphens => {
                self.config.emit_hyphen_or_underscore_sep = !self.config.emit_hyphen_or_underscore_sep;
                writeln!(out, "emit hyphens: {}", self.config.emit_hyphen_or_underscore_sep)?;
            }
            ReplCommand::ToggleContractions => {
                self.config.replace_not_contraction = !self.config.replace_not_contraction;
                writeln!(out, "replace n't: {}", self.config.replace_not_contraction)?;
            }
            ReplCommand::Tokenize(text) => self.emit(&text, out)?,
            ReplCommand::Unknown(input) => writeln!(out, "unknown command: {input} (try :help)")?,
        }
        Ok(Flow::Continue)
    }

    /// Read lines from `input` until EOF or `:quit`.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> io::Result<()> {
        for line in input.lines() {
            let command = parse_repl_input(&line?);
            if self.execute(command, out)? == Flow::Quit {
                break;
            }
            out.flush()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(session: &mut Session, script: &str) -> String {
        let mut out = Vec::new();
        session.run(script.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn text_session() -> Session {
        Session::new(TokenizerConfig::default(), OutputFormat::Text)
    }

    #[test]
    fn test_run_tokenizes_lines() {
        let output = run(&mut text_session(), "don't stop\n");
        assert_eq!(output, "do\nnot\nstop\n");
    }

    #[test]
    fn test_run_stops_at_quit() {
        let output = run(&mut text_session(), "one\n:q\ntwo\n");
        assert_eq!(output, "one\n");
    }

    #[test]
    fn test_toggles_change_config() {
        let mut session = text_session();
        let output = run(&mut session, ":hyphens\nwell-known\n:contractions\nisn't\n");
        assert_eq!(
            output,
            "emit hyphens: true\nwell\n-\nknown\nreplace n't: false\nis\nn't\n"
        );
        assert!(session.config.emit_hyphen_or_underscore_sep);
        assert!(!session.config.replace_not_contraction);
    }

    #[test]
    fn test_unknown_command_reports() {
        let output = run(&mut text_session(), ":nope\n");
        assert_eq!(output, "unknown command: :nope (try :help)\n");
    }

    #[test]
    fn test_missing_file_reports_error() {
        let output = run(&mut text_session(), "@/nonexistent/file.txt\n");
        assert!(output.starts_with("error: File not found"));
    }

    #[test]
    fn test_emit_joins_hyphens_when_enabled() {
        let mut session = text_session();
        session.join_hyphens = true;
        let mut out = Vec::new();
        session.emit("hyphen-\nated", &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "hyphenated\n");
    }

    #[test]
    fn test_emit_uses_base_offset() {
        let mut session = Session::new(TokenizerConfig::default(), OutputFormat::Tsv);
        session.base_offset = 100;
        let mut out = Vec::new();
        session.emit("hi", &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "100\t\thi\n");
    }
}
