/// Commands that can be parsed from a REPL line.
#[derive(Debug, Clone, PartialEq)]
pub enum ReplCommand {
    /// Leave the REPL
    Quit,

    /// Show help information
    Help,

    /// Load and tokenize a document (PDF, EPUB or text)
    LoadFile(String),

    /// Load and tokenize the clipboard content
    LoadClipboard,

    /// Toggle emission of hyphen and underscore separators
    ToggleHyphens,

    /// Toggle rewriting of `n't` to `not`
    ToggleContractions,

    /// Tokenize the line itself
    Tokenize(String),

    /// Unknown `:` command
    Unknown(String),
}

pub const HELP_TEXT: &str = "\
Type any text to tokenize it.
  @<path>         tokenize a PDF, EPUB or text file
  @@              tokenize the clipboard
  :hyphens        toggle hyphen/underscore separator tokens
  :contractions   toggle n't -> not rewriting
  :h, :help       show this help
  :q, :quit       exit";
