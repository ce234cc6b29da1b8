use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use trunk_tokenizer::input;
use trunk_tokenizer::output::OutputFormat;
use trunk_tokenizer::repl::Session;
use trunk_tokenizer::TokenizerConfig;

/// Split text into tokens that keep their leading spacing and offset.
///
/// Without FILE or --clipboard, reads lines from stdin as a REPL.
#[derive(Parser, Debug)]
#[command(name = "trunk-tokenizer", version, about)]
struct Cli {
    /// PDF, EPUB or text file to tokenize
    file: Option<PathBuf>,

    /// Tokenize the clipboard content
    #[arg(long, conflicts_with = "file")]
    clipboard: bool,

    /// Emit hyphens and underscores inside words as their own tokens
    #[arg(long)]
    emit_hyphens: bool,

    /// Keep `n't` literally instead of rewriting it to `not`
    #[arg(long)]
    keep_contractions: bool,

    /// Rejoin words hyphenated across line breaks before tokenizing
    #[arg(long)]
    join_hyphens: bool,

    /// Offset added to every token position
    #[arg(long, default_value_t = 0)]
    base_offset: usize,

    #[arg(long, value_enum, default_value_t = OutputFormat::Tsv)]
    format: OutputFormat,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let config = TokenizerConfig::default()
        .with_emit_hyphen_or_underscore_sep(cli.emit_hyphens)
        .with_replace_not_contraction(!cli.keep_contractions);

    let mut session = Session::new(config, cli.format);
    session.join_hyphens = cli.join_hyphens;
    session.base_offset = cli.base_offset;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let document = match &cli.file {
        Some(path) => Some(input::load_document(&path.to_string_lossy())?),
        None if cli.clipboard => Some(input::clipboard::load()?),
        None => None,
    };

    match document {
        Some(doc) => session.emit(&doc.text, &mut out)?,
        None => session.run(io::stdin().lock(), &mut out)?,
    }

    out.flush()?;
    Ok(())
}
