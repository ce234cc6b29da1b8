use super::ReplCommand;

/// Parse one REPL line into a command
///
/// Supports:
/// - `:q` or `:quit` → Quit command
/// - `:h` or `:help` → Help command
/// - `:hyphens`, `:contractions` → option toggles
/// - `@@` → Load clipboard
/// - `@filename` → Load file command
/// - anything else → tokenize the line as typed
pub fn parse_repl_input(input: &str) -> ReplCommand {
    let line = input.trim_end_matches(['\n', '\r']);
    let trimmed = line.trim();

    if let Some(cmd) = trimmed.strip_prefix(':') {
        match cmd {
            "q" | "quit" => ReplCommand::Quit,
            "h" | "help" => ReplCommand::Help,
            "hyphens" => ReplCommand::ToggleHyphens,
            "contractions" => ReplCommand::ToggleContractions,
            _ => ReplCommand::Unknown(trimmed.to_string()),
        }
    } else if let Some(rest) = trimmed.strip_prefix('@') {
        let filename = rest.trim();
        if filename.is_empty() || filename == "@" {
            ReplCommand::LoadClipboard
        } else {
            ReplCommand::LoadFile(filename.to_string())
        }
    } else {
        // Keep the line's own spacing; it is part of what gets tokenized.
        ReplCommand::Tokenize(line.to_string())
    }
}
