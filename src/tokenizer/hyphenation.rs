use super::rules::{is_letter, HYPHEN_LINEBREAK};

/// Rejoins words hyphenated across a line break.
///
/// A hyphen-class character preceded by a letter, followed by optional
/// horizontal whitespace, one newline, optional horizontal whitespace and
/// then a letter, is removed together with that whitespace. Meant as a
/// pre-pass before tokenizing; offsets into the result no longer match the
/// input.
pub fn join_hyphenated_words_across_linebreaks(text: &str) -> String {
    let mut joined = String::with_capacity(text.len());
    let mut copied = 0;

    for m in HYPHEN_LINEBREAK.find_iter(text) {
        let before = text[..m.start()].chars().next_back();
        let after = text[m.end()..].chars().next();
        if before.is_some_and(is_letter) && after.is_some_and(is_letter) {
            joined.push_str(&text[copied..m.start()]);
            copied = m.end();
        }
    }

    joined.push_str(&text[copied..]);
    joined
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_joins_simple_break() {
        assert_eq!(join_hyphenated_words_across_linebreaks("hyphen-\nated"), "hyphenated");
    }

    #[test]
    fn test_joins_with_surrounding_whitespace() {
        assert_eq!(
            join_hyphenated_words_across_linebreaks("exam- \r\n\t ple text"),
            "example text"
        );
        assert_eq!(
            join_hyphenated_words_across_linebreaks("soft\u{00AD}\n\u{00A0}ware"),
            "software"
        );
    }

    #[test]
    fn test_keeps_hyphen_without_line_break() {
        assert_eq!(join_hyphenated_words_across_linebreaks("well-known"), "well-known");
    }

    #[test]
    fn test_keeps_hyphen_after_digit() {
        assert_eq!(join_hyphenated_words_across_linebreaks("1990-\n2000"), "1990-\n2000");
        assert_eq!(join_hyphenated_words_across_linebreaks("pages-\n12"), "pages-\n12");
    }

    #[test]
    fn test_keeps_blank_line_breaks() {
        let text = "end-\n\nstart";
        assert_eq!(join_hyphenated_words_across_linebreaks(text), text);
    }

    #[test]
    fn test_joins_multiple_breaks() {
        assert_eq!(
            join_hyphenated_words_across_linebreaks("a-\nb-\nc and co-\n op"),
            "abc and coop"
        );
    }

    #[test]
    fn test_idempotent() {
        let once = join_hyphenated_words_across_linebreaks("re-\nturn to sen-\n  der");
        assert_eq!(join_hyphenated_words_across_linebreaks(&once), once);
    }
}
