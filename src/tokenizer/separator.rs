//! Splitting of a chunk's alphanumeric core at internal separators.
//!
//! Each separator rule is a matcher that, given the word and a position,
//! reports where a match starting at that position ends. The scan walks the
//! word left to right and at every position tries the rules in
//! [`RULES`] order; the first rule that matches wins and the scan resumes
//! at the end of the match, or one character later for a zero-width match.
//! Rules only see the word itself, never the surrounding chunk.

use super::rules::{
    is_alphanumeric, is_apostrophe, is_bracket, is_decimal, is_hyphen_or_underscore,
    is_joiner, is_letter, is_lowercase, is_terminal, is_uppercase,
};
use crate::config::TokenizerConfig;
use crate::token::Token;
use std::collections::VecDeque;
use std::mem;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeparatorKind {
    /// Lowercase letter followed by uppercase, optionally via `.`, `!` or `?`.
    CaseTransition,
    /// Apostrophe-like character and the letters after it.
    ApostropheTail,
    /// Open or close punctuation.
    Bracket,
    /// Literal `...` inside the word.
    InnerEllipsis,
    /// Comma, semicolon, underscore or hyphen between word characters.
    DashJoin,
}

/// A separator match over a word, in character positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Separator {
    pub start: usize,
    pub end: usize,
    pub kind: SeparatorKind,
}

type Matcher = fn(&[char], usize) -> Option<usize>;

const RULES: &[(SeparatorKind, Matcher)] = &[
    (SeparatorKind::CaseTransition, match_case_transition),
    (SeparatorKind::ApostropheTail, match_apostrophe_tail),
    (SeparatorKind::Bracket, match_bracket),
    (SeparatorKind::InnerEllipsis, match_inner_ellipsis),
    (SeparatorKind::DashJoin, match_dash_join),
];

fn previous(word: &[char], pos: usize) -> Option<char> {
    pos.checked_sub(1).and_then(|i| word.get(i)).copied()
}

fn match_case_transition(word: &[char], pos: usize) -> Option<usize> {
    if !previous(word, pos).is_some_and(is_lowercase) {
        return None;
    }
    let current = *word.get(pos)?;
    if is_terminal(current) && word.get(pos + 1).copied().is_some_and(is_uppercase) {
        Some(pos + 1)
    } else if is_uppercase(current) {
        Some(pos)
    } else {
        None
    }
}

fn match_apostrophe_tail(word: &[char], pos: usize) -> Option<usize> {
    if !is_apostrophe(*word.get(pos)?) {
        return None;
    }
    let letters = word[pos + 1..]
        .iter()
        .take_while(|&&c| is_letter(c))
        .count();
    (letters > 0).then_some(pos + 1 + letters)
}

fn match_bracket(word: &[char], pos: usize) -> Option<usize> {
    is_bracket(*word.get(pos)?).then_some(pos + 1)
}

fn match_inner_ellipsis(word: &[char], pos: usize) -> Option<usize> {
    word[pos..].starts_with(&['.', '.', '.']).then_some(pos + 3)
}

fn match_dash_join(word: &[char], pos: usize) -> Option<usize> {
    if !is_joiner(*word.get(pos)?) {
        return None;
    }
    let before = previous(word, pos)?;
    let after = *word.get(pos + 1)?;
    let prefix_form = is_letter(before) && (is_letter(after) || is_decimal(after));
    let postfix_form = (is_letter(before) || is_decimal(before)) && is_letter(after);
    (prefix_form || postfix_form).then_some(pos + 1)
}

/// Iterator over the separators of one word, left to right.
#[derive(Debug)]
pub struct Separators<'w> {
    word: &'w [char],
    pos: usize,
}

impl<'w> Separators<'w> {
    pub fn new(word: &'w [char]) -> Self {
        Self { word, pos: 0 }
    }
}

impl Iterator for Separators<'_> {
    type Item = Separator;

    fn next(&mut self) -> Option<Separator> {
        while self.pos < self.word.len() {
            let start = self.pos;
            let found = RULES
                .iter()
                .find_map(|&(kind, matcher)| matcher(self.word, start).map(|end| (kind, end)));

            match found {
                Some((kind, end)) => {
                    self.pos = if end > start { end } else { start + 1 };
                    return Some(Separator { start, end, kind });
                }
                None => self.pos += 1,
            }
        }
        None
    }
}

/// True for an apostrophe + `t` match directly after an `n`: the "n't" tail.
fn is_not_contraction(word: &[char], separator: &Separator) -> bool {
    separator.kind == SeparatorKind::ApostropheTail
        && word.get(separator.start + 1) == Some(&'t')
        && previous(word, separator.start) == Some('n')
}

fn text_of(chars: &[char]) -> String {
    chars.iter().collect()
}

/// Splits `word` (an alphanumeric core starting at character `offset`) into
/// tokens, appending them to `out`. `spacing` goes to the first emitted
/// token; folded hyphens and underscores accumulate into the next one.
pub(crate) fn split_word(
    config: &TokenizerConfig,
    mut spacing: String,
    word: &[char],
    offset: usize,
    out: &mut VecDeque<Token>,
) {
    debug_assert!(word.first().copied().is_some_and(is_alphanumeric));

    let mut remainder = 0;

    for separator in Separators::new(word) {
        if separator.start > remainder {
            if is_not_contraction(word, &separator) {
                let n = separator.start - 1;
                if remainder < n {
                    out.push_back(Token::new(
                        mem::take(&mut spacing),
                        text_of(&word[remainder..n]),
                        offset + remainder,
                    ));
                }
                let value = if config.replace_not_contraction {
                    "not".to_string()
                } else {
                    text_of(&word[n..separator.end])
                };
                out.push_back(Token::new(mem::take(&mut spacing), value, offset + n));
                remainder = separator.end;
                continue;
            }

            out.push_back(Token::new(
                mem::take(&mut spacing),
                text_of(&word[remainder..separator.start]),
                offset + remainder,
            ));
        }

        let text = text_of(&word[separator.start..separator.end]);
        if text.is_empty() {
            // zero-width case transition: the split itself is the whole effect
        } else if config.emit_hyphen_or_underscore_sep || !is_hyphen_or_underscore(&text) {
            out.push_back(Token::new(
                mem::take(&mut spacing),
                text,
                offset + separator.start,
            ));
        } else {
            spacing.push_str(&text);
        }
        remainder = separator.end;
    }

    if remainder < word.len() {
        out.push_back(Token::new(
            spacing,
            text_of(&word[remainder..]),
            offset + remainder,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn spans(word: &str) -> Vec<(usize, usize, SeparatorKind)> {
        let word = chars(word);
        Separators::new(&word)
            .map(|s| (s.start, s.end, s.kind))
            .collect()
    }

    fn split(config: TokenizerConfig, spacing: &str, word: &str) -> Vec<(String, String, usize)> {
        let mut out = VecDeque::new();
        split_word(&config, spacing.to_string(), &chars(word), 10, &mut out);
        out.into_iter()
            .map(|t| (t.spacing().to_string(), t.value().to_string(), t.offset()))
            .collect()
    }

    fn values(config: TokenizerConfig, word: &str) -> Vec<String> {
        split(config, "", word).into_iter().map(|(_, v, _)| v).collect()
    }

    #[test]
    fn test_case_transition_is_zero_width() {
        assert_eq!(spans("endWord"), vec![(3, 3, SeparatorKind::CaseTransition)]);
    }

    #[test]
    fn test_case_transition_with_terminal() {
        assert_eq!(spans("wait.Here"), vec![(4, 5, SeparatorKind::CaseTransition)]);
        assert_eq!(spans("why?Because"), vec![(3, 4, SeparatorKind::CaseTransition)]);
    }

    #[test]
    fn test_no_transition_from_uppercase() {
        assert!(spans("HTTPServer").is_empty());
        assert!(spans("A.B").is_empty());
    }

    #[test]
    fn test_apostrophe_tail_is_greedy() {
        assert_eq!(
            spans("O'Brien's"),
            vec![
                (1, 7, SeparatorKind::ApostropheTail),
                (7, 9, SeparatorKind::ApostropheTail),
            ]
        );
    }

    #[test]
    fn test_apostrophe_without_letters_is_not_a_separator() {
        assert!(spans("90'5").is_empty());
    }

    #[test]
    fn test_bracket_and_ellipsis() {
        assert_eq!(
            spans("f(x)"),
            vec![(1, 2, SeparatorKind::Bracket), (3, 4, SeparatorKind::Bracket)]
        );
        assert_eq!(spans("wait...what"), vec![(4, 7, SeparatorKind::InnerEllipsis)]);
    }

    #[test]
    fn test_dash_join_needs_a_letter_on_one_side() {
        assert_eq!(spans("well-known"), vec![(4, 5, SeparatorKind::DashJoin)]);
        assert_eq!(spans("a-1"), vec![(1, 2, SeparatorKind::DashJoin)]);
        assert_eq!(spans("1-a"), vec![(1, 2, SeparatorKind::DashJoin)]);
        assert!(spans("1-2").is_empty());
        assert!(spans("1,000").is_empty());
    }

    #[test]
    fn test_split_plain_word() {
        assert_eq!(
            split(TokenizerConfig::default(), " ", "word"),
            vec![(" ".to_string(), "word".to_string(), 10)]
        );
    }

    #[test]
    fn test_split_case_transition() {
        assert_eq!(
            split(TokenizerConfig::default(), " ", "endWord.Start"),
            vec![
                (" ".to_string(), "end".to_string(), 10),
                ("".to_string(), "Word".to_string(), 13),
                ("".to_string(), ".".to_string(), 17),
                ("".to_string(), "Start".to_string(), 18),
            ]
        );
    }

    #[test]
    fn test_split_hyphen_folds_into_spacing() {
        assert_eq!(
            split(TokenizerConfig::default(), " ", "well-known"),
            vec![
                (" ".to_string(), "well".to_string(), 10),
                ("-".to_string(), "known".to_string(), 15),
            ]
        );
    }

    #[test]
    fn test_split_hyphen_emitted_when_configured() {
        let config = TokenizerConfig::default().with_emit_hyphen_or_underscore_sep(true);
        assert_eq!(values(config, "well-known"), vec!["well", "-", "known"]);
        assert_eq!(values(config, "snake_case"), vec!["snake", "_", "case"]);
    }

    #[test]
    fn test_split_comma_always_emitted() {
        assert_eq!(values(TokenizerConfig::default(), "red,green"), vec!["red", ",", "green"]);
    }

    #[test]
    fn test_contraction_replaced() {
        assert_eq!(
            split(TokenizerConfig::default(), " ", "wasn't"),
            vec![
                (" ".to_string(), "was".to_string(), 10),
                ("".to_string(), "not".to_string(), 13),
            ]
        );
    }

    #[test]
    fn test_contraction_kept_literal() {
        let config = TokenizerConfig::default().with_replace_not_contraction(false);
        assert_eq!(values(config, "wasn't"), vec!["was", "n't"]);
        assert_eq!(values(config, "don\u{2019}t"), vec!["do", "n\u{2019}t"]);
    }

    #[test]
    fn test_contraction_at_word_start() {
        assert_eq!(
            split(TokenizerConfig::default(), "\n", "n't"),
            vec![("\n".to_string(), "not".to_string(), 10)]
        );
    }

    #[test]
    fn test_other_apostrophe_tails_are_tokens() {
        assert_eq!(values(TokenizerConfig::default(), "it's"), vec!["it", "'s"]);
        assert_eq!(values(TokenizerConfig::default(), "they'll"), vec!["they", "'ll"]);
    }
}
