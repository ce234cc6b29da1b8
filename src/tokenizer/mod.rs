//! The tokenizer: whitespace segmentation, per-chunk trimming, and
//! separator splitting of each chunk's alphanumeric core.

pub mod hyphenation;
pub mod rules;
pub mod separator;

use crate::config::TokenizerConfig;
use crate::error::TokenizerError;
use crate::token::Token;
use regex::Matches;
use rules::{is_alphanumeric, CHUNK, ELLIPSIS};
use std::collections::VecDeque;
use std::iter::FusedIterator;
use std::mem;
use tracing::trace;

pub use hyphenation::join_hyphenated_words_across_linebreaks;

/// Splits text into [`Token`]s whose spacings and values concatenate back
/// to the input.
///
/// The tokenizer holds only its configuration, so one instance can be
/// shared freely between threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tokenizer {
    config: TokenizerConfig,
}

impl Tokenizer {
    pub fn new(config: TokenizerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TokenizerConfig {
        &self.config
    }

    /// Tokenizes `text` with offsets starting at zero.
    pub fn tokenize<'t>(&self, text: &'t str) -> Tokens<'t> {
        self.tokenize_at(text, 0)
    }

    /// Tokenizes `text` as if `base_offset` characters preceded it: every
    /// offset is shifted by `base_offset`, but no padding shows up in any
    /// token's spacing.
    pub fn tokenize_at<'t>(&self, text: &'t str, base_offset: usize) -> Tokens<'t> {
        Tokens::new(self.config, text, base_offset)
    }

    /// Like [`Tokenizer::tokenize_at`] for callers holding a signed offset;
    /// a negative offset is rejected instead of wrapping.
    pub fn try_tokenize_at<'t>(
        &self,
        text: &'t str,
        base_offset: i64,
    ) -> Result<Tokens<'t>, TokenizerError> {
        let base_offset =
            usize::try_from(base_offset).map_err(|_| TokenizerError::NegativeOffset(base_offset))?;
        Ok(self.tokenize_at(text, base_offset))
    }

    /// Wraps the token stream of `text` in a one-element list, for callers
    /// that expect a collection of sub-tokenizations.
    pub fn split<'t>(&self, text: &'t str) -> Vec<Tokens<'t>> {
        vec![self.tokenize(text)]
    }
}

/// Character index of the first letter or number in `chunk`, or
/// `chunk.len()` when there is none.
pub(crate) fn find_start(chunk: &[char]) -> usize {
    chunk
        .iter()
        .position(|&c| is_alphanumeric(c))
        .unwrap_or(chunk.len())
}

/// One past the last letter or number in `chunk[start..]`, or `start`.
pub(crate) fn find_end(chunk: &[char], start: usize) -> usize {
    chunk[start..]
        .iter()
        .rposition(|&c| is_alphanumeric(c))
        .map_or(start, |i| start + i + 1)
}

/// Lazy token stream over one text.
///
/// Each call to `next` processes at most one whitespace-delimited chunk;
/// the tokens of that chunk are buffered until consumed.
#[derive(Debug)]
pub struct Tokens<'t> {
    config: TokenizerConfig,
    text: &'t str,
    chunks: Matches<'static, 't>,
    base_offset: usize,
    /// Byte position up to which the text has been emitted.
    consumed_byte: usize,
    /// Character position matching `consumed_byte`, without the base offset.
    consumed_char: usize,
    chunk_index: usize,
    pending: VecDeque<Token>,
    finished: bool,
}

impl<'t> Tokens<'t> {
    fn new(config: TokenizerConfig, text: &'t str, base_offset: usize) -> Self {
        Self {
            config,
            text,
            chunks: CHUNK.find_iter(text),
            base_offset,
            consumed_byte: 0,
            consumed_char: 0,
            chunk_index: 0,
            pending: VecDeque::new(),
            finished: false,
        }
    }

    fn push_chunk(&mut self, byte_start: usize, byte_end: usize) {
        // The first chunk's spacing runs from the base-offset anchor; later
        // chunks take theirs from where the previous chunk ended.
        let mut spacing = self.text[self.consumed_byte..byte_start].to_string();
        let chunk_char = self.consumed_char + spacing.chars().count();
        let chunk = &self.text[byte_start..byte_end];
        let chars: Vec<char> = chunk.chars().collect();
        let origin = self.base_offset + chunk_char;

        trace!(index = self.chunk_index, offset = origin, chunk, "tokenizing chunk");

        let start = find_start(&chars);
        if start == chars.len() {
            self.pending.push_back(Token::new(spacing, chunk, origin));
        } else {
            let end = find_end(&chars, start);

            for (i, c) in chars[..start].iter().enumerate() {
                self.pending
                    .push_back(Token::new(mem::take(&mut spacing), c.to_string(), origin + i));
            }

            separator::split_word(
                &self.config,
                spacing,
                &chars[start..end],
                origin + start,
                &mut self.pending,
            );

            let mut tail = end;
            if chunk_tail_has_ellipsis(&chars[end..]) {
                self.pending.push_back(Token::new("", ELLIPSIS, origin + end));
                tail += ELLIPSIS.len();
            }
            for (i, c) in chars[tail..].iter().enumerate() {
                self.pending
                    .push_back(Token::new("", c.to_string(), origin + tail + i));
            }
        }

        self.consumed_byte = byte_end;
        self.consumed_char = chunk_char + chars.len();
        self.chunk_index += 1;
    }

    fn push_trailing_spacing(&mut self) {
        if self.consumed_byte < self.text.len() {
            let spacing = &self.text[self.consumed_byte..];
            let length = self.consumed_char + spacing.chars().count();
            self.pending
                .push_back(Token::new(spacing, "", self.base_offset + length));
            self.consumed_byte = self.text.len();
            self.consumed_char = length;
        }
    }
}

fn chunk_tail_has_ellipsis(tail: &[char]) -> bool {
    tail.starts_with(&['.', '.', '.'])
}

impl Iterator for Tokens<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Some(token);
            }
            if self.finished {
                return None;
            }
            match self.chunks.next() {
                Some(m) => self.push_chunk(m.start(), m.end()),
                None => {
                    self.finished = true;
                    self.push_trailing_spacing();
                }
            }
        }
    }
}

impl FusedIterator for Tokens<'_> {}
