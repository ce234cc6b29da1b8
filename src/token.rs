use crate::error::TokenizerError;
use serde::Serialize;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A string wrapper carrying the `spacing` it was split after and the
/// `offset` of its value in the tokenized text.
///
/// Spacing is usually a single whitespace character but can be anything
/// found between this token and the previous one (or anything before the
/// first token). Rendering a token with `Display` yields `spacing + value`,
/// so rendering a whole token sequence reproduces the source text.
///
/// Two tokens are equal when their values are equal, regardless of
/// spacing and offset.
#[derive(Debug, Clone, Serialize)]
pub struct Token {
    spacing: String,
    value: String,
    /// Character index of `value` in the source, including any base offset.
    offset: usize,
}

impl Token {
    pub fn new(spacing: impl Into<String>, value: impl Into<String>, offset: usize) -> Self {
        Self {
            spacing: spacing.into(),
            value: value.into(),
            offset,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn spacing(&self) -> &str {
        &self.spacing
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Moves the token by `delta` characters; used to re-anchor tokens of a
    /// substring into the coordinates of the enclosing document.
    ///
    /// A shift that would move the offset out of `usize` range is rejected
    /// and leaves the token untouched.
    pub fn shift(&mut self, delta: isize) -> Result<(), TokenizerError> {
        self.offset = self
            .offset
            .checked_add_signed(delta)
            .ok_or(TokenizerError::OffsetOutOfRange {
                offset: self.offset,
                delta,
            })?;
        Ok(())
    }

    /// Concatenates the rendering of every token.
    pub fn to_text<'a>(tokens: impl IntoIterator<Item = &'a Token>) -> String {
        tokens.into_iter().map(|token| token.to_string()).collect()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.spacing, self.value)
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Token {}

impl Hash for Token {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl PartialEq<str> for Token {
    fn eq(&self, other: &str) -> bool {
        self.value == other
    }
}

impl PartialEq<&str> for Token {
    fn eq(&self, other: &&str) -> bool {
        self.value == *other
    }
}
