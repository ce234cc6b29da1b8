// Tokenizer options, fixed when the tokenizer is built.

/// Options controlling how separators and contractions are emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenizerConfig {
    /// Emit hyphens and underscores found inside words as their own tokens
    /// (default false: they are folded into the next token's spacing).
    pub emit_hyphen_or_underscore_sep: bool,

    /// Rewrite an `n't` contraction tail to the word `not` (default true).
    pub replace_not_contraction: bool,
}

impl TokenizerConfig {
    pub fn with_emit_hyphen_or_underscore_sep(mut self, emit: bool) -> Self {
        self.emit_hyphen_or_underscore_sep = emit;
        self
    }

    pub fn with_replace_not_contraction(mut self, replace: bool) -> Self {
        self.replace_not_contraction = replace;
        self
    }
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            emit_hyphen_or_underscore_sep: false,
            replace_not_contraction: true,
        }
    }
}
