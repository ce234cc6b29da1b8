//! Unicode-aware lexical tokenizer that keeps every token's leading
//! spacing and character offset, so the source text can be rebuilt from
//! the token stream.
//!
//! ```
//! use trunk_tokenizer::{Token, Tokenizer};
//!
//! let tokens: Vec<Token> = Tokenizer::default().tokenize("A well-known fact.").collect();
//! let values: Vec<&str> = tokens.iter().map(Token::value).collect();
//! assert_eq!(values, ["A", "well", "known", "fact", "."]);
//! assert_eq!(Token::to_text(&tokens), "A well-known fact.");
//! ```

pub mod config;
pub mod error;
#[cfg(feature = "cli")]
pub mod input;
#[cfg(feature = "cli")]
pub mod output;
#[cfg(feature = "cli")]
pub mod repl;
pub mod token;
pub mod tokenizer;

pub use config::TokenizerConfig;
pub use error::TokenizerError;
pub use token::Token;
pub use tokenizer::{join_hyphenated_words_across_linebreaks, Tokenizer, Tokens};
