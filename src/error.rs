use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenizerError {
    #[error("base offset must not be negative, got {0}")]
    NegativeOffset(i64),

    #[error("shifting offset {offset} by {delta} leaves the valid range")]
    OffsetOutOfRange { offset: usize, delta: isize },
}
