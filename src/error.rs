use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HuffmanError {
    #[error("empty frequency table: cannot build a prefix tree")]
    EmptyFrequencyTable,

    #[error("symbol {symbol:?} has a zero frequency")]
    ZeroFrequency { symbol: char },

    #[error("count for symbol {symbol:?} overflows u32")]
    FrequencyOverflow { symbol: char },

    #[error("invalid bit {found:?} at position {position}")]
    InvalidBit { found: char, position: usize },
}
