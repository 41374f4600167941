use crate::Number;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid configuration: {name} must be a positive integer, got {value}")]
    InvalidConfiguration { name: &'static str, value: usize },

    #[error("invalid input: price out of range in bar (high={high}, low={low}, close={close})")]
    InvalidInput {
        high: Number,
        low: Number,
        close: Number,
    },

    #[error("config error: {key}: {reason}")]
    Config { key: &'static str, reason: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("decode error: {0}")]
    Decode(#[from] bincode::Error),

    #[error("parse error on line {line}: {reason}")]
    Parse { line: usize, reason: String },
}
