use std::io;

use thiserror::Error;

/// Treebank reading error.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ReadError {
    /// Error in file IO.
    #[error("error reading treebank")]
    IO(#[from] io::Error),

    /// CoNLL-U parsing error.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// An unknown section name was requested.
    #[error("Invalid section name '{name}'. It can only be one of: 'web', 'wiki'.")]
    InvalidSection { name: String },

    /// An unknown split specifier was requested.
    #[error("Invalid split specifier '{name}'. It can only be one of: 'train', 'dev', 'test'")]
    InvalidSplit { name: String },
}

/// CoNLL-U parsing errors.
#[derive(Debug, Error, Eq, PartialEq)]
#[non_exhaustive]
pub enum ParseError {
    /// A sentence annotation is shorter than the two comment lines plus
    /// one token line the format requires.
    #[error("expected a sentence annotation of at least 3 lines, found {count}:\n{sentence}")]
    TooFewLines { count: usize, sentence: String },

    /// The first line of a sentence annotation is not a sentence id comment.
    #[error("first line is not a sentence id comment:\n{sentence}")]
    MissingSentenceId { sentence: String },

    /// The second line of a sentence annotation is not a sentence text comment.
    #[error("second line is not a sentence text comment:\n{sentence}")]
    MissingText { sentence: String },

    /// A token annotation does not have exactly ten columns.
    #[error("expected 10 tab-separated columns in a token annotation: {line:?}")]
    IncorrectColumnCount { line: String },

    /// The feature field could not be parsed.
    #[error("cannot parse feature field: {value:?}")]
    IncorrectFeatureField { value: String },

    /// An integer field could not be parsed as an integer.
    #[error("cannot parse as integer field: {value:?}")]
    ParseIntField { value: String },
}
