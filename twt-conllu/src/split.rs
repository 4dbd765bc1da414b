//! Treebank sections and deterministic splits.

use crate::error::ReadError;

/// A sub-corpus of the treebank, backed by one CoNLL-U file.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Section {
    /// Sentences sampled from web forums and user reviews.
    Web,
    /// Sentences sampled from Turkish Wikipedia articles.
    Wiki,
}

impl Section {
    /// All sections of the treebank.
    pub const ALL: [Section; 2] = [Section::Web, Section::Wiki];

    /// Look up a section by its name.
    pub fn from_name(name: &str) -> Result<Section, ReadError> {
        match name {
            "web" => Ok(Section::Web),
            "wiki" => Ok(Section::Wiki),
            _ => Err(ReadError::InvalidSection {
                name: name.to_owned(),
            }),
        }
    }

    /// The name of the file that backs this section in the data directory.
    pub fn file_name(self) -> &'static str {
        match self {
            Section::Web => "web.conllu",
            Section::Wiki => "wiki.conllu",
        }
    }
}

/// A deterministic partition of a section's sentences.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Split {
    Train,
    Dev,
    Test,
}

impl Split {
    /// Look up a split by its specifier.
    pub fn from_name(name: &str) -> Result<Split, ReadError> {
        match name {
            "train" => Ok(Split::Train),
            "dev" => Ok(Split::Dev),
            "test" => Ok(Split::Test),
            _ => Err(ReadError::InvalidSplit {
                name: name.to_owned(),
            }),
        }
    }
}

/// Check whether the sentence at a position belongs to a split.
///
/// Sentences are partitioned by their zero-based position within their
/// section file: in every run of ten sentences, the ninth belongs to
/// the development set, the tenth to the test set, and the remaining
/// eight to the training set. `None` matches every sentence.
pub fn in_split(index: usize, split: Option<Split>) -> bool {
    match split {
        None => true,
        Some(Split::Train) => index % 10 < 8,
        Some(Split::Dev) => index % 10 == 8,
        Some(Split::Test) => index % 10 == 9,
    }
}
