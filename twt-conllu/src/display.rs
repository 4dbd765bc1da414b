//! Re-serialization of decomposed records to CoNLL-U.

use std::fmt;

use itertools::Itertools;
use twt::{Feature, Sentence, Token};

use crate::parse::{EMPTY_FIELD, SENT_ID_PREFIX, TEXT_PREFIX};

/// CoNLL-U rendering of a feature list.
///
/// An empty list renders as the `_` placeholder, everything else as
/// `name=value` pairs joined by `|`.
pub struct ConlluFeatures<'a>(&'a [Feature]);

impl<'a> ConlluFeatures<'a> {
    pub fn borrowed(features: &'a [Feature]) -> Self {
        ConlluFeatures(features)
    }
}

impl<'a> fmt::Display for ConlluFeatures<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.0.is_empty() {
            write!(f, "{}", EMPTY_FIELD)
        } else {
            let features_str = self
                .0
                .iter()
                .map(|fv| format!("{}={}", fv.name(), fv.value()))
                .join("|");
            write!(f, "{}", features_str)
        }
    }
}

/// CoNLL-U rendering of a token as one ten-column line.
///
/// The unused ninth column is always written as `_`.
pub struct ConlluToken<'a>(&'a Token);

impl<'a> ConlluToken<'a> {
    pub fn borrowed(token: &'a Token) -> Self {
        ConlluToken(token)
    }
}

impl<'a> fmt::Display for ConlluToken<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
            self.0.id(),
            self.0.form(),
            self.0.lemma(),
            self.0.coarse_tag(),
            self.0.fine_tag(),
            ConlluFeatures::borrowed(self.0.features()),
            self.0.head(),
            self.0.dependency_relation(),
            EMPTY_FIELD,
            ConlluFeatures::borrowed(self.0.miscellaneous_features()),
        )
    }
}

/// CoNLL-U rendering of a sentence annotation.
pub struct ConlluSentence<'a>(&'a Sentence);

impl<'a> ConlluSentence<'a> {
    pub fn borrowed(sentence: &'a Sentence) -> Self {
        ConlluSentence(sentence)
    }
}

impl<'a> fmt::Display for ConlluSentence<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let tokens_str = self
            .0
            .tokens()
            .iter()
            .map(|token| ConlluToken::borrowed(token).to_string())
            .join("\n");

        write!(
            f,
            "{}{}\n{}{}\n{}",
            SENT_ID_PREFIX,
            self.0.id(),
            TEXT_PREFIX,
            self.0.text(),
            tokens_str
        )
    }
}
