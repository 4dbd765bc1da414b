//! Annotated sentences.

use std::ops::Index;

use crate::token::Token;

/// One annotated sentence of the treebank.
///
/// `id` is the corpus-wide sentence identifier and `text` the raw
/// human-readable sentence. Tokens are stored in linear word order and
/// are owned exclusively by the sentence.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Sentence {
    id: String,
    text: String,
    tokens: Vec<Token>,
}

impl Sentence {
    /// Construct a sentence from its identifier, raw text, and tokens.
    pub fn new(id: impl Into<String>, text: impl Into<String>, tokens: Vec<Token>) -> Sentence {
        Sentence {
            id: id.into(),
            text: text.into(),
            tokens,
        }
    }

    /// Get the corpus-wide sentence identifier.
    pub fn id(&self) -> &str {
        self.id.as_ref()
    }

    /// Get the raw sentence text.
    pub fn text(&self) -> &str {
        self.text.as_ref()
    }

    /// Get the tokens of the sentence in word order.
    pub fn tokens(&self) -> &[Token] {
        self.tokens.as_ref()
    }

    /// Get the number of tokens in the sentence.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns `true` when the sentence has no tokens.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl Index<usize> for Sentence {
    type Output = Token;

    fn index(&self, index: usize) -> &Self::Output {
        &self.tokens[index]
    }
}

#[cfg(test)]
mod tests {
    use super::Sentence;
    use crate::token::Token;

    #[test]
    fn sentence_owns_tokens_in_order() {
        let tokens = vec![Token::new(1, "iyi"), Token::new(2, "günler")];
        let sentence = Sentence::new("doc:S001", "iyi günler", tokens);

        assert_eq!(sentence.id(), "doc:S001");
        assert_eq!(sentence.text(), "iyi günler");
        assert_eq!(sentence.len(), 2);
        assert_eq!(sentence[0].form(), "iyi");
        assert_eq!(sentence[1].form(), "günler");
    }

    #[test]
    fn structural_equality() {
        let a = Sentence::new("s", "ev", vec![Token::new(1, "ev")]);
        let b = Sentence::new("s", "ev", vec![Token::new(1, "ev")]);
        assert_eq!(a, b);
    }
}
