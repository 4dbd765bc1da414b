//! Tokens of an annotated sentence.

/// A morphological or miscellaneous attribute of a token.
///
/// Features are ordered name-value pairs. The annotation format allows
/// a token to carry the same feature name more than once; duplicates
/// are kept in their order of appearance.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Feature {
    name: String,
    value: String,
}

impl Feature {
    /// Construct a feature from its name and value.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Feature {
        Feature {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Get the feature name.
    pub fn name(&self) -> &str {
        self.name.as_ref()
    }

    /// Get the feature value.
    pub fn value(&self) -> &str {
        self.value.as_ref()
    }
}

/// A builder for `Token`s.
///
/// A token carries all ten annotation columns of its source line.
/// Constructing one positionally gets tedious, so this builder provides
/// a fluent interface for creating `Token`s.
pub struct TokenBuilder {
    token: Token,
}

impl TokenBuilder {
    /// Create a `Token` builder from the token's sentence position and
    /// word form, with all remaining fields empty.
    pub fn new(id: usize, form: impl Into<String>) -> TokenBuilder {
        TokenBuilder {
            token: Token::new(id, form),
        }
    }

    /// Set the lemma or stem of the word form.
    pub fn lemma(mut self, lemma: impl Into<String>) -> TokenBuilder {
        self.token.lemma = lemma.into();
        self
    }

    /// Set the coarse part-of-speech tag.
    pub fn coarse_tag(mut self, coarse_tag: impl Into<String>) -> TokenBuilder {
        self.token.coarse_tag = coarse_tag.into();
        self
    }

    /// Set the fine part-of-speech tag.
    pub fn fine_tag(mut self, fine_tag: impl Into<String>) -> TokenBuilder {
        self.token.fine_tag = fine_tag.into();
        self
    }

    /// Set the morphological features of the token.
    pub fn features(mut self, features: Vec<Feature>) -> TokenBuilder {
        self.token.features = features;
        self
    }

    /// Set the sentence position of the token's syntactic head.
    pub fn head(mut self, head: usize) -> TokenBuilder {
        self.token.head = head;
        self
    }

    /// Set the dependency relation to the token's head.
    pub fn dependency_relation(mut self, relation: impl Into<String>) -> TokenBuilder {
        self.token.dependency_relation = relation.into();
        self
    }

    /// Set the miscellaneous features of the token.
    pub fn miscellaneous_features(mut self, features: Vec<Feature>) -> TokenBuilder {
        self.token.miscellaneous_features = features;
        self
    }
}

impl From<Token> for TokenBuilder {
    fn from(token: Token) -> Self {
        TokenBuilder { token }
    }
}

impl From<TokenBuilder> for Token {
    fn from(builder: TokenBuilder) -> Self {
        builder.token
    }
}

/// One annotated word of a sentence.
///
/// `id` is the 1-based position of the token in its sentence. `head` is
/// the position of the token's syntactic governor, with 0 denoting the
/// root of the dependency tree.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Token {
    id: usize,
    form: String,
    lemma: String,
    coarse_tag: String,
    fine_tag: String,
    features: Vec<Feature>,
    head: usize,
    dependency_relation: String,
    miscellaneous_features: Vec<Feature>,
}

impl Token {
    /// Create a new token where all fields besides the position and
    /// word form are empty.
    pub fn new(id: usize, form: impl Into<String>) -> Token {
        Token {
            id,
            form: form.into(),
            lemma: String::new(),
            coarse_tag: String::new(),
            fine_tag: String::new(),
            features: Vec::new(),
            head: 0,
            dependency_relation: String::new(),
            miscellaneous_features: Vec::new(),
        }
    }

    /// Get the 1-based position of the token in its sentence.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Get the word form or punctuation symbol.
    pub fn form(&self) -> &str {
        self.form.as_ref()
    }

    /// Get the lemma or stem of the word form.
    pub fn lemma(&self) -> &str {
        self.lemma.as_ref()
    }

    /// Get the coarse part-of-speech tag.
    pub fn coarse_tag(&self) -> &str {
        self.coarse_tag.as_ref()
    }

    /// Get the fine part-of-speech tag.
    pub fn fine_tag(&self) -> &str {
        self.fine_tag.as_ref()
    }

    /// Get the morphological features of the token.
    pub fn features(&self) -> &[Feature] {
        self.features.as_ref()
    }

    /// Get the sentence position of the token's syntactic head.
    ///
    /// A head of 0 marks the token as the root of the dependency tree.
    pub fn head(&self) -> usize {
        self.head
    }

    /// Get the dependency relation to the token's head.
    pub fn dependency_relation(&self) -> &str {
        self.dependency_relation.as_ref()
    }

    /// Get the miscellaneous features of the token.
    pub fn miscellaneous_features(&self) -> &[Feature] {
        self.miscellaneous_features.as_ref()
    }
}
