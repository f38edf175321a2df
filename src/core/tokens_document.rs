/// A document represented as the ordered sequence of its tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokensDocument {
    tokens: Vec<String>,
}

impl TokensDocument {
    pub fn new(tokens: Vec<String>) -> Self {
        Self { tokens }
    }

    /// Splits `text` on Unicode whitespace.
    pub fn from_text(text: &str) -> Self {
        Self {
            tokens: text.split_whitespace().map(str::to_string).collect(),
        }
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for TokensDocument {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}
