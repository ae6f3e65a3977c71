use crate::analysis::filter::TokenFilter;
use crate::analysis::token::Token;

/// Drops tokens shorter than `min_len` characters.
pub struct MinLengthFilter {
    pub min_len: usize,
}

impl MinLengthFilter {
    pub fn new(min_len: usize) -> Self {
        MinLengthFilter { min_len }
    }

    pub fn accepts(&self, text: &str) -> bool {
        text.chars().count() >= self.min_len
    }
}

impl TokenFilter for MinLengthFilter {
    fn filter(&self, tokens: Vec<Token>) -> Vec<Token> {
        tokens.into_iter()
            .filter(|token| self.accepts(&token.text))
            .collect()
    }

    fn name(&self) -> &str {
        "min_length"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_letters_are_rejected() {
        let filter = MinLengthFilter::new(3);
        assert!(!filter.accepts(""));
        assert!(!filter.accepts("hi"));
        assert!(filter.accepts("cat"));
    }

    #[test]
    fn counts_characters_not_bytes() {
        // two letters joined by a 3-byte whitespace char
        let filter = MinLengthFilter::new(4);
        assert!(!filter.accepts("a\u{3000}b"));
    }
}
