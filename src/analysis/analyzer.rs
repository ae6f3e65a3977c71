use crate::analysis::filter::TokenFilter;
use crate::analysis::filters::ascii_letters::AsciiLetterFilter;
use crate::analysis::filters::lowercase::LowercaseFilter;
use crate::analysis::filters::min_length::MinLengthFilter;
use crate::analysis::token::Token;
use crate::analysis::tokenizer::{Tokenizer, WhitespaceTokenizer};
use crate::core::config::DEFAULT_MIN_WORD_LENGTH;

/// Text analysis pipeline
pub struct Analyzer {
    pub tokenizer: Box<dyn Tokenizer>,
    pub filters: Vec<Box<dyn TokenFilter>>,
    pub name: String,
}

impl Analyzer {
    pub fn new(name: String, tokenizer: Box<dyn Tokenizer>) -> Self {
        Analyzer {
            tokenizer,
            filters: Vec::new(),
            name,
        }
    }

    pub fn add_filter(mut self, filter: Box<dyn TokenFilter>) -> Self {
        self.filters.push(filter);
        self
    }

    /// Tokenize a line and run every filter over the result.
    pub fn analyze(&self, text: &str) -> Vec<Token> {
        let tokens = self.tokenizer.tokenize(text);
        self.filter(tokens)
    }

    /// Canonical form of a single whitespace-delimited token, or `None` if rejected.
    ///
    /// The token is not re-split: filters see it exactly as given.
    pub fn normalize(&self, raw: &str) -> Option<String> {
        self.filter(vec![Token::new(raw.to_string(), 0, 0)])
            .pop()
            .map(|token| token.text)
    }

    /// "whitespace -> ascii_letters -> lowercase -> min_length"
    pub fn describe(&self) -> String {
        std::iter::once(self.tokenizer.name())
            .chain(self.filters.iter().map(|f| f.name()))
            .collect::<Vec<_>>()
            .join(" -> ")
    }

    /// Run the filter chain over already tokenized input.
    pub fn filter(&self, mut tokens: Vec<Token>) -> Vec<Token> {
        for filter in &self.filters {
            tokens = filter.filter(tokens);
        }
        tokens
    }

    /// Analyzer for the word store: ASCII letters only, lowercased, at least `min_len` chars
    pub fn word_store(min_len: usize) -> Self {
        Analyzer::new("word_store".to_string(),
                      Box::new(WhitespaceTokenizer))
            .add_filter(Box::new(AsciiLetterFilter))
            .add_filter(Box::new(LowercaseFilter))
            .add_filter(Box::new(MinLengthFilter::new(min_len)))
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Analyzer::word_store(DEFAULT_MIN_WORD_LENGTH)
    }
}
