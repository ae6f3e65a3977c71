use crate::analysis::token::Token;

pub trait Tokenizer: Send + Sync {
    fn tokenize(&self, text: &str) -> Vec<Token>;

    fn name(&self) -> &str;
}

/// Unicode White_Space plus the ASCII information separators U+001C..=U+001F,
/// which Python's `str.split()` also treats as whitespace.
pub fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Splits on runs of `is_separator` characters, never inside a token.
#[derive(Debug, Clone, Copy, Default)]
pub struct WhitespaceTokenizer;

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut position = 0u32;
        let mut start: Option<usize> = None;

        for (offset, c) in text.char_indices() {
            match (is_separator(c), start) {
                (true, Some(s)) => {
                    tokens.push(Token::new(text[s..offset].to_string(), position, s));
                    position += 1;
                    start = None;
                }
                (false, None) => start = Some(offset),
                _ => {}
            }
        }

        if let Some(s) = start {
            tokens.push(Token::new(text[s..].to_string(), position, s));
        }

        tokens
    }

    fn name(&self) -> &str {
        "whitespace"
    }
}
