use crate::analysis::filter::TokenFilter;
use crate::analysis::token::Token;
use crate::analysis::tokenizer::is_separator;

/// Removes every character that is neither an ASCII letter nor whitespace.
///
/// Tokens are rewritten in place and never dropped or re-split here, even when
/// nothing (or only whitespace) survives; length filtering happens later.
pub struct AsciiLetterFilter;

impl AsciiLetterFilter {
    pub fn is_kept(c: char) -> bool {
        c.is_ascii_alphabetic() || is_separator(c)
    }
}

impl TokenFilter for AsciiLetterFilter {
    fn filter(&self, tokens: Vec<Token>) -> Vec<Token> {
        tokens.into_iter()
            .map(|mut token| {
                token.text.retain(Self::is_kept);
                token
            })
            .collect()
    }

    fn name(&self) -> &str {
        "ascii_letters"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(text: &str) -> String {
        let tokens = AsciiLetterFilter.filter(vec![Token::new(text.to_string(), 0, 0)]);
        tokens[0].text.clone()
    }

    #[test]
    fn strips_digits_punctuation_and_non_ascii() {
        assert_eq!(run("cat_99"), "cat");
        assert_eq!(run("Hi!"), "Hi");
        assert_eq!(run("naïve"), "nave");
        assert_eq!(run("don't"), "dont");
        assert_eq!(run("42"), "");
    }

    #[test]
    fn keeps_separator_characters() {
        assert_eq!(run("ab\u{1f}c!"), "ab\u{1f}c");
    }

    #[test]
    fn keeps_case_for_the_lowercase_filter() {
        assert_eq!(run("McDonald's"), "McDonalds");
    }
}
