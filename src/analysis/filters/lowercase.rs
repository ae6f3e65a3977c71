use crate::analysis::filter::TokenFilter;
use crate::analysis::token::Token;

/// ASCII-only case folding; non-ASCII text passes through unchanged.
pub struct LowercaseFilter;

impl TokenFilter for LowercaseFilter {
    fn filter(&self, mut tokens: Vec<Token>) -> Vec<Token> {
        for token in tokens.iter_mut().filter(|t| t.text.bytes().any(|b| b.is_ascii_uppercase())) {
            token.text.make_ascii_lowercase();
        }
        tokens
    }

    fn name(&self) -> &str {
        "lowercase"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_ascii_only() {
        let tokens = vec![
            Token::new("DoG".to_string(), 0, 0),
            Token::new("ÉCOLE".to_string(), 1, 4),
            Token::new("cat".to_string(), 2, 11),
        ];
        let texts: Vec<String> = LowercaseFilter.filter(tokens).into_iter().map(|t| t.text).collect();
        assert_eq!(texts, vec!["dog", "École", "cat"]);
    }
}
