use std::io::BufRead;
use tracing::info;
use crate::analysis::analyzer::Analyzer;
use crate::core::error::{Error, Result};
use crate::core::stats::MergeStats;
use crate::core::types::WordSet;

/// Streams a corpus line by line and unions its accepted words into a set.
pub struct Merger<'a> {
    pub analyzer: &'a Analyzer,
}

impl<'a> Merger<'a> {
    pub fn new(analyzer: &'a Analyzer) -> Self {
        Merger { analyzer }
    }

    /// Grow `words` with every accepted token of `input`.
    ///
    /// Only one line is buffered at a time. A read or decode failure aborts
    /// the pass; `words` may then hold part of the corpus and must be discarded.
    pub fn merge<R: BufRead>(&self, mut input: R, words: &mut WordSet) -> Result<MergeStats> {
        let mut stats = MergeStats::default();
        let mut line = String::new();

        loop {
            line.clear();
            let read = input
                .read_line(&mut line)
                .map_err(|e| Error::input_unreadable(&format!("reading input line {}", stats.lines + 1), e))?;
            if read == 0 {
                break;
            }
            stats.lines += 1;

            let tokens = self.analyzer.tokenizer.tokenize(&line);
            stats.tokens += tokens.len();

            let accepted = self.analyzer.filter(tokens);
            stats.accepted += accepted.len();

            for token in accepted {
                if words.insert(token.text) {
                    stats.new_words += 1;
                }
            }
        }

        info!(
            lines = stats.lines,
            tokens = stats.tokens,
            accepted = stats.accepted,
            new_words = stats.new_words,
            "merged input corpus"
        );

        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use crate::core::error::ErrorKind;

    fn merge(text: &[u8], words: &mut WordSet) -> Result<MergeStats> {
        let analyzer = Analyzer::default();
        Merger::new(&analyzer).merge(Cursor::new(text), words)
    }

    #[test]
    fn rejection_scenario() {
        let mut words = WordSet::new();
        let stats = merge(b"Hi! to cat_99 dog", &mut words).unwrap();

        assert_eq!(words.into_sorted(), vec!["cat", "dog"]);
        assert_eq!(stats.lines, 1);
        assert_eq!(stats.tokens, 4);
        assert_eq!(stats.accepted, 2);
        assert_eq!(stats.new_words, 2);
    }

    #[test]
    fn unions_into_seed_set() {
        let mut words: WordSet = ["ant".to_string(), "cat".to_string()].into_iter().collect();
        let stats = merge(b"The CAT sat\non the Mat.\n", &mut words).unwrap();

        assert_eq!(words.into_sorted(), vec!["ant", "cat", "mat", "sat", "the"]);
        assert_eq!(stats.lines, 2);
        assert_eq!(stats.accepted, 5);
        assert_eq!(stats.new_words, 3);
    }

    #[test]
    fn line_order_does_not_matter() {
        let mut forward = WordSet::new();
        let mut backward = WordSet::new();
        merge(b"alpha beta\ngamma alpha\ndelta", &mut forward).unwrap();
        merge(b"delta\ngamma alpha\nalpha beta", &mut backward).unwrap();
        assert_eq!(forward, backward);
    }

    #[test]
    fn empty_input_adds_nothing() {
        let mut words = WordSet::new();
        let stats = merge(b"", &mut words).unwrap();
        assert!(words.is_empty());
        assert_eq!(stats, MergeStats::default());
    }

    #[test]
    fn invalid_utf8_is_fatal() {
        let mut words = WordSet::new();
        let err = merge(b"good words\nbad \xff bytes\n", &mut words).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InputUnreadable);
        assert!(err.context.contains("line 2"));
    }
}
