use crate::core::error::{Error, ErrorKind, Result};

pub const DEFAULT_WORDS_PER_COLUMN: usize = 100_000;
pub const DEFAULT_MIN_WORD_LENGTH: usize = 3;

#[derive(Debug, Clone)]
pub struct Config {
    pub words_per_column: usize,   // Page capacity of the rendered artifact
    pub min_word_length: usize,    // Shortest accepted word, in characters

    pub atomic_write: bool,        // Write to a temp file, then rename over the target
    pub lock_output: bool,         // Hold `<output>.lock` for the whole run
}

impl Default for Config {
    fn default() -> Self {
        Config {
            words_per_column: DEFAULT_WORDS_PER_COLUMN,
            min_word_length: DEFAULT_MIN_WORD_LENGTH,   // "length > 2"

            atomic_write: true,
            lock_output: true,
        }
    }
}

impl Config {
    pub fn with_words_per_column(mut self, words_per_column: usize) -> Self {
        self.words_per_column = words_per_column;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.words_per_column == 0 {
            return Err(Error::new(
                ErrorKind::InvalidArgument,
                "words_per_column must be at least 1".to_string(),
            ));
        }
        if self.min_word_length == 0 {
            return Err(Error::new(
                ErrorKind::InvalidArgument,
                "min_word_length must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
