use std::path::PathBuf;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Summary of one `WordStore::run`
#[derive(Debug, Clone, Serialize)]
pub struct RunStats {
    // Prior state
    pub existing_words: usize,

    // Corpus pass
    pub input_lines: usize,
    pub input_tokens: usize,
    pub accepted_tokens: usize,
    pub new_words: usize,

    // Emitted artifact
    pub total_words: usize,
    pub pages: usize,
    pub words_per_column: usize,
    pub output_path: PathBuf,

    pub elapsed_ms: u64,
    pub finished_at: DateTime<Utc>,
}

/// Counters produced by the Merger for a single corpus
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeStats {
    pub lines: usize,
    pub tokens: usize,
    pub accepted: usize,
    pub new_words: usize,
}
