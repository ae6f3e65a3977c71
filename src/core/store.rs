use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::time::Instant;
use chrono::Utc;
use tracing::{info, info_span};
use crate::analysis::analyzer::Analyzer;
use crate::core::config::Config;
use crate::core::error::{Error, Result};
use crate::core::stats::RunStats;
use crate::pipeline::merger::Merger;
use crate::pipeline::paginator::Paginator;
use crate::storage::artifact_reader::ArtifactReader;
use crate::storage::artifact_writer::ArtifactWriter;
use crate::storage::file_lock::FileLock;

/// Incremental word store backed by a single HTML artifact.
///
/// Each run reads the words already in the artifact, merges a new corpus into
/// them and rewrites the artifact with the sorted, paginated union.
pub struct WordStore {
    config: Config,
    analyzer: Analyzer,
    reader: ArtifactReader,
    paginator: Paginator,
    writer: ArtifactWriter,
}

impl WordStore {
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;

        let analyzer = Analyzer::word_store(config.min_word_length);
        let paginator = Paginator::new(config.words_per_column)?;
        let writer = ArtifactWriter::new(config.atomic_write);

        Ok(WordStore {
            reader: ArtifactReader::new()?,
            analyzer,
            paginator,
            writer,
            config,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Open `input_path` and run against `output_path`.
    ///
    /// A missing or unopenable input fails before the output is touched.
    pub fn run_path(&self, input_path: &Path, output_path: &Path) -> Result<RunStats> {
        let input = File::open(input_path).map_err(|e| {
            Error::input_unreadable(&format!("opening input {}", input_path.display()), e)
        })?;
        self.run(input, output_path)
    }

    pub fn run<R: Read>(&self, input: R, output_path: &Path) -> Result<RunStats> {
        let span = info_span!("store_unique_words", output = %output_path.display());
        let _enter = span.enter();
        let started = Instant::now();

        let _lock = if self.config.lock_output {
            Some(FileLock::acquire(output_path)?)
        } else {
            None
        };

        // 1. Words recovered from the previous artifact
        let existing = self.reader.load(output_path)?;
        let existing_words = existing.words.len();
        let mut words = existing.words;

        // 2. Union with the new corpus
        info!(analyzer = %self.analyzer.describe(), "merging input");
        let merged = Merger::new(&self.analyzer).merge(BufReader::new(input), &mut words)?;

        // 3. Sort and cut into columns
        let total_words = words.len();
        let pages = self.paginator.paginate(words);

        // 4. Replace the artifact
        self.writer.write(&pages, output_path)?;

        let stats = RunStats {
            existing_words,
            input_lines: merged.lines,
            input_tokens: merged.tokens,
            accepted_tokens: merged.accepted,
            new_words: merged.new_words,
            total_words,
            pages: pages.len(),
            words_per_column: self.paginator.capacity(),
            output_path: output_path.to_path_buf(),
            elapsed_ms: started.elapsed().as_millis() as u64,
            finished_at: Utc::now(),
        };

        info!(
            total_words = stats.total_words,
            new_words = stats.new_words,
            pages = stats.pages,
            elapsed_ms = stats.elapsed_ms,
            "artifact stored"
        );

        Ok(stats)
    }
}

/// Merge `input` into the artifact at `output_path` and return the total word count.
///
/// Uses the default `Config` apart from `words_per_column`, so the run holds an
/// advisory lock on a sidecar `<output_path>.lock` file, which stays on disk
/// afterwards. Use `WordStore` with `lock_output: false` to avoid it.
pub fn store_unique_words<R: Read>(
    input: R,
    output_path: &Path,
    words_per_column: usize,
) -> Result<usize> {
    let config = Config::default().with_words_per_column(words_per_column);
    let stats = WordStore::new(config)?.run(input, output_path)?;
    Ok(stats.total_words)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Cursor;
    use crate::core::error::ErrorKind;

    #[test]
    fn stats_reflect_the_run() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("words.html");
        fs::write(&out, "<html><body>\n<p>1. zebra</p>\n</body></html>").unwrap();

        let store = WordStore::new(Config::default().with_words_per_column(2)).unwrap();
        let stats = store.run(Cursor::new("ant bee ant\nzebra cat"), &out).unwrap();

        assert_eq!(stats.existing_words, 1);
        assert_eq!(stats.input_lines, 2);
        assert_eq!(stats.input_tokens, 5);
        assert_eq!(stats.accepted_tokens, 5);
        assert_eq!(stats.new_words, 3);
        assert_eq!(stats.total_words, 4);
        assert_eq!(stats.pages, 2);
        assert_eq!(stats.words_per_column, 2);
    }

    #[test]
    fn invalid_config_is_rejected_up_front() {
        let err = WordStore::new(Config::default().with_words_per_column(0)).err().unwrap();
        assert_eq!(err.kind, ErrorKind::InvalidArgument);
    }

    #[test]
    fn boundary_leaves_lock_sidecar_behind() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("words.html");

        assert_eq!(store_unique_words(Cursor::new("alpha beta"), &out, 10).unwrap(), 2);
        assert!(dir.path().join("words.html.lock").exists());
    }

    #[test]
    fn lock_can_be_disabled() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("words.html");
        let config = Config {
            lock_output: false,
            ..Config::default()
        };

        WordStore::new(config).unwrap().run(Cursor::new("alpha"), &out).unwrap();
        assert!(!dir.path().join("words.html.lock").exists());
    }
}
