use std::borrow::Cow;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use regex::Regex;
use tracing::{debug, info, warn};
use crate::core::error::{Error, Result};
use crate::core::types::WordSet;

/// One word entry of a rendered column: `<p>{serial}. {word}</p>`.
///
/// Searched anywhere in the line; the capture runs to the last `</p>`.
pub const ENTRY_PATTERN: &str = r"<p>\d+\. (.+)</p>";

/// Words recovered from a prior artifact
#[derive(Debug, Default)]
pub struct ExistingWords {
    pub words: WordSet,
    pub matched_lines: usize,
    pub skipped_lines: usize,
}

/// Recovers the word list from a previously written artifact.
///
/// Serial numbers are not validated and captured text is not re-normalized:
/// whatever sits between `. ` and `</p>` is taken as a word.
pub struct ArtifactReader {
    pattern: Regex,
}

impl ArtifactReader {
    pub fn new() -> Result<Self> {
        Ok(ArtifactReader {
            pattern: Regex::new(ENTRY_PATTERN)?,
        })
    }

    /// The word carried by one artifact line, if the line is an entry.
    pub fn parse_line<'a>(&self, line: &'a str) -> Option<Cow<'a, str>> {
        self.pattern
            .captures(line)
            .and_then(|caps| caps.get(1))
            .map(|m| unescape_html(m.as_str()))
    }

    pub fn read<R: BufRead>(&self, reader: R) -> io::Result<ExistingWords> {
        let mut existing = ExistingWords::default();

        for line in reader.lines() {
            let line = line?;
            match self.parse_line(&line) {
                Some(word) => {
                    existing.words.insert(word.into_owned());
                    existing.matched_lines += 1;
                }
                None => existing.skipped_lines += 1,
            }
        }

        Ok(existing)
    }

    /// Load the artifact at `path`; a missing file is an empty store.
    pub fn load(&self, path: &Path) -> Result<ExistingWords> {
        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no prior artifact");
                return Ok(ExistingWords::default());
            }
            Err(e) => return Err(Error::existing_unreadable(path, e)),
        };

        let existing = self
            .read(BufReader::new(file))
            .map_err(|e| Error::existing_unreadable(path, e))?;

        if existing.matched_lines == 0 && existing.skipped_lines > 0 {
            warn!(
                path = %path.display(),
                lines = existing.skipped_lines,
                "prior artifact has no word entries"
            );
        }
        info!(
            path = %path.display(),
            words = existing.words.len(),
            entries = existing.matched_lines,
            "loaded existing words"
        );

        Ok(existing)
    }
}

/// Convenience wrapper: the word set stored in the artifact at `path`.
pub fn load_existing_words(path: &Path) -> Result<WordSet> {
    Ok(ArtifactReader::new()?.load(path)?.words)
}

/// Inverse of the writer's escaping.
fn unescape_html(text: &str) -> Cow<'_, str> {
    if !text.contains('&') {
        return Cow::Borrowed(text);
    }
    Cow::Owned(
        text.replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&amp;", "&"),
    )
}
