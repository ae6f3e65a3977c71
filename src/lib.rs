pub mod core;
pub mod analysis;
pub mod pipeline;
pub mod storage;

pub use crate::core::config::Config;
pub use crate::core::error::{Error, ErrorKind, Result};
pub use crate::core::stats::RunStats;
pub use crate::core::store::{store_unique_words, WordStore};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/*
┌──────────────────────────────────────────────────────────────────────────────────┐
│                            WORDSTORE ARCHITECTURE                                │
└──────────────────────────────────────────────────────────────────────────────────┘

┌──────────────────────────────── CORE LAYER ──────────────────────────────────────┐
│                                                                                  │
│  ┌────────────────────────────────────────────────────────────────────────────┐  │
│  │                            struct WordStore                                │  │
│  │  config: Config             // words_per_column, min length, write mode    │  │
│  │  analyzer: Analyzer         // raw token -> canonical word                 │  │
│  │  reader: ArtifactReader     // prior artifact -> WordSet                   │  │
│  │  paginator: Paginator       // WordSet -> Vec<Page>                        │  │
│  │  writer: ArtifactWriter     // Vec<Page> -> HTML artifact                  │  │
│  └────────────────────────────────────────────────────────────────────────────┘  │
│                                                                                  │
│  ┌──────────────────────┐  ┌──────────────────────┐  ┌──────────────────────┐    │
│  │ struct WordSet       │  │ struct Page          │  │ struct RunStats      │    │
│  │ • HashSet<String>    │  │ • number: usize      │  │ • existing_words     │    │
│  │ • insert()           │  │ • entries: Vec<Entry>│  │ • new_words          │    │
│  │ • into_sorted()      │  │   (serial, word)     │  │ • total_words, pages │    │
│  └──────────────────────┘  └──────────────────────┘  └──────────────────────┘    │
└──────────────────────────────────────────────────────────────────────────────────┘

┌────────────────────────────── ANALYSIS LAYER ────────────────────────────────────┐
│                                                                                  │
│  WhitespaceTokenizer ─> AsciiLetterFilter ─> LowercaseFilter ─> MinLengthFilter  │
│                                                                                  │
└──────────────────────────────────────────────────────────────────────────────────┘

┌────────────────────────────── RELATIONSHIPS ─────────────────────────────────────┐
│                                                                                  │
│  WordStore::run                                                                  │
│     ├── FileLock::acquire(<output>.lock)                                         │
│     ├── ArtifactReader::load(output)       ── seeds ──> WordSet                  │
│     ├── Merger::merge(input, &mut WordSet) ── uses ──> Analyzer                  │
│     ├── Paginator::paginate(WordSet)       ── sorts ─> Vec<Page>                 │
│     └── ArtifactWriter::write(pages)       ── temp file + rename ──> output      │
│                                                                                  │
│  The artifact written by one run is the prior state read by the next.            │
│                                                                                  │
└──────────────────────────────────────────────────────────────────────────────────┘
*/
