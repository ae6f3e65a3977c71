use std::collections::HashSet;

/// Distinct words accumulated across the prior artifact and the new corpus.
///
/// Unordered while it grows; `into_sorted` hands the Paginator an immutable,
/// lexicographically ordered sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordSet {
    words: HashSet<String>,
}

impl WordSet {
    pub fn new() -> Self {
        WordSet {
            words: HashSet::new(),
        }
    }

    /// Returns true if the word was not already present.
    pub fn insert(&mut self, word: String) -> bool {
        self.words.insert(word)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.words.iter()
    }

    /// Byte order, which for canonical lowercase ASCII is plain alphabetical order.
    pub fn into_sorted(self) -> Vec<String> {
        let mut sorted: Vec<String> = self.words.into_iter().collect();
        sorted.sort_unstable();
        sorted
    }
}

impl Extend<String> for WordSet {
    fn extend<I: IntoIterator<Item = String>>(&mut self, iter: I) {
        self.words.extend(iter);
    }
}

impl FromIterator<String> for WordSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        WordSet {
            words: iter.into_iter().collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub serial: usize,   // 1-based, contiguous across pages
    pub word: String,
}

/// One rendered column of the artifact
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub number: usize,   // 1-based column index
    pub entries: Vec<Entry>,
}

impl Page {
    pub fn first_serial(&self) -> Option<usize> {
        self.entries.first().map(|e| e.serial)
    }

    pub fn last_serial(&self) -> Option<usize> {
        self.entries.last().map(|e| e.serial)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
