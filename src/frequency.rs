//! Word frequency tallying
//!
//! A [`FrequencyTable`] maps words to occurrence counts. Counts always sum
//! to the number of tokens fed in; stopword exclusion happens upstream in
//! the tokenizer.

use rustc_hash::FxHashMap;

/// A word together with its occurrence count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

/// Word → count tally.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    counts: FxHashMap<String, usize>,
    total: usize,
}

impl FrequencyTable {
    /// Build a table by tallying an iterator of tokens.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut table = Self::default();
        for token in tokens {
            table.tally(token.into());
        }
        table
    }

    /// Count one occurrence of `word`.
    pub fn tally(&mut self, word: String) {
        *self.counts.entry(word).or_insert(0) += 1;
        self.total += 1;
    }

    /// Occurrence count for `word` (0 if absent).
    pub fn get(&self, word: &str) -> usize {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether the table holds no words.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total number of tokens tallied (sum of all counts).
    pub fn total(&self) -> usize {
        self.total
    }

    /// Iterate over all (word, count) pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(w, &c)| (w.as_str(), c))
    }

    /// The `n` most frequent words, highest count first.
    ///
    /// Ties are broken lexicographically so the ordering is deterministic.
    pub fn top_n(&self, n: usize) -> Vec<WordCount> {
        let mut entries = self.to_sorted();
        entries.truncate(n);
        entries
    }

    /// All words sorted by descending count, ties lexicographic.
    pub fn to_sorted(&self) -> Vec<WordCount> {
        let mut entries: Vec<WordCount> = self
            .counts
            .iter()
            .map(|(word, &count)| WordCount {
                word: word.clone(),
                count,
            })
            .collect();
        entries.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word)));
        entries
    }
}
