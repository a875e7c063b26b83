use crate::application::dictionary::{ToxicDictionary, classify};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordEntry {
    pub word: String,
    pub frequency: usize,
    pub is_toxic: bool,
    pub severity: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecordOutcome {
    Incremented,
    Inserted,
    /// New distinct word seen while the table was full.
    Dropped,
}

/// Distinct words of the loaded text in insertion (or last sorted) order.
#[derive(Clone, Debug, Default)]
pub struct WordTable {
    entries: Vec<WordEntry>,
    index: HashMap<String, usize>,
    capacity: usize,
}

impl WordTable {
    pub fn with_capacity(capacity: usize) -> Self {
        WordTable {
            entries: Vec::new(),
            index: HashMap::new(),
            capacity,
        }
    }

    pub fn record(&mut self, word: &str, toxic: &ToxicDictionary) -> RecordOutcome {
        if let Some(&pos) = self.index.get(word) {
            self.entries[pos].frequency += 1;
            return RecordOutcome::Incremented;
        }
        if self.entries.len() >= self.capacity {
            return RecordOutcome::Dropped;
        }

        let class = classify(word, toxic);
        self.index.insert(word.to_string(), self.entries.len());
        self.entries.push(WordEntry {
            word: word.to_string(),
            frequency: 1,
            is_toxic: class.is_toxic,
            severity: class.severity,
        });
        RecordOutcome::Inserted
    }

    /// Stable in-place reorder.
    pub fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&WordEntry, &WordEntry) -> Ordering,
    {
        self.entries.sort_by(compare);
        self.index = self
            .entries
            .iter()
            .enumerate()
            .map(|(pos, entry)| (entry.word.clone(), pos))
            .collect();
    }

    #[cfg(test)]
    pub fn get(&self, word: &str) -> Option<&WordEntry> {
        self.index.get(word).map(|&pos| &self.entries[pos])
    }

    pub fn entries(&self) -> &[WordEntry] {
        &self.entries
    }

    pub fn toxic_entries(&self) -> impl Iterator<Item = &WordEntry> {
        self.entries.iter().filter(|e| e.is_toxic)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

/// Everything derived from one loaded text file. Replaced, never merged,
/// when another file is loaded.
#[derive(Clone, Debug, Default)]
pub struct AnalysisSession {
    pub source: Option<PathBuf>,
    pub table: WordTable,
    pub word_count: usize,
    pub dropped: usize,
}

impl AnalysisSession {
    pub fn new(source: Option<&Path>, capacity: usize) -> Self {
        AnalysisSession {
            source: source.map(Path::to_path_buf),
            table: WordTable::with_capacity(capacity),
            word_count: 0,
            dropped: 0,
        }
    }

    pub fn source_name(&self) -> String {
        self.source
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(none)".to_string())
    }

    pub fn unique_word_count(&self) -> usize {
        self.table.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_inserts_then_increments() {
        let toxic = ToxicDictionary::from_pairs([("bad", 2)]);
        let mut table = WordTable::with_capacity(10);
        assert_eq!(table.record("bad", &toxic), RecordOutcome::Inserted);
        assert_eq!(table.record("thing", &toxic), RecordOutcome::Inserted);
        assert_eq!(table.record("bad", &toxic), RecordOutcome::Incremented);

        let bad = table.get("bad").unwrap();
        assert_eq!(bad.frequency, 2);
        assert!(bad.is_toxic);
        assert_eq!(bad.severity, 2);
        assert_eq!(table.get("thing").unwrap().severity, 0);
    }

    #[test]
    fn full_table_drops_new_words_but_counts_known_ones() {
        let toxic = ToxicDictionary::default();
        let mut table = WordTable::with_capacity(1);
        table.record("one", &toxic);
        assert_eq!(table.record("two", &toxic), RecordOutcome::Dropped);
        assert_eq!(table.record("one", &toxic), RecordOutcome::Incremented);
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("one").unwrap().frequency, 2);
        assert!(table.get("two").is_none());
    }

    #[test]
    fn index_follows_reorder() {
        let toxic = ToxicDictionary::default();
        let mut table = WordTable::with_capacity(10);
        for w in ["pear", "apple", "fig"] {
            table.record(w, &toxic);
        }
        table.sort_by(|a, b| a.word.cmp(&b.word));
        assert_eq!(table.entries()[0].word, "apple");
        table.record("pear", &toxic);
        assert_eq!(table.get("pear").unwrap().frequency, 2);
        assert_eq!(table.entries()[2].frequency, 2);
    }
}
