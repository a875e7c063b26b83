use super::types::WordTable;
use std::fmt;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortMode {
    /// Ascending by word, byte-wise.
    Lexicographic,
    /// Descending by frequency. Equal frequencies keep their previous
    /// relative order.
    #[default]
    Frequency,
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortMode::Lexicographic => f.write_str("lexicographic"),
            SortMode::Frequency => f.write_str("frequency descending"),
        }
    }
}

pub fn sort(table: &mut WordTable, mode: SortMode) {
    if table.len() <= 1 {
        return;
    }
    match mode {
        SortMode::Lexicographic => table.sort_by(|a, b| a.word.cmp(&b.word)),
        SortMode::Frequency => table.sort_by(|a, b| b.frequency.cmp(&a.frequency)),
    }
    log::debug!("sort.done mode={} entries={}", mode, table.len());
}
