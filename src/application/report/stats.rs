use crate::application::analysis::AnalysisSession;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TextStats {
    pub word_count: usize,
    pub unique_words: usize,
    pub toxic_occurrences: usize,
    pub toxic_unique: usize,
    /// Percentage in `[0, 100]`; zero when nothing was counted.
    pub toxic_ratio: f64,
}

impl TextStats {
    pub fn from_session(session: &AnalysisSession) -> Self {
        let (toxic_occurrences, toxic_unique) = session
            .table
            .toxic_entries()
            .fold((0usize, 0usize), |(occ, uniq), e| (occ + e.frequency, uniq + 1));

        TextStats {
            word_count: session.word_count,
            unique_words: session.unique_word_count(),
            toxic_occurrences,
            toxic_unique,
            toxic_ratio: toxic_ratio(toxic_occurrences, session.word_count),
        }
    }
}

pub fn toxic_ratio(toxic_occurrences: usize, word_count: usize) -> f64 {
    if word_count == 0 {
        return 0.0;
    }
    toxic_occurrences as f64 / word_count as f64 * 100.0
}
