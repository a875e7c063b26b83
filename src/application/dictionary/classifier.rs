use super::types::ToxicDictionary;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Classification {
    pub is_toxic: bool,
    /// Zero unless `is_toxic`.
    pub severity: i32,
}

/// Exact lookup of an already normalized word.
pub fn classify(word: &str, dict: &ToxicDictionary) -> Classification {
    match dict.severity_of(word) {
        Some(severity) => Classification {
            is_toxic: true,
            severity,
        },
        None => Classification::default(),
    }
}
