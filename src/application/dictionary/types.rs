use std::collections::{HashMap, HashSet};

/// Normalized words excluded from counting.
#[derive(Clone, Debug, Default)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    #[cfg(test)]
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        StopwordSet {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    pub fn insert(&mut self, word: String) {
        self.words.insert(word);
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
}

/// Normalized toxic word to severity level.
#[derive(Clone, Debug, Default)]
pub struct ToxicDictionary {
    entries: HashMap<String, i32>,
}

impl ToxicDictionary {
    #[cfg(test)]
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, i32)>,
        S: Into<String>,
    {
        let mut dict = ToxicDictionary::default();
        for (word, severity) in pairs {
            dict.insert(word.into(), severity);
        }
        dict
    }

    /// Keeps the first severity seen for a word.
    pub fn insert(&mut self, word: String, severity: i32) -> bool {
        if self.entries.contains_key(&word) {
            return false;
        }
        self.entries.insert(word, severity);
        true
    }

    pub fn severity_of(&self, word: &str) -> Option<i32> {
        self.entries.get(word).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

pub fn severity_label(severity: i32) -> &'static str {
    match severity {
        1 => "mild",
        2 => "moderate",
        _ => "severe",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_severity_wins() {
        let dict = ToxicDictionary::from_pairs([("bad", 2), ("bad", 3), ("worse", 3)]);
        assert_eq!(dict.len(), 2);
        assert_eq!(dict.severity_of("bad"), Some(2));
        assert_eq!(dict.severity_of("fine"), None);
    }

    #[test]
    fn severity_labels() {
        assert_eq!(severity_label(1), "mild");
        assert_eq!(severity_label(2), "moderate");
        assert_eq!(severity_label(3), "severe");
        assert_eq!(severity_label(0), "severe");
        assert_eq!(severity_label(-7), "severe");
    }

    #[test]
    fn stopword_membership_is_exact() {
        let stopwords = StopwordSet::from_words(["the", "a"]);
        assert!(stopwords.contains("the"));
        assert!(!stopwords.contains("The"));
        assert!(!stopwords.contains("an"));
    }
}
