use std::path::PathBuf;
use std::str::FromStr;

pub const DEFAULT_STOPWORDS_PATH: &str = "my_stopwords.txt";
pub const DEFAULT_TOXIC_WORDS_PATH: &str = "my_toxicwords.txt";
pub const DEFAULT_REPORT_PATH: &str = "my_output.txt";
pub const DEFAULT_MAX_WORD_LENGTH: usize = 49;
pub const DEFAULT_MAX_STOPWORDS: usize = 1000;
pub const DEFAULT_MAX_TOXIC_WORDS: usize = 500;
pub const DEFAULT_MAX_UNIQUE_WORDS: usize = 10_000;
pub const DEFAULT_MAX_LINE_LENGTH: usize = 4999;
pub const DEFAULT_TOP_N: usize = 10;

/// Paths and capacity limits for a run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnalyzerConfig {
    pub stopwords_path: PathBuf,
    pub toxic_words_path: PathBuf,
    pub report_path: PathBuf,
    pub max_word_length: usize,
    pub max_stopwords: usize,
    pub max_toxic_words: usize,
    pub max_unique_words: usize,
    pub max_line_length: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        AnalyzerConfig {
            stopwords_path: PathBuf::from(DEFAULT_STOPWORDS_PATH),
            toxic_words_path: PathBuf::from(DEFAULT_TOXIC_WORDS_PATH),
            report_path: PathBuf::from(DEFAULT_REPORT_PATH),
            max_word_length: DEFAULT_MAX_WORD_LENGTH,
            max_stopwords: DEFAULT_MAX_STOPWORDS,
            max_toxic_words: DEFAULT_MAX_TOXIC_WORDS,
            max_unique_words: DEFAULT_MAX_UNIQUE_WORDS,
            max_line_length: DEFAULT_MAX_LINE_LENGTH,
        }
    }
}

impl AnalyzerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = AnalyzerConfig::default();
        let path = |key: &str, default: PathBuf| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .map(PathBuf::from)
                .unwrap_or(default)
        };

        AnalyzerConfig {
            stopwords_path: path("STOPWORDS_PATH", defaults.stopwords_path),
            toxic_words_path: path("TOXIC_WORDS_PATH", defaults.toxic_words_path),
            report_path: path("REPORT_PATH", defaults.report_path),
            max_word_length: capacity(&lookup, "MAX_WORD_LENGTH", defaults.max_word_length),
            max_stopwords: capacity(&lookup, "MAX_STOPWORDS", defaults.max_stopwords),
            max_toxic_words: capacity(&lookup, "MAX_TOXIC_WORDS", defaults.max_toxic_words),
            max_unique_words: capacity(&lookup, "MAX_UNIQUE_WORDS", defaults.max_unique_words),
            max_line_length: capacity(&lookup, "MAX_LINE_LENGTH", defaults.max_line_length),
        }
    }
}

fn capacity<F>(lookup: &F, key: &str, default: usize) -> usize
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        return default;
    };
    match usize::from_str(raw.trim()) {
        Ok(value) if value > 0 => value,
        _ => {
            log::warn!(
                "config.invalid key={} value={:?} fallback={}",
                key,
                raw,
                default
            );
            default
        }
    }
}
