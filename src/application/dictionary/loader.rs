use super::types::{StopwordSet, ToxicDictionary};
use crate::application::analysis::normalize;
use crate::error::{AnalyzerError, AnalyzerResult, FileKind};
use std::fs;
use std::path::Path;
use std::time::Instant;

fn read_lossy(path: &Path, kind: FileKind) -> AnalyzerResult<String> {
    let bytes = fs::read(path).map_err(|e| AnalyzerError::from_read(kind, path, e))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Reads at most `capacity` whitespace-separated stopwords.
pub fn read_stopwords(
    path: &Path,
    capacity: usize,
    max_word_length: usize,
) -> AnalyzerResult<StopwordSet> {
    let t0 = Instant::now();
    let contents = read_lossy(path, FileKind::Stopwords)?;

    let mut set = StopwordSet::default();
    let mut tokens = contents.split_whitespace();
    let mut read = 0usize;

    while read < capacity {
        let Some(token) = tokens.next() else {
            break;
        };
        read += 1;
        let normalized = normalize(token, max_word_length);
        if !normalized.is_empty() {
            set.insert(normalized);
        }
    }

    if tokens.next().is_some() {
        log::warn!(
            "stopwords.capacity_reached={} path={} extra entries ignored",
            capacity,
            path.display()
        );
    }

    log::info!(
        "stopwords.loaded={} read={} path={} perf.load_us={}",
        set.len(),
        read,
        path.display(),
        t0.elapsed().as_micros()
    );

    Ok(set)
}

/// Stopwords are optional: any failure yields an empty set.
pub fn load_stopwords(path: &Path, capacity: usize, max_word_length: usize) -> StopwordSet {
    match read_stopwords(path, capacity, max_word_length) {
        Ok(set) => set,
        Err(e) if e.is_missing_file() => {
            log::warn!("{}; continuing without stopword filtering", e);
            StopwordSet::default()
        }
        Err(e) => {
            log::error!("{}; continuing without stopword filtering", e);
            StopwordSet::default()
        }
    }
}

/// Reads `<word> <severity>` pairs. Reading stops at the first pair whose
/// severity is missing or not an integer; pairs before it are kept.
pub fn load_toxic_words(
    path: &Path,
    capacity: usize,
    max_word_length: usize,
) -> AnalyzerResult<ToxicDictionary> {
    let t0 = Instant::now();
    let contents = read_lossy(path, FileKind::ToxicWords)?;

    let mut dict = ToxicDictionary::default();
    let mut tokens = contents.split_whitespace();
    let mut read = 0usize;

    while read < capacity {
        let Some(word) = tokens.next() else {
            break;
        };
        let Some(raw_severity) = tokens.next() else {
            log::warn!(
                "toxic_words.malformed path={} entry={} word={:?} reason=missing severity",
                path.display(),
                read + 1,
                word
            );
            break;
        };
        let Ok(severity) = raw_severity.parse::<i32>() else {
            log::warn!(
                "toxic_words.malformed path={} entry={} word={:?} severity={:?}",
                path.display(),
                read + 1,
                word,
                raw_severity
            );
            break;
        };
        read += 1;

        let normalized = normalize(word, max_word_length);
        if normalized.is_empty() {
            continue;
        }
        if !dict.insert(normalized, severity) {
            log::debug!("toxic_words.duplicate word={:?} kept=first", word);
        }
    }

    log::info!(
        "toxic_words.loaded={} read={} path={} perf.load_us={}",
        dict.len(),
        read,
        path.display(),
        t0.elapsed().as_micros()
    );

    Ok(dict)
}
