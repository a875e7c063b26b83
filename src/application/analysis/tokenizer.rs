use super::normalizer::normalize;
use super::types::{AnalysisSession, RecordOutcome};
use crate::application::config::AnalyzerConfig;
use crate::application::dictionary::{StopwordSet, ToxicDictionary};
use crate::error::{AnalyzerError, AnalyzerResult, FileKind};
use std::fs;
use std::path::Path;
use std::time::Instant;

const TOKEN_SEPARATORS: [char; 4] = [' ', '\t', '\r', '\n'];

pub struct Tokenizer<'a> {
    stopwords: &'a StopwordSet,
    toxic: &'a ToxicDictionary,
    max_word_length: usize,
    max_line_length: usize,
    max_unique_words: usize,
}

impl<'a> Tokenizer<'a> {
    pub fn new(
        stopwords: &'a StopwordSet,
        toxic: &'a ToxicDictionary,
        config: &AnalyzerConfig,
    ) -> Self {
        Tokenizer {
            stopwords,
            toxic,
            max_word_length: config.max_word_length,
            max_line_length: config.max_line_length,
            max_unique_words: config.max_unique_words,
        }
    }

    /// Folds one line into `session`. The line is assumed to already fit the
    /// line buffer; see `tokenize_text` for the chunking.
    pub fn tokenize_line(&self, line: &str, session: &mut AnalysisSession) {
        for raw in line.split(TOKEN_SEPARATORS) {
            let word = normalize(raw, self.max_word_length);
            if word.is_empty() || self.stopwords.contains(&word) {
                continue;
            }

            session.word_count += 1;
            if session.table.record(&word, self.toxic) == RecordOutcome::Dropped {
                session.dropped += 1;
            }
        }
    }

    /// Splits `text` into lines, cutting lines longer than the buffer into
    /// consecutive chunks, and tokenizes each piece.
    pub fn tokenize_text(&self, text: &str, session: &mut AnalysisSession) {
        for line in text.lines() {
            for chunk in chunk_chars(line, self.max_line_length) {
                self.tokenize_line(chunk, session);
            }
        }
    }

    /// Builds a fresh session from the file at `path`.
    pub fn load_text_file(&self, path: &Path) -> AnalyzerResult<AnalysisSession> {
        let t0 = Instant::now();
        let bytes = fs::read(path).map_err(|e| AnalyzerError::from_read(FileKind::Text, path, e))?;
        let text = String::from_utf8_lossy(&bytes);

        let mut session = AnalysisSession::new(Some(path), self.max_unique_words);
        self.tokenize_text(&text, &mut session);

        if session.dropped > 0 {
            log::warn!(
                "text.capacity_reached={} dropped_occurrences={} path={}",
                self.max_unique_words,
                session.dropped,
                path.display()
            );
        }
        log::info!(
            "text.loaded path={} words={} unique={} perf.load_us={}",
            path.display(),
            session.word_count,
            session.unique_word_count(),
            t0.elapsed().as_micros()
        );

        Ok(session)
    }
}

fn chunk_chars(line: &str, max_chars: usize) -> impl Iterator<Item = &str> {
    let max_chars = max_chars.max(1);
    let mut rest = line;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let cut = rest
            .char_indices()
            .nth(max_chars)
            .map(|(idx, _)| idx)
            .unwrap_or(rest.len());
        let (head, tail) = rest.split_at(cut);
        rest = tail;
        Some(head)
    })
}
