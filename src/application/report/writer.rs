use super::stats::toxic_ratio;
use crate::application::analysis::{AnalysisSession, SortMode, WordEntry, WordTable, sort};
use crate::application::config::DEFAULT_TOP_N;
use crate::application::dictionary::severity_label;
use crate::error::{AnalyzerError, AnalyzerResult, FileKind};
use std::fs;
use std::path::Path;

const REPORT_TITLE: &str = "==================== Toxic Text Analysis Report ====================";
const TOP_WORDS_TITLE: &str = "------------------- Top 10 Words by Frequency -------------------";
const TOXIC_DETAILS_TITLE: &str = "---------------------- Toxic Word Details ----------------------";
const REPORT_FOOTER: &str = "====================================================================";

pub fn entry_label(entry: &WordEntry) -> &'static str {
    if entry.is_toxic {
        severity_label(entry.severity)
    } else {
        "normal"
    }
}

/// Renders the report. Leaves `table` sorted by frequency.
pub fn generate_report(table: &mut WordTable, word_count: usize, source: &str) -> String {
    let toxic_occurrences: usize = table.toxic_entries().map(|e| e.frequency).sum();

    let mut out = String::new();
    out.push_str(&format!("{}\n", REPORT_TITLE));
    out.push_str(&format!("Source file: {}\n", source));
    out.push_str(&format!("Total words: {}\n", word_count));
    out.push_str(&format!("Unique words: {}\n", table.len()));
    out.push_str(&format!("Toxic occurrences: {}\n", toxic_occurrences));
    out.push_str(&format!(
        "Toxic ratio: {:.2}%\n",
        toxic_ratio(toxic_occurrences, word_count)
    ));

    out.push_str(&format!("\n{}\n", TOP_WORDS_TITLE));
    sort(table, SortMode::Frequency);
    for entry in table.entries().iter().take(DEFAULT_TOP_N) {
        out.push_str(&format!(
            "{:<15} frequency: {}  type: {}\n",
            entry.word,
            entry.frequency,
            entry_label(entry)
        ));
    }

    out.push_str(&format!("\n{}\n", TOXIC_DETAILS_TITLE));
    let mut toxic_listed = 0usize;
    for entry in table.toxic_entries() {
        toxic_listed += 1;
        out.push_str(&format!(
            "word: {:<15} frequency: {}  severity: {}\n",
            entry.word, entry.frequency, entry.severity
        ));
    }
    if toxic_listed == 0 {
        out.push_str("No toxic words detected\n");
    }
    out.push_str(&format!("{}\n", REPORT_FOOTER));

    out
}

/// Overwrites `path` with `report`.
pub fn save_report(path: &Path, report: &str) -> AnalyzerResult<()> {
    fs::write(path, report).map_err(|source| AnalyzerError::Write {
        kind: FileKind::Report,
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("report.saved path={} bytes={}", path.display(), report.len());
    Ok(())
}

pub fn write_session_report(session: &mut AnalysisSession, path: &Path) -> AnalyzerResult<()> {
    let source = session.source_name();
    let report = generate_report(&mut session.table, session.word_count, &source);
    save_report(path, &report)
}
