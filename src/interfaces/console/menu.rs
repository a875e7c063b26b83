use crate::application::analysis::{AnalysisSession, SortMode, Tokenizer, sort};
use crate::application::config::{AnalyzerConfig, DEFAULT_TOP_N};
use crate::application::dictionary::{StopwordSet, ToxicDictionary, severity_label};
use crate::application::report::{TextStats, write_session_report};
use crate::error::{AnalyzerError, AnalyzerResult};
use crate::interfaces::console::console::ConsoleUI;
use std::io::{self, BufRead};
use std::path::Path;

enum MenuState {
    MainMenu,
    Exiting,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuAction {
    LoadFile,
    ShowStats,
    ShowToxicAnalysis,
    SortAndShowTop,
    SaveReport,
    Exit,
}

pub fn parse_menu_choice(input: &str) -> AnalyzerResult<MenuAction> {
    match input.trim() {
        "1" => Ok(MenuAction::LoadFile),
        "2" => Ok(MenuAction::ShowStats),
        "3" => Ok(MenuAction::ShowToxicAnalysis),
        "4" => Ok(MenuAction::SortAndShowTop),
        "5" => Ok(MenuAction::SaveReport),
        "6" => Ok(MenuAction::Exit),
        other => Err(AnalyzerError::InvalidInput(format!(
            "menu choice {:?} is not a number between 1 and 6",
            other
        ))),
    }
}

pub fn parse_sort_mode(input: &str) -> AnalyzerResult<SortMode> {
    match input.trim() {
        "1" => Ok(SortMode::Lexicographic),
        "2" => Ok(SortMode::Frequency),
        other => Err(AnalyzerError::InvalidInput(format!(
            "sort type {:?} must be 1 or 2",
            other
        ))),
    }
}

pub fn parse_top_n(input: &str) -> AnalyzerResult<usize> {
    match input.trim().parse::<i64>() {
        Ok(n) if n > 0 => Ok(usize::try_from(n).unwrap_or(usize::MAX)),
        _ => Err(AnalyzerError::InvalidInput(format!(
            "top N {:?} must be a positive number",
            input.trim()
        ))),
    }
}

pub struct MenuManager<R> {
    state: MenuState,
    input: R,
    config: AnalyzerConfig,
    stopwords: StopwordSet,
    toxic: ToxicDictionary,
    session: AnalysisSession,
}

impl<R: BufRead> MenuManager<R> {
    pub fn new(
        input: R,
        config: AnalyzerConfig,
        stopwords: StopwordSet,
        toxic: ToxicDictionary,
    ) -> Self {
        let session = AnalysisSession::new(None, config.max_unique_words);
        MenuManager {
            state: MenuState::MainMenu,
            input,
            config,
            stopwords,
            toxic,
            session,
        }
    }

    #[cfg(test)]
    pub fn session(&self) -> &AnalysisSession {
        &self.session
    }

    pub fn run(&mut self) {
        while !matches!(self.state, MenuState::Exiting) {
            self.display_main_menu();
            self.handle_input();
        }
        ConsoleUI::print_header("Exiting");
        ConsoleUI::print_info("Goodbye.");
    }

    /// `None` on end of input or a broken stdin; the menu then shuts down.
    /// A line that is not valid UTF-8 reads as empty input.
    fn read_line(&mut self) -> Option<String> {
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => {
                self.state = MenuState::Exiting;
                None
            }
            Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                log::debug!("menu.invalid_utf8 error={}", e);
                ConsoleUI::print_error("Input is not valid text; please try again");
                Some(String::new())
            }
            Err(e) => {
                log::error!("menu.read_failed error={}", e);
                self.state = MenuState::Exiting;
                None
            }
            Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
        }
    }

    fn display_main_menu(&self) {
        ConsoleUI::print_header("Toxic Text Analyzer");
        if self.session.source.is_some() {
            ConsoleUI::print_info(&format!("Loaded: {}", self.session.source_name()));
        }
        ConsoleUI::print_option(1, "Load text file");
        ConsoleUI::print_option(2, "Show basic statistics");
        ConsoleUI::print_option(3, "Show toxic word analysis");
        ConsoleUI::print_option(4, "Sort and show top N words");
        ConsoleUI::print_option(5, "Save analysis report");
        ConsoleUI::print_exit_option(6, "Exit");
        ConsoleUI::print_prompt("Choose 1-6");
    }

    fn handle_input(&mut self) {
        let Some(line) = self.read_line() else {
            return;
        };
        if line.trim().is_empty() {
            return;
        }

        match parse_menu_choice(&line) {
            Ok(MenuAction::LoadFile) => self.load_file(),
            Ok(MenuAction::ShowStats) => self.show_stats(),
            Ok(MenuAction::ShowToxicAnalysis) => self.show_toxic_analysis(),
            Ok(MenuAction::SortAndShowTop) => self.sort_and_show_top(),
            Ok(MenuAction::SaveReport) => self.save_report(),
            Ok(MenuAction::Exit) => self.state = MenuState::Exiting,
            Err(e) => {
                log::debug!("menu.invalid_choice input={:?}", line);
                ConsoleUI::print_error(&e.to_string());
            }
        }
    }

    fn load_file(&mut self) {
        ConsoleUI::print_prompt("Text file path (e.g. input.txt)");
        let Some(line) = self.read_line() else {
            return;
        };
        let path = line.trim();
        if path.is_empty() {
            ConsoleUI::print_error("File path is empty");
            return;
        }

        let tokenizer = Tokenizer::new(&self.stopwords, &self.toxic, &self.config);
        match tokenizer.load_text_file(Path::new(path)) {
            Ok(session) => {
                self.session = session;
                ConsoleUI::print_success(&format!(
                    "File loaded: {} words, {} unique",
                    self.session.word_count,
                    self.session.unique_word_count()
                ));
                if self.session.dropped > 0 {
                    ConsoleUI::print_warning(&format!(
                        "Unique word limit {} reached; {} occurrences of new words were skipped",
                        self.session.table.capacity(),
                        self.session.dropped
                    ));
                }
            }
            Err(e) => {
                log::warn!("text.load_failed path={} error={}", path, e);
                ConsoleUI::print_error(&e.to_string());
            }
        }
    }

    fn show_stats(&self) {
        let stats = TextStats::from_session(&self.session);
        ConsoleUI::print_header("Basic Statistics");
        ConsoleUI::print_field("Total words", &stats.word_count.to_string());
        ConsoleUI::print_field("Unique words", &stats.unique_words.to_string());
        ConsoleUI::print_field("Toxic occurrences", &stats.toxic_occurrences.to_string());
        ConsoleUI::print_field("Toxic ratio", &format!("{:.2}%", stats.toxic_ratio));
    }

    fn show_toxic_analysis(&self) {
        ConsoleUI::print_header("Toxic Word Analysis");
        let stats = TextStats::from_session(&self.session);
        for entry in self.session.table.toxic_entries() {
            ConsoleUI::print_word_row(
                None,
                &entry.word,
                entry.frequency,
                Some((severity_label(entry.severity), entry.severity)),
            );
        }
        ConsoleUI::print_field("Unique toxic words", &stats.toxic_unique.to_string());
        if stats.toxic_unique == 0 {
            ConsoleUI::print_info("No toxic words detected");
        }
    }

    fn sort_and_show_top(&mut self) {
        ConsoleUI::print_prompt("Sort type (1 = lexicographic, 2 = frequency descending)");
        let Some(line) = self.read_line() else {
            return;
        };
        let mode = parse_sort_mode(&line).unwrap_or_else(|e| {
            ConsoleUI::print_error(&format!("{}; sorting by frequency", e));
            SortMode::default()
        });

        ConsoleUI::print_prompt("How many words to show");
        let Some(line) = self.read_line() else {
            return;
        };
        let top_n = parse_top_n(&line).unwrap_or_else(|e| {
            ConsoleUI::print_error(&format!("{}; showing top {}", e, DEFAULT_TOP_N));
            DEFAULT_TOP_N
        });

        if self.session.table.is_empty() {
            ConsoleUI::print_info("No words loaded yet; load a text file first");
            return;
        }
        sort(&mut self.session.table, mode);
        ConsoleUI::print_success(&format!("Sorted ({})", mode));
        ConsoleUI::print_header(&format!("Top {} Words", top_n));
        for (rank, entry) in self.session.table.entries().iter().take(top_n).enumerate() {
            ConsoleUI::print_word_row(Some(rank + 1), &entry.word, entry.frequency, None);
        }
    }

    fn save_report(&mut self) {
        let path = self.config.report_path.clone();
        ConsoleUI::print_info(&format!("Report will be saved to {}", path.display()));
        match write_session_report(&mut self.session, &path) {
            Ok(()) => ConsoleUI::print_success(&format!("Report saved to {}", path.display())),
            Err(e) => {
                log::error!("report.save_failed error={}", e);
                ConsoleUI::print_error(&e.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Cursor;
    use tempfile::TempDir;

    #[test]
    fn menu_choices_parse() {
        assert_eq!(parse_menu_choice("1").unwrap(), MenuAction::LoadFile);
        assert_eq!(parse_menu_choice(" 6 ").unwrap(), MenuAction::Exit);
        assert!(parse_menu_choice("7").is_err());
        assert!(parse_menu_choice("abc").is_err());
        assert!(parse_menu_choice("").is_err());
    }

    #[test]
    fn sort_mode_parses() {
        assert_eq!(parse_sort_mode("1").unwrap(), SortMode::Lexicographic);
        assert_eq!(parse_sort_mode("2").unwrap(), SortMode::Frequency);
        assert!(parse_sort_mode("3").is_err());
        assert!(parse_sort_mode("x").is_err());
        assert_eq!(SortMode::default(), SortMode::Frequency);
    }

    #[test]
    fn top_n_must_be_positive() {
        assert_eq!(parse_top_n("5").unwrap(), 5);
        assert!(parse_top_n("0").is_err());
        assert!(parse_top_n("-3").is_err());
        assert!(parse_top_n("ten").is_err());
    }

    struct Workspace {
        dir: TempDir,
    }

    impl Workspace {
        fn new() -> Self {
            Workspace {
                dir: tempfile::tempdir().unwrap(),
            }
        }

        fn write(&self, name: &str, contents: &str) -> String {
            let path = self.dir.path().join(name);
            fs::write(&path, contents).unwrap();
            path.display().to_string()
        }

        fn config(&self) -> AnalyzerConfig {
            AnalyzerConfig {
                report_path: self.dir.path().join("report.txt"),
                ..AnalyzerConfig::default()
            }
        }

        fn menu(&self, script: String) -> MenuManager<Cursor<Vec<u8>>> {
            MenuManager::new(
                Cursor::new(script.into_bytes()),
                self.config(),
                StopwordSet::from_words(["the", "a"]),
                ToxicDictionary::from_pairs([("bad", 2)]),
            )
        }
    }

    #[test]
    fn invalid_input_keeps_the_loop_running() {
        let ws = Workspace::new();
        let text = ws.write("input.txt", "The Bad bad thing.");
        let mut menu = ws.menu(format!("9\nabc\n\n1\n{}\n4\nzz\n-1\n6\n", text));
        menu.run();

        assert_eq!(menu.session().word_count, 3);
        assert_eq!(menu.session().table.entries()[0].word, "bad");
    }

    #[test]
    fn non_utf8_input_keeps_the_loop_running() {
        let ws = Workspace::new();
        let text = ws.write("input.txt", "bad words");
        let mut script = b"\xff\xfe\n".to_vec();
        script.extend_from_slice(format!("1\n{}\n3\n6\n", text).as_bytes());
        let mut menu = MenuManager::new(
            Cursor::new(script),
            ws.config(),
            StopwordSet::from_words(["the", "a"]),
            ToxicDictionary::from_pairs([("bad", 2)]),
        );
        menu.run();

        assert_eq!(menu.session().word_count, 2);
        assert!(menu.session().table.get("bad").unwrap().is_toxic);
    }

    #[test]
    fn reloading_replaces_the_session() {
        let ws = Workspace::new();
        let first = ws.write("first.txt", "The Bad bad thing.");
        let second = ws.write("second.txt", "other words");
        let mut menu = ws.menu(format!("1\n{}\n1\n{}\n6\n", first, second));
        menu.run();

        let session = menu.session();
        assert_eq!(session.word_count, 2);
        assert!(session.table.get("bad").is_none());
        assert!(session.table.get("other").is_some());
    }

    #[test]
    fn failed_load_keeps_previous_session() {
        let ws = Workspace::new();
        let text = ws.write("input.txt", "bad words");
        let missing = ws.dir.path().join("missing.txt").display().to_string();
        let mut menu = ws.menu(format!("1\n{}\n1\n{}\n1\n\n6\n", text, missing));
        menu.run();

        assert_eq!(menu.session().word_count, 2);
    }

    #[test]
    fn save_report_writes_configured_path() {
        let ws = Workspace::new();
        let text = ws.write("input.txt", "The Bad bad thing.");
        let mut menu = ws.menu(format!("1\n{}\n5\n6\n", text));
        menu.run();

        let report = fs::read_to_string(ws.dir.path().join("report.txt")).unwrap();
        assert!(report.contains(&format!("Source file: {}", text)));
        assert!(report.contains("Toxic ratio: 66.67%"));
    }

    #[test]
    fn end_of_input_exits() {
        let ws = Workspace::new();
        let mut menu = ws.menu("2\n3\n4\n".to_string());
        menu.run();
        assert_eq!(menu.session().word_count, 0);
    }

    #[test]
    fn analysis_before_loading_is_harmless() {
        let ws = Workspace::new();
        let text = ws.write("input.txt", "bad bad words");
        let mut menu = ws.menu(format!("3\n4\n2\n5\n1\n{}\n3\n6\n", text));
        menu.run();

        let session = menu.session();
        assert_eq!(session.word_count, 3);
        assert_eq!(session.table.toxic_entries().count(), 1);
    }
}
