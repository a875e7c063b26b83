use anyhow::Context;
use std::io;

mod application;
mod error;
mod infrastructure;
mod interfaces;

use application::config::AnalyzerConfig;
use application::dictionary::{StopwordSet, ToxicDictionary, load_stopwords, load_toxic_words};
use infrastructure::logging;
use interfaces::console::console::ConsoleUI;
use interfaces::console::menu::MenuManager;

fn print_working_directory() {
    match std::env::current_dir() {
        Ok(dir) => ConsoleUI::print_info(&format!("Working directory: {}", dir.display())),
        Err(e) => ConsoleUI::print_warning(&format!("Unable to resolve working directory: {}", e)),
    }
}

/// Loads both dictionaries. Missing stopwords only disable filtering; a
/// missing toxic dictionary is fatal.
fn bootstrap(config: &AnalyzerConfig) -> anyhow::Result<(StopwordSet, ToxicDictionary)> {
    let stopwords = load_stopwords(
        &config.stopwords_path,
        config.max_stopwords,
        config.max_word_length,
    );
    let toxic = load_toxic_words(
        &config.toxic_words_path,
        config.max_toxic_words,
        config.max_word_length,
    )
    .context("toxic word dictionary is required to run the analyzer")?;
    Ok((stopwords, toxic))
}

fn main() {
    dotenv::dotenv().ok();
    logging::init();

    let config = AnalyzerConfig::from_env();
    log::debug!("config={:?}", config);
    print_working_directory();

    let (stopwords, toxic) = match bootstrap(&config) {
        Ok(dictionaries) => dictionaries,
        Err(e) => {
            log::error!("{:#}", e);
            eprintln!("Fatal: {:#}", e);
            std::process::exit(1);
        }
    };

    if stopwords.is_empty() {
        ConsoleUI::print_warning("No stopwords loaded; stopword filtering is disabled");
    } else {
        ConsoleUI::print_info(&format!("Loaded {} stopwords", stopwords.len()));
    }
    if toxic.is_empty() {
        ConsoleUI::print_warning("Toxic word dictionary is empty; no words will be flagged");
    } else {
        ConsoleUI::print_info(&format!("Loaded {} toxic words", toxic.len()));
    }

    let stdin = io::stdin();
    let mut menu_manager = MenuManager::new(stdin.lock(), config, stopwords, toxic);
    menu_manager.run();
}
