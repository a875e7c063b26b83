use colored::*;
use std::io::{self, Write};
use unicode_width::UnicodeWidthStr;

pub struct ConsoleUI;

impl ConsoleUI {
    pub fn print_header(title: &str) {
        let min_width = 62;
        let title_width = UnicodeWidthStr::width(title);
        let width = min_width.max(title_width);
        let padding_total = width.saturating_sub(title_width);
        let padding_left = padding_total / 2;
        let padding_right = padding_total - padding_left;
        let horizontal = "═".repeat(width);
        println!();
        println!("{}", format!("╔{}╗", horizontal).bright_cyan());
        println!(
            "║{}{}{}║",
            " ".repeat(padding_left),
            title.bright_yellow().bold(),
            " ".repeat(padding_right)
        );
        println!("{}", format!("╚{}╝", horizontal).bright_cyan());
    }

    pub fn print_option(number: i32, text: &str) {
        println!(
            "  {} {} {}",
            format!("[{}]", number).bright_blue().bold(),
            "»".bright_cyan(),
            text.bright_white()
        );
    }

    pub fn print_exit_option(number: i32, text: &str) {
        println!(
            "  {} {} {}",
            format!("[{}]", number).bright_red().bold(),
            "»".bright_cyan(),
            text.truecolor(150, 150, 150)
        );
    }

    pub fn print_prompt(label: &str) {
        print!("\n  {} {} ", label.bright_white(), "❯".bright_green().bold());
        let _ = io::stdout().flush();
    }

    pub fn print_error(message: &str) {
        println!("\n  {} {}", "✗".bright_red().bold(), message.bright_red());
    }

    pub fn print_warning(message: &str) {
        println!("  {} {}", "⚠".bright_yellow().bold(), message.bright_yellow());
    }

    pub fn print_success(message: &str) {
        println!(
            "\n  {} {}",
            "✓".bright_green().bold(),
            message.bright_green()
        );
    }

    pub fn print_info(message: &str) {
        println!(
            "  {} {}",
            "[ℹ]".bright_cyan().bold(),
            message.truecolor(180, 180, 180)
        );
    }

    pub fn print_field(label: &str, value: &str) {
        println!("  {:<20} {}", format!("{}:", label).bright_white(), value.bright_cyan());
    }

    /// One word row; toxic words are highlighted by severity.
    pub fn print_word_row(rank: Option<usize>, word: &str, frequency: usize, tag: Option<(&str, i32)>) {
        let prefix = rank.map(|r| format!("{:>3}.", r)).unwrap_or_default();
        let padded = format!("{:<15}", word);
        let word_col = match tag {
            Some((_, 1)) => padded.yellow(),
            Some((_, 2)) => padded.bright_red(),
            Some(_) => padded.red().bold(),
            None => padded.normal(),
        };
        let tail = tag
            .map(|(label, severity)| format!("  severity: {} ({})", severity, label))
            .unwrap_or_default();
        println!("  {} {} frequency: {}{}", prefix, word_col, frequency, tail);
    }
}
