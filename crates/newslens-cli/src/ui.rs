//! UI utilities for the CLI

use colored::*;
use crossterm::{
    event::{self, Event, KeyCode},
    terminal::{disable_raw_mode, enable_raw_mode, size},
};
use newslens_core::{Answer, Result};
use newslens_rag::ProcessSummary;
use std::io::{self, IsTerminal, Write};

/// Display startup banner
pub fn display_banner() {
    let terminal_width = size().map(|(w, _)| w as usize).unwrap_or(80);
    let banner_width = std::cmp::min(64, terminal_width.saturating_sub(4));

    let top_border = format!("┌{}┐", "─".repeat(banner_width - 2));
    let bottom_border = format!("└{}┘", "─".repeat(banner_width - 2));
    let empty_line = format!("│{}│", " ".repeat(banner_width - 2));

    println!();
    println!("{}", top_border.blue());
    println!("{}", empty_line.blue());

    let title = "newslens - article research assistant";
    let title_line = format!(
        "│  {}{}│",
        title.blue().bold(),
        " ".repeat(banner_width.saturating_sub(title.len() + 3))
    );
    println!("{}", title_line);

    println!("{}", empty_line.blue());

    let feature_lines = vec![
        "📰 Ask questions about the articles you index",
        "",
        "Getting started:",
        "• add <url> to fill a slot (up to 3 articles)",
        "• process to fetch, chunk, and index them",
        "• then just type your question",
        "",
        "v0.1.0",
    ];

    for line in feature_lines {
        if line.is_empty() {
            println!("{}", empty_line.blue());
        } else {
            let content = if line.starts_with("v0.1.0") {
                format!(
                    "│  {}{}│",
                    line.dimmed(),
                    " ".repeat(banner_width.saturating_sub(line.len() + 4))
                )
            } else {
                format!(
                    "│  {}{}│",
                    line,
                    " ".repeat(banner_width.saturating_sub(line.len() + 4))
                )
            };
            println!("{}", content.blue());
        }
    }

    println!("{}", empty_line.blue());
    println!("{}", bottom_border.blue());
    println!();
    println!(
        "{}",
        "💡 Tip: type a question at any time, or 'help' for commands".dimmed()
    );
    println!();
}

/// Handle input with command history navigation
pub async fn handle_input_with_history(history: &mut Vec<String>) -> Result<String> {
    // Piped input: read a line from stdin directly
    if !io::stdin().is_terminal() {
        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        let input = input.trim().to_string();
        if !input.is_empty() {
            history.push(input.clone());
        }
        return Ok(input);
    }

    enable_raw_mode()?;
    let mut input = String::new();
    let mut history_index: Option<usize> = None;
    let mut cursor_pos = 0;

    print!("{} ", "newslens>".green().bold());
    io::stdout().flush()?;

    loop {
        if let Event::Key(key_event) = event::read()? {
            match key_event.code {
                KeyCode::Enter => {
                    disable_raw_mode()?;
                    println!();
                    if !input.is_empty() {
                        history.push(input.clone());
                    }
                    return Ok(input);
                }
                KeyCode::Char(c) => {
                    input.insert(cursor_pos, c);
                    cursor_pos += 1;
                    print!("\r{} {}", "newslens>".green().bold(), input);
                    io::stdout().flush()?;
                }
                KeyCode::Backspace => {
                    if cursor_pos > 0 {
                        input.remove(cursor_pos - 1);
                        cursor_pos -= 1;
                        print!(
                            "\r{} {}  \r{} {}",
                            "newslens>".green().bold(),
                            input,
                            "newslens>".green().bold(),
                            input
                        );
                        io::stdout().flush()?;
                    }
                }
                KeyCode::Up => {
                    if !history.is_empty() {
                        let new_index = match history_index {
                            None => history.len() - 1,
                            Some(idx) if idx > 0 => idx - 1,
                            Some(idx) => idx,
                        };
                        history_index = Some(new_index);
                        input = history[new_index].clone();
                        cursor_pos = input.len();
                        print!(
                            "\r{} {}  \r{} {}",
                            "newslens>".green().bold(),
                            " ".repeat(50),
                            "newslens>".green().bold(),
                            input
                        );
                        io::stdout().flush()?;
                    }
                }
                KeyCode::Down => {
                    if let Some(idx) = history_index {
                        if idx < history.len() - 1 {
                            let new_index = idx + 1;
                            history_index = Some(new_index);
                            input = history[new_index].clone();
                        } else {
                            history_index = None;
                            input.clear();
                        }
                        cursor_pos = input.len();
                        print!(
                            "\r{} {}  \r{} {}",
                            "newslens>".green().bold(),
                            " ".repeat(50),
                            "newslens>".green().bold(),
                            input
                        );
                        io::stdout().flush()?;
                    }
                }
                KeyCode::Esc => {
                    disable_raw_mode()?;
                    println!();
                    return Ok(String::new());
                }
                _ => {}
            }
        }
    }
}

/// Display help message
pub fn print_help() {
    println!("{}", "Available commands:".bold());
    println!("  {} - Add an article URL (up to 3 slots)", "add <url>".green());
    println!("  {} - List the URLs collected so far", "urls".green());
    println!("  {} - Empty the URL slots", "clear".green());
    println!("  {} - Fetch, chunk, embed, and index the URLs", "process".green());
    println!("  {} - Anything else is asked as a question", "<question>".green());
    println!("  {} - Show this help message", "help".green());
    println!("  {} - Exit the application", "exit/quit".green());
    println!();
    println!("{}", "Examples:".bold());
    println!("  add https://example.com/markets-story");
    println!("  process");
    println!("  What is the main financial impact of the news?");
}

/// Render the collected URL slots
pub fn render_urls(urls: &[String]) {
    if urls.is_empty() {
        println!("{}", "No URLs collected yet; use `add <url>`.".dimmed());
        return;
    }
    for (i, url) in urls.iter().enumerate() {
        println!("  {}. {}", i + 1, url.blue());
    }
}

/// Render a successful process action
pub fn render_summary(summary: &ProcessSummary) {
    println!(
        "{} Indexed {} chunks from {} articles into {}",
        "✅".green(),
        summary.chunks,
        summary.documents,
        summary.index_path.display()
    );
    println!("{}", "You can now ask questions.".green());
}

/// Render an answer block with its cited sources
pub fn render_answer(answer: &Answer) {
    println!();
    println!("{}", "Answer".bold());
    println!("{}", answer.text);

    if !answer.sources.is_empty() {
        println!();
        println!("{}", "Sources:".bold());
        for source in &answer.sources {
            println!("  {} {}", "•".cyan(), source.blue().underline());
        }
    }
    println!();
}

/// Render the explicit not-ready outcome
pub fn render_not_ready() {
    println!(
        "{} No article index yet - add up to 3 URLs and run `process` first.",
        "⚠️".yellow()
    );
}
