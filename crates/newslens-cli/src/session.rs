//! Session state and command parsing for the interactive loop
//!
//! The session is the explicit context object for one user: the URL slots
//! being collected and where the session stands in the
//! `Idle -> Processing -> Ready` cycle. Errors never leave a terminal state;
//! the caller reports them and returns to the prompt.

use newslens_core::{Error, Result};

/// Number of article URL slots per session
pub const URL_SLOTS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No index built yet
    Idle,
    /// An index exists and can be queried
    Ready,
}

/// Explicit per-user session context
#[derive(Debug)]
pub struct Session {
    urls: Vec<String>,
    state: SessionState,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            urls: Vec::new(),
            state: SessionState::Idle,
        }
    }

    /// Add a URL to the next free slot
    pub fn add_url(&mut self, url: &str) -> Result<()> {
        let url = url.trim();
        if url.is_empty() {
            return Err(Error::InvalidInput("empty URL".to_string()));
        }
        if self.urls.len() >= URL_SLOTS {
            return Err(Error::InvalidInput(format!(
                "all {} URL slots are full; run `clear` to start over",
                URL_SLOTS
            )));
        }
        self.urls.push(url.to_string());
        Ok(())
    }

    pub fn urls(&self) -> &[String] {
        &self.urls
    }

    pub fn clear_urls(&mut self) {
        self.urls.clear();
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn mark_ready(&mut self) {
        self.state = SessionState::Ready;
    }
}

/// A parsed interactive command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    AddUrl(String),
    ListUrls,
    ClearUrls,
    Process,
    Ask(String),
    Help,
    Quit,
}

impl Command {
    /// Parse one line of user input; `None` for blank lines.
    ///
    /// Anything that is not a known command is treated as a question.
    pub fn parse(input: &str) -> Option<Command> {
        let input = input.trim();
        if input.is_empty() {
            return None;
        }

        match input.to_lowercase().as_str() {
            "exit" | "quit" => return Some(Command::Quit),
            "help" => return Some(Command::Help),
            "urls" => return Some(Command::ListUrls),
            "clear" => return Some(Command::ClearUrls),
            "process" => return Some(Command::Process),
            _ => {}
        }

        if let Some(rest) = input.strip_prefix("add ") {
            return Some(Command::AddUrl(rest.trim().to_string()));
        }

        Some(Command::Ask(input.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_commands() {
        assert_eq!(Command::parse("exit"), Some(Command::Quit));
        assert_eq!(Command::parse("QUIT"), Some(Command::Quit));
        assert_eq!(Command::parse("help"), Some(Command::Help));
        assert_eq!(Command::parse("urls"), Some(Command::ListUrls));
        assert_eq!(Command::parse("clear"), Some(Command::ClearUrls));
        assert_eq!(Command::parse("process"), Some(Command::Process));
    }

    #[test]
    fn parses_add_with_url() {
        assert_eq!(
            Command::parse("add https://example.com/story"),
            Some(Command::AddUrl("https://example.com/story".to_string()))
        );
    }

    #[test]
    fn free_text_becomes_a_question() {
        assert_eq!(
            Command::parse("What moved the markets today?"),
            Some(Command::Ask("What moved the markets today?".to_string()))
        );
    }

    #[test]
    fn blank_input_is_nothing() {
        assert_eq!(Command::parse("   "), None);
    }

    #[test]
    fn session_holds_at_most_three_urls() {
        let mut session = Session::new();
        for i in 0..URL_SLOTS {
            session.add_url(&format!("https://example.com/{}", i)).unwrap();
        }
        let overflow = session.add_url("https://example.com/extra");
        assert!(matches!(overflow, Err(Error::InvalidInput(_))));
        assert_eq!(session.urls().len(), URL_SLOTS);
    }

    #[test]
    fn empty_url_is_rejected() {
        let mut session = Session::new();
        assert!(matches!(
            session.add_url("  "),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn clear_resets_the_slots() {
        let mut session = Session::new();
        session.add_url("https://example.com/a").unwrap();
        session.clear_urls();
        assert!(session.urls().is_empty());
    }

    #[test]
    fn session_state_transitions_to_ready() {
        let mut session = Session::new();
        assert_eq!(session.state(), SessionState::Idle);
        session.mark_ready();
        assert_eq!(session.state(), SessionState::Ready);
    }
}
