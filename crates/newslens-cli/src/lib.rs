//! Terminal interface for newslens
//!
//! This crate provides the interactive surface: the session object holding
//! the URL slots, command parsing, and the rendering helpers.

mod session;
mod ui;

pub use session::{Command, Session, SessionState, URL_SLOTS};
pub use ui::{
    display_banner, handle_input_with_history, print_help, render_answer, render_not_ready,
    render_summary, render_urls,
};
