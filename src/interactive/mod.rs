//! Interactive TUI
//!
//! Terminal interface built with ratatui and crossterm.

mod app;
mod rendering;

pub use app::{App, Message, MessageStyle, run_tui};
