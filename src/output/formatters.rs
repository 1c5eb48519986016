//! Formatting utilities for terminal output

use super::render::{Key, Row, Tile, TileStyle};
use colored::{ColoredString, Colorize};

/// Format a tile as a three-column colored cell
#[must_use]
pub fn tile_cell(tile: &Tile) -> ColoredString {
    let text = tile.letter.map_or_else(
        || " · ".to_string(),
        |l| format!(" {} ", l.as_char().to_ascii_uppercase()),
    );
    paint(text, tile.style)
}

/// Format a keyboard key as a colored cell
#[must_use]
pub fn key_cell(key: &Key) -> ColoredString {
    paint(
        format!(" {} ", key.letter.as_char().to_ascii_uppercase()),
        key.style,
    )
}

fn paint(text: String, style: TileStyle) -> ColoredString {
    match style {
        TileStyle::Empty => text.bright_black(),
        TileStyle::Pending => text.bright_white().bold(),
        TileStyle::Correct => text.black().on_green().bold(),
        TileStyle::Present => text.black().on_yellow().bold(),
        TileStyle::Absent => text.white().on_bright_black(),
    }
}

/// Format a row of tiles as plain emoji squares
///
/// Unscored tiles render as blanks, so a shareable summary never leaks the
/// letters typed.
#[must_use]
pub fn row_to_emoji(row: &Row) -> String {
    row.iter()
        .map(|tile| match tile.style {
            TileStyle::Correct => '🟩',
            TileStyle::Present => '🟨',
            TileStyle::Absent => '⬛',
            TileStyle::Empty | TileStyle::Pending => '⬜',
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
