//! Display functions for the line-based game

use super::formatters::{create_progress_bar, key_cell, row_to_emoji, tile_cell};
use super::render::{Row, board, keyboard, row};
use crate::core::MAX_GUESSES;
use crate::engine::{GuessEngine, InputBuffer, RoundState};
use crate::session::Statistics;
use colored::Colorize;

/// Print every row of the board
pub fn print_board(engine: &GuessEngine<'_>) {
    println!();
    for tiles in board(engine, &InputBuffer::new()) {
        println!("   {}", render_row(&tiles));
    }
    println!();
}

fn render_row(tiles: &Row) -> String {
    tiles.iter().map(|t| tile_cell(t).to_string()).collect()
}

/// Print the keyboard colored by hints
pub fn print_keyboard(engine: &GuessEngine<'_>) {
    for (indent, keys) in keyboard(&engine.letter_hints()).iter().enumerate() {
        let line: String = keys.iter().map(|k| key_cell(k).to_string()).collect();
        println!("{}{line}", " ".repeat(indent * 2));
    }
    println!();
}

/// Print the end-of-round banner with the solution
pub fn print_round_outcome(engine: &GuessEngine<'_>) {
    let Ok(solution) = engine.revealed_solution() else {
        return;
    };
    let attempts = engine.history().len();

    println!("{}", "═".repeat(50).bright_cyan());
    match engine.round_state() {
        RoundState::Won => {
            let praise = match attempts {
                1 => "🏆 Genius!",
                2 => "⭐ Magnificent!",
                3 => "💫 Impressive!",
                4 => "✨ Splendid!",
                5 => "👍 Great!",
                _ => "😅 Phew!",
            };
            println!("  {}", praise.bright_yellow().bold());
            println!(
                "  Solved {} in {}/{MAX_GUESSES}",
                solution.text().to_uppercase().bright_green().bold(),
                attempts
            );
        }
        RoundState::Lost => {
            println!("  {}", "Out of guesses!".red().bold());
            println!(
                "  The word was {}",
                solution.text().to_uppercase().bright_yellow().bold()
            );
        }
        RoundState::InProgress => {}
    }

    println!();
    for attempt in engine.history() {
        println!("  {}", row_to_emoji(&row(attempt)));
    }
    println!("{}", "═".repeat(50).bright_cyan());
}

/// Print session statistics with a guess distribution chart
pub fn print_statistics(stats: &Statistics) {
    println!("\n📊 {}", "Statistics:".bright_cyan().bold());
    println!("   Played:          {}", stats.games_played);
    println!("   Win rate:        {:.0}%", stats.win_rate());
    println!("   Current streak:  {}", stats.current_streak);
    println!("   Max streak:      {}", stats.max_streak);

    let most = stats.guess_distribution.iter().copied().max().unwrap_or(0);
    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for (guesses, &count) in stats.guess_distribution.iter().enumerate().skip(1) {
        let bar = create_progress_bar(count as f64, most as f64, 30);
        println!("   {guesses}: {} {count}", bar.green());
    }
    println!();
}
