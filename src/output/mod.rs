//! Terminal output
//!
//! Pure layout in `render`, string styling in `formatters`, printing in
//! `display`.

pub mod display;
pub mod formatters;
pub mod render;

pub use display::{print_board, print_keyboard, print_round_outcome, print_statistics};
