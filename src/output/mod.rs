//! Terminal output formatting
//!
//! Game boards, leaderboards and command summaries.

pub mod display;
pub mod formatters;

pub use display::{
    print_game_view, print_high_scores, print_leaderboard, print_simulation_result,
    print_word_summary,
};
