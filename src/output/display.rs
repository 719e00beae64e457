//! Display functions for command results

use super::formatters::{attempts_bar, gallows, letter_list, spaced_word};
use crate::commands::{SimulationResult, WordSummary};
use crate::core::{Outcome, Score, User, UserId};
use crate::engine::{GameView, Standing};
use colored::Colorize;
use rustc_hash::FxHashMap;

/// Print the board for one game
pub fn print_game_view(view: &GameView, starting_attempts: u32) {
    let used = starting_attempts.saturating_sub(view.attempts_remaining);

    println!("\n{}", "─".repeat(60).cyan());
    println!("{}", gallows(used, starting_attempts));
    println!(
        "\n  Word:     {}",
        spaced_word(&view.obscured_word).bright_white().bold()
    );
    println!(
        "  Attempts: [{}] {}",
        attempts_bar(view.attempts_remaining, starting_attempts, 12).green(),
        view.attempts_remaining
    );
    println!("  Wrong:    {}", letter_list(&view.wrong_letters).red());
    println!("{}", "─".repeat(60).cyan());

    let message = match view.outcome {
        Some(Outcome::Win) => view.message.bright_green().bold(),
        Some(Outcome::Loss) => view.message.red().bold(),
        None if view.cancelled => view.message.yellow(),
        None => view.message.bright_white(),
    };
    println!("{message}");

    if let Some(word) = &view.word {
        println!("The word was {}", word.bright_yellow().bold());
    }
}

/// Print ranked users with their averages
pub fn print_leaderboard(standings: &[Standing]) {
    println!("\n🏆 {}", "Leaderboard".bright_cyan().bold());
    if standings.is_empty() {
        println!("   No finished games yet");
        return;
    }
    for standing in standings {
        println!(
            "   {:>3}. {:<20} {} avg over {} game{}",
            standing.rank,
            standing.name,
            format!("{:6.2}", standing.average_guesses()).bright_yellow(),
            standing.games,
            if standing.games == 1 { "" } else { "s" }
        );
    }
}

/// Print the best winning scores with player names
pub fn print_high_scores(scores: &[Score], users: &[User]) {
    let names: FxHashMap<UserId, &str> = users.iter().map(|u| (u.id, u.name.as_str())).collect();

    println!("\n✨ {}", "High Scores".bright_cyan().bold());
    if scores.is_empty() {
        println!("   No wins yet");
        return;
    }
    for (i, score) in scores.iter().enumerate() {
        let name = names.get(&score.user).copied().unwrap_or("?");
        println!(
            "   {}. {:<20} {} guesses (game {})",
            i + 1,
            name,
            score.guesses.to_string().green(),
            score.game
        );
    }
}

/// Print the totals of a bot simulation
pub fn print_simulation_result(result: &SimulationResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Games:".bright_cyan().bold());
    println!("   Players:          {}", result.players);
    println!("   Games played:     {}", result.games);
    println!(
        "   Won:              {} {}",
        result.wins,
        format!("({:.1}%)", result.win_rate() * 100.0).green()
    );
    println!("   Lost:             {}", result.losses);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());

    print_leaderboard(&result.standings);
    print_high_scores(&result.high_scores, &result.users);
    println!("\n{}", result.active_games.bright_black());
}

/// Print the word count per playable length
pub fn print_word_summary(summary: &WordSummary) {
    println!("\n📚 {} words", summary.total.to_string().bright_yellow().bold());

    let max_count = summary
        .by_length
        .iter()
        .map(|&(_, count)| count)
        .max()
        .unwrap_or(0);
    for &(length, count) in &summary.by_length {
        let bar_len = if max_count > 0 { count * 40 / max_count } else { 0 };
        let bar = format!(
            "{}{}",
            "█".repeat(bar_len).green(),
            "░".repeat(40 - bar_len).bright_black()
        );
        println!("   {length:>2} letters: {bar} {count:4}");
    }

    let missing = summary.missing_lengths();
    if !missing.is_empty() {
        let lengths: Vec<String> = missing.iter().map(ToString::to_string).collect();
        println!(
            "\n{} {}",
            "No words of length:".yellow(),
            lengths.join(", ")
        );
    }
}
