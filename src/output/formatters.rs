//! Formatting utilities for terminal output

use crate::core::Letter;

/// Gallows drawings, from empty to a complete figure
const GALLOWS: [&str; 7] = [
    "  +---+\n  |   |\n      |\n      |\n      |\n=======",
    "  +---+\n  |   |\n  O   |\n      |\n      |\n=======",
    "  +---+\n  |   |\n  O   |\n  |   |\n      |\n=======",
    "  +---+\n  |   |\n  O   |\n /|   |\n      |\n=======",
    "  +---+\n  |   |\n  O   |\n /|\\  |\n      |\n=======",
    "  +---+\n  |   |\n  O   |\n /|\\  |\n /    |\n=======",
    "  +---+\n  |   |\n  O   |\n /|\\  |\n / \\  |\n=======",
];

/// Gallows for `used` of `starting` attempts
///
/// Any starting count is scaled onto the same seven drawings; the full figure
/// appears only once every attempt is used.
#[must_use]
pub fn gallows(used: u32, starting: u32) -> &'static str {
    let last = GALLOWS.len() - 1;
    let stage = if starting == 0 || used >= starting {
        last
    } else {
        (used as usize * last / starting as usize).min(last - 1)
    };
    GALLOWS[stage]
}

/// Space out a masked word so each position stands alone
#[must_use]
pub fn spaced_word(obscured: &str) -> String {
    let mut result = String::with_capacity(obscured.len() * 2);
    for (i, c) in obscured.chars().enumerate() {
        if i > 0 {
            result.push(' ');
        }
        result.push(c);
    }
    result
}

/// Comma separated letters, or a dash when there are none
#[must_use]
pub fn letter_list(letters: &[Letter]) -> String {
    if letters.is_empty() {
        return "-".to_string();
    }
    letters
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Clamped to [0, width]
    let filled = ((value / max).max(0.0) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Remaining attempts as a bar
#[must_use]
pub fn attempts_bar(remaining: u32, starting: u32, width: usize) -> String {
    create_progress_bar(f64::from(remaining), f64::from(starting), width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gallows_starts_empty_and_ends_full() {
        assert_eq!(gallows(0, 6), GALLOWS[0]);
        assert_eq!(gallows(3, 6), GALLOWS[3]);
        assert_eq!(gallows(6, 6), GALLOWS[6]);
        assert_eq!(gallows(9, 6), GALLOWS[6]);
    }

    #[test]
    fn gallows_scales_other_attempt_counts() {
        // One of ten attempts left is not yet a full figure
        assert_eq!(gallows(9, 10), GALLOWS[5]);
        assert_eq!(gallows(10, 10), GALLOWS[6]);
        assert_eq!(gallows(1, 3), GALLOWS[2]);
        assert_eq!(gallows(0, 0), GALLOWS[6]);
    }

    #[test]
    fn spaced_word_separates_positions() {
        assert_eq!(spaced_word("H__LO"), "H _ _ L O");
        assert_eq!(spaced_word(""), "");
    }

    #[test]
    fn letter_list_formats() {
        let letters: Vec<Letter> = "AZ".bytes().filter_map(Letter::from_byte).collect();
        assert_eq!(letter_list(&letters), "A, Z");
        assert_eq!(letter_list(&[]), "-");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn attempts_bar_half() {
        assert_eq!(attempts_bar(3, 6, 10), "█████░░░░░");
        assert_eq!(attempts_bar(0, 0, 4), "░░░░");
    }
}
