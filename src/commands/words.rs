//! Word list summary

use crate::core::WORD_LENGTHS;
use crate::wordlists::WordBank;

/// Word counts of a loaded word bank
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordSummary {
    pub total: usize,
    /// `(length, count)` for every playable length, including empty ones
    pub by_length: Vec<(usize, usize)>,
}

impl WordSummary {
    /// Playable lengths that have no word
    #[must_use]
    pub fn missing_lengths(&self) -> Vec<usize> {
        self.by_length
            .iter()
            .filter(|&&(_, count)| count == 0)
            .map(|&(length, _)| length)
            .collect()
    }
}

/// Count the words of a bank per playable length
#[must_use]
pub fn summarize_words(bank: &WordBank) -> WordSummary {
    let counts = bank.length_counts();
    let count_of = |length: usize| {
        counts
            .iter()
            .find(|&&(l, _)| l == length)
            .map_or(0, |&(_, count)| count)
    };

    let by_length: Vec<(usize, usize)> = WORD_LENGTHS
        .map(|length| (length, count_of(length)))
        .collect();
    WordSummary {
        total: bank.len(),
        by_length,
    }
}
