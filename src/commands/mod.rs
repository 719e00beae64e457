//! Command implementations

pub mod play;
pub mod simulate;
pub mod words;

pub use play::{PlayerInput, run_play};
pub use simulate::{SimulationConfig, SimulationResult, run_simulation};
pub use words::{WordSummary, summarize_words};
