//! Word lists for simulation
//!
//! Provides the embedded default universe plus loaders for word and
//! frequency files.

mod embedded;
pub mod loader;

use crate::core::Word;
use anyhow::{Result, bail};
use std::path::Path;

pub use embedded::WORDS;
pub use loader::{DEFAULT_MIN_FREQUENCY, Frequencies};

/// Name selecting the embedded list on the command line
pub const EMBEDDED: &str = "embedded";

/// Build the word universe
///
/// `source` is [`EMBEDDED`] or a path to a word file. When a frequency
/// file is given, words at or below `min_frequency` are dropped.
///
/// # Errors
///
/// Returns an error if a file cannot be read or the universe ends up empty.
pub fn load_universe(
    source: &str,
    frequencies: Option<&Path>,
    min_frequency: f64,
) -> Result<Vec<Word>> {
    let mut words = if source == EMBEDDED {
        loader::words_from_slice(WORDS)
    } else {
        loader::load_from_file(source)?
    };

    if let Some(path) = frequencies {
        let table = loader::load_frequencies(path)?;
        words = loader::apply_frequency_threshold(words, &table, min_frequency);
    }

    if words.is_empty() {
        bail!("word universe from {source} is empty");
    }
    Ok(words)
}
