//! Word list loading utilities
//!
//! Reads word lists and frequency tables from disk. Malformed lines are
//! skipped with a warning rather than failing the whole load.

use crate::core::Word;
use anyhow::{Context, Result};
use log::{info, warn};
use rustc_hash::FxHashMap;
use std::fs;
use std::path::Path;

/// Per-word corpus frequencies, keyed by lowercase text
pub type Frequencies = FxHashMap<String, f64>;

/// Default cut-off below which a word counts as too obscure to play
pub const DEFAULT_MIN_FREQUENCY: f64 = 5e-7;

/// Parse newline-separated words, skipping blanks and invalid entries
#[must_use]
pub fn parse_words(content: &str) -> Vec<Word> {
    content
        .lines()
        .enumerate()
        .filter_map(|(i, line)| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                return None;
            }
            match Word::new(trimmed) {
                Ok(word) => Some(word),
                Err(e) => {
                    warn!("skipping line {}: {trimmed:?}: {e}", i + 1);
                    None
                }
            }
        })
        .collect()
}

/// Load words from a file
///
/// # Errors
///
/// Returns an error if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use wordle_sim::wordlists::loader::load_from_file;
///
/// let words = load_from_file("words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read word list {}", path.display()))?;
    let words = parse_words(&content);
    info!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordle_sim::wordlists::loader::words_from_slice;
/// use wordle_sim::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

/// Parse `word frequency` lines
///
/// Lines that do not hold a word followed by a number are skipped.
#[must_use]
pub fn parse_frequencies(content: &str) -> Frequencies {
    let mut table = Frequencies::default();
    for (i, line) in content.lines().enumerate() {
        let mut fields = line.split_whitespace();
        let (Some(word), Some(freq)) = (fields.next(), fields.next()) else {
            if !line.trim().is_empty() {
                warn!("skipping frequency line {}: {line:?}", i + 1);
            }
            continue;
        };
        match freq.parse::<f64>() {
            Ok(freq) => {
                table.insert(word.to_ascii_lowercase(), freq);
            }
            Err(e) => warn!("skipping frequency line {}: {e}", i + 1),
        }
    }
    table
}

/// Load a frequency table from a file
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub fn load_frequencies<P: AsRef<Path>>(path: P) -> Result<Frequencies> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read frequencies {}", path.display()))?;
    let table = parse_frequencies(&content);
    info!("loaded {} frequencies from {}", table.len(), path.display());
    Ok(table)
}

/// Keep only words whose frequency is above `min_frequency`
///
/// Words missing from the table count as frequency zero.
#[must_use]
pub fn apply_frequency_threshold(
    words: Vec<Word>,
    frequencies: &Frequencies,
    min_frequency: f64,
) -> Vec<Word> {
    let before = words.len();
    let kept: Vec<Word> = words
        .into_iter()
        .filter(|w| frequencies.get(w.text()).copied().unwrap_or(0.0) > min_frequency)
        .collect();
    info!(
        "frequency threshold {min_frequency:e} kept {} of {before} words",
        kept.len()
    );
    kept
}
