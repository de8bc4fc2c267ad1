//! Feedback symbols, patterns and the feedback evaluator
//!
//! A pattern encodes the feedback from a guess using base-3 encoding:
//! - 0 = Absent (gray)
//! - 1 = Present (yellow)
//! - 2 = Correct (green)
//!
//! The pattern is stored as a single u8 value (0-242), where each position
//! contributes digit × 3^position to the total.

use super::letters::ALPHABET_SIZE;
use super::word::{WORD_LENGTH, Word};
use std::fmt;
use thiserror::Error;

/// Per-position feedback for one letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeedbackSymbol {
    /// Letter sits at this position in the answer
    Correct,
    /// Letter occurs in the answer, but not here
    Present,
    /// Letter is not in the answer (or every copy is already accounted for)
    Absent,
}

impl FeedbackSymbol {
    const fn digit(self) -> u8 {
        match self {
            Self::Absent => 0,
            Self::Present => 1,
            Self::Correct => 2,
        }
    }

    const fn from_digit(digit: u8) -> Self {
        match digit {
            2 => Self::Correct,
            1 => Self::Present,
            _ => Self::Absent,
        }
    }

    /// True for `Correct` and `Present`
    #[inline]
    #[must_use]
    pub const fn is_hit(self) -> bool {
        matches!(self, Self::Correct | Self::Present)
    }

    /// Emoji tile for this symbol
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }

    /// Single-letter code (`G`, `Y`, `-`)
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'Y',
            Self::Absent => '-',
        }
    }

    fn parse_char(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            '-' | '_' | '.' | 'B' | 'b' | '⬜' | '⬛' => Some(Self::Absent),
            _ => None,
        }
    }

    fn parse_number(token: &str) -> Option<Self> {
        match token {
            "1" => Some(Self::Correct),
            "0" => Some(Self::Present),
            "-1" => Some(Self::Absent),
            _ => None,
        }
    }
}

/// Error type for malformed feedback text
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("feedback must have exactly 5 symbols, got {0}")]
    InvalidLength(usize),
    #[error("unknown feedback symbol '{0}'")]
    InvalidSymbol(String),
}

/// Feedback pattern for a whole guess
///
/// Represents the five symbols as a single byte value.
/// Value range: 0-242 (3^5 - 1 = 243 possible patterns)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FeedbackPattern(u8);

impl FeedbackPattern {
    /// All correct (perfect match)
    pub const PERFECT: Self = Self(242); // 2 + 2×3 + 2×9 + 2×27 + 2×81

    /// All absent
    pub const NONE: Self = Self(0);

    /// Number of distinct patterns (3^5)
    pub const COUNT: usize = 243;

    /// Create a new pattern from a raw value
    ///
    /// # Panics
    /// Panics in debug mode if value >= 243
    #[inline]
    #[must_use]
    pub const fn new(value: u8) -> Self {
        debug_assert!(value < 243, "Pattern value must be < 243");
        Self(value)
    }

    /// Build a pattern from its five symbols
    #[must_use]
    pub const fn from_symbols(symbols: [FeedbackSymbol; WORD_LENGTH]) -> Self {
        let mut value = 0u8;
        let mut multiplier = 1u8;
        let mut i = 0;
        while i < WORD_LENGTH {
            value += symbols[i].digit() * multiplier;
            multiplier *= 3;
            i += 1;
        }
        Self(value)
    }

    /// Get the raw pattern value (0-242)
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Check if this is a perfect match (all correct)
    #[inline]
    #[must_use]
    pub const fn is_perfect(self) -> bool {
        self.0 == Self::PERFECT.0
    }

    /// Decode the five symbols, position 0 first
    #[must_use]
    pub const fn symbols(self) -> [FeedbackSymbol; WORD_LENGTH] {
        let mut out = [FeedbackSymbol::Absent; WORD_LENGTH];
        let mut val = self.0;
        let mut i = 0;
        while i < WORD_LENGTH {
            out[i] = FeedbackSymbol::from_digit(val % 3);
            val /= 3;
            i += 1;
        }
        out
    }

    /// Symbol at a single position
    ///
    /// # Panics
    /// Panics if position >= 5
    #[must_use]
    pub const fn symbol_at(self, position: usize) -> FeedbackSymbol {
        self.symbols()[position]
    }

    /// Convert pattern to emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.symbols().iter().map(|s| s.emoji()).collect()
    }

    /// Convert pattern to a code string like "GY-GY"
    #[must_use]
    pub fn to_code(self) -> String {
        self.symbols().iter().map(|s| s.code()).collect()
    }

    /// Parse feedback text
    ///
    /// Accepts five tiles written as:
    /// - 'G'/'g'/🟩 for correct
    /// - 'Y'/'y'/🟨 for present
    /// - '-'/'_'/'.'/'b'/⬜/⬛ for absent
    ///
    /// Tiles may be separated by whitespace. Alternatively five
    /// whitespace-separated numbers `1` (correct), `0` (present), `-1` (absent).
    ///
    /// # Errors
    /// Returns `PatternError` when the text does not describe five symbols.
    ///
    /// # Examples
    /// ```
    /// use wordle_sim::core::FeedbackPattern;
    ///
    /// let p1 = FeedbackPattern::parse("GY-GY").unwrap();
    /// let p2 = FeedbackPattern::parse("🟩🟨⬜🟩🟨").unwrap();
    /// let p3 = FeedbackPattern::parse("1 0 -1 1 0").unwrap();
    /// assert_eq!(p1, p2);
    /// assert_eq!(p1, p3);
    /// ```
    pub fn parse(s: &str) -> Result<Self, PatternError> {
        let s = s.trim();
        let tokens: Vec<&str> = s.split_whitespace().collect();

        // A leading number selects the numeric form; anything else is
        // read as tiles, whitespace between them ignored
        let numeric = tokens.len() > 1
            && tokens
                .first()
                .is_some_and(|t| FeedbackSymbol::parse_number(t).is_some());
        let symbols = if numeric {
            parse_numbers(&tokens)?
        } else {
            parse_tiles(s.chars().filter(|ch| !ch.is_whitespace()))?
        };

        let symbols: [FeedbackSymbol; WORD_LENGTH] = symbols
            .try_into()
            .map_err(|v: Vec<FeedbackSymbol>| PatternError::InvalidLength(v.len()))?;

        Ok(Self::from_symbols(symbols))
    }
}

fn parse_numbers(tokens: &[&str]) -> Result<Vec<FeedbackSymbol>, PatternError> {
    tokens
        .iter()
        .map(|t| {
            FeedbackSymbol::parse_number(t)
                .ok_or_else(|| PatternError::InvalidSymbol((*t).to_string()))
        })
        .collect()
}

fn parse_tiles(chars: impl Iterator<Item = char>) -> Result<Vec<FeedbackSymbol>, PatternError> {
    chars
        .map(|ch| {
            FeedbackSymbol::parse_char(ch)
                .ok_or_else(|| PatternError::InvalidSymbol(ch.to_string()))
        })
        .collect()
}

impl fmt::Display for FeedbackPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_emoji())
    }
}

impl std::str::FromStr for FeedbackPattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Compute the feedback for `guess` played against `answer`
///
/// Positions are scanned left to right with a running per-letter "seen"
/// counter. A copy of a letter only scores while the number of copies seen
/// so far stays within the answer's count of that letter; every later copy
/// is `Absent`, even when it would otherwise sit on a matching position.
///
/// # Examples
/// ```
/// use wordle_sim::core::{FeedbackPattern, Word, evaluate};
///
/// let guess = Word::new("crane").unwrap();
/// let answer = Word::new("trace").unwrap();
/// assert_eq!(evaluate(&guess, &answer).to_code(), "YGG-G");
/// ```
#[must_use]
pub fn evaluate(guess: &Word, answer: &Word) -> FeedbackPattern {
    let answer_counts = answer.letters();
    let mut seen = [0u8; ALPHABET_SIZE];
    let mut symbols = [FeedbackSymbol::Absent; WORD_LENGTH];

    for (i, &letter) in guess.chars().iter().enumerate() {
        let slot = usize::from(letter - b'a');
        seen[slot] += 1;
        let within = seen[slot] <= answer_counts.count(letter);

        symbols[i] = if within && letter == answer.char_at(i) {
            FeedbackSymbol::Correct
        } else if within && answer.has_letter(letter) {
            FeedbackSymbol::Present
        } else {
            FeedbackSymbol::Absent
        };
    }

    FeedbackPattern::from_symbols(symbols)
}
