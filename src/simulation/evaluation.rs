//! Evaluation providers
//!
//! An evaluation provider picks the word to play from a ranked list and
//! supplies the feedback for it. The automatic provider knows the answer;
//! the interactive one (see `commands::play`) asks a human.

use crate::core::{FeedbackPattern, Word, evaluate};
use crate::solver::ScoredGuess;
use anyhow::Result;
use rand::Rng;
use rand::seq::IndexedRandom;

/// How an automatic player picks from the ranked list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum GuessPolicy {
    /// Always play the top-ranked guess
    #[default]
    Best,
    /// Play a uniformly random entry of the ranked list
    Random,
}

/// Supplies the chosen guess and its feedback for each turn
pub trait Evaluation {
    /// Pick the word to play, or `None` to abandon the game
    ///
    /// # Errors
    /// Implementations reading from a user return I/O errors.
    fn choose_guess<R: Rng + ?Sized>(
        &mut self,
        ranked: &[ScoredGuess],
        rng: &mut R,
    ) -> Result<Option<Word>>;

    /// Feedback for `guess`
    ///
    /// # Errors
    /// Implementations reading from a user return I/O errors.
    fn feedback(&mut self, guess: &Word) -> Result<FeedbackPattern>;

    /// The hidden answer, when the provider knows it
    fn answer(&self) -> Option<&Word> {
        None
    }
}

/// Automatic provider playing against a known answer
#[derive(Debug, Clone)]
pub struct AutoEvaluation {
    answer: Word,
    policy: GuessPolicy,
}

impl AutoEvaluation {
    #[must_use]
    pub const fn new(answer: Word, policy: GuessPolicy) -> Self {
        Self { answer, policy }
    }
}

impl Evaluation for AutoEvaluation {
    fn choose_guess<R: Rng + ?Sized>(
        &mut self,
        ranked: &[ScoredGuess],
        rng: &mut R,
    ) -> Result<Option<Word>> {
        let pick = match self.policy {
            GuessPolicy::Best => ranked.first(),
            GuessPolicy::Random => ranked.choose(rng),
        };
        Ok(pick.map(|g| g.word.clone()))
    }

    fn feedback(&mut self, guess: &Word) -> Result<FeedbackPattern> {
        Ok(evaluate(guess, &self.answer))
    }

    fn answer(&self) -> Option<&Word> {
        Some(&self.answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn ranked(list: &[(&str, f64)]) -> Vec<ScoredGuess> {
        list.iter()
            .map(|&(w, s)| ScoredGuess::new(Word::new(w).unwrap(), s))
            .collect()
    }

    #[test]
    fn best_policy_takes_head() {
        let mut eval = AutoEvaluation::new(Word::new("trace").unwrap(), GuessPolicy::Best);
        let mut rng = StdRng::seed_from_u64(0);
        let pick = eval
            .choose_guess(&ranked(&[("slate", 2.0), ("crane", 1.0)]), &mut rng)
            .unwrap();
        assert_eq!(pick.unwrap().text(), "slate");
    }

    #[test]
    fn random_policy_stays_in_list() {
        let mut eval = AutoEvaluation::new(Word::new("trace").unwrap(), GuessPolicy::Random);
        let list = ranked(&[("slate", 2.0), ("crane", 1.0), ("plate", 0.5)]);
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            let pick = eval.choose_guess(&list, &mut rng).unwrap().unwrap();
            assert!(list.iter().any(|g| g.word == pick));
        }
    }

    #[test]
    fn empty_list_abandons() {
        let mut eval = AutoEvaluation::new(Word::new("trace").unwrap(), GuessPolicy::Best);
        let mut rng = StdRng::seed_from_u64(0);
        assert!(eval.choose_guess(&[], &mut rng).unwrap().is_none());
    }

    #[test]
    fn feedback_uses_answer() {
        let answer = Word::new("trace").unwrap();
        let mut eval = AutoEvaluation::new(answer.clone(), GuessPolicy::Best);
        let pattern = eval.feedback(&Word::new("crane").unwrap()).unwrap();
        assert_eq!(pattern.to_code(), "YGG-G");
        assert_eq!(eval.answer(), Some(&answer));
    }
}
