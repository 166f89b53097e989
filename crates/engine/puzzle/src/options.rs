//! The four candidate patterns shown for a round

use crate::decoy::{generate_decoys, DECOY_COUNT};
use crate::{Error, Pattern, Result};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

/// Number of options presented to the player
pub const OPTION_COUNT: usize = DECOY_COUNT + 1;

/// Four pairwise-distinct patterns, exactly one of which is correct
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionSet {
    options: Vec<Pattern>,
    correct_index: usize,
}

impl OptionSet {
    /// Generate decoys for `correct` and shuffle them in with it
    pub fn generate<R: Rng + ?Sized>(correct: &Pattern, rng: &mut R) -> Result<Self> {
        let decoys = generate_decoys(correct, DECOY_COUNT, rng);
        Self::assemble(correct.clone(), decoys, rng)
    }

    /// Shuffle the correct pattern together with the given decoys
    pub fn assemble<R: Rng + ?Sized>(
        correct: Pattern,
        decoys: Vec<Pattern>,
        rng: &mut R,
    ) -> Result<Self> {
        if decoys.len() < DECOY_COUNT {
            return Err(Error::InsufficientDecoys {
                found: decoys.len(),
                needed: DECOY_COUNT,
            });
        }

        let mut options = Vec::with_capacity(OPTION_COUNT);
        options.push(correct.clone());
        options.extend(decoys.into_iter().take(DECOY_COUNT));
        options.shuffle(rng);

        Self::from_options(options, &correct)
    }

    /// Build a set from options in their final order, validating it
    pub fn from_options(options: Vec<Pattern>, correct: &Pattern) -> Result<Self> {
        if options.len() != OPTION_COUNT {
            return Err(Error::OptionCount {
                found: options.len(),
                expected: OPTION_COUNT,
            });
        }

        for (i, option) in options.iter().enumerate() {
            if let Some(j) = options[i + 1..].iter().position(|other| other == option) {
                return Err(Error::DuplicateOption(i, i + 1 + j));
            }
        }

        let correct_index = options
            .iter()
            .position(|option| option == correct)
            .ok_or(Error::MissingCorrectOption)?;

        Ok(OptionSet {
            options,
            correct_index,
        })
    }

    /// All options in display order
    pub fn options(&self) -> &[Pattern] {
        &self.options
    }

    /// Option at `index`, if any
    pub fn get(&self, index: usize) -> Option<&Pattern> {
        self.options.get(index)
    }

    /// Index of the correct option
    pub fn correct_index(&self) -> usize {
        self.correct_index
    }

    /// The correct option
    pub fn correct(&self) -> &Pattern {
        &self.options[self.correct_index]
    }

    /// Number of options (always four)
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Always false for a constructed set
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Iterate options in display order
    pub fn iter(&self) -> std::slice::Iter<'_, Pattern> {
        self.options.iter()
    }
}

impl<'a> IntoIterator for &'a OptionSet {
    type Item = &'a Pattern;
    type IntoIter = std::slice::Iter<'a, Pattern>;

    fn into_iter(self) -> Self::IntoIter {
        self.options.iter()
    }
}
