//! A single puzzle round

use crate::options::OptionSet;
use crate::pattern::evaluate;
use crate::projection::project;
use crate::{Difficulty, Error, Layout, Pattern, Result, View};
use rand::Rng;
use serde::Serialize;

/// Everything that makes up one round
///
/// The layout, view, correct pattern and options are generated together and
/// replaced together; nothing carries over between rounds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundState {
    id: u64,
    layout: Layout,
    view: View,
    correct: Pattern,
    options: OptionSet,
}

impl RoundState {
    /// Generate a fresh random round
    pub fn generate<R: Rng + ?Sized>(id: u64, difficulty: Difficulty, rng: &mut R) -> Result<Self> {
        let count = difficulty.cube_count(rng);
        let layout = Layout::generate(count, rng);
        let view = View::random(rng);
        Self::from_layout(id, layout, view, rng)
    }

    /// Build a round around a given layout and view
    pub fn from_layout<R: Rng + ?Sized>(
        id: u64,
        layout: Layout,
        view: View,
        rng: &mut R,
    ) -> Result<Self> {
        let correct = project(&layout, view);
        let options = OptionSet::generate(&correct, rng)?;

        tracing::debug!(
            round = id,
            cubes = layout.len(),
            view = %view,
            cells = correct.len(),
            correct_index = options.correct_index(),
            "round ready"
        );

        Ok(RoundState {
            id,
            layout,
            view,
            correct,
            options,
        })
    }

    /// Sequential round identifier
    pub fn id(&self) -> u64 {
        self.id
    }

    /// The cube layout
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// The view the player must match
    pub fn view(&self) -> View {
        self.view
    }

    /// The correct silhouette
    pub fn correct(&self) -> &Pattern {
        &self.correct
    }

    /// The four options
    pub fn options(&self) -> &OptionSet {
        &self.options
    }

    /// Option at `index`
    pub fn option(&self, index: usize) -> Result<&Pattern> {
        self.options.get(index).ok_or(Error::OptionOutOfRange {
            index,
            len: self.options.len(),
        })
    }

    /// Check whether option `index` is the correct silhouette
    pub fn evaluate(&self, index: usize) -> Result<bool> {
        Ok(evaluate(self.option(index)?, &self.correct))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::IVec3;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generate_is_consistent() {
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let round = RoundState::generate(seed, Difficulty::Hard, &mut rng).unwrap();

            assert!(Difficulty::Hard.cube_range().contains(&round.layout().len()));
            assert_eq!(round.correct(), &project(round.layout(), round.view()));
            assert_eq!(round.options().correct(), round.correct());
        }
    }

    #[test]
    fn test_evaluate_each_option() {
        let mut rng = StdRng::seed_from_u64(21);
        let layout = Layout::from_positions([IVec3::ZERO, IVec3::X]).unwrap();
        let round = RoundState::from_layout(0, layout, View::Top, &mut rng).unwrap();

        let correct_index = round.options().correct_index();
        for index in 0..round.options().len() {
            assert_eq!(round.evaluate(index), Ok(index == correct_index));
        }
        assert_eq!(
            round.evaluate(4),
            Err(Error::OptionOutOfRange { index: 4, len: 4 })
        );
    }

    #[test]
    fn test_same_seed_same_round() {
        let a = RoundState::generate(0, Difficulty::Easy, &mut StdRng::seed_from_u64(77)).unwrap();
        let b = RoundState::generate(0, Difficulty::Easy, &mut StdRng::seed_from_u64(77)).unwrap();
        assert_eq!(a, b);
    }
}
