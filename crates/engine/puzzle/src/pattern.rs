//! 2D occupancy patterns (silhouettes)

use glam::IVec2;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A set of occupied cells on a 2D grid
///
/// Equality is set equality: cell order and duplicates on insertion do not
/// matter. Output Y grows downwards (screen convention).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<IVec2>", into = "Vec<IVec2>")]
pub struct Pattern {
    cells: HashSet<IVec2>,
}

impl Pattern {
    /// Create an empty pattern
    pub fn new() -> Self {
        Pattern::default()
    }

    /// Create a pattern from cells, dropping duplicates
    pub fn from_cells(cells: impl IntoIterator<Item = IVec2>) -> Self {
        Pattern {
            cells: cells.into_iter().collect(),
        }
    }

    /// Add a cell, returning false if it was already occupied
    pub fn insert(&mut self, cell: IVec2) -> bool {
        self.cells.insert(cell)
    }

    /// Remove a cell, returning false if it was not occupied
    pub fn remove(&mut self, cell: IVec2) -> bool {
        self.cells.remove(&cell)
    }

    /// Check whether a cell is occupied
    pub fn contains(&self, cell: IVec2) -> bool {
        self.cells.contains(&cell)
    }

    /// Number of occupied cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if no cell is occupied
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterate cells in unspecified order
    pub fn cells(&self) -> impl Iterator<Item = IVec2> + '_ {
        self.cells.iter().copied()
    }

    /// Cells in row-major order (by `y`, then `x`)
    pub fn sorted_cells(&self) -> Vec<IVec2> {
        let mut cells: Vec<IVec2> = self.cells.iter().copied().collect();
        cells.sort_by_key(|c| (c.y, c.x));
        cells
    }

    /// Inclusive bounding box, `None` for an empty pattern
    pub fn bounds(&self) -> Option<(IVec2, IVec2)> {
        let mut cells = self.cells.iter().copied();
        let first = cells.next()?;
        Some(cells.fold((first, first), |(min, max), c| (min.min(c), max.max(c))))
    }

    /// Copy of this pattern with one cell removed
    pub fn without(&self, cell: IVec2) -> Pattern {
        let mut next = self.clone();
        next.remove(cell);
        next
    }

    /// Copy of this pattern with one cell added
    pub fn with(&self, cell: IVec2) -> Pattern {
        let mut next = self.clone();
        next.insert(cell);
        next
    }
}

impl FromIterator<IVec2> for Pattern {
    fn from_iter<I: IntoIterator<Item = IVec2>>(iter: I) -> Self {
        Pattern::from_cells(iter)
    }
}

impl From<Vec<IVec2>> for Pattern {
    fn from(cells: Vec<IVec2>) -> Self {
        Pattern::from_cells(cells)
    }
}

impl From<Pattern> for Vec<IVec2> {
    fn from(pattern: Pattern) -> Self {
        pattern.sorted_cells()
    }
}

/// Decide whether the selected pattern is the correct one
///
/// Exact set equality, no partial credit.
pub fn evaluate(selected: &Pattern, correct: &Pattern) -> bool {
    selected == correct
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern(cells: &[(i32, i32)]) -> Pattern {
        cells.iter().map(|&(x, y)| IVec2::new(x, y)).collect()
    }

    #[test]
    fn test_evaluate_uses_set_semantics() {
        let correct = pattern(&[(0, 0), (1, 0)]);
        assert!(evaluate(&pattern(&[(0, 0), (1, 0)]), &correct));
        assert!(evaluate(&pattern(&[(1, 0), (0, 0), (1, 0)]), &correct));
        assert!(!evaluate(&pattern(&[(0, 0)]), &correct));
        assert!(!evaluate(&pattern(&[(0, 0), (1, 0), (2, 0)]), &correct));
    }

    #[test]
    fn test_sorted_cells_are_row_major() {
        let p = pattern(&[(2, 1), (0, 1), (1, 0)]);
        assert_eq!(
            p.sorted_cells(),
            vec![IVec2::new(1, 0), IVec2::new(0, 1), IVec2::new(2, 1)]
        );
    }

    #[test]
    fn test_bounds() {
        assert_eq!(Pattern::new().bounds(), None);
        let p = pattern(&[(2, -1), (0, 3)]);
        assert_eq!(p.bounds(), Some((IVec2::new(0, -1), IVec2::new(2, 3))));
    }

    #[test]
    fn test_with_and_without_leave_original_untouched() {
        let p = pattern(&[(0, 0), (1, 0)]);
        assert_eq!(p.without(IVec2::ZERO), pattern(&[(1, 0)]));
        assert_eq!(p.with(IVec2::ONE).len(), 3);
        assert_eq!(p.len(), 2);
    }

    #[test]
    fn test_serializes_sorted() {
        let p = pattern(&[(1, 1), (0, 0)]);
        assert_eq!(serde_json::to_string(&p).unwrap(), "[[0,0],[1,1]]");
    }
}
