//! Decoy generation: plausible but wrong silhouettes
//!
//! Candidates are enumerated up front in two tiers, so generation is a
//! bounded walk over a finite list rather than a retry loop:
//!
//! 1. First order: every single-cell removal, or every single-cell addition
//!    from the addition grid when the pattern has at most one cell.
//! 2. Second order, only when the first tier is short: single additions and
//!    remove-one-add-one swaps over the same grid.
//!
//! For any pattern the two tiers together hold at least three distinct,
//! non-empty decoys.

use crate::Pattern;
use glam::IVec2;
use rand::seq::SliceRandom;
use rand::Rng;

/// Number of decoys shown next to the correct pattern
pub const DECOY_COUNT: usize = 3;

/// Generate up to `count` decoys for `correct`
///
/// Every decoy is non-empty, differs from `correct`, and differs from every
/// other decoy. Returns fewer than `count` only if both tiers are exhausted.
pub fn generate_decoys<R: Rng + ?Sized>(
    correct: &Pattern,
    count: usize,
    rng: &mut R,
) -> Vec<Pattern> {
    let mut decoys = Vec::with_capacity(count);

    take_distinct(first_order(correct), correct, count, &mut decoys, rng);
    if decoys.len() < count {
        tracing::debug!(
            cells = correct.len(),
            found = decoys.len(),
            "first-order decoys exhausted, widening to swaps"
        );
        take_distinct(second_order(correct), correct, count, &mut decoys, rng);
    }

    if decoys.len() < count {
        tracing::warn!(found = decoys.len(), needed = count, "decoy candidates exhausted");
    }
    decoys
}

/// Single-cell perturbations of `correct`
pub fn first_order(correct: &Pattern) -> Vec<Pattern> {
    if correct.len() >= 2 {
        correct
            .sorted_cells()
            .into_iter()
            .map(|cell| correct.without(cell))
            .collect()
    } else {
        addition_grid(correct)
            .into_iter()
            .map(|cell| correct.with(cell))
            .collect()
    }
}

/// Two-step perturbations of `correct`: additions and swaps
pub fn second_order(correct: &Pattern) -> Vec<Pattern> {
    let grid = addition_grid(correct);
    let mut candidates: Vec<Pattern> = grid.iter().map(|&cell| correct.with(cell)).collect();

    for removed in correct.sorted_cells() {
        let base = correct.without(removed);
        candidates.extend(grid.iter().map(|&added| base.with(added)));
    }
    candidates
}

/// Free cells a decoy may gain
///
/// Spans the pattern's bounding box widened by one cell past the maximum
/// corner and always covering the 3x3 block at the origin. Row-major order.
pub fn addition_grid(pattern: &Pattern) -> Vec<IVec2> {
    let (lo, hi) = pattern.bounds().unwrap_or((IVec2::ZERO, IVec2::ZERO));
    let lo = lo.min(IVec2::ZERO);
    let hi = (hi + IVec2::ONE).max(IVec2::splat(2));

    (lo.y..=hi.y)
        .flat_map(|y| (lo.x..=hi.x).map(move |x| IVec2::new(x, y)))
        .filter(|&cell| !pattern.contains(cell))
        .collect()
}

/// Shuffle `candidates` and move acceptable ones into `decoys` until it
/// holds `count` patterns
fn take_distinct<R: Rng + ?Sized>(
    mut candidates: Vec<Pattern>,
    correct: &Pattern,
    count: usize,
    decoys: &mut Vec<Pattern>,
    rng: &mut R,
) {
    candidates.shuffle(rng);
    for candidate in candidates {
        if decoys.len() >= count {
            break;
        }
        if candidate.is_empty() || candidate == *correct || decoys.contains(&candidate) {
            continue;
        }
        decoys.push(candidate);
    }
}
