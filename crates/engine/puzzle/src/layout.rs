//! Connected unit-cube layouts on the integer lattice

use crate::{Error, Result};
use glam::IVec3;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// The six face-adjacent offsets (6-connectivity)
pub const NEIGHBOR_OFFSETS: [IVec3; 6] = [
    IVec3::X,
    IVec3::NEG_X,
    IVec3::Y,
    IVec3::NEG_Y,
    IVec3::Z,
    IVec3::NEG_Z,
];

/// An ordered, connected cluster of unit cubes
///
/// Each position is the minimum corner of the lattice cell the cube occupies.
/// Positions are unique and every cube after the first is face-adjacent to
/// at least one cube placed before it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<IVec3>", into = "Vec<IVec3>")]
pub struct Layout {
    cubes: Vec<IVec3>,
}

impl Layout {
    /// A layout made of the single origin cube
    pub fn single() -> Self {
        Layout {
            cubes: vec![IVec3::ZERO],
        }
    }

    /// Grow a random layout of `count` cubes from the origin
    ///
    /// Each step places a cube on a uniformly chosen frontier cell (an empty
    /// cell adjacent to the cluster). Stops early if the frontier runs dry,
    /// which cannot happen on the unbounded lattice but keeps the loop
    /// bounded. A `count` of zero still yields the origin cube.
    pub fn generate<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Self {
        let mut cubes = vec![IVec3::ZERO];
        let mut occupied: HashSet<IVec3> = cubes.iter().copied().collect();
        let mut frontier = Vec::new();
        let mut in_frontier = HashSet::new();
        expand_frontier(IVec3::ZERO, &occupied, &mut frontier, &mut in_frontier);

        while cubes.len() < count {
            if frontier.is_empty() {
                break;
            }
            let index = rng.random_range(0..frontier.len());
            let position = frontier.swap_remove(index);
            in_frontier.remove(&position);

            occupied.insert(position);
            cubes.push(position);
            expand_frontier(position, &occupied, &mut frontier, &mut in_frontier);
        }

        tracing::debug!(requested = count, placed = cubes.len(), "generated layout");
        Layout { cubes }
    }

    /// Build a layout from explicit positions, validating its invariants
    pub fn from_positions(positions: impl IntoIterator<Item = IVec3>) -> Result<Self> {
        let cubes: Vec<IVec3> = positions.into_iter().collect();
        if cubes.is_empty() {
            return Err(Error::EmptyLayout);
        }

        let mut placed = HashSet::with_capacity(cubes.len());
        for (i, &cube) in cubes.iter().enumerate() {
            if !placed.insert(cube) {
                return Err(Error::DuplicateCube(cube));
            }
            let touches_earlier = NEIGHBOR_OFFSETS
                .iter()
                .any(|&offset| cubes[..i].contains(&(cube + offset)));
            if i > 0 && !touches_earlier {
                return Err(Error::DisconnectedCube(cube));
            }
        }

        Ok(Layout { cubes })
    }

    /// Cube positions in placement order
    pub fn cubes(&self) -> &[IVec3] {
        &self.cubes
    }

    /// Number of cubes
    pub fn len(&self) -> usize {
        self.cubes.len()
    }

    /// Always false for a constructed layout
    pub fn is_empty(&self) -> bool {
        self.cubes.is_empty()
    }

    /// Check whether a lattice cell is occupied
    pub fn contains(&self, position: IVec3) -> bool {
        self.cubes.contains(&position)
    }

    /// Minimum and maximum cube corner on each axis
    pub fn bounds(&self) -> (IVec3, IVec3) {
        self.cubes.iter().fold(
            (IVec3::splat(i32::MAX), IVec3::splat(i32::MIN)),
            |(min, max), &cube| (min.min(cube), max.max(cube)),
        )
    }

    /// Check that every cube is reachable from the first one through
    /// face-adjacent cubes
    pub fn is_connected(&self) -> bool {
        let Some(&start) = self.cubes.first() else {
            return true;
        };
        let occupied: HashSet<IVec3> = self.cubes.iter().copied().collect();
        let mut seen = HashSet::from([start]);
        let mut stack = vec![start];

        while let Some(cube) = stack.pop() {
            for offset in NEIGHBOR_OFFSETS {
                let next = cube + offset;
                if occupied.contains(&next) && seen.insert(next) {
                    stack.push(next);
                }
            }
        }

        seen.len() == occupied.len()
    }
}

impl TryFrom<Vec<IVec3>> for Layout {
    type Error = Error;

    fn try_from(cubes: Vec<IVec3>) -> Result<Self> {
        Layout::from_positions(cubes)
    }
}

impl From<Layout> for Vec<IVec3> {
    fn from(layout: Layout) -> Self {
        layout.cubes
    }
}

impl Default for Layout {
    fn default() -> Self {
        Layout::single()
    }
}

/// Push the empty neighbours of `position` that are not yet on the frontier
fn expand_frontier(
    position: IVec3,
    occupied: &HashSet<IVec3>,
    frontier: &mut Vec<IVec3>,
    in_frontier: &mut HashSet<IVec3>,
) {
    for offset in NEIGHBOR_OFFSETS {
        let candidate = position + offset;
        if !occupied.contains(&candidate) && in_frontier.insert(candidate) {
            frontier.push(candidate);
        }
    }
}
