//! Silhouette projection of a layout onto a view plane
//!
//! Projection is silhouette-only: every cube sharing the two axes that stay
//! fixed for a view collapses into one cell, whatever its depth.
//!
//! | View  | Fixed axes | Output X               | Output Y                   |
//! |-------|------------|------------------------|----------------------------|
//! | Top   | (x, z)     | x - minX               | z - minZ                   |
//! | Left  | (y, z)     | ANCHOR - (z - minZ)    | ANCHOR - (y - minY)        |
//! | Front | (x, y)     | x - minX               | maxHeight - (y - minY)     |
//!
//! Y is flipped for Left and Front so that up in the scene stays up on the
//! grid.

use crate::{Layout, Pattern, View};
use glam::{IVec2, IVec3};

/// Fixed anchor the Left view mirrors its coordinates around
///
/// Left-view cells are not shifted to start at zero: deep or tall layouts
/// produce negative coordinates. Renderers normalize by the pattern bounds.
pub const LEFT_VIEW_ANCHOR: i32 = 2;

/// Project a layout onto the given view
pub fn project(layout: &Layout, view: View) -> Pattern {
    let (min, max) = layout.bounds();
    let max_height = max.y - min.y;

    layout
        .cubes()
        .iter()
        .map(|&cube| {
            let rel = cube - min;
            project_cell(rel, max_height, view)
        })
        .collect()
}

/// Map a cube position (relative to the layout minimum) to its view cell
fn project_cell(rel: IVec3, max_height: i32, view: View) -> IVec2 {
    match view {
        View::Top => IVec2::new(rel.x, rel.z),
        View::Left => IVec2::new(LEFT_VIEW_ANCHOR - rel.z, LEFT_VIEW_ANCHOR - rel.y),
        View::Front => IVec2::new(rel.x, max_height - rel.y),
    }
}
