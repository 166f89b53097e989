//! Text rendering of layouts, patterns and the round board

use crate::config::DisplayConfig;
use puzzle::glam::{IVec2, IVec3};
use puzzle::{Layout, OptionSet, Pattern, RoundState};

/// Gap between side-by-side blocks
const COLUMN_GAP: &str = "    ";

/// Draw a pattern normalized to its own bounding box
pub fn render_pattern(pattern: &Pattern, display: &DisplayConfig) -> Vec<String> {
    let Some((min, max)) = pattern.bounds() else {
        return Vec::new();
    };

    (min.y..=max.y)
        .map(|y| {
            (min.x..=max.x)
                .map(|x| glyph(pattern.contains(IVec2::new(x, y)), display))
                .collect()
        })
        .collect()
}

/// Draw every horizontal layer of the layout, highest first
///
/// Columns are X, rows are Z. Every layer spans the full layout bounds so
/// layers can be compared cell by cell.
pub fn render_layout(layout: &Layout, display: &DisplayConfig) -> String {
    let (min, max) = layout.bounds();
    let blocks = (min.y..=max.y)
        .rev()
        .map(|y| {
            let mut lines = vec![format!("y={}", y - min.y)];
            lines.extend((min.z..=max.z).map(|z| {
                (min.x..=max.x)
                    .map(|x| glyph(layout.contains(IVec3::new(x, y, z)), display))
                    .collect::<String>()
            }));
            lines
        })
        .collect::<Vec<_>>();

    side_by_side(&blocks).join("\n")
}

/// Draw the four options with their 1-based numbers
pub fn render_options(options: &OptionSet, display: &DisplayConfig) -> String {
    let blocks = options
        .iter()
        .enumerate()
        .map(|(i, option)| {
            let mut lines = vec![format!("({})", i + 1)];
            lines.extend(render_pattern(option, display));
            lines
        })
        .collect::<Vec<_>>();

    side_by_side(&blocks).join("\n")
}

/// Draw the whole board for a round
pub fn render_board(round: &RoundState, display: &DisplayConfig) -> String {
    format!(
        "Round {} - layers from the top:\n{}\n\nChoose the correct 2D view: {}\n{}\n",
        round.id() + 1,
        render_layout(round.layout(), display),
        round.view(),
        render_options(round.options(), display),
    )
}

/// Lay blocks of lines next to each other, padding each to its widest line
pub fn side_by_side(blocks: &[Vec<String>]) -> Vec<String> {
    let height = blocks.iter().map(Vec::len).max().unwrap_or(0);
    let widths: Vec<usize> = blocks
        .iter()
        .map(|block| block.iter().map(|l| l.chars().count()).max().unwrap_or(0))
        .collect();

    (0..height)
        .map(|row| {
            let line = blocks
                .iter()
                .zip(&widths)
                .map(|(block, &width)| {
                    let text = block.get(row).map(String::as_str).unwrap_or("");
                    let pad = width - text.chars().count();
                    format!("{text}{}", " ".repeat(pad))
                })
                .collect::<Vec<_>>()
                .join(COLUMN_GAP);
            line.trim_end().to_string()
        })
        .collect()
}

fn glyph(occupied: bool, display: &DisplayConfig) -> &str {
    if occupied {
        &display.cell
    } else {
        &display.empty
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn display() -> DisplayConfig {
        DisplayConfig {
            cell: "#".to_string(),
            empty: ".".to_string(),
        }
    }

    #[test]
    fn test_pattern_is_normalized() {
        let pattern: Pattern = [IVec2::new(-1, 2), IVec2::new(0, 3)].into_iter().collect();
        assert_eq!(render_pattern(&pattern, &display()), vec!["#.", ".#"]);
        assert!(render_pattern(&Pattern::new(), &display()).is_empty());
    }

    #[test]
    fn test_layout_layers_top_first() {
        let layout = Layout::from_positions([IVec3::ZERO, IVec3::X, IVec3::new(1, 1, 0)]).unwrap();
        assert_eq!(render_layout(&layout, &display()), "y=1    y=0\n.#     ##");
    }

    #[test]
    fn test_side_by_side_pads_short_blocks() {
        let blocks = vec![
            vec!["a".to_string(), "bb".to_string()],
            vec!["c".to_string()],
        ];
        assert_eq!(side_by_side(&blocks), vec!["a     c", "bb"]);
    }
}
