//! Text drawing of an occupancy grid.
//!
//! One line per elevation, highest first, one glyph per column.

use core::fmt::Write;

use crate::engine;
use crate::grid::OccupancyGrid;

/// Glyphs used by [`draw`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderStyle {
    pub solid: char,
    pub empty: char,
    /// Glyph for trapped water. `None` draws trapped cells as empty.
    pub water: Option<char>,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            solid: 'X',
            empty: '_',
            water: None,
        }
    }
}

impl RenderStyle {
    /// The default glyphs with trapped water drawn as `~`.
    pub fn with_water() -> Self {
        Self {
            water: Some('~'),
            ..Self::default()
        }
    }
}

/// Draws the grid. A grid with no rows draws as the empty string.
pub fn draw(grid: &OccupancyGrid, style: &RenderStyle) -> String {
    let mut out = String::with_capacity((grid.columns() + 1) * grid.rows());
    for elevation in (0..grid.rows()).rev() {
        for column in 0..grid.columns() {
            out.push(glyph(grid, style, column, elevation));
        }
        out.push('\n');
    }
    out
}

fn glyph(grid: &OccupancyGrid, style: &RenderStyle, column: usize, elevation: usize) -> char {
    if grid.is_solid(column, elevation) {
        return style.solid;
    }
    match style.water {
        Some(water) if engine::contains_water(grid, column, elevation) => water,
        _ => style.empty,
    }
}

/// Writes the grid with a left margin of elevation labels.
///
/// ```text
/// 3 X__
/// 2 X__
/// 1 X_X
/// 0 X_X
/// ```
pub fn draw_labeled(grid: &OccupancyGrid, style: &RenderStyle) -> String {
    let width = grid.rows().saturating_sub(1).to_string().len();
    let mut out = String::new();
    for (line, elevation) in draw(grid, style).lines().zip((0..grid.rows()).rev()) {
        // Writing to a String cannot fail.
        let _ = writeln!(out, "{elevation:>width$} {line}");
    }
    out
}
