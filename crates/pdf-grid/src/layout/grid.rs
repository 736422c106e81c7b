//! Grid layout calculation
//!
//! This module derives the row/column partition of a page and the cell
//! geometry the composer places images into.

use crate::types::PageSize;

use super::{GridDimensions, GridLayout, GridPosition, Rect};

// =============================================================================
// Grid Calculator
// =============================================================================

/// Derive a visually balanced row/column partition for `images_per_page`.
///
/// Common counts use hand-tuned pairs. Any other count gets
/// `cols = ceil(sqrt(n))` and `rows = ceil(n / cols)`, so
/// `rows * cols >= n` always holds. Zero yields an empty `(0, 0)` grid.
pub fn calculate_grid(images_per_page: usize) -> GridDimensions {
    match images_per_page {
        1 => GridDimensions::new(1, 1),
        2 => GridDimensions::new(1, 2),
        4 => GridDimensions::new(2, 2),
        6 => GridDimensions::new(2, 3),
        9 => GridDimensions::new(3, 3),
        0 => GridDimensions::new(0, 0),
        n => {
            let cols = (n as f64).sqrt().ceil() as usize;
            let rows = n.div_ceil(cols);
            GridDimensions::new(rows, cols)
        }
    }
}

// =============================================================================
// Grid Creation
// =============================================================================

/// Create the cell grid for a page.
///
/// The column count is taken as given; the row count is just enough rows to
/// hold `images_per_page` cells at that width.
///
/// # Arguments
/// * `page_size` - Output page size
/// * `images_per_page` - Page capacity, must be at least 1
/// * `columns` - Column count, must be at least 1
pub fn create_grid_layout(page_size: PageSize, images_per_page: usize, columns: usize) -> GridLayout {
    let (page_width_pt, page_height_pt) = page_size.dimensions_pt();

    let cols = columns;
    let rows = images_per_page.div_ceil(cols);

    GridLayout {
        cols,
        rows,
        page_width_pt,
        page_height_pt,
        cell_width_pt: page_width_pt / cols as f32,
        cell_height_pt: page_height_pt / rows as f32,
    }
}

// =============================================================================
// Cell Calculations
// =============================================================================

/// Calculate the bounds of a cell at the given grid position.
///
/// Row 0 is the top of the page while PDF space has its origin at the
/// bottom-left, so the y coordinate is measured down from the page top.
pub fn cell_bounds(grid: &GridLayout, pos: GridPosition) -> Rect {
    let x = pos.col as f32 * grid.cell_width_pt;
    let y = grid.page_height_pt - (pos.row + 1) as f32 * grid.cell_height_pt;

    Rect::new(x, y, grid.cell_width_pt, grid.cell_height_pt)
}

// =============================================================================
// Tests
// =============================================================================
