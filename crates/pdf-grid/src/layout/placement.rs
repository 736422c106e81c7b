//! Image placement within cells
//!
//! Each image is shrunk (or grown) uniformly to the tightest fit inside its
//! padded cell and then centered in the full cell.

use crate::constants::CELL_PADDING_PT;

use super::{GridLayout, GridPosition, ImagePlacement, Rect, cell_bounds};

/// Scale factor that fits `src` inside `target` while preserving aspect ratio.
pub fn fit_scale(src_width: f32, src_height: f32, target_width: f32, target_height: f32) -> f32 {
    let scale_w = target_width / src_width;
    let scale_h = target_height / src_height;
    scale_w.min(scale_h)
}

/// Fit an image of the given size into a cell.
///
/// Returns the drawn rectangle and the scale factor used.
pub fn fit_in_cell(cell: &Rect, image_width: f32, image_height: f32) -> (Rect, f32) {
    let max_width = cell.width - CELL_PADDING_PT;
    let max_height = cell.height - CELL_PADDING_PT;

    let scale = fit_scale(image_width, image_height, max_width, max_height);

    let draw_width = image_width * scale;
    let draw_height = image_height * scale;

    let x = cell.x + (cell.width - draw_width) / 2.0;
    let y = cell.y + (cell.height - draw_height) / 2.0;

    (Rect::new(x, y, draw_width, draw_height), scale)
}

/// Calculate the placement of the `slot`-th image of a page.
///
/// # Arguments
/// * `grid` - The page grid
/// * `slot` - Index of the image on its page (0-based, row-major)
/// * `image_index` - Index of the image in the composer's input list
/// * `image_dimensions` - Image (width, height), pixels taken 1:1 as points
pub fn place_image(
    grid: &GridLayout,
    slot: usize,
    image_index: usize,
    image_dimensions: (f32, f32),
) -> ImagePlacement {
    let position = GridPosition::from_index(slot, grid.cols);
    let cell = cell_bounds(grid, position);
    let (content_rect, scale) = fit_in_cell(&cell, image_dimensions.0, image_dimensions.1);

    ImagePlacement {
        image_index,
        position,
        cell,
        content_rect,
        scale,
    }
}
