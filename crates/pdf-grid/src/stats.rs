use crate::options::LayoutOptions;
use crate::record::ImageRecord;
use crate::types::*;

/// Calculate layout statistics without decoding or embedding any image.
///
/// The page count follows the same page-advance rule as `compose`.
pub fn calculate_statistics(
    images: &[ImageRecord],
    options: &LayoutOptions,
) -> Result<LayoutStatistics> {
    options.validate()?;

    let grid = options.grid_layout();

    let mut pages = 1;
    let mut images_on_page = 0;
    let mut placeable_images = 0;

    for (index, record) in images.iter().enumerate() {
        if !record.is_supported() {
            continue;
        }

        placeable_images += 1;
        images_on_page += 1;

        if images_on_page >= options.images_per_page && index < images.len() - 1 {
            pages += 1;
            images_on_page = 0;
        }
    }

    Ok(LayoutStatistics {
        input_images: images.len(),
        placeable_images,
        skipped_images: images.len() - placeable_images,
        pages,
        rows: grid.rows,
        cols: grid.cols,
        cell_width_pt: grid.cell_width_pt,
        cell_height_pt: grid.cell_height_pt,
    })
}
