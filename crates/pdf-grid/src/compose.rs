//! Document composition - placing images into grid cells across pages
//!
//! Images are processed strictly in input order:
//! 1. Unsupported media types are skipped without consuming a cell
//! 2. Supported images are decoded and embedded
//! 3. Each image is fitted and centered in the next free cell
//! 4. A new page is started once the current one holds `images_per_page`

use crate::constants::PDF_VERSION;
use crate::layout::{GridLayout, PageLayout, place_image};
use crate::options::LayoutOptions;
use crate::record::ImageRecord;
use crate::render::{PageBuilder, embed_image, finish_document};
use crate::types::*;
use log::{debug, info};
use lopdf::Document;

/// A composed multi-page document, ready to be serialized
#[derive(Debug)]
pub struct ComposedDocument {
    page_size: PageSize,
    grid: GridLayout,
    pages: Vec<PageLayout>,
    document: Document,
}

impl ComposedDocument {
    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    /// The cell geometry every page was laid out on
    pub fn grid(&self) -> &GridLayout {
        &self.grid
    }

    /// Placements of every page, in page order
    pub fn pages(&self) -> &[PageLayout] {
        &self.pages
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Total number of images placed across all pages
    pub fn placed_count(&self) -> usize {
        self.pages.iter().map(PageLayout::len).sum()
    }

    /// The underlying PDF document
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Serialize the document to PDF bytes
    pub fn to_bytes(mut self) -> Result<Vec<u8>> {
        let mut writer = Vec::new();
        self.document.save_to(&mut writer)?;
        Ok(writer)
    }
}

/// Compose images into a paginated grid document.
///
/// An empty input yields a single empty page. Records with an unsupported
/// media type are skipped; a supported record that fails to decode aborts the
/// whole composition.
pub fn compose(images: &[ImageRecord], options: &LayoutOptions) -> Result<ComposedDocument> {
    options.validate()?;

    let grid = options.grid_layout();

    let mut output = Document::with_version(PDF_VERSION);
    let pages_tree_id = output.new_object_id();
    let mut page_ids = Vec::new();
    let mut pages = Vec::new();

    let mut current = PageBuilder::new();

    for (index, record) in images.iter().enumerate() {
        let Some(embedded) = embed_image(&mut output, record, index)? else {
            debug!(
                "Skipping image {} with unsupported type {}",
                index,
                record.media_type()
            );
            continue;
        };

        let placement = place_image(
            &grid,
            current.len(),
            index,
            (embedded.width as f32, embedded.height as f32),
        );
        debug!(
            "Image {} -> page {}, row {}, col {} (scale {:.3})",
            index,
            pages.len() + 1,
            placement.position.row,
            placement.position.col,
            placement.scale
        );
        current.draw_image(embedded.object_id, placement);

        if current.len() >= options.images_per_page && index < images.len() - 1 {
            let full = std::mem::take(&mut current);
            let (page_id, layout) = full.finish(&mut output, pages_tree_id, &grid);
            page_ids.push(page_id);
            pages.push(layout);
        }
    }

    let (page_id, layout) = current.finish(&mut output, pages_tree_id, &grid);
    page_ids.push(page_id);
    pages.push(layout);

    finish_document(&mut output, pages_tree_id, &page_ids);

    let composed = ComposedDocument {
        page_size: options.page_size,
        grid,
        pages,
        document: output,
    };

    info!(
        "Composed {} of {} images onto {} {} pages ({}x{} grid)",
        composed.placed_count(),
        images.len(),
        composed.page_count(),
        options.page_size.name(),
        grid.rows,
        grid.cols
    );

    Ok(composed)
}

/// Compose images and serialize the result to PDF bytes
pub fn compose_pdf(images: &[ImageRecord], options: &LayoutOptions) -> Result<Vec<u8>> {
    compose(images, options)?.to_bytes()
}
