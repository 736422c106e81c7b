//! Shared constants for grid layout and PDF output

// =============================================================================
// Page Dimensions
// =============================================================================

/// A4 page width in points
pub const A4_WIDTH_PT: f32 = 595.28;

/// A4 page height in points
pub const A4_HEIGHT_PT: f32 = 841.89;

/// A4 page dimensions as tuple (width, height)
pub const A4_DIMENSIONS_PT: (f32, f32) = (A4_WIDTH_PT, A4_HEIGHT_PT);

/// US Letter page width in points (8.5")
pub const LETTER_WIDTH_PT: f32 = 612.0;

/// US Letter page height in points (11")
pub const LETTER_HEIGHT_PT: f32 = 792.0;

/// US Letter page dimensions as tuple (width, height)
pub const LETTER_DIMENSIONS_PT: (f32, f32) = (LETTER_WIDTH_PT, LETTER_HEIGHT_PT);

// =============================================================================
// Cell Layout
// =============================================================================

/// Total padding subtracted from each cell dimension before fitting an image (points)
pub const CELL_PADDING_PT: f32 = 20.0;

// =============================================================================
// Cropping
// =============================================================================

/// Smallest crop region accepted, in pixels per side
pub const MIN_CROP_SIZE_PX: u32 = 20;

// =============================================================================
// Output
// =============================================================================

/// Content type of the generated document
pub const PDF_CONTENT_TYPE: &str = "application/pdf";

/// PDF version written to the output
pub const PDF_VERSION: &str = "1.7";
