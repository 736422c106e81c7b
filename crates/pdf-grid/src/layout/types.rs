//! Layout data types
//!
//! These types represent the geometry computed between the layout options
//! and the rendered PDF.

/// A balanced row/column partition of a page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridDimensions {
    pub rows: usize,
    pub cols: usize,
}

impl GridDimensions {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Number of cells in the partition
    pub fn capacity(&self) -> usize {
        self.rows * self.cols
    }
}

/// Position within the grid (row, column)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridPosition {
    /// Row index (0 = top row)
    pub row: usize,
    /// Column index (0 = leftmost column)
    pub col: usize,
}

impl GridPosition {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Position of the n-th image on a page, filling rows left to right
    pub fn from_index(index: usize, cols: usize) -> Self {
        Self {
            row: index / cols,
            col: index % cols,
        }
    }
}

/// Cell geometry of one page
///
/// Cells tile the whole page with no sheet margin; the padding around each
/// image is applied when the image is fitted into its cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayout {
    /// Number of columns
    pub cols: usize,
    /// Number of rows
    pub rows: usize,
    /// Page width in points
    pub page_width_pt: f32,
    /// Page height in points
    pub page_height_pt: f32,
    /// Width of each cell in points
    pub cell_width_pt: f32,
    /// Height of each cell in points
    pub cell_height_pt: f32,
}

impl GridLayout {
    /// Total number of cells in the grid
    pub fn cell_count(&self) -> usize {
        self.cols * self.rows
    }
}

/// A rectangular area in points
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// X position (left edge)
    pub x: f32,
    /// Y position (bottom edge)
    pub y: f32,
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge x coordinate
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Top edge y coordinate
    pub fn top(&self) -> f32 {
        self.y + self.height
    }

    /// Center x coordinate
    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    /// Center y coordinate
    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }
}

/// Final placement of one image on a page
#[derive(Debug, Clone, PartialEq)]
pub struct ImagePlacement {
    /// Index of the image in the composer's input list
    pub image_index: usize,
    /// Cell the image occupies
    pub position: GridPosition,
    /// Bounds of that cell
    pub cell: Rect,
    /// Where the scaled image is drawn
    pub content_rect: Rect,
    /// Scale factor applied to the image's pixel dimensions
    pub scale: f32,
}

/// All placements of one output page
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PageLayout {
    pub placements: Vec<ImagePlacement>,
}

impl PageLayout {
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    pub fn len(&self) -> usize {
        self.placements.len()
    }
}
