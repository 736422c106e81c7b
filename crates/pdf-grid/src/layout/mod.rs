//! Layout calculation modules
//!
//! This module handles all the geometric calculations for the image grid:
//! - Grid partition (balanced rows/columns, cell dimensions)
//! - Image placement (padding, scaling, centering)

mod grid;
mod placement;
mod types;

pub use grid::*;
pub use placement::*;
pub use types::*;
