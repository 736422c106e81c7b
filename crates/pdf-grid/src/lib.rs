mod collection;
mod compose;
pub mod constants;
pub mod layout;
mod options;
mod pdf;
mod record;
pub mod render;
mod stats;
mod types;

pub use collection::{CropRegion, ImageCollection, IntakeReport, crop_image};
pub use compose::{ComposedDocument, compose, compose_pdf};
pub use layout::{GridDimensions, calculate_grid};
pub use options::*;
pub use pdf::{
    PdfOutput, fetch_images, generate_document, generate_pdf, render_document, save_pdf,
};
pub use record::{ImageInput, ImageRecord, ImageSource};
pub use stats::calculate_statistics;
pub use types::*;
