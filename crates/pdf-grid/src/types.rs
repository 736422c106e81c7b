use std::path::Path;
use thiserror::Error;

use crate::constants::{A4_DIMENSIONS_PT, LETTER_DIMENSIONS_PT};

#[derive(Error, Debug)]
pub enum GridError {
    #[error("No images to compose")]
    NoImages,
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Failed to decode image {index} as {format}: {source}")]
    Decode {
        index: usize,
        format: MediaType,
        #[source]
        source: image::ImageError,
    },
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("Invalid crop region: {0}")]
    InvalidCrop(String),
    #[error("Image index {index} out of range (collection has {len} images)")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, GridError>;

/// Output page sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PageSize {
    #[default]
    A4,
    Letter,
}

impl PageSize {
    /// Page dimensions in points (width, height), always portrait
    pub fn dimensions_pt(self) -> (f32, f32) {
        match self {
            PageSize::A4 => A4_DIMENSIONS_PT,
            PageSize::Letter => LETTER_DIMENSIONS_PT,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PageSize::A4 => "A4",
            PageSize::Letter => "Letter",
        }
    }
}

/// Declared media type of an image record.
///
/// Only JPEG and PNG can be embedded. Anything else is carried along as
/// `Unsupported` so that intake can report it and the composer can skip it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaType {
    Jpeg,
    Png,
    Unsupported(String),
}

impl MediaType {
    /// Map a mime type string. `image/jpg` is accepted as an alias of `image/jpeg`.
    pub fn from_mime(mime: &str) -> Self {
        match mime.trim().to_ascii_lowercase().as_str() {
            "image/jpeg" | "image/jpg" => MediaType::Jpeg,
            "image/png" => MediaType::Png,
            other => MediaType::Unsupported(other.to_string()),
        }
    }

    /// Guess the media type of a file from its extension
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        let ext = path
            .as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        match ext.as_deref() {
            Some("jpg") | Some("jpeg") => MediaType::Jpeg,
            Some("png") => MediaType::Png,
            _ => MediaType::Unsupported("application/octet-stream".to_string()),
        }
    }

    pub fn mime(&self) -> &str {
        match self {
            MediaType::Jpeg => "image/jpeg",
            MediaType::Png => "image/png",
            MediaType::Unsupported(mime) => mime,
        }
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, MediaType::Unsupported(_))
    }

    /// The matching decoder format, if this type can be embedded
    pub(crate) fn image_format(&self) -> Option<image::ImageFormat> {
        match self {
            MediaType::Jpeg => Some(image::ImageFormat::Jpeg),
            MediaType::Png => Some(image::ImageFormat::Png),
            MediaType::Unsupported(_) => None,
        }
    }
}

impl std::fmt::Display for MediaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.mime())
    }
}

/// Statistics about a layout, computed without embedding any image
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutStatistics {
    /// Number of records handed to the composer
    pub input_images: usize,
    /// Records with a supported media type
    pub placeable_images: usize,
    /// Records that will be skipped
    pub skipped_images: usize,
    /// Output page count
    pub pages: usize,
    /// Grid rows per page
    pub rows: usize,
    /// Grid columns per page
    pub cols: usize,
    /// Cell width in points
    pub cell_width_pt: f32,
    /// Cell height in points
    pub cell_height_pt: f32,
}
