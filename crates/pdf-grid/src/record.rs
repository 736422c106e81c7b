use crate::types::*;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// An image captured for composition: raw bytes plus the declared media type.
///
/// The bytes are shared, so cloning a record or handing it to the composer
/// never copies the image data.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageRecord {
    data: Arc<[u8]>,
    media_type: MediaType,
}

impl ImageRecord {
    pub fn new(data: impl Into<Arc<[u8]>>, media_type: MediaType) -> Self {
        Self {
            data: data.into(),
            media_type,
        }
    }

    /// Create a record from a mime type string such as `image/png`
    pub fn from_mime(data: impl Into<Arc<[u8]>>, mime: &str) -> Self {
        Self::new(data, MediaType::from_mime(mime))
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn media_type(&self) -> &MediaType {
        &self.media_type
    }

    pub fn is_supported(&self) -> bool {
        self.media_type.is_supported()
    }

    /// Pixel dimensions read from the image header.
    ///
    /// Returns `None` for unsupported media types.
    pub fn dimensions(&self) -> Result<Option<(u32, u32)>> {
        let Some(format) = self.media_type.image_format() else {
            return Ok(None);
        };

        let reader = image::ImageReader::with_format(Cursor::new(self.data()), format);
        Ok(Some(reader.into_dimensions()?))
    }
}

/// Where the bytes of an input image come from
#[derive(Debug, Clone, PartialEq)]
pub enum ImageSource {
    /// A file on disk, read when the input is fetched
    File(PathBuf),
    /// Bytes already in memory
    Memory(Arc<[u8]>),
}

/// One entry of the composer's input list before its bytes are fetched
#[derive(Debug, Clone, PartialEq)]
pub struct ImageInput {
    pub source: ImageSource,
    pub media_type: MediaType,
}

impl ImageInput {
    pub fn new(source: ImageSource, media_type: MediaType) -> Self {
        Self { source, media_type }
    }

    /// A file input whose media type is guessed from its extension
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        Self {
            source: ImageSource::File(path.to_owned()),
            media_type: MediaType::from_path(path),
        }
    }

    /// An in-memory input with a declared mime type
    pub fn from_bytes(data: impl Into<Arc<[u8]>>, mime: &str) -> Self {
        Self {
            source: ImageSource::Memory(data.into()),
            media_type: MediaType::from_mime(mime),
        }
    }

    /// Retrieve the input's bytes
    pub async fn fetch(&self) -> Result<ImageRecord> {
        let data: Arc<[u8]> = match &self.source {
            ImageSource::File(path) => tokio::fs::read(path).await?.into(),
            ImageSource::Memory(data) => Arc::clone(data),
        };

        Ok(ImageRecord {
            data,
            media_type: self.media_type.clone(),
        })
    }
}
