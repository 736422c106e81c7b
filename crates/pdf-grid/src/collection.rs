//! The session's owned image list
//!
//! Intake filters out records that cannot be composed, and every mutation
//! bumps a revision counter so dependent views know the list changed.

use crate::constants::MIN_CROP_SIZE_PX;
use crate::record::ImageRecord;
use crate::types::*;
use log::{debug, warn};
use std::io::Cursor;

/// Outcome of adding records to a collection
#[derive(Debug, Clone, PartialEq, Default)]
pub struct IntakeReport {
    /// Number of records appended
    pub accepted: usize,
    /// Media types of the records that were filtered out
    pub rejected: Vec<MediaType>,
}

impl IntakeReport {
    pub fn has_rejections(&self) -> bool {
        !self.rejected.is_empty()
    }
}

/// A pixel rectangle to crop, measured from the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropRegion {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl CropRegion {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Ordered list of images for one session
#[derive(Debug, Clone, Default)]
pub struct ImageCollection {
    images: Vec<ImageRecord>,
    revision: u64,
}

impl ImageCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn images(&self) -> &[ImageRecord] {
        &self.images
    }

    pub fn get(&self, index: usize) -> Option<&ImageRecord> {
        self.images.get(index)
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Incremented on every change to the list
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Append records, dropping any whose media type cannot be composed.
    pub fn add(&mut self, records: impl IntoIterator<Item = ImageRecord>) -> IntakeReport {
        let mut report = IntakeReport::default();

        for record in records {
            if record.is_supported() {
                self.images.push(record);
                report.accepted += 1;
            } else {
                report.rejected.push(record.media_type().clone());
            }
        }

        if report.has_rejections() {
            warn!(
                "Filtered {} file(s) that are not JPG or PNG images",
                report.rejected.len()
            );
        }
        if report.accepted > 0 {
            self.touch();
        }

        report
    }

    /// Remove and return the record at `index`
    pub fn remove(&mut self, index: usize) -> Result<ImageRecord> {
        self.check_index(index)?;
        let removed = self.images.remove(index);
        self.touch();
        Ok(removed)
    }

    pub fn clear(&mut self) {
        if !self.images.is_empty() {
            self.images.clear();
            self.touch();
        }
    }

    /// Replace the record at `index`, returning the previous one
    pub fn replace(&mut self, index: usize, record: ImageRecord) -> Result<ImageRecord> {
        self.check_index(index)?;
        let previous = std::mem::replace(&mut self.images[index], record);
        self.touch();
        Ok(previous)
    }

    /// Crop the record at `index` and put the PNG result in its place
    pub fn crop(&mut self, index: usize, region: CropRegion) -> Result<()> {
        self.check_index(index)?;
        let cropped = crop_image(&self.images[index], region)?;
        debug!(
            "Cropped image {} to {}x{} at ({}, {})",
            index, region.width, region.height, region.x, region.y
        );
        self.replace(index, cropped)?;
        Ok(())
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.images.len() {
            return Err(GridError::IndexOutOfRange {
                index,
                len: self.images.len(),
            });
        }
        Ok(())
    }

    fn touch(&mut self) {
        self.revision += 1;
    }
}

/// Crop an image and re-encode the region as PNG
pub fn crop_image(record: &ImageRecord, region: CropRegion) -> Result<ImageRecord> {
    let Some(format) = record.media_type().image_format() else {
        return Err(GridError::InvalidCrop(format!(
            "cannot crop unsupported type {}",
            record.media_type()
        )));
    };

    if region.width < MIN_CROP_SIZE_PX || region.height < MIN_CROP_SIZE_PX {
        return Err(GridError::InvalidCrop(format!(
            "region {}x{} is smaller than {}x{}",
            region.width, region.height, MIN_CROP_SIZE_PX, MIN_CROP_SIZE_PX
        )));
    }

    let decoded = image::load_from_memory_with_format(record.data(), format)?;

    let right = u64::from(region.x) + u64::from(region.width);
    let bottom = u64::from(region.y) + u64::from(region.height);
    if right > u64::from(decoded.width()) || bottom > u64::from(decoded.height()) {
        return Err(GridError::InvalidCrop(format!(
            "region {}x{} at ({}, {}) exceeds image bounds {}x{}",
            region.width,
            region.height,
            region.x,
            region.y,
            decoded.width(),
            decoded.height()
        )));
    }

    let cropped = decoded.crop_imm(region.x, region.y, region.width, region.height);

    let mut bytes = Vec::new();
    cropped.write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)?;

    Ok(ImageRecord::new(bytes, MediaType::Png))
}
