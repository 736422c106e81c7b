//! Image XObject creation
//!
//! JPEG data is embedded as-is behind a `DCTDecode` filter. PNG data is
//! decoded to 8-bit samples and stored deflated, with any alpha channel split
//! into a soft mask.

use crate::record::ImageRecord;
use crate::types::*;
use flate2::Compression;
use flate2::write::ZlibEncoder;
use image::DynamicImage;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};
use std::io::Write;

/// An image XObject added to the output document
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmbeddedImage {
    pub object_id: ObjectId,
    /// Pixel width
    pub width: u32,
    /// Pixel height
    pub height: u32,
}

/// Embed an image record into the document.
///
/// Returns `Ok(None)` when the record's media type cannot be embedded. A
/// record of a supported type whose bytes fail to decode is an error.
///
/// # Arguments
/// * `doc` - The output document
/// * `record` - The image to embed
/// * `index` - Position of the record in the input list (for error reporting)
pub fn embed_image(
    doc: &mut Document,
    record: &ImageRecord,
    index: usize,
) -> Result<Option<EmbeddedImage>> {
    let Some(format) = record.media_type().image_format() else {
        return Ok(None);
    };

    let decoded = image::load_from_memory_with_format(record.data(), format).map_err(|source| {
        GridError::Decode {
            index,
            format: record.media_type().clone(),
            source,
        }
    })?;

    let embedded = match record.media_type() {
        MediaType::Jpeg => embed_jpeg(doc, record.data(), &decoded),
        _ => embed_png(doc, &decoded)?,
    };

    Ok(Some(embedded))
}

fn embed_jpeg(doc: &mut Document, data: &[u8], decoded: &DynamicImage) -> EmbeddedImage {
    let (width, height) = (decoded.width(), decoded.height());

    let mut dict = image_dictionary(width, height);
    match jpeg_components(data).unwrap_or(3) {
        1 => dict.set("ColorSpace", Object::Name(b"DeviceGray".to_vec())),
        4 => {
            // Adobe CMYK JPEGs store inverted components
            dict.set("ColorSpace", Object::Name(b"DeviceCMYK".to_vec()));
            dict.set(
                "Decode",
                Object::Array(
                    [1, 0, 1, 0, 1, 0, 1, 0]
                        .into_iter()
                        .map(Object::Integer)
                        .collect(),
                ),
            );
        }
        _ => dict.set("ColorSpace", Object::Name(b"DeviceRGB".to_vec())),
    }
    dict.set("Filter", Object::Name(b"DCTDecode".to_vec()));

    let object_id = doc.add_object(Stream::new(dict, data.to_vec()));

    EmbeddedImage {
        object_id,
        width,
        height,
    }
}

fn embed_png(doc: &mut Document, decoded: &DynamicImage) -> Result<EmbeddedImage> {
    let (width, height) = (decoded.width(), decoded.height());
    let color = decoded.color();

    let (samples, color_space, alpha) = match (color.has_color(), color.has_alpha()) {
        (false, false) => (decoded.to_luma8().into_raw(), "DeviceGray", None),
        (false, true) => {
            let la = decoded.to_luma_alpha8();
            let mut gray = Vec::with_capacity((width * height) as usize);
            let mut alpha = Vec::with_capacity((width * height) as usize);
            for pixel in la.pixels() {
                gray.push(pixel[0]);
                alpha.push(pixel[1]);
            }
            (gray, "DeviceGray", Some(alpha))
        }
        (true, false) => (decoded.to_rgb8().into_raw(), "DeviceRGB", None),
        (true, true) => {
            let rgba = decoded.to_rgba8();
            let mut rgb = Vec::with_capacity((width * height * 3) as usize);
            let mut alpha = Vec::with_capacity((width * height) as usize);
            for pixel in rgba.pixels() {
                rgb.extend_from_slice(&pixel.0[..3]);
                alpha.push(pixel[3]);
            }
            (rgb, "DeviceRGB", Some(alpha))
        }
    };

    let mut dict = image_dictionary(width, height);
    dict.set("ColorSpace", Object::Name(color_space.as_bytes().to_vec()));
    dict.set("Filter", Object::Name(b"FlateDecode".to_vec()));

    if let Some(alpha) = alpha {
        let mut mask = image_dictionary(width, height);
        mask.set("ColorSpace", Object::Name(b"DeviceGray".to_vec()));
        mask.set("Filter", Object::Name(b"FlateDecode".to_vec()));
        let mask_id = doc.add_object(Stream::new(mask, deflate(&alpha)?));
        dict.set("SMask", Object::Reference(mask_id));
    }

    let object_id = doc.add_object(Stream::new(dict, deflate(&samples)?));

    Ok(EmbeddedImage {
        object_id,
        width,
        height,
    })
}

/// Entries shared by every 8-bit image XObject
fn image_dictionary(width: u32, height: u32) -> Dictionary {
    let mut dict = Dictionary::new();
    dict.set("Type", Object::Name(b"XObject".to_vec()));
    dict.set("Subtype", Object::Name(b"Image".to_vec()));
    dict.set("Width", Object::Integer(width as i64));
    dict.set("Height", Object::Integer(height as i64));
    dict.set("BitsPerComponent", Object::Integer(8));
    dict
}

fn deflate(data: &[u8]) -> Result<Vec<u8>> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data)?;
    Ok(encoder.finish()?)
}

/// Number of color components declared in a JPEG frame header.
///
/// Walks the marker segments up to the first SOF marker.
fn jpeg_components(data: &[u8]) -> Option<u8> {
    let mut i = 2;
    while i + 9 < data.len() {
        if data[i] != 0xFF {
            i += 1;
            continue;
        }

        let marker = data[i + 1];
        if marker == 0xFF {
            // Fill byte
            i += 1;
            continue;
        }

        // SOF0..SOF15, excluding DHT, JPG and DAC which share the range
        if (0xC0..=0xCF).contains(&marker) && !matches!(marker, 0xC4 | 0xC8 | 0xCC) {
            return Some(data[i + 9]);
        }

        let length = u16::from_be_bytes([data[i + 2], data[i + 3]]) as usize;
        if length < 2 {
            return None;
        }
        i += 2 + length;
    }
    None
}
