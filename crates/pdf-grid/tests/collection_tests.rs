use image::{DynamicImage, GenericImageView, ImageFormat, Rgb, RgbImage};
use pdf_grid::*;
use std::io::Cursor;

fn png(width: u32, height: u32) -> ImageRecord {
    let image = DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, Rgb([250, 200, 0])));
    let mut bytes = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .unwrap();
    ImageRecord::new(bytes, MediaType::Png)
}

fn jpeg(width: u32, height: u32) -> ImageRecord {
    let image = DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, Rgb([0, 80, 160])));
    let mut bytes = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Jpeg)
        .unwrap();
    ImageRecord::new(bytes, MediaType::Jpeg)
}

#[test]
fn test_intake_filters_unsupported() {
    let mut collection = ImageCollection::new();
    let report = collection.add(vec![
        png(10, 10),
        ImageRecord::from_mime(b"hello".to_vec(), "text/plain"),
        jpeg(10, 10),
        ImageRecord::from_mime(b"GIF89a".to_vec(), "image/gif"),
    ]);

    assert_eq!(report.accepted, 2);
    assert!(report.has_rejections());
    assert_eq!(
        report.rejected,
        vec![
            MediaType::Unsupported("text/plain".to_string()),
            MediaType::Unsupported("image/gif".to_string()),
        ]
    );

    assert_eq!(collection.len(), 2);
    assert_eq!(collection.images()[0].media_type(), &MediaType::Png);
    assert_eq!(collection.images()[1].media_type(), &MediaType::Jpeg);
    assert_eq!(collection.revision(), 1);
}

#[test]
fn test_intake_of_only_rejected_files_keeps_revision() {
    let mut collection = ImageCollection::new();
    let report = collection.add(vec![ImageRecord::from_mime(b"x".to_vec(), "text/csv")]);

    assert_eq!(report.accepted, 0);
    assert!(collection.is_empty());
    assert_eq!(collection.revision(), 0);
}

#[test]
fn test_intake_appends_in_order() {
    let mut collection = ImageCollection::new();
    let first = png(1, 1);
    let second = png(2, 2);
    collection.add(vec![first.clone()]);
    collection.add(vec![second.clone()]);

    assert_eq!(collection.images(), &[first, second]);
    assert_eq!(collection.revision(), 2);
}

#[test]
fn test_remove_and_clear() {
    let mut collection = ImageCollection::new();
    collection.add(vec![png(1, 1), png(2, 2), png(3, 3)]);

    let removed = collection.remove(1).unwrap();
    assert_eq!(removed.dimensions().unwrap(), Some((2, 2)));
    assert_eq!(collection.len(), 2);
    assert_eq!(collection.revision(), 2);

    collection.clear();
    assert!(collection.is_empty());
    assert_eq!(collection.revision(), 3);

    // Clearing an empty list is not a change
    collection.clear();
    assert_eq!(collection.revision(), 3);
}

#[test]
fn test_index_out_of_range() {
    let mut collection = ImageCollection::new();
    collection.add(vec![png(1, 1)]);

    match collection.remove(5) {
        Err(GridError::IndexOutOfRange { index, len }) => {
            assert_eq!(index, 5);
            assert_eq!(len, 1);
        }
        other => panic!("expected index error, got {:?}", other),
    }
    assert!(collection.replace(1, png(2, 2)).is_err());
    assert!(collection.crop(1, CropRegion::new(0, 0, 20, 20)).is_err());
    assert_eq!(collection.revision(), 1);
}

#[test]
fn test_crop_replaces_record_with_png() {
    let mut collection = ImageCollection::new();
    collection.add(vec![png(10, 10), jpeg(100, 80)]);
    let before = collection.revision();

    collection.crop(1, CropRegion::new(10, 5, 40, 30)).unwrap();

    let cropped = collection.get(1).unwrap();
    assert_eq!(cropped.media_type(), &MediaType::Png);
    assert_eq!(cropped.dimensions().unwrap(), Some((40, 30)));
    assert_eq!(collection.revision(), before + 1);

    // Neighbours are untouched
    assert_eq!(collection.get(0).unwrap().dimensions().unwrap(), Some((10, 10)));
}

#[test]
fn test_crop_keeps_pixels() {
    let mut canvas = RgbImage::from_pixel(40, 40, Rgb([0, 0, 0]));
    for y in 20..40 {
        for x in 20..40 {
            canvas.put_pixel(x, y, Rgb([255, 255, 255]));
        }
    }
    let mut bytes = Vec::new();
    DynamicImage::ImageRgb8(canvas)
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .unwrap();
    let record = ImageRecord::new(bytes, MediaType::Png);

    let cropped = crop_image(&record, CropRegion::new(20, 20, 20, 20)).unwrap();
    let decoded = image::load_from_memory(cropped.data()).unwrap();
    assert_eq!(decoded.dimensions(), (20, 20));
    assert_eq!(decoded.to_rgb8().get_pixel(0, 0), &Rgb([255, 255, 255]));
}

#[test]
fn test_crop_rejects_small_region() {
    let record = png(100, 100);
    let result = crop_image(&record, CropRegion::new(0, 0, 19, 50));
    assert!(matches!(result, Err(GridError::InvalidCrop(_))));
}

#[test]
fn test_crop_rejects_region_outside_image() {
    let record = png(50, 50);
    let result = crop_image(&record, CropRegion::new(40, 0, 20, 20));
    assert!(matches!(result, Err(GridError::InvalidCrop(_))));

    let result = crop_image(&record, CropRegion::new(u32::MAX, 0, 20, 20));
    assert!(matches!(result, Err(GridError::InvalidCrop(_))));
}

#[test]
fn test_crop_rejects_unsupported_type() {
    let record = ImageRecord::from_mime(b"plain".to_vec(), "text/plain");
    let result = crop_image(&record, CropRegion::new(0, 0, 20, 20));
    assert!(matches!(result, Err(GridError::InvalidCrop(_))));
}

#[test]
fn test_failed_crop_leaves_collection_unchanged() {
    let mut collection = ImageCollection::new();
    let original = png(30, 30);
    collection.add(vec![original.clone()]);

    assert!(collection.crop(0, CropRegion::new(0, 0, 40, 40)).is_err());
    assert_eq!(collection.get(0), Some(&original));
    assert_eq!(collection.revision(), 1);
}
