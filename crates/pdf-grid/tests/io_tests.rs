use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use lopdf::Document;
use pdf_grid::*;
use std::io::Cursor;
use std::path::Path;

fn write_png(path: &Path, width: u32, height: u32) {
    let image = DynamicImage::ImageRgba8(RgbaImage::from_pixel(width, height, Rgba([9, 9, 9, 255])));
    let mut bytes = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .unwrap();
    std::fs::write(path, bytes).unwrap();
}

#[tokio::test]
async fn test_generate_pdf_from_files() {
    let dir = tempfile::tempdir().unwrap();
    let mut inputs = Vec::new();
    for i in 0..3 {
        let path = dir.path().join(format!("photo{}.PNG", i));
        write_png(&path, 30 + i, 20);
        inputs.push(ImageInput::from_path(&path));
    }
    let output_path = dir.path().join("out.pdf");

    let options = LayoutOptions {
        page_size: PageSize::Letter,
        images_per_page: 2,
        columns: 2,
    };
    let output = generate_pdf(&inputs, &options, &output_path).await.unwrap();

    assert_eq!(output.content_type, "application/pdf");
    assert_eq!(output.page_count, 2);
    assert_eq!(output.placed_images, 3);

    let written = std::fs::read(&output_path).unwrap();
    assert_eq!(written, output.bytes);
    let doc = Document::load_mem(&written).unwrap();
    assert_eq!(doc.get_pages().len(), 2);
}

#[tokio::test]
async fn test_generate_document_from_memory_inputs() {
    let mut bytes = Vec::new();
    DynamicImage::ImageRgba8(RgbaImage::from_pixel(4, 4, Rgba([1, 2, 3, 4])))
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .unwrap();

    let inputs = vec![
        ImageInput::from_bytes(bytes.clone(), "image/png"),
        ImageInput::from_bytes(b"<svg/>".to_vec(), "image/svg+xml"),
        ImageInput::from_bytes(bytes, "image/png"),
    ];

    let output = generate_document(&inputs, &LayoutOptions::default())
        .await
        .unwrap();
    assert_eq!(output.page_count, 1);
    assert_eq!(output.placed_images, 2);
    assert!(output.bytes.starts_with(b"%PDF-1.7"));
}

#[tokio::test]
async fn test_generate_document_refuses_empty_input() {
    let result = generate_document(&[], &LayoutOptions::default()).await;
    assert!(matches!(result, Err(GridError::NoImages)));

    let result = render_document(Vec::new(), &LayoutOptions::default()).await;
    assert!(matches!(result, Err(GridError::NoImages)));
}

#[tokio::test]
async fn test_generate_document_validates_before_fetching() {
    let inputs = vec![ImageInput::from_path("/definitely/not/here.png")];
    let options = LayoutOptions {
        columns: 0,
        ..Default::default()
    };

    let result = generate_document(&inputs, &options).await;
    assert!(matches!(result, Err(GridError::Config(_))));
}

#[tokio::test]
async fn test_missing_file_is_io_error() {
    let inputs = vec![ImageInput::from_path("/definitely/not/here.png")];
    let result = generate_document(&inputs, &LayoutOptions::default()).await;
    assert!(matches!(result, Err(GridError::Io(_))));
}

#[tokio::test]
async fn test_decode_failure_produces_no_file() {
    let dir = tempfile::tempdir().unwrap();
    let bad = dir.path().join("broken.jpg");
    std::fs::write(&bad, b"not a jpeg").unwrap();
    let output_path = dir.path().join("out.pdf");

    let result = generate_pdf(
        &[ImageInput::from_path(&bad)],
        &LayoutOptions::default(),
        &output_path,
    )
    .await;

    assert!(matches!(result, Err(GridError::Decode { index: 0, .. })));
    assert!(!output_path.exists());
}

#[tokio::test]
async fn test_fetch_keeps_order_and_types() {
    let dir = tempfile::tempdir().unwrap();
    let png_path = dir.path().join("a.png");
    let txt_path = dir.path().join("b.txt");
    write_png(&png_path, 2, 2);
    std::fs::write(&txt_path, b"text").unwrap();

    let records = fetch_images(&[
        ImageInput::from_path(&txt_path),
        ImageInput::from_path(&png_path),
    ])
    .await
    .unwrap();

    assert_eq!(records.len(), 2);
    assert!(!records[0].is_supported());
    assert_eq!(records[0].data(), b"text");
    assert_eq!(records[1].media_type(), &MediaType::Png);
    assert_eq!(records[1].dimensions().unwrap(), Some((2, 2)));
}

#[tokio::test]
async fn test_options_save_and_load() {
    let temp = tempfile::NamedTempFile::new().unwrap();
    let options = LayoutOptions {
        page_size: PageSize::Letter,
        images_per_page: 9,
        columns: 3,
    };

    options.save(temp.path()).await.unwrap();
    let loaded = LayoutOptions::load(temp.path()).await.unwrap();
    assert_eq!(loaded, options);
}

#[tokio::test]
async fn test_options_load_fills_defaults() {
    let temp = tempfile::NamedTempFile::new().unwrap();
    std::fs::write(temp.path(), br#"{ "page_size": "Letter" }"#).unwrap();

    let loaded = LayoutOptions::load(temp.path()).await.unwrap();
    assert_eq!(loaded.page_size, PageSize::Letter);
    assert_eq!(loaded.images_per_page, 4);
    assert_eq!(loaded.columns, 2);
}

#[tokio::test]
async fn test_options_load_rejects_bad_json() {
    let temp = tempfile::NamedTempFile::new().unwrap();
    std::fs::write(temp.path(), b"{ not json").unwrap();

    let result = LayoutOptions::load(temp.path()).await;
    assert!(matches!(result, Err(GridError::Config(_))));
}
