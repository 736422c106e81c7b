use crate::compose::compose;
use crate::constants::PDF_CONTENT_TYPE;
use crate::options::LayoutOptions;
use crate::record::{ImageInput, ImageRecord};
use crate::types::*;
use log::info;
use std::path::Path;

/// A finished PDF document
#[derive(Debug, Clone, PartialEq)]
pub struct PdfOutput {
    pub bytes: Vec<u8>,
    /// Always `application/pdf`
    pub content_type: &'static str,
    pub page_count: usize,
    pub placed_images: usize,
}

/// Fetch every input in order, one at a time
pub async fn fetch_images(inputs: &[ImageInput]) -> Result<Vec<ImageRecord>> {
    let mut records = Vec::with_capacity(inputs.len());
    for input in inputs {
        records.push(input.fetch().await?);
    }
    Ok(records)
}

/// Fetch the inputs and compose them into PDF bytes.
///
/// Refuses to start when there are no inputs.
pub async fn generate_document(inputs: &[ImageInput], options: &LayoutOptions) -> Result<PdfOutput> {
    if inputs.is_empty() {
        return Err(GridError::NoImages);
    }
    options.validate()?;

    let records = fetch_images(inputs).await?;
    render_document(records, options).await
}

/// Compose already fetched records into PDF bytes
pub async fn render_document(records: Vec<ImageRecord>, options: &LayoutOptions) -> Result<PdfOutput> {
    if records.is_empty() {
        return Err(GridError::NoImages);
    }
    let options = *options;

    // Decoding and embedding is CPU-bound, spawn blocking
    tokio::task::spawn_blocking(move || {
        let composed = compose(&records, &options)?;
        let page_count = composed.page_count();
        let placed_images = composed.placed_count();
        Ok::<_, GridError>(PdfOutput {
            bytes: composed.to_bytes()?,
            content_type: PDF_CONTENT_TYPE,
            page_count,
            placed_images,
        })
    })
    .await?
}

/// Generate the document and write it to `output_path`
pub async fn generate_pdf(
    inputs: &[ImageInput],
    options: &LayoutOptions,
    output_path: impl AsRef<Path>,
) -> Result<PdfOutput> {
    let output = generate_document(inputs, options).await?;
    save_pdf(&output.bytes, &output_path).await?;
    Ok(output)
}

/// Write PDF bytes to disk
pub async fn save_pdf(bytes: &[u8], path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    tokio::fs::write(path, bytes).await?;
    info!("Wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}
