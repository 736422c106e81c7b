mod logger;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use logger::CliLogger;
use pdf_grid::{
    CropRegion, GridError, ImageCollection, ImageInput, LayoutOptions, calculate_grid,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pdfg", about = "Lay out images on a grid and print them as a PDF", version)]
struct Cli {
    /// Increase log output (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compose JPG/PNG images into a printable grid PDF
    Compose {
        /// Input image files, in placement order
        #[arg(short, long, required = true, num_args = 1..)]
        input: Vec<PathBuf>,

        /// Output PDF file
        #[arg(short, long, default_value = "document.pdf")]
        output: PathBuf,

        /// Page size (default: A4, or the config file's value)
        #[arg(long, value_enum)]
        page_size: Option<PageSizeArg>,

        /// Images per page (default: 4, or the config file's value)
        #[arg(long)]
        images_per_page: Option<usize>,

        /// Columns per page (default: balanced for the images per page)
        #[arg(long)]
        columns: Option<usize>,

        /// Load layout options from a JSON file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Save the resolved layout options to a JSON file
        #[arg(long)]
        save_config: Option<PathBuf>,

        /// Show statistics only, don't generate PDF
        #[arg(long)]
        stats_only: bool,
    },

    /// Show the balanced grid for an image count
    Grid {
        /// Images per page
        images_per_page: usize,
    },

    /// Crop an image and save the region as PNG
    Crop {
        /// Input JPG or PNG image
        #[arg(short, long)]
        input: PathBuf,

        /// Output PNG file
        #[arg(short, long)]
        output: PathBuf,

        /// Left edge in pixels
        #[arg(long, default_value = "0")]
        x: u32,

        /// Top edge in pixels
        #[arg(long, default_value = "0")]
        y: u32,

        /// Region width in pixels
        #[arg(long)]
        width: u32,

        /// Region height in pixels
        #[arg(long)]
        height: u32,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum PageSizeArg {
    A4,
    Letter,
}

impl From<PageSizeArg> for pdf_grid::PageSize {
    fn from(arg: PageSizeArg) -> Self {
        match arg {
            PageSizeArg::A4 => Self::A4,
            PageSizeArg::Letter => Self::Letter,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    CliLogger::new(cli.verbose).init()?;

    match cli.command {
        Commands::Compose {
            input,
            output,
            page_size,
            images_per_page,
            columns,
            config,
            save_config,
            stats_only,
        } => {
            let mut options = match &config {
                Some(path) => LayoutOptions::load(path).await?,
                None => LayoutOptions::default(),
            };
            if let Some(page_size) = page_size {
                options.page_size = page_size.into();
            }
            if let Some(images_per_page) = images_per_page {
                options.images_per_page = images_per_page;
                options.columns = calculate_grid(images_per_page).cols;
            }
            if let Some(columns) = columns {
                options.columns = columns;
            }
            options.validate()?;

            if let Some(path) = &save_config {
                options.save(path).await?;
                println!("Saved layout options → {}", path.display());
            }

            // Intake: read every file, keep only JPG/PNG
            let inputs: Vec<ImageInput> = input.iter().map(ImageInput::from_path).collect();
            let records = pdf_grid::fetch_images(&inputs).await?;
            let mut collection = ImageCollection::new();
            let report = collection.add(records);
            if report.has_rejections() {
                eprintln!(
                    "Warning: only JPG and PNG images are allowed; skipped {} file(s)",
                    report.rejected.len()
                );
            }
            if collection.is_empty() {
                anyhow::bail!("No images to generate the PDF");
            }

            let stats = pdf_grid::calculate_statistics(collection.images(), &options)?;
            println!("Layout Statistics:");
            println!("  Images: {}", stats.placeable_images);
            println!("  Grid: {} rows x {} columns", stats.rows, stats.cols);
            println!(
                "  Cell size: {:.2} x {:.2} pt",
                stats.cell_width_pt, stats.cell_height_pt
            );
            println!("  Pages: {}", stats.pages);

            if stats_only {
                return Ok(());
            }

            match pdf_grid::render_document(collection.images().to_vec(), &options).await {
                Ok(pdf) => {
                    pdf_grid::save_pdf(&pdf.bytes, &output).await?;
                    println!(
                        "Generated {} images on {} pages → {}",
                        pdf.placed_images,
                        pdf.page_count,
                        output.display()
                    );
                }
                Err(GridError::NoImages) => anyhow::bail!("No images to generate the PDF"),
                Err(e) => {
                    log::error!("PDF generation failed: {}", e);
                    anyhow::bail!("Failed to generate the PDF. Please try again.");
                }
            }
        }

        Commands::Grid { images_per_page } => {
            let grid = calculate_grid(images_per_page);
            println!(
                "{} images per page → {} rows x {} columns",
                images_per_page, grid.rows, grid.cols
            );
        }

        Commands::Crop {
            input,
            output,
            x,
            y,
            width,
            height,
        } => {
            let record = ImageInput::from_path(&input).fetch().await?;
            let cropped = pdf_grid::crop_image(&record, CropRegion::new(x, y, width, height))?;
            tokio::fs::write(&output, cropped.data()).await?;
            println!(
                "Cropped {}x{} region of {} → {}",
                width,
                height,
                input.display(),
                output.display()
            );
        }
    }

    Ok(())
}
