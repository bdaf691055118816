use clap::Parser;
use std::fs;
use std::path::PathBuf;

use textlens::geometry::{FitMode, ImageDescriptor, ViewDescriptor};
use textlens::overlay;
use textlens::recognition::RecognizedTextBlock;

/// Projects recognized text blocks onto a destination view.
///
/// Reads a JSON array of recognized blocks (the pipeline's canonical output)
/// and prints the overlay rectangles and font sizes for the given image and
/// view geometry. Useful for diagnosing overlay misplacement without a
/// device in hand.
#[derive(Parser, Debug)]
#[command(name = "textlens")]
#[command(about = "Maps recognized text blocks to overlay rectangles")]
struct Args {
    /// JSON file holding an array of recognized text blocks
    #[arg(long)]
    blocks: PathBuf,

    /// Image display width in pixels
    #[arg(long)]
    image_width: f64,

    /// Image display height in pixels
    #[arg(long)]
    image_height: f64,

    /// Destination view width in pixels
    #[arg(long)]
    view_width: f64,

    /// Destination view height in pixels
    #[arg(long)]
    view_height: f64,

    /// Fit policy: contain or cover
    #[arg(long, default_value = "contain")]
    fit: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "textlens=info".into()),
        )
        .init();

    let fit = match args.fit.as_str() {
        "cover" => FitMode::Cover,
        _ => FitMode::Contain,
    };

    let content = fs::read_to_string(&args.blocks)?;
    let blocks: Vec<RecognizedTextBlock> = serde_json::from_str(&content)?;

    let image = ImageDescriptor::new(args.image_width, args.image_height);
    let view = ViewDescriptor::new(args.view_width, args.view_height);

    match overlay::build_overlays(&blocks, image, Some(view), fit) {
        Some(overlays) => {
            println!("{}", serde_json::to_string_pretty(&overlays)?);
        }
        None => {
            eprintln!("view geometry is not usable; nothing to render");
        }
    }

    Ok(())
}
