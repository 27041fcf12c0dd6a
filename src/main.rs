//! # Batch Image Converter - Main Entry Point
//!
//! Questo è il punto di ingresso principale dell'applicazione.
//!
//! ## Responsabilità:
//! - Parsing degli argomenti della command line con `clap`
//! - Inizializzazione del sistema di logging con `tracing`
//! - Validazione degli input dell'utente
//! - Creazione della configurazione e avvio del converter
//!
//! ## Flusso di esecuzione:
//! 1. Parsa gli argomenti CLI (directory, toggle di formato, workers, etc.)
//! 2. Configura il logging (INFO o DEBUG a seconda del flag verbose)
//! 3. Valida che la directory sorgente esista
//! 4. Crea un oggetto ConversionOptions con tutti i parametri
//! 5. Istanzia BatchConverter e avvia la conversione
//!
//! ## Esempio di utilizzo:
//! ```bash
//! image-converter src/assets/images --output public/assets/images --skip-avif --verbose
//! ```

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use batch_image_converter::{BatchConverter, ConversionOptions};

#[derive(Parser)]
#[command(name = "image-converter")]
#[command(about = "Convert a tree of source images into optimized web formats")]
struct Args {
    /// Directory containing source images to convert
    #[arg(default_value = "src/assets/images")]
    source_directory: PathBuf,

    /// Output directory for converted files (flat, basenames only)
    #[arg(short, long, default_value = "public/assets/images")]
    output: PathBuf,

    /// Skip the same-format optimization step
    #[arg(long)]
    skip_optimize: bool,

    /// Skip the WebP export
    #[arg(long)]
    skip_webp: bool,

    /// Skip the AVIF export
    #[arg(long)]
    skip_avif: bool,

    /// Skip the JPEG export
    #[arg(long)]
    skip_jpg: bool,

    /// Skip the PNG export
    #[arg(long)]
    skip_png: bool,

    /// Number of files processed in parallel
    #[arg(short, long, default_value = "4")]
    workers: usize,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(if args.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    // Validate arguments
    if !args.source_directory.exists() {
        return Err(anyhow::anyhow!(
            "Source directory does not exist: {}",
            args.source_directory.display()
        ));
    }

    if !args.output.exists() {
        std::fs::create_dir_all(&args.output)?;
        info!("Created output directory: {}", args.output.display());
    }

    let options = ConversionOptions {
        source_dir: args.source_directory,
        output_dir: args.output,
        optimize: !args.skip_optimize,
        webp: !args.skip_webp,
        avif: !args.skip_avif,
        jpeg: !args.skip_jpg,
        png: !args.skip_png,
        workers: args.workers,
    };

    let converter = BatchConverter::new(options)?;
    converter.run().await?;

    Ok(())
}
