//! # Batch Image Converter Library
//!
//! Questo è il modulo principale della libreria che espone tutte le API pubbliche.
//!
//! ## Responsabilità:
//! - Definisce la struttura modulare dell'applicazione
//! - Espone i tipi e le funzioni principali tramite re-exports
//! - Fornisce un'interfaccia pulita per il main.rs e per altri consumatori
//!
//! ## Architettura dei moduli:
//! - `config`: Gestione configurazione e validazione parametri
//! - `error`: Tipi di errore custom per diverse operazioni
//! - `presets`: Parametri statici di encoding per formato
//! - `walker`: Discovery ricorsiva dei file sorgente
//! - `classifier`: Dispatch per estensione (raster/vettoriale/non supportato)
//! - `codecs`: Encoding in-process (JPEG/PNG/GIF/WebP/AVIF)
//! - `converter`: Orchestratore e worker per-file
//! - `progress`: Progress tracking e statistiche
//!
//! ## Utilizzo:
//! ```no_run
//! use batch_image_converter::{convert_images, ConversionOptions};
//!
//! # async fn run() -> anyhow::Result<()> {
//! let options = ConversionOptions {
//!     webp: false,
//!     ..Default::default()
//! };
//! convert_images(options).await?;
//! # Ok(())
//! # }
//! ```

pub mod classifier;
pub mod codecs;
pub mod config;
pub mod converter;
pub mod error;
pub mod presets;
pub mod progress;
pub mod walker;

pub use config::ConversionOptions;
pub use converter::BatchConverter;
pub use error::ConvertError;
pub use progress::ConversionStats;

use anyhow::Result;

/// Convert every image under `options.source_dir` into `options.output_dir`.
///
/// The single library entry point: walks the source tree, then runs the
/// enabled conversions for each discovered file. Per-file and per-operation
/// failures are logged and never propagate.
pub async fn convert_images(options: ConversionOptions) -> Result<()> {
    let converter = BatchConverter::new(options)?;
    converter.run().await?;
    Ok(())
}
