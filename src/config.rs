//! # Configuration Management Module
//!
//! Questo modulo gestisce tutta la configurazione dell'applicazione.
//!
//! ## Responsabilità:
//! - Definisce la struct `ConversionOptions` con tutti i toggle di conversione
//! - Applica i default (tutti i formati attivi) sopra gli override del chiamante
//! - Supporta caricamento/salvataggio configurazione da/verso file JSON
//! - Fornisce validazione dei parametri di input
//!
//! ## Parametri di configurazione:
//! - `source_dir`: Directory sorgente scansionata ricorsivamente (default: "src/assets/images")
//! - `output_dir`: Directory di output, piatta rispetto ai basename (default: "public/assets/images")
//! - `optimize`: Ricomprime ogni file nel suo formato originale (default: true)
//! - `webp` / `avif` / `jpeg` / `png`: Export nei formati target (default: true)
//! - `workers`: Numero di file elaborati in parallelo (default: 4)
//!
//! ## Semantica dei default:
//! Ogni campo ha un default serde, quindi un file JSON parziale (es. `{"webp": false}`)
//! viene fuso sopra i default senza azzerare gli altri toggle.
//!
//! ## Esempio:
//! ```
//! use batch_image_converter::ConversionOptions;
//!
//! # fn main() -> anyhow::Result<()> {
//! let options = ConversionOptions {
//!     webp: false,
//!     workers: 8,
//!     ..Default::default()
//! };
//! options.validate()?;
//! # Ok(())
//! # }
//! ```

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

fn default_source_dir() -> PathBuf {
    PathBuf::from("src/assets/images")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("public/assets/images")
}

fn default_true() -> bool {
    true
}

fn default_workers() -> usize {
    4
}

/// Options controlling which conversions run and where outputs land
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionOptions {
    /// Source directory scanned recursively for images
    #[serde(default = "default_source_dir")]
    pub source_dir: PathBuf,
    /// Output directory; all outputs land directly under it (flattened)
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Re-encode each file in its original format with the format preset
    #[serde(default = "default_true")]
    pub optimize: bool,
    /// Export a `.webp` copy of every convertible file
    #[serde(default = "default_true")]
    pub webp: bool,
    /// Export an `.avif` copy of every convertible file
    #[serde(default = "default_true")]
    pub avif: bool,
    /// Export a `.jpg` copy of every convertible file
    #[serde(default = "default_true")]
    pub jpeg: bool,
    /// Export a `.png` copy of every convertible file
    #[serde(default = "default_true")]
    pub png: bool,
    /// Number of files processed concurrently
    #[serde(default = "default_workers")]
    pub workers: usize,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            source_dir: default_source_dir(),
            output_dir: default_output_dir(),
            optimize: true,
            webp: true,
            avif: true,
            jpeg: true,
            png: true,
            workers: default_workers(),
        }
    }
}

impl ConversionOptions {
    /// Validate configuration parameters
    pub fn validate(&self) -> Result<()> {
        if self.workers == 0 {
            return Err(anyhow::anyhow!("Number of workers must be greater than 0"));
        }

        if self.source_dir == self.output_dir {
            return Err(anyhow::anyhow!(
                "Source and output directory must differ: {}",
                self.source_dir.display()
            ));
        }

        Ok(())
    }

    /// True if no conversion operation is enabled at all
    pub fn all_disabled(&self) -> bool {
        !self.optimize && !self.webp && !self.avif && !self.jpeg && !self.png
    }

    /// Load options from a JSON file, merging over defaults
    pub async fn from_file(path: &PathBuf) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = tokio::fs::read_to_string(path).await?;
        let options: ConversionOptions = serde_json::from_str(&content)?;
        options.validate()?;
        Ok(options)
    }

    /// Save options to a JSON file
    pub async fn save_to_file(&self, path: &PathBuf) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        tokio::fs::write(path, content).await?;
        Ok(())
    }
}
