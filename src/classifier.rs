//! # File Classifier Module
//!
//! Questo modulo determina come trattare ogni file scoperto dalla traversal.
//!
//! ## Responsabilità:
//! - Estrazione dell'estensione e dispatch sul tipo di file
//! - Match case-sensitive sulle sole forme upper/lower (jpg/JPG, non Jpg)
//! - Distinzione raster / vettoriale / non supportato
//!
//! ## Regole di dispatch:
//! - Nessuna estensione → non supportato (warning, zero output)
//! - `svg` → copia byte-per-byte nell'output
//! - `jpg|JPG|jpeg|JPEG|png|PNG|gif|GIF` → raster riconosciuto, tutti gli step
//! - Qualsiasi altra estensione → gli export partono comunque, ma lo step di
//!   ottimizzazione in-place viene saltato con un warning

use std::path::Path;

/// Raster formats with a same-format optimization preset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RasterFormat {
    Jpeg,
    Png,
    Gif,
}

impl RasterFormat {
    /// Match an extension against the upper/lower forms only.
    ///
    /// Mixed case (`Jpg`, `Png`) is deliberately not recognized; the original
    /// asset trees only ever carry the two canonical spellings.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            "jpg" | "JPG" | "jpeg" | "JPEG" => Some(Self::Jpeg),
            "png" | "PNG" => Some(Self::Png),
            "gif" | "GIF" => Some(Self::Gif),
            _ => None,
        }
    }

    /// Format name for log messages
    pub fn name(&self) -> &'static str {
        match self {
            Self::Jpeg => "JPEG",
            Self::Png => "PNG",
            Self::Gif => "GIF",
        }
    }
}

/// How a single discovered file is handled
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileKind {
    /// Vector image, copied verbatim to the output directory
    Vector,
    /// Goes through the conversion pipeline; `source` is `Some` when the
    /// extension maps to a format with an optimization preset
    Convertible { source: Option<RasterFormat> },
    /// No extension at all: warn and skip
    Unsupported,
}

/// Classify a file path by its extension
pub fn classify(path: &Path) -> FileKind {
    match path.extension().and_then(|e| e.to_str()) {
        None => FileKind::Unsupported,
        Some("svg") => FileKind::Vector,
        Some(ext) => FileKind::Convertible {
            source: RasterFormat::from_extension(ext),
        },
    }
}
