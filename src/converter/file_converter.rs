//! # File Converter Module
//!
//! Worker per la conversione di singoli file.
//! Separato dall'orchestratore principale per maggiore modularità.
//!
//! ## Responsabilità:
//! - Dispatch sul tipo di file (vettoriale, raster, non supportato)
//! - Fino a cinque operazioni di encode indipendenti per file, gated dai toggle
//! - Decode unico per file, condiviso tra le operazioni
//! - Ogni operazione logga il proprio esito; un fallimento non tocca le sibling

use crate::{
    classifier::{self, FileKind, RasterFormat},
    codecs,
    config::ConversionOptions,
    converter::path_resolver::PathResolver,
    error::ConvertError,
    presets,
};
use image::DynamicImage;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// One independent encode operation for a file
#[derive(Debug, Clone, Copy)]
enum Operation {
    /// Re-encode in the source format with that format's preset
    Optimize(RasterFormat),
    ExportWebp,
    ExportAvif,
    ExportJpeg,
    ExportPng,
}

impl Operation {
    fn output_path(&self, input: &Path, output_dir: &Path) -> PathBuf {
        match self {
            Operation::Optimize(_) => PathResolver::optimized_output(input, output_dir),
            Operation::ExportWebp => PathResolver::export_output(input, output_dir, "webp"),
            Operation::ExportAvif => PathResolver::export_output(input, output_dir, "avif"),
            Operation::ExportJpeg => PathResolver::export_output(input, output_dir, "jpg"),
            Operation::ExportPng => PathResolver::export_output(input, output_dir, "png"),
        }
    }

    fn encode(&self, image: &DynamicImage) -> Result<Vec<u8>, ConvertError> {
        match self {
            Operation::Optimize(RasterFormat::Jpeg) => codecs::encode_jpeg(image, &presets::JPEG),
            Operation::Optimize(RasterFormat::Png) => codecs::encode_png(image, &presets::PNG),
            Operation::Optimize(RasterFormat::Gif) => codecs::encode_gif(image, &presets::GIF),
            Operation::ExportWebp => codecs::encode_webp(image, &presets::WEBP),
            Operation::ExportAvif => codecs::encode_avif(image, &presets::AVIF),
            Operation::ExportJpeg => codecs::encode_jpeg(image, &presets::JPEG),
            Operation::ExportPng => codecs::encode_png(image, &presets::PNG),
        }
    }

    fn describe(&self) -> &'static str {
        match self {
            Operation::Optimize(RasterFormat::Jpeg) => "JPEG optimization",
            Operation::Optimize(RasterFormat::Png) => "PNG optimization",
            Operation::Optimize(RasterFormat::Gif) => "GIF optimization",
            Operation::ExportWebp => "WebP export",
            Operation::ExportAvif => "AVIF export",
            Operation::ExportJpeg => "JPEG export",
            Operation::ExportPng => "PNG export",
        }
    }
}

/// How a single file run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    /// Went through the conversion pipeline
    Converted,
    /// Vector file copied verbatim
    Copied,
    /// No extension: warned and skipped
    Skipped,
    /// Decode or copy failed; nothing written for this file
    Failed,
}

/// Per-file outcome returned to the orchestrator
#[derive(Debug)]
pub struct FileReport {
    pub kind: ReportKind,
    pub outputs_written: usize,
    pub output_failures: usize,
    pub bytes_written: u64,
}

impl FileReport {
    fn skipped() -> Self {
        Self {
            kind: ReportKind::Skipped,
            outputs_written: 0,
            output_failures: 0,
            bytes_written: 0,
        }
    }

    fn failed() -> Self {
        Self {
            kind: ReportKind::Failed,
            outputs_written: 0,
            output_failures: 0,
            bytes_written: 0,
        }
    }
}

/// Worker per l'elaborazione di un singolo file
pub struct FileConverter {
    options: Arc<ConversionOptions>,
}

impl FileConverter {
    /// Crea nuovo file converter
    pub fn new(options: Arc<ConversionOptions>) -> Self {
        Self { options }
    }

    /// Processa un singolo file scoperto dalla traversal
    pub async fn process_file(&self, input: &Path) -> FileReport {
        match classifier::classify(input) {
            FileKind::Unsupported => {
                warn!("⚠️ Unsupported file (no extension): {}", input.display());
                FileReport::skipped()
            }
            FileKind::Vector => self.copy_vector(input).await,
            FileKind::Convertible { source } => self.convert_raster(input, source).await,
        }
    }

    /// Copia un file vettoriale byte-per-byte nella directory di output
    async fn copy_vector(&self, input: &Path) -> FileReport {
        let output = PathResolver::optimized_output(input, &self.options.output_dir);

        match tokio::fs::copy(input, &output).await {
            Ok(bytes) => {
                info!("✅ {} ({:.1} KB)", output.display(), bytes as f64 / 1024.0);
                FileReport {
                    kind: ReportKind::Copied,
                    outputs_written: 1,
                    output_failures: 0,
                    bytes_written: bytes,
                }
            }
            Err(e) => {
                warn!("⚠️ Failed to copy {}: {}", input.display(), e);
                FileReport::failed()
            }
        }
    }

    /// Esegue le operazioni di encode abilitate per un file raster
    async fn convert_raster(&self, input: &Path, source: Option<RasterFormat>) -> FileReport {
        let mut operations = Vec::new();

        if self.options.optimize {
            match source {
                Some(format) => operations.push(Operation::Optimize(format)),
                // The export steps below still run; only the same-format
                // re-encode has nothing to key its preset on
                None => warn!(
                    "⚠️ {}, skipping optimize step",
                    ConvertError::UnsupportedFormat(input.display().to_string())
                ),
            }
        }
        if self.options.webp {
            operations.push(Operation::ExportWebp);
        }
        if self.options.avif {
            operations.push(Operation::ExportAvif);
        }
        if self.options.jpeg {
            operations.push(Operation::ExportJpeg);
        }
        if self.options.png {
            operations.push(Operation::ExportPng);
        }

        if operations.is_empty() {
            debug!("No operations enabled for {}", input.display());
            return FileReport {
                kind: ReportKind::Converted,
                outputs_written: 0,
                output_failures: 0,
                bytes_written: 0,
            };
        }

        // One decode shared by every operation for this file
        let image = match decode(input).await {
            Ok(image) => Arc::new(image),
            Err(e) => {
                error!("❌ Failed to decode {}: {}", input.display(), e);
                return FileReport::failed();
            }
        };

        let results = futures::future::join_all(
            operations
                .into_iter()
                .map(|op| self.run_operation(op, Arc::clone(&image), input)),
        )
        .await;

        let mut outputs_written = 0;
        let mut output_failures = 0;
        let mut bytes_written = 0u64;
        for result in results {
            match result {
                Some(size) => {
                    outputs_written += 1;
                    bytes_written += size;
                }
                None => output_failures += 1,
            }
        }

        FileReport {
            kind: ReportKind::Converted,
            outputs_written,
            output_failures,
            bytes_written,
        }
    }

    /// Esegue una singola operazione: encode sul blocking pool, poi write.
    /// Ritorna la dimensione scritta, o `None` se l'operazione è fallita
    /// (già loggato; le sibling non sono toccate).
    async fn run_operation(
        &self,
        op: Operation,
        image: Arc<DynamicImage>,
        input: &Path,
    ) -> Option<u64> {
        let output_path = op.output_path(input, &self.options.output_dir);

        let encoded = match tokio::task::spawn_blocking(move || op.encode(&image)).await {
            Ok(Ok(bytes)) => bytes,
            Ok(Err(e)) => {
                error!("❌ {} failed for {}: {}", op.describe(), input.display(), e);
                return None;
            }
            Err(e) => {
                error!("❌ {} task failed for {}: {}", op.describe(), input.display(), e);
                return None;
            }
        };

        let size = encoded.len() as u64;
        match tokio::fs::write(&output_path, encoded).await {
            Ok(()) => {
                info!("✅ {} ({:.1} KB)", output_path.display(), size as f64 / 1024.0);
                Some(size)
            }
            Err(e) => {
                error!("❌ Failed to write {}: {}", output_path.display(), e);
                None
            }
        }
    }
}

/// Decode an image off the async runtime
async fn decode(input: &Path) -> Result<DynamicImage, ConvertError> {
    let path = input.to_path_buf();
    tokio::task::spawn_blocking(move || image::open(path).map_err(ConvertError::from))
        .await
        .map_err(|e| ConvertError::Validation(format!("decode task failed: {e}")))?
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn options_for(temp: &TempDir) -> ConversionOptions {
        ConversionOptions {
            source_dir: temp.path().join("src"),
            output_dir: temp.path().join("out"),
            ..Default::default()
        }
    }

    async fn prepare(temp: &TempDir) -> (PathBuf, PathBuf) {
        let src = temp.path().join("src");
        let out = temp.path().join("out");
        tokio::fs::create_dir_all(&src).await.unwrap();
        tokio::fs::create_dir_all(&out).await.unwrap();
        (src, out)
    }

    #[tokio::test]
    async fn test_no_extension_yields_no_outputs() {
        let temp = TempDir::new().unwrap();
        let (src, out) = prepare(&temp).await;
        let input = src.join("README");
        tokio::fs::write(&input, b"not an image").await.unwrap();

        let converter = FileConverter::new(Arc::new(options_for(&temp)));
        let report = converter.process_file(&input).await;

        assert_eq!(report.kind, ReportKind::Skipped);
        assert_eq!(report.outputs_written, 0);
        let mut entries = tokio::fs::read_dir(&out).await.unwrap();
        assert!(entries.next_entry().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_svg_copied_byte_identical() {
        let temp = TempDir::new().unwrap();
        let (src, out) = prepare(&temp).await;
        let payload = b"<svg xmlns=\"http://www.w3.org/2000/svg\"><rect/></svg>".to_vec();
        let input = src.join("logo.svg");
        tokio::fs::write(&input, &payload).await.unwrap();

        let converter = FileConverter::new(Arc::new(options_for(&temp)));
        let report = converter.process_file(&input).await;

        assert_eq!(report.kind, ReportKind::Copied);
        let copied = tokio::fs::read(out.join("logo.svg")).await.unwrap();
        assert_eq!(copied, payload);
    }

    #[tokio::test]
    async fn test_unrecognized_extension_skips_only_optimize() {
        let temp = TempDir::new().unwrap();
        let (src, out) = prepare(&temp).await;

        // Optimize has no preset for .bmp, but the PNG export still fires.
        // BMP decoding is not compiled in, so decode failures would mask the
        // dispatch behavior; use a PNG payload under a .webp extension instead.
        let img = image::RgbImage::from_pixel(4, 4, image::Rgb([9, 120, 33]));
        let input = src.join("texture.webp");
        img.save_with_format(&input, image::ImageFormat::Png)
            .unwrap();

        let options = ConversionOptions {
            webp: false,
            avif: false,
            jpeg: false,
            ..options_for(&temp)
        };
        let converter = FileConverter::new(Arc::new(options));
        let report = converter.process_file(&input).await;

        assert_eq!(report.kind, ReportKind::Converted);
        assert_eq!(report.outputs_written, 1);
        assert!(out.join("texture.png").exists());
        // No same-name optimized output was produced
        assert!(!out.join("texture.webp").exists());
    }

    #[tokio::test]
    async fn test_corrupt_file_fails_without_writing() {
        let temp = TempDir::new().unwrap();
        let (src, out) = prepare(&temp).await;
        let input = src.join("broken.jpg");
        tokio::fs::write(&input, b"definitely not a jpeg").await.unwrap();

        let converter = FileConverter::new(Arc::new(options_for(&temp)));
        let report = converter.process_file(&input).await;

        assert_eq!(report.kind, ReportKind::Failed);
        let mut entries = tokio::fs::read_dir(&out).await.unwrap();
        assert!(entries.next_entry().await.unwrap().is_none());
    }
}
