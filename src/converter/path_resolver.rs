//! # Path Resolution Module
//!
//! Centralizza tutta la logica di calcolo dei path di output.
//!
//! Gli output sono appiattiti: qualunque sia la profondità del file nella
//! directory sorgente, nella directory di output finisce solo il basename.
//! Comportamento intenzionale della pipeline (le pagine referenziano gli
//! asset per basename), da non "correggere".

use anyhow::Result;
use std::path::{Path, PathBuf};

/// Utility per calcolare i path di output in modo centralizzato
pub struct PathResolver;

impl PathResolver {
    /// Output path for the optimize-in-place step: original filename kept,
    /// extension included, directly under the output root.
    pub fn optimized_output(input: &Path, output_dir: &Path) -> PathBuf {
        output_dir.join(input.file_name().unwrap_or_default())
    }

    /// Output path for a format export: basename with the extension replaced,
    /// directly under the output root.
    pub fn export_output(input: &Path, output_dir: &Path, extension: &str) -> PathBuf {
        let stem = input.file_stem().unwrap_or_default();
        output_dir.join(format!("{}.{}", stem.to_string_lossy(), extension))
    }

    /// Create the output directory if missing
    pub async fn ensure_output_dir(dir: &Path) -> Result<()> {
        tokio::fs::create_dir_all(dir).await.map_err(|e| {
            anyhow::anyhow!("Failed to create output directory {}: {}", dir.display(), e)
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optimized_output_keeps_original_name() {
        let out = PathResolver::optimized_output(Path::new("/src/photos/photo.JPG"), Path::new("/dest"));
        assert_eq!(out, PathBuf::from("/dest/photo.JPG"));
    }

    #[test]
    fn test_export_output_replaces_extension() {
        let out = PathResolver::export_output(Path::new("/src/photo.JPG"), Path::new("/dest"), "webp");
        assert_eq!(out, PathBuf::from("/dest/photo.webp"));
    }

    #[test]
    fn test_nested_inputs_are_flattened() {
        // Subdirectory structure is deliberately not mirrored
        let out = PathResolver::export_output(
            Path::new("/src/2023/vacation/beach/IMG_01.png"),
            Path::new("/dest"),
            "avif",
        );
        assert_eq!(out, PathBuf::from("/dest/IMG_01.avif"));

        let out = PathResolver::optimized_output(
            Path::new("/src/2023/vacation/beach/IMG_01.png"),
            Path::new("/dest"),
        );
        assert_eq!(out, PathBuf::from("/dest/IMG_01.png"));
    }
}
