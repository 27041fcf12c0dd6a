//! # Progress Tracking and Statistics Module
//!
//! Questo modulo gestisce il progress tracking e le statistiche di conversione.
//!
//! ## Responsabilità:
//! - Progress bar visual con `indicatif` per feedback real-time
//! - Tracking statistiche di conversione (file elaborati, output scritti, errori)
//! - Report finale aggregato a fine run
//!
//! ## Statistiche tracciate:
//! - **files_processed**: Totale file elaborati
//! - **files_converted**: File passati per la pipeline di conversione
//! - **files_copied**: File vettoriali copiati verbatim
//! - **files_skipped**: File senza estensione (warning, zero output)
//! - **outputs_written** / **output_failures**: Operazioni di encode riuscite/fallite
//! - **total_bytes_written**: Byte totali scritti nella directory di output
//!
//! ## Visual feedback:
//! ```text
//! ⠋ [00:00:12] [================>-----------------------] 61/150 (40%) photo.jpg
//! ```

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Manages the progress bar for a conversion run
#[derive(Clone)]
pub struct ProgressManager {
    bar: ProgressBar,
}

impl ProgressManager {
    /// Create a new progress manager
    pub fn new(total_files: u64) -> Self {
        let bar = ProgressBar::new(total_files);

        bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}")
                .unwrap()
                .progress_chars("=>-"),
        );

        bar.enable_steady_tick(Duration::from_millis(100));

        Self { bar }
    }

    /// Update progress with a message
    pub fn update(&self, message: &str) {
        self.bar.inc(1);
        self.bar.set_message(message.to_string());
    }

    /// Finish with a final message
    pub fn finish(&self, message: &str) {
        self.bar.finish_with_message(message.to_string());
    }
}

/// Get human-readable file size
pub fn format_size(size: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
    let mut size = size as f64;
    let mut unit_index = 0;

    while size >= 1024.0 && unit_index < UNITS.len() - 1 {
        size /= 1024.0;
        unit_index += 1;
    }

    if unit_index == 0 {
        format!("{} {}", size as u64, UNITS[unit_index])
    } else {
        format!("{:.2} {}", size, UNITS[unit_index])
    }
}

/// Statistics tracker for conversion results
#[derive(Debug, Default)]
pub struct ConversionStats {
    pub files_processed: usize,
    pub files_converted: usize,
    pub files_copied: usize,
    pub files_skipped: usize,
    pub files_failed: usize,
    pub outputs_written: usize,
    pub output_failures: usize,
    pub total_bytes_written: u64,
}

impl ConversionStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_converted(&mut self, outputs: usize, failures: usize, bytes_written: u64) {
        self.files_processed += 1;
        self.files_converted += 1;
        self.outputs_written += outputs;
        self.output_failures += failures;
        self.total_bytes_written += bytes_written;
    }

    pub fn add_copied(&mut self, bytes_written: u64) {
        self.files_processed += 1;
        self.files_copied += 1;
        self.outputs_written += 1;
        self.total_bytes_written += bytes_written;
    }

    pub fn add_skipped(&mut self) {
        self.files_processed += 1;
        self.files_skipped += 1;
    }

    pub fn add_failed(&mut self) {
        self.files_processed += 1;
        self.files_failed += 1;
        self.output_failures += 1;
    }

    pub fn format_summary(&self) -> String {
        format!(
            "Processed: {} files | Outputs: {} | Copied: {} | Skipped: {} | Failures: {} | Written: {}",
            self.files_processed,
            self.outputs_written,
            self.files_copied,
            self.files_skipped,
            self.output_failures,
            format_size(self.total_bytes_written),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_accumulation() {
        let mut stats = ConversionStats::new();
        stats.add_converted(5, 0, 10_240);
        stats.add_converted(3, 2, 4_096);
        stats.add_copied(512);
        stats.add_skipped();
        stats.add_failed();

        assert_eq!(stats.files_processed, 5);
        assert_eq!(stats.files_converted, 2);
        assert_eq!(stats.files_copied, 1);
        assert_eq!(stats.files_skipped, 1);
        assert_eq!(stats.files_failed, 1);
        assert_eq!(stats.outputs_written, 9);
        assert_eq!(stats.output_failures, 3);
        assert_eq!(stats.total_bytes_written, 14_848);
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(2048), "2.00 KB");
        assert_eq!(format_size(5 * 1024 * 1024), "5.00 MB");
    }
}
