//! # Batch Converter Main Orchestrator
//!
//! Orchestratore principale: traversal completa prima, poi conversione
//! concorrente di ogni file scoperto. Delega il lavoro per-file a
//! `FileConverter`.

use crate::{
    config::ConversionOptions,
    converter::{
        file_converter::{FileConverter, ReportKind},
        path_resolver::PathResolver,
    },
    progress::{ConversionStats, ProgressManager},
    walker,
};
use anyhow::Result;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tracing::{error, info};

/// Orchestratore principale della conversione batch
pub struct BatchConverter {
    options: Arc<ConversionOptions>,
}

impl BatchConverter {
    /// Crea nuova istanza del converter
    pub fn new(options: ConversionOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self {
            options: Arc::new(options),
        })
    }

    /// Esegue l'intera run di conversione.
    ///
    /// Nessun errore per-file è fatale: la run termina sempre dopo che tutte
    /// le operazioni pendenti sono risolte e ritorna le statistiche aggregate.
    pub async fn run(&self) -> Result<ConversionStats> {
        let start_time = std::time::Instant::now();

        PathResolver::ensure_output_dir(&self.options.output_dir).await?;

        // La traversal completa prima che qualunque conversione parta
        let files = walker::collect_files(&self.options.source_dir).await;

        self.log_configuration(files.len());

        if files.is_empty() {
            info!("No files found to process");
            return Ok(ConversionStats::new());
        }

        let progress = ProgressManager::new(files.len() as u64);
        let semaphore = Arc::new(Semaphore::new(self.options.workers));
        let mut tasks = Vec::with_capacity(files.len());

        for file in files {
            let permit = semaphore.clone().acquire_owned().await?;
            let converter = FileConverter::new(Arc::clone(&self.options));
            let progress = progress.clone();

            tasks.push(tokio::spawn(async move {
                let _permit = permit;
                let report = converter.process_file(&file).await;
                let name = file.file_name().unwrap_or_default().to_string_lossy().to_string();
                progress.update(&name);
                report
            }));
        }

        let mut stats = ConversionStats::new();
        for task in tasks {
            match task.await {
                Ok(report) => match report.kind {
                    ReportKind::Converted => stats.add_converted(
                        report.outputs_written,
                        report.output_failures,
                        report.bytes_written,
                    ),
                    ReportKind::Copied => stats.add_copied(report.bytes_written),
                    ReportKind::Skipped => stats.add_skipped(),
                    ReportKind::Failed => stats.add_failed(),
                },
                Err(e) => {
                    stats.add_failed();
                    error!("File task panicked: {}", e);
                }
            }
        }

        progress.finish(&stats.format_summary());
        self.log_final_stats(&stats, start_time.elapsed().as_secs_f64());

        Ok(stats)
    }

    /// Logga la configurazione della run
    fn log_configuration(&self, file_count: usize) {
        info!("Starting image conversion in: {}", self.options.source_dir.display());
        info!("Output directory: {}", self.options.output_dir.display());

        let enabled: Vec<&str> = [
            ("optimize", self.options.optimize),
            ("webp", self.options.webp),
            ("avif", self.options.avif),
            ("jpg", self.options.jpeg),
            ("png", self.options.png),
        ]
        .iter()
        .filter(|(_, on)| *on)
        .map(|(name, _)| *name)
        .collect();

        if self.options.all_disabled() {
            info!("Operations: none enabled (files will only be classified)");
        } else {
            info!("Operations: {}", enabled.join(", "));
        }
        info!("Workers: {}", self.options.workers);
        info!("Found {} files to process", file_count);
    }

    /// Stampa statistiche finali
    fn log_final_stats(&self, stats: &ConversionStats, duration: f64) {
        info!("=== Conversion Complete ===");
        info!("Files processed: {}", stats.files_processed);
        info!("Files converted: {}", stats.files_converted);
        info!("Files copied: {}", stats.files_copied);
        info!("Files skipped: {}", stats.files_skipped);
        info!("Outputs written: {}", stats.outputs_written);
        info!("Output failures: {}", stats.output_failures);
        info!("Bytes written: {}", crate::progress::format_size(stats.total_bytes_written));
        info!("Duration: {:.2}s", duration);
    }
}
