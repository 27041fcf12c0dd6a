//! # Converter Module
//!
//! Modulo che separa le responsabilità della conversione in sottomoduli:
//! - `batch_converter`: Orchestratore principale
//! - `file_converter`: Worker per singoli file
//! - `path_resolver`: Logica di calcolo path centralizzata

pub mod batch_converter;
pub mod file_converter;
pub mod path_resolver;

pub use batch_converter::BatchConverter;
pub use file_converter::{FileConverter, FileReport, ReportKind};
pub use path_resolver::PathResolver;
