//! # Error Types Module
//!
//! Questo modulo definisce tutti i tipi di errore custom dell'applicazione.
//!
//! ## Responsabilità:
//! - Definisce `ConvertError` enum per categorizzare tutti gli errori possibili
//! - Fornisce messaggi di errore descrittivi e strutturati
//! - Integra con `thiserror` per automatic error conversion
//!
//! ## Categorie di errori:
//! - `Io`: Errori di I/O (file non trovati, permessi, etc.)
//! - `Image`: Errori di decodifica/encoding immagini (formati corrotti, etc.)
//! - `WebpEncode`: Errori dell'encoder WebP (libwebp)
//! - `UnsupportedFormat`: Estensione non riconosciuta per l'ottimizzazione
//! - `Validation`: Errori di validazione input
//!
//! Nessun errore è fatale per l'intera esecuzione: ogni fallimento resta
//! confinato alla singola operazione che lo ha prodotto e viene loggato.

/// Custom error types for batch image conversion
#[derive(thiserror::Error, Debug)]
pub enum ConvertError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image processing error: {0}")]
    Image(#[from] image::ImageError),

    #[error("WebP encoding error: {0}")]
    WebpEncode(String),

    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    #[error("File validation error: {0}")]
    Validation(String),
}
