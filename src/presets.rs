//! # Format Presets Module
//!
//! Parametri statici di encoding per ogni formato target.
//! Sono configurazione, non stato: nessun valore cambia durante una run.
//!
//! | Formato | Opzioni |
//! |---------|---------|
//! | JPEG    | quality 70, entropy coding ottimizzato |
//! | PNG     | effort 10, quality 70, compression level 9 |
//! | GIF     | 256 colori |
//! | WebP    | quality 70, alpha quality 0 |
//! | AVIF    | quality 50 |

/// JPEG encode parameters
#[derive(Debug, Clone, Copy)]
pub struct JpegPreset {
    /// Quality (1-100)
    pub quality: u8,
    /// Use optimized entropy coding tables. Pinned contract value: the
    /// encoder exposes no coding-table switch and always picks its own
    pub optimize_coding: bool,
}

/// PNG encode parameters
#[derive(Debug, Clone, Copy)]
pub struct PngPreset {
    /// CPU effort (1-10, higher = slower and smaller). Pinned contract
    /// value, not an encoder knob
    pub effort: u8,
    /// Palette quality target (1-100). Pinned contract value; the PNG
    /// re-encode stays lossless
    pub quality: u8,
    /// zlib compression level (0-9)
    pub compression_level: u8,
}

/// GIF encode parameters
#[derive(Debug, Clone, Copy)]
pub struct GifPreset {
    /// Palette size; GIF caps at 256. Pinned contract value, the encoder
    /// always emits a full palette
    pub colors: u16,
}

/// WebP encode parameters
#[derive(Debug, Clone, Copy)]
pub struct WebpPreset {
    /// Quality (1-100)
    pub quality: u8,
    /// Alpha channel quality (0-100); 0 drops alpha fidelity for size
    pub alpha_quality: u8,
}

/// AVIF encode parameters
#[derive(Debug, Clone, Copy)]
pub struct AvifPreset {
    /// Quality (1-100)
    pub quality: u8,
    /// Encoder speed (1-10, higher = faster and larger)
    pub speed: u8,
}

pub const JPEG: JpegPreset = JpegPreset {
    quality: 70,
    optimize_coding: true,
};

pub const PNG: PngPreset = PngPreset {
    effort: 10,
    quality: 70,
    compression_level: 9,
};

pub const GIF: GifPreset = GifPreset { colors: 256 };

pub const WEBP: WebpPreset = WebpPreset {
    quality: 70,
    alpha_quality: 0,
};

pub const AVIF: AvifPreset = AvifPreset {
    quality: 50,
    speed: 6,
};
