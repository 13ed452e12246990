//! Loading waterfall images from disk.

use std::path::{Path, PathBuf};

use eframe::egui;
use image::RgbaImage;

/// File extensions offered in the open dialog and accepted by [`WaterfallImage::open`].
pub const SUPPORTED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp"];

#[derive(Debug)]
pub enum LoadError {
    UnsupportedFormat(PathBuf),
    Decode { path: PathBuf, source: image::ImageError },
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::UnsupportedFormat(p) => write!(
                f,
                "Unsupported image format {:?} (expected one of: {})",
                p,
                SUPPORTED_EXTENSIONS.join(", ")
            ),
            LoadError::Decode { path, source } => {
                write!(f, "Failed to load image {:?}: {}", path, source)
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Decode { source, .. } => Some(source),
            LoadError::UnsupportedFormat(_) => None,
        }
    }
}

/// Whether `path` carries one of the [`SUPPORTED_EXTENSIONS`] (case-insensitive).
pub fn is_supported(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| {
            let e = e.to_ascii_lowercase();
            SUPPORTED_EXTENSIONS.iter().any(|s| *s == e)
        })
        .unwrap_or(false)
}

/// A decoded spectrogram image.
#[derive(Debug)]
pub struct WaterfallImage {
    pub path: PathBuf,
    pub pixels: RgbaImage,
}

impl WaterfallImage {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        if !is_supported(path) {
            return Err(LoadError::UnsupportedFormat(path.to_path_buf()));
        }
        let img = image::open(path).map_err(|source| LoadError::Decode {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_rgba(path.to_path_buf(), img.to_rgba8()))
    }

    pub fn from_rgba(path: PathBuf, pixels: RgbaImage) -> Self {
        Self { path, pixels }
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// File name for window titles and status messages.
    pub fn display_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| self.path.to_string_lossy().to_string())
    }

    pub fn to_color_image(&self) -> egui::ColorImage {
        let size = [self.pixels.width() as usize, self.pixels.height() as usize];
        egui::ColorImage::from_rgba_unmultiplied(size, self.pixels.as_raw())
    }
}
