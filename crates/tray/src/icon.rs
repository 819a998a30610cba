//! Tray icon resolution and decoding.

use std::path::{Path, PathBuf};

use image::imageops::FilterType;

/// Edge length of the tray icon in logical units.
pub const ICON_EDGE: u32 = 18;

/// Pixels per logical unit the icon is rendered at, so it stays sharp on
/// high-density displays. The status bar scales it down to `ICON_EDGE`.
pub const ICON_SCALE: u32 = 2;

/// Platform-native icon, relative to the resource directory.
#[cfg(target_os = "windows")]
pub const NATIVE_ICON: &str = "icons/icon.ico";
#[cfg(not(target_os = "windows"))]
pub const NATIVE_ICON: &str = "icons/icon.png";

/// Bitmap shipped with the UI assets, relative to the resource directory.
pub const ASSET_ICON: &str = "ui/assets/app_icon.png";

/// Why a single candidate could not be used.
#[derive(Debug, thiserror::Error)]
pub enum IconError {
    #[error("icon not found: {0}")]
    Missing(PathBuf),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Decoded tray image, RGBA8, `edge * scale` pixels square.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrayImage {
    pub rgba: Vec<u8>,
    pub width: u32,
    pub height: u32,
    /// Logical edge length the image is meant to occupy.
    pub edge: u32,
    /// Let the OS recolor the icon for light and dark menu bars.
    pub template: bool,
}

/// Resolves the tray icon from an ordered list of candidate files.
#[derive(Debug, Clone)]
pub struct IconLoader {
    candidates: Vec<PathBuf>,
    edge: u32,
    scale: u32,
    template: bool,
}

impl IconLoader {
    pub fn new(candidates: Vec<PathBuf>) -> Self {
        Self {
            candidates,
            edge: ICON_EDGE,
            scale: ICON_SCALE,
            template: true,
        }
    }

    /// Candidates for an application whose bundled resources live in `dir`:
    /// the native icon first, then the UI asset bitmap.
    pub fn for_resource_dir(dir: &Path) -> Self {
        Self::new(vec![dir.join(NATIVE_ICON), dir.join(ASSET_ICON)])
    }

    pub fn with_edge(mut self, edge: u32) -> Self {
        self.edge = edge;
        self
    }

    /// Pixels per logical unit; clamped to at least 1.
    pub fn with_scale(mut self, scale: u32) -> Self {
        self.scale = scale.max(1);
        self
    }

    pub fn with_template(mut self, template: bool) -> Self {
        self.template = template;
        self
    }

    pub fn candidates(&self) -> &[PathBuf] {
        &self.candidates
    }

    /// Loads the first candidate that exists and decodes.
    ///
    /// Returns `None` when every candidate fails; the tray then shows an
    /// empty slot.
    pub fn load(&self) -> Option<TrayImage> {
        for path in &self.candidates {
            match self.load_candidate(path) {
                Ok(image) => {
                    tracing::debug!(path = %path.display(), "loaded tray icon");
                    return Some(image);
                }
                Err(e) => tracing::debug!("skipping tray icon candidate: {e}"),
            }
        }

        tracing::warn!(
            candidates = self.candidates.len(),
            "tray icon could not be loaded, continuing without an image"
        );
        None
    }

    fn load_candidate(&self, path: &Path) -> Result<TrayImage, IconError> {
        if !path.is_file() {
            return Err(IconError::Missing(path.to_path_buf()));
        }

        let bytes = std::fs::read(path).map_err(|source| IconError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let decoded = image::load_from_memory(&bytes).map_err(|source| IconError::Decode {
            path: path.to_path_buf(),
            source,
        })?;

        let pixels = self.edge * self.scale;
        let rgba = decoded
            .resize_exact(pixels, pixels, FilterType::Lanczos3)
            .to_rgba8();
        let (width, height) = rgba.dimensions();

        Ok(TrayImage {
            rgba: rgba.into_raw(),
            width,
            height,
            edge: self.edge,
            template: self.template,
        })
    }
}
