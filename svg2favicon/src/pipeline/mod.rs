pub mod pack;
pub mod raster;
pub(crate) mod render;

use crate::error::FaviconError;
use std::path::{Path, PathBuf};

/// Edge length of the intermediate raster, in pixels.
pub const RASTER_SIZE: u32 = 512;

/// Square sizes embedded in the output ICO.
pub const ICO_SIZES: [u32; 4] = [16, 32, 48, 64];

pub const DEFAULT_SVG_PATH: &str = "public/placeholder.svg";
pub const DEFAULT_PNG_PATH: &str = "public/favicon_src.png";
pub const DEFAULT_ICO_PATH: &str = "public/favicon.ico";

/// One-shot SVG to favicon pipeline: rasterize the SVG to a large
/// intermediate PNG, then pack resized copies of it into a multi-size ICO.
///
/// The intermediate PNG is left on disk after a successful run.
pub struct FaviconPipeline {
    svg_path: PathBuf,
    png_path: PathBuf,
    ico_path: PathBuf,
}

impl FaviconPipeline {
    pub fn new(
        svg_path: impl Into<PathBuf>,
        png_path: impl Into<PathBuf>,
        ico_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            svg_path: svg_path.into(),
            png_path: png_path.into(),
            ico_path: ico_path.into(),
        }
    }

    /// Runs both steps in order and returns the ICO path on success.
    ///
    /// A failure while rasterizing aborts before the packer runs, so a
    /// missing or malformed SVG never produces a partial ICO.
    pub fn run(&self) -> Result<&Path, FaviconError> {
        tracing::debug!(
            "Rasterizing {} to {}x{} PNG at {}",
            self.svg_path.display(),
            RASTER_SIZE,
            RASTER_SIZE,
            self.png_path.display()
        );
        raster::rasterize(&self.svg_path, &self.png_path, RASTER_SIZE, RASTER_SIZE)?;

        tracing::debug!(
            "Packing {} into {} with sizes {:?}",
            self.png_path.display(),
            self.ico_path.display(),
            ICO_SIZES
        );
        pack::pack(&self.png_path, &self.ico_path, &ICO_SIZES)?;

        Ok(&self.ico_path)
    }
}

impl Default for FaviconPipeline {
    fn default() -> Self {
        Self::new(DEFAULT_SVG_PATH, DEFAULT_PNG_PATH, DEFAULT_ICO_PATH)
    }
}
