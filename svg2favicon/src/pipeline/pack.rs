use crate::error::FaviconError;
use image::imageops::FilterType;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Packs the raster image at `png_path` into an ICO file at `ico_path`,
/// embedding one resized copy per entry in `sizes`.
pub fn pack(png_path: &Path, ico_path: &Path, sizes: &[u32]) -> Result<(), FaviconError> {
    let source = image::open(png_path)?;

    // Generate a new ICO directory
    let mut icon_dir = ico::IconDir::new(ico::ResourceType::Icon);

    for &size in sizes {
        let resized = source.resize_exact(size, size, FilterType::Lanczos3);
        let icon_image = ico::IconImage::from_rgba_data(size, size, resized.to_rgba8().into_raw());

        icon_dir.add_entry(ico::IconDirEntry::encode(&icon_image)?);
    }

    // Write the ICO directory to the output
    let mut writer = BufWriter::new(File::create(ico_path)?);
    icon_dir.write(&mut writer)?;

    Ok(())
}
