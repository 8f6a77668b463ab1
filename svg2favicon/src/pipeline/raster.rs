use crate::error::FaviconError;
use crate::pipeline::render;
use resvg::usvg;
use resvg::usvg::TreeParsing;
use std::path::Path;

/// Renders the SVG at `svg_path` to a PNG of `width`x`height` pixels at
/// `png_path`, overwriting any existing file.
pub fn rasterize(
    svg_path: &Path,
    png_path: &Path,
    width: u32,
    height: u32,
) -> Result<(), FaviconError> {
    let svg_data = std::fs::read_to_string(svg_path)?;

    // Resolve relative references (images, etc.) against the SVG's directory
    let parse_options = usvg::Options {
        resources_dir: svg_path.parent().map(|p| p.to_path_buf()),
        ..Default::default()
    };

    let tree = usvg::Tree::from_str(&svg_data, &parse_options).map_err(FaviconError::SvgParse)?;

    let pixmap = render::render_svg_to_pixmap(&resvg::Tree::from_usvg(&tree), width, height)?;

    std::fs::write(png_path, pixmap.encode_png()?)?;

    Ok(())
}
