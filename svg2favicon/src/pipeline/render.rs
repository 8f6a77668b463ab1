use crate::error::FaviconError;
use resvg::tiny_skia;

/// Renders the SVG into a freshly allocated pixmap of the given dimensions.
///
/// The SVG's intrinsic size is scaled to fill the pixmap on both axes
/// independently, so a non-square document renders with a non-uniform scale.
pub fn render_svg_to_pixmap(
    render_tree: &resvg::Tree,
    target_width: u32,
    target_height: u32,
) -> Result<tiny_skia::Pixmap, FaviconError> {
    let mut pixmap = tiny_skia::Pixmap::new(target_width, target_height).ok_or(
        FaviconError::InvalidPixmapDimensions {
            width: target_width,
            height: target_height,
        },
    )?;

    // Compute the scale factor
    let x_scale = target_width as f32 / render_tree.size.width();
    let y_scale = target_height as f32 / render_tree.size.height();

    let transform = tiny_skia::Transform {
        sx: x_scale,
        sy: y_scale,
        ..Default::default()
    };

    render_tree.render(transform, &mut pixmap.as_mut());

    Ok(pixmap)
}

#[cfg(test)]
mod tests {
    use super::*;
    use resvg::usvg;
    use resvg::usvg::TreeParsing;

    fn render_tree(svg: &str) -> resvg::Tree {
        let tree = usvg::Tree::from_str(svg, &usvg::Options::default()).unwrap();
        resvg::Tree::from_usvg(&tree)
    }

    const SQUARE: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="64" height="64"><rect width="64" height="64" fill="#2a9d8f"/></svg>"##;

    #[test]
    fn pixmap_has_requested_dimensions() {
        let pixmap = render_svg_to_pixmap(&render_tree(SQUARE), 512, 512).unwrap();
        assert_eq!(pixmap.width(), 512);
        assert_eq!(pixmap.height(), 512);
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        let result = render_svg_to_pixmap(&render_tree(SQUARE), 0, 512);
        assert!(matches!(
            result,
            Err(FaviconError::InvalidPixmapDimensions {
                width: 0,
                height: 512
            })
        ));
    }
}
