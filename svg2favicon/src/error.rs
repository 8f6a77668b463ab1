use resvg::usvg;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FaviconError {
    #[error("an I/O error occurred: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse SVG: {0}")]
    SvgParse(usvg::Error),

    #[error("the pixmap dimensions are invalid: {width}x{height}")]
    InvalidPixmapDimensions { width: u32, height: u32 },

    #[error("an error occurred while encoding the PNG: {0}")]
    PngEncoding(#[from] png::EncodingError),

    #[error("an error occurred while decoding the raster image: {0}")]
    ImageDecode(#[from] image::ImageError),
}
