pub mod error;
pub mod pipeline;

pub use error::FaviconError;
pub use pipeline::FaviconPipeline;
