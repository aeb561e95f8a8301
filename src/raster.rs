//! SVG rasterization for PNG output.

use crate::encode::ImageFormat;
use crate::errors::{RenderError, Result};
use std::sync::Arc;
use tracing::instrument;

/// SVG to pixmap rasterizer with font support.
#[derive(Debug)]
pub struct Rasterizer {
    font_db: Arc<usvg::fontdb::Database>,
}

impl Rasterizer {
    #[instrument]
    pub fn new() -> Self {
        let mut fontdb = usvg::fontdb::Database::new();
        fontdb.load_system_fonts();

        Self {
            font_db: Arc::new(fontdb),
        }
    }

    /// Parses `svg_data`, failing if it is not a well-formed SVG document.
    pub fn parse(&self, svg_data: &str) -> Result<usvg::Tree> {
        let options = usvg::Options {
            fontdb: Arc::clone(&self.font_db),
            ..Default::default()
        };

        usvg::Tree::from_str(svg_data, &options)
            .map_err(|e| RenderError::SvgParse(e.to_string()).into())
    }

    /// Renders the document at its own size.
    #[instrument(skip(self, svg_data))]
    pub fn render(&self, svg_data: &str) -> Result<tiny_skia::Pixmap> {
        let start_time = std::time::Instant::now();
        let tree = self.parse(svg_data)?;

        let size = tree.size().to_int_size();
        let (width, height) = (size.width(), size.height());

        let mut pixmap = tiny_skia::Pixmap::new(width, height).ok_or_else(|| {
            RenderError::PixmapCreation(format!("invalid pixmap size {}x{}", width, height))
        })?;

        resvg::render(
            &tree,
            tiny_skia::Transform::default(),
            &mut pixmap.as_mut(),
        );

        tracing::debug!(
            "SVG rasterization completed in {}ms (output: {}x{})",
            start_time.elapsed().as_millis(),
            width,
            height
        );

        Ok(pixmap)
    }
}

impl Default for Rasterizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Parses a file extension to determine the output format.
///
/// # Returns
/// Some(ImageFormat) if the extension is supported, None otherwise
pub fn parse_extension(extension: &str) -> Option<ImageFormat> {
    match extension.to_lowercase().as_str() {
        "png" => Some(ImageFormat::Png),
        "svg" => Some(ImageFormat::Svg),
        _ => None,
    }
}
