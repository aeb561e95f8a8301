//! Output encoding for rendered documents.
//!
//! SVG is written as-is; PNG goes through the [`Rasterizer`](crate::raster::Rasterizer).

use crate::errors::{RenderError, Result};
use std::io::Write;
use tracing::instrument;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Svg,
    Png,
}

impl ImageFormat {
    /// Get the file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            ImageFormat::Svg => "svg",
            ImageFormat::Png => "png",
        }
    }
}

/// Encoder trait for different output formats.
pub trait Encoder {
    /// Encode the given SVG data to the target format.
    fn encode(&self, svg_data: &str, writer: &mut dyn Write) -> Result<()>;
}

/// SVG encoder that writes the document unchanged.
#[derive(Debug, Default)]
pub struct SvgEncoder;

impl SvgEncoder {
    pub fn new() -> Self {
        Self
    }
}

impl Encoder for SvgEncoder {
    #[instrument(skip(self, svg_data, writer))]
    fn encode(&self, svg_data: &str, writer: &mut dyn Write) -> Result<()> {
        writer.write_all(svg_data.as_bytes())?;
        Ok(())
    }
}

/// PNG encoder using resvg for rasterization.
#[derive(Debug, Default)]
pub struct PngEncoder {
    rasterizer: crate::raster::Rasterizer,
}

impl PngEncoder {
    pub fn new() -> Self {
        Self {
            rasterizer: crate::raster::Rasterizer::new(),
        }
    }
}

impl Encoder for PngEncoder {
    #[instrument(skip(self, svg_data, writer))]
    fn encode(&self, svg_data: &str, writer: &mut dyn Write) -> Result<()> {
        let pixmap = self.rasterizer.render(svg_data)?;

        let mut png_encoder = png::Encoder::new(writer, pixmap.width(), pixmap.height());
        png_encoder.set_color(png::ColorType::Rgba);
        png_encoder.set_depth(png::BitDepth::Eight);

        let mut png_writer = png_encoder
            .write_header()
            .map_err(|e| RenderError::PngWrite(e.to_string()))?;

        png_writer
            .write_image_data(pixmap.data())
            .map_err(|e| RenderError::PngWrite(e.to_string()))?;

        png_writer
            .finish()
            .map_err(|e| RenderError::PngWrite(e.to_string()))?;

        Ok(())
    }
}

/// Enum to hold different encoder types.
#[derive(Debug)]
pub enum EncoderType {
    Svg(SvgEncoder),
    Png(PngEncoder),
}

impl Encoder for EncoderType {
    fn encode(&self, svg_data: &str, writer: &mut dyn Write) -> Result<()> {
        match self {
            EncoderType::Svg(encoder) => encoder.encode(svg_data, writer),
            EncoderType::Png(encoder) => encoder.encode(svg_data, writer),
        }
    }
}

/// Factory function to create an encoder for the specified format.
pub fn create_encoder(format: ImageFormat) -> EncoderType {
    match format {
        ImageFormat::Svg => EncoderType::Svg(SvgEncoder::new()),
        ImageFormat::Png => EncoderType::Png(PngEncoder::new()),
    }
}
