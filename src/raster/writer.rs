use std::io::Write;

use image::{
    codecs::{jpeg::JpegEncoder, png::PngEncoder},
    DynamicImage, ExtendedColorType, ImageEncoder,
};

use super::{ContainerFormat, ImageWriter, Raster};
use crate::error::Error;

pub const JPEG_QUALITY: u8 = 100;

/// Neither container can hold an image without pixels.
pub fn ensure_writable(raster: &Raster) -> crate::Result<()> {
    if raster.is_empty() {
        return Err(Error::EmptyRaster(raster.width(), raster.height()));
    }
    Ok(())
}

/// Picks the writer matching `format`.
pub fn writer_for<'a, T: Write + 'a>(
    format: ContainerFormat,
    writer: T,
    raster: &'a Raster,
) -> Box<dyn ImageWriter + 'a> {
    match format {
        ContainerFormat::Jpeg => Box::new(JpegImageWriter::new(writer, raster)),
        ContainerFormat::Png => Box::new(PngImageWriter::new(writer, raster)),
    }
}

/// Writes 8 bit RGB at maximum quality. The alpha component is dropped.
pub struct JpegImageWriter<'a, T: Write> {
    writer: T,
    raster: &'a Raster,
}

impl<'a, T: Write> JpegImageWriter<'a, T> {
    pub fn new(writer: T, raster: &'a Raster) -> Self {
        Self { writer, raster }
    }
}

impl<T: Write> ImageWriter for JpegImageWriter<'_, T> {
    fn write_image(&mut self) -> crate::Result<()> {
        ensure_writable(self.raster)?;
        let image = DynamicImage::ImageRgba16(self.raster.to_rgba16_image()).into_rgb8();
        JpegEncoder::new_with_quality(&mut self.writer, JPEG_QUALITY)
            .write_image(
                image.as_raw(),
                image.width(),
                image.height(),
                ExtendedColorType::Rgb8,
            )
            .map_err(Error::EncodingFailed)?;
        self.writer.flush().map_err(Error::FailedToFlushOutput)
    }
}

/// Writes lossless 8 bit RGBA with default compression.
pub struct PngImageWriter<'a, T: Write> {
    writer: T,
    raster: &'a Raster,
}

impl<'a, T: Write> PngImageWriter<'a, T> {
    pub fn new(writer: T, raster: &'a Raster) -> Self {
        Self { writer, raster }
    }
}

impl<T: Write> ImageWriter for PngImageWriter<'_, T> {
    fn write_image(&mut self) -> crate::Result<()> {
        ensure_writable(self.raster)?;
        let image = DynamicImage::ImageRgba16(self.raster.to_rgba16_image()).into_rgba8();
        PngEncoder::new(&mut self.writer)
            .write_image(
                image.as_raw(),
                image.width(),
                image.height(),
                ExtendedColorType::Rgba8,
            )
            .map_err(Error::EncodingFailed)?;
        self.writer.flush().map_err(Error::FailedToFlushOutput)
    }
}
