use std::io::{BufRead, Seek};

use super::{ContainerFormat, ImageReader, Raster};
use crate::error::Error;

/// Decodes a JPEG or PNG stream into a raster with 16 bits per component.
pub struct CodecImageReader<T: BufRead + Seek> {
    reader: T,
    format: ContainerFormat,
}

impl<T: BufRead + Seek> CodecImageReader<T> {
    pub fn new(reader: T, format: ContainerFormat) -> Self {
        Self { reader, format }
    }
}

impl<T: BufRead + Seek> ImageReader for CodecImageReader<T> {
    fn read_image(&mut self) -> crate::Result<Raster> {
        let decoded = image::ImageReader::with_format(&mut self.reader, self.format.image_format())
            .decode()
            .map_err(Error::DecodingFailed)?;
        log::debug!(
            "Decoded {:?} image with color type {:?}",
            self.format,
            decoded.color()
        );
        Ok(Raster::from(&decoded.into_rgba16()))
    }
}

#[cfg(test)]
mod test {
    use std::io::Cursor;

    use image::{ImageFormat, Rgba, RgbaImage};

    use super::CodecImageReader;
    use crate::{
        color::Color,
        error::Error,
        raster::{ContainerFormat, ImageReader},
    };

    fn encode(image: &RgbaImage, format: ImageFormat) -> Vec<u8> {
        let mut bytes = Cursor::new(Vec::new());
        image.write_to(&mut bytes, format).unwrap();
        bytes.into_inner()
    }

    #[test]
    fn read_png_at_full_range() {
        let image = RgbaImage::from_fn(3, 2, |x, y| Rgba([x as u8, y as u8, 128, 255]));
        let bytes = encode(&image, ImageFormat::Png);
        let mut reader = CodecImageReader::new(Cursor::new(bytes), ContainerFormat::Png);
        let raster = reader.read_image().unwrap();
        assert_eq!(raster.bounds(), (3, 2));
        assert_eq!(raster.dot(2, 1), Color::new(2 * 257, 257, 128 * 257, u16::MAX));
    }

    #[test]
    fn read_jpeg() {
        let image = RgbaImage::from_pixel(9, 4, Rgba([200, 200, 200, 255]));
        let rgb = image::DynamicImage::ImageRgba8(image).into_rgb8();
        let mut bytes = Cursor::new(Vec::new());
        rgb.write_to(&mut bytes, ImageFormat::Jpeg).unwrap();
        let mut reader =
            CodecImageReader::new(Cursor::new(bytes.into_inner()), ContainerFormat::Jpeg);
        let raster = reader.read_image().unwrap();
        assert_eq!(raster.bounds(), (9, 4));
        assert_eq!(raster.dot(0, 0).alpha, u16::MAX, "JPEG must decode opaque");
    }

    #[test]
    fn corrupt_data() {
        let bytes = b"\x89PNG\r\n\x1a\nthis is not a png".to_vec();
        let mut reader = CodecImageReader::new(Cursor::new(bytes), ContainerFormat::Png);
        if let Err(Error::DecodingFailed(_)) = reader.read_image() {
            return;
        }
        panic!("Corrupt PNG data not detected");
    }

    #[test]
    fn truncated_stream() {
        let image = RgbaImage::from_pixel(16, 16, Rgba([1, 2, 3, 4]));
        let mut bytes = encode(&image, ImageFormat::Png);
        bytes.truncate(bytes.len() / 2);
        let mut reader = CodecImageReader::new(Cursor::new(bytes), ContainerFormat::Png);
        assert!(
            matches!(reader.read_image(), Err(Error::DecodingFailed(_))),
            "Truncated PNG stream not detected"
        );
    }
}
