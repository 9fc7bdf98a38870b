use std::ffi::OsStr;
use std::path::Path;

use image::{ImageBuffer, Rgba};

use crate::color::Color;
use crate::error::Error;

pub mod reader;
pub mod splitter;
pub mod writer;

pub type Rgba16Image = ImageBuffer<Rgba<u16>, Vec<u16>>;

pub trait ImageReader {
    fn read_image(&mut self) -> crate::Result<Raster>;
}

pub trait ImageWriter {
    fn write_image(&mut self) -> crate::Result<()>;
}

/// Row major grid of dots, origin at (0, 0).
#[derive(Clone, Debug, PartialEq)]
pub struct Raster {
    width: u32,
    height: u32,
    dots: Vec<Color>,
}

impl Raster {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            dots: vec![Color::default(); width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Maximum x and y of the raster, which equal its size as the origin is fixed.
    pub fn bounds(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn is_empty(&self) -> bool {
        self.dots.is_empty()
    }

    pub fn dots(&self) -> &[Color] {
        &self.dots
    }

    pub fn dot(&self, column_index: u32, row_index: u32) -> Color {
        self.dots[self.index(column_index, row_index)]
    }

    pub fn set_dot(&mut self, column_index: u32, row_index: u32, color: Color) {
        let index = self.index(column_index, row_index);
        self.dots[index] = color;
    }

    fn index(&self, column_index: u32, row_index: u32) -> usize {
        assert!(
            column_index < self.width && row_index < self.height,
            "Dot ({}, {}) outside of raster of size {}x{}",
            column_index,
            row_index,
            self.width,
            self.height
        );
        column_index as usize + row_index as usize * self.width as usize
    }

    pub fn to_rgba16_image(&self) -> Rgba16Image {
        ImageBuffer::from_fn(self.width, self.height, |x, y| {
            Rgba(<[u16; 4]>::from(self.dot(x, y)))
        })
    }
}

impl From<&Rgba16Image> for Raster {
    fn from(value: &Rgba16Image) -> Self {
        let (width, height) = value.dimensions();
        Self {
            width,
            height,
            dots: value.pixels().map(|pixel| Color::from(pixel.0)).collect(),
        }
    }
}

/// Container formats understood on either side of the conversion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContainerFormat {
    Jpeg,
    Png,
}

impl ContainerFormat {
    /// Extension is matched ignoring ASCII case, `jpg` and `jpeg` both select JPEG.
    pub fn from_input_path(path: &Path) -> crate::Result<Self> {
        let extension = extension_of(path).to_ascii_lowercase();
        match extension.as_str() {
            "jpg" | "jpeg" => Ok(Self::Jpeg),
            "png" => Ok(Self::Png),
            _ => Err(Error::UnsupportedInputFormat(path.display().to_string())),
        }
    }

    /// Extension is matched exactly. Only `jpg` selects JPEG, unlike on input.
    pub fn from_output_path(path: &Path) -> crate::Result<Self> {
        match extension_of(path).as_str() {
            "jpg" => Ok(Self::Jpeg),
            "png" => Ok(Self::Png),
            _ => Err(Error::UnsupportedOutputFormat(path.display().to_string())),
        }
    }

    pub fn image_format(&self) -> image::ImageFormat {
        match self {
            Self::Jpeg => image::ImageFormat::Jpeg,
            Self::Png => image::ImageFormat::Png,
        }
    }
}

/// Text after the last dot of the file name. A file name with only a
/// leading dot, such as `.png`, is all extension.
fn extension_of(path: &Path) -> String {
    path.extension()
        .or_else(|| dotfile_extension(path))
        .map(|extension| extension.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn dotfile_extension(path: &Path) -> Option<&OsStr> {
    if path.extension().is_some() {
        return None;
    }
    path.file_name()?
        .to_str()?
        .strip_prefix('.')
        .map(OsStr::new)
}

/// File name of `path` without the extension found by [`ContainerFormat`],
/// empty for a dotfile.
pub fn stem_of(path: &Path) -> &OsStr {
    if dotfile_extension(path).is_some() {
        return OsStr::new("");
    }
    path.file_stem().unwrap_or_default()
}
