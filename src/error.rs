use std::fmt::Display;

#[derive(Debug)]
pub enum Error {
    InvalidArguments(clap::Error),
    InputFileNotFound(String),
    NoReadPermissionForInputFile(String),
    UnableToOpenInputFileForReading(String, std::io::Error),
    UnableToOpenOutputFileForWriting(String, std::io::Error),
    UnsupportedInputFormat(String),
    UnsupportedOutputFormat(String),
    DecodingFailed(image::ImageError),
    EncodingFailed(image::ImageError),
    FailedToFlushOutput(std::io::Error),
    EmptyRaster(u32, u32),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidArguments(error) => {
                write!(f, "Invalid command line arguments: {}", error)
            }
            Self::InputFileNotFound(path) => {
                write!(f, "Input file '{}' not found", path)
            }
            Self::NoReadPermissionForInputFile(path) => {
                write!(
                    f,
                    "Unable open file '{}' for reading. Permission denied.",
                    path
                )
            }
            Self::UnableToOpenInputFileForReading(path, error) => {
                write!(
                    f,
                    "Unable to open input file '{}' for reading: {}",
                    path, error
                )
            }
            Self::UnableToOpenOutputFileForWriting(path, error) => {
                write!(
                    f,
                    "Unable to open output file '{}' for writing: {}",
                    path, error
                )
            }
            Self::UnsupportedInputFormat(path) => {
                write!(f, "Unsupported input type: {}", path)
            }
            Self::UnsupportedOutputFormat(path) => {
                write!(f, "Unsupported output type: {}", path)
            }
            Self::DecodingFailed(error) => write!(f, "Failed to decode image: {}", error),
            Self::EncodingFailed(error) => write!(f, "Failed to encode image: {}", error),
            Self::FailedToFlushOutput(error) => {
                write!(f, "Failed to flush output: {}", error)
            }
            Self::EmptyRaster(width, height) => {
                write!(
                    f,
                    "Refusing to write an empty raster of size {}x{}",
                    width, height
                )
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<clap::Error> for Error {
    fn from(value: clap::Error) -> Self {
        Self::InvalidArguments(value)
    }
}
