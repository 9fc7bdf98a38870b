use std::{
    ffi::OsString,
    fs::{File, OpenOptions},
    io::{BufReader, BufWriter, ErrorKind},
    path::{Path, PathBuf},
};

pub use cli::CLIParser;
pub use color::{Channel, Color};
pub use error::Error;
pub use raster::{
    reader::CodecImageReader,
    splitter::{ChannelSplitter, SplitChannels},
    writer::{JpegImageWriter, PngImageWriter},
    ContainerFormat, ImageReader, ImageWriter, Raster,
};

mod cli;
mod color;
mod error;
mod logger;
pub mod raster;

pub type Result<T> = std::result::Result<T, error::Error>;

const OUTPUT_EXTENSION: &str = "jpg";

pub struct Arguments {
    input_file: PathBuf,
}

impl Arguments {
    pub fn input_file(&self) -> &Path {
        &self.input_file
    }
}

fn display_path(file_path: &Path) -> String {
    file_path.display().to_string()
}

fn open_input_file(file_path: &Path) -> Result<File> {
    File::open(file_path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => Error::InputFileNotFound(display_path(file_path)),
        ErrorKind::PermissionDenied => Error::NoReadPermissionForInputFile(display_path(file_path)),
        _ => Error::UnableToOpenInputFileForReading(display_path(file_path), e),
    })
}

fn open_output_file(file_path: &Path) -> Result<File> {
    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(file_path)
        .map_err(|e| Error::UnableToOpenOutputFileForWriting(display_path(file_path), e))
}

/// Opens the file first, then picks the decoder by extension.
pub fn read_raster(file_path: &Path) -> Result<Raster> {
    let input_file = open_input_file(file_path)?;
    let format = ContainerFormat::from_input_path(file_path)?;
    log::debug!("Reading {} as {:?}", file_path.display(), format);
    let mut reader = CodecImageReader::new(BufReader::new(input_file), format);
    let raster = reader.read_image()?;
    logger::log_raster("Decoded", &raster);
    Ok(raster)
}

/// The destination is only created once format and raster were accepted.
pub fn write_raster(file_path: &Path, raster: &Raster) -> Result<()> {
    let format = ContainerFormat::from_output_path(file_path)?;
    raster::writer::ensure_writable(raster)?;
    let output_file = open_output_file(file_path)?;
    let mut output_file_writer = BufWriter::new(output_file);
    raster::writer::writer_for(format, &mut output_file_writer, raster).write_image()?;
    log::info!("Wrote {}", file_path.display());
    Ok(())
}

/// Strips the last extension of `input_file` and appends `-<channel>.jpg`
/// for each channel. A dotfile such as `.png` leaves an empty base name.
pub fn output_paths(input_file: &Path) -> [(Channel, PathBuf); 4] {
    let directory = input_file.parent().unwrap_or(Path::new(""));
    let stem = raster::stem_of(input_file);
    Channel::ALL.map(|channel| {
        let mut file_name = OsString::from(stem);
        file_name.push(format!("-{}.{}", channel.name(), OUTPUT_EXTENSION));
        (channel, directory.join(file_name))
    })
}

pub fn split_image_channels(arguments: &Arguments) -> Result<()> {
    let source = read_raster(&arguments.input_file).inspect_err(|e| log::debug!("{}", e))?;
    log::info!(
        "Read {} with bounds {:?}",
        arguments.input_file.display(),
        source.bounds()
    );
    let channels = ChannelSplitter::new(source).split();
    for (channel, output_file) in output_paths(&arguments.input_file) {
        let raster = channels.channel(channel);
        logger::log_raster(channel.name(), raster);
        write_raster(&output_file, raster).inspect_err(|e| log::debug!("{}", e))?;
    }
    Ok(())
}
