use log::LevelFilter;
use log4rs::{
    append::console::{ConsoleAppender, Target},
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
    Config,
};

use crate::raster::Raster;

const CONFIG_FILE: &str = "log4rs.yaml";
const STDERR_APPENDER_NAME: &str = "stderr";
const DEFAULT_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} {h({l})} {t} - {m}{n}";

#[ctor::ctor]
fn init() {
    if log4rs::init_file(CONFIG_FILE, Default::default()).is_ok() {
        return;
    }
    if let Ok(config) = default_config() {
        // A logger installed earlier in the process stays in place.
        let _ = log4rs::init_config(config);
    }
}

fn default_config() -> Result<Config, log4rs::config::runtime::ConfigErrors> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(DEFAULT_PATTERN)))
        .build();
    Config::builder()
        .appender(Appender::builder().build(STDERR_APPENDER_NAME, Box::new(stderr)))
        .build(
            Root::builder()
                .appender(STDERR_APPENDER_NAME)
                .build(LevelFilter::Warn),
        )
}

pub fn log_raster(stage: &str, raster: &Raster) {
    log::debug!(
        "{}: raster of {}x{} ({} dots)",
        stage,
        raster.width(),
        raster.height(),
        raster.dots().len()
    );
}
