use std::env::args_os;
use std::process::ExitCode;

use channel_splitter::{split_image_channels, CLIParser};

fn main() -> ExitCode {
    let mut cli_parser = CLIParser::default();
    let arguments = cli_parser.parse(args_os()).unwrap_or_else(|e| e.exit());
    match split_image_channels(&arguments) {
        Ok(_) => {
            println!("Splitting successful");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Splitting failed because of: {}", e);
            ExitCode::FAILURE
        }
    }
}
