use clap::Parser;
use clap::error::ErrorKind;
use log::{error, info};
use std::path::PathBuf;
use std::process::ExitCode;

use tile_concat::{AssembleConfig, LogSink, assemble, scan_grid};

#[derive(Parser, Debug)]
#[command(
    name = "tile_concat",
    about = "Stitch <col>_<row>.<ext> tiles into one image",
    long_about = "Stitch a directory of <col>_<row>.<ext> tiles into one image. \
                  Row 1 is the bottom row. The output file is written into the tiles directory.",
    version
)]
struct Cli {
    /// Directory containing the tiles
    tiles_dir: PathBuf,

    /// Name of the output image, created inside the tiles directory
    output_file: PathBuf,

    /// Encoder quality for lossy output formats
    #[arg(long, default_value_t = 100, value_parser = clap::value_parser!(u8).range(1..=100))]
    quality: u8,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            let _ = e.print();
            return ExitCode::FAILURE;
        }
    };

    info!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let mut sink = LogSink;
    let dims = match scan_grid(&cli.tiles_dir, &mut sink) {
        Ok(dims) => dims,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let config = AssembleConfig { quality: cli.quality };
    match assemble(&cli.tiles_dir, &cli.output_file, dims, &config, &mut sink) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
