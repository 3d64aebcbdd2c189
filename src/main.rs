use std::io::IsTerminal;
use std::process::ExitCode;

use bush::cli::{Cli, ColorMode};
use bush::fs::RealFileSystem;
use clap::Parser;
use log::debug;
use termcolor::{BufferedStandardStream, ColorChoice};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .init();
    debug!("parsed arguments: {cli:?}");

    let mut stdout = BufferedStandardStream::stdout(color_choice(cli.color));
    let roots = cli.roots();
    let options = cli.walk_options();

    match bush::run(&RealFileSystem, &roots, &options, &mut stdout).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("bush: {err:#}");
            ExitCode::from(1)
        }
    }
}

fn color_choice(mode: ColorMode) -> ColorChoice {
    match mode {
        ColorMode::Always => ColorChoice::Always,
        ColorMode::Never => ColorChoice::Never,
        ColorMode::Auto if std::io::stdout().is_terminal() => ColorChoice::Auto,
        ColorMode::Auto => ColorChoice::Never,
    }
}
