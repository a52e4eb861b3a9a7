//! wavepath - render a waveform options file to SVG
//!
//! Usage: `wavepath [OPTIONS.json]`
//!
//! Without an argument the settings file in the platform config directory
//! is used. If there is none, a default sine wave is drawn and written
//! there as a starting point for editing. The SVG document is written to
//! stdout.

use std::process::ExitCode;

use wavepath::settings::{settings_path, WaveformOptions};

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Starting wavepath");

    let options = match std::env::args_os().nth(1) {
        Some(path) => match WaveformOptions::load_from(&path) {
            Ok(options) => options,
            Err(e) => {
                log::error!("{}", e);
                return ExitCode::FAILURE;
            }
        },
        None => {
            let first_run = !settings_path().exists();
            let options = WaveformOptions::load();
            if first_run {
                options.save();
            }
            options
        }
    };

    match options.render() {
        Ok(svg) => {
            log::info!(
                "Rendered {}x{} waveform with {} path commands",
                svg.width,
                svg.height,
                svg.path.len()
            );
            println!("{svg}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
