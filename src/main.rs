use std::env;
use std::io::{self, Write};
use crossterm::{
    cursor::{Hide, Show},
    terminal::{disable_raw_mode, enable_raw_mode, size},
};
use log::{error, info};

mod config;
mod constants;
mod entities;
mod rendering;
mod simulation;

use config::SimConfig;
use constants::LOG_FILE;
use rendering::{FieldGrid, OutputTarget, ScreenBuffer};
use simulation::Simulation;

fn main() -> io::Result<()> {
    simple_logging::log_to_file(LOG_FILE, log::LevelFilter::Info)?;
    info!("Starting vector2d drift demo.");

    let args: Vec<String> = env::args().collect();
    let config = SimConfig::from_args(&args);
    info!("Configuration: {:?}", config);

    let (width, height, out) = if config.headless {
        info!("Headless mode, field {}x{}", config.width, config.height);
        (
            config.width,
            config.height,
            OutputTarget::ScreenBuffer(ScreenBuffer::new(config.width, config.height)),
        )
    } else {
        enable_raw_mode().map_err(|e| { error!("Failed to enable raw mode: {}", e); e })?;
        let (width, height) = release_on_err(size(), disable_raw_mode)
            .map_err(|e| { error!("Failed to get terminal size: {}", e); e })?;
        info!("Terminal size: {}x{}", width, height);
        (width, height, OutputTarget::Stdout(io::stdout()))
    };

    let mut sim = Simulation::new(&config, width, height, out);
    let result = prepare_screen(&mut sim.out, width, height).and_then(|_| sim.run());
    let restored = restore_screen(&mut sim.out);

    let summary = result?;
    restored?;
    info!("Finished: {} frames, {} catches.", summary.frames, summary.catches);
    if config.headless {
        println!("{} frames, {} catches", summary.frames, summary.catches);
    }
    Ok(())
}

fn prepare_screen(out: &mut OutputTarget, width: u16, height: u16) -> io::Result<()> {
    if out.is_headless() {
        return Ok(());
    }
    FieldGrid::new(width, height)
        .clear_screen_manual(out)
        .map_err(|e| { error!("Failed to clear screen: {}", e); e })?;
    out.execute_other_command(Hide).map_err(|e| { error!("Failed to hide cursor: {}", e); e })?;
    out.flush().map_err(|e| { error!("Failed to flush stdout after initial clear: {}", e); e })
}

fn restore_screen(out: &mut OutputTarget) -> io::Result<()> {
    if out.is_headless() {
        return Ok(());
    }
    out.execute_other_command(Show).map_err(|e| { error!("Failed to show cursor on exit: {}", e); e })?;
    disable_raw_mode().map_err(|e| { error!("Failed to disable raw mode on exit: {}", e); e })
}

// Runs `release` when `result` is an error, so raw mode is not left behind
// by a failure between enabling it and starting the simulation.
fn release_on_err<T>(result: io::Result<T>, release: impl FnOnce() -> io::Result<()>) -> io::Result<T> {
    if result.is_err() {
        if let Err(e) = release() {
            error!("Failed to disable raw mode: {}", e);
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn failed_setup_releases_raw_mode() {
        let released = Cell::new(false);
        let result: io::Result<(u16, u16)> = Err(io::Error::other("no tty"));
        let result = release_on_err(result, || {
            released.set(true);
            Ok(())
        });
        assert!(result.is_err());
        assert!(released.get());
    }

    #[test]
    fn successful_setup_keeps_raw_mode() {
        let released = Cell::new(false);
        let result = release_on_err(Ok((80u16, 24u16)), || {
            released.set(true);
            Ok(())
        });
        assert_eq!(result.unwrap(), (80, 24));
        assert!(!released.get());
    }

    #[test]
    fn release_failure_keeps_original_error() {
        let result: io::Result<()> = Err(io::Error::other("size"));
        let result = release_on_err(result, || Err(io::Error::other("raw")));
        assert_eq!(result.unwrap_err().to_string(), "size");
    }
}
