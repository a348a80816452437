use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use dotboy_core::{SCREEN_HEIGHT, SCREEN_WIDTH};

fn usage() -> ExitCode {
    eprintln!("Usage: dotboy <rom_path> <out_rgb24_path> [frames]");
    ExitCode::from(2)
}

fn main() -> ExitCode {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let Some(rom_path) = args.next().map(PathBuf::from) else {
        return usage();
    };
    let Some(out_path) = args.next().map(PathBuf::from) else {
        return usage();
    };
    let frames: u32 = match args.next().unwrap_or_else(|| "120".to_string()).parse() {
        Ok(frames) => frames,
        Err(_) => {
            eprintln!("Invalid frame count; expected an integer.");
            return usage();
        }
    };

    match dump_frame(&rom_path, &out_path, frames) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn dump_frame(rom_path: &PathBuf, out_path: &PathBuf, frames: u32) -> Result<()> {
    let buffer = dotboy::run_headless(rom_path, frames)?;

    std::fs::write(out_path, &buffer)
        .with_context(|| format!("failed to write '{}'", out_path.display()))?;

    println!(
        "Wrote {} bytes ({}x{} rgb24) after {} frames to '{}'",
        buffer.len(),
        SCREEN_WIDTH,
        SCREEN_HEIGHT,
        frames,
        out_path.display()
    );
    Ok(())
}
