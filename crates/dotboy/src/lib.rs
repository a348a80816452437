use std::path::Path;

use anyhow::{bail, Context, Result};
use dotboy_core::{GameBoy, SCREEN_HEIGHT, SCREEN_WIDTH};

/// Run a ROM headless for `frames` frames and return the final frame as
/// an RGB24 buffer (160x144x3 bytes).
///
/// This is the windowless driver used by the CLI; a windowed frontend
/// would instead attach a `FrameSink` and present every flush.
pub fn run_headless(rom_path: &Path, frames: u32) -> Result<Vec<u8>> {
    let rom = std::fs::read(rom_path)
        .with_context(|| format!("failed to read ROM '{}'", rom_path.display()))?;
    if rom.is_empty() {
        bail!("ROM '{}' is empty", rom_path.display());
    }

    let mut gb = GameBoy::new();
    gb.load_rom(&rom);
    log::info!(
        "loaded {} bytes from '{}', running {} frames",
        rom.len(),
        rom_path.display(),
        frames
    );

    for _ in 0..frames {
        gb.step_frame();
        if gb.cpu.is_locked() {
            log::warn!("CPU locked on an invalid opcode; stopping early");
            break;
        }
    }

    let mut buffer = vec![0u8; SCREEN_WIDTH * SCREEN_HEIGHT * 3];
    gb.video_frame(&mut buffer);
    Ok(buffer)
}
