mod bus;
mod cartridge;
mod gameboy;
mod sink;
mod timer;

pub(crate) use bus::GameBoyBus;
pub use cartridge::Cartridge;
pub use gameboy::GameBoy;
pub use sink::{FrameSink, NullSink};

/// Total addressable memory for the Game Boy (64 KiB).
///
/// Regions with special behaviour (cartridge, echo RAM, IO registers)
/// are routed by the bus; everything else reads and writes this flat
/// array directly.
const MEMORY_SIZE: usize = 0x10000;

#[cfg(test)]
mod tests;
