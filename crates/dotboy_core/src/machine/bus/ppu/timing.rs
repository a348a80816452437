use super::super::GameBoyBus;

impl GameBoyBus {
    /// Advance the PPU / LCD by a single CPU T-cycle.
    ///
    /// DMG timing: 154 scanlines per frame, 456 cycles per line; lines
    /// 144-153 are VBlank. The per-line counter drives LY, the STAT mode
    /// field, scanline rendering and the VBlank/STAT interrupts.
    pub(in super::super) fn cycle_video(&mut self) {
        let lcdc = self.memory[0xFF40];
        if lcdc & 0x80 == 0 {
            // LCD disabled: LY pinned to 0, line timing reset, STAT
            // reports mode 1 until the display comes back.
            self.scanline_counter = 0;
            self.memory[0xFF44] = 0;
            self.stat_irq_line = false;
            let stat = self.memory[0xFF41];
            self.memory[0xFF41] = (stat & !0x03) | 0x01;
            return;
        }

        self.scanline_counter += 1;
        if self.scanline_counter >= 456 {
            self.scanline_counter -= 456;
            let ly = (self.memory[0xFF44] + 1) % 154;
            self.memory[0xFF44] = ly;

            if ly == 144 {
                // VBlank begins: exactly one IRQ per frame, and the
                // completed frame goes out to the sink.
                self.if_reg |= 0x01;
                self.sink.flush();
                log::trace!(
                    "PPU: VBlank edge, IF=0x{:02X} STAT=0x{:02X}",
                    self.if_reg,
                    self.memory[0xFF41],
                );
            }
        }

        self.update_lcd_status();
    }

    /// Recompute STAT's mode and LYC==LY flag and update the STAT
    /// interrupt line.
    ///
    /// Called from `cycle_video` after advancing the line counter, and
    /// from writes to LCDC/STAT/LYC. Implements:
    /// - STAT bits 1-0 (PPU mode, read-only)
    /// - STAT bit 2   (LYC == LY flag, read-only)
    /// - STAT bits 6-3 (interrupt source selects, read/write)
    /// - INT $48 as a rising edge on the ORed line of enabled sources
    /// - scanline rendering on the transition into HBlank
    pub(super) fn update_lcd_status(&mut self) {
        let lcdc = self.memory[0xFF40];
        let ly = self.memory[0xFF44];
        let lyc = self.memory[0xFF45];
        let lcd_enabled = lcdc & 0x80 != 0;

        let old_mode = self.memory[0xFF41] & 0x03;
        let mode: u8 = if !lcd_enabled || ly >= 144 {
            1
        } else if self.scanline_counter < 80 {
            2 // OAM search
        } else if self.scanline_counter < 80 + 172 {
            3 // pixel transfer
        } else {
            0 // HBlank
        };

        let coincidence = ly == lyc;

        // Update STAT bits 0-2, preserving the interrupt selects and the
        // unused bit 7.
        let mut stat = self.memory[0xFF41];
        stat &= !0x07;
        stat |= mode;
        if coincidence {
            stat |= 0x04;
        }
        self.memory[0xFF41] = stat;

        if !lcd_enabled {
            self.stat_irq_line = false;
            return;
        }

        // A visible line is composed the moment it enters HBlank.
        if mode == 0 && old_mode != 0 && ly < 144 {
            self.render_scanline(ly);
        }

        // Compute the ORed STAT interrupt line from enabled sources.
        let prev_line = self.stat_irq_line;
        let mut line = false;
        if stat & 0x40 != 0 && coincidence {
            line = true;
        }
        if stat & 0x20 != 0 && mode == 2 {
            line = true;
        }
        if stat & 0x10 != 0 && mode == 1 {
            line = true;
        }
        if stat & 0x08 != 0 && mode == 0 {
            line = true;
        }

        self.stat_irq_line = line;
        if !prev_line && line {
            // Rising edge on the STAT interrupt line.
            self.if_reg |= 0x02;
            log::trace!(
                "PPU: STAT IRQ rising edge (STAT=0x{stat:02X} LY={ly} mode={mode})",
            );
        }
    }
}
