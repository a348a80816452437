use super::GameBoyBus;

impl GameBoyBus {
    pub(super) fn read_joyp(&self) -> u8 {
        // Bits 7-6 always read as 1 on DMG.
        let mut result = 0xC0;
        // Bits 5 (buttons) and 4 (d-pad) are selection bits; 0 selects.
        let select = self.joyp_select & 0x30;
        result |= select;

        // Lower nibble is read-only. A pressed key is observed as 0.
        let mut low = 0x0F;
        if (select & 0x10) == 0 {
            // D-pad group selected; pressed bits invert into the nibble.
            low &= !self.joyp_dpad & 0x0F;
        }
        if (select & 0x20) == 0 {
            low &= !self.joyp_buttons & 0x0F;
        }
        result | low
    }

    pub(super) fn write_joyp(&mut self, value: u8) {
        // Only bits 5 and 4 are writable; lower nibble is read-only and
        // bits 7-6 are handled on read.
        self.joyp_select = (self.joyp_select & !0x30) | (value & 0x30);
    }

    /// Press or release a face/system button (bit0=A, bit1=B, bit2=Select,
    /// bit3=Start). A 1-to-0 transition on a line whose group is currently
    /// selected requests the joypad interrupt.
    pub(in crate::machine) fn joypad_set_button_bit(&mut self, bit: u8, pressed: bool) {
        let mask = 1u8 << bit;
        if pressed {
            let was_released = self.joyp_buttons & mask == 0;
            self.joyp_buttons |= mask;
            if was_released && self.joyp_select & 0x20 == 0 {
                self.if_reg |= 0x10;
            }
        } else {
            self.joyp_buttons &= !mask;
        }
    }

    /// Press or release a d-pad line (bit0=Right, bit1=Left, bit2=Up,
    /// bit3=Down).
    pub(in crate::machine) fn joypad_set_dpad_bit(&mut self, bit: u8, pressed: bool) {
        let mask = 1u8 << bit;
        if pressed {
            let was_released = self.joyp_dpad & mask == 0;
            self.joyp_dpad |= mask;
            if was_released && self.joyp_select & 0x10 == 0 {
                self.if_reg |= 0x10;
            }
        } else {
            self.joyp_dpad &= !mask;
        }
    }
}
