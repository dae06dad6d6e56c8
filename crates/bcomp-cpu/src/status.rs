//! Program state register (PS).
//!
//! PS is nine bits wide:
//!
//! ```text
//! 8  7  6  5  4  3  2  1  0
//! .  W  IE IR .  N  Z  V  C
//! │  │  │  │  │  │  │  │  └─ Carry
//! │  │  │  │  │  │  │  └──── Overflow
//! │  │  │  │  │  │  └─────── Zero
//! │  │  │  │  │  └────────── Negative
//! │  │  │  │  └───────────── unnamed, readable and writable
//! │  │  │  └──────────────── Interrupt request latch
//! │  │  └─────────────────── Interrupt enable
//! │  └────────────────────── Run (set by reset, left alone by the core)
//! └───────────────────────── unnamed, readable and writable
//! ```
//!
//! The unnamed bits exist in the hardware register, so writes through the
//! datapath keep them rather than truncating to the named set.

use bitflags::bitflags;

use crate::microcode::ControlWord;

bitflags! {
    /// PS register flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Status: u16 {
        /// Carry out of the last committed operation.
        const C = 1 << 0;

        /// Signed overflow of the last committed operation.
        const V = 1 << 1;

        /// Result was zero.
        const Z = 1 << 2;

        /// Result was negative.
        const N = 1 << 3;

        /// A device has requested an interrupt.
        const IRQ = 1 << 5;

        /// Interrupts are enabled.
        const IE = 1 << 6;

        /// The machine is running.
        const W = 1 << 7;
    }
}

/// Only nine bits of a written word reach the register.
pub const PS_MASK: u16 = 0x01FF;

impl Status {
    /// Register contents after reset: run bit set, everything else clear.
    pub const RESET: Self = Self::W;

    /// Rebuild the register from a datapath word, keeping unnamed bits.
    #[inline]
    #[must_use]
    pub fn from_word(value: u16) -> Self {
        Self::from_bits_retain(value & PS_MASK)
    }

    /// Sets or clears a flag.
    #[inline]
    pub fn set_flag(&mut self, flag: Self, value: bool) {
        if value {
            *self |= flag;
        } else {
            *self &= !flag;
        }
    }

    /// Commit flags from an 18-bit commutator word, each gated by its own
    /// control bit.
    ///
    /// N and Z come from the routed value, C from bit 16, and V from the
    /// XOR of the two carry taps.
    pub fn commit(&mut self, c: u32, mi: &ControlWord) {
        let c16 = c >> 16 & 1 == 1;
        let c17 = c >> 17 & 1 == 1;
        if mi.setc {
            self.set_flag(Self::C, c16);
        }
        if mi.setv {
            self.set_flag(Self::V, c16 ^ c17);
        }
        if mi.stnz {
            self.set_flag(Self::N, c >> 15 & 1 == 1);
            self.set_flag(Self::Z, c & 0xFFFF == 0);
        }
    }

    /// The N, Z, V, C nibble, as printed in execution traces.
    #[inline]
    #[must_use]
    pub fn nzvc(self) -> u8 {
        (self.bits() & 0xF) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::microcode::bits::{SETC, SETV, STNZ};

    fn mi(word: u64) -> ControlWord {
        ControlWord::decode(word)
    }

    #[test]
    fn test_reset_value() {
        assert_eq!(Status::RESET.bits(), 0x080);
        assert!(Status::RESET.contains(Status::W));
        assert!(!Status::RESET.contains(Status::IE));
    }

    #[test]
    fn test_unnamed_bits_survive_writes() {
        let ps = Status::from_word(0x1FF);
        assert_eq!(ps.bits(), 0x1FF);
        let ps = Status::from_word(0xFFFF);
        assert_eq!(ps.bits(), 0x1FF, "writes truncate to nine bits");
    }

    #[test]
    fn test_zero_flag_needs_stnz() {
        let mut ps = Status::empty();
        ps.commit(0, &mi(0));
        assert!(!ps.contains(Status::Z));
        ps.commit(0, &mi(STNZ));
        assert!(ps.contains(Status::Z));
        assert!(!ps.contains(Status::N));
    }

    #[test]
    fn test_negative_gated_by_stnz() {
        let mut ps = Status::empty();
        ps.commit(0x8000, &mi(STNZ));
        assert!(ps.contains(Status::N));
        assert!(!ps.contains(Status::Z));
    }

    #[test]
    fn test_overflow_is_tap_xor() {
        let mut ps = Status::empty();
        ps.commit(1 << 17, &mi(SETV));
        assert!(ps.contains(Status::V));
        ps.commit(1 << 16 | 1 << 17, &mi(SETV));
        assert!(!ps.contains(Status::V));
    }

    #[test]
    fn test_carry_gated_by_setc() {
        let mut ps = Status::empty();
        ps.commit(1 << 16, &mi(SETV | STNZ));
        assert!(!ps.contains(Status::C));
        ps.commit(1 << 16, &mi(SETC));
        assert!(ps.contains(Status::C));
    }

    #[test]
    fn test_flags_clear_as_well_as_set() {
        let mut ps = Status::from_word(0xF);
        ps.commit(1, &mi(SETC | SETV | STNZ));
        assert_eq!(ps.nzvc(), 0b0000);
    }
}
