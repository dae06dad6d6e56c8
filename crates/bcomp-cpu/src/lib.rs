//! Cycle-accurate simulator of the bcomp 16-bit educational machine.
//!
//! The bcomp is an accumulator machine driven by a horizontally
//! microprogrammed control unit: an 8-bit microprogram counter walks a
//! 256 x 40-bit control store, and every microword simultaneously steers
//! the ALU, a byte-routing commutator, the flags unit, and the register
//! and memory write strobes. This crate models that datapath at the level
//! of single clock edges:
//!
//! - a 16-bit ripple-carry ALU with input inverters and carry injection
//!   ([`alu`]),
//! - the commutator for byte routing, sign extension, shifts and rotates
//!   ([`commutator`]),
//! - conditional N/Z/V/C flag commits ([`status`]),
//! - seven programmer-visible registers and a 2048 x 16 main memory
//!   ([`machine`], [`memory`]),
//! - the preloaded microcode ROM implementing the instruction set
//!   ([`microcode`]),
//! - per-instruction execution traces ([`trace`]).
//!
//! # Example
//!
//! ```
//! use bcomp_cpu::Machine;
//!
//! let mut machine = Machine::new();
//! // CLA, then HLT
//! machine.load_program(0x010, &[0x0200, 0x0100]);
//! machine.ac = 0xDEAD;
//! while !machine.halted() {
//!     machine.tick();
//! }
//! assert_eq!(machine.ac, 0);
//! ```
//!
//! The harness owns the loop: it preloads memory and the instruction
//! pointer, calls [`Machine::tick`] until [`Machine::halted`] reports the
//! halt word, and reads whatever state it needs between ticks. Devices and
//! trace printers hang off the [`machine::Tick`] events the same way.

#![warn(missing_docs)]

pub mod alu;
pub mod commutator;
pub mod machine;
pub mod memory;
pub mod microcode;
pub mod status;
pub mod trace;

pub use machine::{Machine, Tick, INFETCH, INT_VECTOR};
pub use memory::Memory;
pub use microcode::{ControlWord, MICROCODE};
pub use status::Status;
pub use trace::{TraceEntry, Tracer};

/// Construction-time failures. Ticking itself cannot fail.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    /// A provided control store was not 256 words long.
    #[error("microcode table has {len} words, expected 256")]
    InvalidMicroRom {
        /// Length of the rejected table.
        len: usize,
    },
    /// A provided control store word does not fit in 40 bits.
    #[error("microcode word {index} is wider than 40 bits: {word:#X}")]
    MicroWordTooWide {
        /// Index of the offending word.
        index: usize,
        /// The offending word.
        word: u64,
    },
}

/// Result type for machine construction.
pub type Result<T> = std::result::Result<T, Error>;
