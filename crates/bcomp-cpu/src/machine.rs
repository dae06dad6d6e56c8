//! The machine: register file, microprogram counter, and the tick loop.
//!
//! One call to [`Machine::tick`] is one rising clock edge. Within a tick
//! everything reads the state as it was before the edge: the current
//! microword drives the input muxes, the ALU, the commutator and the flags
//! unit combinationally, and every register or memory write commits the
//! resulting values together. There are no partial updates.

use crate::alu;
use crate::commutator;
use crate::memory::{Memory, ADDR_MASK};
use crate::microcode::{ControlWord, MICROCODE, MICROCODE_LEN};
use crate::status::Status;
use crate::{Error, Result};

/// Microprogram address of the instruction fetch routine.
pub const INFETCH: u8 = 0x01;

/// Memory cell holding the interrupt handler address.
pub const INT_VECTOR: u16 = 0x001;

/// What one clock edge did, for collaborators that act between ticks:
/// trace printers, i/o devices, interrupt sources.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tick {
    /// A memory store committed: (address, value).
    pub store: Option<(u16, u16)>,
    /// A microbranch was taken, with this target. Target [`INFETCH`]
    /// marks the boundary between two instructions.
    pub jump: Option<u8>,
    /// The i/o strobe was asserted.
    pub io: bool,
    /// The interrupt-query strobe was asserted. A device that wants
    /// service should raise the request before the next tick.
    pub ints: bool,
}

impl Tick {
    /// True when this edge finished an instruction.
    #[must_use]
    pub fn instruction_end(&self) -> bool {
        self.jump == Some(INFETCH)
    }
}

/// The bcomp machine.
///
/// Registers are public in the spirit of a front panel: harnesses preload
/// memory and the instruction pointer, run the tick loop, and inspect
/// whatever they like between ticks.
#[derive(Debug, Clone)]
pub struct Machine {
    /// Accumulator.
    pub ac: u16,
    /// Buffer register.
    pub br: u16,
    /// Data register, the memory data port.
    pub dr: u16,
    /// Command register, holding the instruction being executed.
    pub cr: u16,
    /// Instruction pointer, eleven bits.
    pub ip: u16,
    /// Stack pointer, eleven bits.
    pub sp: u16,
    /// Address register, the memory address port, eleven bits.
    pub ar: u16,
    /// Program state.
    pub ps: Status,
    /// Microprogram counter.
    pub mpc: u8,
    /// Main memory.
    pub memory: Memory,
    rom: [u64; MICROCODE_LEN],
}

impl Machine {
    /// A machine with the built-in control store, in reset state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            ac: 0,
            br: 0,
            dr: 0,
            cr: 0,
            ip: 0,
            sp: 0,
            ar: 0,
            ps: Status::RESET,
            mpc: INFETCH,
            memory: Memory::new(),
            rom: MICROCODE,
        }
    }

    /// A machine with a caller-provided control store.
    ///
    /// # Errors
    ///
    /// Rejects tables that are not exactly 256 words or that contain words
    /// wider than 40 bits.
    pub fn with_microcode(table: &[u64]) -> Result<Self> {
        if table.len() != MICROCODE_LEN {
            return Err(Error::InvalidMicroRom { len: table.len() });
        }
        if let Some(index) = table.iter().position(|&w| w >> 40 != 0) {
            return Err(Error::MicroWordTooWide { index, word: table[index] });
        }
        let mut machine = Self::new();
        machine.rom.copy_from_slice(table);
        Ok(machine)
    }

    /// Return every register and memory cell to the reset vector.
    ///
    /// PS keeps only the run bit, the microprogram counter points at the
    /// fetch routine, and memory is cleared. The control store is a ROM
    /// and survives.
    pub fn reset(&mut self) {
        self.ac = 0;
        self.br = 0;
        self.dr = 0;
        self.cr = 0;
        self.ip = 0;
        self.sp = 0;
        self.ar = 0;
        self.ps = Status::RESET;
        self.mpc = INFETCH;
        self.memory.clear();
    }

    /// The microword the machine is parked on.
    #[must_use]
    pub fn current_word(&self) -> u64 {
        self.rom[usize::from(self.mpc)]
    }

    /// True when the current microword carries the halt bit. The harness
    /// loop runs while this is false.
    #[must_use]
    pub fn halted(&self) -> bool {
        self.current_word() >> 38 & 1 == 1
    }

    /// Latch an interrupt request. Devices call this between ticks,
    /// typically after seeing the [`Tick::ints`] strobe.
    pub fn request_interrupt(&mut self) {
        self.ps.insert(Status::IRQ);
    }

    /// Preload a program and point IP at its entry.
    pub fn load_program(&mut self, base: u16, words: &[u16]) {
        self.memory.load(base, words);
        self.ip = base & ADDR_MASK;
    }

    /// Execute one rising clock edge.
    pub fn tick(&mut self) -> Tick {
        let mi = ControlWord::decode(self.current_word());

        // input muxes, priority encoded
        let left = if mi.rdac {
            self.ac
        } else if mi.rdbr {
            self.br
        } else if mi.rdps {
            self.ps.bits()
        } else {
            0
        };
        let right = if mi.rddr {
            self.dr
        } else if mi.rdcr {
            self.cr
        } else if mi.rdip {
            self.ip
        } else if mi.rdsp {
            self.sp
        } else {
            0
        };

        let aluout = alu::evaluate(left, right, &mi, self.ps.contains(Status::C));
        let c = commutator::commutate(aluout, &mi);

        let mut tick = Tick { io: mi.io, ints: mi.ints, ..Tick::default() };

        if mi.branch {
            let tested = mi.mask & c as u8 != 0;
            let target = if tested == mi.expect { mi.target } else { 0 };
            if target == 0 {
                self.mpc = self.mpc.wrapping_add(1);
            } else {
                self.mpc = target;
                tick.jump = Some(target);
                if target == INFETCH {
                    log::trace!(
                        "fetch ip={:03X} ac={:04X} ps={:03X}",
                        self.ip,
                        self.ac,
                        self.ps.bits()
                    );
                }
            }
            return tick;
        }

        // commit phase: every destination sees the same commutator output,
        // memory traffic uses the address and data registers as they were
        // before this edge
        let value = c as u16;
        let dr_pre = self.dr;
        let ar_pre = self.ar;
        if mi.wrcr {
            self.cr = value;
        }
        if mi.wrip {
            self.ip = value & ADDR_MASK;
        }
        if mi.wrsp {
            self.sp = value & ADDR_MASK;
        }
        if mi.wrac {
            self.ac = value;
        }
        if mi.wrbr {
            self.br = value;
        }
        if mi.wrps {
            self.ps = Status::from_word(value);
        }
        if mi.wrar {
            self.ar = value & ADDR_MASK;
        }
        if mi.load {
            self.dr = self.memory.read(ar_pre);
        } else if mi.wrdr {
            self.dr = value;
        }
        if mi.stor && !mi.load {
            self.memory.write(ar_pre, dr_pre);
            tick.store = Some((ar_pre & ADDR_MASK, dr_pre));
        }
        self.ps.commit(c, &mi);

        if mi.ints && self.ps.contains(Status::IE) {
            log::debug!("interrupt poll, request={}", self.ps.contains(Status::IRQ));
        }

        self.mpc = self.mpc.wrapping_add(1);
        tick
    }

    /// Tick until the halt word or until `max_ticks` edges have passed.
    /// Returns the number of edges executed.
    pub fn run(&mut self, max_ticks: usize) -> usize {
        let mut n = 0;
        while n < max_ticks && !self.halted() {
            self.tick();
            n += 1;
        }
        if self.halted() {
            log::debug!("halted at mpc={:02X} ip={:03X}", self.mpc, self.ip);
        }
        n
    }
}

impl Default for Machine {
    fn default() -> Self {
        Self::new()
    }
}
