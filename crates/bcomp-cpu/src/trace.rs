//! Per-instruction execution traces.
//!
//! The tracer watches the machine between ticks and emits one line per
//! finished instruction, in the tabular style of the original lab
//! protocols: the address and code of the instruction that just ran,
//! followed by the committed register file, the flags nibble, and the
//! last memory cell the program modified.

use std::fmt::Write;

use crate::machine::{Machine, Tick};

/// A captured instruction boundary.
#[derive(Debug, Clone)]
pub struct TraceEntry {
    /// Address the instruction was fetched from.
    pub cur_ip: u16,
    /// The instruction word itself.
    pub cur_cr: u16,
    /// Instruction pointer after execution.
    pub ip: u16,
    /// Command register after execution.
    pub cr: u16,
    /// Address register after execution.
    pub ar: u16,
    /// Data register after execution.
    pub dr: u16,
    /// Stack pointer after execution.
    pub sp: u16,
    /// Buffer register after execution.
    pub br: u16,
    /// Accumulator after execution.
    pub ac: u16,
    /// The N, Z, V, C nibble.
    pub nzvc: u8,
    /// Address of the most recently modified memory cell.
    pub last_addr: u16,
    /// Value of the most recently modified memory cell.
    pub last_value: u16,
}

impl TraceEntry {
    /// Format the entry as one fixed-width trace line.
    #[must_use]
    pub fn format(&self) -> String {
        let mut line = String::new();
        write!(
            line,
            "{:03X} {:04X}  IP:{:03X} CR:{:04X} AR:{:03X} DR:{:04X} SP:{:03X} BR:{:04X} AC:{:04X} NZVC:{:04b}  {:03X} {:04X}",
            self.cur_ip,
            self.cur_cr,
            self.ip,
            self.cr,
            self.ar,
            self.dr,
            self.sp,
            self.br,
            self.ac,
            self.nzvc,
            self.last_addr,
            self.last_value,
        )
        .unwrap();
        line
    }
}

/// Collects one line per executed instruction.
#[derive(Debug)]
pub struct Tracer {
    cur_ip: u16,
    cur_cr: u16,
    last_store: (u16, u16),
    lines: Vec<String>,
}

impl Tracer {
    /// A tracer primed with the machine's current state. Attach after
    /// preloading and before the first tick.
    #[must_use]
    pub fn new(machine: &Machine) -> Self {
        Self {
            cur_ip: machine.ip,
            cur_cr: machine.cr,
            last_store: (0, 0),
            lines: Vec::new(),
        }
    }

    /// Digest one tick. Call after every [`Machine::tick`], passing the
    /// returned event.
    pub fn observe(&mut self, machine: &Machine, tick: &Tick) {
        if let Some(store) = tick.store {
            self.last_store = store;
        }
        if tick.instruction_end() {
            let entry = self.entry(machine);
            self.lines.push(entry.format());
        }
        // capture points for the next line
        match machine.mpc {
            0x01 => self.cur_ip = machine.ip,
            0x04 => self.cur_cr = machine.cr,
            _ => {}
        }
    }

    /// The trace so far, one line per instruction.
    #[must_use]
    pub fn log(&self) -> String {
        self.lines.join("\n")
    }

    /// Number of traced instructions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// True when nothing has been traced yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    fn entry(&self, machine: &Machine) -> TraceEntry {
        TraceEntry {
            cur_ip: self.cur_ip,
            cur_cr: self.cur_cr,
            ip: machine.ip,
            cr: machine.cr,
            ar: machine.ar,
            dr: machine.dr,
            sp: machine.sp,
            br: machine.br,
            ac: machine.ac,
            nzvc: machine.ps.nzvc(),
            last_addr: self.last_store.0,
            last_value: self.last_store.1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::machine::Machine;

    fn run_traced(machine: &mut Machine) -> Tracer {
        let mut tracer = Tracer::new(machine);
        let mut guard = 0;
        while !machine.halted() {
            let tick = machine.tick();
            tracer.observe(machine, &tick);
            guard += 1;
            assert!(guard < 10_000, "trace run did not halt");
        }
        tracer
    }

    #[test]
    fn test_one_line_per_instruction() {
        let mut m = Machine::new();
        // INC, INC, HLT
        m.load_program(0x010, &[0x0C00, 0x0C00, 0x0100]);
        let tracer = run_traced(&mut m);
        assert_eq!(tracer.len(), 2, "HLT parks before its boundary");
    }

    #[test]
    fn test_line_captures_fetch_state() {
        let mut m = Machine::new();
        // LD 0x020, HLT
        m.load_program(0x010, &[0x4020, 0x0100]);
        m.memory.write(0x020, 0x7FFF);
        let tracer = run_traced(&mut m);
        let log = tracer.log();
        assert!(log.starts_with("010 4020"), "log: {log}");
        assert!(log.contains("AC:7FFF"), "log: {log}");
        assert!(log.contains("IP:011"), "log: {log}");
    }

    #[test]
    fn test_last_modified_cell() {
        let mut m = Machine::new();
        // ST 0x030, HLT
        m.ac = 0xABCD;
        m.load_program(0x010, &[0x5030, 0x0100]);
        let tracer = run_traced(&mut m);
        assert!(tracer.log().ends_with("030 ABCD"), "log: {}", tracer.log());
    }

    #[test]
    fn test_empty_before_running() {
        let m = Machine::new();
        let tracer = Tracer::new(&m);
        assert!(tracer.is_empty());
    }
}
