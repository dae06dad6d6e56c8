//! The 40-bit microinstruction word and the preloaded control store.
//!
//! A microword is a bag of control bits driving the datapath for one clock,
//! plus a branch form that repurposes part of the word as a bit test over
//! the commutator output. Bit positions:
//!
//! ```text
//!  0 RDDR   1 RDCR   2 RDIP   3 RDSP   4 RDAC   5 RDBR   6 RDPS
//!  8 COMR   9 COML  10 PLS1  11 SORA
//! 12 LTOL  13 LTOH  14 HTOL  15 HTOH
//! 16 SEXT  17 SHLT  18 SHL0  19 SHRT  20 SHRF
//! 21 SETC  22 SETV  23 STNZ
//! 24 WRDR  25 WRCR  26 WRIP  27 WRSP  28 WRAC  29 WRBR  30 WRPS  31 WRAR
//! 32 LOAD  33 STOR  34 IO    35 INTS  38 HALT  39 TYPE
//! ```
//!
//! With TYPE set the word is a branch: bits 23..16 become a bit mask over
//! the low byte of the commutator output, bit 32 the expected value, and
//! bits 31..24 the jump target. A zero target means fall through, which
//! is why address 0 can only be reached by wrapping the microprogram
//! counter.

/// Raw positions of every control bit, for building and picking apart
/// microwords.
pub mod bits {
    /// Select DR onto the right operand.
    pub const RDDR: u64 = 1 << 0;
    /// Select CR onto the right operand.
    pub const RDCR: u64 = 1 << 1;
    /// Select IP onto the right operand.
    pub const RDIP: u64 = 1 << 2;
    /// Select SP onto the right operand.
    pub const RDSP: u64 = 1 << 3;
    /// Select AC onto the left operand.
    pub const RDAC: u64 = 1 << 4;
    /// Select BR onto the left operand.
    pub const RDBR: u64 = 1 << 5;
    /// Select PS onto the left operand.
    pub const RDPS: u64 = 1 << 6;
    /// Invert the right operand.
    pub const COMR: u64 = 1 << 8;
    /// Invert the left operand.
    pub const COML: u64 = 1 << 9;
    /// Inject a carry into bit 0 of the summator.
    pub const PLS1: u64 = 1 << 10;
    /// Select the AND plane instead of the sum.
    pub const SORA: u64 = 1 << 11;
    /// Route the ALU low byte to the low byte.
    pub const LTOL: u64 = 1 << 12;
    /// Route the ALU low byte to the high byte.
    pub const LTOH: u64 = 1 << 13;
    /// Route the ALU high byte to the low byte.
    pub const HTOL: u64 = 1 << 14;
    /// Route the ALU high byte to the high byte.
    pub const HTOH: u64 = 1 << 15;
    /// Fill the high byte with copies of ALU bit 7.
    pub const SEXT: u64 = 1 << 16;
    /// Shift left by one.
    pub const SHLT: u64 = 1 << 17;
    /// On a left shift, feed the carry flag into bit 0.
    pub const SHL0: u64 = 1 << 18;
    /// Shift right by one.
    pub const SHRT: u64 = 1 << 19;
    /// On a right shift, feed the carry flag into bit 15.
    pub const SHRF: u64 = 1 << 20;
    /// Commit the carry flag.
    pub const SETC: u64 = 1 << 21;
    /// Commit the overflow flag.
    pub const SETV: u64 = 1 << 22;
    /// Commit the negative and zero flags.
    pub const STNZ: u64 = 1 << 23;
    /// Write DR.
    pub const WRDR: u64 = 1 << 24;
    /// Write CR.
    pub const WRCR: u64 = 1 << 25;
    /// Write IP.
    pub const WRIP: u64 = 1 << 26;
    /// Write SP.
    pub const WRSP: u64 = 1 << 27;
    /// Write AC.
    pub const WRAC: u64 = 1 << 28;
    /// Write BR.
    pub const WRBR: u64 = 1 << 29;
    /// Write PS.
    pub const WRPS: u64 = 1 << 30;
    /// Write AR.
    pub const WRAR: u64 = 1 << 31;
    /// Read main memory at AR into DR. Overrides WRDR and STOR.
    pub const LOAD: u64 = 1 << 32;
    /// Write DR to main memory at AR.
    pub const STOR: u64 = 1 << 33;
    /// Strobe the i/o hook.
    pub const IO: u64 = 1 << 34;
    /// Strobe the interrupt-query hook.
    pub const INTS: u64 = 1 << 35;
    /// Freeze the machine at this word.
    pub const HALT: u64 = 1 << 38;
    /// Branch form.
    pub const TYPE: u64 = 1 << 39;
}

/// A microword decoded into named fields.
///
/// Branch words reuse the shift, flag, write and memory bit positions for
/// the mask, target and expected value, so decoding forces those fields off
/// whenever `branch` is set. Byte routing and the operand selectors stay
/// live in both forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)] // one bool per control line
pub struct ControlWord {
    /// DR to the right operand.
    pub rddr: bool,
    /// CR to the right operand.
    pub rdcr: bool,
    /// IP to the right operand.
    pub rdip: bool,
    /// SP to the right operand.
    pub rdsp: bool,
    /// AC to the left operand.
    pub rdac: bool,
    /// BR to the left operand.
    pub rdbr: bool,
    /// PS to the left operand.
    pub rdps: bool,
    /// Invert the right operand.
    pub comr: bool,
    /// Invert the left operand.
    pub coml: bool,
    /// Carry into bit 0.
    pub pls1: bool,
    /// AND plane instead of the sum.
    pub sora: bool,
    /// ALU low byte to the low byte.
    pub ltol: bool,
    /// ALU low byte to the high byte.
    pub ltoh: bool,
    /// ALU high byte to the low byte.
    pub htol: bool,
    /// ALU high byte to the high byte.
    pub htoh: bool,
    /// Sign extend into the high byte.
    pub sext: bool,
    /// Shift left.
    pub shlt: bool,
    /// Carry flag into bit 0 of a left shift.
    pub shl0: bool,
    /// Shift right.
    pub shrt: bool,
    /// Carry flag into bit 15 of a right shift.
    pub shrf: bool,
    /// Commit C.
    pub setc: bool,
    /// Commit V.
    pub setv: bool,
    /// Commit N and Z.
    pub stnz: bool,
    /// Write DR.
    pub wrdr: bool,
    /// Write CR.
    pub wrcr: bool,
    /// Write IP.
    pub wrip: bool,
    /// Write SP.
    pub wrsp: bool,
    /// Write AC.
    pub wrac: bool,
    /// Write BR.
    pub wrbr: bool,
    /// Write PS.
    pub wrps: bool,
    /// Write AR.
    pub wrar: bool,
    /// Memory read into DR.
    pub load: bool,
    /// Memory write from DR.
    pub stor: bool,
    /// I/o strobe.
    pub io: bool,
    /// Interrupt-query strobe.
    pub ints: bool,
    /// Freeze here.
    pub halt: bool,
    /// Branch form.
    pub branch: bool,
    /// Branch form: bit mask over the commutator low byte. The tested
    /// value is the OR of the selected bits.
    pub mask: u8,
    /// Branch form: expected value of the tested bit.
    pub expect: bool,
    /// Branch form: jump target.
    pub target: u8,
}

impl ControlWord {
    /// Decode a raw 40-bit word into named fields.
    pub fn decode(word: u64) -> Self {
        let bit = |i: u32| word >> i & 1 == 1;
        let branch = bit(39);
        let op = !branch;
        Self {
            rddr: bit(0),
            rdcr: bit(1),
            rdip: bit(2),
            rdsp: bit(3),
            rdac: bit(4),
            rdbr: bit(5),
            rdps: bit(6),
            comr: bit(8),
            coml: bit(9),
            pls1: bit(10),
            sora: bit(11),
            ltol: bit(12),
            ltoh: bit(13),
            htol: bit(14),
            htoh: bit(15),
            sext: op && bit(16),
            shlt: op && bit(17),
            shl0: op && bit(18),
            shrt: op && bit(19),
            shrf: op && bit(20),
            setc: op && bit(21),
            setv: op && bit(22),
            stnz: op && bit(23),
            wrdr: op && bit(24),
            wrcr: op && bit(25),
            wrip: op && bit(26),
            wrsp: op && bit(27),
            wrac: op && bit(28),
            wrbr: op && bit(29),
            wrps: op && bit(30),
            wrar: op && bit(31),
            load: op && bit(32),
            stor: op && bit(33),
            io: bit(34),
            ints: bit(35),
            halt: bit(38),
            branch,
            mask: if branch { (word >> 16) as u8 } else { 0 },
            expect: branch && bit(32),
            target: if branch { (word >> 24) as u8 } else { 0 },
        }
    }
}

/// Number of words in the control store.
pub const MICROCODE_LEN: usize = 256;

/// The preloaded control store.
///
/// Addresses 0x00..=0xDF hold the microprogram, the rest reads as zero.
/// Address 0x00 is the halt word, 0x01 the instruction fetch entry. Source
/// and destination registers named in the comments follow the register
/// transfer notation `dst <- src`.
#[rustfmt::skip]
pub const MICROCODE: [u64; MICROCODE_LEN] = [
    0x40_0000_0000, // 00  [halt parking] halt
    0x00_8000_9004, // 01  [instruction fetch] AR <- IP
    0x01_0400_9404, // 02  DR <- MEM(AR); IP <- IP+1
    0x00_0200_9001, // 03  CR <- DR
    0x80_5680_4002, // 04  CR15=0 -> lowhalf
    0x81_5140_4002, // 05  CR14=1 -> control group (C..F)
    0x80_4C00_0000, // 06  8..B -> operand fetch
    0x00_2000_9400, // 07  [interrupt entry] BR <- 1
    0x00_2002_0020, // 08  BR <<= 1
    0x00_2002_0020, // 09  BR <<= 1
    0x00_2002_0020, // 0A  BR <<= 1
    0x00_2002_0020, // 0B  BR <<= 1
    0x00_2002_0020, // 0C  BR <<= 1
    0x00_0100_9220, // 0D  DR <- ~0x20
    0x00_4000_9841, // 0E  PS: clear request
    0x00_0800_9208, // 0F  SP <- SP-1
    0x00_8000_9008, // 10  AR <- SP
    0x00_0100_9040, // 11  DR <- PS
    0x02_0000_0000, // 12  MEM(SP) <- PS
    0x00_0800_9208, // 13  SP <- SP-1
    0x00_8000_9008, // 14  AR <- SP
    0x00_0100_9004, // 15  DR <- IP
    0x02_0000_0000, // 16  MEM(SP) <- IP
    0x80_D600_0000, // 17  -> interrupt vector fetch
    0x00_2000_9400, // 18  [EI/DI] BR <- 1
    0x00_2002_0020, // 19  BR <<= 1
    0x00_2002_0020, // 1A  BR <<= 1
    0x00_2002_0020, // 1B  BR <<= 1
    0x00_2002_0020, // 1C  BR <<= 1
    0x00_2002_0020, // 1D  BR <<= 1
    0x00_2002_0020, // 1E  BR <<= 1
    0x00_0100_9020, // 1F  DR <- 0x40
    0x81_8510_1002, // 20  DI?
    0x81_D240_1040, // 21  EI: already enabled
    0x00_4000_9041, // 22  PS <- PS + 0x40
    0x80_D200_0000, // 23  -> interrupt poll
    0x81_DC80_1002, // 24  [stack group dispatch] T >= 8 -> miss
    0x81_3340_1002, // 25  T 4..7
    0x81_4010_1002, // 26  POP/POPF
    0x00_0800_9208, // 27  SP <- SP-1
    0x00_8000_9008, // 28  AR <- SP
    0x81_D020_1002, // 29  PUSHF?
    0x00_0100_9010, // 2A  DR <- AC
    0x80_CE00_0000, // 2B  -> stack store
    0x81_DC10_4002, // 2C  [loop dispatch] 7 -> miss
    0x00_0180_9201, // 2D  LOOP: DR <- DR - 1
    0x02_0000_0000, // 2E  write back
    0x81_D208_1040, // 2F  N -> no skip
    0x81_D204_1040, // 30  Z -> no skip
    0x00_0400_9404, // 31  skip: IP <- IP+1
    0x80_D200_0000, // 32  -> interrupt poll
    0x81_1820_1002, // 33  [ret/iret group] T 6,7 -> EI/DI
    0x00_8000_9008, // 34  RET/IRET: AR <- SP
    0x01_0000_0000, // 35  DR <- MEM(SP)
    0x00_0800_9408, // 36  SP <- SP+1
    0x00_0400_9001, // 37  IP <- DR[10:0]
    0x81_6C10_1002, // 38  IRET: also pop PS
    0x80_D200_0000, // 39  -> interrupt poll
    0x01_0000_0000, // 3A  [operand load, second dispatch] DR <- MEM(AR)  (operand)
    0x81_7580_4002, // 3B  8..B
    0x81_7140_4002, // 3C  4..7
    0x81_9210_4002, // 3D  3 -> OR
    0x00_1080_9811, // 3E  AND: AC <- AC & DR
    0x80_D200_0000, // 3F  -> interrupt poll
    0x81_6C20_1002, // 40  [pop group] T3 -> POPF
    0x00_8000_9008, // 41  POP: AR <- SP
    0x01_0000_0000, // 42  DR <- MEM(SP)
    0x00_0800_9408, // 43  SP <- SP+1
    0x00_1080_9001, // 44  AC <- DR
    0x80_D200_0000, // 45  -> interrupt poll
    0x00_0800_9208, // 46  [call push and jump] SP <- SP-1
    0x00_8000_9008, // 47  AR <- SP
    0x00_0100_9004, // 48  DR <- IP
    0x02_0000_0000, // 49  MEM(SP) <- return addr
    0x00_0400_9020, // 4A  IP <- target
    0x80_D200_0000, // 4B  -> interrupt poll
    0x00_8000_9002, // 4C  [operand address] AR <- CR[10:0]
    0x80_3A08_4002, // 4D  direct?
    0x01_0000_0000, // 4E  DR <- MEM(AR)
    0x00_8000_9001, // 4F  AR <- DR[10:0]
    0x80_3A00_0000, // 50  -> operand load, second dispatch
    0x81_BA20_4002, // 51  [jump/call/branch dispatch] E,F
    0x81_B310_4002, // 52  D -> CALL
    0x81_7908_4002, // 53  indirect jump
    0x00_0400_9002, // 54  JUMP: IP <- CR[10:0]
    0x80_D200_0000, // 55  -> interrupt poll
    0x81_4C40_4002, // 56  [decode opcodes 0..7] 4..7 -> operand fetch
    0x81_4C20_4002, // 57  2,3 -> operand fetch
    0x81_DC10_4002, // 58  opcode 1 -> miss
    0x80_6200_0000, // 59  opcode 0 -> addressless
    0x81_5D0F_4002, // 5A  [branch dispatch, then BEQ] cond != 0
    0x81_9B04_1040, // 5B  BEQ: Z -> take
    0x80_D200_0000, // 5C  -> interrupt poll
    0x81_DC08_4002, // 5D  [branch condition tree] cond >= 8 -> miss
    0x81_7D04_4002, // 5E  conds 4..7
    0x81_9E02_4002, // 5F  conds 2,3
    0x80_9B04_1040, // 60  BNE: !Z -> take
    0x80_D200_0000, // 61  -> interrupt poll
    0x81_6708_4002, // 62  [addressless dispatch] sub-op 8..F
    0x81_A704_4002, // 63  4..7
    0x81_A402_4002, // 64  2,3
    0x81_DD01_4002, // 65  1 -> HLT
    0x80_D200_0000, // 66  NOP
    0x81_8104_4002, // 67  [asl/asr/sxtb/swab dispatch] C..F
    0x81_AD02_4002, // 68  A,B
    0x81_C801_4002, // 69  9 -> ASR
    0x00_10E2_0010, // 6A  ASL
    0x80_D200_0000, // 6B  -> interrupt poll
    0x00_8000_9008, // 6C  [pop into PS] AR <- SP
    0x01_0000_0000, // 6D  DR <- MEM(SP)
    0x00_0800_9408, // 6E  SP <- SP+1
    0x00_4000_9001, // 6F  PS <- DR[8:0]
    0x80_D200_0000, // 70  -> interrupt poll
    0x81_2C20_4002, // 71  [ld/st/loop dispatch] 6,7
    0x81_9510_4002, // 72  5 -> ST
    0x00_1080_9001, // 73  LD: AC <- DR
    0x80_D200_0000, // 74  -> interrupt poll
    0x81_B620_4002, // 75  [cmp/sub/add/adc dispatch] A,B
    0x81_8910_4002, // 76  9 -> SUB
    0x00_00E0_9511, // 77  CMP: flags(AC-DR)
    0x80_D200_0000, // 78  -> interrupt poll
    0x00_8000_9002, // 79  [JUMP indirect] AR <- CR[10:0]
    0x01_0000_0000, // 7A  DR <- MEM(AR)
    0x00_0400_9001, // 7B  IP <- DR[10:0]
    0x80_D200_0000, // 7C  -> interrupt poll
    0x81_A102_4002, // 7D  [bcs/bcc/bvs/bvc]
    0x81_BE01_4002, // 7E
    0x81_9B01_1040, // 7F  BCS: C -> take
    0x80_D200_0000, // 80  -> interrupt poll
    0x81_B002_4002, // 81  [inc/dec dispatch] E,F
    0x81_CC01_4002, // 82  D -> DEC
    0x00_10E0_9410, // 83  INC
    0x80_D200_0000, // 84  -> interrupt poll
    0x80_D240_1040, // 85  [DI] already disabled
    0x00_0100_9220, // 86  DR <- ~0x40
    0x00_4000_9441, // 87  PS <- PS - 0x40
    0x80_D200_0000, // 88  -> interrupt poll
    0x00_10E0_9511, // 89  [SUB] SUB
    0x80_D200_0000, // 8A  -> interrupt poll
    0x81_C601_4002, // 8B  [rol/ror dispatch] 7 -> ROR
    0x00_10E6_0010, // 8C  ROL through carry
    0x80_D200_0000, // 8D  -> interrupt poll
    0x00_8000_9002, // 8E  [CALL indirect] AR <- CR[10:0]
    0x01_0000_0000, // 8F  DR <- MEM(AR)
    0x00_2000_9001, // 90  BR <- target
    0x80_4600_0000, // 91  -> call push and jump
    0x00_2000_9B11, // 92  [OR] BR <- ~AC & ~DR
    0x00_1080_9220, // 93  OR: AC <- ~BR
    0x80_D200_0000, // 94  -> interrupt poll
    0x00_0100_9010, // 95  [ST] ST: DR <- AC
    0x02_0000_0000, // 96  MEM(AR) <- DR
    0x80_D200_0000, // 97  -> interrupt poll
    0x80_B801_1040, // 98  [ADC] C clear -> plain add
    0x00_10E0_9411, // 99  ADC: AC <- AC+DR+1
    0x80_D200_0000, // 9A  -> interrupt poll
    0x00_2001_1002, // 9B  [branch taken] BR <- sext(CR[7:0])
    0x00_0400_9024, // 9C  IP <- IP + BR
    0x80_D200_0000, // 9D  -> interrupt poll
    0x81_BC01_4002, // 9E  [bmi/bpl]
    0x81_9B08_1040, // 9F  BMI: N -> take
    0x80_D200_0000, // A0  -> interrupt poll
    0x81_C001_4002, // A1  [bvs/bvc]
    0x81_9B02_1040, // A2  BVS: V -> take
    0x80_D200_0000, // A3  -> interrupt poll
    0x81_C201_4002, // A4  [cla/not] 3 -> NOT
    0x00_10C0_9000, // A5  CLA: AC <- 0
    0x80_D200_0000, // A6  -> interrupt poll
    0x81_8B02_4002, // A7  [clc/cmc dispatch] 6,7
    0x81_AA01_4002, // A8  5 -> CMC
    0x80_C400_0000, // A9  4 -> CLC
    0x81_C401_1040, // AA  [CMC] C set -> clear it
    0x00_0022_0200, // AB  C <- 1
    0x80_D200_0000, // AC  -> interrupt poll
    0x81_CA01_4002, // AD  [sxtb/swab] B -> SWAB
    0x00_1081_1010, // AE  SXTB
    0x80_D200_0000, // AF  -> interrupt poll
    0x81_2401_4002, // B0  [neg or extended] F -> stack/control ext
    0x00_10E0_9610, // B1  NEG
    0x80_D200_0000, // B2  -> interrupt poll
    0x81_8E08_4002, // B3  [CALL] indirect
    0x00_2000_9002, // B4  BR <- target
    0x80_4600_0000, // B5  -> call push and jump
    0x81_9810_4002, // B6  [add/adc dispatch] B -> ADC
    0x80_B800_0000, // B7  A -> ADD
    0x00_10E0_9011, // B8  [ADD] ADD: AC <- AC+DR
    0x80_D200_0000, // B9  -> interrupt poll
    0x80_DC10_4002, // BA  [opcodes E and F] E -> miss
    0x80_5A00_0000, // BB  F -> branch group
    0x80_9B08_1040, // BC  [BPL] BPL: !N -> take
    0x80_D200_0000, // BD  -> interrupt poll
    0x80_9B01_1040, // BE  [BCC] BCC: !C -> take
    0x80_D200_0000, // BF  -> interrupt poll
    0x80_9B02_1040, // C0  [BVC] BVC: !V -> take
    0x80_D200_0000, // C1  -> interrupt poll
    0x00_1080_9210, // C2  [NOT] NOT: AC <- ~AC
    0x80_D200_0000, // C3  -> interrupt poll
    0x00_0020_0000, // C4  [CLC] CLC: C <- 0
    0x80_D200_0000, // C5  -> interrupt poll
    0x00_10B8_0010, // C6  [ROR] ROR through carry
    0x80_D200_0000, // C7  -> interrupt poll
    0x00_10A8_0010, // C8  [ASR] ASR (MSB kept)
    0x80_D200_0000, // C9  -> interrupt poll
    0x00_1080_6010, // CA  [SWAB] SWAB
    0x80_D200_0000, // CB  -> interrupt poll
    0x00_10E0_9110, // CC  [DEC] DEC
    0x80_D200_0000, // CD  -> interrupt poll
    0x02_0000_0000, // CE  [stack store] MEM(SP) <- DR
    0x80_D200_0000, // CF  -> interrupt poll
    0x00_0100_9040, // D0  [PUSHF] DR <- PS
    0x80_CE00_0000, // D1  -> stack store
    0x08_0000_0000, // D2  [interrupt poll] INTS strobe (hook)
    0x80_0140_1040, // D3  interrupts disabled -> fetch
    0x80_0120_1040, // D4  no request -> fetch
    0x80_0700_0000, // D5  -> interrupt entry
    0x00_8000_9400, // D6  [interrupt vector fetch] AR <- 1 (vector cell)
    0x01_0000_0000, // D7  DR <- MEM(1)
    0x00_0400_9001, // D8  IP <- handler
    0x04_0000_0000, // D9  IO strobe (hook), 0x0400000000
    0x00_0100_9080, // DA  staged-word read (reserved IR source)
    0x80_0100_0000, // DB  -> instruction fetch
    0x80_D200_0000, // DC  [decode miss] end the instruction
    0x40_0000_0000, // DD  [HLT parking] HLT parking word
    0x00_0000_0000, // DE
    0x00_0000_0000, // DF
    // E0..FF unpopulated
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
];

#[cfg(test)]
mod tests {
    use super::bits::{HTOH, LOAD, LTOL, RDCR, SETC, SHLT, STOR, TYPE, WRAC, WRDR};
    use super::{ControlWord, MICROCODE};

    #[test]
    fn test_every_word_fits_forty_bits() {
        for (i, &w) in MICROCODE.iter().enumerate() {
            assert!(w < 1 << 40, "word {i:#04X} is wider than 40 bits");
        }
    }

    #[test]
    fn test_fixed_entries() {
        assert_eq!(MICROCODE[0x00], 0x40_0000_0000, "halt word");
        assert_eq!(MICROCODE[0xD9], 0x04_0000_0000, "i/o strobe");
        assert_eq!(MICROCODE[0xDA], 0x00_0100_9080, "staged word read");
        assert!(MICROCODE.contains(&0x08_0000_0000), "interrupt strobe");
        assert!(MICROCODE[0xE0..].iter().all(|&w| w == 0));
    }

    #[test]
    fn test_decode_operational_word() {
        let mi = ControlWord::decode(RDCR | LTOL | HTOH | SETC | WRAC | STOR);
        assert!(mi.rdcr && mi.ltol && mi.htoh && mi.setc && mi.wrac && mi.stor);
        assert!(!mi.branch && !mi.load && !mi.wrdr);
        assert_eq!(mi.mask, 0);
        assert_eq!(mi.target, 0);
        assert!(!mi.expect);
    }

    #[test]
    fn test_decode_branch_word_reuses_fields() {
        // mask 0x04, expected 1, target 0x3C
        let word = TYPE | RDCR | LTOL | (0x04 << 16) | (0x3C << 24) | (1 << 32);
        let mi = ControlWord::decode(word);
        assert!(mi.branch && mi.rdcr && mi.ltol);
        assert_eq!(mi.mask, 0x04);
        assert_eq!(mi.target, 0x3C);
        assert!(mi.expect);
        // the overlapped operational fields must read as off
        assert!(!mi.shl0 && !mi.shrt && !mi.sext);
        assert!(!mi.wrac && !mi.wrdr && !mi.load && !mi.stor);
        assert!(!mi.setc && !mi.setv && !mi.stnz);
    }

    #[test]
    fn test_decode_shift_bits_live_outside_branch() {
        let mi = ControlWord::decode(SHLT | WRDR | LOAD);
        assert!(mi.shlt && mi.wrdr && mi.load);
    }
}
