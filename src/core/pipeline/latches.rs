//! Pipeline latch registers.
//!
//! Each latch snapshots what a stage produced for its successor. A latch
//! whose `ir` is 0 is a bubble: it carries no work and must cause no
//! architectural state change. `Default` constructs exactly that bubble,
//! which is also the reset state of every latch.

use crate::core::pipeline::signals::ControlSignals;

/// IF/ID latch: the fetched word and the address it came from.
#[derive(Clone, Copy, Default, Debug)]
pub struct IfId {
    pub pc: u32,
    pub ir: u32,
}

impl IfId {
    pub fn is_bubble(&self) -> bool {
        self.ir == 0
    }
}

/// ID/EX latch: operands read from the register file (or forwarded), the
/// sign-extended immediate, and the decoded control word.
#[derive(Clone, Copy, Default, Debug)]
pub struct IdEx {
    pub pc: u32,
    pub ir: u32,
    /// Value read for rs.
    pub a: u32,
    /// Value read for rt.
    pub b: u32,
    pub imm: i32,
    /// Destination register; meaningful only when `ctrl.reg_write` is set.
    pub dest: usize,
    pub ctrl: ControlSignals,
}

impl IdEx {
    pub fn is_bubble(&self) -> bool {
        self.ir == 0
    }
}

/// EX/MEM latch: the ALU result (a value, or the effective address of a
/// load/store) plus the operands carried through for stores.
#[derive(Clone, Copy, Default, Debug)]
pub struct ExMem {
    pub ir: u32,
    pub a: u32,
    pub b: u32,
    pub alu_out: u32,
    pub dest: usize,
    pub ctrl: ControlSignals,
}

impl ExMem {
    pub fn is_bubble(&self) -> bool {
        self.ir == 0
    }
}

/// MEM/WB latch. `lmd` holds the raw word fetched by a load; sub-word
/// sign extension is deferred to WB.
#[derive(Clone, Copy, Default, Debug)]
pub struct MemWb {
    pub ir: u32,
    pub alu_out: u32,
    pub lmd: u32,
    pub dest: usize,
    pub ctrl: ControlSignals,
}

impl MemWb {
    pub fn is_bubble(&self) -> bool {
        self.ir == 0
    }
}
