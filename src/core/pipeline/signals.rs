//! Pipeline control signals.
//!
//! The ID stage classifies each instruction exactly once into a
//! `ControlSignals` word that rides the latches to EX, MEM and WB, so the
//! downstream stages and the hazard logic never re-mask IR bits.

/// ALU operation selected by the decode classification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AluOp {
    /// Addition; also computes load/store addresses.
    #[default]
    Add,
    Sub,
    And,
    Or,
    Xor,
    Nor,
    /// Set-less-than, signed.
    Slt,
    /// Shifts apply to the rt value by the instruction's shift amount.
    Sll,
    Srl,
    Sra,
    /// Immediate into the upper half-word.
    Lui,
    /// Multiply/divide family targets HI:LO, not a GPR.
    Mult,
    Multu,
    Div,
    Divu,
    MfHi,
    MtHi,
    MfLo,
    MtLo,
}

/// Memory access width for loads and stores.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MemWidth {
    #[default]
    Word,
    Half,
    Byte,
}

/// Source of the second ALU operand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum OpB {
    /// The rt register value.
    #[default]
    Reg,
    /// Sign-extended 16-bit immediate.
    SignImm,
    /// Zero-extended 16-bit immediate (ANDI/ORI/XORI).
    ZeroImm,
}

/// Control-transfer kind, resolved in EX.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Transfer {
    #[default]
    None,
    Beq,
    Bne,
    Blez,
    Bgtz,
    Bltz,
    Bgez,
    Jump,
    JumpLink,
    JumpReg,
    JumpRegLink,
}

/// Per-instruction control word.
///
/// `Default` is all-inert, which is also the control word of a bubble:
/// nothing written, nothing accessed, nothing transferred.
#[derive(Clone, Copy, Debug, Default)]
pub struct ControlSignals {
    /// Instruction writes a GPR in WB.
    pub reg_write: bool,
    /// Instruction is a load.
    pub mem_read: bool,
    /// Instruction is a store.
    pub mem_write: bool,
    /// rt is read as data (hazard detection on rt).
    pub reads_rt: bool,
    /// SYSCALL: halt fetch and drain the pipeline.
    pub is_syscall: bool,
    pub width: MemWidth,
    pub alu: AluOp,
    pub b_src: OpB,
    pub transfer: Transfer,
}
