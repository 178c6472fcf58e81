//! One-instruction disassembler.
//!
//! Renders a raw word in the listing style used by the shell's `print` and
//! `show` commands. `pc` is the address the word was fetched from; it is
//! only needed to resolve J/JAL targets.

use super::{funct, op, regimm, InstructionBits};

pub fn disassemble(ir: u32, pc: u32) -> String {
    let rs = ir.rs();
    let rt = ir.rt();
    let rd = ir.rd();
    let sa = ir.shamt();
    let imm = ir.imm16();

    match ir.opcode() {
        op::SPECIAL => match ir.funct() {
            funct::SLL => format!("SLL $r{}, $r{}, {:#x}", rd, rt, sa),
            funct::SRL => format!("SRL $r{}, $r{}, {:#x}", rd, rt, sa),
            funct::SRA => format!("SRA $r{}, $r{}, {:#x}", rd, rt, sa),
            funct::JR => format!("JR $r{}", rs),
            funct::JALR if rd == 31 => format!("JALR $r{}", rs),
            funct::JALR => format!("JALR $r{}, $r{}", rd, rs),
            funct::SYSCALL => "SYSCALL".to_string(),
            funct::MFHI => format!("MFHI $r{}", rd),
            funct::MTHI => format!("MTHI $r{}", rs),
            funct::MFLO => format!("MFLO $r{}", rd),
            funct::MTLO => format!("MTLO $r{}", rs),
            funct::MULT => format!("MULT $r{}, $r{}", rs, rt),
            funct::MULTU => format!("MULTU $r{}, $r{}", rs, rt),
            funct::DIV => format!("DIV $r{}, $r{}", rs, rt),
            funct::DIVU => format!("DIVU $r{}, $r{}", rs, rt),
            funct::ADD => format!("ADD $r{}, $r{}, $r{}", rd, rs, rt),
            funct::ADDU => format!("ADDU $r{}, $r{}, $r{}", rd, rs, rt),
            funct::SUB => format!("SUB $r{}, $r{}, $r{}", rd, rs, rt),
            funct::SUBU => format!("SUBU $r{}, $r{}, $r{}", rd, rs, rt),
            funct::AND => format!("AND $r{}, $r{}, $r{}", rd, rs, rt),
            funct::OR => format!("OR $r{}, $r{}, $r{}", rd, rs, rt),
            funct::XOR => format!("XOR $r{}, $r{}, $r{}", rd, rs, rt),
            funct::NOR => format!("NOR $r{}, $r{}, $r{}", rd, rs, rt),
            funct::SLT => format!("SLT $r{}, $r{}, $r{}", rd, rs, rt),
            _ => "Instruction is not implemented!".to_string(),
        },
        op::REGIMM => match rt {
            regimm::BLTZ => format!("BLTZ $r{}, {:#x}", rs, imm << 2),
            regimm::BGEZ => format!("BGEZ $r{}, {:#x}", rs, imm << 2),
            _ => "Instruction is not implemented!".to_string(),
        },
        op::J => format!("J {:#x}", (pc & 0xF000_0000) | (ir.target() << 2)),
        op::JAL => format!("JAL {:#x}", (pc & 0xF000_0000) | (ir.target() << 2)),
        op::BEQ => format!("BEQ $r{}, $r{}, {:#x}", rs, rt, imm << 2),
        op::BNE => format!("BNE $r{}, $r{}, {:#x}", rs, rt, imm << 2),
        op::BLEZ => format!("BLEZ $r{}, {:#x}", rs, imm << 2),
        op::BGTZ => format!("BGTZ $r{}, {:#x}", rs, imm << 2),
        op::ADDI => format!("ADDI $r{}, $r{}, {:#x}", rt, rs, imm),
        op::ADDIU => format!("ADDIU $r{}, $r{}, {:#x}", rt, rs, imm),
        op::SLTI => format!("SLTI $r{}, $r{}, {:#x}", rt, rs, imm),
        op::ANDI => format!("ANDI $r{}, $r{}, {:#x}", rt, rs, imm),
        op::ORI => format!("ORI $r{}, $r{}, {:#x}", rt, rs, imm),
        op::XORI => format!("XORI $r{}, $r{}, {:#x}", rt, rs, imm),
        op::LUI => format!("LUI $r{}, {:#x}", rt, imm),
        op::LB => format!("LB $r{}, {:#x}($r{})", rt, imm, rs),
        op::LH => format!("LH $r{}, {:#x}($r{})", rt, imm, rs),
        op::LW => format!("LW $r{}, {:#x}($r{})", rt, imm, rs),
        op::SB => format!("SB $r{}, {:#x}($r{})", rt, imm, rs),
        op::SH => format!("SH $r{}, {:#x}($r{})", rt, imm, rs),
        op::SW => format!("SW $r{}, {:#x}($r{})", rt, imm, rs),
        _ => "Instruction is not implemented!".to_string(),
    }
}
