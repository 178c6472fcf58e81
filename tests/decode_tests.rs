//! Tests for instruction field extraction, classification, and disassembly.

use mipsim::core::stages::decode::classify;
use mipsim::core::pipeline::signals::{AluOp, MemWidth, Transfer};
use mipsim::isa::disasm::disassemble;
use mipsim::isa::InstructionBits;

/// Tests field extraction on an I-type instruction (ADDI $r1, $r0, 5).
#[test]
fn test_bits_itype() {
    let inst = 0x20010005u32;
    assert_eq!(inst.opcode(), 0x08);
    assert_eq!(inst.rs(), 0);
    assert_eq!(inst.rt(), 1);
    assert_eq!(inst.imm16(), 5);
    assert_eq!(inst.simm16(), 5);
}

/// Tests field extraction on an R-type instruction (ADD $r3, $r1, $r2).
#[test]
fn test_bits_rtype() {
    let inst = 0x00221820u32;
    assert_eq!(inst.opcode(), 0x00);
    assert_eq!(inst.rs(), 1);
    assert_eq!(inst.rt(), 2);
    assert_eq!(inst.rd(), 3);
    assert_eq!(inst.funct(), 0x20);
}

/// Tests sign extension of a negative immediate.
#[test]
fn test_bits_negative_imm() {
    let inst = 0x2001FFFBu32;
    assert_eq!(inst.imm16(), 0xFFFB);
    assert_eq!(inst.simm16(), -5);
}

/// Tests shift amount extraction (SLL $r2, $r1, 4).
#[test]
fn test_bits_shamt() {
    let inst = 0x00011100u32;
    assert_eq!(inst.rt(), 1);
    assert_eq!(inst.rd(), 2);
    assert_eq!(inst.shamt(), 4);
    assert_eq!(inst.funct(), 0x00);
}

/// Tests jump target extraction.
#[test]
fn test_bits_target() {
    let inst = 0x0C100003u32;
    assert_eq!(inst.opcode(), 0x03);
    assert_eq!(inst.target(), 0x100003);
}

/// Tests that R-type arithmetic writes rd and reads rt.
#[test]
fn test_classify_rtype() {
    let (ctrl, dest) = classify(0x00221820);
    assert!(ctrl.reg_write);
    assert!(ctrl.reads_rt);
    assert_eq!(dest, 3);
    assert_eq!(ctrl.alu, AluOp::Add);
}

/// Tests that immediate arithmetic writes rt and reads only rs.
#[test]
fn test_classify_itype() {
    let (ctrl, dest) = classify(0x20010005);
    assert!(ctrl.reg_write);
    assert!(!ctrl.reads_rt);
    assert_eq!(dest, 1);
}

/// Tests load classification (LW $r2, 0($r1)).
#[test]
fn test_classify_load() {
    let (ctrl, dest) = classify(0x8C220000);
    assert!(ctrl.reg_write);
    assert!(ctrl.mem_read);
    assert!(!ctrl.mem_write);
    assert_eq!(ctrl.width, MemWidth::Word);
    assert_eq!(dest, 2);
}

/// Tests store classification: no destination, rt read as data.
#[test]
fn test_classify_store() {
    let (ctrl, _) = classify(0xA0410000);
    assert!(!ctrl.reg_write);
    assert!(ctrl.mem_write);
    assert!(ctrl.reads_rt);
    assert_eq!(ctrl.width, MemWidth::Byte);
}

/// Tests that BEQ reads rt but BLEZ does not.
#[test]
fn test_classify_branches() {
    let (beq, _) = classify(0x10220002);
    assert_eq!(beq.transfer, Transfer::Beq);
    assert!(beq.reads_rt);
    assert!(!beq.reg_write);

    let (blez, _) = classify(0x18200001);
    assert_eq!(blez.transfer, Transfer::Blez);
    assert!(!blez.reads_rt);
}

/// Tests that JAL links into r31.
#[test]
fn test_classify_jal() {
    let (ctrl, dest) = classify(0x0C100003);
    assert_eq!(ctrl.transfer, Transfer::JumpLink);
    assert!(ctrl.reg_write);
    assert_eq!(dest, 31);
}

/// Tests that JR writes nothing.
#[test]
fn test_classify_jr() {
    let (ctrl, _) = classify(0x03E00008);
    assert_eq!(ctrl.transfer, Transfer::JumpReg);
    assert!(!ctrl.reg_write);
}

/// Tests that the multiply/divide family targets HI:LO, not a GPR.
#[test]
fn test_classify_mult_div() {
    for inst in [0x00220018u32, 0x00220019, 0x0022001A, 0x0022001B] {
        let (ctrl, _) = classify(inst);
        assert!(!ctrl.reg_write, "{:#010x} must not write a GPR", inst);
    }
}

/// Tests SYSCALL classification.
#[test]
fn test_classify_syscall() {
    let (ctrl, _) = classify(0x0000000C);
    assert!(ctrl.is_syscall);
    assert!(!ctrl.reg_write);
}

/// Tests that an unknown opcode classifies as fully inert.
#[test]
fn test_classify_unknown() {
    let (ctrl, _) = classify(0xFC000000);
    assert!(!ctrl.reg_write);
    assert!(!ctrl.mem_read);
    assert!(!ctrl.mem_write);
    assert_eq!(ctrl.transfer, Transfer::None);
}

/// Tests disassembly of common encodings.
#[test]
fn test_disassemble() {
    assert_eq!(disassemble(0x00221820, 0x400000), "ADD $r3, $r1, $r2");
    assert_eq!(disassemble(0x20010005, 0x400000), "ADDI $r1, $r0, 0x5");
    assert_eq!(disassemble(0x8C220000, 0x400000), "LW $r2, 0x0($r1)");
    assert_eq!(disassemble(0x0000000C, 0x400000), "SYSCALL");
    assert_eq!(disassemble(0x03E00008, 0x400000), "JR $r31");
}

/// Tests that J/JAL targets resolve against the instruction address.
#[test]
fn test_disassemble_jump_target() {
    assert_eq!(disassemble(0x0C100003, 0x00400000), "JAL 0x40000c");
}

/// Tests the unknown-instruction message.
#[test]
fn test_disassemble_unknown() {
    assert_eq!(
        disassemble(0xFC000000, 0x400000),
        "Instruction is not implemented!"
    );
}
