use crate::core::pipeline::hazards;
use crate::core::pipeline::signals::{AluOp, ControlSignals, MemWidth, OpB, Transfer};
use crate::core::pipeline::IdEx;
use crate::core::Cpu;
use crate::isa::{abi, funct, op, regimm, InstructionBits};

/// Derives the control word and destination register for one instruction.
///
/// Unknown encodings come back fully inert: no register write, no memory
/// access, no transfer. They still flow down the pipeline and retire, they
/// just do nothing on the way.
pub fn classify(ir: u32) -> (ControlSignals, usize) {
    let mut c = ControlSignals::default();
    let mut dest = 0usize;

    match ir.opcode() {
        op::SPECIAL => {
            // R-type reads rt as data (shifts included: they shift the rt
            // value). JR/MFHI/... have rt = 0, which the hazard logic
            // already excludes.
            c.reads_rt = true;
            match ir.funct() {
                funct::SLL | funct::SRL | funct::SRA => {
                    c.reg_write = true;
                    dest = ir.rd() as usize;
                    c.alu = match ir.funct() {
                        funct::SLL => AluOp::Sll,
                        funct::SRL => AluOp::Srl,
                        _ => AluOp::Sra,
                    };
                }
                funct::JR => c.transfer = Transfer::JumpReg,
                funct::JALR => {
                    c.transfer = Transfer::JumpRegLink;
                    c.reg_write = true;
                    dest = ir.rd() as usize;
                }
                funct::SYSCALL => c.is_syscall = true,
                funct::MFHI => {
                    c.reg_write = true;
                    dest = ir.rd() as usize;
                    c.alu = AluOp::MfHi;
                }
                funct::MFLO => {
                    c.reg_write = true;
                    dest = ir.rd() as usize;
                    c.alu = AluOp::MfLo;
                }
                funct::MTHI => c.alu = AluOp::MtHi,
                funct::MTLO => c.alu = AluOp::MtLo,
                funct::MULT => c.alu = AluOp::Mult,
                funct::MULTU => c.alu = AluOp::Multu,
                funct::DIV => c.alu = AluOp::Div,
                funct::DIVU => c.alu = AluOp::Divu,
                funct::ADD | funct::ADDU | funct::SUB | funct::SUBU | funct::AND | funct::OR
                | funct::XOR | funct::NOR | funct::SLT => {
                    c.reg_write = true;
                    dest = ir.rd() as usize;
                    c.alu = match ir.funct() {
                        funct::ADD | funct::ADDU => AluOp::Add,
                        funct::SUB | funct::SUBU => AluOp::Sub,
                        funct::AND => AluOp::And,
                        funct::OR => AluOp::Or,
                        funct::XOR => AluOp::Xor,
                        funct::NOR => AluOp::Nor,
                        _ => AluOp::Slt,
                    };
                }
                _ => (),
            }
        }
        op::REGIMM => match ir.rt() {
            regimm::BLTZ => c.transfer = Transfer::Bltz,
            regimm::BGEZ => c.transfer = Transfer::Bgez,
            _ => (),
        },
        op::J => c.transfer = Transfer::Jump,
        op::JAL => {
            c.transfer = Transfer::JumpLink;
            c.reg_write = true;
            dest = abi::RA;
        }
        op::BEQ => {
            c.transfer = Transfer::Beq;
            c.reads_rt = true;
        }
        op::BNE => {
            c.transfer = Transfer::Bne;
            c.reads_rt = true;
        }
        op::BLEZ => c.transfer = Transfer::Blez,
        op::BGTZ => c.transfer = Transfer::Bgtz,
        op::ADDI | op::ADDIU => {
            c.reg_write = true;
            dest = ir.rt() as usize;
            c.b_src = OpB::SignImm;
        }
        op::SLTI => {
            c.reg_write = true;
            dest = ir.rt() as usize;
            c.alu = AluOp::Slt;
            c.b_src = OpB::SignImm;
        }
        op::ANDI | op::ORI | op::XORI => {
            c.reg_write = true;
            dest = ir.rt() as usize;
            c.b_src = OpB::ZeroImm;
            c.alu = match ir.opcode() {
                op::ANDI => AluOp::And,
                op::ORI => AluOp::Or,
                _ => AluOp::Xor,
            };
        }
        op::LUI => {
            c.reg_write = true;
            dest = ir.rt() as usize;
            c.alu = AluOp::Lui;
        }
        op::LB | op::LH | op::LW => {
            c.reg_write = true;
            dest = ir.rt() as usize;
            c.mem_read = true;
            c.b_src = OpB::SignImm;
            c.width = match ir.opcode() {
                op::LB => MemWidth::Byte,
                op::LH => MemWidth::Half,
                _ => MemWidth::Word,
            };
        }
        op::SB | op::SH | op::SW => {
            c.mem_write = true;
            c.reads_rt = true;
            c.b_src = OpB::SignImm;
            c.width = match ir.opcode() {
                op::SB => MemWidth::Byte,
                op::SH => MemWidth::Half,
                _ => MemWidth::Word,
            };
        }
        _ => (),
    }

    (c, dest)
}

pub fn decode_stage(cpu: &mut Cpu) {
    // A bubble count scheduled by an earlier hazard burns down first.
    if cpu.stall_cycles > 0 {
        cpu.stall_cycles -= 1;
    }

    if cpu.branch_taken {
        cpu.id_ex = IdEx::default();
        return;
    }

    if cpu.halting {
        // Nothing behind the SYSCALL may issue, or its EX/MEM side effects
        // would commit past the halt.
        cpu.id_ex = IdEx::default();
        return;
    }

    let ir = cpu.if_id.ir;
    if ir == 0 {
        cpu.id_ex = IdEx::default();
        return;
    }

    if !cpu.forwarding && cpu.stall_cycles > 0 {
        cpu.stats.stalls_data += 1;
        cpu.id_ex = IdEx::default();
        return;
    }

    let (ctrl, dest) = classify(ir);
    let rs = ir.rs() as usize;
    let rt = ir.rt() as usize;

    // WB ran earlier this cycle and wrote into `current`, so these reads
    // already see the freshly retired value.
    let mut a = cpu.current.regs.read(rs);
    let mut b = cpu.current.regs.read(rt);

    if cpu.forwarding {
        let (fa, fb, load_use) =
            hazards::forward_operands(&cpu.ex_mem, &cpu.mem_wb, rs, rt, ctrl.reads_rt, a, b);
        if load_use {
            cpu.stall_cycles = 1;
            cpu.stats.stalls_data += 1;
            cpu.id_ex = IdEx::default();
            return;
        }
        a = fa;
        b = fb;
    } else {
        if hazards::raw_from_ex_mem(&cpu.ex_mem, rs, rt, ctrl.reads_rt) {
            cpu.stall_cycles = 2;
        } else if hazards::raw_from_mem_wb(&cpu.mem_wb, rs, rt, ctrl.reads_rt) {
            cpu.stall_cycles = cpu.stall_cycles.max(1);
        }
        if cpu.stall_cycles > 0 {
            cpu.stats.stalls_data += 1;
            cpu.id_ex = IdEx::default();
            return;
        }
    }

    if cpu.trace {
        eprintln!(
            "ID  pc={:#010x} inst={:#010x} rs=r{} a={:#x} rt=r{} b={:#x}",
            cpu.if_id.pc, ir, rs, a, rt, b
        );
    }

    cpu.id_ex = IdEx {
        pc: cpu.if_id.pc,
        ir,
        a,
        b,
        imm: ir.simm16(),
        dest,
        ctrl,
    };
}
