use crate::core::pipeline::signals::{AluOp, OpB, Transfer};
use crate::core::pipeline::ExMem;
use crate::core::Cpu;
use crate::isa::InstructionBits;

fn resolve_transfer(t: Transfer, a: u32, b: u32, pc: u32, imm: i32, target: u32) -> (bool, u32) {
    // PC-relative targets are based on the slot after the branch.
    let relative = pc.wrapping_add(4).wrapping_add((imm << 2) as u32);
    match t {
        Transfer::Beq => (a == b, relative),
        Transfer::Bne => (a != b, relative),
        Transfer::Blez => ((a as i32) <= 0, relative),
        Transfer::Bgtz => ((a as i32) > 0, relative),
        Transfer::Bltz => ((a as i32) < 0, relative),
        Transfer::Bgez => ((a as i32) >= 0, relative),
        Transfer::Jump | Transfer::JumpLink => (true, (pc & 0xF000_0000) | (target << 2)),
        Transfer::JumpReg | Transfer::JumpRegLink => (true, a),
        Transfer::None => (false, 0),
    }
}

pub fn execute_stage(cpu: &mut Cpu) {
    let id = cpu.id_ex;
    if id.is_bubble() {
        cpu.ex_mem = ExMem::default();
        return;
    }

    let ctrl = id.ctrl;
    let a = id.a;
    let b = match ctrl.b_src {
        OpB::Reg => id.b,
        OpB::SignImm => id.imm as u32,
        OpB::ZeroImm => (id.imm as u32) & 0xFFFF,
    };

    let mut alu_out = 0u32;

    if ctrl.transfer == Transfer::None {
        alu_out = match ctrl.alu {
            // Overflow is ignored: ADD behaves as ADDU.
            AluOp::Add => a.wrapping_add(b),
            AluOp::Sub => a.wrapping_sub(b),
            AluOp::And => a & b,
            AluOp::Or => a | b,
            AluOp::Xor => a ^ b,
            AluOp::Nor => !(a | b),
            AluOp::Slt => ((a as i32) < (b as i32)) as u32,
            AluOp::Sll => id.b << id.ir.shamt(),
            AluOp::Srl => id.b >> id.ir.shamt(),
            AluOp::Sra => ((id.b as i32) >> id.ir.shamt()) as u32,
            AluOp::Lui => (id.imm as u32) << 16,
            AluOp::Mult => {
                let product = (a as i32 as i64).wrapping_mul(id.b as i32 as i64) as u64;
                cpu.next.hi = (product >> 32) as u32;
                cpu.next.lo = product as u32;
                0
            }
            AluOp::Multu => {
                let product = (a as u64) * (id.b as u64);
                cpu.next.hi = (product >> 32) as u32;
                cpu.next.lo = product as u32;
                0
            }
            AluOp::Div => {
                // Divide by zero leaves HI/LO untouched.
                if id.b != 0 {
                    cpu.next.lo = (a as i32).wrapping_div(id.b as i32) as u32;
                    cpu.next.hi = (a as i32).wrapping_rem(id.b as i32) as u32;
                }
                0
            }
            AluOp::Divu => {
                if id.b != 0 {
                    cpu.next.lo = a / id.b;
                    cpu.next.hi = a % id.b;
                }
                0
            }
            AluOp::MfHi => cpu.current.hi,
            AluOp::MfLo => cpu.current.lo,
            AluOp::MtHi => {
                cpu.next.hi = a;
                0
            }
            AluOp::MtLo => {
                cpu.next.lo = a;
                0
            }
        };

        if ctrl.is_syscall {
            // Stop fetching; the in-flight instructions drain naturally and
            // the run flag drops when the SYSCALL itself retires in WB.
            cpu.halting = true;
        }

        if cpu.trace {
            eprintln!("EX  pc={:#010x} alu={:#010x}", id.pc, alu_out);
        }
    } else {
        let (taken, target) =
            resolve_transfer(ctrl.transfer, a, id.b, id.pc, id.imm, id.ir.target());

        if matches!(ctrl.transfer, Transfer::JumpLink | Transfer::JumpRegLink) {
            // The link address rides the normal WB path.
            alu_out = id.pc.wrapping_add(4);
        }

        if taken {
            cpu.next.pc = target;
            cpu.branch_taken = true;
            cpu.stats.flushes += 1;
            if cpu.trace {
                eprintln!("EX  pc={:#010x} taken -> {:#010x}", id.pc, target);
            }
        } else if cpu.trace {
            eprintln!("EX  pc={:#010x} not taken", id.pc);
        }
    }

    cpu.ex_mem = ExMem {
        ir: id.ir,
        a: id.a,
        b: id.b,
        alu_out,
        dest: id.dest,
        ctrl,
    };
}
