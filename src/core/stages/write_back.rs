use crate::core::pipeline::signals::{MemWidth, Transfer};
use crate::core::Cpu;

pub fn wb_stage(cpu: &mut Cpu) {
    let wb = cpu.mem_wb;
    if wb.is_bubble() {
        return;
    }

    cpu.stats.instructions_retired += 1;
    if wb.ctrl.mem_read {
        cpu.stats.inst_load += 1;
    } else if wb.ctrl.mem_write {
        cpu.stats.inst_store += 1;
    } else if wb.ctrl.transfer != Transfer::None {
        cpu.stats.inst_branch += 1;
    } else if wb.ctrl.is_syscall {
        cpu.stats.inst_system += 1;
    } else {
        cpu.stats.inst_alu += 1;
    }

    if wb.ctrl.reg_write {
        let val = if wb.ctrl.mem_read {
            match wb.ctrl.width {
                MemWidth::Byte => wb.lmd as u8 as i8 as i32 as u32,
                MemWidth::Half => wb.lmd as u16 as i16 as i32 as u32,
                MemWidth::Word => wb.lmd,
            }
        } else {
            wb.alu_out
        };

        // Half-cycle register file: written into both snapshots so this
        // cycle's ID read observes the value.
        cpu.next.regs.write(wb.dest, val);
        cpu.current.regs.write(wb.dest, val);

        if cpu.trace {
            eprintln!("WB  r{} <= {:#010x}", wb.dest, val);
        }
    }

    if wb.ctrl.is_syscall {
        cpu.running = false;
    }
}
