//! Data hazard detection and forwarding.
//!
//! ID calls into this module after reading the register file. In stall mode
//! the producer predicates decide how many bubbles to schedule (two for a
//! distance-1 RAW, one for distance-2). In forwarding mode the bypass
//! network patches the operands instead, with one unavoidable exception:
//! a consumer immediately behind a load still costs one bubble, because the
//! value latched in EX/MEM is the load address rather than the datum.

use crate::core::pipeline::latches::{ExMem, MemWb};

/// Distance-1 RAW: the instruction in EX/MEM will write a register this
/// instruction reads.
pub fn raw_from_ex_mem(ex_mem: &ExMem, rs: usize, rt: usize, rt_is_src: bool) -> bool {
    ex_mem.ctrl.reg_write
        && ex_mem.dest != 0
        && (ex_mem.dest == rs || (rt_is_src && ex_mem.dest == rt))
}

/// Distance-2 RAW: the instruction in MEM/WB will write a register this
/// instruction reads.
pub fn raw_from_mem_wb(mem_wb: &MemWb, rs: usize, rt: usize, rt_is_src: bool) -> bool {
    mem_wb.ctrl.reg_write
        && mem_wb.dest != 0
        && (mem_wb.dest == rs || (rt_is_src && mem_wb.dest == rt))
}

/// The bypass network.
///
/// `a` and `b` arrive as the register-file values for rs and rt and come
/// back patched with the youngest in-flight producer, EX/MEM taking
/// priority over MEM/WB for each operand independently. MEM/WB supplies the
/// loaded datum for loads and the ALU result for everything else. The third
/// return value reports a load-use hazard: the producer in EX/MEM is a load,
/// so the consumer must be bubbled for one cycle and re-forwarded from
/// MEM/WB on the next.
pub fn forward_operands(
    ex_mem: &ExMem,
    mem_wb: &MemWb,
    rs: usize,
    rt: usize,
    rt_is_src: bool,
    mut a: u32,
    mut b: u32,
) -> (u32, u32, bool) {
    let mut load_use = false;

    let wb_value = if mem_wb.ctrl.mem_read {
        mem_wb.lmd
    } else {
        mem_wb.alu_out
    };
    let wb_writes = |src: usize| mem_wb.ctrl.reg_write && mem_wb.dest != 0 && mem_wb.dest == src;
    let ex_writes = |src: usize| ex_mem.ctrl.reg_write && ex_mem.dest != 0 && ex_mem.dest == src;

    if ex_writes(rs) {
        if ex_mem.ctrl.mem_read {
            load_use = true;
        } else {
            a = ex_mem.alu_out;
        }
    } else if wb_writes(rs) {
        a = wb_value;
    }

    if rt_is_src {
        if ex_writes(rt) {
            if ex_mem.ctrl.mem_read {
                load_use = true;
            } else {
                b = ex_mem.alu_out;
            }
        } else if wb_writes(rt) {
            b = wb_value;
        }
    }

    (a, b, load_use)
}
