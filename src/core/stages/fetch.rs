use crate::core::pipeline::IfId;
use crate::core::Cpu;

pub fn fetch_stage(cpu: &mut Cpu) {
    if cpu.branch_taken {
        // EX redirected next.pc this cycle; the speculative slot dies here
        // and the redirect must not be clobbered.
        cpu.if_id = IfId::default();
        return;
    }

    if cpu.stall_cycles > 0 {
        // Hold IF/ID and PC so the stalled instruction is re-decoded.
        return;
    }

    if cpu.halting {
        // SYSCALL is in flight: feed bubbles while the pipeline drains.
        cpu.if_id = IfId::default();
        return;
    }

    let pc = cpu.current.pc;
    let ir = cpu.mem.read_u32(pc);

    if cpu.trace {
        eprintln!("IF  pc={:#010x} inst={:#010x}", pc, ir);
    }

    cpu.if_id = IfId { pc, ir };
    cpu.next.pc = pc.wrapping_add(4);
}
