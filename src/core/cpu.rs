use crate::config::Config;
use crate::core::arch::ArchState;
use crate::core::pipeline::{ExMem, IdEx, IfId, MemWb};
use crate::core::stages;
use crate::mem::Memory;
use crate::stats::SimStats;

pub struct Cpu {
    pub current: ArchState,
    pub next: ArchState,
    pub mem: Memory,

    pub if_id: IfId,
    pub id_ex: IdEx,
    pub ex_mem: ExMem,
    pub mem_wb: MemWb,

    /// Bubbles still owed to ID from a scheduled stall.
    pub stall_cycles: u32,
    /// A transfer resolved taken in EX this cycle.
    pub branch_taken: bool,
    /// SYSCALL seen in EX: fetch stops while the pipeline drains.
    pub halting: bool,
    /// Cleared when the SYSCALL retires in WB.
    pub running: bool,

    pub forwarding: bool,
    pub trace: bool,
    pub text_base: u32,

    pub stats: SimStats,
}

impl Cpu {
    pub fn new(mem: Memory, config: &Config) -> Self {
        let text_base = config.memory.text_base_val();
        let mut current = ArchState::default();
        current.pc = text_base;

        Self {
            current,
            next: current,
            mem,
            if_id: IfId::default(),
            id_ex: IdEx::default(),
            ex_mem: ExMem::default(),
            mem_wb: MemWb::default(),
            stall_cycles: 0,
            branch_taken: false,
            halting: false,
            running: true,
            forwarding: config.general.forwarding,
            trace: config.general.trace_instructions || cfg!(feature = "always-trace"),
            text_base,
            stats: SimStats::default(),
        }
    }

    /// Advances the machine by one clock.
    ///
    /// WB runs first so its register write is visible to this cycle's ID
    /// read; the remaining stages run in reverse order so each consumes its
    /// input latch before the upstream producer overwrites it. A taken
    /// transfer leaves the two speculative slots as bubbles, then the
    /// next-state snapshot commits.
    pub fn tick(&mut self) {
        if !self.running {
            return;
        }

        stages::write_back::wb_stage(self);
        stages::memory_access::mem_stage(self);
        stages::execute::execute_stage(self);
        stages::decode::decode_stage(self);
        stages::fetch::fetch_stage(self);

        if self.branch_taken {
            self.if_id = IfId::default();
            self.id_ex = IdEx::default();
            self.stall_cycles = 0;
            self.branch_taken = false;
        }

        self.current = self.next;
        self.stats.cycles += 1;
    }

    /// Runs at most `cycles` clocks, stopping early on halt.
    pub fn run(&mut self, cycles: u64) {
        for _ in 0..cycles {
            if !self.running {
                break;
            }
            self.tick();
        }
    }

    /// Runs until the program halts via SYSCALL.
    pub fn run_to_halt(&mut self) {
        while self.running {
            self.tick();
        }
    }

    /// Returns the machine to its power-on state. Memory is rezeroed, so
    /// the caller reinstalls the program image afterwards.
    pub fn reset(&mut self) {
        self.current = ArchState::default();
        self.current.pc = self.text_base;
        self.next = self.current;
        self.if_id = IfId::default();
        self.id_ex = IdEx::default();
        self.ex_mem = ExMem::default();
        self.mem_wb = MemWb::default();
        self.stall_cycles = 0;
        self.branch_taken = false;
        self.halting = false;
        self.running = true;
        self.stats = SimStats::default();
        self.mem.clear();
    }
}
