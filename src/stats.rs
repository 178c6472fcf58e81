//! Simulation statistics collection and reporting.
//!
//! Tracks cycle and retirement counts, hazard activity, and the retired
//! instruction mix.

use serde::Serialize;
use std::time::Instant;

/// Counters accumulated over a simulation run.
///
/// `stalls_data` counts bubbles injected for RAW and load-use hazards;
/// `flushes` counts taken control transfers (each of which kills the two
/// speculative slots behind it). The instruction mix is counted at
/// retirement in the WB stage.
#[derive(Serialize)]
pub struct SimStats {
    #[serde(skip)]
    start_time: Instant,

    pub cycles: u64,
    pub instructions_retired: u64,

    pub stalls_data: u64,
    pub flushes: u64,

    pub inst_alu: u64,
    pub inst_load: u64,
    pub inst_store: u64,
    pub inst_branch: u64,
    pub inst_system: u64,
}

impl Default for SimStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            cycles: 0,
            instructions_retired: 0,
            stalls_data: 0,
            flushes: 0,
            inst_alu: 0,
            inst_load: 0,
            inst_store: 0,
            inst_branch: 0,
            inst_system: 0,
        }
    }
}

impl SimStats {
    /// Prints a formatted summary of the run.
    pub fn print(&self) {
        let seconds = self.start_time.elapsed().as_secs_f64();

        let cyc = if self.cycles == 0 { 1 } else { self.cycles };
        let instr = if self.instructions_retired == 0 {
            1
        } else {
            self.instructions_retired
        };

        let ipc = self.instructions_retired as f64 / cyc as f64;
        let cpi = cyc as f64 / instr as f64;

        println!("\n==================================================");
        println!("MIPS PIPELINE SIMULATION STATISTICS");
        println!("==================================================");
        println!("host_seconds             {:.4} s", seconds);
        println!("sim_cycles               {}", self.cycles);
        println!("sim_insts                {}", self.instructions_retired);
        println!("sim_ipc                  {:.4}", ipc);
        println!("sim_cpi                  {:.4}", cpi);
        println!("--------------------------------------------------");
        println!("HAZARDS");
        println!(
            "  stalls.data            {} ({:.2}%)",
            self.stalls_data,
            (self.stalls_data as f64 / cyc as f64) * 100.0
        );
        println!("  flushes.control        {}", self.flushes);
        println!("--------------------------------------------------");
        println!("INSTRUCTION MIX");
        let total = instr as f64;
        let mix = [
            ("op.alu", self.inst_alu),
            ("op.load", self.inst_load),
            ("op.store", self.inst_store),
            ("op.branch", self.inst_branch),
            ("op.system", self.inst_system),
        ];
        for (name, count) in mix {
            println!(
                "  {:<22} {} ({:.2}%)",
                name,
                count,
                (count as f64 / total) * 100.0
            );
        }
        println!("==================================================");
    }
}
