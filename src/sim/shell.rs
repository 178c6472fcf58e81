//! Interactive command shell.
//!
//! One command per line on stdin. Registers and memory can be inspected and
//! poked between runs; pokes land in both state snapshots so they are
//! visible no matter where the pipeline stopped.

use std::io::{self, BufRead, Write};

use crate::core::Cpu;
use crate::isa::disasm;
use crate::sim::loader;

pub struct Shell {
    cpu: Cpu,
    image: Vec<u32>,
}

enum Command {
    RunAll,
    Run(u64),
    Rdump,
    Reset,
    Mdump(u32, u32),
    SetReg(usize, u32),
    SetHi(u32),
    SetLo(u32),
    Print,
    Show,
    Forward,
    Help,
    Quit,
}

impl Shell {
    pub fn new(cpu: Cpu, image: Vec<u32>) -> Self {
        Self { cpu, image }
    }

    pub fn run(&mut self) {
        print_help();
        let stdin = io::stdin();
        let mut line = String::new();

        loop {
            print!("mipsim> ");
            io::stdout().flush().ok();

            line.clear();
            match stdin.lock().read_line(&mut line) {
                Ok(0) | Err(_) => break,
                Ok(_) => (),
            }
            if line.trim().is_empty() {
                continue;
            }

            match parse(&line) {
                Some(Command::Quit) => {
                    println!("Exiting. Good bye.");
                    break;
                }
                Some(cmd) => self.dispatch(cmd),
                None => println!("Invalid Command."),
            }
        }
    }

    fn dispatch(&mut self, cmd: Command) {
        match cmd {
            Command::RunAll => self.run_all(),
            Command::Run(n) => self.run_cycles(n),
            Command::Rdump => self.rdump(),
            Command::Reset => self.reset(),
            Command::Mdump(lo, hi) => self.mdump(lo, hi),
            Command::SetReg(reg, val) => {
                self.cpu.current.regs.write(reg, val);
                self.cpu.next.regs.write(reg, val);
            }
            Command::SetHi(val) => {
                self.cpu.current.hi = val;
                self.cpu.next.hi = val;
            }
            Command::SetLo(val) => {
                self.cpu.current.lo = val;
                self.cpu.next.lo = val;
            }
            Command::Print => self.print_listing(),
            Command::Show => self.show_pipeline(),
            Command::Forward => {
                self.cpu.forwarding = !self.cpu.forwarding;
                println!(
                    "Forwarding {}.",
                    if self.cpu.forwarding {
                        "enabled"
                    } else {
                        "disabled"
                    }
                );
            }
            Command::Help => print_help(),
            Command::Quit => unreachable!("handled by the caller"),
        }
    }

    fn run_all(&mut self) {
        if !self.cpu.running {
            println!("Simulation Stopped.\n");
            return;
        }
        println!("Simulation Started...\n");
        self.cpu.run_to_halt();
        println!("Simulation Finished.\n");
    }

    fn run_cycles(&mut self, n: u64) {
        if !self.cpu.running {
            println!("Simulation Stopped.\n");
            return;
        }
        println!("Running simulator for {} cycles...\n", n);
        self.cpu.run(n);
    }

    fn reset(&mut self) {
        self.cpu.reset();
        loader::install(&mut self.cpu.mem, self.cpu.text_base, &self.image);
        println!("Simulator reset.\n");
    }

    fn rdump(&self) {
        println!("-------------------------------------");
        println!("Dumping Register Content");
        println!("-------------------------------------");
        println!(
            "# Instructions Executed\t: {}",
            self.cpu.stats.instructions_retired
        );
        println!("# Cycles Executed\t: {}", self.cpu.stats.cycles);
        println!("PC\t: {:#010x}", self.cpu.current.pc);
        println!("-------------------------------------");
        println!("[Register]\t[Value]");
        println!("-------------------------------------");
        for i in 0..32 {
            println!("[R{}]\t: {:#010x}", i, self.cpu.current.regs.read(i));
        }
        println!("-------------------------------------");
        println!("[HI]\t: {:#010x}", self.cpu.current.hi);
        println!("[LO]\t: {:#010x}", self.cpu.current.lo);
        println!("-------------------------------------");
    }

    fn mdump(&self, lo: u32, hi: u32) {
        println!("-------------------------------------");
        println!("Memory content [{:#010x}..{:#010x}]", lo, hi);
        println!("-------------------------------------");
        let mut addr = lo & !3;
        while addr <= hi {
            println!("{:#010x} ({})\t: {:#010x}", addr, addr, self.cpu.mem.read_u32(addr));
            match addr.checked_add(4) {
                Some(next) => addr = next,
                None => break,
            }
        }
        println!();
    }

    fn print_listing(&self) {
        for (i, word) in self.image.iter().enumerate() {
            let addr = self.cpu.text_base + i as u32 * 4;
            println!("{:#010x}  {}", addr, disasm::disassemble(*word, addr));
        }
    }

    fn show_pipeline(&self) {
        let cpu = &self.cpu;
        println!("---Pipeline Contents---");
        println!("PC\t\t{:#010x}", cpu.current.pc);
        println!();
        println!("IF/ID.IR\t{:#010x}  {}", cpu.if_id.ir, disasm::disassemble(cpu.if_id.ir, cpu.if_id.pc));
        println!("IF/ID.PC\t{:#010x}", cpu.if_id.pc);
        println!();
        println!("ID/EX.IR\t{:#010x}  {}", cpu.id_ex.ir, disasm::disassemble(cpu.id_ex.ir, cpu.id_ex.pc));
        println!("ID/EX.A\t\t{:#010x}", cpu.id_ex.a);
        println!("ID/EX.B\t\t{:#010x}", cpu.id_ex.b);
        println!("ID/EX.imm\t{:#010x}", cpu.id_ex.imm);
        println!();
        println!("EX/MEM.IR\t{:#010x}", cpu.ex_mem.ir);
        println!("EX/MEM.A\t{:#010x}", cpu.ex_mem.a);
        println!("EX/MEM.B\t{:#010x}", cpu.ex_mem.b);
        println!("EX/MEM.ALUOutput {:#010x}", cpu.ex_mem.alu_out);
        println!();
        println!("MEM/WB.IR\t{:#010x}", cpu.mem_wb.ir);
        println!("MEM/WB.ALUOutput {:#010x}", cpu.mem_wb.alu_out);
        println!("MEM/WB.LMD\t{:#010x}", cpu.mem_wb.lmd);
    }
}

fn parse(line: &str) -> Option<Command> {
    let mut tokens = line.split_whitespace();
    let head = tokens.next()?.to_ascii_lowercase();

    let cmd = match head.as_str() {
        "sim" | "s" => Command::RunAll,
        "run" | "r" => Command::Run(tokens.next()?.parse().ok()?),
        "rdump" => Command::Rdump,
        "reset" => Command::Reset,
        "mdump" | "m" => {
            let lo = parse_hex(tokens.next()?)?;
            let hi = parse_hex(tokens.next()?)?;
            Command::Mdump(lo, hi)
        }
        "input" | "i" => {
            let reg: usize = tokens.next()?.parse().ok()?;
            if reg >= 32 {
                return None;
            }
            Command::SetReg(reg, parse_value(tokens.next()?)?)
        }
        "high" | "h" => Command::SetHi(parse_value(tokens.next()?)?),
        "low" | "l" => Command::SetLo(parse_value(tokens.next()?)?),
        "print" | "p" => Command::Print,
        "show" => Command::Show,
        "forward" | "f" => Command::Forward,
        "?" | "help" => Command::Help,
        "quit" | "q" => Command::Quit,
        _ => return None,
    };
    Some(cmd)
}

/// Addresses are hex, with or without a 0x prefix.
fn parse_hex(s: &str) -> Option<u32> {
    u32::from_str_radix(s.trim_start_matches("0x"), 16).ok()
}

/// Poke values are decimal by default, hex with a 0x prefix.
fn parse_value(s: &str) -> Option<u32> {
    if let Some(hex) = s.strip_prefix("0x") {
        u32::from_str_radix(hex, 16).ok()
    } else {
        s.parse().ok()
    }
}

fn print_help() {
    println!("------------------------------------------------------------------");
    println!("sim\t\t\t-- simulate program to completion");
    println!("run <n>\t\t\t-- simulate program for <n> cycles");
    println!("rdump\t\t\t-- dump register values");
    println!("reset\t\t\t-- clear registers/memory and reload the program");
    println!("mdump <start> <stop>\t-- dump memory from <start> to <stop>");
    println!("input <reg> <val>\t-- set GPR <reg> to <val>");
    println!("high <val>\t\t-- set the HI register to <val>");
    println!("low <val>\t\t-- set the LO register to <val>");
    println!("print\t\t\t-- print the program loaded into memory");
    println!("show\t\t\t-- print the pipeline latch contents");
    println!("forward\t\t\t-- toggle the forwarding network");
    println!("?\t\t\t-- display this help menu");
    println!("quit\t\t\t-- exit the simulator");
    println!("------------------------------------------------------------------");
}
