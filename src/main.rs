//! MIPS32 pipeline simulator CLI.
//!
//! Loads a hex text program image into the simulated address space, then
//! either enters the interactive shell or, with `--batch`, runs to the
//! halting SYSCALL and prints statistics.

use clap::Parser;
use std::{fs, process};

use mipsim::config::Config;
use mipsim::core::Cpu;
use mipsim::mem::Memory;
use mipsim::sim::loader;
use mipsim::sim::shell::Shell;

#[derive(Parser, Debug)]
#[command(author, version, about = "MIPS32 five-stage pipeline simulator")]
struct Args {
    /// Program image: one 32-bit hex word per line.
    program: String,

    #[arg(short, long, default_value = "configs/default.toml")]
    config: String,

    /// Run to completion and print statistics instead of entering the shell.
    #[arg(long)]
    batch: bool,

    /// Start with the forwarding network disabled.
    #[arg(long)]
    no_forwarding: bool,

    /// Write final statistics as JSON to this path (batch mode).
    #[arg(long)]
    stats_json: Option<String>,
}

fn main() {
    let args = Args::parse();

    // A missing config file falls back to the built-in defaults; a config
    // file that exists but does not parse is an operator error.
    let config: Config = match fs::read_to_string(&args.config) {
        Ok(text) => match toml::from_str(&text) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("[!] FATAL: bad config '{}': {}", args.config, e);
                process::exit(1);
            }
        },
        Err(_) => Config::default(),
    };

    let mut mem = Memory::new(&config.memory);

    let image = loader::read_image(&args.program).unwrap_or_else(|e| {
        eprintln!("[!] FATAL: could not load '{}': {}", args.program, e);
        process::exit(1);
    });
    loader::install(&mut mem, config.memory.text_base_val(), &image);
    println!(
        "[Loader] {} words written into memory from {}",
        image.len(),
        args.program
    );

    let mut cpu = Cpu::new(mem, &config);
    if args.no_forwarding {
        cpu.forwarding = false;
    }

    println!("Memory layout:");
    for region in cpu.mem.regions() {
        println!(
            "  {:<6} {:#010x} - {:#010x}",
            region.name, region.begin, region.end
        );
    }
    println!(
        "Forwarding: {}",
        if cpu.forwarding { "enabled" } else { "disabled" }
    );
    println!();

    if args.batch {
        cpu.run_to_halt();
        cpu.stats.print();

        if let Some(path) = args.stats_json {
            match serde_json::to_string_pretty(&cpu.stats) {
                Ok(json) => {
                    if let Err(e) = fs::write(&path, json) {
                        eprintln!("[!] could not write '{}': {}", path, e);
                    }
                }
                Err(e) => eprintln!("[!] could not serialize statistics: {}", e),
            }
        }
        return;
    }

    Shell::new(cpu, image).run();
}
