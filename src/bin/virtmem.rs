use std::process::ExitCode;

use anyhow::Context;

use virtmem::config::{Config, ConfigError, USAGE};
use virtmem::debugger::{self, Component, DebugLevel, set_debug_level};
use virtmem::sim::Simulator;
use virtmem::{vm_info, vm_phase};

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let config = match Config::from_args(&args) {
        Ok(config) => config,
        Err(ConfigError::Usage) => {
            println!("{USAGE}");
            return ExitCode::FAILURE;
        }
        Err(error) => {
            eprintln!("virtmem: {error}");
            return ExitCode::FAILURE;
        }
    };

    set_debug_level(config.debug_level);
    vm_info!(
        Component::Config,
        "{} pages, {} frames, {} replacement, {} workload, seed {}",
        config.npages,
        config.nframes,
        config.strategy,
        config.workload,
        config.seed
    );

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("virtmem: {error:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config) -> anyhow::Result<()> {
    let mut sim = vm_phase!("setup", {
        Simulator::from_config(config).with_context(|| {
            format!(
                "couldn't create virtual memory backed by {}",
                config.disk_path.display()
            )
        })
    })?;

    let checksum = vm_phase!(config.workload.name(), {
        sim.run(config.workload, config.seed)
    })
    .with_context(|| format!("{} failed", config.workload))?;

    sim.check_consistency()
        .context("frame table and page table diverged")?;

    println!("{}: checksum {}", config.workload, checksum);
    println!("{}", sim.stats());

    if debugger::should_log(DebugLevel::Debug) {
        eprintln!("{}", debugger::get_report());
    }

    Ok(())
}
