mod config;

use anyhow::Result;
use board_setup_core::{apply_stanza, run_preflight_checks, PatchOutcome, BOARD_STANZAS};
use clap::Parser;
use config::Args;
use log::info;
use std::process;

#[derive(Debug, Default, PartialEq, Eq)]
struct Summary {
    updated: usize,
    skipped: usize,
    untouched: usize,
}

fn main() {
    let args = Args::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(args.log_level()))
        .init();

    match run(&args) {
        Ok(summary) => {
            println!("\n--- Summary ---");
            println!("Updated:            {}", summary.updated);
            println!("Already patched:    {}", summary.skipped);
            println!("Left untouched:     {}", summary.untouched);
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            process::exit(1);
        }
    }
}

/// Patches the files in order. The first file that cannot be read or written
/// stops the run; files before it keep their changes.
fn run(args: &Args) -> Result<Summary> {
    info!("Base path: {:?}", args.base_path);

    match run_preflight_checks(&args.base_path, &BOARD_STANZAS) {
        Ok(_) => println!("\n--- Preflight Checks Passed. Proceeding with patching. ---"),
        Err(problems) => {
            println!("\n--- Preflight Checks Reported Problems ---");
            for problem in problems {
                println!("{}", problem);
            }
            println!("\nProceeding; patching stops at the first file that fails.");
        }
    }

    let mut summary = Summary::default();

    for stanza in &BOARD_STANZAS {
        let path = args.base_path.join(stanza.file_name);
        let outcome = apply_stanza(&path, stanza, args.dry_run)?;

        if let Some(msg) = stanza.status_message(outcome, args.dry_run) {
            println!("{}", msg);
        }

        match outcome {
            PatchOutcome::Inserted { .. } => summary.updated += 1,
            PatchOutcome::AlreadyPresent => summary.skipped += 1,
            PatchOutcome::AnchorMissing | PatchOutcome::BoundaryMissing => summary.untouched += 1,
        }
    }

    Ok(summary)
}
