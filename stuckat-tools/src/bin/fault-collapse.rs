//! Collapse the single stuck-at faults of a netlist to one representative per equivalence class.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use stuckat::report::CollapseReport;
use stuckat::{FaultClasses, Netlist};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Netlist to collapse.
    netlist: PathBuf,

    /// Also list the members of every equivalence class.
    #[arg(long)]
    list_classes: bool,
}

fn main() -> Result<()> {
    let _ = env_logger::builder().try_init();
    let args = Args::parse();

    let netlist = Netlist::from_path(&args.netlist)?;
    for diagnostic in netlist.diagnostics() {
        eprintln!("{}", diagnostic);
    }

    let classes = FaultClasses::collapse(&netlist);
    let report = CollapseReport::new(&netlist, &classes, args.list_classes);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    report.write(&mut out).context("failed to write report")?;
    out.flush()?;
    Ok(())
}
