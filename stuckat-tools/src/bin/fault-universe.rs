//! List the single stuck-at fault universe of a netlist and its stem -> branch fanout.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use stuckat::report::UniverseReport;
use stuckat::Netlist;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Netlist to enumerate.
    netlist: PathBuf,

    /// Only print the counts and the fanout, not every fault.
    #[arg(long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let _ = env_logger::builder().try_init();
    let args = Args::parse();

    let netlist = Netlist::from_path(&args.netlist)?;
    for diagnostic in netlist.diagnostics() {
        eprintln!("{}", diagnostic);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    UniverseReport::new(&netlist, args.quiet)
        .write(&mut out)
        .context("failed to write report")?;
    out.flush()?;
    Ok(())
}
