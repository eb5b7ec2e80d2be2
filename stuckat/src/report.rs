//! Text reports for the fault universe and its collapsed form.

use std::io;

use itertools::Itertools;

use crate::collapse::FaultClasses;
use crate::fault::{self, Fault};
use crate::netlist::Netlist;

/// Summary of collapsing a netlist's fault universe.
#[derive(Clone, Debug, PartialEq)]
pub struct CollapseReport {
    initial_faults: usize,
    representatives: Vec<Fault>,
    classes: Option<Vec<Vec<Fault>>>,
}

impl CollapseReport {
    /// Summarise `classes` over the nets of `netlist`, optionally listing every class in full.
    #[must_use]
    pub fn new(netlist: &Netlist, classes: &FaultClasses, list_classes: bool) -> Self {
        Self {
            initial_faults: fault::universe_size(netlist.nets()),
            representatives: classes.representatives(netlist.nets()),
            classes: list_classes.then(|| classes.classes(netlist.nets())),
        }
    }

    /// Size of the uncollapsed fault universe.
    #[must_use]
    pub const fn initial_faults(&self) -> usize {
        self.initial_faults
    }

    /// One fault per equivalence class.
    #[must_use]
    pub fn representatives(&self) -> &[Fault] {
        &self.representatives
    }

    /// Initial faults per kept fault, if any fault was kept.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn ratio(&self) -> Option<f64> {
        let kept = self.representatives.len();
        (kept > 0).then(|| self.initial_faults as f64 / kept as f64)
    }

    /// Write the report.
    #[allow(clippy::missing_errors_doc)]
    pub fn write<T: io::Write>(&self, mut writer: T) -> io::Result<()> {
        writeln!(writer, "Initial faults: {}", self.initial_faults)?;
        writeln!(writer, "Collapsed (equivalence) faults: {}", self.representatives.len())?;
        if let Some(ratio) = self.ratio() {
            writeln!(writer, "Collapse ratio: {:.2}", ratio)?;
        }

        writeln!(writer, "----")?;
        writeln!(writer, "Kept representatives:")?;
        for fault in &self.representatives {
            writeln!(writer, "{}", fault)?;
        }

        if let Some(classes) = &self.classes {
            writeln!(writer, "----")?;
            writeln!(writer, "Classes:")?;
            for class in classes {
                writeln!(writer, "{{ {} }}", class.iter().join(" "))?;
            }
        }

        Ok(())
    }
}

/// Listing of every fault of a netlist and its fanout.
#[derive(Clone, Copy, Debug)]
pub struct UniverseReport<'a> {
    netlist: &'a Netlist,
    quiet: bool,
}

impl<'a> UniverseReport<'a> {
    /// Report on `netlist`. A quiet report leaves out the per-fault listing.
    #[must_use]
    pub const fn new(netlist: &'a Netlist, quiet: bool) -> Self {
        Self { netlist, quiet }
    }

    /// Write the report.
    #[allow(clippy::missing_errors_doc)]
    pub fn write<T: io::Write>(&self, mut writer: T) -> io::Result<()> {
        let nets = self.netlist.nets();

        if !self.quiet {
            for fault in fault::universe(nets) {
                writeln!(writer, "{}", fault)?;
            }
            writeln!(writer, "----")?;
        }
        writeln!(writer, "Distinct lines (nets): {}", nets.len())?;
        writeln!(writer, "Total single stuck-at faults: {}", fault::universe_size(nets))?;

        writeln!(writer, "----")?;
        writeln!(writer, "Fanout (stem -> branches):")?;
        for (stem, branches) in self.netlist.fanout().stems() {
            writeln!(writer, "{} -> {}", stem, branches.iter().join(" "))?;
        }

        Ok(())
    }
}
