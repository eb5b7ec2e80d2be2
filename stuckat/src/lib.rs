//! Utilities for working with single stuck-at faults in gate-level netlists.
//!
//! A stuck-at fault models a net (a "line" of the circuit) that is permanently fixed at logic 0 (stuck-at-0) or
//! logic 1 (stuck-at-1). Every net carries one fault of each kind, so a netlist of `n` nets has a fault universe of
//! `2n` single faults, written `sa0_<net>` and `sa1_<net>`.
//!
//! Test generation does not need to target every one of them. Two faults are equivalent when every test that detects
//! one also detects the other, and structural equivalence can be read straight off the gates:
//! - Input symmetry: an AND or NAND gate is forced by a zero on either input, so stuck-at-0 on one input cannot be
//!   told apart from stuck-at-0 on the other. Dually, stuck-at-1 on the inputs of an OR or NOR gate are equivalent.
//! - Inverters: a NAND gate with both inputs on the same net is a NOT gate, so stuck-at-0 on its input is equivalent
//!   to stuck-at-1 on its output, and stuck-at-1 on its input to stuck-at-0 on its output.
//!
//! Faults are merged into classes with a union-find over a dense fault encoding, and one representative is kept per
//! class. Separately, the gates give a fanout graph: each gate input is a stem driving the gate output as a branch.
//!
//! ```
//! use stuckat::{FaultClasses, Netlist};
//!
//! let netlist = Netlist::parse_str("INPUT 1 2\nAND 3 1 2\nOUTPUT 3\n");
//! let classes = FaultClasses::collapse(&netlist);
//! let kept = classes.representatives(netlist.nets());
//! assert_eq!(kept.len(), 5);
//! ```

#![forbid(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery)]
#![warn(missing_docs)]

pub mod collapse;
pub mod error;
pub mod fanout;
pub mod fault;
pub mod gate;
pub mod net;
pub mod netlist;
pub mod report;
pub mod union_find;

pub use collapse::FaultClasses;
pub use error::{Error, Result};
pub use fault::{Fault, Polarity};
pub use netlist::{Diagnostic, Netlist};
