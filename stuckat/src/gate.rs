//! Two-input gate records.

use std::fmt;

use crate::net::NetId;

/// The two-input gate primitives a netlist may contain.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum GateKind {
    /// `AND`
    And,
    /// `OR`
    Or,
    /// `NAND`
    Nand,
    /// `NOR`
    Nor,
}

impl GateKind {
    /// Recognise a gate type token, ignoring case.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        if token.eq_ignore_ascii_case("AND") {
            Some(Self::And)
        } else if token.eq_ignore_ascii_case("OR") {
            Some(Self::Or)
        } else if token.eq_ignore_ascii_case("NAND") {
            Some(Self::Nand)
        } else if token.eq_ignore_ascii_case("NOR") {
            Some(Self::Nor)
        } else {
            None
        }
    }

    /// A zero on either input forces the output.
    #[must_use]
    pub const fn is_and_like(self) -> bool {
        matches!(self, Self::And | Self::Nand)
    }

    /// A one on either input forces the output.
    #[must_use]
    pub const fn is_or_like(self) -> bool {
        matches!(self, Self::Or | Self::Nor)
    }
}

impl fmt::Display for GateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::And => "AND",
            Self::Or => "OR",
            Self::Nand => "NAND",
            Self::Nor => "NOR",
        })
    }
}

/// A gate record: `kind output input1 input2`.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub struct Gate {
    /// Gate function.
    pub kind: GateKind,
    /// Driven net.
    pub output: NetId,
    /// First input net.
    pub input1: NetId,
    /// Second input net.
    pub input2: NetId,
}

impl Gate {
    /// Create a gate record.
    #[must_use]
    pub const fn new(kind: GateKind, output: NetId, input1: NetId, input2: NetId) -> Self {
        Self { kind, output, input1, input2 }
    }

    /// Both inputs are tied to the same net, so the gate degenerates to a one-input function.
    #[must_use]
    pub fn is_self_paired(&self) -> bool {
        self.input1 == self.input2
    }

    /// The input nets in declaration order.
    #[must_use]
    pub const fn inputs(&self) -> [NetId; 2] {
        [self.input1, self.input2]
    }

    /// Every terminal of the gate: output first, then inputs.
    #[must_use]
    pub const fn terminals(&self) -> [NetId; 3] {
        [self.output, self.input1, self.input2]
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.kind, self.output, self.input1, self.input2)
    }
}

/// Gates in the order the netlist declared them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GateList {
    gates: Vec<Gate>,
}

impl GateList {
    /// Record a gate after every gate appended so far.
    pub fn append(&mut self, gate: Gate) {
        self.gates.push(gate);
    }

    /// Number of gates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.gates.len()
    }

    /// Returns true if there are no gates.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }

    /// Gates in declaration order.
    pub fn iter(&self) -> std::slice::Iter<'_, Gate> {
        self.gates.iter()
    }
}

impl<'a> IntoIterator for &'a GateList {
    type Item = &'a Gate;
    type IntoIter = std::slice::Iter<'a, Gate>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
