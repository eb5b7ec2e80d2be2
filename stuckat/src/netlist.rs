//! Reader for the line-oriented netlist format.
//!
//! Each line is one record, selected by its first token (case-insensitive):
//!
//! ```text
//! # comment
//! INPUT 1 2
//! AND 3 1 2
//! FANOUT 3 4 5
//! OUTPUT 3
//! ```
//!
//! A `#` starts a comment that runs to the end of the line. Lines starting with any other token are labels and are
//! skipped. A malformed record becomes a [`Diagnostic`] and contributes nothing; the rest of the file is still read.

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, info, warn};
use thiserror::Error;

use crate::error::{Error, Result};
use crate::fanout::FanoutGraph;
use crate::gate::{Gate, GateKind, GateList};
use crate::net::{NetId, NetRegistry};

/// Declaration keywords.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Keyword {
    /// `INPUT <id>+`
    Input,
    /// `OUTPUT <id>+`
    Output,
    /// `FANOUT <stem> <branch>+`
    Fanout,
}

impl Keyword {
    fn from_token(token: &str) -> Option<Self> {
        if token.eq_ignore_ascii_case("INPUT") {
            Some(Self::Input)
        } else if token.eq_ignore_ascii_case("OUTPUT") {
            Some(Self::Output)
        } else if token.eq_ignore_ascii_case("FANOUT") {
            Some(Self::Fanout)
        } else {
            None
        }
    }

    const fn min_operands(self) -> usize {
        match self {
            Self::Input | Self::Output => 1,
            Self::Fanout => 2,
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Input => "INPUT",
            Self::Output => "OUTPUT",
            Self::Fanout => "FANOUT",
        })
    }
}

/// Why a line was skipped.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum DiagnosticKind {
    /// A gate without exactly three operands.
    #[error("malformed gate: expected `{kind} <out> <in1> <in2>`, found {found} operand(s)")]
    GateArity {
        /// Gate type on the line.
        kind: GateKind,
        /// Operands present.
        found: usize,
    },
    /// A gate terminal that is not a valid net id.
    #[error("malformed gate: {value} is not a valid net id")]
    InvalidGateNet {
        /// Offending operand.
        value: i64,
    },
    /// A declaration with too few operands.
    #[error("malformed {keyword}: expected at least {expected} net(s), found {found}")]
    DeclarationArity {
        /// Declaration keyword.
        keyword: Keyword,
        /// Minimum operands.
        expected: usize,
        /// Operands present.
        found: usize,
    },
    /// An operand that is not an integer.
    #[error("operand `{token}` is not an integer")]
    NotAnInteger {
        /// Offending token.
        token: String,
    },
}

/// A recoverable problem with one netlist line.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("Line {line}: {kind}")]
pub struct Diagnostic {
    /// One-based line number.
    pub line: usize,
    /// What was wrong with it.
    pub kind: DiagnosticKind,
}

fn parse_operands<'a>(tokens: impl Iterator<Item = &'a str>) -> std::result::Result<Vec<i64>, DiagnosticKind> {
    tokens
        .map(|token| {
            token.parse::<i64>().map_err(|_| DiagnosticKind::NotAnInteger { token: token.to_owned() })
        })
        .collect()
}

fn gate_net(value: i64) -> std::result::Result<NetId, DiagnosticKind> {
    NetId::new(value).ok_or(DiagnosticKind::InvalidGateNet { value })
}

fn valid_net(value: i64, line: usize) -> Option<NetId> {
    let net = NetId::new(value);
    if net.is_none() {
        debug!("line {}: ignoring invalid net id {}", line, value);
    }
    net
}

/// A parsed netlist: its nets, gates and fanout, plus whatever lines had to be skipped.
#[derive(Clone, Debug, Default)]
pub struct Netlist {
    nets: NetRegistry,
    gates: GateList,
    fanout: FanoutGraph,
    diagnostics: Vec<Diagnostic>,
}

impl Netlist {
    /// Read the netlist file at `path`.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be opened or read. Malformed lines are not errors; see [`Self::diagnostics`].
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|source| Error::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(BufReader::new(file))
    }

    /// Read a netlist from `reader`, one line at a time.
    ///
    /// # Errors
    ///
    /// Fails if the underlying reader does.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut netlist = Self::default();

        for (index, bytes) in reader.split(b'\n').enumerate() {
            let line = index + 1;
            let bytes = bytes.map_err(|source| Error::Read { line, source })?;
            netlist.read_line(line, &String::from_utf8_lossy(&bytes));
        }

        info!(
            "read {} nets, {} gates, {} fanout edges ({} lines skipped)",
            netlist.nets.len(),
            netlist.gates.len(),
            netlist.fanout.edge_count(),
            netlist.diagnostics.len()
        );

        Ok(netlist)
    }

    /// Parse a netlist held in memory.
    #[must_use]
    pub fn parse_str(text: &str) -> Self {
        let mut netlist = Self::default();
        for (index, line) in text.lines().enumerate() {
            netlist.read_line(index + 1, line);
        }
        netlist
    }

    fn read_line(&mut self, line: usize, text: &str) {
        if let Err(kind) = self.parse_record(line, text) {
            warn!("line {}: skipped `{}`: {}", line, text.trim(), kind);
            self.diagnostics.push(Diagnostic { line, kind });
        }
    }

    fn parse_record(&mut self, line: usize, text: &str) -> std::result::Result<(), DiagnosticKind> {
        let text = text.find('#').map_or(text, |comment| &text[..comment]);
        let mut tokens = text.split_ascii_whitespace();
        let head = match tokens.next() {
            Some(head) => head,
            None => return Ok(()),
        };

        if let Some(kind) = GateKind::from_token(head) {
            let operands = parse_operands(tokens)?;
            let [output, input1, input2] = <[i64; 3]>::try_from(operands.as_slice())
                .map_err(|_| DiagnosticKind::GateArity { kind, found: operands.len() })?;
            let gate = Gate::new(kind, gate_net(output)?, gate_net(input1)?, gate_net(input2)?);
            self.add_gate(gate);
        } else if let Some(keyword) = Keyword::from_token(head) {
            let operands = parse_operands(tokens)?;
            if operands.len() < keyword.min_operands() {
                return Err(DiagnosticKind::DeclarationArity {
                    keyword,
                    expected: keyword.min_operands(),
                    found: operands.len(),
                });
            }
            match keyword {
                Keyword::Input | Keyword::Output => {
                    for net in operands.into_iter().filter_map(|value| valid_net(value, line)) {
                        self.nets.register(net);
                    }
                }
                Keyword::Fanout => {
                    let stem = valid_net(operands[0], line);
                    if let Some(stem) = stem {
                        self.nets.register(stem);
                    }
                    for branch in operands[1..].iter().filter_map(|value| valid_net(*value, line)) {
                        self.nets.register(branch);
                        if let Some(stem) = stem {
                            self.fanout.add_edge(stem, branch);
                        }
                    }
                }
            }
        } else {
            debug!("line {}: ignoring label `{}`", line, head);
        }

        Ok(())
    }

    fn add_gate(&mut self, gate: Gate) {
        for net in gate.terminals() {
            self.nets.register(net);
        }
        self.fanout.add_gate(&gate);
        self.gates.append(gate);
    }

    /// Every net that appeared in the netlist.
    #[must_use]
    pub const fn nets(&self) -> &NetRegistry {
        &self.nets
    }

    /// Gates in declaration order.
    #[must_use]
    pub const fn gates(&self) -> &GateList {
        &self.gates
    }

    /// Derived and declared fanout.
    #[must_use]
    pub const fn fanout(&self) -> &FanoutGraph {
        &self.fanout
    }

    /// Lines that were skipped, in file order.
    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }
}
