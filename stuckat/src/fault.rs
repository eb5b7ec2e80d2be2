//! Stuck-at faults and their dense encoding.

use std::fmt;

use crate::net::{NetId, NetRegistry};

/// The value a faulty net is stuck at.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub enum Polarity {
    /// Stuck-at-0.
    StuckAt0,
    /// Stuck-at-1.
    StuckAt1,
}

impl Polarity {
    /// Both polarities, in enumeration order.
    pub const ALL: [Self; 2] = [Self::StuckAt0, Self::StuckAt1];

    #[must_use]
    const fn bit(self) -> usize {
        match self {
            Self::StuckAt0 => 0,
            Self::StuckAt1 => 1,
        }
    }

    /// The opposite polarity.
    #[must_use]
    pub const fn inverted(self) -> Self {
        match self {
            Self::StuckAt0 => Self::StuckAt1,
            Self::StuckAt1 => Self::StuckAt0,
        }
    }
}

/// A single stuck-at fault.
///
/// Faults are never stored individually. Each one maps to a dense index, `2 * (net - 1) + polarity`,
/// which addresses the classifier's arrays directly.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct Fault {
    /// The faulty net.
    pub net: NetId,
    /// The value it is stuck at.
    pub polarity: Polarity,
}

impl Fault {
    /// A fault on `net` stuck at `polarity`.
    #[must_use]
    pub const fn new(net: NetId, polarity: Polarity) -> Self {
        Self { net, polarity }
    }

    /// `net` stuck-at-0.
    #[must_use]
    pub const fn sa0(net: NetId) -> Self {
        Self::new(net, Polarity::StuckAt0)
    }

    /// `net` stuck-at-1.
    #[must_use]
    pub const fn sa1(net: NetId) -> Self {
        Self::new(net, Polarity::StuckAt1)
    }

    /// The dense index of this fault.
    #[must_use]
    pub const fn index(self) -> usize {
        2 * (self.net.index() - 1) + self.polarity.bit()
    }

}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = match self.polarity {
            Polarity::StuckAt0 => "sa0",
            Polarity::StuckAt1 => "sa1",
        };
        write!(f, "{}_{}", prefix, self.net)
    }
}

/// Number of dense indices needed to address every fault on nets up to `max_net_id`.
#[must_use]
pub fn index_capacity(max_net_id: u32) -> usize {
    (2 * max_net_id as usize).max(2)
}

/// Size of the single stuck-at fault universe of `nets`.
#[must_use]
pub const fn universe_size(nets: &NetRegistry) -> usize {
    2 * nets.len()
}

/// Every fault on `nets`: nets ascending, stuck-at-0 before stuck-at-1.
pub fn universe(nets: &NetRegistry) -> impl Iterator<Item = Fault> + '_ {
    nets.iter()
        .flat_map(|net| Polarity::ALL.into_iter().map(move |polarity| Fault::new(net, polarity)))
}
