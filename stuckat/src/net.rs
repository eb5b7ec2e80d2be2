//! Nets and the registry of nets present in a circuit.

use std::fmt;
use std::num::NonZeroU32;

/// Number of ids a fresh registry can hold before it first has to grow.
pub const INITIAL_CAPACITY: usize = 1024;

/// A net (a "line" of the circuit), identified by a strictly positive integer.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct NetId(NonZeroU32);

impl NetId {
    /// Validate a raw id from a netlist. Zero, negative and out-of-range ids are not nets.
    #[must_use]
    pub fn new(raw: i64) -> Option<Self> {
        u32::try_from(raw).ok().and_then(NonZeroU32::new).map(Self)
    }

    /// The numeric id.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0.get()
    }

    /// The id used as a direct address.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0.get() as usize
    }

    fn from_index(index: usize) -> Option<Self> {
        u32::try_from(index).ok().and_then(NonZeroU32::new).map(Self)
    }
}

impl fmt::Display for NetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The set of nets that exist in a circuit.
///
/// Ids are sparse, so this is a presence vector addressed directly by id (slot 0 is never used).
/// The vector grows to the next power of two whenever an id lands past its end.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NetRegistry {
    present: Vec<bool>,
    count: usize,
    max: u32,
}

impl Default for NetRegistry {
    fn default() -> Self {
        Self::with_capacity(INITIAL_CAPACITY)
    }
}

impl NetRegistry {
    /// Create an empty registry able to address ids below `capacity` without growing.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            present: vec![false; capacity.max(2)],
            count: 0,
            max: 0,
        }
    }

    fn ensure(&mut self, index: usize) {
        if index < self.present.len() {
            return;
        }
        let len = (index + 1).next_power_of_two();
        self.present.resize(len, false);
    }

    /// Record that `net` exists. Returns false if it was already registered.
    pub fn register(&mut self, net: NetId) -> bool {
        self.ensure(net.index());
        let slot = &mut self.present[net.index()];
        if *slot {
            return false;
        }
        *slot = true;
        self.count += 1;
        self.max = self.max.max(net.get());
        true
    }

    /// Returns true if `net` has been registered.
    #[must_use]
    pub fn exists(&self, net: NetId) -> bool {
        self.present.get(net.index()).copied().unwrap_or(false)
    }

    /// The largest registered id, or 0 for an empty registry.
    #[must_use]
    pub const fn max_id(&self) -> u32 {
        self.max
    }

    /// Number of distinct registered nets.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.count
    }

    /// Returns true if no net has been registered.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// All registered nets in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = NetId> + '_ {
        self.present
            .iter()
            .enumerate()
            .filter(|(_, present)| **present)
            .filter_map(|(index, _)| NetId::from_index(index))
    }
}
