//! Structural equivalence collapsing of single stuck-at faults.
//!
//! Two faults are equivalent when no test can tell them apart. The rules here only look at the shape of each gate:
//!
//! - AND/NAND: a zero on either input forces the output, so `sa0` on the two inputs are equivalent.
//! - OR/NOR: dually, `sa1` on the two inputs are equivalent.
//! - NAND with both inputs on one net is an inverter, so each input fault is equivalent to the opposite fault on the
//!   output.
//!
//! NOR with both inputs on one net is an inverter too. It has no rule here until its polarity mapping is re-derived.

use itertools::Itertools;
use log::{debug, info};

use crate::fault::{self, Fault, Polarity};
use crate::gate::{Gate, GateKind};
use crate::net::NetRegistry;
use crate::netlist::Netlist;
use crate::union_find::DisjointSet;

/// The structural rule that made two faults equivalent.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Rule {
    /// `sa0` on both inputs of an AND or NAND.
    AndInputSymmetry,
    /// `sa1` on both inputs of an OR or NOR.
    OrInputSymmetry,
    /// Input and output of a NAND used as an inverter.
    NandInverter,
}

/// A pair of faults made equivalent by one rule.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Equivalence {
    /// Rule that applied.
    pub rule: Rule,
    /// First fault.
    pub a: Fault,
    /// Second fault.
    pub b: Fault,
}

impl Equivalence {
    const fn new(rule: Rule, a: Fault, b: Fault) -> Self {
        Self { rule, a, b }
    }
}

/// Every equivalence that the collapsing rules derive from `gate`.
#[must_use]
pub fn equivalences(gate: &Gate) -> Vec<Equivalence> {
    let mut found = Vec::new();

    if gate.kind.is_and_like() {
        found.push(Equivalence::new(Rule::AndInputSymmetry, Fault::sa0(gate.input1), Fault::sa0(gate.input2)));
    } else if gate.kind.is_or_like() {
        found.push(Equivalence::new(Rule::OrInputSymmetry, Fault::sa1(gate.input1), Fault::sa1(gate.input2)));
    }

    if gate.kind == GateKind::Nand && gate.is_self_paired() {
        for polarity in Polarity::ALL {
            let input = Fault::new(gate.input1, polarity);
            let output = Fault::new(gate.output, polarity.inverted());
            found.push(Equivalence::new(Rule::NandInverter, input, output));
        }
    }

    found
}

/// A partition of the fault universe into equivalence classes.
#[derive(Clone, Debug)]
pub struct FaultClasses {
    sets: DisjointSet,
}

impl FaultClasses {
    /// Every fault on nets up to `max_net_id` in a class of its own.
    #[must_use]
    pub fn new(max_net_id: u32) -> Self {
        Self {
            sets: DisjointSet::new(fault::index_capacity(max_net_id)),
        }
    }

    /// Collapse the faults of `netlist` by applying the rules to every gate.
    #[must_use]
    pub fn collapse(netlist: &Netlist) -> Self {
        let mut classes = Self::new(netlist.nets().max_id());
        let merges = classes.apply_gates(netlist.gates());
        info!("collapsing rules merged {} fault pairs", merges);
        classes
    }

    /// Apply the collapsing rules of one gate. Returns how many merges happened.
    ///
    /// # Panics
    ///
    /// Panics if the gate references a net beyond the `max_net_id` these classes were sized for.
    pub fn apply_gate(&mut self, gate: &Gate) -> usize {
        let mut merges = 0;
        for equivalence in equivalences(gate) {
            if self.sets.union(equivalence.a.index(), equivalence.b.index()) {
                debug!("{:?}: {} == {} ({})", equivalence.rule, equivalence.a, equivalence.b, gate);
                merges += 1;
            }
        }
        merges
    }

    /// Apply the collapsing rules of each gate in turn. Returns how many merges happened.
    pub fn apply_gates<'a>(&mut self, gates: impl IntoIterator<Item = &'a Gate>) -> usize {
        let merges: usize = gates.into_iter().map(|gate| self.apply_gate(gate)).sum();
        self.sets.flatten();
        merges
    }

    fn class_of(&self, fault: Fault) -> usize {
        self.sets.root(fault.index())
    }

    /// Returns true if `a` and `b` are in the same class.
    #[must_use]
    pub fn equivalent(&self, a: Fault, b: Fault) -> bool {
        self.sets.same(a.index(), b.index())
    }

    /// One fault per class among the faults on `nets`: the first met walking nets upward, `sa0` before `sa1`.
    #[must_use]
    pub fn representatives(&self, nets: &NetRegistry) -> Vec<Fault> {
        let mut seen = vec![false; self.sets.len()];
        fault::universe(nets)
            .filter(|fault| {
                let class = self.class_of(*fault);
                !std::mem::replace(&mut seen[class], true)
            })
            .collect()
    }

    /// Every class with a fault on `nets`, members in (net, polarity) order, classes ordered by representative.
    #[must_use]
    pub fn classes(&self, nets: &NetRegistry) -> Vec<Vec<Fault>> {
        let mut slot = vec![None; self.sets.len()];
        let mut classes: Vec<Vec<Fault>> = Vec::new();
        for fault in fault::universe(nets) {
            let class = self.class_of(fault);
            let index = *slot[class].get_or_insert_with(|| {
                classes.push(Vec::new());
                classes.len() - 1
            });
            classes[index].push(fault);
        }
        classes
    }

    /// Number of classes among the faults on `nets`.
    #[must_use]
    pub fn class_count(&self, nets: &NetRegistry) -> usize {
        fault::universe(nets).map(|fault| self.class_of(fault)).unique().count()
    }
}

#[cfg(test)]
mod tests {
    use super::{equivalences, FaultClasses, Rule};
    use crate::fault::{self, Fault};
    use crate::gate::{Gate, GateKind};
    use crate::net::NetId;
    use crate::netlist::Netlist;

    fn net(raw: i64) -> NetId {
        NetId::new(raw).unwrap()
    }

    fn labels(faults: &[Fault]) -> Vec<String> {
        faults.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn and_symmetry() {
        let netlist = Netlist::parse_str("AND 3 1 2\n");
        let classes = FaultClasses::collapse(&netlist);
        assert!(classes.equivalent(Fault::sa0(net(1)), Fault::sa0(net(2))));
        assert!(!classes.equivalent(Fault::sa1(net(1)), Fault::sa1(net(2))));
        assert!(!classes.equivalent(Fault::sa0(net(1)), Fault::sa0(net(3))));
    }

    #[test]
    fn or_symmetry() {
        let netlist = Netlist::parse_str("NOR 3 1 2\n");
        let classes = FaultClasses::collapse(&netlist);
        assert!(classes.equivalent(Fault::sa1(net(1)), Fault::sa1(net(2))));
        assert!(!classes.equivalent(Fault::sa0(net(1)), Fault::sa0(net(2))));
    }

    #[test]
    fn nand_inverter() {
        let netlist = Netlist::parse_str("NAND 10 5 5\n");
        let classes = FaultClasses::collapse(&netlist);
        assert!(classes.equivalent(Fault::sa0(net(5)), Fault::sa1(net(10))));
        assert!(classes.equivalent(Fault::sa1(net(5)), Fault::sa0(net(10))));
        assert!(!classes.equivalent(Fault::sa0(net(5)), Fault::sa0(net(10))));
        assert_eq!(classes.class_count(netlist.nets()), 2);
    }

    #[test]
    fn nand_inverter_pairs_opposite_polarities() {
        let gate = Gate::new(GateKind::Nand, net(10), net(5), net(5));
        let pairs = equivalences(&gate)
            .into_iter()
            .filter(|e| e.rule == Rule::NandInverter)
            .map(|e| (e.a.to_string(), e.b.to_string()))
            .collect::<Vec<_>>();
        assert_eq!(
            pairs,
            vec![("sa0_5".to_owned(), "sa1_10".to_owned()), ("sa1_5".to_owned(), "sa0_10".to_owned())]
        );
    }

    #[test]
    fn self_paired_nor_has_no_inverter_rule() {
        let gate = Gate::new(GateKind::Nor, net(10), net(5), net(5));
        let rules = equivalences(&gate).into_iter().map(|e| e.rule).collect::<Vec<_>>();
        assert_eq!(rules, vec![Rule::OrInputSymmetry]);
    }

    #[test]
    fn self_paired_and_is_trivially_symmetric() {
        let netlist = Netlist::parse_str("AND 2 1 1\n");
        let classes = FaultClasses::collapse(&netlist);
        assert_eq!(classes.class_count(netlist.nets()), 4);
    }

    #[test]
    fn end_to_end_and_gate() {
        let _ = env_logger::builder().is_test(true).try_init();
        let netlist = Netlist::parse_str("INPUT 1 2\nAND 3 1 2\nOUTPUT 3\n");
        let classes = FaultClasses::collapse(&netlist);
        let representatives = classes.representatives(netlist.nets());
        assert_eq!(fault::universe_size(netlist.nets()), 6);
        assert_eq!(labels(&representatives), ["sa0_1", "sa1_1", "sa1_2", "sa0_3", "sa1_3"]);
        assert_eq!(classes.class_count(netlist.nets()), representatives.len());
    }

    #[test]
    fn classes_group_members() {
        let netlist = Netlist::parse_str("AND 3 1 2\nNAND 4 3 3\n");
        let classes = FaultClasses::collapse(&netlist);
        let listing = classes.classes(netlist.nets()).iter().map(|class| labels(class)).collect::<Vec<_>>();
        assert_eq!(
            listing,
            vec![
                vec!["sa0_1", "sa0_2"],
                vec!["sa1_1"],
                vec!["sa1_2"],
                vec!["sa0_3", "sa1_4"],
                vec!["sa1_3", "sa0_4"],
            ]
        );
    }

    #[test]
    fn representatives_are_one_per_class() {
        let _ = env_logger::builder().is_test(true).try_init();
        let text = "INPUT 1 2 3\nNAND 4 1 2\nOR 5 2 3\nNAND 6 4 4\nAND 7 6 5\nNOR 8 7 1\nOUTPUT 8\n";
        let netlist = Netlist::parse_str(text);
        let classes = FaultClasses::collapse(&netlist);
        let representatives = classes.representatives(netlist.nets());

        for (i, a) in representatives.iter().enumerate() {
            for b in &representatives[i + 1..] {
                assert!(!classes.equivalent(*a, *b), "{} and {} share a class", a, b);
            }
        }
        for fault in fault::universe(netlist.nets()) {
            assert_eq!(representatives.iter().filter(|r| classes.equivalent(**r, fault)).count(), 1);
        }
        assert!(representatives.len() < fault::universe_size(netlist.nets()));
    }

    #[test]
    fn partition_is_an_equivalence_relation() {
        let text = "INPUT 1 2 3\nAND 4 1 2\nAND 5 2 3\nNAND 6 5 5\nOR 7 4 6\nNOR 8 7 3\n";
        let netlist = Netlist::parse_str(text);
        let classes = FaultClasses::collapse(&netlist);
        let faults = fault::universe(netlist.nets()).collect::<Vec<_>>();

        for &a in &faults {
            assert!(classes.equivalent(a, a));
            for &b in &faults {
                assert_eq!(classes.equivalent(a, b), classes.equivalent(b, a));
                for &c in &faults {
                    if classes.equivalent(a, b) && classes.equivalent(b, c) {
                        assert!(classes.equivalent(a, c));
                    }
                }
            }
        }
        // sa0_1 == sa0_2 == sa0_3 through the shared input of the two ANDs.
        assert!(classes.equivalent(Fault::sa0(net(1)), Fault::sa0(net(3))));
    }

    #[test]
    fn applying_rules_twice_changes_nothing() {
        let text = "AND 3 1 2\nNAND 4 3 3\nOR 5 4 1\nNOR 6 5 2\n";
        let netlist = Netlist::parse_str(text);
        let once = FaultClasses::collapse(&netlist);

        let mut twice = FaultClasses::new(netlist.nets().max_id());
        twice.apply_gates(netlist.gates());
        assert_eq!(twice.apply_gates(netlist.gates()), 0);

        let faults = fault::universe(netlist.nets()).collect::<Vec<_>>();
        for &a in &faults {
            for &b in &faults {
                assert_eq!(once.equivalent(a, b), twice.equivalent(a, b));
            }
        }
        assert_eq!(once.representatives(netlist.nets()), twice.representatives(netlist.nets()));
    }

    #[test]
    fn sparse_ids_are_addressable() {
        let netlist = Netlist::parse_str("AND 9000 17 4096\n");
        let classes = FaultClasses::collapse(&netlist);
        assert!(classes.equivalent(Fault::sa0(net(17)), Fault::sa0(net(4096))));
        assert_eq!(classes.representatives(netlist.nets()).len(), 5);
    }

    #[test]
    fn empty_netlist_has_no_classes() {
        let netlist = Netlist::parse_str("# nothing here\n");
        let classes = FaultClasses::collapse(&netlist);
        assert!(classes.representatives(netlist.nets()).is_empty());
        assert!(classes.classes(netlist.nets()).is_empty());
    }
}
