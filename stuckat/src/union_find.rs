//! Union-find.

/// Disjoint sets over `0..len`, with path compression and union by rank.
///
/// Parents and ranks are flat arrays; a root is an element that is its own parent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl DisjointSet {
    /// Create `len` singleton sets.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            rank: vec![0; len],
        }
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns true if there are no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// The root of the set containing `x`, pointing every node on the way straight at it.
    pub fn find(&mut self, x: usize) -> usize {
        let root = self.root(x);

        let mut node = x;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }

        root
    }

    /// The root of the set containing `x`, without restructuring.
    #[must_use]
    pub fn root(&self, x: usize) -> usize {
        let mut node = x;
        while self.parent[node] != node {
            node = self.parent[node];
        }
        node
    }

    /// Merge the sets containing `a` and `b`. Returns false if they were already one set.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let a = self.find(a);
        let b = self.find(b);
        if a == b {
            return false;
        }

        if self.rank[a] < self.rank[b] {
            self.parent[a] = b;
        } else if self.rank[a] > self.rank[b] {
            self.parent[b] = a;
        } else {
            self.parent[b] = a;
            self.rank[a] += 1;
        }
        true
    }

    /// Returns true if `a` and `b` are in the same set.
    #[must_use]
    pub fn same(&self, a: usize, b: usize) -> bool {
        self.root(a) == self.root(b)
    }

    /// Compress every path, so each element points directly at its root.
    pub fn flatten(&mut self) {
        for x in 0..self.len() {
            self.find(x);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::DisjointSet;

    #[test]
    fn singletons() {
        let sets = DisjointSet::new(4);
        for x in 0..4 {
            assert_eq!(sets.root(x), x);
        }
        assert!(!sets.same(0, 1));
    }

    #[test]
    fn union_is_idempotent() {
        let mut sets = DisjointSet::new(6);
        assert!(sets.union(0, 3));
        assert!(!sets.union(3, 0));
        assert!(!sets.union(0, 3));
        assert!(sets.same(0, 3));
        assert_eq!(sets.find(0), sets.find(3));
    }

    #[test]
    fn union_by_rank_keeps_taller_root() {
        let mut sets = DisjointSet::new(5);
        sets.union(0, 1);
        let tall = sets.find(0);
        sets.union(2, tall);
        assert_eq!(sets.find(2), tall);
        sets.union(tall, 4);
        assert_eq!(sets.find(4), tall);
    }

    #[test]
    fn chains_are_transitive() {
        let mut sets = DisjointSet::new(8);
        sets.union(0, 1);
        sets.union(2, 3);
        sets.union(1, 2);
        sets.union(6, 7);
        for (a, b) in [(0, 3), (3, 0), (1, 2)] {
            assert!(sets.same(a, b));
        }
        assert!(!sets.same(0, 6));
        assert!(!sets.same(4, 5));
    }

    #[test]
    fn flatten_points_at_roots() {
        let mut sets = DisjointSet::new(16);
        for x in 1..16 {
            sets.union(x - 1, x);
        }
        let root = sets.root(15);
        sets.flatten();
        for x in 0..16 {
            assert_eq!(sets.parent[x], root);
        }
    }
}
