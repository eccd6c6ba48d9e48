#![forbid(unsafe_code)]

////////////////////////////////////////////////////////////////////////////////

/// Disjoint-set forest over the elements `0..len`, with union by size.
///
/// Mutating operations compress the traversed paths by halving, so a long
/// sequence of `union` calls keeps the trees flat and runs in amortized
/// near-constant time per call. The shared-reference queries never write;
/// they follow parent links as-is.
#[derive(Debug, Clone)]
pub struct WeightedQuickUnion {
    parent: Vec<usize>,
    size: Vec<usize>,
    components: usize,
}

impl WeightedQuickUnion {
    /// Creates a structure of `len` elements, each in its own component.
    pub fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            size: vec![1; len],
            components: len,
        }
    }

    /// Returns the number of elements.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns the number of components.
    pub fn components(&self) -> usize {
        self.components
    }

    /// Returns the root of the component containing `element`.
    ///
    /// # Panics
    ///
    /// If `element` is not less than `len`.
    pub fn find(&self, mut element: usize) -> usize {
        while self.parent[element] != element {
            element = self.parent[element];
        }

        element
    }

    /// Returns `true` if `a` and `b` are in the same component.
    ///
    /// # Panics
    ///
    /// If `a` or `b` is not less than `len`.
    pub fn connected(&self, a: usize, b: usize) -> bool {
        self.find(a) == self.find(b)
    }

    /// Merges the components containing `a` and `b`.
    /// Does nothing if they are already in the same component.
    ///
    /// # Panics
    ///
    /// If `a` or `b` is not less than `len`.
    pub fn union(&mut self, a: usize, b: usize) {
        let root_a = self.find_compressing(a);
        let root_b = self.find_compressing(b);

        if root_a == root_b {
            return;
        }

        let (smaller, larger) = if self.size[root_a] < self.size[root_b] {
            (root_a, root_b)
        } else {
            (root_b, root_a)
        };

        self.parent[smaller] = larger;
        self.size[larger] += self.size[smaller];
        self.components -= 1;
    }

    fn find_compressing(&mut self, mut element: usize) -> usize {
        while self.parent[element] != element {
            self.parent[element] = self.parent[self.parent[element]];
            element = self.parent[element];
        }

        element
    }
}

////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn starts_as_singletons() {
        let uf = WeightedQuickUnion::new(5);

        assert_eq!(uf.len(), 5);
        assert!(!uf.is_empty());
        assert_eq!(uf.components(), 5);

        for element in 0..5 {
            assert_eq!(uf.find(element), element);
        }

        assert!(!uf.connected(0, 1));
        assert!(uf.connected(3, 3));
    }

    #[test]
    fn union_connects_elements() {
        let mut uf = WeightedQuickUnion::new(4);

        uf.union(0, 1);

        assert!(uf.connected(0, 1));
        assert!(uf.connected(1, 0));
        assert!(!uf.connected(0, 2));
        assert_eq!(uf.components(), 3);
    }

    #[test]
    fn connectivity_is_transitive() {
        let mut uf = WeightedQuickUnion::new(6);

        uf.union(0, 1);
        uf.union(2, 3);
        assert!(!uf.connected(0, 3));

        uf.union(1, 2);

        assert!(uf.connected(0, 3));
        assert_eq!(uf.components(), 3);
    }

    #[test]
    fn union_is_idempotent() {
        let mut uf = WeightedQuickUnion::new(3);

        uf.union(0, 1);
        uf.union(0, 1);
        uf.union(1, 0);

        assert!(uf.connected(0, 1));
        assert_eq!(uf.components(), 2);
    }

    #[test]
    fn self_union_changes_nothing() {
        let mut uf = WeightedQuickUnion::new(3);

        uf.union(2, 2);

        assert_eq!(uf.components(), 3);
        assert!(!uf.connected(2, 0));
    }

    #[test]
    fn chain_of_unions_connects_the_ends() {
        let mut uf = WeightedQuickUnion::new(100);

        for element in 0..99 {
            uf.union(element, element + 1);
        }

        assert!(uf.connected(0, 99));
        assert_eq!(uf.components(), 1);
    }

    #[test]
    fn empty_structure() {
        let uf = WeightedQuickUnion::new(0);

        assert_eq!(uf.len(), 0);
        assert!(uf.is_empty());
        assert_eq!(uf.components(), 0);
    }
}
