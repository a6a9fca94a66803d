use petgraph::graph::{EdgeIndex, NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;

use crate::traits::HasFormalCharge;

/// A molecular graph: atoms on nodes, bonds on edges.
///
/// Node and edge indices are assigned in insertion order and stay stable as
/// long as nothing is removed, which this crate never does.
pub struct Mol<A, B> {
    graph: UnGraph<A, B>,
}

impl<A, B> Mol<A, B> {
    pub fn new() -> Self {
        Self {
            graph: UnGraph::default(),
        }
    }

    pub fn graph(&self) -> &UnGraph<A, B> {
        &self.graph
    }

    pub fn atom(&self, idx: NodeIndex) -> &A {
        &self.graph[idx]
    }

    pub fn atom_mut(&mut self, idx: NodeIndex) -> &mut A {
        &mut self.graph[idx]
    }

    pub fn bond(&self, idx: EdgeIndex) -> &B {
        &self.graph[idx]
    }

    pub fn bond_mut(&mut self, idx: EdgeIndex) -> &mut B {
        &mut self.graph[idx]
    }

    pub fn add_atom(&mut self, atom: A) -> NodeIndex {
        self.graph.add_node(atom)
    }

    pub fn add_bond(&mut self, a: NodeIndex, b: NodeIndex, bond: B) -> EdgeIndex {
        self.graph.add_edge(a, b, bond)
    }

    pub fn atom_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn bond_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn contains_atom(&self, idx: NodeIndex) -> bool {
        idx.index() < self.graph.node_count()
    }

    pub fn contains_bond(&self, idx: EdgeIndex) -> bool {
        idx.index() < self.graph.edge_count()
    }

    pub fn neighbors(&self, idx: NodeIndex) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.neighbors(idx)
    }

    pub fn bonds_of(&self, idx: NodeIndex) -> impl Iterator<Item = EdgeIndex> + '_ {
        self.graph.edges(idx).map(|e| e.id())
    }

    /// Bonds touching `idx`, ascending by bond index.
    ///
    /// petgraph walks adjacency lists newest-first, so anything whose output
    /// order matters goes through here rather than [`bonds_of`](Self::bonds_of).
    pub fn incident_bonds(&self, idx: NodeIndex) -> Vec<EdgeIndex> {
        let mut bonds: Vec<EdgeIndex> = self.bonds_of(idx).collect();
        bonds.sort_unstable();
        bonds
    }

    pub fn atoms(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.node_indices()
    }

    pub fn bonds(&self) -> impl Iterator<Item = EdgeIndex> + '_ {
        self.graph.edge_indices()
    }

    pub fn bond_between(&self, a: NodeIndex, b: NodeIndex) -> Option<EdgeIndex> {
        self.graph.find_edge(a, b)
    }

    pub fn bond_endpoints(&self, idx: EdgeIndex) -> Option<(NodeIndex, NodeIndex)> {
        self.graph.edge_endpoints(idx)
    }

    /// The endpoint of `bond` that is not `atom`, if `atom` is on it.
    pub fn other_end(&self, bond: EdgeIndex, atom: NodeIndex) -> Option<NodeIndex> {
        match self.bond_endpoints(bond)? {
            (a, b) if a == atom => Some(b),
            (a, b) if b == atom => Some(a),
            _ => None,
        }
    }

    pub fn connects(&self, bond: EdgeIndex, x: NodeIndex, y: NodeIndex) -> bool {
        self.bond_endpoints(bond)
            .is_some_and(|(a, b)| (a == x && b == y) || (a == y && b == x))
    }
}

impl<A: HasFormalCharge, B> Mol<A, B> {
    pub fn total_formal_charge(&self) -> i32 {
        self.atoms()
            .map(|idx| self.atom(idx).formal_charge() as i32)
            .sum()
    }
}

impl<A: Clone, B: Clone> Clone for Mol<A, B> {
    fn clone(&self) -> Self {
        Self {
            graph: self.graph.clone(),
        }
    }
}

impl<A, B> Default for Mol<A, B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: PartialEq, B: PartialEq> PartialEq for Mol<A, B> {
    fn eq(&self, other: &Self) -> bool {
        if self.atom_count() != other.atom_count() || self.bond_count() != other.bond_count() {
            return false;
        }
        if self.atoms().any(|idx| self.atom(idx) != other.atom(idx)) {
            return false;
        }
        self.bonds().all(|idx| {
            self.bond(idx) == other.bond(idx)
                && self.bond_endpoints(idx) == other.bond_endpoints(idx)
        })
    }
}

impl<A: std::fmt::Debug, B: std::fmt::Debug> std::fmt::Debug for Mol<A, B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mol")
            .field("atom_count", &self.atom_count())
            .field("bond_count", &self.bond_count())
            .finish()
    }
}
