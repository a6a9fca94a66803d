use std::collections::BTreeMap;

use petgraph::graph::{EdgeIndex, NodeIndex};

use crate::mol::Mol;

/// An atom or bond of one molecule, by index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MappedObject {
    Atom(NodeIndex),
    Bond(EdgeIndex),
}

/// Correspondence between reactant and product atoms and bonds.
///
/// Entries keep insertion order (atoms by index, then bonds by index when
/// built by [`copy_with_mapping`]) and can be looked up from either side.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Mapping {
    entries: Vec<(MappedObject, MappedObject)>,
    forward: BTreeMap<MappedObject, MappedObject>,
    backward: BTreeMap<MappedObject, MappedObject>,
}

impl Mapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `reactant` became `product`. Returns `false`, leaving the
    /// mapping unchanged, if either side is already mapped.
    pub(crate) fn insert(&mut self, reactant: MappedObject, product: MappedObject) -> bool {
        if self.forward.contains_key(&reactant) || self.backward.contains_key(&product) {
            return false;
        }
        self.entries.push((reactant, product));
        self.forward.insert(reactant, product);
        self.backward.insert(product, reactant);
        true
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `(reactant, product)` pairs in insertion order.
    pub fn entries(&self) -> &[(MappedObject, MappedObject)] {
        &self.entries
    }

    pub fn product_of(&self, reactant: MappedObject) -> Option<MappedObject> {
        self.forward.get(&reactant).copied()
    }

    pub fn reactant_of(&self, product: MappedObject) -> Option<MappedObject> {
        self.backward.get(&product).copied()
    }

    pub fn product_atom(&self, reactant: NodeIndex) -> Option<NodeIndex> {
        match self.product_of(MappedObject::Atom(reactant))? {
            MappedObject::Atom(idx) => Some(idx),
            MappedObject::Bond(_) => None,
        }
    }

    pub fn reactant_atom(&self, product: NodeIndex) -> Option<NodeIndex> {
        match self.reactant_of(MappedObject::Atom(product))? {
            MappedObject::Atom(idx) => Some(idx),
            MappedObject::Bond(_) => None,
        }
    }

    pub fn product_bond(&self, reactant: EdgeIndex) -> Option<EdgeIndex> {
        match self.product_of(MappedObject::Bond(reactant))? {
            MappedObject::Bond(idx) => Some(idx),
            MappedObject::Atom(_) => None,
        }
    }

    pub fn reactant_bond(&self, product: EdgeIndex) -> Option<EdgeIndex> {
        match self.reactant_of(MappedObject::Bond(product))? {
            MappedObject::Bond(idx) => Some(idx),
            MappedObject::Atom(_) => None,
        }
    }
}

/// Deep-copy `mol`, recording which copy atom and bond came from which
/// original.
pub fn copy_with_mapping<A: Clone, B: Clone>(mol: &Mol<A, B>) -> (Mol<A, B>, Mapping) {
    let mut copy = Mol::new();
    let mut mapping = Mapping::new();
    let mut index_map = Vec::with_capacity(mol.atom_count());

    for idx in mol.atoms() {
        let new_idx = copy.add_atom(mol.atom(idx).clone());
        mapping.insert(MappedObject::Atom(idx), MappedObject::Atom(new_idx));
        index_map.push(new_idx);
    }

    for edge in mol.bonds() {
        if let Some((a, b)) = mol.bond_endpoints(edge) {
            let new_edge = copy.add_bond(
                index_map[a.index()],
                index_map[b.index()],
                mol.bond(edge).clone(),
            );
            mapping.insert(MappedObject::Bond(edge), MappedObject::Bond(new_edge));
        }
    }

    (copy, mapping)
}
