use crate::*;

#[test]
fn mol_add_atoms_and_bonds() {
    let mut mol = Mol::<Atom, Bond>::new();
    let c = mol.add_atom(Atom::new(6));
    let o = mol.add_atom(Atom::new(8));
    let bond_idx = mol.add_bond(c, o, Bond::double());

    assert_eq!(mol.atom_count(), 2);
    assert_eq!(mol.bond_count(), 1);
    assert_eq!(mol.atom(c).atomic_num, 6);
    assert_eq!(mol.atom(o).atomic_num, 8);
    assert_eq!(mol.bond(bond_idx).order, BondOrder::Double);
}

#[test]
fn mol_neighbors_and_bonds_of() {
    let mut mol = Mol::<Atom, Bond>::new();
    let a = mol.add_atom(Atom::default());
    let b = mol.add_atom(Atom::default());
    let c = mol.add_atom(Atom::default());
    mol.add_bond(a, b, Bond::default());
    mol.add_bond(a, c, Bond::default());

    assert_eq!(mol.neighbors(a).count(), 2);
    assert_eq!(mol.bonds_of(a).count(), 2);
}

#[test]
fn incident_bonds_sorted_by_index() {
    let mut mol = Mol::<Atom, Bond>::new();
    let hub = mol.add_atom(Atom::default());
    let spokes: Vec<_> = (0..4).map(|_| mol.add_atom(Atom::default())).collect();
    let edges: Vec<_> = spokes
        .iter()
        .map(|&s| mol.add_bond(hub, s, Bond::default()))
        .collect();

    assert_eq!(mol.incident_bonds(hub), edges);
}

#[test]
fn mol_bond_between_and_endpoints() {
    let mut mol = Mol::<Atom, Bond>::new();
    let a = mol.add_atom(Atom::default());
    let b = mol.add_atom(Atom::default());
    let c = mol.add_atom(Atom::default());
    let e = mol.add_bond(a, b, Bond::default());

    assert_eq!(mol.bond_between(a, b), Some(e));
    assert_eq!(mol.bond_between(a, c), None);
    assert_eq!(mol.other_end(e, a), Some(b));
    assert_eq!(mol.other_end(e, b), Some(a));
    assert_eq!(mol.other_end(e, c), None);
    assert!(mol.connects(e, b, a));
    assert!(!mol.connects(e, a, c));
}

#[test]
fn mol_contains() {
    use petgraph::graph::{EdgeIndex, NodeIndex};

    let mut mol = Mol::<Atom, Bond>::new();
    let a = mol.add_atom(Atom::default());
    let b = mol.add_atom(Atom::default());
    let e = mol.add_bond(a, b, Bond::default());

    assert!(mol.contains_atom(b));
    assert!(!mol.contains_atom(NodeIndex::new(2)));
    assert!(mol.contains_bond(e));
    assert!(!mol.contains_bond(EdgeIndex::new(1)));
}

#[test]
fn total_formal_charge_sums_atoms() {
    let mut mol = Mol::<Atom, Bond>::new();
    mol.add_atom(Atom {
        formal_charge: 1,
        ..Atom::new(9)
    });
    mol.add_atom(Atom {
        formal_charge: -1,
        ..Atom::new(6)
    });
    mol.add_atom(Atom {
        formal_charge: -1,
        ..Atom::new(8)
    });
    assert_eq!(mol.total_formal_charge(), -1);
}

#[test]
fn mol_equality_sees_bond_order() {
    let mut mol = Mol::<Atom, Bond>::new();
    let a = mol.add_atom(Atom::new(6));
    let b = mol.add_atom(Atom::new(6));
    let e = mol.add_bond(a, b, Bond::single());

    let mut other = mol.clone();
    assert_eq!(mol, other);
    other.bond_mut(e).order = BondOrder::Double;
    assert_ne!(mol, other);
}

#[test]
fn atom_trait_impls() {
    let mut atom = Atom {
        atomic_num: 6,
        formal_charge: -1,
        isotope: 13,
        hydrogen_count: 2,
        lone_pairs: 1,
    };

    assert_eq!(HasAtomicNum::atomic_num(&atom), 6);
    assert_eq!(HasFormalCharge::formal_charge(&atom), -1);
    assert_eq!(HasIsotope::isotope(&atom), 13);
    assert_eq!(HasHydrogenCount::hydrogen_count(&atom), 2);
    assert_eq!(HasLonePairs::lone_pairs(&atom), 1);

    *atom.formal_charge_mut() += 1;
    *atom.lone_pairs_mut() -= 1;
    *atom.hydrogen_count_mut() = 3;
    assert_eq!(atom.formal_charge, 0);
    assert_eq!(atom.lone_pairs, 0);
    assert_eq!(atom.hydrogen_count, 3);
}

#[test]
fn bond_trait_impls() {
    let mut bond = Bond::triple();
    assert_eq!(HasBondOrder::bond_order(&bond), BondOrder::Triple);
    *bond.bond_order_mut() = BondOrder::Single;
    assert_eq!(bond.order, BondOrder::Single);
}

#[test]
fn bond_order_default_is_single() {
    assert_eq!(BondOrder::default(), BondOrder::Single);
    assert_eq!(Bond::default(), Bond::single());
}

#[test]
fn atom_default() {
    let atom = Atom::default();
    assert_eq!(atom.atomic_num, 0);
    assert_eq!(atom.formal_charge, 0);
    assert_eq!(atom.isotope, 0);
    assert_eq!(atom.hydrogen_count, 0);
    assert_eq!(atom.lone_pairs, 0);
}

#[test]
fn mol_default() {
    let mol = Mol::<Atom, Bond>::default();
    assert_eq!(mol.atom_count(), 0);
    assert_eq!(mol.bond_count(), 0);
    assert_eq!(mol.total_formal_charge(), 0);
}

#[test]
fn mol_graph_access() {
    let mut mol = Mol::<Atom, Bond>::new();
    mol.add_atom(Atom::default());
    assert_eq!(mol.graph().node_count(), 1);
}

#[test]
fn error_messages_name_the_problem() {
    use petgraph::graph::NodeIndex;
    use rearrangement::{MalformedCenter, Rejection};

    let e = ReactionError::from(MalformedCenter::ForeignAtom(NodeIndex::new(7)));
    assert_eq!(
        e.to_string(),
        "malformed reactive center: atom 7 is not in the molecule"
    );
    let e = ReactionError::from(MalformedCenter::MarkCount { atoms: 4, bonds: 3 });
    assert!(e.to_string().contains("got 4 and 3"));
    let e = ReactionError::from(Rejection::ChargedAcceptor);
    assert_eq!(
        e.to_string(),
        "reactive center rejected: acceptor atom is charged"
    );
}
