//! Electron bookkeeping that callers run around a rearrangement: implicit
//! hydrogen saturation, lone-pair assignment and a consistency check.
//!
//! None of this is invoked by [`rearrangement`](crate::rearrangement)
//! itself. The rewrite moves charge and lone pairs together and never
//! touches hydrogens, so a molecule that passes [`check_bookkeeping`]
//! before the rewrite still passes it afterwards.

use petgraph::graph::NodeIndex;

use crate::element;
use crate::mol::Mol;
use crate::traits::{
    HasAtomicNum, HasBondOrder, HasFormalCharge, HasHydrogenCount, HasHydrogenCountMut,
    HasLonePairs, HasLonePairsMut,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookkeepingError {
    pub atom_idx: NodeIndex,
    pub atomic_num: u8,
    pub formal_charge: i8,
    pub lone_pairs: u8,
    /// `None` when the atom has more bonds than valence electrons allow.
    pub expected_lone_pairs: Option<u8>,
}

impl std::fmt::Display for BookkeepingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sym = element::symbol(self.atomic_num).unwrap_or("?");
        match self.expected_lone_pairs {
            Some(expected) => write!(
                f,
                "atom {} ({}{:+}): {} lone pairs, expected {}",
                self.atom_idx.index(),
                sym,
                self.formal_charge,
                self.lone_pairs,
                expected,
            ),
            None => write!(
                f,
                "atom {} ({}{:+}): bonds exceed available valence electrons",
                self.atom_idx.index(),
                sym,
                self.formal_charge,
            ),
        }
    }
}

impl std::error::Error for BookkeepingError {}

fn bond_order_sum<A, B: HasBondOrder>(mol: &Mol<A, B>, atom: NodeIndex) -> u16 {
    mol.bonds_of(atom)
        .map(|ei| u16::from(mol.bond(ei).bond_order().multiplicity()))
        .sum()
}

/// Bond-order sum plus implicit hydrogens.
pub fn total_valence<A, B>(mol: &Mol<A, B>, atom: NodeIndex) -> u16
where
    A: HasHydrogenCount,
    B: HasBondOrder,
{
    bond_order_sum(mol, atom) + u16::from(mol.atom(atom).hydrogen_count())
}

/// Lone pairs implied by valence electrons, charge and bonding.
///
/// Returns `None` for elements without a fixed valence list and for atoms
/// with more bonds than electrons. An odd leftover electron is a radical
/// and is not counted as a pair.
pub fn expected_lone_pairs<A, B>(mol: &Mol<A, B>, atom: NodeIndex) -> Option<u8>
where
    A: HasAtomicNum + HasFormalCharge + HasHydrogenCount,
    B: HasBondOrder,
{
    let a = mol.atom(atom);
    if element::default_valences(a.atomic_num()).is_empty() {
        return None;
    }
    let free = i32::from(element::outer_shell_electrons(a.atomic_num()))
        - i32::from(a.formal_charge())
        - i32::from(total_valence(mol, atom));
    u8::try_from(free / 2).ok().filter(|_| free >= 0)
}

/// Set every atom's lone-pair count from [`expected_lone_pairs`].
/// Atoms where that is `None` get zero.
pub fn assign_lone_pairs<A, B>(mol: &mut Mol<A, B>)
where
    A: HasAtomicNum + HasFormalCharge + HasHydrogenCount + HasLonePairsMut,
    B: HasBondOrder,
{
    for idx in mol.atoms().collect::<Vec<_>>() {
        let pairs = expected_lone_pairs(mol, idx).unwrap_or(0);
        *mol.atom_mut(idx).lone_pairs_mut() = pairs;
    }
}

/// Fill implicit hydrogens up to the lowest charge-adjusted valence that
/// covers the explicit bonds.
///
/// Atoms of elements without a valence list, or already over every allowed
/// valence, get zero hydrogens.
pub fn saturate_hydrogens<A, B>(mol: &mut Mol<A, B>)
where
    A: HasAtomicNum + HasFormalCharge + HasHydrogenCountMut,
    B: HasBondOrder,
{
    for idx in mol.atoms().collect::<Vec<_>>() {
        let atom = mol.atom(idx);
        let bonded = bond_order_sum(mol, idx);
        let h = element::charged_valences(atom.atomic_num(), atom.formal_charge())
            .into_iter()
            .map(u16::from)
            .find(|&v| v >= bonded)
            .and_then(|v| u8::try_from(v - bonded).ok())
            .unwrap_or(0);
        *mol.atom_mut(idx).hydrogen_count_mut() = h;
    }
}

/// Check that every atom's lone pairs agree with its charge and bonding.
pub fn check_bookkeeping<A, B>(mol: &Mol<A, B>) -> Result<(), Vec<BookkeepingError>>
where
    A: HasAtomicNum + HasFormalCharge + HasHydrogenCount + HasLonePairs,
    B: HasBondOrder,
{
    let errors: Vec<BookkeepingError> = mol
        .atoms()
        .filter_map(|idx| {
            let atom = mol.atom(idx);
            if element::default_valences(atom.atomic_num()).is_empty() {
                return None;
            }
            let expected = expected_lone_pairs(mol, idx);
            if expected == Some(atom.lone_pairs()) {
                return None;
            }
            Some(BookkeepingError {
                atom_idx: idx,
                atomic_num: atom.atomic_num(),
                formal_charge: atom.formal_charge(),
                lone_pairs: atom.lone_pairs(),
                expected_lone_pairs: expected,
            })
        })
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
