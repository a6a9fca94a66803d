use std::collections::BTreeSet;

use petgraph::graph::{EdgeIndex, NodeIndex};

use crate::bond::BondOrder;
use crate::mol::Mol;
use crate::traits::{HasBondOrder, HasFormalCharge, HasLonePairs};

use super::error::{MalformedCenter, ReactionError, Rejection};

/// The motif `[A-]–B=C`, indices into one molecule.
///
/// `anion` is A (the donor), `pivot` is B and `acceptor` is C. The
/// `donor_bond` joins A and B, the `acceptor_bond` joins B and C.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReactiveCenter {
    pub anion: NodeIndex,
    pub donor_bond: EdgeIndex,
    pub pivot: NodeIndex,
    pub acceptor_bond: EdgeIndex,
    pub acceptor: NodeIndex,
}

impl ReactiveCenter {
    /// A, B, C in motif order.
    pub fn atoms(&self) -> [NodeIndex; 3] {
        [self.anion, self.pivot, self.acceptor]
    }

    /// A–B, B=C in motif order.
    pub fn bonds(&self) -> [EdgeIndex; 2] {
        [self.donor_bond, self.acceptor_bond]
    }

    /// Check that every index exists in `mol` and that both bonds join the
    /// atoms this center says they join.
    pub fn check_membership<A, B>(&self, mol: &Mol<A, B>) -> Result<(), MalformedCenter> {
        if let Some(&idx) = self.atoms().iter().find(|&&idx| !mol.contains_atom(idx)) {
            return Err(MalformedCenter::ForeignAtom(idx));
        }
        if let Some(&idx) = self.bonds().iter().find(|&&idx| !mol.contains_bond(idx)) {
            return Err(MalformedCenter::ForeignBond(idx));
        }
        if !mol.connects(self.donor_bond, self.anion, self.pivot) {
            return Err(MalformedCenter::BondMismatch {
                bond: self.donor_bond,
            });
        }
        if !mol.connects(self.acceptor_bond, self.pivot, self.acceptor) {
            return Err(MalformedCenter::BondMismatch {
                bond: self.acceptor_bond,
            });
        }
        Ok(())
    }

    /// Read a center from caller marks.
    ///
    /// The marks must be exactly three atoms and two bonds forming a path.
    /// The path is oriented so that the negatively charged end whose far
    /// bond is double becomes the anion; failing that, the end opposite a
    /// double bond; failing that, the lower-index end. Charges and bond
    /// orders are not otherwise checked here, see [`validate`].
    pub fn from_marks<A, B>(mol: &Mol<A, B>, marks: &ReactiveMarks) -> Result<Self, ReactionError>
    where
        A: HasFormalCharge,
        B: HasBondOrder,
    {
        if let Some(&idx) = marks.atoms.iter().find(|&&idx| !mol.contains_atom(idx)) {
            return Err(MalformedCenter::ForeignAtom(idx).into());
        }
        if let Some(&idx) = marks.bonds.iter().find(|&&idx| !mol.contains_bond(idx)) {
            return Err(MalformedCenter::ForeignBond(idx).into());
        }
        if marks.atoms.len() != 3 || marks.bonds.len() != 2 {
            return Err(MalformedCenter::MarkCount {
                atoms: marks.atoms.len(),
                bonds: marks.bonds.len(),
            }
            .into());
        }

        let bonds: Vec<EdgeIndex> = marks.bonds.iter().copied().collect();
        let (e1, e2) = (bonds[0], bonds[1]);
        let (p, q) = mol
            .bond_endpoints(e1)
            .ok_or(MalformedCenter::ForeignBond(e1))?;
        let (r, s) = mol
            .bond_endpoints(e2)
            .ok_or(MalformedCenter::ForeignBond(e2))?;

        let shared: Vec<NodeIndex> = [p, q].into_iter().filter(|&n| n == r || n == s).collect();
        let &[pivot] = shared.as_slice() else {
            return Err(MalformedCenter::NotContiguous.into());
        };
        let x = if p == pivot { q } else { p };
        let y = if r == pivot { s } else { r };
        if [x, pivot, y].iter().any(|n| !marks.atoms.contains(n)) {
            return Err(MalformedCenter::NotContiguous.into());
        }

        let forward = Self {
            anion: x,
            donor_bond: e1,
            pivot,
            acceptor_bond: e2,
            acceptor: y,
        };
        let backward = Self {
            anion: y,
            donor_bond: e2,
            pivot,
            acceptor_bond: e1,
            acceptor: x,
        };

        let is_double = |e: EdgeIndex| mol.bond(e).bond_order() == BondOrder::Double;
        let is_anion = |n: NodeIndex| mol.atom(n).formal_charge() < 0;

        let center = if is_anion(x) && is_double(e2) {
            forward
        } else if is_anion(y) && is_double(e1) {
            backward
        } else if is_double(e2) {
            forward
        } else if is_double(e1) {
            backward
        } else if x < y {
            forward
        } else {
            backward
        };
        Ok(center)
    }
}

/// Atoms and bonds a caller has marked as the reactive center.
///
/// Held outside the molecule so that marking one molecule for one call
/// never leaks into another.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReactiveMarks {
    atoms: BTreeSet<NodeIndex>,
    bonds: BTreeSet<EdgeIndex>,
}

impl ReactiveMarks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn atom(mut self, idx: NodeIndex) -> Self {
        self.atoms.insert(idx);
        self
    }

    pub fn bond(mut self, idx: EdgeIndex) -> Self {
        self.bonds.insert(idx);
        self
    }

    pub fn mark_atom(&mut self, idx: NodeIndex) {
        self.atoms.insert(idx);
    }

    pub fn mark_bond(&mut self, idx: EdgeIndex) {
        self.bonds.insert(idx);
    }

    pub fn atoms(&self) -> &BTreeSet<NodeIndex> {
        &self.atoms
    }

    pub fn bonds(&self) -> &BTreeSet<EdgeIndex> {
        &self.bonds
    }
}

impl From<&ReactiveCenter> for ReactiveMarks {
    fn from(center: &ReactiveCenter) -> Self {
        Self {
            atoms: center.atoms().into_iter().collect(),
            bonds: center.bonds().into_iter().collect(),
        }
    }
}

/// How reactive centers are found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CenterSelection {
    /// Scan the whole molecule.
    #[default]
    Auto,
    /// Use only the caller's marked atoms and bonds.
    Manual(ReactiveMarks),
}

/// Every structural `[A-]–B=C` candidate, before chemical checks.
///
/// Anions are visited in atom order and bonds in ascending bond order at
/// each step, so the output order is a function of the molecule alone.
pub fn candidates<A, B>(mol: &Mol<A, B>) -> Vec<ReactiveCenter>
where
    A: HasFormalCharge,
    B: HasBondOrder,
{
    let mut found = Vec::new();
    for anion in mol.atoms() {
        if mol.atom(anion).formal_charge() >= 0 {
            continue;
        }
        for donor_bond in mol.incident_bonds(anion) {
            let Some(pivot) = mol.other_end(donor_bond, anion) else {
                continue;
            };
            for acceptor_bond in mol.incident_bonds(pivot) {
                if acceptor_bond == donor_bond
                    || mol.bond(acceptor_bond).bond_order() != BondOrder::Double
                {
                    continue;
                }
                let Some(acceptor) = mol.other_end(acceptor_bond, pivot) else {
                    continue;
                };
                if acceptor == anion {
                    continue;
                }
                found.push(ReactiveCenter {
                    anion,
                    donor_bond,
                    pivot,
                    acceptor_bond,
                    acceptor,
                });
            }
        }
    }
    found
}

/// Chemical preconditions for `[A-]–B=C => A=B–[C-]`.
///
/// A center that does not fit `mol` is a
/// [`MalformedCenter`](ReactionError::MalformedCenter) error, checked before
/// any atom or bond is read.
pub fn validate<A, B>(mol: &Mol<A, B>, center: &ReactiveCenter) -> Result<(), ReactionError>
where
    A: HasFormalCharge + HasLonePairs,
    B: HasBondOrder,
{
    center.check_membership(mol)?;
    preconditions(mol, center)?;
    Ok(())
}

fn preconditions<A, B>(mol: &Mol<A, B>, center: &ReactiveCenter) -> Result<(), Rejection>
where
    A: HasFormalCharge + HasLonePairs,
    B: HasBondOrder,
{
    if center.anion == center.acceptor {
        return Err(Rejection::DegenerateRing);
    }
    let anion = mol.atom(center.anion);
    if anion.formal_charge() > -1 {
        return Err(Rejection::NotAnion);
    }
    if anion.lone_pairs() == 0 {
        return Err(Rejection::NoLonePair);
    }
    if mol.atom(center.pivot).formal_charge() != 0 {
        return Err(Rejection::ChargedPivot);
    }
    if mol.atom(center.acceptor).formal_charge() != 0 {
        return Err(Rejection::ChargedAcceptor);
    }
    if mol.bond(center.donor_bond).bond_order().increment().is_none() {
        return Err(Rejection::BondOrderOverflow);
    }
    match mol.bond(center.acceptor_bond).bond_order() {
        BondOrder::Double => Ok(()),
        BondOrder::Single => Err(Rejection::BondOrderUnderflow),
        BondOrder::Triple => Err(Rejection::AcceptorBondNotDouble),
    }
}

/// Reactive centers that the rewrite will accept.
///
/// In manual mode, marks that do not form a valid motif yield nothing.
pub fn locate<A, B>(mol: &Mol<A, B>, selection: &CenterSelection) -> Vec<ReactiveCenter>
where
    A: HasFormalCharge + HasLonePairs,
    B: HasBondOrder,
{
    let proposed = match selection {
        CenterSelection::Auto => candidates(mol),
        CenterSelection::Manual(marks) => match ReactiveCenter::from_marks(mol, marks) {
            Ok(center) => vec![center],
            Err(e) => {
                log::debug!("ignoring reactive marks: {e}");
                Vec::new()
            }
        },
    };

    proposed
        .into_iter()
        .filter(|center| match validate(mol, center) {
            Ok(()) => true,
            Err(reason) => {
                log::trace!(
                    "skipping center {}-{}-{}: {reason}",
                    center.anion.index(),
                    center.pivot.index(),
                    center.acceptor.index()
                );
                false
            }
        })
        .collect()
}
