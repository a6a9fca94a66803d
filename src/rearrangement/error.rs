use std::fmt;

use petgraph::graph::{EdgeIndex, NodeIndex};

/// Why a reactive center does not describe a motif in the molecule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MalformedCenter {
    /// An atom index past the end of the molecule.
    ForeignAtom(NodeIndex),
    /// A bond index past the end of the molecule.
    ForeignBond(EdgeIndex),
    /// A bond that does not join the two atoms the center claims it joins.
    BondMismatch { bond: EdgeIndex },
    /// The marked set is not three atoms and two bonds.
    MarkCount { atoms: usize, bonds: usize },
    /// The marked bonds do not form an A–B–C path over the marked atoms.
    NotContiguous,
}

impl fmt::Display for MalformedCenter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ForeignAtom(idx) => write!(f, "atom {} is not in the molecule", idx.index()),
            Self::ForeignBond(idx) => write!(f, "bond {} is not in the molecule", idx.index()),
            Self::BondMismatch { bond } => {
                write!(f, "bond {} does not join the claimed atoms", bond.index())
            }
            Self::MarkCount { atoms, bonds } => write!(
                f,
                "expected 3 marked atoms and 2 marked bonds, got {atoms} and {bonds}"
            ),
            Self::NotContiguous => write!(f, "marked atoms and bonds do not form a path"),
        }
    }
}

/// A precondition the rearrangement needs that a candidate center fails.
///
/// Rejections are filtered out during location, never reported as errors
/// from [`run`](super::run).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// The donor atom is not negatively charged.
    NotAnion,
    /// The donor atom has no lone pair to move into the new bond.
    NoLonePair,
    /// The pivot atom carries a formal charge.
    ChargedPivot,
    /// The acceptor atom carries a formal charge.
    ChargedAcceptor,
    /// Donor and acceptor are the same atom.
    DegenerateRing,
    /// The donor bond is already triple.
    BondOrderOverflow,
    /// The acceptor bond is already single.
    BondOrderUnderflow,
    /// The acceptor bond is triple rather than double.
    AcceptorBondNotDouble,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::NotAnion => "donor atom is not an anion",
            Self::NoLonePair => "donor atom has no lone pair",
            Self::ChargedPivot => "pivot atom is charged",
            Self::ChargedAcceptor => "acceptor atom is charged",
            Self::DegenerateRing => "donor and acceptor are the same atom",
            Self::BondOrderOverflow => "donor bond cannot exceed triple",
            Self::BondOrderUnderflow => "acceptor bond cannot go below single",
            Self::AcceptorBondNotDouble => "acceptor bond is not double",
        };
        f.write_str(msg)
    }
}

/// Error returned when rewriting a molecule at a reactive center.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReactionError {
    /// The center does not belong to the molecule, or marks have the wrong shape.
    MalformedCenter(MalformedCenter),
    /// The center is well-formed but fails a chemical precondition.
    Rejected(Rejection),
}

impl fmt::Display for ReactionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedCenter(e) => write!(f, "malformed reactive center: {e}"),
            Self::Rejected(r) => write!(f, "reactive center rejected: {r}"),
        }
    }
}

impl std::error::Error for ReactionError {}

impl From<MalformedCenter> for ReactionError {
    fn from(e: MalformedCenter) -> Self {
        Self::MalformedCenter(e)
    }
}

impl From<Rejection> for ReactionError {
    fn from(r: Rejection) -> Self {
        Self::Rejected(r)
    }
}
