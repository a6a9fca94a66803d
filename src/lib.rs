pub mod atom;
pub mod bond;
pub mod element;
pub mod mol;
pub mod rearrangement;
pub mod traits;
pub mod valence;

pub use atom::Atom;
pub use bond::{Bond, BondOrder};
pub use mol::Mol;
pub use rearrangement::{
    locate, rewrite, run, run_batch, CenterSelection, MappedObject, Mapping, ReactionError,
    ReactionResult, ReactiveCenter, ReactiveMarks,
};
pub use traits::{
    HasAtomicNum, HasBondOrder, HasBondOrderMut, HasFormalCharge, HasFormalChargeMut,
    HasHydrogenCount, HasHydrogenCountMut, HasIsotope, HasLonePairs, HasLonePairsMut,
};
pub use valence::{assign_lone_pairs, check_bookkeeping, saturate_hydrogens, BookkeepingError};

#[cfg(test)]
mod tests;
