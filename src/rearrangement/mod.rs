//! The anion rearrangement `[A-]–B=C => A=B–[C-]`.
//!
//! A negative charge next to a double bond moves one bond further out: the
//! anion's lone pair becomes the second pair of the A–B bond, and the old
//! B=C π pair becomes a lone pair on C. Nothing is added or removed, so
//! every reactant atom and bond has exactly one product counterpart.
//!
//! Finding centers ([`locate`]) is split into structural [`candidates`] and
//! chemical [`validate`]; applying one ([`rewrite`]) always works on a copy.
//!
//! ```
//! use anionshift::{Atom, Bond, Mol};
//! use anionshift::rearrangement::{run, CenterSelection};
//!
//! // [CH2-]-CH=CH2
//! let mut mol = Mol::new();
//! let a = mol.add_atom(Atom { atomic_num: 6, formal_charge: -1, hydrogen_count: 2, lone_pairs: 1, ..Atom::default() });
//! let b = mol.add_atom(Atom { atomic_num: 6, hydrogen_count: 1, ..Atom::default() });
//! let c = mol.add_atom(Atom { atomic_num: 6, hydrogen_count: 2, ..Atom::default() });
//! mol.add_bond(a, b, Bond::single());
//! mol.add_bond(b, c, Bond::double());
//!
//! let results = run(&mol, &CenterSelection::Auto).unwrap();
//! assert_eq!(results.len(), 1);
//! assert_eq!(results[0].product.atom(c).formal_charge, -1);
//! ```

pub mod center;
pub mod error;
pub mod mapping;
mod rewrite;

pub use center::{candidates, locate, validate, CenterSelection, ReactiveCenter, ReactiveMarks};
pub use error::{MalformedCenter, ReactionError, Rejection};
pub use mapping::{copy_with_mapping, MappedObject, Mapping};
pub use rewrite::{rewrite, ReactionResult};

use rayon::prelude::*;

use crate::mol::Mol;
use crate::traits::{HasBondOrderMut, HasFormalChargeMut, HasLonePairsMut};

/// Locate every valid center in `mol` and rewrite at each one.
///
/// Results come back in the order [`locate`] finds centers. A molecule
/// with no qualifying center gives an empty `Vec`, not an error.
pub fn run<A, B>(
    mol: &Mol<A, B>,
    selection: &CenterSelection,
) -> Result<Vec<ReactionResult<A, B>>, ReactionError>
where
    A: Clone + HasFormalChargeMut + HasLonePairsMut,
    B: Clone + HasBondOrderMut,
{
    let centers = locate(mol, selection);
    log::debug!(
        "{} reactive center(s) in molecule with {} atoms",
        centers.len(),
        mol.atom_count()
    );
    centers.iter().map(|center| rewrite(mol, center)).collect()
}

/// [`run`] over many molecules in parallel.
///
/// Each molecule is handled independently; output order matches input
/// order.
pub fn run_batch<A, B>(
    jobs: &[(&Mol<A, B>, CenterSelection)],
) -> Result<Vec<Vec<ReactionResult<A, B>>>, ReactionError>
where
    A: Clone + Send + Sync + HasFormalChargeMut + HasLonePairsMut,
    B: Clone + Send + Sync + HasBondOrderMut,
{
    jobs.par_iter()
        .map(|(mol, selection)| run(*mol, selection))
        .collect()
}
