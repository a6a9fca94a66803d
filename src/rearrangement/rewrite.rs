use crate::mol::Mol;
use crate::traits::{
    HasBondOrder, HasBondOrderMut, HasFormalChargeMut, HasLonePairs, HasLonePairsMut,
};

use super::center::{validate, ReactiveCenter};
use super::error::{MalformedCenter, ReactionError, Rejection};
use super::mapping::{copy_with_mapping, MappedObject, Mapping};

/// One applied rearrangement: the product, how it maps back to the
/// reactant, and the reactant-side center it was applied at.
#[derive(Debug, Clone, PartialEq)]
pub struct ReactionResult<A, B> {
    pub product: Mol<A, B>,
    pub mapping: Mapping,
    pub center: ReactiveCenter,
}

impl<A, B> ReactionResult<A, B> {
    /// Mapping entries for A, A–B, B, B=C and C only.
    pub fn center_mapping(&self) -> Vec<(MappedObject, MappedObject)> {
        let c = &self.center;
        [
            MappedObject::Atom(c.anion),
            MappedObject::Bond(c.donor_bond),
            MappedObject::Atom(c.pivot),
            MappedObject::Bond(c.acceptor_bond),
            MappedObject::Atom(c.acceptor),
        ]
        .into_iter()
        .filter_map(|r| self.mapping.product_of(r).map(|p| (r, p)))
        .collect()
    }
}

/// Apply `[A-]–B=C => A=B–[C-]` at `center` to a copy of `mol`.
///
/// `mol` is not modified. A center that does not fit `mol` is a
/// [`MalformedCenter`](ReactionError::MalformedCenter) error; one that fits
/// but fails a chemical check is [`Rejected`](ReactionError::Rejected).
/// Centers returned by [`locate`](super::locate) never fail.
pub fn rewrite<A, B>(
    mol: &Mol<A, B>,
    center: &ReactiveCenter,
) -> Result<ReactionResult<A, B>, ReactionError>
where
    A: Clone + HasFormalChargeMut + HasLonePairsMut,
    B: Clone + HasBondOrderMut,
{
    validate(mol, center)?;

    let (mut product, mapping) = copy_with_mapping(mol);

    let anion = mapping
        .product_atom(center.anion)
        .ok_or(MalformedCenter::ForeignAtom(center.anion))?;
    let acceptor = mapping
        .product_atom(center.acceptor)
        .ok_or(MalformedCenter::ForeignAtom(center.acceptor))?;
    let donor_bond = mapping
        .product_bond(center.donor_bond)
        .ok_or(MalformedCenter::ForeignBond(center.donor_bond))?;
    let acceptor_bond = mapping
        .product_bond(center.acceptor_bond)
        .ok_or(MalformedCenter::ForeignBond(center.acceptor_bond))?;

    let raised = product
        .bond(donor_bond)
        .bond_order()
        .increment()
        .ok_or(Rejection::BondOrderOverflow)?;
    let lowered = product
        .bond(acceptor_bond)
        .bond_order()
        .decrement()
        .ok_or(Rejection::BondOrderUnderflow)?;
    let anion_pairs = product
        .atom(anion)
        .lone_pairs()
        .checked_sub(1)
        .ok_or(Rejection::NoLonePair)?;

    *product.bond_mut(donor_bond).bond_order_mut() = raised;
    *product.bond_mut(acceptor_bond).bond_order_mut() = lowered;

    let a = product.atom_mut(anion);
    *a.formal_charge_mut() += 1;
    *a.lone_pairs_mut() = anion_pairs;

    let c = product.atom_mut(acceptor);
    *c.formal_charge_mut() -= 1;
    *c.lone_pairs_mut() += 1;

    Ok(ReactionResult {
        product,
        mapping,
        center: *center,
    })
}
