use crate::bond::BondOrder;

pub trait HasAtomicNum {
    fn atomic_num(&self) -> u8;
}

pub trait HasFormalCharge {
    fn formal_charge(&self) -> i8;
}

pub trait HasFormalChargeMut: HasFormalCharge {
    fn formal_charge_mut(&mut self) -> &mut i8;
}

pub trait HasIsotope {
    fn isotope(&self) -> u16;
}

pub trait HasHydrogenCount {
    fn hydrogen_count(&self) -> u8;
}

pub trait HasHydrogenCountMut: HasHydrogenCount {
    fn hydrogen_count_mut(&mut self) -> &mut u8;
}

pub trait HasLonePairs {
    fn lone_pairs(&self) -> u8;
}

pub trait HasLonePairsMut: HasLonePairs {
    fn lone_pairs_mut(&mut self) -> &mut u8;
}

pub trait HasBondOrder {
    fn bond_order(&self) -> BondOrder;
}

pub trait HasBondOrderMut: HasBondOrder {
    fn bond_order_mut(&mut self) -> &mut BondOrder;
}
