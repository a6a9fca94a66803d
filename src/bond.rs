#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum BondOrder {
    #[default]
    Single,
    Double,
    Triple,
}

impl BondOrder {
    /// Number of shared electron pairs (1, 2 or 3).
    pub fn multiplicity(self) -> u8 {
        match self {
            BondOrder::Single => 1,
            BondOrder::Double => 2,
            BondOrder::Triple => 3,
        }
    }

    /// One step up, or `None` past triple.
    pub fn increment(self) -> Option<BondOrder> {
        match self {
            BondOrder::Single => Some(BondOrder::Double),
            BondOrder::Double => Some(BondOrder::Triple),
            BondOrder::Triple => None,
        }
    }

    /// One step down, or `None` below single.
    pub fn decrement(self) -> Option<BondOrder> {
        match self {
            BondOrder::Single => None,
            BondOrder::Double => Some(BondOrder::Single),
            BondOrder::Triple => Some(BondOrder::Double),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bond {
    pub order: BondOrder,
}

impl Bond {
    pub fn single() -> Self {
        Self {
            order: BondOrder::Single,
        }
    }

    pub fn double() -> Self {
        Self {
            order: BondOrder::Double,
        }
    }

    pub fn triple() -> Self {
        Self {
            order: BondOrder::Triple,
        }
    }
}

impl crate::traits::HasBondOrder for Bond {
    fn bond_order(&self) -> BondOrder {
        self.order
    }
}

impl crate::traits::HasBondOrderMut for Bond {
    fn bond_order_mut(&mut self) -> &mut BondOrder {
        &mut self.order
    }
}
