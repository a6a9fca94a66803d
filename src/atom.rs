/// Default atom type for a molecular graph node.
///
/// `Atom` stores the per-atom bookkeeping the rearrangement reads and
/// writes: element, formal charge, implicit hydrogens and lone pairs.
/// Nothing here marks an atom as a reactive center; callers pass
/// [`ReactiveMarks`](crate::rearrangement::ReactiveMarks) alongside the
/// molecule instead.
///
/// # Examples
///
/// ```
/// use anionshift::Atom;
///
/// let carbanion = Atom {
///     atomic_num: 6,
///     formal_charge: -1,
///     hydrogen_count: 2,
///     lone_pairs: 1,
///     ..Atom::default()
/// };
/// assert_eq!(carbanion.formal_charge, -1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Atom {
    /// Atomic number (1 = H, 6 = C, 7 = N, …). Identifies the element.
    pub atomic_num: u8,
    /// Formal charge in elementary charge units (e.g. −1 for a carbanion).
    pub formal_charge: i8,
    /// Mass number. `0` means natural isotopic abundance.
    pub isotope: u16,
    /// Number of implicit hydrogens on this atom.
    pub hydrogen_count: u8,
    /// Number of non-bonding electron pairs.
    ///
    /// Must move in step with `formal_charge`; see
    /// [`check_bookkeeping`](crate::valence::check_bookkeeping).
    pub lone_pairs: u8,
}

impl Atom {
    pub fn new(atomic_num: u8) -> Self {
        Self {
            atomic_num,
            ..Self::default()
        }
    }
}

impl crate::traits::HasAtomicNum for Atom {
    fn atomic_num(&self) -> u8 {
        self.atomic_num
    }
}

impl crate::traits::HasFormalCharge for Atom {
    fn formal_charge(&self) -> i8 {
        self.formal_charge
    }
}

impl crate::traits::HasFormalChargeMut for Atom {
    fn formal_charge_mut(&mut self) -> &mut i8 {
        &mut self.formal_charge
    }
}

impl crate::traits::HasIsotope for Atom {
    fn isotope(&self) -> u16 {
        self.isotope
    }
}

impl crate::traits::HasHydrogenCount for Atom {
    fn hydrogen_count(&self) -> u8 {
        self.hydrogen_count
    }
}

impl crate::traits::HasHydrogenCountMut for Atom {
    fn hydrogen_count_mut(&mut self) -> &mut u8 {
        &mut self.hydrogen_count
    }
}

impl crate::traits::HasLonePairs for Atom {
    fn lone_pairs(&self) -> u8 {
        self.lone_pairs
    }
}

impl crate::traits::HasLonePairsMut for Atom {
    fn lone_pairs_mut(&mut self) -> &mut u8 {
        &mut self.lone_pairs
    }
}
