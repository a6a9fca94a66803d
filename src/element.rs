//! Per-element constants used by the electron bookkeeping in
//! [`valence`](crate::valence). Everything is keyed by atomic number.

/// Valence (outer-shell) electron count, or `0` for unknown atomic numbers.
pub fn outer_shell_electrons(atomic_num: u8) -> u8 {
    OUTER_ELECTRONS
        .get(atomic_num as usize)
        .copied()
        .unwrap_or(0)
}

pub fn symbol(atomic_num: u8) -> Option<&'static str> {
    if (1..=118).contains(&atomic_num) {
        Some(SYMBOLS[atomic_num as usize - 1])
    } else {
        None
    }
}

pub fn from_symbol(s: &str) -> Option<u8> {
    SYMBOLS
        .iter()
        .position(|&sym| sym == s)
        .map(|i| i as u8 + 1)
}

/// Neutral-atom valences, lowest first. Empty for elements whose bonding
/// is not described by a fixed valence list (metals, noble gases).
pub fn default_valences(atomic_num: u8) -> &'static [u8] {
    match atomic_num {
        1 => &[1],
        5 => &[3],
        6 | 14 | 32 => &[4],
        7 | 15 | 33 => &[3, 5],
        8 => &[2],
        16 | 34 | 52 => &[2, 4, 6],
        9 | 17 | 35 | 85 => &[1],
        53 => &[1, 3, 5, 7],
        _ => &[],
    }
}

/// Valences shifted for a formal charge.
///
/// Charged atoms take the valences of the isoelectronic neutral: `[N+]` and
/// `[O-]` behave like C and F; `[C-]` and `[C+]` are both trivalent; `[B-]`
/// behaves like C.
pub fn charged_valences(atomic_num: u8, charge: i8) -> Vec<u8> {
    let outer = outer_shell_electrons(atomic_num) as i16;
    let charge = charge as i16;
    default_valences(atomic_num)
        .iter()
        .filter_map(|&v| {
            let v = v as i16;
            let adjusted = match outer {
                4 => v - charge.abs(),
                o if o < 4 => v - charge,
                _ => v + charge,
            };
            u8::try_from(adjusted).ok().filter(|&a| a > 0)
        })
        .collect()
}

static OUTER_ELECTRONS: [u8; 119] = [
    0,  // dummy
    1, 2,                                                       // H  He
    1, 2, 3, 4, 5, 6, 7, 8,                                    // Li Be B  C  N  O  F  Ne
    1, 2, 3, 4, 5, 6, 7, 8,                                    // Na Mg Al Si P  S  Cl Ar
    1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 3, 4, 5, 6, 7, 8, // K  Ca Sc..Zn Ga Ge As Se Br Kr
    1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 3, 4, 5, 6, 7, 8, // Rb Sr Y ..Cd In Sn Sb Te I  Xe
    1, 2,                                                       // Cs Ba
    3, 4, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14,            // La Ce..Yb
    3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 3, 4, 5, 6, 7, 8,       // Lu Hf..Hg Tl Pb Bi Po At Rn
    1, 2,                                                       // Fr Ra
    3, 4, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14,            // Ac Th..No
    3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 3, 4, 5, 6, 7, 8,       // Lr Rf..Cn Nh Fl Mc Lv Ts Og
];

static SYMBOLS: [&str; 118] = [
    "H", "He", "Li", "Be", "B", "C", "N", "O", "F", "Ne",
    "Na", "Mg", "Al", "Si", "P", "S", "Cl", "Ar", "K", "Ca",
    "Sc", "Ti", "V", "Cr", "Mn", "Fe", "Co", "Ni", "Cu", "Zn",
    "Ga", "Ge", "As", "Se", "Br", "Kr", "Rb", "Sr", "Y", "Zr",
    "Nb", "Mo", "Tc", "Ru", "Rh", "Pd", "Ag", "Cd", "In", "Sn",
    "Sb", "Te", "I", "Xe", "Cs", "Ba", "La", "Ce", "Pr", "Nd",
    "Pm", "Sm", "Eu", "Gd", "Tb", "Dy", "Ho", "Er", "Tm", "Yb",
    "Lu", "Hf", "Ta", "W", "Re", "Os", "Ir", "Pt", "Au", "Hg",
    "Tl", "Pb", "Bi", "Po", "At", "Rn", "Fr", "Ra", "Ac", "Th",
    "Pa", "U", "Np", "Pu", "Am", "Cm", "Bk", "Cf", "Es", "Fm",
    "Md", "No", "Lr", "Rf", "Db", "Sg", "Bh", "Hs", "Mt", "Ds",
    "Rg", "Cn", "Nh", "Fl", "Mc", "Lv", "Ts", "Og",
];
