use anionshift::element::from_symbol;
use anionshift::rearrangement::{run, CenterSelection};
use anionshift::{
    assign_lone_pairs, check_bookkeeping, saturate_hydrogens, Atom, Bond, BondOrder, Mol,
};
use petgraph::graph::NodeIndex;
use serde::Deserialize;

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct Entry {
    name: String,
    atoms: Vec<(String, i8)>,
    bonds: Vec<(usize, usize, u8)>,
    products: Vec<Product>,
}

/// A product reduced to what the rearrangement can change: which atoms
/// carry a charge and which bonds are double.
#[derive(Deserialize, Debug, PartialEq)]
struct Product {
    charged: Vec<(usize, i8)>,
    doubles: Vec<(usize, usize)>,
}

fn build(entry: &Entry) -> Result<Mol<Atom, Bond>, String> {
    let mut mol = Mol::new();
    let mut idx = Vec::with_capacity(entry.atoms.len());
    for (symbol, charge) in &entry.atoms {
        let atomic_num =
            from_symbol(symbol).ok_or_else(|| format!("unknown element {symbol:?}"))?;
        idx.push(mol.add_atom(Atom {
            atomic_num,
            formal_charge: *charge,
            ..Atom::default()
        }));
    }
    for &(a, b, order) in &entry.bonds {
        let order = match order {
            1 => BondOrder::Single,
            2 => BondOrder::Double,
            3 => BondOrder::Triple,
            other => return Err(format!("bad bond order {other}")),
        };
        mol.add_bond(idx[a], idx[b], Bond { order });
    }
    saturate_hydrogens(&mut mol);
    assign_lone_pairs(&mut mol);
    Ok(mol)
}

fn summarize(mol: &Mol<Atom, Bond>) -> Product {
    let charged = mol
        .atoms()
        .filter(|&i| mol.atom(i).formal_charge != 0)
        .map(|i| (i.index(), mol.atom(i).formal_charge))
        .collect();
    let mut doubles: Vec<(usize, usize)> = mol
        .bonds()
        .filter(|&e| mol.bond(e).order == BondOrder::Double)
        .filter_map(|e| mol.bond_endpoints(e))
        .map(|(a, b): (NodeIndex, NodeIndex)| {
            let (a, b) = (a.index(), b.index());
            (a.min(b), a.max(b))
        })
        .collect();
    doubles.sort_unstable();
    Product { charged, doubles }
}

// ---------------------------------------------------------------------------
// Products of the automatic search
// ---------------------------------------------------------------------------

#[test]
fn approval_rearrangement_products() {
    let data: Vec<Entry> =
        serde_json::from_str(include_str!("approval_data/rearrangement.json")).unwrap();

    let mut failures = Vec::new();
    for entry in &data {
        let mol = match build(entry) {
            Ok(m) => m,
            Err(e) => {
                failures.push(format!("[build] {}: {e}", entry.name));
                continue;
            }
        };

        let results = match run(&mol, &CenterSelection::Auto) {
            Ok(r) => r,
            Err(e) => {
                failures.push(format!("[run] {}: {e}", entry.name));
                continue;
            }
        };

        let got: Vec<Product> = results.iter().map(|r| summarize(&r.product)).collect();
        if got != entry.products {
            failures.push(format!(
                "[products] {}: expected {:?}, got {:?}",
                entry.name, entry.products, got
            ));
        }

        for (i, result) in results.iter().enumerate() {
            if check_bookkeeping(&result.product).is_err() {
                failures.push(format!("[bookkeeping] {} product {i}", entry.name));
            }
        }
    }

    if !failures.is_empty() {
        panic!(
            "{} of {} entries failed:\n{}",
            failures.len(),
            data.len(),
            failures.join("\n")
        );
    }
}
