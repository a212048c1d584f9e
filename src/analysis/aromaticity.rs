//! The ring aromaticity policy.
//!
//! Aromaticity here is a structural judgement over parser-supplied flags,
//! not an electron count: a ring is aromatic when its internal bonds are
//! all tagged aromatic, or when enough of its bonds and atoms carry
//! aromatic/double annotations to make the delocalized reading the only
//! sensible one. A tolerant variant relaxes the atom-fraction threshold
//! for inputs from parsers that under-flag fusion atoms.

use crate::core::BondType;
use crate::core::graph::Molecule;

/// Whether a ring (given as a traversal-ordered atom list) is aromatic.
///
/// Holds when either every ring-internal bond is tagged aromatic, or the
/// count of aromatic-or-double ring bonds reaches half the ring size
/// (rounded up) and at least 60 % of the ring atoms carry the aromatic
/// flag.
pub fn is_ring_aromatic(ring_atoms: &[usize], molecule: &Molecule) -> bool {
    ring_verdict(ring_atoms, molecule, 0.6)
}

/// Tolerant aromaticity fallback: aromatic ring-bond count at half the
/// ring size with only 50 % of atoms flagged.
pub fn is_ring_aromatic_tolerant(ring_atoms: &[usize], molecule: &Molecule) -> bool {
    let n = ring_atoms.len();
    if n < 3 {
        return false;
    }
    let counts = RingBondCounts::tally(ring_atoms, molecule);
    counts.aromatic_bonds >= n.div_ceil(2) && atom_fraction(ring_atoms, molecule) >= 0.5
}

fn ring_verdict(ring_atoms: &[usize], molecule: &Molecule, atom_threshold: f64) -> bool {
    let n = ring_atoms.len();
    if n < 3 {
        return false;
    }

    let counts = RingBondCounts::tally(ring_atoms, molecule);
    if counts.total_bonds == n && counts.aromatic_bonds == n {
        return true;
    }

    counts.pi_bonds >= n.div_ceil(2) && atom_fraction(ring_atoms, molecule) >= atom_threshold
}

/// Bond-type tallies over a ring's internal (consecutive-traversal) bonds.
struct RingBondCounts {
    total_bonds: usize,
    aromatic_bonds: usize,
    /// Bonds that are aromatic or double.
    pi_bonds: usize,
}

impl RingBondCounts {
    fn tally(ring_atoms: &[usize], molecule: &Molecule) -> Self {
        let n = ring_atoms.len();
        let mut counts = Self {
            total_bonds: 0,
            aromatic_bonds: 0,
            pi_bonds: 0,
        };
        for i in 0..n {
            let u = ring_atoms[i];
            let v = ring_atoms[(i + 1) % n];
            let Some(bond) = molecule.bond_between(u, v) else {
                continue;
            };
            counts.total_bonds += 1;
            if bond.kind == BondType::Aromatic {
                counts.aromatic_bonds += 1;
                counts.pi_bonds += 1;
            } else if bond.kind == BondType::Double {
                counts.pi_bonds += 1;
            }
        }
        counts
    }
}

fn atom_fraction(ring_atoms: &[usize], molecule: &Molecule) -> f64 {
    if ring_atoms.is_empty() {
        return 0.0;
    }
    let flagged = ring_atoms
        .iter()
        .filter_map(|&atom_id| molecule.atoms.get(atom_id))
        .filter(|atom| atom.aromatic)
        .count();
    flagged as f64 / ring_atoms.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Element;

    fn benzene() -> Molecule {
        let mut mol = Molecule::new();
        for _ in 0..6 {
            mol.add_aromatic_atom(Element::C);
        }
        for i in 0..6 {
            mol.add_bond(i, (i + 1) % 6, BondType::Aromatic).unwrap();
        }
        mol
    }

    /// Kekulé benzene: alternating single/double bonds, atoms flagged.
    fn kekule_benzene() -> Molecule {
        let mut mol = Molecule::new();
        for _ in 0..6 {
            mol.add_aromatic_atom(Element::C);
        }
        for i in 0..6 {
            let kind = if i % 2 == 0 {
                BondType::Double
            } else {
                BondType::Single
            };
            mol.add_bond(i, (i + 1) % 6, kind).unwrap();
        }
        mol
    }

    #[test]
    fn all_aromatic_bonds_make_the_ring_aromatic() {
        let mol = benzene();
        assert!(is_ring_aromatic(&[0, 1, 2, 3, 4, 5], &mol));
    }

    #[test]
    fn kekule_pattern_with_flagged_atoms_is_aromatic() {
        let mol = kekule_benzene();
        assert!(is_ring_aromatic(&[0, 1, 2, 3, 4, 5], &mol));
    }

    #[test]
    fn kekule_pattern_without_atom_flags_is_not_aromatic() {
        let mut mol = kekule_benzene();
        for atom in &mut mol.atoms {
            atom.aromatic = false;
        }
        assert!(!is_ring_aromatic(&[0, 1, 2, 3, 4, 5], &mol));
    }

    #[test]
    fn saturated_ring_is_not_aromatic() {
        let mut mol = Molecule::new();
        for _ in 0..6 {
            mol.add_atom(Element::C);
        }
        for i in 0..6 {
            mol.add_bond(i, (i + 1) % 6, BondType::Single).unwrap();
        }
        assert!(!is_ring_aromatic(&[0, 1, 2, 3, 4, 5], &mol));
    }

    #[test]
    fn tolerant_variant_accepts_half_flagged_atoms() {
        let mut mol = benzene();
        for atom_id in 3..6 {
            mol.atoms[atom_id].aromatic = false;
        }
        // Strict atom fraction is 0.5, below the 0.6 threshold used after
        // the all-aromatic-bond fast path; pull one bond out of the ring
        // tally to force the fraction test.
        mol.bonds[0].kind = BondType::Double;
        assert!(!is_ring_aromatic(&[0, 1, 2, 3, 4, 5], &mol));
        assert!(is_ring_aromatic_tolerant(&[0, 1, 2, 3, 4, 5], &mol));
    }

    #[test]
    fn tiny_rings_are_never_aromatic() {
        let mut mol = Molecule::new();
        mol.add_aromatic_atom(Element::C);
        mol.add_aromatic_atom(Element::C);
        mol.add_bond(0, 1, BondType::Aromatic).unwrap();
        assert!(!is_ring_aromatic(&[0, 1], &mol));
    }
}
