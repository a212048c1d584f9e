//! Monocyclic ring naming.
//!
//! Aromatic rings resolve through the retained-name tables (benzene,
//! pyridine, furan, thiazole, ...), selected by heteroatom identity, count
//! and relative position. Saturated heterocycles use the Hantzsch-Widman
//! retained names (oxirane through piperidine), with lactam/lactone
//! carbonyl variants. Plain carbocycles become `cyclo⟨alkane⟩` with
//! -ene/-yne locants. Heterocycles outside every table degrade to skeletal
//! replacement names (`oxacycloheptane`).

use super::RingName;
use crate::analysis::rings::Ring;
use crate::core::graph::Molecule;
use crate::core::{BondType, Element};
use crate::morphemes::{MorphemeTable, MultiplierKind};
use std::collections::HashMap;

/// Replacement seniority for ring numbering: oxygen family before nitrogen
/// family before the metalloids.
const HETERO_SENIORITY: [Element; 12] = [
    Element::O,
    Element::S,
    Element::Se,
    Element::Te,
    Element::N,
    Element::P,
    Element::As,
    Element::Sb,
    Element::Si,
    Element::Ge,
    Element::Sn,
    Element::B,
];

/// Names a single SSSR ring.
pub fn name_monocyclic(ring: &Ring, molecule: &Molecule, morphemes: &MorphemeTable) -> RingName {
    let n = ring.len();
    let heteroatoms: Vec<usize> = ring
        .atoms
        .iter()
        .copied()
        .filter(|&atom_id| molecule.atoms[atom_id].element.is_heteroatom())
        .collect();

    if ring.aromatic {
        if heteroatoms.is_empty() && n == 6 {
            let base = morphemes
                .retained_ring_name("mono:benzene")
                .unwrap_or("benzene")
                .to_owned();
            return RingName {
                base,
                locant_map: sequential_map(&ring.atoms),
                retained: true,
            };
        }
        if !heteroatoms.is_empty() && (n == 5 || n == 6) {
            if let Some(name) = hetero_aromatic_name(ring, molecule, morphemes) {
                return name;
            }
        }
    }

    if !ring.aromatic && !heteroatoms.is_empty() && (n == 5 || n == 6) {
        if let Some(name) = indicated_hydrogen_name(ring, molecule, morphemes) {
            return name;
        }
    }

    if heteroatoms.len() == 1 && !ring.aromatic && (3..=6).contains(&n) {
        if let Some(name) = saturated_heterocycle_name(ring, heteroatoms[0], molecule) {
            return name;
        }
    }

    if heteroatoms.is_empty() {
        return carbocycle_name(ring, molecule, morphemes);
    }

    replacement_name(ring, molecule, morphemes)
}

/// Locant map assigning 1..n along the given atom sequence.
fn sequential_map(atoms: &[usize]) -> HashMap<usize, String> {
    atoms
        .iter()
        .enumerate()
        .map(|(index, &atom_id)| (atom_id, (index + 1).to_string()))
        .collect()
}

/// Every rotation and direction of a cyclic atom sequence.
fn orientations(atoms: &[usize]) -> Vec<Vec<usize>> {
    let n = atoms.len();
    let mut result = Vec::with_capacity(2 * n);
    for start in 0..n {
        result.push((0..n).map(|i| atoms[(start + i) % n]).collect());
        result.push((0..n).map(|i| atoms[(start + n - i) % n]).collect());
    }
    result
}

/// Orientation score: sorted heteroatom locants first, then each element's
/// locants in replacement seniority order, so oxygen wins position 1 over
/// nitrogen on ties.
fn hetero_score(oriented: &[usize], molecule: &Molecule) -> Vec<usize> {
    let mut hetero_locants: Vec<usize> = oriented
        .iter()
        .enumerate()
        .filter(|&(_, &atom_id)| molecule.atoms[atom_id].element.is_heteroatom())
        .map(|(index, _)| index + 1)
        .collect();
    hetero_locants.sort_unstable();

    let mut score = hetero_locants;
    for element in HETERO_SENIORITY {
        let mut locants: Vec<usize> = oriented
            .iter()
            .enumerate()
            .filter(|&(_, &atom_id)| molecule.atoms[atom_id].element == element)
            .map(|(index, _)| index + 1)
            .collect();
        locants.sort_unstable();
        score.extend(locants);
    }
    score
}

/// Picks the orientation with the minimal score.
fn best_orientation(atoms: &[usize], score: impl Fn(&[usize]) -> Vec<usize>) -> Vec<usize> {
    orientations(atoms)
        .into_iter()
        .min_by(|a, b| score(a).cmp(&score(b)))
        .expect("a ring always has at least one orientation")
}

/// Retained hetero-aromatic names for five- and six-membered rings.
fn hetero_aromatic_name(
    ring: &Ring,
    molecule: &Molecule,
    morphemes: &MorphemeTable,
) -> Option<RingName> {
    let oriented = best_orientation(&ring.atoms, |o| hetero_score(o, molecule));
    let hetero_locants: Vec<(usize, Element)> = oriented
        .iter()
        .enumerate()
        .filter(|&(_, &atom_id)| molecule.atoms[atom_id].element.is_heteroatom())
        .map(|(index, &atom_id)| (index + 1, molecule.atoms[atom_id].element))
        .collect();

    let key = hetero_aromatic_key(ring.len(), &hetero_locants)?;
    let base = morphemes.retained_ring_name(key)?.to_owned();
    Some(RingName {
        base,
        locant_map: sequential_map(&oriented),
        retained: true,
    })
}

/// Maps heteroatom locant patterns to retained-ring table keys.
fn hetero_aromatic_key(n: usize, hetero: &[(usize, Element)]) -> Option<&'static str> {
    use Element::{N, O, S};
    let elements: Vec<Element> = hetero.iter().map(|&(_, element)| element).collect();
    let locants: Vec<usize> = hetero.iter().map(|&(locant, _)| locant).collect();

    match n {
        6 => match elements.as_slice() {
            [N] => Some("mono:pyridine"),
            [N, N] => match locants.as_slice() {
                [1, 2] => Some("mono:pyridazine"),
                [1, 3] => Some("mono:pyrimidine"),
                [1, 4] => Some("mono:pyrazine"),
                _ => None,
            },
            [N, N, N] => match locants.as_slice() {
                [1, 2, 3] => Some("mono:1,2,3-triazine"),
                [1, 2, 4] => Some("mono:1,2,4-triazine"),
                [1, 3, 5] => Some("mono:1,3,5-triazine"),
                _ => None,
            },
            [N, N, N, N] => Some("mono:tetrazine"),
            [O, N] => Some("mono:oxazine"),
            [S, N] => Some("mono:thiazine"),
            _ => None,
        },
        5 => match elements.as_slice() {
            [O] => Some("mono:furan"),
            [N] => Some("mono:pyrrole"),
            [S] => Some("mono:thiophene"),
            [N, N] => match locants.as_slice() {
                [1, 2] => Some("mono:pyrazole"),
                [1, 3] => Some("mono:imidazole"),
                _ => None,
            },
            [O, N] => match locants.as_slice() {
                [1, 2] => Some("mono:isoxazole"),
                [1, 3] => Some("mono:oxazole"),
                _ => None,
            },
            [S, N] => match locants.as_slice() {
                [1, 2] => Some("mono:isothiazole"),
                [1, 3] => Some("mono:thiazole"),
                _ => None,
            },
            [N, N, N] => Some("mono:triazole"),
            [N, N, N, N] => Some("mono:tetrazole"),
            _ => None,
        },
        _ => None,
    }
}

/// Indicated-hydrogen tautomers of the retained mancude rings.
///
/// A non-aromatic ring whose heteroatom pattern still matches a retained
/// aromatic key is the nH tautomer when exactly one ring position is left
/// without any double bond. Exocyclic double bonds (a methylidene =CH2, a
/// carbonyl =O) keep their ring atom sp2, so only the genuinely saturated
/// position carries the indicated hydrogen. The base name gains the
/// `⟨n⟩H-` prefix and the locant map follows the mancude numbering, which
/// is what renumbers substituent locants after the transformation.
fn indicated_hydrogen_name(
    ring: &Ring,
    molecule: &Molecule,
    morphemes: &MorphemeTable,
) -> Option<RingName> {
    let has_ring_double = ring
        .edges()
        .iter()
        .any(|&(u, v)| {
            molecule
                .bond_between(u, v)
                .is_some_and(|bond| bond.kind == BondType::Double)
        });
    if !has_ring_double {
        return None;
    }

    // Heteroatom locants first, then the lower indicated-hydrogen locant
    // breaks the remaining symmetry (2H-pyrrole over 5H-pyrrole).
    let oriented = best_orientation(&ring.atoms, |o| {
        let mut score = hetero_score(o, molecule);
        score.push(indicated_position(o, molecule).unwrap_or(usize::MAX));
        score
    });
    let locant = indicated_position(&oriented, molecule)?;

    let hetero_locants: Vec<(usize, Element)> = oriented
        .iter()
        .enumerate()
        .filter(|&(_, &atom_id)| molecule.atoms[atom_id].element.is_heteroatom())
        .map(|(index, &atom_id)| (index + 1, molecule.atoms[atom_id].element))
        .collect();
    let key = hetero_aromatic_key(ring.len(), &hetero_locants)?;
    let base = morphemes.retained_ring_name(key)?;

    Some(RingName {
        base: format!("{locant}H-{base}"),
        locant_map: sequential_map(&oriented),
        retained: true,
    })
}

/// The single ring position with no double-bond participation, eligible to
/// carry the indicated hydrogen. Divalent heteroatoms (O, S, Se, Te) never
/// do; `None` when zero or several positions qualify.
fn indicated_position(oriented: &[usize], molecule: &Molecule) -> Option<usize> {
    let mut positions = oriented
        .iter()
        .enumerate()
        .filter(|&(_, &atom_id)| {
            let element = molecule.atoms[atom_id].element;
            !matches!(
                element,
                Element::O | Element::S | Element::Se | Element::Te
            ) && !has_multiple_bond(atom_id, molecule)
        })
        .map(|(index, _)| index + 1);
    let first = positions.next()?;
    if positions.next().is_some() {
        return None;
    }
    Some(first)
}

/// Whether any double or triple bond, ring or exocyclic, touches the atom.
fn has_multiple_bond(atom_id: usize, molecule: &Molecule) -> bool {
    molecule.bonds.iter().any(|bond| {
        matches!(bond.kind, BondType::Double | BondType::Triple)
            && bond.other_end(atom_id).is_some()
    })
}

/// Hantzsch-Widman retained names for saturated single-heteroatom rings.
fn saturated_stem(element: Element, size: usize) -> Option<&'static str> {
    match (element, size) {
        (Element::O, 3) => Some("oxirane"),
        (Element::O, 4) => Some("oxetane"),
        (Element::O, 5) => Some("oxolane"),
        (Element::O, 6) => Some("oxane"),
        (Element::N, 3) => Some("azirane"),
        (Element::N, 4) => Some("azetidine"),
        (Element::N, 5) => Some("pyrrolidine"),
        (Element::N, 6) => Some("piperidine"),
        (Element::S, 3) => Some("thiirane"),
        (Element::S, 4) => Some("thietane"),
        (Element::S, 5) => Some("thiolane"),
        (Element::S, 6) => Some("thiane"),
        _ => None,
    }
}

fn saturated_heterocycle_name(
    ring: &Ring,
    hetero_atom: usize,
    molecule: &Molecule,
) -> Option<RingName> {
    let element = molecule.atoms[hetero_atom].element;
    let stem = saturated_stem(element, ring.len())?;

    // Heteroatom takes locant 1; prefer the direction whose position 2 is a
    // lactam/lactone carbonyl, then the lower substituent-independent walk.
    let oriented = best_orientation(&ring.atoms, |o| {
        let mut score = vec![
            o.iter()
                .position(|&atom_id| atom_id == hetero_atom)
                .unwrap_or(usize::MAX)
                + 1,
        ];
        score.push(if ring_carbonyl(o[1], molecule) { 0 } else { 1 });
        score
    });

    if oriented[0] != hetero_atom {
        return None;
    }

    if (element == Element::N || element == Element::O) && ring_carbonyl(oriented[1], molecule) {
        let trimmed = stem.strip_suffix('e').unwrap_or(stem);
        return Some(RingName {
            base: format!("{trimmed}-2-one"),
            locant_map: sequential_map(&oriented),
            retained: true,
        });
    }

    Some(RingName {
        base: stem.to_owned(),
        locant_map: sequential_map(&oriented),
        retained: true,
    })
}

/// Whether a ring carbon carries an exocyclic carbonyl oxygen.
fn ring_carbonyl(atom_id: usize, molecule: &Molecule) -> bool {
    if molecule.atoms[atom_id].element != Element::C {
        return false;
    }
    molecule.bonds.iter().any(|bond| {
        bond.kind == BondType::Double
            && bond.other_end(atom_id).is_some_and(|other| {
                molecule.atoms[other].element == Element::O
            })
    })
}

/// `cyclo⟨alkane⟩` naming with in-ring unsaturation locants.
fn carbocycle_name(ring: &Ring, molecule: &Molecule, morphemes: &MorphemeTable) -> RingName {
    let oriented = best_orientation(&ring.atoms, |o| {
        let (enes, ynes) = unsaturation_locants(o, molecule);
        let mut all: Vec<usize> = enes.iter().chain(ynes.iter()).copied().collect();
        all.sort_unstable();
        let mut score = all;
        score.extend(enes.iter().copied());
        score
    });
    let (enes, ynes) = unsaturation_locants(&oriented, molecule);
    let stem = morphemes.stem_or_generic(ring.len());
    let base = format!("cyclo{}", unsaturated_stem(&stem, &enes, &ynes, morphemes));

    RingName {
        base,
        locant_map: sequential_map(&oriented),
        retained: false,
    }
}

/// Locants of in-ring double and triple bonds under an orientation.
fn unsaturation_locants(oriented: &[usize], molecule: &Molecule) -> (Vec<usize>, Vec<usize>) {
    let n = oriented.len();
    let mut enes = Vec::new();
    let mut ynes = Vec::new();
    for k in 0..n {
        let u = oriented[k];
        let v = oriented[(k + 1) % n];
        match molecule.bond_between(u, v).map(|bond| bond.kind) {
            Some(BondType::Double) => enes.push(k + 1),
            Some(BondType::Triple) => ynes.push(k + 1),
            _ => {}
        }
    }
    (enes, ynes)
}

/// Attaches -ene/-yne suffixes with locants to an alkane stem.
pub(crate) fn unsaturated_stem(
    stem: &str,
    enes: &[usize],
    ynes: &[usize],
    morphemes: &MorphemeTable,
) -> String {
    match (enes.is_empty(), ynes.is_empty()) {
        (true, true) => format!("{stem}ane"),
        (false, true) => format!("{stem}{}", bond_suffix(enes, "ene", morphemes)),
        (true, false) => format!("{stem}{}", bond_suffix(ynes, "yne", morphemes)),
        (false, false) => {
            let ene_part = bond_suffix(enes, "ene", morphemes);
            let ene_part = ene_part.strip_suffix('e').unwrap_or(&ene_part);
            format!("{stem}{ene_part}{}", bond_suffix(ynes, "yne", morphemes))
        }
    }
}

/// `-1-ene` / `a-1,3-diene` style suffix fragments.
fn bond_suffix(locants: &[usize], ending: &str, morphemes: &MorphemeTable) -> String {
    let cited: Vec<String> = locants.iter().map(usize::to_string).collect();
    if locants.len() == 1 {
        format!("-{}-{}", cited.join(","), ending)
    } else {
        let multiplier = morphemes
            .multiplier(locants.len(), MultiplierKind::Basic)
            .unwrap_or("poly");
        format!("a-{}-{}{}", cited.join(","), multiplier, ending)
    }
}

/// Skeletal replacement fallback for heterocycles outside every table:
/// heteroatom locant prefixes plus `cyclo⟨alkane⟩`.
fn replacement_name(ring: &Ring, molecule: &Molecule, morphemes: &MorphemeTable) -> RingName {
    let oriented = best_orientation(&ring.atoms, |o| hetero_score(o, molecule));
    let mut prefix_parts: Vec<String> = Vec::new();
    for element in HETERO_SENIORITY {
        let locants: Vec<usize> = oriented
            .iter()
            .enumerate()
            .filter(|&(_, &atom_id)| molecule.atoms[atom_id].element == element)
            .map(|(index, _)| index + 1)
            .collect();
        if locants.is_empty() {
            continue;
        }
        let Some(prefix) = morphemes.heteroatom_prefix(element) else {
            continue;
        };
        let cited: Vec<String> = locants.iter().map(usize::to_string).collect();
        let multiplier = if locants.len() > 1 {
            morphemes
                .multiplier(locants.len(), MultiplierKind::Basic)
                .unwrap_or("")
        } else {
            ""
        };
        prefix_parts.push(format!("{}-{}{}", cited.join(","), multiplier, prefix));
    }

    let (enes, ynes) = unsaturation_locants(&oriented, molecule);
    let stem = morphemes.stem_or_generic(ring.len());
    let base = format!(
        "{}cyclo{}",
        prefix_parts.join("-"),
        unsaturated_stem(&stem, &enes, &ynes, morphemes)
    );

    RingName {
        base,
        locant_map: sequential_map(&oriented),
        retained: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::sssr;
    use crate::morphemes::default_table;

    fn first_ring(molecule: &Molecule) -> Ring {
        sssr(molecule).remove(0)
    }

    fn carbon_ring(n: usize, kind: BondType, aromatic: bool) -> Molecule {
        let mut mol = Molecule::new();
        for _ in 0..n {
            if aromatic {
                mol.add_aromatic_atom(Element::C);
            } else {
                mol.add_atom(Element::C);
            }
        }
        for i in 0..n {
            mol.add_bond(i, (i + 1) % n, kind).unwrap();
        }
        mol
    }

    #[test]
    fn cyclohexane_is_named() {
        let mol = carbon_ring(6, BondType::Single, false);
        let ring = first_ring(&mol);
        let name = name_monocyclic(&ring, &mol, default_table().unwrap());
        assert_eq!(name.base, "cyclohexane");
        assert!(!name.retained);
        assert_eq!(name.locant_map.len(), 6);
    }

    #[test]
    fn benzene_is_retained() {
        let mol = carbon_ring(6, BondType::Aromatic, true);
        let ring = first_ring(&mol);
        let name = name_monocyclic(&ring, &mol, default_table().unwrap());
        assert_eq!(name.base, "benzene");
        assert!(name.retained);
    }

    #[test]
    fn cyclohexene_gets_the_lowest_ene_locant() {
        let mut mol = carbon_ring(6, BondType::Single, false);
        mol.bonds[2].kind = BondType::Double;
        let ring = first_ring(&mol);
        let name = name_monocyclic(&ring, &mol, default_table().unwrap());
        assert_eq!(name.base, "cyclohex-1-ene");
    }

    #[test]
    fn cyclohexadiene_uses_the_diene_form() {
        let mut mol = carbon_ring(6, BondType::Single, false);
        mol.bonds[0].kind = BondType::Double;
        mol.bonds[2].kind = BondType::Double;
        let ring = first_ring(&mol);
        let name = name_monocyclic(&ring, &mol, default_table().unwrap());
        assert_eq!(name.base, "cyclohexa-1,3-diene");
    }

    fn aromatic_hetero_ring(elements: &[Element]) -> Molecule {
        let mut mol = Molecule::new();
        for &element in elements {
            mol.add_aromatic_atom(element);
        }
        for i in 0..elements.len() {
            mol.add_bond(i, (i + 1) % elements.len(), BondType::Aromatic)
                .unwrap();
        }
        mol
    }

    #[test]
    fn pyridine_and_diazines_resolve_by_position() {
        use Element::{C, N};
        let cases: Vec<(&[Element], &str)> = vec![
            (&[N, C, C, C, C, C], "pyridine"),
            (&[N, N, C, C, C, C], "pyridazine"),
            (&[N, C, N, C, C, C], "pyrimidine"),
            (&[N, C, C, N, C, C], "pyrazine"),
            (&[N, C, N, C, N, C], "1,3,5-triazine"),
        ];
        for (elements, expected) in cases {
            let mol = aromatic_hetero_ring(elements);
            let ring = first_ring(&mol);
            let name = name_monocyclic(&ring, &mol, default_table().unwrap());
            assert_eq!(name.base, expected);
            assert!(name.retained);
        }
    }

    #[test]
    fn five_membered_aromatics_resolve_by_heteroatom() {
        use Element::{C, N, O, S};
        let cases: Vec<(&[Element], &str)> = vec![
            (&[O, C, C, C, C], "furan"),
            (&[N, C, C, C, C], "pyrrole"),
            (&[S, C, C, C, C], "thiophene"),
            (&[N, N, C, C, C], "pyrazole"),
            (&[N, C, N, C, C], "imidazole"),
            (&[O, C, N, C, C], "1,3-oxazole"),
            (&[O, N, C, C, C], "1,2-oxazole"),
            (&[S, C, N, C, C], "1,3-thiazole"),
        ];
        for (elements, expected) in cases {
            let mol = aromatic_hetero_ring(elements);
            let ring = first_ring(&mol);
            let name = name_monocyclic(&ring, &mol, default_table().unwrap());
            assert_eq!(name.base, expected, "elements: {elements:?}");
        }
    }

    #[test]
    fn heteroatom_gets_locant_one() {
        use Element::{C, N};
        // Nitrogen placed mid-traversal still numbers 1.
        let mol = aromatic_hetero_ring(&[C, C, N, C, C, C]);
        let ring = first_ring(&mol);
        let name = name_monocyclic(&ring, &mol, default_table().unwrap());
        assert_eq!(name.base, "pyridine");
        assert_eq!(name.locant_map[&2], "1");
    }

    fn saturated_hetero_ring(hetero: Element, size: usize) -> Molecule {
        let mut mol = Molecule::new();
        mol.add_atom(hetero);
        for _ in 1..size {
            mol.add_atom(Element::C);
        }
        for i in 0..size {
            mol.add_bond(i, (i + 1) % size, BondType::Single).unwrap();
        }
        mol
    }

    #[test]
    fn saturated_heterocycles_use_hantzsch_widman_names() {
        let cases = [
            (Element::O, 3, "oxirane"),
            (Element::O, 6, "oxane"),
            (Element::N, 5, "pyrrolidine"),
            (Element::N, 6, "piperidine"),
            (Element::S, 5, "thiolane"),
        ];
        for (element, size, expected) in cases {
            let mol = saturated_hetero_ring(element, size);
            let ring = first_ring(&mol);
            let name = name_monocyclic(&ring, &mol, default_table().unwrap());
            assert_eq!(name.base, expected);
            assert_eq!(name.locant_map[&0], "1", "heteroatom is position 1");
        }
    }

    #[test]
    fn lactam_gets_the_2_one_suffix() {
        // pyrrolidin-2-one: N1-C2(=O)-C3-C4-C5
        let mut mol = saturated_hetero_ring(Element::N, 5);
        let o = mol.add_atom(Element::O);
        mol.add_bond(1, o, BondType::Double).unwrap();
        let ring = first_ring(&mol);
        let name = name_monocyclic(&ring, &mol, default_table().unwrap());
        assert_eq!(name.base, "pyrrolidin-2-one");
        assert_eq!(name.locant_map[&1], "2");
    }

    #[test]
    fn exocyclic_methylidene_forces_indicated_hydrogen() {
        // 5-methylidene-4H-1,3-thiazole core: S1-C2=N3-C4-C5(=CH2).
        let mut mol = Molecule::new();
        let s = mol.add_atom(Element::S);
        let c2 = mol.add_atom(Element::C);
        let n = mol.add_atom(Element::N);
        let c4 = mol.add_atom(Element::C);
        let c5 = mol.add_atom(Element::C);
        mol.atoms[c4].hydrogens = 2;
        mol.add_bond(s, c2, BondType::Single).unwrap();
        mol.add_bond(c2, n, BondType::Double).unwrap();
        mol.add_bond(n, c4, BondType::Single).unwrap();
        mol.add_bond(c4, c5, BondType::Single).unwrap();
        mol.add_bond(c5, s, BondType::Single).unwrap();
        let exo = mol.add_atom(Element::C);
        mol.add_bond(c5, exo, BondType::Double).unwrap();

        let ring = first_ring(&mol);
        let name = name_monocyclic(&ring, &mol, default_table().unwrap());
        assert_eq!(name.base, "4H-1,3-thiazole");
        assert_eq!(name.locant_map[&s], "1");
        assert_eq!(name.locant_map[&c4], "4");
        assert_eq!(name.locant_map[&c5], "5");
    }

    #[test]
    fn indicated_hydrogen_takes_the_lower_symmetric_locant() {
        // 2H-pyrrole: N1=C5, C3=C4, sp3 at C2.
        let mut mol = Molecule::new();
        let n = mol.add_atom(Element::N);
        let c2 = mol.add_atom(Element::C);
        let c3 = mol.add_atom(Element::C);
        let c4 = mol.add_atom(Element::C);
        let c5 = mol.add_atom(Element::C);
        mol.atoms[c2].hydrogens = 2;
        mol.add_bond(n, c2, BondType::Single).unwrap();
        mol.add_bond(c2, c3, BondType::Single).unwrap();
        mol.add_bond(c3, c4, BondType::Double).unwrap();
        mol.add_bond(c4, c5, BondType::Single).unwrap();
        mol.add_bond(c5, n, BondType::Double).unwrap();

        let ring = first_ring(&mol);
        let name = name_monocyclic(&ring, &mol, default_table().unwrap());
        assert_eq!(name.base, "2H-pyrrole");
        assert_eq!(name.locant_map[&c2], "2");
    }

    #[test]
    fn lactam_rings_are_not_indicated_hydrogen_tautomers() {
        // No in-ring double bond: the carbonyl is exocyclic, so the ring
        // keeps its lactam name instead of gaining an nH- prefix.
        let mut mol = saturated_hetero_ring(Element::N, 5);
        let o = mol.add_atom(Element::O);
        mol.add_bond(1, o, BondType::Double).unwrap();
        let ring = first_ring(&mol);
        let name = name_monocyclic(&ring, &mol, default_table().unwrap());
        assert_eq!(name.base, "pyrrolidin-2-one");
    }

    #[test]
    fn unknown_heterocycle_degrades_to_replacement_name() {
        let mol = saturated_hetero_ring(Element::O, 7);
        let ring = first_ring(&mol);
        let name = name_monocyclic(&ring, &mol, default_table().unwrap());
        assert_eq!(name.base, "1-oxacycloheptane");
        assert!(!name.retained);
    }
}
