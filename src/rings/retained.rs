//! Retained names for fused polycyclic ring systems.
//!
//! Each retained skeleton (naphthalene, anthracene, indole, ...) is matched
//! by ring count, sorted ring sizes, heteroatom content, aromaticity, and
//! fusion topology, then numbered by walking the system perimeter against a
//! fixed label template (1, 2, 3, 3a, ... with letter locants on fusion
//! atoms). Orientation is chosen to minimize heteroatom locants, with
//! per-skeleton placement overrides where tradition fixes a position
//! (acridine's N-10, fluorene's C-9).

use super::RingName;
use crate::analysis::rings::Ring;
use crate::analysis::systems::RingSystem;
use crate::core::graph::Molecule;
use crate::core::{BondType, Element};
use crate::morphemes::MorphemeTable;
use std::collections::{HashMap, HashSet};

/// A perimeter label template for one retained skeleton.
struct FusedTemplate {
    labels: &'static [&'static str],
    fusion_positions: &'static [usize],
    inner_labels: &'static [&'static str],
}

const NAPHTHALENE: FusedTemplate = FusedTemplate {
    labels: &["1", "2", "3", "4", "4a", "5", "6", "7", "8", "8a"],
    fusion_positions: &[4, 9],
    inner_labels: &[],
};

const INDOLIZINE_SHAPE: FusedTemplate = FusedTemplate {
    // 5-6 fusion: indole, benzofuran, benzothiophene.
    labels: &["1", "2", "3", "3a", "4", "5", "6", "7", "7a"],
    fusion_positions: &[3, 8],
    inner_labels: &[],
};

const AZULENE: FusedTemplate = FusedTemplate {
    labels: &["1", "2", "3", "3a", "4", "5", "6", "7", "8", "8a"],
    fusion_positions: &[3, 9],
    inner_labels: &[],
};

const ANTHRACENE: FusedTemplate = FusedTemplate {
    labels: &[
        "1", "2", "3", "4", "4a", "10", "10a", "5", "6", "7", "8", "8a", "9", "9a",
    ],
    fusion_positions: &[4, 6, 11, 13],
    inner_labels: &[],
};

const PHENANTHRENE: FusedTemplate = FusedTemplate {
    labels: &[
        "1", "2", "3", "4", "4a", "4b", "5", "6", "7", "8", "8a", "9", "10", "10a",
    ],
    fusion_positions: &[4, 5, 10, 13],
    inner_labels: &[],
};

const FLUORENE_SHAPE: FusedTemplate = FusedTemplate {
    // 5-6-6 with the five-ring in the middle: fluorene, carbazole.
    labels: &[
        "1", "2", "3", "4", "4a", "4b", "5", "6", "7", "8", "8a", "9", "9a",
    ],
    fusion_positions: &[4, 5, 10, 12],
    inner_labels: &[],
};

const PYRENE: FusedTemplate = FusedTemplate {
    labels: &[
        "1", "2", "3", "3a", "4", "5", "5a", "6", "7", "8", "8a", "9", "10", "10a",
    ],
    fusion_positions: &[3, 6, 10, 13],
    inner_labels: &["10b", "10c"],
};

const CHRYSENE: FusedTemplate = FusedTemplate {
    labels: &[
        "1", "2", "3", "4", "4a", "4b", "5", "6", "6a", "7", "8", "9", "10", "10a", "10b", "11",
        "12", "12a",
    ],
    fusion_positions: &[4, 5, 8, 13, 14, 17],
    inner_labels: &[],
};

/// Attempts to name a fused ring system from the retained catalog.
pub fn match_retained(
    molecule: &Molecule,
    rings: &[Ring],
    system: &RingSystem,
    morphemes: &MorphemeTable,
) -> Option<RingName> {
    let sizes = system.sorted_ring_sizes(rings);
    let hetero_elements = heteroatom_elements(molecule, system);

    let (key, map) = match (system.ring_count(), sizes.as_slice()) {
        (2, [6, 6]) if system.aromatic => match hetero_elements.as_slice() {
            [] => (
                "fused:naphthalene",
                number_template(molecule, rings, system, &NAPHTHALENE, hetero_min_score)?,
            ),
            [Element::N] => {
                let map =
                    number_template(molecule, rings, system, &NAPHTHALENE, hetero_min_score)?;
                let nitrogen_label = element_label(&map, molecule, Element::N)?;
                let key = match nitrogen_label.as_str() {
                    "1" => "fused:quinoline",
                    "2" => "fused:isoquinoline",
                    _ => return None,
                };
                (key, map)
            }
            _ => return None,
        },
        (2, [5, 6]) if system.aromatic => {
            let map =
                number_template(molecule, rings, system, &INDOLIZINE_SHAPE, hetero_min_score)?;
            let key = match hetero_elements.as_slice() {
                [Element::N] if element_label(&map, molecule, Element::N)? == "1" => "fused:indole",
                [Element::O] if element_label(&map, molecule, Element::O)? == "1" => {
                    "fused:benzofuran"
                }
                [Element::S] if element_label(&map, molecule, Element::S)? == "1" => {
                    "fused:benzothiophene"
                }
                _ => return None,
            };
            (key, map)
        }
        (2, [5, 7]) if system.aromatic && hetero_elements.is_empty() => (
            "fused:azulene",
            number_template(molecule, rings, system, &AZULENE, hetero_min_score)?,
        ),
        (3, [6, 6, 6]) => {
            name_three_six_rings(molecule, rings, system, &hetero_elements)?
        }
        (3, [5, 6, 6]) => {
            name_five_six_six(molecule, rings, system, &hetero_elements)?
        }
        (4, [6, 6, 6, 6]) if system.aromatic && hetero_elements.is_empty() => {
            match system.atoms.len() {
                16 => (
                    "fused:pyrene",
                    number_template(molecule, rings, system, &PYRENE, hetero_min_score)?,
                ),
                18 => (
                    "fused:chrysene",
                    number_template(molecule, rings, system, &CHRYSENE, hetero_min_score)?,
                ),
                _ => return None,
            }
        }
        _ => return None,
    };

    let base = morphemes.retained_ring_name(key)?.to_owned();
    Some(RingName {
        base,
        locant_map: map,
        retained: true,
    })
}

/// Detects biphenyl: two isolated all-carbon aromatic six-rings joined by
/// exactly one single bond.
///
/// Returns the retained name with unprimed locants on the first ring and
/// primed locants on the second; position 1/1' sit on the joining bond.
pub fn detect_biphenyl(
    molecule: &Molecule,
    rings: &[Ring],
    systems: &[RingSystem],
    morphemes: &MorphemeTable,
) -> Option<RingName> {
    if systems.len() != 2 {
        return None;
    }
    for system in systems {
        if system.ring_count() != 1 || !system.aromatic || system.atoms.len() != 6 {
            return None;
        }
        if !heteroatom_elements(molecule, system).is_empty() {
            return None;
        }
    }

    let joins: Vec<&crate::core::graph::Bond> = molecule
        .bonds
        .iter()
        .filter(|bond| {
            systems[0].contains_atom(bond.atom_ids.0) && systems[1].contains_atom(bond.atom_ids.1)
                || systems[1].contains_atom(bond.atom_ids.0)
                    && systems[0].contains_atom(bond.atom_ids.1)
        })
        .collect();
    let [join] = joins.as_slice() else {
        return None;
    };
    if join.kind != BondType::Single {
        return None;
    }

    let base = morphemes.retained_ring_name("link:biphenyl")?.to_owned();
    let mut locant_map = HashMap::new();
    for (system, prime) in systems.iter().zip(["", "'"]) {
        let ring = &rings[system.ring_indices[0]];
        let anchor = if system.contains_atom(join.atom_ids.0) && ring.contains(join.atom_ids.0) {
            join.atom_ids.0
        } else {
            join.atom_ids.1
        };
        let start = ring
            .atoms
            .iter()
            .position(|&atom_id| atom_id == anchor)
            .unwrap_or(0);
        let n = ring.atoms.len();
        for offset in 0..n {
            let atom_id = ring.atoms[(start + offset) % n];
            locant_map.insert(atom_id, format!("{}{}", offset + 1, prime));
        }
    }

    Some(RingName {
        base,
        locant_map,
        retained: true,
    })
}

/// Linear/angular/heterocyclic resolution of a fused 6-6-6 system.
fn name_three_six_rings(
    molecule: &Molecule,
    rings: &[Ring],
    system: &RingSystem,
    hetero_elements: &[Element],
) -> Option<(&'static str, HashMap<usize, String>)> {
    let angular = is_angular(molecule, rings, system);

    match hetero_elements {
        [] if system.aromatic => {
            if angular {
                Some((
                    "fused:phenanthrene",
                    number_template(molecule, rings, system, &PHENANTHRENE, hetero_min_score)?,
                ))
            } else {
                Some((
                    "fused:anthracene",
                    number_template(molecule, rings, system, &ANTHRACENE, hetero_min_score)?,
                ))
            }
        }
        [Element::N] if system.aromatic && !angular => {
            let map = number_template(molecule, rings, system, &ANTHRACENE, |map, mol| {
                place_at_score(map, mol, Element::N, "10")
            })?;
            Some(("fused:acridine", map))
        }
        [Element::O] if !angular => {
            // Xanthene: aromatic outer rings, middle ring carries O-10 and
            // the sp3 C-9.
            if aromatic_ring_count(rings, system) < 2 {
                return None;
            }
            let map = number_template(molecule, rings, system, &ANTHRACENE, |map, mol| {
                place_at_score(map, mol, Element::O, "10")
            })?;
            Some(("fused:xanthene", map))
        }
        _ => None,
    }
}

/// Fluorene / carbazole resolution of a fused 5-6-6 system.
fn name_five_six_six(
    molecule: &Molecule,
    rings: &[Ring],
    system: &RingSystem,
    hetero_elements: &[Element],
) -> Option<(&'static str, HashMap<usize, String>)> {
    if aromatic_ring_count(rings, system) < 2 {
        return None;
    }
    match hetero_elements {
        [] => {
            let map = number_template(molecule, rings, system, &FLUORENE_SHAPE, |map, mol| {
                nonaromatic_carbon_score(map, mol, "9")
            })?;
            Some(("fused:fluorene", map))
        }
        [Element::N] => {
            let map = number_template(molecule, rings, system, &FLUORENE_SHAPE, |map, mol| {
                place_at_score(map, mol, Element::N, "9")
            })?;
            Some(("fused:carbazole", map))
        }
        _ => None,
    }
}

/// Whether the two fusion bonds of a three-ring cata-fused system touch:
/// touching fusion bonds make the system angular (phenanthrene), separate
/// ones make it linear (anthracene).
pub(crate) fn is_angular(molecule: &Molecule, rings: &[Ring], system: &RingSystem) -> bool {
    let mut edge_counts: HashMap<(usize, usize), usize> = HashMap::new();
    for &index in &system.ring_indices {
        for (u, v) in rings[index].edges() {
            if molecule.bond_between(u, v).is_none() {
                continue;
            }
            *edge_counts.entry((u.min(v), u.max(v))).or_insert(0) += 1;
        }
    }
    let fusion_bonds: Vec<(usize, usize)> = edge_counts
        .iter()
        .filter(|&(_, &count)| count >= 2)
        .map(|(&edge, _)| edge)
        .collect();
    if fusion_bonds.len() != 2 {
        return false;
    }

    let (a, b) = (fusion_bonds[0], fusion_bonds[1]);
    for u in [a.0, a.1] {
        for v in [b.0, b.1] {
            if u == v || molecule.bond_between(u, v).is_some() {
                return true;
            }
        }
    }
    false
}

/// Number of aromatic member rings; the partially saturated retained
/// skeletons (fluorene, xanthene) still need both outer benzo rings.
fn aromatic_ring_count(rings: &[Ring], system: &RingSystem) -> usize {
    system
        .ring_indices
        .iter()
        .filter(|&&index| rings[index].aromatic)
        .count()
}

/// Sorted heteroatom elements of a ring system.
fn heteroatom_elements(molecule: &Molecule, system: &RingSystem) -> Vec<Element> {
    let mut elements: Vec<Element> = system
        .atoms
        .iter()
        .map(|&atom_id| molecule.atoms[atom_id].element)
        .filter(|element| element.is_heteroatom())
        .collect();
    elements.sort_unstable();
    elements
}

/// Numeric rank of a locant label for minimization ("4" < "4a" < "5").
fn label_rank(label: &str) -> usize {
    let digits: String = label.chars().take_while(char::is_ascii_digit).collect();
    let number: usize = digits.parse().unwrap_or(usize::MAX / 30);
    let letter = label
        .chars()
        .find(|c| c.is_ascii_lowercase())
        .map(|c| c as usize - 'a' as usize + 1)
        .unwrap_or(0);
    number * 27 + letter
}

/// Default orientation score: sorted heteroatom label ranks.
fn hetero_min_score(map: &HashMap<usize, String>, molecule: &Molecule) -> Vec<usize> {
    let mut ranks: Vec<usize> = map
        .iter()
        .filter(|&(&atom_id, _)| molecule.atoms[atom_id].element.is_heteroatom())
        .map(|(_, label)| label_rank(label))
        .collect();
    ranks.sort_unstable();
    ranks
}

/// Score that forces one element onto a traditional position (acridine N-10,
/// xanthene O-10, carbazole N-9), then minimizes the rest.
fn place_at_score(
    map: &HashMap<usize, String>,
    molecule: &Molecule,
    element: Element,
    label: &str,
) -> Vec<usize> {
    let placed = map.iter().any(|(&atom_id, atom_label)| {
        molecule.atoms[atom_id].element == element && atom_label == label
    });
    let mut score = vec![if placed { 0 } else { 1 }];
    score.extend(hetero_min_score(map, molecule));
    score
}

/// Score that puts the sp3 (non-aromatic) carbon on a traditional position
/// (fluorene C-9).
fn nonaromatic_carbon_score(
    map: &HashMap<usize, String>,
    molecule: &Molecule,
    label: &str,
) -> Vec<usize> {
    let placed = map.iter().any(|(&atom_id, atom_label)| {
        !molecule.atoms[atom_id].aromatic && atom_label == label
    });
    vec![if placed { 0 } else { 1 }]
}

/// The label assigned to the only atom of an element, if present.
fn element_label(
    map: &HashMap<usize, String>,
    molecule: &Molecule,
    element: Element,
) -> Option<String> {
    map.iter()
        .find(|&(&atom_id, _)| molecule.atoms[atom_id].element == element)
        .map(|(_, label)| label.clone())
}

/// Walks the system perimeter against a label template.
///
/// Tries every rotation and direction of the perimeter; an orientation is
/// valid when fusion atoms (members of two or more rings) land exactly on
/// the template's fusion positions. Among valid orientations the one with
/// the minimal score wins. Interior atoms (pyrene) receive the template's
/// inner labels in atom-id order.
fn number_template(
    molecule: &Molecule,
    rings: &[Ring],
    system: &RingSystem,
    template: &FusedTemplate,
    score: impl Fn(&HashMap<usize, String>, &Molecule) -> Vec<usize>,
) -> Option<HashMap<usize, String>> {
    let perimeter = &system.perimeter;
    if perimeter.len() != template.labels.len() {
        return None;
    }

    let perimeter_set: HashSet<usize> = perimeter.iter().copied().collect();
    let mut inner_atoms: Vec<usize> = system
        .atoms
        .iter()
        .copied()
        .filter(|atom_id| !perimeter_set.contains(atom_id))
        .collect();
    inner_atoms.sort_unstable();
    if inner_atoms.len() != template.inner_labels.len() {
        return None;
    }

    let fusion_atoms: HashSet<usize> = system
        .atoms
        .iter()
        .copied()
        .filter(|&atom_id| {
            system
                .ring_indices
                .iter()
                .filter(|&&index| rings[index].contains(atom_id))
                .count()
                >= 2
        })
        .collect();

    let n = perimeter.len();
    let mut best: Option<(Vec<usize>, HashMap<usize, String>)> = None;
    for start in 0..n {
        for forward in [true, false] {
            let oriented: Vec<usize> = (0..n)
                .map(|i| {
                    if forward {
                        perimeter[(start + i) % n]
                    } else {
                        perimeter[(start + n - i) % n]
                    }
                })
                .collect();

            let valid = (0..n).all(|index| {
                let is_fusion = fusion_atoms.contains(&oriented[index]);
                is_fusion == template.fusion_positions.contains(&index)
            });
            if !valid {
                continue;
            }

            let mut map: HashMap<usize, String> = oriented
                .iter()
                .zip(template.labels)
                .map(|(&atom_id, &label)| (atom_id, label.to_owned()))
                .collect();
            for (&atom_id, &label) in inner_atoms.iter().zip(template.inner_labels) {
                map.insert(atom_id, label.to_owned());
            }

            let orientation_score = score(&map, molecule);
            if best
                .as_ref()
                .is_none_or(|(best_score, _)| orientation_score < *best_score)
            {
                best = Some((orientation_score, map));
            }
        }
    }
    best.map(|(_, map)| map)
}
