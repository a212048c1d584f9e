//! Ring classification and ring-system assembly.
//!
//! Individual SSSR rings are classified from their pairwise atom overlaps
//! (isolated, spiro, fused, bridged), then merged into connected ring
//! systems with a canonical outer perimeter. The perimeter is the ordered
//! walk over edges that belong to exactly one SSSR ring; fused-aromatic
//! numbering in the ring nomenclature engine is built on it.

use super::rings::Ring;
use crate::core::graph::Molecule;
use std::collections::{BTreeSet, HashMap};

/// Topological classification of an SSSR ring relative to its neighbors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RingClass {
    /// Shares no atom with any other ring.
    Isolated,
    /// Shares exactly one atom with another ring.
    Spiro,
    /// Shares exactly one bond (two adjacent atoms) with another ring.
    Fused,
    /// Shares three or more atoms, two non-adjacent atoms, or connects
    /// otherwise disjoint rings.
    Bridged,
}

/// Classifies every SSSR ring by its maximum atom overlap with the others.
pub fn classify(rings: &[Ring], molecule: &Molecule) -> Vec<RingClass> {
    let n = rings.len();
    let mut shared: Vec<Vec<Vec<usize>>> = vec![vec![Vec::new(); n]; n];
    for i in 0..n {
        for j in (i + 1)..n {
            let atoms = rings[i].shared_atoms(&rings[j]);
            shared[i][j] = atoms.clone();
            shared[j][i] = atoms;
        }
    }

    (0..n)
        .map(|i| classify_single(i, rings, &shared, molecule))
        .collect()
}

fn classify_single(
    index: usize,
    rings: &[Ring],
    shared: &[Vec<Vec<usize>>],
    molecule: &Molecule,
) -> RingClass {
    let overlaps = &shared[index];
    let max_overlap = overlaps.iter().map(Vec::len).max().unwrap_or(0);

    match max_overlap {
        0 => RingClass::Isolated,
        1 => RingClass::Spiro,
        2 => {
            let all_adjacent = overlaps
                .iter()
                .filter(|atoms| atoms.len() == 2)
                .all(|atoms| molecule.bond_between(atoms[0], atoms[1]).is_some());
            if !all_adjacent {
                return RingClass::Bridged;
            }
            if bridges_disjoint_neighbors(index, rings, overlaps) {
                RingClass::Bridged
            } else {
                RingClass::Fused
            }
        }
        _ => RingClass::Bridged,
    }
}

/// Whether a candidate fused ring actually spans two rings that share
/// nothing with each other, which makes it a bridge in the overlap graph.
fn bridges_disjoint_neighbors(index: usize, rings: &[Ring], overlaps: &[Vec<usize>]) -> bool {
    let neighbors: Vec<usize> = overlaps
        .iter()
        .enumerate()
        .filter(|(j, atoms)| *j != index && !atoms.is_empty())
        .map(|(j, _)| j)
        .collect();
    if neighbors.len() < 2 {
        return false;
    }
    for (pos, &a) in neighbors.iter().enumerate() {
        for &b in &neighbors[pos + 1..] {
            if rings[a].shared_atoms(&rings[b]).is_empty() {
                return true;
            }
        }
    }
    false
}

/// A maximal union of atom-sharing SSSR rings.
#[derive(Debug, Clone)]
pub struct RingSystem {
    /// Indices into the SSSR ring list.
    pub ring_indices: Vec<usize>,
    /// Sorted unique atom ids of the system.
    pub atoms: Vec<usize>,
    /// Bond ids with both endpoints inside the system.
    pub bond_ids: Vec<usize>,
    /// Aggregated classification over the member rings.
    pub class: RingClass,
    /// Whether every member ring is aromatic.
    pub aromatic: bool,
    /// Ordered outer-perimeter atom ids.
    pub perimeter: Vec<usize>,
}

impl RingSystem {
    /// Whether the system contains the atom.
    pub fn contains_atom(&self, atom_id: usize) -> bool {
        self.atoms.binary_search(&atom_id).is_ok()
    }

    /// Number of member rings.
    pub fn ring_count(&self) -> usize {
        self.ring_indices.len()
    }

    /// Sorted member-ring sizes, used as a retained-name pattern key.
    pub fn sorted_ring_sizes(&self, rings: &[Ring]) -> Vec<usize> {
        let mut sizes: Vec<usize> = self
            .ring_indices
            .iter()
            .map(|&index| rings[index].len())
            .collect();
        sizes.sort_unstable();
        sizes
    }
}

/// Groups SSSR rings into connected ring systems.
///
/// Two rings belong to the same system when they share at least one atom.
/// The aggregated classification takes the most constrained member class:
/// bridged over spiro over fused over isolated.
pub fn ring_systems(molecule: &Molecule, rings: &[Ring]) -> Vec<RingSystem> {
    let classes = classify(rings, molecule);
    let n = rings.len();
    let mut assigned = vec![false; n];
    let mut systems = Vec::new();

    for start in 0..n {
        if assigned[start] {
            continue;
        }
        let mut members = vec![start];
        assigned[start] = true;
        let mut cursor = 0;
        while cursor < members.len() {
            let current = members[cursor];
            cursor += 1;
            for other in 0..n {
                if !assigned[other] && !rings[current].shared_atoms(&rings[other]).is_empty() {
                    assigned[other] = true;
                    members.push(other);
                }
            }
        }
        members.sort_unstable();
        systems.push(build_system(molecule, rings, &classes, members));
    }
    systems
}

fn build_system(
    molecule: &Molecule,
    rings: &[Ring],
    classes: &[RingClass],
    ring_indices: Vec<usize>,
) -> RingSystem {
    let atom_set: BTreeSet<usize> = ring_indices
        .iter()
        .flat_map(|&index| rings[index].atoms.iter().copied())
        .collect();
    let atoms: Vec<usize> = atom_set.iter().copied().collect();

    let bond_ids: Vec<usize> = molecule
        .bonds
        .iter()
        .filter(|bond| atom_set.contains(&bond.atom_ids.0) && atom_set.contains(&bond.atom_ids.1))
        .map(|bond| bond.id)
        .collect();

    let class = ring_indices
        .iter()
        .map(|&index| classes[index])
        .fold(RingClass::Isolated, |acc, class| match (acc, class) {
            (RingClass::Bridged, _) | (_, RingClass::Bridged) => RingClass::Bridged,
            (RingClass::Spiro, _) | (_, RingClass::Spiro) => RingClass::Spiro,
            (RingClass::Fused, _) | (_, RingClass::Fused) => RingClass::Fused,
            _ => RingClass::Isolated,
        });
    let class = if class == RingClass::Isolated && ring_indices.len() > 1 {
        RingClass::Fused
    } else {
        class
    };

    let aromatic = ring_indices.iter().all(|&index| rings[index].aromatic);
    let perimeter = perimeter_walk(molecule, rings, &ring_indices);

    RingSystem {
        ring_indices,
        atoms,
        bond_ids,
        class,
        aromatic,
        perimeter,
    }
}

/// Computes the ordered outer perimeter of a ring system.
///
/// Perimeter edges are those belonging to exactly one member ring. The walk
/// starts at the smallest perimeter atom id and always proceeds to the
/// smallest-id neighbor not just visited, which makes the ordering
/// deterministic under atom-id permutation of equivalent inputs.
pub fn perimeter_walk(molecule: &Molecule, rings: &[Ring], ring_indices: &[usize]) -> Vec<usize> {
    let mut edge_counts: HashMap<(usize, usize), usize> = HashMap::new();
    for &index in ring_indices {
        for (u, v) in rings[index].edges() {
            if molecule.bond_between(u, v).is_none() {
                continue;
            }
            let key = (u.min(v), u.max(v));
            *edge_counts.entry(key).or_insert(0) += 1;
        }
    }

    let mut perimeter_adjacency: HashMap<usize, Vec<usize>> = HashMap::new();
    for (&(u, v), &count) in &edge_counts {
        if count == 1 {
            perimeter_adjacency.entry(u).or_default().push(v);
            perimeter_adjacency.entry(v).or_default().push(u);
        }
    }
    for neighbors in perimeter_adjacency.values_mut() {
        neighbors.sort_unstable();
    }

    let Some(&start) = perimeter_adjacency.keys().min() else {
        return Vec::new();
    };

    let mut walk = vec![start];
    let mut previous = usize::MAX;
    let mut current = start;
    loop {
        let neighbors = &perimeter_adjacency[&current];
        let Some(&next) = neighbors
            .iter()
            .find(|&&candidate| candidate != previous)
            .or_else(|| neighbors.first())
        else {
            break;
        };
        if next == start {
            break;
        }
        walk.push(next);
        previous = current;
        current = next;
        if walk.len() > perimeter_adjacency.len() {
            break;
        }
    }
    walk
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::sssr;
    use crate::core::{BondType, Element};

    fn decalin() -> Molecule {
        let mut mol = Molecule::new();
        for _ in 0..10 {
            mol.add_atom(Element::C);
        }
        let edges = [
            (0, 1),
            (1, 2),
            (2, 3),
            (3, 4),
            (4, 5),
            (5, 0),
            (1, 6),
            (6, 7),
            (7, 8),
            (8, 9),
            (9, 0),
        ];
        for (u, v) in edges {
            mol.add_bond(u, v, BondType::Single).unwrap();
        }
        mol
    }

    fn spiro_pentanes() -> Molecule {
        let mut mol = Molecule::new();
        for _ in 0..9 {
            mol.add_atom(Element::C);
        }
        let edges = [
            (0, 1),
            (1, 2),
            (2, 3),
            (3, 4),
            (4, 0),
            (4, 5),
            (5, 6),
            (6, 7),
            (7, 8),
            (8, 4),
        ];
        for (u, v) in edges {
            mol.add_bond(u, v, BondType::Single).unwrap();
        }
        mol
    }

    fn norbornane() -> Molecule {
        let mut mol = Molecule::new();
        for _ in 0..7 {
            mol.add_atom(Element::C);
        }
        let edges = [(0, 1), (1, 2), (2, 3), (3, 4), (4, 5), (5, 0), (0, 6), (3, 6)];
        for (u, v) in edges {
            mol.add_bond(u, v, BondType::Single).unwrap();
        }
        mol
    }

    #[test]
    fn isolated_rings_do_not_touch() {
        let mut mol = Molecule::new();
        for _ in 0..6 {
            mol.add_atom(Element::C);
        }
        for i in 0..3 {
            mol.add_bond(i, (i + 1) % 3, BondType::Single).unwrap();
        }
        for i in 0..3 {
            mol.add_bond(3 + i, 3 + (i + 1) % 3, BondType::Single)
                .unwrap();
        }
        let rings = sssr(&mol);
        let classes = classify(&rings, &mol);
        assert_eq!(classes, vec![RingClass::Isolated, RingClass::Isolated]);
        assert_eq!(ring_systems(&mol, &rings).len(), 2);
    }

    #[test]
    fn fused_pair_is_classified_fused() {
        let mol = decalin();
        let rings = sssr(&mol);
        let classes = classify(&rings, &mol);
        assert_eq!(classes, vec![RingClass::Fused, RingClass::Fused]);
    }

    #[test]
    fn spiro_union_shares_exactly_one_atom() {
        let mol = spiro_pentanes();
        let rings = sssr(&mol);
        let classes = classify(&rings, &mol);
        assert_eq!(classes, vec![RingClass::Spiro, RingClass::Spiro]);

        let systems = ring_systems(&mol, &rings);
        assert_eq!(systems.len(), 1);
        assert_eq!(systems[0].class, RingClass::Spiro);
        assert_eq!(systems[0].atoms.len(), 9);
    }

    #[test]
    fn norbornane_is_bridged() {
        let mol = norbornane();
        let rings = sssr(&mol);
        let classes = classify(&rings, &mol);
        assert!(classes.iter().all(|&class| class == RingClass::Bridged));

        let systems = ring_systems(&mol, &rings);
        assert_eq!(systems.len(), 1);
        assert_eq!(systems[0].class, RingClass::Bridged);
    }

    #[test]
    fn decalin_perimeter_walks_all_outer_atoms() {
        let mol = decalin();
        let rings = sssr(&mol);
        let systems = ring_systems(&mol, &rings);
        assert_eq!(systems.len(), 1);

        let perimeter = &systems[0].perimeter;
        assert_eq!(perimeter.len(), 10, "shared bond atoms appear once");
        assert_eq!(perimeter[0], 0);
        let as_set: BTreeSet<usize> = perimeter.iter().copied().collect();
        assert_eq!(as_set.len(), 10);
    }

    #[test]
    fn system_ring_sizes_are_sorted() {
        let mol = norbornane();
        let rings = sssr(&mol);
        let systems = ring_systems(&mol, &rings);
        assert_eq!(systems[0].sorted_ring_sizes(&rings), vec![5, 5]);
    }
}
