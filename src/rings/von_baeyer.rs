//! von Baeyer nomenclature for bridged polycyclic ring systems.
//!
//! The optimizer enumerates candidate principal-bridgehead pairs, finds
//! node-disjoint main bridges between them, numbers every admissible
//! assignment, and selects the winner under the P-23.2 / P-14.4
//! lexicographic hierarchy: largest main bridges first, then lowest
//! secondary-bridge locants, first heteroatom, principal group, remaining
//! heteroatoms, and substituents. The survivor is rendered as
//! `⟨cyclo-prefix⟩[L1.L2.L3...]⟨alkane⟩` with replacement prefixes and
//! in-ring -ene locants.

use super::monocyclic::unsaturated_stem;
use super::{NumberingGoals, RingName};
use crate::analysis::rings::Ring;
use crate::analysis::systems::RingSystem;
use crate::core::graph::Molecule;
use crate::core::{BondType, Element};
use crate::morphemes::{MorphemeTable, MultiplierKind};
use std::collections::{HashMap, HashSet, VecDeque};

/// Caps the simple-path enumeration per bridgehead pair.
const MAX_PATHS: usize = 2000;
/// Caps the disjoint-triple combinations scored per bridgehead pair.
const MAX_TRIPLES: usize = 200;

/// Replacement citation order for heteroatom prefixes.
const REPLACEMENT_ORDER: [Element; 12] = [
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

/// Names a bridged (or fused, when no retained name applied) polycyclic
/// system by von Baeyer rules. Returns `None` when no admissible
/// bridgehead assignment exists; the caller then falls back to the
/// `polycyclic_C⟨n⟩` placeholder.
pub fn name_von_baeyer(
    molecule: &Molecule,
    rings: &[Ring],
    system: &RingSystem,
    goals: &NumberingGoals,
    morphemes: &MorphemeTable,
) -> Option<RingName> {
    let rank = system.ring_count();
    let prefix = cyclo_prefix(rank)?;
    let graph = SystemGraph::new(molecule, system);

    let bridgeheads = principal_bridgehead_candidates(&graph, rings, system);
    if bridgeheads.len() < 2 {
        return None;
    }

    let mut best: Option<Assignment> = None;
    for &alpha in &bridgeheads {
        for &omega in &bridgeheads {
            if alpha == omega {
                continue;
            }
            let paths = simple_paths(&graph, alpha, omega);
            for (p1, p2, p3) in disjoint_triples(&paths) {
                for ordering in orderings(p1, p2, p3) {
                    if let Some(assignment) =
                        build_assignment(&graph, molecule, rank, ordering, goals)
                    {
                        if best
                            .as_ref()
                            .is_none_or(|current| assignment.score < current.score)
                        {
                            best = Some(assignment);
                        }
                    }
                }
            }
        }
    }
    let mut assignment = best?;

    let has_heteroatoms = graph
        .atoms
        .iter()
        .any(|&atom_id| molecule.atoms[atom_id].element.is_heteroatom());
    if !has_heteroatoms {
        apply_cyclic_shift(&mut assignment, goals);
    }

    Some(render(&assignment, molecule, prefix, morphemes))
}

/// `bicyclo` through `decacyclo`; systems beyond rank 10 are not named.
fn cyclo_prefix(rank: usize) -> Option<&'static str> {
    match rank {
        2 => Some("bicyclo"),
        3 => Some("tricyclo"),
        4 => Some("tetracyclo"),
        5 => Some("pentacyclo"),
        6 => Some("hexacyclo"),
        7 => Some("heptacyclo"),
        8 => Some("octacyclo"),
        9 => Some("nonacyclo"),
        10 => Some("decacyclo"),
        _ => None,
    }
}

/// Adjacency restricted to the ring system.
struct SystemGraph {
    atoms: Vec<usize>,
    neighbors: HashMap<usize, Vec<usize>>,
    bonds: Vec<(usize, usize, BondType)>,
}

impl SystemGraph {
    fn new(molecule: &Molecule, system: &RingSystem) -> Self {
        let atom_set: HashSet<usize> = system.atoms.iter().copied().collect();
        let mut neighbors: HashMap<usize, Vec<usize>> =
            system.atoms.iter().map(|&id| (id, Vec::new())).collect();
        let mut bonds = Vec::new();
        for &bond_id in &system.bond_ids {
            let bond = &molecule.bonds[bond_id];
            let (u, v) = bond.atom_ids;
            if atom_set.contains(&u) && atom_set.contains(&v) {
                neighbors.get_mut(&u).expect("system atom").push(v);
                neighbors.get_mut(&v).expect("system atom").push(u);
                bonds.push((u, v, bond.kind));
            }
        }
        for list in neighbors.values_mut() {
            list.sort_unstable();
        }
        Self {
            atoms: system.atoms.clone(),
            neighbors,
            bonds,
        }
    }

    fn degree(&self, atom_id: usize) -> usize {
        self.neighbors.get(&atom_id).map_or(0, Vec::len)
    }

    fn adjacent(&self, u: usize, v: usize) -> bool {
        self.neighbors
            .get(&u)
            .is_some_and(|list| list.contains(&v))
    }
}

/// Atoms appearing in at least two SSSR rings with system degree >= 3.
fn principal_bridgehead_candidates(
    graph: &SystemGraph,
    rings: &[Ring],
    system: &RingSystem,
) -> Vec<usize> {
    graph
        .atoms
        .iter()
        .copied()
        .filter(|&atom_id| {
            let ring_count = system
                .ring_indices
                .iter()
                .filter(|&&index| rings[index].contains(atom_id))
                .count();
            ring_count >= 2 && graph.degree(atom_id) >= 3
        })
        .collect()
}

/// All simple paths between two atoms, longest first, capped.
fn simple_paths(graph: &SystemGraph, from: usize, to: usize) -> Vec<Vec<usize>> {
    let mut paths = Vec::new();
    let mut stack = vec![(vec![from], HashSet::from([from]))];
    while let Some((path, visited)) = stack.pop() {
        if paths.len() >= MAX_PATHS {
            break;
        }
        let last = *path.last().expect("path is never empty");
        if last == to {
            paths.push(path);
            continue;
        }
        for &next in &graph.neighbors[&last] {
            if visited.contains(&next) {
                continue;
            }
            let mut new_path = path.clone();
            let mut new_visited = visited.clone();
            new_path.push(next);
            new_visited.insert(next);
            stack.push((new_path, new_visited));
        }
    }
    paths.sort_by_key(|path| std::cmp::Reverse(path.len()));
    paths
}

/// Interior atoms of a path (endpoints excluded).
fn interior(path: &[usize]) -> &[usize] {
    &path[1..path.len() - 1]
}

/// Whether two paths share no interior atoms.
fn interior_disjoint(a: &[usize], b: &[usize]) -> bool {
    let interior_a: HashSet<usize> = interior(a).iter().copied().collect();
    interior(b).iter().all(|atom| !interior_a.contains(atom))
}

/// Candidate main-bridge triples: mutually interior-disjoint path triples,
/// longest-first, capped. Scoring later applies the P-23.2 preference for
/// the largest two bridges, so enumerating a bounded set here is safe.
fn disjoint_triples<'a>(paths: &'a [Vec<usize>]) -> Vec<(&'a [usize], &'a [usize], &'a [usize])> {
    let mut triples = Vec::new();
    for (i, p1) in paths.iter().enumerate() {
        for (j, p2) in paths.iter().enumerate().skip(i + 1) {
            if !interior_disjoint(p1, p2) {
                continue;
            }
            for p3 in paths.iter().skip(j + 1) {
                if interior_disjoint(p1, p3) && interior_disjoint(p2, p3) {
                    triples.push((p1.as_slice(), p2.as_slice(), p3.as_slice()));
                    if triples.len() >= MAX_TRIPLES {
                        return triples;
                    }
                }
            }
        }
    }
    triples
}

/// The six orderings of a path triple, keeping only those with
/// non-increasing bridge sizes (the only admissible main-bridge orders).
fn orderings<'a>(
    p1: &'a [usize],
    p2: &'a [usize],
    p3: &'a [usize],
) -> Vec<[&'a [usize]; 3]> {
    let permutations = [
        [p1, p2, p3],
        [p1, p3, p2],
        [p2, p1, p3],
        [p2, p3, p1],
        [p3, p1, p2],
        [p3, p2, p1],
    ];
    permutations
        .into_iter()
        .filter(|[a, b, c]| a.len() >= b.len() && b.len() >= c.len())
        .collect()
}

/// A secondary bridge: interior atoms plus the main-path locants it joins.
#[derive(Debug, Clone)]
struct SecondaryBridge {
    interior_atoms: Vec<usize>,
    low_locant: usize,
    high_locant: usize,
}

/// A fully numbered candidate assignment with its selection score.
struct Assignment {
    numbering: HashMap<usize, usize>,
    main_lengths: Vec<usize>,
    secondary: Vec<SecondaryBridge>,
    score: Vec<i64>,
}

/// Numbers one main-bridge ordering and detects its secondary bridges.
///
/// Returns `None` when the assignment is inadmissible: leftover atoms that
/// do not form clean two-attachment bridges, a secondary-bridge count that
/// contradicts the ring rank, or a heteroatom off the main bridges.
fn build_assignment(
    graph: &SystemGraph,
    molecule: &Molecule,
    rank: usize,
    ordering: [&[usize]; 3],
    goals: &NumberingGoals,
) -> Option<Assignment> {
    let [main1, main2, main3] = ordering;
    let alpha = main1[0];
    let omega = *main1.last().expect("paths have endpoints");

    let mut numbering: HashMap<usize, usize> = HashMap::new();
    let mut next = 1usize;
    let mut assign = |atom: usize, numbering: &mut HashMap<usize, usize>, next: &mut usize| {
        numbering.insert(atom, *next);
        *next += 1;
    };

    assign(alpha, &mut numbering, &mut next);
    for &atom in interior(main1) {
        assign(atom, &mut numbering, &mut next);
    }
    assign(omega, &mut numbering, &mut next);
    for &atom in interior(main2).iter().rev() {
        assign(atom, &mut numbering, &mut next);
    }
    for &atom in interior(main3) {
        assign(atom, &mut numbering, &mut next);
    }

    let main_atoms: HashSet<usize> = numbering.keys().copied().collect();

    // Heteroatoms must sit on the main bridges.
    for &atom_id in &graph.atoms {
        if !main_atoms.contains(&atom_id) && molecule.atoms[atom_id].element.is_heteroatom() {
            return None;
        }
    }

    let mut secondary = find_secondary_bridges(graph, &numbering, &main_atoms, alpha, omega)?;
    if secondary.len() != rank.saturating_sub(2) {
        return None;
    }

    // Cite and number secondary bridges largest-first, locants low-first.
    secondary.sort_by(|a, b| {
        b.interior_atoms
            .len()
            .cmp(&a.interior_atoms.len())
            .then_with(|| (a.low_locant, a.high_locant).cmp(&(b.low_locant, b.high_locant)))
    });
    for bridge in &secondary {
        for &atom in &bridge.interior_atoms {
            assign(atom, &mut numbering, &mut next);
        }
    }

    if numbering.len() != graph.atoms.len() {
        return None;
    }

    let main_lengths = vec![
        interior(main1).len(),
        interior(main2).len(),
        interior(main3).len(),
    ];
    let score = score_assignment(&numbering, &main_lengths, &secondary, molecule, goals);

    Some(Assignment {
        numbering,
        main_lengths,
        secondary,
        score,
    })
}

/// Finds every secondary bridge: direct extra bonds between main-path
/// atoms, and off-main components attached to exactly two main-path atoms.
///
/// When several shortcut routes compete between the same attachment pair,
/// only the minimum-length route survives, together with every route tied
/// at that minimum. A dropped longer route leaves its interior atoms
/// unnumbered, so the caller's completeness check rejects the assignment
/// and a decomposition that absorbs the longer route into a main bridge
/// wins instead.
fn find_secondary_bridges(
    graph: &SystemGraph,
    numbering: &HashMap<usize, usize>,
    main_atoms: &HashSet<usize>,
    alpha: usize,
    omega: usize,
) -> Option<Vec<SecondaryBridge>> {
    // Candidate shortcuts keyed by their attachment atom pair.
    let mut candidates: Vec<((usize, usize), Vec<usize>)> = Vec::new();

    // Zero-length candidates: extra bonds between already numbered atoms
    // that are not consecutive along any main bridge. Consecutive
    // numbering differences of 1 (or the closing alpha bonds) belong to
    // main bridges.
    for &(u, v, _) in &graph.bonds {
        if !main_atoms.contains(&u) || !main_atoms.contains(&v) {
            continue;
        }
        if is_main_bridge_bond(numbering[&u], numbering[&v], numbering, alpha, omega) {
            continue;
        }
        if (u, v) == (alpha, omega) || (v, u) == (alpha, omega) {
            // An alpha-omega shortcut is a main-bridge candidate, not a
            // secondary bridge.
            continue;
        }
        candidates.push(((u.min(v), u.max(v)), Vec::new()));
    }

    // Longer candidates: connected off-main components with exactly two
    // attachment points.
    let mut visited: HashSet<usize> = HashSet::new();
    for &start in &graph.atoms {
        if main_atoms.contains(&start) || visited.contains(&start) {
            continue;
        }
        let mut component = Vec::new();
        let mut attachments: HashSet<usize> = HashSet::new();
        let mut queue = VecDeque::from([start]);
        visited.insert(start);
        while let Some(current) = queue.pop_front() {
            component.push(current);
            for &neighbor in &graph.neighbors[&current] {
                if main_atoms.contains(&neighbor) {
                    attachments.insert(neighbor);
                } else if visited.insert(neighbor) {
                    queue.push_back(neighbor);
                }
            }
        }
        if attachments.len() != 2 {
            return None;
        }
        let mut attach: Vec<usize> = attachments.into_iter().collect();
        attach.sort_by_key(|atom| numbering[atom]);
        let ordered = order_component_path(graph, &component, attach[1])?;
        candidates.push(((attach[0].min(attach[1]), attach[0].max(attach[1])), ordered));
    }

    // The minimum-length shortcut per attachment pair; ties all survive.
    let mut minimum_by_pair: HashMap<(usize, usize), usize> = HashMap::new();
    for (pair, interior) in &candidates {
        let entry = minimum_by_pair.entry(*pair).or_insert(interior.len());
        *entry = (*entry).min(interior.len());
    }

    let mut bridges = Vec::new();
    for (pair, interior_atoms) in candidates {
        if interior_atoms.len() > minimum_by_pair[&pair] {
            continue;
        }
        let (mut low_locant, mut high_locant) = (numbering[&pair.0], numbering[&pair.1]);
        if low_locant > high_locant {
            std::mem::swap(&mut low_locant, &mut high_locant);
        }
        bridges.push(SecondaryBridge {
            interior_atoms,
            low_locant,
            high_locant,
        });
    }
    Some(bridges)
}

/// Whether a bond between two numbered atoms lies on a main bridge.
fn is_main_bridge_bond(
    nu: usize,
    nv: usize,
    numbering: &HashMap<usize, usize>,
    alpha: usize,
    omega: usize,
) -> bool {
    let (lo, hi) = (nu.min(nv), nu.max(nv));
    if hi - lo == 1 {
        return true;
    }
    // Closing bonds back to the bridgeheads: second bridge end to alpha,
    // third bridge start from alpha and end at omega.
    let n_alpha = numbering[&alpha];
    let n_omega = numbering[&omega];
    lo == n_alpha || lo == n_omega || hi == n_alpha || hi == n_omega
}

/// Orders an off-main component as a simple path starting next to the
/// higher-numbered attachment; gives up when the component is not a path.
fn order_component_path(
    graph: &SystemGraph,
    component: &[usize],
    high_attachment: usize,
) -> Option<Vec<usize>> {
    let component_set: HashSet<usize> = component.iter().copied().collect();
    let mut ordered = Vec::with_capacity(component.len());
    let mut current = *component
        .iter()
        .find(|&&atom| graph.adjacent(atom, high_attachment))?;
    let mut previous = None;
    loop {
        ordered.push(current);
        if ordered.len() == component.len() {
            return Some(ordered);
        }
        let next = graph.neighbors[&current]
            .iter()
            .copied()
            .find(|&n| component_set.contains(&n) && Some(n) != previous && !ordered.contains(&n));
        match next {
            Some(n) => {
                previous = Some(current);
                current = n;
            }
            None => return None,
        }
    }
}

/// The lexicographic selection key implementing P-23.2 / P-14.4:
/// (a) largest L1+L2, then L3, then L1; (b) lowest secondary-bridge
/// locants; (c) lowest first heteroatom locant; (d) lowest principal-group
/// locants; (e) lowest remaining heteroatom locants; (f) lowest
/// substituent locants.
fn score_assignment(
    numbering: &HashMap<usize, usize>,
    main_lengths: &[usize],
    secondary: &[SecondaryBridge],
    molecule: &Molecule,
    goals: &NumberingGoals,
) -> Vec<i64> {
    let (l1, l2, l3) = (main_lengths[0], main_lengths[1], main_lengths[2]);
    let mut score: Vec<i64> = vec![-((l1 + l2) as i64), -(l3 as i64), -(l1 as i64)];

    for bridge in secondary {
        score.push(bridge.low_locant as i64);
        score.push(bridge.high_locant as i64);
    }

    let mut hetero_locants: Vec<i64> = numbering
        .iter()
        .filter(|&(&atom_id, _)| molecule.atoms[atom_id].element.is_heteroatom())
        .map(|(_, &locant)| locant as i64)
        .collect();
    hetero_locants.sort_unstable();
    score.push(hetero_locants.first().copied().unwrap_or(i64::MAX));

    let mut principal: Vec<i64> = goals
        .principal_atoms
        .iter()
        .filter_map(|atom_id| numbering.get(atom_id))
        .map(|&locant| locant as i64)
        .collect();
    principal.sort_unstable();
    score.extend(&principal);

    score.extend(hetero_locants.iter().skip(1));

    let mut substituents: Vec<i64> = goals
        .substituent_atoms
        .iter()
        .filter_map(|atom_id| numbering.get(atom_id))
        .map(|&locant| locant as i64)
        .collect();
    substituents.sort_unstable();
    score.extend(&substituents);

    score
}

/// Cyclic-shift optimization for carbocyclic systems: rotate the final
/// locant map when doing so lowers the principal-group locants, then the
/// substituent locants. Skipped entirely for heteroatom-bearing skeletons,
/// whose locants are structural.
fn apply_cyclic_shift(assignment: &mut Assignment, goals: &NumberingGoals) {
    let n = assignment.numbering.len();
    if n == 0 {
        return;
    }
    let shift_score = |shift: usize| -> (Vec<usize>, Vec<usize>) {
        let locant = |atom: &usize| -> Option<usize> {
            assignment
                .numbering
                .get(atom)
                .map(|&num| (num - 1 + shift) % n + 1)
        };
        let mut principal: Vec<usize> = goals.principal_atoms.iter().filter_map(locant).collect();
        principal.sort_unstable();
        let mut substituents: Vec<usize> =
            goals.substituent_atoms.iter().filter_map(locant).collect();
        substituents.sort_unstable();
        (principal, substituents)
    };

    let best_shift = (0..n)
        .min_by_key(|&shift| shift_score(shift))
        .unwrap_or(0);
    if best_shift != 0 {
        for number in assignment.numbering.values_mut() {
            *number = (*number - 1 + best_shift) % n + 1;
        }
        for bridge in &mut assignment.secondary {
            bridge.low_locant = (bridge.low_locant - 1 + best_shift) % n + 1;
            bridge.high_locant = (bridge.high_locant - 1 + best_shift) % n + 1;
            if bridge.low_locant > bridge.high_locant {
                std::mem::swap(&mut bridge.low_locant, &mut bridge.high_locant);
            }
        }
    }
}

/// Renders the final ring name from the winning assignment.
fn render(
    assignment: &Assignment,
    molecule: &Molecule,
    prefix: &str,
    morphemes: &MorphemeTable,
) -> RingName {
    let mut bracket: Vec<String> = assignment
        .main_lengths
        .iter()
        .map(usize::to_string)
        .collect();
    for bridge in &assignment.secondary {
        bracket.push(format!(
            "{}({},{})",
            bridge.interior_atoms.len(),
            bridge.low_locant,
            bridge.high_locant
        ));
    }

    let hetero_prefix = heteroatom_prefix(assignment, molecule, morphemes);

    let mut enes = Vec::new();
    let mut ynes = Vec::new();
    for bond in &molecule.bonds {
        let (u, v) = bond.atom_ids;
        let (Some(&nu), Some(&nv)) = (
            assignment.numbering.get(&u),
            assignment.numbering.get(&v),
        ) else {
            continue;
        };
        match bond.kind {
            BondType::Double => enes.push(nu.min(nv)),
            BondType::Triple => ynes.push(nu.min(nv)),
            _ => {}
        }
    }
    enes.sort_unstable();
    ynes.sort_unstable();

    let stem = morphemes.stem_or_generic(assignment.numbering.len());
    let base = format!(
        "{}{}[{}]{}",
        hetero_prefix,
        prefix,
        bracket.join("."),
        unsaturated_stem(&stem, &enes, &ynes, morphemes)
    );

    RingName {
        base,
        locant_map: assignment
            .numbering
            .iter()
            .map(|(&atom_id, &number)| (atom_id, number.to_string()))
            .collect(),
        retained: false,
    }
}

/// `2-oxa` / `2,5-dioxa-7-aza` style replacement prefixes, cited in the
/// fixed element order.
fn heteroatom_prefix(
    assignment: &Assignment,
    molecule: &Molecule,
    morphemes: &MorphemeTable,
) -> String {
    let mut parts = Vec::new();
    for element in REPLACEMENT_ORDER {
        let mut locants: Vec<usize> = assignment
            .numbering
            .iter()
            .filter(|&(&atom_id, _)| molecule.atoms[atom_id].element == element)
            .map(|(_, &number)| number)
            .collect();
        if locants.is_empty() {
            continue;
        }
        locants.sort_unstable();
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
        parts.push(format!("{}-{}{}", cited.join(","), multiplier, prefix));
    }
    parts.join("-")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{ring_info, ring_systems};
    use crate::morphemes::default_table;

    fn name(molecule: &Molecule) -> Option<RingName> {
        let info = ring_info(molecule);
        let systems = ring_systems(molecule, &info.rings);
        assert_eq!(systems.len(), 1);
        name_von_baeyer(
            molecule,
            &info.rings,
            &systems[0],
            &NumberingGoals::default(),
            default_table().unwrap(),
        )
    }

    fn carbon_skeleton(count: usize, edges: &[(usize, usize)]) -> Molecule {
        let mut mol = Molecule::new();
        for _ in 0..count {
            mol.add_atom(Element::C);
        }
        for &(u, v) in edges {
            mol.add_bond(u, v, BondType::Single).unwrap();
        }
        mol
    }

    #[test]
    fn norbornane_is_bicyclo_2_2_1_heptane() {
        let mol = carbon_skeleton(
            7,
            &[(0, 1), (1, 2), (2, 3), (3, 4), (4, 5), (5, 0), (0, 6), (3, 6)],
        );
        let name = name(&mol).expect("norbornane is von Baeyer nameable");
        assert_eq!(name.base, "bicyclo[2.2.1]heptane");
    }

    #[test]
    fn decalin_is_bicyclo_4_4_0_decane() {
        let mol = carbon_skeleton(
            10,
            &[
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
            ],
        );
        let name = name(&mol).expect("decalin is von Baeyer nameable");
        assert_eq!(name.base, "bicyclo[4.4.0]decane");
    }

    #[test]
    fn bridgeheads_take_locants_one_and_the_bridge_end() {
        let mol = carbon_skeleton(
            7,
            &[(0, 1), (1, 2), (2, 3), (3, 4), (4, 5), (5, 0), (0, 6), (3, 6)],
        );
        let name = name(&mol).unwrap();
        let bridgehead_locants: Vec<&str> = [0, 3]
            .iter()
            .map(|atom| name.locant_map[atom].as_str())
            .collect();
        assert!(bridgehead_locants.contains(&"1"));
        assert!(bridgehead_locants.contains(&"4"));
        // The one-carbon bridge is numbered last.
        assert_eq!(name.locant_map[&6], "7");
    }

    #[test]
    fn oxabicyclic_gets_replacement_prefix_and_low_locant() {
        // 7-oxabicyclo[2.2.1]heptane: oxygen on the one-atom bridge is
        // rejected, so put it on a two-atom bridge instead.
        let mut mol = Molecule::new();
        let o = mol.add_atom(Element::O);
        for _ in 0..6 {
            mol.add_atom(Element::C);
        }
        // O is atom 0, part of a two-atom bridge (0, 1).
        for &(u, v) in &[(0, 1), (1, 2), (2, 3), (3, 4), (4, 5), (5, 0), (2, 6), (5, 6)] {
            mol.add_bond(u, v, BondType::Single).unwrap();
        }
        let name = name(&mol).expect("oxabicyclic is nameable");
        assert!(
            name.base.starts_with("2-oxabicyclo[2.2.1]"),
            "got {}",
            name.base
        );
    }

    #[test]
    fn adamantane_is_tricyclo_3_3_1_1() {
        // Bridgeheads 0-3, each pair joined through one methylene (4-9).
        let mol = carbon_skeleton(
            10,
            &[
                (0, 4),
                (4, 1),
                (0, 5),
                (5, 2),
                (0, 6),
                (6, 3),
                (1, 7),
                (7, 2),
                (1, 8),
                (8, 3),
                (2, 9),
                (9, 3),
            ],
        );
        let name = name(&mol).expect("adamantane is von Baeyer nameable");
        assert_eq!(name.base, "tricyclo[3.3.1.1(3,7)]decane");
    }

    #[test]
    fn competing_secondary_bridges_keep_the_minimum() {
        // Bicyclo[3.3.1] skeleton (bridgeheads 0 and 4) with two extra
        // routes between atoms 1 and 3: a direct bond and a one-carbon
        // bridge. Decompositions that leave both as shortcuts between the
        // same pair are rejected (the longer route would go unnumbered);
        // the winner absorbs the direct bond into a main bridge and cites
        // the two one-carbon routes, tied at the minimum, as bridges.
        let mol = carbon_skeleton(
            10,
            &[
                (0, 1),
                (1, 2),
                (2, 3),
                (3, 4),
                (0, 5),
                (5, 6),
                (6, 7),
                (7, 4),
                (0, 8),
                (8, 4),
                (1, 3),
                (1, 9),
                (9, 3),
            ],
        );
        let name = name(&mol).expect("the tetracyclic cage is nameable");
        assert_eq!(name.base, "tetracyclo[3.2.1.1(6,7).1(6,7)]decane");
    }

    #[test]
    fn in_ring_double_bond_adds_ene_locant() {
        let mut mol = carbon_skeleton(
            7,
            &[(0, 1), (1, 2), (2, 3), (3, 4), (4, 5), (5, 0), (0, 6), (3, 6)],
        );
        mol.bonds[1].kind = BondType::Double;
        let name = name(&mol).expect("norbornene is von Baeyer nameable");
        assert_eq!(name.base, "bicyclo[2.2.1]hept-2-ene");
    }

    #[test]
    fn rank_beyond_ten_is_rejected() {
        assert!(cyclo_prefix(11).is_none());
        assert_eq!(cyclo_prefix(2), Some("bicyclo"));
        assert_eq!(cyclo_prefix(10), Some("decacyclo"));
    }
}
