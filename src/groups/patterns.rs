//! Structural patterns for functional-group detection.
//!
//! Each pattern is a tiny labeled subgraph: nodes carry predicate functions
//! over an annotated atom view, edges carry bond-order predicates. A
//! backtracking matcher enumerates every embedding; seniority order plus a
//! claimed-core set keeps a carboxylic acid from also surfacing as an
//! alcohol and a ketone.

use super::GroupKind;
use crate::analysis::{Adjacency, RingInfo};
use crate::core::graph::Molecule;
use crate::core::{BondType, Element};
use std::collections::{BTreeSet, HashMap};
use std::sync::LazyLock;

/// An atom with the annotations pattern predicates test.
#[derive(Debug, Clone)]
pub(crate) struct AtomView {
    /// The atom id.
    pub id: usize,
    /// The chemical element.
    pub element: Element,
    /// The formal charge.
    pub charge: i8,
    /// Heavy-atom (non-hydrogen) neighbor count.
    pub degree: u8,
    /// Total hydrogens: implicit count plus explicit H neighbors.
    pub hydrogens: u8,
    /// Whether the atom is in an SSSR ring.
    pub in_ring: bool,
    /// Whether the atom carries the aromatic flag.
    pub aromatic: bool,
}

/// Builds the annotated views the matcher runs over.
pub(crate) fn build_views(
    molecule: &Molecule,
    adjacency: &Adjacency,
    ring_info: &RingInfo,
) -> Vec<AtomView> {
    molecule
        .atoms
        .iter()
        .map(|atom| {
            let mut degree = 0u8;
            let mut explicit_h = 0u8;
            for &(neighbor, _) in &adjacency[atom.id] {
                if molecule.atoms[neighbor].element == Element::H {
                    explicit_h += 1;
                } else {
                    degree += 1;
                }
            }
            AtomView {
                id: atom.id,
                element: atom.element,
                charge: atom.charge,
                degree,
                hydrogens: atom.hydrogens + explicit_h,
                in_ring: ring_info.is_atom_in_ring(atom.id),
                aromatic: atom.aromatic,
            }
        })
        .collect()
}

/// A node in a group query pattern.
#[derive(Clone)]
pub(crate) struct QueryNode {
    /// Label used to reference this node in edges and role lists.
    pub label: &'static str,
    /// Predicate the candidate atom must satisfy.
    pub predicate: fn(&AtomView) -> bool,
}

/// An edge in a group query pattern.
#[derive(Clone)]
pub(crate) struct QueryEdge {
    /// Labels of the two connected nodes.
    pub labels: (&'static str, &'static str),
    /// Predicate the connecting bond order must satisfy.
    pub predicate: fn(BondType) -> bool,
}

/// A complete functional-group pattern.
#[derive(Clone)]
pub(crate) struct GroupPattern {
    /// The functional-group class this pattern detects.
    pub kind: GroupKind,
    /// Pattern nodes.
    pub nodes: Vec<QueryNode>,
    /// Pattern edges.
    pub edges: Vec<QueryEdge>,
    /// Labels whose atoms form the group core. Core atoms are claimed on
    /// acceptance so junior patterns cannot reuse them.
    pub core: &'static [&'static str],
    /// Labels of the atoms the suffix or prefix locant cites.
    pub characteristic: &'static [&'static str],
    /// Labels of the group's heteroatoms (drive on-ring attachment tests).
    pub heteroatoms: &'static [&'static str],
}

/// A raw pattern embedding found by the matcher.
pub(crate) struct PatternMatch {
    /// The detected class.
    pub kind: GroupKind,
    /// All matched atom ids, sorted.
    pub atoms: Vec<usize>,
    /// Bond ids with both endpoints among the matched atoms.
    pub bonds: Vec<usize>,
    /// Atom ids for the characteristic labels.
    pub characteristic: Vec<usize>,
    /// Atom ids for the heteroatom labels.
    pub heteroatoms: Vec<usize>,
}

fn single(kind: BondType) -> bool {
    kind == BondType::Single
}

fn double(kind: BondType) -> bool {
    kind == BondType::Double
}

fn triple(kind: BondType) -> bool {
    kind == BondType::Triple
}

fn single_or_aromatic(kind: BondType) -> bool {
    matches!(kind, BondType::Single | BondType::Aromatic)
}

fn carbon(view: &AtomView) -> bool {
    view.element == Element::C
}

fn carbonyl_oxygen(view: &AtomView) -> bool {
    view.element == Element::O && view.degree == 1 && view.hydrogens == 0
}

fn hydroxyl_oxygen(view: &AtomView) -> bool {
    view.element == Element::O && view.degree == 1 && view.hydrogens >= 1
}

fn bridging_oxygen(view: &AtomView) -> bool {
    view.element == Element::O && view.degree == 2 && view.hydrogens == 0
}

fn thiol_sulfur(view: &AtomView) -> bool {
    view.element == Element::S && view.degree == 1 && view.hydrogens >= 1
}

fn bridging_sulfur(view: &AtomView) -> bool {
    view.element == Element::S && view.degree == 2 && view.hydrogens == 0
}

fn sulfoxide_sulfur(view: &AtomView) -> bool {
    view.element == Element::S && view.degree == 3
}

fn sulfone_sulfur(view: &AtomView) -> bool {
    view.element == Element::S && view.degree == 4
}

fn amine_nitrogen(view: &AtomView) -> bool {
    view.element == Element::N && view.charge == 0 && !view.in_ring && !view.aromatic
}

fn any_nitrogen(view: &AtomView) -> bool {
    view.element == Element::N
}

fn nitrile_nitrogen(view: &AtomView) -> bool {
    view.element == Element::N && view.degree == 1 && view.hydrogens == 0
}

fn terminal_oxygen(view: &AtomView) -> bool {
    view.element == Element::O && view.degree == 1
}

fn aldehyde_carbon(view: &AtomView) -> bool {
    view.element == Element::C && view.hydrogens >= 1
}

fn ketone_carbon(view: &AtomView) -> bool {
    view.element == Element::C && view.hydrogens == 0
}

fn halogen(view: &AtomView) -> bool {
    view.element.is_halogen() && view.degree == 1
}

fn phosphorus(view: &AtomView) -> bool {
    view.element == Element::P
}

fn boron(view: &AtomView) -> bool {
    view.element == Element::B
}

/// The detection patterns, ordered by seniority.
///
/// Order matters: senior patterns run first and claim their core atoms, so
/// the acid pattern consumes the hydroxyl its junior alcohol pattern would
/// otherwise match.
pub(crate) static PATTERNS: LazyLock<Vec<GroupPattern>> = LazyLock::new(|| {
    vec![
        GroupPattern {
            kind: GroupKind::CarboxylicAcid,
            nodes: vec![
                QueryNode { label: "c", predicate: carbon },
                QueryNode { label: "o1", predicate: carbonyl_oxygen },
                QueryNode { label: "o2", predicate: hydroxyl_oxygen },
            ],
            edges: vec![
                QueryEdge { labels: ("c", "o1"), predicate: double },
                QueryEdge { labels: ("c", "o2"), predicate: single },
            ],
            core: &["c", "o1", "o2"],
            characteristic: &["c"],
            heteroatoms: &["o1", "o2"],
        },
        GroupPattern {
            kind: GroupKind::Ester,
            nodes: vec![
                QueryNode { label: "c", predicate: carbon },
                QueryNode { label: "o1", predicate: carbonyl_oxygen },
                QueryNode { label: "o2", predicate: bridging_oxygen },
                QueryNode { label: "c2", predicate: carbon },
            ],
            edges: vec![
                QueryEdge { labels: ("c", "o1"), predicate: double },
                QueryEdge { labels: ("c", "o2"), predicate: single },
                QueryEdge { labels: ("o2", "c2"), predicate: single },
            ],
            core: &["c", "o1", "o2"],
            characteristic: &["c"],
            heteroatoms: &["o1", "o2"],
        },
        GroupPattern {
            kind: GroupKind::Amide,
            nodes: vec![
                QueryNode { label: "c", predicate: carbon },
                QueryNode { label: "o", predicate: carbonyl_oxygen },
                QueryNode { label: "n", predicate: any_nitrogen },
            ],
            edges: vec![
                QueryEdge { labels: ("c", "o"), predicate: double },
                QueryEdge { labels: ("c", "n"), predicate: single },
            ],
            core: &["c", "o", "n"],
            characteristic: &["c"],
            heteroatoms: &["o", "n"],
        },
        GroupPattern {
            kind: GroupKind::Nitrile,
            nodes: vec![
                QueryNode { label: "c", predicate: carbon },
                QueryNode { label: "n", predicate: nitrile_nitrogen },
            ],
            edges: vec![QueryEdge { labels: ("c", "n"), predicate: triple }],
            core: &["c", "n"],
            characteristic: &["c"],
            heteroatoms: &["n"],
        },
        GroupPattern {
            kind: GroupKind::Aldehyde,
            nodes: vec![
                QueryNode { label: "c", predicate: aldehyde_carbon },
                QueryNode { label: "o", predicate: carbonyl_oxygen },
            ],
            edges: vec![QueryEdge { labels: ("c", "o"), predicate: double }],
            core: &["c", "o"],
            characteristic: &["c"],
            heteroatoms: &["o"],
        },
        GroupPattern {
            kind: GroupKind::Ketone,
            nodes: vec![
                QueryNode { label: "c", predicate: ketone_carbon },
                QueryNode { label: "o", predicate: carbonyl_oxygen },
                QueryNode { label: "c1", predicate: carbon },
                QueryNode { label: "c2", predicate: carbon },
            ],
            edges: vec![
                QueryEdge { labels: ("c", "o"), predicate: double },
                QueryEdge { labels: ("c", "c1"), predicate: single_or_aromatic },
                QueryEdge { labels: ("c", "c2"), predicate: single_or_aromatic },
            ],
            core: &["c", "o"],
            characteristic: &["c"],
            heteroatoms: &["o"],
        },
        GroupPattern {
            kind: GroupKind::Alcohol,
            nodes: vec![
                QueryNode { label: "c", predicate: carbon },
                QueryNode { label: "o", predicate: hydroxyl_oxygen },
            ],
            edges: vec![QueryEdge { labels: ("c", "o"), predicate: single }],
            core: &["o"],
            characteristic: &["c"],
            heteroatoms: &["o"],
        },
        GroupPattern {
            kind: GroupKind::Thiol,
            nodes: vec![
                QueryNode { label: "c", predicate: carbon },
                QueryNode { label: "s", predicate: thiol_sulfur },
            ],
            edges: vec![QueryEdge { labels: ("c", "s"), predicate: single }],
            core: &["s"],
            characteristic: &["c"],
            heteroatoms: &["s"],
        },
        GroupPattern {
            kind: GroupKind::Sulfonyl,
            nodes: vec![
                QueryNode { label: "s", predicate: sulfone_sulfur },
                QueryNode { label: "o1", predicate: terminal_oxygen },
                QueryNode { label: "o2", predicate: terminal_oxygen },
            ],
            edges: vec![
                QueryEdge { labels: ("s", "o1"), predicate: double },
                QueryEdge { labels: ("s", "o2"), predicate: double },
            ],
            core: &["s", "o1", "o2"],
            characteristic: &["s"],
            heteroatoms: &["s", "o1", "o2"],
        },
        GroupPattern {
            kind: GroupKind::Sulfinyl,
            nodes: vec![
                QueryNode { label: "s", predicate: sulfoxide_sulfur },
                QueryNode { label: "o", predicate: terminal_oxygen },
            ],
            edges: vec![QueryEdge { labels: ("s", "o"), predicate: double }],
            core: &["s", "o"],
            characteristic: &["s"],
            heteroatoms: &["s", "o"],
        },
        GroupPattern {
            kind: GroupKind::Nitro,
            nodes: vec![
                QueryNode { label: "c", predicate: carbon },
                QueryNode { label: "n", predicate: any_nitrogen },
                QueryNode { label: "o1", predicate: terminal_oxygen },
                QueryNode { label: "o2", predicate: terminal_oxygen },
            ],
            edges: vec![
                QueryEdge { labels: ("c", "n"), predicate: single_or_aromatic },
                QueryEdge { labels: ("n", "o1"), predicate: double },
                QueryEdge {
                    labels: ("n", "o2"),
                    predicate: |kind| matches!(kind, BondType::Single | BondType::Double),
                },
            ],
            core: &["n", "o1", "o2"],
            characteristic: &["c"],
            heteroatoms: &["n", "o1", "o2"],
        },
        GroupPattern {
            kind: GroupKind::Nitroso,
            nodes: vec![
                QueryNode { label: "c", predicate: carbon },
                QueryNode { label: "n", predicate: any_nitrogen },
                QueryNode { label: "o", predicate: terminal_oxygen },
            ],
            edges: vec![
                QueryEdge { labels: ("c", "n"), predicate: single },
                QueryEdge { labels: ("n", "o"), predicate: double },
            ],
            core: &["n", "o"],
            characteristic: &["c"],
            heteroatoms: &["n", "o"],
        },
        GroupPattern {
            kind: GroupKind::Amine,
            nodes: vec![
                QueryNode { label: "c", predicate: carbon },
                QueryNode { label: "n", predicate: amine_nitrogen },
            ],
            edges: vec![QueryEdge { labels: ("c", "n"), predicate: single }],
            core: &["n"],
            characteristic: &["c"],
            heteroatoms: &["n"],
        },
        GroupPattern {
            kind: GroupKind::Ether,
            nodes: vec![
                QueryNode { label: "c1", predicate: carbon },
                QueryNode { label: "o", predicate: bridging_oxygen },
                QueryNode { label: "c2", predicate: carbon },
            ],
            edges: vec![
                QueryEdge { labels: ("c1", "o"), predicate: single },
                QueryEdge { labels: ("o", "c2"), predicate: single },
            ],
            core: &["o"],
            characteristic: &["o"],
            heteroatoms: &["o"],
        },
        GroupPattern {
            kind: GroupKind::Thioether,
            nodes: vec![
                QueryNode { label: "c1", predicate: carbon },
                QueryNode { label: "s", predicate: bridging_sulfur },
                QueryNode { label: "c2", predicate: carbon },
            ],
            edges: vec![
                QueryEdge { labels: ("c1", "s"), predicate: single },
                QueryEdge { labels: ("s", "c2"), predicate: single },
            ],
            core: &["s"],
            characteristic: &["s"],
            heteroatoms: &["s"],
        },
        GroupPattern {
            kind: GroupKind::Halide,
            nodes: vec![
                QueryNode { label: "c", predicate: carbon },
                QueryNode { label: "x", predicate: halogen },
            ],
            edges: vec![QueryEdge { labels: ("c", "x"), predicate: single }],
            core: &["x"],
            characteristic: &["c"],
            heteroatoms: &["x"],
        },
        GroupPattern {
            kind: GroupKind::Phosphanyl,
            nodes: vec![
                QueryNode { label: "c", predicate: carbon },
                QueryNode { label: "p", predicate: phosphorus },
            ],
            edges: vec![QueryEdge { labels: ("c", "p"), predicate: single }],
            core: &["p"],
            characteristic: &["c"],
            heteroatoms: &["p"],
        },
        GroupPattern {
            kind: GroupKind::Borane,
            nodes: vec![
                QueryNode { label: "c", predicate: carbon },
                QueryNode { label: "b", predicate: boron },
            ],
            edges: vec![QueryEdge { labels: ("c", "b"), predicate: single }],
            core: &["b"],
            characteristic: &["c"],
            heteroatoms: &["b"],
        },
    ]
});

/// Runs every pattern over the molecule, in seniority order, claiming core
/// atoms so junior patterns skip atoms a senior group already owns.
pub(crate) fn match_all(molecule: &Molecule, views: &[AtomView]) -> Vec<PatternMatch> {
    let mut claimed = vec![false; views.len()];
    let mut results = Vec::new();

    for pattern in PATTERNS.iter() {
        let embeddings = enumerate_embeddings(pattern, molecule, views);
        let mut seen_cores: BTreeSet<Vec<usize>> = BTreeSet::new();

        for assignment in embeddings {
            let mut core_atoms: Vec<usize> = pattern
                .core
                .iter()
                .map(|label| assignment[label])
                .collect();
            core_atoms.sort_unstable();
            if core_atoms.iter().any(|&atom_id| claimed[atom_id]) {
                continue;
            }
            if !seen_cores.insert(core_atoms.clone()) {
                continue;
            }
            for &atom_id in &core_atoms {
                claimed[atom_id] = true;
            }

            let mut atoms: Vec<usize> = assignment.values().copied().collect();
            atoms.sort_unstable();
            atoms.dedup();
            let atom_set: BTreeSet<usize> = atoms.iter().copied().collect();
            let bonds: Vec<usize> = molecule
                .bonds
                .iter()
                .filter(|bond| {
                    atom_set.contains(&bond.atom_ids.0) && atom_set.contains(&bond.atom_ids.1)
                })
                .map(|bond| bond.id)
                .collect();

            results.push(PatternMatch {
                kind: pattern.kind,
                atoms,
                bonds,
                characteristic: pattern
                    .characteristic
                    .iter()
                    .map(|label| assignment[label])
                    .collect(),
                heteroatoms: pattern
                    .heteroatoms
                    .iter()
                    .map(|label| assignment[label])
                    .collect(),
            });
        }
    }
    results
}

/// Enumerates every embedding of a pattern via backtracking with
/// incremental edge verification.
fn enumerate_embeddings(
    pattern: &GroupPattern,
    molecule: &Molecule,
    views: &[AtomView],
) -> Vec<HashMap<&'static str, usize>> {
    let mut results = Vec::new();
    let mut assignment = HashMap::new();
    assign_next(pattern, molecule, views, &mut assignment, 0, &mut results);
    results
}

fn assign_next(
    pattern: &GroupPattern,
    molecule: &Molecule,
    views: &[AtomView],
    assignment: &mut HashMap<&'static str, usize>,
    node_index: usize,
    results: &mut Vec<HashMap<&'static str, usize>>,
) {
    if node_index == pattern.nodes.len() {
        results.push(assignment.clone());
        return;
    }

    let node = &pattern.nodes[node_index];
    for view in views {
        if assignment.values().any(|&atom_id| atom_id == view.id) {
            continue;
        }
        if !(node.predicate)(view) {
            continue;
        }
        assignment.insert(node.label, view.id);
        if edges_consistent(pattern, molecule, assignment) {
            assign_next(pattern, molecule, views, assignment, node_index + 1, results);
        }
        assignment.remove(node.label);
    }
}

/// Checks every pattern edge whose two endpoints are already assigned.
fn edges_consistent(
    pattern: &GroupPattern,
    molecule: &Molecule,
    assignment: &HashMap<&'static str, usize>,
) -> bool {
    pattern.edges.iter().all(|edge| {
        let (Some(&u), Some(&v)) = (assignment.get(edge.labels.0), assignment.get(edge.labels.1))
        else {
            return true;
        };
        molecule
            .bond_between(u, v)
            .is_some_and(|bond| (edge.predicate)(bond.kind))
    })
}
