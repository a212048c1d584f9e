//! Functional-group detection and priority normalization.
//!
//! The detector scans the molecule with the structural patterns in
//! [`patterns`], attaches suffix/prefix morphemes and priorities from the
//! morpheme tables, rescales the external inverted priorities onto the
//! 0–100 engine scale, and runs the group-level post-processing passes
//! (ketone acyl-chain expansion, carboxamide suffix override, amine
//! splitting) the naming layers depend on.

use crate::analysis::{Adjacency, RingInfo};
use crate::core::Element;
use crate::core::graph::Molecule;
use crate::morphemes::MorphemeTable;
use std::collections::{BTreeSet, VecDeque};

mod patterns;

pub(crate) use patterns::build_views;

/// Highest value of the external inverted priority scale (1 = most senior).
const INVERTED_SCALE_MAX: u8 = 19;

/// The functional-group classes the detector recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GroupKind {
    /// Carboxylic acid, `C(=O)OH`.
    CarboxylicAcid,
    /// Ester, `C(=O)O-C`.
    Ester,
    /// Amide, `C(=O)N`.
    Amide,
    /// Nitrile, `C#N`.
    Nitrile,
    /// Aldehyde, `C(=O)H`.
    Aldehyde,
    /// Ketone, internal `C(=O)` with two carbon neighbors.
    Ketone,
    /// Alcohol, `C-OH`.
    Alcohol,
    /// Thiol, `C-SH`.
    Thiol,
    /// Amine, acyclic `C-N`.
    Amine,
    /// Ether, `C-O-C`.
    Ether,
    /// Thioether, `C-S-C`.
    Thioether,
    /// Halide, `C-X` with X in {F, Cl, Br, I}.
    Halide,
    /// Nitro, `C-N(=O)O`.
    Nitro,
    /// Nitroso, `C-N=O`.
    Nitroso,
    /// Sulfonyl, `S(=O)(=O)`.
    Sulfonyl,
    /// Sulfinyl, `S(=O)`.
    Sulfinyl,
    /// Phosphanyl, `C-P`.
    Phosphanyl,
    /// Borane, `C-B`.
    Borane,
}

impl GroupKind {
    /// The pattern key this class uses in the morpheme tables.
    pub fn pattern_key(self) -> &'static str {
        match self {
            GroupKind::CarboxylicAcid => "carboxylic_acid",
            GroupKind::Ester => "ester",
            GroupKind::Amide => "amide",
            GroupKind::Nitrile => "nitrile",
            GroupKind::Aldehyde => "aldehyde",
            GroupKind::Ketone => "ketone",
            GroupKind::Alcohol => "alcohol",
            GroupKind::Thiol => "thiol",
            GroupKind::Amine => "amine",
            GroupKind::Ether => "ether",
            GroupKind::Thioether => "thioether",
            GroupKind::Halide => "halide",
            GroupKind::Nitro => "nitro",
            GroupKind::Nitroso => "nitroso",
            GroupKind::Sulfonyl => "sulfonyl",
            GroupKind::Sulfinyl => "sulfinyl",
            GroupKind::Phosphanyl => "phosphanyl",
            GroupKind::Borane => "borane",
        }
    }

    /// Whether the class may ever become the principal characteristic
    /// group. A fixed set is permanently ineligible regardless of priority
    /// and is always rendered through substituent prefixes.
    pub fn is_principal_eligible(self) -> bool {
        !matches!(
            self,
            GroupKind::Ether
                | GroupKind::Thioether
                | GroupKind::Halide
                | GroupKind::Nitro
                | GroupKind::Nitroso
                | GroupKind::Phosphanyl
        )
    }
}

/// A detected functional group with its morphemes and engine priority.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionalGroup {
    /// The detected class.
    pub kind: GroupKind,
    /// Participating atom ids, sorted.
    pub atoms: Vec<usize>,
    /// Participating bond ids.
    pub bonds: Vec<usize>,
    /// Priority on the 0–100 engine scale (100 = most senior).
    pub priority: u8,
    /// Suffix morpheme, empty for prefix-only classes.
    pub suffix: String,
    /// Prefix morpheme.
    pub prefix: String,
    /// Set during principal-group selection.
    pub is_principal: bool,
    /// Attachment/characteristic atom ids the suffix locant cites.
    pub locants: Vec<usize>,
    /// The group's heteroatom ids (drive on-ring attachment judgements).
    pub heteroatoms: Vec<usize>,
}

impl FunctionalGroup {
    /// Whether this group can carry the name's suffix: eligible class and a
    /// non-empty suffix morpheme.
    pub fn can_be_principal(&self) -> bool {
        self.kind.is_principal_eligible() && !self.suffix.is_empty()
    }
}

/// Rescales an external inverted priority (1 = highest, up to 19) onto the
/// engine scale (100 = highest). Values above 20 are assumed already
/// normalized and pass through.
pub(crate) fn normalize_priority(raw: u8) -> u8 {
    if raw > 20 {
        return raw.min(100);
    }
    let raw = raw.clamp(1, INVERTED_SCALE_MAX);
    (((INVERTED_SCALE_MAX + 1 - raw) as f64 / INVERTED_SCALE_MAX as f64) * 100.0).round() as u8
}

/// Detects all functional groups in a molecule.
///
/// Runs the structural patterns in seniority order, attaches morphemes and
/// normalized priorities, then applies the group-level post-processing
/// passes. The result is ordered by descending engine priority with ties
/// broken by first atom id, which keeps downstream selection deterministic.
pub fn detect_groups(
    molecule: &Molecule,
    adjacency: &Adjacency,
    ring_info: &RingInfo,
    morphemes: &MorphemeTable,
) -> Vec<FunctionalGroup> {
    let views = build_views(molecule, adjacency, ring_info);
    let matches = patterns::match_all(molecule, &views);

    let mut groups: Vec<FunctionalGroup> = matches
        .into_iter()
        .map(|m| {
            let meta = morphemes.functional_group_meta(m.kind.pattern_key());
            let (priority, suffix, prefix) = match meta {
                Some(meta) => (
                    normalize_priority(meta.priority),
                    meta.suffix.clone(),
                    meta.prefix.clone(),
                ),
                None => (normalize_priority(INVERTED_SCALE_MAX), String::new(), String::new()),
            };
            FunctionalGroup {
                kind: m.kind,
                atoms: m.atoms,
                bonds: m.bonds,
                priority,
                suffix,
                prefix,
                is_principal: false,
                locants: m.characteristic,
                heteroatoms: m.heteroatoms,
            }
        })
        .collect();

    groups = split_amines(groups, adjacency, molecule);
    expand_ketone_acyl_chains(&mut groups, molecule, adjacency, ring_info);
    override_carboxamide(&mut groups, adjacency, ring_info);

    groups.sort_by(|a, b| {
        b.priority
            .cmp(&a.priority)
            .then_with(|| a.atoms.cmp(&b.atoms))
    });
    groups
}

/// Splits an amine detection that covers several nitrogens into one group
/// per nitrogen.
fn split_amines(
    groups: Vec<FunctionalGroup>,
    adjacency: &Adjacency,
    molecule: &Molecule,
) -> Vec<FunctionalGroup> {
    let mut result = Vec::with_capacity(groups.len());
    for group in groups {
        if group.kind != GroupKind::Amine {
            result.push(group);
            continue;
        }
        let nitrogens: Vec<usize> = group
            .heteroatoms
            .iter()
            .copied()
            .filter(|&atom_id| molecule.atoms[atom_id].element == Element::N)
            .collect();
        if nitrogens.len() <= 1 {
            result.push(group);
            continue;
        }
        for &nitrogen in &nitrogens {
            let carbons: Vec<usize> = adjacency[nitrogen]
                .iter()
                .map(|&(neighbor, _)| neighbor)
                .filter(|&neighbor| molecule.atoms[neighbor].element == Element::C)
                .collect();
            let mut atoms = carbons.clone();
            atoms.push(nitrogen);
            atoms.sort_unstable();
            result.push(FunctionalGroup {
                kind: GroupKind::Amine,
                atoms,
                bonds: Vec::new(),
                priority: group.priority,
                suffix: group.suffix.clone(),
                prefix: group.prefix.clone(),
                is_principal: false,
                locants: carbons,
                heteroatoms: vec![nitrogen],
            });
        }
    }
    result
}

/// Extends each acyclic ketone's atom list through its shorter-chain
/// neighbor so later chain selection keeps branched acyl groups intact.
///
/// Skipped when the carbonyl carbon is in a ring; the expansion BFS stops
/// at ring atoms.
fn expand_ketone_acyl_chains(
    groups: &mut [FunctionalGroup],
    molecule: &Molecule,
    adjacency: &Adjacency,
    ring_info: &RingInfo,
) {
    for group in groups.iter_mut() {
        if group.kind != GroupKind::Ketone {
            continue;
        }
        let Some(&carbonyl) = group.locants.first() else {
            continue;
        };
        if ring_info.is_atom_in_ring(carbonyl) {
            continue;
        }
        let carbon_neighbors: Vec<usize> = adjacency[carbonyl]
            .iter()
            .map(|&(neighbor, _)| neighbor)
            .filter(|&neighbor| molecule.atoms[neighbor].element == Element::C)
            .collect();
        if carbon_neighbors.len() != 2 {
            continue;
        }

        let reach_a = carbon_reach(carbon_neighbors[0], carbonyl, molecule, adjacency, ring_info);
        let reach_b = carbon_reach(carbon_neighbors[1], carbonyl, molecule, adjacency, ring_info);
        let shorter = if reach_a.len() <= reach_b.len() {
            &reach_a
        } else {
            &reach_b
        };

        let mut atoms: BTreeSet<usize> = group.atoms.iter().copied().collect();
        atoms.extend(shorter.iter().copied());
        group.atoms = atoms.into_iter().collect();
    }
}

/// Carbons reachable from `start` without passing through `blocked`,
/// stopping at ring atoms.
fn carbon_reach(
    start: usize,
    blocked: usize,
    molecule: &Molecule,
    adjacency: &Adjacency,
    ring_info: &RingInfo,
) -> Vec<usize> {
    let mut reached = Vec::new();
    let mut visited = BTreeSet::from([blocked]);
    let mut queue = VecDeque::from([start]);
    while let Some(current) = queue.pop_front() {
        if !visited.insert(current) {
            continue;
        }
        if molecule.atoms[current].element != Element::C {
            continue;
        }
        reached.push(current);
        if ring_info.is_atom_in_ring(current) {
            continue;
        }
        for &(neighbor, _) in &adjacency[current] {
            if !visited.contains(&neighbor) {
                queue.push_back(neighbor);
            }
        }
    }
    reached
}

/// Rewrites an amide suffix to `carboxamide` when the carbonyl carbon is
/// acyclic but bonded to a ring atom; the suffix carbon is then not part of
/// the parent ring skeleton.
fn override_carboxamide(
    groups: &mut [FunctionalGroup],
    adjacency: &Adjacency,
    ring_info: &RingInfo,
) {
    for group in groups.iter_mut() {
        if group.kind != GroupKind::Amide {
            continue;
        }
        let Some(&carbonyl) = group.locants.first() else {
            continue;
        };
        if ring_info.is_atom_in_ring(carbonyl) {
            continue;
        }
        let touches_ring = adjacency[carbonyl]
            .iter()
            .any(|&(neighbor, _)| ring_info.is_atom_in_ring(neighbor));
        if touches_ring {
            group.suffix = "carboxamide".to_owned();
        }
    }
}
