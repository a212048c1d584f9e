//! Recursive substituent naming.
//!
//! Substituents are everything hanging off the chosen parent skeleton that
//! the principal suffix does not consume: group-backed prefixes (hydroxy,
//! chloro, nitro, methoxy, methylsulfinyl), ring prefixes (phenyl,
//! pyridin-2-yl), and alkyl branches named recursively with their own
//! internal locants (`2-iodopropan-2-yl`). Nitrogen substituents of a
//! principal amine or amide are cited with the locant `N`.

use super::context::Substituent;
use crate::analysis::rings::Ring;
use crate::analysis::systems::RingSystem;
use crate::analysis::{Adjacency, RingInfo};
use crate::core::graph::Molecule;
use crate::core::{BondType, Element};
use crate::groups::{FunctionalGroup, GroupKind};
use crate::morphemes::{MorphemeTable, MultiplierKind};
use crate::rings::{NumberingGoals, name_ring_system};
use std::collections::{BTreeMap, HashSet};

/// Everything the substituent namer needs to see.
pub(crate) struct SubstituentScope<'a> {
    pub molecule: &'a Molecule,
    pub adjacency: &'a Adjacency,
    pub ring_info: &'a RingInfo,
    pub systems: &'a [RingSystem],
    pub groups: &'a [FunctionalGroup],
    pub morphemes: &'a MorphemeTable,
}

impl<'a> SubstituentScope<'a> {
    fn rings(&self) -> &'a [Ring] {
        &self.ring_info.rings
    }
}

/// Discovers and names every substituent on the parent skeleton.
pub(crate) fn discover(
    scope: &SubstituentScope<'_>,
    parent_atoms: &[usize],
    principal_kind: Option<GroupKind>,
) -> Vec<Substituent> {
    let parent_set: HashSet<usize> = parent_atoms.iter().copied().collect();

    let principal_groups: Vec<&FunctionalGroup> = scope
        .groups
        .iter()
        .filter(|group| Some(group.kind) == principal_kind && group.can_be_principal())
        .collect();
    let mut suffix_atoms: HashSet<usize> = principal_groups
        .iter()
        .flat_map(|group| group.heteroatoms.iter().copied())
        .collect();
    for group in &principal_groups {
        for &atom_id in &group.locants {
            if !parent_set.contains(&atom_id) {
                // Suffixes like carboxamide carry their carbon with them.
                suffix_atoms.insert(atom_id);
            }
        }
    }

    let mut substituents = Vec::new();
    for &parent_atom in parent_atoms {
        for &(neighbor, _) in &scope.adjacency[parent_atom] {
            if parent_set.contains(&neighbor)
                || scope.molecule.atoms[neighbor].element == Element::H
                || suffix_atoms.contains(&neighbor)
            {
                continue;
            }
            if let Some(substituent) = name_branch(scope, parent_atom, neighbor, &parent_set) {
                substituents.push(substituent);
            }
        }
    }

    if matches!(principal_kind, Some(GroupKind::Amine | GroupKind::Amide)) {
        for group in &principal_groups {
            for &nitrogen in &group.heteroatoms {
                if scope.molecule.atoms[nitrogen].element != Element::N {
                    continue;
                }
                for &(neighbor, _) in &scope.adjacency[nitrogen] {
                    if parent_set.contains(&neighbor)
                        || scope.molecule.atoms[neighbor].element == Element::H
                        || group.locants.contains(&neighbor)
                    {
                        continue;
                    }
                    if let Some(mut substituent) =
                        name_branch(scope, nitrogen, neighbor, &parent_set)
                    {
                        substituent.locant_override = Some("N".to_owned());
                        substituents.push(substituent);
                    }
                }
            }
        }
    }

    substituents
}

/// Names a single attachment for callers outside the discovery loop (the
/// alkyl side of a functional-class ester).
pub(crate) fn name_attachment(
    scope: &SubstituentScope<'_>,
    anchor: usize,
    first: usize,
) -> Option<Substituent> {
    name_branch(scope, anchor, first, &HashSet::new())
}

fn halo_prefix(element: Element) -> &'static str {
    match element {
        Element::F => "fluoro",
        Element::Cl => "chloro",
        Element::Br => "bromo",
        Element::I => "iodo",
        _ => "halo",
    }
}

/// Contracted alkoxy forms kept by P-29.3.2.2.
fn alkoxy_contraction(inner: &str) -> Option<&'static str> {
    match inner {
        "methyl" => Some("methoxy"),
        "ethyl" => Some("ethoxy"),
        "propyl" => Some("propoxy"),
        "butyl" => Some("butoxy"),
        "phenyl" => Some("phenoxy"),
        _ => None,
    }
}

/// Names one branch hanging off `anchor` and starting at `first`.
fn name_branch(
    scope: &SubstituentScope<'_>,
    anchor: usize,
    first: usize,
    parent_set: &HashSet<usize>,
) -> Option<Substituent> {
    // Group-backed prefixes are recognized through the group's heteroatoms.
    if let Some(group) = scope
        .groups
        .iter()
        .find(|group| group.heteroatoms.contains(&first))
    {
        if let Some(substituent) = group_prefix(scope, group, anchor, first, parent_set) {
            return Some(substituent);
        }
    }

    // Acyl-style prefixes anchor at the characteristic carbon.
    if let Some(group) = scope.groups.iter().find(|group| {
        group.locants.contains(&first)
            && matches!(
                group.kind,
                GroupKind::CarboxylicAcid
                    | GroupKind::Ester
                    | GroupKind::Amide
                    | GroupKind::Nitrile
            )
    }) {
        if !group.prefix.is_empty() {
            return Some(Substituent {
                anchor,
                name: group.prefix.clone(),
                complex: false,
                locant_override: None,
            });
        }
    }

    // Exocyclic/terminal =CH2 and =CHR become ylidene prefixes.
    if let Some(bond) = scope.molecule.bond_between(anchor, first) {
        if bond.kind == BondType::Double && scope.molecule.atoms[first].element == Element::C {
            return ylidene_substituent(scope, anchor, first);
        }
    }

    if scope.ring_info.is_atom_in_ring(first) {
        return ring_substituent(scope, anchor, first);
    }

    if scope.molecule.atoms[first].element == Element::C {
        return alkyl_substituent(scope, anchor, first);
    }

    None
}

/// Renders a detected non-principal group as a substituent prefix.
fn group_prefix(
    scope: &SubstituentScope<'_>,
    group: &FunctionalGroup,
    anchor: usize,
    first: usize,
    parent_set: &HashSet<usize>,
) -> Option<Substituent> {
    let simple = |name: String| {
        Some(Substituent {
            anchor,
            name,
            complex: false,
            locant_override: None,
        })
    };

    match group.kind {
        GroupKind::Halide => simple(halo_prefix(scope.molecule.atoms[first].element).to_owned()),
        GroupKind::Alcohol => simple("hydroxy".to_owned()),
        GroupKind::Thiol => simple("sulfanyl".to_owned()),
        GroupKind::Nitro => simple("nitro".to_owned()),
        GroupKind::Nitroso => simple("nitroso".to_owned()),
        GroupKind::Phosphanyl => simple("phosphanyl".to_owned()),
        GroupKind::Borane => simple("boranyl".to_owned()),
        GroupKind::Ketone | GroupKind::Aldehyde => simple("oxo".to_owned()),
        GroupKind::Ether | GroupKind::Thioether => {
            let (inner_name, inner_complex) = far_side_name(scope, first, anchor)?;
            if group.kind == GroupKind::Ether {
                if let Some(contracted) = alkoxy_contraction(&inner_name) {
                    return simple(contracted.to_owned());
                }
            }
            let tail = if group.kind == GroupKind::Ether {
                "oxy"
            } else {
                "sulfanyl"
            };
            Some(Substituent {
                anchor,
                name: format!("{inner_name}{tail}"),
                complex: inner_complex,
                locant_override: None,
            })
        }
        GroupKind::Sulfinyl | GroupKind::Sulfonyl => {
            let (inner_name, inner_complex) = far_side_name(scope, first, anchor)?;
            let tail = if group.kind == GroupKind::Sulfinyl {
                "sulfinyl"
            } else {
                "sulfonyl"
            };
            Some(Substituent {
                anchor,
                name: format!("{inner_name}{tail}"),
                complex: inner_complex,
                locant_override: None,
            })
        }
        GroupKind::Amine => {
            let mut inner: Vec<String> = scope.adjacency[first]
                .iter()
                .map(|&(w, _)| w)
                .filter(|&w| {
                    w != anchor
                        && !parent_set.contains(&w)
                        && scope.molecule.atoms[w].element != Element::H
                })
                .filter_map(|w| far_side_name_from(scope, w, first))
                .map(|(name, _)| name)
                .collect();
            if inner.is_empty() {
                return simple("amino".to_owned());
            }
            inner.sort();
            let cited = cite_equal_parts(&inner, scope.morphemes);
            Some(Substituent {
                anchor,
                name: format!("{cited}amino"),
                complex: true,
                locant_override: None,
            })
        }
        GroupKind::Amide => {
            if group.prefix.is_empty() {
                None
            } else {
                simple(group.prefix.clone())
            }
        }
        _ => None,
    }
}

/// Names the branch on the far side of a linking heteroatom (the carbon
/// arm of an ether oxygen or a sulfinyl sulfur).
fn far_side_name(
    scope: &SubstituentScope<'_>,
    link_atom: usize,
    anchor: usize,
) -> Option<(String, bool)> {
    let far = scope.adjacency[link_atom]
        .iter()
        .map(|&(w, _)| w)
        .find(|&w| {
            w != anchor
                && scope.molecule.atoms[w].element == Element::C
                && scope
                    .molecule
                    .bond_between(link_atom, w)
                    .is_some_and(|bond| bond.kind != BondType::Double)
        })?;
    far_side_name_from(scope, far, link_atom)
}

fn far_side_name_from(
    scope: &SubstituentScope<'_>,
    first: usize,
    link_atom: usize,
) -> Option<(String, bool)> {
    // A ring arm makes the composite prefix complex even though the arm's
    // own citation (phenyl) is simple: (phenylsulfonyl)benzene.
    if scope.ring_info.is_atom_in_ring(first) {
        let substituent = ring_substituent(scope, link_atom, first)?;
        return Some((substituent.name, true));
    }
    let substituent = alkyl_substituent(scope, link_atom, first)?;
    Some((substituent.name, substituent.complex))
}

/// Ring substituents: (substituted) phenyl for benzene rings,
/// `⟨name⟩-⟨k⟩-yl` otherwise.
fn ring_substituent(
    scope: &SubstituentScope<'_>,
    anchor: usize,
    first: usize,
) -> Option<Substituent> {
    let system = scope
        .systems
        .iter()
        .find(|system| system.contains_atom(first))?;
    let ring_name = name_ring_system(
        scope.molecule,
        scope.rings(),
        system,
        &NumberingGoals::default(),
        scope.morphemes,
    );
    if ring_name.base != "benzene" {
        let attachment = ring_name.locant_map.get(&first)?.clone();
        let trimmed = ring_name.base.strip_suffix('e').unwrap_or(&ring_name.base);
        return Some(Substituent {
            anchor,
            name: format!("{trimmed}-{attachment}-yl"),
            complex: true,
            locant_override: None,
        });
    }

    // Phenyl numbers from the attachment; the direction with the lower
    // substituent locants (alphabetical-first on ties) wins.
    let ring = &scope.rings()[system.ring_indices[0]];
    let n = ring.atoms.len();
    let start = ring
        .atoms
        .iter()
        .position(|&atom_id| atom_id == first)?;
    let forward: Vec<usize> = (0..n).map(|i| ring.atoms[(start + i) % n]).collect();
    let backward: Vec<usize> = (0..n).map(|i| ring.atoms[(start + n - i) % n]).collect();

    let forward_prefixes = phenyl_ring_prefixes(scope, &forward, anchor);
    let backward_prefixes = phenyl_ring_prefixes(scope, &backward, anchor);
    let prefixes = if orientation_key(&forward_prefixes) <= orientation_key(&backward_prefixes) {
        forward_prefixes
    } else {
        backward_prefixes
    };

    if prefixes.is_empty() {
        return Some(Substituent {
            anchor,
            name: "phenyl".to_owned(),
            complex: false,
            locant_override: None,
        });
    }

    let mut grouped: BTreeMap<String, Vec<usize>> = BTreeMap::new();
    for (locant, name) in prefixes {
        grouped.entry(name).or_default().push(locant);
    }
    let mut cited = Vec::new();
    for (name, mut locants) in grouped {
        locants.sort_unstable();
        let numbers: Vec<String> = locants.iter().map(usize::to_string).collect();
        let multiplier = if locants.len() > 1 {
            scope
                .morphemes
                .multiplier(locants.len(), MultiplierKind::Basic)
                .unwrap_or("")
        } else {
            ""
        };
        cited.push(format!("{}-{}{}", numbers.join(","), multiplier, name));
    }
    Some(Substituent {
        anchor,
        name: format!("{}phenyl", cited.join("-")),
        complex: true,
        locant_override: None,
    })
}

/// Simple prefixes on an oriented benzene substituent, position 1 at the
/// attachment. Branches the namer cannot cite simply are skipped.
fn phenyl_ring_prefixes(
    scope: &SubstituentScope<'_>,
    oriented: &[usize],
    anchor: usize,
) -> Vec<(usize, String)> {
    let ring_set: HashSet<usize> = oriented.iter().copied().collect();
    let mut prefixes = Vec::new();
    for (index, &ring_atom) in oriented.iter().enumerate() {
        for &(w, _) in &scope.adjacency[ring_atom] {
            if w == anchor
                || ring_set.contains(&w)
                || scope.molecule.atoms[w].element == Element::H
            {
                continue;
            }
            let element = scope.molecule.atoms[w].element;
            let nested = if let Some(group) = scope
                .groups
                .iter()
                .find(|group| group.heteroatoms.contains(&w))
            {
                group_prefix(scope, group, ring_atom, w, &HashSet::new())
            } else if element.is_halogen() {
                Some(Substituent {
                    anchor: ring_atom,
                    name: halo_prefix(element).to_owned(),
                    complex: false,
                    locant_override: None,
                })
            } else if element == Element::C && !scope.ring_info.is_atom_in_ring(w) {
                alkyl_substituent(scope, ring_atom, w)
            } else {
                None
            };
            if let Some(nested) = nested {
                if !nested.complex {
                    prefixes.push((index + 1, nested.name));
                }
            }
        }
    }
    prefixes
}

/// Orientation preference: sorted locant set first, then the names cited
/// at those locants.
fn orientation_key(prefixes: &[(usize, String)]) -> (Vec<usize>, Vec<String>) {
    let mut sorted = prefixes.to_vec();
    sorted.sort();
    (
        sorted.iter().map(|&(locant, _)| locant).collect(),
        sorted.iter().map(|(_, name)| name.clone()).collect(),
    )
}

/// `methylidene` / `ethylidene` prefixes for double-bonded carbon branches.
fn ylidene_substituent(
    scope: &SubstituentScope<'_>,
    anchor: usize,
    first: usize,
) -> Option<Substituent> {
    let subtree = collect_subtree(scope, first, anchor);
    let carbons = subtree
        .iter()
        .filter(|&&atom_id| scope.molecule.atoms[atom_id].element == Element::C)
        .count();
    if carbons != subtree.len() {
        return None;
    }
    let stem = scope.morphemes.stem_or_generic(carbons);
    Some(Substituent {
        anchor,
        name: format!("{stem}ylidene"),
        complex: false,
        locant_override: None,
    })
}

/// All atoms reachable from `first` without crossing `anchor`.
fn collect_subtree(scope: &SubstituentScope<'_>, first: usize, anchor: usize) -> Vec<usize> {
    let mut visited = HashSet::from([anchor]);
    let mut stack = vec![first];
    let mut subtree = Vec::new();
    while let Some(current) = stack.pop() {
        if !visited.insert(current) {
            continue;
        }
        if scope.molecule.atoms[current].element == Element::H {
            continue;
        }
        subtree.push(current);
        for &(next, _) in &scope.adjacency[current] {
            if !visited.contains(&next) {
                stack.push(next);
            }
        }
    }
    subtree
}

/// Names a saturated carbon branch, recursing one level into its own
/// substituents.
fn alkyl_substituent(
    scope: &SubstituentScope<'_>,
    anchor: usize,
    first: usize,
) -> Option<Substituent> {
    let subtree = collect_subtree(scope, first, anchor);
    let subtree_set: HashSet<usize> = subtree.iter().copied().collect();
    // Ring atoms never join the branch chain; rings hanging off the branch
    // are cited as nested ring prefixes below.
    let carbons: HashSet<usize> = subtree
        .iter()
        .copied()
        .filter(|&atom_id| {
            scope.molecule.atoms[atom_id].element == Element::C
                && !scope.ring_info.is_atom_in_ring(atom_id)
        })
        .collect();
    if !carbons.contains(&first) {
        return None;
    }

    // Longest carbon chain through the attachment atom, oriented so the
    // attachment gets the lowest locant.
    let chain = best_substituent_chain(scope, &carbons, first)?;
    let attachment = chain
        .iter()
        .position(|&atom_id| atom_id == first)
        .expect("chain contains the attachment atom")
        + 1;
    let chain_set: HashSet<usize> = chain.iter().copied().collect();

    // Internal prefixes: halogens and nested branches on the chain.
    // Branches the namer cannot express are skipped rather than miscited.
    let mut prefixes: BTreeMap<String, Vec<usize>> = BTreeMap::new();
    for (index, &chain_atom) in chain.iter().enumerate() {
        for &(w, _) in &scope.adjacency[chain_atom] {
            if w == anchor
                || chain_set.contains(&w)
                || !subtree_set.contains(&w)
                || scope.molecule.atoms[w].element == Element::H
            {
                continue;
            }
            let element = scope.molecule.atoms[w].element;
            let nested = if let Some(group) = scope
                .groups
                .iter()
                .find(|group| group.heteroatoms.contains(&w))
            {
                group_prefix(scope, group, chain_atom, w, &HashSet::new())
            } else if element.is_halogen() {
                Some(Substituent {
                    anchor: chain_atom,
                    name: halo_prefix(element).to_owned(),
                    complex: false,
                    locant_override: None,
                })
            } else if scope.ring_info.is_atom_in_ring(w) {
                ring_substituent(scope, chain_atom, w)
            } else if element == Element::C {
                alkyl_substituent(scope, chain_atom, w)
            } else {
                None
            };
            if let Some(nested) = nested {
                if !nested.complex {
                    prefixes.entry(nested.name).or_default().push(index + 1);
                }
            }
        }
    }

    let stem = scope.morphemes.stem_or_generic(chain.len());
    if prefixes.is_empty() && attachment == 1 && chain.len() == carbons.len() {
        return Some(Substituent {
            anchor,
            name: format!("{stem}yl"),
            complex: false,
            locant_override: None,
        });
    }

    let mut cited: Vec<String> = Vec::new();
    for (name, locants) in &prefixes {
        let mut locants = locants.clone();
        locants.sort_unstable();
        let numbers: Vec<String> = locants.iter().map(usize::to_string).collect();
        let multiplier = if locants.len() > 1 {
            scope
                .morphemes
                .multiplier(locants.len(), MultiplierKind::Basic)
                .unwrap_or("")
        } else {
            ""
        };
        cited.push(format!("{}-{}{}", numbers.join(","), multiplier, name));
    }
    let prefix_part = cited.join("-");

    let name = if attachment == 1 {
        format!("{prefix_part}{stem}yl")
    } else {
        format!("{prefix_part}{stem}an-{attachment}-yl")
    };
    Some(Substituent {
        anchor,
        name,
        complex: true,
        locant_override: None,
    })
}

/// The longest chain through the attachment atom, oriented for the lowest
/// attachment locant.
fn best_substituent_chain(
    scope: &SubstituentScope<'_>,
    carbons: &HashSet<usize>,
    first: usize,
) -> Option<Vec<usize>> {
    let mut best: Option<(usize, usize, Vec<usize>)> = None;
    let mut consider = |chain: Vec<usize>| {
        let Some(position) = chain.iter().position(|&atom_id| atom_id == first) else {
            return;
        };
        let attachment = (position + 1).min(chain.len() - position);
        let oriented = if position + 1 <= chain.len() - position {
            chain
        } else {
            chain.into_iter().rev().collect()
        };
        let key = (oriented.len(), usize::MAX - attachment);
        if best
            .as_ref()
            .is_none_or(|(len, att, _)| (key.0, key.1) > (*len, *att))
        {
            best = Some((key.0, key.1, oriented));
        }
    };

    // Enumerate simple paths within the branch carbons.
    let mut stack: Vec<Vec<usize>> = carbons.iter().map(|&atom_id| vec![atom_id]).collect();
    while let Some(path) = stack.pop() {
        let last = *path.last().expect("paths are non-empty");
        consider(path.clone());
        for &(next, _) in &scope.adjacency[last] {
            if carbons.contains(&next) && !path.contains(&next) {
                let mut extended = path.clone();
                extended.push(next);
                stack.push(extended);
            }
        }
    }
    best.map(|(_, _, chain)| chain)
}

/// Cites a sorted list of equal-rank inner parts with a basic multiplier
/// (`dimethyl` for ["methyl", "methyl"]).
fn cite_equal_parts(parts: &[String], morphemes: &MorphemeTable) -> String {
    let mut counts: BTreeMap<&String, usize> = BTreeMap::new();
    for part in parts {
        *counts.entry(part).or_insert(0) += 1;
    }
    counts
        .iter()
        .map(|(name, &count)| {
            if count > 1 {
                format!(
                    "{}{}",
                    morphemes
                        .multiplier(count, MultiplierKind::Basic)
                        .unwrap_or(""),
                    name
                )
            } else {
                (*name).clone()
            }
        })
        .collect::<Vec<_>>()
        .join("")
}
