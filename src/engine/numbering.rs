//! Locant assignment (P-14.4).
//!
//! Every legal numbering of the chosen parent is generated (two directions
//! for chains, every rotation and direction for freely numberable rings)
//! and the lexicographically minimal locant vector wins, comparing in
//! order: principal-group locants, skeletal unsaturation, the detachable
//! prefix set, and prefixes in alphabetical citation order. Rings whose
//! base name already fixes structural locants (heterocycles, retained
//! fused skeletons, von Baeyer numberings) keep their maps.

use super::context::{NamingContext, ParentStructure, Substituent};
use super::substituent::{SubstituentScope, discover};
use crate::core::BondType;
use std::collections::HashMap;

/// Assigns the final locant map and discovers the substituents it cites.
pub(crate) fn assign(context: &NamingContext) -> (HashMap<usize, String>, Vec<Substituent>) {
    let Some(parent) = context.parent.as_deref() else {
        return (HashMap::new(), Vec::new());
    };
    let scope = SubstituentScope {
        molecule: &context.molecule,
        adjacency: &context.adjacency,
        ring_info: &context.ring_info,
        systems: &context.systems,
        groups: &context.functional_groups,
        morphemes: &context.morphemes,
    };
    let substituents = discover(&scope, parent.atoms(), context.principal().map(|g| g.kind));

    let map = match parent {
        ParentStructure::Chain { atoms, .. } => chain_locants(context, atoms, &substituents),
        ParentStructure::Ring {
            system_index, name, ..
        } => {
            let system = &context.systems[*system_index];
            if ring_is_freely_numberable(&name.base) && system.ring_count() == 1 {
                // Rotations must follow the ring traversal, not the sorted
                // atom list.
                let traversal = &context.ring_info.rings[system.ring_indices[0]].atoms;
                ring_locants(context, traversal, &substituents)
            } else {
                name.locant_map.clone()
            }
        }
        ParentStructure::Polycyclic { name, .. } => name.locant_map.clone(),
    };
    (map, substituents)
}

/// Whether substituent-driven renumbering is allowed: only all-carbon
/// parents without structural locants in the base name.
fn ring_is_freely_numberable(base: &str) -> bool {
    base == "benzene" || (base.starts_with("cyclo") && base.ends_with("ane"))
}

/// Candidate numbering score under P-14.4: lower is better.
fn numbering_score(
    context: &NamingContext,
    ordered: &[usize],
    substituents: &[Substituent],
    cyclic: bool,
) -> Vec<usize> {
    let locant_of = |atom_id: usize| -> Option<usize> {
        ordered
            .iter()
            .position(|&candidate| candidate == atom_id)
            .map(|index| index + 1)
    };

    // 1. Principal characteristic group locants.
    let mut principal_locants: Vec<usize> = Vec::new();
    if let Some(principal) = context.principal() {
        for group in context.functional_groups.iter() {
            if group.kind != principal.kind || !group.can_be_principal() {
                continue;
            }
            principal_locants.extend(group.locants.iter().filter_map(|&atom| locant_of(atom)));
        }
    }
    principal_locants.sort_unstable();

    // 2. Skeletal unsaturation locants.
    let mut unsaturation: Vec<usize> = Vec::new();
    let pairs = ordered.len() - if cyclic { 0 } else { 1 };
    for k in 0..pairs {
        let u = ordered[k];
        let v = ordered[(k + 1) % ordered.len()];
        if let Some(bond) = context.molecule.bond_between(u, v) {
            if matches!(bond.kind, BondType::Double | BondType::Triple) {
                unsaturation.push(k + 1);
            }
        }
    }

    // 3. Detachable prefixes as a set.
    let mut prefix_set: Vec<usize> = substituents
        .iter()
        .filter(|substituent| substituent.locant_override.is_none())
        .filter_map(|substituent| locant_of(substituent.anchor))
        .collect();
    prefix_set.sort_unstable();

    // 4. Prefixes in alphabetical citation order.
    let mut cited: Vec<(String, usize)> = substituents
        .iter()
        .filter(|substituent| substituent.locant_override.is_none())
        .filter_map(|substituent| {
            locant_of(substituent.anchor).map(|locant| {
                (
                    context.morphemes.normalize_citation_token(&substituent.name),
                    locant,
                )
            })
        })
        .collect();
    cited.sort();
    let alphabetical: Vec<usize> = cited.into_iter().map(|(_, locant)| locant).collect();

    let mut score = principal_locants;
    score.extend(unsaturation);
    score.extend(prefix_set);
    score.extend(alphabetical);
    score
}

/// Chain numbering: the better of the two directions.
fn chain_locants(
    context: &NamingContext,
    atoms: &[usize],
    substituents: &[Substituent],
) -> HashMap<usize, String> {
    let forward: Vec<usize> = atoms.to_vec();
    let backward: Vec<usize> = atoms.iter().rev().copied().collect();

    let ordered = if numbering_score(context, &forward, substituents, false)
        <= numbering_score(context, &backward, substituents, false)
    {
        forward
    } else {
        backward
    };
    to_map(&ordered)
}

/// Ring numbering: the best rotation and direction of the ring traversal.
fn ring_locants(
    context: &NamingContext,
    atoms: &[usize],
    substituents: &[Substituent],
) -> HashMap<usize, String> {
    let n = atoms.len();
    let mut best: Option<(Vec<usize>, Vec<usize>)> = None;
    for start in 0..n {
        for forward in [true, false] {
            let ordered: Vec<usize> = (0..n)
                .map(|i| {
                    if forward {
                        atoms[(start + i) % n]
                    } else {
                        atoms[(start + n - i) % n]
                    }
                })
                .collect();
            let score = numbering_score(context, &ordered, substituents, true);
            if best.as_ref().is_none_or(|(current, _)| score < *current) {
                best = Some((score, ordered));
            }
        }
    }
    match best {
        Some((_, ordered)) => to_map(&ordered),
        None => HashMap::new(),
    }
}

fn to_map(ordered: &[usize]) -> HashMap<usize, String> {
    ordered
        .iter()
        .enumerate()
        .map(|(index, &atom_id)| (atom_id, (index + 1).to_string()))
        .collect()
}
