//! The rules of the eight pipeline layers.
//!
//! Each rule is a plain record wired to free functions; the heavier
//! algorithms (principal-group selection, chain-vs-ring arbitration) live
//! here as well, close to the rules that invoke them.

use super::chains::{candidate_chains, chain_multiple_bonds, select_principal_chain};
use super::context::{NamingContext, NomenclatureMethod, ParentStructure};
use super::rules::{Layer, LayerKind, Rule, RuleOutcome};
use super::{assembly, numbering};
use crate::analysis::systems::{RingClass, RingSystem};
use crate::core::Element;
use crate::groups::{FunctionalGroup, GroupKind, detect_groups};
use crate::rings::{NumberingGoals, name_ring_system, retained};
use std::collections::HashSet;
use std::sync::Arc;

/// Builds the full layer stack in pipeline order.
pub(crate) fn build_layers() -> Vec<Layer> {
    vec![
        Layer {
            kind: LayerKind::Atomic,
            rules: vec![Rule {
                id: "atomic.seed",
                name: "seed baseline atomic analysis",
                blue_book: "P-14",
                priority: 100,
                condition: |_| true,
                action: atomic_seed,
            }],
        },
        Layer {
            kind: LayerKind::FunctionalGroups,
            rules: vec![
                Rule {
                    id: "groups.detect",
                    name: "detect functional groups",
                    blue_book: "P-33",
                    priority: 100,
                    condition: |_| true,
                    action: detect_groups_action,
                },
                Rule {
                    id: "groups.principal",
                    name: "select principal characteristic group",
                    blue_book: "P-44.1",
                    priority: 90,
                    condition: |context| !context.functional_groups.is_empty(),
                    action: select_principal_action,
                },
            ],
        },
        Layer {
            kind: LayerKind::NomenclatureMethod,
            rules: vec![
                Rule {
                    id: "method.functional-class",
                    name: "functional-class nomenclature for esters",
                    blue_book: "P-51.2",
                    priority: 80,
                    condition: |context| {
                        context
                            .principal()
                            .is_some_and(|group| group.kind == GroupKind::Ester)
                    },
                    action: functional_class_action,
                },
                Rule {
                    id: "method.substitutive",
                    name: "substitutive nomenclature by default",
                    blue_book: "P-51.1",
                    priority: 10,
                    condition: |context| context.method.is_none(),
                    action: substitutive_action,
                },
            ],
        },
        Layer {
            kind: LayerKind::RingAnalysis,
            rules: vec![Rule {
                id: "rings.collect",
                name: "collect candidate ring systems",
                blue_book: "P-23",
                priority: 100,
                condition: |context| !context.systems.is_empty(),
                action: collect_rings_action,
            }],
        },
        Layer {
            kind: LayerKind::ParentSelection,
            rules: vec![
                Rule {
                    id: "parent.biphenyl",
                    name: "retained biphenyl parent",
                    blue_book: "P-25.3.1.3",
                    priority: 95,
                    condition: |context| {
                        context.parent.is_none()
                            && retained::detect_biphenyl(
                                &context.molecule,
                                &context.ring_info.rings,
                                &context.systems,
                                &context.morphemes,
                            )
                            .is_some()
                    },
                    action: biphenyl_action,
                },
                Rule {
                    id: "parent.arbitrate",
                    name: "arbitrate chain versus ring parent",
                    blue_book: "P-44.1.1",
                    priority: 90,
                    condition: |context| context.parent.is_none(),
                    action: arbitrate_action,
                },
                Rule {
                    id: "parent.ring",
                    name: "select the senior ring system",
                    blue_book: "P-44.2",
                    priority: 80,
                    condition: |context| {
                        context.parent.is_none() && !context.candidate_rings.is_empty()
                    },
                    action: ring_parent_action,
                },
            ],
        },
        Layer {
            kind: LayerKind::ChainAnalysis,
            rules: vec![Rule {
                id: "chain.principal",
                name: "select the principal chain",
                blue_book: "P-44.3",
                priority: 100,
                condition: |context| {
                    context.parent.is_none() && !context.candidate_chains.is_empty()
                },
                action: principal_chain_action,
            }],
        },
        Layer {
            kind: LayerKind::Numbering,
            rules: vec![Rule {
                id: "numbering.locants",
                name: "assign lowest locants",
                blue_book: "P-14.4",
                priority: 100,
                condition: |context| context.parent.is_some(),
                action: numbering_action,
            }],
        },
        Layer {
            kind: LayerKind::NameAssembly,
            rules: vec![Rule {
                id: "assembly.compose",
                name: "assemble the final name",
                blue_book: "P-14.5",
                priority: 100,
                condition: |context| context.parent.is_some(),
                action: assembly_action,
            }],
        },
    ]
}

fn atomic_seed(context: &NamingContext) -> Result<RuleOutcome, String> {
    let description = format!(
        "analyzed {} atoms, {} bonds, {} rings in {} systems",
        context.molecule.atoms.len(),
        context.molecule.bonds.len(),
        context.ring_info.rings.len(),
        context.systems.len(),
    );
    Ok(RuleOutcome::new(context.clone(), description))
}

fn detect_groups_action(context: &NamingContext) -> Result<RuleOutcome, String> {
    let groups = detect_groups(
        &context.molecule,
        &context.adjacency,
        &context.ring_info,
        &context.morphemes,
    );
    let description = format!("detected {} functional groups", groups.len());
    let mut next = context.clone();
    next.functional_groups = Arc::new(groups);
    Ok(RuleOutcome::new(next, description))
}

fn select_principal_action(context: &NamingContext) -> Result<RuleOutcome, String> {
    match select_principal(context) {
        Some(index) => {
            let mut groups = (*context.functional_groups).clone();
            groups[index].is_principal = true;
            let description = format!(
                "principal group: {} (priority {})",
                groups[index].kind.pattern_key(),
                groups[index].priority
            );
            let mut next = context.clone();
            next.functional_groups = Arc::new(groups);
            next.principal_group = Some(index);
            Ok(RuleOutcome::new(next, description))
        }
        None => Ok(RuleOutcome::new(
            context.clone(),
            "no principal-eligible group; naming a bare skeleton",
        )),
    }
}

/// Principal-group selection (P-44.1): filter ineligible classes, apply
/// the sulfur-bridge exclusion, sort by priority, then the diamine and
/// ring-ketone overrides.
fn select_principal(context: &NamingContext) -> Option<usize> {
    let groups = &context.functional_groups;
    let mut eligible: Vec<usize> = (0..groups.len())
        .filter(|&index| groups[index].can_be_principal())
        .collect();

    // Directly bonded sulfinyl+sulfonyl sulfurs form a sulfur-bridge
    // substituent; both groups leave the candidate pool.
    let sulfinyls: Vec<usize> = kind_indices(groups, GroupKind::Sulfinyl);
    let sulfonyls: Vec<usize> = kind_indices(groups, GroupKind::Sulfonyl);
    for &a in &sulfinyls {
        for &b in &sulfonyls {
            let bonded = groups[a].locants.iter().any(|&s1| {
                groups[b]
                    .locants
                    .iter()
                    .any(|&s2| context.molecule.bond_between(s1, s2).is_some())
            });
            if bonded {
                eligible.retain(|&index| index != a && index != b);
            }
        }
    }

    if eligible.is_empty() {
        return None;
    }
    eligible.sort_by(|&a, &b| groups[b].priority.cmp(&groups[a].priority));

    // Diamine override: two or more amine nitrogens outrank a field of
    // only alcohols and amides.
    let amines: Vec<usize> = eligible
        .iter()
        .copied()
        .filter(|&index| groups[index].kind == GroupKind::Amine)
        .collect();
    let amine_nitrogens: usize = amines
        .iter()
        .map(|&index| groups[index].heteroatoms.len())
        .sum();
    if amine_nitrogens >= 2 {
        let competitors_are_weak = eligible
            .iter()
            .filter(|&&index| groups[index].kind != GroupKind::Amine)
            .all(|&index| {
                matches!(groups[index].kind, GroupKind::Alcohol | GroupKind::Amide)
            });
        if competitors_are_weak {
            if let Some(&first_amine) = amines.first() {
                return Some(first_amine);
            }
        }
    }

    // Ring-ketone override: a ring carbonyl wins outright when an ether is
    // also present.
    let has_ether = groups.iter().any(|group| group.kind == GroupKind::Ether);
    if has_ether {
        if let Some(&ring_ketone) = eligible.iter().find(|&&index| {
            groups[index].kind == GroupKind::Ketone
                && groups[index]
                    .locants
                    .iter()
                    .any(|&atom_id| context.ring_info.is_atom_in_ring(atom_id))
        }) {
            return Some(ring_ketone);
        }
    }

    eligible.first().copied()
}

fn kind_indices(groups: &[FunctionalGroup], kind: GroupKind) -> Vec<usize> {
    groups
        .iter()
        .enumerate()
        .filter(|(_, group)| group.kind == kind)
        .map(|(index, _)| index)
        .collect()
}

fn functional_class_action(context: &NamingContext) -> Result<RuleOutcome, String> {
    let mut next = context.clone();
    next.method = Some(NomenclatureMethod::FunctionalClass);
    Ok(RuleOutcome::new(
        next,
        "ester named by functional-class nomenclature",
    ))
}

fn substitutive_action(context: &NamingContext) -> Result<RuleOutcome, String> {
    let mut next = context.clone();
    next.method = Some(NomenclatureMethod::Substitutive);
    Ok(RuleOutcome::new(next, "substitutive nomenclature selected"))
}

fn collect_rings_action(context: &NamingContext) -> Result<RuleOutcome, String> {
    let candidates: Vec<usize> = (0..context.systems.len()).collect();
    let description = format!("collected {} candidate ring systems", candidates.len());
    let mut next = context.clone();
    next.candidate_rings = Arc::new(candidates);
    Ok(RuleOutcome::new(next, description))
}

fn biphenyl_action(context: &NamingContext) -> Result<RuleOutcome, String> {
    let name = retained::detect_biphenyl(
        &context.molecule,
        &context.ring_info.rings,
        &context.systems,
        &context.morphemes,
    )
    .ok_or_else(|| "biphenyl pattern vanished between condition and action".to_owned())?;

    let atoms: Vec<usize> = context
        .systems
        .iter()
        .flat_map(|system| system.atoms.iter().copied())
        .collect();
    let mut next = context.clone();
    next.parent = Some(Arc::new(ParentStructure::Ring {
        atoms,
        system_index: 0,
        name,
    }));
    Ok(RuleOutcome::new(next, "biphenyl retained parent selected"))
}

/// Chain-vs-ring arbitration (P-44.1.1).
fn arbitrate_action(context: &NamingContext) -> Result<RuleOutcome, String> {
    let chains = candidate_chains(&context.molecule, &context.adjacency, &context.ring_info);

    let ring_count = context
        .candidate_rings
        .iter()
        .map(|&index| ring_group_count(context, &context.systems[index]))
        .max()
        .unwrap_or(0);
    let chain_count = chains
        .iter()
        .map(|chain| chain_group_count(context, chain))
        .max()
        .unwrap_or(0);

    let chain_wins = if chain_count != ring_count {
        chain_count > ring_count
    } else {
        tie_break_chain_wins(context, &chains)
    };

    let description = format!(
        "chains carry {chain_count} principal-eligible groups, rings {ring_count}; {} parent",
        if chain_wins { "chain" } else { "ring" }
    );
    let mut next = context.clone();
    next.candidate_chains = Arc::new(chains);
    if chain_wins {
        next.candidate_rings = Arc::new(Vec::new());
    }
    Ok(RuleOutcome::new(next, description))
}

/// Principal-eligible groups contained in or attached to a ring system.
///
/// For alcohols, ketones, aldehydes and amides the judgement follows the
/// characteristic heteroatom, not the carbon; a lactam whose carbonyl and
/// nitrogen both sit in the ring counts as ring-contained.
fn ring_group_count(context: &NamingContext, system: &RingSystem) -> usize {
    context
        .functional_groups
        .iter()
        .filter(|group| group.can_be_principal())
        .filter(|group| match group.kind {
            GroupKind::Alcohol | GroupKind::Ketone | GroupKind::Aldehyde | GroupKind::Amide => {
                group.heteroatoms.iter().any(|&hetero| {
                    system.contains_atom(hetero)
                        || context.adjacency[hetero]
                            .iter()
                            .any(|&(neighbor, _)| system.contains_atom(neighbor))
                })
            }
            _ => group
                .locants
                .iter()
                .any(|&atom_id| system.contains_atom(atom_id)),
        })
        .count()
}

fn chain_group_count(context: &NamingContext, chain: &[usize]) -> usize {
    let chain_set: HashSet<usize> = chain.iter().copied().collect();
    context
        .functional_groups
        .iter()
        .filter(|group| group.can_be_principal())
        .filter(|group| {
            group
                .locants
                .iter()
                .any(|atom_id| chain_set.contains(atom_id))
        })
        .count()
}

/// Equal counts: acids and esters keep their chain; heterocycles beat
/// amines and alcohols; any remaining ring beats a bare chain.
fn tie_break_chain_wins(context: &NamingContext, chains: &[Vec<usize>]) -> bool {
    if context.candidate_rings.is_empty() {
        return true;
    }
    if let Some(principal) = context.principal() {
        if matches!(
            principal.kind,
            GroupKind::CarboxylicAcid | GroupKind::Ester
        ) {
            let on_chain = chains
                .iter()
                .any(|chain| chain_group_count(context, chain) > 0);
            if on_chain {
                return true;
            }
        }
    }
    false
}

fn ring_parent_action(context: &NamingContext) -> Result<RuleOutcome, String> {
    let best_index = context
        .candidate_rings
        .iter()
        .copied()
        .max_by_key(|&index| {
            let system = &context.systems[index];
            (ring_group_count(context, system), system.atoms.len())
        })
        .ok_or_else(|| "no candidate ring system".to_owned())?;
    let system = &context.systems[best_index];

    let goals = numbering_goals(context, system);
    let ring_name = name_ring_system(
        &context.molecule,
        &context.ring_info.rings,
        system,
        &goals,
        &context.morphemes,
    );

    let description = format!("ring parent: {}", ring_name.base);
    let parent = if system.class == RingClass::Bridged {
        ParentStructure::Polycyclic {
            atoms: system.atoms.clone(),
            system_index: best_index,
            name: ring_name,
        }
    } else {
        ParentStructure::Ring {
            atoms: system.atoms.clone(),
            system_index: best_index,
            name: ring_name,
        }
    };
    let mut next = context.clone();
    next.parent = Some(Arc::new(parent));
    Ok(RuleOutcome::new(next, description))
}

/// Principal and substituent positions fed to the von Baeyer optimizer.
fn numbering_goals(context: &NamingContext, system: &RingSystem) -> NumberingGoals {
    let principal_atoms: Vec<usize> = context
        .principal()
        .into_iter()
        .flat_map(|principal| principal.locants.iter().copied())
        .filter(|&atom_id| system.contains_atom(atom_id))
        .collect();
    let substituent_atoms: Vec<usize> = system
        .atoms
        .iter()
        .copied()
        .filter(|&atom_id| {
            context.adjacency[atom_id].iter().any(|&(neighbor, _)| {
                !system.contains_atom(neighbor)
                    && context.molecule.atoms[neighbor].element != Element::H
            })
        })
        .collect();
    NumberingGoals {
        principal_atoms,
        substituent_atoms,
    }
}

fn principal_chain_action(context: &NamingContext) -> Result<RuleOutcome, String> {
    let chain = select_principal_chain(
        &context.candidate_chains,
        &context.molecule,
        context.principal(),
        &context.functional_groups,
    )
    .ok_or_else(|| "no candidate chains to choose from".to_owned())?;

    let multiple_bonds = chain_multiple_bonds(&chain, &context.molecule);
    let description = format!("principal chain of {} atoms", chain.len());
    let mut next = context.clone();
    next.parent = Some(Arc::new(ParentStructure::Chain {
        atoms: chain,
        multiple_bonds,
    }));
    Ok(RuleOutcome::new(next, description))
}

fn numbering_action(context: &NamingContext) -> Result<RuleOutcome, String> {
    let (locant_map, substituents) = numbering::assign(context);
    let description = format!(
        "assigned {} locants, {} substituents",
        locant_map.len(),
        substituents.len()
    );
    let mut next = context.clone();
    next.locant_map = Arc::new(locant_map);
    next.substituents = Arc::new(substituents);
    Ok(RuleOutcome::new(next, description))
}

fn assembly_action(context: &NamingContext) -> Result<RuleOutcome, String> {
    let name = assembly::assemble(context)?;
    let description = format!("assembled name: {name}");
    let mut next = context.clone();
    next.name = Some(name);
    Ok(RuleOutcome::new(next, description))
}
