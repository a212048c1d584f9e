//! Final name assembly.
//!
//! Composes, in order: detachable prefixes (alphabetized by normalized
//! citation token, di/tri for simple and bis/tris for complex
//! substituents), the parent skeleton with unsaturation suffixes, and the
//! principal characteristic-group suffix with its locants, or the
//! functional-class two-word form when that method was chosen. Final
//! normalization rewrites the handful of traditional contractions
//! (benzenoic → benzoic) and upgrades `polycyclic_C⟨n⟩` placeholders to
//! retained aromatics when the topology permits.

use super::context::{NamingContext, NomenclatureMethod, ParentStructure, Substituent};
use super::substituent::SubstituentScope;
use crate::core::{BondType, Element};
use crate::groups::{FunctionalGroup, GroupKind};
use crate::morphemes::{MorphemeTable, MultiplierKind};
use crate::rings::monocyclic::unsaturated_stem;
use crate::rings::retained::is_angular;
use std::collections::BTreeMap;

const VOWELS: [char; 5] = ['a', 'e', 'i', 'o', 'u'];

/// Assembles the complete name from the numbered context.
pub(crate) fn assemble(context: &NamingContext) -> Result<String, String> {
    let parent = context
        .parent
        .as_deref()
        .ok_or_else(|| "no parent structure chosen".to_owned())?;

    let mut base = parent_base(context, parent)?;
    let omit_all_locants = parent.atoms().len() == 1;

    // Principal suffix.
    let principal_instances: Vec<&FunctionalGroup> = match context.principal() {
        Some(principal) => context
            .functional_groups
            .iter()
            .filter(|group| group.kind == principal.kind && group.can_be_principal())
            .collect(),
        None => Vec::new(),
    };
    let suffix_count = principal_instances.len();

    if context.method == Some(NomenclatureMethod::FunctionalClass) {
        if let Some(name) = functional_class_name(context, &base) {
            return Ok(normalize(name, context));
        }
    }

    let mut suffix_part = String::new();
    if let Some(principal) = context.principal() {
        let already_encoded = parent.is_ring()
            && base.ends_with("one")
            && matches!(principal.kind, GroupKind::Amide | GroupKind::Ketone);
        if !already_encoded && !principal.suffix.is_empty() {
            let suffix = principal.suffix.clone();
            let vowel_start = suffix.starts_with(VOWELS);
            let needs_locant = matches!(
                principal.kind,
                GroupKind::Ketone | GroupKind::Alcohol | GroupKind::Thiol | GroupKind::Amine
            );

            let mut locants: Vec<String> = principal_instances
                .iter()
                .flat_map(|group| group.locants.iter())
                .filter_map(|atom_id| context.locant_map.get(atom_id).cloned())
                .collect();
            locants.sort_by_key(|locant| locant_sort_key(locant));

            if suffix_count > 1 {
                let multiplier = context
                    .morphemes
                    .multiplier(suffix_count, MultiplierKind::Basic)
                    .unwrap_or("poly");
                let multiplier = elide_multiplier(multiplier, &suffix);
                suffix_part = format!("-{}-{}{}", locants.join(","), multiplier, suffix);
            } else {
                if vowel_start && base.ends_with('e') {
                    base.pop();
                }
                if needs_locant && !omit_all_locants && !locants.is_empty() {
                    suffix_part = format!("-{}-{}", locants[0], suffix);
                } else {
                    suffix_part = suffix;
                }
            }
        }
    }

    // Detachable prefixes.
    let omit_prefix_locants = omit_all_locants
        || (context.substituents.len() == 1
            && suffix_count == 0
            && (parent.is_ring() || parent.atoms().len() == 2));
    let prefix_part = cite_prefixes(
        &context.substituents,
        context,
        &context.morphemes,
        omit_prefix_locants,
    );

    // Bases opening with a locant token (4H-1,3-thiazole) need a hyphen
    // after the prefix block.
    let joiner = if !prefix_part.is_empty() && base.starts_with(|c: char| c.is_ascii_digit()) {
        "-"
    } else {
        ""
    };

    Ok(normalize(
        format!("{prefix_part}{joiner}{base}{suffix_part}"),
        context,
    ))
}

/// The parent skeleton's base name, with chain unsaturation locants.
fn parent_base(context: &NamingContext, parent: &ParentStructure) -> Result<String, String> {
    match parent {
        ParentStructure::Chain { atoms, .. } => {
            let stem = context.morphemes.stem_or_generic(atoms.len());
            let mut enes = Vec::new();
            let mut ynes = Vec::new();
            for window in atoms.windows(2) {
                let Some(bond) = context.molecule.bond_between(window[0], window[1]) else {
                    continue;
                };
                let locant = window
                    .iter()
                    .filter_map(|atom_id| context.locant_map.get(atom_id))
                    .filter_map(|locant| locant.parse::<usize>().ok())
                    .min()
                    .ok_or_else(|| "chain atom missing from locant map".to_owned())?;
                match bond.kind {
                    BondType::Double => enes.push(locant),
                    BondType::Triple => ynes.push(locant),
                    _ => {}
                }
            }
            enes.sort_unstable();
            ynes.sort_unstable();
            Ok(unsaturated_stem(&stem, &enes, &ynes, &context.morphemes))
        }
        ParentStructure::Ring { name, .. } | ParentStructure::Polycyclic { name, .. } => {
            Ok(name.base.clone())
        }
    }
}

/// Sort key ordering locants as N < 1 < 2 < 2a < 3 ...
fn locant_sort_key(locant: &str) -> (u8, usize, u8) {
    if locant == "N" {
        return (0, 0, 0);
    }
    let digits: String = locant.chars().take_while(char::is_ascii_digit).collect();
    let number = digits.parse::<usize>().unwrap_or(usize::MAX);
    let letter = locant
        .chars()
        .find(|c| c.is_ascii_lowercase())
        .map(|c| c as u8 - b'a' + 1)
        .unwrap_or(0);
    (1, number, letter)
}

/// Trims a multiplier's final vowel before a vowel-initial suffix
/// (`tetra` + `ol` → `tetrol`).
fn elide_multiplier<'a>(multiplier: &'a str, suffix: &str) -> &'a str {
    if multiplier.ends_with('a') && suffix.starts_with(VOWELS) {
        &multiplier[..multiplier.len() - 1]
    } else {
        multiplier
    }
}

/// Builds the alphabetized detachable-prefix block.
fn cite_prefixes(
    substituents: &[Substituent],
    context: &NamingContext,
    morphemes: &MorphemeTable,
    omit_locants: bool,
) -> String {
    let mut grouped: BTreeMap<(String, bool), Vec<String>> = BTreeMap::new();
    for substituent in substituents {
        let locant = substituent
            .locant_override
            .clone()
            .or_else(|| context.locant_map.get(&substituent.anchor).cloned())
            .unwrap_or_else(|| "?".to_owned());
        grouped
            .entry((substituent.name.clone(), substituent.complex))
            .or_default()
            .push(locant);
    }

    let mut entries: Vec<((String, bool), Vec<String>)> = grouped.into_iter().collect();
    entries.sort_by_key(|((name, _), _)| morphemes.normalize_citation_token(name));

    let mut parts = Vec::new();
    for ((name, complex), mut locants) in entries {
        locants.sort_by_key(|locant| locant_sort_key(locant));
        let count = locants.len();
        let multiplier = if count > 1 {
            let kind = if complex {
                MultiplierKind::Group
            } else {
                MultiplierKind::Basic
            };
            morphemes.multiplier(count, kind).unwrap_or("")
        } else {
            ""
        };
        let citation = if omit_locants {
            if complex {
                format!("{multiplier}({name})")
            } else {
                format!("{multiplier}{name}")
            }
        } else if complex {
            format!("{}-{}({})", locants.join(","), multiplier, name)
        } else {
            format!("{}-{}{}", locants.join(","), multiplier, name)
        };
        parts.push(citation);
    }
    parts.join("-")
}

/// `⟨alkyl⟩ ⟨acyl⟩oate` functional-class naming for principal esters.
fn functional_class_name(context: &NamingContext, acyl_base: &str) -> Option<String> {
    let principal = context.principal()?;
    if principal.kind != GroupKind::Ester {
        return None;
    }

    let carbonyl = *principal.locants.first()?;
    let bridge_oxygen = principal
        .heteroatoms
        .iter()
        .copied()
        .find(|&atom_id| {
            context.molecule.atoms[atom_id].element == Element::O
                && context
                    .molecule
                    .bond_between(carbonyl, atom_id)
                    .is_some_and(|bond| bond.kind == BondType::Single)
        })?;
    let alkyl_carbon = context.adjacency[bridge_oxygen]
        .iter()
        .map(|&(neighbor, _)| neighbor)
        .find(|&neighbor| {
            neighbor != carbonyl && context.molecule.atoms[neighbor].element == Element::C
        })?;

    let scope = SubstituentScope {
        molecule: &context.molecule,
        adjacency: &context.adjacency,
        ring_info: &context.ring_info,
        systems: &context.systems,
        groups: &context.functional_groups,
        morphemes: &context.morphemes,
    };
    let alkyl = super::substituent::name_attachment(&scope, bridge_oxygen, alkyl_carbon)?;

    let mut base = acyl_base.to_owned();
    if base.ends_with('e') {
        base.pop();
    }
    Some(format!("{} {}oate", alkyl.name, base))
}

/// Traditional contractions and placeholder rewriting.
fn normalize(name: String, context: &NamingContext) -> String {
    let mut name = name.replace("benzenoic", "benzoic");
    if name.contains("polycyclic_C") {
        if let Some(rewritten) = rewrite_placeholder(&name, context) {
            name = rewritten;
        }
    }
    name
}

/// Rewrites a `polycyclic_C⟨n⟩` placeholder to a retained aromatic when
/// the ring topology is an unambiguous naphthalene/anthracene/phenanthrene
/// skeleton that earlier classification missed.
fn rewrite_placeholder(name: &str, context: &NamingContext) -> Option<String> {
    let system_index = match context.parent.as_deref() {
        Some(
            ParentStructure::Ring { system_index, .. }
            | ParentStructure::Polycyclic { system_index, .. },
        ) => *system_index,
        _ => return None,
    };
    let system = context.systems.get(system_index)?;
    if !system.aromatic {
        return None;
    }
    let sizes = system.sorted_ring_sizes(&context.ring_info.rings);
    let replacement = match sizes.as_slice() {
        [6, 6] => "naphthalene",
        [6, 6, 6] => {
            if is_angular(&context.molecule, &context.ring_info.rings, system) {
                "phenanthrene"
            } else {
                "anthracene"
            }
        }
        _ => return None,
    };
    let token = format!("polycyclic_C{}", system.atoms.len());
    Some(name.replace(&token, replacement))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locant_sort_puts_n_first() {
        let mut locants = vec!["3".to_owned(), "N".to_owned(), "1".to_owned(), "4a".to_owned()];
        locants.sort_by_key(|locant| locant_sort_key(locant));
        assert_eq!(locants, vec!["N", "1", "3", "4a"]);
    }

    #[test]
    fn multiplier_elides_before_vowel_suffix() {
        assert_eq!(elide_multiplier("tetra", "ol"), "tetr");
        assert_eq!(elide_multiplier("di", "ol"), "di");
        assert_eq!(elide_multiplier("penta", "nitrile"), "penta");
    }
}
