//! The rule engine and layer pipeline.
//!
//! Eight fixed layers run in order over an immutable context: atomic
//! analysis, functional-group detection, nomenclature-method choice, ring
//! analysis, parent selection, chain analysis, numbering, and name
//! assembly. Rules never abort the pipeline; failures become trace
//! conflicts and the engine degrades toward a fallback name.

use crate::core::graph::Molecule;
use crate::morphemes::MorphemeTable;

pub mod context;
pub mod rules;

mod assembly;
mod chains;
mod layers;
mod numbering;
mod substituent;

pub use context::{
    Conflict, ConflictKind, NamingContext, NamingResult, NomenclatureMethod, ParentStructure,
    Snapshot, Substituent, TraceEntry,
};
pub use rules::{Layer, LayerKind, Rule, RuleOutcome};

/// The name returned when the pipeline cannot produce anything better.
pub const FALLBACK_NAME: &str = "Error: Unable to generate IUPAC name";

/// Runs the full pipeline and returns the terminal context.
pub fn run(molecule: Molecule, morphemes: MorphemeTable) -> NamingContext {
    let initial = NamingContext::new(molecule, morphemes);
    rules::execute_layers(&layers::build_layers(), initial)
}

/// Extracts the caller-facing result from a terminal context.
pub fn result_from(context: &NamingContext) -> NamingResult {
    let executed: Vec<&'static str> = context
        .trace
        .iter()
        .filter(|entry| entry.conflicts.is_empty())
        .map(|entry| entry.rule_id)
        .collect();
    let functional_groups: Vec<String> = context
        .functional_groups
        .iter()
        .map(|group| {
            context
                .morphemes
                .functional_group_meta(group.kind.pattern_key())
                .map(|meta| meta.name.clone())
                .unwrap_or_else(|| group.kind.pattern_key().to_owned())
        })
        .collect();
    let parent_structure = context.parent.as_deref().map(|parent| match parent {
        ParentStructure::Chain { atoms, .. } => {
            format!("{}ane", context.morphemes.stem_or_generic(atoms.len()))
        }
        ParentStructure::Ring { name, .. } | ParentStructure::Polycyclic { name, .. } => {
            name.base.clone()
        }
    });

    match &context.name {
        Some(name) => NamingResult {
            name: name.clone(),
            method: context.method.unwrap_or(NomenclatureMethod::Substitutive),
            parent_structure,
            functional_groups,
            locants: (*context.locant_map).clone(),
            confidence: context::confidence(context),
            rules: executed,
        },
        None => NamingResult {
            name: FALLBACK_NAME.to_owned(),
            method: context.method.unwrap_or(NomenclatureMethod::Substitutive),
            parent_structure,
            functional_groups,
            locants: (*context.locant_map).clone(),
            confidence: 0.0,
            rules: executed,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{BondType, Element};
    use crate::morphemes::default_table;

    fn name_of(molecule: Molecule) -> String {
        let context = run(molecule, default_table().unwrap().clone());
        result_from(&context).name
    }

    #[test]
    fn methane_names_end_to_end() {
        let mut mol = Molecule::new();
        mol.add_atom(Element::C);
        assert_eq!(name_of(mol), "methane");
    }

    #[test]
    fn empty_molecule_falls_back() {
        let mol = Molecule::new();
        let context = run(mol, default_table().unwrap().clone());
        let result = result_from(&context);
        assert_eq!(result.name, FALLBACK_NAME);
        assert_eq!(result.confidence, 0.0);
    }

    #[test]
    fn trace_records_executed_rules_in_order() {
        let mut mol = Molecule::new();
        mol.add_atom(Element::C);
        let context = run(mol, default_table().unwrap().clone());
        let result = result_from(&context);

        assert!(result.rules.contains(&"atomic.seed"));
        assert!(result.rules.contains(&"chain.principal"));
        assert!(result.rules.contains(&"assembly.compose"));
        let atomic_position = result.rules.iter().position(|&id| id == "atomic.seed");
        let assembly_position = result.rules.iter().position(|&id| id == "assembly.compose");
        assert!(atomic_position < assembly_position);
    }

    #[test]
    fn ethanol_selects_the_alcohol_suffix() {
        let mut mol = Molecule::new();
        let c1 = mol.add_atom(Element::C);
        let c2 = mol.add_atom(Element::C);
        let o = mol.add_atom(Element::O);
        mol.atoms[o].hydrogens = 1;
        mol.add_bond(c1, c2, BondType::Single).unwrap();
        mol.add_bond(c2, o, BondType::Single).unwrap();

        let context = run(mol, default_table().unwrap().clone());
        let result = result_from(&context);
        assert_eq!(result.name, "ethan-1-ol");
        assert_eq!(result.functional_groups, vec!["alcohol".to_owned()]);
        assert!(result.confidence > 0.5);
    }
}
