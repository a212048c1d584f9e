#![doc = include_str!("../README.md")]

mod core;

pub use crate::core::graph::{Atom, Bond, Molecule};
pub use crate::core::{BondStereo, BondType, Chirality, Element, Hybridization};

pub use crate::core::error::{GraphValidationError, MorphemeParseError, NamerError};

pub mod analysis;
pub mod engine;
pub mod groups;
pub mod morphemes;
pub mod rings;

pub use crate::engine::{NamingResult, NomenclatureMethod, TraceEntry};

/// Derives the systematic IUPAC name of a molecule using the default
/// morpheme tables.
///
/// Never panics and never returns `Err`: every internal failure degrades
/// into trace conflicts and, at worst, the fallback name with confidence
/// zero.
pub fn name_molecule(molecule: &Molecule) -> NamingResult {
    match morphemes::default_table() {
        Ok(table) => name_molecule_with_morphemes(molecule, table),
        Err(_) => engine::result_from(&engine::context::NamingContext::new(
            molecule.clone(),
            morphemes::MorphemeTable::default(),
        )),
    }
}

/// Derives the name with caller-supplied morpheme tables (see
/// [`morphemes::parse_morphemes`]).
pub fn name_molecule_with_morphemes(
    molecule: &Molecule,
    tables: &morphemes::MorphemeTable,
) -> NamingResult {
    let context = engine::run(molecule.clone(), tables.clone());
    engine::result_from(&context)
}

/// Derives the name and returns the full rule trace alongside it, for
/// downstream report rendering.
pub fn name_molecule_traced(molecule: &Molecule) -> (NamingResult, Vec<TraceEntry>) {
    match morphemes::default_table() {
        Ok(table) => {
            let context = engine::run(molecule.clone(), table.clone());
            let result = engine::result_from(&context);
            (result, context.trace)
        }
        Err(_) => (name_molecule(molecule), Vec::new()),
    }
}
