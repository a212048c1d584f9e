//! Graph queries and canonical ring perception.
//!
//! This module is the analysis layer of the pipeline: adjacency
//! construction, deterministic SSSR computation, ring classification, ring
//! system assembly with perimeter extraction, and the aromaticity policy.
//! Every downstream component (functional-group detection, ring
//! nomenclature, the rule engine) reads the molecule exclusively through
//! the queries defined here.

use crate::core::BondType;
use crate::core::graph::Molecule;

pub mod aromaticity;
pub mod rings;
pub mod systems;

pub use aromaticity::{is_ring_aromatic, is_ring_aromatic_tolerant};
pub use rings::{Ring, sssr};
pub use systems::{RingClass, RingSystem, classify, ring_systems};

/// Neighbor lists for every atom, carrying the connecting bond order.
pub type Adjacency = Vec<Vec<(usize, BondType)>>;

/// Builds the adjacency table of a molecule.
///
/// Bonds whose endpoints fall outside the atom list are skipped; validated
/// molecules never contain such bonds, and tolerating them here keeps the
/// analyzer total on arbitrary input.
pub fn adjacency(molecule: &Molecule) -> Adjacency {
    let num_atoms = molecule.atoms.len();
    let mut adjacency = vec![vec![]; num_atoms];
    for bond in &molecule.bonds {
        let (u, v) = bond.atom_ids;
        if u >= num_atoms || v >= num_atoms {
            continue;
        }
        adjacency[u].push((v, bond.kind));
        adjacency[v].push((u, bond.kind));
    }
    adjacency
}

/// Ring membership queries derived from the SSSR.
///
/// Bundles the perceived rings with per-atom and per-bond membership maps
/// so callers can answer `is_atom_in_ring`-style questions without
/// rescanning the ring list.
#[derive(Debug, Clone, Default)]
pub struct RingInfo {
    /// The perceived SSSR rings, in deterministic order.
    pub rings: Vec<Ring>,
    atom_membership: Vec<Vec<usize>>,
    bond_membership: Vec<Vec<usize>>,
}

impl RingInfo {
    /// Whether the atom belongs to at least one SSSR ring.
    pub fn is_atom_in_ring(&self, atom_id: usize) -> bool {
        self.atom_membership
            .get(atom_id)
            .is_some_and(|rings| !rings.is_empty())
    }

    /// Whether the bond belongs to at least one SSSR ring.
    pub fn is_bond_in_ring(&self, bond_id: usize) -> bool {
        self.bond_membership
            .get(bond_id)
            .is_some_and(|rings| !rings.is_empty())
    }

    /// Ring indices (into [`RingInfo::rings`]) containing the atom.
    pub fn rings_containing_atom(&self, atom_id: usize) -> &[usize] {
        self.atom_membership
            .get(atom_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Ring indices (into [`RingInfo::rings`]) containing the bond.
    pub fn rings_containing_bond(&self, bond_id: usize) -> &[usize] {
        self.bond_membership
            .get(bond_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of rings an atom participates in.
    pub fn atom_ring_membership(&self, atom_id: usize) -> usize {
        self.rings_containing_atom(atom_id).len()
    }

    /// Indices of all rings with exactly `n` atoms.
    pub fn rings_of_size(&self, n: usize) -> Vec<usize> {
        self.rings
            .iter()
            .enumerate()
            .filter(|(_, ring)| ring.len() == n)
            .map(|(index, _)| index)
            .collect()
    }
}

/// Perceives rings and builds the membership maps for a molecule.
///
/// When the molecule carries a pre-computed ring list it is trusted as-is
/// (the upstream parser has already run ring perception); otherwise the
/// SSSR is computed here.
pub fn ring_info(molecule: &Molecule) -> RingInfo {
    let rings = match &molecule.rings {
        Some(precomputed) => precomputed
            .iter()
            .map(|atoms| Ring::new(atoms.clone(), molecule))
            .collect(),
        None => sssr(molecule),
    };

    let mut atom_membership = vec![vec![]; molecule.atoms.len()];
    let mut bond_membership = vec![vec![]; molecule.bonds.len()];

    for (ring_index, ring) in rings.iter().enumerate() {
        for &atom_id in &ring.atoms {
            if atom_id < atom_membership.len() {
                atom_membership[atom_id].push(ring_index);
            }
        }
        for (u, v) in ring.edges() {
            if let Some(bond) = molecule.bond_between(u, v) {
                bond_membership[bond.id].push(ring_index);
            }
        }
    }

    RingInfo {
        rings,
        atom_membership,
        bond_membership,
    }
}
