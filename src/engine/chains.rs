//! Candidate-chain enumeration and principal-chain selection (P-44.3).
//!
//! Candidate chains are simple paths in the carbon subgraph. Chains that
//! are mostly ring atoms are excluded up front; they are ring fragments,
//! not acyclic parents. Selection maximizes, in order: principal-group
//! attachments, coverage of the principal group's (possibly acyl-expanded)
//! atom list, length, skeletal multiple bonds, and double bonds.

use crate::analysis::{Adjacency, RingInfo};
use crate::core::graph::Molecule;
use crate::core::{BondType, Element};
use crate::groups::FunctionalGroup;
use std::collections::HashSet;

/// Upper bound on enumerated candidate chains.
const MAX_CHAINS: usize = 5000;

/// Fraction of ring atoms beyond which a chain is not a true acyclic chain.
const RING_ATOM_LIMIT: f64 = 0.7;

/// Enumerates candidate principal chains.
///
/// Every simple path in the carbon subgraph (including single atoms) is a
/// candidate; paths are deduplicated by orientation and chains whose atoms
/// are more than 70 % ring members are dropped.
pub fn candidate_chains(
    molecule: &Molecule,
    adjacency: &Adjacency,
    ring_info: &RingInfo,
) -> Vec<Vec<usize>> {
    let carbons: HashSet<usize> = molecule
        .atoms
        .iter()
        .filter(|atom| atom.element == Element::C)
        .map(|atom| atom.id)
        .collect();

    let mut chains: Vec<Vec<usize>> = Vec::new();
    for &start in &carbons {
        let mut stack: Vec<Vec<usize>> = vec![vec![start]];
        while let Some(path) = stack.pop() {
            if chains.len() >= MAX_CHAINS {
                break;
            }
            let last = *path.last().expect("paths are non-empty");
            // Record each path once, smaller endpoint first.
            if path[0] <= last {
                chains.push(path.clone());
            }
            for &(next, _) in &adjacency[last] {
                if carbons.contains(&next) && !path.contains(&next) {
                    let mut extended = path.clone();
                    extended.push(next);
                    stack.push(extended);
                }
            }
        }
    }

    chains.retain(|chain| {
        let ring_atoms = chain
            .iter()
            .filter(|&&atom_id| ring_info.is_atom_in_ring(atom_id))
            .count();
        (ring_atoms as f64) <= RING_ATOM_LIMIT * chain.len() as f64
    });
    chains.sort();
    chains.dedup();
    chains
}

/// Selection score for one chain; all components are maximized.
fn chain_score(
    chain: &[usize],
    molecule: &Molecule,
    principal: Option<&FunctionalGroup>,
    groups: &[FunctionalGroup],
) -> (usize, usize, usize, usize, usize) {
    let chain_set: HashSet<usize> = chain.iter().copied().collect();

    let (attachments, coverage) = match principal {
        Some(principal) => {
            let attachments = groups
                .iter()
                .filter(|group| group.kind == principal.kind)
                .filter(|group| {
                    group
                        .locants
                        .iter()
                        .any(|atom_id| chain_set.contains(atom_id))
                })
                .count();
            let coverage = principal
                .atoms
                .iter()
                .filter(|&&atom_id| {
                    molecule.atoms[atom_id].element == Element::C && chain_set.contains(&atom_id)
                })
                .count();
            (attachments, coverage)
        }
        None => (0, 0),
    };

    let mut multiple = 0;
    let mut doubles = 0;
    for window in chain.windows(2) {
        if let Some(bond) = molecule.bond_between(window[0], window[1]) {
            match bond.kind {
                BondType::Double => {
                    multiple += 1;
                    doubles += 1;
                }
                BondType::Triple => multiple += 1,
                _ => {}
            }
        }
    }

    (attachments, coverage, chain.len(), multiple, doubles)
}

/// Chooses the principal chain (P-44.3) among the candidates.
pub fn select_principal_chain(
    chains: &[Vec<usize>],
    molecule: &Molecule,
    principal: Option<&FunctionalGroup>,
    groups: &[FunctionalGroup],
) -> Option<Vec<usize>> {
    chains
        .iter()
        .max_by(|a, b| {
            chain_score(a, molecule, principal, groups)
                .cmp(&chain_score(b, molecule, principal, groups))
                // Deterministic tie-break: prefer the lexicographically
                // smaller atom sequence.
                .then_with(|| b.as_slice().cmp(a.as_slice()))
        })
        .cloned()
}

/// In-chain multiple bonds as (position index, bond type) pairs for the
/// chain's current orientation.
pub fn chain_multiple_bonds(chain: &[usize], molecule: &Molecule) -> Vec<(usize, BondType)> {
    chain
        .windows(2)
        .enumerate()
        .filter_map(|(index, window)| {
            molecule
                .bond_between(window[0], window[1])
                .and_then(|bond| match bond.kind {
                    BondType::Double | BondType::Triple => Some((index, bond.kind)),
                    _ => None,
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{adjacency, ring_info};

    fn parts(molecule: &Molecule) -> (Adjacency, RingInfo) {
        (adjacency(molecule), ring_info(molecule))
    }

    fn linear_alkane(n: usize) -> Molecule {
        let mut mol = Molecule::new();
        for _ in 0..n {
            mol.add_atom(Element::C);
        }
        for i in 0..n - 1 {
            mol.add_bond(i, i + 1, BondType::Single).unwrap();
        }
        mol
    }

    #[test]
    fn single_carbon_yields_one_chain() {
        let mut mol = Molecule::new();
        mol.add_atom(Element::C);
        let (adjacency, info) = parts(&mol);
        let chains = candidate_chains(&mol, &adjacency, &info);
        assert_eq!(chains, vec![vec![0]]);
    }

    #[test]
    fn longest_chain_wins_without_groups() {
        // 2-methylbutane: longest chain has four carbons.
        let mut mol = Molecule::new();
        for _ in 0..5 {
            mol.add_atom(Element::C);
        }
        mol.add_bond(0, 1, BondType::Single).unwrap();
        mol.add_bond(1, 2, BondType::Single).unwrap();
        mol.add_bond(2, 3, BondType::Single).unwrap();
        mol.add_bond(1, 4, BondType::Single).unwrap();

        let (adjacency, info) = parts(&mol);
        let chains = candidate_chains(&mol, &adjacency, &info);
        let best = select_principal_chain(&chains, &mol, None, &[]).unwrap();
        assert_eq!(best.len(), 4);
    }

    #[test]
    fn ring_fragments_are_excluded() {
        let mut mol = Molecule::new();
        for _ in 0..6 {
            mol.add_atom(Element::C);
        }
        for i in 0..6 {
            mol.add_bond(i, (i + 1) % 6, BondType::Single).unwrap();
        }
        let (adjacency, info) = parts(&mol);
        let chains = candidate_chains(&mol, &adjacency, &info);
        assert!(chains.is_empty(), "pure ring carbons never form chains");
    }

    #[test]
    fn unsaturation_breaks_length_ties() {
        // C0=C1-C2(-C3-C4)(-C5-C6): the two length-5 chains through C0
        // carry the double bond, the one through C3/C5 does not.
        let mut mol = Molecule::new();
        for _ in 0..7 {
            mol.add_atom(Element::C);
        }
        mol.add_bond(0, 1, BondType::Double).unwrap();
        mol.add_bond(1, 2, BondType::Single).unwrap();
        mol.add_bond(2, 3, BondType::Single).unwrap();
        mol.add_bond(3, 4, BondType::Single).unwrap();
        mol.add_bond(2, 5, BondType::Single).unwrap();
        mol.add_bond(5, 6, BondType::Single).unwrap();

        let (adjacency, info) = parts(&mol);
        let chains = candidate_chains(&mol, &adjacency, &info);
        let best = select_principal_chain(&chains, &mol, None, &[]).unwrap();
        assert_eq!(best.len(), 5);
        assert!(
            best.contains(&0),
            "the unsaturated chain must win the tie"
        );
    }

    #[test]
    fn multiple_bond_positions_are_reported() {
        let mut mol = linear_alkane(4);
        mol.bonds[1].kind = BondType::Double;
        let chain = vec![0, 1, 2, 3];
        assert_eq!(
            chain_multiple_bonds(&chain, &mol),
            vec![(1, BondType::Double)]
        );
    }
}
