//! The molecule connection-table data model.
//!
//! This module defines the input side of the naming pipeline: atoms with the
//! annotations an upstream parser provides, bonds with order and stereo
//! tags, and the immutable `Molecule` aggregate with an optional
//! pre-computed ring list. Derived facts such as degree, ring membership and
//! SSSR live in the analysis layer, not here.

use super::error::GraphValidationError;
use super::{BondStereo, BondType, Chirality, Element, Hybridization};

/// An atom in a molecular connection table.
///
/// Identity is the stable integer `id` assigned at insertion order; every
/// other subsystem refers to atoms exclusively through these ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Atom {
    /// The unique identifier of this atom within the molecule.
    pub id: usize,
    /// The chemical element of this atom.
    pub element: Element,
    /// The formal charge of this atom.
    pub charge: i8,
    /// The number of implicit hydrogens attached to this atom.
    pub hydrogens: u8,
    /// Optional isotope mass number.
    pub isotope: Option<u16>,
    /// Whether the upstream parser flagged this atom as aromatic.
    pub aromatic: bool,
    /// Optional chirality tag (carried, never interpreted).
    pub chirality: Option<Chirality>,
    /// Optional hybridization supplied by upstream property enrichment.
    pub hybridization: Option<Hybridization>,
}

/// A bond between two atoms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bond {
    /// The unique identifier of this bond within the molecule.
    pub id: usize,
    /// The identifiers of the two atoms connected by this bond.
    pub atom_ids: (usize, usize),
    /// The bond order.
    pub kind: BondType,
    /// Stereo annotation on the bond.
    pub stereo: BondStereo,
}

impl Bond {
    /// Returns the endpoint opposite to `atom_id`, or `None` when the bond
    /// does not touch that atom.
    pub fn other_end(&self, atom_id: usize) -> Option<usize> {
        if self.atom_ids.0 == atom_id {
            Some(self.atom_ids.1)
        } else if self.atom_ids.1 == atom_id {
            Some(self.atom_ids.0)
        } else {
            None
        }
    }
}

/// A molecule presented as an immutable connection table.
///
/// Built incrementally through [`Molecule::add_atom`] and
/// [`Molecule::add_bond`], then treated as read-only by the whole pipeline.
/// An optional pre-computed ring list (each ring an ordered atom-id
/// traversal) may be attached by the upstream parser; when absent the
/// analyzer perceives rings itself.
///
/// # Examples
///
/// Building ethanol:
///
/// ```
/// use iupac_namer::{Molecule, Element, BondType};
///
/// let mut mol = Molecule::new();
/// let c1 = mol.add_atom(Element::C);
/// let c2 = mol.add_atom(Element::C);
/// let o = mol.add_atom(Element::O);
/// mol.add_bond(c1, c2, BondType::Single).unwrap();
/// mol.add_bond(c2, o, BondType::Single).unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Molecule {
    /// The ordered list of atoms.
    pub atoms: Vec<Atom>,
    /// The ordered list of bonds.
    pub bonds: Vec<Bond>,
    /// Optional pre-computed ring list in traversal order.
    pub rings: Option<Vec<Vec<usize>>>,
}

impl Molecule {
    /// Creates a new, empty molecule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a new atom of the given element with neutral charge and no
    /// annotations, returning its id.
    pub fn add_atom(&mut self, element: Element) -> usize {
        let id = self.atoms.len();
        self.atoms.push(Atom {
            id,
            element,
            charge: 0,
            hydrogens: 0,
            isotope: None,
            aromatic: false,
            chirality: None,
            hybridization: None,
        });
        id
    }

    /// Adds a new atom flagged aromatic, returning its id.
    ///
    /// Convenience for building aromatic rings; equivalent to `add_atom`
    /// followed by setting the `aromatic` flag.
    pub fn add_aromatic_atom(&mut self, element: Element) -> usize {
        let id = self.add_atom(element);
        self.atoms[id].aromatic = true;
        id
    }

    /// Adds a new bond between two existing atoms.
    ///
    /// # Errors
    ///
    /// Returns [`GraphValidationError::MissingAtom`] when either endpoint is
    /// out of bounds and [`GraphValidationError::SelfBondingAtom`] when both
    /// endpoints are the same atom.
    pub fn add_bond(
        &mut self,
        atom1_id: usize,
        atom2_id: usize,
        kind: BondType,
    ) -> Result<usize, GraphValidationError> {
        if atom1_id >= self.atoms.len() {
            return Err(GraphValidationError::MissingAtom { atom_id: atom1_id });
        }
        if atom2_id >= self.atoms.len() {
            return Err(GraphValidationError::MissingAtom { atom_id: atom2_id });
        }
        if atom1_id == atom2_id {
            return Err(GraphValidationError::SelfBondingAtom { atom_id: atom1_id });
        }
        let id = self.bonds.len();
        self.bonds.push(Bond {
            id,
            atom_ids: (atom1_id, atom2_id),
            kind,
            stereo: BondStereo::None,
        });
        Ok(id)
    }

    /// Attaches a pre-computed ring list to the molecule.
    ///
    /// # Errors
    ///
    /// Returns [`GraphValidationError::InvalidRingAtom`] when a ring cites
    /// an atom id the molecule does not contain.
    pub fn set_rings(&mut self, rings: Vec<Vec<usize>>) -> Result<(), GraphValidationError> {
        for (ring_index, ring) in rings.iter().enumerate() {
            for &atom_id in ring {
                if atom_id >= self.atoms.len() {
                    return Err(GraphValidationError::InvalidRingAtom {
                        ring_index,
                        atom_id,
                    });
                }
            }
        }
        self.rings = Some(rings);
        Ok(())
    }

    /// Looks up the bond connecting two atoms, in either endpoint order.
    pub fn bond_between(&self, atom1_id: usize, atom2_id: usize) -> Option<&Bond> {
        self.bonds.iter().find(|bond| {
            bond.atom_ids == (atom1_id, atom2_id) || bond.atom_ids == (atom2_id, atom1_id)
        })
    }

    /// Counts the carbon atoms in the molecule.
    pub fn carbon_count(&self) -> usize {
        self.atoms
            .iter()
            .filter(|atom| atom.element == Element::C)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_atom_assigns_sequential_ids() {
        let mut mol = Molecule::new();
        assert_eq!(mol.add_atom(Element::C), 0);
        assert_eq!(mol.add_atom(Element::O), 1);
        assert_eq!(mol.atoms.len(), 2);
        assert_eq!(mol.atoms[1].element, Element::O);
        assert_eq!(mol.atoms[1].charge, 0);
    }

    #[test]
    fn add_bond_rejects_missing_endpoint() {
        let mut mol = Molecule::new();
        mol.add_atom(Element::C);
        let err = mol.add_bond(0, 5, BondType::Single).unwrap_err();
        assert_eq!(err, GraphValidationError::MissingAtom { atom_id: 5 });
    }

    #[test]
    fn add_bond_rejects_self_bond() {
        let mut mol = Molecule::new();
        mol.add_atom(Element::C);
        let err = mol.add_bond(0, 0, BondType::Single).unwrap_err();
        assert_eq!(err, GraphValidationError::SelfBondingAtom { atom_id: 0 });
    }

    #[test]
    fn set_rings_validates_atom_ids() {
        let mut mol = Molecule::new();
        let a = mol.add_atom(Element::C);
        let b = mol.add_atom(Element::C);
        let c = mol.add_atom(Element::C);
        mol.add_bond(a, b, BondType::Single).unwrap();
        mol.add_bond(b, c, BondType::Single).unwrap();
        mol.add_bond(c, a, BondType::Single).unwrap();

        assert!(mol.set_rings(vec![vec![a, b, c]]).is_ok());
        let err = mol.set_rings(vec![vec![a, b, 9]]).unwrap_err();
        assert_eq!(
            err,
            GraphValidationError::InvalidRingAtom {
                ring_index: 0,
                atom_id: 9
            }
        );
    }

    #[test]
    fn bond_between_matches_either_order() {
        let mut mol = Molecule::new();
        let a = mol.add_atom(Element::C);
        let b = mol.add_atom(Element::N);
        mol.add_bond(a, b, BondType::Double).unwrap();

        assert_eq!(mol.bond_between(a, b).unwrap().kind, BondType::Double);
        assert_eq!(mol.bond_between(b, a).unwrap().kind, BondType::Double);
        assert!(mol.bond_between(a, a).is_none());
    }

    #[test]
    fn aromatic_atom_helper_sets_flag() {
        let mut mol = Molecule::new();
        let a = mol.add_aromatic_atom(Element::C);
        assert!(mol.atoms[a].aromatic);
    }
}
