use super::super::{NamingTestCase, aromatic, atom, atom_h, bond};
use iupac_namer::{BondType, Element};

pub const CYCLOHEXANE: NamingTestCase = NamingTestCase {
    name: "Cyclohexane",
    atoms: &[
        atom("C1", Element::C),
        atom("C2", Element::C),
        atom("C3", Element::C),
        atom("C4", Element::C),
        atom("C5", Element::C),
        atom("C6", Element::C),
    ],
    bonds: &[
        bond("C1", "C2", BondType::Single),
        bond("C2", "C3", BondType::Single),
        bond("C3", "C4", BondType::Single),
        bond("C4", "C5", BondType::Single),
        bond("C5", "C6", BondType::Single),
        bond("C6", "C1", BondType::Single),
    ],
    expected_name: "cyclohexane",
};

pub const BENZENE: NamingTestCase = NamingTestCase {
    name: "Benzene",
    atoms: &[
        aromatic("C1", Element::C),
        aromatic("C2", Element::C),
        aromatic("C3", Element::C),
        aromatic("C4", Element::C),
        aromatic("C5", Element::C),
        aromatic("C6", Element::C),
    ],
    bonds: &[
        bond("C1", "C2", BondType::Aromatic),
        bond("C2", "C3", BondType::Aromatic),
        bond("C3", "C4", BondType::Aromatic),
        bond("C4", "C5", BondType::Aromatic),
        bond("C5", "C6", BondType::Aromatic),
        bond("C6", "C1", BondType::Aromatic),
    ],
    expected_name: "benzene",
};

pub const TOLUENE: NamingTestCase = NamingTestCase {
    name: "Methylbenzene",
    atoms: &[
        aromatic("C1", Element::C),
        aromatic("C2", Element::C),
        aromatic("C3", Element::C),
        aromatic("C4", Element::C),
        aromatic("C5", Element::C),
        aromatic("C6", Element::C),
        atom("CM", Element::C),
    ],
    bonds: &[
        bond("C1", "C2", BondType::Aromatic),
        bond("C2", "C3", BondType::Aromatic),
        bond("C3", "C4", BondType::Aromatic),
        bond("C4", "C5", BondType::Aromatic),
        bond("C5", "C6", BondType::Aromatic),
        bond("C6", "C1", BondType::Aromatic),
        bond("C1", "CM", BondType::Single),
    ],
    expected_name: "methylbenzene",
};

pub const CHLOROBENZENE: NamingTestCase = NamingTestCase {
    name: "Chlorobenzene",
    atoms: &[
        aromatic("C1", Element::C),
        aromatic("C2", Element::C),
        aromatic("C3", Element::C),
        aromatic("C4", Element::C),
        aromatic("C5", Element::C),
        aromatic("C6", Element::C),
        atom("Cl", Element::Cl),
    ],
    bonds: &[
        bond("C1", "C2", BondType::Aromatic),
        bond("C2", "C3", BondType::Aromatic),
        bond("C3", "C4", BondType::Aromatic),
        bond("C4", "C5", BondType::Aromatic),
        bond("C5", "C6", BondType::Aromatic),
        bond("C6", "C1", BondType::Aromatic),
        bond("C1", "Cl", BondType::Single),
    ],
    expected_name: "chlorobenzene",
};

pub const PHENOL: NamingTestCase = NamingTestCase {
    name: "Benzen-1-ol",
    atoms: &[
        aromatic("C1", Element::C),
        aromatic("C2", Element::C),
        aromatic("C3", Element::C),
        aromatic("C4", Element::C),
        aromatic("C5", Element::C),
        aromatic("C6", Element::C),
        atom_h("O", Element::O, 1),
    ],
    bonds: &[
        bond("C1", "C2", BondType::Aromatic),
        bond("C2", "C3", BondType::Aromatic),
        bond("C3", "C4", BondType::Aromatic),
        bond("C4", "C5", BondType::Aromatic),
        bond("C5", "C6", BondType::Aromatic),
        bond("C6", "C1", BondType::Aromatic),
        bond("C1", "O", BondType::Single),
    ],
    expected_name: "benzen-1-ol",
};

pub const PYRIDINE: NamingTestCase = NamingTestCase {
    name: "Pyridine",
    atoms: &[
        aromatic("N", Element::N),
        aromatic("C2", Element::C),
        aromatic("C3", Element::C),
        aromatic("C4", Element::C),
        aromatic("C5", Element::C),
        aromatic("C6", Element::C),
    ],
    bonds: &[
        bond("N", "C2", BondType::Aromatic),
        bond("C2", "C3", BondType::Aromatic),
        bond("C3", "C4", BondType::Aromatic),
        bond("C4", "C5", BondType::Aromatic),
        bond("C5", "C6", BondType::Aromatic),
        bond("C6", "N", BondType::Aromatic),
    ],
    expected_name: "pyridine",
};

pub const CYCLOHEXANONE: NamingTestCase = NamingTestCase {
    name: "Cyclohexan-1-one",
    atoms: &[
        atom("C1", Element::C),
        atom("C2", Element::C),
        atom("C3", Element::C),
        atom("C4", Element::C),
        atom("C5", Element::C),
        atom("C6", Element::C),
        atom("O", Element::O),
    ],
    bonds: &[
        bond("C1", "C2", BondType::Single),
        bond("C2", "C3", BondType::Single),
        bond("C3", "C4", BondType::Single),
        bond("C4", "C5", BondType::Single),
        bond("C5", "C6", BondType::Single),
        bond("C6", "C1", BondType::Single),
        bond("C1", "O", BondType::Double),
    ],
    expected_name: "cyclohexan-1-one",
};

pub const NAPHTHALENE: NamingTestCase = NamingTestCase {
    name: "Naphthalene",
    atoms: &[
        aromatic("C4A", Element::C),
        aromatic("C8A", Element::C),
        aromatic("C1", Element::C),
        aromatic("C2", Element::C),
        aromatic("C3", Element::C),
        aromatic("C4", Element::C),
        aromatic("C5", Element::C),
        aromatic("C6", Element::C),
        aromatic("C7", Element::C),
        aromatic("C8", Element::C),
    ],
    bonds: &[
        bond("C4A", "C8A", BondType::Aromatic),
        bond("C8A", "C1", BondType::Aromatic),
        bond("C1", "C2", BondType::Aromatic),
        bond("C2", "C3", BondType::Aromatic),
        bond("C3", "C4", BondType::Aromatic),
        bond("C4", "C4A", BondType::Aromatic),
        bond("C4A", "C5", BondType::Aromatic),
        bond("C5", "C6", BondType::Aromatic),
        bond("C6", "C7", BondType::Aromatic),
        bond("C7", "C8", BondType::Aromatic),
        bond("C8", "C8A", BondType::Aromatic),
    ],
    expected_name: "naphthalene",
};

pub const NORBORNANE: NamingTestCase = NamingTestCase {
    name: "Bicyclo[2.2.1]heptane",
    atoms: &[
        atom("C1", Element::C),
        atom("C2", Element::C),
        atom("C3", Element::C),
        atom("C4", Element::C),
        atom("C5", Element::C),
        atom("C6", Element::C),
        atom("C7", Element::C),
    ],
    bonds: &[
        bond("C1", "C2", BondType::Single),
        bond("C2", "C3", BondType::Single),
        bond("C3", "C4", BondType::Single),
        bond("C4", "C5", BondType::Single),
        bond("C5", "C6", BondType::Single),
        bond("C6", "C1", BondType::Single),
        bond("C1", "C7", BondType::Single),
        bond("C4", "C7", BondType::Single),
    ],
    expected_name: "bicyclo[2.2.1]heptane",
};

pub const BIPHENYL: NamingTestCase = NamingTestCase {
    name: "Biphenyl",
    atoms: &[
        aromatic("A1", Element::C),
        aromatic("A2", Element::C),
        aromatic("A3", Element::C),
        aromatic("A4", Element::C),
        aromatic("A5", Element::C),
        aromatic("A6", Element::C),
        aromatic("B1", Element::C),
        aromatic("B2", Element::C),
        aromatic("B3", Element::C),
        aromatic("B4", Element::C),
        aromatic("B5", Element::C),
        aromatic("B6", Element::C),
    ],
    bonds: &[
        bond("A1", "A2", BondType::Aromatic),
        bond("A2", "A3", BondType::Aromatic),
        bond("A3", "A4", BondType::Aromatic),
        bond("A4", "A5", BondType::Aromatic),
        bond("A5", "A6", BondType::Aromatic),
        bond("A6", "A1", BondType::Aromatic),
        bond("B1", "B2", BondType::Aromatic),
        bond("B2", "B3", BondType::Aromatic),
        bond("B3", "B4", BondType::Aromatic),
        bond("B4", "B5", BondType::Aromatic),
        bond("B5", "B6", BondType::Aromatic),
        bond("B6", "B1", BondType::Aromatic),
        bond("A1", "B1", BondType::Single),
    ],
    expected_name: "biphenyl",
};

pub const IODOPROPYL_CYCLOHEXANE: NamingTestCase = NamingTestCase {
    name: "(2-Iodopropan-2-yl)cyclohexane",
    atoms: &[
        atom("R1", Element::C),
        atom("R2", Element::C),
        atom("R3", Element::C),
        atom("R4", Element::C),
        atom("R5", Element::C),
        atom("R6", Element::C),
        atom("CQ", Element::C),
        atom("M1", Element::C),
        atom("M2", Element::C),
        atom("I", Element::I),
    ],
    bonds: &[
        bond("R1", "R2", BondType::Single),
        bond("R2", "R3", BondType::Single),
        bond("R3", "R4", BondType::Single),
        bond("R4", "R5", BondType::Single),
        bond("R5", "R6", BondType::Single),
        bond("R6", "R1", BondType::Single),
        bond("R1", "CQ", BondType::Single),
        bond("CQ", "M1", BondType::Single),
        bond("CQ", "M2", BondType::Single),
        bond("CQ", "I", BondType::Single),
    ],
    expected_name: "(2-iodopropan-2-yl)cyclohexane",
};

pub const THIAZOL_AMINE: NamingTestCase = NamingTestCase {
    name: "N-(3-Chloro-4-fluorophenyl)-5-methylidene-4H-1,3-thiazol-2-amine",
    atoms: &[
        atom("S1", Element::S),
        atom("C2", Element::C),
        atom("N3", Element::N),
        atom_h("C4", Element::C, 2),
        atom("C5", Element::C),
        atom_h("CM", Element::C, 2),
        atom_h("NA", Element::N, 1),
        aromatic("B1", Element::C),
        aromatic("B2", Element::C),
        aromatic("B3", Element::C),
        aromatic("B4", Element::C),
        aromatic("B5", Element::C),
        aromatic("B6", Element::C),
        atom("CL", Element::Cl),
        atom("F", Element::F),
    ],
    bonds: &[
        bond("S1", "C2", BondType::Single),
        bond("C2", "N3", BondType::Double),
        bond("N3", "C4", BondType::Single),
        bond("C4", "C5", BondType::Single),
        bond("C5", "S1", BondType::Single),
        bond("C5", "CM", BondType::Double),
        bond("C2", "NA", BondType::Single),
        bond("NA", "B1", BondType::Single),
        bond("B1", "B2", BondType::Aromatic),
        bond("B2", "B3", BondType::Aromatic),
        bond("B3", "B4", BondType::Aromatic),
        bond("B4", "B5", BondType::Aromatic),
        bond("B5", "B6", BondType::Aromatic),
        bond("B6", "B1", BondType::Aromatic),
        bond("B3", "CL", BondType::Single),
        bond("B4", "F", BondType::Single),
    ],
    expected_name: "N-(3-chloro-4-fluorophenyl)-5-methylidene-4H-1,3-thiazol-2-amine",
};

pub const DIPHENYL_SULFONE: NamingTestCase = NamingTestCase {
    name: "(Phenylsulfonyl)benzene",
    atoms: &[
        aromatic("A1", Element::C),
        aromatic("A2", Element::C),
        aromatic("A3", Element::C),
        aromatic("A4", Element::C),
        aromatic("A5", Element::C),
        aromatic("A6", Element::C),
        atom("S", Element::S),
        atom("O1", Element::O),
        atom("O2", Element::O),
        aromatic("B1", Element::C),
        aromatic("B2", Element::C),
        aromatic("B3", Element::C),
        aromatic("B4", Element::C),
        aromatic("B5", Element::C),
        aromatic("B6", Element::C),
    ],
    bonds: &[
        bond("A1", "A2", BondType::Aromatic),
        bond("A2", "A3", BondType::Aromatic),
        bond("A3", "A4", BondType::Aromatic),
        bond("A4", "A5", BondType::Aromatic),
        bond("A5", "A6", BondType::Aromatic),
        bond("A6", "A1", BondType::Aromatic),
        bond("A1", "S", BondType::Single),
        bond("S", "O1", BondType::Double),
        bond("S", "O2", BondType::Double),
        bond("S", "B1", BondType::Single),
        bond("B1", "B2", BondType::Aromatic),
        bond("B2", "B3", BondType::Aromatic),
        bond("B3", "B4", BondType::Aromatic),
        bond("B4", "B5", BondType::Aromatic),
        bond("B5", "B6", BondType::Aromatic),
        bond("B6", "B1", BondType::Aromatic),
    ],
    expected_name: "(phenylsulfonyl)benzene",
};
