use super::super::{NamingTestCase, atom, bond};
use iupac_namer::{BondType, Element};

pub const METHANE: NamingTestCase = NamingTestCase {
    name: "Methane",
    atoms: &[atom("C1", Element::C)],
    bonds: &[],
    expected_name: "methane",
};

pub const ETHANE: NamingTestCase = NamingTestCase {
    name: "Ethane",
    atoms: &[atom("C1", Element::C), atom("C2", Element::C)],
    bonds: &[bond("C1", "C2", BondType::Single)],
    expected_name: "ethane",
};

pub const HEXANE: NamingTestCase = NamingTestCase {
    name: "Hexane",
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
    ],
    expected_name: "hexane",
};

pub const ISOBUTANE: NamingTestCase = NamingTestCase {
    name: "2-Methylpropane",
    atoms: &[
        atom("C2", Element::C),
        atom("C1", Element::C),
        atom("C3", Element::C),
        atom("CM", Element::C),
    ],
    bonds: &[
        bond("C1", "C2", BondType::Single),
        bond("C2", "C3", BondType::Single),
        bond("C2", "CM", BondType::Single),
    ],
    expected_name: "2-methylpropane",
};

pub const BUT_1_ENE: NamingTestCase = NamingTestCase {
    name: "But-1-ene",
    atoms: &[
        atom("C1", Element::C),
        atom("C2", Element::C),
        atom("C3", Element::C),
        atom("C4", Element::C),
    ],
    bonds: &[
        bond("C1", "C2", BondType::Double),
        bond("C2", "C3", BondType::Single),
        bond("C3", "C4", BondType::Single),
    ],
    expected_name: "but-1-ene",
};
