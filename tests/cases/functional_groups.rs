use super::super::{NamingTestCase, atom, atom_h, bond};
use iupac_namer::{BondType, Element};

pub const ETHANOL: NamingTestCase = NamingTestCase {
    name: "Ethanol",
    atoms: &[
        atom("C1", Element::C),
        atom("C2", Element::C),
        atom_h("O", Element::O, 1),
    ],
    bonds: &[
        bond("C1", "C2", BondType::Single),
        bond("C1", "O", BondType::Single),
    ],
    expected_name: "ethan-1-ol",
};

pub const PROPAN_2_OL: NamingTestCase = NamingTestCase {
    name: "Propan-2-ol",
    atoms: &[
        atom("C1", Element::C),
        atom("C2", Element::C),
        atom("C3", Element::C),
        atom_h("O", Element::O, 1),
    ],
    bonds: &[
        bond("C1", "C2", BondType::Single),
        bond("C2", "C3", BondType::Single),
        bond("C2", "O", BondType::Single),
    ],
    expected_name: "propan-2-ol",
};

pub const ACETIC_ACID: NamingTestCase = NamingTestCase {
    name: "Ethanoic acid",
    atoms: &[
        atom("CM", Element::C),
        atom("CO", Element::C),
        atom("O1", Element::O),
        atom_h("O2", Element::O, 1),
    ],
    bonds: &[
        bond("CM", "CO", BondType::Single),
        bond("CO", "O1", BondType::Double),
        bond("CO", "O2", BondType::Single),
    ],
    expected_name: "ethanoic acid",
};

pub const ACETONE: NamingTestCase = NamingTestCase {
    name: "Propan-2-one",
    atoms: &[
        atom("C1", Element::C),
        atom("C2", Element::C),
        atom("C3", Element::C),
        atom("O", Element::O),
    ],
    bonds: &[
        bond("C1", "C2", BondType::Single),
        bond("C2", "C3", BondType::Single),
        bond("C2", "O", BondType::Double),
    ],
    expected_name: "propan-2-one",
};

pub const PROPANAL: NamingTestCase = NamingTestCase {
    name: "Propanal",
    atoms: &[
        atom("C1", Element::C),
        atom("C2", Element::C),
        atom_h("C3", Element::C, 1),
        atom("O", Element::O),
    ],
    bonds: &[
        bond("C1", "C2", BondType::Single),
        bond("C2", "C3", BondType::Single),
        bond("C3", "O", BondType::Double),
    ],
    expected_name: "propanal",
};

pub const ETHANAMINE: NamingTestCase = NamingTestCase {
    name: "Ethan-1-amine",
    atoms: &[
        atom("C1", Element::C),
        atom("C2", Element::C),
        atom_h("N", Element::N, 2),
    ],
    bonds: &[
        bond("C1", "C2", BondType::Single),
        bond("C1", "N", BondType::Single),
    ],
    expected_name: "ethan-1-amine",
};

pub const N_METHYLETHANAMINE: NamingTestCase = NamingTestCase {
    name: "N-Methylethan-1-amine",
    atoms: &[
        atom("C1", Element::C),
        atom("C2", Element::C),
        atom_h("N", Element::N, 1),
        atom("CN", Element::C),
    ],
    bonds: &[
        bond("C1", "C2", BondType::Single),
        bond("C1", "N", BondType::Single),
        bond("N", "CN", BondType::Single),
    ],
    expected_name: "N-methylethan-1-amine",
};

pub const ACETONITRILE: NamingTestCase = NamingTestCase {
    name: "Ethanenitrile",
    atoms: &[
        atom("C1", Element::C),
        atom("C2", Element::C),
        atom("N", Element::N),
    ],
    bonds: &[
        bond("C1", "C2", BondType::Single),
        bond("C2", "N", BondType::Triple),
    ],
    expected_name: "ethanenitrile",
};

pub const PROPANAMIDE: NamingTestCase = NamingTestCase {
    name: "Propanamide",
    atoms: &[
        atom("C1", Element::C),
        atom("C2", Element::C),
        atom("C3", Element::C),
        atom("O", Element::O),
        atom_h("N", Element::N, 2),
    ],
    bonds: &[
        bond("C1", "C2", BondType::Single),
        bond("C2", "C3", BondType::Single),
        bond("C3", "O", BondType::Double),
        bond("C3", "N", BondType::Single),
    ],
    expected_name: "propanamide",
};

pub const METHYL_ACETATE: NamingTestCase = NamingTestCase {
    name: "Methyl ethanoate",
    atoms: &[
        atom("CM", Element::C),
        atom("CO", Element::C),
        atom("O1", Element::O),
        atom("O2", Element::O),
        atom("CE", Element::C),
    ],
    bonds: &[
        bond("CM", "CO", BondType::Single),
        bond("CO", "O1", BondType::Double),
        bond("CO", "O2", BondType::Single),
        bond("O2", "CE", BondType::Single),
    ],
    expected_name: "methyl ethanoate",
};

pub const CHLOROETHANE: NamingTestCase = NamingTestCase {
    name: "Chloroethane",
    atoms: &[
        atom("C1", Element::C),
        atom("C2", Element::C),
        atom("Cl", Element::Cl),
    ],
    bonds: &[
        bond("C1", "C2", BondType::Single),
        bond("C1", "Cl", BondType::Single),
    ],
    expected_name: "chloroethane",
};

pub const DICHLOROETHANE: NamingTestCase = NamingTestCase {
    name: "1,2-Dichloroethane",
    atoms: &[
        atom("C1", Element::C),
        atom("C2", Element::C),
        atom("Cl1", Element::Cl),
        atom("Cl2", Element::Cl),
    ],
    bonds: &[
        bond("C1", "C2", BondType::Single),
        bond("C1", "Cl1", BondType::Single),
        bond("C2", "Cl2", BondType::Single),
    ],
    expected_name: "1,2-dichloroethane",
};

pub const TRIFLUOROMETHANE: NamingTestCase = NamingTestCase {
    name: "Trifluoromethane",
    atoms: &[
        atom("C", Element::C),
        atom("F1", Element::F),
        atom("F2", Element::F),
        atom("F3", Element::F),
    ],
    bonds: &[
        bond("C", "F1", BondType::Single),
        bond("C", "F2", BondType::Single),
        bond("C", "F3", BondType::Single),
    ],
    expected_name: "trifluoromethane",
};

pub const ETHANE_DIOL: NamingTestCase = NamingTestCase {
    name: "Ethane-1,2-diol",
    atoms: &[
        atom("C1", Element::C),
        atom("C2", Element::C),
        atom_h("O1", Element::O, 1),
        atom_h("O2", Element::O, 1),
    ],
    bonds: &[
        bond("C1", "C2", BondType::Single),
        bond("C1", "O1", BondType::Single),
        bond("C2", "O2", BondType::Single),
    ],
    expected_name: "ethane-1,2-diol",
};

pub const METHYL_ISOBUTYL_KETONE: NamingTestCase = NamingTestCase {
    name: "4-Methylpentan-2-one",
    atoms: &[
        atom("C1", Element::C),
        atom("C2", Element::C),
        atom("O", Element::O),
        atom("C3", Element::C),
        atom("C4", Element::C),
        atom("C5", Element::C),
        atom("CM", Element::C),
    ],
    bonds: &[
        bond("C1", "C2", BondType::Single),
        bond("C2", "O", BondType::Double),
        bond("C2", "C3", BondType::Single),
        bond("C3", "C4", BondType::Single),
        bond("C4", "C5", BondType::Single),
        bond("C4", "CM", BondType::Single),
    ],
    expected_name: "4-methylpentan-2-one",
};

pub const DIMETHYL_SULFOXIDE: NamingTestCase = NamingTestCase {
    name: "Dimethyl sulfoxide",
    atoms: &[
        atom("C1", Element::C),
        atom("S", Element::S),
        atom("O", Element::O),
        atom("C2", Element::C),
    ],
    bonds: &[
        bond("C1", "S", BondType::Single),
        bond("S", "O", BondType::Double),
        bond("S", "C2", BondType::Single),
    ],
    expected_name: "methylsulfinylmethane",
};
