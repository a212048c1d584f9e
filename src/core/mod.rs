//! Core types and enumerations for molecular connection tables.
//!
//! This module defines the fundamental types used throughout the iupac-namer
//! library: the chemical elements the namer understands, bond orders, bond
//! stereo tags, and hybridization states. These are the building blocks for
//! the molecule data model consumed by the analysis, detection, and naming
//! phases of the pipeline.

use std::fmt;
use std::str::FromStr;

pub mod error;
pub mod graph;

/// A chemical element handled by the nomenclature engine.
///
/// Only elements that can appear in an organic connection table and that the
/// naming rules know how to cite are represented. Discriminants are atomic
/// numbers, so `element as u8` yields the atomic number directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Element {
    /// Hydrogen (atomic number 1)
    H = 1,
    /// Boron (atomic number 5)
    B = 5,
    /// Carbon (atomic number 6)
    C,
    /// Nitrogen (atomic number 7)
    N,
    /// Oxygen (atomic number 8)
    O,
    /// Fluorine (atomic number 9)
    F,
    /// Silicon (atomic number 14)
    Si = 14,
    /// Phosphorus (atomic number 15)
    P,
    /// Sulfur (atomic number 16)
    S,
    /// Chlorine (atomic number 17)
    Cl,
    /// Germanium (atomic number 32)
    Ge = 32,
    /// Arsenic (atomic number 33)
    As,
    /// Selenium (atomic number 34)
    Se,
    /// Bromine (atomic number 35)
    Br,
    /// Tin (atomic number 50)
    Sn = 50,
    /// Antimony (atomic number 51)
    Sb,
    /// Tellurium (atomic number 52)
    Te,
    /// Iodine (atomic number 53)
    I,
}

impl Element {
    /// Returns the atomic number of this element.
    pub fn atomic_number(self) -> u8 {
        self as u8
    }

    /// Returns the standard chemical symbol.
    pub fn symbol(self) -> &'static str {
        match self {
            Element::H => "H",
            Element::B => "B",
            Element::C => "C",
            Element::N => "N",
            Element::O => "O",
            Element::F => "F",
            Element::Si => "Si",
            Element::P => "P",
            Element::S => "S",
            Element::Cl => "Cl",
            Element::Ge => "Ge",
            Element::As => "As",
            Element::Se => "Se",
            Element::Br => "Br",
            Element::Sn => "Sn",
            Element::Sb => "Sb",
            Element::Te => "Te",
            Element::I => "I",
        }
    }

    /// Whether this element is a skeletal heteroatom (neither carbon nor
    /// hydrogen). Heteroatoms drive replacement-prefix nomenclature and the
    /// P-14.4 locant tie-breaks.
    pub fn is_heteroatom(self) -> bool {
        !matches!(self, Element::C | Element::H)
    }

    /// Whether this element is one of the halogens, which are only ever
    /// expressed as substituent prefixes.
    pub fn is_halogen(self) -> bool {
        matches!(self, Element::F | Element::Cl | Element::Br | Element::I)
    }

    /// Returns the usual bonding valence used when reasoning about implicit
    /// hydrogens and degree saturation.
    pub fn standard_valence(self) -> u8 {
        match self {
            Element::H | Element::F | Element::Cl | Element::Br | Element::I => 1,
            Element::O | Element::S | Element::Se | Element::Te => 2,
            Element::B | Element::N | Element::P | Element::As | Element::Sb => 3,
            Element::C | Element::Si | Element::Ge | Element::Sn => 4,
        }
    }
}

/// Error type for failed element symbol parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseElementError {
    /// The invalid string that could not be parsed.
    invalid_string: String,
}

impl fmt::Display for ParseElementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid element symbol: '{}'", self.invalid_string)
    }
}
impl std::error::Error for ParseElementError {}

impl FromStr for Element {
    type Err = ParseElementError;

    /// Parses a chemical element from its standard symbol string.
    ///
    /// # Errors
    ///
    /// Returns `ParseElementError` if the string is not a symbol the
    /// nomenclature engine recognizes.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::str::FromStr;
    /// use iupac_namer::Element;
    ///
    /// let carbon = Element::from_str("C").unwrap();
    /// assert_eq!(carbon, Element::C);
    /// assert_eq!(carbon.atomic_number(), 6);
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "H" => Ok(Element::H),
            "B" => Ok(Element::B),
            "C" => Ok(Element::C),
            "N" => Ok(Element::N),
            "O" => Ok(Element::O),
            "F" => Ok(Element::F),
            "Si" => Ok(Element::Si),
            "P" => Ok(Element::P),
            "S" => Ok(Element::S),
            "Cl" => Ok(Element::Cl),
            "Ge" => Ok(Element::Ge),
            "As" => Ok(Element::As),
            "Se" => Ok(Element::Se),
            "Br" => Ok(Element::Br),
            "Sn" => Ok(Element::Sn),
            "Sb" => Ok(Element::Sb),
            "Te" => Ok(Element::Te),
            "I" => Ok(Element::I),
            _ => Err(ParseElementError {
                invalid_string: s.to_owned(),
            }),
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// The order of a chemical bond.
///
/// Aromatic bonds are treated specially throughout: they mark delocalized
/// ring systems and participate in the aromaticity policy rather than in
/// unsaturation suffixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum BondType {
    /// Single bond (order 1)
    Single = 1,
    /// Double bond (order 2)
    Double = 2,
    /// Triple bond (order 3)
    Triple = 3,
    /// Quadruple bond (order 4; never named, carried for input fidelity)
    Quadruple = 4,
    /// Aromatic bond (delocalized ring systems)
    Aromatic = 5,
}

/// Error type for failed bond type parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseBondTypeError {
    /// The invalid string that could not be parsed.
    invalid_string: String,
}

impl fmt::Display for ParseBondTypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid bond type string: '{}'", self.invalid_string)
    }
}
impl std::error::Error for ParseBondTypeError {}

impl FromStr for BondType {
    type Err = ParseBondTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Single" => Ok(BondType::Single),
            "Double" => Ok(BondType::Double),
            "Triple" => Ok(BondType::Triple),
            "Quadruple" => Ok(BondType::Quadruple),
            "Aromatic" => Ok(BondType::Aromatic),
            _ => Err(ParseBondTypeError {
                invalid_string: s.to_owned(),
            }),
        }
    }
}

impl fmt::Display for BondType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self {
            BondType::Single => "Single",
            BondType::Double => "Double",
            BondType::Triple => "Triple",
            BondType::Quadruple => "Quadruple",
            BondType::Aromatic => "Aromatic",
        };
        write!(f, "{}", kind)
    }
}

/// Stereo annotation on a bond, as supplied by the upstream parser.
///
/// Stereodescriptor assignment is out of scope; the tags are carried so
/// that round-tripping callers do not lose them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BondStereo {
    /// No stereo annotation.
    #[default]
    None,
    /// Wedge up.
    Up,
    /// Wedge down.
    Down,
    /// Explicitly unspecified configuration.
    Either,
}

/// Chirality tag on an atom, as supplied by the upstream parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Chirality {
    /// Clockwise (@@) tetrahedral arrangement.
    Clockwise,
    /// Counterclockwise (@) tetrahedral arrangement.
    Counterclockwise,
}

/// Hybridization state of an atom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hybridization {
    /// sp hybridization (linear geometry)
    SP,
    /// sp² hybridization (trigonal planar geometry)
    SP2,
    /// sp³ hybridization (tetrahedral geometry)
    SP3,
    /// Anything else (d-orbital participation, bare ions, ...)
    Other,
}

impl fmt::Display for Hybridization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hyb = match self {
            Hybridization::SP => "SP",
            Hybridization::SP2 => "SP2",
            Hybridization::SP3 => "SP3",
            Hybridization::Other => "Other",
        };
        write!(f, "{}", hyb)
    }
}
