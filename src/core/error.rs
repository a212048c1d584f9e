//! Error types describing the failure modes of input validation and morpheme
//! table loading.
//!
//! The naming pipeline itself never propagates errors to the caller: rule
//! failures become trace conflicts and the engine degrades to a fallback
//! name. The types here cover the two genuinely fallible seams, namely
//! molecule construction and morpheme data parsing.

use thiserror::Error;

/// Root error emitted by the fallible operations of the library.
///
/// Each variant wraps a more specific error that pinpoints the subsystem
/// that failed, so callers can recover or log richer diagnostics without
/// losing ergonomic `Result` signatures.
#[derive(Debug, Error)]
pub enum NamerError {
    /// Structural validation of the input molecule failed.
    #[error("invalid input molecule")]
    InvalidInput(#[from] GraphValidationError),

    /// Parsing of a morpheme data TOML payload did not succeed.
    #[error("failed to parse morpheme tables")]
    MorphemeParse(#[from] MorphemeParseError),
}

/// Errors that describe structural issues with an input molecule.
///
/// These are detected while the connection table is being built, so
/// malformed inputs are rejected before any analysis is attempted.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GraphValidationError {
    /// A bond references an atom identifier that is missing from the molecule.
    #[error("bond references a non-existent atom with ID {atom_id}")]
    MissingAtom {
        /// Identifier of the atom that could not be found.
        atom_id: usize,
    },

    /// A bond lists the same atom as both of its endpoints.
    #[error("atom with ID {atom_id} is bonded to itself")]
    SelfBondingAtom {
        /// Identifier of the atom that incorrectly lists a self-bond.
        atom_id: usize,
    },

    /// A supplied ring traversal cites an atom the molecule does not contain.
    #[error("ring {ring_index} references a non-existent atom with ID {atom_id}")]
    InvalidRingAtom {
        /// Index of the offending ring in the supplied ring list.
        ring_index: usize,
        /// Identifier of the atom that could not be found.
        atom_id: usize,
    },
}

/// Error reported when a morpheme TOML document cannot be deserialized.
#[derive(Debug, Error, Clone)]
#[error("morpheme data is not valid TOML: {message}")]
pub struct MorphemeParseError {
    /// Human-readable reason supplied by the TOML deserializer.
    pub message: String,
}
