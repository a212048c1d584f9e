//! The immutable naming context and its rule trace.
//!
//! A context is created once per naming request and evolves monotonically:
//! every rule returns a new version, sharing the unchanged parts through
//! `Arc` handles so versioning stays cheap. The trace is append-only; each
//! entry carries shallow before/after snapshots (counts and key
//! identifiers, never deep clones) and any conflicts the rule raised.

use crate::analysis::systems::RingSystem;
use crate::analysis::{Adjacency, RingInfo};
use crate::core::BondType;
use crate::core::graph::Molecule;
use crate::groups::{FunctionalGroup, GroupKind};
use crate::morphemes::MorphemeTable;
use crate::rings::RingName;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// The naming method chosen by the P-51 layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NomenclatureMethod {
    /// Suffix/prefix substitutive nomenclature (the default).
    Substitutive,
    /// Functional-class nomenclature (`methyl ethanoate`).
    FunctionalClass,
    /// Multiplicative nomenclature for symmetric parents.
    Multiplicative,
    /// Skeletal replacement nomenclature.
    Replacement,
}

impl fmt::Display for NomenclatureMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let method = match self {
            NomenclatureMethod::Substitutive => "substitutive",
            NomenclatureMethod::FunctionalClass => "functional-class",
            NomenclatureMethod::Multiplicative => "multiplicative",
            NomenclatureMethod::Replacement => "replacement",
        };
        write!(f, "{}", method)
    }
}

/// The chosen parent structure.
#[derive(Debug, Clone, PartialEq)]
pub enum ParentStructure {
    /// An acyclic principal chain.
    Chain {
        /// Chain atoms in order.
        atoms: Vec<usize>,
        /// In-chain multiple bonds as (lower chain index, bond type).
        multiple_bonds: Vec<(usize, BondType)>,
    },
    /// A monocyclic or retained-name ring system.
    Ring {
        /// All ring-system atoms.
        atoms: Vec<usize>,
        /// Index into the perceived ring systems.
        system_index: usize,
        /// The assembled ring name with its locant map.
        name: RingName,
    },
    /// A bridged polycyclic named by von Baeyer rules.
    Polycyclic {
        /// All ring-system atoms.
        atoms: Vec<usize>,
        /// Index into the perceived ring systems.
        system_index: usize,
        /// The assembled ring name with its locant map.
        name: RingName,
    },
}

impl ParentStructure {
    /// The parent's skeletal atoms.
    pub fn atoms(&self) -> &[usize] {
        match self {
            ParentStructure::Chain { atoms, .. }
            | ParentStructure::Ring { atoms, .. }
            | ParentStructure::Polycyclic { atoms, .. } => atoms,
        }
    }

    /// Whether the parent is a ring or polycyclic system.
    pub fn is_ring(&self) -> bool {
        !matches!(self, ParentStructure::Chain { .. })
    }
}

/// Conflict categories recorded in the trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictKind {
    /// A layer's preconditions were not met and the layer was skipped.
    Dependency,
    /// A rule's action failed; the context version was discarded.
    StateInconsistency,
}

/// A conflict raised during rule execution.
#[derive(Debug, Clone)]
pub struct Conflict {
    /// The conflict category.
    pub kind: ConflictKind,
    /// The rule (or layer) that raised it.
    pub rule_id: &'static str,
    /// Human-readable reason.
    pub message: String,
}

/// A shallow snapshot of the context for trace entries.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    /// Number of detected functional groups.
    pub group_count: usize,
    /// The principal group's class, when selected.
    pub principal: Option<GroupKind>,
    /// Number of candidate chains.
    pub chain_count: usize,
    /// Number of candidate ring systems.
    pub ring_count: usize,
    /// Whether a parent structure has been chosen.
    pub has_parent: bool,
    /// The chosen nomenclature method, when set.
    pub method: Option<NomenclatureMethod>,
    /// The assembled name, when produced.
    pub name: Option<String>,
}

/// One rule invocation in the trace.
#[derive(Debug, Clone)]
pub struct TraceEntry {
    /// Wall-clock time of the invocation, for report rendering.
    pub timestamp: std::time::SystemTime,
    /// The rule's identifier.
    pub rule_id: &'static str,
    /// The rule's descriptive name.
    pub rule_name: &'static str,
    /// The Blue Book section the rule implements.
    pub blue_book: &'static str,
    /// The layer (execution phase) the rule ran in.
    pub phase: &'static str,
    /// What the rule did, in prose.
    pub description: String,
    /// Context state before the rule ran.
    pub before: Snapshot,
    /// Context state after the rule ran.
    pub after: Snapshot,
    /// Conflicts raised by this invocation.
    pub conflicts: Vec<Conflict>,
}

/// A named substituent hanging off the parent structure.
#[derive(Debug, Clone, PartialEq)]
pub struct Substituent {
    /// Parent atom the substituent is attached to.
    pub anchor: usize,
    /// Prefix name without enclosure (`methyl`, `2-iodopropan-2-yl`).
    pub name: String,
    /// Whether the citation needs parentheses and group multipliers.
    pub complex: bool,
    /// Citation locant overriding the anchor's (for N-substituents).
    pub locant_override: Option<String>,
}

/// The immutable naming context threaded through the layer pipeline.
///
/// Shared analysis products (molecule, adjacency, rings, morphemes) are
/// `Arc` handles; rules replace only the handles they change.
#[derive(Clone)]
pub struct NamingContext {
    /// The molecule under analysis.
    pub molecule: Arc<Molecule>,
    /// Its adjacency table.
    pub adjacency: Arc<Adjacency>,
    /// Its SSSR and membership maps.
    pub ring_info: Arc<RingInfo>,
    /// Its perceived ring systems.
    pub systems: Arc<Vec<RingSystem>>,
    /// The morpheme tables in use.
    pub morphemes: Arc<MorphemeTable>,
    /// Detected functional groups, descending priority.
    pub functional_groups: Arc<Vec<FunctionalGroup>>,
    /// Index of the principal group in `functional_groups`.
    pub principal_group: Option<usize>,
    /// Candidate principal chains (atom sequences).
    pub candidate_chains: Arc<Vec<Vec<usize>>>,
    /// Candidate ring-system indices.
    pub candidate_rings: Arc<Vec<usize>>,
    /// The chosen parent structure.
    pub parent: Option<Arc<ParentStructure>>,
    /// The chosen nomenclature method.
    pub method: Option<NomenclatureMethod>,
    /// Final locant map (atom id → locant string).
    pub locant_map: Arc<HashMap<usize, String>>,
    /// Substituents discovered during numbering.
    pub substituents: Arc<Vec<Substituent>>,
    /// The assembled name, set by the last layer.
    pub name: Option<String>,
    /// The append-only rule trace.
    pub trace: Vec<TraceEntry>,
}

impl NamingContext {
    /// Creates the initial context for a molecule, running the analysis
    /// phase once and sharing its products with every later version.
    pub fn new(molecule: Molecule, morphemes: MorphemeTable) -> Self {
        let adjacency = crate::analysis::adjacency(&molecule);
        let ring_info = crate::analysis::ring_info(&molecule);
        let systems = crate::analysis::ring_systems(&molecule, &ring_info.rings);
        Self {
            molecule: Arc::new(molecule),
            adjacency: Arc::new(adjacency),
            ring_info: Arc::new(ring_info),
            systems: Arc::new(systems),
            morphemes: Arc::new(morphemes),
            functional_groups: Arc::new(Vec::new()),
            principal_group: None,
            candidate_chains: Arc::new(Vec::new()),
            candidate_rings: Arc::new(Vec::new()),
            parent: None,
            method: None,
            locant_map: Arc::new(HashMap::new()),
            substituents: Arc::new(Vec::new()),
            name: None,
            trace: Vec::new(),
        }
    }

    /// Takes the shallow snapshot recorded in trace entries.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            group_count: self.functional_groups.len(),
            principal: self
                .principal_group
                .and_then(|index| self.functional_groups.get(index))
                .map(|group| group.kind),
            chain_count: self.candidate_chains.len(),
            ring_count: self.candidate_rings.len(),
            has_parent: self.parent.is_some(),
            method: self.method,
            name: self.name.clone(),
        }
    }

    /// The selected principal group, if any.
    pub fn principal(&self) -> Option<&FunctionalGroup> {
        self.principal_group
            .and_then(|index| self.functional_groups.get(index))
    }

    /// Total conflicts accumulated in the trace.
    pub fn conflict_count(&self) -> usize {
        self.trace.iter().map(|entry| entry.conflicts.len()).sum()
    }
}

/// The result handed back to the caller.
#[derive(Debug, Clone)]
pub struct NamingResult {
    /// The assembled IUPAC name, or the fallback error string.
    pub name: String,
    /// The nomenclature method used.
    pub method: NomenclatureMethod,
    /// The parent structure's base name, when one was chosen.
    pub parent_structure: Option<String>,
    /// Canonical names of the detected functional groups.
    pub functional_groups: Vec<String>,
    /// The final locant map (atom id → locant string).
    pub locants: HashMap<usize, String>,
    /// Confidence in the result, in [0.1, 1.0] for completed runs.
    pub confidence: f64,
    /// Identifiers of the rules that executed, in order.
    pub rules: Vec<&'static str>,
}

/// Computes the confidence score from the finished context.
///
/// Starts from zero and adds 0.2 when rules executed, 0.3 when functional
/// groups were recognized, and 0.2 when a parent was chosen; every trace
/// conflict subtracts 0.1. The result is clamped to [0.1, 1.0].
pub fn confidence(context: &NamingContext) -> f64 {
    let mut confidence = 0.0;
    if !context.trace.is_empty() {
        confidence += 0.2;
    }
    if !context.functional_groups.is_empty() {
        confidence += 0.3;
    }
    if context.parent.is_some() {
        confidence += 0.2;
    }
    confidence -= 0.1 * context.conflict_count() as f64;
    confidence.clamp(0.1, 1.0)
}
