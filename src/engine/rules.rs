//! Rule records, layers, and the layer executor.
//!
//! Rules are plain values: an id, a Blue Book citation, a priority, a pure
//! condition function and a pure action function. Layers own vectors of
//! rules and execute them by descending priority with registration order
//! breaking ties. A failed action never aborts the pipeline; it is
//! converted into a `state_inconsistency` conflict on the trace and
//! execution continues with the previous context version.

use super::context::{Conflict, ConflictKind, NamingContext, Snapshot, TraceEntry};
use std::time::SystemTime;

/// The eight pipeline layers, in fixed execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerKind {
    /// Baseline atomic analysis.
    Atomic,
    /// Functional-group detection and principal selection.
    FunctionalGroups,
    /// Nomenclature-method choice (P-51).
    NomenclatureMethod,
    /// Candidate ring-system collection.
    RingAnalysis,
    /// Chain-vs-ring parent arbitration (P-44.1).
    ParentSelection,
    /// Principal-chain choice (P-44.3).
    ChainAnalysis,
    /// Locant assignment (P-14.4).
    Numbering,
    /// Final name assembly.
    NameAssembly,
}

impl LayerKind {
    /// The phase name recorded in trace entries.
    pub fn phase(self) -> &'static str {
        match self {
            LayerKind::Atomic => "atomic",
            LayerKind::FunctionalGroups => "functional-groups",
            LayerKind::NomenclatureMethod => "nomenclature-method",
            LayerKind::RingAnalysis => "ring-analysis",
            LayerKind::ParentSelection => "parent-selection",
            LayerKind::ChainAnalysis => "chain-analysis",
            LayerKind::Numbering => "numbering",
            LayerKind::NameAssembly => "name-assembly",
        }
    }

    /// Layers whose completion this layer depends on.
    fn dependencies(self) -> &'static [LayerKind] {
        match self {
            LayerKind::Atomic => &[],
            LayerKind::FunctionalGroups => &[LayerKind::Atomic],
            LayerKind::NomenclatureMethod => &[LayerKind::FunctionalGroups],
            LayerKind::RingAnalysis => &[LayerKind::FunctionalGroups],
            LayerKind::ParentSelection => {
                &[LayerKind::NomenclatureMethod, LayerKind::RingAnalysis]
            }
            LayerKind::ChainAnalysis => {
                &[LayerKind::FunctionalGroups, LayerKind::ParentSelection]
            }
            LayerKind::Numbering => &[LayerKind::ParentSelection],
            LayerKind::NameAssembly => &[LayerKind::Numbering],
        }
    }
}

/// The outcome of a successful rule action: the next context version and a
/// prose description for the trace.
pub struct RuleOutcome {
    /// The new context version.
    pub context: NamingContext,
    /// What the rule did.
    pub description: String,
}

impl RuleOutcome {
    /// Convenience constructor.
    pub fn new(context: NamingContext, description: impl Into<String>) -> Self {
        Self {
            context,
            description: description.into(),
        }
    }
}

/// A naming rule: a data record, not a trait object.
pub struct Rule {
    /// Stable identifier recorded in results and traces.
    pub id: &'static str,
    /// Descriptive name.
    pub name: &'static str,
    /// Blue Book section the rule implements.
    pub blue_book: &'static str,
    /// Priority within the layer; higher runs first.
    pub priority: u8,
    /// Pure applicability test.
    pub condition: fn(&NamingContext) -> bool,
    /// Pure transformation producing the next context version.
    pub action: fn(&NamingContext) -> Result<RuleOutcome, String>,
}

/// A layer: an ordered collection of rules.
pub struct Layer {
    /// Which pipeline phase this layer is.
    pub kind: LayerKind,
    /// The rules, in registration order.
    pub rules: Vec<Rule>,
}

/// Executes all layers over an initial context and returns the terminal
/// version.
///
/// Per layer: preconditions are checked first (a failed check records a
/// `dependency` conflict and skips the layer); rules then run by
/// descending priority with registration order preserved on ties.
pub fn execute_layers(layers: &[Layer], initial: NamingContext) -> NamingContext {
    let mut context = initial;
    let mut completed: Vec<LayerKind> = Vec::new();

    for layer in layers {
        let unmet: Vec<&'static str> = layer
            .kind
            .dependencies()
            .iter()
            .filter(|dependency| !completed.contains(dependency))
            .map(|dependency| dependency.phase())
            .collect();
        if !unmet.is_empty() {
            record_layer_conflict(&mut context, layer.kind, &unmet);
            continue;
        }

        let mut order: Vec<usize> = (0..layer.rules.len()).collect();
        order.sort_by_key(|&index| std::cmp::Reverse(layer.rules[index].priority));

        for index in order {
            let rule = &layer.rules[index];
            if !(rule.condition)(&context) {
                continue;
            }
            let before = context.snapshot();
            match (rule.action)(&context) {
                Ok(outcome) => {
                    let mut next = outcome.context;
                    let after = next.snapshot();
                    next.trace.push(TraceEntry {
                        timestamp: SystemTime::now(),
                        rule_id: rule.id,
                        rule_name: rule.name,
                        blue_book: rule.blue_book,
                        phase: layer.kind.phase(),
                        description: outcome.description,
                        before,
                        after,
                        conflicts: Vec::new(),
                    });
                    context = next;
                }
                Err(message) => {
                    let after = context.snapshot();
                    context.trace.push(TraceEntry {
                        timestamp: SystemTime::now(),
                        rule_id: rule.id,
                        rule_name: rule.name,
                        blue_book: rule.blue_book,
                        phase: layer.kind.phase(),
                        description: format!("rule failed: {message}"),
                        before,
                        after,
                        conflicts: vec![Conflict {
                            kind: ConflictKind::StateInconsistency,
                            rule_id: rule.id,
                            message,
                        }],
                    });
                }
            }
        }
        completed.push(layer.kind);
    }
    context
}

fn record_layer_conflict(context: &mut NamingContext, kind: LayerKind, unmet: &[&'static str]) {
    let snapshot = context.snapshot();
    context.trace.push(TraceEntry {
        timestamp: SystemTime::now(),
        rule_id: kind.phase(),
        rule_name: kind.phase(),
        blue_book: "",
        phase: kind.phase(),
        description: format!("layer skipped; unmet dependencies: {}", unmet.join(", ")),
        before: snapshot.clone(),
        after: snapshot,
        conflicts: vec![Conflict {
            kind: ConflictKind::Dependency,
            rule_id: kind.phase(),
            message: format!("requires {}", unmet.join(", ")),
        }],
    });
}

/// Invariant check used by tests and debug assertions: every trace entry's
/// after-snapshot equals the next entry's before-snapshot.
pub fn trace_is_chained(context: &NamingContext) -> bool {
    context
        .trace
        .windows(2)
        .all(|pair| pair[0].after == pair[1].before)
}
