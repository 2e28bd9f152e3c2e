//! Validation rules over a diagram and the report they produce.
//!
//! Rules are evaluated on demand against the live [`DiagramDoc`] and are never
//! cached. A failed rule contributes its message to the report; an empty
//! report means the diagram passed.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use serde::{Deserialize, Serialize};

use crate::doc::{DiagramDoc, PartKind};

/// A named predicate over the diagram.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum ValidationRule {
    /// Some connection joins a node of kind `from` to a node whose kind is in `to`.
    Link { from: PartKind, to: Vec<PartKind>, message: String },
    /// At least `min` components of `kind` have been placed.
    Quota { kind: PartKind, min: usize, message: String },
}

impl ValidationRule {
    /// Require a wire between `from` and any of `to`.
    #[must_use]
    pub fn link(from: PartKind, to: impl IntoIterator<Item = PartKind>, message: impl Into<String>) -> Self {
        Self::Link { from, to: to.into_iter().collect(), message: message.into() }
    }

    /// Require at least `min` placed components of `kind`.
    #[must_use]
    pub fn quota(kind: PartKind, min: usize, message: impl Into<String>) -> Self {
        Self::Quota { kind, min, message: message.into() }
    }

    /// Whether the diagram satisfies this rule.
    #[must_use]
    pub fn holds(&self, doc: &DiagramDoc) -> bool {
        match self {
            Self::Link { from, to, .. } => doc.has_link(*from, to),
            Self::Quota { kind, min, .. } => doc.count_of(*kind) >= *min,
        }
    }

    /// Message reported when the rule fails.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Link { message, .. } | Self::Quota { message, .. } => message,
        }
    }

    /// Every part kind the rule mentions.
    #[must_use]
    pub fn kinds(&self) -> Vec<PartKind> {
        match self {
            Self::Link { from, to, .. } => std::iter::once(*from).chain(to.iter().copied()).collect(),
            Self::Quota { kind, .. } => vec![*kind],
        }
    }
}

/// Required count of one part kind within a context (e.g. four outlets in a bedroom).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quota {
    pub kind: PartKind,
    pub required: usize,
}

/// Placed-versus-required count for one quota.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tally {
    pub kind: PartKind,
    pub placed: usize,
    pub required: usize,
}

impl Tally {
    #[must_use]
    pub fn of(quota: Quota, doc: &DiagramDoc) -> Self {
        Self { kind: quota.kind, placed: doc.count_of(quota.kind), required: quota.required }
    }

    #[must_use]
    pub fn is_met(&self) -> bool {
        self.placed >= self.required
    }

    /// Counter text, e.g. `Outlets: 1/4`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{}: {}/{}", self.kind.plural(), self.placed, self.required)
    }
}

/// Wording used when a report is turned into a user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportMessages {
    /// Shown when every rule holds.
    pub success: String,
    /// First line shown above the list of failures.
    pub failure_heading: String,
}

impl Default for ReportMessages {
    fn default() -> Self {
        Self {
            success: "Diagram verified successfully!".to_string(),
            failure_heading: "Diagram issues found:".to_string(),
        }
    }
}

/// Outcome of a validation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    /// Messages of the failed rules, in rule order.
    pub failures: Vec<String>,
}

impl ValidationReport {
    /// Evaluate `rules` in order, then the context `quotas`.
    #[must_use]
    pub fn run(rules: &[ValidationRule], quotas: &[Quota], doc: &DiagramDoc) -> Self {
        let mut failures: Vec<String> = rules
            .iter()
            .filter(|rule| !rule.holds(doc))
            .map(|rule| rule.message().to_string())
            .collect();

        failures.extend(
            quotas
                .iter()
                .map(|q| Tally::of(*q, doc))
                .filter(|t| !t.is_met())
                .map(|t| format!("{} placed {} of {} required", t.kind.plural(), t.placed, t.required)),
        );

        Self { failures }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// The text handed to the notification collaborator.
    #[must_use]
    pub fn message(&self, wording: &ReportMessages) -> String {
        if self.is_success() {
            wording.success.clone()
        } else {
            format!("{}\n{}", wording.failure_heading, self.failures.join("\n"))
        }
    }
}
