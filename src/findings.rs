//! Validation findings and report rendering.

use std::cmp::Reverse;
use std::collections::HashSet;
use std::fmt;

use crate::key::ServiceKey;

/// Severity of a validation finding.
///
/// Warnings surface suspicious configuration without failing validation;
/// only errors make the overall result invalid. The derived ordering sorts
/// `Warning < Error`, which report rendering reverses so errors lead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Severity {
    /// Surfaced but tolerated, e.g. lifetime capture through a factory
    Warning,
    /// Makes the overall validation result invalid
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "Warning"),
            Severity::Error => write!(f, "Error"),
        }
    }
}

/// One validation result: which service the complaint concerns and why.
///
/// Findings live in a `HashSet`, so detecting the same problem along several
/// dependency paths collapses to a single entry. Equality covers all three
/// fields.
///
/// # Examples
///
/// ```rust
/// use wirecheck::{Finding, ServiceKey, Severity};
///
/// let finding = Finding::error(
///     ServiceKey::Trait("dyn app::Mailer"),
///     "failed to resolve dyn app::Mailer",
/// );
/// assert_eq!(finding.severity, Severity::Error);
/// assert_eq!(
///     finding.to_string(),
///     "[Error] dyn app::Mailer: failed to resolve dyn app::Mailer"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Finding {
    /// Whether this invalidates the run
    pub severity: Severity,
    /// The service identity the complaint concerns
    pub service: ServiceKey,
    /// Human-readable explanation
    pub message: String,
}

impl Finding {
    /// Error-severity finding.
    pub fn error(service: ServiceKey, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            service,
            message: message.into(),
        }
    }

    /// Warning-severity finding.
    pub fn warning(service: ServiceKey, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            service,
            message: message.into(),
        }
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.severity, self.service, self.message)
    }
}

/// Renders findings into the report string consumers fail builds on.
///
/// Sorted by descending severity, then service name and message for
/// deterministic output from the unordered set.
pub fn render_report(findings: &HashSet<Finding>) -> String {
    let mut ordered: Vec<&Finding> = findings.iter().collect();
    ordered.sort_by_key(|f| (Reverse(f.severity), f.service.display_name(), f.message.clone()));

    let mut report = String::new();
    for finding in ordered {
        report.push_str(&finding.to_string());
        report.push('\n');
    }
    report
}
