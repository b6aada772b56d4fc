//! Readiness report over resolved secrets.
//!
//! Advisory only: values are reported on, never changed or rejected.

use serde::Serialize;

use crate::core::names::SecretName;
use crate::core::store::{Secrets, Source};

/// State of one value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Filled in.
    Set,
    /// Still the template value.
    Placeholder,
    Empty,
}

/// One line of the report.
#[derive(Debug, Clone, Serialize)]
pub struct Entry {
    pub name: SecretName,
    pub source: Source,
    pub status: Status,
    pub fingerprint: String,
}

/// Report over all six names.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub entries: Vec<Entry>,
}

impl Report {
    /// True when nothing is empty or left as a placeholder.
    pub fn is_ready(&self) -> bool {
        self.entries.iter().all(|e| e.status == Status::Set)
    }

    /// Names that still need a value.
    pub fn unset(&self) -> Vec<SecretName> {
        self.entries
            .iter()
            .filter(|e| e.status != Status::Set)
            .map(|e| e.name)
            .collect()
    }
}

/// Inspect every resolved value.
pub fn report(secrets: &Secrets) -> Report {
    let entries = secrets
        .iter()
        .map(|(name, value, source)| {
            let status = if value.is_empty() {
                Status::Empty
            } else if value.expose() == name.placeholder() {
                Status::Placeholder
            } else {
                Status::Set
            };
            Entry {
                name,
                source,
                status,
                fingerprint: value.fingerprint(),
            }
        })
        .collect();

    Report { entries }
}
