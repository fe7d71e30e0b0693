//! Ordered, identifier-unique record collections.

use std::collections::HashSet;

use folio_types::{Experience, Project, ProjectStatus};

/// A record addressable by a unique string identifier.
pub trait Record {
    fn record_id(&self) -> &str;
}

/// A record that can be featured and carries a delivery status.
pub trait Showcase: Record {
    fn is_featured(&self) -> bool;
    fn status(&self) -> ProjectStatus;
}

impl Record for Project {
    fn record_id(&self) -> &str {
        self.slug.as_str()
    }
}

impl Showcase for Project {
    fn is_featured(&self) -> bool {
        self.featured
    }

    fn status(&self) -> ProjectStatus {
        self.status
    }
}

impl Record for Experience {
    fn record_id(&self) -> &str {
        self.id.as_str()
    }
}

/// Immutable ordered records with unique identifiers.
///
/// Invariant: no two records share an identifier (checked in [`Collection::new`]).
#[derive(Debug, Clone)]
pub struct Collection<R> {
    records: Vec<R>,
}

impl<R: Record> Collection<R> {
    /// Build a collection, returning the first duplicated identifier on failure.
    pub fn new(records: Vec<R>) -> Result<Self, String> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.record_id()) {
                return Err(record.record_id().to_string());
            }
        }
        Ok(Self { records })
    }

    #[must_use]
    pub fn all(&self) -> &[R] {
        &self.records
    }

    /// Look up a record by identifier. `None` is the expected not-found result.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&R> {
        self.records.iter().find(|record| record.record_id() == id)
    }

    /// Identifiers in order, for static path generation.
    #[must_use]
    pub fn ids(&self) -> Vec<&str> {
        self.records.iter().map(Record::record_id).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<R: Showcase> Collection<R> {
    /// Featured records in original order, at most `limit` of them.
    #[must_use]
    pub fn featured(&self, limit: usize) -> Vec<&R> {
        self.records
            .iter()
            .filter(|record| record.is_featured())
            .take(limit)
            .collect()
    }

    #[must_use]
    pub fn by_status(&self, status: ProjectStatus) -> Vec<&R> {
        self.records
            .iter()
            .filter(|record| record.status() == status)
            .collect()
    }
}

impl<R> Default for Collection<R> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}
