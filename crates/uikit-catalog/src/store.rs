// SPDX-FileCopyrightText: 2026 Uikit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Insertion-ordered, immutable store of component records.
//!
//! Records are kept in a `Vec` in the order they were added, with a slug
//! index for lookups. Once [`CatalogBuilder::build`] returns, nothing can
//! change the catalog.

use std::collections::HashMap;

use uikit_core::{validate_slug, ComponentRecord, ComponentSummary, UikitError};

/// Read access to a component catalog.
///
/// This is the only surface the registry service sees.
pub trait CatalogStore: Send + Sync {
    /// Look up a record by slug.
    fn get(&self, slug: &str) -> Option<ComponentRecord>;

    /// Metadata for every record, in catalog order.
    fn list(&self) -> Vec<ComponentSummary>;

    /// Number of records.
    fn len(&self) -> usize {
        self.list().len()
    }

    /// Returns true if the catalog holds no records.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A frozen catalog of component records.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: Vec<ComponentRecord>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Start building a new catalog.
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::default()
    }

    /// Build a catalog from records, rejecting duplicate or invalid slugs.
    pub fn from_records(
        records: impl IntoIterator<Item = ComponentRecord>,
    ) -> Result<Self, UikitError> {
        let mut builder = Self::builder();
        for record in records {
            builder.add(record)?;
        }
        Ok(builder.build())
    }

    /// Index records known to have valid, distinct slugs, skipping the
    /// builder's checks.
    pub(crate) fn from_fixed(records: Vec<ComponentRecord>) -> Self {
        let index = records
            .iter()
            .enumerate()
            .map(|(i, record)| (record.slug.clone(), i))
            .collect();
        Self { records, index }
    }

    /// Borrowing lookup by slug.
    pub fn record(&self, slug: &str) -> Option<&ComponentRecord> {
        self.index.get(slug).map(|&i| &self.records[i])
    }

    /// Iterate records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &ComponentRecord> {
        self.records.iter()
    }
}

impl CatalogStore for Catalog {
    fn get(&self, slug: &str) -> Option<ComponentRecord> {
        self.record(slug).cloned()
    }

    fn list(&self) -> Vec<ComponentSummary> {
        self.records.iter().map(ComponentRecord::summary).collect()
    }

    fn len(&self) -> usize {
        self.records.len()
    }
}

/// Accumulates records before the catalog is frozen.
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    catalog: Catalog,
}

impl CatalogBuilder {
    /// Add a record. Fails on an invalid slug or a slug already present.
    pub fn add(&mut self, record: ComponentRecord) -> Result<&mut Self, UikitError> {
        validate_slug(&record.slug).map_err(|e| {
            UikitError::Catalog(format!("invalid slug `{}`: {e}", record.slug))
        })?;
        if self.catalog.index.contains_key(&record.slug) {
            return Err(UikitError::Catalog(format!(
                "duplicate slug `{}`",
                record.slug
            )));
        }
        let position = self.catalog.records.len();
        self.catalog.index.insert(record.slug.clone(), position);
        self.catalog.records.push(record);
        Ok(self)
    }

    /// Freeze the catalog.
    pub fn build(self) -> Catalog {
        tracing::debug!(count = self.catalog.records.len(), "catalog built");
        self.catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(slug: &str) -> ComponentRecord {
        ComponentRecord {
            slug: slug.to_string(),
            name: slug.to_uppercase(),
            description: format!("Test component {slug}"),
            category: "Test".to_string(),
            version: "0.1.0".to_string(),
            source: format!("// {slug}\n"),
        }
    }

    #[test]
    fn get_returns_record_with_requested_slug() {
        let catalog =
            Catalog::from_records(vec![record("button"), record("input"), record("card")])
                .unwrap();
        for slug in ["button", "input", "card"] {
            assert_eq!(catalog.get(slug).unwrap().slug, slug);
        }
    }

    #[test]
    fn get_absent_slug_is_none() {
        let catalog = Catalog::from_records(vec![record("button")]).unwrap();
        assert!(catalog.get("missing").is_none());
        assert!(catalog.get("").is_none());
    }

    #[test]
    fn list_preserves_insertion_order() {
        let catalog =
            Catalog::from_records(vec![record("zebra"), record("alpha"), record("middle")])
                .unwrap();
        let slugs: Vec<String> = catalog.list().into_iter().map(|c| c.slug).collect();
        assert_eq!(slugs, vec!["zebra", "alpha", "middle"]);
    }

    #[test]
    fn list_is_stable_across_calls() {
        let catalog =
            Catalog::from_records(vec![record("b"), record("a"), record("c")]).unwrap();
        let first = catalog.list();
        for _ in 0..5 {
            assert_eq!(catalog.list(), first);
        }
    }

    #[test]
    fn duplicate_slug_is_rejected() {
        let err = Catalog::from_records(vec![record("button"), record("button")]).unwrap_err();
        assert!(err.to_string().contains("duplicate slug `button`"));
    }

    #[test]
    fn invalid_and_reserved_slugs_are_rejected() {
        assert!(Catalog::from_records(vec![record("Button")]).is_err());
        assert!(Catalog::from_records(vec![record("list")]).is_err());
        assert!(Catalog::from_records(vec![record("../x")]).is_err());
    }

    #[test]
    fn len_and_is_empty() {
        let empty = Catalog::builder().build();
        assert!(CatalogStore::is_empty(&empty));
        assert_eq!(CatalogStore::len(&empty), 0);

        let mut builder = Catalog::builder();
        builder.add(record("a")).unwrap().add(record("b")).unwrap();
        let catalog = builder.build();
        assert_eq!(CatalogStore::len(&catalog), 2);
        assert!(!CatalogStore::is_empty(&catalog));
    }

    #[test]
    fn works_behind_a_trait_object() {
        let store: std::sync::Arc<dyn CatalogStore> =
            std::sync::Arc::new(Catalog::from_records(vec![record("button")]).unwrap());
        assert_eq!(store.get("button").unwrap().source, "// button\n");
        assert_eq!(store.list().len(), 1);
    }
}
