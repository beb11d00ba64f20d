// SPDX-FileCopyrightText: 2026 Uikit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Component records and the wire types shared by the registry service and its clients.

use serde::{Deserialize, Serialize};

/// Slug shadowed by the enumerate route (`/api/components/list`).
pub const RESERVED_SLUG: &str = "list";

/// Error body returned by the registry when a slug is absent.
pub const NOT_FOUND_MESSAGE: &str = "Component not found";

/// One installable entry in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentRecord {
    /// Unique lowercase identifier; API path segment and filename stem.
    pub slug: String,
    /// Display name.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// Grouping label, e.g. "Form" or "Layout".
    pub category: String,
    /// Semver-shaped version. Carried verbatim, never compared.
    pub version: String,
    /// Payload written to disk on install.
    pub source: String,
}

impl ComponentRecord {
    /// Metadata view of this record, without the payload.
    pub fn summary(&self) -> ComponentSummary {
        ComponentSummary {
            name: self.name.clone(),
            slug: self.slug.clone(),
            description: self.description.clone(),
            category: self.category.clone(),
            version: self.version.clone(),
        }
    }
}

/// Listing entry: a component's metadata without its source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentSummary {
    pub name: String,
    pub slug: String,
    pub description: String,
    pub category: String,
    pub version: String,
}

/// Response body for `GET /api/components/list`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentList {
    pub components: Vec<ComponentSummary>,
    pub total: usize,
}

impl ComponentList {
    /// Builds a listing whose `total` matches the number of entries.
    pub fn new(components: Vec<ComponentSummary>) -> Self {
        let total = components.len();
        Self { components, total }
    }
}

/// Structured error body returned by the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Why a string is not an acceptable slug.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SlugError {
    #[error("slug must not be empty")]
    Empty,
    #[error("`{slug}` is reserved", slug = RESERVED_SLUG)]
    Reserved,
    #[error("slug must start with a lowercase letter or digit")]
    InvalidStart,
    #[error("invalid character {0:?} (allowed: a-z, 0-9, '-')")]
    InvalidChar(char),
}

/// Checks that `slug` is usable both as a URL path segment and as a filename stem.
pub fn validate_slug(slug: &str) -> Result<(), SlugError> {
    let first = slug.chars().next().ok_or(SlugError::Empty)?;
    if slug == RESERVED_SLUG {
        return Err(SlugError::Reserved);
    }
    if !(first.is_ascii_lowercase() || first.is_ascii_digit()) {
        return Err(SlugError::InvalidStart);
    }
    if let Some(c) = slug
        .chars()
        .find(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-'))
    {
        return Err(SlugError::InvalidChar(c));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn summary_drops_source() {
        let record = ComponentRecord {
            slug: "button".into(),
            name: "Button".into(),
            description: "A button".into(),
            category: "Form".into(),
            version: "1.0.0".into(),
            source: "export const Button = () => null;".into(),
        };
        let summary = record.summary();
        assert_eq!(summary.slug, "button");
        let json = serde_json::to_value(&summary).unwrap();
        assert!(json.get("source").is_none());
        assert_eq!(json["version"], "1.0.0");
    }

    #[test]
    fn component_list_total_matches_len() {
        let list = ComponentList::new(vec![]);
        assert_eq!(list.total, 0);
        let json = serde_json::to_string(&list).unwrap();
        assert_eq!(json, r#"{"components":[],"total":0}"#);
    }

    #[test]
    fn error_body_shape() {
        let body = ErrorBody {
            error: NOT_FOUND_MESSAGE.to_string(),
        };
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"error":"Component not found"}"#
        );
    }

    #[test]
    fn accepts_plain_slugs() {
        assert!(validate_slug("button").is_ok());
        assert!(validate_slug("date-picker").is_ok());
        assert!(validate_slug("h1").is_ok());
        assert!(validate_slug("3d-card").is_ok());
    }

    #[test]
    fn rejects_bad_slugs() {
        assert_eq!(validate_slug(""), Err(SlugError::Empty));
        assert_eq!(validate_slug("list"), Err(SlugError::Reserved));
        assert_eq!(validate_slug("-button"), Err(SlugError::InvalidStart));
        assert_eq!(validate_slug("Button"), Err(SlugError::InvalidStart));
        assert_eq!(validate_slug("../etc"), Err(SlugError::InvalidStart));
        assert_eq!(validate_slug("a/b"), Err(SlugError::InvalidChar('/')));
        assert_eq!(validate_slug("a.b"), Err(SlugError::InvalidChar('.')));
    }

    #[test]
    fn slug_error_messages() {
        assert_eq!(SlugError::Empty.to_string(), "slug must not be empty");
        assert_eq!(SlugError::Reserved.to_string(), "`list` is reserved");
        assert_eq!(
            SlugError::InvalidStart.to_string(),
            "slug must start with a lowercase letter or digit"
        );
        assert_eq!(
            SlugError::InvalidChar('/').to_string(),
            "invalid character '/' (allowed: a-z, 0-9, '-')"
        );
        let boxed: Box<dyn std::error::Error + Send + Sync> = Box::new(SlugError::Empty);
        assert!(boxed.source().is_none());
    }

    proptest! {
        #[test]
        fn valid_slugs_never_contain_path_separators(s in "\\PC{0,16}") {
            if validate_slug(&s).is_ok() {
                prop_assert!(!s.contains('/'));
                prop_assert!(!s.contains('\\'));
                prop_assert!(!s.contains('.'));
            }
        }
    }
}
