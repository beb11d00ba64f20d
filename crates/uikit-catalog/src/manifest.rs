// SPDX-FileCopyrightText: 2026 Uikit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Catalog manifests: a catalog described by a TOML file.
//!
//! ```toml
//! [[component]]
//! slug = "button"
//! name = "Button"
//! description = "A customizable button"
//! category = "Form"
//! version = "1.0.0"
//! source_file = "button.tsx"   # or: source = "..."
//! ```
//!
//! `source_file` is resolved relative to the manifest's directory.

use std::path::Path;

use serde::Deserialize;
use uikit_core::{ComponentRecord, UikitError};

use crate::store::Catalog;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogManifestFile {
    #[serde(default)]
    component: Vec<ComponentSection>,
}

/// One `[[component]]` table.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ComponentSection {
    slug: String,
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    category: String,
    version: String,
    source: Option<String>,
    source_file: Option<String>,
}

/// Parse a catalog manifest from TOML content.
///
/// `base_dir` anchors relative `source_file` paths. Components keep the order
/// in which they appear in the manifest.
pub fn parse_catalog_manifest(toml_content: &str, base_dir: &Path) -> Result<Catalog, UikitError> {
    let file: CatalogManifestFile = toml::from_str(toml_content)
        .map_err(|e| UikitError::Catalog(format!("invalid catalog manifest: {e}")))?;

    let mut builder = Catalog::builder();
    for section in file.component {
        if section.name.trim().is_empty() {
            return Err(UikitError::Catalog(format!(
                "catalog manifest: component `{}` has an empty name",
                section.slug
            )));
        }
        if section.version.trim().is_empty() {
            return Err(UikitError::Catalog(format!(
                "catalog manifest: component `{}` has an empty version",
                section.slug
            )));
        }

        let source = match (section.source, section.source_file) {
            (Some(inline), None) => inline,
            (None, Some(rel)) => {
                let path = base_dir.join(&rel);
                std::fs::read_to_string(&path).map_err(|e| {
                    UikitError::Catalog(format!(
                        "catalog manifest: cannot read source for `{}` from {}: {e}",
                        section.slug,
                        path.display()
                    ))
                })?
            }
            (Some(_), Some(_)) => {
                return Err(UikitError::Catalog(format!(
                    "catalog manifest: component `{}` sets both `source` and `source_file`",
                    section.slug
                )));
            }
            (None, None) => {
                return Err(UikitError::Catalog(format!(
                    "catalog manifest: component `{}` needs `source` or `source_file`",
                    section.slug
                )));
            }
        };

        builder.add(ComponentRecord {
            slug: section.slug,
            name: section.name,
            description: section.description,
            category: section.category,
            version: section.version,
            source,
        })?;
    }

    Ok(builder.build())
}

/// Load a catalog manifest from disk.
pub fn load_catalog_manifest(path: &Path) -> Result<Catalog, UikitError> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        UikitError::Catalog(format!(
            "cannot read catalog manifest {}: {e}",
            path.display()
        ))
    })?;
    let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
    let catalog = parse_catalog_manifest(&content, base_dir)?;
    tracing::info!(
        path = %path.display(),
        count = catalog.iter().count(),
        "loaded catalog manifest"
    );
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::CatalogStore;

    #[test]
    fn parse_inline_sources_in_order() {
        let toml = r#"
[[component]]
slug = "card"
name = "Card"
description = "A container"
category = "Layout"
version = "1.0.0"
source = "export const Card = () => null;"

[[component]]
slug = "button"
name = "Button"
version = "2.0.0"
source = "export const Button = () => null;"
"#;
        let catalog = parse_catalog_manifest(toml, Path::new(".")).unwrap();
        let slugs: Vec<String> = catalog.list().into_iter().map(|c| c.slug).collect();
        assert_eq!(slugs, vec!["card", "button"]);
        let button = catalog.get("button").unwrap();
        assert_eq!(button.version, "2.0.0");
        assert_eq!(button.category, "");
        assert_eq!(button.source, "export const Button = () => null;");
    }

    #[test]
    fn empty_manifest_is_empty_catalog() {
        let catalog = parse_catalog_manifest("", Path::new(".")).unwrap();
        assert!(CatalogStore::is_empty(&catalog));
    }

    #[test]
    fn source_file_is_read_relative_to_base_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("input.tsx"), "export const Input = 1;\n").unwrap();
        let toml = r#"
[[component]]
slug = "input"
name = "Input"
version = "1.0.0"
source_file = "input.tsx"
"#;
        let catalog = parse_catalog_manifest(toml, dir.path()).unwrap();
        assert_eq!(catalog.get("input").unwrap().source, "export const Input = 1;\n");
    }

    #[test]
    fn load_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("card.tsx"), "card body").unwrap();
        let manifest = dir.path().join("catalog.toml");
        std::fs::write(
            &manifest,
            "[[component]]\nslug = \"card\"\nname = \"Card\"\nversion = \"1.0.0\"\nsource_file = \"card.tsx\"\n",
        )
        .unwrap();
        let catalog = load_catalog_manifest(&manifest).unwrap();
        assert_eq!(catalog.get("card").unwrap().source, "card body");
    }

    #[test]
    fn missing_source_file_is_an_error() {
        let toml = r#"
[[component]]
slug = "ghost"
name = "Ghost"
version = "1.0.0"
source_file = "does-not-exist.tsx"
"#;
        let err = parse_catalog_manifest(toml, Path::new("/nonexistent")).unwrap_err();
        assert!(err.to_string().contains("cannot read source for `ghost`"));
    }

    #[test]
    fn both_or_neither_source_is_an_error() {
        let both = r#"
[[component]]
slug = "x"
name = "X"
version = "1"
source = "a"
source_file = "b"
"#;
        assert!(parse_catalog_manifest(both, Path::new(".")).is_err());

        let neither = r#"
[[component]]
slug = "x"
name = "X"
version = "1"
"#;
        assert!(parse_catalog_manifest(neither, Path::new(".")).is_err());
    }

    #[test]
    fn duplicate_slugs_are_rejected() {
        let toml = r#"
[[component]]
slug = "button"
name = "Button"
version = "1.0.0"
source = "a"

[[component]]
slug = "button"
name = "Button 2"
version = "1.0.1"
source = "b"
"#;
        let err = parse_catalog_manifest(toml, Path::new(".")).unwrap_err();
        assert!(err.to_string().contains("duplicate slug"));
    }

    #[test]
    fn unknown_field_is_rejected() {
        let toml = r#"
[[component]]
slug = "button"
name = "Button"
version = "1.0.0"
source = "a"
licence = "MIT"
"#;
        let err = parse_catalog_manifest(toml, Path::new(".")).unwrap_err();
        assert!(err.to_string().contains("invalid catalog manifest"));
    }

    #[test]
    fn empty_name_is_rejected() {
        let toml = r#"
[[component]]
slug = "button"
name = ""
version = "1.0.0"
source = "a"
"#;
        assert!(parse_catalog_manifest(toml, Path::new(".")).is_err());
    }
}
