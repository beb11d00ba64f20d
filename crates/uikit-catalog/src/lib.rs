// SPDX-FileCopyrightText: 2026 Uikit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Component catalog store, built-in catalog, and catalog manifests.
//!
//! A [`Catalog`] is assembled once through [`CatalogBuilder`] and is read-only
//! afterwards. The registry service depends only on the [`CatalogStore`] trait,
//! so a catalog can come from the compiled-in set, a TOML manifest, or any
//! other backing store.

pub mod builtin;
pub mod manifest;
pub mod store;

pub use builtin::builtin_catalog;
pub use manifest::{load_catalog_manifest, parse_catalog_manifest};
pub use store::{Catalog, CatalogBuilder, CatalogStore};
