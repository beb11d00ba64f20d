// SPDX-FileCopyrightText: 2026 Uikit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Client side of the uikit registry.
//!
//! [`RegistryClient`] talks to the registry service. [`install`] resolves a
//! slug and writes its source into a project directory. [`render_listing`]
//! formats the catalog for a terminal.

pub mod client;
pub mod install;
pub mod listing;

pub use client::RegistryClient;
pub use install::{export_name, import_snippet, install, write_component, InstallOptions, InstallResult};
pub use listing::render_listing;
