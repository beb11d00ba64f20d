// SPDX-FileCopyrightText: 2026 Uikit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the uikit component registry.
//!
//! Holds the component data model, the JSON shapes exchanged between the
//! registry service and its clients, slug rules, and the shared error type.

pub mod error;
pub mod types;

pub use error::UikitError;
pub use types::{
    validate_slug, ComponentList, ComponentRecord, ComponentSummary, ErrorBody, SlugError,
    NOT_FOUND_MESSAGE, RESERVED_SLUG,
};
