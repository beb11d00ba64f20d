// SPDX-FileCopyrightText: 2026 Uikit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Built-in component catalog.
//!
//! The registry serves these three components when no catalog manifest is
//! configured. No files are read.

use uikit_core::ComponentRecord;

use crate::store::Catalog;

const BUTTON_SOURCE: &str = r#"// Button component source code
import React from 'react';

export const Button = ({ children, variant = 'primary', ...props }) => {
  return (
    <button 
      className={`btn btn-${variant}`}
      {...props}
    >
      {children}
    </button>
  );
};"#;

const INPUT_SOURCE: &str = r#"// Input component source code  
import React from 'react';

export const Input = ({ label, ...props }) => {
  return (
    <div>
      {label && <label>{label}</label>}
      <input {...props} />
    </div>
  );
};"#;

const CARD_SOURCE: &str = r#"// Card component source code
import React from 'react';

export const Card = ({ children, ...props }) => {
  return (
    <div className="card" {...props}>
      {children}
    </div>
  );
};"#;

fn builtin_records() -> Vec<ComponentRecord> {
    vec![
        ComponentRecord {
            slug: "button".to_string(),
            name: "Button".to_string(),
            description: "A customizable button component with multiple variants and sizes."
                .to_string(),
            category: "Form".to_string(),
            version: "1.0.0".to_string(),
            source: BUTTON_SOURCE.to_string(),
        },
        ComponentRecord {
            slug: "input".to_string(),
            name: "Input".to_string(),
            description: "A versatile input component with labels, validation, and helper text."
                .to_string(),
            category: "Form".to_string(),
            version: "1.0.0".to_string(),
            source: INPUT_SOURCE.to_string(),
        },
        ComponentRecord {
            slug: "card".to_string(),
            name: "Card".to_string(),
            description: "A flexible container component for organizing content.".to_string(),
            category: "Layout".to_string(),
            version: "1.0.0".to_string(),
            source: CARD_SOURCE.to_string(),
        },
    ]
}

/// Returns the built-in catalog: `button`, `input`, `card`, in that order.
pub fn builtin_catalog() -> Catalog {
    Catalog::from_fixed(builtin_records())
}
