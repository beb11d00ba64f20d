// SPDX-FileCopyrightText: 2026 Uikit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Terminal rendering of the component listing.

use std::fmt::Write;

use uikit_core::ComponentList;

/// Render `list` as human-readable text, one block per component in catalog
/// order, ending with a `Total: <n>` line.
///
/// The whole listing is built before the caller prints anything.
pub fn render_listing(list: &ComponentList, use_color: bool) -> String {
    let mut out = String::new();
    out.push('\n');
    let heading = "Available components:";
    if use_color {
        use colored::Colorize;
        let _ = writeln!(out, "{}", heading.bold());
    } else {
        let _ = writeln!(out, "{heading}");
    }
    out.push('\n');

    for component in &list.components {
        if use_color {
            use colored::Colorize;
            let _ = writeln!(
                out,
                "  {} {}",
                component.name.green().bold(),
                format!("({})", component.slug).dimmed()
            );
        } else {
            let _ = writeln!(out, "  {} ({})", component.name, component.slug);
        }
        if !component.description.is_empty() {
            let _ = writeln!(out, "    {}", component.description);
        }
        let _ = writeln!(
            out,
            "    Category: {} | Version: {}",
            component.category, component.version
        );
        out.push('\n');
    }

    let _ = write!(out, "Total: {}", list.total);
    out
}
