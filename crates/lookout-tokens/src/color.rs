//! Color references.
//!
//! Colors are not looked up in a table: any name (and shade) is turned into
//! a custom-property reference, and the stylesheet decides whether it exists.

/// CSS variable for a color, e.g. `var(--color-blue-500)` or `var(--color-blue)`.
pub fn resolve_color(name: &str, shade: Option<u16>) -> String {
    match shade {
        Some(shade) => format!("var(--color-{name}-{shade})"),
        None => format!("var(--color-{name})"),
    }
}
