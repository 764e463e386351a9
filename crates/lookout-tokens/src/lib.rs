//! # lookout-tokens
//!
//! Helpers that turn design-system tokens into strings UI components can put
//! straight into markup or inline styles.
//!
//! | Helper | Input | Output | Unknown key |
//! |--------|-------|--------|-------------|
//! | [`merge_class_names`] / [`classes!`] | conditional class inputs | `"a b c"` | n/a |
//! | [`merge_styles`] | two style maps | merged map | n/a |
//! | [`resolve_spacing`] | `xs`..`2xl` | `var(--space-N)` | `md` value |
//! | [`resolve_color`] | name, optional shade | `var(--color-name[-shade])` | n/a |
//! | [`resolve_typography`] | `h1`, `body`, ... | class name | `body-base` |
//!
//! Lookups never fail: an unrecognized key resolves to the table's default.
//! Callers that want to reject unknown keys can parse into [`Spacing`] or
//! [`Typography`] instead.
//!
//! ```
//! use lookout_tokens::{classes, resolve_color, resolve_spacing, resolve_typography};
//!
//! assert_eq!(resolve_spacing("xl"), "var(--space-8)");
//! assert_eq!(resolve_color("blue", Some(500)), "var(--color-blue-500)");
//! assert_eq!(resolve_typography("h2"), "heading-secondary");
//!
//! let is_active = true;
//! assert_eq!(classes!("btn", ("btn-active", is_active), None::<&str>), "btn btn-active");
//! ```

pub mod classes;
pub mod color;
pub mod error;
pub mod spacing;
pub mod styles;
pub mod typography;

pub use classes::{merge_class_names, ClassValue};
pub use color::resolve_color;
pub use error::UnknownToken;
pub use spacing::{resolve_spacing, Spacing};
pub use styles::{merge_styles, Style, StyleValue};
pub use typography::{resolve_typography, Typography};
