//! Spacing scale.

use crate::error::UnknownToken;
use std::fmt;
use std::str::FromStr;

/// Spacing size keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Spacing {
    Xs,
    Sm,
    #[default]
    Md,
    Lg,
    Xl,
    Xxl,
}

impl Spacing {
    /// Every size, smallest first.
    pub const ALL: [Spacing; 6] = [
        Spacing::Xs,
        Spacing::Sm,
        Spacing::Md,
        Spacing::Lg,
        Spacing::Xl,
        Spacing::Xxl,
    ];

    /// Keyword used by components, e.g. `"2xl"`.
    pub const fn key(self) -> &'static str {
        match self {
            Spacing::Xs => "xs",
            Spacing::Sm => "sm",
            Spacing::Md => "md",
            Spacing::Lg => "lg",
            Spacing::Xl => "xl",
            Spacing::Xxl => "2xl",
        }
    }

    /// CSS custom-property reference for this size.
    pub const fn as_css(self) -> &'static str {
        match self {
            Spacing::Xs => "var(--space-1)",
            Spacing::Sm => "var(--space-2)",
            Spacing::Md => "var(--space-4)",
            Spacing::Lg => "var(--space-6)",
            Spacing::Xl => "var(--space-8)",
            Spacing::Xxl => "var(--space-12)",
        }
    }

    /// Size for a key such as `"2xl"`, or `None` if unknown.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.key() == key)
    }
}

impl FromStr for Spacing {
    type Err = UnknownToken;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s).ok_or_else(|| UnknownToken {
            kind: "spacing",
            key: s.to_string(),
        })
    }
}

impl fmt::Display for Spacing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Spacing variable for `key`, or the `md` value if `key` is unknown.
pub fn resolve_spacing(key: &str) -> &'static str {
    Spacing::from_key(key).unwrap_or_default().as_css()
}
