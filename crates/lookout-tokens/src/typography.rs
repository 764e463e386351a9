//! Typography variants.

use crate::error::UnknownToken;
use std::fmt;
use std::str::FromStr;

/// Typography variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Typography {
    H1,
    H2,
    H3,
    H4,
    Subtitle,
    BodyLarge,
    #[default]
    Body,
    BodySmall,
    Caption,
    Label,
    Code,
}

impl Typography {
    /// Every variant, headings first.
    pub const ALL: [Typography; 11] = [
        Typography::H1,
        Typography::H2,
        Typography::H3,
        Typography::H4,
        Typography::Subtitle,
        Typography::BodyLarge,
        Typography::Body,
        Typography::BodySmall,
        Typography::Caption,
        Typography::Label,
        Typography::Code,
    ];

    /// Variant key used by components, e.g. `"body-sm"`.
    pub const fn key(self) -> &'static str {
        match self {
            Typography::H1 => "h1",
            Typography::H2 => "h2",
            Typography::H3 => "h3",
            Typography::H4 => "h4",
            Typography::Subtitle => "subtitle",
            Typography::BodyLarge => "body-lg",
            Typography::Body => "body",
            Typography::BodySmall => "body-sm",
            Typography::Caption => "caption",
            Typography::Label => "label",
            Typography::Code => "code",
        }
    }

    /// CSS class implementing the variant.
    pub const fn class_name(self) -> &'static str {
        match self {
            Typography::H1 => "heading-primary",
            Typography::H2 => "heading-secondary",
            Typography::H3 => "heading-tertiary",
            Typography::H4 => "heading-quaternary",
            Typography::Subtitle => "subtitle-base",
            Typography::BodyLarge => "body-large",
            Typography::Body => "body-base",
            Typography::BodySmall => "body-small",
            Typography::Caption => "caption-base",
            Typography::Label => "label-base",
            Typography::Code => "code-inline",
        }
    }

    /// Variant for a key such as `"body-sm"`, or `None` if unknown.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.key() == key)
    }
}

impl FromStr for Typography {
    type Err = UnknownToken;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s).ok_or_else(|| UnknownToken {
            kind: "typography",
            key: s.to_string(),
        })
    }
}

impl fmt::Display for Typography {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Class name for `key`, or `"body-base"` if `key` is unknown.
pub fn resolve_typography(key: &str) -> &'static str {
    Typography::from_key(key).unwrap_or_default().class_name()
}
