// SPDX-License-Identifier: MPL-2.0
//! Notification kinds and their icon tokens.

use crate::ui::design_tokens::palette;
use iced::Color;

/// Closed set of notification kinds.
///
/// The kind only selects the type icon and accent color; it never changes
/// timing. A toast without a kind renders no type icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Success,
    Info,
    Warning,
    Error,
}

impl Kind {
    pub const ALL: [Kind; 4] = [Kind::Success, Kind::Info, Kind::Warning, Kind::Error];

    /// Parses a kind name, case insensitive.
    ///
    /// Unrecognized names yield `None`, which renders like an absent kind.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "success" => Some(Kind::Success),
            "info" => Some(Kind::Info),
            "warning" => Some(Kind::Warning),
            "error" => Some(Kind::Error),
            _ => None,
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Kind::Success => "success",
            Kind::Info => "info",
            Kind::Warning => "warning",
            Kind::Error => "error",
        }
    }

    /// Icon style token for this kind.
    #[must_use]
    pub fn icon_token(self) -> &'static str {
        match self {
            Kind::Success => "circle-check",
            Kind::Info => "information",
            Kind::Warning => "warning",
            Kind::Error => "circle-cross",
        }
    }

    /// Accent color used for the icon and the toast border.
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Kind::Success => palette::SUCCESS_500,
            Kind::Info => palette::INFO_500,
            Kind::Warning => palette::WARNING_500,
            Kind::Error => palette::ERROR_500,
        }
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_tokens_follow_fixed_mapping() {
        assert_eq!(Kind::Success.icon_token(), "circle-check");
        assert_eq!(Kind::Info.icon_token(), "information");
        assert_eq!(Kind::Warning.icon_token(), "warning");
        assert_eq!(Kind::Error.icon_token(), "circle-cross");
    }

    #[test]
    fn parse_accepts_known_names_case_insensitively() {
        for kind in Kind::ALL {
            assert_eq!(Kind::parse(kind.name()), Some(kind));
            assert_eq!(Kind::parse(&kind.name().to_uppercase()), Some(kind));
        }
        assert_eq!(Kind::parse("  Error "), Some(Kind::Error));
    }

    #[test]
    fn parse_rejects_unknown_names() {
        assert_eq!(Kind::parse("fatal"), None);
        assert_eq!(Kind::parse(""), None);
    }

    #[test]
    fn kind_colors_are_distinct() {
        for (i, a) in Kind::ALL.iter().enumerate() {
            for b in &Kind::ALL[i + 1..] {
                assert_ne!(a.color(), b.color());
            }
        }
    }
}
