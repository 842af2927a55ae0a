//! Color theme preference.

crate::vocabulary! {
    /// Color theme preference.
    pub enum Theme {
        Dark => "dark",
        Light => "light",
        /// Follow the platform's dark/light preference.
        System => "system",
        HighContrast => "high-contrast",
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::System
    }
}

impl Theme {
    /// The concrete theme to paint with.
    pub fn applied(self, prefers_dark: bool) -> Theme {
        match self {
            Self::System if prefers_dark => Self::Dark,
            Self::System => Self::Light,
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Vocabulary;

    #[test]
    fn system_resolves_from_platform_preference() {
        assert_eq!(Theme::System.applied(true), Theme::Dark);
        assert_eq!(Theme::System.applied(false), Theme::Light);
        assert_eq!(Theme::HighContrast.applied(true), Theme::HighContrast);
    }

    #[test]
    fn names_match_stored_values() {
        assert_eq!(Theme::parse("high-contrast"), Some(Theme::HighContrast));
        assert_eq!(Theme::parse("sepia"), None);
    }
}
