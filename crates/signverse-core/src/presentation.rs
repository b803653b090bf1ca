//! Accessibility settings projected onto presentation flags.
//!
//! The projection is one-way: the UI reads flags derived from settings and
//! never writes back. On web the flags become classes on `<html>` and
//! `<body>`; on desktop they land on the root element.

use crate::model::UserSettings;

/// Class applied to the document root for large text.
pub const LARGE_TEXT_CLASS: &str = "text-lg";
/// Body class for the high-contrast palette.
pub const HIGH_CONTRAST_CLASS: &str = "high-contrast";
/// Body class for the dark palette.
pub const DARK_CLASS: &str = "dark";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PresentationFlags {
    pub large_text: bool,
    pub high_contrast: bool,
    pub dark: bool,
}

impl PresentationFlags {
    /// `prefers_dark` is the device colour-scheme preference, read once at startup.
    pub fn from_settings(settings: &UserSettings, prefers_dark: bool) -> Self {
        Self {
            large_text: settings.large_text,
            high_contrast: settings.high_contrast,
            dark: prefers_dark,
        }
    }

    /// Classes for the document root.
    pub fn root_classes(&self) -> Vec<&'static str> {
        let mut classes = Vec::new();
        if self.large_text {
            classes.push(LARGE_TEXT_CLASS);
        }
        classes
    }

    /// Classes for the document body.
    pub fn body_classes(&self) -> Vec<&'static str> {
        let mut classes = Vec::new();
        if self.high_contrast {
            classes.push(HIGH_CONTRAST_CLASS);
        }
        if self.dark {
            classes.push(DARK_CLASS);
        }
        classes
    }

    /// Root and body classes joined, for targets with a single styled root.
    pub fn class_list(&self) -> String {
        let mut classes = self.root_classes();
        classes.extend(self.body_classes());
        classes.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SettingsPatch;

    #[test]
    fn test_defaults_apply_nothing() {
        let flags = PresentationFlags::from_settings(&UserSettings::default(), false);
        assert_eq!(flags, PresentationFlags::default());
        assert!(flags.root_classes().is_empty());
        assert!(flags.body_classes().is_empty());
        assert_eq!(flags.class_list(), "");
    }

    #[test]
    fn test_flags_follow_settings() {
        let mut settings = UserSettings::default();
        settings.merge(SettingsPatch::large_text(true).then(SettingsPatch::high_contrast(true)));

        let flags = PresentationFlags::from_settings(&settings, true);
        assert_eq!(flags.root_classes(), ["text-lg"]);
        assert_eq!(flags.body_classes(), ["high-contrast", "dark"]);
        assert_eq!(flags.class_list(), "text-lg high-contrast dark");
    }

    #[test]
    fn test_dark_comes_only_from_device() {
        let flags = PresentationFlags::from_settings(&UserSettings::default(), true);
        assert!(flags.dark);
        assert!(!flags.high_contrast);
    }
}
