use serde::{Deserialize, Serialize};

/// Accent colour palette selectable from the theme picker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorTheme {
    #[default]
    Blue,
    Pink,
    Purple,
    Green,
    Orange,
}

impl ColorTheme {
    pub const ALL: [ColorTheme; 5] = [
        ColorTheme::Blue,
        ColorTheme::Pink,
        ColorTheme::Purple,
        ColorTheme::Green,
        ColorTheme::Orange,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ColorTheme::Blue => "blue",
            ColorTheme::Pink => "pink",
            ColorTheme::Purple => "purple",
            ColorTheme::Green => "green",
            ColorTheme::Orange => "orange",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ColorTheme::Blue => "Ice Blue",
            ColorTheme::Pink => "Rose Pink",
            ColorTheme::Purple => "Royal Purple",
            ColorTheme::Green => "Emerald Green",
            ColorTheme::Orange => "Sunset Orange",
        }
    }

    /// CSS class applied to the page root
    pub fn css_class(&self) -> String {
        format!("theme-{}", self.name())
    }
}

/// Severity of a user-facing notice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum NoticeVariant {
    #[default]
    Default,
    Destructive,
}

/// Toast payload. Every degradable failure ends in one of these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub variant: NoticeVariant,
}

impl Notice {
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: NoticeVariant::Default,
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: NoticeVariant::Destructive,
        }
    }

    pub fn is_destructive(&self) -> bool {
        self.variant == NoticeVariant::Destructive
    }

    /// Camera access refused; the photo form falls back to file upload.
    pub fn camera_denied() -> Self {
        Self::destructive(
            "Camera access denied",
            "Please allow camera access or upload a photo instead",
        )
    }

    /// Autoplay blocked by the browser; the user can retry from the control.
    pub fn playback_denied() -> Self {
        Self::destructive(
            "Audio couldn't play",
            "Browser may require user interaction before playing audio",
        )
    }

    pub fn returning_home() -> Self {
        Self::info("Returning Home", "Taking you back to the beginning")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_labels() {
        let labels: Vec<&str> = ColorTheme::ALL.iter().map(|t| t.label()).collect();
        assert_eq!(
            labels,
            vec!["Ice Blue", "Rose Pink", "Royal Purple", "Emerald Green", "Sunset Orange"]
        );
        assert_eq!(ColorTheme::default(), ColorTheme::Blue);
        assert_eq!(ColorTheme::Green.css_class(), "theme-green");
    }

    #[test]
    fn test_theme_serde_names() {
        let json = serde_json::to_string(&ColorTheme::Orange).unwrap();
        assert_eq!(json, "\"orange\"");
        let parsed: ColorTheme = serde_json::from_str("\"pink\"").unwrap();
        assert_eq!(parsed, ColorTheme::Pink);
    }

    #[test]
    fn test_notice_variants() {
        assert!(!Notice::info("a", "b").is_destructive());
        assert!(Notice::camera_denied().is_destructive());
        assert!(Notice::playback_denied().is_destructive());
    }

    #[test]
    fn test_returning_home_notice() {
        let notice = Notice::returning_home();
        assert!(!notice.is_destructive());
        assert_eq!(notice.title, "Returning Home");
        assert_eq!(notice.description, "Taking you back to the beginning");
    }
}
