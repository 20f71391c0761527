//! Page content compiled into the bundle.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::carousel::{MediaItem, DEFAULT_AUTO_ADVANCE_MS};
use crate::error::ConfigError;
use crate::stage::DEFAULT_LOADING_DELAY_MS;
use crate::voice::VoiceGender;

const EMBEDDED_CONFIG: &str = include_str!("../assets/celebration.json");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    Female,
    Male,
}

impl Gender {
    /// Initial voice preference for the spoken letter
    pub fn voice(&self) -> VoiceGender {
        match self {
            Gender::Female => VoiceGender::Female,
            Gender::Male => VoiceGender::Male,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CelebrantProfile {
    pub name: String,
    pub date_of_birth: NaiveDate,
    #[serde(default)]
    pub gender: Gender,
    /// Data URL attached from the photo form
    #[serde(default)]
    pub photo: Option<String>,
}

impl CelebrantProfile {
    pub fn with_photo(&self, data_url: String) -> Self {
        Self {
            photo: Some(data_url),
            ..self.clone()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MusicTracks {
    pub intro: String,
    pub celebration: String,
    #[serde(default = "default_volume")]
    pub volume: f64,
}

fn default_volume() -> f64 {
    0.5
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareNames {
    pub stats_filename: String,
    pub stats_title: String,
    pub wish_filename: String,
    pub wish_title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CelebrationConfig {
    pub celebrant: CelebrantProfile,
    /// Shown on the celebration headline; not derived from the calculator
    pub display_age: u32,
    pub display_date: NaiveDate,
    #[serde(default = "default_loading_delay")]
    pub loading_delay_ms: u32,
    #[serde(default = "default_carousel_interval")]
    pub carousel_interval_ms: u32,
    pub wishes: Vec<String>,
    #[serde(default)]
    pub memories: Vec<MediaItem>,
    pub music: MusicTracks,
    pub share: ShareNames,
}

fn default_loading_delay() -> u32 {
    DEFAULT_LOADING_DELAY_MS
}

fn default_carousel_interval() -> u32 {
    DEFAULT_AUTO_ADVANCE_MS
}

impl CelebrationConfig {
    /// The config bundled at build time
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_json(EMBEDDED_CONFIG)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: CelebrationConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.celebrant.name.trim().is_empty() {
            return Err(ConfigError::Missing("celebrant name"));
        }
        if self.wishes.is_empty() {
            return Err(ConfigError::Missing("wishes"));
        }
        if self.carousel_interval_ms == 0 {
            return Err(ConfigError::Missing("carousel interval"));
        }
        Ok(())
    }
}

impl Default for CelebrationConfig {
    fn default() -> Self {
        let birthday = NaiveDate::from_ymd_opt(2007, 5, 12).unwrap_or_default();
        Self {
            celebrant: CelebrantProfile {
                name: "Birthday Star".to_string(),
                date_of_birth: birthday,
                gender: Gender::default(),
                photo: None,
            },
            display_age: 18,
            display_date: birthday,
            loading_delay_ms: DEFAULT_LOADING_DELAY_MS,
            carousel_interval_ms: DEFAULT_AUTO_ADVANCE_MS,
            wishes: vec!["Happy Birthday!\nMay your day be filled with joy and laughter.".to_string()],
            memories: Vec::new(),
            music: MusicTracks {
                intro: "/HB MUSIC 2.mp3".to_string(),
                celebration: "/Bg music.mp3".to_string(),
                volume: default_volume(),
            },
            share: ShareNames {
                stats_filename: "birthday-stats".to_string(),
                stats_title: "Birthday Stats".to_string(),
                wish_filename: "birthday-wish".to_string(),
                wish_title: "Birthday Wishes".to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_loads() {
        let config = CelebrationConfig::load().unwrap();
        assert_eq!(config.celebrant.name, "Snigdha");
        assert_eq!(config.celebrant.date_of_birth, NaiveDate::from_ymd_opt(2007, 5, 12).unwrap());
        assert_eq!(config.celebrant.gender.voice(), VoiceGender::Female);
        assert_eq!(config.display_age, 18);
        assert_eq!(config.wishes.len(), 5);
        assert_eq!(config.memories.len(), 7);
        assert_eq!(config.memories.iter().filter(|m| m.is_video()).count(), 5);
        assert_eq!(config.loading_delay_ms, 2000);
        assert_eq!(config.music.volume, 0.5);
    }

    #[test]
    fn test_defaults_for_optional_fields() {
        let json = r#"{
            "celebrant": {"name": "Ada", "date_of_birth": "1990-02-28"},
            "display_age": 35,
            "display_date": "1990-02-28",
            "wishes": ["Cheers"],
            "music": {"intro": "/a.mp3", "celebration": "/b.mp3"},
            "share": {"stats_filename": "s", "stats_title": "S", "wish_filename": "w", "wish_title": "W"}
        }"#;
        let config = CelebrationConfig::from_json(json).unwrap();
        assert_eq!(config.carousel_interval_ms, DEFAULT_AUTO_ADVANCE_MS);
        assert_eq!(config.loading_delay_ms, DEFAULT_LOADING_DELAY_MS);
        assert!(config.memories.is_empty());
        assert_eq!(config.celebrant.gender, Gender::Female);
        assert!(config.celebrant.photo.is_none());
    }

    #[test]
    fn test_invalid_config() {
        assert!(matches!(
            CelebrationConfig::from_json("{"),
            Err(ConfigError::Parse(_))
        ));

        let mut config = CelebrationConfig::default();
        config.wishes.clear();
        let json = serde_json::to_string(&config).unwrap();
        assert!(matches!(
            CelebrationConfig::from_json(&json),
            Err(ConfigError::Missing("wishes"))
        ));
    }

    #[test]
    fn test_attach_photo() {
        let config = CelebrationConfig::default();
        let profile = config.celebrant.with_photo("data:image/png;base64,AAAA".to_string());
        assert_eq!(profile.photo.as_deref(), Some("data:image/png;base64,AAAA"));
        assert_eq!(profile.name, config.celebrant.name);
    }
}
