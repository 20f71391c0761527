use serde::{Deserialize, Serialize};

pub const SPEECH_RATE: f32 = 0.9;

/// Voice preference for the spoken letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoiceGender {
    #[default]
    Female,
    Male,
}

const FEMALE_KEYWORDS: &[&str] = &["female", "woman", "girl", "zira"];
const MALE_KEYWORDS: &[&str] = &["male", "man", "boy", "david"];
const FEMALE_DEFAULTS: &[&str] = &[
    "google us english female",
    "samantha",
    "victoria",
    "zira",
    "karen",
    "moira",
    "tessa",
];
const MALE_DEFAULTS: &[&str] = &["google us english male", "daniel", "alex", "david", "mark", "fred"];

impl VoiceGender {
    pub fn name(&self) -> &'static str {
        match self {
            VoiceGender::Female => "female",
            VoiceGender::Male => "male",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            VoiceGender::Female => "Female Voice",
            VoiceGender::Male => "Male Voice",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "female" => Some(VoiceGender::Female),
            "male" => Some(VoiceGender::Male),
            _ => None,
        }
    }

    pub fn pitch(&self) -> f32 {
        match self {
            VoiceGender::Female => 1.2,
            VoiceGender::Male => 0.9,
        }
    }

    fn keyword_match(&self, lower: &str) -> bool {
        match self {
            VoiceGender::Female => FEMALE_KEYWORDS.iter().any(|k| lower.contains(k)),
            // "male" is a substring of "female"
            VoiceGender::Male => {
                !lower.contains("female") && MALE_KEYWORDS.iter().any(|k| lower.contains(k))
            }
        }
    }

    fn default_match(&self, lower: &str) -> bool {
        let defaults = match self {
            VoiceGender::Female => FEMALE_DEFAULTS,
            VoiceGender::Male => MALE_DEFAULTS,
        };
        defaults.iter().any(|d| lower.contains(d))
    }

    /// Index of the installed voice to use, by name. Keyword hits win over
    /// the list of well-known default voices; `None` leaves the platform
    /// default in place.
    pub fn choose_voice<S: AsRef<str>>(&self, voice_names: &[S]) -> Option<usize> {
        let lowered: Vec<String> = voice_names
            .iter()
            .map(|n| n.as_ref().to_lowercase())
            .collect();
        lowered
            .iter()
            .position(|n| self.keyword_match(n))
            .or_else(|| lowered.iter().position(|n| self.default_match(n)))
    }
}
