use super::entries::Entries;
use super::error::ConfigurationError;
use super::language::LanguageCode;
use super::vocabulary::Vocabulary;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::str::FromStr;

/// Speaking rate change in percent, written `-10%` / `+25%`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct RateAdjustment(i32);

impl RateAdjustment {
    pub fn from_percent(percent: i32) -> Self {
        Self(percent)
    }

    pub fn percent(&self) -> i32 {
        self.0
    }
}

impl FromStr for RateAdjustment {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_signed_with_unit(s, "%")
            .map(Self)
            .ok_or_else(|| ConfigurationError::InvalidRate(s.to_string()))
    }
}

impl TryFrom<String> for RateAdjustment {
    type Error = ConfigurationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl std::fmt::Display for RateAdjustment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:+}%", self.0)
    }
}

/// Pitch offset in hertz, written `+0Hz` / `-20Hz`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct PitchAdjustment(i32);

impl PitchAdjustment {
    pub fn from_hz(hz: i32) -> Self {
        Self(hz)
    }

    pub fn hz(&self) -> i32 {
        self.0
    }

    pub fn is_neutral(&self) -> bool {
        self.0 == 0
    }
}

impl FromStr for PitchAdjustment {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_signed_with_unit(s, "Hz")
            .map(Self)
            .ok_or_else(|| ConfigurationError::InvalidPitch(s.to_string()))
    }
}

impl TryFrom<String> for PitchAdjustment {
    type Error = ConfigurationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl std::fmt::Display for PitchAdjustment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:+}Hz", self.0)
    }
}

fn parse_signed_with_unit(s: &str, unit: &str) -> Option<i32> {
    let number = s.trim().strip_suffix(unit)?;
    // An explicit sign is required, so "10%" is not mistaken for an absolute rate
    if !number.starts_with(['+', '-']) {
        return None;
    }
    number.parse().ok()
}

/// How one language is rendered by the provider
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VoiceProfile {
    pub voice: String,
    #[serde(default)]
    pub rate: RateAdjustment,
    #[serde(default)]
    pub pitch: PitchAdjustment,
}

impl VoiceProfile {
    pub fn new(voice: impl Into<String>, rate: RateAdjustment, pitch: PitchAdjustment) -> Self {
        Self {
            voice: voice.into(),
            rate,
            pitch,
        }
    }
}

/// Voice configuration keyed by language
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VoiceProfiles {
    profiles: BTreeMap<LanguageCode, VoiceProfile>,
}

impl VoiceProfiles {
    pub fn new(profiles: BTreeMap<LanguageCode, VoiceProfile>) -> Result<Self, ConfigurationError> {
        for (language, profile) in &profiles {
            if profile.voice.trim().is_empty() {
                return Err(ConfigurationError::BlankVoice(language.clone()));
            }
        }
        Ok(Self { profiles })
    }

    /// Parse the `{ "en": { "voice": "...", "rate": "-10%", "pitch": "+0Hz" } }` layout
    pub fn from_json(json: &str) -> Result<Self, ConfigurationError> {
        let raw: Entries<LanguageCode, VoiceProfile> =
            serde_json::from_str(json).map_err(|e| ConfigurationError::Source {
                path: "voices".to_string(),
                message: e.to_string(),
            })?;

        let mut profiles = BTreeMap::new();
        for (language, profile) in raw.0 {
            if profiles.contains_key(&language) {
                return Err(ConfigurationError::DuplicateVoiceProfile(language));
            }
            profiles.insert(language, profile);
        }
        Self::new(profiles)
    }

    pub fn get(&self, language: &LanguageCode) -> Option<&VoiceProfile> {
        self.profiles.get(language)
    }

    /// Every language the vocabulary uses must have a profile
    pub fn ensure_covers(&self, vocabulary: &Vocabulary) -> Result<(), ConfigurationError> {
        match vocabulary
            .languages()
            .iter()
            .find(|language| !self.profiles.contains_key(*language))
        {
            Some(missing) => Err(ConfigurationError::MissingVoiceProfile(missing.clone())),
            None => Ok(()),
        }
    }
}
