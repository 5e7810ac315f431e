use aac_audio_gen::domain::catalog::{Vocabulary, VoiceProfiles};

/// `yes` and `no` in English and French: 4 pairs
pub fn two_by_two_vocabulary() -> Vocabulary {
    Vocabulary::from_rows([
        ("yes", vec![("en", "yes"), ("fr", "oui")]),
        ("no", vec![("en", "no"), ("fr", "non")]),
    ])
    .expect("valid fixture vocabulary")
}

pub fn yes_vocabulary() -> Vocabulary {
    Vocabulary::from_rows([("yes", vec![("en", "yes"), ("fr", "oui")])])
        .expect("valid fixture vocabulary")
}

pub fn en_fr_voices() -> VoiceProfiles {
    VoiceProfiles::from_json(
        r#"{
            "en": { "voice": "Joanna", "rate": "-10%", "pitch": "+0Hz" },
            "fr": { "voice": "Lea", "rate": "-10%", "pitch": "+0Hz" }
        }"#,
    )
    .expect("valid fixture voices")
}

pub fn en_only_voices() -> VoiceProfiles {
    VoiceProfiles::from_json(r#"{ "en": { "voice": "Joanna" } }"#).expect("valid fixture voices")
}
