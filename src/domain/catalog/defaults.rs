use super::error::ConfigurationError;
use super::language::LanguageCode;
use super::vocabulary::Vocabulary;
use super::voice::{PitchAdjustment, RateAdjustment, VoiceProfile, VoiceProfiles};
use std::collections::BTreeMap;

/// Slightly slower than the provider default, for clarity on the board
pub const DEFAULT_RATE_PERCENT: i32 = -10;

/// `(item id, English, French)` for every board entry
const DEFAULT_VOCABULARY: &[(&str, &str, &str)] = &[
    // Social
    ("yes", "yes", "oui"),
    ("no", "no", "non"),
    ("hi", "hi", "salut"),
    ("bye", "bye", "au revoir"),
    ("please", "please", "s'il te plaît"),
    ("thank_you", "thank you", "merci"),
    ("help", "help", "aide"),
    ("sorry", "sorry", "pardon"),
    ("love", "love", "amour"),
    ("good_morning", "good morning", "bonjour"),
    ("good_night", "good night", "bonne nuit"),

    // People
    ("mom", "mom", "maman"),
    ("dad", "dad", "papa"),
    ("me", "me", "moi"),
    ("you", "you", "toi"),
    ("brother", "brother", "frère"),
    ("sister", "sister", "sœur"),
    ("friend", "friend", "ami"),
    ("teacher", "teacher", "enseignant"),
    ("baby", "baby", "bébé"),
    ("grandma", "grandma", "mamie"),
    ("grandpa", "grandpa", "papi"),

    // Actions
    ("want", "want", "vouloir"),
    ("go", "go", "aller"),
    ("stop", "stop", "arrêter"),
    ("more", "more", "encore"),
    ("eat", "eat", "manger"),
    ("drink", "drink", "boire"),
    ("play", "play", "jouer"),
    ("give", "give", "donner"),
    ("make", "make", "faire"),
    ("look", "look", "regarder"),
    ("sleep", "sleep", "dormir"),
    ("come", "come", "venir"),
    ("wait", "wait", "attendre"),
    ("open", "open", "ouvrir"),
    ("close", "close", "fermer"),
    ("read", "read", "lire"),
    ("sing", "sing", "chanter"),
    ("dance", "dance", "danser"),
    ("hug", "hug", "câlin"),
    ("wash", "wash", "laver"),

    // Feelings
    ("happy", "happy", "content"),
    ("sad", "sad", "triste"),
    ("angry", "angry", "en colère"),
    ("tired", "tired", "fatigué"),
    ("scared", "scared", "peur"),
    ("sick", "sick", "malade"),
    ("hungry", "hungry", "faim"),
    ("thirsty", "thirsty", "soif"),
    ("excited", "excited", "excité"),
    ("bored", "bored", "ennuyé"),
    ("hurt", "hurt", "mal"),

    // Descriptors
    ("big", "big", "grand"),
    ("little", "little", "petit"),
    ("hot", "hot", "chaud"),
    ("cold", "cold", "froid"),
    ("good", "good", "bon"),
    ("bad", "bad", "mauvais"),
    ("fast", "fast", "vite"),
    ("slow", "slow", "lent"),
    ("up", "up", "en haut"),
    ("down", "down", "en bas"),
    ("all_done", "all done", "fini"),
    ("same", "same", "pareil"),
    ("different", "different", "différent"),
    ("new", "new", "nouveau"),

    // Questions
    ("what", "what", "quoi"),
    ("where", "where", "où"),
    ("who", "who", "qui"),
    ("when", "when", "quand"),
    ("why", "why", "pourquoi"),
    ("how", "how", "comment"),

    // Food
    ("apple", "apple", "pomme"),
    ("banana", "banana", "banane"),
    ("cookie", "cookie", "biscuit"),
    ("bread", "bread", "pain"),
    ("cheese", "cheese", "fromage"),
    ("water", "water", "eau"),
    ("milk", "milk", "lait"),
    ("juice", "juice", "jus"),
    ("chicken", "chicken", "poulet"),
    ("pasta", "pasta", "pâtes"),
    ("rice", "rice", "riz"),
    ("yogurt", "yogurt", "yaourt"),

    // Places
    ("home", "home", "maison"),
    ("school", "school", "école"),
    ("park", "park", "parc"),
    ("bathroom", "bathroom", "salle de bain"),
    ("outside", "outside", "dehors"),
    ("bed", "bed", "lit"),
    ("car_place", "car", "voiture"),
    ("store", "store", "magasin"),

    // Objects
    ("book", "book", "livre"),
    ("ball", "ball", "ballon"),
    ("phone", "phone", "téléphone"),
    ("tv", "TV", "télé"),
    ("toy", "toy", "jouet"),
    ("shoes", "shoes", "chaussures"),
    ("hat", "hat", "chapeau"),
    ("blanket", "blanket", "couverture"),

    // Body
    ("head", "head", "tête"),
    ("hand", "hand", "main"),
    ("mouth", "mouth", "bouche"),
    ("eyes", "eyes", "yeux"),
    ("ears", "ears", "oreilles"),
    ("tummy", "tummy", "ventre"),
    ("feet", "feet", "pieds"),

    // Time
    ("now", "now", "maintenant"),
    ("later", "later", "plus tard"),
    ("today", "today", "aujourd'hui"),
    ("tomorrow", "tomorrow", "demain"),
    ("morning", "morning", "matin"),
    ("night", "night", "nuit"),
];

/// The built-in board vocabulary in English and French
pub fn default_vocabulary() -> Result<Vocabulary, ConfigurationError> {
    Vocabulary::from_rows(
        DEFAULT_VOCABULARY
            .iter()
            .map(|(id, en, fr)| (*id, [("en", *en), ("fr", *fr)])),
    )
}

/// Neural Polly voices for the built-in languages
pub fn default_polly_voices() -> Result<VoiceProfiles, ConfigurationError> {
    build_profiles(&[("en", "Joanna"), ("fr", "Lea")])
}

/// OpenAI speech voices for the built-in languages
pub fn default_openai_voices() -> Result<VoiceProfiles, ConfigurationError> {
    build_profiles(&[("en", "alloy"), ("fr", "nova")])
}

fn build_profiles(voices: &[(&str, &str)]) -> Result<VoiceProfiles, ConfigurationError> {
    let profiles = voices
        .iter()
        .map(|(language, voice)| {
            let profile = VoiceProfile::new(
                *voice,
                RateAdjustment::from_percent(DEFAULT_RATE_PERCENT),
                PitchAdjustment::default(),
            );
            LanguageCode::new(*language).map(|code| (code, profile))
        })
        .collect::<Result<BTreeMap<_, _>, _>>()?;

    VoiceProfiles::new(profiles)
}
