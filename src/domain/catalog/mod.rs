pub mod defaults;
mod entries;
pub mod error;
pub mod language;
pub mod vocabulary;
pub mod voice;

pub use defaults::{default_openai_voices, default_polly_voices, default_vocabulary};
pub use error::ConfigurationError;
pub use language::LanguageCode;
pub use vocabulary::{Vocabulary, VocabularyItem};
pub use voice::{PitchAdjustment, RateAdjustment, VoiceProfile, VoiceProfiles};
