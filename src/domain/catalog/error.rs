use super::language::LanguageCode;

/// Problems with the vocabulary or voice tables. Always fatal, raised before
/// any synthesis unit is dispatched.
#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
    #[error("invalid language code: {0:?}")]
    InvalidLanguageCode(String),
    #[error("invalid item id: {0:?}")]
    InvalidItemId(String),
    #[error("duplicate item id: {0}")]
    DuplicateItem(String),
    #[error("vocabulary is empty")]
    EmptyVocabulary,
    #[error("item {0} has no labels")]
    NoLabels(String),
    #[error("item {item_id} has no text for language {language}")]
    MissingLabel {
        item_id: String,
        language: LanguageCode,
    },
    #[error("item {item_id} lists language {language} more than once")]
    DuplicateLabel {
        item_id: String,
        language: LanguageCode,
    },
    #[error("item {item_id} has blank text for language {language}")]
    BlankLabel {
        item_id: String,
        language: LanguageCode,
    },
    #[error("no voice profile configured for language {0}")]
    MissingVoiceProfile(LanguageCode),
    #[error("duplicate voice profile for language {0}")]
    DuplicateVoiceProfile(LanguageCode),
    #[error("voice profile for language {0} has an empty voice identity")]
    BlankVoice(LanguageCode),
    #[error("invalid rate adjustment: {0:?} (expected e.g. \"-10%\")")]
    InvalidRate(String),
    #[error("invalid pitch adjustment: {0:?} (expected e.g. \"+0Hz\")")]
    InvalidPitch(String),
    #[error("failed to read {path}: {message}")]
    Source { path: String, message: String },
}
