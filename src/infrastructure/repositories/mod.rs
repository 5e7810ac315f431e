pub mod audio_file_repository;
pub mod openai_tts_repository;
pub mod polly_tts_repository;
pub mod tts_repository;

pub use audio_file_repository::{AudioFileRepository, DirectoryScan, AUDIO_EXTENSION};
pub use openai_tts_repository::OpenAiTtsRepository;
pub use polly_tts_repository::PollyTtsRepository;
pub use tts_repository::{SynthesisError, TtsRepository};
