use aac_audio_gen::domain::catalog::VoiceProfile;
use aac_audio_gen::infrastructure::repositories::{SynthesisError, TtsRepository};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Minimal MP3 frame header
pub fn mock_audio_bytes(text: &str) -> Vec<u8> {
    let mut audio = vec![0xFF, 0xFB, 0x90, 0x00];
    audio.extend_from_slice(text.as_bytes());
    audio
}

/// In-memory stand-in for a TTS provider
///
/// Returns deterministic audio derived from the text, fails for texts listed
/// in `failing_texts`, and tracks how many requests overlap.
#[derive(Default)]
pub struct FakeTts {
    failing_texts: HashSet<String>,
    delay: Option<Duration>,
    calls: Mutex<Vec<(String, String)>>,
    in_flight: AtomicUsize,
    peak_in_flight: AtomicUsize,
}

impl FakeTts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_on(mut self, text: &str) -> Self {
        self.failing_texts.insert(text.to_string());
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// `(text, voice)` for every request received
    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }

    pub fn peak_in_flight(&self) -> usize {
        self.peak_in_flight.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TtsRepository for FakeTts {
    async fn synthesize(&self, text: &str, voice: &VoiceProfile) -> Result<Vec<u8>, SynthesisError> {
        self.calls.lock().push((text.to_string(), voice.voice.clone()));

        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak_in_flight.fetch_max(now, Ordering::SeqCst);

        match self.delay {
            Some(delay) => tokio::time::sleep(delay).await,
            None => tokio::task::yield_now().await,
        }

        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        if self.failing_texts.contains(text) {
            return Err(SynthesisError::Provider(format!("refused to synthesize {:?}", text)));
        }
        Ok(mock_audio_bytes(text))
    }

    fn provider_name(&self) -> &'static str {
        "fake"
    }
}
