use aac_audio_gen::controllers::generate::GenerateController;
use aac_audio_gen::domain::generation::GenerationService;
use aac_audio_gen::infrastructure::repositories::AudioFileRepository;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;

pub mod fake_tts;
pub mod fixtures;

use fake_tts::FakeTts;

pub struct TestContext {
    pub tts: Arc<FakeTts>,
    pub service: Arc<GenerationService>,
    output: TempDir,
}

impl TestContext {
    pub fn new() -> Self {
        Self::with(FakeTts::new(), None)
    }

    pub fn with(tts: FakeTts, max_in_flight: Option<usize>) -> Self {
        let output = TempDir::new().expect("Failed to create output directory");
        let tts = Arc::new(tts);
        let files = Arc::new(AudioFileRepository::new(output.path()));
        let service = Arc::new(GenerationService::new(tts.clone(), files, max_in_flight));

        Self {
            tts,
            service,
            output,
        }
    }

    /// Command surface over the same service and output root
    pub fn controller(&self) -> GenerateController {
        GenerateController::new(self.service.clone())
    }

    pub fn root(&self) -> &Path {
        self.output.path()
    }

    pub fn audio_path(&self, language: &str, item_id: &str) -> PathBuf {
        self.root().join(language).join(format!("{}.mp3", item_id))
    }

    /// Every file under the output root, relative to it, sorted
    pub fn files_on_disk(&self) -> Vec<(String, u64)> {
        let mut files = Vec::new();
        for language in std::fs::read_dir(self.root()).expect("Failed to list output root") {
            let language = language.expect("Failed to read entry");
            if !language.path().is_dir() {
                continue;
            }
            for file in std::fs::read_dir(language.path()).expect("Failed to list language dir") {
                let file = file.expect("Failed to read entry");
                let relative = file
                    .path()
                    .strip_prefix(self.root())
                    .expect("file under root")
                    .to_string_lossy()
                    .replace('\\', "/");
                let size = file.metadata().expect("Failed to stat file").len();
                files.push((relative, size));
            }
        }
        files.sort();
        files
    }
}
