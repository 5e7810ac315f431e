use crate::domain::catalog::LanguageCode;
use crate::domain::generation::{ReportingError, UnitError};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Extension of the files every provider produces
pub const AUDIO_EXTENSION: &str = "mp3";

/// Totals read back from the output tree
#[derive(Debug, Default)]
pub struct DirectoryScan {
    pub file_count: usize,
    pub total_bytes: u64,
    pub errors: Vec<ReportingError>,
}

/// Writes generated clips to `<root>/<language>/<item_id>.<extension>`
///
/// Paths depend only on the language and item id, so a re-run overwrites the
/// previous file instead of adding a new one.
#[derive(Debug, Clone)]
pub struct AudioFileRepository {
    root: PathBuf,
    extension: String,
}

impl AudioFileRepository {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::with_extension(root, AUDIO_EXTENSION)
    }

    pub fn with_extension(root: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            extension: extension.into(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn language_dir(&self, language: &LanguageCode) -> PathBuf {
        self.root.join(language.as_str())
    }

    pub fn path_for(&self, language: &LanguageCode, item_id: &str) -> PathBuf {
        self.language_dir(language)
            .join(format!("{}.{}", item_id, self.extension))
    }

    /// Write one clip, creating the language directory if needed
    ///
    /// Returns the destination path and the number of bytes written.
    pub async fn save(
        &self,
        language: &LanguageCode,
        item_id: &str,
        audio: &[u8],
    ) -> Result<(PathBuf, u64), UnitError> {
        let dir = self.language_dir(language);
        if let Err(source) = tokio::fs::create_dir_all(&dir).await {
            return Err(UnitError::Write { path: dir, source });
        }

        let path = self.path_for(language, item_id);
        if let Err(source) = tokio::fs::write(&path, audio).await {
            return Err(UnitError::Write { path, source });
        }

        Ok((path, audio.len() as u64))
    }

    /// Count files with the audio extension under each language directory
    ///
    /// A language directory that does not exist contributes nothing. Any other
    /// listing failure is recorded and the scan moves on.
    pub async fn scan<'a, I>(&self, languages: I) -> DirectoryScan
    where
        I: IntoIterator<Item = &'a LanguageCode>,
    {
        let mut scan = DirectoryScan::default();

        for language in languages {
            let dir = self.language_dir(language);
            if let Err(source) = self.scan_dir(&dir, &mut scan).await {
                if source.kind() == ErrorKind::NotFound {
                    tracing::debug!(path = %dir.display(), "Output directory missing, skipping");
                    continue;
                }
                tracing::warn!(path = %dir.display(), error = %source, "Failed to scan output directory");
                scan.errors.push(ReportingError::Scan { path: dir, source });
            }
        }

        scan
    }

    async fn scan_dir(&self, dir: &Path, scan: &mut DirectoryScan) -> std::io::Result<()> {
        let mut entries = tokio::fs::read_dir(dir).await?;

        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            let matches_extension = path
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext == self.extension);
            if !matches_extension {
                continue;
            }

            let metadata = entry.metadata().await?;
            if metadata.is_file() {
                scan.file_count += 1;
                scan.total_bytes += metadata.len();
            }
        }

        Ok(())
    }
}
