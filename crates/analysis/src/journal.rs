use super::summary::Summary;
use kuhn_core::*;
use kuhn_gameroom::Session;
use std::path::Path;
use std::path::PathBuf;

/// Writes matchup results as pretty-printed JSON under one directory.
///
/// File names are `<matchup>_<millis>.json` for the full session and
/// `<matchup>_summary_<millis>.json` for its summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Journal {
    dir: PathBuf,
}

impl Journal {
    /// Creates the directory if needed.
    pub fn new(dir: impl AsRef<Path>) -> anyhow::Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        std::fs::create_dir_all(&dir)
            .map_err(|e| anyhow::anyhow!("create journal directory {}: {}", dir.display(), e))?;
        Ok(Self { dir })
    }
    pub fn dir(&self) -> &Path {
        &self.dir
    }
    /// Every hand of a session.
    pub fn save_session(&self, matchup: &str, session: &Session) -> anyhow::Result<PathBuf> {
        self.write(&format!("{}_{}.json", slug(matchup), timestamp()), session)
    }
    pub fn save_summary(&self, summary: &Summary) -> anyhow::Result<PathBuf> {
        self.write(
            &format!("{}_summary_{}.json", slug(summary.matchup()), timestamp()),
            summary,
        )
    }
    /// Reads back a saved session.
    pub fn load_session(path: impl AsRef<Path>) -> anyhow::Result<Session> {
        let text = std::fs::read_to_string(path.as_ref())
            .map_err(|e| anyhow::anyhow!("read {}: {}", path.as_ref().display(), e))?;
        Ok(serde_json::from_str(&text)?)
    }
    fn write(&self, name: &str, value: &impl serde::Serialize) -> anyhow::Result<PathBuf> {
        let path = self.dir.join(name);
        let json = serde_json::to_string_pretty(value)?;
        std::fs::write(&path, json).map_err(|e| anyhow::anyhow!("write {}: {}", path.display(), e))?;
        log::info!("[journal] saved {}", path.display());
        Ok(path)
    }
}

/// Lower-case file-name form of a matchup label.
fn slug(matchup: &str) -> String {
    matchup
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '_' })
        .collect()
}
