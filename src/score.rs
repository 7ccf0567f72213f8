use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ScoreError;

const APP_DIR_NAME: &str = "grid-snake";
const SCORE_FILE_NAME: &str = "best_score.json";

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct ScoreFile {
    best_score: u32,
}

/// Best score persisted across sessions.
#[derive(Debug, Clone)]
pub struct BestScore {
    path: PathBuf,
    value: u32,
}

impl BestScore {
    /// Loads the best score from the platform data directory.
    pub fn load() -> Result<Self, ScoreError> {
        Self::load_from(scores_path())
    }

    /// Loads the best score from `path`. A missing file counts as zero.
    pub fn load_from(path: PathBuf) -> Result<Self, ScoreError> {
        let value = load_best_score_from_path(&path)?;
        Ok(Self { path, value })
    }

    /// Returns an empty record stored at the default path.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            path: scores_path(),
            value: 0,
        }
    }

    #[must_use]
    pub fn value(&self) -> u32 {
        self.value
    }

    /// Records `score` and writes it to disk when it beats the stored best.
    ///
    /// Returns `Ok(true)` when a new best was saved.
    pub fn submit(&mut self, score: u32) -> Result<bool, ScoreError> {
        if score <= self.value {
            return Ok(false);
        }

        self.value = score;
        save_best_score_to_path(&self.path, score)?;
        Ok(true)
    }
}

/// Returns the platform-correct score file path.
#[must_use]
pub fn scores_path() -> PathBuf {
    let mut base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push(APP_DIR_NAME);
    base.push(SCORE_FILE_NAME);
    base
}

fn load_best_score_from_path(path: &Path) -> Result<u32, ScoreError> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(0),
        Err(e) => return Err(e.into()),
    };

    let file: ScoreFile = serde_json::from_str(&raw)?;
    Ok(file.best_score)
}

fn save_best_score_to_path(path: &Path, score: u32) -> Result<(), ScoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(&ScoreFile { best_score: score })?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    use super::BestScore;
    use crate::error::ScoreError;

    #[test]
    fn higher_score_is_saved_and_reloaded() {
        let path = unique_test_path("saved");

        let mut best = BestScore::load_from(path.clone()).expect("missing file should load");
        assert!(best.submit(42).expect("save should succeed"));

        let reloaded = BestScore::load_from(path.clone()).expect("load should succeed");
        assert_eq!(reloaded.value(), 42);
        cleanup_test_path(&path);
    }

    #[test]
    fn lower_score_is_not_saved() {
        let path = unique_test_path("lower");

        let mut best = BestScore::load_from(path.clone()).expect("missing file should load");
        best.submit(50).expect("save should succeed");

        assert!(!best.submit(20).expect("no write expected"));
        assert_eq!(best.value(), 50);
        cleanup_test_path(&path);
    }

    #[test]
    fn missing_score_file_returns_zero() {
        let path = unique_test_path("missing");

        let best = BestScore::load_from(path).expect("missing file should load as zero");
        assert_eq!(best.value(), 0);
    }

    #[test]
    fn malformed_score_file_returns_parse_error() {
        let path = unique_test_path("malformed");
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("test parent directory should be creatable");
        }
        fs::write(&path, "not-json").expect("test file write should succeed");

        assert!(matches!(
            BestScore::load_from(path.clone()),
            Err(ScoreError::Parse(_))
        ));
        cleanup_test_path(&path);
    }

    fn unique_test_path(label: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time should be after epoch")
            .as_nanos();

        std::env::temp_dir()
            .join("grid-snake-score-tests")
            .join(format!("{label}-{nanos}.json"))
    }

    fn cleanup_test_path(path: &PathBuf) {
        let _ = fs::remove_file(path);
        if let Some(parent) = path.parent() {
            let _ = fs::remove_dir(parent);
        }
    }
}
