use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use speaknest_types::ReviewState;
use tempfile::NamedTempFile;
use tokio::sync::RwLock;

use super::{ReviewStore, sorted_for_user};
use crate::error::StoreError;

/// Collection persisted as a single JSON object `{ key: record }`.
///
/// Every `put` rewrites the file through a temp file in the same directory,
/// so a crash never leaves a half-written collection behind.
pub struct JsonFileStore {
    collection: String,
    path: PathBuf,
    rows: RwLock<BTreeMap<String, ReviewState>>,
}

impl JsonFileStore {
    /// Open the collection file, starting empty if it does not exist yet
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let collection = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("wordLearningStatus")
            .to_string();

        let load_path = path.clone();
        let rows = tokio::task::spawn_blocking(move || load_rows(&load_path))
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))??;

        tracing::info!(
            "Opened collection {} with {} records at {}",
            collection,
            rows.len(),
            path.display()
        );

        Ok(Self {
            collection,
            path,
            rows: RwLock::new(rows),
        })
    }
}

#[async_trait]
impl ReviewStore for JsonFileStore {
    async fn put(&self, key: &str, state: &ReviewState) -> Result<(), StoreError> {
        let mut rows = self.rows.write().await;
        let previous = rows.insert(key.to_string(), state.clone());

        let written = match serde_json::to_vec_pretty(&*rows) {
            Ok(bytes) => {
                let path = self.path.clone();
                tokio::task::spawn_blocking(move || write_atomic(&path, &bytes))
                    .await
                    .map_err(|e| StoreError::Unavailable(e.to_string()))
                    .and_then(|r| r)
            }
            Err(e) => Err(e.into()),
        };

        if let Err(e) = written {
            // keep memory in line with what is on disk
            match previous {
                Some(previous) => rows.insert(key.to_string(), previous),
                None => rows.remove(key),
            };
            return Err(e);
        }

        tracing::debug!("Wrote {} to {}", key, self.path.display());
        Ok(())
    }

    async fn query(&self, user_id: &str) -> Result<Vec<ReviewState>, StoreError> {
        let rows = self.rows.read().await;
        Ok(sorted_for_user(rows.values(), user_id))
    }

    fn collection(&self) -> &str {
        &self.collection
    }
}

fn load_rows(path: &Path) -> Result<BTreeMap<String, ReviewState>, StoreError> {
    if !path.exists() {
        return Ok(BTreeMap::new());
    }

    let file = File::open(path)?;
    let reader = BufReader::new(file);
    Ok(serde_json::from_reader(reader)?)
}

fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), StoreError> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent)?;

    let temp_file = NamedTempFile::new_in(parent)?;
    {
        let mut writer = BufWriter::new(temp_file.as_file());
        writer.write_all(bytes)?;
        writer.flush()?;
    }

    temp_file.persist(path).map_err(|e| e.error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};
    use speaknest_types::Difficulty;
    use tempfile::TempDir;

    use super::*;

    fn state(word: &str, difficulty: Difficulty) -> ReviewState {
        let now = Utc::now();
        ReviewState {
            user_id: "u1".to_string(),
            word_id: word.to_string(),
            difficulty,
            last_reviewed: now,
            next_review: now + Duration::days(1),
            review_count: 1,
        }
    }

    #[tokio::test]
    async fn test_records_survive_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("wordLearningStatus.json");

        {
            let store = JsonFileStore::open(&path).await.unwrap();
            assert_eq!(store.collection(), "wordLearningStatus");
            let s = state("apple", Difficulty::Hard);
            store.put(&s.key(), &s).await.unwrap();
            let s = state("pear", Difficulty::Easy);
            store.put(&s.key(), &s).await.unwrap();
        }

        let reopened = JsonFileStore::open(&path).await.unwrap();
        let rows = reopened.query("u1").await.unwrap();
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().any(|s| s.word_id == "apple" && s.difficulty == Difficulty::Hard));
    }

    #[tokio::test]
    async fn test_file_is_keyed_by_user_and_word() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("wordLearningStatus.json");

        let store = JsonFileStore::open(&path).await.unwrap();
        let s = state("apple", Difficulty::Medium);
        store.put(&s.key(), &s).await.unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(json["u1_apple"]["difficulty"], "medium");
    }

    #[tokio::test]
    async fn test_failed_write_keeps_previous_rows() {
        let dir = TempDir::new().unwrap();
        let data_dir = dir.path().join("data");
        let path = data_dir.join("wordLearningStatus.json");

        let store = JsonFileStore::open(&path).await.unwrap();
        let apple = state("apple", Difficulty::Hard);
        store.put(&apple.key(), &apple).await.unwrap();

        // the data directory turns into a regular file, so no temp file can be created
        fs::remove_dir_all(&data_dir).unwrap();
        fs::write(&data_dir, "blocked").unwrap();

        let rerated = state("apple", Difficulty::Easy);
        assert!(store.put(&rerated.key(), &rerated).await.is_err());
        let pear = state("pear", Difficulty::Medium);
        assert!(store.put(&pear.key(), &pear).await.is_err());

        let rows = store.query("u1").await.unwrap();
        assert_eq!(rows, vec![apple]);
    }

    #[tokio::test]
    async fn test_corrupt_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("wordLearningStatus.json");
        fs::write(&path, "not json").unwrap();

        assert!(matches!(
            JsonFileStore::open(&path).await,
            Err(StoreError::Serde(_))
        ));
    }
}
