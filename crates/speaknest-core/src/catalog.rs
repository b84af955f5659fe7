use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;
use speaknest_types::{Word, WordGroup};

use crate::error::CatalogError;

#[derive(Deserialize)]
struct CatalogFile {
    #[serde(default)]
    groups: Vec<WordGroup>,
    #[serde(default)]
    words: Vec<Word>,
}

/// Word groups and their words, as maintained by content editors
#[derive(Debug, Default)]
pub struct VocabularyCatalog {
    groups: Vec<WordGroup>,
    words: HashMap<String, Word>,
}

impl VocabularyCatalog {
    pub fn from_json_str(raw: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(raw)?;
        Self::build(file)
    }

    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        if !path.exists() {
            return Err(CatalogError::FileNotFound(path.display().to_string()));
        }

        let reader = BufReader::new(File::open(path)?);
        let file: CatalogFile = serde_json::from_reader(reader)?;
        let catalog = Self::build(file)?;

        tracing::info!(
            "Loaded {} word groups and {} words from {}",
            catalog.groups.len(),
            catalog.words.len(),
            path.display()
        );
        Ok(catalog)
    }

    fn build(file: CatalogFile) -> Result<Self, CatalogError> {
        let mut groups = file.groups;

        for word in &file.words {
            if !groups.iter().any(|g| g.id == word.group_id) {
                return Err(CatalogError::UnknownGroup {
                    word: word.id.clone(),
                    group: word.group_id.clone(),
                });
            }
        }

        // stored counts drift; recount from the words themselves
        for group in &mut groups {
            group.word_count = file.words.iter().filter(|w| w.group_id == group.id).count();
        }

        let words = file.words.into_iter().map(|w| (w.id.clone(), w)).collect();
        Ok(Self { groups, words })
    }

    pub fn word(&self, id: &str) -> Option<&Word> {
        self.words.get(id)
    }

    pub fn group(&self, id: &str) -> Option<&WordGroup> {
        self.groups.iter().find(|g| g.id == id)
    }

    pub fn groups(&self) -> &[WordGroup] {
        &self.groups
    }

    /// Words of a group, ordered by their english text
    pub fn words_in(&self, group_id: &str) -> Vec<&Word> {
        let mut words: Vec<&Word> = self
            .words
            .values()
            .filter(|w| w.group_id == group_id)
            .collect();
        words.sort_by(|a, b| a.english.cmp(&b.english));
        words
    }

    pub fn groups_by_level(&self, level: &str) -> Vec<&WordGroup> {
        self.groups
            .iter()
            .filter(|g| g.level.eq_ignore_ascii_case(level))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
