use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::BrowserError;
use crate::model::{Classification, ClassificationKind, RiderRow, Row, TeamRow};

const EMBEDDED_DATASET: &str = include_str!("../../data/classifications.json");

/// Insertion-ordered, read-only map of classification key to classification.
#[derive(Debug, Clone, Default)]
pub struct ClassificationStore {
    classifications: Vec<Classification>,
    index: HashMap<String, usize>,
}

#[derive(Debug, Deserialize)]
struct RawDataset {
    classifications: Vec<RawClassification>,
}

#[derive(Debug, Deserialize)]
struct RawClassification {
    key: String,
    title: String,
    kind: ClassificationKind,
    columns: Vec<String>,
    rows: Vec<serde_json::Value>,
}

impl ClassificationStore {
    pub fn builtin() -> Result<Self, BrowserError> {
        Self::from_json(EMBEDDED_DATASET)
    }

    pub fn load(path: &Path) -> Result<Self, BrowserError> {
        let text = std::fs::read_to_string(path).map_err(|source| BrowserError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self, BrowserError> {
        let raw: RawDataset = serde_json::from_str(text).map_err(BrowserError::Dataset)?;
        let mut classifications = Vec::with_capacity(raw.classifications.len());
        for c in raw.classifications {
            let rows = decode_rows(&c.key, c.kind, c.rows)?;
            classifications.push(Classification {
                key: c.key,
                title: c.title,
                kind: c.kind,
                columns: c.columns,
                rows,
            });
        }
        Self::from_classifications(classifications)
    }

    pub fn from_classifications(
        classifications: Vec<Classification>,
    ) -> Result<Self, BrowserError> {
        let mut index = HashMap::with_capacity(classifications.len());
        for (i, c) in classifications.iter().enumerate() {
            if let Some(pos) = c.rows.iter().position(|row| !c.kind.matches(row)) {
                return Err(BrowserError::KindMismatch {
                    key: c.key.clone(),
                    row: pos,
                    kind: c.kind.as_str(),
                });
            }
            if index.insert(c.key.clone(), i).is_some() {
                return Err(BrowserError::DuplicateKey(c.key.clone()));
            }
        }
        tracing::debug!(
            classifications = classifications.len(),
            rows = classifications.iter().map(|c| c.rows.len()).sum::<usize>(),
            "classification store built"
        );
        Ok(Self {
            classifications,
            index,
        })
    }

    pub fn get(&self, key: &str) -> Option<&Classification> {
        self.index.get(key).map(|&i| &self.classifications[i])
    }

    pub fn require(&self, key: &str) -> Result<&Classification, BrowserError> {
        self.get(key)
            .ok_or_else(|| BrowserError::UnknownClassification(key.to_string()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.classifications.iter().map(|c| c.key.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Classification> {
        self.classifications.iter()
    }

    pub fn first_key(&self) -> Option<&str> {
        self.classifications.first().map(|c| c.key.as_str())
    }

    pub fn len(&self) -> usize {
        self.classifications.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classifications.is_empty()
    }
}

fn decode_rows(
    key: &str,
    kind: ClassificationKind,
    rows: Vec<serde_json::Value>,
) -> Result<Vec<Row>, BrowserError> {
    rows.into_iter()
        .enumerate()
        .map(|(i, value)| {
            let decoded = match kind {
                ClassificationKind::Rider => {
                    serde_json::from_value::<RiderRow>(value).map(Row::Rider)
                }
                ClassificationKind::Team => {
                    serde_json::from_value::<TeamRow>(value).map(Row::Team)
                }
            };
            decoded.map_err(|source| BrowserError::Row {
                key: key.to_string(),
                row: i,
                source,
            })
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/store/tests.rs"]
mod tests;
