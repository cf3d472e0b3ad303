//! Tag code → description table (`tags2name.csv`).

use crate::error::{DataError, Result};
use crate::events::Tag;
use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

const TAG_COLUMN: &str = "Tag";
const DESCRIPTION_COLUMN: &str = "Description";

/// Human-readable tag descriptions, used for inspection output only.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TagNames {
    names: BTreeMap<Tag, String>,
}

impl TagNames {
    /// Table with the built-in label of every tag.
    pub fn builtin() -> Self {
        Self {
            names: Tag::ALL
                .iter()
                .map(|tag| (*tag, tag.label().to_string()))
                .collect(),
        }
    }

    pub fn insert(&mut self, tag: Tag, description: impl Into<String>) {
        self.names.insert(tag, description.into());
    }

    pub fn description(&self, tag: Tag) -> Option<&str> {
        self.names.get(&tag).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Load the dataset's CSV. The delimiter (`,` or `;`) is taken from the
    /// header line.
    pub fn from_csv(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| DataError::io(path, e))?;
        Self::from_csv_reader(text.as_bytes(), &path.display().to_string())
    }

    pub fn from_csv_reader<R: Read>(mut reader: R, source: &str) -> Result<Self> {
        let mut text = String::new();
        reader
            .read_to_string(&mut text)
            .map_err(|e| DataError::io(Path::new(source), e))?;

        let header = text.lines().next().unwrap_or_default();
        let delimiter = if header.contains(';') { b';' } else { b',' };

        let mut csv = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .trim(csv::Trim::All)
            .from_reader(text.as_bytes());

        let headers = csv.headers()?.clone();
        let column = |name: &'static str| {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| DataError::MissingColumn {
                    column: name,
                    path: source.to_string(),
                })
        };
        let tag_idx = column(TAG_COLUMN)?;
        let desc_idx = column(DESCRIPTION_COLUMN)?;

        let mut table = Self::default();
        for record in csv.records() {
            let record = record?;
            let (Some(code), Some(description)) = (record.get(tag_idx), record.get(desc_idx)) else {
                continue;
            };
            let tag = match code.parse::<u16>().ok().map(Tag::try_from) {
                Some(Ok(tag)) => tag,
                _ => {
                    tracing::debug!("skipping tag row {:?} in {}", code, source);
                    continue;
                }
            };
            table.insert(tag, description);
        }
        Ok(table)
    }
}
