//! Typed view over a note's YAML front matter.
//!
//! Keys keep their original order. The `tags` key is the only one this crate
//! writes; older tools sometimes wrote `TAGS` or `Tags`, and those are folded
//! into `tags` whenever new tags are merged in.

use crate::error::TagError;
use crate::tags::TagSet;
use serde_yaml::{Mapping, Value};
use std::path::PathBuf;

pub const TAGS_KEY: &str = "tags";
pub const LEGACY_TAG_KEYS: [&str; 2] = ["TAGS", "Tags"];

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrontMatter {
    map: Mapping,
}

impl FrontMatter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the YAML between the `---` fences. The error carries no path yet;
    /// callers attach one with [`TagError::with_path`].
    pub fn parse(yaml: &str) -> Result<Self, TagError> {
        if yaml.trim().is_empty() {
            return Ok(Self::new());
        }
        let value: Value = serde_yaml::from_str(yaml).map_err(|e| {
            TagError::FrontMatter { path: PathBuf::new(), reason: e.to_string() }
        })?;
        match value {
            Value::Null => Ok(Self::new()),
            Value::Mapping(map) => Ok(Self { map }),
            other => Err(TagError::FrontMatter {
                path: PathBuf::new(),
                reason: format!("expected a mapping, found {}", kind(&other)),
            }),
        }
    }

    pub fn to_yaml(&self) -> Result<String, TagError> {
        serde_yaml::to_string(&self.map).map_err(|e| TagError::FrontMatter {
            path: PathBuf::new(),
            reason: e.to_string(),
        })
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.map.contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Fold `tags`, `TAGS` and `Tags` into one `tags` sequence and append
    /// `new` to it, skipping names already present.
    ///
    /// The merged key sits where the first tag key sat (or at the end when
    /// there was none); every other key keeps its position. Entries that are
    /// not plain scalars, such as nested lists or mappings, are carried over
    /// untouched.
    pub fn merge_tags<I, S>(&mut self, new: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut rest = Mapping::with_capacity(self.map.len());
        let mut slot = None;
        let mut found: Vec<(usize, Value)> = Vec::new();
        for (key, value) in std::mem::take(&mut self.map) {
            match key.as_str().and_then(tag_key_rank) {
                Some(rank) => {
                    slot.get_or_insert(rest.len());
                    found.push((rank, value));
                }
                None => {
                    rest.insert(key, value);
                }
            }
        }
        found.sort_by_key(|(rank, _)| *rank);

        let mut merged = TagValues::default();
        for (rank, value) in found {
            if rank > 0 {
                tracing::debug!(key = LEGACY_TAG_KEYS[rank - 1], "migrating legacy tag key");
            }
            merged.extend_from(value);
        }
        for tag in new {
            merged.push(Value::String(tag.into()));
        }

        let slot = slot.unwrap_or(rest.len());
        let mut tags = Some(Value::Sequence(merged.values));
        for (i, (key, value)) in rest.into_iter().enumerate() {
            if i == slot {
                if let Some(tags) = tags.take() {
                    self.map.insert(Value::String(TAGS_KEY.to_string()), tags);
                }
            }
            self.map.insert(key, value);
        }
        if let Some(tags) = tags {
            self.map.insert(Value::String(TAGS_KEY.to_string()), tags);
        }
    }

    /// Read-only view of the scalar tag names without migrating anything.
    pub fn tags(&self) -> TagSet {
        self.map.get(TAGS_KEY).map(tags_from_value).unwrap_or_default().into_iter().collect()
    }

    #[cfg(test)]
    pub(crate) fn keys(&self) -> Vec<String> {
        self.map.keys().map(|k| scalar_to_string(k).unwrap_or_default()).collect()
    }
}

/// 0 for `tags`, then the legacy keys in migration order.
fn tag_key_rank(key: &str) -> Option<usize> {
    if key == TAGS_KEY {
        return Some(0);
    }
    LEGACY_TAG_KEYS.iter().position(|k| *k == key).map(|i| i + 1)
}

/// Ordered tag entries. Scalars are deduplicated by their text, anything
/// else by structural equality.
#[derive(Default)]
struct TagValues {
    names: TagSet,
    values: Vec<Value>,
}

impl TagValues {
    fn push(&mut self, value: Value) {
        let fresh = match scalar_to_string(&value) {
            Some(name) => self.names.insert(name),
            None => !self.values.contains(&value),
        };
        if fresh {
            self.values.push(value);
        }
    }

    fn extend_from(&mut self, value: Value) {
        match value {
            Value::Sequence(seq) => seq.into_iter().for_each(|v| self.push(v)),
            Value::String(s) => {
                for name in s.split(',').map(str::trim).filter(|t| !t.is_empty()) {
                    self.push(Value::String(name.to_string()));
                }
            }
            Value::Null => {}
            other => self.push(other),
        }
    }
}

fn tags_from_value(value: &Value) -> Vec<String> {
    match value {
        Value::Sequence(seq) => seq.iter().filter_map(scalar_to_string).collect(),
        Value::String(s) => s
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect(),
        Value::Null => Vec::new(),
        other => scalar_to_string(other).into_iter().collect(),
    }
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
