use crate::error::TagError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub const SETTINGS_FILE: &str = ".bulk_tag.json";

/// Where new tags are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PlacementMode {
    /// `#tag` lines appended to the note body.
    #[default]
    Inline,
    /// Merged into the `tags` list of the YAML front matter.
    FrontMatter,
}

impl PlacementMode {
    pub fn label(self) -> &'static str {
        match self {
            PlacementMode::Inline => "inline",
            PlacementMode::FrontMatter => "front-matter",
        }
    }
}

impl fmt::Display for PlacementMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PlacementMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "inline" => Ok(PlacementMode::Inline),
            "front-matter" | "frontmatter" | "yaml" => {
                Ok(PlacementMode::FrontMatter)
            }
            other => Err(format!(
                "Unknown placement mode: {other} (expected inline|front-matter)"
            )),
        }
    }
}

/// Persisted plugin state. Missing fields fall back to their defaults so older
/// files keep loading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    #[serde(rename = "yamlOrInline")]
    pub placement: PlacementMode,
}

/// Settings plus the file they came from.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
    settings: Settings,
}

impl SettingsStore {
    /// Load from disk. A missing file yields defaults; a broken one is logged
    /// and also yields defaults, and is overwritten on the next save.
    pub fn load(path: PathBuf) -> Self {
        let settings = match fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                tracing::warn!(path = %path.display(), error = %e, "ignoring malformed settings file");
                Settings::default()
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Settings::default(),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "could not read settings file");
                Settings::default()
            }
        };
        tracing::debug!(path = %path.display(), mode = %settings.placement, "settings loaded");
        Self { path, settings }
    }

    pub fn placement(&self) -> PlacementMode {
        self.settings.placement
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Replace the placement mode and persist the whole record.
    pub fn set_placement(&mut self, mode: PlacementMode) -> Result<(), TagError> {
        self.settings.placement = mode;
        self.save()
    }

    pub fn save(&self) -> Result<(), TagError> {
        let settings_err =
            |source| TagError::Settings { path: self.path.clone(), source };
        if let Some(parent) = self.path.parent() {
            crate::note::ensure_dir(parent).map_err(settings_err)?;
        }
        let json = serde_json::to_string_pretty(&self.settings)
            .map_err(|e| settings_err(std::io::Error::other(e)))?;
        fs::write(&self.path, json).map_err(settings_err)
    }
}

/// `BULK_TAG_SETTINGS` when set, otherwise a dotfile in the vault root.
pub fn settings_path(vault: &Path) -> PathBuf {
    if let Ok(p) = std::env::var("BULK_TAG_SETTINGS") {
        return PathBuf::from(p);
    }
    vault.join(SETTINGS_FILE)
}
