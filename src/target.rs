//! Turns what the user picked (a folder, a list of paths, or search hits)
//! into the flat list of notes to tag.

use crate::note::{NOTE_EXTENSION, display_path, is_markdown};
use crate::tags::folder_default_tag;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Clone)]
pub enum Target {
    /// Every note below a folder, at any depth.
    Folder(PathBuf),
    /// An explicit multi-selection of files and folders.
    Selection(Vec<PathBuf>),
    /// Paths returned by a vault search.
    Search { query: String, hits: Vec<PathBuf> },
}

impl Target {
    /// Notes to tag, in walk order, each at most once.
    pub fn resolve(&self) -> Vec<PathBuf> {
        let mut seen = HashSet::new();
        let mut out = Vec::new();
        let entries: &[PathBuf] = match self {
            Target::Folder(dir) => std::slice::from_ref(dir),
            Target::Selection(paths) => paths,
            Target::Search { hits, .. } => hits,
        };
        for entry in entries {
            if entry.is_dir() {
                for note in notes_under(entry) {
                    push_unique(&mut out, &mut seen, note);
                }
            } else if is_markdown(entry) {
                push_unique(&mut out, &mut seen, entry.clone());
            } else {
                tracing::debug!(path = %entry.display(), "skipping non-note entry");
            }
        }
        out
    }

    /// Pre-filled prompt value: the folder's name for folder targets.
    pub fn default_tag_input(&self) -> String {
        match self {
            Target::Folder(dir) => dir
                .file_name()
                .and_then(|s| s.to_str())
                .map(folder_default_tag)
                .unwrap_or_default(),
            _ => String::new(),
        }
    }

    /// Heading shown above the prompt, mirroring the menu entry that was used.
    pub fn action_title(&self) -> &'static str {
        match self {
            Target::Folder(_) => "Tag folder's files",
            Target::Selection(_) => "Tag selected files",
            Target::Search { .. } => "Add tags to search results",
        }
    }
}

fn push_unique(out: &mut Vec<PathBuf>, seen: &mut HashSet<PathBuf>, path: PathBuf) {
    if seen.insert(path.clone()) {
        out.push(path);
    }
}

/// Depth-first walk in file-name order, keeping `.md` files.
pub fn notes_under(dir: &Path) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| match e {
            Ok(entry) => Some(entry),
            Err(err) => {
                tracing::warn!(error = %err, "skipping unreadable entry");
                None
            }
        })
        .filter(|e| e.file_type().is_file())
        .filter(|e| {
            e.path().extension().and_then(|s| s.to_str()) == Some(NOTE_EXTENSION)
        })
        .map(|e| e.into_path())
        .collect()
}

/// Notes whose vault-relative path or content contains `query`,
/// ignoring case. Hidden directories such as `.git` are not searched.
pub fn search_vault(vault: &Path, query: &str) -> Vec<PathBuf> {
    let needle = query.to_lowercase();
    WalkDir::new(vault)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden(e.file_name()))
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|p| p.extension().and_then(|s| s.to_str()) == Some(NOTE_EXTENSION))
        .filter(|p| {
            if display_path(vault, p).to_lowercase().contains(&needle) {
                return true;
            }
            fs::read_to_string(p)
                .map(|raw| raw.to_lowercase().contains(&needle))
                .unwrap_or(false)
        })
        .collect()
}

fn is_hidden(name: &std::ffi::OsStr) -> bool {
    name.to_str().map(|s| s.starts_with('.')).unwrap_or(false)
}
