use crate::error::TagError;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

pub const NOTE_EXTENSION: &str = "md";

/// A Markdown file split into its raw front matter and body.
#[derive(Debug, Clone)]
pub struct Note {
    pub path: PathBuf,
    pub front_matter: Option<String>,
    pub body: String,
}

impl Note {
    pub fn load(path: &Path) -> Result<Note, TagError> {
        let raw = fs::read_to_string(path).map_err(|source| TagError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let (front_matter, body) = split_front_matter(&raw);
        Ok(Note {
            path: path.to_path_buf(),
            front_matter: front_matter.map(str::to_string),
            body: body.to_string(),
        })
    }
}

pub fn vault_dir() -> io::Result<PathBuf> {
    if let Ok(dir) = std::env::var("BULK_TAG_VAULT") {
        return Ok(PathBuf::from(dir));
    }
    std::env::current_dir()
}

pub fn ensure_dir(path: &Path) -> io::Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

/// Relative arguments are taken from the vault root, not the shell's cwd.
pub fn resolve_in_vault(vault: &Path, arg: &str) -> PathBuf {
    let p = Path::new(arg);
    if p.is_absolute() { p.to_path_buf() } else { vault.join(p) }
}

/// Path shown to the user: relative to the vault when possible.
pub fn display_path(vault: &Path, path: &Path) -> String {
    path.strip_prefix(vault).unwrap_or(path).to_string_lossy().to_string()
}

pub fn is_markdown(path: &Path) -> bool {
    path.is_file()
        && path.extension().and_then(|s| s.to_str()) == Some(NOTE_EXTENSION)
}

/// Append text to the end of a note without touching the rest of the file.
pub fn append_text(path: &Path, text: &str) -> Result<(), TagError> {
    let write_err = |source| TagError::Write { path: path.to_path_buf(), source };
    let mut file =
        OpenOptions::new().append(true).open(path).map_err(write_err)?;
    file.write_all(text.as_bytes()).map_err(write_err)
}

pub fn write_content(path: &Path, content: &str) -> Result<(), TagError> {
    fs::write(path, content)
        .map_err(|source| TagError::Write { path: path.to_path_buf(), source })
}

/// Split raw content into (front matter yaml, body).
///
/// A block only counts when the file starts with a `---` line and a closing
/// `---` line follows; otherwise the whole file is body.
pub fn split_front_matter(raw: &str) -> (Option<&str>, &str) {
    let rest = if let Some(r) = raw.strip_prefix("---\n") {
        r
    } else if let Some(r) = raw.strip_prefix("---\r\n") {
        r
    } else {
        return (None, raw);
    };

    // Empty block: the closing fence immediately follows the opening one.
    for fence in ["---\n", "---\r\n"] {
        if let Some(body) = rest.strip_prefix(fence) {
            return (Some(""), body);
        }
    }
    if rest == "---" {
        return (Some(""), "");
    }

    let lf = rest.find("\n---\n").map(|i| (i, i + 5));
    let crlf = rest.find("\n---\r\n").map(|i| (i, i + 6));
    let closing = match (lf, crlf) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, b) => a.or(b),
    }
    .or_else(|| rest.strip_suffix("\n---").map(|yaml| (yaml.len(), rest.len())));

    match closing {
        Some((yaml_end, body_start)) => (Some(&rest[..yaml_end]), &rest[body_start..]),
        None => (None, raw),
    }
}

/// Rebuild file content from serialized yaml and a body.
pub fn render_with_front_matter(yaml: &str, body: &str) -> String {
    let yaml = yaml.trim_end_matches('\n');
    if yaml.is_empty() || yaml == "{}" {
        return format!("---\n---\n{body}");
    }
    format!("---\n{yaml}\n---\n{body}")
}
