use crate::error::TagError;
use crate::frontmatter::FrontMatter;
use crate::note::{self, Note, is_markdown};
use crate::settings::PlacementMode;
use crate::tags::tag_candidates;
use std::path::{Path, PathBuf};

/// Outcome of one note in a batch.
#[derive(Debug)]
pub enum NoteOutcome {
    Tagged { path: PathBuf, added: Vec<String> },
    Skipped { path: PathBuf },
    Failed { path: PathBuf, error: TagError },
}

#[derive(Debug, Default)]
pub struct WriteReport {
    pub outcomes: Vec<NoteOutcome>,
}

impl WriteReport {
    pub fn tagged(&self) -> usize {
        self.count(|o| matches!(o, NoteOutcome::Tagged { .. }))
    }

    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, NoteOutcome::Skipped { .. }))
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, NoteOutcome::Failed { .. }))
    }

    fn count(&self, f: impl Fn(&NoteOutcome) -> bool) -> usize {
        self.outcomes.iter().filter(|o| f(o)).count()
    }
}

/// Applies a tag string to notes using the strategy picked by the mode.
pub struct TagWriter {
    mode: PlacementMode,
}

impl TagWriter {
    pub fn new(mode: PlacementMode) -> Self {
        Self { mode }
    }

    /// Tag every note independently. A failure on one note is recorded and
    /// the rest of the batch still runs; nothing already written is undone.
    pub fn apply(&self, notes: &[PathBuf], raw_tags: &str) -> WriteReport {
        let tags = tag_candidates(raw_tags);
        let mut report = WriteReport::default();
        if tags.is_empty() {
            tracing::info!("no tags to apply");
            return report;
        }
        for path in notes {
            let outcome = if !is_markdown(path) {
                NoteOutcome::Skipped { path: path.clone() }
            } else {
                let result = match self.mode {
                    PlacementMode::Inline => append_inline(path, &tags),
                    PlacementMode::FrontMatter => merge_front_matter(path, &tags),
                };
                match result {
                    Ok(()) => {
                        tracing::debug!(path = %path.display(), mode = %self.mode, "tagged note");
                        NoteOutcome::Tagged { path: path.clone(), added: tags.clone() }
                    }
                    Err(error) => {
                        tracing::warn!(path = %path.display(), error = %error, "failed to tag note");
                        NoteOutcome::Failed { path: path.clone(), error }
                    }
                }
            };
            report.outcomes.push(outcome);
        }
        report
    }
}

/// One append per tag, each on its own line. Existing inline tags are not
/// checked, so repeating a run duplicates the lines.
pub fn append_inline(path: &Path, tags: &[String]) -> Result<(), TagError> {
    for tag in tags {
        note::append_text(path, &format!("\n#{tag}"))?;
    }
    Ok(())
}

/// Merge tags into the `tags` list of the front matter, creating the block
/// when the note has none. The file is only rewritten once the merged yaml
/// has been produced, so a parse failure leaves it untouched.
pub fn merge_front_matter(path: &Path, tags: &[String]) -> Result<(), TagError> {
    let note = Note::load(path)?;
    let mut fm = match note.front_matter.as_deref() {
        Some(yaml) => FrontMatter::parse(yaml).map_err(|e| e.with_path(path))?,
        None => FrontMatter::new(),
    };

    fm.merge_tags(tags.iter().cloned());

    let yaml = fm.to_yaml().map_err(|e| e.with_path(path))?;
    note::write_content(path, &note::render_with_front_matter(&yaml, &note.body))
}
