use crate::args::TagFlags;
use crate::formatting::FormatContext;
use crate::help::terminal_columns;
use crate::note::display_path;
use crate::prompt::{PromptOutcome, TagPrompt};
use crate::settings::{PlacementMode, SettingsStore, settings_path};
use crate::shared::table::render_table;
use crate::target::Target;
use crate::writer::{NoteOutcome, TagWriter, WriteReport};
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

/// Owns the vault location and the loaded settings for one invocation.
pub struct App {
    vault: PathBuf,
    settings: SettingsStore,
    fmt: FormatContext,
}

impl App {
    pub fn new(vault: PathBuf, fmt: FormatContext) -> Self {
        let settings = SettingsStore::load(settings_path(&vault));
        Self { vault, settings, fmt }
    }

    pub fn with_settings(vault: PathBuf, settings: SettingsStore, fmt: FormatContext) -> Self {
        Self { vault, settings, fmt }
    }

    pub fn vault(&self) -> &Path {
        &self.vault
    }

    pub fn settings(&self) -> &SettingsStore {
        &self.settings
    }

    pub fn placement(&self) -> PlacementMode {
        self.settings.placement()
    }

    pub fn set_placement(&mut self, mode: PlacementMode) -> Result<()> {
        self.settings
            .set_placement(mode)
            .with_context(|| format!("could not remember placement mode {mode}"))
    }

    /// Resolve the target, collect tags, write them, and remember the mode.
    /// Returns `None` when nothing was written (dry run, cancel, no notes).
    pub fn run_tagging<R: BufRead, W: Write>(
        &mut self,
        target: &Target,
        flags: &TagFlags,
        input: &mut R,
        out: &mut W,
    ) -> Result<Option<WriteReport>> {
        let notes = target.resolve();
        tracing::info!(count = notes.len(), title = target.action_title(), "resolved notes");

        if notes.is_empty() {
            writeln!(out, "No notes to tag.")?;
            return Ok(None);
        }

        if flags.dry_run || matches!(target, Target::Search { .. }) {
            self.print_note_list(&notes, out)?;
        }
        if flags.dry_run {
            writeln!(out, "Dry run: {} note(s) would be tagged.", notes.len())?;
            return Ok(None);
        }

        let mode = flags.mode.unwrap_or_else(|| self.placement());
        let raw = match &flags.tags {
            Some(tags) => tags.clone(),
            None => {
                let prompt = TagPrompt::new(target.action_title(), target.default_tag_input(), mode);
                match prompt.ask(input, out, &self.fmt)? {
                    PromptOutcome::Submitted(raw) => raw,
                    PromptOutcome::Cancelled => {
                        writeln!(out, "Canceled; no notes were tagged.")?;
                        return Ok(None);
                    }
                }
            }
        };

        let report = TagWriter::new(mode).apply(&notes, &raw);
        if !report.outcomes.is_empty() {
            self.set_placement(mode)?;
        }
        self.print_report(&report, mode, out)?;
        Ok(Some(report))
    }

    fn print_note_list<W: Write>(&self, notes: &[PathBuf], out: &mut W) -> Result<()> {
        for path in notes {
            writeln!(out, "  {}", self.fmt.format_path(&display_path(&self.vault, path)))?;
        }
        Ok(())
    }

    fn print_report<W: Write>(
        &self,
        report: &WriteReport,
        mode: PlacementMode,
        out: &mut W,
    ) -> Result<()> {
        if report.outcomes.is_empty() {
            writeln!(out, "No tags given; nothing was written.")?;
            return Ok(());
        }

        let rows: Vec<Vec<String>> = report
            .outcomes
            .iter()
            .map(|o| match o {
                NoteOutcome::Tagged { path, added } => vec![
                    display_path(&self.vault, path),
                    "tagged".to_string(),
                    self.fmt.format_tags(added),
                ],
                NoteOutcome::Skipped { path } => {
                    vec![display_path(&self.vault, path), "skipped".to_string(), String::new()]
                }
                NoteOutcome::Failed { path, .. } => vec![
                    display_path(&self.vault, path),
                    self.fmt.format_error("failed"),
                    String::new(),
                ],
            })
            .collect();
        writeln!(out, "{}", render_table(&["Note", "Result", "Tags"], &rows, terminal_columns()))?;

        for o in &report.outcomes {
            if let NoteOutcome::Failed { error, .. } = o {
                eprintln!("{error}");
            }
        }

        writeln!(
            out,
            "Tagged {} note(s) ({} mode); {} skipped, {} failed.",
            self.fmt.format_count(report.tagged()),
            self.fmt.format_mode(mode),
            report.skipped(),
            report.failed()
        )?;
        Ok(())
    }
}
