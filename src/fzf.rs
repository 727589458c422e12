use anyhow::{Context, Result, bail};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::sync::OnceLock;

/// Thin wrapper around `fzf --multi` for picking notes interactively.
pub struct FzfSelector {
    preview_command: Option<String>,
    multi_select: bool,
    height: Option<String>,
    layout: Option<String>,
    prompt: Option<String>,
}

impl FzfSelector {
    pub fn new() -> Self {
        Self {
            preview_command: None,
            multi_select: false,
            height: None,
            layout: None,
            prompt: None,
        }
    }

    /// Multi-select over vault-relative note paths with a file preview.
    /// fzf runs with the vault as its working directory so `{}` resolves.
    pub fn for_notes() -> Self {
        Self {
            preview_command: Some("sed -n '1,120p' {}".to_string()),
            multi_select: true,
            height: Some("70%".to_string()),
            layout: Some("reverse".to_string()),
            prompt: Some("tag> ".to_string()),
        }
    }

    pub fn multi_select(mut self, enabled: bool) -> Self {
        self.multi_select = enabled;
        self
    }

    pub fn height(mut self, height: &str) -> Self {
        self.height = Some(height.to_string());
        self
    }

    pub fn layout(mut self, layout: &str) -> Self {
        self.layout = Some(layout.to_string());
        self
    }

    fn command(&self, cwd: &Path) -> Command {
        let mut cmd = Command::new("fzf");
        cmd.current_dir(cwd);
        if self.multi_select {
            cmd.arg("--multi");
        }
        if let Some(ref height) = self.height {
            cmd.arg("--height").arg(height);
        }
        if let Some(ref layout) = self.layout {
            cmd.arg("--layout").arg(layout);
        }
        if let Some(ref preview) = self.preview_command {
            cmd.arg("--preview").arg(preview);
        }
        if let Some(ref prompt) = self.prompt {
            cmd.arg("--prompt").arg(prompt);
        }
        cmd
    }

    /// Let the user pick among `notes`; an empty result means the picker was
    /// dismissed.
    pub fn select_notes(&self, vault: &Path, notes: &[PathBuf]) -> Result<Vec<PathBuf>> {
        let input = notes
            .iter()
            .map(|p| crate::note::display_path(vault, p))
            .collect::<Vec<_>>()
            .join("\n");
        let picked = self.select_from_input(vault, &input)?;
        Ok(picked.iter().map(|line| vault.join(line)).collect())
    }

    /// Select from raw input string
    pub fn select_from_input(&self, cwd: &Path, input: &str) -> Result<Vec<String>> {
        if !is_fzf_available() {
            bail!("fzf is not installed or BULK_TAG_NO_FZF is set");
        }

        let mut child = self
            .command(cwd)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .spawn()
            .context("failed to launch fzf")?;

        if let Some(stdin) = child.stdin.as_mut() {
            stdin.write_all(input.as_bytes())?;
        }

        let output = child.wait_with_output()?;

        if !output.status.success() || output.stdout.is_empty() {
            return Ok(Vec::new()); // User cancelled
        }

        let selected = String::from_utf8_lossy(&output.stdout);
        Ok(selected.lines().map(|s| s.to_string()).collect())
    }
}

impl Default for FzfSelector {
    fn default() -> Self {
        Self::new()
    }
}

/// Check if fzf is available
pub fn is_fzf_available() -> bool {
    if std::env::var("BULK_TAG_NO_FZF").is_ok() {
        return false;
    }

    static FZF_AVAILABLE: OnceLock<bool> = OnceLock::new();
    *FZF_AVAILABLE.get_or_init(|| {
        Command::new("fzf")
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .is_ok()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fzf_selector_builder() {
        let selector = FzfSelector::new()
            .multi_select(true)
            .height("50%")
            .layout("reverse");

        assert!(selector.multi_select);
        assert_eq!(selector.height.as_deref(), Some("50%"));
        assert_eq!(selector.layout.as_deref(), Some("reverse"));
        assert!(selector.prompt.is_none());
    }

    #[test]
    fn test_for_notes() {
        let selector = FzfSelector::for_notes();
        assert!(selector.multi_select);
        assert!(selector.preview_command.unwrap().contains("{}"));
        assert_eq!(selector.prompt.as_deref(), Some("tag> "));
    }
}
