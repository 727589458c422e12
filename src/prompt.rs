use crate::formatting::FormatContext;
use crate::settings::PlacementMode;
use std::io::{self, BufRead, Write};

/// Typing this on its own line closes the prompt without tagging anything.
pub const CANCEL_WORD: &str = ":q";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptOutcome {
    Submitted(String),
    Cancelled,
}

/// Single-question prompt for the tag string.
pub struct TagPrompt<'a> {
    pub title: &'a str,
    pub default: String,
    pub mode: PlacementMode,
}

impl<'a> TagPrompt<'a> {
    pub fn new(title: &'a str, default: String, mode: PlacementMode) -> Self {
        Self { title, default, mode }
    }

    /// Print the prompt and read one line. An empty line submits the
    /// pre-filled default; end of input or `:q` cancels.
    pub fn ask<R: BufRead, W: Write>(
        &self,
        input: &mut R,
        out: &mut W,
        ctx: &FormatContext,
    ) -> io::Result<PromptOutcome> {
        writeln!(out, "{}", ctx.format_header("Please type in a tag."))?;
        writeln!(
            out,
            "{}",
            ctx.format_muted(&format!(
                "{} ({} mode). If you add multiple tags, separate them with commas. Do not add '#'. Enter {CANCEL_WORD} to cancel.",
                self.title, self.mode
            ))
        )?;
        if self.default.is_empty() {
            write!(out, "> ")?;
        } else {
            write!(out, "[{}] > ", self.default)?;
        }
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            return Ok(PromptOutcome::Cancelled);
        }
        let line = line.trim_end_matches(['\n', '\r']);
        if line.trim() == CANCEL_WORD {
            return Ok(PromptOutcome::Cancelled);
        }
        if line.is_empty() {
            return Ok(PromptOutcome::Submitted(self.default.clone()));
        }
        Ok(PromptOutcome::Submitted(line.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn ask(prompt: &TagPrompt<'_>, typed: &str) -> (PromptOutcome, String) {
        let mut input = Cursor::new(typed.as_bytes().to_vec());
        let mut out = Vec::new();
        let outcome = prompt
            .ask(&mut input, &mut out, &FormatContext::new(false))
            .unwrap();
        (outcome, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_enter_submits_default() {
        let p = TagPrompt::new("Tag folder's files", "My-Folder".into(), PlacementMode::Inline);
        let (outcome, shown) = ask(&p, "\n");
        assert_eq!(outcome, PromptOutcome::Submitted("My-Folder".into()));
        assert!(shown.contains("[My-Folder] > "));
        assert!(shown.contains("separate them with commas"));
    }

    #[test]
    fn test_typed_text_replaces_default() {
        let p = TagPrompt::new("t", "d".into(), PlacementMode::FrontMatter);
        let (outcome, shown) = ask(&p, "a, b\r\n");
        assert_eq!(outcome, PromptOutcome::Submitted("a, b".into()));
        assert!(shown.contains("front-matter mode"));
    }

    #[test]
    fn test_cancel_on_eof_and_word() {
        let p = TagPrompt::new("t", "d".into(), PlacementMode::Inline);
        assert_eq!(ask(&p, "").0, PromptOutcome::Cancelled);
        assert_eq!(ask(&p, ":q\n").0, PromptOutcome::Cancelled);
    }
}
