use crate::settings::PlacementMode;
use anyhow::{Result, anyhow};

pub struct ArgParser {
    iter: std::vec::IntoIter<String>,
    command_name: String,
}

impl ArgParser {
    pub fn new(args: Vec<String>, command_name: &str) -> Self {
        Self { iter: args.into_iter(), command_name: command_name.to_string() }
    }

    /// Extract a string value for a flag
    pub fn extract_value(&mut self, flag: &str) -> Result<String> {
        self.iter.next().ok_or_else(|| {
            anyhow!("Provide a value after {} for {}", flag, self.command_name)
        })
    }

    /// Extract a placement mode for -m/--mode
    pub fn extract_mode(&mut self, flag: &str) -> Result<PlacementMode> {
        let raw = self.extract_value(flag)?;
        raw.parse::<PlacementMode>().map_err(|e| anyhow!(e))
    }

    /// Get next positional argument
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<String> {
        self.iter.next()
    }

    /// Collect remaining args
    pub fn collect_remaining(self) -> Vec<String> {
        self.iter.collect()
    }
}

/// Flags shared by the three tagging commands.
#[derive(Default, Debug)]
pub struct TagFlags {
    /// Tag text given on the command line; skips the prompt.
    pub tags: Option<String>,
    /// Placement override for this run (remembered afterwards).
    pub mode: Option<PlacementMode>,
    pub dry_run: bool,
    pub use_fzf: bool,
    pub plain: bool,
    pub positional: Vec<String>,
}

impl TagFlags {
    pub fn parse(args: Vec<String>, command_name: &str) -> Result<Self> {
        let mut flags = TagFlags::default();
        let mut parser = ArgParser::new(args, command_name);
        while let Some(arg) = parser.next() {
            match arg.as_str() {
                "-t" | "--tags" => flags.tags = Some(parser.extract_value(&arg)?),
                "-m" | "--mode" => flags.mode = Some(parser.extract_mode(&arg)?),
                "-n" | "--dry-run" => flags.dry_run = true,
                "--fzf" => flags.use_fzf = true,
                "--plain" => flags.plain = true,
                "--" => {
                    flags.positional.extend(parser.collect_remaining());
                    break;
                }
                other if other.starts_with('-') && other.len() > 1 => {
                    return Err(anyhow!(
                        "Unknown flag for {command_name}: {other}"
                    ));
                }
                _ => flags.positional.push(arg),
            }
        }
        Ok(flags)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_arg_parser_extract_value() {
        let mut parser = ArgParser::new(strings(&["--tags", "a,b"]), "test");
        let flag = parser.next().unwrap();
        assert_eq!(flag, "--tags");
        assert_eq!(parser.extract_value("--tags").unwrap(), "a,b");
        assert!(parser.next().is_none());
    }

    #[test]
    fn test_arg_parser_missing_value() {
        let mut parser = ArgParser::new(strings(&["--mode"]), "folder");
        parser.next();
        let err = parser.extract_mode("--mode").unwrap_err();
        assert!(err.to_string().contains("--mode for folder"));
    }

    #[test]
    fn test_tag_flags_parse() {
        let flags = TagFlags::parse(
            strings(&["docs", "-t", "x, y", "--mode", "front-matter", "-n", "a.md"]),
            "files",
        )
        .unwrap();
        assert_eq!(flags.tags.as_deref(), Some("x, y"));
        assert_eq!(flags.mode, Some(PlacementMode::FrontMatter));
        assert!(flags.dry_run);
        assert_eq!(flags.positional, vec!["docs", "a.md"]);
    }

    #[test]
    fn test_tag_flags_double_dash_and_unknown() {
        let flags = TagFlags::parse(strings(&["--", "-odd.md"]), "files").unwrap();
        assert_eq!(flags.positional, vec!["-odd.md"]);

        assert!(TagFlags::parse(strings(&["--bogus"]), "files").is_err());
    }
}
