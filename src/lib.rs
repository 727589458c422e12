//! Bulk-apply tags to Markdown notes in a vault: every note under a folder,
//! an explicit selection, or the hits of a search. Tags go either inline as
//! `#tag` lines or into the YAML front matter `tags` list.

pub mod app;
pub mod args;
pub mod error;
pub mod formatting;
pub mod frontmatter;
pub mod fzf;
mod help;
pub mod note;
pub mod prompt;
pub mod settings;
pub mod shared;
pub mod tags;
pub mod target;
pub mod writer;

use crate::app::App;
use crate::args::TagFlags;
use crate::formatting::FormatContext;
use crate::fzf::{FzfSelector, is_fzf_available};
use crate::note::{resolve_in_vault, vault_dir};
use crate::settings::PlacementMode;
use crate::target::{Target, search_vault};
use anyhow::{Context, Result, bail};
use std::env;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

pub fn entry() -> Result<()> {
    init_logging();

    let mut args: Vec<String> = env::args().skip(1).collect();
    if args.is_empty() {
        return help::run(Vec::new());
    }

    let cmd = args.remove(0);
    if matches!(cmd.as_str(), "help" | "-h" | "--help") {
        return help::run(args);
    }

    let vault = vault_dir().context("could not determine the vault directory")?;
    if !vault.is_dir() {
        bail!("Vault not found: {}", vault.display());
    }

    match cmd.as_str() {
        "folder" => tag_folder(args, vault)?,
        "files" => tag_files(args, vault)?,
        "search" => tag_search(args, vault)?,
        "mode" => placement_mode(args, vault)?,
        "path" => {
            let app = App::new(vault, FormatContext::from_env());
            println!("vault: {}", app.vault().display());
            println!("settings: {}", app.settings().path().display());
        }
        other => {
            bail!("Unknown command: {other} (see `bt help`)");
        }
    }

    Ok(())
}

/// Log to stderr; `BULK_TAG_LOG` takes the usual `EnvFilter` syntax.
fn init_logging() {
    let filter = EnvFilter::try_from_env("BULK_TAG_LOG")
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

fn format_context(flags: &TagFlags) -> FormatContext {
    if flags.plain { FormatContext::new(false) } else { FormatContext::from_env() }
}

fn run_target(target: Target, flags: TagFlags, vault: PathBuf) -> Result<()> {
    let mut app = App::new(vault, format_context(&flags));
    let stdin = io::stdin();
    let stdout = io::stdout();
    app.run_tagging(&target, &flags, &mut stdin.lock(), &mut stdout.lock())?;
    Ok(())
}

fn tag_folder(args: Vec<String>, vault: PathBuf) -> Result<()> {
    let flags = TagFlags::parse(args, "folder")?;
    let Some(arg) = flags.positional.first() else {
        bail!("Usage: bt folder <dir> [-t tags] [-m inline|front-matter] [-n]");
    };
    let dir = resolve_in_vault(&vault, arg);
    if !dir.is_dir() {
        bail!("Folder not found: {}", dir.display());
    }
    run_target(Target::Folder(dir), flags, vault)
}

fn tag_files(args: Vec<String>, vault: PathBuf) -> Result<()> {
    let flags = TagFlags::parse(args, "files")?;
    let mut paths: Vec<_> =
        flags.positional.iter().map(|p| resolve_in_vault(&vault, p)).collect();

    if paths.is_empty() || flags.use_fzf {
        if !is_fzf_available() {
            bail!("Provide note paths, or install fzf for interactive selection");
        }
        let candidates = search_vault(&vault, "");
        let picked = FzfSelector::for_notes().select_notes(&vault, &candidates)?;
        if picked.is_empty() && paths.is_empty() {
            println!("No selection made; nothing tagged.");
            return Ok(());
        }
        paths.extend(picked);
    }

    run_target(Target::Selection(paths), flags, vault)
}

fn tag_search(args: Vec<String>, vault: PathBuf) -> Result<()> {
    let flags = TagFlags::parse(args, "search")?;
    if flags.positional.is_empty() {
        bail!("Usage: bt search <query> [-t tags] [-m inline|front-matter] [-n]");
    }
    let query = flags.positional.join(" ");
    let hits = search_vault(&vault, &query);
    println!("{} result(s) for \"{query}\"", hits.len());
    run_target(Target::Search { query, hits }, flags, vault)
}

fn placement_mode(args: Vec<String>, vault: PathBuf) -> Result<()> {
    let fmt = FormatContext::from_env();
    let mut app = App::new(vault, FormatContext::new(fmt.use_color));
    match args.first() {
        None => println!("{}", fmt.format_mode(app.placement())),
        Some(raw) => {
            let mode: PlacementMode = raw.parse().map_err(anyhow::Error::msg)?;
            app.set_placement(mode)?;
            println!("Placement mode set to {}", fmt.format_mode(mode));
        }
    }
    Ok(())
}
