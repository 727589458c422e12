#![allow(deprecated)]

#[allow(unused_imports)]
use assert_cmd::cargo::CommandCargoExt;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn cmd(temp: &TempDir) -> assert_cmd::Command {
    let mut c = assert_cmd::Command::cargo_bin("bulk_tag").unwrap();
    c.env("BULK_TAG_VAULT", temp.path())
        .env("NO_COLOR", "1")
        .env("BULK_TAG_NO_FZF", "1")
        .env_remove("BULK_TAG_SETTINGS")
        .env_remove("BULK_TAG_LOG");
    c
}

fn write_file(root: &Path, rel: &str, content: &str) -> PathBuf {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, content).unwrap();
    path
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap()
}

fn front_matter_tags(path: &Path) -> Vec<String> {
    let raw = read(path);
    let rest = raw.strip_prefix("---\n").expect("front matter block");
    let end = rest.find("\n---\n").expect("closing fence");
    let value: serde_yaml::Value = serde_yaml::from_str(&rest[..end]).unwrap();
    value["tags"]
        .as_sequence()
        .expect("tags list")
        .iter()
        .map(|v| v.as_str().unwrap().to_string())
        .collect()
}

#[test]
fn folder_tags_markdown_at_every_depth() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    let top = write_file(root, "proj/top.md", "top");
    let mid = write_file(root, "proj/a/mid.md", "mid");
    let deep = write_file(root, "proj/a/b/deep.md", "deep");
    let image = write_file(root, "proj/a/pic.png", "png");
    let text = write_file(root, "proj/a/b/readme.txt", "txt");
    let outside = write_file(root, "elsewhere.md", "outside");

    cmd(&temp)
        .args(["folder", "proj", "-t", "p"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Tagged 3 note(s)"));

    for note in [&top, &mid, &deep] {
        assert!(read(note).ends_with("\n#p"), "{}", note.display());
    }
    assert_eq!(read(&image), "png");
    assert_eq!(read(&text), "txt");
    assert_eq!(read(&outside), "outside");
}

#[test]
fn folder_prompt_offers_folder_name() {
    let temp = TempDir::new().unwrap();
    let note = write_file(temp.path(), "Weekly Review/w1.md", "w1");

    cmd(&temp)
        .args(["folder", "Weekly Review"])
        .write_stdin("\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("[Weekly-Review] > "));

    assert_eq!(read(&note), "w1\n#Weekly-Review");
}

#[test]
fn prompt_cancel_writes_nothing() {
    let temp = TempDir::new().unwrap();
    let note = write_file(temp.path(), "box/n.md", "n");

    cmd(&temp)
        .args(["folder", "box"])
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Canceled"));

    assert_eq!(read(&note), "n");
    assert!(!temp.path().join(".bulk_tag.json").exists());
}

#[test]
fn selection_expands_folders_and_tags_each_note_once() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    let inside = write_file(root, "dir/inside.md", "inside");
    let alone = write_file(root, "alone.md", "alone");
    let other = write_file(root, "other.txt", "other");

    cmd(&temp)
        .args(["files", "dir", "alone.md", "dir/inside.md", "other.txt", "-t", "s"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Tagged 2 note(s)"));

    assert_eq!(read(&inside), "inside\n#s");
    assert_eq!(read(&alone), "alone\n#s");
    assert_eq!(read(&other), "other");
}

#[test]
fn inline_mode_duplicates_on_repeat() {
    let temp = TempDir::new().unwrap();
    let note = write_file(temp.path(), "n.md", "body");

    for _ in 0..2 {
        cmd(&temp)
            .args(["files", "n.md", "-t", "x", "-m", "inline"])
            .assert()
            .success();
    }
    assert_eq!(read(&note), "body\n#x\n#x");
}

#[test]
fn front_matter_mode_is_idempotent() {
    let temp = TempDir::new().unwrap();
    let note = write_file(temp.path(), "n.md", "---\ntitle: Note\n---\nbody\n");

    for _ in 0..2 {
        cmd(&temp)
            .args(["files", "n.md", "-t", "x", "-m", "front-matter"])
            .assert()
            .success();
    }
    assert_eq!(front_matter_tags(&note), vec!["x"]);
    let raw = read(&note);
    assert!(raw.contains("title: Note"));
    assert!(raw.ends_with("---\nbody\n"));
}

#[test]
fn legacy_tag_keys_are_folded_into_tags() {
    let temp = TempDir::new().unwrap();
    let note = write_file(temp.path(), "n.md", "---\nTAGS: [\"a\"]\n---\nbody\n");

    cmd(&temp)
        .args(["files", "n.md", "-t", "b", "-m", "front-matter"])
        .assert()
        .success();

    let mut tags = front_matter_tags(&note);
    tags.sort();
    assert_eq!(tags, vec!["a", "b"]);
    let raw = read(&note);
    assert!(!raw.contains("TAGS"));
    assert!(!raw.contains("Tags:"));
}

#[test]
fn placement_mode_is_remembered() {
    let temp = TempDir::new().unwrap();
    let first = write_file(temp.path(), "first.md", "one");
    let second = write_file(temp.path(), "second.md", "two");

    cmd(&temp)
        .args(["files", "first.md", "-t", "a", "-m", "front-matter"])
        .assert()
        .success();

    let settings = read(&temp.path().join(".bulk_tag.json"));
    assert!(settings.contains("\"yamlOrInline\": \"frontMatter\""));

    cmd(&temp)
        .args(["mode"])
        .assert()
        .success()
        .stdout(predicate::str::contains("front-matter"));

    cmd(&temp)
        .args(["files", "second.md"])
        .write_stdin("b\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("front-matter mode"));

    assert_eq!(front_matter_tags(&first), vec!["a"]);
    assert_eq!(front_matter_tags(&second), vec!["b"]);
}

#[test]
fn mode_command_sets_and_rejects() {
    let temp = TempDir::new().unwrap();
    cmd(&temp)
        .args(["mode", "front-matter"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Placement mode set to front-matter"));
    cmd(&temp)
        .args(["mode", "inline"])
        .assert()
        .success();
    cmd(&temp)
        .args(["mode"])
        .assert()
        .success()
        .stdout(predicate::str::contains("inline"));
    cmd(&temp)
        .args(["mode", "sideways"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown placement mode"));
}

#[test]
fn malformed_front_matter_does_not_stop_the_batch() {
    let temp = TempDir::new().unwrap();
    let broken_content = "---\ntags: [a, b\n---\nbody\n";
    let broken = write_file(temp.path(), "notes/broken.md", broken_content);
    let good = write_file(temp.path(), "notes/good.md", "body\n");

    cmd(&temp)
        .args(["folder", "notes", "-t", "z", "-m", "front-matter"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 failed"))
        .stderr(predicate::str::contains("broken.md"));

    assert_eq!(read(&broken), broken_content);
    assert_eq!(front_matter_tags(&good), vec!["z"]);
}

#[test]
fn search_tags_only_matching_notes() {
    let temp = TempDir::new().unwrap();
    let hit = write_file(temp.path(), "a.md", "Weekly MEETING notes");
    let by_name = write_file(temp.path(), "meetings/b.md", "agenda");
    let miss = write_file(temp.path(), "c.md", "groceries");

    cmd(&temp)
        .args(["search", "meeting", "-t", "meeting"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 result(s)"));

    assert!(read(&hit).ends_with("\n#meeting"));
    assert!(read(&by_name).ends_with("\n#meeting"));
    assert_eq!(read(&miss), "groceries");
}

#[test]
fn dry_run_and_empty_tags_write_nothing() {
    let temp = TempDir::new().unwrap();
    let note = write_file(temp.path(), "box/n.md", "n");

    cmd(&temp)
        .args(["folder", "box", "-t", "x", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("box/n.md"))
        .stdout(predicate::str::contains("Dry run"));

    cmd(&temp)
        .args(["files", "box/n.md", "-t", " , "])
        .assert()
        .success()
        .stdout(predicate::str::contains("nothing was written"));

    assert_eq!(read(&note), "n");
}

#[test]
fn files_without_paths_needs_fzf() {
    let temp = TempDir::new().unwrap();
    write_file(temp.path(), "n.md", "n");
    cmd(&temp)
        .args(["files", "-t", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("install fzf"));
}

#[test]
fn errors_for_bad_input() {
    let temp = TempDir::new().unwrap();
    cmd(&temp).args(["folder", "missing"]).assert().failure();
    cmd(&temp).args(["folder"]).assert().failure();
    cmd(&temp).args(["search"]).assert().failure();
    cmd(&temp)
        .args(["nonsense"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown command"));
    cmd(&temp)
        .args(["help", "folder"])
        .assert()
        .success()
        .stdout(predicate::str::contains("usage: bt folder"));
}
