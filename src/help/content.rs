use super::{HelpBook, HelpFlag, HelpTopic, Section};

pub(crate) fn book() -> HelpBook<'static> {
    HelpBook {
        title: "Bulk Tag",
        usage: "bt <command> [options]",
        topics: ALL_TOPICS,
        footer: &[
            "Use `bt help <topic>` for focused docs, e.g. `bt help folder` or `bt help mode`.",
        ],
    }
}

const TAG_FLAGS: &[HelpFlag<'static>] = &[
    HelpFlag {
        name: "-t, --tags <text>",
        desc: "Comma-separated tags; skips the prompt. Do not add '#'.",
    },
    HelpFlag {
        name: "-m, --mode <mode>",
        desc: "inline|front-matter for this run; remembered as the new default.",
    },
    HelpFlag {
        name: "-n, --dry-run",
        desc: "List the notes that would be tagged and stop.",
    },
    HelpFlag { name: "--plain", desc: "Disable color in the summary." },
];

const FILES_FLAGS: &[HelpFlag<'static>] = &[
    HelpFlag {
        name: "--fzf",
        desc: "Pick notes with fzf even when paths are given (adds to them).",
    },
    HelpFlag {
        name: "-t, --tags <text>",
        desc: "Comma-separated tags; skips the prompt. Do not add '#'.",
    },
    HelpFlag {
        name: "-m, --mode <mode>",
        desc: "inline|front-matter for this run; remembered as the new default.",
    },
    HelpFlag {
        name: "-n, --dry-run",
        desc: "List the notes that would be tagged and stop.",
    },
    HelpFlag { name: "--plain", desc: "Disable color in the summary." },
];

const ALL_TOPICS: &[HelpTopic<'static>] = &[
    HelpTopic {
        name: "folder",
        summary: "Tag folder's files: every .md note below a folder, at any depth.",
        usage: "bt folder <dir> [-t tags] [-m mode] [-n]",
        details: &[
            "The prompt is pre-filled with the folder name, spaces replaced by '-'. Press Enter to accept it, type other tags to replace it, or enter :q to cancel.",
            "Non-Markdown files are ignored.",
        ],
        flags: TAG_FLAGS,
        section: Section::Command,
        examples: &["bt folder \"Project Notes\"", "bt folder journal -t daily,log -m front-matter"],
    },
    HelpTopic {
        name: "files",
        summary: "Tag selected files: explicit paths, or an fzf multi-select when none are given.",
        usage: "bt files [paths...] [--fzf] [-t tags] [-m mode] [-n]",
        details: &[
            "Folders in the selection are expanded like `bt folder`; a note listed twice is tagged once.",
            "Relative paths are taken from the vault root.",
        ],
        flags: FILES_FLAGS,
        section: Section::Command,
        examples: &["bt files inbox/a.md inbox/b.md -t review", "bt files --fzf"],
    },
    HelpTopic {
        name: "search",
        summary: "Add tags to search results: notes whose path or text contains the query.",
        usage: "bt search <query> [-t tags] [-m mode] [-n]",
        details: &[
            "Matching ignores case. Hidden folders such as .git or .obsidian are not searched.",
            "The hits are listed before the prompt so you can cancel with :q.",
        ],
        flags: TAG_FLAGS,
        section: Section::Command,
        examples: &["bt search \"meeting\" -t meeting"],
    },
    HelpTopic {
        name: "mode",
        summary: "Show or set where tags are written (inline or front-matter).",
        usage: "bt mode [inline|front-matter]",
        details: &[
            "inline appends one `#tag` line per tag to the note body; running twice duplicates them.",
            "front-matter merges into the `tags` list of the YAML block, dropping duplicates and folding legacy `TAGS`/`Tags` keys into it.",
        ],
        flags: &[],
        section: Section::Command,
        examples: &["bt mode", "bt mode front-matter"],
    },
    HelpTopic {
        name: "path",
        summary: "Print the vault and settings file locations.",
        usage: "bt path",
        details: &[],
        flags: &[],
        section: Section::Command,
        examples: &[],
    },
    HelpTopic {
        name: "help",
        summary: "Show this overview or a single topic.",
        usage: "bt help [topic]",
        details: &[],
        flags: &[],
        section: Section::Command,
        examples: &[],
    },
    HelpTopic {
        name: "BULK_TAG_VAULT",
        summary: "Vault root (default: current directory).",
        usage: "BULK_TAG_VAULT",
        details: &[],
        flags: &[],
        section: Section::Environment,
        examples: &[],
    },
    HelpTopic {
        name: "BULK_TAG_SETTINGS",
        summary: "Settings file (default: <vault>/.bulk_tag.json).",
        usage: "BULK_TAG_SETTINGS",
        details: &[],
        flags: &[],
        section: Section::Environment,
        examples: &[],
    },
    HelpTopic {
        name: "BULK_TAG_NO_FZF",
        summary: "Never launch fzf.",
        usage: "BULK_TAG_NO_FZF",
        details: &[],
        flags: &[],
        section: Section::Environment,
        examples: &[],
    },
    HelpTopic {
        name: "BULK_TAG_LOG",
        summary: "Log filter, e.g. debug or bulk_tag=info (default: warn).",
        usage: "BULK_TAG_LOG",
        details: &[],
        flags: &[],
        section: Section::Environment,
        examples: &[],
    },
    HelpTopic {
        name: "NO_COLOR",
        summary: "Disable colored output.",
        usage: "NO_COLOR",
        details: &[],
        flags: &[],
        section: Section::Environment,
        examples: &[],
    },
];
