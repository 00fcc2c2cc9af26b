//! Command-reference snippets (tldr pages) as records.
//!
//! A tldr page looks like:
//!
//! ```text
//! # tar
//!
//! > Archiving utility.
//!
//! - Create an archive from files:
//!
//! `tar cf {{target.tar}} {{file1}}`
//! ```
//!
//! Each page becomes one free-form record describing the command and its
//! usage examples.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

use crate::error::Result;
use crate::model::Record;

/// Platforms collected by default.
pub const DEFAULT_PLATFORMS: &[&str] = &["linux", "windows", "common"];

static COMMAND_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^#\s+(.+)").expect("Invalid regex"));
static DESCRIPTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r">\s+(.+)").expect("Invalid regex"));
static EXAMPLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-\s+(.+?):\n\n`(.+?)`").expect("Invalid regex"));

/// Output language of a snippet record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lang {
    /// Japanese phrasing
    Ja,
    /// English phrasing
    En,
}

/// Display label of a platform directory name.
pub fn platform_label(platform: &str) -> &'static str {
    match platform {
        "linux" => "Linux",
        "windows" => "Windows",
        "common" => "共通(Common)",
        _ => "汎用",
    }
}

/// Turn one tldr page into a record.
pub fn parse_snippet(content: &str, platform: &str, lang: Lang) -> Record {
    let command = COMMAND_RE
        .captures(content)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim())
        .unwrap_or("Unknown");

    let description = DESCRIPTION_RE
        .captures_iter(content)
        .filter_map(|c| c.get(1))
        .map(|m| m.as_str())
        .collect::<Vec<_>>()
        .join(" ");

    let label = platform_label(platform);
    let (prefix, usage) = match lang {
        Lang::Ja => (
            format!("{}コマンド「{}」の解説:", label, command),
            "主な使い方は以下の通りです。",
        ),
        Lang::En => (
            format!("{} command '{}' overview:", label, command),
            "Common usage examples:",
        ),
    };

    let mut text = format!("{} {}\n{}", prefix, description, usage);
    for caps in EXAMPLE_RE.captures_iter(content) {
        text.push_str(&format!("\n・{}: `{}`", &caps[1], &caps[2]));
    }

    Record::new(text)
}

/// Read and parse one tldr page file.
pub fn parse_snippet_file(path: &Path, platform: &str, lang: Lang) -> Result<Record> {
    let content = fs::read_to_string(path)?;
    Ok(parse_snippet(&content, platform, lang))
}

/// Collect records for every command page under a tldr checkout.
///
/// For each platform, command files are the union of `*.md` files in
/// `root/pages.ja/<platform>` and `root/pages/<platform>`, sorted by name.
/// The Japanese page wins when both exist. Missing directories count as
/// empty.
pub fn collect_snippets<S: AsRef<str>>(root: &Path, platforms: &[S]) -> Result<Vec<Record>> {
    let mut records = Vec::new();

    for platform in platforms {
        let platform = platform.as_ref();
        let ja_dir = page_dir(root, platform, Lang::Ja);
        let en_dir = page_dir(root, platform, Lang::En);

        let ja_files = markdown_files(&ja_dir)?;
        let en_files = markdown_files(&en_dir)?;
        let all: BTreeSet<&String> = ja_files.iter().chain(en_files.iter()).collect();

        for name in all {
            let record = if ja_files.contains(name) {
                parse_snippet_file(&ja_dir.join(name), platform, Lang::Ja)?
            } else {
                parse_snippet_file(&en_dir.join(name), platform, Lang::En)?
            };
            records.push(record);
        }

        log::info!(
            "Collected {} ja / {} en pages for {}",
            ja_files.len(),
            en_files.len(),
            platform
        );
    }

    Ok(records)
}

fn markdown_files(dir: &Path) -> Result<BTreeSet<String>> {
    let mut names = BTreeSet::new();
    if !dir.is_dir() {
        return Ok(names);
    }
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.ends_with(".md") {
            names.insert(name);
        }
    }
    Ok(names)
}

/// Path of a platform's page directory for the given language.
pub fn page_dir(root: &Path, platform: &str, lang: Lang) -> PathBuf {
    match lang {
        Lang::Ja => root.join("pages.ja").join(platform),
        Lang::En => root.join("pages").join(platform),
    }
}
