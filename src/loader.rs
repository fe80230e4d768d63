//! Loading of verb records from TOML documents.
//!
//! A document holds a list of records under `cards`:
//!
//! ```toml
//! [[cards]]
//! kanji = "歩く"
//! kana = "あるく"
//! verb-type = "godan"
//! english-conjugated = { base = "walk", past = "walked", plural = "walks", continuous = "walking" }
//! level = "n5"
//! ```


use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::error::{Error, ErrorKind};
use crate::verb::{Glosses, Verb, VerbClass};

#[derive(Deserialize)]
struct Document {
    #[serde(default)]
    cards: Vec<Record>,
}

/// A verb record as it appears in a document.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Record {
    #[serde(default)]
    pub kanji: String,
    #[serde(default)]
    pub kana: Option<String>,
    #[serde(default)]
    pub verb_type: Option<String>,
    #[serde(default)]
    pub english_conjugated: Option<Glosses>,
    #[serde(default)]
    pub level: Option<String>,
    #[serde(default)]
    pub disabled: bool,
}

impl Record {
    /// Convert the record into a verb.
    pub fn into_verb(self) -> Result<Verb, Error> {
        let kana = match self.kana {
            Some(kana) if !kana.is_empty() => kana,
            _ => return Err(Error::new(ErrorKind::MissingKana)),
        };

        let class = self.verb_type.as_deref().unwrap_or_default().parse::<VerbClass>()?;

        let mut verb = Verb::new(self.kanji, kana, class);

        if let Some(glosses) = self.english_conjugated {
            verb = verb.with_glosses(glosses);
        }

        if let Some(level) = self.level {
            verb = verb.with_level(level);
        }

        Ok(verb)
    }
}

/// A record which could not be turned into a verb.
#[derive(Debug)]
pub struct Rejected {
    /// Where the record was loaded from.
    pub origin: String,
    /// Index of the record in its document.
    pub index: usize,
    pub kanji: String,
    pub error: Error,
}

/// The result of loading one or more documents.
#[derive(Debug, Default)]
pub struct Loaded {
    pub verbs: Vec<Verb>,
    pub rejected: Vec<Rejected>,
    /// Number of records skipped because they were disabled.
    pub disabled: usize,
    /// Number of records skipped because an equal verb was already loaded.
    pub duplicates: usize,
}

impl Loaded {
    fn merge(&mut self, other: Loaded) {
        self.verbs.extend(other.verbs);
        self.rejected.extend(other.rejected);
        self.disabled += other.disabled;
        self.duplicates += other.duplicates;
    }

    fn dedup(&mut self) {
        let mut seen = HashSet::new();
        let before = self.verbs.len();
        self.verbs.retain(|verb| seen.insert(verb.clone()));
        self.duplicates += before - self.verbs.len();
    }
}

/// Parse verbs from a single document, using `origin` to describe where it
/// came from in diagnostics.
pub fn from_str(source: &str, origin: &str) -> Result<Loaded> {
    let document: Document = toml::from_str(source).with_context(|| origin.to_owned())?;

    let mut loaded = Loaded::default();

    for (index, record) in document.cards.into_iter().enumerate() {
        if record.disabled {
            tracing::trace!(origin, index, kanji = %record.kanji, "Skipping disabled record");
            loaded.disabled += 1;
            continue;
        }

        let kanji = record.kanji.clone();

        match record.into_verb() {
            Ok(verb) => {
                if !verb.is_dictionary_form() {
                    tracing::debug!(origin, index, %verb, "Reading does not end in a dictionary-form kana");
                }

                loaded.verbs.push(verb);
            }
            Err(error) => {
                tracing::warn!(origin, index, %kanji, %error, "Rejecting record");

                loaded.rejected.push(Rejected {
                    origin: origin.to_owned(),
                    index,
                    kanji,
                    error,
                });
            }
        }
    }

    loaded.dedup();
    Ok(loaded)
}

/// Load verbs from the given files and directories.
///
/// Directories are searched recursively for `.toml` files, which are loaded
/// in path order.
pub fn load_paths<I>(paths: I) -> Result<Loaded>
where
    I: IntoIterator,
    I::Item: AsRef<Path>,
{
    let mut files = Vec::new();

    for path in paths {
        collect_files(path.as_ref(), &mut files)?;
    }

    let mut loaded = Loaded::default();

    for path in files {
        tracing::debug!(path = %path.display(), "Loading verbs");

        let source = fs::read_to_string(&path).with_context(|| path.display().to_string())?;
        loaded.merge(from_str(&source, &path.display().to_string())?);
    }

    loaded.dedup();
    Ok(loaded)
}

fn collect_files(path: &Path, out: &mut Vec<PathBuf>) -> Result<()> {
    let metadata = fs::metadata(path).with_context(|| path.display().to_string())?;

    if !metadata.is_dir() {
        out.push(path.to_owned());
        return Ok(());
    }

    let mut entries = Vec::new();

    for e in fs::read_dir(path).with_context(|| path.display().to_string())? {
        entries.push(e?.path());
    }

    entries.sort();

    for entry in entries {
        if entry.is_dir() {
            collect_files(&entry, out)?;
        } else if entry.extension().is_some_and(|ext| ext == "toml") {
            out.push(entry);
        }
    }

    Ok(())
}
