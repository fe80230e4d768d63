//! Configuration loaded from `katsuyou.toml`.


use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use fixed_map::Set;
use relative_path::RelativePathBuf;
use serde::{Deserialize, Serialize};

use crate::descriptor::{normalize, Descriptor, DESCRIPTORS};
use crate::mood::Mood;

/// Default name of the configuration file.
pub const CONFIG_FILE: &str = "katsuyou.toml";

/// A configuration used for generating conjugation tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    /// Verb files or directories, relative to the configuration file.
    pub paths: Vec<RelativePathBuf>,
    /// Forms to generate. Empty means every form.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub forms: Vec<String>,
    /// Generate english glosses.
    pub english: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            paths: vec![RelativePathBuf::from("vocabulary/verbs")],
            forms: Vec::new(),
            english: false,
        }
    }
}

impl Config {
    /// Load configuration from the given path, falling back to the default
    /// configuration if it doesn't exist.
    pub fn load(path: &Path) -> Result<Self> {
        let config = if path.exists() {
            let data = std::fs::read_to_string(path)
                .with_context(|| path.display().to_string())?;
            toml::from_str(&data).with_context(|| path.display().to_string())?
        } else {
            tracing::debug!(path = %path.display(), "No configuration, using defaults");
            Self::default()
        };

        Ok(config)
    }

    /// Resolve configured paths against the given root directory.
    pub fn resolve_paths(&self, root: &Path) -> Vec<PathBuf> {
        self.paths.iter().map(|path| path.to_path(root)).collect()
    }

    /// The set of moods which should be generated.
    pub fn moods(&self) -> Result<Set<Mood>> {
        parse_forms(&self.forms)
    }
}

/// Parse form names like `Past Indicative` or `past_indicative` into a set of
/// moods. An empty list of names selects every mood.
pub fn parse_forms<I>(names: I) -> Result<Set<Mood>>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut set = Set::new();

    for name in names {
        let name = normalize(name.as_ref());

        let Some(mood) = Mood::from_name(&name) else {
            return Err(anyhow!("No conjugation named `{name}`"));
        };

        set.insert(mood);
    }

    if set.is_empty() {
        for mood in Mood::ALL {
            set.insert(mood);
        }
    }

    Ok(set)
}

/// Published descriptors whose mood is in the given set, in publication
/// order.
pub fn select_descriptors(moods: &Set<Mood>) -> Vec<Descriptor> {
    DESCRIPTORS
        .into_iter()
        .filter(|d| d.mood().is_ok_and(|mood| moods.contains(mood)))
        .collect()
}
