//! Verbs and the axes along which they are inflected.

mod godan;
mod rules;

#[cfg(test)]
mod tests;

pub use self::rules::Rules;

use core::fmt;
use core::hash::{Hash, Hasher};
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ErrorKind, Result};
use crate::kana;

/// The conjugation class of a verb.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VerbClass {
    /// Ichidan verb, conjugated by dropping the final る.
    Ichidan,
    /// Godan verb, conjugated by shifting the final kana along its row.
    Godan,
}

impl VerbClass {
    pub const ALL: [VerbClass; 2] = [VerbClass::Ichidan, VerbClass::Godan];

    /// The identifier used in verb records.
    pub fn name(&self) -> &'static str {
        match self {
            VerbClass::Ichidan => "ichidan",
            VerbClass::Godan => "godan",
        }
    }

    /// Get the rules which conjugate verbs of this class.
    pub fn rules(&self) -> &'static dyn Rules {
        match self {
            VerbClass::Ichidan => &rules::Ichidan,
            VerbClass::Godan => &rules::Godan,
        }
    }
}

impl fmt::Display for VerbClass {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.name().fmt(f)
    }
}

impl FromStr for VerbClass {
    type Err = ErrorKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        for class in VerbClass::ALL {
            if class.name() == s {
                return Ok(class);
            }
        }

        Err(ErrorKind::UnknownVerbType {
            verb_type: s.into(),
        })
    }
}

/// Which script a surface is produced in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Script {
    Kanji,
    Kana,
}

impl Script {
    pub const ALL: [Script; 2] = [Script::Kanji, Script::Kana];

    pub fn name(&self) -> &'static str {
        match self {
            Script::Kanji => "kanji",
            Script::Kana => "kana",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Politeness {
    Plain,
    Polite,
}

impl Politeness {
    pub fn name(&self) -> &'static str {
        match self {
            Politeness::Plain => "plain",
            Politeness::Polite => "polite",
        }
    }

    #[inline]
    pub(crate) fn is_polite(self) -> bool {
        matches!(self, Politeness::Polite)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Polarity {
    Positive,
    Negative,
}

impl Polarity {
    pub fn name(&self) -> &'static str {
        match self {
            Polarity::Positive => "positive",
            Polarity::Negative => "negative",
        }
    }
}

/// A single combination of inflection axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Inflect {
    pub politeness: Politeness,
    pub polarity: Polarity,
    pub script: Script,
}

impl Inflect {
    #[inline]
    pub const fn new(politeness: Politeness, polarity: Polarity, script: Script) -> Self {
        Self {
            politeness,
            polarity,
            script,
        }
    }

    /// Identifier of this combination, like `polite_negative_kana`.
    pub fn field_name(&self) -> String {
        format!(
            "{}_{}_{}",
            self.politeness.name(),
            self.polarity.name(),
            self.script.name()
        )
    }
}

/// A key in [`Glosses`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GlossKey {
    Base,
    Past,
    Plural,
    Continuous,
}

impl GlossKey {
    pub fn name(&self) -> &'static str {
        match self {
            GlossKey::Base => "base",
            GlossKey::Past => "past",
            GlossKey::Plural => "plural",
            GlossKey::Continuous => "continuous",
        }
    }
}

impl fmt::Display for GlossKey {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.name().fmt(f)
    }
}

/// English lemma forms used to build english glosses.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Glosses {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub past: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plural: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub continuous: Option<String>,
}

impl Glosses {
    /// Construct glosses with every key populated.
    pub fn new(base: &str, past: &str, plural: &str, continuous: &str) -> Self {
        Self {
            base: Some(base.to_owned()),
            past: Some(past.to_owned()),
            plural: Some(plural.to_owned()),
            continuous: Some(continuous.to_owned()),
        }
    }

    /// Get the gloss for the given key.
    pub fn get(&self, key: GlossKey) -> Result<&str> {
        let value = match key {
            GlossKey::Base => &self.base,
            GlossKey::Past => &self.past,
            GlossKey::Plural => &self.plural,
            GlossKey::Continuous => &self.continuous,
        };

        match value {
            Some(value) => Ok(value.as_str()),
            None => Err(ErrorKind::MissingGloss { key }.into()),
        }
    }
}

/// A verb in dictionary form.
///
/// Two verbs are equal if they have the same kanji and kana surfaces.
#[derive(Debug, Clone)]
pub struct Verb {
    kanji: String,
    kana: String,
    class: VerbClass,
    glosses: Glosses,
    level: Option<String>,
}

impl Verb {
    /// Construct a new verb.
    ///
    /// The `kanji` surface may be empty for verbs without a standard kanji
    /// writing, in which case the kana surface is used for both scripts.
    pub fn new(kanji: impl Into<String>, kana: impl Into<String>, class: VerbClass) -> Self {
        Self {
            kanji: kanji.into(),
            kana: kana.into(),
            class,
            glosses: Glosses::default(),
            level: None,
        }
    }

    /// Attach english glosses.
    pub fn with_glosses(self, glosses: Glosses) -> Self {
        Self { glosses, ..self }
    }

    /// Attach a level tag.
    pub fn with_level(self, level: impl Into<String>) -> Self {
        Self {
            level: Some(level.into()),
            ..self
        }
    }

    #[inline]
    pub fn kanji(&self) -> &str {
        &self.kanji
    }

    #[inline]
    pub fn kana(&self) -> &str {
        &self.kana
    }

    #[inline]
    pub fn class(&self) -> VerbClass {
        self.class
    }

    #[inline]
    pub fn glosses(&self) -> &Glosses {
        &self.glosses
    }

    #[inline]
    pub fn level(&self) -> Option<&str> {
        self.level.as_deref()
    }

    /// The dictionary-form surface in the given script.
    pub fn surface(&self, script: Script) -> &str {
        match script {
            Script::Kanji if !self.kanji.is_empty() => &self.kanji,
            _ => &self.kana,
        }
    }

    /// The rules used to conjugate this verb.
    #[inline]
    pub fn rules(&self) -> &'static dyn Rules {
        self.class.rules()
    }

    /// Test if the kana surface ends in a kana valid for a dictionary-form
    /// verb.
    pub fn is_dictionary_form(&self) -> bool {
        kana::split_last(&self.kana).is_some_and(|(_, c)| kana::is_dictionary_ending(c))
    }
}

impl PartialEq for Verb {
    fn eq(&self, other: &Self) -> bool {
        self.kanji == other.kanji && self.kana == other.kana
    }
}

impl Eq for Verb {}

impl Hash for Verb {
    fn hash<H>(&self, state: &mut H)
    where
        H: Hasher,
    {
        self.kanji.hash(state);
        self.kana.hash(state);
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.kanji.is_empty() && self.kanji != self.kana {
            write!(f, "{} ({})", self.kanji, self.kana)
        } else {
            write!(f, "{}", self.kana)
        }
    }
}
