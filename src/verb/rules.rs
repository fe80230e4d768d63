use crate::error::{Error, ErrorKind, Result};
use crate::kana;

use super::godan;
use super::VerbClass;

/// Rewrites the ending of a dictionary-form surface into the stems and
/// endings that conjugations are built from.
///
/// Each method fails with [`ErrorKind::UnmatchedEnding`] if the surface does
/// not end in something the class knows how to rewrite.
pub trait Rules: Send + Sync {
    /// The class these rules implement.
    fn class(&self) -> VerbClass;

    /// Stem preceding ます.
    fn masu_stem(&self, surface: &str) -> Result<String>;

    /// Stem preceding ない.
    fn nai_stem(&self, surface: &str) -> Result<String>;

    /// Te-form.
    fn te(&self, surface: &str) -> Result<String>;

    /// Plain past.
    fn ta(&self, surface: &str) -> Result<String>;

    /// Plain volitional.
    fn volitional(&self, surface: &str) -> Result<String>;

    /// Plain command.
    fn imperative(&self, surface: &str) -> Result<String>;

    /// E-row form, which precedes ば in the provisional.
    fn e_row(&self, surface: &str) -> Result<String>;

    /// Stem preceding the potential endings.
    fn potential_stem(&self, surface: &str) -> Result<String>;

    /// Stem preceding せる.
    fn causative_stem(&self, surface: &str) -> Result<String>;

    /// Stem preceding れる.
    fn passive_stem(&self, surface: &str) -> Result<String>;
}

fn unmatched(surface: &str, class: VerbClass) -> Error {
    Error::new(ErrorKind::UnmatchedEnding {
        surface: surface.into(),
        class,
    })
}

pub(super) struct Ichidan;

impl Ichidan {
    fn stem<'a>(&self, surface: &'a str) -> Result<&'a str> {
        surface
            .strip_suffix('る')
            .ok_or_else(|| unmatched(surface, self.class()))
    }

    fn with(&self, surface: &str, suffix: &str) -> Result<String> {
        Ok(kana::concat(self.stem(surface)?, [suffix]))
    }
}

impl Rules for Ichidan {
    #[inline]
    fn class(&self) -> VerbClass {
        VerbClass::Ichidan
    }

    fn masu_stem(&self, surface: &str) -> Result<String> {
        self.with(surface, "")
    }

    fn nai_stem(&self, surface: &str) -> Result<String> {
        self.with(surface, "")
    }

    fn te(&self, surface: &str) -> Result<String> {
        self.with(surface, "て")
    }

    fn ta(&self, surface: &str) -> Result<String> {
        self.with(surface, "た")
    }

    fn volitional(&self, surface: &str) -> Result<String> {
        self.with(surface, "よう")
    }

    fn imperative(&self, surface: &str) -> Result<String> {
        self.with(surface, "ろ")
    }

    fn e_row(&self, surface: &str) -> Result<String> {
        self.with(surface, "れ")
    }

    fn potential_stem(&self, surface: &str) -> Result<String> {
        self.with(surface, "られ")
    }

    fn causative_stem(&self, surface: &str) -> Result<String> {
        self.with(surface, "さ")
    }

    fn passive_stem(&self, surface: &str) -> Result<String> {
        self.with(surface, "ら")
    }
}

pub(super) struct Godan;

impl Godan {
    fn with(
        &self,
        surface: &str,
        ending: impl FnOnce(&'static godan::Godan) -> &'static str,
    ) -> Result<String> {
        let Some((stem, row)) =
            kana::split_last(surface).and_then(|(stem, c)| Some((stem, godan::row(c)?)))
        else {
            return Err(unmatched(surface, self.class()));
        };

        tracing::trace!(surface, ?row);
        Ok(kana::concat(stem, [ending(row)]))
    }
}

impl Rules for Godan {
    #[inline]
    fn class(&self) -> VerbClass {
        VerbClass::Godan
    }

    fn masu_stem(&self, surface: &str) -> Result<String> {
        self.with(surface, |g| g.masu)
    }

    fn nai_stem(&self, surface: &str) -> Result<String> {
        self.with(surface, |g| g.nai)
    }

    fn te(&self, surface: &str) -> Result<String> {
        self.with(surface, |g| g.te)
    }

    fn ta(&self, surface: &str) -> Result<String> {
        self.with(surface, |g| g.ta)
    }

    fn volitional(&self, surface: &str) -> Result<String> {
        self.with(surface, |g| g.volitional)
    }

    fn imperative(&self, surface: &str) -> Result<String> {
        self.with(surface, |g| g.e)
    }

    fn e_row(&self, surface: &str) -> Result<String> {
        self.with(surface, |g| g.e)
    }

    fn potential_stem(&self, surface: &str) -> Result<String> {
        self.with(surface, |g| g.e)
    }

    fn causative_stem(&self, surface: &str) -> Result<String> {
        self.nai_stem(surface)
    }

    fn passive_stem(&self, surface: &str) -> Result<String> {
        self.nai_stem(surface)
    }
}
