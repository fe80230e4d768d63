use crate::verb::{GlossKey, VerbClass};

/// Error raised while conjugating or loading verbs.
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct Error {
    kind: ErrorKind,
}

impl Error {
    pub(crate) fn new<K>(kind: K) -> Self
    where
        ErrorKind: From<K>,
    {
        Self { kind: kind.into() }
    }

    /// Access the kind of the error.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }
}

impl<K> From<K> for Error
where
    ErrorKind: From<K>,
{
    #[inline]
    fn from(value: K) -> Self {
        Self::new(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ErrorKind {
    #[error("No {class} rule matches the ending of `{surface}`")]
    UnmatchedEnding { surface: Box<str>, class: VerbClass },
    #[error("Missing `{key}` in english glosses")]
    MissingGloss { key: GlossKey },
    #[error("No conjugation named `{name}`")]
    UnknownForm { name: Box<str> },
    #[error("Record is missing a kana reading")]
    MissingKana,
    #[error("Unsupported verb type `{verb_type}`")]
    UnknownVerbType { verb_type: Box<str> },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
