//! Japanese verb conjugation tables.
//!
//! Verbs are conjugated into thirteen grammatical forms, each of which is
//! laid out as an ordered set of fields by a [`Descriptor`].
//!
//! ```
//! use katsuyou::{Mood, Verb, VerbClass, Inflect, Politeness, Polarity, Script};
//!
//! let verb = Verb::new("歩く", "あるく", VerbClass::Godan);
//! let inflect = Inflect::new(Politeness::Polite, Polarity::Positive, Script::Kanji);
//! assert_eq!(Mood::PresentIndicative.conjugate(&verb, inflect)?, "歩きます");
//! # Ok::<_, katsuyou::Error>(())
//! ```

pub mod batch;
pub use self::batch::{Batch, Report};

pub mod config;

pub mod conjugate;

pub mod descriptor;
pub use self::descriptor::{Descriptor, DESCRIPTORS};

pub mod english;

mod error;
pub use self::error::{Error, ErrorKind, Result};

mod kana;

pub mod loader;

mod mood;
pub use self::mood::{Conjugator, Glosser, Mood};

pub mod verb;
pub use self::verb::{GlossKey, Glosses, Inflect, Polarity, Politeness, Script, Verb, VerbClass};
