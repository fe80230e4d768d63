use fixed_map::Key;
use serde::{Deserialize, Serialize};

use crate::conjugate;
use crate::english;
use crate::error::Result;
use crate::verb::{Inflect, Polarity, Verb};

/// Function which conjugates a verb along the given axes.
pub type Conjugator = fn(&Verb, Inflect) -> Result<String>;

/// Function which produces an english gloss of a verb.
pub type Glosser = fn(&Verb, Polarity) -> Result<String>;

/// A grammatical form that a verb can be conjugated into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Key)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    PresentIndicative,
    Presumptive,
    /// Volitional, "let's ~". No negative exists.
    Volitional,
    Imperative,
    PastIndicative,
    PastPresumptive,
    /// Te-iru.
    PresentProgressive,
    /// Te-ita.
    PastProgressive,
    /// ~ba. No polite form exists.
    Provisional,
    /// ~tara.
    Conditional,
    Potential,
    Causative,
    Passive,
}

impl Mood {
    pub const ALL: [Mood; 13] = [
        Mood::PresentIndicative,
        Mood::Presumptive,
        Mood::Volitional,
        Mood::Imperative,
        Mood::PastIndicative,
        Mood::PastPresumptive,
        Mood::PresentProgressive,
        Mood::PastProgressive,
        Mood::Provisional,
        Mood::Conditional,
        Mood::Potential,
        Mood::Causative,
        Mood::Passive,
    ];

    /// Normalized name of the mood, like `past_indicative`.
    pub fn name(&self) -> &'static str {
        match self {
            Mood::PresentIndicative => "present_indicative",
            Mood::Presumptive => "presumptive",
            Mood::Volitional => "volitional",
            Mood::Imperative => "imperative",
            Mood::PastIndicative => "past_indicative",
            Mood::PastPresumptive => "past_presumptive",
            Mood::PresentProgressive => "present_progressive",
            Mood::PastProgressive => "past_progressive",
            Mood::Provisional => "provisional",
            Mood::Conditional => "conditional",
            Mood::Potential => "potential",
            Mood::Causative => "causative",
            Mood::Passive => "passive",
        }
    }

    /// Describe the mood.
    pub fn describe(&self) -> &'static str {
        match self {
            Mood::PresentIndicative => "~, will ~, won't ~",
            Mood::Presumptive => "will probably ~",
            Mood::Volitional => "let's ~",
            Mood::Imperative => "do ~!, don't ~!",
            Mood::PastIndicative => "~ed, didn't ~",
            Mood::PastPresumptive => "probably ~ed",
            Mood::PresentProgressive => "~ing",
            Mood::PastProgressive => "was ~ing",
            Mood::Provisional => "if one ~",
            Mood::Conditional => "if one ~, when ~",
            Mood::Potential => "can ~",
            Mood::Causative => "make or let someone ~",
            Mood::Passive => "be ~ed",
        }
    }

    /// Look up a mood by its normalized name.
    pub fn from_name(name: &str) -> Option<Mood> {
        Mood::ALL.into_iter().find(|mood| mood.name() == name)
    }

    /// Get the function which conjugates this mood.
    pub fn conjugator(&self) -> Conjugator {
        match self {
            Mood::PresentIndicative => {
                |v, i| conjugate::present_indicative(v, i.politeness, i.polarity, i.script)
            }
            Mood::Presumptive => |v, i| conjugate::presumptive(v, i.politeness, i.polarity, i.script),
            Mood::Volitional => |v, i| conjugate::volitional(v, i.politeness, i.script),
            Mood::Imperative => |v, i| conjugate::imperative(v, i.politeness, i.polarity, i.script),
            Mood::PastIndicative => {
                |v, i| conjugate::past_indicative(v, i.politeness, i.polarity, i.script)
            }
            Mood::PastPresumptive => {
                |v, i| conjugate::past_presumptive(v, i.politeness, i.polarity, i.script)
            }
            Mood::PresentProgressive => {
                |v, i| conjugate::present_progressive(v, i.politeness, i.polarity, i.script)
            }
            Mood::PastProgressive => {
                |v, i| conjugate::past_progressive(v, i.politeness, i.polarity, i.script)
            }
            Mood::Provisional => |v, i| conjugate::provisional(v, i.polarity, i.script),
            Mood::Conditional => {
                |v, i| conjugate::conditional(v, i.politeness, i.polarity, i.script)
            }
            Mood::Potential => |v, i| conjugate::potential(v, i.politeness, i.polarity, i.script),
            Mood::Causative => |v, i| conjugate::causative(v, i.politeness, i.polarity, i.script),
            Mood::Passive => |v, i| conjugate::passive(v, i.politeness, i.polarity, i.script),
        }
    }

    /// Get the function which produces english glosses for this mood.
    pub fn glosser(&self) -> Glosser {
        match self {
            Mood::PresentIndicative => english::present_indicative,
            Mood::Presumptive => english::presumptive,
            Mood::Volitional => |v, _| english::volitional(v),
            Mood::Imperative => english::imperative,
            Mood::PastIndicative => english::past_indicative,
            Mood::PastPresumptive => english::past_presumptive,
            Mood::PresentProgressive => english::present_progressive,
            Mood::PastProgressive => english::past_progressive,
            Mood::Provisional => english::provisional,
            Mood::Conditional => english::conditional,
            Mood::Potential => english::potential,
            Mood::Causative => english::causative,
            Mood::Passive => english::passive,
        }
    }

    /// Conjugate a verb in this mood.
    #[inline]
    pub fn conjugate(&self, verb: &Verb, inflect: Inflect) -> Result<String> {
        (self.conjugator())(verb, inflect)
    }

    /// Produce an english gloss of a verb in this mood.
    #[inline]
    pub fn english(&self, verb: &Verb, polarity: Polarity) -> Result<String> {
        (self.glosser())(verb, polarity)
    }
}
