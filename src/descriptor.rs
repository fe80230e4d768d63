//! Descriptors which lay out conjugations as ordered record fields.
//!
//! Consumers persist generated values positionally, so the order in which
//! descriptors and their fields are produced is a stable contract.


use arrayvec::ArrayVec;

use crate::error::{ErrorKind, Result};
use crate::mood::Mood;
use crate::verb::{Inflect, Polarity, Politeness, Script, Verb};

/// Maximum number of fields a single descriptor produces.
pub const MAX_FIELDS: usize = 8;

/// Every published descriptor.
///
/// NB: Append only. Reordering or removing entries shifts the position of
/// every field after it.
pub const DESCRIPTORS: [Descriptor; 13] = [
    Descriptor::new("Present Indicative"),
    Descriptor::new("Presumptive"),
    Descriptor::new("Volitional").without_negative(),
    Descriptor::new("Imperative"),
    Descriptor::new("Past Indicative"),
    Descriptor::new("Past Presumptive"),
    Descriptor::new("Present Progressive"),
    Descriptor::new("Past Progressive"),
    Descriptor::new("Provisional").without_polite(),
    Descriptor::new("Conditional"),
    Descriptor::new("Potential"),
    Descriptor::new("Causative"),
    Descriptor::new("Passive"),
];

/// Normalize a descriptor name, so that `Past Indicative` becomes
/// `past_indicative`.
pub fn normalize(name: &str) -> String {
    name.trim().to_lowercase().replace(' ', "_")
}

/// A named conjugation and the axes it is generated along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Descriptor {
    name: &'static str,
    has_negative: bool,
    has_polite: bool,
}

impl Descriptor {
    /// Construct a descriptor which has both negative and polite forms.
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            has_negative: true,
            has_polite: true,
        }
    }

    /// Modify the descriptor to not have negative forms.
    pub const fn without_negative(self) -> Self {
        Self {
            has_negative: false,
            ..self
        }
    }

    /// Modify the descriptor to not have polite forms.
    pub const fn without_polite(self) -> Self {
        Self {
            has_polite: false,
            ..self
        }
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub fn has_negative(&self) -> bool {
        self.has_negative
    }

    #[inline]
    pub fn has_polite(&self) -> bool {
        self.has_polite
    }

    /// The normalized name of the conjugation.
    pub fn conjugation_name(&self) -> String {
        normalize(self.name)
    }

    /// The mood this descriptor conjugates.
    pub fn mood(&self) -> Result<Mood> {
        let name = self.conjugation_name();

        match Mood::from_name(&name) {
            Some(mood) => Ok(mood),
            None => Err(ErrorKind::UnknownForm { name: name.into() }.into()),
        }
    }

    fn politeness(&self) -> &'static [Politeness] {
        if self.has_polite {
            &[Politeness::Plain, Politeness::Polite]
        } else {
            &[Politeness::Plain]
        }
    }

    /// The polarities this descriptor is generated for.
    pub fn polarities(&self) -> &'static [Polarity] {
        if self.has_negative {
            &[Polarity::Positive, Polarity::Negative]
        } else {
            &[Polarity::Positive]
        }
    }

    /// Every combination of axes in field order.
    pub fn inflections(&self) -> ArrayVec<Inflect, MAX_FIELDS> {
        let mut out = ArrayVec::new();

        for &politeness in self.politeness() {
            for &polarity in self.polarities() {
                for script in Script::ALL {
                    out.push(Inflect::new(politeness, polarity, script));
                }
            }
        }

        out
    }

    /// Names of the fields produced by this descriptor, in order.
    pub fn field_names(&self) -> ArrayVec<String, MAX_FIELDS> {
        let prefix = self.conjugation_name();

        self.inflections()
            .into_iter()
            .map(|inflect| format!("{prefix}_{}", inflect.field_name()))
            .collect()
    }

    /// Conjugate a verb into values matching [`Descriptor::field_names`].
    pub fn map_verb_fields(&self, verb: &Verb) -> Result<ArrayVec<String, MAX_FIELDS>> {
        let conjugate = self.mood()?.conjugator();
        let mut out = ArrayVec::new();

        for inflect in self.inflections() {
            out.push(conjugate(verb, inflect)?);
        }

        Ok(out)
    }

    /// English glosses of a verb, one for each of [`Descriptor::polarities`].
    pub fn map_english(&self, verb: &Verb) -> Result<ArrayVec<String, 2>> {
        let gloss = self.mood()?.glosser();
        let mut out = ArrayVec::new();

        for &polarity in self.polarities() {
            out.push(gloss(verb, polarity)?);
        }

        Ok(out)
    }
}

/// Field names of a complete record, made up of every descriptor in
/// [`DESCRIPTORS`].
pub fn note_field_names() -> Vec<String> {
    DESCRIPTORS
        .iter()
        .flat_map(|descriptor| descriptor.field_names())
        .collect()
}

/// Values matching [`note_field_names`] for the given verb.
pub fn map_note_fields(verb: &Verb) -> Result<Vec<String>> {
    let mut out = Vec::new();

    for descriptor in &DESCRIPTORS {
        out.extend(descriptor.map_verb_fields(verb)?);
    }

    Ok(out)
}
