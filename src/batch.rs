//! Best-effort conjugation of many verbs.

#[cfg(test)]
mod tests;

use serde::Serialize;

use crate::descriptor::{Descriptor, DESCRIPTORS};
use crate::error::{Error, Result};
use crate::verb::Verb;

/// A named field and its generated value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Field {
    pub name: String,
    pub value: String,
}

/// Every field one descriptor produced for one verb.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Row {
    pub kanji: String,
    pub kana: String,
    /// Normalized name of the form, like `past_indicative`.
    pub form: String,
    /// Level tag of the verb, like `n5`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    pub fields: Vec<Field>,
    /// English glosses, one for each polarity of the descriptor. Only
    /// populated if english glosses are enabled and could be produced.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub english: Vec<String>,
}

/// A verb and form which could not be generated.
///
/// A failure to produce english glosses is reported separately from the row,
/// which is still emitted without them.
#[derive(Debug)]
pub struct Failure {
    pub kanji: String,
    pub kana: String,
    pub form: String,
    pub error: Error,
}

impl Failure {
    fn new(verb: &Verb, descriptor: &Descriptor, error: Error) -> Self {
        Self {
            kanji: verb.kanji().to_owned(),
            kana: verb.kana().to_owned(),
            form: descriptor.conjugation_name(),
            error,
        }
    }
}

/// The outcome of a batch.
#[derive(Debug, Default)]
pub struct Report {
    pub rows: Vec<Row>,
    pub failures: Vec<Failure>,
}

impl Report {
    /// Test if every verb and form was generated.
    #[inline]
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Generates rows for a collection of verbs.
///
/// A failure to generate one form is recorded in the [`Report`] and does not
/// prevent the remaining forms or verbs from being generated.
#[derive(Debug, Clone)]
pub struct Batch {
    descriptors: Vec<Descriptor>,
    english: bool,
}

impl Batch {
    /// Construct a batch over the given descriptors.
    pub fn new<I>(descriptors: I) -> Self
    where
        I: IntoIterator<Item = Descriptor>,
    {
        Self {
            descriptors: descriptors.into_iter().collect(),
            english: false,
        }
    }

    /// Also generate english glosses.
    pub fn with_english(self, english: bool) -> Self {
        Self { english, ..self }
    }

    #[inline]
    pub fn descriptors(&self) -> &[Descriptor] {
        &self.descriptors
    }

    /// Run the batch over the given verbs.
    pub fn run(&self, verbs: &[Verb]) -> Report {
        let mut report = Report::default();

        for verb in verbs {
            let span = tracing::debug_span!("verb", %verb);
            let _enter = span.enter();

            for descriptor in &self.descriptors {
                let mut row = match conjugate_row(descriptor, verb) {
                    Ok(row) => row,
                    Err(error) => {
                        tracing::warn!(form = descriptor.name(), %error, "Failed to conjugate");
                        report.failures.push(Failure::new(verb, descriptor, error));
                        continue;
                    }
                };

                if self.english {
                    match descriptor.map_english(verb) {
                        Ok(english) => row.english.extend(english),
                        Err(error) => {
                            tracing::warn!(form = descriptor.name(), %error, "Failed to gloss");
                            report.failures.push(Failure::new(verb, descriptor, error));
                        }
                    }
                }

                report.rows.push(row);
            }
        }

        report
    }
}

fn conjugate_row(descriptor: &Descriptor, verb: &Verb) -> Result<Row> {
    let values = descriptor.map_verb_fields(verb)?;

    let fields = descriptor
        .field_names()
        .into_iter()
        .zip(values)
        .map(|(name, value)| Field { name, value })
        .collect();

    Ok(Row {
        kanji: verb.kanji().to_owned(),
        kana: verb.kana().to_owned(),
        form: descriptor.conjugation_name(),
        level: verb.level().map(str::to_owned),
        fields,
        english: Vec::new(),
    })
}

impl Default for Batch {
    /// A batch over every published descriptor.
    fn default() -> Self {
        Self::new(DESCRIPTORS)
    }
}
