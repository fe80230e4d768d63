use crate::descriptor::{Descriptor, DESCRIPTORS};
use crate::error::ErrorKind;
use crate::verb::{GlossKey, Glosses, Verb, VerbClass};

use super::Batch;

fn aruku() -> Verb {
    Verb::new("歩く", "あるく", VerbClass::Godan).with_glosses(Glosses::new(
        "walk", "walked", "walks", "walking",
    ))
}

#[test]
fn rows_for_every_descriptor() {
    let report = Batch::default().run(&[aruku()]);

    assert!(report.is_clean());
    assert_eq!(report.rows.len(), DESCRIPTORS.len());

    let total = report.rows.iter().map(|row| row.fields.len()).sum::<usize>();
    assert_eq!(total, 96);

    let row = &report.rows[0];
    assert_eq!(row.kanji, "歩く");
    assert_eq!(row.form, "present_indicative");
    assert_eq!(row.fields[0].name, "present_indicative_plain_positive_kanji");
    assert_eq!(row.fields[0].value, "歩く");
    assert_eq!(row.fields[7].name, "present_indicative_polite_negative_kana");
    assert_eq!(row.fields[7].value, "あるきません");
    assert!(row.english.is_empty());
}

#[test]
fn english_glosses() {
    let batch = Batch::new([
        Descriptor::new("Past Indicative"),
        Descriptor::new("Volitional").without_negative(),
    ])
    .with_english(true);

    let report = batch.run(&[aruku()]);

    assert!(report.is_clean());
    assert_eq!(report.rows[0].english, ["walked", "didn't walk"]);
    assert_eq!(report.rows[1].english, ["let's walk"]);
}

#[test]
fn failures_do_not_stop_the_batch() {
    let verbs = [
        Verb::new("ABC", "えーびーしー", VerbClass::Godan),
        Verb::new("見る", "みる", VerbClass::Ichidan),
    ];

    let batch = Batch::new([
        Descriptor::new("Present Indicative"),
        Descriptor::new("Fake Verb Form"),
    ]);

    let report = batch.run(&verbs);

    assert!(!report.is_clean());
    assert_eq!(report.rows.len(), 1);
    assert_eq!(report.rows[0].kana, "みる");

    assert_eq!(report.failures.len(), 3);
    assert_eq!(report.failures[0].kana, "えーびーしー");
    assert_eq!(report.failures[0].form, "present_indicative");
    assert!(matches!(
        report.failures[0].error.kind(),
        ErrorKind::UnmatchedEnding { .. }
    ));
    assert!(matches!(
        report.failures[2].error.kind(),
        ErrorKind::UnknownForm { .. }
    ));
}

#[test]
fn missing_gloss_keeps_the_row() {
    let verb = Verb::new("歩く", "あるく", VerbClass::Godan);
    let batch = Batch::new([Descriptor::new("Present Indicative")]).with_english(true);
    assert_eq!(batch.descriptors().len(), 1);

    let report = batch.run(&[verb]);

    assert!(!report.is_clean());
    assert_eq!(report.rows.len(), 1);
    assert_eq!(report.rows[0].fields.len(), 8);
    assert_eq!(report.rows[0].fields[2].value, "歩かない");
    assert!(report.rows[0].english.is_empty());

    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].form, "present_indicative");
    assert_eq!(
        *report.failures[0].error.kind(),
        ErrorKind::MissingGloss {
            key: GlossKey::Base
        }
    );
}

#[test]
fn level_is_carried() {
    let verbs = [
        aruku().with_level("n5"),
        Verb::new("見る", "みる", VerbClass::Ichidan),
    ];

    let report = Batch::new([Descriptor::new("Passive")]).run(&verbs);

    assert_eq!(report.rows[0].level.as_deref(), Some("n5"));
    assert_eq!(report.rows[1].level, None);
}
