use katsuyou::descriptor::{map_note_fields, note_field_names};
use katsuyou::loader;
use katsuyou::{
    Batch, Descriptor, Inflect, Mood, Polarity, Politeness, Script, Verb, VerbClass, DESCRIPTORS,
};

const GODAN: &[(&str, &str)] = &[
    ("歩く", "あるく"),
    ("走る", "はしる"),
    ("合う", "あう"),
    ("悩む", "なやむ"),
    ("打つ", "うつ"),
    ("死ぬ", "しぬ"),
    ("遊ぶ", "あそぶ"),
    ("泳ぐ", "およぐ"),
    ("出す", "だす"),
    ("言う", "いう"),
    ("近づく", "ちかづく"),
    ("", "しる"),
];

const ICHIDAN: &[(&str, &str)] = &[
    ("見る", "みる"),
    ("見える", "みえる"),
    ("信じる", "しんじる"),
    ("開ける", "あける"),
    ("食べる", "たべる"),
];

fn corpus() -> Vec<Verb> {
    let godan = GODAN
        .iter()
        .map(|&(kanji, kana)| Verb::new(kanji, kana, VerbClass::Godan));

    let ichidan = ICHIDAN
        .iter()
        .map(|&(kanji, kana)| Verb::new(kanji, kana, VerbClass::Ichidan));

    godan.chain(ichidan).collect()
}

fn find(kanji: &str) -> Verb {
    corpus()
        .into_iter()
        .find(|v| v.kanji() == kanji)
        .unwrap_or_else(|| panic!("no verb {kanji}"))
}

const fn inflect(politeness: Politeness, polarity: Polarity, script: Script) -> Inflect {
    Inflect::new(politeness, polarity, script)
}

#[test]
fn ichidan_plain_positive_is_dictionary_form() {
    for verb in corpus().iter().filter(|v| v.class() == VerbClass::Ichidan) {
        let kana = Mood::PresentIndicative
            .conjugate(
                verb,
                inflect(Politeness::Plain, Polarity::Positive, Script::Kana),
            )
            .unwrap();

        assert_eq!(kana, verb.kana());
    }
}

#[test]
fn polite_present_endings() {
    for verb in corpus() {
        for script in Script::ALL {
            let positive = Mood::PresentIndicative
                .conjugate(
                    &verb,
                    inflect(Politeness::Polite, Polarity::Positive, script),
                )
                .unwrap();

            let negative = Mood::PresentIndicative
                .conjugate(
                    &verb,
                    inflect(Politeness::Polite, Polarity::Negative, script),
                )
                .unwrap();

            assert!(positive.ends_with("ます"), "{verb}: {positive}");
            assert!(negative.ends_with("ません"), "{verb}: {negative}");
        }
    }
}

#[test]
fn u_row_negative_uses_wa() {
    let iu = find("言う");

    let negative = Mood::PresentIndicative
        .conjugate(
            &iu,
            inflect(Politeness::Plain, Polarity::Negative, Script::Kana),
        )
        .unwrap();

    assert_eq!(negative, "いわない");
}

#[test]
fn scenarios() {
    macro_rules! test {
        ($($kanji:literal, $mood:ident, $politeness:ident, $polarity:ident, $script:ident => $expected:literal),* $(,)?) => {
            $(
                let verb = find($kanji);
                let i = inflect(Politeness::$politeness, Polarity::$polarity, Script::$script);
                assert_eq!(Mood::$mood.conjugate(&verb, i).unwrap(), $expected, "{} {:?}", $kanji, i);
            )*
        };
    }

    test! {
        "歩く", PresentIndicative, Polite, Positive, Kanji => "歩きます",
        "見る", Imperative, Plain, Positive, Kana => "みろ",
        "打つ", Potential, Polite, Negative, Kanji => "打てません",
        "", Provisional, Plain, Positive, Kanji => "しれば",
        "開ける", Causative, Polite, Positive, Kanji => "開けさせます",
    }
}

#[test]
fn every_form_is_populated() {
    for verb in corpus() {
        for descriptor in &DESCRIPTORS {
            let values = descriptor.map_verb_fields(&verb).unwrap();

            for value in &values {
                assert!(!value.is_empty(), "{verb}: {}", descriptor.name());
            }
        }
    }
}

#[test]
fn field_names_match_values() {
    for verb in corpus() {
        for descriptor in &DESCRIPTORS {
            let names = descriptor.field_names();
            let values = descriptor.map_verb_fields(&verb).unwrap();
            assert_eq!(names.len(), values.len(), "{verb}: {}", descriptor.name());

            let expected = match (descriptor.has_polite(), descriptor.has_negative()) {
                (true, true) => 8,
                (true, false) | (false, true) => 4,
                (false, false) => 2,
            };

            assert_eq!(names.len(), expected);
        }

        assert_eq!(map_note_fields(&verb).unwrap().len(), note_field_names().len());
    }
}

#[test]
fn field_order_is_stable() {
    let d = Descriptor::new("Past Progressive");
    let names = d.field_names();

    assert_eq!(names[0], "past_progressive_plain_positive_kanji");
    assert_eq!(names[3], "past_progressive_plain_negative_kana");
    assert_eq!(names[4], "past_progressive_polite_positive_kanji");
    assert_eq!(names[7], "past_progressive_polite_negative_kana");

    let values = d.map_verb_fields(&find("食べる")).unwrap();
    assert_eq!(
        values.as_slice(),
        [
            "食べていた",
            "たべていた",
            "食べていなかった",
            "たべていなかった",
            "食べていました",
            "たべていました",
            "食べていませんでした",
            "たべていませんでした",
        ]
    );
}

#[test]
fn load_and_run() {
    let source = r#"
    [[cards]]
    kanji = "泳ぐ"
    kana = "およぐ"
    verb-type = "godan"
    english-conjugated = { base = "swim", past = "swam", plural = "swims", continuous = "swimming" }

    [[cards]]
    kanji = "する"
    kana = "する"
    verb-type = "suru"
    "#;

    let loaded = loader::from_str(source, "corpus.toml").unwrap();
    assert_eq!(loaded.verbs.len(), 1);
    assert_eq!(loaded.rejected.len(), 1);

    let report = Batch::new([Descriptor::new("Past Indicative")])
        .with_english(true)
        .run(&loaded.verbs);

    assert!(report.is_clean());

    let row = &report.rows[0];
    assert_eq!(row.fields[0].value, "泳いだ");
    assert_eq!(row.fields[1].value, "およいだ");
    assert_eq!(row.english, ["swam", "didn't swim"]);
}
