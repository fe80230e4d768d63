use crate::error::ErrorKind;

use super::{GlossKey, Glosses, Script, Verb, VerbClass};

#[test]
fn godan_rows() {
    macro_rules! test {
        ($($verb:literal => $masu:literal, $nai:literal, $te:literal, $ta:literal, $vol:literal, $e:literal),* $(,)?) => {
            let rules = VerbClass::Godan.rules();

            $(
                assert_eq!(rules.masu_stem($verb).unwrap(), $masu);
                assert_eq!(rules.nai_stem($verb).unwrap(), $nai);
                assert_eq!(rules.te($verb).unwrap(), $te);
                assert_eq!(rules.ta($verb).unwrap(), $ta);
                assert_eq!(rules.volitional($verb).unwrap(), $vol);
                assert_eq!(rules.e_row($verb).unwrap(), $e);
            )*
        };
    }

    test! {
        "いう" => "いい", "いわ", "いって", "いった", "いおう", "いえ",
        "あるく" => "あるき", "あるか", "あるいて", "あるいた", "あるこう", "あるけ",
        "およぐ" => "およぎ", "およが", "およいで", "およいだ", "およごう", "およげ",
        "だす" => "だし", "ださ", "だして", "だした", "だそう", "だせ",
        "まつ" => "まち", "また", "まって", "まった", "まとう", "まて",
        "しぬ" => "しに", "しな", "しんで", "しんだ", "しのう", "しね",
        "まなぶ" => "まなび", "まなば", "まなんで", "まなんだ", "まなぼう", "まなべ",
        "のむ" => "のみ", "のま", "のんで", "のんだ", "のもう", "のめ",
        "しる" => "しり", "しら", "しって", "しった", "しろう", "しれ",
    }
}

#[test]
fn ichidan_rules() {
    let rules = VerbClass::Ichidan.rules();
    assert_eq!(rules.masu_stem("みる").unwrap(), "み");
    assert_eq!(rules.nai_stem("みる").unwrap(), "み");
    assert_eq!(rules.te("みる").unwrap(), "みて");
    assert_eq!(rules.ta("みる").unwrap(), "みた");
    assert_eq!(rules.volitional("みる").unwrap(), "みよう");
    assert_eq!(rules.imperative("みる").unwrap(), "みろ");
    assert_eq!(rules.e_row("みせる").unwrap(), "みせれ");
    assert_eq!(rules.potential_stem("あける").unwrap(), "あけられ");
    assert_eq!(rules.causative_stem("あける").unwrap(), "あけさ");
    assert_eq!(rules.passive_stem("あける").unwrap(), "あけら");
}

#[test]
fn unmatched_endings() {
    let error = VerbClass::Godan.rules().masu_stem("たべい").unwrap_err();

    assert_eq!(
        *error.kind(),
        ErrorKind::UnmatchedEnding {
            surface: "たべい".into(),
            class: VerbClass::Godan,
        }
    );

    let error = VerbClass::Ichidan.rules().te("あう").unwrap_err();
    assert!(matches!(
        error.kind(),
        ErrorKind::UnmatchedEnding {
            class: VerbClass::Ichidan,
            ..
        }
    ));

    assert!(VerbClass::Godan.rules().te("").is_err());
}

#[test]
fn verb_class_parse() {
    assert_eq!("ichidan".parse::<VerbClass>(), Ok(VerbClass::Ichidan));
    assert_eq!("godan".parse::<VerbClass>(), Ok(VerbClass::Godan));
    assert_eq!(
        "suru".parse::<VerbClass>(),
        Err(ErrorKind::UnknownVerbType {
            verb_type: "suru".into()
        })
    );

    for class in VerbClass::ALL {
        assert_eq!(class.rules().class(), class);
    }
}

#[test]
fn kanji_falls_back_to_kana() {
    let verb = Verb::new("", "いう", VerbClass::Godan);
    assert_eq!(verb.surface(Script::Kanji), "いう");
    assert_eq!(verb.surface(Script::Kana), "いう");

    let verb = Verb::new("言う", "いう", VerbClass::Godan);
    assert_eq!(verb.surface(Script::Kanji), "言う");
    assert_eq!(verb.to_string(), "言う (いう)");
}

#[test]
fn verb_equality() {
    let a = Verb::new("言う", "いう", VerbClass::Godan).with_level("n5");
    let b = Verb::new("言う", "いう", VerbClass::Godan);
    let c = Verb::new("", "いう", VerbClass::Godan);
    assert_eq!(a, b);
    assert_ne!(a, c);
    assert!(a.is_dictionary_form());
    assert!(!Verb::new("", "いい", VerbClass::Godan).is_dictionary_form());
}

#[test]
fn missing_gloss() {
    let glosses = Glosses {
        base: Some("walk".to_owned()),
        ..Glosses::default()
    };

    assert_eq!(glosses.get(GlossKey::Base).unwrap(), "walk");

    let error = glosses.get(GlossKey::Past).unwrap_err();
    assert_eq!(
        *error.kind(),
        ErrorKind::MissingGloss {
            key: GlossKey::Past
        }
    );
    assert_eq!(error.to_string(), "Missing `past` in english glosses");
}
