//! Japanese conjugations of a dictionary-form verb.
//!
//! Compound forms are built from simpler ones, so that for example the
//! polite negative past is always the polite negative present plus でした.


use crate::error::Result;
use crate::kana;
use crate::verb::{Polarity, Politeness, Script, Verb};

/// Pick an ending based on politeness and polarity.
///
/// The table is ordered polite positive, polite negative, plain positive,
/// plain negative.
fn pick(politeness: Politeness, polarity: Polarity, table: [&'static str; 4]) -> &'static str {
    let [polite_positive, polite_negative, plain_positive, plain_negative] = table;

    match (politeness, polarity) {
        (Politeness::Polite, Polarity::Positive) => polite_positive,
        (Politeness::Polite, Polarity::Negative) => polite_negative,
        (Politeness::Plain, Polarity::Positive) => plain_positive,
        (Politeness::Plain, Polarity::Negative) => plain_negative,
    }
}

/// Suffix used to build presumptive forms.
fn presumptive_suffix(politeness: Politeness) -> &'static str {
    if politeness.is_polite() {
        "でしょう"
    } else {
        "だろう"
    }
}

/// Rewrite a trailing suffix of an already conjugated form, leaving it as-is
/// if it doesn't end with `from`.
fn rewrite(form: String, from: &str, to: &str) -> String {
    kana::replace_suffix(&form, from, to).unwrap_or(form)
}

/// Te-form, like 歩いて.
pub fn te_form(verb: &Verb, script: Script) -> Result<String> {
    verb.rules().te(verb.surface(script))
}

/// Present indicative, like 歩く / 歩かない / 歩きます / 歩きません.
pub fn present_indicative(
    verb: &Verb,
    politeness: Politeness,
    polarity: Polarity,
    script: Script,
) -> Result<String> {
    let surface = verb.surface(script);
    let rules = verb.rules();

    let form = match (politeness, polarity) {
        (Politeness::Plain, Polarity::Positive) => surface.to_owned(),
        (Politeness::Plain, Polarity::Negative) => kana::concat(&rules.nai_stem(surface)?, ["ない"]),
        (Politeness::Polite, Polarity::Positive) => {
            kana::concat(&rules.masu_stem(surface)?, ["ます"])
        }
        (Politeness::Polite, Polarity::Negative) => {
            let polite = present_indicative(verb, Politeness::Polite, Polarity::Positive, script)?;
            rewrite(polite, "ます", "ません")
        }
    };

    Ok(form)
}

/// Presumptive, like 歩くだろう / 歩かないでしょう.
pub fn presumptive(
    verb: &Verb,
    politeness: Politeness,
    polarity: Polarity,
    script: Script,
) -> Result<String> {
    let plain = present_indicative(verb, Politeness::Plain, polarity, script)?;
    Ok(kana::concat(&plain, [presumptive_suffix(politeness)]))
}

/// Volitional, like 歩こう / 歩きましょう. There is no negative volitional.
pub fn volitional(verb: &Verb, politeness: Politeness, script: Script) -> Result<String> {
    let present = present_indicative(verb, politeness, Polarity::Positive, script)?;

    match politeness {
        Politeness::Polite => Ok(rewrite(present, "ます", "ましょう")),
        Politeness::Plain => verb.rules().volitional(&present),
    }
}

/// Imperative, like 歩け / 歩くな / 歩いてください / 歩かないでください.
pub fn imperative(
    verb: &Verb,
    politeness: Politeness,
    polarity: Polarity,
    script: Script,
) -> Result<String> {
    let form = match (politeness, polarity) {
        (Politeness::Polite, Polarity::Positive) => {
            kana::concat(&te_form(verb, script)?, ["ください"])
        }
        (Politeness::Polite, Polarity::Negative) => {
            let negative = present_indicative(verb, Politeness::Plain, Polarity::Negative, script)?;
            kana::concat(&negative, ["で", "ください"])
        }
        (Politeness::Plain, Polarity::Positive) => {
            let present = present_indicative(verb, Politeness::Plain, Polarity::Positive, script)?;
            verb.rules().imperative(&present)?
        }
        (Politeness::Plain, Polarity::Negative) => kana::concat(verb.surface(script), ["な"]),
    };

    Ok(form)
}

/// Past indicative, like 歩いた / 歩かなかった / 歩きました / 歩きませんでした.
pub fn past_indicative(
    verb: &Verb,
    politeness: Politeness,
    polarity: Polarity,
    script: Script,
) -> Result<String> {
    let form = match (politeness, polarity) {
        (Politeness::Polite, Polarity::Positive) => {
            let present = present_indicative(verb, politeness, polarity, script)?;
            rewrite(present, "ます", "ました")
        }
        (Politeness::Polite, Polarity::Negative) => {
            let present = present_indicative(verb, politeness, polarity, script)?;
            kana::concat(&present, ["でした"])
        }
        (Politeness::Plain, Polarity::Positive) => verb.rules().ta(verb.surface(script))?,
        (Politeness::Plain, Polarity::Negative) => {
            let present = present_indicative(verb, politeness, polarity, script)?;
            rewrite(present, "い", "かった")
        }
    };

    Ok(form)
}

/// Past presumptive, like 歩いただろう / 歩かなかったでしょう.
pub fn past_presumptive(
    verb: &Verb,
    politeness: Politeness,
    polarity: Polarity,
    script: Script,
) -> Result<String> {
    let past = past_indicative(verb, Politeness::Plain, polarity, script)?;
    Ok(kana::concat(&past, [presumptive_suffix(politeness)]))
}

/// Present progressive, like 歩いている / 歩いていません.
pub fn present_progressive(
    verb: &Verb,
    politeness: Politeness,
    polarity: Polarity,
    script: Script,
) -> Result<String> {
    let suffix = pick(politeness, polarity, ["います", "いません", "いる", "いない"]);
    Ok(kana::concat(&te_form(verb, script)?, [suffix]))
}

/// Past progressive, like 歩いていた / 歩いていませんでした.
pub fn past_progressive(
    verb: &Verb,
    politeness: Politeness,
    polarity: Polarity,
    script: Script,
) -> Result<String> {
    let suffix = pick(
        politeness,
        polarity,
        ["いました", "いませんでした", "いた", "いなかった"],
    );

    Ok(kana::concat(&te_form(verb, script)?, [suffix]))
}

/// Provisional, like 歩けば / 歩かなければ. There is no polite provisional.
pub fn provisional(verb: &Verb, polarity: Polarity, script: Script) -> Result<String> {
    match polarity {
        Polarity::Positive => {
            let e = verb.rules().e_row(verb.surface(script))?;
            Ok(kana::concat(&e, ["ば"]))
        }
        Polarity::Negative => {
            let negative = present_indicative(verb, Politeness::Plain, Polarity::Negative, script)?;
            Ok(rewrite(negative, "い", "ければ"))
        }
    }
}

/// Conditional, like 歩いたら / 歩きませんでしたら.
pub fn conditional(
    verb: &Verb,
    politeness: Politeness,
    polarity: Polarity,
    script: Script,
) -> Result<String> {
    let past = past_indicative(verb, politeness, polarity, script)?;
    Ok(kana::concat(&past, ["ら"]))
}

/// Potential, like 歩ける / 見られません.
pub fn potential(
    verb: &Verb,
    politeness: Politeness,
    polarity: Polarity,
    script: Script,
) -> Result<String> {
    let stem = verb.rules().potential_stem(verb.surface(script))?;
    let suffix = pick(politeness, polarity, ["ます", "ません", "る", "ない"]);
    Ok(kana::concat(&stem, [suffix]))
}

/// Causative, like 歩かせる / 見させません.
pub fn causative(
    verb: &Verb,
    politeness: Politeness,
    polarity: Polarity,
    script: Script,
) -> Result<String> {
    let stem = verb.rules().causative_stem(verb.surface(script))?;
    let suffix = pick(politeness, polarity, ["せます", "せません", "せる", "せない"]);
    Ok(kana::concat(&stem, [suffix]))
}

/// Passive, like 歩かれる / 見られません.
pub fn passive(
    verb: &Verb,
    politeness: Politeness,
    polarity: Polarity,
    script: Script,
) -> Result<String> {
    let stem = verb.rules().passive_stem(verb.surface(script))?;
    let suffix = pick(politeness, polarity, ["れます", "れません", "れる", "れない"]);
    Ok(kana::concat(&stem, [suffix]))
}
