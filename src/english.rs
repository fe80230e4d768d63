//! English glosses of conjugated verbs, built from the lemma forms in
//! [`Glosses`][crate::verb::Glosses].


use std::sync::LazyLock;

use regex::Regex;

use crate::error::Result;
use crate::verb::{GlossKey, Polarity, Verb};

/// A fixup applied to a generated phrase to correct grammar around "to be".
struct Fix {
    regex: LazyLock<Regex>,
    replacement: &'static str,
}

macro_rules! fix {
    ($pattern:literal => $replacement:literal) => {
        Fix {
            regex: LazyLock::new(|| Regex::new($pattern).expect("valid fixup pattern")),
            replacement: $replacement,
        }
    };
}

static DIDNT_BE: Fix = fix!(r"didn't be\b" => "wasn't");
static PROBABLY_WAS: Fix = fix!(r"probably was\b" => "was probably");
static ONE_ARE: Fix = fix!(r"one are\b" => "one is");
static DOESNT_BE: Fix = fix!(r"doesn't be\b" => "isn't");
static INNER_BE: Fix = fix!(r"\sbe\s" => " ");
static BE_WAS: Fix = fix!(r"be was\b" => "be");

impl Fix {
    fn apply(&self, phrase: String) -> String {
        self.regex.replace_all(&phrase, self.replacement).into_owned()
    }
}

fn gloss(verb: &Verb, key: GlossKey) -> Result<&str> {
    verb.glosses().get(key)
}

/// "will walk" / "won't walk".
pub fn present_indicative(verb: &Verb, polarity: Polarity) -> Result<String> {
    let base = gloss(verb, GlossKey::Base)?;

    Ok(match polarity {
        Polarity::Positive => format!("will {base}"),
        Polarity::Negative => format!("won't {base}"),
    })
}

/// "will probably walk" / "probably won't walk".
pub fn presumptive(verb: &Verb, polarity: Polarity) -> Result<String> {
    let base = gloss(verb, GlossKey::Base)?;

    Ok(match polarity {
        Polarity::Positive => format!("will probably {base}"),
        Polarity::Negative => format!("probably won't {base}"),
    })
}

/// "let's walk".
pub fn volitional(verb: &Verb) -> Result<String> {
    let base = gloss(verb, GlossKey::Base)?;
    Ok(format!("let's {base}"))
}

/// "do walk!" / "don't walk!".
pub fn imperative(verb: &Verb, polarity: Polarity) -> Result<String> {
    let base = gloss(verb, GlossKey::Base)?;

    Ok(match polarity {
        Polarity::Positive => format!("do {base}!"),
        Polarity::Negative => format!("don't {base}!"),
    })
}

/// "walked" / "didn't walk".
pub fn past_indicative(verb: &Verb, polarity: Polarity) -> Result<String> {
    Ok(match polarity {
        Polarity::Positive => gloss(verb, GlossKey::Past)?.to_owned(),
        Polarity::Negative => {
            let base = gloss(verb, GlossKey::Base)?;
            DIDNT_BE.apply(format!("didn't {base}"))
        }
    })
}

/// "probably walked" / "probably didn't walk".
pub fn past_presumptive(verb: &Verb, polarity: Polarity) -> Result<String> {
    Ok(match polarity {
        Polarity::Positive => {
            let past = gloss(verb, GlossKey::Past)?;
            PROBABLY_WAS.apply(format!("probably {past}"))
        }
        Polarity::Negative => {
            let base = gloss(verb, GlossKey::Base)?;
            DIDNT_BE.apply(format!("probably didn't {base}"))
        }
    })
}

/// "walking" / "not walking".
pub fn present_progressive(verb: &Verb, polarity: Polarity) -> Result<String> {
    let continuous = gloss(verb, GlossKey::Continuous)?;

    Ok(match polarity {
        Polarity::Positive => continuous.to_owned(),
        Polarity::Negative => format!("not {continuous}"),
    })
}

/// "was walking" / "wasn't walking".
pub fn past_progressive(verb: &Verb, polarity: Polarity) -> Result<String> {
    let continuous = gloss(verb, GlossKey::Continuous)?;

    Ok(match polarity {
        Polarity::Positive => format!("was {continuous}"),
        Polarity::Negative => format!("wasn't {continuous}"),
    })
}

/// "if one walks" / "if one doesn't walk".
pub fn provisional(verb: &Verb, polarity: Polarity) -> Result<String> {
    Ok(match polarity {
        Polarity::Positive => {
            let plural = gloss(verb, GlossKey::Plural)?;
            ONE_ARE.apply(format!("if one {plural}"))
        }
        Polarity::Negative => {
            let base = gloss(verb, GlossKey::Base)?;
            DOESNT_BE.apply(format!("if one doesn't {base}"))
        }
    })
}

/// Same as [`provisional`].
pub fn conditional(verb: &Verb, polarity: Polarity) -> Result<String> {
    provisional(verb, polarity)
}

/// "can walk" / "can't walk".
pub fn potential(verb: &Verb, polarity: Polarity) -> Result<String> {
    let base = gloss(verb, GlossKey::Base)?;

    Ok(match polarity {
        Polarity::Positive => format!("can {base}"),
        Polarity::Negative => format!("can't {base}"),
    })
}

/// "make walk" / "not make walk".
pub fn causative(verb: &Verb, polarity: Polarity) -> Result<String> {
    let base = gloss(verb, GlossKey::Base)?;

    let phrase = match polarity {
        Polarity::Positive => format!("make {base}"),
        Polarity::Negative => format!("not make {base}"),
    };

    Ok(INNER_BE.apply(phrase))
}

/// "be walked" / "not be walked".
pub fn passive(verb: &Verb, polarity: Polarity) -> Result<String> {
    let past = gloss(verb, GlossKey::Past)?;

    let phrase = match polarity {
        Polarity::Positive => format!("be {past}"),
        Polarity::Negative => format!("not be {past}"),
    };

    Ok(BE_WAS.apply(phrase))
}
