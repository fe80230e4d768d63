
/// The nine kana a dictionary-form verb can end in.
pub const DICTIONARY_ENDINGS: [char; 9] = ['う', 'く', 'ぐ', 'す', 'つ', 'ぬ', 'ぶ', 'む', 'る'];

/// Test if the given character can end a dictionary-form verb.
pub fn is_dictionary_ending(c: char) -> bool {
    DICTIONARY_ENDINGS.contains(&c)
}

/// Split off the last character of a surface.
pub(crate) fn split_last(surface: &str) -> Option<(&str, char)> {
    let mut chars = surface.chars();
    let last = chars.next_back()?;
    Some((chars.as_str(), last))
}

/// Replace a trailing `from` with `to`, or `None` if the surface does not end
/// with `from`.
pub(crate) fn replace_suffix(surface: &str, from: &str, to: &str) -> Option<String> {
    let stem = surface.strip_suffix(from)?;
    Some(concat(stem, [to]))
}

/// Concatenate a stem with any number of suffixes.
pub(crate) fn concat<'a, I>(stem: &str, suffixes: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut out = String::from(stem);

    for suffix in suffixes {
        out.push_str(suffix);
    }

    out
}
