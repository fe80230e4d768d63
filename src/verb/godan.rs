/// A row of godan replacements, keyed by the final kana of a verb.
#[derive(Debug, Clone, Copy)]
pub(super) struct Godan {
    /// Stem preceding ます.
    pub(super) masu: &'static str,
    /// Stem preceding ない.
    pub(super) nai: &'static str,
    /// Te-form ending.
    pub(super) te: &'static str,
    /// Past ending.
    pub(super) ta: &'static str,
    /// Plain volitional ending.
    pub(super) volitional: &'static str,
    /// E-row ending.
    pub(super) e: &'static str,
}

impl Godan {
    const fn new(
        masu: &'static str,
        nai: &'static str,
        te: &'static str,
        ta: &'static str,
        volitional: &'static str,
        e: &'static str,
    ) -> Self {
        Self {
            masu,
            nai,
            te,
            ta,
            volitional,
            e,
        }
    }
}

// NB: the negative stem of the u-row is わ, not あ.
const U: Godan = Godan::new("い", "わ", "って", "った", "おう", "え");
const KU: Godan = Godan::new("き", "か", "いて", "いた", "こう", "け");
const GU: Godan = Godan::new("ぎ", "が", "いで", "いだ", "ごう", "げ");
const SU: Godan = Godan::new("し", "さ", "して", "した", "そう", "せ");
const TSU: Godan = Godan::new("ち", "た", "って", "った", "とう", "て");
const NU: Godan = Godan::new("に", "な", "んで", "んだ", "のう", "ね");
const BU: Godan = Godan::new("び", "ば", "んで", "んだ", "ぼう", "べ");
const MU: Godan = Godan::new("み", "ま", "んで", "んだ", "もう", "め");
const RU: Godan = Godan::new("り", "ら", "って", "った", "ろう", "れ");

/// Look up the row for the final kana of a godan verb.
pub(super) fn row(ending: char) -> Option<&'static Godan> {
    let row = match ending {
        'う' => &U,
        'く' => &KU,
        'ぐ' => &GU,
        'す' => &SU,
        'つ' => &TSU,
        'ぬ' => &NU,
        'ぶ' => &BU,
        'む' => &MU,
        'る' => &RU,
        _ => return None,
    };

    Some(row)
}
