use crate::frequency::normalize_token;
use std::collections::HashSet;

/// Common Japanese function words filtered by default (particles, auxiliaries
/// and formal nouns that dominate raw frequency counts).
pub const DEFAULT_JA_STOPWORDS: &[&str] = &[
    "の", "に", "は", "を", "た", "が", "で", "て", "と", "し", "れ", "さ", "ある", "いる", "も",
    "する", "から", "な", "こと", "として", "い", "や", "など", "ない", "この", "ため", "その",
    "よう", "また", "もの", "という", "あり", "まで", "られ", "なる", "へ", "か", "だ", "これ",
    "によって", "により", "おり", "より", "による", "ず", "なり", "られる", "において", "ば",
    "なく", "しかし", "について", "せ", "だっ", "できる", "それ", "う", "ので", "なお", "のみ",
    "でき", "き", "つ", "における", "および", "いう", "さらに", "でも", "ら", "たり", "その他",
    "たち", "ます", "ん", "なら", "に対して", "特に", "せる", "及び", "これら", "とき", "では",
    "にて", "ほか", "ながら", "うち", "そして", "とともに", "ただし", "かつて", "それぞれ",
    "または", "ほど", "ものの", "に対する", "ほとんど", "といった", "です", "とも", "ところ",
    "ここ",
];

/// Normalized, deduplicated stopword set.
#[derive(Debug, Clone, Default)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    pub fn contains(&self, normalized_token: &str) -> bool {
        self.words.contains(normalized_token)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn default_japanese() -> Self {
        parse_stopwords(&DEFAULT_JA_STOPWORDS.join("\n"))
    }
}

impl<S: AsRef<str>> FromIterator<S> for StopwordSet {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        let words = iter
            .into_iter()
            .map(|w| normalize_token(w.as_ref()))
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }
}

/// Parses raw stopword text into a set.
///
/// Entries are separated by newlines or the comma family (ASCII comma,
/// full-width comma, ideographic comma), normalized like regular tokens, and
/// deduplicated. Empty input yields an empty set.
pub fn parse_stopwords(raw: &str) -> StopwordSet {
    raw.split(['\n', '\r', ',', '，', '、'])
        .map(str::trim)
        .filter(|w| !w.is_empty())
        .collect()
}
