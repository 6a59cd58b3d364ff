use crate::error::{Error, Result};
use crate::model::PosTag;
use std::collections::HashMap;
use std::io::BufRead;

/// One segmentation unit before normalization/filtering.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub surface: String,
    /// Dictionary base form, when the segmenter knows one.
    pub base: Option<String>,
    /// Part-of-speech tag; `None` for tokens produced by the delimiter
    /// fallback (including unknown runs inside dictionary segmentation).
    pub pos: Option<PosTag>,
}

impl Token {
    pub fn plain(surface: impl Into<String>) -> Self {
        Self {
            surface: surface.into(),
            base: None,
            pos: None,
        }
    }

    /// The form used for counting: dictionary base form when available,
    /// surface form otherwise.
    pub fn counting_form(&self) -> &str {
        self.base.as_deref().unwrap_or(&self.surface)
    }
}

/// Splits raw text into candidate tokens.
///
/// The two provided implementations are functionally substitutable: the
/// frequency extractor accepts any of them through this seam.
pub trait Segmenter {
    fn segment(&self, text: &str) -> Vec<Token>;
}

/// Token boundary characters for the fallback segmenter.
///
/// Mirrors the upstream fallback character class: ASCII punctuation plus the
/// CJK punctuation and bracket families.
pub fn is_delimiter(ch: char) -> bool {
    if ch.is_whitespace() {
        return true;
    }
    matches!(
        ch,
        '、' | '。'
            | '．'
            | '，'
            | ','
            | '.'
            | '!'
            | '！'
            | '?'
            | '？'
            | '・'
            | '「'
            | '」'
            | '『'
            | '』'
            | '（'
            | '）'
            | '('
            | ')'
            | '［'
            | '］'
            | '['
            | ']'
            | '【'
            | '】'
            | '{'
            | '}'
            | '<'
            | '>'
            | '《'
            | '》'
            | '〈'
            | '〉'
            | '/'
            | '\\'
            | '|'
            | ':'
            | '：'
            | ';'
            | '；'
            | '"'
            | '\''
            | '\u{201C}'
            | '\u{201D}'
            | '\u{2018}'
            | '\u{2019}'
    )
}

/// Boundary-based segmentation: splits on whitespace and punctuation.
///
/// Used when no dictionary is loaded; yields untagged surface tokens.
#[derive(Debug, Clone, Copy, Default)]
pub struct DelimiterSegmenter;

impl Segmenter for DelimiterSegmenter {
    fn segment(&self, text: &str) -> Vec<Token> {
        text.split(is_delimiter)
            .filter(|s| !s.is_empty())
            .map(Token::plain)
            .collect()
    }
}

#[derive(Debug, Clone)]
struct LexiconEntry {
    base: Option<String>,
    pos: PosTag,
}

/// Dictionary-based segmentation via greedy longest match over a loaded
/// lexicon.
///
/// Lexicon lines are `surface<TAB>base<TAB>pos` (base may be empty; pos is one
/// of `noun|verb|adjective|adverb` or an arbitrary tag kept as `Other`).
/// Text spans with no dictionary match fall back to delimiter splitting and
/// come out untagged.
#[derive(Debug, Clone, Default)]
pub struct DictionarySegmenter {
    entries: HashMap<String, LexiconEntry>,
    /// Longest surface form in chars, bounds the match window.
    max_surface_chars: usize,
}

impl DictionarySegmenter {
    pub fn from_reader(reader: impl BufRead) -> Result<Self> {
        let mut segmenter = Self::default();
        for line in reader.lines() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let mut fields = line.split('\t');
            let Some(surface) = fields.next().map(str::trim).filter(|s| !s.is_empty()) else {
                continue;
            };
            let base = fields
                .next()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string);
            let pos = match fields.next().map(str::trim) {
                Some("noun") => PosTag::Noun,
                Some("verb") => PosTag::Verb,
                Some("adjective") => PosTag::Adjective,
                Some("adverb") => PosTag::Adverb,
                Some(other) if !other.is_empty() => PosTag::Other(other.to_string()),
                _ => PosTag::Noun,
            };
            segmenter.insert(surface, base, pos);
        }
        if segmenter.entries.is_empty() {
            return Err(Error::DictionaryUnavailable {
                message: "lexicon contains no entries".to_string(),
            });
        }
        Ok(segmenter)
    }

    pub fn from_path(path: &std::path::Path) -> Result<Self> {
        let file = std::fs::File::open(path).map_err(|err| Error::DictionaryUnavailable {
            message: format!("{}: {err}", path.display()),
        })?;
        Self::from_reader(std::io::BufReader::new(file))
    }

    pub fn insert(&mut self, surface: &str, base: Option<String>, pos: PosTag) {
        self.max_surface_chars = self.max_surface_chars.max(surface.chars().count());
        self.entries
            .insert(surface.to_string(), LexiconEntry { base, pos });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn flush_unknown(&self, run: &mut String, out: &mut Vec<Token>) {
        if run.is_empty() {
            return;
        }
        out.extend(DelimiterSegmenter.segment(run));
        run.clear();
    }
}

impl Segmenter for DictionarySegmenter {
    fn segment(&self, text: &str) -> Vec<Token> {
        let chars: Vec<char> = text.chars().collect();
        let mut out = Vec::new();
        let mut unknown = String::new();
        let mut i = 0;
        while i < chars.len() {
            if is_delimiter(chars[i]) {
                self.flush_unknown(&mut unknown, &mut out);
                i += 1;
                continue;
            }
            let window = self.max_surface_chars.min(chars.len() - i);
            let mut matched = None;
            for len in (1..=window).rev() {
                let candidate: String = chars[i..i + len].iter().collect();
                if let Some(entry) = self.entries.get(&candidate) {
                    matched = Some((len, candidate, entry));
                    break;
                }
            }
            match matched {
                Some((len, surface, entry)) => {
                    self.flush_unknown(&mut unknown, &mut out);
                    out.push(Token {
                        surface,
                        base: entry.base.clone(),
                        pos: Some(entry.pos.clone()),
                    });
                    i += len;
                }
                None => {
                    unknown.push(chars[i]);
                    i += 1;
                }
            }
        }
        self.flush_unknown(&mut unknown, &mut out);
        out
    }
}
