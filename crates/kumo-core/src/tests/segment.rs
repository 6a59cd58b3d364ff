use crate::*;

#[test]
fn delimiter_segmenter_splits_on_ascii_and_cjk_punctuation() {
    let tokens = DelimiterSegmenter.segment("春が来た。桜、咲く！(hello world)");
    let surfaces: Vec<&str> = tokens.iter().map(|t| t.surface.as_str()).collect();
    assert_eq!(surfaces, vec!["春が来た", "桜", "咲く", "hello", "world"]);
    assert!(tokens.iter().all(|t| t.pos.is_none()));
}

#[test]
fn delimiter_segmenter_handles_brackets_and_quotes() {
    let tokens = DelimiterSegmenter.segment("「言葉」『雲』【空】\u{201C}quoted\u{201D}");
    let surfaces: Vec<&str> = tokens.iter().map(|t| t.surface.as_str()).collect();
    assert_eq!(surfaces, vec!["言葉", "雲", "空", "quoted"]);
}

#[test]
fn dictionary_segmenter_prefers_longest_match() {
    let mut dict = DictionarySegmenter::default();
    dict.insert("東京", None, PosTag::Noun);
    dict.insert("東京都", None, PosTag::Noun);
    dict.insert("都", None, PosTag::Noun);

    let tokens = dict.segment("東京都");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].surface, "東京都");
    assert_eq!(tokens[0].pos, Some(PosTag::Noun));
}

#[test]
fn dictionary_segmenter_falls_back_on_unknown_runs() {
    let mut dict = DictionarySegmenter::default();
    dict.insert("雲", None, PosTag::Noun);

    let tokens = dict.segment("xyz 雲 abc、def");
    let surfaces: Vec<(&str, bool)> = tokens
        .iter()
        .map(|t| (t.surface.as_str(), t.pos.is_some()))
        .collect();
    assert_eq!(
        surfaces,
        vec![("xyz", false), ("雲", true), ("abc", false), ("def", false)]
    );
}

#[test]
fn dictionary_loads_from_tsv_and_rejects_empty_lexicons() {
    let tsv = "# surface\tbase\tpos\n走っ\t走る\tverb\n静か\t\tadjective\n";
    let dict = DictionarySegmenter::from_reader(tsv.as_bytes()).unwrap();
    assert_eq!(dict.len(), 2);

    let tokens = dict.segment("走っ");
    assert_eq!(tokens[0].counting_form(), "走る");
    assert_eq!(tokens[0].pos, Some(PosTag::Verb));

    let err = DictionarySegmenter::from_reader("".as_bytes()).unwrap_err();
    assert!(matches!(err, Error::DictionaryUnavailable { .. }));
}

#[test]
fn counting_form_defaults_to_surface() {
    let token = Token::plain("そのまま");
    assert_eq!(token.counting_form(), "そのまま");
}
