use crate::*;

#[test]
fn parses_newline_and_comma_family_delimiters() {
    let set = parse_stopwords("ありがとう\nこんにちは,さようなら，おはよう、こんばんは");
    assert_eq!(set.len(), 5);
    assert!(set.contains("ありがとう"));
    assert!(set.contains("こんばんは"));
}

#[test]
fn normalizes_and_dedupes_entries() {
    // Width variants and case variants collapse into one entry.
    let set = parse_stopwords("Cafe\nＣＡＦＥ\ncafe");
    assert_eq!(set.len(), 1);
    assert!(set.contains("cafe"));
}

#[test]
fn empty_input_is_an_empty_set() {
    let set = parse_stopwords("");
    assert!(set.is_empty());
    assert!(!set.contains(""));

    let set = parse_stopwords(" \n , 、 ");
    assert!(set.is_empty());
}

#[test]
fn default_japanese_list_contains_common_particles() {
    let set = StopwordSet::default_japanese();
    assert!(set.contains("の"));
    assert!(set.contains("こと"));
    assert!(set.len() >= 90);
}

#[test]
fn windows_line_endings_are_handled() {
    let set = parse_stopwords("一つ\r\n二つ\r\n");
    assert_eq!(set.len(), 2);
    assert!(set.contains("二つ"));
}
