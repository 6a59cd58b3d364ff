use kumo_core::{PosTag, WordFrequency};

fn pos_label(pos: Option<&PosTag>) -> &str {
    match pos {
        Some(PosTag::Noun) => "noun",
        Some(PosTag::Verb) => "verb",
        Some(PosTag::Adjective) => "adjective",
        Some(PosTag::Adverb) => "adverb",
        Some(PosTag::Other(tag)) => tag,
        None => "",
    }
}

fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

/// Exports the ranked word list as `word,frequency,pos` CSV, in ranked order.
pub fn export_csv(words: &[WordFrequency]) -> String {
    let mut out = String::from("word,frequency,pos\n");
    for word in words {
        out.push_str(&quote(&word.text));
        out.push(',');
        out.push_str(&word.value.to_string());
        out.push(',');
        out.push_str(&quote(pos_label(word.pos.as_ref())));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_ranked_order_and_quotes_fields() {
        let words = vec![
            WordFrequency::new("言葉", 12).with_pos(PosTag::Noun),
            WordFrequency::new("走る", 4).with_pos(PosTag::Verb),
            WordFrequency::new("plain", 1),
        ];
        let csv = export_csv(&words);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "word,frequency,pos");
        assert_eq!(lines[1], "\"言葉\",12,\"noun\"");
        assert_eq!(lines[2], "\"走る\",4,\"verb\"");
        assert_eq!(lines[3], "\"plain\",1,\"\"");
    }

    #[test]
    fn escapes_embedded_quotes() {
        let words = vec![WordFrequency::new("say \"hi\"", 2)];
        let csv = export_csv(&words);
        assert!(csv.contains("\"say \"\"hi\"\"\",2,\"\""));
    }

    #[test]
    fn empty_input_is_header_only() {
        assert_eq!(export_csv(&[]), "word,frequency,pos\n");
    }
}
