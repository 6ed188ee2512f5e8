use glint::{highlight, highlight_with, Category, Rgba, Scanner};
use proptest::prelude::*;
use regex::Regex;

/// Text made mostly of characters that drive the scanner
fn code() -> impl Strategy<Value = String> {
    prop::string::string_regex(r#"[a-z$_ \n\t/*#'"\\<!>\-()\[\]{}=;.]{0,60}"#).unwrap()
}

fn text() -> impl Strategy<Value = String> {
    prop_oneof![code(), any::<String>()]
}

fn color() -> impl Strategy<Value = Rgba> {
    (0.0..=255.0, 0.0..=255.0, 0.0..=255.0, 0.0..=1.0f64)
        .prop_map(|(r, g, b, a)| Rgba::new(r, g, b, a))
}

proptest! {
    /// Token texts put back together give the input
    #[test]
    fn lossless(input in text()) {
        let joined: String = Scanner::new(&input).map(|t| t.text).collect();
        prop_assert_eq!(joined, input);
    }

    #[test]
    fn no_empty_tokens(input in text()) {
        prop_assert!(Scanner::new(&input).all(|t| !t.is_empty()));
    }

    /// Any markup in the output comes from the highlighter itself
    #[test]
    fn output_is_escaped(input in text()) {
        let tags = Regex::new(r#"<span style="[^"<>]*">|</span>"#).unwrap();
        let output = highlight(&input);
        let stripped = tags.replace_all(&output, "");
        prop_assert!(!stripped.contains('<') && !stripped.contains('>'));
        let entity = Regex::new(r"^&(amp|lt|gt|quot|#39);").unwrap();
        for (i, _) in stripped.match_indices('&') {
            prop_assert!(entity.is_match(&stripped[i..]));
        }
    }

    #[test]
    fn pure(input in text(), fg in color(), bg in color()) {
        prop_assert_eq!(highlight_with(&input, fg, bg), highlight_with(&input, fg, bg));
    }

    /// Whitespace never ends a plain token, so runs are never split
    #[test]
    fn whitespace_merged(input in code()) {
        let tokens: Vec<_> = Scanner::new(&input).collect();
        for pair in tokens.windows(2) {
            let split = pair[0].category == Category::Plain
                && pair[1].category == Category::Plain
                && pair[1].text.starts_with(char::is_whitespace);
            prop_assert!(!split, "{:?}", pair);
        }
    }
}
