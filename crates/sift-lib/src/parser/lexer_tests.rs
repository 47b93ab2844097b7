use crate::parser::lexer::{lex, token_text};

/// Format tokens without trivia (default for most tests)
fn snapshot(input: &str) -> String {
    format_tokens(input, false)
}

/// Format tokens with trivia included
fn snapshot_raw(input: &str) -> String {
    format_tokens(input, true)
}

fn format_tokens(input: &str, include_trivia: bool) -> String {
    let tokens = lex(input);
    let mut out = String::new();
    for token in tokens {
        if include_trivia || !token.kind.is_trivia() {
            out.push_str(&format!(
                "{:?} {:?}\n",
                token.kind,
                token_text(input, &token)
            ));
        }
    }
    out
}

#[test]
fn status_term() {
    insta::assert_snapshot!(snapshot("is:open"), @r#"
    Word "is"
    Colon ":"
    Word "open"
    "#);
}

#[test]
fn author_term() {
    insta::assert_snapshot!(snapshot("author:danlamanna"), @r#"
    Word "author"
    Colon ":"
    Word "danlamanna"
    "#);
}

#[test]
fn identifier_with_digits_and_underscore() {
    insta::assert_snapshot!(snapshot("author:dan_90"), @r#"
    Word "author"
    Colon ":"
    Word "dan_90"
    "#);
}

#[test]
fn whitespace_is_trivia() {
    insta::assert_snapshot!(snapshot_raw("is:open \t author:dan"), @r#"
    Word "is"
    Colon ":"
    Word "open"
    Whitespace " \t "
    Word "author"
    Colon ":"
    Word "dan"
    "#);
}

#[test]
fn garbage_coalesces() {
    insta::assert_snapshot!(snapshot("a-+#b"), @r#"
    Word "a"
    Garbage "-+#"
    Word "b"
    "#);
}

#[test]
fn garbage_at_end_of_input() {
    insta::assert_snapshot!(snapshot("is:@@@"), @r#"
    Word "is"
    Colon ":"
    Garbage "@@@"
    "#);
}

#[test]
fn empty_input_has_no_tokens() {
    assert!(lex("").is_empty());
}

#[test]
fn spans_are_byte_ranges() {
    let tokens = lex("is:open");
    let spans: Vec<(u32, u32)> = tokens
        .iter()
        .map(|t| (t.span.start().into(), t.span.end().into()))
        .collect();
    assert_eq!(spans, vec![(0, 2), (2, 3), (3, 7)]);
}
