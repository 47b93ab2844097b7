use rowan::TextRange;

use crate::parser::ast::{QueryAst, Status, Term, TermKind};

fn term(kind: TermKind) -> Term {
    Term {
        kind,
        span: TextRange::empty(0.into()),
    }
}

#[test]
fn status_from_keyword() {
    assert_eq!(Status::from_keyword("open"), Some(Status::Open));
    assert_eq!(Status::from_keyword("closed"), Some(Status::Closed));
    assert_eq!(Status::from_keyword("archived"), None);
    assert_eq!(Status::from_keyword("Open"), None);
    assert_eq!(Status::from_keyword(""), None);
}

#[test]
fn status_display_matches_keyword() {
    for status in Status::ALL {
        assert_eq!(Status::from_keyword(&status.to_string()), Some(status));
    }
}

#[test]
fn dump_renders_one_line_per_term() {
    let ast = QueryAst::new(vec![
        term(TermKind::Status(Status::Closed)),
        term(TermKind::Author("danlamanna".to_string())),
    ]);
    insta::assert_snapshot!(ast.dump(), @r#"
    Query
      Status "closed"
      Author "danlamanna"
    "#);
}

#[test]
fn dump_of_empty_tree() {
    assert_eq!(QueryAst::default().dump(), "Query");
}
