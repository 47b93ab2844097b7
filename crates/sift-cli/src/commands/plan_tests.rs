use sift_lib::Query;

use super::plan;

#[test]
fn compact_json() {
    let query = Query::parse("is:closed").unwrap();
    insta::assert_snapshot!(plan::render(&query, false), @r#"{"status_eq":"closed"}"#);
}

#[test]
fn pretty_json_of_a_conjunction() {
    let query = Query::parse("is:open author:danlamanna").unwrap();
    insta::assert_snapshot!(plan::render(&query, true), @r#"
    {
      "and": [
        {
          "status_eq": "open"
        },
        {
          "author_eq": "danlamanna"
        }
      ]
    }
    "#);
}
