use crate::matching::Record;
use crate::parser::ast::Status;
use crate::predicate::Predicate;

fn record(status: Status, author: &str) -> Record {
    Record {
        status,
        author: author.to_string(),
    }
}

#[test]
fn status_equality() {
    let predicate = Predicate::StatusEq(Status::Open);
    assert!(predicate.matches(&record(Status::Open, "dan")));
    assert!(!predicate.matches(&record(Status::Closed, "dan")));
}

#[test]
fn author_equality_is_exact_and_case_sensitive() {
    let predicate = Predicate::AuthorEq("danlamanna".to_string());
    assert!(predicate.matches(&record(Status::Open, "danlamanna")));
    assert!(!predicate.matches(&record(Status::Open, "DanLamanna")));
    assert!(!predicate.matches(&record(Status::Open, "danlamanna2")));
}

#[test]
fn conjunction_requires_every_operand() {
    let predicate =
        Predicate::StatusEq(Status::Open).and(Predicate::AuthorEq("dan".to_string()));
    assert!(predicate.matches(&record(Status::Open, "dan")));
    assert!(!predicate.matches(&record(Status::Closed, "dan")));
    assert!(!predicate.matches(&record(Status::Open, "someone_else")));
}

#[test]
fn empty_conjunction_is_vacuously_true() {
    let predicate = Predicate::And(Vec::new());
    for status in Status::ALL {
        assert!(predicate.matches(&record(status, "anyone")));
    }
}

#[test]
fn contradictory_statuses_match_nothing() {
    // a record's status is exactly one value, so demanding both is
    // unsatisfiable
    let predicate =
        Predicate::StatusEq(Status::Closed).and(Predicate::StatusEq(Status::Open));
    for status in Status::ALL {
        for author in ["danlamanna", "brennie", ""] {
            assert!(!predicate.matches(&record(status, author)));
        }
    }
}

#[test]
fn record_deserializes_from_json() {
    let record: Record =
        serde_json::from_str(r#"{"status":"open","author":"danlamanna"}"#).unwrap();
    assert_eq!(record.status, Status::Open);
    assert_eq!(record.author, "danlamanna");
}
