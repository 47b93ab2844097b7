use rowan::TextRange;

use super::*;

#[test]
fn severity_display() {
    insta::assert_snapshot!(format!("{}", Severity::Error), @"error");
    insta::assert_snapshot!(format!("{}", Severity::Warning), @"warning");
}

#[test]
fn report_with_default_message() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(
            DiagnosticKind::InvalidStatus,
            TextRange::new(3.into(), 11.into()),
        )
        .emit();

    assert_eq!(diagnostics.len(), 1);
    assert!(diagnostics.has_errors());
    assert!(!diagnostics.has_warnings());
}

#[test]
fn report_with_custom_message() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(
            DiagnosticKind::UnknownTag,
            TextRange::new(0.into(), 5.into()),
        )
        .message("unknown tag `state`; expected `is` or `author`")
        .emit();

    assert_eq!(diagnostics.kinds(), vec![DiagnosticKind::UnknownTag]);
}

#[test]
fn warnings_do_not_count_as_errors() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(
            DiagnosticKind::ConflictingTerms,
            TextRange::new(0.into(), 5.into()),
        )
        .emit();

    assert!(diagnostics.has_warnings());
    assert!(!diagnostics.has_errors());
    assert_eq!(diagnostics.error_count(), 0);
    assert_eq!(diagnostics.warning_count(), 1);
}

#[test]
fn plain_format_without_source() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(
            DiagnosticKind::InvalidStatus,
            TextRange::new(3.into(), 11.into()),
        )
        .emit();
    diagnostics
        .report(DiagnosticKind::ExpectedColon, TextRange::empty(14.into()))
        .emit();

    insta::assert_snapshot!(diagnostics.printer().render(), @r"
    error at 3..11: `is:` accepts `open` or `closed`
    error at 14..14: expected `:` after tag
    ");
}

#[test]
fn rendered_output_underlines_the_span() {
    let source = "is:archived";
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(
            DiagnosticKind::InvalidStatus,
            TextRange::new(3.into(), 11.into()),
        )
        .emit();

    let rendered = diagnostics.printer().source(source).render();
    assert!(rendered.contains("`is:` accepts `open` or `closed`"));
    assert!(rendered.contains("is:archived"));
    assert!(rendered.contains("^^^^^^^^"));
}

#[test]
fn empty_span_still_points_somewhere() {
    let source = "is";
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::ExpectedColon, TextRange::empty(2.into()))
        .emit();

    // must not panic on the zero-width range at end of input
    let rendered = diagnostics.printer().source(source).render();
    assert!(rendered.contains("expected `:` after tag"));
}

#[test]
fn render_with_path_names_the_origin() {
    let source = "state:open";
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(
            DiagnosticKind::UnknownTag,
            TextRange::new(0.into(), 5.into()),
        )
        .emit();

    let rendered = diagnostics
        .printer()
        .source(source)
        .path("query")
        .render();
    assert!(rendered.contains("query"));
}

#[test]
fn no_output_for_empty_collection() {
    let diagnostics = Diagnostics::new();
    assert_eq!(diagnostics.printer().source("is:open").render(), "");
    assert_eq!(diagnostics.printer().render(), "");
}
