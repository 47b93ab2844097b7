use rowan::TextRange;

/// Diagnostic kinds, roughly ordered from "query is unusable" down to
/// "query is suspicious".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DiagnosticKind {
    /// Query contains no term at all (empty or whitespace-only input).
    EmptyQuery,
    /// Tag word is neither `is` nor `author`.
    UnknownTag,
    /// Tag not followed by `:`.
    ExpectedColon,
    /// `:` not followed by a value word.
    ExpectedValue,
    /// `is:` value outside the `open`/`closed` enumeration.
    InvalidStatus,
    /// Characters that cannot start or continue a term.
    UnexpectedInput,
    /// Repeated terms of one kind demand two different values at once;
    /// the conjunction can never match a record.
    ConflictingTerms,
}

impl DiagnosticKind {
    pub(crate) fn fallback_message(self) -> &'static str {
        match self {
            DiagnosticKind::EmptyQuery => "query contains no terms",
            DiagnosticKind::UnknownTag => "unknown tag",
            DiagnosticKind::ExpectedColon => "expected `:` after tag",
            DiagnosticKind::ExpectedValue => "expected a value after `:`",
            DiagnosticKind::InvalidStatus => "`is:` accepts `open` or `closed`",
            DiagnosticKind::UnexpectedInput => "unexpected input",
            DiagnosticKind::ConflictingTerms => "conflicting terms can never match",
        }
    }

    pub(crate) fn default_severity(self) -> Severity {
        match self {
            DiagnosticKind::ConflictingTerms => Severity::Warning,
            _ => Severity::Error,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    #[default]
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DiagnosticMessage {
    pub(crate) kind: DiagnosticKind,
    /// The range underlined in output.
    pub(crate) range: TextRange,
    pub(crate) message: String,
}

impl DiagnosticMessage {
    pub(crate) fn new(kind: DiagnosticKind, range: TextRange, message: impl Into<String>) -> Self {
        Self {
            kind,
            range,
            message: message.into(),
        }
    }

    pub(crate) fn with_default_message(kind: DiagnosticKind, range: TextRange) -> Self {
        Self::new(kind, range, kind.fallback_message())
    }

    pub(crate) fn severity(&self) -> Severity {
        self.kind.default_severity()
    }

    pub(crate) fn is_error(&self) -> bool {
        self.severity() == Severity::Error
    }

    pub(crate) fn is_warning(&self) -> bool {
        self.severity() == Severity::Warning
    }
}

impl std::fmt::Display for DiagnosticMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} at {}..{}: {}",
            self.severity(),
            u32::from(self.range.start()),
            u32::from(self.range.end()),
            self.message
        )
    }
}
