use std::fmt;

use rowan::TextRange;

/// What went wrong. Declaration order is priority order, most important first.
///
/// A missing closer makes everything after it look wrong, so the `Unclosed*`
/// kinds come first; a missing piece (`Expected*`) is the next thing to fix;
/// misplaced tokens follow; checks that run on a well-formed tree come last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DiagnosticKind {
    UnclosedParen,
    UnclosedBracket,
    UnclosedBrace,
    UnclosedString,

    ExpectedExpression,
    ExpectedName,
    ExpectedBody,

    UnexpectedToken,
    MissingSeparator,
    InvalidSeparator,
    LoneDollar,
    InvalidNodeBodyItem,

    InvalidCondition,
    InvalidCheck,
    EmptyWhen,
}

impl DiagnosticKind {
    pub fn default_severity(&self) -> Severity {
        if *self == Self::EmptyWhen {
            Severity::Warning
        } else {
            Severity::Error
        }
    }

    /// Whether this kind outranks `other` when their spans overlap.
    pub fn suppresses(&self, other: &DiagnosticKind) -> bool {
        self < other
    }

    /// A delimiter left open. Reported where the parser gave up, which is
    /// often the same place as the real mistake.
    pub fn is_structural_error(&self) -> bool {
        matches!(
            self,
            Self::UnclosedParen | Self::UnclosedBracket | Self::UnclosedBrace | Self::UnclosedString
        )
    }

    /// Something required is missing.
    pub fn is_root_cause_error(&self) -> bool {
        matches!(
            self,
            Self::ExpectedExpression | Self::ExpectedName | Self::ExpectedBody
        )
    }

    /// Hint attached to every diagnostic of this kind.
    pub fn default_hint(&self) -> Option<&'static str> {
        let hint = match self {
            Self::MissingSeparator => "a line break also works as a separator",
            Self::InvalidCondition => {
                "conditions are names, comparisons, calls, `true`/`false`, or `( ... )`"
            }
            Self::InvalidNodeBodyItem => "node bodies hold `key: value` pairs and `if` blocks",
            Self::LoneDollar => "`$name` and `${expr}` only work inside f-strings",
            _ => return None,
        };
        Some(hint)
    }

    /// Message used when the reporter gives no detail.
    pub fn fallback_message(&self) -> &'static str {
        match self {
            Self::UnclosedParen => "missing closing `)`",
            Self::UnclosedBracket => "missing closing `]`",
            Self::UnclosedBrace => "missing closing `}`",
            Self::UnclosedString => "unterminated string",
            Self::ExpectedExpression => "expected an expression",
            Self::ExpectedName => "expected a name",
            Self::ExpectedBody => "expected a `{ ... }` block",
            Self::UnexpectedToken => "unexpected token",
            Self::MissingSeparator => "missing separator",
            Self::InvalidSeparator => "unexpected separator",
            Self::LoneDollar => "`$` outside of a string",
            Self::InvalidNodeBodyItem => "invalid node body item",
            Self::InvalidCondition => "invalid condition",
            Self::InvalidCheck => "invalid `when` subject",
            Self::EmptyWhen => "`when` has no cases",
        }
    }

    /// Full message text, folding in the reporter's `detail`.
    ///
    /// For the two placement checks the detail names the offending construct
    /// (`"a string"`), for everything else it is appended to the fallback.
    pub fn message(&self, detail: Option<&str>) -> String {
        let Some(detail) = detail else {
            return self.fallback_message().to_string();
        };
        match self {
            Self::InvalidCondition => format!("{detail} cannot be used as a condition"),
            Self::InvalidCheck => format!("{detail} cannot be matched by `when`"),
            kind if kind.is_structural_error() => {
                format!("{}; {detail}", kind.fallback_message())
            }
            kind => format!("{}: {detail}", kind.fallback_message()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
        })
    }
}

/// A suggested edit: replace the diagnostic's range with `replacement`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fix {
    pub(crate) replacement: String,
    pub(crate) description: String,
}

impl Fix {
    pub fn new(replacement: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            replacement: replacement.into(),
            description: description.into(),
        }
    }
}

/// A secondary location, e.g. where an unclosed delimiter was opened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelatedInfo {
    pub(crate) range: TextRange,
    pub(crate) message: String,
}

impl RelatedInfo {
    pub fn new(range: TextRange, message: impl Into<String>) -> Self {
        Self {
            range,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticMessage {
    pub(crate) kind: DiagnosticKind,
    /// Underlined in rendered output.
    pub(crate) range: TextRange,
    /// Region whose lower-priority diagnostics this one hides. Starts out as
    /// `range`; the parser widens it to the enclosing open delimiter.
    pub(crate) suppression_range: TextRange,
    pub(crate) message: String,
    pub(crate) fix: Option<Fix>,
    pub(crate) related: Vec<RelatedInfo>,
    pub(crate) hints: Vec<String>,
}

impl DiagnosticMessage {
    pub(crate) fn with_default_message(kind: DiagnosticKind, range: TextRange) -> Self {
        Self {
            kind,
            range,
            suppression_range: range,
            message: kind.fallback_message().to_string(),
            fix: None,
            related: Vec::new(),
            hints: kind.default_hint().map(String::from).into_iter().collect(),
        }
    }

    pub fn kind(&self) -> DiagnosticKind {
        self.kind
    }

    pub fn range(&self) -> TextRange {
        self.range
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn severity(&self) -> Severity {
        self.kind.default_severity()
    }

    pub fn is_error(&self) -> bool {
        self.severity() == Severity::Error
    }

    pub fn is_warning(&self) -> bool {
        self.severity() == Severity::Warning
    }
}

struct Span(TextRange);

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", u32::from(self.0.start()), u32::from(self.0.end()))
    }
}

/// One line: `error at 3..5: message (fix: ..) (related: .. at 0..1) (hint: ..)`.
impl fmt::Display for DiagnosticMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}: {}", self.severity(), Span(self.range), self.message)?;
        if let Some(fix) = &self.fix {
            write!(f, " (fix: {})", fix.description)?;
        }
        for related in &self.related {
            write!(f, " (related: {} at {})", related.message, Span(related.range))?;
        }
        self.hints
            .iter()
            .try_for_each(|hint| write!(f, " (hint: {})", hint))
    }
}
