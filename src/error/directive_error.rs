use crate::error::ParseError;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents problems with the directive structure of a file.
///
/// Every variant carries the 1-based source line of the directive that caused
/// it. None of them stop a pass: the directive is ignored and scanning goes on.
pub enum DirectiveError {
    /// An `$IF`-family directive with no matching `$ENDIF`/`$IFEND`.
    UnterminatedConditional {
        /// The directive as written, e.g. `{$IFDEF DEBUG}`.
        directive: String,
        /// The source line where the directive starts.
        line:      usize,
    },
    /// An `$ELSE`, `$ELSEIF`, `$ENDIF` or `$IFEND` outside any group.
    UnmatchedDirective {
        /// The directive as written.
        directive: String,
        /// The source line where the directive starts.
        line:      usize,
    },
    /// A second `$ELSE`, or an `$ELSEIF` after `$ELSE`, in one group.
    DuplicateElse {
        /// The directive as written.
        directive: String,
        /// The source line where the directive starts.
        line:      usize,
    },
    /// A condition that could not be lexed or parsed. It counts as false.
    InvalidCondition {
        /// The condition text.
        condition: String,
        /// Why it was rejected.
        error:     ParseError,
        /// The source line where the directive starts.
        line:      usize,
    },
    /// An include the resolver could not load.
    IncludeNotFound {
        /// The include name as written, without quotes.
        name: String,
        /// The source line where the directive starts.
        line: usize,
    },
    /// Includes nested deeper than the configured limit.
    IncludeDepthExceeded {
        /// The include name as written, without quotes.
        name:  String,
        /// The configured limit.
        limit: usize,
        /// The source line where the directive starts.
        line:  usize,
    },
    /// An include of a file that is already being included.
    IncludeCycle {
        /// The include name as written, without quotes.
        name: String,
        /// The source line where the directive starts.
        line: usize,
    },
    /// A problem found while preprocessing an included file.
    InInclude {
        /// The include name as written, without quotes.
        name:  String,
        /// The problem, with its line relative to the included text.
        error: Box<Self>,
        /// The line of the include directive in the including text.
        line:  usize,
    },
}

impl DirectiveError {
    /// Gets the source line the error refers to.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnterminatedConditional { line, .. }
            | Self::UnmatchedDirective { line, .. }
            | Self::DuplicateElse { line, .. }
            | Self::InvalidCondition { line, .. }
            | Self::IncludeNotFound { line, .. }
            | Self::IncludeDepthExceeded { line, .. }
            | Self::IncludeCycle { line, .. }
            | Self::InInclude { line, .. } => *line,
        }
    }
}

impl std::fmt::Display for DirectiveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnterminatedConditional { directive, line } => write!(f,
                                                                        "Error on line {line}: No matching terminator for {directive}; directive ignored."),
            Self::UnmatchedDirective { directive, line } => {
                write!(f, "Error on line {line}: {directive} has no opening conditional.")
            },
            Self::DuplicateElse { directive, line } => {
                write!(f, "Error on line {line}: {directive} follows an else branch.")
            },
            Self::InvalidCondition { condition,
                                     error,
                                     line, } => write!(f,
                                                       "Error on line {line}: Invalid condition '{condition}': {error}"),
            Self::IncludeNotFound { name, line } => {
                write!(f, "Error on line {line}: Include file '{name}' not found.")
            },
            Self::IncludeDepthExceeded { name, limit, line } => write!(f,
                                                                       "Error on line {line}: Including '{name}' exceeds the nesting limit of {limit}."),
            Self::IncludeCycle { name, line } => {
                write!(f, "Error on line {line}: '{name}' includes itself; directive ignored.")
            },
            Self::InInclude { name, error, line } => {
                write!(f, "In '{name}' included on line {line}: {error}")
            },
        }
    }
}

impl std::error::Error for DirectiveError {}
