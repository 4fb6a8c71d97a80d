/// The role a directive plays in conditional compilation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DirectiveKind {
    /// `$DEFINE name`
    Define,
    /// `$UNDEF name`
    Undefine,
    /// `$IF condition`
    If,
    /// `$IFDEF name`
    IfDef,
    /// `$IFNDEF name`
    IfNDef,
    /// `$IFOPT switch`, never statically true.
    IfOpt,
    /// `$ELSE`
    Else,
    /// `$ELSEIF condition`
    ElseIf,
    /// `$ENDIF`
    EndIf,
    /// `$IFEND`
    IfEnd,
    /// `$I file` or `$INCLUDE file`
    Include,
    /// Any other directive, such as a compiler switch. Left untouched.
    Unused,
}

impl DirectiveKind {
    /// Classifies a directive from its name and argument text.
    ///
    /// Names are matched case-insensitively. `$I` followed by `+` or `-` is
    /// the I/O checking switch, not an include.
    ///
    /// # Example
    /// ```
    /// use pascond::preprocessor::directive::DirectiveKind;
    ///
    /// assert_eq!(DirectiveKind::classify("ifdef", "DEBUG"), DirectiveKind::IfDef);
    /// assert_eq!(DirectiveKind::classify("I", "common.inc"), DirectiveKind::Include);
    /// assert_eq!(DirectiveKind::classify("I", "+"), DirectiveKind::Unused);
    /// assert_eq!(DirectiveKind::classify("R", "+"), DirectiveKind::Unused);
    /// ```
    #[must_use]
    pub fn classify(name: &str, argument: &str) -> Self {
        const NAMES: &[(&str, DirectiveKind)] = &[("DEFINE", DirectiveKind::Define),
                                                  ("UNDEF", DirectiveKind::Undefine),
                                                  ("IF", DirectiveKind::If),
                                                  ("IFDEF", DirectiveKind::IfDef),
                                                  ("IFNDEF", DirectiveKind::IfNDef),
                                                  ("IFOPT", DirectiveKind::IfOpt),
                                                  ("ELSE", DirectiveKind::Else),
                                                  ("ELSEIF", DirectiveKind::ElseIf),
                                                  ("ENDIF", DirectiveKind::EndIf),
                                                  ("IFEND", DirectiveKind::IfEnd),
                                                  ("INCLUDE", DirectiveKind::Include)];

        if name.eq_ignore_ascii_case("I") {
            let argument = argument.trim();
            return if argument.is_empty() || argument.starts_with(['+', '-']) {
                Self::Unused
            } else {
                Self::Include
            };
        }

        NAMES.iter()
             .find(|(candidate, _)| candidate.eq_ignore_ascii_case(name))
             .map_or(Self::Unused, |(_, kind)| *kind)
    }

    /// Returns `true` for directives that open a branch group.
    #[must_use]
    pub const fn opens_group(self) -> bool {
        matches!(self, Self::If | Self::IfDef | Self::IfNDef | Self::IfOpt)
    }

    /// Returns `true` for directives that close a branch group.
    #[must_use]
    pub const fn closes_group(self) -> bool {
        matches!(self, Self::EndIf | Self::IfEnd)
    }

    /// Returns `true` for the markers that start another branch of a group.
    #[must_use]
    pub const fn is_alternative(self) -> bool {
        matches!(self, Self::Else | Self::ElseIf)
    }
}

/// A directive located in source text.
///
/// `start` and `end` are byte offsets of the whole directive, open and close
/// markers included, so `source[start..end]` is the directive as written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive {
    /// What the directive does.
    pub kind:     DirectiveKind,
    /// The directive name as written, without the `$`.
    pub name:     String,
    /// The text after the name, trimmed.
    pub argument: String,
    /// Offset of the first byte of the open marker.
    pub start:    usize,
    /// Offset just past the close marker.
    pub end:      usize,
    /// 1-based line of the open marker.
    pub line:     usize,
}

impl Directive {
    /// Builds a directive from the text between its markers.
    ///
    /// The name is the leading run of letters, digits and underscores; the
    /// rest, trimmed, is the argument.
    ///
    /// # Example
    /// ```
    /// use pascond::preprocessor::directive::{Directive, DirectiveKind};
    ///
    /// let directive = Directive::from_body("IFDEF  DEBUG ", 0, 20, 1);
    /// assert_eq!(directive.kind, DirectiveKind::IfDef);
    /// assert_eq!(directive.name, "IFDEF");
    /// assert_eq!(directive.argument, "DEBUG");
    /// ```
    #[must_use]
    pub fn from_body(body: &str, start: usize, end: usize, line: usize) -> Self {
        let split = body.find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
                        .unwrap_or(body.len());
        let (name, argument) = body.split_at(split);
        let argument = argument.trim();

        Self { kind: DirectiveKind::classify(name, argument),
               name: name.to_string(),
               argument: argument.to_string(),
               start,
               end,
               line }
    }

    /// Gets the symbol a `$DEFINE`, `$UNDEF`, `$IFDEF` or `$IFNDEF` names.
    ///
    /// This is the first whitespace-delimited word of the argument; anything
    /// after it is ignored. Returns `None` when the argument is empty.
    ///
    /// # Example
    /// ```
    /// use pascond::preprocessor::directive::Directive;
    ///
    /// let directive = Directive::from_body("DEFINE FOO trailing words", 0, 28, 1);
    /// assert_eq!(directive.symbol(), Some("FOO"));
    /// ```
    #[must_use]
    pub fn symbol(&self) -> Option<&str> {
        self.argument.split_whitespace().next()
    }

    /// Gets the file name of an include, with surrounding quotes removed.
    ///
    /// # Example
    /// ```
    /// use pascond::preprocessor::directive::Directive;
    ///
    /// let directive = Directive::from_body("I 'my file.inc'", 0, 19, 1);
    /// assert_eq!(directive.include_name(), "my file.inc");
    /// ```
    #[must_use]
    pub fn include_name(&self) -> &str {
        let name = self.argument.trim();
        name.strip_prefix('\'')
            .and_then(|rest| rest.strip_suffix('\''))
            .unwrap_or(name)
    }

    /// Gets the directive as it appears in `source`.
    #[must_use]
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        source.get(self.start..self.end).unwrap_or_default()
    }
}
