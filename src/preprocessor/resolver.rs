use crate::{
    environment::DefineSet,
    error::DirectiveError,
    interpreter::evaluator::core::Context,
    preprocessor::{
        core::Preprocessor,
        directive::{Directive, DirectiveKind},
        range::ExcludeRange,
    },
};

/// What resolving the directives of one text produced.
#[derive(Debug, Clone)]
pub struct Resolution {
    /// Ranges to exclude or replace, unmerged, in discovery order.
    pub ranges:      Vec<ExcludeRange>,
    /// The define-set after the last live directive.
    pub defines:     DefineSet,
    /// Structure problems found on the way.
    pub diagnostics: Vec<DirectiveError>,
}

/// A group whose kept branch is being walked.
#[derive(Debug, Clone, Copy)]
struct OpenGroup {
    /// Index of the directive that ends the kept branch.
    branch_end: usize,
    /// Index of the group's `$ENDIF`/`$IFEND`.
    terminator: usize,
}

/// The depth-1 markers of a branch group.
#[derive(Debug, Default)]
struct GroupShape {
    /// Index of the opening directive, then of each `$ELSEIF`/`$ELSE`.
    branches:   Vec<usize>,
    /// Alternatives that follow an `$ELSE` and so start no branch.
    duplicates: Vec<usize>,
    /// Index of the terminator.
    terminator: usize,
}

/// Matches every conditional group of `directives` in one pass.
///
/// The result is indexed by directive. An opening directive maps to the
/// shape of its group, or to `None` when it has no terminator; every other
/// directive maps to `None`.
fn match_groups(directives: &[Directive]) -> Vec<Option<GroupShape>> {
    let mut groups: Vec<Option<GroupShape>> = directives.iter().map(|_| None).collect();
    // Open groups, innermost last, with whether an `$ELSE` was seen.
    let mut stack: Vec<(GroupShape, bool)> = Vec::new();

    for (j, directive) in directives.iter().enumerate() {
        let kind = directive.kind;

        if kind.opens_group() {
            stack.push((GroupShape { branches: vec![j],
                                     ..GroupShape::default() },
                        false));
        } else if kind.closes_group() {
            if let Some((mut shape, _)) = stack.pop() {
                shape.terminator = j;
                let opening = shape.branches[0];
                groups[opening] = Some(shape);
            }
        } else if kind.is_alternative()
                  && let Some((shape, seen_else)) = stack.last_mut()
        {
            if *seen_else {
                shape.duplicates.push(j);
            } else {
                *seen_else = kind == DirectiveKind::Else;
                shape.branches.push(j);
            }
        }
    }

    groups
}

/// Walks a directive list in textual order and decides what stays live.
///
/// Definitions, undefinitions and includes take effect only where they are
/// reached, that is, outside every excluded branch. All conditional groups
/// are matched up front, then for each group reached the first branch whose
/// condition holds is kept and walked directive by directive. Walking a kept
/// branch pushes an [`OpenGroup`] so the resolver knows where to jump when
/// the branch ends.
pub struct Resolver<'a> {
    preprocessor:  &'a Preprocessor,
    source:        &'a str,
    directives:    &'a [Directive],
    include_chain: &'a [String],
    groups:        Vec<Option<GroupShape>>,
    defines:       DefineSet,
    ranges:        Vec<ExcludeRange>,
    diagnostics:   Vec<DirectiveError>,
    open_groups:   Vec<OpenGroup>,
}

impl<'a> Resolver<'a> {
    /// Creates a resolver for `directives`, found in `source`.
    ///
    /// `include_chain` names the includes being expanded around `source`,
    /// outermost first. It is empty for the file being preprocessed.
    #[must_use]
    pub fn new(preprocessor: &'a Preprocessor,
               source: &'a str,
               directives: &'a [Directive],
               defines: DefineSet,
               include_chain: &'a [String])
               -> Self {
        Self { preprocessor,
               source,
               directives,
               include_chain,
               groups: match_groups(directives),
               defines,
               ranges: Vec::new(),
               diagnostics: Vec::new(),
               open_groups: Vec::new() }
    }

    /// Resolves every directive.
    #[must_use]
    pub fn run(mut self) -> Resolution {
        let mut i = 0;

        while i < self.directives.len() {
            if let Some(group) = self.open_groups.last().copied()
               && group.branch_end == i
            {
                self.open_groups.pop();
                i = group.terminator + 1;
                continue;
            }
            i = self.step(i);
        }

        Resolution { ranges:      self.ranges,
                     defines:     self.defines,
                     diagnostics: self.diagnostics, }
    }

    /// Executes the live directive at `i` and returns the next index to visit.
    fn step(&mut self, i: usize) -> usize {
        let directives = self.directives;
        let directive = &directives[i];

        match directive.kind {
            DirectiveKind::Define => self.define(directive),
            DirectiveKind::Undefine => self.undefine(directive),
            DirectiveKind::Include => self.include(directive),
            DirectiveKind::If | DirectiveKind::IfDef | DirectiveKind::IfNDef | DirectiveKind::IfOpt => {
                return self.open_group(i);
            },
            DirectiveKind::Else
            | DirectiveKind::ElseIf
            | DirectiveKind::EndIf
            | DirectiveKind::IfEnd => {
                // Inside a kept branch this is a duplicate alternative, already reported.
                if self.open_groups.is_empty() {
                    self.report(DirectiveError::UnmatchedDirective { directive: directive.text(self.source)
                                                                                         .to_string(),
                                                                     line:      directive.line, });
                }
            },
            DirectiveKind::Unused => {},
        }

        i + 1
    }

    /// Resolves the group opened at `i` and returns the next index to visit.
    ///
    /// The kept branch, if any, is entered; otherwise the whole group is
    /// skipped. A group without a terminator is reported and ignored, and the
    /// directives after its opening are visited as if it were not there.
    fn open_group(&mut self, i: usize) -> usize {
        let directives = self.directives;
        let opening = &directives[i];

        let Some(shape) = self.groups[i].take()
        else {
            self.report(DirectiveError::UnterminatedConditional { directive: opening.text(self.source)
                                                                                    .to_string(),
                                                                  line:      opening.line, });
            return i + 1;
        };

        for &duplicate in &shape.duplicates {
            let directive = &directives[duplicate];
            self.report(DirectiveError::DuplicateElse { directive: directive.text(self.source)
                                                                            .to_string(),
                                                        line:      directive.line, });
        }

        let terminator = &directives[shape.terminator];
        let kept = shape.branches
                        .iter()
                        .position(|&marker| self.branch_is_taken(&directives[marker]));

        let Some(kept) = kept
        else {
            self.ranges.push(ExcludeRange::new(opening.start, terminator.end));
            return shape.terminator + 1;
        };

        let marker = shape.branches[kept];
        if kept > 0 {
            self.ranges.push(ExcludeRange::new(opening.start, directives[marker].end));
        }

        let branch_end = match shape.branches.get(kept + 1) {
            Some(&next) => {
                self.ranges.push(ExcludeRange::new(directives[next].start, terminator.end));
                next
            },
            None => shape.terminator,
        };

        self.open_groups.push(OpenGroup { branch_end,
                                          terminator: shape.terminator });
        marker + 1
    }

    /// Decides whether the branch started by `marker` is taken.
    fn branch_is_taken(&mut self, marker: &Directive) -> bool {
        let taken = match marker.kind {
            DirectiveKind::If | DirectiveKind::ElseIf => self.evaluate(marker),
            DirectiveKind::IfDef => marker.symbol().is_some_and(|s| self.defines.is_defined(s)),
            DirectiveKind::IfNDef => !marker.symbol().is_some_and(|s| self.defines.is_defined(s)),
            DirectiveKind::IfOpt => false,
            DirectiveKind::Else => true,
            kind => unreachable!("{kind:?} cannot start a branch"),
        };

        tracing::debug!("line {}: {} {} -> {taken}", marker.line, marker.name, marker.argument);
        taken
    }

    /// Evaluates the condition of an `$IF`/`$ELSEIF`.
    ///
    /// Only `True` counts as true; `Unknown` and any other value are false. A
    /// condition that does not parse is reported and is false.
    fn evaluate(&mut self, marker: &Directive) -> bool {
        let context = Context::new(&self.defines,
                                   self.preprocessor.compiler_version(),
                                   self.preprocessor.type_sizes());

        match context.eval_source(&marker.argument) {
            Ok(value) => {
                tracing::debug!("line {}: condition '{}' evaluated to {value}",
                                marker.line,
                                marker.argument);
                value.is_true()
            },
            Err(error) => {
                self.report(DirectiveError::InvalidCondition { condition: marker.argument.clone(),
                                                               error,
                                                               line: marker.line });
                false
            },
        }
    }

    fn define(&mut self, directive: &Directive) {
        match directive.symbol() {
            Some(symbol) => {
                self.defines.define(symbol);
                tracing::debug!("line {}: defined {symbol}", directive.line);
            },
            None => tracing::warn!("line {}: {} names no symbol",
                                   directive.line,
                                   directive.text(self.source)),
        }
    }

    fn undefine(&mut self, directive: &Directive) {
        match directive.symbol() {
            Some(symbol) => {
                self.defines.undefine(symbol);
                tracing::debug!("line {}: undefined {symbol}", directive.line);
            },
            None => tracing::warn!("line {}: {} names no symbol",
                                   directive.line,
                                   directive.text(self.source)),
        }
    }

    /// Expands an include in place.
    ///
    /// The included text is preprocessed as its own pass, seeded with the
    /// current define-set. Its rewritten text replaces the directive and its
    /// final define-set carries on here. An include already being expanded
    /// is a cycle and stays as written.
    fn include(&mut self, directive: &Directive) {
        let name = directive.include_name();
        let limit = self.preprocessor.max_include_depth();

        if self.include_chain.iter().any(|open| open == name) {
            self.report(DirectiveError::IncludeCycle { name: name.to_string(),
                                                       line: directive.line, });
            return;
        }

        if self.include_chain.len() >= limit {
            self.report(DirectiveError::IncludeDepthExceeded { name: name.to_string(),
                                                               limit,
                                                               line: directive.line });
            return;
        }

        let Some(text) = self.preprocessor.include_resolver().resolve(name)
        else {
            self.report(DirectiveError::IncludeNotFound { name: name.to_string(),
                                                          line: directive.line, });
            return;
        };

        tracing::debug!("line {}: including '{name}'", directive.line);
        let mut chain = self.include_chain.to_vec();
        chain.push(name.to_string());
        let output = self.preprocessor
                         .process_nested(&text, self.defines.clone(), &chain);

        self.ranges
            .push(ExcludeRange::replaced(directive.start, directive.end, output.text));
        self.defines = output.defines;
        self.diagnostics
            .extend(output.diagnostics
                          .into_iter()
                          .map(|error| DirectiveError::InInclude { name:  name.to_string(),
                                                                   error: Box::new(error),
                                                                   line:  directive.line, }));
    }

    fn report(&mut self, error: DirectiveError) {
        tracing::warn!("{error}");
        self.diagnostics.push(error);
    }
}
