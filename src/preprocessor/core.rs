use crate::{
    config::PreprocessorConfig,
    environment::{DefineSet, StandardTypeSizes, TypeSizeOracle},
    error::DirectiveError,
    interpreter::evaluator::core::DEFAULT_COMPILER_VERSION,
    preprocessor::{
        includes::{FileSystemIncludes, IncludeResolver, NoIncludes},
        range::{ExcludeRange, merge},
        resolver::Resolver,
        rewriter::rewrite,
        scanner::scan,
    },
};

/// How deeply includes may nest before expansion stops.
pub const DEFAULT_MAX_INCLUDE_DEPTH: usize = 32;

/// The result of preprocessing one text.
#[derive(Debug, Clone)]
pub struct PreprocessOutput {
    /// The rewritten text, with excluded regions commented out.
    pub text:        String,
    /// The define-set as it stands after the last live directive.
    pub defines:     DefineSet,
    /// The merged ranges that were commented out or replaced.
    pub excluded:    Vec<ExcludeRange>,
    /// Problems with the directive structure, in the order found.
    pub diagnostics: Vec<DirectiveError>,
}

/// Decides which regions of Pascal-family source are live.
///
/// A `Preprocessor` holds everything a pass reads but never changes: the
/// seed define-set, the compiler version, the type-size oracle and the
/// include resolver. Every call to [`process`](Self::process) clones the
/// seed, so passes are independent and one preprocessor can serve any number
/// of files.
///
/// # Example
/// ```
/// use pascond::{environment::DefineSet, preprocessor::core::Preprocessor};
///
/// let preprocessor = Preprocessor::new(DefineSet::with_symbols(["DEBUG"], false));
/// let output = preprocessor.process("{$IFDEF DEBUG}Log;{$ELSE}Skip;{$ENDIF}");
///
/// assert_eq!(output.text, "{$IFDEF DEBUG}Log;(*{$ELSE}Skip;{$ENDIF}*)");
/// assert!(output.diagnostics.is_empty());
/// ```
pub struct Preprocessor {
    defines:           DefineSet,
    compiler_version:  f64,
    types:             Box<dyn TypeSizeOracle>,
    includes:          Box<dyn IncludeResolver>,
    max_include_depth: usize,
}

impl Preprocessor {
    /// Creates a preprocessor seeded with `defines`.
    ///
    /// Everything else takes its default: compiler version 35.0, x86 type
    /// sizes and no include expansion.
    #[must_use]
    pub fn new(defines: DefineSet) -> Self {
        Self { defines,
               compiler_version: DEFAULT_COMPILER_VERSION,
               types: Box::new(StandardTypeSizes::default()),
               includes: Box::new(NoIncludes),
               max_include_depth: DEFAULT_MAX_INCLUDE_DEPTH }
    }

    /// Creates a preprocessor from configuration.
    ///
    /// Includes are read from disk only when `include_paths` is not empty.
    ///
    /// # Example
    /// ```
    /// use pascond::{config::PreprocessorConfig, preprocessor::core::Preprocessor};
    ///
    /// let config = PreprocessorConfig { defines: vec!["CPUX64".to_string()],
    ///                                   ..PreprocessorConfig::default() };
    /// let preprocessor = Preprocessor::from_config(&config);
    ///
    /// assert!(preprocessor.defines().is_defined("cpux64"));
    /// ```
    #[must_use]
    pub fn from_config(config: &PreprocessorConfig) -> Self {
        let defines = DefineSet::with_symbols(&config.defines, config.case_sensitive);
        let preprocessor =
            Self::new(defines).with_compiler_version(config.compiler_version)
                              .with_type_sizes(StandardTypeSizes::new(config.architecture))
                              .with_max_include_depth(config.max_include_depth);

        if config.include_paths.is_empty() {
            preprocessor
        } else {
            preprocessor.with_include_resolver(FileSystemIncludes::new(config.include_paths
                                                                             .iter()
                                                                             .cloned()))
        }
    }

    /// Sets the value of the `CompilerVersion` intrinsic.
    #[must_use]
    pub const fn with_compiler_version(mut self, version: f64) -> Self {
        self.compiler_version = version;
        self
    }

    /// Sets the oracle that answers `SizeOf`.
    #[must_use]
    pub fn with_type_sizes(mut self, types: impl TypeSizeOracle + 'static) -> Self {
        self.types = Box::new(types);
        self
    }

    /// Sets how `$I`/`$INCLUDE` files are loaded.
    #[must_use]
    pub fn with_include_resolver(mut self, includes: impl IncludeResolver + 'static) -> Self {
        self.includes = Box::new(includes);
        self
    }

    /// Sets how deeply includes may nest.
    #[must_use]
    pub const fn with_max_include_depth(mut self, depth: usize) -> Self {
        self.max_include_depth = depth;
        self
    }

    /// Gets the seed define-set.
    #[must_use]
    pub const fn defines(&self) -> &DefineSet {
        &self.defines
    }

    /// Gets the value of the `CompilerVersion` intrinsic.
    #[must_use]
    pub const fn compiler_version(&self) -> f64 {
        self.compiler_version
    }

    /// Gets the oracle that answers `SizeOf`.
    #[must_use]
    pub fn type_sizes(&self) -> &dyn TypeSizeOracle {
        self.types.as_ref()
    }

    /// Gets the include resolver.
    #[must_use]
    pub fn include_resolver(&self) -> &dyn IncludeResolver {
        self.includes.as_ref()
    }

    /// Gets the include nesting limit.
    #[must_use]
    pub const fn max_include_depth(&self) -> usize {
        self.max_include_depth
    }

    /// Preprocesses `source` with a fresh copy of the seed define-set.
    ///
    /// This never fails. Malformed conditions count as false and malformed
    /// directive structure is ignored; both are listed in the output's
    /// diagnostics.
    #[must_use]
    pub fn process(&self, source: &str) -> PreprocessOutput {
        self.process_nested(source, self.defines.clone(), &[])
    }

    /// Preprocesses `source`, starting from `defines`, as the text of the
    /// innermost include in `include_chain`.
    ///
    /// The chain lists the includes being expanded, outermost first. Its
    /// length is the nesting depth, and an include already on it is reported
    /// as a cycle.
    #[must_use]
    pub fn process_nested(&self,
                          source: &str,
                          defines: DefineSet,
                          include_chain: &[String])
                          -> PreprocessOutput {
        let directives = scan(source);
        tracing::trace!("found {} directives at include depth {}",
                        directives.len(),
                        include_chain.len());

        let resolution = Resolver::new(self, source, &directives, defines, include_chain).run();
        let excluded = merge(resolution.ranges);

        PreprocessOutput { text: rewrite(source, &excluded),
                           defines: resolution.defines,
                           excluded,
                           diagnostics: resolution.diagnostics }
    }
}

impl Default for Preprocessor {
    fn default() -> Self {
        Self::new(DefineSet::default())
    }
}

impl std::fmt::Debug for Preprocessor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Preprocessor")
         .field("defines", &self.defines)
         .field("compiler_version", &self.compiler_version)
         .field("max_include_depth", &self.max_include_depth)
         .finish_non_exhaustive()
    }
}
