use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::{
    environment::Architecture,
    error::ConfigError,
    interpreter::evaluator::core::DEFAULT_COMPILER_VERSION,
    preprocessor::core::DEFAULT_MAX_INCLUDE_DEPTH,
};

/// Settings for a preprocessing run.
///
/// Every field is optional in JSON; missing fields take their defaults.
///
/// # Example
/// ```
/// use pascond::{config::PreprocessorConfig, environment::Architecture};
///
/// let config: PreprocessorConfig =
///     serde_json::from_str(r#"{ "defines": ["DEBUG"], "architecture": "x64" }"#).unwrap();
///
/// assert_eq!(config.defines, vec!["DEBUG".to_string()]);
/// assert_eq!(config.architecture, Architecture::X64);
/// assert!((config.compiler_version - 35.0).abs() < f64::EPSILON);
/// assert_eq!(config.max_include_depth, 32);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreprocessorConfig {
    /// Symbols defined before the first line.
    pub defines:           Vec<String>,
    /// Value of the `CompilerVersion` intrinsic.
    pub compiler_version:  f64,
    /// Target architecture, which decides pointer-sized type sizes.
    pub architecture:      Architecture,
    /// Whether symbol names are compared exactly.
    pub case_sensitive:    bool,
    /// Directories searched for `$I` files. Empty disables include expansion.
    pub include_paths:     Vec<PathBuf>,
    /// How deeply includes may nest.
    pub max_include_depth: usize,
}

impl Default for PreprocessorConfig {
    fn default() -> Self {
        Self { defines:           Vec::new(),
               compiler_version:  DEFAULT_COMPILER_VERSION,
               architecture:      Architecture::default(),
               case_sensitive:    false,
               include_paths:     Vec::new(),
               max_include_depth: DEFAULT_MAX_INCLUDE_DEPTH, }
    }
}

impl PreprocessorConfig {
    /// Loads a configuration from a JSON file.
    ///
    /// # Errors
    /// Returns [`ConfigError::Io`] if the file cannot be read and
    /// [`ConfigError::Parse`] if it is not a valid configuration.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io { path: path.to_path_buf(),
                                                                                source })?;

        serde_json::from_str(&text).map_err(|source| ConfigError::Parse { path: path.to_path_buf(),
                                                                           source })
    }
}
