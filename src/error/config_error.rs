use std::path::PathBuf;

#[derive(Debug)]
/// Represents failures to load a configuration file.
pub enum ConfigError {
    /// The file could not be read.
    Io {
        /// The file that was requested.
        path:   PathBuf,
        /// The underlying failure.
        source: std::io::Error,
    },
    /// The file is not valid configuration JSON.
    Parse {
        /// The file that was read.
        path:   PathBuf,
        /// The underlying failure.
        source: serde_json::Error,
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "Failed to read config file '{}': {source}", path.display())
            },
            Self::Parse { path, source } => {
                write!(f, "Invalid config file '{}': {source}", path.display())
            },
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
        }
    }
}
