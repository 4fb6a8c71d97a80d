use std::{
    fs,
    path::{Path, PathBuf},
};

/// Loads the text of an `$I`/`$INCLUDE` file by name.
///
/// The name arrives with surrounding quotes removed. Returning `None` reports
/// the include as not found and leaves the directive in place.
pub trait IncludeResolver {
    /// Gets the contents of the include called `name`.
    fn resolve(&self, name: &str) -> Option<String>;
}

/// Resolves nothing; every include stays as written.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoIncludes;

impl IncludeResolver for NoIncludes {
    fn resolve(&self, _name: &str) -> Option<String> {
        None
    }
}

/// Reads includes from disk.
///
/// An absolute name is read directly. A relative name is tried against each
/// search path in order, and the first readable file wins.
///
/// # Example
/// ```no_run
/// use pascond::preprocessor::includes::{FileSystemIncludes, IncludeResolver};
///
/// let includes = FileSystemIncludes::new(["src/inc", "lib/common"]);
/// if let Some(text) = includes.resolve("defines.inc") {
///     println!("{text}");
/// }
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FileSystemIncludes {
    search_paths: Vec<PathBuf>,
}

impl FileSystemIncludes {
    /// Creates a resolver over `search_paths`.
    #[must_use]
    pub fn new<I, P>(search_paths: I) -> Self
        where I: IntoIterator<Item = P>,
              P: Into<PathBuf>
    {
        Self { search_paths: search_paths.into_iter().map(Into::into).collect() }
    }

    /// Gets the directories searched for relative names.
    #[must_use]
    pub fn search_paths(&self) -> &[PathBuf] {
        &self.search_paths
    }

    fn read(path: &Path) -> Option<String> {
        match fs::read_to_string(path) {
            Ok(text) => Some(text),
            Err(e) => {
                tracing::trace!("cannot read include candidate {}: {e}", path.display());
                None
            },
        }
    }
}

impl IncludeResolver for FileSystemIncludes {
    fn resolve(&self, name: &str) -> Option<String> {
        let path = Path::new(name);
        if path.is_absolute() {
            return Self::read(path);
        }

        self.search_paths
            .iter()
            .find_map(|dir| Self::read(&dir.join(path)))
    }
}
