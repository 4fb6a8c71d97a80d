use std::collections::BTreeMap;

/// A set of conditional-compilation symbol names.
///
/// Lookups are case-insensitive unless the set was created case-sensitive.
/// The spelling of the first definition is kept for display.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DefineSet {
    symbols:        BTreeMap<String, String>,
    case_sensitive: bool,
}

impl DefineSet {
    /// Creates an empty set.
    #[must_use]
    pub const fn new(case_sensitive: bool) -> Self {
        Self { symbols: BTreeMap::new(),
               case_sensitive }
    }

    /// Creates a set holding `symbols`.
    ///
    /// # Example
    /// ```
    /// use pascond::environment::DefineSet;
    ///
    /// let defines = DefineSet::with_symbols(["DEBUG", "MSWINDOWS"], false);
    /// assert!(defines.is_defined("debug"));
    /// assert!(!defines.is_defined("RELEASE"));
    /// ```
    #[must_use]
    pub fn with_symbols<I, S>(symbols: I, case_sensitive: bool) -> Self
        where I: IntoIterator<Item = S>,
              S: AsRef<str>
    {
        let mut set = Self::new(case_sensitive);
        for symbol in symbols {
            set.define(symbol.as_ref());
        }
        set
    }

    /// Returns `true` when names are compared exactly.
    #[must_use]
    pub const fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    fn key(&self, name: &str) -> String {
        if self.case_sensitive {
            name.to_string()
        } else {
            name.to_ascii_uppercase()
        }
    }

    /// Adds a symbol. Returns `false` if it was already defined.
    pub fn define(&mut self, name: &str) -> bool {
        let key = self.key(name);
        if self.symbols.contains_key(&key) {
            return false;
        }
        self.symbols.insert(key, name.to_string());
        true
    }

    /// Removes a symbol. Removing an absent symbol is a no-op that returns
    /// `false`.
    pub fn undefine(&mut self, name: &str) -> bool {
        let key = self.key(name);
        self.symbols.remove(&key).is_some()
    }

    /// Tests whether a symbol is defined.
    #[must_use]
    pub fn is_defined(&self, name: &str) -> bool {
        self.symbols.contains_key(&self.key(name))
    }

    /// Iterates over the defined symbols as first spelled, in key order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.symbols.values().map(String::as_str)
    }

    /// Gets the number of defined symbols.
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Returns `true` when no symbol is defined.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}
