/// The preprocessor entry point.
///
/// Ties the scanner, resolver and rewriter together into a single pass over
/// one text and holds the read-only settings every pass shares.
pub mod core;
/// Directive kinds and arguments.
///
/// Classifies a `{$...}` or `(*$...*)` comment by its name and extracts the
/// symbol or file name it refers to.
pub mod directive;
/// Include loading.
///
/// Defines the seam through which `$I` files are read, with a resolver that
/// loads nothing and one that searches directories on disk.
pub mod includes;
/// Exclusion ranges.
///
/// Represents regions of text to comment out or replace and merges them
/// into a sorted, disjoint list.
pub mod range;
/// Branch group resolution.
///
/// Matches nested conditional groups, evaluates their conditions, executes
/// live definitions and includes, and computes the ranges to exclude.
pub mod resolver;
/// Source rewriting.
///
/// Comments out excluded ranges without removing any line break, so every
/// surviving line keeps its number.
pub mod rewriter;
/// Directive scanning.
///
/// Finds directives in raw text while skipping string literals and
/// comments.
pub mod scanner;

pub use self::core::{PreprocessOutput, Preprocessor};
