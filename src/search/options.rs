//! Search configuration.

use serde::{Deserialize, Serialize};

/// Options controlling pattern construction and replacement behavior.
///
/// Passed into the engine explicitly; there is no ambient settings store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchOptions {
    /// Compile the pattern case-sensitive
    pub match_case: bool,
    /// Wrap the query in word-boundary assertions
    pub match_whole_word: bool,
    /// Treat the query as a regular expression instead of a literal
    pub use_regex: bool,
    /// Restrict the scan to the captured selection
    pub find_in_selection: bool,
    /// Lower-case the replacement's first letter before substitution.
    /// Deliberately minimal: no case-pattern matching of the matched text.
    pub preserve_case: bool,
}
