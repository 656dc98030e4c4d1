//! Markup-aware line and inline transforms.
//!
//! The building blocks are ordered prefix pattern sets ([`PrefixPatternSet`]),
//! first-match-wins replacement rule lists ([`ReplacePattern`]), inline
//! surround toggles ([`InlineWrap`]), and ordered-list renumbering. Dialects
//! combine them into action tables consumed through [`apply_action`].

pub mod actions;
pub mod dialects;
pub mod generator;
pub mod pattern_set;
pub mod renumber;
pub mod replace;
pub mod surround;

pub use actions::{apply_action, ActionTable, FormatAction, FormatConfig};
pub use pattern_set::PrefixPatternSet;
pub use renumber::{renumber_ordered_list, OrderedListPattern};
pub use replace::{apply_replace_patterns, ReplacePattern};
pub use surround::{toggle_inline_surround, InlineWrap};
