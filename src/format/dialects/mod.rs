//! Per-dialect prefix patterns and action tables.
//!
//! Each dialect exposes its prefix regexes, generator functions, and an
//! [`action_table`](markdown::action_table) producing the dialect's
//! key-to-action mapping. Dialects share the generic machinery in the parent
//! module; nothing here dispatches on dialect identity.

pub mod asciidoc;
pub mod markdown;
pub mod wikitext;
