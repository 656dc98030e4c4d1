//! Capability-based dispatch of per-dialect format actions.
//!
//! Each dialect registers a mapping from opaque action keys to
//! [`FormatAction`] builders; one shared dispatcher resolves and applies
//! them. No per-dialect subclassing, no ambient settings: behavior toggles
//! arrive through [`FormatConfig`].

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::buffer::TextBufferMut;

use super::renumber::{renumber_ordered_list, OrderedListPattern};
use super::replace::{apply_replace_patterns, ReplacePattern};
use super::surround::{toggle_inline_surround, InlineWrap};

/// Explicit configuration for format actions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatConfig {
    /// Renumber the surrounding ordered list after list-prefix edits
    pub auto_renumber_ordered_list: bool,
}

/// One resolved format action.
#[derive(Debug, Clone)]
pub enum FormatAction {
    /// Per-line prefix replacement rules; `renumber` names the ordered-list
    /// pattern to renumber afterwards (subject to [`FormatConfig`])
    LineRules {
        rules: Vec<ReplacePattern>,
        renumber: Option<OrderedListPattern>,
    },
    /// Inline wrap toggle around the selection
    Inline(InlineWrap),
}

impl FormatAction {
    pub fn line_rules(rules: Vec<ReplacePattern>) -> Self {
        Self::LineRules {
            rules,
            renumber: None,
        }
    }

    pub fn line_rules_renumbering(rules: Vec<ReplacePattern>, list: OrderedListPattern) -> Self {
        Self::LineRules {
            rules,
            renumber: Some(list),
        }
    }
}

type ActionBuilder = fn() -> FormatAction;

/// Action-key to action mapping for one dialect.
#[derive(Default)]
pub struct ActionTable {
    actions: HashMap<&'static str, ActionBuilder>,
}

impl ActionTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, key: &'static str, builder: ActionBuilder) {
        self.actions.insert(key, builder);
    }

    /// Resolve a key to a freshly built action
    pub fn resolve(&self, key: &str) -> Option<FormatAction> {
        self.actions.get(key).map(|builder| builder())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.actions.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.actions.keys().copied()
    }
}

/// Apply a format action to the selection and return the new selection.
pub fn apply_action<B: TextBufferMut>(
    buffer: &mut B,
    sel_start: usize,
    sel_end: usize,
    action: &FormatAction,
    config: &FormatConfig,
) -> (usize, usize) {
    match action {
        FormatAction::LineRules { rules, renumber } => {
            let (start, end) = apply_replace_patterns(buffer, sel_start, sel_end, rules);
            if let Some(list) = renumber {
                if config.auto_renumber_ordered_list {
                    debug!("renumbering ordered list after prefix edit");
                    renumber_ordered_list(buffer, start, list);
                }
            }
            let len = buffer.len_chars();
            (start.min(len), end.min(len))
        }
        FormatAction::Inline(wrap) => toggle_inline_surround(buffer, sel_start, sel_end, wrap),
    }
}
