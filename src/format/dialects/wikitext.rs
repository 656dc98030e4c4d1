//! Wikitext (Zim-style) prefix patterns and format actions.
//!
//! Headings are surrounded (`== Title ==`, more equals signs meaning a
//! higher-level section: level = 7 − equals count), and checkboxes cycle
//! through four states instead of flipping.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::format::actions::{ActionTable, FormatAction};
use crate::format::generator::replace_with_target_prefix_or_remove;
use crate::format::pattern_set::PrefixPatternSet;
use crate::format::replace::ReplacePattern;
use crate::format::surround::InlineWrap;

pub static PREFIX_UNORDERED_LIST: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\s*)((\*)\s)").expect("wikitext unordered pattern"));
pub static PREFIX_ORDERED_LIST: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\s*)((\d+|[a-zA-Z])(\.)(\s+))").expect("wikitext ordered pattern")
});
pub static PREFIX_UNCHECKED_LIST: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\s*)(\[\s\]\s)").expect("wikitext unchecked pattern"));
pub static PREFIX_CHECKED_LIST: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\s*)(\[(\*)\]\s)").expect("wikitext checked pattern"));
pub static PREFIX_CROSSED_LIST: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\s*)(\[(x)\]\s)").expect("wikitext crossed pattern"));
pub static PREFIX_RIGHT_ARROW_LIST: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\s*)(\[(>)\]\s)").expect("wikitext right arrow pattern"));
pub static PREFIX_LEFT_ARROW_LIST: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\s*)(\[(<)\]\s)").expect("wikitext left arrow pattern"));
pub static PREFIX_LEADING_SPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\s*)").expect("wikitext leading space pattern"));

pub static PREFIX_PATTERNS: Lazy<PrefixPatternSet> = Lazy::new(|| {
    PrefixPatternSet::new(vec![
        PREFIX_ORDERED_LIST.clone(),
        PREFIX_CHECKED_LIST.clone(),
        PREFIX_UNCHECKED_LIST.clone(),
        PREFIX_CROSSED_LIST.clone(),
        PREFIX_RIGHT_ARROW_LIST.clone(),
        PREFIX_LEFT_ARROW_LIST.clone(),
        PREFIX_UNORDERED_LIST.clone(),
        PREFIX_LEADING_SPACE.clone(),
    ])
    .expect("wikitext prefix pattern set")
});

const UNCHECKED_REPLACEMENT: &str = "${1}[ ] ";
const CHECKED_REPLACEMENT: &str = "${1}[*] ";
const CROSSED_REPLACEMENT: &str = "${1}[x] ";
const RIGHT_ARROW_REPLACEMENT: &str = "${1}[>] ";
const LEFT_ARROW_REPLACEMENT: &str = "${1}[<] ";

/// Set or unset a surrounded heading of the given level on each selected
/// line. Valid levels map to 2–6 equals signs; others yield no rules.
pub fn set_or_unset_heading_with_level(level: usize) -> Vec<ReplacePattern> {
    let equals_count = 7usize.saturating_sub(level);
    if !(2..=6).contains(&equals_count) {
        return Vec::new();
    }
    let marker = "=".repeat(equals_count);

    vec![
        // Exact level: strip the surrounding marker runs
        ReplacePattern::new(
            Regex::new(&format!(r"^\s{{0,3}}{m}[ \t](.*)[ \t]{m}\w*", m = marker))
                .expect("wikitext exact heading pattern"),
            "${1}",
        ),
        // Other levels: swap both marker runs
        ReplacePattern::new(
            Regex::new(r"^\s{0,3}={2,6}([ \t].*[ \t])={2,6}")
                .expect("wikitext any heading pattern"),
            format!("{m}${{1}}{m}", m = marker),
        ),
        // No heading: surround the line content
        ReplacePattern::new(
            Regex::new(r"^\s*?(\S?.*)\s*").expect("wikitext heading insert pattern"),
            format!("{m} ${{1}} {m}", m = marker),
        ),
    ]
}

/// Cycle a checkbox to its next state; lines without a checkbox get an
/// unchecked one. Order: none -> unchecked -> checked -> crossed -> right
/// arrow -> left arrow -> unchecked.
pub fn replace_with_next_state_checkbox() -> Vec<ReplacePattern> {
    let mut rules = vec![
        ReplacePattern::new(PREFIX_UNCHECKED_LIST.clone(), CHECKED_REPLACEMENT),
        ReplacePattern::new(PREFIX_CHECKED_LIST.clone(), CROSSED_REPLACEMENT),
        ReplacePattern::new(PREFIX_CROSSED_LIST.clone(), RIGHT_ARROW_REPLACEMENT),
        ReplacePattern::new(PREFIX_RIGHT_ARROW_LIST.clone(), LEFT_ARROW_REPLACEMENT),
        ReplacePattern::new(PREFIX_LEFT_ARROW_LIST.clone(), UNCHECKED_REPLACEMENT),
    ];
    for pattern in PREFIX_PATTERNS.patterns() {
        rules.push(ReplacePattern::new(pattern.clone(), UNCHECKED_REPLACEMENT));
    }
    rules
}

pub fn remove_checkbox() -> Vec<ReplacePattern> {
    vec![ReplacePattern::new(
        Regex::new(r"^(\s*)(\[([ x*><])\]\s)").expect("wikitext any checkbox pattern"),
        "${1}",
    )]
}

pub fn replace_with_unordered_list_prefix_or_remove() -> Vec<ReplacePattern> {
    replace_with_target_prefix_or_remove(&PREFIX_PATTERNS, &PREFIX_UNORDERED_LIST, "${1}* ")
}

pub fn replace_with_ordered_list_prefix_or_remove() -> Vec<ReplacePattern> {
    replace_with_target_prefix_or_remove(&PREFIX_PATTERNS, &PREFIX_ORDERED_LIST, "${1}1. ")
}

pub fn indent_one_tab() -> Vec<ReplacePattern> {
    vec![ReplacePattern::new(
        Regex::new(r"^").expect("anchor pattern"),
        "\t",
    )]
}

pub fn deindent_one_tab() -> Vec<ReplacePattern> {
    vec![ReplacePattern::new(
        Regex::new(r"^\t").expect("tab pattern"),
        "",
    )]
}

/// Action table for the wikitext dialect.
pub fn action_table() -> ActionTable {
    let mut table = ActionTable::new();
    table.register("heading-1", || {
        FormatAction::line_rules(set_or_unset_heading_with_level(1))
    });
    table.register("heading-2", || {
        FormatAction::line_rules(set_or_unset_heading_with_level(2))
    });
    table.register("heading-3", || {
        FormatAction::line_rules(set_or_unset_heading_with_level(3))
    });
    table.register("heading-4", || {
        FormatAction::line_rules(set_or_unset_heading_with_level(4))
    });
    table.register("heading-5", || {
        FormatAction::line_rules(set_or_unset_heading_with_level(5))
    });
    table.register("list-unordered", || {
        FormatAction::line_rules(replace_with_unordered_list_prefix_or_remove())
    });
    table.register("list-ordered", || {
        FormatAction::line_rules(replace_with_ordered_list_prefix_or_remove())
    });
    table.register("checkbox-cycle", || {
        FormatAction::line_rules(replace_with_next_state_checkbox())
    });
    table.register("checkbox-remove", || {
        FormatAction::line_rules(remove_checkbox())
    });
    table.register("indent", || FormatAction::line_rules(indent_one_tab()));
    table.register("deindent", || FormatAction::line_rules(deindent_one_tab()));
    table.register("bold", || {
        FormatAction::Inline(InlineWrap::delimiter("**"))
    });
    table.register("italic", || {
        FormatAction::Inline(InlineWrap::delimiter("//"))
    });
    table.register("highlight", || {
        FormatAction::Inline(InlineWrap::delimiter("__"))
    });
    table.register("strikethrough", || {
        FormatAction::Inline(InlineWrap::delimiter("~~"))
    });
    table.register("code-inline", || {
        FormatAction::Inline(InlineWrap::delimiter("''"))
    });
    table
}
