//! AsciiDoc prefix patterns and format actions.
//!
//! Section titles use `=` markers, nested lists repeat their bullet char
//! (`**`, `..`), and attribute roles wrap inline text as `[.role]#text#`.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::format::actions::{ActionTable, FormatAction};
use crate::format::generator::{
    replace_with_target_pattern_or_alternative, replace_with_target_prefix_or_remove,
};
use crate::format::pattern_set::PrefixPatternSet;
use crate::format::replace::ReplacePattern;
use crate::format::surround::InlineWrap;

pub static PREFIX_HEADING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^( {0})(=)(={0,5})( )").expect("asciidoc heading pattern"));
// Minimum two markers so deindent always leaves a valid prefix
pub static PREFIX_HEADING_GT1: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^( {0})(=)(={1,6})( )").expect("asciidoc nested heading pattern"));
pub static PREFIX_UNORDERED_LIST: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^( {0})(\*)(\*{0,5})( +)").expect("asciidoc unordered pattern"));
pub static PREFIX_UNORDERED_LIST_GT1: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^( {0})(\*)(\*{1,6})( +)").expect("asciidoc nested unordered pattern")
});
pub static PREFIX_ORDERED_LIST: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^( {0})(\.)(\.{0,5})( +)").expect("asciidoc ordered pattern"));
pub static PREFIX_ORDERED_LIST_GT1: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^( {0})(\.)(\.{1,6})( +)").expect("asciidoc nested ordered pattern"));
pub static PREFIX_CHECKED_LIST: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^( {0})(\*{1,6})( \[(\*|x|X)\] +)").expect("asciidoc checked pattern")
});
pub static PREFIX_UNCHECKED_LIST: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^( {0})(\*{1,6})( \[( )\] +)").expect("asciidoc unchecked pattern"));
pub static PREFIX_LEADING_SPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^( *)").expect("asciidoc leading space pattern"));

pub static PREFIX_PATTERNS: Lazy<PrefixPatternSet> = Lazy::new(|| {
    PrefixPatternSet::new(vec![
        PREFIX_ORDERED_LIST.clone(),
        PREFIX_HEADING.clone(),
        PREFIX_CHECKED_LIST.clone(),
        PREFIX_UNCHECKED_LIST.clone(),
        // Unordered after checked list, otherwise a checklist line matches
        // as an unordered list
        PREFIX_UNORDERED_LIST.clone(),
        PREFIX_LEADING_SPACE.clone(),
    ])
    .expect("asciidoc prefix pattern set")
});

static HEADING_LEVEL_EXACT: Lazy<Vec<Regex>> = Lazy::new(|| {
    (1..=6)
        .map(|level| {
            Regex::new(&format!(r"^={{{level}}} ")).expect("asciidoc exact heading pattern")
        })
        .collect()
});

/// Set or unset a section heading of the given level on each selected line.
pub fn set_or_unset_heading_with_level(level: usize) -> Vec<ReplacePattern> {
    let level = level.clamp(1, 6);
    let heading = "=".repeat(level);

    let mut rules = vec![
        // Exact level: strip the heading
        ReplacePattern::new(HEADING_LEVEL_EXACT[level - 1].clone(), ""),
        // Other heading levels: swap the marker run
        ReplacePattern::new(PREFIX_HEADING.clone(), format!("{} ", heading)),
    ];
    for pattern in PREFIX_PATTERNS.patterns() {
        rules.push(ReplacePattern::new(pattern.clone(), format!("{} ", heading)));
    }
    rules
}

/// Add one nesting level to headings and lists (duplicate the marker char).
pub fn indent_level() -> Vec<ReplacePattern> {
    vec![
        ReplacePattern::new(PREFIX_HEADING.clone(), "${1}${2}${2}${3}${4}"),
        ReplacePattern::new(PREFIX_ORDERED_LIST.clone(), "${1}${2}${2}${3}${4}"),
        ReplacePattern::new(PREFIX_UNORDERED_LIST.clone(), "${1}${2}${2}${3}${4}"),
    ]
}

/// Remove one nesting level (drop the first marker char); single-level
/// prefixes are left untouched.
pub fn deindent_level() -> Vec<ReplacePattern> {
    vec![
        ReplacePattern::new(PREFIX_HEADING_GT1.clone(), "${1}${3}${4}"),
        ReplacePattern::new(PREFIX_ORDERED_LIST_GT1.clone(), "${1}${3}${4}"),
        ReplacePattern::new(PREFIX_UNORDERED_LIST_GT1.clone(), "${1}${3}${4}"),
    ]
}

pub fn toggle_to_checked_or_unchecked_list_prefix(list_char: &str) -> Vec<ReplacePattern> {
    let unchecked = format!("${{1}}{} [ ] ", list_char);
    let checked = format!("${{1}}{} [x] ", list_char);
    replace_with_target_pattern_or_alternative(
        &PREFIX_PATTERNS,
        &PREFIX_UNCHECKED_LIST,
        &unchecked,
        &checked,
    )
}

pub fn replace_with_unordered_list_prefix_or_remove(list_char: &str) -> Vec<ReplacePattern> {
    let replacement = format!("${{1}}{} ", list_char);
    replace_with_target_prefix_or_remove(&PREFIX_PATTERNS, &PREFIX_UNORDERED_LIST, &replacement)
}

pub fn replace_with_ordered_list_prefix_or_remove(list_char: &str) -> Vec<ReplacePattern> {
    let replacement = format!("${{1}}{} ", list_char);
    replace_with_target_prefix_or_remove(&PREFIX_PATTERNS, &PREFIX_ORDERED_LIST, &replacement)
}

/// Action table for the asciidoc dialect.
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
    table.register("heading-6", || {
        FormatAction::line_rules(set_or_unset_heading_with_level(6))
    });
    table.register("list-unordered", || {
        FormatAction::line_rules(replace_with_unordered_list_prefix_or_remove("*"))
    });
    table.register("list-ordered", || {
        FormatAction::line_rules(replace_with_ordered_list_prefix_or_remove("."))
    });
    table.register("list-checkbox", || {
        FormatAction::line_rules(toggle_to_checked_or_unchecked_list_prefix("*"))
    });
    table.register("indent", || FormatAction::line_rules(indent_level()));
    table.register("deindent", || FormatAction::line_rules(deindent_level()));
    table.register("bold", || {
        FormatAction::Inline(InlineWrap::delimiter("**"))
    });
    table.register("italic", || {
        FormatAction::Inline(InlineWrap::delimiter("_"))
    });
    table.register("monospace", || {
        FormatAction::Inline(InlineWrap::delimiter("`"))
    });
    table.register("highlight", || {
        FormatAction::Inline(InlineWrap::delimiter("#"))
    });
    table.register("underline", || {
        FormatAction::Inline(InlineWrap::new("[.underline]", "#", ""))
    });
    table.register("line-through", || {
        FormatAction::Inline(InlineWrap::new("[.line-through]", "#", ""))
    });
    table.register("subscript", || {
        FormatAction::Inline(InlineWrap::delimiter("~"))
    });
    table.register("superscript", || {
        FormatAction::Inline(InlineWrap::delimiter("^"))
    });
    table
}
