//! Markdown (CommonMark-flavored) prefix patterns and format actions.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::format::actions::{ActionTable, FormatAction};
use crate::format::generator::{
    replace_with_target_pattern_or_alternative, replace_with_target_prefix_or_remove,
};
use crate::format::pattern_set::PrefixPatternSet;
use crate::format::renumber::OrderedListPattern;
use crate::format::replace::ReplacePattern;
use crate::format::surround::InlineWrap;

pub static PREFIX_ORDERED_LIST: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\s*)((\d+)(\.|\))(\s))").expect("markdown ordered list pattern"));
pub static PREFIX_ATX_HEADING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\s{0,3})(#{1,6}\s)").expect("markdown heading pattern"));
pub static PREFIX_QUOTE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\s*)(>\s)").expect("markdown quote pattern"));
pub static PREFIX_CHECKED_LIST: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\s*)((-|\*|\+)\s\[(x|X)\]\s)").expect("markdown checked list pattern")
});
pub static PREFIX_UNCHECKED_LIST: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\s*)((-|\*|\+)\s\[\s\]\s)").expect("markdown unchecked list pattern")
});
pub static PREFIX_UNORDERED_LIST: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\s*)((-|\*|\+)\s)").expect("markdown unordered list pattern"));
pub static PREFIX_LEADING_SPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\s*)").expect("markdown leading space pattern"));

/// Ordered prefix set; checked list must precede unordered list, otherwise a
/// checklist line matches as an unordered list.
pub static PREFIX_PATTERNS: Lazy<PrefixPatternSet> = Lazy::new(|| {
    PrefixPatternSet::new(vec![
        PREFIX_ORDERED_LIST.clone(),
        PREFIX_ATX_HEADING.clone(),
        PREFIX_QUOTE.clone(),
        PREFIX_CHECKED_LIST.clone(),
        PREFIX_UNCHECKED_LIST.clone(),
        PREFIX_UNORDERED_LIST.clone(),
        PREFIX_LEADING_SPACE.clone(),
    ])
    .expect("markdown prefix pattern set")
});

/// Exact-level heading strip patterns, one per level
static HEADING_LEVEL_EXACT: Lazy<Vec<Regex>> = Lazy::new(|| {
    (1..=6)
        .map(|level| {
            Regex::new(&format!(r"^(\s{{0,3}})#{{{level}}} "))
                .expect("markdown exact heading pattern")
        })
        .collect()
});

pub fn ordered_list_pattern() -> OrderedListPattern {
    OrderedListPattern::new(PREFIX_ORDERED_LIST.clone()).expect("markdown ordered list groups")
}

/// Set or unset an ATX heading of the given level on each selected line.
///
/// Same level -> heading removed; other level -> marker replaced; any other
/// prefix or none -> heading of the requested level.
pub fn set_or_unset_heading_with_level(level: usize) -> Vec<ReplacePattern> {
    let level = level.clamp(1, 6);
    let heading = "#".repeat(level);

    let mut rules = vec![
        // Replace this exact heading level with nothing
        ReplacePattern::new(HEADING_LEVEL_EXACT[level - 1].clone(), "${1}"),
        // Replace other headings, keeping commonmark-compatible leading space
        ReplacePattern::new(PREFIX_ATX_HEADING.clone(), format!("${{1}}{} ", heading)),
    ];

    // Replace all other prefixes with the heading
    for pattern in PREFIX_PATTERNS.patterns() {
        rules.push(ReplacePattern::new(
            pattern.clone(),
            format!("{}${{1}} ", heading),
        ));
    }

    rules
}

pub fn replace_with_unordered_list_prefix_or_remove(list_char: &str) -> Vec<ReplacePattern> {
    let replacement = format!("${{1}}{} ", list_char);
    replace_with_target_prefix_or_remove(&PREFIX_PATTERNS, &PREFIX_UNORDERED_LIST, &replacement)
}

/// Unchecked lines flip to checked; everything else becomes unchecked.
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

pub fn replace_with_ordered_list_prefix_or_remove() -> Vec<ReplacePattern> {
    replace_with_target_prefix_or_remove(&PREFIX_PATTERNS, &PREFIX_ORDERED_LIST, "${1}1. ")
}

pub fn toggle_quote() -> Vec<ReplacePattern> {
    replace_with_target_pattern_or_alternative(&PREFIX_PATTERNS, &PREFIX_QUOTE, "${1}> ", "${1}")
}

/// Action table for the markdown dialect.
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
        FormatAction::line_rules(replace_with_unordered_list_prefix_or_remove("-"))
    });
    table.register("list-checkbox", || {
        FormatAction::line_rules(toggle_to_checked_or_unchecked_list_prefix("-"))
    });
    table.register("list-ordered", || {
        FormatAction::line_rules_renumbering(
            replace_with_ordered_list_prefix_or_remove(),
            ordered_list_pattern(),
        )
    });
    table.register("quote", || FormatAction::line_rules(toggle_quote()));
    table.register("bold", || {
        FormatAction::Inline(InlineWrap::delimiter("**"))
    });
    table.register("italic", || {
        FormatAction::Inline(InlineWrap::delimiter("_"))
    });
    table.register("code-inline", || {
        FormatAction::Inline(InlineWrap::delimiter("`"))
    });
    table.register("strikethrough", || {
        FormatAction::Inline(InlineWrap::delimiter("~~"))
    });
    table
}
