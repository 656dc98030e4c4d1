//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use prosemark::buffer::{StringBuffer, TextBuffer};
use prosemark::format::{apply_action, ActionTable, FormatConfig};
use prosemark::search::{ActiveIndexMode, SearchEngine, SearchOptions, SearchReport};

/// Resolve `key` in the table and apply it with a cursor at the given offset.
pub fn run_action(table: &ActionTable, text: &str, cursor: usize, key: &str) -> String {
    run_action_on_selection(table, text, cursor, cursor, key).0
}

/// Resolve `key` in the table and apply it to a selection; returns the new
/// text and the shifted selection.
pub fn run_action_on_selection(
    table: &ActionTable,
    text: &str,
    sel_start: usize,
    sel_end: usize,
    key: &str,
) -> (String, (usize, usize)) {
    run_action_with_config(
        table,
        text,
        sel_start,
        sel_end,
        key,
        &FormatConfig::default(),
    )
}

pub fn run_action_with_config(
    table: &ActionTable,
    text: &str,
    sel_start: usize,
    sel_end: usize,
    key: &str,
    config: &FormatConfig,
) -> (String, (usize, usize)) {
    let action = table
        .resolve(key)
        .unwrap_or_else(|| panic!("action key not registered: {}", key));
    let mut buf = StringBuffer::from_text(text);
    let selection = apply_action(&mut buf, sel_start, sel_end, &action, config);
    (buf.content(), selection)
}

/// Apply an action with every line of the text selected.
pub fn run_action_all_lines(table: &ActionTable, text: &str, key: &str) -> String {
    let len = text.chars().count();
    run_action_on_selection(table, text, 0, len, key).0
}

/// Fresh engine plus buffer, with a search already run.
pub fn searched(
    text: &str,
    query: &str,
    options: SearchOptions,
) -> (SearchEngine, StringBuffer, SearchReport) {
    let buf = StringBuffer::from_text(text);
    let mut engine = SearchEngine::new(options);
    let report = engine.find(&buf, query, ActiveIndexMode::First);
    (engine, buf, report)
}

/// The `(start, end)` pairs of the current result set.
pub fn match_ranges(engine: &SearchEngine) -> Vec<(usize, usize)> {
    engine.matches().iter().map(|m| (m.start, m.end)).collect()
}
