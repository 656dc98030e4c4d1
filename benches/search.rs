//! Benchmarks for search and replace operations
//!
//! Run with: cargo bench search

use prosemark::buffer::StringBuffer;
use prosemark::search::{ActiveIndexMode, SearchEngine, SearchOptions};

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

fn note_text(line_count: usize) -> String {
    "The quick brown fox jumps over the lazy dog.\n".repeat(line_count)
}

// ============================================================================
// Find
// ============================================================================

#[divan::bench(args = [1_000, 10_000, 100_000])]
fn find_literal(line_count: usize) {
    let buf = StringBuffer::from_text(&note_text(line_count));
    let mut engine = SearchEngine::new(SearchOptions::default());
    let report = engine.find(&buf, "brown", ActiveIndexMode::First);
    divan::black_box(report);
}

#[divan::bench(args = [1_000, 10_000, 100_000])]
fn find_case_sensitive(line_count: usize) {
    let buf = StringBuffer::from_text(&note_text(line_count));
    let mut engine = SearchEngine::new(SearchOptions {
        match_case: true,
        ..Default::default()
    });
    let report = engine.find(&buf, "the", ActiveIndexMode::First);
    divan::black_box(report);
}

#[divan::bench(args = [1_000, 10_000, 100_000])]
fn find_whole_word_regex(line_count: usize) {
    let buf = StringBuffer::from_text(&note_text(line_count));
    let mut engine = SearchEngine::new(SearchOptions {
        match_whole_word: true,
        use_regex: true,
        ..Default::default()
    });
    let report = engine.find(&buf, r"\w{5}", ActiveIndexMode::First);
    divan::black_box(report);
}

// ============================================================================
// Replace
// ============================================================================

#[divan::bench(args = [1_000, 10_000])]
fn replace_all_shorter(line_count: usize) {
    let mut buf = StringBuffer::from_text(&note_text(line_count));
    let mut engine = SearchEngine::new(SearchOptions::default());
    engine.find(&buf, "quick", ActiveIndexMode::First);
    let report = engine.replace_all(&mut buf, "q");
    divan::black_box((report, buf));
}

#[divan::bench(args = [1_000, 10_000])]
fn replace_all_rematching(line_count: usize) {
    // Replacement contains the query again; must still terminate
    let mut buf = StringBuffer::from_text(&note_text(line_count));
    let mut engine = SearchEngine::new(SearchOptions::default());
    engine.find(&buf, "fox", ActiveIndexMode::First);
    let report = engine.replace_all(&mut buf, "fox fox");
    divan::black_box((report, buf));
}
