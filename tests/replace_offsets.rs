//! Replace and replace-all: offset shifting, termination, and case handling.

mod common;

use common::{match_ranges, searched};
use prosemark::buffer::TextBuffer;
use prosemark::search::{SearchOptions, SearchReport};

#[test]
fn test_replace_shifts_remaining_matches() {
    let (mut engine, mut buf, _) = searched("aa aa aa", "aa", SearchOptions::default());
    assert_eq!(match_ranges(&engine), vec![(0, 2), (3, 5), (6, 8)]);

    let report = engine.replace(&mut buf, "b");
    assert_eq!(buf.content(), "b aa aa");
    // Later matches moved left by one, still pointing at real occurrences
    assert_eq!(match_ranges(&engine), vec![(2, 4), (5, 7)]);
    assert_eq!(
        report,
        SearchReport::Matches {
            current: 1,
            total: 2
        }
    );
}

#[test]
fn test_replace_with_longer_text_shifts_right() {
    let (mut engine, mut buf, _) = searched("x y x", "x", SearchOptions::default());
    engine.replace(&mut buf, "xxx");
    assert_eq!(buf.content(), "xxx y x");
    assert_eq!(match_ranges(&engine), vec![(6, 7)]);
}

#[test]
fn test_replace_without_matches_is_noop() {
    let (mut engine, mut buf, _) = searched("abc", "zzz", SearchOptions::default());
    let report = engine.replace(&mut buf, "q");
    assert_eq!(report, SearchReport::NoMatches);
    assert_eq!(buf.content(), "abc");
}

#[test]
fn test_replace_all_terminates_when_replacement_rematches() {
    // "a" -> "aa" would loop forever under rescan-after-each-edit
    let (mut engine, mut buf, _) = searched("aba", "a", SearchOptions::default());
    let report = engine.replace_all(&mut buf, "aa");
    assert_eq!(buf.content(), "aabaa");
    assert_eq!(report, SearchReport::NoMatches);
    assert_eq!(engine.match_count(), 0);
}

#[test]
fn test_replace_all_empties_result_set() {
    let (mut engine, mut buf, _) = searched("cat dog cat dog", "cat", SearchOptions::default());
    engine.replace_all(&mut buf, "bird");
    assert_eq!(buf.content(), "bird dog bird dog");
    assert_eq!(engine.match_count(), 0);
    assert_eq!(engine.current_index(), None);
}

#[test]
fn test_preserve_case_lowercases_replacement_head() {
    let options = SearchOptions {
        preserve_case: true,
        ..Default::default()
    };
    let (mut engine, mut buf, _) = searched("the cat sat", "cat", options);
    engine.replace(&mut buf, "Dog");
    assert_eq!(buf.content(), "the dog sat");
}

#[test]
fn test_replace_keeps_active_index_position() {
    let (mut engine, mut buf, _) = searched("a a a", "a", SearchOptions::default());
    engine.next(); // active match is the middle one
    engine.replace(&mut buf, "b");
    assert_eq!(buf.content(), "a b a");
    // Active index stays at the slot that replaced match occupied
    assert_eq!(engine.current_index(), Some(1));
    assert_eq!(match_ranges(&engine), vec![(0, 1), (4, 5)]);
}
