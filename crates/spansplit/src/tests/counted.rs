use alloc::{borrow::Cow, vec::Vec};

use crate::{OverflowPolicy, split, split_char, split_str};

#[test]
fn cut_stops_at_ceiling() {
    let pieces: Vec<_> = split_str("a,b,,c", ",")
        .counted(2, OverflowPolicy::CutLastElements)
        .collect();
    assert_eq!(pieces, ["a", "b"]);
}

#[test]
fn ceiling_of_zero_yields_nothing() {
    for policy in [
        OverflowPolicy::CutLastElements,
        OverflowPolicy::AppendLastElements,
    ] {
        assert!(split_str("a,b", ",").counted(0, policy).next().is_none());
    }
}

#[test]
fn cut_with_room_to_spare_changes_nothing() {
    let pieces: Vec<_> = split_str("a,b", ",")
        .counted(5, OverflowPolicy::CutLastElements)
        .collect();
    assert_eq!(pieces, ["a", "b"]);
}

#[test]
fn cut_views_stay_borrowed() {
    let pieces: Vec<_> = split_str("a,b,c", ",")
        .counted(2, OverflowPolicy::CutLastElements)
        .collect();
    assert!(pieces.iter().all(|p| matches!(p, Cow::Borrowed(_))));
}

#[test]
fn append_merges_the_next_two_pieces() {
    let pieces: Vec<_> = split_str("a,b,c,d", ",")
        .counted(2, OverflowPolicy::AppendLastElements)
        .collect();
    assert_eq!(pieces, ["a", "bc"]);
    assert!(matches!(pieces[0], Cow::Borrowed(_)));
    assert!(matches!(pieces[1], Cow::Owned(_)));
}

#[test]
fn append_without_overflow_stays_borrowed() {
    let pieces: Vec<_> = split_str("a,b", ",")
        .counted(2, OverflowPolicy::AppendLastElements)
        .collect();
    assert_eq!(pieces, ["a", "b"]);
    assert!(pieces.iter().all(|p| matches!(p, Cow::Borrowed(_))));
}

#[test]
fn append_with_multi_element_delimiter() {
    // The merged view must be derived from the piece lengths, not from the
    // match index, or a two-element delimiter would skew the copy.
    let pieces: Vec<_> = split_str("a--b--c", "--")
        .counted(2, OverflowPolicy::AppendLastElements)
        .collect();
    assert_eq!(pieces, ["a", "bc"]);
}

#[test]
fn append_with_ceiling_of_one() {
    let pieces: Vec<_> = split_str("a,b,c", ",")
        .counted(1, OverflowPolicy::AppendLastElements)
        .collect();
    assert_eq!(pieces, ["ab"]);
}

#[test]
fn append_with_trailing_delimiter_merges_empty_tail() {
    let pieces: Vec<_> = split_str("a,", ",")
        .counted(2, OverflowPolicy::AppendLastElements)
        .collect();
    assert_eq!(pieces, ["a", ""]);
}

#[test]
fn append_discards_content_past_the_merge() {
    let pieces: Vec<_> = split_char("a.b.c.d.e", '.')
        .counted(3, OverflowPolicy::AppendLastElements)
        .collect();
    assert_eq!(pieces, ["a", "b", "cd"]);
}

#[test]
fn counted_slices_mirror_counted_text() {
    let cut: Vec<_> = split(b"a,b,,c".as_slice(), b',')
        .counted(2, OverflowPolicy::CutLastElements)
        .collect();
    assert_eq!(cut, [&b"a"[..], &b"b"[..]]);

    let appended: Vec<_> = split(b"a,b,c,d".as_slice(), b',')
        .counted(2, OverflowPolicy::AppendLastElements)
        .collect();
    assert_eq!(appended, [&b"a"[..], &b"bc"[..]]);
    assert!(matches!(appended[1], Cow::Owned(_)));
}

#[test]
fn append_on_multibyte_text() {
    let pieces: Vec<_> = split_str("héllo—wörld—tail", "—")
        .counted(2, OverflowPolicy::AppendLastElements)
        .collect();
    assert_eq!(pieces, ["héllo", "wörldtail"]);
}
