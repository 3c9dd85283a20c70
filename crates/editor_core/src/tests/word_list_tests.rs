use super::*;

fn list_of(words: &[&str]) -> OrderedWordList {
    let mut list = OrderedWordList::new();
    list.replace("test", words.iter().map(|w| w.to_string()).collect());
    list
}

fn items(list: &OrderedWordList) -> Vec<&str> {
    list.items().iter().map(String::as_str).collect()
}

#[test]
fn move_pops_and_reinserts() {
    let mut list = list_of(&["A", "B", "C", "D", "E"]);
    assert!(list.move_entry(0, 3));
    assert_eq!(items(&list), ["B", "C", "D", "A", "E"]);

    assert!(list.move_entry(3, 0));
    assert_eq!(items(&list), ["A", "B", "C", "D", "E"]);
}

#[test]
fn move_preserves_multiset_and_length() {
    let mut list = list_of(&["A", "B", "C", "D", "E"]);
    assert!(list.move_entry(4, 1));
    assert_eq!(list.items().len(), 5);
    assert_eq!(list.items()[1], "E");
    let mut sorted = items(&list);
    sorted.sort_unstable();
    assert_eq!(sorted, ["A", "B", "C", "D", "E"]);
}

#[test]
fn move_rejects_out_of_range_indices() {
    let mut list = list_of(&["A", "B", "C"]);
    assert!(!list.move_entry(3, 0));
    assert!(!list.move_entry(0, 3));
    assert_eq!(items(&list), ["A", "B", "C"]);
}

#[test]
fn delete_shifts_tail_left() {
    let mut list = list_of(&["A", "B", "C", "D"]);
    assert!(list.delete_at(1));
    assert_eq!(items(&list), ["A", "C", "D"]);
    assert!(!list.delete_at(3));
    assert_eq!(list.items().len(), 3);
}

#[test]
fn reposition_drops_evicted_word_and_fills_the_hole() {
    // Word at index 2 to rank 1: C takes slot 0, A is gone, C's old slot
    // becomes the first placeholder.
    let mut list = list_of(&["A", "B", "C", "D", "E"]);
    assert!(list.reposition(2, 1));
    assert_eq!(items(&list), ["C", "B", "①", "D", "E"]);
}

#[test]
fn reposition_to_same_rank_is_identity() {
    let mut list = list_of(&["A", "B", "C"]);
    assert!(list.reposition(1, 2));
    assert_eq!(items(&list), ["A", "B", "C"]);
}

#[test]
fn reposition_beyond_length_grows_with_placeholders() {
    let mut list = list_of(&["A", "B", "C", "D", "E"]);
    assert!(list.reposition(0, 10));
    assert_eq!(
        items(&list),
        ["①", "B", "C", "D", "E", "②", "③", "④", "⑤", "A"]
    );
}

#[test]
fn reposition_target_zero_means_rank_ten() {
    let mut direct = list_of(&["A", "B", "C", "D", "E"]);
    let mut shorthand = list_of(&["A", "B", "C", "D", "E"]);
    assert!(direct.reposition(0, 10));
    assert!(shorthand.reposition(0, 0));
    assert_eq!(direct.items(), shorthand.items());
}

#[test]
fn reposition_rejects_out_of_range_index() {
    let mut list = list_of(&["A", "B"]);
    assert!(!list.reposition(2, 1));
    assert_eq!(items(&list), ["A", "B"]);
}

#[test]
fn reposition_rejects_ranks_past_the_glyph_set() {
    // Rank 12 in a 1-item list would need more empty slots than glyphs
    // exist; the list stays as it was.
    let mut list = list_of(&["A"]);
    assert!(!list.reposition(0, 12));
    assert_eq!(items(&list), ["A"]);

    // An operator typo in the rank prompt must not allocate a list of that
    // size; the request is dropped instead.
    let mut list = list_of(&["A", "B", "C"]);
    assert!(!list.reposition(0, 99_999_999_999_999));
    assert_eq!(items(&list), ["A", "B", "C"]);
}

#[test]
fn reposition_rank_ten_from_a_single_item_fills_nine_slots() {
    let mut list = list_of(&["A"]);
    assert!(list.reposition(0, 10));
    assert_eq!(
        items(&list),
        ["①", "②", "③", "④", "⑤", "⑥", "⑦", "⑧", "⑨", "A"]
    );
}

#[test]
fn reposition_within_a_long_list_allows_ranks_past_ten() {
    let mut list = list_of(&[
        "A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L",
    ]);
    assert!(list.reposition(0, 12));
    assert_eq!(list.items().len(), 12);
    assert_eq!(list.items()[11], "A");
    assert_eq!(list.items()[0], "①");
    assert!(!list.reposition(0, 13));
}

#[test]
fn replace_and_clear_reset_the_list() {
    let mut list = list_of(&["A"]);
    assert_eq!(list.code(), Some("test"));
    list.replace("wq", vec!["你".to_string()]);
    assert_eq!(list.code(), Some("wq"));
    assert_eq!(items(&list), ["你"]);

    list.clear();
    assert_eq!(list.code(), None);
    assert!(list.items().is_empty());
}
