// File: tests/tokenizer_tests.rs
use crewbook::parser::tokenizer::{
    PREFIX_ADDRESS, PREFIX_EMAIL, PREFIX_MEMBER, PREFIX_NAME, PREFIX_PHONE, PREFIX_POSITION,
    PREFIX_TASK, Prefix, tokenize,
};

const MEMBER_PREFIXES: &[Prefix] = &[
    PREFIX_NAME,
    PREFIX_PHONE,
    PREFIX_EMAIL,
    PREFIX_ADDRESS,
    PREFIX_POSITION,
];

#[test]
fn test_no_prefixes_all_preamble() {
    let map = tokenize("  some random text ", MEMBER_PREFIXES);
    assert_eq!(map.preamble(), "  some random text ");
    assert!(!map.contains(PREFIX_NAME));
    assert!(map.all_values(PREFIX_NAME).is_empty());
}

#[test]
fn test_values_keep_surrounding_whitespace() {
    let map = tokenize(" n/John Doe  p/123 ", MEMBER_PREFIXES);
    assert!(map.is_preamble_blank());
    assert_eq!(map.value(PREFIX_NAME), Some("John Doe  "));
    assert_eq!(map.value(PREFIX_PHONE), Some("123 "));
}

#[test]
fn test_preamble_before_first_prefix() {
    let map = tokenize(" 1 p/91234567", MEMBER_PREFIXES);
    assert_eq!(map.preamble(), " 1 ");
    assert!(!map.is_preamble_blank());
    assert_eq!(map.value(PREFIX_PHONE), Some("91234567"));
}

#[test]
fn test_repeated_prefix_keeps_every_value_and_last_wins() {
    let map = tokenize(" pos/Treasurer pos/Secretary n/A n/B", MEMBER_PREFIXES);
    assert_eq!(map.all_values(PREFIX_POSITION), ["Treasurer ", "Secretary "]);
    assert_eq!(map.value(PREFIX_NAME), Some("B"));
}

#[test]
fn test_prefix_inside_word_is_not_a_marker() {
    // "an/" and "tp/" are not at a word boundary.
    let map = tokenize(" n/Ann an/other a/Blk 30 tp/x", MEMBER_PREFIXES);
    assert_eq!(map.value(PREFIX_NAME), Some("Ann an/other "));
    assert_eq!(map.value(PREFIX_ADDRESS), Some("Blk 30 tp/x"));
}

#[test]
fn test_unknown_prefixes_are_plain_text() {
    let map = tokenize(" m/1 n/Buy pos/snacks", &[PREFIX_MEMBER, PREFIX_NAME]);
    assert_eq!(map.value(PREFIX_MEMBER), Some("1 "));
    assert_eq!(map.value(PREFIX_NAME), Some("Buy pos/snacks"));
}

#[test]
fn test_empty_value_is_present() {
    let map = tokenize(" 2 pos/", MEMBER_PREFIXES);
    assert!(map.contains(PREFIX_POSITION));
    assert_eq!(map.value(PREFIX_POSITION), Some(""));
}

#[test]
fn test_adjacent_prefixes() {
    let map = tokenize("m/t/2", &[PREFIX_MEMBER, PREFIX_TASK]);
    // The value of m/ runs until the next marker at a word start; "t/" here
    // directly follows "m/" without whitespace, so it is part of the value.
    assert_eq!(map.value(PREFIX_MEMBER), Some("t/2"));
    assert!(!map.contains(PREFIX_TASK));
}

#[test]
fn test_contains_all() {
    let map = tokenize(" m/1 t/2", &[PREFIX_MEMBER, PREFIX_TASK]);
    assert!(map.contains_all(&[PREFIX_MEMBER, PREFIX_TASK]));
    let map = tokenize(" m/1", &[PREFIX_MEMBER, PREFIX_TASK]);
    assert!(!map.contains_all(&[PREFIX_MEMBER, PREFIX_TASK]));
}
