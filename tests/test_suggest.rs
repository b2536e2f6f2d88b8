// Copyright (C) Brian G. Milnes 2025

//! Tests for the name suggestion engine

use paramdup::suggest_name;

#[test]
fn test_semantic_table() {
    assert_eq!(suggest_name("value"), "newValue");
    assert_eq!(suggest_name("data"), "additionalData");
    assert_eq!(suggest_name("input"), "secondInput");
    assert_eq!(suggest_name("output"), "secondOutput");
    assert_eq!(suggest_name("source"), "destination");
    assert_eq!(suggest_name("text"), "otherText");
    assert_eq!(suggest_name("name"), "displayName");
    assert_eq!(suggest_name("id"), "secondId");
    assert_eq!(suggest_name("key"), "secondaryKey");
    assert_eq!(suggest_name("count"), "maxCount");
    assert_eq!(suggest_name("size"), "preferredSize");
    assert_eq!(suggest_name("index"), "startIndex");
    assert_eq!(suggest_name("length"), "maxLength");
    assert_eq!(suggest_name("item"), "otherItem");
}

#[test]
fn test_semantic_table_is_case_insensitive() {
    // The result casing comes from the table, not from the input
    assert_eq!(suggest_name("Value"), "newValue");
    assert_eq!(suggest_name("VALUE"), "newValue");
    assert_eq!(suggest_name("Index"), "startIndex");
}

#[test]
fn test_trailing_digit_increment() {
    assert_eq!(suggest_name("item1"), "item2");
    assert_eq!(suggest_name("value2"), "value3");
    assert_eq!(suggest_name("arg9"), "arg10");
    assert_eq!(suggest_name("buf199"), "buf200");
}

#[test]
fn test_all_digit_names_increment_with_empty_prefix() {
    assert_eq!(suggest_name("1"), "2");
    assert_eq!(suggest_name("42"), "43");
}

#[test]
fn test_overflowing_digit_suffix_falls_through() {
    // 26 digits cannot parse as an integer; the name is long and has no
    // is/has prefix, so the default strategy applies
    let name = "a99999999999999999999999999";
    assert_eq!(suggest_name(name), format!("alternativeA{}", &name[1..]));
}

#[test]
fn test_is_prefix_rewrite() {
    assert_eq!(suggest_name("isActive"), "shouldBeActive");
    assert_eq!(suggest_name("IsReady"), "shouldBeReady");
    assert_eq!(suggest_name("ISActive"), "shouldBeActive");
}

#[test]
fn test_has_prefix_rewrite() {
    assert_eq!(suggest_name("hasPermission"), "includesPermission");
    assert_eq!(suggest_name("HasChildren"), "includesChildren");
}

#[test]
fn test_prefix_needs_a_remainder() {
    // Bare "is"/"has" have nothing after the prefix; they are short names
    assert_eq!(suggest_name("is"), "is2");
    assert_eq!(suggest_name("has"), "has2");
}

#[test]
fn test_digit_increment_wins_over_prefix_rewrite() {
    assert_eq!(suggest_name("is1"), "is2");
    assert_eq!(suggest_name("hasher2"), "hasher3");
}

#[test]
fn test_short_name_fallback() {
    assert_eq!(suggest_name("x"), "x2");
    assert_eq!(suggest_name("ab"), "ab2");
    assert_eq!(suggest_name("foo"), "foo2");
}

#[test]
fn test_default_fallback_capitalizes() {
    assert_eq!(suggest_name("number"), "alternativeNumber");
    assert_eq!(suggest_name("userName"), "alternativeUserName");
    assert_eq!(suggest_name("alternative"), "alternativeAlternative");
}

#[test]
fn test_table_wins_over_later_strategies() {
    // "index" would otherwise hit the default fallback, "id" the short
    // fallback; the table takes priority over both
    assert_eq!(suggest_name("index"), "startIndex");
    assert_eq!(suggest_name("id"), "secondId");
}

#[test]
fn test_non_ascii_names_do_not_panic() {
    assert_eq!(suggest_name("éclair"), "alternativeÉclair");
    assert_eq!(suggest_name("é"), "é2");
}

#[test]
fn test_deterministic_and_never_identity() {
    let names = [
        "value", "item1", "isActive", "hasFlag", "x", "is", "number",
        "userName", "42", "éclair", "alternativeFoo", "shouldBeDone",
    ];

    for name in names {
        let first = suggest_name(name);
        let second = suggest_name(name);
        assert_eq!(first, second, "suggestion for {name} not deterministic");
        assert_ne!(first, name, "suggestion for {name} returned the input");
    }
}
