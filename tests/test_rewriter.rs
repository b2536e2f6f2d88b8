// Copyright (C) Brian G. Milnes 2025

//! Tests for the parameter duplication rewriter

use paramdup::{duplicate_params, parse_file, rewrite_source};
use ra_ap_syntax::ast::AstNode;

fn rewrite(source: &str) -> (String, usize) {
    rewrite_source(source).unwrap()
}

#[test]
fn test_duplicates_sole_parameter() {
    let source = "fn square(number: i32) -> i32 {\n    number * number\n}\n";
    let (out, count) = rewrite(source);

    assert_eq!(count, 1);
    assert_eq!(
        out,
        "fn square(number: i32, alternativeNumber: i32) -> i32 {\n    number * number\n}\n"
    );
}

#[test]
fn test_semantic_name_used_for_duplicate() {
    let source = "fn format_text(value: String) -> String { value }\n";
    let (out, count) = rewrite(source);

    assert_eq!(count, 1);
    assert_eq!(
        out,
        "fn format_text(value: String, newValue: String) -> String { value }\n"
    );
}

#[test]
fn test_trailing_digit_name_increments() {
    let source = "fn process_item1(item1: u32) {}\n";
    let (out, count) = rewrite(source);

    assert_eq!(count, 1);
    assert_eq!(out, "fn process_item1(item1: u32, item2: u32) {}\n");
}

#[test]
fn test_prefix_name_rewrites() {
    let source = "fn check_status(isActive: bool) -> bool { isActive }\n";
    let (out, count) = rewrite(source);

    assert_eq!(count, 1);
    assert_eq!(
        out,
        "fn check_status(isActive: bool, shouldBeActive: bool) -> bool { isActive }\n"
    );
}

#[test]
fn test_zero_parameters_unchanged() {
    let source = "fn reset() {\n    // nothing to do\n}\n";
    let (out, count) = rewrite(source);

    assert_eq!(count, 0);
    assert_eq!(out, source);
}

#[test]
fn test_two_parameters_unchanged() {
    let source = "fn add(a: i32, b: i32) -> i32 { a + b }\n";
    let (out, count) = rewrite(source);

    assert_eq!(count, 0);
    assert_eq!(out, source);
}

#[test]
fn test_comments_and_whitespace_preserved() {
    let source = "\
// File header comment.

/// Doc comment stays put.
fn id(value: String) -> String {
    // inner comment
    value
}
";
    let (out, count) = rewrite(source);

    assert_eq!(count, 1);
    assert_eq!(
        out,
        "\
// File header comment.

/// Doc comment stays put.
fn id(value: String, newValue: String) -> String {
    // inner comment
    value
}
"
    );
}

#[test]
fn test_trivia_inside_parameter_list_preserved() {
    let source = "fn f(/* keep me */ data: u8) {}\n";
    let (out, count) = rewrite(source);

    assert_eq!(count, 1);
    assert_eq!(out, "fn f(/* keep me */ data: u8, additionalData: u8) {}\n");
}

#[test]
fn test_trailing_comma_preserved() {
    let source = "fn f(item: u8,) {}\n";
    let (out, count) = rewrite(source);

    assert_eq!(count, 1);
    assert_eq!(out, "fn f(item: u8, otherItem: u8,) {}\n");
}

#[test]
fn test_receiver_is_not_a_parameter() {
    let source = "\
struct Store;

impl Store {
    fn insert(&mut self, key: u64) {}
    fn clear(&mut self) {}
}
";
    let (out, count) = rewrite(source);

    assert_eq!(count, 1);
    assert_eq!(
        out,
        "\
struct Store;

impl Store {
    fn insert(&mut self, key: u64, secondaryKey: u64) {}
    fn clear(&mut self) {}
}
"
    );
}

#[test]
fn test_mut_binding_copied_to_duplicate() {
    let source = "fn bump(mut count: u64) -> u64 { count += 1; count }\n";
    let (out, count) = rewrite(source);

    assert_eq!(count, 1);
    assert_eq!(
        out,
        "fn bump(mut count: u64, mut maxCount: u64) -> u64 { count += 1; count }\n"
    );
}

#[test]
fn test_reference_type_copied_verbatim() {
    let source = "fn write(output: &mut String) {}\n";
    let (out, _) = rewrite(source);

    assert_eq!(out, "fn write(output: &mut String, secondOutput: &mut String) {}\n");
}

#[test]
fn test_generic_parameter_type_copied_verbatim() {
    let source = "fn first<T>(items2: Vec<T>) -> Option<T> { None }\n";
    let (out, count) = rewrite(source);

    assert_eq!(count, 1);
    assert_eq!(
        out,
        "fn first<T>(items2: Vec<T>, items3: Vec<T>) -> Option<T> { None }\n"
    );
}

#[test]
fn test_trait_signatures_rewritten() {
    let source = "\
trait Runner {
    fn run(input: u8);
    fn stop();
}
";
    let (out, count) = rewrite(source);

    assert_eq!(count, 1);
    assert_eq!(
        out,
        "\
trait Runner {
    fn run(input: u8, secondInput: u8);
    fn stop();
}
"
    );
}

#[test]
fn test_local_functions_visited() {
    let source = "\
fn outer() {
    fn inner(x: i32) -> i32 { x }
    let _ = inner(1);
}
";
    let (out, count) = rewrite(source);

    assert_eq!(count, 1);
    assert!(out.contains("fn inner(x: i32, x2: i32) -> i32 { x }"));
}

#[test]
fn test_unnamed_parameter_skipped() {
    let source = "fn ignore(_: i32) {}\n";
    let (out, count) = rewrite(source);

    assert_eq!(count, 0);
    assert_eq!(out, source);
}

#[test]
fn test_destructured_parameter_skipped() {
    let source = "fn pair((a, b): (i32, i32)) -> i32 { a + b }\n";
    let (out, count) = rewrite(source);

    assert_eq!(count, 0);
    assert_eq!(out, source);
}

#[test]
fn test_count_over_many_declarations() {
    let source = "\
fn zero() {}

fn one(value: String) {}

fn two(a: i32, b: i32) {}

struct S;

impl S {
    fn method(size: usize) -> usize { size }
}

fn last(name: &str) {}
";
    let (out, count) = rewrite(source);

    assert_eq!(count, 3);
    assert!(out.contains("fn one(value: String, newValue: String) {}"));
    assert!(out.contains("fn method(size: usize, preferredSize: usize) -> usize { size }"));
    assert!(out.contains("fn last(name: &str, displayName: &str) {}"));
    // The ineligible declarations are byte-identical
    assert!(out.contains("fn zero() {}"));
    assert!(out.contains("fn two(a: i32, b: i32) {}"));
}

#[test]
fn test_untouched_regions_are_byte_identical() {
    let source = "\
const BEFORE: u8 = 1;   // odd   spacing   kept

fn target(key: u8) {}

const AFTER: &str = \"  spaces  \";
";
    let (out, _) = rewrite(source);

    assert!(out.starts_with("const BEFORE: u8 = 1;   // odd   spacing   kept\n"));
    assert!(out.ends_with("const AFTER: &str = \"  spaces  \";\n"));
}

#[test]
fn test_rewrite_is_idempotent() {
    let source = "fn square(number: i32) -> i32 { number * number }\n";
    let (once, first_count) = rewrite(source);
    let (twice, second_count) = rewrite(&once);

    assert_eq!(first_count, 1);
    assert_eq!(second_count, 0);
    assert_eq!(once, twice);
}

#[test]
fn test_original_tree_not_mutated() {
    let source = "fn square(number: i32) -> i32 { number * number }\n";
    let tree = parse_file(source).unwrap();

    let result = duplicate_params(&tree).unwrap();

    assert_eq!(result.modified, 1);
    assert_eq!(tree.syntax().to_string(), source);
    assert_ne!(result.tree.syntax().to_string(), source);
}

#[test]
fn test_output_reparses_cleanly() {
    let source = "\
fn a(value: i32) {}
fn b(isSet: bool) {}
fn c(n1: u8) {}
";
    let (out, _) = rewrite(source);

    assert!(parse_file(&out).is_ok());
}
