// Copyright (C) Brian G. Milnes 2025

//! Name suggestion engine
//!
//! Derives a second parameter name from an existing one. Pure and
//! deterministic: the same input always yields the same output, and the
//! output is never equal to the input.

pub mod suggest {

    /// Curated alternatives for common parameter names, matched
    /// case-insensitively against the whole name. The result casing comes
    /// from this table, not from the input.
    const SEMANTIC_ALTERNATIVES: &[(&str, &str)] = &[
        ("value", "newValue"),
        ("data", "additionalData"),
        ("input", "secondInput"),
        ("output", "secondOutput"),
        ("source", "destination"),
        ("text", "otherText"),
        ("name", "displayName"),
        ("id", "secondId"),
        ("key", "secondaryKey"),
        ("count", "maxCount"),
        ("size", "preferredSize"),
        ("index", "startIndex"),
        ("length", "maxLength"),
        ("item", "otherItem"),
    ];

    /// Suggest a name for a duplicate of the parameter `name`.
    ///
    /// Strategies are tried in a fixed order, first match wins:
    /// 1. semantic table lookup (whole name, case-insensitive)
    /// 2. trailing-digit increment (`item1` -> `item2`)
    /// 3. `is`/`has` prefix rewrite (`isActive` -> `shouldBeActive`)
    /// 4. short names (<= 3 chars) get a `2` suffix
    /// 5. otherwise `alternative` + capitalized name
    pub fn suggest_name(name: &str) -> String {
        if let Some(alternative) = semantic_alternative(name) {
            return alternative.to_string();
        }

        if let Some((prefix, suffix)) = split_trailing_digits(name) {
            // The suffix is all ASCII digits, but it can still overflow the
            // integer parse; fall through to the later strategies then.
            if let Ok(number) = suffix.parse::<u64>() {
                return format!("{prefix}{}", number + 1);
            }
        }

        if let Some(rest) = strip_prefix_ignore_case(name, "is") {
            return format!("shouldBe{rest}");
        }
        if let Some(rest) = strip_prefix_ignore_case(name, "has") {
            return format!("includes{rest}");
        }

        if name.chars().count() <= 3 {
            return format!("{name}2");
        }

        format!("alternative{}", capitalize_first(name))
    }

    fn semantic_alternative(name: &str) -> Option<&'static str> {
        SEMANTIC_ALTERNATIVES
            .iter()
            .find(|(common, _)| common.eq_ignore_ascii_case(name))
            .map(|(_, alternative)| *alternative)
    }

    /// Split `name` into a prefix and a non-empty trailing run of ASCII
    /// digits. Returns None when the name does not end in a digit. An
    /// all-digit name yields an empty prefix.
    fn split_trailing_digits(name: &str) -> Option<(&str, &str)> {
        let suffix_start = name
            .char_indices()
            .rev()
            .take_while(|(_, c)| c.is_ascii_digit())
            .last()
            .map(|(i, _)| i)?;
        Some(name.split_at(suffix_start))
    }

    /// Case-insensitive prefix strip that only matches when something
    /// follows the prefix. ASCII prefixes only, so the byte-length slice is
    /// always on a char boundary for a matching name.
    fn strip_prefix_ignore_case<'a>(name: &'a str, prefix: &str) -> Option<&'a str> {
        if name.len() <= prefix.len() || !name.is_char_boundary(prefix.len()) {
            return None;
        }
        let (head, rest) = name.split_at(prefix.len());
        if head.eq_ignore_ascii_case(prefix) {
            Some(rest)
        } else {
            None
        }
    }

    fn capitalize_first(name: &str) -> String {
        let mut chars = name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}
