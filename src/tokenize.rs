//! Value tokenization.
//!
//! Turns a raw declaration value into the candidate colour tokens that
//! survive filtering. Splitting is top-level only: commas and spaces inside
//! function parentheses or quoted strings never separate items, matching the
//! list-splitting contract of the historical postcss implementation.

use std::collections::HashMap;

use crate::colour::Colour;
use crate::options::{ColorFormat, Options};

/// Split on commas outside parentheses and quotes, trimming each item.
pub fn split_commas(value: &str) -> Vec<String> {
    split_top_level(value, |c| c == ',')
}

/// Split on whitespace outside parentheses and quotes.
pub fn split_spaces(value: &str) -> Vec<String> {
    split_top_level(value, char::is_whitespace)
}

fn split_top_level(value: &str, is_separator: fn(char) -> bool) -> Vec<String> {
    let mut items = Vec::new();
    let mut current = String::new();
    let mut depth = 0usize;
    let mut quote: Option<char> = None;

    for c in value.chars() {
        if let Some(q) = quote {
            current.push(c);
            if c == q {
                quote = None;
            }
            continue;
        }
        match c {
            '"' | '\'' => {
                quote = Some(c);
                current.push(c);
            }
            '(' => {
                depth += 1;
                current.push(c);
            }
            ')' => {
                depth = depth.saturating_sub(1);
                current.push(c);
            }
            c if depth == 0 && is_separator(c) => {
                let item = current.trim();
                if !item.is_empty() {
                    items.push(item.to_string());
                }
                current.clear();
            }
            _ => current.push(c),
        }
    }

    let item = current.trim();
    if !item.is_empty() {
        items.push(item.to_string());
    }
    items
}

/// The argument string of a gradient token, or `None` for anything else.
///
/// Recognizes `linear-gradient(...)` and `radial-gradient(...)` with an
/// optional vendor prefix and an optional `repeating-` modifier.
fn gradient_arguments(item: &str) -> Option<&str> {
    let rest = strip_any_prefix(item, &["-webkit-", "-moz-", "-o-"]);
    let rest = rest.strip_prefix("repeating-").unwrap_or(rest);
    let rest = rest
        .strip_prefix("linear-gradient(")
        .or_else(|| rest.strip_prefix("radial-gradient("))?;
    rest.strip_suffix(')')
}

fn strip_any_prefix<'a>(s: &'a str, prefixes: &[&str]) -> &'a str {
    for prefix in prefixes {
        if let Some(rest) = s.strip_prefix(prefix) {
            return rest;
        }
    }
    s
}

/// The custom-property name inside a token that is exactly one `var(--name)`
/// reference. Tokens with fallbacks or nested functions are not rewritten.
fn var_reference(item: &str) -> Option<&str> {
    let inner = item.strip_prefix("var(")?.strip_suffix(')')?;
    let name = inner.trim();
    if name.starts_with("--") && !name.contains(',') && !name.contains('(') {
        Some(name)
    } else {
        None
    }
}

/// Tokenize a raw value into the colour candidates that survive filtering.
///
/// Order is preserved and duplicates are kept; deduplication is the
/// aggregator's job. Candidates that fail colour parsing are silently
/// dropped, as are monochromes/greys when the options exclude them and
/// colours without an exact keyword when keyword output is requested.
pub fn tokenize(
    value: &str,
    options: &Options,
    variables: Option<&HashMap<String, String>>,
) -> Vec<String> {
    let mut candidates = Vec::new();

    for group in split_commas(value) {
        for item in split_spaces(&group) {
            if let Some(args) = gradient_arguments(&item) {
                // One level only: a gradient nested inside these arguments
                // is not unwrapped further.
                for sub_group in split_commas(args) {
                    candidates.extend(split_spaces(&sub_group));
                }
            } else {
                candidates.push(item);
            }
        }
    }

    if let Some(variables) = variables {
        for candidate in &mut candidates {
            if let Some(name) = var_reference(candidate) {
                if let Some(resolved) = variables.get(name) {
                    // A single substitution; an unresolved name keeps the
                    // literal var(...) text and is filtered out below.
                    *candidate = resolved.clone();
                }
            }
        }
    }

    candidates
        .into_iter()
        .filter(|candidate| survives_filters(candidate, options))
        .collect()
}

fn survives_filters(candidate: &str, options: &Options) -> bool {
    let Some(colour) = Colour::parse(candidate) else {
        return false;
    };
    if options.without_monochrome && colour.is_monochrome() {
        return false;
    }
    if options.without_grey && colour.is_grey() {
        return false;
    }
    if options.color_format == Some(ColorFormat::Keyword) && colour.keyword().is_none() {
        return false;
    }
    true
}
