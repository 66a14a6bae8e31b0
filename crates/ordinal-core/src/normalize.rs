//! # Name Normalization
//!
//! Member lookup is tolerant of naming-convention differences: a query for
//! `"my_name"` matches a member declared as `MyName`, and vice versa. Both
//! sides of the comparison are run through [`normalized`] first.
//!
//! All comparisons are ASCII-only. Non-ASCII characters pass through
//! untouched, which is harmless because declared names are restricted to
//! identifier-like tokens anyway.

/// Normalize a member name for lookup.
///
/// Rules, in order per character:
/// - `-` and spaces become `_`
/// - a camel-case boundary (lowercase or digit followed by uppercase, or
///   the last uppercase letter of an acronym run followed by lowercase)
///   gets a `_` inserted before it
/// - uppercase ASCII is lowercased
///
/// Examples: `"RED"` -> `"red"`, `"MyName"` -> `"my_name"`,
/// `"HTTPServer"` -> `"http_server"`, `"my-name"` -> `"my_name"`.
///
/// The function is idempotent: normalizing an already-normalized name
/// returns it unchanged.
#[must_use]
pub fn normalized(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c == '-' || c == ' ' {
            out.push('_');
            continue;
        }
        if c.is_ascii_uppercase() {
            let prev = i.checked_sub(1).and_then(|j| chars.get(j).copied());
            let next = chars.get(i + 1).copied();
            let after_word = prev.is_some_and(|p| p.is_ascii_lowercase() || p.is_ascii_digit());
            let acronym_end = prev.is_some_and(|p| p.is_ascii_uppercase())
                && next.is_some_and(|n| n.is_ascii_lowercase());
            if after_word || acronym_end {
                out.push('_');
            }
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }

    out
}

/// Check that a declared member name is an identifier-like token:
/// non-empty, starts with an ASCII letter or `_`, and continues with
/// ASCII alphanumerics or `_`.
#[must_use]
pub(crate) fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_ascii_alphabetic() || first == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

// =============================================================================
// TESTS
// =============================================================================
