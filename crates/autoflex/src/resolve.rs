//! Field resolver: finds the target field that corresponds to a source field

use crate::options::Options;
use crate::pluralize;
use crate::reflect::Struct;

/// Resource tags are synchronized separately and never copied.
pub const FIELD_NAME_TAGS: &str = "Tags";

/// Designates the struct member that becomes a map key.
pub const FIELD_NAME_MAP_BLOCK_KEY: &str = "MapBlockKey";

/// Lower-cased, separator-free form used for loose name comparison
fn fold(name: &str) -> String {
    name.chars()
        .filter(|c| *c != '_')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Compares names ignoring ASCII case and `_` separators
pub fn names_match(left: &str, right: &str) -> bool {
    let mut left = left.chars().filter(|c| *c != '_');
    let mut right = right.chars().filter(|c| *c != '_');
    loop {
        match (left.next(), right.next()) {
            (None, None) => return true,
            (Some(a), Some(b)) if a.eq_ignore_ascii_case(&b) => continue,
            _ => return false,
        }
    }
}

pub fn is_tags(name: &str) -> bool {
    names_match(name, FIELD_NAME_TAGS)
}

pub fn is_map_block_key(name: &str) -> bool {
    names_match(name, FIELD_NAME_MAP_BLOCK_KEY)
}

/// Reserved fields are skipped during whole-struct conversion
pub fn is_reserved(name: &str) -> bool {
    is_tags(name) || is_map_block_key(name)
}

fn find_exact(target: &dyn Struct, name: &str) -> Option<&'static str> {
    target
        .field_names()
        .iter()
        .copied()
        .find(|field| *field == name && !is_reserved(field))
}

/// Resolves `source_field` of `source` to a field of `target`.
///
/// Rules are tried in order and the first hit wins:
///
/// 1. exact name
/// 2. same name ignoring case and `_`, unless `source` already has a field
///    named exactly like the candidate
/// 3. plural (or singular) form, unless `source` also has that form
/// 4. with the configured resource prefix stripped or prepended, resolved
///    again once with `recursing` set
pub fn resolve_field(
    options: &Options,
    source_field: &str,
    target: &dyn Struct,
    source: &dyn Struct,
    recursing: bool,
) -> Option<&'static str> {
    if let Some(name) = find_exact(target, source_field) {
        return Some(name);
    }

    let folded = fold(source_field);
    for &name in target.field_names() {
        if is_reserved(name) {
            continue;
        }
        if fold(name) == folded && !source.has_field(name) {
            tracing::trace!(source_field, target_field = name, "resolved ignoring case");
            return Some(name);
        }
    }

    if pluralize::is_singular(source_field) {
        let plural = pluralize::plural(source_field);
        if plural != source_field && !source.has_field(&plural) {
            if let Some(name) = find_exact(target, &plural) {
                tracing::trace!(source_field, target_field = name, "resolved by plural form");
                return Some(name);
            }
        }
    }
    if pluralize::is_plural(source_field) {
        let singular = pluralize::singular(source_field);
        if singular != source_field && !source.has_field(&singular) {
            if let Some(name) = find_exact(target, &singular) {
                tracing::trace!(source_field, target_field = name, "resolved by singular form");
                return Some(name);
            }
        }
    }

    if recursing {
        return None;
    }
    let prefix = options.resource_prefix()?;
    let candidate = match strip_prefix(source_field, &prefix) {
        Some(rest) => rest.to_string(),
        None => prepend_prefix(&prefix, source_field),
    };
    tracing::trace!(source_field, candidate = %candidate, "retrying with resource prefix");
    resolve_field(options, &candidate, target, source, true)
}

/// Removes `prefix` from the start of `name`, comparing loosely.
/// Returns `None` unless something is left after the prefix.
fn strip_prefix<'a>(name: &'a str, prefix: &str) -> Option<&'a str> {
    let mut wanted = prefix.chars().filter(|c| *c != '_').peekable();
    let mut rest = name;
    for (i, c) in name.char_indices() {
        if wanted.peek().is_none() {
            rest = &name[i..];
            break;
        }
        if c == '_' {
            continue;
        }
        match wanted.next() {
            Some(w) if w.eq_ignore_ascii_case(&c) => rest = "",
            _ => return None,
        }
    }
    if wanted.peek().is_some() {
        return None;
    }
    let rest = rest.trim_start_matches('_');
    (!rest.is_empty()).then_some(rest)
}

/// Prepends `prefix` in the naming style of `name`
fn prepend_prefix(prefix: &str, name: &str) -> String {
    if name.starts_with(|c: char| c.is_lowercase()) {
        format!("{}_{}", to_snake_case(prefix), name)
    } else {
        format!("{prefix}{name}")
    }
}

fn to_snake_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    let mut prev: Option<char> = None;
    for c in name.chars() {
        if c.is_uppercase() {
            if prev.is_some_and(|p| p.is_lowercase() || p.is_ascii_digit()) {
                out.push('_');
            }
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
        prev = Some(c);
    }
    out
}
