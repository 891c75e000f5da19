//! Naming conventions that tie constant names (`ArtistFragment`), method
//! names (`artist_fragment`) and file stems (`artist_fragment.graphql`)
//! together.

use heck::ToSnakeCase;
use heck::ToUpperCamelCase;

/// Suffix that marks a constant name as naming a GraphQL fragment.
pub const FRAGMENT_SUFFIX: &str = "Fragment";

/// Separator placed between a namespace and a document name when naming the
/// document's primary definition (e.g. `Metaphysics__Artist`).
pub const QUALIFIED_NAME_SEPARATOR: &str = "__";

pub fn to_snake_case(name: &str) -> String {
    name.to_snake_case()
}

pub fn to_pascal_case(name: &str) -> String {
    name.to_upper_camel_case()
}

/// A constant name starts with an ASCII uppercase letter and continues with
/// ASCII alphanumerics only.
pub fn is_constant_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_uppercase() =>
            chars.all(|c| c.is_ascii_alphanumeric()),
        _ => false,
    }
}

/// A method name starts with an ASCII lowercase letter and continues with
/// ASCII lowercase letters, digits or `_`.
pub fn is_method_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_lowercase() =>
            chars.all(|c| {
                c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_'
            }),
        _ => false,
    }
}

pub fn is_fragment_constant_name(name: &str) -> bool {
    name.ends_with(FRAGMENT_SUFFIX)
}

pub fn is_fragment_method_name(name: &str) -> bool {
    name == "fragment" || name.ends_with("_fragment")
}

pub fn qualified_name(namespace: &str, name: &str) -> String {
    format!("{namespace}{QUALIFIED_NAME_SEPARATOR}{name}")
}

/// Maps a method name onto the constant name it resolves through, provided
/// the conversion is lossless (converting the constant name back yields the
/// original method name).
pub fn constant_name_for_method(method_name: &str) -> Option<String> {
    if !is_method_name(method_name) {
        return None;
    }
    let constant_name = to_pascal_case(method_name);
    (is_constant_name(&constant_name)
        && to_snake_case(&constant_name) == method_name)
        .then_some(constant_name)
}
