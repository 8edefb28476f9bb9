//! Shared naming helpers for Java sources.

use std::path::PathBuf;

/// Upper-case the first character (e.g., "customer" -> "Customer")
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

/// Lower-case the first character following JavaBeans rules.
///
/// When the first two characters are both upper case the name is returned
/// unchanged, so "URL" stays "URL" while "FooBar" becomes "fooBar".
pub fn decapitalize(s: &str) -> String {
    let mut chars = s.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    if let Some(second) = chars.clone().next()
        && first.is_uppercase()
        && second.is_uppercase()
    {
        return s.to_string();
    }
    first.to_lowercase().chain(chars).collect()
}

/// Join a package and a simple name; a blank package yields the bare name
pub fn qualify(package: &str, name: &str) -> String {
    if package.trim().is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", package, name)
    }
}

/// Directory path for a package (e.g., "com.example" -> "com/example")
pub fn package_path(package: &str) -> PathBuf {
    package
        .split('.')
        .filter(|segment| !segment.trim().is_empty())
        .collect()
}

/// Quote a string as a Java string literal
pub fn java_string_literal(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
