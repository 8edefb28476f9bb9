//! Marker entries: a bare annotation name or an inline table with arguments.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A marker attached to a class, method or annotation declaration.
///
/// ```toml
/// markers = [
///   "jakarta.persistence.Entity",
///   { type = "jakarta.persistence.Column", args = { nullable = false } },
/// ]
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum MarkerEntry {
    Name(String),
    Full {
        #[serde(rename = "type")]
        name: String,
        #[serde(default)]
        args: BTreeMap<String, MarkerArg>,
    },
}

impl MarkerEntry {
    /// Fully-qualified annotation name
    pub fn name(&self) -> &str {
        match self {
            MarkerEntry::Name(name) => name,
            MarkerEntry::Full { name, .. } => name,
        }
    }

    /// Configured arguments, empty for a bare name
    pub fn args(&self) -> impl Iterator<Item = (&String, &MarkerArg)> {
        let args = match self {
            MarkerEntry::Name(_) => None,
            MarkerEntry::Full { args, .. } => Some(args.iter()),
        };
        args.into_iter().flatten()
    }

    /// A string argument by key
    pub fn str_arg(&self, key: &str) -> Option<&str> {
        match self {
            MarkerEntry::Full { args, .. } => match args.get(key) {
                Some(MarkerArg::Str(s)) => Some(s),
                _ => None,
            },
            MarkerEntry::Name(_) => None,
        }
    }
}

/// An annotation argument value.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum MarkerArg {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<MarkerArg>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Holder {
        markers: Vec<MarkerEntry>,
    }

    #[test]
    fn test_bare_and_full_entries() {
        let holder: Holder = toml::from_str(
            r#"markers = [
                "jakarta.persistence.Entity",
                { type = "jakarta.persistence.Column", args = { nullable = false, length = 40 } },
            ]"#,
        )
        .unwrap();

        assert_eq!(holder.markers[0].name(), "jakarta.persistence.Entity");
        assert_eq!(holder.markers[0].args().count(), 0);

        let column = &holder.markers[1];
        assert_eq!(column.name(), "jakarta.persistence.Column");
        let args: Vec<_> = column.args().collect();
        assert_eq!(args.len(), 2);
        assert_eq!(args[0], (&"length".to_string(), &MarkerArg::Int(40)));
        assert_eq!(args[1], (&"nullable".to_string(), &MarkerArg::Bool(false)));
    }

    #[test]
    fn test_full_entry_without_args() {
        let holder: Holder =
            toml::from_str(r#"markers = [{ type = "jakarta.persistence.Id" }]"#).unwrap();
        assert_eq!(holder.markers[0].name(), "jakarta.persistence.Id");
        assert_eq!(holder.markers[0].args().count(), 0);
    }

    #[test]
    fn test_list_and_string_args() {
        let holder: Holder = toml::from_str(
            r#"markers = [{ type = "com.example.Codegen", args = { crud = "Repo", groups = ["a", "b"], ratio = 0.5 } }]"#,
        )
        .unwrap();

        let marker = &holder.markers[0];
        assert_eq!(marker.str_arg("crud"), Some("Repo"));
        assert_eq!(marker.str_arg("groups"), None);
        let args: Vec<_> = marker.args().map(|(_, v)| v.clone()).collect();
        assert!(args.contains(&MarkerArg::Float(0.5)));
        assert!(args.contains(&MarkerArg::List(vec![
            MarkerArg::Str("a".into()),
            MarkerArg::Str("b".into())
        ])));
    }
}
