//! The parsed form of a descriptor.

use std::collections::BTreeMap;

use serde::Serialize;

/// Fields recognized on `Key: value` lines.
///
/// Keys are matched case-sensitively. Anything else (`Libs.private`,
/// `URL`, `Conflicts`, ...) is ignored by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Description,
    Version,
    Libs,
    Cflags,
    Requires,
}

impl Field {
    /// Every recognized key with its field.
    pub const RECOGNIZED: &'static [(&'static str, Field)] = &[
        ("Name", Field::Name),
        ("Description", Field::Description),
        ("Version", Field::Version),
        ("Libs", Field::Libs),
        ("Cflags", Field::Cflags),
        ("Requires", Field::Requires),
    ];

    /// Look up a field by its key.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::RECOGNIZED
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, field)| *field)
    }

    /// The key as written in a descriptor.
    pub fn key(&self) -> &'static str {
        Self::RECOGNIZED
            .iter()
            .find(|(_, field)| field == self)
            .map(|(k, _)| *k)
            .unwrap_or_default()
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// A parsed descriptor.
///
/// Unset text fields are empty and an unset `Requires` is an empty list.
/// `libs` and `cflags` hold the space-separated flag string as written,
/// fully expanded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Descriptor {
    pub name: String,
    pub description: String,
    pub version: String,
    pub libs: String,
    pub cflags: String,
    pub requires: Vec<String>,
    pub variables: BTreeMap<String, String>,
}

impl Descriptor {
    /// Expanded value of a variable, if defined.
    pub fn variable(&self, name: &str) -> Option<&str> {
        self.variables.get(name).map(String::as_str)
    }

    /// `libs` split on whitespace.
    pub fn libs_tokens(&self) -> Vec<&str> {
        self.libs.split_whitespace().collect()
    }

    /// `cflags` split on whitespace.
    pub fn cflags_tokens(&self) -> Vec<&str> {
        self.cflags.split_whitespace().collect()
    }

    /// Text of a single-valued field. `Requires` is returned comma-joined.
    pub fn field(&self, field: Field) -> String {
        match field {
            Field::Name => self.name.clone(),
            Field::Description => self.description.clone(),
            Field::Version => self.version.clone(),
            Field::Libs => self.libs.clone(),
            Field::Cflags => self.cflags.clone(),
            Field::Requires => self.requires.join(", "),
        }
    }

    pub(crate) fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Description => self.description = value,
            Field::Version => self.version = value,
            Field::Libs => self.libs = value,
            Field::Cflags => self.cflags = value,
            Field::Requires if value.trim().is_empty() => self.requires.clear(),
            Field::Requires => {
                self.requires = value.split(',').map(|s| s.trim().to_string()).collect();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_key_matches_recognized_keys() {
        assert_eq!(Field::from_key("Name"), Some(Field::Name));
        assert_eq!(Field::from_key("Cflags"), Some(Field::Cflags));
        assert_eq!(Field::from_key("Requires"), Some(Field::Requires));
    }

    #[test]
    fn from_key_is_case_sensitive() {
        assert_eq!(Field::from_key("name"), None);
        assert_eq!(Field::from_key("CFLAGS"), None);
    }

    #[test]
    fn from_key_ignores_unknown_keys() {
        assert_eq!(Field::from_key("Libs.private"), None);
        assert_eq!(Field::from_key("URL"), None);
    }

    #[test]
    fn key_round_trips_through_display() {
        for (key, field) in Field::RECOGNIZED {
            assert_eq!(field.to_string(), *key);
        }
    }

    #[test]
    fn set_requires_splits_and_trims() {
        let mut pkg = Descriptor::default();
        pkg.set(Field::Requires, " glib-2.0 , gobject-2.0,zlib ".into());
        assert_eq!(pkg.requires, vec!["glib-2.0", "gobject-2.0", "zlib"]);
        assert_eq!(pkg.field(Field::Requires), "glib-2.0, gobject-2.0, zlib");
    }

    #[test]
    fn set_requires_keeps_inner_empty_pieces() {
        let mut pkg = Descriptor::default();
        pkg.set(Field::Requires, "a,,b".into());
        assert_eq!(pkg.requires, vec!["a", "", "b"]);
    }

    #[test]
    fn set_blank_requires_clears_earlier_value() {
        let mut pkg = Descriptor::default();
        pkg.set(Field::Requires, "zlib".into());
        pkg.set(Field::Requires, "   ".into());
        assert!(pkg.requires.is_empty());
    }

    #[test]
    fn set_blank_requires_is_empty() {
        let mut pkg = Descriptor::default();
        pkg.set(Field::Requires, String::new());
        assert!(pkg.requires.is_empty());
    }

    #[test]
    fn tokens_reconstitute_flag_string() {
        let pkg = Descriptor {
            libs: "-L/opt/lib  -lfoo".into(),
            cflags: "-I/opt/include".into(),
            ..Default::default()
        };
        assert_eq!(pkg.libs_tokens(), vec!["-L/opt/lib", "-lfoo"]);
        assert_eq!(pkg.libs_tokens().join(" "), "-L/opt/lib -lfoo");
        assert_eq!(pkg.cflags_tokens(), vec!["-I/opt/include"]);
    }

    #[test]
    fn variable_lookup() {
        let mut pkg = Descriptor::default();
        pkg.variables.insert("prefix".into(), "/usr".into());
        assert_eq!(pkg.variable("prefix"), Some("/usr"));
        assert_eq!(pkg.variable("libdir"), None);
    }
}
