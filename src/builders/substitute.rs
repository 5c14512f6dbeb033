use anyhow::Result;
use serde::Deserialize;
use serde::de::{Deserializer, MapAccess, Visitor};
use std::fmt;

/// An ordered list of literal-text replacements applied to every candidate
/// line before export extraction.
///
/// Entries are applied sequentially in order, each as a replace-all, so the
/// output of an earlier replacement can in principle be re-matched by a later
/// key. That sequential order is part of the contract. [`Replacements::validate`]
/// rejects mappings where a replacement value also appears as a key, which
/// would make the outcome depend on entry order in surprising ways.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Replacements {
    entries: Vec<(String, String)>,
}

impl Replacements {
    pub fn new(entries: Vec<(String, String)>) -> Self {
        Self { entries }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Reject mappings where a replacement value is also used as a key.
    ///
    /// Called by the engine before any file I/O happens.
    pub fn validate(&self) -> Result<()> {
        for (_, value) in &self.entries {
            if self.entries.iter().any(|(key, _)| key == value) {
                anyhow::bail!(
                    "Replacement value {value:?} is also used as a replacement key"
                );
            }
        }
        Ok(())
    }

    /// Apply every entry to `line` in order, each as a replace-all.
    pub fn apply(&self, line: &str) -> String {
        let mut text = line.to_string();
        for (key, value) in &self.entries {
            text = text.replace(key, value);
        }
        text
    }
}

/// Deserialized from a map (a TOML table) rather than a sequence, keeping
/// the entries in document order.
impl<'de> Deserialize<'de> for Replacements {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct EntryVisitor;

        impl<'de> Visitor<'de> for EntryVisitor {
            type Value = Replacements;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a table mapping literal text to its replacement")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::new();
                while let Some(entry) = map.next_entry::<String, String>()? {
                    entries.push(entry);
                }
                Ok(Replacements { entries })
            }
        }

        deserializer.deserialize_map(EntryVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn replacements(entries: &[(&str, &str)]) -> Replacements {
        Replacements::new(
            entries
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn test_single_replacement() {
        let mapping = replacements(&[("some", "other")]);
        assert_eq!(mapping.apply("Here is some text"), "Here is other text");
    }

    #[test]
    fn test_replacement_is_idempotent_without_key_value_overlap() {
        let mapping = replacements(&[("some", "other")]);
        let once = mapping.apply("Here is some text");
        assert_eq!(mapping.apply(&once), once);
    }

    #[test]
    fn test_multiple_replacements() {
        let mapping = replacements(&[("some", "other"), ("more", "additional")]);
        assert_eq!(
            mapping.apply("Some text, some more text"),
            "Some text, other additional text"
        );
    }

    #[test]
    fn test_sequential_application_lets_later_keys_rematch() {
        // Guaranteed contract: entries are applied in order, so a later key
        // can match text produced by an earlier replacement.
        let mapping = replacements(&[("this", "that"), ("that", "this")]);
        assert_eq!(
            mapping.apply("Swap this and that with that and this"),
            "Swap this and this with this and this"
        );
    }

    #[test]
    fn test_validate_rejects_value_used_as_key() {
        let mapping = replacements(&[("this", "that"), ("that", "this")]);
        assert!(mapping.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_disjoint_mapping() {
        let mapping = replacements(&[("$(abc)", "5"), ("$(def)", "9")]);
        assert!(mapping.validate().is_ok());
    }

    #[test]
    fn test_deserializes_from_toml_table_in_document_order() {
        let mapping: Replacements =
            toml::from_str("\"$(pwd)\" = \"/repo\"\n\"$PYTHONPATH:\" = \"\"\n").unwrap();
        assert_eq!(
            mapping,
            replacements(&[("$(pwd)", "/repo"), ("$PYTHONPATH:", "")])
        );
    }
}
