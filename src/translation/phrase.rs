/*!
 * Phrase substitution translation.
 *
 * A `PhraseDictionary` maps literal source-language phrases to literal
 * target-language phrases. Translation replaces every occurrence of every
 * key, visiting keys from the longest to the shortest so that a long phrase
 * is substituted before any shorter phrase contained in it.
 *
 * Replacement passes are sequential: each pass runs over the text produced by
 * the previous one, so a value inserted by a longer key can be rewritten by a
 * later, shorter key whose text it happens to contain.
 */

use std::collections::HashMap;
use std::path::Path;

use log::warn;

use crate::errors::DictionaryError;

/// Immutable phrase mapping with keys kept in substitution order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhraseDictionary {
    /// (source, target) pairs, longest source first
    entries: Vec<(String, String)>,
}

impl PhraseDictionary {
    /// Create an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a dictionary from (source, target) pairs.
    ///
    /// A later pair with the same source phrase replaces the earlier one.
    /// Empty source phrases are discarded.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut map: HashMap<String, String> = HashMap::new();
        for (source, target) in pairs {
            let source = source.into();
            if source.is_empty() {
                warn!("Ignoring empty source phrase in dictionary");
                continue;
            }
            map.insert(source, target.into());
        }

        let mut entries: Vec<(String, String)> = map.into_iter().collect();
        // Longest first; ties broken lexicographically so output is reproducible
        entries.sort_by(|(a, _), (b, _)| {
            b.chars()
                .count()
                .cmp(&a.chars().count())
                .then_with(|| a.cmp(b))
        });

        Self { entries }
    }

    /// Parse a dictionary from a JSON object of string pairs.
    pub fn from_json_str(json: &str) -> Result<Self, DictionaryError> {
        let pairs: serde_json::Map<String, serde_json::Value> = serde_json::from_str(json)?;
        let mut entries = Vec::with_capacity(pairs.len());
        for (source, target) in pairs {
            let target: String = serde_json::from_value(target)?;
            entries.push((source, target));
        }
        Ok(Self::from_pairs(entries))
    }

    /// Load a dictionary from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, DictionaryError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| DictionaryError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Number of phrase pairs.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the dictionary has no phrase pairs.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up the target phrase for an exact source phrase.
    pub fn get(&self, source: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == source)
            .map(|(_, value)| value.as_str())
    }

    /// Iterate over (source, target) pairs in substitution order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// Translate `text` with this dictionary.
    pub fn translate(&self, text: &str) -> String {
        translate(text, self)
    }
}

/// Replace every dictionary phrase found in `text`, longest phrase first.
pub fn translate(text: &str, dictionary: &PhraseDictionary) -> String {
    let mut result = text.to_string();
    for (source, target) in dictionary.iter() {
        if result.contains(source) {
            result = result.replace(source, target);
        }
    }
    result
}
