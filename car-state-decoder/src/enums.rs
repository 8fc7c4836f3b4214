//! Enumeration tables and their loader boundary
//!
//! Enumerated signals carry raw integer ordinals on the bus; the
//! description table names each ordinal. An [`EnumTable`] is one such
//! ordinal-to-label mapping, loaded once per profile and read-only
//! afterwards. [`EnumSource`] is the loader capability - implemented over
//! a DBC file in [`crate::dbc`] and over plain maps for synthetic
//! profiles and tests.

use crate::types::Result;
use std::collections::HashMap;

/// Ordinal-to-label mapping for one enumerated signal
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnumTable {
    labels: HashMap<i64, String>,
}

impl EnumTable {
    pub fn new(labels: HashMap<i64, String>) -> Self {
        Self { labels }
    }

    /// Look up the label for a raw ordinal
    ///
    /// An ordinal outside the known set returns `None` rather than an
    /// error - a failing sensor must not take down the decode cycle.
    pub fn resolve(&self, ordinal: i64) -> Option<&str> {
        self.labels.get(&ordinal).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl FromIterator<(i64, String)> for EnumTable {
    fn from_iter<T: IntoIterator<Item = (i64, String)>>(iter: T) -> Self {
        Self {
            labels: iter.into_iter().collect(),
        }
    }
}

/// Loader boundary for named enumeration tables
///
/// Failure to locate the table named by a profile is a construction-time
/// error; unresolved ordinals at decode time are not.
pub trait EnumSource {
    /// Load the enumeration table for `signal` within `message`
    fn enum_table(&self, message: &str, signal: &str) -> Result<EnumTable>;
}

/// In-memory [`EnumSource`] backed by a plain map
///
/// Used by tests and by profiles whose description tables are provided
/// programmatically rather than parsed from a file.
#[derive(Debug, Clone, Default)]
pub struct MapEnumSource {
    tables: HashMap<(String, String), EnumTable>,
}

impl MapEnumSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the table for one enumerated signal
    pub fn insert(
        &mut self,
        message: impl Into<String>,
        signal: impl Into<String>,
        table: EnumTable,
    ) {
        self.tables.insert((message.into(), signal.into()), table);
    }
}

impl EnumSource for MapEnumSource {
    fn enum_table(&self, message: &str, signal: &str) -> Result<EnumTable> {
        self.tables
            .get(&(message.to_string(), signal.to_string()))
            .cloned()
            .ok_or_else(|| crate::types::ConfigError::MissingEnumTable {
                message: message.to_string(),
                signal: signal.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ConfigError;

    fn gear_table() -> EnumTable {
        [
            (0, "PARK".to_string()),
            (1, "REVERSE".to_string()),
            (2, "NEUTRAL".to_string()),
            (3, "DRIVE".to_string()),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_resolve_known_ordinal() {
        let table = gear_table();
        assert_eq!(table.resolve(0), Some("PARK"));
        assert_eq!(table.resolve(3), Some("DRIVE"));
    }

    #[test]
    fn test_resolve_unknown_ordinal_is_none() {
        let table = gear_table();
        assert_eq!(table.resolve(99), None);
        assert_eq!(table.resolve(-1), None);
    }

    #[test]
    fn test_map_source_lookup() {
        let mut source = MapEnumSource::new();
        source.insert("SBW_ROT1", "DrvRqShftROT", gear_table());

        let table = source.enum_table("SBW_ROT1", "DrvRqShftROT").unwrap();
        assert_eq!(table.len(), 4);

        let missing = source.enum_table("SBW_ROT1", "NO_SUCH_SIGNAL");
        assert!(matches!(
            missing,
            Err(ConfigError::MissingEnumTable { .. })
        ));
    }
}
