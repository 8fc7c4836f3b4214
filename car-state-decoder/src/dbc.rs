//! DBC-backed enumeration table loader
//!
//! Vehicle profiles name their enumeration sets after signals in the
//! platform's DBC description table; the VAL_ entries there carry the
//! ordinal-to-label mappings. This module loads a DBC file with the
//! can-dbc crate and exposes those value tables through [`EnumSource`].

use crate::enums::{EnumSource, EnumTable};
use crate::types::{ConfigError, Result};
use std::path::Path;

/// [`EnumSource`] over a parsed DBC description table
pub struct DbcEnumSource {
    dbc: can_dbc::DBC,
}

impl DbcEnumSource {
    /// Parse a DBC file from disk
    pub fn from_file(path: &Path) -> Result<Self> {
        log::info!("Loading DBC file: {:?}", path);

        // Read the DBC file as bytes first (handle non-UTF8 encodings)
        let bytes = std::fs::read(path).map_err(|e| {
            ConfigError::DbcParseError(format!("Failed to read file {:?}: {}", path, e))
        })?;

        Self::from_bytes(&bytes)
    }

    /// Parse DBC content already in memory
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        // Try UTF-8 first, then fall back to Latin-1 encoding
        let content = match std::str::from_utf8(bytes) {
            Ok(s) => s.to_string(),
            Err(_) => {
                log::warn!("DBC content is not UTF-8, trying Latin-1 encoding");
                bytes.iter().map(|&b| b as char).collect()
            }
        };

        let dbc = can_dbc::DBC::from_slice(content.as_bytes()).map_err(|e| {
            ConfigError::DbcParseError(format!("Failed to parse DBC content: {:?}", e))
        })?;

        Ok(Self { dbc })
    }
}

impl EnumSource for DbcEnumSource {
    fn enum_table(&self, message: &str, signal: &str) -> Result<EnumTable> {
        let missing = || ConfigError::MissingEnumTable {
            message: message.to_string(),
            signal: signal.to_string(),
        };

        let dbc_msg = self
            .dbc
            .messages()
            .iter()
            .find(|m| m.message_name() == message)
            .ok_or_else(missing)?;

        let descriptions = self
            .dbc
            .value_descriptions_for_signal(dbc_msg.message_id().clone(), signal)
            .ok_or_else(missing)?;

        let table: EnumTable = descriptions
            .iter()
            .map(|desc| (*desc.a() as i64, desc.b().clone()))
            .collect();

        log::debug!(
            "loaded {} labels for {}::{} from DBC",
            table.len(),
            message,
            signal
        );

        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const DBC_CONTENT: &str = r#"
VERSION ""

NS_ :
    NS_DESC_
    CM_
    BA_DEF_
    BA_
    VAL_
    CAT_DEF_
    CAT_
    FILTER
    BA_DEF_DEF_
    EV_DATA_
    ENVVAR_DATA_
    SGTYPE_
    SGTYPE_VAL_
    BA_DEF_SGTYPE_
    BA_SGTYPE_
    SIG_TYPE_REF_
    VAL_TABLE_
    SIG_GROUP_
    SIG_VALTYPE_
    SIGTYPE_VALTYPE_
    BO_TX_BU_
    BA_DEF_REL_
    BA_REL_
    BA_SGTYPE_REL_
    SG_MUL_VAL_

BS_:

BU_: SBW GW

BO_ 258 SBW_ROT1: 8 SBW
 SG_ DrvRqShftROT : 0|4@1+ (1,0) [0|15] "" GW
 SG_ ShiftRawPos : 4|4@1+ (1,0) [0|15] "" GW

VAL_ 258 DrvRqShftROT 0 "PARK" 1 "REVERSE" 2 "NEUTRAL" 3 "DRIVE" ;
"#;

    #[test]
    fn test_load_value_table_from_dbc() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(DBC_CONTENT.as_bytes()).unwrap();
        temp_file.flush().unwrap();

        let source = DbcEnumSource::from_file(temp_file.path()).unwrap();
        let table = source.enum_table("SBW_ROT1", "DrvRqShftROT").unwrap();

        assert_eq!(table.len(), 4);
        assert_eq!(table.resolve(0), Some("PARK"));
        assert_eq!(table.resolve(3), Some("DRIVE"));
        assert_eq!(table.resolve(9), None);
    }

    #[test]
    fn test_signal_without_value_table_is_missing() {
        let source = DbcEnumSource::from_bytes(DBC_CONTENT.as_bytes()).unwrap();

        let result = source.enum_table("SBW_ROT1", "ShiftRawPos");
        assert!(matches!(
            result,
            Err(ConfigError::MissingEnumTable { .. })
        ));

        let result = source.enum_table("NO_SUCH_MSG", "DrvRqShftROT");
        assert!(matches!(
            result,
            Err(ConfigError::MissingEnumTable { .. })
        ));
    }

    #[test]
    fn test_malformed_dbc_is_parse_error() {
        let result = DbcEnumSource::from_bytes(b"BO_ not a dbc file");
        assert!(matches!(result, Err(ConfigError::DbcParseError(_))));
    }
}
